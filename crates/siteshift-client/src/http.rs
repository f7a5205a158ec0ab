//! HTTP backend over the checklist server
//!
//! Thin reqwest client for the two resources. A non-success status is an
//! error regardless of body; the caller decides how to surface it.

use crate::backend::ChecklistBackend;
use crate::error::ClientError;
use async_trait::async_trait;
use reqwest::Response;
use siteshift_model::{TodoMap, UrlSettings};

/// Backend talking to a running siteshift server
#[derive(Debug, Clone)]
pub struct HttpBackend {
    base: String,
    client: reqwest::Client,
}

impl HttpBackend {
    /// Create a backend against `base`, e.g. `http://127.0.0.1:8080`
    #[inline]
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, resource: &str) -> String {
        format!("{}/{resource}", self.base)
    }

    fn check(resource: &'static str, response: &Response) -> Result<(), ClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ClientError::Rejected {
                resource,
                status: status.as_u16(),
            })
        }
    }
}

#[async_trait]
impl ChecklistBackend for HttpBackend {
    async fn get_todos(&self) -> Result<TodoMap, ClientError> {
        let response = self.client.get(self.endpoint("todos")).send().await?;
        Self::check("todos", &response)?;
        Ok(response.json().await?)
    }

    async fn put_todos(&self, todos: &TodoMap) -> Result<(), ClientError> {
        let response = self
            .client
            .put(self.endpoint("todos"))
            .json(todos)
            .send()
            .await?;
        Self::check("todos", &response)
    }

    async fn get_settings(&self) -> Result<UrlSettings, ClientError> {
        let response = self.client.get(self.endpoint("settings")).send().await?;
        Self::check("settings", &response)?;
        Ok(response.json().await?)
    }

    async fn put_settings(&self, settings: &UrlSettings) -> Result<(), ClientError> {
        let response = self
            .client
            .put(self.endpoint("settings"))
            .json(settings)
            .send()
            .await?;
        Self::check("settings", &response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let backend = HttpBackend::new("http://127.0.0.1:8080/");
        assert_eq!(backend.endpoint("todos"), "http://127.0.0.1:8080/todos");
    }
}
