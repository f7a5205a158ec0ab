//! Error types for the client crate
//!
//! Every failure surfaces as a message for the user to read before
//! retrying the action manually; nothing here is retried automatically and
//! nothing is fatal to the process.

use siteshift_store::StoreError;

/// Client-side failure
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP transport failed before a response arrived
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("{resource} request returned status {status}")]
    Rejected {
        /// Which resource was being exchanged
        resource: &'static str,
        /// HTTP status code of the response
        status: u16,
    },

    /// Local-mode persistence failed
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Profile or checklist file could not be read or written
    #[error("file io failed: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON payload did not match the expected shape
    #[error("malformed payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// The checklist file did not parse as TOML
    #[error("checklist file failed to parse: {0}")]
    ChecklistParse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_message_names_the_resource() {
        let err = ClientError::Rejected {
            resource: "todos",
            status: 500,
        };
        assert_eq!(err.to_string(), "todos request returned status 500");
    }
}
