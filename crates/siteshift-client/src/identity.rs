//! Client-local identity
//!
//! Each collaborator keeps a `{name, id}` record in a small JSON file, the
//! id generated once and reused across sessions. The server never sees or
//! validates it beyond storing it as an assignee string.

use crate::error::ClientError;
use crate::now_millis;
use rand::Rng;
use siteshift_model::User;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_SUFFIX_LEN: usize = 5;

/// Generate an opaque user id: millisecond timestamp plus a short random
/// base36 suffix
#[must_use]
pub fn generate_user_id() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect();
    format!("{}-{suffix}", now_millis())
}

/// On-disk profile holding the local [`User`]
#[derive(Debug, Clone)]
pub struct UserProfile {
    path: PathBuf,
}

impl UserProfile {
    /// Profile stored at `path`
    #[inline]
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the profile file
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored user, `None` if no profile exists yet
    pub fn load(&self) -> Result<Option<User>, ClientError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    /// Persist `user`, creating parent directories as needed
    pub fn save(&self, user: &User) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, serde_json::to_vec_pretty(user)?)?;
        Ok(())
    }

    /// Set the display name, keeping the existing id when one is stored
    /// and generating a fresh id otherwise
    pub fn login(&self, name: &str) -> Result<User, ClientError> {
        let user = match self.load()? {
            Some(existing) => User::new(name, existing.id),
            None => User::new(name, generate_user_id()),
        };
        self.save(&user)?;
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn profile_in(dir: &TempDir) -> UserProfile {
        UserProfile::new(dir.path().join("user.json"))
    }

    #[test]
    fn generated_ids_have_timestamp_and_suffix() {
        let id = generate_user_id();
        let (stamp, suffix) = id.split_once('-').unwrap();
        assert!(stamp.parse::<i64>().is_ok());
        assert_eq!(suffix.len(), ID_SUFFIX_LEN);
        assert!(suffix.bytes().all(|b| ID_ALPHABET.contains(&b)));
    }

    #[test]
    fn missing_profile_loads_as_none() {
        let dir = TempDir::new().unwrap();
        assert_eq!(profile_in(&dir).load().unwrap(), None);
    }

    #[test]
    fn login_persists_and_reloads() {
        let dir = TempDir::new().unwrap();
        let profile = profile_in(&dir);

        let user = profile.login("Ada").unwrap();
        let reloaded = profile.load().unwrap().unwrap();
        assert_eq!(reloaded, user);
    }

    #[test]
    fn renaming_keeps_the_id() {
        let dir = TempDir::new().unwrap();
        let profile = profile_in(&dir);

        let first = profile.login("Ada").unwrap();
        let renamed = profile.login("Ada Lovelace").unwrap();
        assert_eq!(renamed.id, first.id);
        assert_eq!(renamed.name, "Ada Lovelace");
    }

    #[test]
    fn parent_directories_are_created() {
        let dir = TempDir::new().unwrap();
        let profile = UserProfile::new(dir.path().join("nested").join("user.json"));
        profile.login("Ada").unwrap();
        assert!(profile.path().exists());
    }
}
