//! Credential resolution.
//!
//! The bot authenticates with a single opaque token, surfaced to child
//! processes as the `MATHSPROOFBOT_AUTH` environment variable. Sources are
//! tried in order: an explicit value (flag or environment), the credential
//! file configured in `.mathsproofbot.toml` (the runtime-provisioned key
//! file in production), then the default key file under the home directory
//! (the development source written by `auth set`).
//!
//! A source that exists but is empty is ignored with a warning rather than
//! treated as an error; only consumers that actually need the credential
//! decide whether its absence is fatal.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::core::config::Config;
use crate::core::constants;
use crate::error::{CredentialError, Result};

/// Where a credential came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Passed explicitly via flag or environment variable.
    Explicit,
    /// Read from a key file.
    File(PathBuf),
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Explicit => write!(f, "{}", constants::AUTH_ENV),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A resolved credential. The value is zeroized on drop and redacted from
/// debug output.
pub struct Credential {
    value: Zeroizing<String>,
    source: Source,
}

impl Credential {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn source(&self) -> &Source {
        &self.source
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("value", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}

/// Resolve the credential from the first non-empty source.
///
/// Returns `Ok(None)` when no source yields a value; missing credentials
/// are not an error at resolution time.
///
/// # Errors
///
/// Returns `CredentialError::Unreadable` if a key file exists but cannot
/// be read.
pub fn resolve(explicit: Option<String>, config: &Config) -> Result<Option<Credential>> {
    if let Some(value) = explicit {
        let value = value.trim().to_string();
        if value.is_empty() {
            warn!("explicit credential is empty; ignoring");
        } else {
            debug!("using explicit credential");
            return Ok(Some(Credential {
                value: Zeroizing::new(value),
                source: Source::Explicit,
            }));
        }
    }

    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Some(path) = &config.auth.credential_file {
        if path.exists() {
            candidates.push(path.clone());
        } else {
            warn!(path = %path.display(), "configured credential file not found");
        }
    }
    if let Some(path) = default_key_file() {
        if path.exists() {
            candidates.push(path);
        }
    }

    for path in candidates {
        match read_key_file(&path)? {
            Some(credential) => return Ok(Some(credential)),
            None => warn!(path = %path.display(), "credential file is empty; ignoring"),
        }
    }

    Ok(None)
}

/// The default key file, `~/.mathsproofbot/auth.key`.
pub fn default_key_file() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(constants::KEY_DIR).join(constants::KEY_FILE))
}

/// Read a key file, trimming the trailing newline.
///
/// Returns `Ok(None)` for an empty file.
fn read_key_file(path: &Path) -> Result<Option<Credential>> {
    let contents = std::fs::read_to_string(path).map_err(|source| CredentialError::Unreadable {
        path: path.display().to_string(),
        source,
    })?;

    check_permissions(path);

    let value = contents.trim_end_matches(&['\n', '\r'][..]).to_string();
    if value.is_empty() {
        return Ok(None);
    }

    debug!(path = %path.display(), "credential loaded from key file");
    Ok(Some(Credential {
        value: Zeroizing::new(value),
        source: Source::File(path.to_path_buf()),
    }))
}

/// Warn when a key file is readable by group or world.
#[cfg(unix)]
fn check_permissions(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    if let Ok(metadata) = std::fs::metadata(path) {
        let mode = metadata.permissions().mode() & 0o777;
        if mode & 0o077 != 0 {
            warn!(
                path = %path.display(),
                mode = format!("{mode:o}"),
                "credential file is readable by others; expected 600"
            );
        }
    }
}

#[cfg(not(unix))]
fn check_permissions(_path: &Path) {}

/// Store a credential in the default key file, creating the key directory
/// as needed. The file is written with owner-only permissions.
pub fn store(value: &str) -> Result<PathBuf> {
    let path = default_key_file().ok_or_else(|| {
        crate::error::Error::Other("unable to determine home directory".to_string())
    })?;
    store_at(&path, value)?;
    Ok(path)
}

/// Store a credential at an explicit path.
pub fn store_at(path: &Path, value: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(path, format!("{value}\n"))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_with_file(path: &Path) -> Config {
        let mut config = Config::default();
        config.auth.credential_file = Some(path.to_path_buf());
        config
    }

    #[test]
    fn test_explicit_wins() {
        let tmp = TempDir::new().unwrap();
        let key_path = tmp.path().join("auth.key");
        store_at(&key_path, "from-file").unwrap();

        let config = config_with_file(&key_path);
        let credential = resolve(Some("from-flag".to_string()), &config)
            .unwrap()
            .unwrap();

        assert_eq!(credential.value(), "from-flag");
        assert_eq!(credential.source(), &Source::Explicit);
    }

    #[test]
    fn test_empty_explicit_falls_through_to_file() {
        let tmp = TempDir::new().unwrap();
        let key_path = tmp.path().join("auth.key");
        store_at(&key_path, "token-123").unwrap();

        let config = config_with_file(&key_path);
        let credential = resolve(Some("   ".to_string()), &config).unwrap().unwrap();

        assert_eq!(credential.value(), "token-123");
        assert_eq!(credential.source(), &Source::File(key_path));
    }

    #[test]
    fn test_file_newline_trimmed() {
        let tmp = TempDir::new().unwrap();
        let key_path = tmp.path().join("auth.key");
        std::fs::write(&key_path, "token-xyz\n").unwrap();

        let config = config_with_file(&key_path);
        let credential = resolve(None, &config).unwrap().unwrap();
        assert_eq!(credential.value(), "token-xyz");
    }

    #[test]
    fn test_empty_file_yields_none() {
        let tmp = TempDir::new().unwrap();
        let key_path = tmp.path().join("auth.key");
        std::fs::write(&key_path, "\n").unwrap();

        let config = config_with_file(&key_path);
        // An empty source is skipped, not an error.
        assert!(resolve(None, &config).unwrap().is_none());
    }

    #[test]
    fn test_missing_configured_file_is_not_an_error() {
        let tmp = TempDir::new().unwrap();
        let config = config_with_file(&tmp.path().join("absent.key"));
        assert!(resolve(None, &config).unwrap().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_store_sets_owner_only_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let key_path = tmp.path().join("keys").join("auth.key");
        store_at(&key_path, "secret").unwrap();

        let mode = std::fs::metadata(&key_path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
    }

    #[test]
    fn test_debug_redacts_value() {
        let tmp = TempDir::new().unwrap();
        let key_path = tmp.path().join("auth.key");
        store_at(&key_path, "super-secret").unwrap();

        let config = config_with_file(&key_path);
        let credential = resolve(None, &config).unwrap().unwrap();
        let debugged = format!("{credential:?}");
        assert!(!debugged.contains("super-secret"));
        assert!(debugged.contains("<redacted>"));
    }
}
