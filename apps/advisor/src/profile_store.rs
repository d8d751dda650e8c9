use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::info;

use crate::errors::AdvisorError;
use crate::models::UserProfile;

/// Writes the profile as pretty JSON via a temp file in the same directory,
/// renamed into place. Returns the path written.
pub fn save_profile(path: &Path, profile: &UserProfile) -> Result<PathBuf, AdvisorError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let json = serde_json::to_string_pretty(profile)?;
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(json.as_bytes())?;
    tmp.persist(path).map_err(|e| AdvisorError::Io(e.error))?;

    info!("Profile for {} saved to {}", profile.name, path.display());
    Ok(path.to_path_buf())
}

/// Reads a profile. A missing file is `Io`; unparsable content is `MalformedProfile`.
pub fn load_profile(path: &Path) -> Result<UserProfile, AdvisorError> {
    let bytes = fs::read(path)?;
    let profile: UserProfile = serde_json::from_slice(&bytes)?;
    info!(
        "Loaded profile for {} ({} skills) from {}",
        profile.name,
        profile.skills.len(),
        path.display()
    );
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_then_load_preserves_raw_skills() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("profile.json");
        let profile = UserProfile::new(
            "Ada",
            vec!["Python, React".to_string(), "machine_learning".to_string()],
        );

        let saved = save_profile(&path, &profile).unwrap();
        assert_eq!(saved, path);

        let loaded = load_profile(&path).unwrap();
        assert_eq!(loaded.name, "Ada");
        assert_eq!(loaded.skills, profile.skills);
        assert_eq!(loaded.created_at.timestamp(), profile.created_at.timestamp());
    }

    #[test]
    fn test_saved_file_uses_created_at_camel_case() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("p.json");
        save_profile(&path, &UserProfile::new("Ada", vec![])).unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"createdAt\""));
    }

    #[test]
    fn test_save_overwrites_existing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("p.json");
        save_profile(&path, &UserProfile::new("First", vec![])).unwrap();
        save_profile(&path, &UserProfile::new("Second", vec![])).unwrap();
        assert_eq!(load_profile(&path).unwrap().name, "Second");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let err = load_profile(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, AdvisorError::Io(_)));
    }

    #[test]
    fn test_garbage_is_malformed_profile() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{"name": 42, "skills": "python"}"#).unwrap();
        let err = load_profile(&path).unwrap_err();
        assert!(matches!(err, AdvisorError::MalformedProfile(_)));
    }

    #[test]
    fn test_invalid_utf8_is_malformed_profile() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("latin1.json");
        fs::write(
            &path,
            b"{\"name\": \"\xff\xfe\", \"skills\": [], \"createdAt\": \"2024-01-01T00:00:00Z\"}",
        )
        .unwrap();
        let err = load_profile(&path).unwrap_err();
        assert!(matches!(err, AdvisorError::MalformedProfile(_)));
        assert_eq!(err.code(), "MALFORMED_PROFILE");
    }
}
