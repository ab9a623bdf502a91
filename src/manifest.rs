//! Project manifest reading.
//!
//! Only `project.version` is consulted; every other table and key in the
//! manifest is ignored.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Default manifest file name, relative to the working directory.
pub const DEFAULT_MANIFEST: &str = "pyproject.toml";

/// Version string used when the manifest cannot supply one.
pub const FALLBACK_VERSION_STRING: &str = "0.1.0";

/// Errors that can occur when reading the version from a manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("manifest not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to read manifest: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("invalid TOML: {0}")]
    ParseError(String),
    #[error("no project.version in {0}")]
    MissingVersion(PathBuf),
}

#[derive(Debug, Deserialize)]
struct Manifest {
    project: Option<ProjectTable>,
}

#[derive(Debug, Deserialize)]
struct ProjectTable {
    version: Option<String>,
}

/// Read `project.version` from the manifest at `path`.
pub fn read_version(path: &Path) -> Result<String, ManifestError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ManifestError::NotFound(path.to_path_buf())
        } else {
            ManifestError::ReadError(e)
        }
    })?;
    parse_version_field(&content, path)
}

fn parse_version_field(content: &str, path: &Path) -> Result<String, ManifestError> {
    let manifest: Manifest =
        toml::from_str(content).map_err(|e| ManifestError::ParseError(e.message().to_string()))?;
    manifest
        .project
        .and_then(|p| p.version)
        .ok_or_else(|| ManifestError::MissingVersion(path.to_path_buf()))
}

/// Read the manifest version, substituting `fallback` on any failure.
///
/// The failure is logged as a warning; a pre-commit check must never block
/// work because of its own misconfiguration.
pub fn read_version_or(path: &Path, fallback: &str) -> String {
    match read_version(path) {
        Ok(version) => {
            tracing::debug!(path = %path.display(), %version, "read manifest version");
            version
        }
        Err(e) => {
            tracing::warn!("Could not read version from {}: {e}", path.display());
            fallback.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn manifest_file(content: &str) -> NamedTempFile {
        let mut tmpfile = NamedTempFile::new().unwrap();
        write!(tmpfile, "{content}").unwrap();
        tmpfile
    }

    #[test]
    fn reads_project_version() {
        let file = manifest_file(
            r#"
            [project]
            name = "demo"
            version = "0.3.2"
            "#,
        );
        assert_eq!(read_version(file.path()).unwrap(), "0.3.2");
    }

    #[test]
    fn ignores_unrelated_tables() {
        let file = manifest_file(
            r#"
            [build-system]
            requires = ["hatchling"]

            [project]
            version = "1.4.0"
            dependencies = ["requests"]

            [tool.ruff]
            line-length = 100
            "#,
        );
        assert_eq!(read_version(file.path()).unwrap(), "1.4.0");
    }

    #[test]
    fn missing_file_returns_not_found() {
        let result = read_version(Path::new("/tmp/does-not-exist-12345/pyproject.toml"));
        assert!(matches!(result.unwrap_err(), ManifestError::NotFound(_)));
    }

    #[test]
    fn missing_project_table_returns_missing_version() {
        let file = manifest_file("[tool.black]\nline-length = 88\n");
        assert!(matches!(
            read_version(file.path()).unwrap_err(),
            ManifestError::MissingVersion(_)
        ));
    }

    #[test]
    fn missing_version_field_returns_missing_version() {
        let file = manifest_file("[project]\nname = \"demo\"\n");
        assert!(matches!(
            read_version(file.path()).unwrap_err(),
            ManifestError::MissingVersion(_)
        ));
    }

    #[test]
    fn invalid_toml_returns_parse_error() {
        let file = manifest_file("[project\nversion = ");
        assert!(matches!(
            read_version(file.path()).unwrap_err(),
            ManifestError::ParseError(_)
        ));
    }

    #[test]
    fn non_string_version_returns_parse_error() {
        let file = manifest_file("[project]\nversion = 3\n");
        assert!(matches!(
            read_version(file.path()).unwrap_err(),
            ManifestError::ParseError(_)
        ));
    }

    #[test]
    fn read_version_or_uses_fallback_on_error() {
        let version = read_version_or(
            Path::new("/tmp/does-not-exist-12345/pyproject.toml"),
            FALLBACK_VERSION_STRING,
        );
        assert_eq!(version, "0.1.0");
    }

    #[test]
    fn read_version_or_prefers_manifest() {
        let file = manifest_file("[project]\nversion = \"0.9.1\"\n");
        assert_eq!(read_version_or(file.path(), "0.1.0"), "0.9.1");
    }
}
