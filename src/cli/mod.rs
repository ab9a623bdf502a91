pub mod check;
pub mod plan;

use std::io::IsTerminal;
use std::path::Path;

use crate::config::Config;
use crate::domain::{parse_version, Version};
use crate::manifest;
use crate::strictness::{classify, StrictnessLevel};

/// Version and strictness resolved for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Resolved {
    /// Version string as read from the manifest (or the fallback).
    pub raw_version: String,
    pub version: Version,
    pub level: StrictnessLevel,
}

/// Read the manifest version and classify it. Never fails.
pub(crate) fn resolve(manifest_path: &Path, config: &Config) -> Resolved {
    let fallback = config
        .fallback_version
        .as_deref()
        .unwrap_or(manifest::FALLBACK_VERSION_STRING);
    let raw_version = manifest::read_version_or(manifest_path, fallback);
    let version = parse_version(&raw_version);
    let level = classify(version);
    tracing::debug!(%version, %level, "classified version");
    Resolved {
        raw_version,
        version,
        level,
    }
}

/// Install the stderr diagnostic subscriber.
///
/// Verbosity comes from `RUST_LOG`, defaulting to `warn`.
pub(crate) fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    // A second init (e.g. from tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn manifest_with(version: &str) -> NamedTempFile {
        let mut tmpfile = NamedTempFile::new().unwrap();
        writeln!(tmpfile, "[project]\nversion = \"{version}\"").unwrap();
        tmpfile
    }

    #[test]
    fn resolve_reads_and_classifies() {
        let file = manifest_with("0.5.2");
        let resolved = resolve(file.path(), &Config::default());
        assert_eq!(resolved.raw_version, "0.5.2");
        assert_eq!(resolved.version, Version::new(0, 5, 2));
        assert_eq!(resolved.level, StrictnessLevel::Moderate);
    }

    #[test]
    fn resolve_missing_manifest_uses_fallback() {
        let resolved = resolve(
            Path::new("/tmp/does-not-exist-12345/pyproject.toml"),
            &Config::default(),
        );
        assert_eq!(resolved.raw_version, "0.1.0");
        assert_eq!(resolved.level, StrictnessLevel::VeryLenient);
    }

    #[test]
    fn resolve_uses_configured_fallback() {
        let config = Config {
            fallback_version: Some("1.0.0".into()),
            ..Default::default()
        };
        let resolved = resolve(Path::new("/tmp/does-not-exist-12345/pyproject.toml"), &config);
        assert_eq!(resolved.raw_version, "1.0.0");
        assert_eq!(resolved.level, StrictnessLevel::VeryStrict);
    }

    #[test]
    fn resolve_malformed_version_classifies_fallback_triple() {
        let file = manifest_with("2.0.0-beta");
        let resolved = resolve(file.path(), &Config::default());
        // raw string is kept for display; the triple degrades to 0.1.0
        assert_eq!(resolved.raw_version, "2.0.0-beta");
        assert_eq!(resolved.version, Version::new(0, 1, 0));
        assert_eq!(resolved.level, StrictnessLevel::VeryLenient);
    }
}
