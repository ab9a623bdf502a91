use std::str::FromStr;

/// A `major.minor.patch` version triple.
///
/// Parsed leniently from manifest strings: missing trailing components
/// default to 0, `1` → `1.0.0`, `1.2` → `1.2.0`. Components past the
/// third are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

/// Version returned when a version string cannot be parsed.
pub const FALLBACK_VERSION: Version = Version::new(0, 1, 0);

/// Errors from parsing a version string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionError {
    #[error("empty version string")]
    Empty,
    #[error("invalid version segment: {segment:?}")]
    InvalidSegment { segment: String },
}

impl Version {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.trim().is_empty() {
            return Err(VersionError::Empty);
        }
        let mut parts = raw.split('.');
        // `split` always yields at least one item, so major is never skipped
        let major = parse_segment(parts.next())?;
        let minor = parse_segment(parts.next())?;
        let patch = parse_segment(parts.next())?;
        Ok(Version::new(major, minor, patch))
    }
}

fn parse_segment(segment: Option<&str>) -> Result<u64, VersionError> {
    match segment {
        None => Ok(0),
        Some(s) => s
            .trim()
            .parse()
            .map_err(|_| VersionError::InvalidSegment {
                segment: s.to_string(),
            }),
    }
}

/// Parse a version string, falling back to [`FALLBACK_VERSION`] on failure.
///
/// Never fails: an unparseable string is reported as a warning and
/// degrades to `0.1.0`.
pub fn parse_version(raw: &str) -> Version {
    match raw.parse() {
        Ok(version) => version,
        Err(e) => {
            tracing::warn!("Invalid version format: {raw} ({e})");
            FALLBACK_VERSION
        }
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
