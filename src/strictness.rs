use std::str::FromStr;

use serde::Serialize;

use crate::domain::Version;

/// How many hooks are active, ordered from most to least lenient.
///
/// `VeryLenient < Moderate < Strict < VeryStrict`; a hook that is enabled at
/// one level is enabled at every stricter level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrictnessLevel {
    VeryLenient,
    Moderate,
    Strict,
    VeryStrict,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strictness level: {0:?}")]
pub struct UnknownLevel(pub String);

impl StrictnessLevel {
    pub const ALL: [StrictnessLevel; 4] = [
        StrictnessLevel::VeryLenient,
        StrictnessLevel::Moderate,
        StrictnessLevel::Strict,
        StrictnessLevel::VeryStrict,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StrictnessLevel::VeryLenient => "very_lenient",
            StrictnessLevel::Moderate => "moderate",
            StrictnessLevel::Strict => "strict",
            StrictnessLevel::VeryStrict => "very_strict",
        }
    }
}

/// Classify a version into a strictness level.
///
/// Only `major` and `minor` matter:
///
/// | version        | level          |
/// |----------------|----------------|
/// | `0.0` – `0.4`  | `very_lenient` |
/// | `0.5` – `0.8`  | `moderate`     |
/// | `0.9` – `0.x`  | `strict`       |
/// | `1.0` and up   | `very_strict`  |
///
/// # Examples
///
/// ```
/// use precommit_strictness::domain::Version;
/// use precommit_strictness::strictness::{classify, StrictnessLevel};
///
/// assert_eq!(classify(Version::new(0, 9, 0)), StrictnessLevel::Strict);
/// ```
pub fn classify(version: Version) -> StrictnessLevel {
    match (version.major, version.minor) {
        (0, 0..=4) => StrictnessLevel::VeryLenient,
        (0, 5..=8) => StrictnessLevel::Moderate,
        (0, _) => StrictnessLevel::Strict,
        _ => StrictnessLevel::VeryStrict,
    }
}

impl FromStr for StrictnessLevel {
    type Err = UnknownLevel;

    /// Accepts snake_case (`very_strict`) and kebab-case (`very-strict`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.replace('-', "_").as_str() {
            "very_lenient" => Ok(StrictnessLevel::VeryLenient),
            "moderate" => Ok(StrictnessLevel::Moderate),
            "strict" => Ok(StrictnessLevel::Strict),
            "very_strict" => Ok(StrictnessLevel::VeryStrict),
            _ => Err(UnknownLevel(s.to_string())),
        }
    }
}

impl std::fmt::Display for StrictnessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
