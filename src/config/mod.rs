mod document;

use std::path::{Path, PathBuf};

use crate::domain::{HookName, Version};
use crate::gate::{HookRequirement, HookTable};
use crate::strictness::StrictnessLevel;

use document::{ConfigDocument, ParseNode};

/// Hook policy loaded from a KDL file.
///
/// ```kdl
/// fallback-version "0.1.0"
/// hooks {
///     always "ruff" "black"
///     moderate "mypy"
///     strict "pydocstyle" "markdownlint"
/// }
/// ```
///
/// Entries in `hooks` are layered over the built-in table: a listed hook
/// takes the requirement of the last tier that names it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub hooks: HookTable,
    pub fallback_version: Option<String>,
}

/// Errors that can occur when loading or parsing a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to read config: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("invalid KDL syntax: {0}")]
    ParseError(String),
    #[error("invalid config: {0}")]
    ValidationError(String),
}

impl Default for Config {
    fn default() -> Self {
        Config {
            hooks: HookTable::builtin(),
            fallback_version: None,
        }
    }
}

impl Config {
    /// Load a config from a KDL file at the given path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let doc = ConfigDocument::load(path)?;
        Self::from_document(&doc)
    }

    /// Parse a KDL string into a Config.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let doc = ConfigDocument::parse(content)?;
        Self::from_document(&doc)
    }

    /// Load the config at `path`, or the default when no path is given.
    ///
    /// Load failures are logged and degrade to the default.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Config::default();
        };
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config {}: {e}", path.display());
                Config::default()
            }
        }
    }

    fn from_document(doc: &ConfigDocument) -> Result<Self, ConfigError> {
        let mut hooks = HookTable::builtin();
        if let Some(section) = doc.section("hooks") {
            for node in section.nodes() {
                let requirement = parse_tier(&node)?;
                for name in hook_names(&node)? {
                    hooks.set(HookName::new(name), requirement);
                }
            }
        }

        let fallback_version = match doc.node("fallback-version") {
            Some(node) => Some(parse_fallback_version(&node)?),
            None => None,
        };

        Ok(Config {
            hooks,
            fallback_version,
        })
    }
}

/// Map a tier node name to a requirement.
///
/// `very-lenient` is the same as `always`: nothing is more lenient.
fn parse_tier(node: &ParseNode) -> Result<HookRequirement, ConfigError> {
    let tier = node.name();
    if tier == "always" {
        return Ok(HookRequirement::Always);
    }
    match tier.parse::<StrictnessLevel>() {
        Ok(StrictnessLevel::VeryLenient) => Ok(HookRequirement::Always),
        Ok(level) => Ok(HookRequirement::AtLeast(level)),
        Err(_) => Err(ConfigError::ValidationError(format!(
            "line {}: unknown hook tier \"{tier}\"",
            node.line()
        ))),
    }
}

fn hook_names<'a>(node: &ParseNode<'a>) -> Result<Vec<&'a str>, ConfigError> {
    let line = node.line();
    let tier = node.name();
    if node.has_children() {
        return Err(ConfigError::ValidationError(format!(
            "line {line}: {tier} does not take a children block"
        )));
    }
    let names = node.string_values();
    if names.len() != node.entry_count() {
        return Err(ConfigError::ValidationError(format!(
            "line {line}: {tier} entries must be hook name strings"
        )));
    }
    if let Some(blank) = names.iter().find(|n| n.trim().is_empty()) {
        return Err(ConfigError::ValidationError(format!(
            "line {line}: {tier} has an empty hook name {blank:?}"
        )));
    }
    Ok(names)
}

fn parse_fallback_version(node: &ParseNode) -> Result<String, ConfigError> {
    let line = node.line();
    let values = node.string_values();
    let [raw] = values.as_slice() else {
        return Err(ConfigError::ValidationError(format!(
            "line {line}: fallback-version takes exactly one version string"
        )));
    };
    raw.parse::<Version>().map_err(|e| {
        ConfigError::ValidationError(format!("line {line}: fallback-version: {e}"))
    })?;
    Ok(raw.to_string())
}
