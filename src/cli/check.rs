use std::path::Path;

use crate::config::Config;
use crate::domain::HookName;
use crate::gate::{HookTable, SELF_HOOK};
use crate::strictness::StrictnessLevel;

use super::resolve;

/// Environment variable the computed strictness level is published under.
pub const STRICTNESS_ENV: &str = "PRECOMMIT_STRICTNESS";

/// Environment variable naming the hook being evaluated.
pub const HOOK_NAME_ENV: &str = "PRE_COMMIT_HOOK_NAME";

/// What the caller should do with the hook under evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No hook named, or the gate lets it run.
    Proceed,
    /// The gate rejects the hook at this level.
    Skip { hook: String },
    /// The hook is this checker itself.
    SelfCheck,
}

/// Decide the outcome for an optional hook name. Empty names count as absent.
pub fn decide(hook: Option<&str>, level: StrictnessLevel, table: &HookTable) -> Outcome {
    let hook = match hook.map(HookName::new) {
        Some(h) if !h.is_empty() => h,
        _ => return Outcome::Proceed,
    };
    if !table.should_enable(hook.as_str(), level) {
        Outcome::Skip {
            hook: hook.to_string(),
        }
    } else if hook == SELF_HOOK {
        Outcome::SelfCheck
    } else {
        Outcome::Proceed
    }
}

/// Execute the check: print version and level, publish the level, and gate
/// the named hook.
///
/// Every path exits successfully; a skipped hook is reported on stdout.
pub fn run(manifest_path: &Path, config_path: Option<&Path>, hook: Option<&str>) {
    let config = Config::load_or_default(config_path);
    let resolved = resolve(manifest_path, &config);
    let level = resolved.level;
    tracing::debug!(version = %resolved.version, hook = ?hook, "gating hook");

    println!("Version: {}", resolved.raw_version);
    println!("Strictness level: {level}");

    // Single-threaded here; no other thread reads the environment.
    std::env::set_var(STRICTNESS_ENV, level.as_str());

    match decide(hook, level, &config.hooks) {
        Outcome::Skip { hook } => {
            println!("Skipping {hook} due to strictness level {level}");
        }
        Outcome::SelfCheck => println!("Version-based strictness check passed"),
        Outcome::Proceed => {}
    }
}
