pub mod config;
pub mod domain;
pub mod gate;
pub mod manifest;
pub mod strictness;

pub(crate) mod cli;

pub use cli::check::{HOOK_NAME_ENV, STRICTNESS_ENV};

use std::path::Path;

/// Install the stderr diagnostic subscriber. Call once, before `run_*`.
pub fn init_logging() {
    cli::init_logging()
}

/// Run the check subcommand: classify the manifest version and gate the
/// named hook. Always returns normally; the process exits 0.
///
/// This is the binary entry point. Library callers should use
/// [`domain::parse_version`], [`strictness::classify`], and
/// [`gate::HookTable`] directly.
pub fn run_check(manifest: &Path, config: Option<&Path>, hook: Option<&str>) {
    cli::check::run(manifest, config, hook)
}

/// Run the plan subcommand: list every known hook and whether it runs.
pub fn run_plan(manifest: &Path, config: Option<&Path>, json: bool) {
    cli::plan::run(manifest, config, json)
}
