use std::path::Path;

use serde::Serialize;

use crate::config::Config;
use crate::gate::HookTable;
use crate::strictness::StrictnessLevel;

use super::resolve;

/// Which listed hooks run at the resolved strictness level.
#[derive(Debug, Serialize)]
pub struct PlanReport {
    pub version: String,
    pub strictness: StrictnessLevel,
    pub hooks: Vec<PlanEntry>,
}

#[derive(Debug, Serialize)]
pub struct PlanEntry {
    pub name: String,
    pub requirement: String,
    pub enabled: bool,
}

impl PlanReport {
    pub fn build(version: &str, level: StrictnessLevel, table: &HookTable) -> Self {
        let hooks = table
            .entries()
            .map(|(name, requirement)| PlanEntry {
                name: name.to_string(),
                requirement: requirement.to_string(),
                enabled: requirement.is_met(level),
            })
            .collect();
        PlanReport {
            version: version.to_string(),
            strictness: level,
            hooks,
        }
    }

    /// Line-oriented rendering, one hook per line.
    pub fn render_text(&self) -> String {
        let width = self.hooks.iter().map(|h| h.name.len()).max().unwrap_or(0);
        let mut out = format!(
            "Version: {}\nStrictness level: {}\n",
            self.version, self.strictness
        );
        for hook in &self.hooks {
            let status = if hook.enabled { "run " } else { "skip" };
            out.push_str(&format!(
                "  {status}  {:<width$}  ({})\n",
                hook.name, hook.requirement
            ));
        }
        out.push_str(&format!(
            "  other hooks run only at {}\n",
            StrictnessLevel::VeryStrict
        ));
        out
    }
}

/// Print the hook plan for the manifest's version.
pub fn run(manifest_path: &Path, config_path: Option<&Path>, json: bool) {
    let config = Config::load_or_default(config_path);
    let resolved = resolve(manifest_path, &config);
    let report = PlanReport::build(&resolved.raw_version, resolved.level, &config.hooks);

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(out) => println!("{out}"),
            Err(e) => tracing::warn!("Could not serialize plan: {e}"),
        }
    } else {
        print!("{}", report.render_text());
    }
}
