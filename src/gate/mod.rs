mod builtin;

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::domain::HookName;
use crate::strictness::StrictnessLevel;

pub use builtin::{ALWAYS_ON, MODERATE_HOOKS, STRICT_HOOKS};

/// Name of the hook that runs this checker itself.
pub const SELF_HOOK: &str = "version-based-strictness";

/// The minimum strictness at which a hook runs.
///
/// `Always` sorts below every level, so the gate is a single comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HookRequirement {
    Always,
    AtLeast(StrictnessLevel),
}

impl HookRequirement {
    /// Requirement for hooks that are not listed in a table.
    pub const UNLISTED: HookRequirement = HookRequirement::AtLeast(StrictnessLevel::VeryStrict);

    pub fn is_met(&self, level: StrictnessLevel) -> bool {
        match self {
            HookRequirement::Always => true,
            HookRequirement::AtLeast(required) => *required <= level,
        }
    }
}

impl std::fmt::Display for HookRequirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HookRequirement::Always => f.write_str("always"),
            HookRequirement::AtLeast(level) => write!(f, "{level}"),
        }
    }
}

/// Hook name → requirement lookup.
///
/// Built from [`HookTable::builtin`] and optionally extended by a config
/// file. Unlisted hooks require `very_strict`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookTable {
    entries: BTreeMap<HookName, HookRequirement>,
}

impl HookTable {
    /// An empty table: every hook requires `very_strict`.
    pub fn empty() -> Self {
        HookTable {
            entries: BTreeMap::new(),
        }
    }

    /// The default table of always-on, moderate, and strict hooks.
    pub fn builtin() -> Self {
        let mut table = Self::empty();
        for name in ALWAYS_ON {
            table.set(HookName::new(name), HookRequirement::Always);
        }
        // Strict hooks first so that `mypy` keeps its lower moderate threshold.
        for name in STRICT_HOOKS {
            table.set(
                HookName::new(name),
                HookRequirement::AtLeast(StrictnessLevel::Strict),
            );
        }
        for name in MODERATE_HOOKS {
            table.set(
                HookName::new(name),
                HookRequirement::AtLeast(StrictnessLevel::Moderate),
            );
        }
        table
    }

    /// Set a hook's requirement, replacing any previous entry.
    pub fn set(&mut self, name: HookName, requirement: HookRequirement) {
        self.entries.insert(name, requirement);
    }

    /// Look up a hook's requirement. Unlisted hooks get [`HookRequirement::UNLISTED`].
    pub fn requirement(&self, name: &str) -> HookRequirement {
        self.entries
            .get(&HookName::new(name))
            .copied()
            .unwrap_or(HookRequirement::UNLISTED)
    }

    /// Whether the named hook runs at the given strictness level.
    ///
    /// # Examples
    ///
    /// ```
    /// use precommit_strictness::gate::HookTable;
    /// use precommit_strictness::strictness::StrictnessLevel;
    ///
    /// let table = HookTable::builtin();
    /// assert!(table.should_enable("ruff", StrictnessLevel::VeryLenient));
    /// assert!(!table.should_enable("pydocstyle", StrictnessLevel::Moderate));
    /// ```
    pub fn should_enable(&self, name: &str, level: StrictnessLevel) -> bool {
        self.requirement(name).is_met(level)
    }

    /// All listed hooks with their requirements, sorted by name.
    pub fn entries(&self) -> impl Iterator<Item = (&HookName, HookRequirement)> {
        self.entries.iter().map(|(name, req)| (name, *req))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for HookTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Decide whether a hook runs, using the built-in table.
///
/// The table is built once per process and shared.
pub fn should_enable(name: &str, level: StrictnessLevel) -> bool {
    builtin_table().should_enable(name, level)
}

fn builtin_table() -> &'static HookTable {
    static BUILTIN: OnceLock<HookTable> = OnceLock::new();
    BUILTIN.get_or_init(HookTable::builtin)
}
