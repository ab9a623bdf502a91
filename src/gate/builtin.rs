//! Built-in hook sets.

/// Core checks that run at every strictness level.
pub const ALWAYS_ON: &[&str] = &[
    "ruff",
    "ruff-format",
    "black",
    "bandit",
    "prettier",
    "trailing-whitespace",
    "end-of-file-fixer",
    "check-yaml",
    "check-added-large-files",
    "check-merge-conflict",
    "check-case-conflict",
    "check-json",
    "check-toml",
    "debug-statements",
    "name-tests-test",
    "requirements-txt-fixer",
    "fix-byte-order-marker",
    "shellcheck",
    "yamllint",
    "commitlint",
];

/// Type checking, enabled from `moderate`.
pub const MODERATE_HOOKS: &[&str] = &["mypy"];

/// Docstring and markdown style, enabled from `strict`.
pub const STRICT_HOOKS: &[&str] = &["mypy", "pydocstyle", "markdownlint"];
