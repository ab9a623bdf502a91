pub mod hook_name;
pub mod version;

pub use hook_name::HookName;
pub use version::{parse_version, Version, VersionError, FALLBACK_VERSION};
