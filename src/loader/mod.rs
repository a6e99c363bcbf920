// Gateway module for the loader core - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod containment;
mod exclusions;
mod hooks;
mod includer;
mod ledger;
mod sanitize;
mod script;
mod target;
mod walker;

// Public re-exports - the ONLY way to access loader functionality
pub use containment::ContainmentSet;
pub use exclusions::ExclusionSet;
pub use hooks::{include_on_hook, HookHost};
pub use includer::{include_or_report, FileIncluder};
pub use ledger::LoadLedger;
pub use sanitize::sanitize;
pub use script::{DedupLoader, ScriptLoader};
pub use target::{IncludeTarget, Predicate, PredicateSpec};
pub use walker::{walk, FileEntry};
