pub mod loader;
pub mod utils;

pub use loader::{
    include_on_hook, include_or_report, sanitize, walk, ContainmentSet, DedupLoader,
    ExclusionSet, FileEntry, FileIncluder, HookHost, IncludeTarget, LoadLedger, Predicate,
    PredicateSpec, ScriptLoader,
};
pub use utils::{init_logger, Result, SelkieError};
