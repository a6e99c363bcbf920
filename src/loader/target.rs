use std::path::Path;

/// A caller-supplied filter deciding, per candidate file path, whether the
/// file should be loaded.
pub type Predicate = Box<dyn Fn(&Path) -> bool + Send + Sync>;

/// What an include call should process: the base directory itself, one or
/// more subdirectory names, or subdirectories paired with explicit
/// per-target predicate choices.
pub enum IncludeTarget {
    /// The base directory itself.
    Base,
    /// A single directory name, filtered by the global predicate.
    Single(String),
    /// An ordered collection of directory names, each filtered by the
    /// global predicate.
    Many(Vec<String>),
    /// Directory names paired with predicate choices, processed in the
    /// order supplied.
    Conditional(Vec<(String, PredicateSpec)>),
}

/// Predicate choice for a single target.
pub enum PredicateSpec {
    /// No choice made; the global predicate applies.
    Inherit,
    /// Explicitly no predicate: the global predicate is suppressed for this
    /// target and every candidate passes the filter stage.
    None,
    /// A predicate used for this target only.
    Custom(Predicate),
}

impl IncludeTarget {
    /// Flatten into an ordered list of (directory name, predicate choice)
    /// pairs. The empty name stands for the base directory itself.
    pub(crate) fn into_pairs(self) -> Vec<(String, PredicateSpec)> {
        match self {
            IncludeTarget::Base => vec![(String::new(), PredicateSpec::Inherit)],
            IncludeTarget::Single(name) => vec![(name, PredicateSpec::Inherit)],
            IncludeTarget::Many(names) => names
                .into_iter()
                .map(|name| (name, PredicateSpec::Inherit))
                .collect(),
            IncludeTarget::Conditional(pairs) => pairs,
        }
    }
}

impl From<&str> for IncludeTarget {
    fn from(name: &str) -> Self {
        IncludeTarget::Single(name.to_string())
    }
}

impl From<Vec<&str>> for IncludeTarget {
    fn from(names: Vec<&str>) -> Self {
        IncludeTarget::Many(names.into_iter().map(str::to_string).collect())
    }
}
