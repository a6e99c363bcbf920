use crate::utils::{Result, SelkieError};

/// Bare filenames that must never be loaded, regardless of which directory
/// contains them.
///
/// Matching is case-sensitive and exact; directory segments play no part.
/// Names keep their insertion order and the set holds no duplicates.
#[derive(Debug, Default, Clone)]
pub struct ExclusionSet {
    names: Vec<String>,
}

impl ExclusionSet {
    /// Add one name. Adding a name already present leaves the set unchanged.
    pub fn add(&mut self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(SelkieError::InvalidConfig(
                "exclusion names must be non-empty strings".to_string(),
            ));
        }

        if !self.contains(name) {
            self.names.push(name.to_string());
        }
        Ok(())
    }

    /// Discard all prior content and install `names`.
    pub fn replace<I, S>(&mut self, names: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut next = ExclusionSet::default();
        for name in names {
            next.add(name.as_ref())?;
        }
        self.names = next.names;
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}
