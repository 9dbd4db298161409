use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A modification as carried by a residue or terminus. The digestion engine never looks inside
/// a modification, it only keeps it attached to the position it was placed on. The name is
/// shared so cloning sequences during digestion does not copy modification text.
#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Modification {
    name: Arc<str>,
}

impl Modification {
    /// Create a new modification with the given name, for example `Oxidation` or `ICPL:2H(4)`.
    /// The name is stored as is, so it should not include the surrounding parentheses.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self { name: name.into() }
    }

    /// The name of this modification
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Modification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({})", self.name)
    }
}
