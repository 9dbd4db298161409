use serde::{Deserialize, Serialize};
use thin_vec::ThinVec;

use crate::sequence::{AminoAcid, Modification};

/// One block in a sequence meaning an aminoacid and it's accompanying modifications
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct SequenceElement {
    /// The aminoacid
    pub aminoacid: AminoAcid,
    /// All present modifications, in the order they were placed
    pub modifications: ThinVec<Modification>,
}

impl SequenceElement {
    /// Create a new aminoacid without any modifications
    pub fn new(aminoacid: AminoAcid) -> Self {
        Self {
            aminoacid,
            modifications: ThinVec::new(),
        }
    }

    /// Add a modification to this sequence element
    pub fn add_modification(&mut self, modification: Modification) {
        self.modifications.push(modification);
    }

    /// Check if this element carries any modification
    pub fn is_modified(&self) -> bool {
        !self.modifications.is_empty()
    }
}

impl std::fmt::Display for SequenceElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.aminoacid)?;
        for m in &self.modifications {
            write!(f, "{m}")?;
        }
        Ok(())
    }
}
