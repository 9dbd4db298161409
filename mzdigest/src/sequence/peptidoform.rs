use std::ops::{Index, RangeBounds};

use serde::{Deserialize, Serialize};
use thin_vec::ThinVec;

use crate::{
    helper_functions::RangeExtension,
    sequence::{AminoAcid, Modification, SequenceElement},
};

/// A linear sequence of amino acids with their modifications, this is used for full proteins as
/// well as for the peptides digested out of them.
///
/// ```rust
/// # use mzdigest::prelude::*;
/// let protein = Peptidoform::parse("(ICPL:2H(4))ARCDRE(Amidated)").unwrap();
/// assert_eq!(protein.len(), 6);
/// assert_eq!(protein.sub_peptide(..2).to_string(), "(ICPL:2H(4))AR");
/// assert_eq!(protein.sub_peptide(2..).to_string(), "CDRE(Amidated)");
/// ```
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Peptidoform {
    /// N terminal modifications
    n_term: ThinVec<Modification>,
    /// The sequence of this peptide (includes side chain modifications)
    sequence: Vec<SequenceElement>,
    /// C terminal modifications
    c_term: ThinVec<Modification>,
}

impl Peptidoform {
    /// Create a new peptidoform from the given sequence elements, without terminal modifications
    pub fn new(sequence: impl IntoIterator<Item = SequenceElement>) -> Self {
        Self {
            n_term: ThinVec::new(),
            sequence: sequence.into_iter().collect(),
            c_term: ThinVec::new(),
        }
    }

    /// Create a new unmodified peptidoform from the given amino acids
    pub fn from_aminoacids(sequence: &[AminoAcid]) -> Self {
        Self::new(sequence.iter().copied().map(SequenceElement::new))
    }

    /// Get the number of amino acids making up this peptide
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Check if there are any amino acids in this peptide
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// The sequence of this peptidoform
    pub fn sequence(&self) -> &[SequenceElement] {
        &self.sequence
    }

    /// Get the amino acid at the given index
    pub fn aminoacid(&self, index: usize) -> Option<AminoAcid> {
        self.sequence.get(index).map(|element| element.aminoacid)
    }

    /// Iterate over the amino acids of this peptidoform
    pub fn aminoacids(&self) -> impl DoubleEndedIterator<Item = AminoAcid> + '_ {
        self.sequence.iter().map(|element| element.aminoacid)
    }

    /// The N terminal modifications
    pub fn n_term(&self) -> &[Modification] {
        &self.n_term
    }

    /// The C terminal modifications
    pub fn c_term(&self) -> &[Modification] {
        &self.c_term
    }

    /// Add a N terminal modification
    pub fn add_n_term(&mut self, modification: Modification) {
        self.n_term.push(modification);
    }

    /// Add a C terminal modification
    pub fn add_c_term(&mut self, modification: Modification) {
        self.c_term.push(modification);
    }

    /// Add the given element to the C terminal end of the sequence
    pub(crate) fn push(&mut self, element: SequenceElement) {
        self.sequence.push(element);
    }

    pub(crate) fn sequence_mut(&mut self) -> &mut Vec<SequenceElement> {
        &mut self.sequence
    }

    /// Get a region of this peptide as a new peptide. The terminal modifications are only kept if
    /// the region includes that terminus, side chain modifications always stay on their residue.
    /// Out of range bounds are clamped to the sequence.
    #[must_use]
    pub fn sub_peptide(&self, index: impl RangeBounds<usize>) -> Self {
        let (start, end) = index.bounds(self.len());
        Self {
            n_term: if start == 0 {
                self.n_term.clone()
            } else {
                ThinVec::new()
            },
            c_term: if end == self.len() {
                self.c_term.clone()
            } else {
                ThinVec::new()
            },
            sequence: self.sequence[start..end].to_vec(),
        }
    }

    /// Render only the one letter codes of this sequence, without any modifications
    pub fn to_unmodified_string(&self) -> String {
        self.aminoacids().map(AminoAcid::one_letter_code).collect()
    }
}

impl Index<usize> for Peptidoform {
    type Output = SequenceElement;

    fn index(&self, index: usize) -> &Self::Output {
        &self.sequence[index]
    }
}

impl std::fmt::Display for Peptidoform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for m in &self.n_term {
            write!(f, "{m}")?;
        }
        for element in &self.sequence {
            write!(f, "{element}")?;
        }
        if !self.c_term.is_empty() {
            write!(f, ".")?;
            for m in &self.c_term {
                write!(f, "{m}")?;
            }
        }
        Ok(())
    }
}

impl FromIterator<AminoAcid> for Peptidoform {
    fn from_iter<T: IntoIterator<Item = AminoAcid>>(iter: T) -> Self {
        Self::new(iter.into_iter().map(SequenceElement::new))
    }
}
