#![doc = include_str!("../README.md")]

mod helper_functions;

pub mod digestion;
pub mod sequence;

/// A subset of the types and traits that are envisioned to be used the most, importing this is a good starting point for working with the crate
pub mod prelude {
    pub use crate::digestion::{EnzymaticDigestion, Enzyme, Protease, Specificity};
    pub use crate::sequence::{AminoAcid, Modification, Peptidoform, SequenceElement};
}
