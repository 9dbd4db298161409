//! The residue sequences the digestion engine works on: amino acids, opaque modifications, and
//! linear peptidoforms that can be sliced without losing their modifications.

mod aminoacid;
mod modification;
mod parse;
mod peptidoform;
mod sequence_element;

pub use aminoacid::*;
pub use modification::*;
pub use peptidoform::*;
pub use sequence_element::*;
