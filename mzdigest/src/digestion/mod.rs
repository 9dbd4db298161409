//! In silico enzymatic digestion: locating cleavage sites, cutting proteins into peptides with
//! missed cleavages, and validating whether a peptide could be an enzymatic product.

mod cleavage_model;
mod enzymatic_digestion;
mod enzyme;
mod protease;
mod specificity;

pub use cleavage_model::{CleavageModel, WINDOW, WINDOW_AFTER, WINDOW_BEFORE};
pub use enzymatic_digestion::{DEFAULT_LOG_THRESHOLD, EnzymaticDigestion};
pub use enzyme::{Enzyme, NAMES_OF_ENZYMES};
pub use protease::{Protease, known_proteases};
pub use specificity::{NAMES_OF_SPECIFICITY, Specificity};
