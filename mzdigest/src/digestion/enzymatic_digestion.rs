use ordered_float::OrderedFloat;
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    digestion::{Enzyme, Specificity},
    sequence::{AminoAcid, Peptidoform},
};

/// The default threshold for the log-odds cleavage model
pub const DEFAULT_LOG_THRESHOLD: f64 = 0.25;

/// In silico enzymatic digestion of proteins. This holds the settings for the digestion, the
/// enzyme, the number of missed cleavages, the specificity used when validating products, and
/// the choice between the deterministic cleavage rule and the log-odds cleavage model.
///
/// All operations are total, invalid input gives empty or negative answers instead of errors.
/// The settings are only read during the operations, so one instance can be used from multiple
/// threads at the same time.
///
/// ```rust
/// # use mzdigest::prelude::*;
/// let protein = Peptidoform::parse("ARCDRE").unwrap();
/// let digestion = EnzymaticDigestion::default().with_missed_cleavages(1);
///
/// assert_eq!(digestion.peptide_count(&protein), 5);
/// let peptides: Vec<String> = digestion
///     .digested(&protein)
///     .iter()
///     .map(ToString::to_string)
///     .collect();
/// assert_eq!(peptides, ["AR", "CDR", "E", "ARCDR", "CDRE"]);
/// assert!(digestion.is_valid_product(&protein, 2, 3));
/// ```
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct EnzymaticDigestion {
    missed_cleavages: usize,
    enzyme: Enzyme,
    specificity: Specificity,
    log_model: bool,
    log_threshold: OrderedFloat<f64>,
}

impl Default for EnzymaticDigestion {
    fn default() -> Self {
        Self {
            missed_cleavages: 0,
            enzyme: Enzyme::Trypsin,
            specificity: Specificity::Full,
            log_model: false,
            log_threshold: OrderedFloat(DEFAULT_LOG_THRESHOLD),
        }
    }
}

impl EnzymaticDigestion {
    /// The maximal number of missed cleavages allowed in a single peptide
    pub const fn missed_cleavages(&self) -> usize {
        self.missed_cleavages
    }

    /// Set the maximal number of missed cleavages
    pub const fn set_missed_cleavages(&mut self, missed_cleavages: usize) {
        self.missed_cleavages = missed_cleavages;
    }

    /// Set the maximal number of missed cleavages
    #[must_use]
    pub const fn with_missed_cleavages(mut self, missed_cleavages: usize) -> Self {
        self.missed_cleavages = missed_cleavages;
        self
    }

    /// The enzyme used
    pub const fn enzyme(&self) -> Enzyme {
        self.enzyme
    }

    /// Set the enzyme, [`Enzyme::Unknown`] is accepted and results in no cut sites
    pub const fn set_enzyme(&mut self, enzyme: Enzyme) {
        self.enzyme = enzyme;
    }

    /// Set the enzyme, [`Enzyme::Unknown`] is accepted and results in no cut sites
    #[must_use]
    pub const fn with_enzyme(mut self, enzyme: Enzyme) -> Self {
        self.enzyme = enzyme;
        self
    }

    /// The specificity used by [`Self::is_valid_product`]
    pub const fn specificity(&self) -> Specificity {
        self.specificity
    }

    /// Set the specificity, [`Specificity::Unknown`] is accepted and handled as full specificity
    pub const fn set_specificity(&mut self, specificity: Specificity) {
        self.specificity = specificity;
    }

    /// Set the specificity, [`Specificity::Unknown`] is accepted and handled as full specificity
    #[must_use]
    pub const fn with_specificity(mut self, specificity: Specificity) -> Self {
        self.specificity = specificity;
        self
    }

    /// If the log-odds cleavage model is used instead of the deterministic cleavage rule
    pub const fn is_log_model_enabled(&self) -> bool {
        self.log_model
    }

    /// Enable or disable the log-odds cleavage model
    pub const fn set_log_model_enabled(&mut self, enabled: bool) {
        self.log_model = enabled;
    }

    /// Enable or disable the log-odds cleavage model
    #[must_use]
    pub const fn with_log_model(mut self, enabled: bool) -> Self {
        self.log_model = enabled;
        self
    }

    /// The minimal score for the log-odds model to place a cut
    pub const fn log_threshold(&self) -> f64 {
        self.log_threshold.0
    }

    /// Set the minimal score for the log-odds model to place a cut
    pub const fn set_log_threshold(&mut self, threshold: f64) {
        self.log_threshold = OrderedFloat(threshold);
    }

    /// Set the minimal score for the log-odds model to place a cut
    #[must_use]
    pub const fn with_log_threshold(mut self, threshold: f64) -> Self {
        self.log_threshold = OrderedFloat(threshold);
        self
    }

    /// The number of missed cleavages that is actually applied. The log-odds model decides for
    /// every site on its own if the enzyme cleaves, so with the model enabled no additional
    /// missed cleavages are generated.
    pub const fn effective_missed_cleavages(&self) -> usize {
        if self.log_model {
            0
        } else {
            self.missed_cleavages
        }
    }

    /// All positions in the protein where the enzyme cuts, in strictly increasing order. A
    /// position `i` means a cut between the residues `i - 1` and `i`, so the positions are always
    /// in `1..protein.len()`.
    pub fn cleavage_sites(&self, protein: &Peptidoform) -> Vec<usize> {
        let sites = if self.log_model {
            self.enzyme.cleavage_model().map_or_else(Vec::new, |model| {
                model.match_locations(protein.sequence(), self.log_threshold.0)
            })
        } else {
            self.enzyme.protease().map_or_else(Vec::new, |protease| {
                protease.match_locations(protein.sequence())
            })
        };
        log::trace!(
            "{} cleavage sites found by {} ({}) in a protein of length {}",
            sites.len(),
            self.enzyme,
            if self.log_model {
                "log-odds model"
            } else {
                "rule"
            },
            protein.len()
        );
        sites
    }

    /// The number of peptides [`Self::digest`] would generate for this protein, without
    /// generating them.
    pub fn peptide_count(&self, protein: &Peptidoform) -> usize {
        self.peptide_count_for(self.cleavage_sites(protein).len())
    }

    /// Digest the protein into peptides, the output is cleared first. The peptides are ordered by
    /// the number of missed cleavages they contain and within that from N to C terminal. So first
    /// all fully cleaved peptides, then all peptides with one missed cleavage, and so on.
    /// Modifications stay on the residues (and termini) they were placed on in the protein.
    /// A protein without any cut sites results in a single peptide, the protein itself.
    pub fn digest(&self, protein: &Peptidoform, output: &mut Vec<Peptidoform>) {
        output.clear();
        let mut boundaries = Vec::with_capacity(protein.len() + 2);
        boundaries.push(0);
        boundaries.extend(self.cleavage_sites(protein));
        boundaries.push(protein.len());

        let max_missed = self
            .effective_missed_cleavages()
            .min(boundaries.len() - 2);
        output.reserve(self.peptide_count_for(boundaries.len() - 2));
        for missed in 0..=max_missed {
            output.extend(
                boundaries
                    .windows(missed + 2)
                    .map(|window| protein.sub_peptide(window[0]..window[missed + 1])),
            );
        }
        log::trace!(
            "digested a protein of length {} into {} peptides (max {max_missed} missed cleavages)",
            protein.len(),
            output.len(),
        );
    }

    /// Digest the protein into a new list of peptides, see [`Self::digest`].
    pub fn digested(&self, protein: &Peptidoform) -> Vec<Peptidoform> {
        let mut output = Vec::new();
        self.digest(protein, &mut output);
        output
    }

    /// Digest all given proteins, the result has one list of peptides per protein in the same
    /// order as the proteins. With the `rayon` feature the proteins are digested in parallel.
    pub fn digest_all(&self, proteins: &[Peptidoform]) -> Vec<Vec<Peptidoform>> {
        #[cfg(feature = "rayon")]
        let iter = proteins.par_iter();
        #[cfg(not(feature = "rayon"))]
        let iter = proteins.iter();
        iter.map(|protein| self.digested(protein)).collect()
    }

    /// Check if the peptide starting at `start` with the given `length` in the protein could be
    /// generated by the enzyme given the specificity. The start of the protein is always a valid
    /// N terminus, as is position 1 if the protein starts with a methionine (the initiator
    /// methionine is often removed in vivo). The end of the protein is always a valid C terminus.
    /// Any peptide that does not lie within the protein, or is empty, is never valid.
    pub fn is_valid_product(&self, protein: &Peptidoform, start: usize, length: usize) -> bool {
        let end = match start.checked_add(length) {
            Some(end) if start < protein.len() && length > 0 && end <= protein.len() => end,
            _ => {
                log::trace!(
                    "product {start}+{length} does not fit in a protein of length {}",
                    protein.len()
                );
                return false;
            }
        };

        let specificity = self.specificity.effective();
        if specificity == Specificity::None {
            return true;
        }

        let sites = self.cleavage_sites(protein);
        let is_site = |position: usize| sites.binary_search(&position).is_ok();
        let n_valid = start == 0
            || (start == 1 && protein.aminoacid(0) == Some(AminoAcid::Methionine))
            || is_site(start);
        let c_valid = end == protein.len() || is_site(end);

        let valid = match specificity {
            Specificity::Semi => n_valid || c_valid,
            _ => n_valid && c_valid,
        };
        log::trace!(
            "product {start}+{length} is {} for {specificity} specificity (N-terminus {n_valid}, C-terminus {c_valid})",
            if valid { "valid" } else { "invalid" }
        );
        valid
    }

    /// The number of peptides generated for the given number of cut sites
    fn peptide_count_for(&self, sites: usize) -> usize {
        let segments = sites + 1;
        segments
            + (1..=self.effective_missed_cleavages().min(sites))
                .map(|missed| segments - missed)
                .sum::<usize>()
    }
}
