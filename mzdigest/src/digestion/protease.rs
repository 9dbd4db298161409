use std::sync::LazyLock;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::sequence::{AminoAcid, SequenceElement};

/// A protease defined by it ability to cut at any site identified by the right amino acids at the n and c terminal.
/// Each position is identified by an option, a none means that there is no specificity at this position. If there is
/// a specificity at a certain position any amino acid that is contained in the set is allowed. Amino acids are
/// compared by identity, so an ambiguous or non-standard residue only matches if it is listed itself.
/// Modifications on the residues never influence the match.
///
/// ```rust
/// # use mzdigest::prelude::*;
/// # use mzdigest::digestion::known_proteases;
/// let sequence = Peptidoform::parse("SIADIRGRKM").unwrap();
///
/// // Get all locations where trypsin would cut
/// let cut_sites = known_proteases::TRYPSIN.match_locations(sequence.sequence());
///
/// assert_eq!(cut_sites, vec![6, 8, 9]);
/// ```
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Protease {
    /// The amino acids n terminal of the cut site.
    pub before: Vec<Option<Vec<AminoAcid>>>,
    /// The amino acids c terminal of the cut site.
    pub after: Vec<Option<Vec<AminoAcid>>>,
}

impl Protease {
    /// Define a protease that cuts exactly between the specified options before the site and the specified options after the site.
    pub fn between_options(before: Vec<AminoAcid>, after: Vec<AminoAcid>) -> Self {
        Self {
            before: vec![Some(before)],
            after: vec![Some(after)],
        }
    }

    /// Helper function to get a list of all amino acids except the ones given
    pub fn get_exclusive(exclude: &[AminoAcid]) -> Vec<AminoAcid> {
        AminoAcid::ALL_AMINO_ACIDS
            .iter()
            .copied()
            .filter(|aa| !exclude.contains(aa))
            .collect_vec()
    }

    /// All locations in the given sequence where this protease could cut, in increasing order.
    /// A location `i` means a cut between the residues at `i - 1` and `i`. The termini (`0` and
    /// `sequence.len()`) are never reported.
    pub fn match_locations(&self, sequence: &[SequenceElement]) -> Vec<usize> {
        let upper = sequence
            .len()
            .saturating_sub(self.after.len())
            .min(sequence.len().saturating_sub(1));
        (self.before.len().max(1)..=upper)
            .filter(|i| self.matches_at(&sequence[i - self.before.len()..i + self.after.len()]))
            .collect_vec()
    }

    fn matches_at(&self, slice: &[SequenceElement]) -> bool {
        debug_assert!(slice.len() == self.before.len() + self.after.len());
        slice
            .iter()
            .zip(self.before.iter().chain(self.after.iter()))
            .all(|(actual, pattern)| {
                pattern
                    .as_ref()
                    .is_none_or(|options| options.contains(&actual.aminoacid))
            })
    }
}

/// Some well known and widely used proteases
pub mod known_proteases {
    use super::*;

    /// `Trypsin` cuts after Lysine (K) or Arginine (R), unless followed by Proline (P)
    pub static TRYPSIN: LazyLock<Protease> = LazyLock::new(|| {
        Protease::between_options(
            vec![AminoAcid::Lysine, AminoAcid::Arginine],
            Protease::get_exclusive(&[AminoAcid::Proline]),
        )
    });
}
