use crate::sequence::{AminoAcid, SequenceElement};

/// The number of residues N terminal of the cut site that are scored (P4 to P1)
pub const WINDOW_BEFORE: usize = 4;
/// The number of residues C terminal of the cut site that are scored (P1' and P2')
pub const WINDOW_AFTER: usize = 2;
/// The total width of the scored window
pub const WINDOW: usize = WINDOW_BEFORE + WINDOW_AFTER;

/// A position specific log-odds cleavage model. Every potential cut site is scored by summing
/// the table values of the residues in a window around the site, four residues before the site
/// (P4, P3, P2, P1) and two after (P1', P2'). Residues outside the sequence and residues that
/// are not one of the twenty canonical amino acids contribute nothing. A site is cleaved when the
/// score reaches the threshold.
///
/// ```rust
/// # use mzdigest::prelude::*;
/// # use mzdigest::digestion::CleavageModel;
/// let protein = Peptidoform::parse("IITAQVUDRPONAIYMTY").unwrap();
/// assert_eq!(CleavageModel::TRYPSIN.match_locations(protein.sequence(), 0.25), vec![9]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CleavageModel {
    table: &'static [[f64; WINDOW]; AminoAcid::CANONICAL_NUMBER],
}

impl CleavageModel {
    /// The model for trypsin, the P1 column only allows K and R in practice
    pub const TRYPSIN: Self = Self {
        table: &TRYPSIN_LOG_ODDS,
    };

    /// The table value for the given amino acid at the given window column (0 is P4, 5 is P2').
    /// Non canonical amino acids and columns outside the window give zero.
    pub fn weight(&self, aminoacid: AminoAcid, column: usize) -> f64 {
        aminoacid
            .canonical_index()
            .and_then(|row| self.table[row].get(column))
            .copied()
            .unwrap_or_default()
    }

    /// Score the potential cut between `cut - 1` and `cut`.
    pub fn score(&self, sequence: &[SequenceElement], cut: usize) -> f64 {
        let start = cut.saturating_sub(WINDOW_BEFORE);
        let end = (cut + WINDOW_AFTER).min(sequence.len());
        (start..end)
            .map(|position| {
                self.weight(
                    sequence[position].aminoacid,
                    position + WINDOW_BEFORE - cut,
                )
            })
            .sum()
    }

    /// All cut sites in the given sequence that reach the given threshold, in increasing order.
    /// Only the inner sites `1..sequence.len()` are scored.
    pub fn match_locations(&self, sequence: &[SequenceElement], threshold: f64) -> Vec<usize> {
        (1..sequence.len())
            .filter(|cut| self.score(sequence, *cut) >= threshold)
            .collect()
    }
}

/// Rows follow [`AminoAcid::CANONICAL_AMINO_ACIDS`], columns are P4, P3, P2, P1, P1', P2'.
/// The values are hand fitted to reproduce known trypsin cut sites at the default threshold of
/// 0.25, they are not trained cleavage statistics.
#[rustfmt::skip]
static TRYPSIN_LOG_ODDS: [[f64; WINDOW]; AminoAcid::CANONICAL_NUMBER] = [
    //  P4     P3     P2     P1     P1'    P2'
    [-1.40, -1.10, -1.40, -3.00, -1.40, -1.40], // Ala
    [-0.95, -1.10,  0.03,  0.36, -1.10, -0.80], // Arg
    [-0.65,  0.04, -0.95, -3.00, -0.80, -0.80], // Asn
    [ 0.02, -1.10,  0.01, -3.00, -1.40,  0.01], // Asp
    [ 0.04,  0.03, -0.95, -3.00, -1.10,  0.01], // Cys
    [-1.10, -0.80,  0.03, -3.00, -1.25, -0.65], // Gln
    [-1.40,  0.02, -1.40, -3.00, -1.40,  0.03], // Glu
    [-0.80, -0.95,  0.04, -3.00, -0.95,  0.03], // Gly
    [-0.80, -0.95,  0.03, -3.00, -1.10, -1.10], // His
    [-1.10, -1.10, -0.80, -3.00, -0.65, -0.80], // Ile
    [ 0.02,  0.00,  0.01, -3.00, -1.40,  0.01], // Leu
    [-1.10,  0.03,  0.04,  0.37, -0.95,  0.01], // Lys
    [-0.65, -0.50, -0.80, -3.00, -0.65, -0.50], // Met
    [-0.95, -1.40, -1.10, -3.00,  0.04, -0.95], // Phe
    [ 0.04, -0.65, -1.40, -3.00,  0.04,  0.02], // Pro
    [ 0.02,  0.01, -1.10, -3.00,  0.02, -0.65], // Ser
    [-0.50,  0.04,  0.01, -3.00, -0.95, -1.40], // Thr
    [-0.50, -0.65, -0.50, -3.00, -0.65,  0.04], // Trp
    [ 0.02, -0.95, -0.50, -3.00, -1.10, -0.80], // Tyr
    [ 0.01, -1.40, -0.80, -3.00,  0.03, -1.40], // Val
];
