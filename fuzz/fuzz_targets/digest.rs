//! Fuzz target for digesting arbitrary proteins, the first byte picks the settings
use afl::*;
use mzdigest::prelude::*;

fn main() {
    fuzz!(|data: &[u8]| {
        if let Some((settings, rest)) = data.split_first()
            && let Ok(s) = std::str::from_utf8(rest)
            && let Ok(protein) = Peptidoform::parse(s)
        {
            let digestion = EnzymaticDigestion::default()
                .with_missed_cleavages(usize::from(settings & 0b11))
                .with_log_model(settings & 0b100 != 0)
                .with_specificity(Specificity::ALL[usize::from(settings >> 3) % 3]);
            let peptides = digestion.digested(&protein);
            assert_eq!(peptides.len(), digestion.peptide_count(&protein));

            let fully_cleaved = digestion.cleavage_sites(&protein).len() + 1;
            let joined: String = peptides[..fully_cleaved]
                .iter()
                .map(ToString::to_string)
                .collect();
            assert_eq!(joined, protein.to_string());

            assert_eq!(
                digestion.is_valid_product(&protein, 0, protein.len()),
                !protein.is_empty()
            );
        }
    });
}
