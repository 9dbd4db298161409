//! Digestion of full proteins, counting, and validation of enzymatic products
use mzdigest::{
    digestion::{NAMES_OF_ENZYMES, NAMES_OF_SPECIFICITY},
    prelude::*,
};

/// Serum albumin precursor (P02768)
const ALBUMIN: &str = concat!(
    "MKWVTFISLLLLFSSAYSRGVFRRDTHKSEIAHRFKDLGEEHFKGLVLIAFSQYLQQCPFDEHVKLVNELTEFAKTCVAD",
    "ESHAGCEKSLHTLFGDELCKVASLRETYGDMADCCEKQEPERNECFLSHKDDSPDLPKLKPDPNTLCDEFKADEKKFWGK",
    "YLYEIARRHPYFYAPELLYYANKYNGVFQECQAEDKGACLLPKIETMREKVLASSARQRLRCASIQKFGERALKAWSVAR",
    "LSQKFPKAEFVEVTKLVTDLTKVHKECCHGDLLECADDRADLAKYICDNQDTISSKLKECCDKPLLEKSHCIAEVEKDAI",
    "PENLPPLTADFAEDKDVCKNYQEAKDAFLGSFLYEYSRRHPEYAVSVLLRLAKEYEATLEECCKDDPHACYSTVFDKLKH",
    "LVDEPQNLIKQNCDQFEKLGEYGFQNALIVRYTRKVPQVSTPTLVEVSRSLGKVGTRCCTKPESERMPCTEDYLSLILNR",
    "LCVLHEKTPVSEKVTKCCTESLVNRRPCFSALTPDETYVPKAFDEKLFTFHADICTLPDTEKQIKKQTALVELLKHKPKA",
    "TEEQLKTVMENFVAFDKCCAADDKEACFAVEGPKLVVSTQTALA",
);

fn protein(sequence: &str) -> Peptidoform {
    Peptidoform::parse(sequence).unwrap()
}

fn digest(digestion: &EnzymaticDigestion, sequence: &str) -> Vec<String> {
    digestion
        .digested(&protein(sequence))
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[test]
fn count_without_missed_cleavages() {
    let digestion = EnzymaticDigestion::default();
    for (sequence, count) in [
        ("ACDE", 1),
        ("ACKDE", 2),
        ("ACRDE", 2),
        ("ACKPDE", 1),
        ("ACRPDE", 1),
        ("ARCRDRE", 4),
        ("RKR", 3),
    ] {
        assert_eq!(digestion.peptide_count(&protein(sequence)), count, "{sequence}");
    }
}

#[test]
fn count_with_missed_cleavages() {
    let one = EnzymaticDigestion::default().with_missed_cleavages(1);
    let three = EnzymaticDigestion::default().with_missed_cleavages(3);
    for (sequence, count_one, count_three) in [
        ("ACDE", 1, 1),
        ("ACRDE", 3, 3),
        ("ARCDRE", 5, 6),
        ("RKR", 5, 6),
    ] {
        let sequence = protein(sequence);
        assert_eq!(one.peptide_count(&sequence), count_one, "{sequence}");
        assert_eq!(three.peptide_count(&sequence), count_three, "{sequence}");
    }
}

#[test]
fn count_with_log_model() {
    for missed in [0, 1, 3] {
        let digestion = EnzymaticDigestion::default()
            .with_missed_cleavages(missed)
            .with_log_model(true);
        assert_eq!(digestion.peptide_count(&protein(ALBUMIN)), 11);
        assert_eq!(digestion.peptide_count(&protein("IITAQVUDRPONAIYMTY")), 2);
    }
}

#[test]
fn digest_without_missed_cleavages() {
    let digestion = EnzymaticDigestion::default();
    assert_eq!(digest(&digestion, "ACDE"), ["ACDE"]);
    assert_eq!(digest(&digestion, "ACKDE"), ["ACK", "DE"]);
    assert_eq!(digest(&digestion, "ACRDE"), ["ACR", "DE"]);
    assert_eq!(digest(&digestion, "ACKPDE"), ["ACKPDE"]);
    assert_eq!(digest(&digestion, "ACRPDE"), ["ACRPDE"]);
    assert_eq!(digest(&digestion, "ARCRDRE"), ["AR", "CR", "DR", "E"]);
    assert_eq!(digest(&digestion, "RKR"), ["R", "K", "R"]);
}

#[test]
fn digest_with_missed_cleavages() {
    let digestion = EnzymaticDigestion::default().with_missed_cleavages(1);
    assert_eq!(digest(&digestion, "ACDE"), ["ACDE"]);
    assert_eq!(digest(&digestion, "ACRDE"), ["ACR", "DE", "ACRDE"]);
    assert_eq!(
        digest(&digestion, "ARCDRE"),
        ["AR", "CDR", "E", "ARCDR", "CDRE"]
    );
    assert_eq!(digest(&digestion, "RKR"), ["R", "K", "R", "RK", "KR"]);
}

#[test]
fn digest_keeps_modifications() {
    let digestion = EnzymaticDigestion::default().with_missed_cleavages(1);
    assert_eq!(
        digest(&digestion, "(ICPL:2H(4))ARCDRE"),
        [
            "(ICPL:2H(4))AR",
            "CDR",
            "E",
            "(ICPL:2H(4))ARCDR",
            "CDRE"
        ]
    );
    assert_eq!(
        digest(&digestion, "ARCDRE(Amidated)"),
        ["AR", "CDR", "E(Amidated)", "ARCDR", "CDRE(Amidated)"]
    );
    assert_eq!(
        digest(&digestion, "ARCDRE.(Amidated)"),
        ["AR", "CDR", "E.(Amidated)", "ARCDR", "CDRE.(Amidated)"]
    );
    // A modification on the cleaved residue does not prevent the cut
    assert_eq!(
        digest(&digestion, "AK(Acetyl)DE"),
        ["AK(Acetyl)", "DE", "AK(Acetyl)DE"]
    );
}

#[test]
fn digest_with_log_model() {
    let expected = [
        "MKWVTFISLLLLFSSAYSRGVFRRDTHK",
        "SEIAHRFKDLGEEHFKGLVLIAFSQYLQQCPFDEHVKLVNELTEFAKTCVADESHAGCEKSLHTLFGDELCKVASLRETYGDMADCCEKQEPERNECFLSHKDDSPDLPKLK",
        "PDPNTLCDEFKADEKK",
        "FWGKYLYEIARRHPYFYAPELLYYANKYNGVFQECQAEDKGACLLPKIETMREKVLASSARQRLRCASIQKFGERALKAWSVARLSQK",
        "FPKAEFVEVTKLVTDLTKVHKECCHGDLLECADDRADLAKYICDNQDTISSKLKECCDK",
        "PLLEKSHCIAEVEKDAIPENLPPLTADFAEDKDVCKNYQEAKDAFLGSFLYEYSRRHPEYAVSVLLRLAKEYEATLEECCKDDPHACYSTVFDKLKHLVDEPQNLIKQNCDQFEKLGEYGFQNALIVRYTRK",
        "VPQVSTPTLVEVSRSLGK",
        "VGTRCCTK",
        "PESERMPCTEDYLSLILNRLCVLHEKTPVSEKVTKCCTESLVNRR",
        "PCFSALTPDETYVPKAFDEKLFTFHADICTLPDTEKQIKKQTALVELLKHK",
        "PKATEEQLKTVMENFVAFDKCCAADDKEACFAVEGPKLVVSTQTALA",
    ];
    for missed in [0, 1, 3] {
        let digestion = EnzymaticDigestion::default()
            .with_missed_cleavages(missed)
            .with_log_model(true);
        assert_eq!(digest(&digestion, ALBUMIN), expected);
    }

    let digestion = EnzymaticDigestion::default().with_log_model(true);
    assert_eq!(
        digest(&digestion, "IITAQVUDRPONAIYMTY"),
        ["IITAQVUDR", "PONAIYMTY"]
    );
}

#[test]
fn digest_reuses_output() {
    let digestion = EnzymaticDigestion::default();
    let mut output = vec![protein("WWWW"); 10];
    digestion.digest(&protein("ACKDE"), &mut output);
    assert_eq!(output.len(), 2);
    assert_eq!(output[0].to_string(), "ACK");
}

#[test]
fn digest_all_keeps_order() {
    let digestion = EnzymaticDigestion::default();
    let proteins = [protein("ACKDE"), protein("ACDE"), protein("RKR")];
    let all = digestion.digest_all(&proteins);
    assert_eq!(all.len(), 3);
    for (peptides, protein) in all.iter().zip(&proteins) {
        assert_eq!(peptides, &digestion.digested(protein));
    }
}

#[test]
fn digestion_invariants() {
    let sequences = [
        "",
        "K",
        "ACDE",
        "RKR",
        "ARCRDRE",
        "MBCDEFGKABCRAAAKAA",
        "ABCDEFGKABCRAAAKAARPBBBB",
        "IITAQVUDRPONAIYMTY",
        "(Acetyl)AK(Oxidation)RPM(Oxidation)KDE.(Amidated)",
        "(ICPL:2H(4))MKR(Deamidated)PKAUK.(Amidated)",
        ALBUMIN,
    ];
    for log_model in [false, true] {
        for sequence in sequences {
            let sequence = protein(sequence);
            let mut previous = 0;
            for missed in 0..5 {
                let digestion = EnzymaticDigestion::default()
                    .with_missed_cleavages(missed)
                    .with_log_model(log_model);
                let peptides = digestion.digested(&sequence);
                assert_eq!(peptides.len(), digestion.peptide_count(&sequence));
                assert!(peptides.len() >= previous);
                previous = peptides.len();

                let sites = digestion.cleavage_sites(&sequence);
                assert!(sites.windows(2).all(|w| w[0] < w[1]));
                assert!(sites.iter().all(|s| (1..sequence.len()).contains(s)));

                // The first tier rebuilds the protein, modifications included
                let joined: String = peptides[..=sites.len()]
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                assert_eq!(joined, sequence.to_string());

                if missed == 0 && !log_model {
                    for peptide in &peptides {
                        assert!(
                            !peptide.sequence().windows(2).any(|pair| {
                                matches!(pair[0].aminoacid, AminoAcid::Lysine | AminoAcid::Arginine)
                                    && pair[1].aminoacid != AminoAcid::Proline
                            }),
                            "{peptide} contains an uncleaved site"
                        );
                    }
                }

                for specificity in Specificity::ALL {
                    let digestion = digestion.clone().with_specificity(*specificity);
                    assert_eq!(
                        digestion.is_valid_product(&sequence, 0, sequence.len()),
                        !sequence.is_empty()
                    );
                }
            }
        }
    }
}

#[test]
fn validation_is_monotonic_in_specificity() {
    let sequences = [
        "",
        "K",
        "RKR",
        "ARCRDRE",
        "MBCDEFGKABCRAAAKAA",
        "ABCDEFGKABCRAAAKAARPBBBB",
        "IITAQVUDRPONAIYMTY",
        "(ICPL:2H(4))MKR(Deamidated)PKAUK.(Amidated)",
    ];
    for log_model in [false, true] {
        let base = EnzymaticDigestion::default().with_log_model(log_model);
        let full = base.clone().with_specificity(Specificity::Full);
        let semi = base.clone().with_specificity(Specificity::Semi);
        let none = base.with_specificity(Specificity::None);
        for sequence in sequences {
            let sequence = protein(sequence);
            for start in 0..=sequence.len() + 1 {
                for length in 0..=sequence.len() + 1 {
                    let valid_full = full.is_valid_product(&sequence, start, length);
                    let valid_semi = semi.is_valid_product(&sequence, start, length);
                    let valid_none = none.is_valid_product(&sequence, start, length);
                    assert!(
                        !valid_full || valid_semi,
                        "{sequence} {start}+{length} is full but not semi"
                    );
                    assert!(
                        !valid_semi || valid_none,
                        "{sequence} {start}+{length} is semi but not none"
                    );
                }
            }
        }
    }
}

#[test]
fn initiator_methionine_is_not_a_cut() {
    let digestion = EnzymaticDigestion::default().with_missed_cleavages(2);
    let sequence = protein("MKDEFRAA");
    assert!(!digestion.cleavage_sites(&sequence).contains(&1));
    assert!(
        digestion
            .digested(&sequence)
            .iter()
            .all(|peptide| !peptide.to_string().starts_with('K'))
    );
    assert!(digestion.is_valid_product(&sequence, 1, 5));
}

fn validate(specificity: Specificity, expected: [bool; 13], expected_met: [bool; 2]) {
    let digestion = EnzymaticDigestion::default()
        .with_enzyme(Enzyme::Trypsin)
        .with_specificity(specificity);
    let sequence = protein("ABCDEFGKABCRAAAKAARPBBBB");
    let empty = protein("");
    let cases = [
        (&sequence, 100, 3),
        (&sequence, 10, 300),
        (&sequence, 10, 0),
        (&empty, 10, 0),
        (&sequence, 0, 3),
        (&sequence, 0, 8),
        (&sequence, 8, 4),
        (&sequence, 8, 8),
        (&sequence, 0, 19),
        (&sequence, 8, 3),
        (&sequence, 3, 6),
        (&sequence, 1, 7),
        (&sequence, 0, sequence.len()),
    ];
    for ((protein, start, length), expected) in cases.into_iter().zip(expected) {
        assert_eq!(
            digestion.is_valid_product(protein, start, length),
            expected,
            "{specificity} {protein} {start}+{length}"
        );
    }

    let met = protein("MBCDEFGKABCRAAAKAA");
    assert_eq!(digestion.is_valid_product(&met, 1, 7), expected_met[0]);
    assert_eq!(
        digestion.is_valid_product(&met, 0, met.len()),
        expected_met[1]
    );
}

#[test]
fn valid_product_full() {
    validate(
        Specificity::Full,
        [
            false, false, false, false, false, true, true, true, false, false, false, false, true,
        ],
        [true, true],
    );
}

#[test]
fn valid_product_semi() {
    validate(
        Specificity::Semi,
        [
            false, false, false, false, true, true, true, true, true, true, false, true, true,
        ],
        [true, true],
    );
}

#[test]
fn valid_product_none() {
    validate(
        Specificity::None,
        [
            false, false, false, false, true, true, true, true, true, true, true, true, true,
        ],
        [true, true],
    );
}

#[test]
fn configuration() {
    let mut digestion = EnzymaticDigestion::default();
    assert_eq!(digestion.missed_cleavages(), 0);
    assert_eq!(digestion.enzyme(), Enzyme::Trypsin);
    assert_eq!(digestion.specificity(), Specificity::Full);
    assert!(!digestion.is_log_model_enabled());

    digestion.set_missed_cleavages(5);
    assert_eq!(digestion.missed_cleavages(), 5);
    digestion.set_enzyme(Enzyme::Unknown);
    assert_eq!(digestion.enzyme(), Enzyme::Unknown);
    digestion.set_enzyme(Enzyme::Trypsin);
    digestion.set_specificity(Specificity::None);
    assert_eq!(digestion.specificity(), Specificity::None);
    digestion.set_specificity(Specificity::Semi);
    assert_eq!(digestion.specificity(), Specificity::Semi);
    digestion.set_log_model_enabled(true);
    assert!(digestion.is_log_model_enabled());
    digestion.set_log_model_enabled(false);
    assert!(!digestion.is_log_model_enabled());
    digestion.set_log_threshold(1.234);
    assert!((digestion.log_threshold() - 1.234).abs() < f64::EPSILON);
}

#[test]
fn names() {
    assert_eq!(Enzyme::by_name("Trypsin"), Enzyme::Trypsin);
    assert_eq!(Enzyme::by_name("DoesNotExist"), Enzyme::Unknown);
    assert_eq!(NAMES_OF_ENZYMES[Enzyme::Trypsin as usize], "Trypsin");
    assert_eq!(Specificity::by_name(NAMES_OF_SPECIFICITY[0]), Specificity::Full);
    assert_eq!(Specificity::by_name(NAMES_OF_SPECIFICITY[1]), Specificity::Semi);
    assert_eq!(Specificity::by_name(NAMES_OF_SPECIFICITY[2]), Specificity::None);
    assert_eq!(Specificity::by_name("DoesNotExist"), Specificity::Unknown);
}
