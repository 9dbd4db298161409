//! Fuzz target for parsing peptidoforms, anything that parses has to survive a render and reparse
use afl::*;
use mzdigest::sequence::Peptidoform;

fn main() {
    fuzz!(|data: &[u8]| {
        if let Ok(s) = std::str::from_utf8(data)
            && let Ok(peptide) = Peptidoform::parse(s)
        {
            let rendered = peptide.to_string();
            let reparsed = Peptidoform::parse(&rendered).unwrap();
            assert_eq!(peptide, reparsed, "{s} was rendered as {rendered}");
        }
    });
}
