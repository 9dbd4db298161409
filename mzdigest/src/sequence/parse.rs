use context_error::*;

use crate::{
    helper_functions::end_of_enclosure,
    sequence::{AminoAcid, Modification, Peptidoform, SequenceElement},
};

impl Peptidoform {
    /// Parse a sequence in the bracket notation: one letter amino acid codes, each optionally
    /// followed by modifications in parentheses. Modifications in front of the first amino acid
    /// are placed on the N-terminus, modifications after a trailing `.` are placed on the
    /// C-terminus. Modification names may contain balanced parentheses themselves.
    ///
    /// ```rust
    /// # use mzdigest::prelude::*;
    /// let peptide = Peptidoform::parse("(Acetyl)PEM(Oxidation)TIDE.(Amidated)").unwrap();
    /// assert_eq!(peptide.len(), 7);
    /// assert_eq!(peptide.n_term()[0].name(), "Acetyl");
    /// assert_eq!(peptide[2].modifications[0].name(), "Oxidation");
    /// assert_eq!(peptide.c_term()[0].name(), "Amidated");
    /// ```
    ///
    /// # Errors
    /// If the line contains a character that is not an amino acid, has unbalanced parentheses, has
    /// an empty modification, or has anything but modifications after the C-terminal `.`.
    pub fn parse(value: &str) -> Result<Self, BoxedError<'_, BasicKind>> {
        let mut peptide = Self::default();
        let mut c_terminal = false;
        let mut index = 0;

        while index < value.len() {
            let Some(ch) = value[index..].chars().next() else {
                break;
            };
            match ch {
                '(' => {
                    let (modification, next) = parse_modification(value, index)?;
                    if c_terminal {
                        peptide.add_c_term(modification);
                    } else if let Some(last) = peptide.sequence_mut().last_mut() {
                        last.add_modification(modification);
                    } else {
                        peptide.add_n_term(modification);
                    }
                    index = next;
                }
                '.' if !c_terminal && !peptide.is_empty() && value[index + 1..].starts_with('(') => {
                    c_terminal = true;
                    index += 1;
                }
                _ if c_terminal => {
                    return Err(BoxedError::new(
                        BasicKind::Error,
                        "Invalid C-terminal modification",
                        "Only modifications in parentheses are allowed after the C-terminal '.'",
                        Context::line(None, value, index, ch.len_utf8()),
                    ));
                }
                _ => {
                    let aminoacid = AminoAcid::try_from(ch).map_err(|()| {
                        BoxedError::new(
                            BasicKind::Error,
                            "Invalid amino acid",
                            format!("'{ch}' is not a valid one letter amino acid code"),
                            Context::line(None, value, index, ch.len_utf8()),
                        )
                    })?;
                    peptide.push(SequenceElement::new(aminoacid));
                    index += ch.len_utf8();
                }
            }
        }

        Ok(peptide)
    }
}

/// Parse the modification that opens at `start` (the index of the opening parenthesis). Returns
/// the modification and the index right after the closing parenthesis.
fn parse_modification(
    value: &str,
    start: usize,
) -> Result<(Modification, usize), BoxedError<'_, BasicKind>> {
    let end = end_of_enclosure(value, start + 1).ok_or_else(|| {
        BoxedError::new(
            BasicKind::Error,
            "Invalid modification",
            "This modification is not closed, a ')' is missing",
            Context::line(None, value, start, value.len() - start),
        )
    })?;
    let name = &value[start + 1..end];
    if name.trim().is_empty() {
        return Err(BoxedError::new(
            BasicKind::Error,
            "Invalid modification",
            "A modification needs a name",
            Context::line(None, value, start, end + 1 - start),
        ));
    }
    Ok((Modification::new(name), end + 1))
}

impl std::str::FromStr for Peptidoform {
    type Err = BoxedError<'static, BasicKind>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).map_err(|e| e.to_owned())
    }
}
