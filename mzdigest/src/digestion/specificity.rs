use serde::{Deserialize, Serialize};

/// How strictly the termini of a peptide have to match enzymatic cut sites to count as a product
/// of that enzyme.
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub enum Specificity {
    /// Both termini have to be cut sites (or protein termini)
    #[default]
    Full = 0,
    /// At least one terminus has to be a cut site (or protein terminus)
    Semi,
    /// No requirements on the termini
    None,
    /// Not a known specificity, treated as [`Specificity::Full`]
    Unknown,
}

/// The names of the specificities, indexed by the [`Specificity`] discriminant
pub const NAMES_OF_SPECIFICITY: [&str; 3] = ["full", "semi", "none"];

impl Specificity {
    /// All known specificities (so without [`Specificity::Unknown`]), from strict to lenient
    pub const ALL: &'static [Self] = &[Self::Full, Self::Semi, Self::None];

    /// Get the specificity by its name, the lookup is case sensitive. Unknown names give
    /// [`Specificity::Unknown`].
    pub fn by_name(name: &str) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|specificity| specificity.name() == name)
            .unwrap_or(Self::Unknown)
    }

    /// The name of this specificity, `unknown` for the sentinel
    pub fn name(self) -> &'static str {
        NAMES_OF_SPECIFICITY
            .get(self as usize)
            .copied()
            .unwrap_or("unknown")
    }

    /// The specificity that is actually applied, the sentinel falls back to full specificity
    #[must_use]
    pub const fn effective(self) -> Self {
        match self {
            Self::Unknown => Self::Full,
            other => other,
        }
    }
}

impl std::fmt::Display for Specificity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Specificity {
    type Err = std::convert::Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::by_name(s))
    }
}
