use serde::{Deserialize, Serialize};

use crate::digestion::{CleavageModel, Protease, known_proteases};

/// The enzymes known to the digestion engine. [`Enzyme::Unknown`] is the result of looking up a
/// name that is not known, digesting with it never cuts.
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub enum Enzyme {
    /// Trypsin, cuts after K and R unless followed by P
    #[default]
    Trypsin = 0,
    /// Not a known enzyme
    Unknown,
}

/// The names of the known enzymes, indexed by the [`Enzyme`] discriminant
pub const NAMES_OF_ENZYMES: &[&str] = &["Trypsin"];

impl Enzyme {
    /// All known enzymes (so without [`Enzyme::Unknown`])
    pub const ALL: &'static [Self] = &[Self::Trypsin];

    /// Get the enzyme by its name, the lookup is case sensitive. Unknown names give
    /// [`Enzyme::Unknown`].
    pub fn by_name(name: &str) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|enzyme| enzyme.name() == name)
            .unwrap_or(Self::Unknown)
    }

    /// The name of this enzyme, `unknown` for the sentinel
    pub fn name(self) -> &'static str {
        NAMES_OF_ENZYMES
            .get(self as usize)
            .copied()
            .unwrap_or("unknown")
    }

    /// The deterministic cleavage rule of this enzyme
    pub fn protease(self) -> Option<&'static Protease> {
        match self {
            Self::Trypsin => Some(&*known_proteases::TRYPSIN),
            Self::Unknown => None,
        }
    }

    /// The log-odds cleavage model of this enzyme
    pub const fn cleavage_model(self) -> Option<&'static CleavageModel> {
        match self {
            Self::Trypsin => Some(&CleavageModel::TRYPSIN),
            Self::Unknown => None,
        }
    }
}

impl std::fmt::Display for Enzyme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Enzyme {
    type Err = std::convert::Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::by_name(s))
    }
}
