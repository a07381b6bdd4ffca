use crate::XbrlError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Taxonomies commonly found in SEC filings.
///
/// Lookups accept any string, so facts from other taxonomies (company
/// extensions such as `aapl`) remain queryable without a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Taxonomy {
    #[serde(rename = "us-gaap")]
    UsGaap,
    #[serde(rename = "ifrs")]
    Ifrs,
    #[serde(rename = "dei")]
    Dei,
    #[serde(rename = "srt")]
    Srt,
    #[serde(rename = "invest")]
    Invest,
}

impl Taxonomy {
    pub const VARIANTS: &'static [(&'static str, Taxonomy)] = &[
        ("us-gaap", Taxonomy::UsGaap),
        ("ifrs", Taxonomy::Ifrs),
        ("dei", Taxonomy::Dei),
        ("srt", Taxonomy::Srt),
        ("invest", Taxonomy::Invest),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Taxonomy::UsGaap => "us-gaap",
            Taxonomy::Ifrs => "ifrs",
            Taxonomy::Dei => "dei",
            Taxonomy::Srt => "srt",
            Taxonomy::Invest => "invest",
        }
    }
}

impl FromStr for Taxonomy {
    type Err = XbrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::VARIANTS
            .iter()
            .find(|(name, _)| s.eq_ignore_ascii_case(name))
            .map(|(_, variant)| *variant)
            .ok_or_else(|| XbrlError::UnknownTaxonomy(s.to_string()))
    }
}

impl AsRef<str> for Taxonomy {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Taxonomy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
