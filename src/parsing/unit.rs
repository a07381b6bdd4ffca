use super::xml::Element;
use crate::error::{ElementKind, Result, XbrlError};
use serde::{Deserialize, Serialize};

/// A unit of measure declared by a filing.
///
/// Facts refer to units by the raw `unitRef` string, so the id is kept verbatim
/// (`"usd"`, `"unit-1"`, `"usdPerShare"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub id: String,
    pub measure: Measure,
}

/// Either a single measure such as `iso4217:USD`, or a ratio such as USD per share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Measure {
    Simple(String),
    Ratio {
        numerator: String,
        denominator: String,
    },
}

impl Measure {
    pub fn is_ratio(&self) -> bool {
        matches!(self, Measure::Ratio { .. })
    }
}

/// Converts a `unit` element into a [`Unit`].
///
/// A `measure` descendant with text makes a simple unit. Otherwise a `divide`
/// descendant must hold both `unitNumerator` and `unitDenominator` with text.
/// A `measure` nested inside `divide` belongs to the ratio, not to the unit itself.
///
/// # Errors
///
/// Returns [`XbrlError::Structural`] if the id is missing, neither form is
/// present, or the relevant text is empty.
pub fn extract_unit(element: &Element) -> Result<Unit> {
    let raw_id = element.attribute("id");
    let fail = |reason: &str| XbrlError::structural(ElementKind::Unit, raw_id, reason);

    let id = raw_id
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| fail("missing id"))?;

    let measure = match element.find("divide") {
        Some(divide) => {
            let part = |name: &str| {
                divide
                    .find(name)
                    .map(|e| e.text_content().trim().to_string())
                    .filter(|text| !text.is_empty())
                    .ok_or_else(|| fail(&format!("divide has no {name}")))
            };
            Measure::Ratio {
                numerator: part("unitNumerator")?,
                denominator: part("unitDenominator")?,
            }
        }
        None => {
            let measure = element
                .find("measure")
                .ok_or_else(|| fail("has neither measure nor divide"))?
                .text_content();
            let measure = measure.trim();
            if measure.is_empty() {
                return Err(fail("measure is empty"));
            }
            Measure::Simple(measure.to_string())
        }
    };

    Ok(Unit {
        id: id.to_string(),
        measure,
    })
}
