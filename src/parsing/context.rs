//! Reporting contexts: who a fact is reported for and over which period.
use super::utils::{id_suffix, parse_date};
use super::xml::Element;
use crate::error::{ElementKind, Result, XbrlError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The reporting entity and period a fact is reported against.
///
/// `id` is the 1-based position taken from the numeric suffix of the
/// element's `id` attribute (`context-3` → `3`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Context {
    pub id: u32,
    pub entity_identifier: String,
    pub period: Period,
}

/// Reporting period of a context.
///
/// Balance sheet items are reported at an instant, income statement items over a
/// range. A range may be open on either side, but never on both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Period {
    Instant(NaiveDate),
    Range {
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
}

impl Period {
    pub const fn is_instant(&self) -> bool {
        matches!(self, Period::Instant(_))
    }

    pub const fn is_duration(&self) -> bool {
        matches!(self, Period::Range { .. })
    }

    pub fn start(&self) -> Option<NaiveDate> {
        match self {
            Period::Instant(date) => Some(*date),
            Period::Range { start, .. } => *start,
        }
    }

    pub fn end(&self) -> Option<NaiveDate> {
        match self {
            Period::Instant(date) => Some(*date),
            Period::Range { end, .. } => *end,
        }
    }

    /// Length of a closed range in days; `None` for instants and open ranges
    pub fn duration_days(&self) -> Option<i64> {
        match self {
            Period::Range {
                start: Some(start),
                end: Some(end),
            } => Some(end.signed_duration_since(*start).num_days()),
            _ => None,
        }
    }
}

/// Converts a `context` element into a [`Context`].
///
/// The element needs an `id` ending in a positive number, an
/// `entity/identifier` with non-empty text, and a `period` carrying at least
/// one of `instant`, `startDate` or `endDate`. Bounds are read from the
/// period's attributes, falling back to child elements of the same name as
/// written in plain XBRL instance documents. When `instant` is present the
/// period is an instant and any range bounds are ignored.
///
/// # Errors
///
/// Any missing or malformed piece is a [`XbrlError::Structural`] error.
pub fn extract_context(element: &Element) -> Result<Context> {
    let raw_id = element.attribute("id");
    let fail = |reason: &str| XbrlError::structural(ElementKind::Context, raw_id, reason);

    let id = raw_id
        .and_then(id_suffix)
        .ok_or_else(|| fail("id is missing or has no numeric suffix"))?;

    let period = element
        .find("period")
        .ok_or_else(|| fail("missing period"))?;
    let entity = element
        .find("entity")
        .ok_or_else(|| fail("missing entity"))?;
    let identifier = entity
        .find("identifier")
        .ok_or_else(|| fail("missing entity identifier"))?
        .text_content();
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return Err(fail("entity identifier is empty"));
    }

    let bound = |name: &str| -> Result<Option<NaiveDate>> {
        let raw = period
            .attribute(name)
            .map(str::to_string)
            .or_else(|| period.find(name).map(Element::text_content));
        match raw {
            None => Ok(None),
            Some(raw) => parse_date(&raw)
                .map(Some)
                .ok_or_else(|| fail(&format!("invalid {name} date {raw:?}"))),
        }
    };

    let instant = bound("instant")?;
    let start = bound("startDate")?;
    let end = bound("endDate")?;

    let period = match (instant, start, end) {
        (Some(instant), _, _) => Period::Instant(instant),
        (None, None, None) => return Err(fail("period has no instant, startDate or endDate")),
        (None, start, end) => Period::Range { start, end },
    };

    Ok(Context {
        id,
        entity_identifier: identifier.to_string(),
        period,
    })
}
