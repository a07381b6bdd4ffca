//! Fact records extracted from namespace-qualified filing elements.
use super::utils::{id_suffix, split_qualified_name};
use super::xml::Element;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A reported value, coerced from the element text.
///
/// Serializes untagged: integers as JSON numbers, text as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FactValue {
    Integer(i64),
    Decimal(BigDecimal),
    Text(String),
}

impl FactValue {
    /// Coerces raw element text into a value.
    ///
    /// Surrounding whitespace is ignored for the numeric checks. An optionally
    /// signed run of ASCII digits that fits an `i64` becomes [`FactValue::Integer`].
    /// An optionally signed `digits.digits` literal, or an integer too large for
    /// `i64`, becomes an arbitrary-precision [`FactValue::Decimal`] holding every
    /// digit of the text. Everything else, including exponents and thousands
    /// separators, is kept verbatim as [`FactValue::Text`].
    ///
    /// ```rust
    /// use bigdecimal::BigDecimal;
    /// use std::str::FromStr;
    /// use xbrlkit::FactValue;
    ///
    /// assert_eq!(FactValue::coerce("1000"), FactValue::Integer(1000));
    /// assert_eq!(
    ///     FactValue::coerce("123.45"),
    ///     FactValue::Decimal(BigDecimal::from_str("123.45").unwrap())
    /// );
    /// assert_eq!(FactValue::coerce("1,000"), FactValue::Text("1,000".to_string()));
    /// ```
    pub fn coerce(raw: &str) -> Self {
        let trimmed = raw.trim();
        let Some(has_fraction) = numeric_literal(trimmed) else {
            return FactValue::Text(raw.to_string());
        };

        if !has_fraction {
            if let Ok(n) = trimmed.parse::<i64>() {
                return FactValue::Integer(n);
            }
        }

        match BigDecimal::from_str(trimmed) {
            Ok(d) => FactValue::Decimal(d),
            Err(_) => FactValue::Text(raw.to_string()),
        }
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(self, FactValue::Text(_))
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FactValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Numeric value as a decimal; integers widen losslessly
    pub fn as_decimal(&self) -> Option<BigDecimal> {
        match self {
            FactValue::Integer(n) => Some(BigDecimal::from(*n)),
            FactValue::Decimal(d) => Some(d.clone()),
            FactValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FactValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for FactValue {
    fn from(raw: &str) -> Self {
        FactValue::coerce(raw)
    }
}

impl fmt::Display for FactValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactValue::Integer(n) => write!(f, "{n}"),
            FactValue::Decimal(d) => write!(f, "{d}"),
            FactValue::Text(s) => f.write_str(s),
        }
    }
}

/// Checks for a `[+-]digits[.digits]` literal, returning whether it has a fraction.
fn numeric_literal(s: &str) -> Option<bool> {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    let (digits, fraction) = match unsigned.split_once('.') {
        Some((digits, fraction)) => (digits, Some(fraction)),
        None => (unsigned, None),
    };
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(digits) || fraction.is_some_and(|f| !all_digits(f)) {
        return None;
    }
    Some(fraction.is_some())
}

/// A fact as stored in the filing index, before its context is attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactRecord {
    /// 1-based position from the numeric suffix of the element id
    pub id: u32,
    pub taxonomy: String,
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimals: Option<i32>,
    /// 1-based position of the referenced context
    pub context_ref: u32,
    pub value: FactValue,
}

impl FactRecord {
    /// `taxonomy:tag`
    pub fn qualified_name(&self) -> String {
        format!("{}:{}", self.taxonomy, self.tag)
    }

    pub fn matches(&self, taxonomy: &str, tag: &str) -> bool {
        self.taxonomy == taxonomy && self.tag == tag
    }
}

/// Converts a fact candidate element into a [`FactRecord`].
///
/// Returns `None` (the element is skipped, not an error) when the element has
/// no namespace prefix, no text, or lacks an `id` or `contextRef` with a
/// positive numeric suffix. `decimals` values that are not integers, such as
/// `INF`, are read as absent.
pub fn extract_fact(element: &Element) -> Option<FactRecord> {
    let skip = |reason: &str| {
        tracing::debug!(
            "Skipping fact element {} ({:?}): {}",
            element.name,
            element.attribute("id"),
            reason
        );
    };

    let Some((taxonomy, tag)) = split_qualified_name(&element.name) else {
        skip("name is not namespace-qualified");
        return None;
    };
    let Some(id) = element.attribute("id").and_then(id_suffix) else {
        skip("missing or non-numeric id");
        return None;
    };
    let Some(context_ref) = element.attribute("contextRef").and_then(id_suffix) else {
        skip("missing or non-numeric contextRef");
        return None;
    };
    let text = element.text_content();
    if text.trim().is_empty() {
        skip("empty value");
        return None;
    }

    let decimals = element
        .attribute("decimals")
        .and_then(|d| d.trim().parse::<i32>().ok());
    let unit_ref = element.attribute("unitRef").map(str::to_string);

    Some(FactRecord {
        id,
        taxonomy: taxonomy.to_string(),
        tag: tag.to_string(),
        unit_ref,
        decimals,
        context_ref,
        value: FactValue::coerce(&text),
    })
}
