use std::fmt;
use thiserror::Error;

/// The kind of element a structural error was raised for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Context,
    Unit,
    Fact,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ElementKind::Context => "context",
            ElementKind::Unit => "unit",
            ElementKind::Fact => "fact",
        })
    }
}

#[derive(Error, Debug)]
pub enum XbrlError {
    #[error("Could not convert {kind} element {}: {reason}", .id.as_deref().unwrap_or("<no id>"))]
    Structural {
        kind: ElementKind,
        id: Option<String>,
        reason: String,
    },

    #[error("Fact {fact_id} references missing context {context_ref}")]
    DanglingReference { fact_id: u32, context_ref: u32 },

    #[error("Unknown taxonomy: {0}")]
    UnknownTaxonomy(String),

    #[error("XML parsing error: {0}")]
    XmlError(String),
}

impl XbrlError {
    pub(crate) fn structural(
        kind: ElementKind,
        id: Option<&str>,
        reason: impl Into<String>,
    ) -> Self {
        XbrlError::Structural {
            kind,
            id: id.map(str::to_string),
            reason: reason.into(),
        }
    }
}

#[cfg(feature = "document")]
impl From<quick_xml::Error> for XbrlError {
    fn from(error: quick_xml::Error) -> Self {
        XbrlError::XmlError(error.to_string())
    }
}

#[cfg(feature = "document")]
impl From<quick_xml::events::attributes::AttrError> for XbrlError {
    fn from(error: quick_xml::events::attributes::AttrError) -> Self {
        XbrlError::XmlError(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, XbrlError>;
