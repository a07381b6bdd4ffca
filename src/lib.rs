//! # xbrlkit - Fact extraction for XBRL-tagged SEC filings
//!
//! xbrlkit turns the element tree of an XBRL financial statement into an
//! immutable, indexed [`Filing`] and answers queries such as "what did the
//! filer report for `us-gaap:AccountsPayableCurrent`, and for which period?".
//!
//! ## Features
//!
//! - **Context extraction** - Reporting entity plus instant or range period
//! - **Unit extraction** - Simple measures and numerator/denominator ratios
//! - **Fact extraction** - Taxonomy, tag, unit, decimals and a lossless value
//! - **Fact resolution** - Lookup by id, by qualified name, or by predicate,
//!   each fact joined with its context
//! - **Document parsing** - Optional text → element tree front end (`document` feature)
//!
//! ## Document layout
//!
//! The root element is expected to list all `context` elements first, then all
//! `unit` elements, then the facts. Context and fact ids end in their 1-based
//! position (`context-1`, `fact-178`) and a fact's `contextRef` names its
//! context the same way. Violations are reported as errors under the default
//! [`FilingConfig`]; see [`IdPolicy`] for the lenient alternative.
//!
//! ## Basic Usage
//!
//! ```ignore
//! use xbrlkit::{FactLookup, Filing};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let content = std::fs::read_to_string("aapl-20230701_htm.xml")?;
//!     let filing = Filing::from_document(&content)?;
//!
//!     if let Some(fact) = filing.fact_by_name("us-gaap:AccountsPayableCurrent")? {
//!         println!("{} = {} at {:?}", fact.qualified_name(), fact.value, fact.context.period);
//!     }
//!
//!     let usd = filing.filter_facts(|f| f.unit_ref.as_deref() == Some("usd"))?;
//!     println!("{} facts in USD", usd.len());
//!
//!     Ok(())
//! }
//! ```

mod config;
mod error;
mod filing;
pub mod parsing;
mod taxonomy;
mod traits;

pub use config::{FilingConfig, IdPolicy};
pub use error::{ElementKind, Result, XbrlError};
pub use filing::{Fact, Filing};
pub use parsing::context::{Context, Period};
pub use parsing::fact::{FactRecord, FactValue};
pub use parsing::unit::{Measure, Unit};
pub use parsing::xml::{Document, Element, Node};
pub use taxonomy::Taxonomy;
pub use traits::{FactKey, FactLookup};

/// Current crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
