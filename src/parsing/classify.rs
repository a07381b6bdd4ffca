//! Partitions the children of a filing root into context, unit and fact regions.
//!
//! Filings are expected to list every context first, then every unit, then the
//! facts. The classifier walks the children once and enforces that order instead
//! of trusting it: a context or unit showing up after its region has closed is
//! reported rather than being silently treated as a fact.
use super::xml::Element;
use crate::error::{ElementKind, Result, XbrlError};

/// Elements of a filing root, grouped by region in document order.
#[derive(Debug, Default)]
pub struct Regions<'a> {
    pub contexts: Vec<&'a Element>,
    pub units: Vec<&'a Element>,
    pub facts: Vec<&'a Element>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Region {
    Preamble,
    Contexts,
    Units,
    Facts,
}

/// Classifies the element children of `root`.
///
/// Elements ahead of the first `context` or `unit` (such as `link:schemaRef`)
/// are preamble and ignored. Text and comment nodes never break a run.
///
/// # Errors
///
/// With `strict_ordering` set, a `context` after the unit or fact region began,
/// or a `unit` after the fact region began, fails with
/// [`XbrlError::Structural`]. Without it the element is dropped with a warning.
pub fn classify(root: &Element, strict_ordering: bool) -> Result<Regions<'_>> {
    let mut regions = Regions::default();
    let mut current = Region::Preamble;

    for element in root.child_elements() {
        let (target, kind) = match element.local_name() {
            "context" => (Region::Contexts, Some(ElementKind::Context)),
            "unit" => (Region::Units, Some(ElementKind::Unit)),
            _ => (Region::Facts, None),
        };

        if let Some(kind) = kind {
            if target < current {
                if strict_ordering {
                    return Err(XbrlError::structural(
                        kind,
                        element.attribute("id"),
                        format!("{kind} element appears after the {current:?} region started"),
                    ));
                }
                tracing::warn!(
                    "Ignoring out-of-order {} element {:?}",
                    kind,
                    element.attribute("id")
                );
                continue;
            }
            current = target;
        } else if current == Region::Preamble {
            continue;
        } else {
            current = Region::Facts;
        }

        match current {
            Region::Contexts => regions.contexts.push(element),
            Region::Units => regions.units.push(element),
            Region::Facts => regions.facts.push(element),
            Region::Preamble => {}
        }
    }

    tracing::debug!(
        "Classified {} contexts, {} units, {} fact candidates",
        regions.contexts.len(),
        regions.units.len(),
        regions.facts.len()
    );

    Ok(regions)
}
