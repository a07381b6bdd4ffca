//! Query operations over a built filing.
//!
//! Lookups come in three named flavors rather than one overloaded entry
//! point: by numeric id, by qualified `taxonomy:tag` name, and by a
//! taxonomy/tag pair. [`FactKey`] bundles them for callers that pick the
//! flavor at runtime.
//!
//! Every operation that hands out a [`Fact`] resolves its context first. A
//! fact whose `contextRef` points at no context is an inconsistent index, so
//! it surfaces as [`XbrlError::DanglingReference`](crate::XbrlError::DanglingReference)
//! instead of an empty result.

use super::error::Result;
use super::filing::Fact;

/// How to look up a single fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactKey<'a> {
    /// Numeric id suffix (`fact-178` → `178`)
    Id(u32),
    /// Qualified name such as `us-gaap:AccountsPayableCurrent`
    Name(&'a str),
    /// Taxonomy and tag given separately
    TaxonomyTag(&'a str, &'a str),
}

/// Read-only fact queries.
pub trait FactLookup {
    /// Returns the fact stored at `id`, or `None` for 0, out-of-range ids and
    /// ids whose element was skipped.
    fn fact_by_id(&self, id: u32) -> Result<Option<Fact<'_>>>;

    /// Returns the first fact, in id order, named `taxonomy:tag`.
    /// A name without a namespace separator matches nothing.
    fn fact_by_name(&self, name: &str) -> Result<Option<Fact<'_>>>;

    /// Returns the first fact, in id order, with this taxonomy and tag.
    fn fact_by_tag(&self, taxonomy: impl AsRef<str>, tag: &str) -> Result<Option<Fact<'_>>>;

    /// Resolves every stored fact and keeps those matching `predicate`, in id order.
    fn filter_facts<P>(&self, predicate: P) -> Result<Vec<Fact<'_>>>
    where
        P: FnMut(&Fact<'_>) -> bool;

    fn get_fact(&self, key: FactKey<'_>) -> Result<Option<Fact<'_>>> {
        match key {
            FactKey::Id(id) => self.fact_by_id(id),
            FactKey::Name(name) => self.fact_by_name(name),
            FactKey::TaxonomyTag(taxonomy, tag) => self.fact_by_tag(taxonomy, tag),
        }
    }
}
