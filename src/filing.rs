//! The filing index and its fact resolver.
//!
//! A [`Filing`] is built once from the root element of an XBRL document and is
//! immutable afterwards. Construction runs in three passes over the classified
//! regions of the root:
//!
//! ```text
//! root children ──classify──┬─ contexts ─→ table[N]   (id "context-N")
//!                           ├─ units    ─→ appended in document order
//!                           └─ facts    ─→ table[N]   (id "fact-N"), skipped if incomplete
//! ```
//!
//! Context and fact tables are ordered maps keyed by the numeric suffix of each
//! element id, so memory follows the number of elements rather than the size
//! of the ids. Queries join a fact with its context on demand, see
//! [`FactLookup`].

use super::FactLookup;
use super::config::{FilingConfig, IdPolicy};
use super::error::{ElementKind, Result, XbrlError};
use crate::parsing::classify::classify;
use crate::parsing::context::{Context, extract_context};
use crate::parsing::fact::{FactRecord, extract_fact};
use crate::parsing::unit::{Unit, extract_unit};
use crate::parsing::utils::split_qualified_name;
#[cfg(feature = "document")]
use crate::parsing::xml::Document;
use crate::parsing::xml::Element;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::ops::Deref;

/// A fact record joined with the context it was reported against.
///
/// Derefs to [`FactRecord`], so `fact.value` and `fact.taxonomy` read directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Fact<'a> {
    #[serde(flatten)]
    pub record: &'a FactRecord,
    pub context: &'a Context,
}

impl Deref for Fact<'_> {
    type Target = FactRecord;

    fn deref(&self) -> &FactRecord {
        self.record
    }
}

/// An immutable index of the contexts, units and facts of one filing.
///
/// `Filing` holds no interior mutability and is `Send + Sync`, so one instance
/// can serve concurrent readers without locking.
///
/// # Examples
///
/// ```rust
/// use xbrlkit::{FactLookup, FactValue, Filing};
///
/// let filing = Filing::from_document(r#"
///     <xbrl>
///       <context id="context-1">
///         <entity><identifier>0000320193</identifier></entity>
///         <period instant="2023-07-01"/>
///       </context>
///       <unit id="unit-1"><measure>USD</measure></unit>
///       <us-gaap:Assets id="fact-1" contextRef="context-1" unitRef="unit-1">1000</us-gaap:Assets>
///     </xbrl>"#)?;
///
/// let assets = filing.fact_by_name("us-gaap:Assets")?.unwrap();
/// assert_eq!(assets.value, FactValue::Integer(1000));
/// assert_eq!(assets.context.entity_identifier, "0000320193");
/// # Ok::<(), xbrlkit::XbrlError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Filing {
    contexts: BTreeMap<u32, Context>,
    units: Vec<Unit>,
    facts: BTreeMap<u32, FactRecord>,
}

/// Id-keyed table used while a filing is being built.
///
/// `len` is the number of candidate elements in the region; under the strict
/// policy every id must fall within `1..=len`.
struct SlotTable<T> {
    entries: BTreeMap<u32, T>,
    len: usize,
    kind: ElementKind,
    policy: IdPolicy,
}

impl<T> SlotTable<T> {
    fn with_len(len: usize, kind: ElementKind, policy: IdPolicy) -> Self {
        Self {
            entries: BTreeMap::new(),
            len,
            kind,
            policy,
        }
    }

    /// Stores `value` under `id`. `id` is positive by construction.
    fn place(&mut self, id: u32, value: T) -> Result<()> {
        let strict = self.policy == IdPolicy::Strict;

        if id as usize > self.len {
            if strict {
                return Err(XbrlError::structural(
                    self.kind,
                    Some(&id.to_string()),
                    format!("id exceeds the {} {} elements in the filing", self.len, self.kind),
                ));
            }
            tracing::warn!(
                "{} id {} is beyond the {} elements found, keeping it anyway",
                self.kind,
                id,
                self.len
            );
        }

        if self.entries.contains_key(&id) {
            if strict {
                return Err(XbrlError::structural(
                    self.kind,
                    Some(&id.to_string()),
                    "duplicate id",
                ));
            }
            tracing::warn!("Duplicate {} id {}, keeping the later element", self.kind, id);
        }

        self.entries.insert(id, value);
        Ok(())
    }

    fn into_inner(self) -> BTreeMap<u32, T> {
        self.entries
    }
}

impl Filing {
    /// Builds a filing from the root element of an XBRL document with the default
    /// strict [`FilingConfig`].
    pub fn from_element(root: &Element) -> Result<Self> {
        Self::with_config(root, FilingConfig::default())
    }

    /// Builds a filing from the root element of an XBRL document.
    ///
    /// # Errors
    ///
    /// Fails with [`XbrlError::Structural`] if a context or unit element is
    /// malformed, if regions are out of order under `strict_ordering`, or if
    /// ids collide or overflow under [`IdPolicy::Strict`]. Fact elements missing
    /// a required attribute are skipped, never fatal. No partial filing is
    /// returned on error.
    pub fn with_config(root: &Element, config: FilingConfig) -> Result<Self> {
        let regions = classify(root, config.strict_ordering)?;

        // Under the strict policy N distinct ids within 1..=N cover every id,
        // so the context table comes out dense.
        let mut contexts =
            SlotTable::with_len(regions.contexts.len(), ElementKind::Context, config.id_policy);
        for element in &regions.contexts {
            let context = extract_context(element)?;
            contexts.place(context.id, context)?;
        }

        let units = regions
            .units
            .iter()
            .map(|element| extract_unit(element))
            .collect::<Result<Vec<_>>>()?;

        let mut facts =
            SlotTable::with_len(regions.facts.len(), ElementKind::Fact, config.id_policy);
        let mut skipped = 0usize;
        for element in &regions.facts {
            match extract_fact(element) {
                Some(record) => facts.place(record.id, record)?,
                None => skipped += 1,
            }
        }

        tracing::debug!(
            "Built filing with {} contexts, {} units, {} facts ({} skipped)",
            regions.contexts.len(),
            units.len(),
            regions.facts.len() - skipped,
            skipped
        );

        Ok(Self {
            contexts: contexts.into_inner(),
            units,
            facts: facts.into_inner(),
        })
    }

    /// Parses document text and builds a filing with the default config.
    #[cfg(feature = "document")]
    pub fn from_document(content: &str) -> Result<Self> {
        let document = Document::parse(content)?;
        Self::from_element(document.root())
    }

    /// Parses document text and builds a filing with `config`.
    #[cfg(feature = "document")]
    pub fn from_document_with_config(content: &str, config: FilingConfig) -> Result<Self> {
        let document = Document::parse(content)?;
        Self::with_config(document.root(), config)
    }

    /// Looks up the context a record points at.
    ///
    /// # Errors
    ///
    /// [`XbrlError::DanglingReference`] when `context_ref` is out of range or
    /// names a context that was never stored.
    pub fn resolve_context(&self, record: &FactRecord) -> Result<&Context> {
        self.context(record.context_ref)
            .ok_or(XbrlError::DanglingReference {
                fact_id: record.id,
                context_ref: record.context_ref,
            })
    }

    fn attach<'a>(&'a self, record: &'a FactRecord) -> Result<Fact<'a>> {
        Ok(Fact {
            record,
            context: self.resolve_context(record)?,
        })
    }

    /// Context stored at `id`, if any.
    pub fn context(&self, id: u32) -> Option<&Context> {
        self.contexts.get(&id)
    }

    /// Stored contexts in id order.
    pub fn contexts(&self) -> impl Iterator<Item = &Context> {
        self.contexts.values()
    }

    /// Units in document order.
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Finds a unit by its raw id.
    pub fn unit(&self, id: &str) -> Option<&Unit> {
        self.units.iter().find(|unit| unit.id == id)
    }

    /// Unit a fact is expressed in, if it names one that exists.
    pub fn unit_for(&self, record: &FactRecord) -> Option<&Unit> {
        record.unit_ref.as_deref().and_then(|id| self.unit(id))
    }

    /// Stored fact records in id order, without resolving contexts.
    pub fn records(&self) -> impl Iterator<Item = &FactRecord> {
        self.facts.values()
    }

    /// Number of stored facts.
    pub fn fact_count(&self) -> usize {
        self.facts.len()
    }

    /// Distinct `taxonomy:tag` names reported in the filing, sorted.
    pub fn concepts(&self) -> Vec<String> {
        self.records()
            .map(FactRecord::qualified_name)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl FactLookup for Filing {
    fn fact_by_id(&self, id: u32) -> Result<Option<Fact<'_>>> {
        self.facts
            .get(&id)
            .map(|record| self.attach(record))
            .transpose()
    }

    fn fact_by_name(&self, name: &str) -> Result<Option<Fact<'_>>> {
        match split_qualified_name(name) {
            Some((taxonomy, tag)) => self.fact_by_tag(taxonomy, tag),
            None => Ok(None),
        }
    }

    fn fact_by_tag(&self, taxonomy: impl AsRef<str>, tag: &str) -> Result<Option<Fact<'_>>> {
        let taxonomy = taxonomy.as_ref();
        self.records()
            .find(|record| record.matches(taxonomy, tag))
            .map(|record| self.attach(record))
            .transpose()
    }

    fn filter_facts<P>(&self, mut predicate: P) -> Result<Vec<Fact<'_>>>
    where
        P: FnMut(&Fact<'_>) -> bool,
    {
        let mut out = Vec::new();
        for record in self.records() {
            let fact = self.attach(record)?;
            if predicate(&fact) {
                out.push(fact);
            }
        }
        Ok(out)
    }
}
