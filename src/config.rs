/// How numeric ids that do not form a dense `1..=N` sequence are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdPolicy {
    /// Duplicate or out-of-range ids abort construction, context ids must be dense
    #[default]
    Strict,
    /// Duplicates overwrite, out-of-range ids are kept, holes read as not found
    Lenient,
}

/// Configuration for building a [`Filing`](crate::Filing)
#[derive(Debug, Clone)]
pub struct FilingConfig {
    /// Policy for context and fact ids
    pub id_policy: IdPolicy,
    /// Fail when a context or unit appears after its region has closed
    pub strict_ordering: bool,
}

impl Default for FilingConfig {
    fn default() -> Self {
        Self {
            id_policy: IdPolicy::Strict,
            strict_ordering: true,
        }
    }
}

impl FilingConfig {
    /// Creates a config with the default strict settings
    ///
    /// # Basic usage
    ///
    /// ```rust
    /// use xbrlkit::{FilingConfig, IdPolicy};
    ///
    /// let config = FilingConfig::new()
    ///     .with_id_policy(IdPolicy::Lenient)
    ///     .with_strict_ordering(false);
    /// assert_eq!(config.id_policy, IdPolicy::Lenient);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id_policy(mut self, id_policy: IdPolicy) -> Self {
        self.id_policy = id_policy;
        self
    }

    pub fn with_strict_ordering(mut self, strict_ordering: bool) -> Self {
        self.strict_ordering = strict_ordering;
        self
    }

    /// Shorthand for the settings that mirror how most real-world tools read filings:
    /// lenient ids and ordering violations logged rather than fatal.
    pub fn lenient() -> Self {
        Self {
            id_policy: IdPolicy::Lenient,
            strict_ordering: false,
        }
    }
}
