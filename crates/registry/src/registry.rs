//! Case-insensitive, read-only currency lookup.
//!
//! A registry is seeded exactly once, validated entry by entry, and never
//! mutated afterwards. Entries are stored behind `Arc` so every monetary
//! value referencing a currency shares the same metadata allocation. Lookups
//! take `&self` only, so a registry is safe to share across threads.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::builtin;
use crate::currency::Currency;
use crate::error::RegistryError;

static BUILTIN: Lazy<CurrencyRegistry> = Lazy::new(|| {
    CurrencyRegistry::new(builtin::currencies()).expect("builtin currency table is valid")
});

/// Immutable lookup table from currency code to currency metadata.
#[derive(Debug)]
pub struct CurrencyRegistry {
    currencies: HashMap<String, Arc<Currency>>,
}

impl CurrencyRegistry {
    /// Seeds a registry from the given entries.
    ///
    /// Every entry is validated (divisor a positive power of 10, smallest
    /// denomination at least 1) and keyed by its lowercased code. Duplicate
    /// codes are rejected.
    pub fn new(entries: impl IntoIterator<Item = Currency>) -> Result<Self, RegistryError> {
        let mut currencies = HashMap::new();
        for entry in entries {
            entry.validate()?;
            let key = entry.code.to_lowercase();
            if currencies.contains_key(&key) {
                return Err(RegistryError::DuplicateCurrency(entry.code));
            }
            currencies.insert(key, Arc::new(entry));
        }
        debug!(currencies = currencies.len(), "currency registry seeded");
        Ok(Self { currencies })
    }

    /// The process-wide registry of built-in currencies.
    ///
    /// Seeded lazily on first access; callers that need a custom table
    /// construct their own registry with [`CurrencyRegistry::new`] instead.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Resolves a currency code, case-insensitively.
    pub fn resolve(&self, code: &str) -> Result<Arc<Currency>, RegistryError> {
        self.currencies
            .get(&code.to_lowercase())
            .cloned()
            .ok_or_else(|| RegistryError::UnsupportedCurrency(code.to_string()))
    }

    /// Returns true if the code resolves to a registered currency.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.currencies.contains_key(&code.to_lowercase())
    }

    /// Number of registered currencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    /// Returns true if no currencies are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }
}
