use crate::error::DatabaseError;
use crate::locator::Locator;
use crate::normalizer::{self, Entry};
use crate::source::{Content, Source};
use indexmap::IndexMap;
use serde_json::Value;

/// Named locators loaded from a JSON source.
///
/// Loading never fails outright. A source that cannot be read or parsed
/// leaves the collection empty and records the problem in [`error`],
/// while individual malformed entries are skipped without an error.
///
/// [`error`]: LocatorsDatabase::error
#[derive(Debug, Default)]
pub struct LocatorsDatabase {
    source: Option<Source>,
    locators: IndexMap<String, Locator>,
    error: Option<DatabaseError>,
}

impl LocatorsDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(source: impl Into<Source>) -> Self {
        Self {
            source: Some(source.into()),
            ..Self::default()
        }
    }

    pub fn source(&self) -> Option<&Source> {
        self.source.as_ref()
    }

    /// Replace the source used by the next [`load`](Self::load).
    pub fn set_source(&mut self, source: impl Into<Source>) {
        self.source = Some(source.into());
    }

    pub fn clear_source(&mut self) {
        self.source = None;
    }

    /// Read the source and rebuild the collection from scratch.
    pub fn load(&mut self) {
        self.locators.clear();
        self.error = None;

        let Some(source) = self.source.as_mut() else {
            tracing::debug!("No locator database source configured");
            return;
        };

        let text = match source.read() {
            Ok(Content::Text(text)) => text,
            Ok(Content::Missing) => {
                tracing::debug!("Locator database {} does not exist", source);
                return;
            }
            Err(e) => {
                tracing::warn!("Failed to read locator database {}: {}", source, e);
                self.error = Some(e.into());
                return;
            }
        };

        let parsed: Value = match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Failed to parse locator database {}: {}", source, e);
                self.error = Some(e.into());
                return;
            }
        };

        let entries = normalizer::normalize(parsed);
        let total = entries.len();
        for Entry { name, attributes } in entries {
            match Locator::from_value(&attributes) {
                Ok(locator) => {
                    self.locators.insert(name, locator);
                }
                Err(e) => {
                    tracing::warn!("Skipping locator '{}': {}", name, e);
                }
            }
        }

        tracing::debug!(
            "Loaded {} of {} locators from {}",
            self.locators.len(),
            total,
            source
        );
    }

    pub fn locators(&self) -> &IndexMap<String, Locator> {
        &self.locators
    }

    pub fn error(&self) -> Option<&DatabaseError> {
        self.error.as_ref()
    }

    pub fn get(&self, name: &str) -> Option<&Locator> {
        self.locators.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.locators.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.locators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locators.is_empty()
    }
}
