//! Loading and validation of named UI locators.
//!
//! A locator database is a JSON file mapping locator names to attributes.
//! [`LocatorsDatabase`] reads either the current name-keyed layout or the
//! legacy list layout, builds a typed [`Locator`] for every valid entry and
//! reports unreadable or unparsable sources through
//! [`LocatorsDatabase::error`] instead of failing.

pub mod config;
pub mod database;
pub mod error;
pub mod geometry;
pub mod locator;
pub mod normalizer;
pub mod source;

pub use database::LocatorsDatabase;
pub use error::{DatabaseError, ErrorKind, LocatorError};
pub use locator::{
    BrowserDom, ImageTemplate, Locator, LocatorKind, OcrText, OffsetLocator, PointLocator,
    RegionLocator, SizeLocator, TYPES,
};
pub use source::Source;
