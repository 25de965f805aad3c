//! Typed locator variants.
//!
//! A locator is built from the raw attributes of one database entry. The
//! `type` attribute selects the variant; every variant declares its own
//! required fields and ignores keys it does not know about.

use crate::error::LocatorError;
use crate::geometry::{Point, Region};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Construction contract shared by all locator variants.
pub trait LocatorKind: DeserializeOwned {
    /// Discriminator value selecting this variant.
    const TYPE: &'static str;
    /// Fields that must be present and non-null.
    const REQUIRED: &'static [&'static str];

    /// Checks applied after the fields have been decoded.
    fn validate(&self) -> Result<(), LocatorError> {
        Ok(())
    }

    fn from_map(raw: &Map<String, Value>) -> Result<Self, LocatorError> {
        for &field in Self::REQUIRED {
            if raw.get(field).is_none_or(Value::is_null) {
                return Err(LocatorError::MissingField {
                    kind: Self::TYPE,
                    field,
                });
            }
        }

        let locator: Self = serde_json::from_value(Value::Object(raw.clone())).map_err(|e| {
            LocatorError::InvalidField {
                kind: Self::TYPE,
                message: e.to_string(),
            }
        })?;
        locator.validate()?;
        Ok(locator)
    }
}

/// Locator resolved through the browser DOM.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrowserDom {
    /// Lookup method, e.g. "id", "class", "xpath"
    pub strategy: String,
    pub value: String,
    /// Page the locator was recorded on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl LocatorKind for BrowserDom {
    const TYPE: &'static str = "browser";
    const REQUIRED: &'static [&'static str] = &["strategy", "value"];
}

/// Locator matched by comparing against a template image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageTemplate {
    /// Path to the template image
    pub path: String,
    /// Minimum match confidence, in percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// Screenshot the template was cut from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl LocatorKind for ImageTemplate {
    const TYPE: &'static str = "image";
    const REQUIRED: &'static [&'static str] = &["path"];

    fn validate(&self) -> Result<(), LocatorError> {
        validate_confidence(Self::TYPE, self.confidence)
    }
}

/// Locator matched by recognizing text on screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcrText {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl LocatorKind for OcrText {
    const TYPE: &'static str = "ocr";
    const REQUIRED: &'static [&'static str] = &["text"];

    fn validate(&self) -> Result<(), LocatorError> {
        validate_confidence(Self::TYPE, self.confidence)
    }
}

/// Fixed screen coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointLocator {
    pub x: i32,
    pub y: i32,
}

impl PointLocator {
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl LocatorKind for PointLocator {
    const TYPE: &'static str = "point";
    const REQUIRED: &'static [&'static str] = &["x", "y"];
}

/// Coordinate relative to an anchor resolved elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsetLocator {
    pub x: i32,
    pub y: i32,
}

impl OffsetLocator {
    pub fn apply(&self, anchor: Point) -> Point {
        anchor.offset(self.x, self.y)
    }
}

impl LocatorKind for OffsetLocator {
    const TYPE: &'static str = "offset";
    const REQUIRED: &'static [&'static str] = &["x", "y"];
}

/// Rectangular screen area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionLocator {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RegionLocator {
    pub fn region(&self) -> Region {
        Region::new(self.left, self.top, self.right, self.bottom)
    }
}

impl LocatorKind for RegionLocator {
    const TYPE: &'static str = "region";
    const REQUIRED: &'static [&'static str] = &["left", "top", "right", "bottom"];

    fn validate(&self) -> Result<(), LocatorError> {
        if self.right < self.left || self.bottom < self.top {
            return Err(LocatorError::InvalidField {
                kind: Self::TYPE,
                message: format!(
                    "invalid edges ({}, {}, {}, {})",
                    self.left, self.top, self.right, self.bottom
                ),
            });
        }
        Ok(())
    }
}

/// Area of a given size, anchored elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeLocator {
    pub width: i32,
    pub height: i32,
}

impl SizeLocator {
    pub fn region_at(&self, origin: Point) -> Region {
        let corner = origin.offset(self.width, self.height);
        Region::new(origin.x, origin.y, corner.x, corner.y)
    }
}

impl LocatorKind for SizeLocator {
    const TYPE: &'static str = "size";
    const REQUIRED: &'static [&'static str] = &["width", "height"];

    fn validate(&self) -> Result<(), LocatorError> {
        if self.width < 0 || self.height < 0 {
            return Err(LocatorError::InvalidField {
                kind: Self::TYPE,
                message: format!("negative size {}x{}", self.width, self.height),
            });
        }
        Ok(())
    }
}

fn validate_confidence(kind: &'static str, confidence: Option<f64>) -> Result<(), LocatorError> {
    match confidence {
        Some(value) if !(0.0..=100.0).contains(&value) => Err(LocatorError::InvalidField {
            kind,
            message: format!("confidence {value} out of range 0-100"),
        }),
        _ => Ok(()),
    }
}

/// A typed locator, one variant per discriminator in [`TYPES`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Locator {
    Browser(BrowserDom),
    Image(ImageTemplate),
    Ocr(OcrText),
    Point(PointLocator),
    Offset(OffsetLocator),
    Region(RegionLocator),
    Size(SizeLocator),
}

macro_rules! locator_variants {
    ($($kind:ty => $variant:ident),* $(,)?) => {
        /// Discriminator values of every known locator variant.
        pub const TYPES: &[&str] = &[$(<$kind as LocatorKind>::TYPE),*];

        const REGISTRY: &[(&str, Constructor)] = &[$((<$kind as LocatorKind>::TYPE, construct::<$kind> as Constructor)),*];

        $(
            impl From<$kind> for Locator {
                fn from(locator: $kind) -> Self {
                    Locator::$variant(locator)
                }
            }
        )*

        impl Locator {
            /// Discriminator of this locator.
            pub fn kind(&self) -> &'static str {
                match self {
                    $(Locator::$variant(_) => <$kind as LocatorKind>::TYPE),*
                }
            }
        }
    };
}

type Constructor = fn(&Map<String, Value>) -> Result<Locator, LocatorError>;

fn construct<T>(raw: &Map<String, Value>) -> Result<Locator, LocatorError>
where
    T: LocatorKind + Into<Locator>,
{
    T::from_map(raw).map(Into::into)
}

locator_variants! {
    BrowserDom => Browser,
    ImageTemplate => Image,
    OcrText => Ocr,
    PointLocator => Point,
    OffsetLocator => Offset,
    RegionLocator => Region,
    SizeLocator => Size,
}

/// Returns true if `kind` names a registered locator variant.
pub fn is_known_type(kind: &str) -> bool {
    TYPES.contains(&kind)
}

impl Locator {
    /// Build a locator from the raw attributes of one entry.
    ///
    /// The `type` attribute is mandatory and selects the variant. Keys not
    /// used by the variant are ignored.
    pub fn from_map(raw: &Map<String, Value>) -> Result<Self, LocatorError> {
        let kind = match raw.get("type") {
            None | Some(Value::Null) => return Err(LocatorError::MissingType),
            Some(Value::String(kind)) => kind.as_str(),
            Some(other) => return Err(LocatorError::InvalidType(other.to_string())),
        };

        let (_, constructor) = REGISTRY
            .iter()
            .find(|(name, _)| *name == kind)
            .ok_or_else(|| LocatorError::UnknownType(kind.to_string()))?;

        constructor(raw)
    }

    pub fn from_value(raw: &Value) -> Result<Self, LocatorError> {
        match raw {
            Value::Object(map) => Self::from_map(map),
            _ => Err(LocatorError::NotAnObject),
        }
    }

    /// Page or screenshot the locator was recorded from, if known.
    pub fn source(&self) -> Option<&str> {
        match self {
            Locator::Browser(l) => l.source.as_deref(),
            Locator::Image(l) => l.source.as_deref(),
            _ => None,
        }
    }
}
