//! Typed product tags.
//!
//! Catalog feeds historically carried tags as either a bare string
//! (`"New Arrival"`), a list (`["SALE", "Best Seller"]`), or an empty
//! string. Tags are parsed into a typed set at this boundary; unknown
//! labels are dropped rather than carried around as loose strings.

use serde::de::{Deserializer, Error as _};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A merchandising tag attached to a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProductTag {
    /// On sale.
    Sale,
    /// Best-selling product.
    BestSeller,
    /// Recently added to the catalog.
    NewArrival,
    /// Imported or unusual item.
    Exotic,
    /// Long-standing staple.
    Classic,
    /// Percentage discount badge (e.g., "15% OFF").
    PercentOff(u8),
}

impl ProductTag {
    /// Parse a single tag label. Blank and unknown labels yield None.
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();
        match label {
            "" => None,
            "SALE" => Some(ProductTag::Sale),
            "Best Seller" => Some(ProductTag::BestSeller),
            "New Arrival" => Some(ProductTag::NewArrival),
            "Exotic" => Some(ProductTag::Exotic),
            "Classic" => Some(ProductTag::Classic),
            other => other
                .strip_suffix("% OFF")
                .and_then(|n| n.parse::<u8>().ok())
                .filter(|p| (1..=100).contains(p))
                .map(ProductTag::PercentOff),
        }
    }

    /// The display label, matching the catalog feed form.
    pub fn label(&self) -> String {
        match self {
            ProductTag::Sale => "SALE".to_string(),
            ProductTag::BestSeller => "Best Seller".to_string(),
            ProductTag::NewArrival => "New Arrival".to_string(),
            ProductTag::Exotic => "Exotic".to_string(),
            ProductTag::Classic => "Classic".to_string(),
            ProductTag::PercentOff(p) => format!("{}% OFF", p),
        }
    }
}

impl fmt::Display for ProductTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for ProductTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}

impl<'de> Deserialize<'de> for ProductTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        ProductTag::parse(&label)
            .ok_or_else(|| D::Error::custom(format!("unknown product tag: {:?}", label)))
    }
}

/// The legacy feed shape: one label or a list of labels.
#[derive(Deserialize)]
#[serde(untagged)]
enum LegacyTags {
    One(String),
    Many(Vec<String>),
}

/// Parse a legacy tag value into a typed set, dropping unknowns.
pub fn parse_labels<'a>(labels: impl IntoIterator<Item = &'a str>) -> BTreeSet<ProductTag> {
    labels.into_iter().filter_map(ProductTag::parse).collect()
}

/// Deserialize the legacy tag field (string or list) into a typed set.
pub(crate) fn deserialize_legacy<'de, D>(
    deserializer: D,
) -> Result<BTreeSet<ProductTag>, D::Error>
where
    D: Deserializer<'de>,
{
    let legacy = Option::<LegacyTags>::deserialize(deserializer)?;
    Ok(match legacy {
        None => BTreeSet::new(),
        Some(LegacyTags::One(label)) => parse_labels([label.as_str()]),
        Some(LegacyTags::Many(labels)) => parse_labels(labels.iter().map(String::as_str)),
    })
}

/// Serialize a tag set as a plain list of labels.
pub(crate) fn serialize_labels<S>(
    tags: &BTreeSet<ProductTag>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut seq = serializer.serialize_seq(Some(tags.len()))?;
    for tag in tags {
        seq.serialize_element(&tag.label())?;
    }
    seq.end()
}
