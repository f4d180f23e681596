//! Listing snapshot types.
//!
//! A [`Listing`] is a read-only view of a property record handed to the
//! engine by the surrounding application. Attribute values are kept as the
//! text the broker typed; all interpretation happens in
//! [`crate::parsing`], so the zero-as-absent rules live in one place.

use crate::core::taxonomy::{StructuralType, TradeContext};
use crate::parsing::extract_district;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

/// A property listing as seen by the scoring engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: i64,
    pub structural_type: StructuralType,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub on_market: bool,
    #[serde(default)]
    pub fields: ListingFields,
}

impl Listing {
    pub fn new(id: i64, structural_type: StructuralType, address: impl Into<String>) -> Self {
        Self {
            id,
            structural_type,
            address: address.into(),
            on_market: false,
            fields: ListingFields::default(),
        }
    }

    pub fn district(&self) -> Option<String> {
        extract_district(&self.address)
    }

    /// Trade contexts the listing is offered under.
    pub fn trade_contexts(&self) -> BTreeSet<TradeContext> {
        self.fields
            .trade_types
            .iter()
            .filter_map(|label| TradeContext::from_label(label))
            .collect()
    }

    pub fn supports_trade(&self, trade: TradeContext) -> bool {
        self.fields.supports_trade(trade)
    }

    /// First trade context in sale, jeonse, monthly-rent order.
    pub fn primary_trade(&self) -> Option<TradeContext> {
        self.trade_contexts().into_iter().next()
    }
}

/// Raw attribute values of a listing, one optional field per attribute.
///
/// Scalars deserialize from JSON strings, numbers or booleans; list fields
/// accept a single string as a one-element list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingFields {
    #[serde(deserialize_with = "loose_list")]
    pub trade_types: Vec<String>,
    /// Reference area used to unitize prices.
    #[serde(deserialize_with = "loose_text")]
    pub area: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    pub sale_price: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    pub deposit: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    pub monthly_rent: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    pub admin_fee: Option<String>,
    /// Star rating, 1 to 5.
    #[serde(deserialize_with = "loose_text")]
    pub rating: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    pub updated_at: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    pub floor: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    pub semi_basement: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    pub rooftop: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    pub direction: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    pub parking_available: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    pub pet_allowed: Option<String>,
    #[serde(deserialize_with = "loose_list")]
    pub house_security: Vec<String>,
    #[serde(deserialize_with = "loose_list")]
    pub house_other: Vec<String>,
    #[serde(deserialize_with = "loose_text")]
    pub room_count: Option<String>,
}

impl ListingFields {
    pub fn supports_trade(&self, trade: TradeContext) -> bool {
        self.trade_types
            .iter()
            .any(|label| TradeContext::from_label(label) == Some(trade))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseScalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Flag(bool),
}

impl LooseScalar {
    fn into_text(self) -> String {
        match self {
            LooseScalar::Text(s) => s,
            LooseScalar::Integer(n) => n.to_string(),
            LooseScalar::Float(n) => n.to_string(),
            LooseScalar::Flag(b) => b.to_string(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseList {
    Many(Vec<Option<LooseScalar>>),
    One(LooseScalar),
}

fn loose_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<LooseScalar>::deserialize(deserializer)?;
    Ok(value.map(LooseScalar::into_text))
}

fn loose_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<LooseList>::deserialize(deserializer)?;
    Ok(match value {
        None => Vec::new(),
        Some(LooseList::Many(items)) => items
            .into_iter()
            .flatten()
            .map(LooseScalar::into_text)
            .collect(),
        Some(LooseList::One(item)) => {
            let text = item.into_text();
            if text.trim().is_empty() {
                Vec::new()
            } else {
                vec![text]
            }
        }
    })
}
