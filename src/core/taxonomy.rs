//! Closed vocabularies shared across the engine: structural types, trade
//! contexts and scoring dimensions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Structural type of a listing.
///
/// Labels are the Korean terms used by the brokerage forms; snake-case English
/// names are accepted as aliases. Anything else is kept verbatim as
/// [`StructuralType::Unsupported`] and never takes part in a cohort.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StructuralType {
    MultiUnitResidential,
    DetachedResidential,
    Apartment,
    StudioApartment,
    Commercial,
    Building,
    Land,
    Office,
    Unsupported(String),
}

impl StructuralType {
    /// The eight types the engine compares.
    pub const SUPPORTED: [StructuralType; 8] = [
        StructuralType::MultiUnitResidential,
        StructuralType::DetachedResidential,
        StructuralType::Apartment,
        StructuralType::StudioApartment,
        StructuralType::Commercial,
        StructuralType::Building,
        StructuralType::Land,
        StructuralType::Office,
    ];

    pub fn label(&self) -> &str {
        match self {
            StructuralType::MultiUnitResidential => "다세대",
            StructuralType::DetachedResidential => "단독",
            StructuralType::Apartment => "아파트",
            StructuralType::StudioApartment => "오피스텔",
            StructuralType::Commercial => "상가",
            StructuralType::Building => "건물",
            StructuralType::Land => "토지",
            StructuralType::Office => "사무실",
            StructuralType::Unsupported(raw) => raw,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, StructuralType::Unsupported(_))
    }
}

impl From<&str> for StructuralType {
    fn from(value: &str) -> Self {
        match value.trim() {
            "다세대" | "다세대주택" | "multi_unit_residential" => {
                StructuralType::MultiUnitResidential
            }
            "단독" | "다가구" | "단독/다가구" | "단독주택" | "detached_residential" => {
                StructuralType::DetachedResidential
            }
            "아파트" | "apartment" => StructuralType::Apartment,
            "오피스텔" | "studio_apartment" => StructuralType::StudioApartment,
            "상가" | "commercial" => StructuralType::Commercial,
            "건물" | "building" => StructuralType::Building,
            "토지" | "land" => StructuralType::Land,
            "사무실" | "office" => StructuralType::Office,
            other => StructuralType::Unsupported(other.to_string()),
        }
    }
}

impl From<String> for StructuralType {
    fn from(value: String) -> Self {
        StructuralType::from(value.as_str())
    }
}

impl From<StructuralType> for String {
    fn from(value: StructuralType) -> Self {
        value.label().to_string()
    }
}

impl fmt::Display for StructuralType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Comparison group used for cohort partitioning.
///
/// The two residential types collapse into [`TypeGroup::Residential`]; every
/// other supported type is its own group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeGroup {
    Residential,
    Apartment,
    StudioApartment,
    Commercial,
    Building,
    Land,
    Office,
}

impl TypeGroup {
    /// Groups where basement and above-ground units form separate markets.
    pub fn uses_grade_placement(self) -> bool {
        matches!(
            self,
            TypeGroup::Residential | TypeGroup::Apartment | TypeGroup::StudioApartment
        )
    }
}

/// Transaction type a price is quoted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeContext {
    /// Outright purchase (매매).
    Sale,
    /// Lump-sum deposit lease (전세).
    Jeonse,
    /// Deposit plus monthly rent (월세).
    MonthlyRent,
}

impl TradeContext {
    pub const ALL: [TradeContext; 3] = [
        TradeContext::Sale,
        TradeContext::Jeonse,
        TradeContext::MonthlyRent,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TradeContext::Sale => "매매",
            TradeContext::Jeonse => "전세",
            TradeContext::MonthlyRent => "월세",
        }
    }

    /// Map a trade-type entry from a listing form to a context.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "매매" | "sale" => Some(TradeContext::Sale),
            "전세" | "jeonse" => Some(TradeContext::Jeonse),
            "월세" | "monthly_rent" | "monthly-rent" => Some(TradeContext::MonthlyRent),
            _ => None,
        }
    }
}

impl FromStr for TradeContext {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TradeContext::from_label(s).ok_or_else(|| format!("unknown trade type: {s}"))
    }
}

impl fmt::Display for TradeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One axis of the radar chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Price,
    Size,
    Condition,
    Freshness,
    Other,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::Price,
        Dimension::Size,
        Dimension::Condition,
        Dimension::Freshness,
        Dimension::Other,
    ];

    /// Whether peers must share the focal listing's grade placement.
    pub fn compares_grade_placement(self) -> bool {
        matches!(self, Dimension::Price | Dimension::Size)
    }

    /// Whether only on-market peers count.
    pub fn requires_on_market(self) -> bool {
        matches!(self, Dimension::Price | Dimension::Freshness)
    }

    pub fn label(self) -> &'static str {
        match self {
            Dimension::Price => "price",
            Dimension::Size => "size",
            Dimension::Condition => "condition",
            Dimension::Freshness => "freshness",
            Dimension::Other => "other",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
