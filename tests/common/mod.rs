// Test utility module for cohortmap integration tests
#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use cohortmap::core::{Listing, StructuralType};

/// Fixed reference instant so freshness is deterministic.
pub fn as_of() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

/// Fluent builder over [`Listing`] with string-typed attributes, matching
/// how records arrive from brokerage forms.
#[derive(Debug, Clone)]
pub struct ListingBuilder {
    listing: Listing,
}

impl ListingBuilder {
    pub fn new(id: i64, structural_type: StructuralType) -> Self {
        Self {
            listing: Listing::new(id, structural_type, "서울특별시 강남구 역삼동"),
        }
    }

    pub fn studio(id: i64) -> Self {
        Self::new(id, StructuralType::StudioApartment)
    }

    pub fn address(mut self, address: &str) -> Self {
        self.listing.address = address.to_string();
        self
    }

    pub fn on_market(mut self) -> Self {
        self.listing.on_market = true;
        self
    }

    pub fn off_market(mut self) -> Self {
        self.listing.on_market = false;
        self
    }

    pub fn trade(mut self, label: &str) -> Self {
        self.listing.fields.trade_types.push(label.to_string());
        self
    }

    pub fn area(mut self, area: &str) -> Self {
        self.listing.fields.area = Some(area.to_string());
        self
    }

    pub fn sale_price(mut self, price: &str) -> Self {
        self.listing.fields.sale_price = Some(price.to_string());
        self
    }

    pub fn deposit(mut self, deposit: &str) -> Self {
        self.listing.fields.deposit = Some(deposit.to_string());
        self
    }

    pub fn monthly_rent(mut self, rent: &str) -> Self {
        self.listing.fields.monthly_rent = Some(rent.to_string());
        self
    }

    pub fn admin_fee(mut self, fee: &str) -> Self {
        self.listing.fields.admin_fee = Some(fee.to_string());
        self
    }

    pub fn rating(mut self, rating: &str) -> Self {
        self.listing.fields.rating = Some(rating.to_string());
        self
    }

    pub fn updated_at(mut self, timestamp: &str) -> Self {
        self.listing.fields.updated_at = Some(timestamp.to_string());
        self
    }

    pub fn floor(mut self, floor: &str) -> Self {
        self.listing.fields.floor = Some(floor.to_string());
        self
    }

    pub fn direction(mut self, direction: &str) -> Self {
        self.listing.fields.direction = Some(direction.to_string());
        self
    }

    pub fn parking(mut self, value: &str) -> Self {
        self.listing.fields.parking_available = Some(value.to_string());
        self
    }

    pub fn pets(mut self, value: &str) -> Self {
        self.listing.fields.pet_allowed = Some(value.to_string());
        self
    }

    pub fn security(mut self, items: &[&str]) -> Self {
        self.listing.fields.house_security = items.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn amenities(mut self, items: &[&str]) -> Self {
        self.listing.fields.house_other = items.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn build(self) -> Listing {
        self.listing
    }
}

/// On-market studio apartment offered for sale at `price` over 10 area units.
pub fn studio_for_sale(id: i64, price: &str) -> Listing {
    ListingBuilder::studio(id)
        .on_market()
        .trade("매매")
        .area("10")
        .sale_price(price)
        .floor("5")
        .build()
}

/// Population JSON for CLI tests.
pub fn population_json(listings: &[Listing]) -> String {
    serde_json::to_string_pretty(listings).unwrap()
}
