//! Price efficiency: money per unit of reference area.
//!
//! Lease prices are turned into a monthly carrying cost so they compare on
//! the same footing as each other:
//!
//! - Sale: `sale_price / area`
//! - Jeonse: `(deposit * rate / 12 + admin_fee) / area`
//! - Monthly rent: `(deposit * rate / 12 + monthly_rent + admin_fee) / area`
//!
//! Lower is better; the normalizer inverts the scale.

use crate::config::ScoringConfig;
use crate::core::{ListingFields, TradeContext};
use crate::parsing::parse_present;

const MONTHS_PER_YEAR: f64 = 12.0;

/// Per-area price of a listing under one trade context.
///
/// `None` when the listing is not offered under `trade`, when the area is
/// missing or not positive, or when the money fields the context needs are
/// absent. Negative money values count as absent.
/// The result is rounded to the nearest whole base unit.
pub fn score_price(
    fields: &ListingFields,
    trade: TradeContext,
    config: &ScoringConfig,
) -> Option<f64> {
    if !fields.supports_trade(trade) {
        return None;
    }
    let area = parse_present(fields.area.as_deref())?;

    let money = |value: Option<&str>| parse_present(value).unwrap_or(0.0) * config.money_scale;
    let monthly_deposit_cost =
        |deposit: f64| deposit * config.jeonse_annual_rate / MONTHS_PER_YEAR;

    let monthly_cost = match trade {
        TradeContext::Sale => {
            let price = money(fields.sale_price.as_deref());
            if price == 0.0 {
                return None;
            }
            price
        }
        TradeContext::Jeonse => {
            let deposit = money(fields.deposit.as_deref());
            if deposit == 0.0 {
                return None;
            }
            monthly_deposit_cost(deposit) + money(fields.admin_fee.as_deref())
        }
        TradeContext::MonthlyRent => {
            let deposit = money(fields.deposit.as_deref());
            let rent = money(fields.monthly_rent.as_deref());
            if deposit == 0.0 && rent == 0.0 {
                return None;
            }
            monthly_deposit_cost(deposit) + rent + money(fields.admin_fee.as_deref())
        }
    };

    Some((monthly_cost / area).round())
}
