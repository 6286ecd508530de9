//! Subtotal, delivery charge and total for an order session.
//!
//! Amounts are whole currency units. A charge or total that cannot be known
//! yet is `None`, which is distinct from a charge of zero. An amount that
//! would overflow `u64` is also left unknown.

use crate::config::DeliveryConfig;
use crate::domain::OrderSession;

/// Shown in place of the delivery charge until an area is chosen.
pub const AREA_PROMPT: &str = "এলাকা নির্বাচন করুন";
/// Shown in place of the total until an area is chosen.
pub const TOTAL_PLACEHOLDER: &str = "---";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriceBreakdown {
    pub subtotal: Option<u64>,
    pub delivery_charge: Option<u64>,
    pub total: Option<u64>,
}

impl PriceBreakdown {
    pub fn subtotal_display(&self, currency: &str) -> Option<String> {
        self.subtotal.map(|amount| format_price(currency, amount))
    }

    pub fn delivery_display(&self, currency: &str) -> String {
        match self.delivery_charge {
            Some(charge) => format_price(currency, charge),
            None => AREA_PROMPT.to_string(),
        }
    }

    pub fn total_display(&self, currency: &str) -> String {
        match self.total {
            Some(total) => format_price(currency, total),
            None => TOTAL_PLACEHOLDER.to_string(),
        }
    }
}

/// Derives the price breakdown from the session's current selection.
pub fn recompute(session: &OrderSession) -> PriceBreakdown {
    let delivery = &session.config().delivery;

    let subtotal = session
        .product()
        .and_then(|product| product.price.checked_mul(u64::from(session.quantity())));
    let delivery_charge = session.area().map(|area| delivery_charge(delivery, area));
    let total = subtotal
        .zip(delivery_charge)
        .and_then(|(sub, charge)| sub.checked_add(charge));

    PriceBreakdown { subtotal, delivery_charge, total }
}

/// Keyword heuristic: the ASCII capital name anywhere in the label, any case,
/// or the local-script name anywhere in the label.
pub fn is_capital_area(delivery: &DeliveryConfig, area: &str) -> bool {
    area.to_lowercase().contains(&delivery.capital_keyword.to_lowercase())
        || area.contains(delivery.capital_keyword_local.as_str())
}

pub fn delivery_charge(delivery: &DeliveryConfig, area: &str) -> u64 {
    if is_capital_area(delivery, area) {
        delivery.capital_rate
    } else {
        delivery.other_rate
    }
}

/// Currency symbol followed by the amount with comma thousands separators.
pub fn format_price(currency: &str, amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}{}", currency, grouped)
}
