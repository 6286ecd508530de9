//! Order summary text sent to the store over the messaging link.
//!
//! The line layout, labels and field order are a downstream contract: the
//! store parses and archives these messages, so the template must not drift.

use crate::domain::{ContactDetails, OrderSession};
use crate::pricing::{format_price, TOTAL_PLACEHOLDER};

const SEPARATOR: &str = "━━━━━━━━━━━━━━━━━━━";
const NO_NOTES: &str = "নেই";

/// Renders the order summary, or `None` when no product is selected.
pub fn compose_message(session: &OrderSession, contact: &ContactDetails) -> Option<String> {
    let product = session.product()?;
    let config = session.config();
    let currency = config.currency.as_str();
    let pricing = session.pricing();

    let subtotal = pricing
        .subtotal_display(currency)
        .unwrap_or_else(|| TOTAL_PLACEHOLDER.to_string());
    let notes = match contact.notes.trim() {
        "" => NO_NOTES,
        notes => notes,
    };

    let lines = [
        format!("🛍️ *নতুন অর্ডার - {}*", config.store_name),
        SEPARATOR.to_string(),
        String::new(),
        format!("📦 *পণ্য:* {}", product.name_bn),
        format!("   ({})", product.name),
        format!("💰 *মূল্য:* {}", format_price(currency, product.price)),
        format!("📏 *সাইজ:* {}", session.size().unwrap_or_default()),
        format!("🔢 *পরিমাণ:* {} set", session.quantity()),
        String::new(),
        SEPARATOR.to_string(),
        String::new(),
        format!("👤 *নাম:* {}", contact.name),
        format!("📱 *ফোন:* {}", contact.phone),
        format!("📍 *ঠিকানা:* {}", contact.address),
        format!("🏙️ *এলাকা:* {}", session.area().unwrap_or_default()),
        String::new(),
        SEPARATOR.to_string(),
        String::new(),
        format!("💵 *সাবটোটাল:* {}", subtotal),
        format!("🚚 *ডেলিভারি:* {}", pricing.delivery_display(currency)),
        format!("💰 *সর্বমোট:* {}", pricing.total_display(currency)),
        String::new(),
        format!("📝 *বিশেষ নির্দেশনা:* {}", notes),
        String::new(),
        SEPARATOR.to_string(),
        format!("{} - Handcrafted with Love 💕", config.store_name),
    ];

    Some(lines.join("\n"))
}
