//! Submission gate run before an order message is composed.

use thiserror::Error;

use crate::domain::{ContactDetails, OrderSession};

pub const MIN_NAME_CHARS: usize = 3;
pub const MIN_PHONE_DIGITS: usize = 11;
pub const MIN_ADDRESS_CHARS: usize = 10;

/// The first unmet submission rule. Variants are listed in check order and
/// display as the message shown to the buyer.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("অনুগ্রহ করে একটি পণ্য নির্বাচন করুন")]
    NoProduct,
    #[error("অনুগ্রহ করে সাইজ নির্বাচন করুন")]
    NoSize,
    #[error("অনুগ্রহ করে আপনার পুরো নাম লিখুন")]
    NameTooShort,
    #[error("অনুগ্রহ করে সঠিক ফোন নম্বর দিন (১১ ডিজিট)")]
    InvalidPhone,
    #[error("অনুগ্রহ করে সম্পূর্ণ ঠিকানা দিন")]
    AddressTooShort,
    #[error("অনুগ্রহ করে জেলা/এলাকা নির্বাচন করুন")]
    NoArea,
}

/// Checks the session and contact form, reporting only the first violation.
pub fn validate(session: &OrderSession, contact: &ContactDetails) -> Result<(), ValidationError> {
    let product = session.product().ok_or(ValidationError::NoProduct)?;

    match session.size() {
        Some(size) if product.has_size(size) => {}
        _ => return Err(ValidationError::NoSize),
    }

    if contact.name.trim().chars().count() < MIN_NAME_CHARS {
        return Err(ValidationError::NameTooShort);
    }

    let phone = contact.phone.trim();
    if phone.len() < MIN_PHONE_DIGITS || !phone.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidPhone);
    }

    if contact.address.trim().chars().count() < MIN_ADDRESS_CHARS {
        return Err(ValidationError::AddressTooShort);
    }

    match session.area() {
        Some(area) if session.config().is_known_area(area) => Ok(()),
        _ => Err(ValidationError::NoArea),
    }
}

/// Keeps ASCII digits only, as applied to the phone field on every keystroke.
pub fn sanitize_phone(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use crate::domain::Product;
    use std::sync::Arc;

    fn contact() -> ContactDetails {
        ContactDetails::new("Nusrat Jahan", "01712345678", "House 7, Road 3, Mirpur", "")
    }

    fn ready_session() -> OrderSession {
        let product =
            Product::new("bangle-001", "Blue and White", "নীল ও হোয়াইট", 500, &["24", "26", "28"]);
        let mut session = OrderSession::start(
            "s1",
            Arc::new(StoreConfig::default()),
            Some(product),
            Some("26"),
            Some(1),
        );
        session.select_area("Dhaka");
        session
    }

    #[test]
    fn test_complete_order_passes() {
        assert_eq!(validate(&ready_session(), &contact()), Ok(()));
    }

    #[test]
    fn test_missing_product_reported_first() {
        let session = OrderSession::start("s1", Arc::new(StoreConfig::default()), None, None, None);
        let empty = ContactDetails::default();
        assert_eq!(validate(&session, &contact()), Err(ValidationError::NoProduct));
        assert_eq!(validate(&session, &empty), Err(ValidationError::NoProduct));
    }

    #[test]
    fn test_product_without_sizes_reports_size() {
        let product = Product::new("x", "X", "এক্স", 100, &[]);
        let session =
            OrderSession::start("s1", Arc::new(StoreConfig::default()), Some(product), None, None);
        assert_eq!(validate(&session, &contact()), Err(ValidationError::NoSize));
    }

    #[test]
    fn test_rule_order_with_several_violations() {
        let session = ready_session();

        let bad = ContactDetails::new("Al", "123", "short", "");
        assert_eq!(validate(&session, &bad), Err(ValidationError::NameTooShort));

        let bad = ContactDetails::new("Ali", "0171234567", "short", "");
        assert_eq!(validate(&session, &bad), Err(ValidationError::InvalidPhone));

        let bad = ContactDetails::new("Ali", "01712345678", "  Mirpur  ", "");
        assert_eq!(validate(&session, &bad), Err(ValidationError::AddressTooShort));
    }

    #[test]
    fn test_area_checked_last() {
        let product = Product::new("bangle-002", "Thread", "সুতা", 320, &["24"]);
        let session =
            OrderSession::start("s1", Arc::new(StoreConfig::default()), Some(product), None, None);
        assert_eq!(validate(&session, &contact()), Err(ValidationError::NoArea));
    }

    #[test]
    fn test_phone_with_non_digits_is_rejected() {
        let mut raw = contact();
        raw.phone = "+8801712345678".to_string();
        assert_eq!(validate(&ready_session(), &raw), Err(ValidationError::InvalidPhone));
    }

    #[test]
    fn test_name_length_counts_characters() {
        let bengali = ContactDetails::new("রিমা", "01712345678", "House 7, Road 3, Mirpur", "");
        assert_eq!(validate(&ready_session(), &bengali), Ok(()));
    }

    #[test]
    fn test_sanitize_phone() {
        assert_eq!(sanitize_phone("+880 1712-345678"), "8801712345678");
        assert_eq!(sanitize_phone("abc"), "");
        assert_eq!(sanitize_phone("০১৭"), "");
    }

    #[test]
    fn test_messages_are_user_facing() {
        assert_eq!(ValidationError::NoArea.to_string(), "অনুগ্রহ করে জেলা/এলাকা নির্বাচন করুন");
        assert_eq!(
            ValidationError::InvalidPhone.to_string(),
            "অনুগ্রহ করে সঠিক ফোন নম্বর দিন (১১ ডিজিট)"
        );
    }
}
