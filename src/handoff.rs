use crate::config::StoreConfig;

/// Builds the messaging deep link carrying `message` as its `text` parameter.
///
/// Opening the link is left to the caller.
pub fn build_handoff_url(config: &StoreConfig, message: &str) -> String {
    format!(
        "{}/{}?text={}",
        config.messaging_base_url.trim_end_matches('/'),
        config.recipient_id,
        urlencoding::encode(message)
    )
}
