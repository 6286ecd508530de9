/// Page that receives order links.
pub const ORDER_PAGE: &str = "order.html";

/// Product, size and quantity carried by an order-page link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderLink {
    pub product_id: Option<String>,
    pub size: Option<String>,
    pub quantity: Option<i64>,
}

impl OrderLink {
    pub fn new(product_id: impl Into<String>, size: impl Into<String>, quantity: i64) -> Self {
        Self {
            product_id: Some(product_id.into()),
            size: Some(size.into()),
            quantity: Some(quantity),
        }
    }

    /// Parses a query string such as `?id=bangle-001&size=26&qty=2`.
    ///
    /// The first occurrence of a key wins and unknown keys are skipped. The
    /// quantity is read from the leading integer of its value (`2abc` is 2),
    /// and a value without one is treated as absent.
    pub fn parse(query: &str) -> Self {
        let mut link = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = decode_component(value);
            match decode_component(key).as_str() {
                "id" if link.product_id.is_none() && !value.is_empty() => {
                    link.product_id = Some(value);
                }
                "size" if link.size.is_none() && !value.is_empty() => {
                    link.size = Some(value);
                }
                "qty" if link.quantity.is_none() => {
                    link.quantity = leading_integer(&value);
                }
                _ => {}
            }
        }
        link
    }

    /// Renders the link as an order-page href.
    pub fn to_href(&self) -> String {
        let params: Vec<String> = [
            ("id", self.product_id.clone()),
            ("size", self.size.clone()),
            ("qty", self.quantity.map(|q| q.to_string())),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| format!("{}={}", key, urlencoding::encode(&v))))
        .collect();

        if params.is_empty() {
            ORDER_PAGE.to_string()
        } else {
            format!("{}?{}", ORDER_PAGE, params.join("&"))
        }
    }
}

/// Optional sign followed by digits at the start of `raw`, after whitespace.
/// Values beyond `i64` saturate.
fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.trim_start_matches(['+', '-']);
    let sign_len = trimmed.len() - unsigned.len();
    let digits = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if sign_len > 1 || digits == 0 {
        return None;
    }
    let saturated = if trimmed.starts_with('-') { i64::MIN } else { i64::MAX };
    Some(trimmed[..sign_len + digits].parse().unwrap_or(saturated))
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    let decoded = urlencoding::decode(&spaced).map(|d| d.into_owned());
    decoded.unwrap_or(spaced)
}
