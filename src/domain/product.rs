use serde::{Deserialize, Serialize};

/// A catalog entry. Immutable once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub name_bn: String,
    pub price: u64,
    /// Zero means the product has no discount.
    #[serde(default)]
    pub original_price: u64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub gallery: Vec<String>,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub description_bn: String,
    /// Ordered; the first entry is the default selection.
    pub sizes: Vec<String>,
    /// Pieces per set. Shown to buyers, never priced.
    #[serde(default = "default_set_quantity")]
    pub set_quantity: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub on_sale: bool,
}

fn default_set_quantity() -> u32 {
    1
}

fn default_in_stock() -> bool {
    true
}

impl Product {
    /// Creates an in-stock product with no discount, category or display metadata.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        name_bn: impl Into<String>,
        price: u64,
        sizes: &[&str],
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            name_bn: name_bn.into(),
            price,
            original_price: 0,
            image: String::new(),
            gallery: Vec::new(),
            category: String::new(),
            description: String::new(),
            description_bn: String::new(),
            sizes: sizes.iter().map(|s| s.to_string()).collect(),
            set_quantity: default_set_quantity(),
            tags: Vec::new(),
            featured: false,
            in_stock: true,
            is_new: false,
            on_sale: false,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_original_price(mut self, original_price: u64) -> Self {
        self.original_price = original_price;
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub fn in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = in_stock;
        self
    }

    pub fn default_size(&self) -> Option<&str> {
        self.sizes.first().map(String::as_str)
    }

    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    pub fn has_discount(&self) -> bool {
        self.original_price > 0 && self.original_price > self.price
    }

    /// Discount badge percentage, rounded to the nearest whole percent.
    pub fn discount_percent(&self) -> Option<u32> {
        if !self.has_discount() {
            return None;
        }
        let saved = (self.original_price - self.price) as f64;
        Some((saved / self.original_price as f64 * 100.0).round() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_percent_rounds() {
        let product = Product::new("b1", "Bangle", "চুড়ি", 500, &["24"]).with_original_price(550);
        assert!(product.has_discount());
        assert_eq!(product.discount_percent(), Some(9));

        let product =
            Product::new("b3", "Crystal", "ক্রিস্টাল", 630, &["24"]).with_original_price(700);
        assert_eq!(product.discount_percent(), Some(10));
    }

    #[test]
    fn test_no_discount_without_higher_original_price() {
        let plain = Product::new("b2", "Thread", "সুতা", 320, &["24"]);
        assert_eq!(plain.discount_percent(), None);

        let equal = plain.clone().with_original_price(320);
        assert!(!equal.has_discount());

        let lower = plain.with_original_price(300);
        assert_eq!(lower.discount_percent(), None);
    }

    #[test]
    fn test_default_size_is_first() {
        let product = Product::new("b5", "Square", "স্কয়ার", 650, &["26", "24"]);
        assert_eq!(product.default_size(), Some("26"));
        assert!(product.has_size("24"));
        assert!(!product.has_size("28"));
    }

    #[test]
    fn test_deserializes_camel_case_record() {
        let json = r#"{
            "id": "bangle-009",
            "name": "Test",
            "nameBn": "টেস্ট",
            "price": 400,
            "originalPrice": 450,
            "category": "bangles",
            "sizes": ["24", "26"],
            "setQuantity": 2,
            "featured": true
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.name_bn, "টেস্ট");
        assert_eq!(product.original_price, 450);
        assert_eq!(product.set_quantity, 2);
        assert!(product.in_stock);
        assert!(!product.is_new);
    }
}
