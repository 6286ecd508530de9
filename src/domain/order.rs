use std::sync::Arc;

use crate::config::StoreConfig;
use crate::domain::Product;
use crate::pricing::{self, PriceBreakdown};
use crate::validation::sanitize_phone;

pub const MIN_QUANTITY: u32 = 1;
pub const MAX_QUANTITY: u32 = 10;

/// Outcome of a session setter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    /// The value was stored as given.
    Applied,
    /// The value was out of range and saturated before being stored.
    Clamped,
    /// The value was rejected and the session is unchanged.
    Ignored,
}

impl Mutation {
    pub fn changed_state(self) -> bool {
        !matches!(self, Mutation::Ignored)
    }
}

/// Saturates a requested quantity into `[MIN_QUANTITY, MAX_QUANTITY]`.
pub fn clamp_quantity(requested: i64) -> u32 {
    requested.clamp(MIN_QUANTITY as i64, MAX_QUANTITY as i64) as u32
}

/// Parameters for opening a session, typically taken from an order link.
#[derive(Debug, Clone)]
pub struct SessionStart {
    pub config: Arc<StoreConfig>,
    pub product: Option<Product>,
    pub size: Option<String>,
    pub quantity: Option<i64>,
}

/// The buyer's in-progress selection.
///
/// Pricing is derived: every setter recomputes it before returning, so
/// [`OrderSession::pricing`] always reflects the current selection.
#[derive(Debug, Clone)]
pub struct OrderSession {
    id: String,
    config: Arc<StoreConfig>,
    product: Option<Product>,
    size: Option<String>,
    quantity: u32,
    area: Option<String>,
    pricing: PriceBreakdown,
}

impl OrderSession {
    pub fn start(
        id: impl Into<String>,
        config: Arc<StoreConfig>,
        product: Option<Product>,
        size: Option<&str>,
        quantity: Option<i64>,
    ) -> Self {
        let size = product.as_ref().and_then(|p| match size {
            Some(s) if p.has_size(s) => Some(s.to_string()),
            _ => p.default_size().map(String::from),
        });

        let mut session = Self {
            id: id.into(),
            config,
            product,
            size,
            quantity: clamp_quantity(quantity.unwrap_or(1)),
            area: None,
            pricing: PriceBreakdown::default(),
        };
        session.refresh();
        session
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    pub fn size(&self) -> Option<&str> {
        self.size.as_deref()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn area(&self) -> Option<&str> {
        self.area.as_deref()
    }

    pub fn pricing(&self) -> &PriceBreakdown {
        &self.pricing
    }

    /// Switches product. Size falls back to the new product's first size and
    /// the delivery area is cleared; quantity carries over.
    pub fn select_product(&mut self, product: Product) -> Mutation {
        self.size = product.default_size().map(String::from);
        self.product = Some(product);
        self.quantity = clamp_quantity(self.quantity as i64);
        self.area = None;
        self.refresh();
        Mutation::Applied
    }

    pub fn select_size(&mut self, size: &str) -> Mutation {
        match &self.product {
            Some(product) if product.has_size(size) => {
                self.size = Some(size.to_string());
                self.refresh();
                Mutation::Applied
            }
            _ => Mutation::Ignored,
        }
    }

    pub fn set_quantity(&mut self, requested: i64) -> Mutation {
        let quantity = clamp_quantity(requested);
        self.quantity = quantity;
        self.refresh();
        if quantity as i64 == requested {
            Mutation::Applied
        } else {
            Mutation::Clamped
        }
    }

    /// Only labels from the configured area list are accepted.
    pub fn select_area(&mut self, area: &str) -> Mutation {
        if !self.config.is_known_area(area) {
            return Mutation::Ignored;
        }
        self.area = Some(area.to_string());
        self.refresh();
        Mutation::Applied
    }

    fn refresh(&mut self) {
        self.pricing = pricing::recompute(self);
    }
}

/// Buyer contact fields as submitted with the order form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactDetails {
    pub name: String,
    /// Digits only.
    pub phone: String,
    pub address: String,
    pub notes: String,
}

impl ContactDetails {
    /// Trims every field and strips non-digits from the phone number.
    pub fn new(
        name: impl AsRef<str>,
        phone: impl AsRef<str>,
        address: impl AsRef<str>,
        notes: impl AsRef<str>,
    ) -> Self {
        Self {
            name: name.as_ref().trim().to_string(),
            phone: sanitize_phone(phone.as_ref()),
            address: address.as_ref().trim().to_string(),
            notes: notes.as_ref().trim().to_string(),
        }
    }
}
