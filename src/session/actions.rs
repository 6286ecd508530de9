use crate::domain::{Mutation, Product};
use crate::pricing::PriceBreakdown;

/// Buyer selections applied to a live order session.
#[derive(Debug, Clone)]
pub enum SessionAction {
    /// Switches to another product, already resolved from the catalog.
    SelectProduct(Product),
    SelectSize(String),
    SetQuantity(i64),
    SelectArea(String),
}

/// What a selection did, with the pricing the buyer should now see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionUpdate {
    pub outcome: Mutation,
    pub pricing: PriceBreakdown,
}
