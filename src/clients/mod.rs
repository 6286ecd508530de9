//! Handles that the storefront UI uses to drive order sessions and checkout.

#[macro_use]
mod macros;

pub mod order_client;
pub mod session_client;

pub use order_client::*;
pub use session_client::*;
