//! # Storefront order intake
//!
//! Catalog queries, the buyer's order session, pricing, and the pre-filled
//! order message handed to the store over a messaging deep link.
//!
//! ## Layout
//!
//! - **Foundation**
//!     - **Domain types** - plain records, no actor concerns → [`domain::Product`], [`domain::OrderSession`]
//!     - **Catalog** - immutable store and its queries → [`catalog::Catalog`]
//! - **Order core** - synchronous and usable on its own
//!     - **Pricing** → [`pricing::recompute`]
//!     - **Validation** → [`validation::validate`]
//!     - **Message** → [`message::compose_message`]
//!     - **Handoff** → [`handoff::build_handoff_url`]
//! - **Hosting**
//!     - **Session actor** - one task owns every live session → [`actor_framework::ResourceActor`]
//!     - **Clients** - handles the UI calls into → [`clients::SessionClient`], [`clients::OrderClient`]
//!     - **System coordinator** → [`app_system::OrderSystem`]
//!
//! ## Example Usage
//!
//! ```no_run
//! # use storefront_order::{app_system::OrderSystem, catalog::Catalog, config::StoreConfig};
//! # use storefront_order::domain::{ContactDetails, OrderLink};
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let system = OrderSystem::new(StoreConfig::default(), Catalog::seed());
//!
//! let link = OrderLink::parse("?id=bangle-003&size=26&qty=2");
//! let session_id = system.session_client.start_from_link(&link).await?;
//! system.session_client.select_area(session_id.clone(), "Dhaka".into()).await?;
//!
//! let contact = ContactDetails::new("Nusrat Jahan", "01712345678", "House 7, Road 3, Mirpur", "");
//! let handoff = system.order_client.checkout(session_id, contact).await?;
//! println!("{}", handoff.url);
//!
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod catalog;
pub mod clients;
pub mod config;
pub mod domain;
pub mod error;
pub mod handoff;
pub mod message;
pub mod pricing;
pub mod session;
pub mod validation;

#[cfg(test)]
mod mock_framework;
#[cfg(test)]
mod integration_tests;
