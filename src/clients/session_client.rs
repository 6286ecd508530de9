use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::actor_framework::ResourceClient;
use crate::catalog::Catalog;
use crate::config::StoreConfig;
use crate::domain::{OrderLink, OrderSession, Product, SessionStart};
use crate::error::SessionError;
use crate::session::{SessionAction, SessionUpdate};

/// Client for the order-session actor.
///
/// Product ids are resolved against the catalog here, so the actor only ever
/// sees complete product records.
#[derive(Clone)]
pub struct SessionClient {
    inner: ResourceClient<OrderSession>,
    catalog: Arc<Catalog>,
    config: Arc<StoreConfig>,
}

impl SessionClient {
    pub fn new(
        inner: ResourceClient<OrderSession>,
        catalog: Arc<Catalog>,
        config: Arc<StoreConfig>,
    ) -> Self {
        Self { inner, catalog, config }
    }

    /// Opens a session, optionally preselecting a product.
    ///
    /// An unknown product id is reported as [`SessionError::ProductNotFound`]
    /// and no session is created.
    #[instrument(skip(self))]
    pub async fn start_session(
        &self,
        product_id: Option<String>,
        size: Option<String>,
        quantity: Option<i64>,
    ) -> Result<String, SessionError> {
        debug!("Sending request");
        let product = product_id.map(|id| self.resolve(&id)).transpose()?;
        let params = SessionStart {
            config: Arc::clone(&self.config),
            product,
            size,
            quantity,
        };
        let id = self.inner.create(params).await.map_err(SessionError::from)?;
        info!(session_id = %id, "Order session started");
        Ok(id)
    }

    /// Opens a session from an order-page link.
    pub async fn start_from_link(&self, link: &OrderLink) -> Result<String, SessionError> {
        self.start_session(link.product_id.clone(), link.size.clone(), link.quantity)
            .await
    }

    #[instrument(skip(self))]
    pub async fn select_product(
        &self,
        id: String,
        product_id: String,
    ) -> Result<SessionUpdate, SessionError> {
        debug!("Sending request");
        let product = self.resolve(&product_id)?;
        self.apply(id, SessionAction::SelectProduct(product)).await
    }

    async fn apply(
        &self,
        id: String,
        action: SessionAction,
    ) -> Result<SessionUpdate, SessionError> {
        let update = self
            .inner
            .perform_action(id, action)
            .await
            .map_err(SessionError::from)?;
        if !update.outcome.changed_state() {
            debug!("Selection ignored");
        }
        Ok(update)
    }

    fn resolve(&self, product_id: &str) -> Result<Product, SessionError> {
        self.catalog.find_product_by_id(product_id).cloned().ok_or_else(|| {
            warn!(product_id, "Unknown product requested");
            SessionError::ProductNotFound(product_id.to_string())
        })
    }
}

session_action_method!(SessionClient => fn select_size(size: String) as SelectSize);
session_action_method!(SessionClient => fn set_quantity(quantity: i64) as SetQuantity);
session_action_method!(SessionClient => fn select_area(area: String) as SelectArea);

impl_client_methods!(SessionClient, OrderSession, SessionError, session);
