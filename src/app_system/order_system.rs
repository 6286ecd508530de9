use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{error, info};

use crate::actor_framework::ResourceActor;
use crate::catalog::Catalog;
use crate::clients::{OrderClient, SessionClient};
use crate::config::StoreConfig;
use crate::domain::OrderSession;
use crate::error::SystemError;

const SESSION_BUFFER: usize = 32;

/// The storefront's order intake: catalog, configuration and the session actor.
///
/// Responsible for starting the actor, wiring the clients, and shutdown.
pub struct OrderSystem {
    pub catalog: Arc<Catalog>,
    pub config: Arc<StoreConfig>,
    pub session_client: SessionClient,
    pub order_client: OrderClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderSystem {
    /// Starts the session actor. Must be called inside a tokio runtime.
    pub fn new(config: StoreConfig, catalog: Catalog) -> Self {
        info!(
            products = catalog.products().len(),
            areas = config.delivery.areas.len(),
            "Starting order system"
        );
        let config = Arc::new(config);
        let catalog = Arc::new(catalog);

        let session_id_counter = Arc::new(AtomicU64::new(1));
        let next_session_id = move || {
            let id = session_id_counter.fetch_add(1, Ordering::SeqCst);
            format!("session_{}", id)
        };

        let (session_actor, session_resource_client) =
            ResourceActor::<OrderSession>::new(SESSION_BUFFER, next_session_id);
        let session_client = SessionClient::new(
            session_resource_client,
            Arc::clone(&catalog),
            Arc::clone(&config),
        );
        let order_client = OrderClient::new(session_client.clone());
        let session_handle = tokio::spawn(session_actor.run());

        Self {
            catalog,
            config,
            session_client,
            order_client,
            handles: vec![session_handle],
        }
    }

    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        // The actor stops once every client handle is gone.
        drop(self.order_client);
        drop(self.session_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e.into());
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
