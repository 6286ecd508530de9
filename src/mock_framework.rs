//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_get`] or [`expect_remove`] to assert behavior.

use tokio::sync::{mpsc, oneshot};

use crate::actor_framework::{Entity, FrameworkError, ResourceClient, ResourceRequest};

/// Creates a client whose requests land on a receiver owned by the test.
///
/// The test plays the actor: it inspects each request and answers through
/// the enclosed responder, so success, failure and ordering are deterministic.
pub fn create_mock_client<T: Entity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::CreateParams, oneshot::Sender<Result<T::Id, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, oneshot::Sender<Result<T::ActionResult, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { id, action, respond_to }) => Some((id, action, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Remove request
pub async fn expect_remove<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<(), FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Remove { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use crate::catalog::Catalog;
    use crate::clients::SessionClient;
    use crate::config::StoreConfig;
    use crate::domain::{Mutation, OrderSession};
    use crate::pricing::PriceBreakdown;
    use crate::session::{SessionAction, SessionUpdate};

    #[tokio::test]
    async fn test_mock_client() {
        let (inner, mut receiver) = create_mock_client::<OrderSession>(10);
        let client =
            SessionClient::new(inner, Arc::new(Catalog::seed()), Arc::new(StoreConfig::default()));

        let start_client = client.clone();
        let start_task = tokio::spawn(async move {
            start_client
                .start_session(Some("bangle-002".to_string()), Some("28".to_string()), Some(2))
                .await
        });

        let (params, responder) =
            expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(params.product.map(|p| p.price), Some(320));
        assert_eq!(params.size.as_deref(), Some("28"));
        assert_eq!(params.quantity, Some(2));
        responder.send(Ok("session_7".to_string())).unwrap();

        assert_eq!(start_task.await.unwrap(), Ok("session_7".to_string()));

        let area_task = tokio::spawn(async move {
            client.select_area("session_7".to_string(), "Gazipur".to_string()).await
        });

        let (id, action, responder) =
            expect_action(&mut receiver).await.expect("Expected Action request");
        assert_eq!(id, "session_7");
        assert!(matches!(action, SessionAction::SelectArea(ref area) if area == "Gazipur"));
        let update = SessionUpdate {
            outcome: Mutation::Applied,
            pricing: PriceBreakdown {
                subtotal: Some(640),
                delivery_charge: Some(120),
                total: Some(760),
            },
        };
        responder.send(Ok(update)).unwrap();

        assert_eq!(area_task.await.unwrap(), Ok(update));
    }
}
