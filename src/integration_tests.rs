#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::app_system::OrderSystem;
    use crate::catalog::Catalog;
    use crate::clients::{OrderClient, SessionClient};
    use crate::config::StoreConfig;
    use crate::domain::{ContactDetails, Mutation, OrderLink, OrderSession};
    use crate::error::OrderError;
    use crate::mock_framework::{create_mock_client, expect_get, expect_remove};
    use crate::validation::ValidationError;

    fn contact() -> ContactDetails {
        ContactDetails::new("Tahmina Rahman", "017 1234 5678", "House 22, Road 8, Dhanmondi", "")
    }

    #[tokio::test]
    async fn test_checkout_flow_against_mock_actor() {
        // 1. Setup Mocks
        let config = Arc::new(StoreConfig::default());
        let catalog = Arc::new(Catalog::seed());
        let (inner, mut session_rx) = create_mock_client::<OrderSession>(10);
        let sessions = SessionClient::new(inner, Arc::clone(&catalog), Arc::clone(&config));
        let order_client = OrderClient::new(sessions);

        // 2. Execute checkout in background
        let checkout = tokio::spawn(async move {
            order_client.checkout("session_1".to_string(), contact()).await
        });

        // 3. Verify Interactions
        let (id, responder) = expect_get(&mut session_rx).await.expect("Expected Session Get");
        assert_eq!(id, "session_1");
        let product = catalog.find_product_by_id("bangle-003").cloned();
        let mut session =
            OrderSession::start("session_1", Arc::clone(&config), product, Some("26"), Some(3));
        session.select_area("Dhaka");
        responder.send(Ok(Some(session))).unwrap();

        let (id, responder) =
            expect_remove(&mut session_rx).await.expect("Expected Session Remove");
        assert_eq!(id, "session_1");
        responder.send(Ok(())).unwrap();

        // 4. Verify Result
        let handoff = checkout.await.unwrap().unwrap();
        assert_eq!(handoff.total, 1950);
        assert!(handoff.message.contains("📱 *ফোন:* 01712345678"));
        assert!(handoff.url.starts_with("https://wa.me/8801700000000?text="));
    }

    #[tokio::test]
    async fn test_failed_validation_keeps_session() {
        let config = Arc::new(StoreConfig::default());
        let (inner, mut session_rx) = create_mock_client::<OrderSession>(10);
        let sessions = SessionClient::new(inner, Arc::new(Catalog::seed()), Arc::clone(&config));
        let order_client = OrderClient::new(sessions);

        let checkout = tokio::spawn(async move {
            order_client.checkout("session_1".to_string(), contact()).await
        });

        let (_, responder) = expect_get(&mut session_rx).await.expect("Expected Session Get");
        let blank = OrderSession::start("session_1", config, None, None, None);
        responder.send(Ok(Some(blank))).unwrap();

        let result = checkout.await.unwrap();
        assert_eq!(result, Err(OrderError::Validation(ValidationError::NoProduct)));
        // No Remove request follows a rejected submission.
        assert!(session_rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_full_system_order() {
        let system = OrderSystem::new(StoreConfig::default(), Catalog::seed());

        let link = OrderLink::parse("id=bangle-001&size=28&qty=1");
        let session_id = system.session_client.start_from_link(&link).await.unwrap();

        let update = system.session_client.set_quantity(session_id.clone(), 2).await.unwrap();
        assert_eq!(update.outcome, Mutation::Applied);
        assert_eq!(update.pricing.subtotal, Some(1000));

        // Submitting before an area is chosen is blocked.
        let err = system
            .order_client
            .checkout(session_id.clone(), contact())
            .await
            .unwrap_err();
        assert_eq!(err, OrderError::Validation(ValidationError::NoArea));

        let update = system
            .session_client
            .select_area(session_id.clone(), "Chattogram".to_string())
            .await
            .unwrap();
        assert_eq!(update.pricing.total, Some(1120));

        let handoff = system
            .order_client
            .checkout(session_id.clone(), contact())
            .await
            .unwrap();
        assert_eq!(handoff.total, 1120);
        let (_, text) = handoff.url.split_once("?text=").unwrap();
        assert_eq!(urlencoding::decode(text).unwrap(), handoff.message);

        // The finished session is gone.
        let err = system.order_client.checkout(session_id.clone(), contact()).await.unwrap_err();
        assert_eq!(err, OrderError::SessionNotFound(session_id));

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_concurrent_sessions_are_independent() {
        let system = OrderSystem::new(StoreConfig::default(), Catalog::seed());
        let client = &system.session_client;

        let first = client
            .start_session(Some("bangle-002".to_string()), None, Some(1))
            .await
            .unwrap();
        let second = client
            .start_session(Some("bangle-005".to_string()), None, Some(4))
            .await
            .unwrap();
        assert_ne!(first, second);

        client.select_area(first.clone(), "Dhaka".to_string()).await.unwrap();
        client.select_area(second.clone(), "Sylhet".to_string()).await.unwrap();

        let a = client.get_session(first).await.unwrap().unwrap();
        let b = client.get_session(second).await.unwrap().unwrap();
        assert_eq!(a.pricing().total, Some(320 + 60));
        assert_eq!(b.pricing().total, Some(650 * 4 + 120));

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_oversized_rate_leaves_other_sessions_running() {
        let mut config = StoreConfig::default();
        config.delivery.capital_rate = u64::MAX;
        let system = OrderSystem::new(config, Catalog::seed());
        let client = &system.session_client;

        let first = client
            .start_session(Some("bangle-003".to_string()), Some("26".to_string()), Some(1))
            .await
            .unwrap();
        let second = client
            .start_session(Some("bangle-001".to_string()), Some("24".to_string()), Some(1))
            .await
            .unwrap();

        let update = client.select_area(first.clone(), "Dhaka".to_string()).await.unwrap();
        assert_eq!(update.outcome, Mutation::Applied);
        assert_eq!(update.pricing.delivery_charge, Some(u64::MAX));
        assert_eq!(update.pricing.total, None);

        let err = system.order_client.checkout(first, contact()).await.unwrap_err();
        assert_eq!(err, OrderError::TotalUnavailable);

        let update = client.select_area(second.clone(), "Khulna".to_string()).await.unwrap();
        assert_eq!(update.pricing.total, Some(500 + 120));
        let handoff = system.order_client.checkout(second, contact()).await.unwrap();
        assert_eq!(handoff.total, 620);

        system.shutdown().await.unwrap();
    }
}
