use tracing::{info, instrument, warn};

use crate::clients::SessionClient;
use crate::domain::ContactDetails;
use crate::error::OrderError;
use crate::handoff::build_handoff_url;
use crate::message::compose_message;
use crate::validation::{validate, ValidationError};

/// A composed order ready to be opened in the messaging app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handoff {
    pub session_id: String,
    pub message: String,
    pub url: String,
    pub total: u64,
}

/// Client for submitting orders.
///
/// Checkout reads the session, runs the submission gate, composes the
/// message and builds the deep link. The session is discarded once the link
/// exists; delivery of the message is never tracked.
#[derive(Clone)]
pub struct OrderClient {
    sessions: SessionClient,
}

impl OrderClient {
    pub fn new(sessions: SessionClient) -> Self {
        Self { sessions }
    }

    #[instrument(skip(self, contact))]
    pub async fn checkout(
        &self,
        session_id: String,
        contact: ContactDetails,
    ) -> Result<Handoff, OrderError> {
        info!("Processing checkout request");

        // Step 1: Load session
        let session = self
            .sessions
            .get_session(session_id.clone())
            .await?
            .ok_or_else(|| OrderError::SessionNotFound(session_id.clone()))?;

        // Step 2: Submission gate
        if let Err(reason) = validate(&session, &contact) {
            warn!(reason = ?reason, "Order validation failed");
            return Err(reason.into());
        }

        // Step 3: Compose and link
        let message = compose_message(&session, &contact).ok_or(ValidationError::NoProduct)?;
        let total = session.pricing().total.ok_or(OrderError::TotalUnavailable)?;
        let url = build_handoff_url(session.config(), &message);

        // Step 4: Session is finished once the link exists
        if let Err(e) = self.sessions.discard_session(session_id.clone()).await {
            warn!(error = %e, "Failed to discard finished session");
        }

        info!(
            product_id = session.product().map(|p| p.id.as_str()).unwrap_or_default(),
            total,
            "Order handed off"
        );

        Ok(Handoff { session_id, message, url, total })
    }
}
