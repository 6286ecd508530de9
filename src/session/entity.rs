use crate::actor_framework::Entity;
use crate::domain::{OrderSession, SessionStart};
use super::actions::{SessionAction, SessionUpdate};

impl Entity for OrderSession {
    type Id = String;
    type CreateParams = SessionStart;
    type Action = SessionAction;
    type ActionResult = SessionUpdate;

    /// Opens a session. Size and quantity fall back to their defaults when
    /// the start parameters are missing or out of range.
    fn from_create_params(id: String, params: SessionStart) -> Result<Self, String> {
        Ok(OrderSession::start(
            id,
            params.config,
            params.product,
            params.size.as_deref(),
            params.quantity,
        ))
    }

    /// Applies one selection. Rejected selections are reported through
    /// [`SessionUpdate::outcome`], never as errors.
    fn handle_action(&mut self, action: SessionAction) -> Result<SessionUpdate, String> {
        let outcome = match action {
            SessionAction::SelectProduct(product) => self.select_product(product),
            SessionAction::SelectSize(size) => self.select_size(&size),
            SessionAction::SetQuantity(quantity) => self.set_quantity(quantity),
            SessionAction::SelectArea(area) => self.select_area(&area),
        };
        Ok(SessionUpdate {
            outcome,
            pricing: *self.pricing(),
        })
    }
}
