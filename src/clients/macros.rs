/// Generates `get_<entity>` and `discard_<entity>` on a client wrapping a
/// `ResourceClient` in its `inner` field.
macro_rules! impl_client_methods {
    ($client_name:ident, $entity:ty, $error:ty, $entity_name_snake:ident) => {
        paste::paste! {
            impl $client_name {
                #[tracing::instrument(skip(self))]
                pub async fn [<get_ $entity_name_snake>](&self, id: String) -> Result<Option<$entity>, $error> {
                    tracing::debug!("Sending request");
                    self.inner.get(id).await.map_err(<$error>::from)
                }

                #[tracing::instrument(skip(self))]
                pub async fn [<discard_ $entity_name_snake>](&self, id: String) -> Result<(), $error> {
                    tracing::debug!("Sending request");
                    self.inner.remove(id).await.map_err(<$error>::from)
                }
            }
        }
    };
}

/// Generates a client method that forwards one parameter as a session action.
macro_rules! session_action_method {
    ($client:ty => fn $method:ident($param:ident: $param_type:ty) as $variant:ident) => {
        impl $client {
            #[tracing::instrument(skip(self))]
            pub async fn $method(
                &self,
                id: String,
                $param: $param_type,
            ) -> Result<$crate::session::SessionUpdate, $crate::error::SessionError> {
                tracing::debug!("Sending request");
                self.apply(id, $crate::session::SessionAction::$variant($param)).await
            }
        }
    };
}
