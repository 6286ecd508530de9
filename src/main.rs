use tracing::{error, info, warn, Instrument};

use storefront_order::app_system::{setup_tracing, OrderSystem};
use storefront_order::catalog::Catalog;
use storefront_order::config::StoreConfig;
use storefront_order::domain::{ContactDetails, OrderLink};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = StoreConfig::from_env()?;
    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load(path)?,
        None => Catalog::seed(),
    };

    info!("Starting storefront order intake");
    let system = OrderSystem::new(config, catalog);

    for product in system.catalog.list_featured(system.config.featured_limit) {
        info!(
            product_id = %product.id,
            price = product.price,
            discount_percent = product.discount_percent(),
            "Featured product"
        );
    }

    // A buyer arrives from a product detail page
    let link = OrderLink::parse("?id=bangle-003&size=26&qty=2");

    let span = tracing::info_span!("order_session");
    let session_id = async {
        info!(href = %link.to_href(), "Opening order session from link");
        system.session_client.start_from_link(&link).await
    }
    .instrument(span.clone())
    .await?;

    let update = system
        .session_client
        .select_area(session_id.clone(), "Dhaka".to_string())
        .instrument(span.clone())
        .await?;
    info!(outcome = ?update.outcome, total = ?update.pricing.total, "Delivery area selected");

    let contact = ContactDetails::new(
        "Nusrat Jahan",
        "017-1234-5678",
        "House 7, Road 3, Mirpur, Dhaka",
        "",
    );

    match system
        .order_client
        .checkout(session_id, contact)
        .instrument(span)
        .await
    {
        Ok(handoff) => {
            info!(total = handoff.total, "Order ready for handoff");
            println!("{}", handoff.url);
        }
        Err(e) => warn!(error = %e, "Checkout blocked"),
    }

    // Shutdown system gracefully
    if let Err(e) = system.shutdown().await {
        error!(error = %e, "Shutdown failed");
        return Err(e.into());
    }

    info!("Application completed successfully");
    Ok(())
}
