use cart_checkout::config::ShopConfig;
use cart_checkout::lifecycle::{setup_tracing, ShopSystem};
use cart_checkout::model::{ProductCreate, UserCreate};
use rust_decimal::Decimal;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = ShopConfig::from_env().map_err(|e| e.to_string())?;

    // Setup tracing once for the entire application
    setup_tracing();

    info!(?config, "Starting shop");
    let system = ShopSystem::new(&config);

    // Seed the catalog
    let mut catalog = Vec::new();
    for (name, category, cost) in [
        ("Desk Lamp", "Home", Decimal::from(100)),
        ("Notebook", "Stationery", Decimal::new(450, 2)),
    ] {
        let params = ProductCreate::new(name, cost).with_category(category);
        let id = system
            .product_client
            .create_product(params)
            .await
            .map_err(|e| e.to_string())?;
        catalog.push(id);
    }
    info!(products = catalog.len(), "Catalog seeded");

    // Register a shopper
    let span = tracing::info_span!("registration");
    let user = async {
        let user_id = system
            .user_client
            .create_user(UserCreate::new("Alice", "alice@example.com"))
            .await?;
        system
            .user_client
            .set_address(user_id.clone(), "12 Market Street, Springfield".to_string())
            .await?;
        system.user_client.get_user_by_id(user_id).await
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;
    info!(user_id = %user.id, wallet = %user.wallet_money, "User registered");

    // Fill the cart and check out
    let span = tracing::info_span!("shopping", user_id = %user.id);
    let outcome = async {
        let service = &system.cart_service;
        service.add_product_to_cart(&user, catalog[0].clone(), 2).await?;
        service.add_product_to_cart(&user, catalog[1].clone(), 1).await?;
        service.update_product_in_cart(&user, catalog[1].clone(), 4).await?;
        let cart = service.get_cart_by_user(&user).await?;
        info!(items = cart.items.len(), total = ?cart.total(), "Cart ready");
        service.checkout(&user).await
    }
    .instrument(span)
    .await;

    match outcome {
        Ok(receipt) => info!(
            total = %receipt.total,
            wallet = %receipt.wallet_money,
            "Checkout succeeded"
        ),
        Err(e) => error!(error = %e, status = e.status_code(), "Checkout failed"),
    }

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
