use actor_framework::ActorClient;
use cart_checkout::cart_actor::{CartError, ErrorKind};
use cart_checkout::config::ShopConfig;
use cart_checkout::lifecycle::ShopSystem;
use cart_checkout::model::{ProductCreate, ProductId, User, UserCreate};
use cart_checkout::user_actor::UserError;
use rust_decimal::Decimal;

/// Registers a user with `wallet` money and, optionally, a shipping address.
async fn shopper(system: &ShopSystem, email: &str, wallet: i64, address: Option<&str>) -> User {
    let params = UserCreate::new("Shopper", email).with_wallet_money(Decimal::from(wallet));
    let id = system.user_client.create_user(params).await.unwrap();
    if let Some(address) = address {
        system
            .user_client
            .set_address(id.clone(), address.to_string())
            .await
            .unwrap();
    }
    system.user_client.get_user_by_id(id).await.unwrap()
}

async fn product(system: &ShopSystem, name: &str, cost: i64) -> ProductId {
    system
        .product_client
        .create_product(ProductCreate::new(name, Decimal::from(cost)))
        .await
        .unwrap()
}

async fn wallet_of(system: &ShopSystem, user: &User) -> Decimal {
    system
        .user_client
        .get_user_by_id(user.id.clone())
        .await
        .unwrap()
        .wallet_money
}

#[tokio::test]
async fn test_add_first_product_creates_cart() {
    // Scenario A
    let system = ShopSystem::new(&ShopConfig::default());
    let p1 = product(&system, "P1", 100).await;
    let user = shopper(&system, "a@example.com", 500, None).await;

    let cart = system
        .cart_service
        .add_product_to_cart(&user, p1.clone(), 2)
        .await
        .unwrap();
    assert_eq!(cart.user_id, user.id);
    assert_eq!(cart.email, "a@example.com");
    assert_eq!(cart.payment_option, "PAYMENT_OPTION_DEFAULT");
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].product.id, p1);
    assert_eq!(cart.items[0].quantity, 2);

    let fetched = system.cart_service.get_cart_by_user(&user).await.unwrap();
    assert_eq!(fetched, cart);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_adding_same_product_twice_is_rejected() {
    // Scenario B
    let system = ShopSystem::new(&ShopConfig::default());
    let p1 = product(&system, "P1", 100).await;
    let user = shopper(&system, "b@example.com", 500, None).await;
    let service = &system.cart_service;

    service.add_product_to_cart(&user, p1.clone(), 2).await.unwrap();
    let err = service
        .add_product_to_cart(&user, p1.clone(), 5)
        .await
        .unwrap_err();
    assert_eq!(err, CartError::ProductAlreadyInCart);
    assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    assert!(err.to_string().starts_with("Product already in cart."));

    // No silent merge of quantities
    let cart = service.get_cart_by_user(&user).await.unwrap();
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].quantity, 2);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_update_to_zero_takes_delete_path() {
    // Scenario C
    let system = ShopSystem::new(&ShopConfig::default());
    let p1 = product(&system, "P1", 100).await;
    let user = shopper(&system, "c@example.com", 500, None).await;
    let service = &system.cart_service;

    service.add_product_to_cart(&user, p1.clone(), 2).await.unwrap();
    let cart = service
        .update_product_in_cart(&user, p1.clone(), 0)
        .await
        .unwrap();
    assert!(cart.items.is_empty());

    // Exactly like delete: a second zero-update finds nothing to remove
    let err = service
        .update_product_in_cart(&user, p1, 0)
        .await
        .unwrap_err();
    assert_eq!(err, CartError::ProductNotInCart);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_checkout_with_insufficient_balance_changes_nothing() {
    // Scenario D
    let system = ShopSystem::new(&ShopConfig::default());
    let p1 = product(&system, "P1", 100).await;
    let user = shopper(&system, "d@example.com", 150, Some("1 Elm Street")).await;
    let service = &system.cart_service;
    service.add_product_to_cart(&user, p1, 2).await.unwrap();

    let err = service.checkout(&user).await.unwrap_err();
    assert_eq!(err, CartError::InsufficientBalance);
    assert_eq!(err.to_string(), "Insufficient balance in wallet");
    assert_eq!(err.status_code(), 400);

    assert_eq!(wallet_of(&system, &user).await, Decimal::from(150));
    let cart = service.get_cart_by_user(&user).await.unwrap();
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].quantity, 2);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_checkout_debits_wallet_and_clears_cart() {
    // Scenario E
    let system = ShopSystem::new(&ShopConfig::default());
    let p1 = product(&system, "P1", 100).await;
    let user = shopper(&system, "e@example.com", 300, Some("1 Elm Street")).await;
    let service = &system.cart_service;
    service.add_product_to_cart(&user, p1.clone(), 2).await.unwrap();

    let receipt = service.checkout(&user).await.unwrap();
    assert_eq!(receipt.total, Decimal::from(200));
    assert_eq!(receipt.wallet_money, Decimal::from(100));
    assert_eq!(receipt.items.len(), 1);
    assert_eq!(receipt.items[0].product.id, p1);

    assert_eq!(wallet_of(&system, &user).await, Decimal::from(100));
    // The cart survives checkout, emptied
    let cart = service.get_cart_by_user(&user).await.unwrap();
    assert!(cart.items.is_empty());

    let err = service.checkout(&user).await.unwrap_err();
    assert_eq!(err, CartError::EmptyCart);
    assert_eq!(err.to_string(), "User does not have any product in cart");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_checkout_without_address() {
    // Scenario F
    let system = ShopSystem::new(&ShopConfig::default());
    let p1 = product(&system, "P1", 100).await;
    let user = shopper(&system, "f@example.com", 1000, None).await;
    let service = &system.cart_service;
    service.add_product_to_cart(&user, p1, 1).await.unwrap();

    let err = service.checkout(&user).await.unwrap_err();
    assert_eq!(err, CartError::AddressNotSet);
    assert_eq!(err.to_string(), "Address is not set");
    assert_eq!(wallet_of(&system, &user).await, Decimal::from(1000));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_checkout_with_overflowing_total_keeps_actor_alive() {
    let system = ShopSystem::new(&ShopConfig::default());
    let priceless = system
        .product_client
        .create_product(ProductCreate::new("Priceless", Decimal::MAX))
        .await
        .unwrap();
    let user = shopper(&system, "overflow@example.com", 500, Some("1 Elm Street")).await;
    let service = &system.cart_service;
    service.add_product_to_cart(&user, priceless, 2).await.unwrap();

    let err = service.checkout(&user).await.unwrap_err();
    assert_eq!(err, CartError::TotalOverflow);
    assert_eq!(err.status_code(), 400);

    // Nothing charged, nothing cleared, and the cart actor still answers
    assert_eq!(wallet_of(&system, &user).await, Decimal::from(500));
    let cart = service.get_cart_by_user(&user).await.unwrap();
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].quantity, 2);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_missing_cart_errors() {
    let system = ShopSystem::new(&ShopConfig::default());
    let p1 = product(&system, "P1", 100).await;
    let user = shopper(&system, "g@example.com", 500, Some("1 Elm Street")).await;
    let service = &system.cart_service;

    let err = service.get_cart_by_user(&user).await.unwrap_err();
    assert_eq!(err, CartError::CartNotFound);
    assert_eq!(err.to_string(), "User does not have a cart");
    assert_eq!(err.status_code(), 404);

    let err = service.checkout(&user).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let err = service
        .update_product_in_cart(&user, p1.clone(), 3)
        .await
        .unwrap_err();
    assert_eq!(err, CartError::NoCartToUpdate);

    let err = service
        .delete_product_from_cart(&user, p1)
        .await
        .unwrap_err();
    assert_eq!(err, CartError::NoCartToDelete);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_product_is_rejected() {
    let system = ShopSystem::new(&ShopConfig::default());
    let p1 = product(&system, "P1", 100).await;
    let user = shopper(&system, "h@example.com", 500, None).await;
    let service = &system.cart_service;

    let err = service
        .add_product_to_cart(&user, ProductId(99), 1)
        .await
        .unwrap_err();
    assert_eq!(err, CartError::ProductNotFound);
    assert_eq!(err.to_string(), "Product doesn't exist in database");

    service.add_product_to_cart(&user, p1, 1).await.unwrap();
    let err = service
        .update_product_in_cart(&user, ProductId(99), 2)
        .await
        .unwrap_err();
    assert_eq!(err, CartError::ProductNotFound);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_update_and_delete_in_existing_cart() {
    let system = ShopSystem::new(&ShopConfig::default());
    let p1 = product(&system, "P1", 100).await;
    let p2 = product(&system, "P2", 20).await;
    let p3 = product(&system, "P3", 5).await;
    let user = shopper(&system, "i@example.com", 500, None).await;
    let service = &system.cart_service;

    service.add_product_to_cart(&user, p1.clone(), 1).await.unwrap();
    service.add_product_to_cart(&user, p2.clone(), 1).await.unwrap();

    let cart = service
        .update_product_in_cart(&user, p2.clone(), 4)
        .await
        .unwrap();
    assert_eq!(cart.items[1].quantity, 4);
    assert_eq!(cart.total(), Some(Decimal::from(180)));

    // Catalog product that is not in the cart
    let err = service
        .update_product_in_cart(&user, p3.clone(), 2)
        .await
        .unwrap_err();
    assert_eq!(err, CartError::ProductNotInCart);

    // Deleting an absent product never mutates the cart
    let before = service.get_cart_by_user(&user).await.unwrap();
    let err = service
        .delete_product_from_cart(&user, p3)
        .await
        .unwrap_err();
    assert_eq!(err, CartError::ProductNotInCart);
    assert_eq!(service.get_cart_by_user(&user).await.unwrap(), before);

    let cart = service.delete_product_from_cart(&user, p1).await.unwrap();
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].product.id, p2);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_adds_keep_products_unique() {
    let system = ShopSystem::new(&ShopConfig::default());
    let p1 = product(&system, "P1", 100).await;
    let user = shopper(&system, "j@example.com", 500, None).await;

    let mut handles = vec![];
    for _ in 0..10 {
        let service = system.cart_service.clone();
        let user = user.clone();
        let p1 = p1.clone();
        handles.push(tokio::spawn(async move {
            service.add_product_to_cart(&user, p1, 1).await
        }));
    }

    let mut added = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => added += 1,
            Err(e) => assert_eq!(e, CartError::ProductAlreadyInCart),
        }
    }
    assert_eq!(added, 1);

    let cart = system.cart_service.get_cart_by_user(&user).await.unwrap();
    assert_eq!(cart.items.len(), 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_checkouts_charge_once() {
    let system = ShopSystem::new(&ShopConfig::default());
    let p1 = product(&system, "P1", 100).await;
    let user = shopper(&system, "k@example.com", 500, Some("1 Elm Street")).await;
    system
        .cart_service
        .add_product_to_cart(&user, p1, 2)
        .await
        .unwrap();

    let mut handles = vec![];
    for _ in 0..5 {
        let service = system.cart_service.clone();
        let user = user.clone();
        handles.push(tokio::spawn(async move { service.checkout(&user).await }));
    }

    let mut succeeded = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => succeeded += 1,
            Err(e) => assert_eq!(e, CartError::EmptyCart),
        }
    }
    assert_eq!(succeeded, 1);
    assert_eq!(wallet_of(&system, &user).await, Decimal::from(300));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_user_accounts() {
    let system = ShopSystem::new(&ShopConfig::default());
    let user = shopper(&system, "l@example.com", 500, None).await;

    let err = system
        .user_client
        .create_user(UserCreate::new("Copycat", "L@example.com"))
        .await
        .unwrap_err();
    assert_eq!(err, UserError::EmailTaken);

    let found = system
        .user_client
        .get_user_by_email("l@example.com")
        .await
        .unwrap();
    assert_eq!(found.map(|u| u.id), Some(user.id.clone()));

    let address = system
        .user_client
        .get_user_address(user.id.clone())
        .await
        .unwrap();
    assert_eq!(address.address, "ADDRESS_NOT_SET");

    system
        .user_client
        .set_address(user.id.clone(), "9 Harbour Road".into())
        .await
        .unwrap();
    let address = system
        .user_client
        .get_user_address(user.id.clone())
        .await
        .unwrap();
    assert_eq!(address.address, "9 Harbour Road");
    assert_eq!(address.email, "l@example.com");

    let products = system.product_client.list_products().await.unwrap();
    assert!(products.is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_emails_stay_unique_across_accounts() {
    let system = ShopSystem::new(&ShopConfig::default());
    let a = shopper(&system, "a@x.com", 500, None).await;
    let b = shopper(&system, "b@x.com", 500, None).await;

    let err = system
        .user_client
        .create_user(UserCreate::new("Impostor", "B@X.com"))
        .await
        .unwrap_err();
    assert_eq!(err, UserError::EmailTaken);

    // Each email still resolves to exactly the account that registered it
    for user in [&a, &b] {
        let found = system
            .user_client
            .get_user_by_email(&user.email)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, user.id);
    }
    let emails: Vec<String> = system
        .user_client
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.email)
        .collect();
    assert_eq!(emails, vec!["a@x.com".to_string(), "b@x.com".to_string()]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_cart_serializes_with_camel_case_fields() {
    let system = ShopSystem::new(&ShopConfig::default());
    let p1 = product(&system, "P1", 100).await;
    let user = shopper(&system, "m@example.com", 500, None).await;

    let cart = system
        .cart_service
        .add_product_to_cart(&user, p1, 2)
        .await
        .unwrap();
    let json = serde_json::to_value(&cart).unwrap();
    assert_eq!(json["email"], "m@example.com");
    assert_eq!(json["paymentOption"], "PAYMENT_OPTION_DEFAULT");
    assert_eq!(json["cartItems"][0]["quantity"], 2);
    assert_eq!(json["cartItems"][0]["product"]["cost"], "100");

    system.shutdown().await.unwrap();
}
