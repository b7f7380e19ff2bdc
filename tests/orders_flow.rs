use mongodb::bson::{Document, doc};
use vistro_api::{
    error::AppError,
    models::{CartItem, CustomerInfo, Order},
    services::{order_service, product_service, seed_service},
    state::AppState,
    store::{self, Store, collections},
};

const TEST_DB: &str = "vistro_test_orders";

// Integration flow: create an order against an existing product, then verify
// that bad references are rejected atomically.
#[tokio::test]
async fn order_referential_check_flow() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };

    let product = seed_service::sample_products().remove(0);
    let created = product_service::create_product(&state, product).await?;
    let product_id = created["id"].as_str().expect("product id").to_string();

    // Happy path: every referenced product exists.
    let order = order_service::create_order(&state, order_payload(vec![&product_id])).await?;
    assert!(order["id"].is_string());
    assert_eq!(order["items"][0]["product_id"], product_id.as_str());
    assert_eq!(order["status"], "pending");
    assert_eq!(order["currency"], "USD");

    let gateway = state.store.gateway()?;
    assert_eq!(gateway.count(collections::ORDER, doc! {}).await?, 1);
    let products_before = gateway.count(collections::PRODUCT, doc! {}).await?;

    // Unknown (but well-formed) reference: rejected, naming the id, with
    // nothing written.
    let missing = "000000000000000000000000";
    let err = order_service::create_order(&state, order_payload(vec![missing]))
        .await
        .unwrap_err();
    assert!(matches!(&err, AppError::UnknownProduct(id) if id == missing));
    assert_eq!(gateway.count(collections::ORDER, doc! {}).await?, 1);
    assert_eq!(
        gateway.count(collections::PRODUCT, doc! {}).await?,
        products_before
    );

    // Malformed reference: rejected before touching the store.
    let err = order_service::create_order(&state, order_payload(vec!["zzz"]))
        .await
        .unwrap_err();
    assert!(matches!(&err, AppError::InvalidId(id) if id == "zzz"));
    assert_eq!(gateway.count(collections::ORDER, doc! {}).await?, 1);

    // A single bad item poisons the whole order even when others are fine.
    let err = order_service::create_order(&state, order_payload(vec![&product_id, missing]))
        .await
        .unwrap_err();
    assert!(matches!(&err, AppError::UnknownProduct(id) if id == missing));
    assert_eq!(gateway.count(collections::ORDER, doc! {}).await?, 1);

    Ok(())
}

fn order_payload(product_ids: Vec<&str>) -> Order {
    Order {
        items: product_ids
            .into_iter()
            .map(|id| CartItem {
                product_id: id.to_string(),
                quantity: 1,
                size: Some("M".to_string()),
                color: None,
            })
            .collect(),
        subtotal: 28.0,
        shipping: 5.0,
        total: 33.0,
        currency: "USD".to_string(),
        status: "pending".to_string(),
        customer: CustomerInfo {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            address: "1 Main St".to_string(),
            city: "London".to_string(),
            country: "UK".to_string(),
            postal_code: "N1 9GU".to_string(),
        },
    }
}

async fn setup_state() -> anyhow::Result<Option<AppState>> {
    let url = match std::env::var("TEST_DATABASE_URL").or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!(
                "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration flow tests."
            );
            return Ok(None);
        }
    };

    let client = mongodb::Client::with_uri_str(&url).await?;
    let db = client.database(TEST_DB);
    db.collection::<Document>("product").drop().await?;
    db.collection::<Document>("order").drop().await?;

    let gateway = store::connect(&url, TEST_DB).await?;
    Ok(Some(AppState {
        store: Store::Ready(gateway),
    }))
}
