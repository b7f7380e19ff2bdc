use vistro_api::{
    config::AppConfig,
    services::seed_service,
    state::AppState,
    store::{self, Store},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let url = config
        .database_url
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("DATABASE_URL must be set to seed"))?;

    let gateway = store::connect(url, &config.database_name).await?;
    let state = AppState {
        store: Store::Ready(gateway),
    };

    let result = seed_service::seed_products(&state).await?;
    match result.inserted {
        Some(ids) => println!("Seeded {} sample products: {}", ids.len(), ids.join(", ")),
        None => println!(
            "{} ({} existing)",
            result.message,
            result.count.unwrap_or_default()
        ),
    }

    Ok(())
}
