use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// MongoDB connection string. Absent means the service runs without a
    /// store and every data endpoint reports it as unavailable.
    pub database_url: Option<String>,
    pub database_name: String,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL").ok();
        let database_name = env::var("DATABASE_NAME").unwrap_or_else(|_| "vistro".to_string());
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8000);
        Ok(Self {
            database_url,
            database_name,
            host,
            port,
        })
    }
}
