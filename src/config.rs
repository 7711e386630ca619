use std::env;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: u16,
    pub store: StoreConfig,
}

/// Which backend the item store runs on. `Database` carries the connection
/// string as-is; a missing or unusable value is reported per request by the
/// store, not at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreConfig {
    Memory,
    Database { url: Option<String> },
}

impl EnvConfig {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8080);

        let store = match env::var("STORE_BACKEND").as_deref() {
            Ok("database") => StoreConfig::Database {
                url: env::var("DATABASE_URL").ok(),
            },
            Ok("memory") | Err(_) => StoreConfig::Memory,
            Ok(other) => {
                log::warn!("Unknown STORE_BACKEND {:?}, using the in-memory store", other);
                StoreConfig::Memory
            }
        };

        EnvConfig { port, store }
    }
}
