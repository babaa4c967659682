/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Startup seeding parameters.
    pub seed: SeedConfig,
}

/// How the store is populated on first start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedConfig {
    /// Customers generated when the `customers` table is empty.
    pub customer_count: usize,
    /// Orders generated when the `orders` table is empty.
    pub order_count: usize,
    /// Fixed RNG seed for reproducible data; random when unset.
    pub rng_seed: Option<u64>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:4200`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `SEED_CUSTOMERS`       | `10`                       |
    /// | `SEED_ORDERS`          | `1000`                     |
    /// | `SEED_RNG`             | unset                      |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:4200".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            seed: SeedConfig::from_env(),
        }
    }
}

impl SeedConfig {
    /// Load seeding parameters from `SEED_CUSTOMERS`, `SEED_ORDERS` and
    /// `SEED_RNG`.
    pub fn from_env() -> Self {
        let customer_count: usize = std::env::var("SEED_CUSTOMERS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("SEED_CUSTOMERS must be a valid usize");

        let order_count: usize = std::env::var("SEED_ORDERS")
            .unwrap_or_else(|_| "1000".into())
            .parse()
            .expect("SEED_ORDERS must be a valid usize");

        let rng_seed: Option<u64> = std::env::var("SEED_RNG")
            .ok()
            .map(|v| v.parse().expect("SEED_RNG must be a valid u64"));

        Self {
            customer_count,
            order_count,
            rng_seed,
        }
    }

    pub fn options(&self) -> advantage_db::seed::SeedOptions {
        advantage_db::seed::SeedOptions {
            customer_count: self.customer_count,
            order_count: self.order_count,
        }
    }
}
