use std::env;

pub const ANY_ORIGIN: &str = "*";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: String,
    pub allowed_origins: Vec<String>,
    pub rng_seed: Option<u64>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: env::var("WORKBOOK_BIND").unwrap_or_else(|_| "127.0.0.1:8000".to_string()),
            allowed_origins: env::var("WORKBOOK_ALLOWED_ORIGINS")
                .map(|value| parse_origins(&value))
                .unwrap_or_else(|_| vec!["https://easyenough.tistory.com".to_string()]),
            rng_seed: env::var("WORKBOOK_RNG_SEED")
                .ok()
                .and_then(|v| v.parse().ok()),
        }
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == ANY_ORIGIN)
    }
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| origin.to_string())
        .collect()
}
