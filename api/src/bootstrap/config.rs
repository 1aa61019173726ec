use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_port: u16,
    pub frontend_url: Option<String>,
    pub database_url: String,
    pub database_max_connections: u32,
    pub is_production: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_port: 3001,
            frontend_url: None,
            database_url: "sqlite://tasks.db".into(),
            database_max_connections: 5,
            is_production: false,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let api_port = lookup("API_PORT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.api_port);
        let frontend_url = lookup("FRONTEND_URL").and_then(|v| {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.trim_end_matches('/').to_string())
            }
        });
        let database_url = lookup("DATABASE_URL").unwrap_or(defaults.database_url);
        let database_max_connections = lookup("DATABASE_MAX_CONNECTIONS")
            .and_then(|s| s.parse().ok())
            .filter(|n: &u32| *n > 0)
            .unwrap_or(defaults.database_max_connections);
        let is_production = matches!(
            lookup("RUST_ENV").as_deref(),
            Some("production") | Some("prod")
        );

        // Production hardening: CORS must name a real origin
        if is_production
            && !frontend_url
                .as_deref()
                .map(|u| u.starts_with("http://") || u.starts_with("https://"))
                .unwrap_or(false)
        {
            anyhow::bail!(
                "FRONTEND_URL must be set to a full origin in production (e.g., https://app.example.com)"
            );
        }

        Ok(Self {
            api_port,
            frontend_url,
            database_url,
            database_max_connections,
            is_production,
        })
    }
}
