use quadwords_core::config::GenerationConfig;

/// HTTP server settings plus the generation tunables handed to the
/// background task.
///
/// | Env Var | Default | Description |
/// |---------|---------|-------------|
/// | `HOST` | `0.0.0.0` | Bind address |
/// | `PORT` | `3000` | Bind port |
/// | `CORS_ORIGINS` | `http://localhost:5173` | Comma-separated allowed origins |
/// | `REQUEST_TIMEOUT_SECS` | `30` | Per-request timeout |
///
/// Generation tunables are read by [`GenerationConfig::from_env`]; its docs
/// list those variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub request_timeout_secs: u64,
    pub generation: GenerationConfig,
}

impl ServerConfig {
    /// Reads the environment once at startup, panicking on values that are
    /// present but unparseable.
    pub fn from_env() -> Self {
        let cors_origins = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env_parse("PORT", 3000),
            cors_origins,
            request_timeout_secs: env_parse("REQUEST_TIMEOUT_SECS", 30),
            generation: GenerationConfig::from_env(),
        }
    }
}

fn env_parse<T>(name: &str, default: T) -> T
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|err| panic!("{name} must be a valid value: {err}")),
        Err(_) => default,
    }
}
