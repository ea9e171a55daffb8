use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    pub geocoder_base_url: String,
    pub person_api_base_url: String,
    pub map_embed_base_url: String,
    pub user_agent: String,
    pub http_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8787,
            geocoder_base_url: "https://nominatim.openstreetmap.org".to_string(),
            person_api_base_url: "https://fakerapi.it".to_string(),
            map_embed_base_url: "https://www.google.com/maps".to_string(),
            user_agent: format!("address-generator/{}", env!("CARGO_PKG_VERSION")),
            http_timeout_secs: 30,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let config = Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| defaults.port.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            geocoder_base_url: base_url_from_env("GEOCODER_BASE_URL", defaults.geocoder_base_url)?,
            person_api_base_url: base_url_from_env(
                "PERSON_API_BASE_URL",
                defaults.person_api_base_url,
            )?,
            map_embed_base_url: base_url_from_env(
                "MAP_EMBED_BASE_URL",
                defaults.map_embed_base_url,
            )?,
            user_agent: std::env::var("USER_AGENT")
                .unwrap_or(defaults.user_agent)
                .trim()
                .to_string(),
            http_timeout_secs: std::env::var("HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|_| defaults.http_timeout_secs.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("HTTP_TIMEOUT_SECS must be a positive integer"))
                .and_then(|secs: u64| {
                    if secs == 0 {
                        anyhow::bail!("HTTP_TIMEOUT_SECS must be at least 1");
                    }
                    Ok(secs)
                })?,
        };

        if config.user_agent.is_empty() {
            anyhow::bail!("USER_AGENT cannot be empty");
        }

        tracing::info!("Configuration loaded successfully");
        tracing::debug!("Geocoder Base URL: {}", config.geocoder_base_url);
        tracing::debug!("Person API Base URL: {}", config.person_api_base_url);
        tracing::debug!("User-Agent: {}", config.user_agent);
        tracing::debug!("Server Port: {}", config.port);

        Ok(config)
    }
}

/// Reads an optional base URL, keeping the default when unset. Trailing
/// slashes are stripped so paths can be appended with `format!`.
fn base_url_from_env(key: &str, default: String) -> anyhow::Result<String> {
    let raw = std::env::var(key).unwrap_or(default);
    let url = raw.trim();
    if url.is_empty() {
        anyhow::bail!("{} cannot be empty", key);
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        anyhow::bail!("{} must start with http:// or https://", key);
    }
    Ok(url.trim_end_matches('/').to_string())
}
