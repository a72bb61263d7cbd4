use dotenv::dotenv;
use std::net::IpAddr;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "staging" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(format!("unknown environment '{other}'")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_ca_file: Option<String>,
    pub app_name: String,
    pub app_version: String,
    pub environment: Environment,
    pub api_prefix: String,
    pub server_host: String,
    pub server_port: u16,
    pub log_config: String,
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
    pub trusted_proxy_ip: IpAddr,
    pub cors_origins: Vec<String>,
    pub ingestion_api_token: Option<String>,
}

impl Config {
    pub fn init() -> Config {
        dotenv().ok();
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Panics naming the variable on bad input.
    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let parsed = |key: &str, default: &str| -> String {
            read(key).unwrap_or_else(|| default.to_string())
        };

        let database_url = read("DATABASE_URL").expect("DATABASE_URL must be set");
        let environment = parsed("ENVIRONMENT", "development")
            .parse::<Environment>()
            .expect("Failed to parse ENVIRONMENT");
        let server_port = parsed("SERVER_PORT", "8080")
            .parse::<u16>()
            .expect("Failed to parse SERVER_PORT as u16");
        let rate_limit_per_second = parsed("RATE_LIMIT_PER_SECOND", "10")
            .parse::<u64>()
            .expect("Failed to parse RATE_LIMIT_PER_SECOND as u64");
        let rate_limit_burst = parsed("RATE_LIMIT_BURST", "5")
            .parse::<u32>()
            .expect("Failed to parse RATE_LIMIT_BURST as u32");
        let trusted_proxy_ip = IpAddr::from_str(&parsed("TRUSTED_PROXY_IP", "127.0.0.1"))
            .expect("Failed to parse TRUSTED_PROXY_IP as an IP address");

        let mut api_prefix = parsed("API_PREFIX", "/api/v1");
        if !api_prefix.starts_with('/') {
            api_prefix.insert(0, '/');
        }
        let api_prefix = api_prefix.trim_end_matches('/').to_string();

        let cors_origins = read("CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Config {
            database_url,
            database_ca_file: read("DATABASE_CA_FILE"),
            app_name: parsed("APP_NAME", "Rugby Atlas API"),
            app_version: parsed("APP_VERSION", env!("CARGO_PKG_VERSION")),
            environment,
            api_prefix,
            server_host: parsed("SERVER_HOST", "127.0.0.1"),
            server_port,
            log_config: parsed("LOG_CONFIG", "./log-config.yml"),
            rate_limit_per_second,
            rate_limit_burst,
            trusted_proxy_ip,
            cors_origins,
            ingestion_api_token: read("INGESTION_API_TOKEN"),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_database_url_is_set() {
        let config = Config::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/atlas")]));

        assert_eq!(config.app_name, "Rugby Atlas API");
        assert_eq!(config.api_prefix, "/api/v1");
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.rate_limit_per_second, 10);
        assert_eq!(config.rate_limit_burst, 5);
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.trusted_proxy_ip, IpAddr::from_str("127.0.0.1").unwrap());
        assert!(config.database_ca_file.is_none());
        assert!(config.cors_origins.is_empty());
        assert!(config.ingestion_api_token.is_none());
    }

    #[test]
    fn overrides_are_parsed() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://db/atlas"),
            ("ENVIRONMENT", "Production"),
            ("API_PREFIX", "api/v2/"),
            ("SERVER_PORT", "9000"),
            ("CORS_ORIGINS", "https://a.example, https://b.example,"),
            ("DATABASE_CA_FILE", "./certs/root.pem"),
            ("INGESTION_API_TOKEN", "  "),
        ]));

        assert!(config.is_production());
        assert_eq!(config.api_prefix, "/api/v2");
        assert_eq!(config.server_port, 9000);
        assert_eq!(config.cors_origins, vec!["https://a.example", "https://b.example"]);
        assert_eq!(config.database_ca_file.as_deref(), Some("./certs/root.pem"));
        // blank values count as unset
        assert!(config.ingestion_api_token.is_none());
    }

    #[test]
    #[should_panic(expected = "DATABASE_URL must be set")]
    fn missing_database_url_panics() {
        Config::from_lookup(lookup(&[]));
    }

    #[test]
    #[should_panic(expected = "SERVER_PORT")]
    fn bad_port_panics() {
        Config::from_lookup(lookup(&[("DATABASE_URL", "x"), ("SERVER_PORT", "eighty")]));
    }
}
