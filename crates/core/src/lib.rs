pub mod domain;
pub mod filter;
pub mod llm;
pub mod recommend;

pub mod config {
    use anyhow::Context;

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub gateway_api_key: Option<String>,
        pub gateway_base_url: Option<String>,
        pub gateway_model: Option<String>,
        pub sentry_dsn: Option<String>,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            Ok(Self {
                gateway_api_key: std::env::var("GATEWAY_API_KEY").ok(),
                gateway_base_url: std::env::var("GATEWAY_BASE_URL").ok(),
                gateway_model: std::env::var("GATEWAY_MODEL").ok(),
                sentry_dsn: std::env::var("SENTRY_DSN").ok(),
            })
        }

        pub fn require_gateway_api_key(&self) -> anyhow::Result<&str> {
            self.gateway_api_key
                .as_deref()
                .context("GATEWAY_API_KEY is required")
        }
    }
}
