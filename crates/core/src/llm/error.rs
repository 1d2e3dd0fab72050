use std::fmt;

/// Gateway failure with enough context to debug a misbehaving provider:
/// which stage broke and the raw payload if we got one.
#[derive(Debug, Clone)]
pub struct GatewayError {
    pub stage: &'static str,
    pub detail: String,
    pub raw_output: Option<String>,
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gateway error (stage={}): {}", self.stage, self.detail)
    }
}

impl std::error::Error for GatewayError {}
