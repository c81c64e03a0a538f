/// Configuration for tracing initialization, derived from the loaded
/// settings by the composition root.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub level: String,
    pub json_format: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}
