/// Anthropic API URL for the messages endpoint
pub const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";

/// Anthropic API version header value
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Default max output tokens when the caller leaves `max_tokens` unset
pub const DEFAULT_MAX_TOKENS: u32 = 4096;

/// Default sampling temperature when the caller leaves `temperature` unset
pub const DEFAULT_TEMPERATURE: f64 = 1.0;

/// Environment variable holding a direct Anthropic API key
pub const ENV_API_KEY: &str = "ANTHROPIC_API_KEY";

/// Environment variables for the AWS (Bedrock) credential variant
pub const ENV_AWS_ACCESS_KEY: &str = "AWS_ACCESS_KEY";
pub const ENV_AWS_SECRET_KEY: &str = "AWS_SECRET_KEY";
pub const ENV_AWS_SESSION_TOKEN: &str = "AWS_SESSION_TOKEN";
pub const ENV_AWS_REGION: &str = "AWS_REGION";

/// Environment variables for the GCP (Vertex) credential variant
pub const ENV_GCP_PROJECT_ID: &str = "GCP_PROJECT_ID";
pub const ENV_GCP_REGION: &str = "GCP_REGION";
pub const ENV_GCP_AUTH_TOKEN: &str = "GCP_AUTH_TOKEN";

/// Models covered by the built-in price table
pub static MODELS: &[&str] = &[
    "claude-3-5-sonnet-20240620",
    "claude-3-opus-20240229",
    "claude-3-sonnet-20240229",
    "claude-3-haiku-20240307",
    "claude-2.1",
    "claude-2.0",
    "claude-instant-1.2",
];
