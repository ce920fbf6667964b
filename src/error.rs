#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    /// No usable credential combination was supplied at construction time.
    #[error(
        "API key or AWS/GCP credentials are required to use the Anthropic API \
         (set api_key, or aws_access_key + aws_secret_key, or gcp_project_id + gcp_auth_token)"
    )]
    MissingCredentials,

    /// The required `model` parameter is missing or empty.
    #[error("required generation parameter `model` is missing or empty")]
    MissingModel,

    /// The supplied generation parameters are malformed or contain keys
    /// outside the supported set.
    #[error("invalid generation parameters: {0}")]
    InvalidParams(String),

    /// The model has no entry in the active price table.
    #[error("no pricing entry for model `{0}`")]
    UnknownModel(String),
}

impl AdapterError {
    /// True for failures detected at client construction, as opposed to
    /// per-request normalization or pricing failures.
    pub fn is_credential_error(&self) -> bool {
        matches!(self, AdapterError::MissingCredentials)
    }
}
