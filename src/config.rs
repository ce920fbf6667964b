//! Constructor inputs for the adapter.
//!
//! Credential material is passed in explicitly; reading the process
//! environment happens only through [`ClientConfig::from_env`], which is
//! meant for the outermost composition point (a CLI or service bootstrap),
//! never inside the adapter itself.

use std::env;

use dotenvy::dotenv;

use crate::constants::{
    ENV_API_KEY, ENV_AWS_ACCESS_KEY, ENV_AWS_REGION, ENV_AWS_SECRET_KEY, ENV_AWS_SESSION_TOKEN,
    ENV_GCP_AUTH_TOKEN, ENV_GCP_PROJECT_ID, ENV_GCP_REGION,
};

/// Raw, all-optional credential inputs. Empty strings count as absent;
/// which variant wins is decided by [`crate::credentials::Credentials::resolve`].
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    pub api_key: Option<String>,
    pub aws_access_key: Option<String>,
    pub aws_secret_key: Option<String>,
    pub aws_session_token: Option<String>,
    pub aws_region: Option<String>,
    pub gcp_project_id: Option<String>,
    pub gcp_region: Option<String>,
    pub gcp_auth_token: Option<String>,
}

impl ClientConfig {
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Populate the config from the process environment (and a `.env` file
    /// when present). Composition-point helper only.
    pub fn from_env() -> Self {
        dotenv().ok();

        let var = |name: &str| env::var(name).ok().filter(|v| !v.is_empty());

        Self {
            api_key: var(ENV_API_KEY),
            aws_access_key: var(ENV_AWS_ACCESS_KEY),
            aws_secret_key: var(ENV_AWS_SECRET_KEY),
            aws_session_token: var(ENV_AWS_SESSION_TOKEN),
            aws_region: var(ENV_AWS_REGION),
            gcp_project_id: var(ENV_GCP_PROJECT_ID),
            gcp_region: var(ENV_GCP_REGION),
            gcp_auth_token: var(ENV_GCP_AUTH_TOKEN),
        }
    }
}
