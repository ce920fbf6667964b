//! Credential variant selection.
//!
//! The Anthropic API is reachable three ways: a direct API key, AWS
//! Bedrock IAM credentials, or a GCP Vertex project with an auth token.
//! Exactly one variant is resolved at client construction; no network
//! validation happens here.

use tracing::debug;

use crate::config::ClientConfig;
use crate::error::AdapterError;

/// One resolved, mutually exclusive authentication scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    ApiKey {
        api_key: String,
    },
    Aws {
        access_key: String,
        secret_key: String,
        session_token: Option<String>,
        region: Option<String>,
    },
    Vertex {
        project_id: String,
        region: Option<String>,
        auth_token: String,
    },
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl Credentials {
    /// Select exactly one credential variant from the raw config.
    ///
    /// Precedence: a non-empty `api_key` wins even when AWS or GCP fields
    /// are also populated; next a complete AWS key pair; next a GCP
    /// project id with an auth token. Anything less is an error.
    pub fn resolve(config: &ClientConfig) -> Result<Self, AdapterError> {
        if let Some(api_key) = non_empty(&config.api_key) {
            debug!("resolved credentials: direct API key");
            return Ok(Credentials::ApiKey {
                api_key: api_key.to_string(),
            });
        }

        if let (Some(access_key), Some(secret_key)) = (
            non_empty(&config.aws_access_key),
            non_empty(&config.aws_secret_key),
        ) {
            debug!("resolved credentials: AWS Bedrock");
            return Ok(Credentials::Aws {
                access_key: access_key.to_string(),
                secret_key: secret_key.to_string(),
                session_token: non_empty(&config.aws_session_token).map(str::to_string),
                region: non_empty(&config.aws_region).map(str::to_string),
            });
        }

        if let (Some(project_id), Some(auth_token)) = (
            non_empty(&config.gcp_project_id),
            non_empty(&config.gcp_auth_token),
        ) {
            debug!("resolved credentials: GCP Vertex");
            return Ok(Credentials::Vertex {
                project_id: project_id.to_string(),
                region: non_empty(&config.gcp_region).map(str::to_string),
                auth_token: auth_token.to_string(),
            });
        }

        Err(AdapterError::MissingCredentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_variant() {
        let creds = Credentials::resolve(&ClientConfig::with_api_key("dummy_api_key")).unwrap();
        assert_eq!(
            creds,
            Credentials::ApiKey {
                api_key: "dummy_api_key".to_string()
            }
        );
    }

    #[test]
    fn test_api_key_wins_over_other_variants() {
        let config = ClientConfig {
            api_key: Some("dummy_api_key".to_string()),
            aws_access_key: Some("dummy_access_key".to_string()),
            aws_secret_key: Some("dummy_secret_key".to_string()),
            gcp_project_id: Some("dummy_project_id".to_string()),
            gcp_auth_token: Some("dummy_auth_token".to_string()),
            ..ClientConfig::default()
        };
        assert!(matches!(
            Credentials::resolve(&config).unwrap(),
            Credentials::ApiKey { .. }
        ));
    }

    #[test]
    fn test_aws_variant_with_optional_passthrough() {
        let config = ClientConfig {
            aws_access_key: Some("dummy_access_key".to_string()),
            aws_secret_key: Some("dummy_secret_key".to_string()),
            aws_session_token: Some("dummy_session_token".to_string()),
            aws_region: Some("us-west-2".to_string()),
            ..ClientConfig::default()
        };
        let creds = Credentials::resolve(&config).unwrap();
        assert_eq!(
            creds,
            Credentials::Aws {
                access_key: "dummy_access_key".to_string(),
                secret_key: "dummy_secret_key".to_string(),
                session_token: Some("dummy_session_token".to_string()),
                region: Some("us-west-2".to_string()),
            }
        );
    }

    #[test]
    fn test_aws_incomplete_pair_is_rejected() {
        let config = ClientConfig {
            aws_access_key: Some("dummy_access_key".to_string()),
            ..ClientConfig::default()
        };
        assert!(matches!(
            Credentials::resolve(&config),
            Err(AdapterError::MissingCredentials)
        ));
    }

    #[test]
    fn test_vertex_variant() {
        let config = ClientConfig {
            gcp_project_id: Some("dummy_project_id".to_string()),
            gcp_region: Some("us-west-2".to_string()),
            gcp_auth_token: Some("dummy_auth_token".to_string()),
            ..ClientConfig::default()
        };
        let creds = Credentials::resolve(&config).unwrap();
        assert_eq!(
            creds,
            Credentials::Vertex {
                project_id: "dummy_project_id".to_string(),
                region: Some("us-west-2".to_string()),
                auth_token: "dummy_auth_token".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_config_is_rejected() {
        assert!(matches!(
            Credentials::resolve(&ClientConfig::default()),
            Err(AdapterError::MissingCredentials)
        ));
    }

    #[test]
    fn test_empty_strings_count_as_absent() {
        let config = ClientConfig {
            api_key: Some(String::new()),
            aws_access_key: Some(String::new()),
            aws_secret_key: Some("dummy_secret_key".to_string()),
            ..ClientConfig::default()
        };
        assert!(matches!(
            Credentials::resolve(&config),
            Err(AdapterError::MissingCredentials)
        ));
    }
}
