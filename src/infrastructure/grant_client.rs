//! HTTP client for the index access service

use crate::domain::GrantResult;
use crate::error::{IndexEmailsError, Result};
use crate::infrastructure::Settings;
use reqwest::blocking::{Client, Response};
use serde::{Deserialize, Serialize};

/// Grants and revokes a user's access to a named index.
///
/// Both operations are fail-stop: errors propagate to the caller, nothing is retried.
pub trait AccessGrantClient {
    fn grant(&self, config_name: &str, email: &str) -> Result<GrantResult>;
    fn revoke(&self, config_name: &str, email: &str) -> Result<()>;
}

#[derive(Debug, Serialize)]
struct GrantRequest<'a> {
    email: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum GrantStatus {
    Granted,
    AlreadyGranted,
    Invited,
}

#[derive(Debug, Deserialize)]
struct GrantResponse {
    status: GrantStatus,
    #[serde(default)]
    invitation_url: Option<String>,
}

impl GrantResponse {
    /// `status` is the HTTP status the body came with, reported if the body is unusable
    fn into_result(self, status: u16) -> Result<GrantResult> {
        match self.status {
            GrantStatus::Granted => Ok(GrantResult::Granted),
            GrantStatus::AlreadyGranted => Ok(GrantResult::AlreadyGranted),
            GrantStatus::Invited => self
                .invitation_url
                .map(GrantResult::InvitationPending)
                .ok_or_else(|| IndexEmailsError::Api {
                    status,
                    body: "invitation without invitation_url".to_string(),
                }),
        }
    }
}

/// Extract a readable message from an error body, falling back to the raw text
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            json.get("message")
                .and_then(|v| v.as_str())
                .map(|s| s.to_string())
        })
        .unwrap_or_else(|| body.to_string())
}

/// `AccessGrantClient` speaking JSON over HTTP
pub struct HttpGrantClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpGrantClient {
    pub fn new(base_url: &str, api_key: Option<String>) -> Self {
        HttpGrantClient {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Build a client from loaded settings; fails if no API URL is configured
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self::new(
            settings.require_api_url()?,
            settings.api_key.clone(),
        ))
    }

    fn users_url(&self, config_name: &str) -> String {
        format!(
            "{}/1/indexes/{}/users",
            self.base_url,
            urlencoding::encode(config_name)
        )
    }

    fn authorize(
        &self,
        request: reqwest::blocking::RequestBuilder,
    ) -> reqwest::blocking::RequestBuilder {
        match &self.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }

    fn check_response(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().unwrap_or_default();
        Err(IndexEmailsError::Api {
            status: status.as_u16(),
            body: extract_error_message(&body),
        })
    }
}

impl AccessGrantClient for HttpGrantClient {
    fn grant(&self, config_name: &str, email: &str) -> Result<GrantResult> {
        let request = self
            .client
            .post(self.users_url(config_name))
            .json(&GrantRequest { email });
        let response = Self::check_response(self.authorize(request).send()?)?;
        let status = response.status().as_u16();
        let result = response.json::<GrantResponse>()?.into_result(status)?;

        tracing::info!(config = config_name, email, "grant: {}", result);
        Ok(result)
    }

    fn revoke(&self, config_name: &str, email: &str) -> Result<()> {
        let url = format!(
            "{}/{}",
            self.users_url(config_name),
            urlencoding::encode(email)
        );
        let request = self.client.delete(url);
        Self::check_response(self.authorize(request).send()?)?;

        tracing::info!(config = config_name, email, "revoked access");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    #[test]
    fn test_grant_granted() {
        let mut server = Server::new();
        let mock = server
            .mock("POST", "/1/indexes/acme/users")
            .match_header("authorization", "Bearer secret")
            .match_body(Matcher::Json(serde_json::json!({"email": "a@x.com"})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"status": "granted"}"#)
            .create();

        let client = HttpGrantClient::new(&server.url(), Some("secret".to_string()));
        let result = client.grant("acme", "a@x.com").unwrap();

        assert_eq!(result, GrantResult::Granted);
        mock.assert();
    }

    #[test]
    fn test_grant_already_granted() {
        let mut server = Server::new();
        let _mock = server
            .mock("POST", "/1/indexes/acme/users")
            .with_status(200)
            .with_body(r#"{"status": "already_granted"}"#)
            .create();

        let client = HttpGrantClient::new(&server.url(), None);
        assert_eq!(
            client.grant("acme", "a@x.com").unwrap(),
            GrantResult::AlreadyGranted
        );
    }

    #[test]
    fn test_grant_invitation() {
        let mut server = Server::new();
        let _mock = server
            .mock("POST", "/1/indexes/acme/users")
            .with_status(201)
            .with_body(r#"{"status": "invited", "invitation_url": "https://x/invite/1"}"#)
            .create();

        let client = HttpGrantClient::new(&format!("{}/", server.url()), None);
        assert_eq!(
            client.grant("acme", "new@x.com").unwrap(),
            GrantResult::InvitationPending("https://x/invite/1".to_string())
        );
    }

    #[test]
    fn test_invitation_without_url_is_api_error() {
        let mut server = Server::new();
        let _mock = server
            .mock("POST", "/1/indexes/acme/users")
            .with_status(200)
            .with_body(r#"{"status": "invited"}"#)
            .create();

        let client = HttpGrantClient::new(&server.url(), None);
        match client.grant("acme", "a@x.com") {
            Err(e @ IndexEmailsError::Api { status: 200, .. }) => assert_eq!(e.exit_code(), 4),
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_grant_error_status() {
        let mut server = Server::new();
        let _mock = server
            .mock("POST", "/1/indexes/acme/users")
            .with_status(403)
            .with_body(r#"{"message": "Invalid API key"}"#)
            .create();

        let client = HttpGrantClient::new(&server.url(), None);
        match client.grant("acme", "a@x.com") {
            Err(IndexEmailsError::Api { status, body }) => {
                assert_eq!(status, 403);
                assert_eq!(body, "Invalid API key");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_revoke_encodes_email() {
        let mut server = Server::new();
        let mock = server
            .mock("DELETE", "/1/indexes/acme/users/a%2Bb%40x.com")
            .with_status(204)
            .create();

        let client = HttpGrantClient::new(&server.url(), None);
        client.revoke("acme", "a+b@x.com").unwrap();
        mock.assert();
    }

    #[test]
    fn test_revoke_error_plain_body() {
        let mut server = Server::new();
        let _mock = server
            .mock("DELETE", "/1/indexes/acme/users/a%40x.com")
            .with_status(500)
            .with_body("internal")
            .create();

        let client = HttpGrantClient::new(&server.url(), None);
        match client.revoke("acme", "a@x.com") {
            Err(IndexEmailsError::Api { status, body }) => {
                assert_eq!(status, 500);
                assert_eq!(body, "internal");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_settings_requires_url() {
        let settings = Settings::default();
        assert!(HttpGrantClient::from_settings(&settings).is_err());
    }
}
