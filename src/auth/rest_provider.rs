//! REST implementation of [`IdentityProvider`].
//!
//! Talks to the hosted identity service. Endpoint shapes follow the
//! provider's account API: password endpoints return camelCase token
//! payloads while the token-mint endpoint returns snake_case — both quirks
//! are absorbed here at the serde boundary. Error bodies look like
//! `{"error":{"message":"..."}}` and the message is surfaced verbatim.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::AuthError;
use crate::traits::{
    AuthSession, FederatedChallenge, Headers, HttpClient, IdentityProvider, IssuedToken, Response,
};

#[derive(Debug, Serialize)]
struct PasswordBody<'a> {
    email: &'a str,
    password: &'a str,
    #[serde(rename = "returnSecureToken")]
    return_secure_token: bool,
}

#[derive(Debug, Deserialize)]
struct SessionPayload {
    #[serde(rename = "localId")]
    local_id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(rename = "idToken")]
    id_token: String,
    #[serde(rename = "refreshToken")]
    refresh_token: String,
}

impl SessionPayload {
    fn into_session(self) -> AuthSession {
        AuthSession {
            uid: self.local_id,
            email: self.email,
            id_token: self.id_token,
            refresh_token: self.refresh_token,
        }
    }
}

#[derive(Debug, Serialize)]
struct TokenBody<'a> {
    grant_type: &'a str,
    refresh_token: &'a str,
}

// The token endpoint alone speaks snake_case.
#[derive(Debug, Deserialize)]
struct TokenPayload {
    id_token: String,
    refresh_token: String,
}

#[derive(Debug, Deserialize)]
struct FederatedStartPayload {
    verification_url: String,
    session_id: String,
    #[serde(default = "default_poll_interval")]
    interval_secs: u64,
    #[serde(default = "default_challenge_ttl")]
    expires_in_secs: u64,
}

fn default_poll_interval() -> u64 {
    2
}

fn default_challenge_ttl() -> u64 {
    300
}

#[derive(Debug, Serialize)]
struct FederatedPollBody<'a> {
    session_id: &'a str,
}

#[derive(Debug, Serialize)]
struct RevokeBody<'a> {
    #[serde(rename = "refreshToken")]
    refresh_token: &'a str,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: Option<String>,
}

/// Identity provider client over the hosted REST API.
pub struct RestIdentityProvider {
    http: Arc<dyn HttpClient>,
    base_url: String,
    api_key: String,
}

impl RestIdentityProvider {
    pub fn new(http: Arc<dyn HttpClient>, config: &Config) -> Self {
        Self {
            http,
            base_url: config.identity_base.clone(),
            api_key: config.identity_api_key.clone(),
        }
    }

    fn headers(&self) -> Headers {
        let mut headers = Headers::new();
        if !self.api_key.is_empty() {
            headers.insert("x-identity-key".to_string(), self.api_key.clone());
        }
        headers
    }

    async fn post(&self, path: &str, body: String) -> Result<Response, AuthError> {
        let url = format!("{}/v1/{}", self.base_url, path);
        self.http
            .post(&url, &body, &self.headers())
            .await
            .map_err(|e| AuthError::Transport {
                message: e.to_string(),
            })
    }
}

/// Pull the provider's message out of an error response, verbatim.
fn provider_error(response: &Response) -> AuthError {
    let message = response
        .json::<ErrorEnvelope>()
        .ok()
        .and_then(|e| e.error)
        .and_then(|d| d.message)
        .unwrap_or_else(|| format!("Identity request failed with status {}", response.status));
    AuthError::Provider { message }
}

fn decode<T: serde::de::DeserializeOwned>(response: &Response) -> Result<T, AuthError> {
    if !response.is_success() {
        return Err(provider_error(response));
    }
    response.json().map_err(|e| AuthError::Decode {
        message: e.to_string(),
    })
}

#[async_trait]
impl IdentityProvider for RestIdentityProvider {
    async fn register(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        let body = serde_json::to_string(&PasswordBody {
            email,
            password,
            return_secure_token: true,
        })
        .map_err(|e| AuthError::Decode {
            message: e.to_string(),
        })?;
        let response = self.post("accounts:signUp", body).await?;
        decode::<SessionPayload>(&response).map(SessionPayload::into_session)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        let body = serde_json::to_string(&PasswordBody {
            email,
            password,
            return_secure_token: true,
        })
        .map_err(|e| AuthError::Decode {
            message: e.to_string(),
        })?;
        let response = self.post("accounts:signInWithPassword", body).await?;
        decode::<SessionPayload>(&response).map(SessionPayload::into_session)
    }

    async fn begin_federated(&self) -> Result<FederatedChallenge, AuthError> {
        let response = self.post("federated:start", "{}".to_string()).await?;
        let payload: FederatedStartPayload = decode(&response)?;
        Ok(FederatedChallenge {
            verification_url: payload.verification_url,
            session_id: payload.session_id,
            interval_secs: payload.interval_secs,
            expires_in_secs: payload.expires_in_secs,
        })
    }

    async fn poll_federated(
        &self,
        challenge: &FederatedChallenge,
    ) -> Result<Option<AuthSession>, AuthError> {
        let body = serde_json::to_string(&FederatedPollBody {
            session_id: &challenge.session_id,
        })
        .map_err(|e| AuthError::Decode {
            message: e.to_string(),
        })?;
        let response = self.post("federated:poll", body).await?;
        match response.status {
            202 => Ok(None),
            410 => Err(AuthError::FederatedExpired),
            403 => Err(AuthError::FederatedDenied),
            _ if response.is_success() => {
                decode::<SessionPayload>(&response).map(|p| Some(p.into_session()))
            }
            _ => Err(provider_error(&response)),
        }
    }

    async fn refresh_id_token(&self, session: &AuthSession) -> Result<IssuedToken, AuthError> {
        let body = serde_json::to_string(&TokenBody {
            grant_type: "refresh_token",
            refresh_token: &session.refresh_token,
        })
        .map_err(|e| AuthError::Decode {
            message: e.to_string(),
        })?;
        let response = self.post("token", body).await?;
        let payload: TokenPayload = decode(&response)?;
        Ok(IssuedToken {
            id_token: payload.id_token,
            refresh_token: payload.refresh_token,
        })
    }

    async fn revoke(&self, session: &AuthSession) -> Result<(), AuthError> {
        let body = serde_json::to_string(&RevokeBody {
            refresh_token: &session.refresh_token,
        })
        .map_err(|e| AuthError::Decode {
            message: e.to_string(),
        })?;
        let response = self.post("accounts:revoke", body).await?;
        if !response.is_success() {
            return Err(provider_error(&response));
        }
        Ok(())
    }
}
