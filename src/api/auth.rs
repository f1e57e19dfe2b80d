//! # Authentication API
//!
//! This module contains the API endpoints and types for the account
//! lifecycle: login, the three-step OTP registration flow, logout, and
//! family-code recovery. Token refresh is not here — it lives inside
//! the client core, because it is part of the dispatch protocol rather
//! than something callers invoke.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::api::client::{ApiClient, ApiError, NO_BODY};
use crate::session::{Session, UserProfile};

/// Body of `POST /api/auth/login`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Join code of the family to sign into
    pub family_code: String,
    /// Email address
    pub email: String,
    /// Account password
    pub password: String,
}

/// Body of `POST /api/auth/register`
///
/// Exactly one of `family_name` (create a family) or `family_code`
/// (join an existing one) should be set; the server rejects the rest.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Display name
    pub name: String,
    /// Email address (must have passed OTP verification)
    pub email: String,
    /// Account password
    pub password: String,
    /// Name for a newly created family
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    /// Join code of an existing family
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_code: Option<String>,
}

/// Body of `POST /api/auth/send-otp`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SendOtpRequest<'a> {
    email: &'a str,
}

/// Body of `POST /api/auth/verify-otp`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VerifyOtpRequest<'a> {
    email: &'a str,
    otp: &'a str,
}

/// Body of `POST /api/auth/forgot-family-code`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ForgotFamilyCodeRequest<'a> {
    email: &'a str,
}

/// Body of `POST /api/auth/logout`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LogoutRequest<'a> {
    refresh_token: &'a str,
}

/// Payload returned by login and register
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthData {
    /// Profile of the signed-in user
    pub user: UserProfile,
    /// Bearer credential for API calls
    pub access_token: String,
    /// Token used solely to mint new access tokens
    pub refresh_token: String,
    /// Join code of a newly created family, when registering one
    #[serde(default)]
    pub family_code: Option<String>,
}

impl AuthData {
    /// Convert the payload into a [`Session`] ready for the store
    pub fn into_session(self) -> Session {
        Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            user: self.user,
        }
    }
}

impl ApiClient {
    /// Sign into a family account
    ///
    /// # Arguments
    ///
    /// * `request` - Family code, email, and password
    ///
    /// # Returns
    ///
    /// * `Ok(AuthData)` - Tokens and profile for the new session
    /// * `Err(ApiError)` - Rejected credentials or transport failure
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthData, ApiError> {
        self.request(Method::POST, "/api/auth/login", Some(request))
            .await
    }

    /// Register a new account, creating or joining a family
    ///
    /// The email must have been verified with
    /// [`send_otp`](ApiClient::send_otp) and
    /// [`verify_otp`](ApiClient::verify_otp) first.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthData, ApiError> {
        self.request(Method::POST, "/api/auth/register", Some(request))
            .await
    }

    /// Request a one-time verification code for an email address
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - Acknowledgment message from the server
    pub async fn send_otp(&self, email: &str) -> Result<String, ApiError> {
        self.request_ack(
            Method::POST,
            "/api/auth/send-otp",
            Some(&SendOtpRequest { email }),
        )
        .await
    }

    /// Verify a one-time code previously sent to an email address
    pub async fn verify_otp(&self, email: &str, otp: &str) -> Result<String, ApiError> {
        self.request_ack(
            Method::POST,
            "/api/auth/verify-otp",
            Some(&VerifyOtpRequest { email, otp }),
        )
        .await
    }

    /// Email the family join code to a registered address
    pub async fn forgot_family_code(&self, email: &str) -> Result<String, ApiError> {
        self.request_ack(
            Method::POST,
            "/api/auth/forgot-family-code",
            Some(&ForgotFamilyCodeRequest { email }),
        )
        .await
    }

    /// Revoke a refresh token on the server
    ///
    /// Best-effort: callers clear the local session even when this
    /// fails, matching the logout behavior of the other clients.
    pub async fn logout(&self, refresh_token: &str) -> Result<String, ApiError> {
        self.request_ack(
            Method::POST,
            "/api/auth/logout",
            Some(&LogoutRequest { refresh_token }),
        )
        .await
    }

    /// Probe whether the current session is usable
    ///
    /// A lightweight authenticated call; `Ok(false)` means the request
    /// went through the full refresh protocol and still came back
    /// unauthorized.
    pub async fn validate_session(&self) -> Result<bool, ApiError> {
        match self
            .request::<(), serde_json::Value>(Method::GET, "/api/family", NO_BODY)
            .await
        {
            Ok(_) => Ok(true),
            Err(err) if err.is_auth_error() => Ok(false),
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Role;

    #[test]
    fn test_login_request_wire_format() {
        let request = LoginRequest {
            family_code: "FAM123".to_string(),
            email: "ada@example.com".to_string(),
            password: "hunter2".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains(r#""familyCode":"FAM123""#));
        assert!(json.contains(r#""email":"ada@example.com""#));
        assert!(json.contains(r#""password":"hunter2""#));
    }

    #[test]
    fn test_register_request_omits_unset_family_fields() {
        let request = RegisterRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "hunter2".to_string(),
            family_name: Some("Lovelace".to_string()),
            family_code: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains(r#""familyName":"Lovelace""#));
        assert!(!json.contains("familyCode"));
    }

    #[test]
    fn test_verify_otp_request_wire_format() {
        let request = VerifyOtpRequest {
            email: "ada@example.com",
            otp: "482913",
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"email":"ada@example.com","otp":"482913"}"#);
    }

    #[test]
    fn test_logout_request_wire_format() {
        let request = LogoutRequest {
            refresh_token: "valid-r",
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"refreshToken":"valid-r"}"#);
    }

    #[test]
    fn test_auth_data_deserialization() {
        let json = r#"{
            "user": {
                "id": "u-1",
                "name": "Ada",
                "email": "ada@example.com",
                "role": "ADMIN",
                "familyId": "f-1",
                "familyCode": "FAM123"
            },
            "accessToken": "access-a",
            "refreshToken": "refresh-r"
        }"#;
        let data: AuthData = serde_json::from_str(json).unwrap();
        assert_eq!(data.access_token, "access-a");
        assert_eq!(data.refresh_token, "refresh-r");
        assert_eq!(data.user.role, Role::Admin);
        assert!(data.family_code.is_none());
    }

    #[test]
    fn test_auth_data_into_session() {
        let json = r#"{
            "user": {
                "id": "u-1",
                "name": "Ada",
                "email": "ada@example.com",
                "role": "MEMBER",
                "familyId": "f-1",
                "familyCode": "FAM123"
            },
            "accessToken": "access-a",
            "refreshToken": "refresh-r",
            "familyCode": "FAM999"
        }"#;
        let data: AuthData = serde_json::from_str(json).unwrap();
        let session = data.into_session();
        assert_eq!(session.access_token, "access-a");
        assert_eq!(session.refresh_token, "refresh-r");
        assert_eq!(session.user.email, "ada@example.com");
    }
}
