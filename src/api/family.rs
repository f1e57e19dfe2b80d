//! # Family API
//!
//! Endpoints for the family itself: fetching it with its members,
//! removing members, and renaming.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::api::client::{ApiClient, ApiError, NO_BODY};
use crate::session::Role;

/// A member of the family, as listed by the family endpoints
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMember {
    /// User identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Role within the family
    pub role: Role,
    /// When the member joined
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// The family with its join code and member roster
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyData {
    /// Family identifier
    pub id: String,
    /// Display name
    pub family_name: String,
    /// Join code shared with new members
    pub family_code: String,
    /// Member roster
    #[serde(default)]
    pub users: Vec<FamilyMember>,
}

/// Body of `PATCH /api/family/name`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RenameFamilyRequest<'a> {
    name: &'a str,
}

impl ApiClient {
    /// Fetch the signed-in user's family with its member roster
    pub async fn family(&self) -> Result<FamilyData, ApiError> {
        self.request(Method::GET, "/api/family", NO_BODY).await
    }

    /// List the family's members
    pub async fn family_members(&self) -> Result<Vec<FamilyMember>, ApiError> {
        self.request(Method::GET, "/api/family/members", NO_BODY)
            .await
    }

    /// Remove a member from the family (admin only)
    pub async fn remove_family_member(&self, member_id: &str) -> Result<String, ApiError> {
        self.request_ack(
            Method::DELETE,
            &format!("/api/family/members/{}", member_id),
            NO_BODY,
        )
        .await
    }

    /// Rename the family (admin only)
    pub async fn rename_family(&self, name: &str) -> Result<String, ApiError> {
        self.request_ack(
            Method::PATCH,
            "/api/family/name",
            Some(&RenameFamilyRequest { name }),
        )
        .await
    }
}
