//! # Session Management
//!
//! The authenticated identity state held by the client: the bearer
//! credential pair plus the signed-in user's profile.
//!
//! A session is all-or-nothing — both tokens present (authenticated) or
//! the whole session absent (anonymous), never a mix. The store persists
//! it as three independent keyed entries (`user`, `access_token`,
//! `refresh_token`) that are written and cleared together, so a session
//! survives process restarts.
//!
//! The HTTP client never reaches for ambient global state; it is handed
//! a [`SessionStore`] and that store is the single source of truth for
//! the credential attached to outbound requests.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::config::famtrack_dir;

/// File name of the persisted user profile entry
const USER_ENTRY: &str = "user.json";

/// File name of the persisted access token entry
const ACCESS_TOKEN_ENTRY: &str = "access_token";

/// File name of the persisted refresh token entry
const REFRESH_TOKEN_ENTRY: &str = "refresh_token";

/// Role of a user within their family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Family administrator: manages members, sends reminders
    Admin,
    /// Regular family member
    Member,
}

impl Role {
    /// Human-readable label used in terminal output
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Member => "MEMBER",
        }
    }
}

/// Profile of the signed-in user, as returned by the auth endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Server-assigned user identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Email address (login identity)
    pub email: String,
    /// Role within the family
    pub role: Role,
    /// Identifier of the family the user belongs to
    pub family_id: String,
    /// Join code of the family
    pub family_code: String,
    /// Family display name, when the server includes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
}

/// The authenticated identity state
///
/// Both tokens are non-optional by construction: a partially
/// authenticated session cannot be represented.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Short-lived token authorizing API calls
    pub access_token: String,
    /// Longer-lived token used solely to mint a new access token
    pub refresh_token: String,
    /// Profile of the signed-in user
    pub user: UserProfile,
}

/// Storage interface for the session
///
/// Injected into the HTTP client; the client reads the current session
/// before each dispatch, replaces the access token after a successful
/// refresh, and clears everything when the refresh protocol fails.
pub trait SessionStore: Send + Sync {
    /// Load the current session, or `None` when anonymous
    fn load(&self) -> Option<Session>;

    /// Persist a complete session, replacing any existing one
    fn store(&self, session: &Session) -> Result<()>;

    /// Replace only the access token, leaving the refresh token and
    /// profile untouched
    ///
    /// Fails when no session is stored: a lone access token would
    /// violate the all-or-nothing invariant.
    fn update_access_token(&self, access_token: &str) -> Result<()>;

    /// Destroy the session
    ///
    /// Clearing an already-empty store is a no-op, not an error.
    fn clear(&self) -> Result<()>;
}

/// Session store backed by files under the Famtrack config directory
///
/// Each entry is its own file so the layout matches the three keyed
/// entries the service's other clients persist.
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    /// Create a store rooted at the default config directory
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: famtrack_dir()?,
        })
    }

    /// Create a store rooted at an explicit directory
    ///
    /// Used by tests and by embedders that manage their own paths.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn entry_path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    fn read_entry(&self, name: &str) -> Option<String> {
        let contents = fs::read_to_string(self.entry_path(name)).ok()?;
        let trimmed = contents.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    fn remove_entry(&self, name: &str) -> Result<()> {
        let path = self.entry_path(name);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => {
                Err(e).with_context(|| format!("Failed to remove session entry: {}", path.display()))
            }
        }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Option<Session> {
        let access_token = self.read_entry(ACCESS_TOKEN_ENTRY)?;
        let refresh_token = self.read_entry(REFRESH_TOKEN_ENTRY)?;
        let user_json = self.read_entry(USER_ENTRY)?;
        let user: UserProfile = serde_json::from_str(&user_json).ok()?;

        Some(Session {
            access_token,
            refresh_token,
            user,
        })
    }

    fn store(&self, session: &Session) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create session directory: {}", self.dir.display()))?;

        let user_json =
            serde_json::to_string_pretty(&session.user).context("Failed to serialize profile")?;

        fs::write(self.entry_path(USER_ENTRY), user_json)
            .context("Failed to write user entry")?;
        fs::write(self.entry_path(ACCESS_TOKEN_ENTRY), &session.access_token)
            .context("Failed to write access token entry")?;
        fs::write(self.entry_path(REFRESH_TOKEN_ENTRY), &session.refresh_token)
            .context("Failed to write refresh token entry")?;

        Ok(())
    }

    fn update_access_token(&self, access_token: &str) -> Result<()> {
        if self.load().is_none() {
            bail!("No active session to update");
        }

        fs::write(self.entry_path(ACCESS_TOKEN_ENTRY), access_token)
            .context("Failed to write access token entry")?;

        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.remove_entry(ACCESS_TOKEN_ENTRY)?;
        self.remove_entry(REFRESH_TOKEN_ENTRY)?;
        self.remove_entry(USER_ENTRY)?;
        Ok(())
    }
}

/// In-memory session store
///
/// Used by tests and by embedders that don't want disk persistence.
#[derive(Default)]
pub struct MemorySessionStore {
    inner: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    /// Create an empty (anonymous) store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with a session
    pub fn with_session(session: Session) -> Self {
        Self {
            inner: Mutex::new(Some(session)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<Session> {
        self.inner.lock().expect("session lock poisoned").clone()
    }

    fn store(&self, session: &Session) -> Result<()> {
        *self.inner.lock().expect("session lock poisoned") = Some(session.clone());
        Ok(())
    }

    fn update_access_token(&self, access_token: &str) -> Result<()> {
        let mut guard = self.inner.lock().expect("session lock poisoned");
        match guard.as_mut() {
            Some(session) => {
                session.access_token = access_token.to_string();
                Ok(())
            }
            None => bail!("No active session to update"),
        }
    }

    fn clear(&self) -> Result<()> {
        *self.inner.lock().expect("session lock poisoned") = None;
        Ok(())
    }
}
