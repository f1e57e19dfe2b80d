//! # API Client
//!
//! Typed client for the Famtrack backend. The core lives in
//! [`client`]: credential attachment, the single-retry refresh
//! protocol, and envelope decoding. The remaining modules group the
//! endpoints by domain as `impl ApiClient` blocks.
//!
//! - [`auth`] - Login, registration (OTP flow), logout, code recovery
//! - [`incomes`] / [`expenses`] - Ledger CRUD and statistics
//! - [`dashboard`] - Totals, breakdowns, monthly trends
//! - [`family`] - Family and member management
//! - [`reminders`] - Admin expense reminders

pub mod auth;
pub mod client;
pub mod dashboard;
pub mod entries;
pub mod envelope;
pub mod expenses;
pub mod family;
pub mod incomes;
pub mod reminders;

pub use auth::{AuthData, LoginRequest, RegisterRequest};
pub use client::{ApiClient, ApiError};
pub use dashboard::{DashboardData, MemberStat, MonthlyTrend};
pub use entries::{Entry, EntryDraft, EntryStats, EXPENSE_CATEGORIES, INCOME_CATEGORIES};
pub use envelope::Envelope;
pub use family::{FamilyData, FamilyMember};
