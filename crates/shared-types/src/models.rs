use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Price of boosting an issue to high priority.
pub const BOOST_PRICE: i64 = 100;
/// Price of the one-off premium subscription.
pub const SUBSCRIPTION_PRICE: i64 = 1000;
pub const CURRENCY: &str = "tk";

/// Payment method ids accepted by the remote API in place of a card widget.
pub const BOOST_PAYMENT_METHOD: &str = "mock_pm";
pub const SUBSCRIPTION_PAYMENT_METHOD: &str = "mock_pm_sub";

/// Portal role. Decides which dashboard area a user may enter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Staff,
    Admin,
    #[default]
    #[serde(other)]
    Citizen,
}

impl Role {
    /// Unknown values default to Citizen.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "staff" => Role::Staff,
            "admin" => Role::Admin,
            _ => Role::Citizen,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Citizen => "citizen",
            Role::Staff => "staff",
            Role::Admin => "admin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Citizen => "Citizen",
            Role::Staff => "Staff",
            Role::Admin => "Admin",
        }
    }

    /// Dashboard path segment of the landing page for this role.
    pub fn home_segment(&self) -> &'static str {
        match self {
            Role::Citizen => "citizen-home",
            Role::Staff => "staff-home",
            Role::Admin => "admin-home",
        }
    }
}

/// Citizen subscription state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Premium,
    #[default]
    #[serde(other)]
    Free,
}

impl SubscriptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Free => "free",
            SubscriptionStatus::Premium => "premium",
        }
    }

    pub fn is_premium(&self) -> bool {
        matches!(self, SubscriptionStatus::Premium)
    }
}

/// A portal account as returned by `/users` and `/users/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub email: String,
    #[serde(rename = "photoURL", default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(rename = "isBlocked", default)]
    pub is_blocked: bool,
    #[serde(rename = "subscriptionStatus", default)]
    pub subscription_status: SubscriptionStatus,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl AuthUser {
    /// Name to show in headers and tables, falling back to the email.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }

    /// First letter of the display name, for avatar fallbacks.
    pub fn initial(&self) -> String {
        self.display_name()
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default()
    }
}

/// Embedded reference to a user inside an issue or payment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PersonRef {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "photoURL", default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

/// What a payment was made for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentPurpose {
    BoostIssue,
    Subscription,
    #[serde(other)]
    Other,
}

impl PaymentPurpose {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentPurpose::BoostIssue => "Issue boost",
            PaymentPurpose::Subscription => "Subscription",
            PaymentPurpose::Other => "Other",
        }
    }
}

/// A recorded payment, as listed on the admin payments page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Payment {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub user: PersonRef,
    /// Recorded amounts may be fractional.
    pub amount: f64,
    pub purpose: PaymentPurpose,
    #[serde(rename = "transactionId", default)]
    pub transaction_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(rename = "issueId", default, skip_serializing_if = "Option::is_none")]
    pub issue_id: Option<String>,
}

/// Login request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Password is required"))
    )]
    pub password: String,
}

/// Register request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct RegisterRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Name is required"))
    )]
    pub name: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 6, message = "Password must be at least 6 characters"))
    )]
    pub password: String,
    #[serde(rename = "photoURL", default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(
        feature = "validation",
        validate(url(message = "Photo must be a valid URL"))
    )]
    pub photo_url: Option<String>,
}

/// Token and profile returned by the remote API on login or registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionResponse {
    pub token: String,
    pub user: AuthUser,
}
