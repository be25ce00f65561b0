use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

use crate::{Category, IssueStatus, PaymentPurpose};

/// Request DTO for reporting an issue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct CreateIssueRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, max = 120, message = "Title is required"))
    )]
    pub title: String,
    pub category: Category,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Location is required"))
    )]
    pub location: String,
    #[cfg_attr(
        feature = "validation",
        validate(url(message = "Image must be a valid URL"))
    )]
    pub image: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Description is required"))
    )]
    pub description: String,
}

/// Request DTO for editing a pending issue. Same fields as a new report.
pub type UpdateIssueRequest = CreateIssueRequest;

/// Request DTO for a staff status change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateStatusRequest {
    pub status: IssueStatus,
}

/// Request DTO for assigning an issue to a staff member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssignStaffRequest {
    #[serde(rename = "staffId")]
    pub staff_id: String,
}

/// Request DTO for blocking or unblocking a citizen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlockUserRequest {
    #[serde(rename = "isBlocked")]
    pub is_blocked: bool,
}

/// Request DTO for creating a staff account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct CreateStaffRequest {
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
}

/// Request DTO for editing one's own profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct UpdateProfileRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Name is required"))
    )]
    pub name: String,
    #[serde(rename = "photoURL", default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(
        feature = "validation",
        validate(url(message = "Photo must be a valid URL"))
    )]
    pub photo_url: Option<String>,
}

/// Body of `POST /payments`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreatePaymentRequest {
    pub amount: i64,
    pub purpose: PaymentPurpose,
    #[serde(rename = "issueId", default, skip_serializing_if = "Option::is_none")]
    pub issue_id: Option<String>,
    #[serde(rename = "paymentMethodId")]
    pub payment_method_id: String,
}

impl CreatePaymentRequest {
    pub fn boost(issue_id: impl Into<String>) -> Self {
        Self {
            amount: crate::BOOST_PRICE,
            purpose: PaymentPurpose::BoostIssue,
            issue_id: Some(issue_id.into()),
            payment_method_id: crate::BOOST_PAYMENT_METHOD.to_string(),
        }
    }

    pub fn subscription() -> Self {
        Self {
            amount: crate::SUBSCRIPTION_PRICE,
            purpose: PaymentPurpose::Subscription,
            issue_id: None,
            payment_method_id: crate::SUBSCRIPTION_PAYMENT_METHOD.to_string(),
        }
    }
}
