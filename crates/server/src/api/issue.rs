use dioxus::prelude::*;
use shared_types::{CreateIssueRequest, Issue, IssuePage, IssueQuery, IssueStatus, UpdateIssueRequest};

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, ValidateRequest};

#[cfg(feature = "server")]
use crate::upstream::{self, get_client};

#[cfg(feature = "server")]
use super::session::*;

/// Browse issues with search, category, status and paging. Public.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_issues(query: IssueQuery) -> Result<IssuePage, ServerFnError> {
    use shared_types::ISSUES_PER_PAGE;

    let caller = current_caller();
    let query = IssueQuery {
        page: Some(query.page.unwrap_or(1).max(1)),
        limit: Some(query.limit.unwrap_or(ISSUES_PER_PAGE).clamp(1, 100)),
        ..query
    };

    upstream::issue::list(get_client(), &caller, &query)
        .await
        .map_err(|e| upstream_error(&caller, e))
}

/// Recently resolved issues for the home page. Public.
#[server]
pub async fn list_featured_issues() -> Result<Vec<Issue>, ServerFnError> {
    use shared_types::FEATURED_LIMIT;

    let caller = current_caller();
    let query = IssueQuery {
        status: Some(IssueStatus::Resolved),
        limit: Some(FEATURED_LIMIT),
        ..Default::default()
    };

    upstream::issue::list(get_client(), &caller, &query)
        .await
        .map(|page| page.issues)
        .map_err(|e| upstream_error(&caller, e))
}

/// Get a single issue. Requires a session.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_issue(id: String) -> Result<Issue, ServerFnError> {
    let caller = require_session()?;
    upstream::issue::get(get_client(), &caller, &id)
        .await
        .map_err(|e| upstream_error(&caller, e))
}

/// Report a new issue as the signed-in citizen.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn create_issue(body: CreateIssueRequest) -> Result<Issue, ServerFnError> {
    let caller = require_session()?;
    let body = trimmed(body);
    body.validate_request().map_err(|e| e.into_server_fn_error())?;

    let issue = upstream::issue::create(get_client(), &caller, &body)
        .await
        .map_err(|e| upstream_error(&caller, e))?;
    tracing::info!(issue_id = %issue.id, category = issue.category.as_str(), "Issue reported");
    Ok(issue)
}

/// Edit one's own pending issue.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn update_issue(id: String, body: UpdateIssueRequest) -> Result<Issue, ServerFnError> {
    let caller = require_session()?;
    let body = trimmed(body);
    body.validate_request().map_err(|e| e.into_server_fn_error())?;

    upstream::issue::update(get_client(), &caller, &id, &body)
        .await
        .map_err(|e| upstream_error(&caller, e))
}

/// Delete one's own pending issue.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn delete_issue(id: String) -> Result<(), ServerFnError> {
    let caller = require_session()?;
    upstream::issue::delete(get_client(), &caller, &id)
        .await
        .map_err(|e| upstream_error(&caller, e))?;
    tracing::info!(issue_id = %id, "Issue deleted");
    Ok(())
}

/// Upvote an issue. The remote API rejects repeat votes.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn upvote_issue(id: String) -> Result<(), ServerFnError> {
    let caller = require_session()?;
    upstream::issue::upvote(get_client(), &caller, &id)
        .await
        .map_err(|e| upstream_error(&caller, e))
}

/// Issues reported by the signed-in user.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_my_issues() -> Result<Vec<Issue>, ServerFnError> {
    let caller = require_session()?;
    let api = get_client();
    let me = upstream::user::me(api, &caller)
        .await
        .map_err(|e| upstream_error(&caller, e))?;

    let query = IssueQuery::authored_by(&me.email);
    upstream::issue::list(api, &caller, &query)
        .await
        .map(|page| page.issues)
        .map_err(|e| upstream_error(&caller, e))
}

/// Issues assigned to the signed-in staff member.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_assigned_issues() -> Result<Vec<Issue>, ServerFnError> {
    let caller = require_session()?;
    let api = get_client();
    let me = upstream::user::me(api, &caller)
        .await
        .map_err(|e| upstream_error(&caller, e))?;

    let query = IssueQuery::assigned_to(&me.email);
    upstream::issue::list(api, &caller, &query)
        .await
        .map(|page| page.issues)
        .map_err(|e| upstream_error(&caller, e))
}

/// Move an assigned issue forward. Staff may not set pending or rejected.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn update_issue_status(id: String, status: IssueStatus) -> Result<(), ServerFnError> {
    let caller = require_session()?;
    check_staff_status(status).map_err(|e| e.into_server_fn_error())?;

    upstream::issue::set_status(get_client(), &caller, &id, status)
        .await
        .map_err(|e| upstream_error(&caller, e))?;
    tracing::info!(issue_id = %id, status = status.as_str(), "Issue status updated");
    Ok(())
}

/// Every issue, for the admin table.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_all_issues() -> Result<Vec<Issue>, ServerFnError> {
    let caller = require_session()?;
    let query = IssueQuery::everything();
    upstream::issue::list(get_client(), &caller, &query)
        .await
        .map(|page| page.issues)
        .map_err(|e| upstream_error(&caller, e))
}

/// Assign an issue to a staff member. Admin only (enforced remotely).
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn assign_issue(id: String, staff_id: String) -> Result<(), ServerFnError> {
    use shared_types::AppError;

    let caller = require_session()?;
    if staff_id.trim().is_empty() {
        return Err(AppError::bad_request("Choose a staff member").into_server_fn_error());
    }

    upstream::issue::assign(get_client(), &caller, &id, staff_id.trim())
        .await
        .map_err(|e| upstream_error(&caller, e))?;
    tracing::info!(issue_id = %id, staff_id = %staff_id, "Issue assigned");
    Ok(())
}

/// Reject a pending issue. Admin only (enforced remotely).
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn reject_issue(id: String) -> Result<(), ServerFnError> {
    let caller = require_session()?;
    upstream::issue::set_status(get_client(), &caller, &id, IssueStatus::Rejected)
        .await
        .map_err(|e| upstream_error(&caller, e))?;
    tracing::info!(issue_id = %id, "Issue rejected");
    Ok(())
}

/// Staff may move an issue to in-progress, resolved or closed, never back
/// to pending and never to rejected.
#[cfg(feature = "server")]
pub fn check_staff_status(status: IssueStatus) -> Result<(), shared_types::AppError> {
    if IssueStatus::staff_options().contains(&status) {
        Ok(())
    } else {
        Err(shared_types::AppError::bad_request(format!(
            "Status cannot be changed to {}",
            status.label()
        )))
    }
}

#[cfg(feature = "server")]
fn trimmed(body: CreateIssueRequest) -> CreateIssueRequest {
    CreateIssueRequest {
        title: body.title.trim().to_string(),
        category: body.category,
        location: body.location.trim().to_string(),
        image: body.image.trim().to_string(),
        description: body.description.trim().to_string(),
    }
}
