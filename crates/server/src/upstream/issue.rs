use reqwest::Method;
use shared_types::{
    AppError, AssignStaffRequest, CreateIssueRequest, Issue, IssuePage, IssueQuery, IssueStatus,
    UpdateIssueRequest, UpdateStatusRequest,
};

use super::{segment, ApiClient, Caller};

#[tracing::instrument(skip(api, caller))]
pub async fn list(api: &ApiClient, caller: &Caller, query: &IssueQuery) -> Result<IssuePage, AppError> {
    let builder = api
        .request(Method::GET, "/issues", caller)
        .query(&query.to_query_pairs());
    api.send(builder).await
}

pub async fn get(api: &ApiClient, caller: &Caller, id: &str) -> Result<Issue, AppError> {
    let builder = api.request(Method::GET, &format!("/issues/{}", segment(id)), caller);
    api.send(builder).await
}

pub async fn create(api: &ApiClient, caller: &Caller, body: &CreateIssueRequest) -> Result<Issue, AppError> {
    let builder = api.request(Method::POST, "/issues", caller).json(body);
    api.send(builder).await
}

pub async fn update(
    api: &ApiClient,
    caller: &Caller,
    id: &str,
    body: &UpdateIssueRequest,
) -> Result<Issue, AppError> {
    let builder = api
        .request(Method::PATCH, &format!("/issues/{}", segment(id)), caller)
        .json(body);
    api.send(builder).await
}

pub async fn delete(api: &ApiClient, caller: &Caller, id: &str) -> Result<(), AppError> {
    let builder = api.request(Method::DELETE, &format!("/issues/{}", segment(id)), caller);
    api.send_empty(builder).await
}

/// The remote API rejects a second upvote from the same account.
pub async fn upvote(api: &ApiClient, caller: &Caller, id: &str) -> Result<(), AppError> {
    let builder = api.request(Method::PATCH, &format!("/issues/{}/upvote", segment(id)), caller);
    api.send_empty(builder).await
}

pub async fn set_status(
    api: &ApiClient,
    caller: &Caller,
    id: &str,
    status: IssueStatus,
) -> Result<(), AppError> {
    let builder = api
        .request(Method::PATCH, &format!("/issues/{}/status", segment(id)), caller)
        .json(&UpdateStatusRequest { status });
    api.send_empty(builder).await
}

pub async fn assign(api: &ApiClient, caller: &Caller, id: &str, staff_id: &str) -> Result<(), AppError> {
    let builder = api
        .request(Method::PATCH, &format!("/issues/{}/assign", segment(id)), caller)
        .json(&AssignStaffRequest {
            staff_id: staff_id.to_string(),
        });
    api.send_empty(builder).await
}
