use reqwest::Method;
use shared_types::{AdminStats, AppError, CitizenStats, StaffStats};

use super::{ApiClient, Caller};

pub async fn admin(api: &ApiClient, caller: &Caller) -> Result<AdminStats, AppError> {
    api.send(api.request(Method::GET, "/stats/admin", caller)).await
}

pub async fn citizen(api: &ApiClient, caller: &Caller) -> Result<CitizenStats, AppError> {
    api.send(api.request(Method::GET, "/stats/citizen", caller)).await
}

pub async fn staff(api: &ApiClient, caller: &Caller) -> Result<StaffStats, AppError> {
    api.send(api.request(Method::GET, "/stats/staff", caller)).await
}
