//! This crate contains all shared fullstack server functions.

pub mod deposit;
#[cfg(not(target_arch = "wasm32"))]
mod upstream;

use dioxus::prelude::*;

use deposit::Deposit;

pub type ApiError = anyhow::Error;

/// Shown when the backend gives us nothing better.
pub const GENERIC_FETCH_ERROR: &str = "Ошибка при загрузке депозитов";

/// Retrieves the account's completed deposits in backend order.
///
/// The server side proxies the payment backend; the client transport sends
/// same-origin credentials with the request.
#[get("/api/successful-deposits")]
pub async fn successful_deposits() -> Result<Vec<Deposit>, ApiError> {
    upstream::fetch_successful_deposits().await
}
