//! Server-side gateway to the payment backend.

use anyhow::anyhow;

use crate::deposit::Deposit;
use crate::ApiError;
use crate::GENERIC_FETCH_ERROR;

const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:3001";

fn backend_url() -> String {
    std::env::var("DEPOSITS_BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string())
}

/// Fetches the account's successful deposits from the payment backend.
///
/// Every failure mode collapses into a single user-facing message: the
/// backend's own `error` string when its body carries one, the generic
/// fallback otherwise. Session handling is the caller's concern.
pub async fn fetch_successful_deposits() -> Result<Vec<Deposit>, ApiError> {
    let url = format!("{}/api/successful-deposits", backend_url());

    let response = match reqwest::Client::new().get(&url).send().await {
        Ok(r) => r,
        Err(e) => {
            dioxus_logger::tracing::warn!("deposit fetch transport error: {e}");
            return Err(anyhow!(GENERIC_FETCH_ERROR));
        }
    };

    if response.status().is_success() {
        let deposits = match response.json::<Vec<Deposit>>().await {
            Ok(list) => list,
            Err(e) => {
                dioxus_logger::tracing::warn!("deposit fetch decode error: {e}");
                return Err(anyhow!(GENERIC_FETCH_ERROR));
            }
        };
        Ok(deposits)
    } else {
        let status = response.status();
        let body = response.text().await.ok();
        let message = error_message(body.as_deref());
        dioxus_logger::tracing::warn!("deposit fetch failed: {status}: {message}");
        Err(anyhow!(message))
    }
}

/// Mines a non-2xx body for the backend's `{"error": "..."}` string.
fn error_message(body: Option<&str>) -> String {
    body.and_then(|text| serde_json::from_str::<serde_json::Value>(text).ok())
        .and_then(|value| {
            value
                .get("error")
                .and_then(|e| e.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| GENERIC_FETCH_ERROR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_server_supplied_error_message() {
        let body = r#"{ "error": "Session expired" }"#;
        assert_eq!(error_message(Some(body)), "Session expired");
    }

    #[test]
    fn falls_back_when_body_is_missing() {
        assert_eq!(error_message(None), GENERIC_FETCH_ERROR);
    }

    #[test]
    fn falls_back_when_body_is_not_json() {
        assert_eq!(error_message(Some("<html>502</html>")), GENERIC_FETCH_ERROR);
    }

    #[test]
    fn falls_back_when_error_field_is_absent_or_not_a_string() {
        assert_eq!(error_message(Some(r#"{"detail":"x"}"#)), GENERIC_FETCH_ERROR);
        assert_eq!(error_message(Some(r#"{"error":42}"#)), GENERIC_FETCH_ERROR);
    }
}
