use futures::future::LocalBoxFuture;
use gloo_net::http::Request;
use thiserror::Error;

use super::{encode_form_body, validate, Reservation};

/// Shown to the visitor for every kind of submission failure.
pub const RETRY_MESSAGE: &str = "신청 중 오류가 발생했습니다. 다시 시도해주세요.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("reservation webhook is not configured")]
    NotConfigured,
    #[error("reservation did not pass validation")]
    Invalid,
    #[error("webhook responded with status {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Network(String),
}

/// Sends a form-encoded body and reports the response status.
pub trait Transport {
    fn post_form<'a>(&'a self, url: &'a str, body: String) -> LocalBoxFuture<'a, Result<u16, SubmitError>>;
}

/// Browser `fetch` through gloo-net.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    fn post_form<'a>(&'a self, url: &'a str, body: String) -> LocalBoxFuture<'a, Result<u16, SubmitError>> {
        Box::pin(async move {
            let response = Request::post(url)
                .header("Content-Type", "application/x-www-form-urlencoded")
                .body(body)
                .send()
                .await
                .map_err(|e| SubmitError::Network(e.to_string()))?;
            Ok(response.status())
        })
    }
}

/// Posts the reservation to `endpoint` once. Only 2xx counts as success; the
/// response body is ignored.
pub async fn submit_reservation(
    transport: &dyn Transport,
    endpoint: Option<&str>,
    reservation: &Reservation,
) -> Result<(), SubmitError> {
    let endpoint = endpoint.ok_or(SubmitError::NotConfigured)?;
    if !validate(reservation).is_empty() {
        return Err(SubmitError::Invalid);
    }

    let status = transport.post_form(endpoint, encode_form_body(reservation)).await?;
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SubmitError::Status(status))
    }
}
