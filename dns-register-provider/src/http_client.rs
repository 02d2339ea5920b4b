//! 单次 HTTP 发送
//!
//! 签名和 URL 由调用方准备好，这里只负责发送、归类传输层错误、读取响应体。

use reqwest::{RequestBuilder, StatusCode, header::RETRY_AFTER};
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::utils::log_sanitizer::truncate_for_log;

/// Status and body of a response that made it past transport classification.
#[derive(Debug)]
pub(crate) struct HttpReply {
    pub status: StatusCode,
    pub body: String,
}

/// Sends `request` once.
///
/// Timeouts become [`ProviderError::Timeout`], HTTP 429 becomes
/// [`ProviderError::RateLimited`], connection failures and 502/503/504 become
/// [`ProviderError::NetworkError`]. Any other status is handed back to the
/// caller together with the body.
pub(crate) async fn send_once(request: RequestBuilder, action: &str) -> Result<HttpReply> {
    log::debug!("[aliyun] POST {action}");

    let response = request.send().await.map_err(|e| {
        if e.is_timeout() {
            ProviderError::Timeout {
                detail: e.to_string(),
            }
        } else {
            ProviderError::NetworkError {
                detail: e.to_string(),
            }
        }
    })?;

    let status = response.status();
    log::debug!("[aliyun] {action} -> HTTP {}", status.as_u16());

    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok());
        let body = response.text().await.unwrap_or_default();
        log::warn!("[aliyun] {action} throttled, retry_after={retry_after:?}");
        return Err(ProviderError::RateLimited {
            retry_after,
            raw_message: Some(truncate_for_log(&body).into_owned()),
        });
    }

    if matches!(status.as_u16(), 502..=504) {
        let body = response.text().await.unwrap_or_default();
        return Err(ProviderError::NetworkError {
            detail: format!("HTTP {}: {}", status.as_u16(), truncate_for_log(&body)),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| ProviderError::NetworkError {
            detail: format!("failed to read response body: {e}"),
        })?;
    log::debug!("[aliyun] {action} body: {}", truncate_for_log(&body));

    Ok(HttpReply { status, body })
}

/// Body -> `T`, logging a truncated copy of anything that does not parse.
pub(crate) fn decode_json<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| {
        log::error!(
            "[aliyun] unparseable response ({e}): {}",
            truncate_for_log(body)
        );
        ProviderError::ParseError {
            detail: e.to_string(),
        }
    })
}
