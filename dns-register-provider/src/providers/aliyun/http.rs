//! 阿里云 HTTP 请求方法（RPC 风格，参数通过 query string 传递）

use chrono::Utc;
use serde::{Serialize, de::DeserializeOwned};

use crate::error::{ProviderError, Result};
use crate::http_client;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};
use crate::utils::log_sanitizer::truncate_for_log;

use super::{ALIYUN_DNS_VERSION, AliyunProvider, EMPTY_BODY_SHA256, serialize_to_query_string};

impl AliyunProvider {
    /// 执行阿里云 API 请求，单次发送，不重试
    pub(crate) async fn request<T: DeserializeOwned, B: Serialize>(
        &self,
        action: &str,
        params: &B,
        ctx: ErrorContext,
    ) -> Result<T> {
        let query_string = serialize_to_query_string(params)?;

        let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
        let nonce = uuid::Uuid::new_v4().to_string();

        let authorization = self.sign(action, &query_string, &timestamp, &nonce);

        let url = if query_string.is_empty() {
            format!("https://{}/", self.host)
        } else {
            format!("https://{}/?{query_string}", self.host)
        };

        let request = self
            .client
            .post(&url)
            .header("Host", &self.host)
            .header("x-acs-action", action)
            .header("x-acs-version", ALIYUN_DNS_VERSION)
            .header("x-acs-date", &timestamp)
            .header("x-acs-signature-nonce", &nonce)
            .header("x-acs-content-sha256", EMPTY_BODY_SHA256)
            .header("Authorization", authorization);

        let reply = http_client::send_once(request, action).await?;
        self.decode_response(reply.status.as_u16(), &reply.body, ctx)
    }

    /// 解析响应：先识别 `Code`/`Message` 错误体，再反序列化为目标类型
    pub(crate) fn decode_response<T: DeserializeOwned>(
        &self,
        status: u16,
        response_text: &str,
        ctx: ErrorContext,
    ) -> Result<T> {
        if status >= 400 {
            return match Self::extract_api_error(response_text) {
                Some(raw) => {
                    log::warn!("[aliyun] API error: {:?} - {}", raw.code, raw.message);
                    Err(self.map_error(raw, ctx))
                }
                None => Err(ProviderError::NetworkError {
                    detail: format!("HTTP {status}: {}", truncate_for_log(response_text)),
                }),
            };
        }

        let value: serde_json::Value = http_client::decode_json(response_text)?;

        // 部分错误以 HTTP 200 + Code 字段返回
        if let (Some(code), Some(message)) = (
            value.get("Code").and_then(|v| v.as_str()),
            value.get("Message").and_then(|v| v.as_str()),
        ) {
            log::warn!("[aliyun] API error: {code} - {message}");
            return Err(self.map_error(RawApiError::with_code(code, message), ctx));
        }

        serde_json::from_value(value).map_err(|e| ProviderError::ParseError {
            detail: e.to_string(),
        })
    }

    fn extract_api_error(response_text: &str) -> Option<RawApiError> {
        let value = serde_json::from_str::<serde_json::Value>(response_text).ok()?;
        let code = value.get("Code").and_then(|v| v.as_str())?;
        let message = value.get("Message").and_then(|v| v.as_str())?;
        Some(RawApiError::with_code(code, message))
    }
}
