//! 阿里云错误映射

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::AliyunProvider;

/// 阿里云错误码映射
/// 参考: <https://api.aliyun.com/document/Alidns/2015-01-09/errorCode>
impl ProviderErrorMapper for AliyunProvider {
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.code.as_deref() {
            // 认证
            Some(
                "InvalidAccessKeyId.NotFound"
                | "InvalidAccessKeyId.Inactive"
                | "SignatureDoesNotMatch"
                | "IncompleteSignature",
            ) => ProviderError::InvalidCredentials {
                raw_message: Some(raw.message),
            },

            // AddDomainRecord 撞上同名同值记录
            Some("DomainRecordDuplicate" | "DomainRecordConflict") => ProviderError::RecordExists {
                record_name: context.record_name.unwrap_or_default(),
                raw_message: Some(raw.message),
            },

            // 域名不在当前账号下
            Some(
                "InvalidDomainName.NoExist"
                | "DomainNotFound"
                | "IncorrectDomainUser"
                | "DomainRecordNotBelongToUser",
            ) => ProviderError::DomainNotFound {
                domain: context.domain.unwrap_or_default(),
                raw_message: Some(raw.message),
            },

            Some(
                "QuotaExceeded.ARecord"
                | "QuotaExceeded.Record"
                | "QuotaExceeded.FreeDnsRecord"
                | "QuotaExceeded.SubDomain"
                | "QuotaExceeded.TTL",
            ) => ProviderError::QuotaExceeded {
                raw_message: Some(raw.message),
            },

            Some("Throttling" | "Throttling.User" | "Throttling.Api") => {
                ProviderError::RateLimited {
                    retry_after: None,
                    raw_message: Some(raw.message),
                }
            }

            Some(
                "DomainRecordLocked"
                | "DomainExpiredDNSForbidden"
                | "Forbidden.DomainExpired"
                | "RecordForbidden.BlackHole",
            ) => ProviderError::DomainLocked {
                domain: context.domain.unwrap_or_default(),
                raw_message: Some(raw.message),
            },

            Some(
                "Forbidden"
                | "Forbidden.RAM"
                | "Forbidden.RiskControl"
                | "OperationDomain.NoPermission"
                | "IllegalUser",
            ) => ProviderError::PermissionDenied {
                raw_message: Some(raw.message),
            },

            // ============ 参数无效 ============
            Some(code) => match invalid_param_name(code) {
                Some(param) => ProviderError::InvalidParameter {
                    param: param.to_string(),
                    detail: raw.message,
                },
                None => raw.into(),
            },

            None => raw.into(),
        }
    }
}

/// 参数类错误码对应的请求字段
fn invalid_param_name(code: &str) -> Option<&'static str> {
    let param = match code {
        "InvalidRR.TypeEmpty" | "SubDomainInvalid.Type" => "type",
        "InvalidRR.AValue" | "InvalidRR.MXValue" | "InvalidRR.NSValue" | "InvalidRR.CNAMEValue"
        | "InvalidRR.TXTValue" | "SubDomainInvalid.Value" => "value",
        "InvalidRR.RrEmpty" | "InvalidRR.Format" | "InvalidRR.Length" | "SubDomainInvalid.RR" => {
            "rr"
        }
        "SubDomainInvalid.TTL" => "ttl",
        "SubDomainInvalid.Line" | "UnsupportedLine" => "line",
        "SubDomainInvalid.Priority" => "priority",
        "InvalidDomainName.Format"
        | "InvalidDomainName.Suffix"
        | "InvalidDomainName.Length"
        | "DomainEmpty"
        | "SubDomainInvalid.SubDomain" => "domain",
        _ => return None,
    };
    Some(param)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> AliyunProvider {
        match AliyunProvider::new("id".to_string(), "secret".to_string()) {
            Ok(p) => p,
            Err(e) => panic!("provider construction failed: {e}"),
        }
    }

    fn map(code: &str, ctx: ErrorContext) -> ProviderError {
        provider().map_error(RawApiError::with_code(code, "msg"), ctx)
    }

    #[test]
    fn duplicate_record_maps_to_record_exists() {
        let err = map(
            "DomainRecordDuplicate",
            ErrorContext::for_record("example.com", "www"),
        );
        assert!(
            matches!(&err, ProviderError::RecordExists { record_name, .. } if record_name == "www"),
            "got {err:?}"
        );
    }

    #[test]
    fn unknown_domain_carries_context() {
        let err = map(
            "InvalidDomainName.NoExist",
            ErrorContext::for_domain("example.com"),
        );
        assert!(
            matches!(&err, ProviderError::DomainNotFound { domain, .. } if domain == "example.com"),
            "got {err:?}"
        );
        assert!(err.is_expected());
    }

    #[test]
    fn signature_mismatch_is_invalid_credentials() {
        let err = map("SignatureDoesNotMatch", ErrorContext::default());
        assert!(matches!(err, ProviderError::InvalidCredentials { .. }));
    }

    #[test]
    fn throttling_is_rate_limited() {
        let err = map("Throttling.User", ErrorContext::default());
        assert!(matches!(err, ProviderError::RateLimited { .. }));
        assert!(!err.is_expected());
    }

    #[test]
    fn parameter_codes_name_the_field() {
        let cases = [
            ("InvalidRR.AValue", "value"),
            ("SubDomainInvalid.TTL", "ttl"),
            ("SubDomainInvalid.Priority", "priority"),
            ("InvalidRR.Format", "rr"),
            ("InvalidDomainName.Format", "domain"),
        ];
        for (code, expected) in cases {
            let err = map(code, ErrorContext::default());
            assert!(
                matches!(&err, ProviderError::InvalidParameter { param, .. } if param == expected),
                "{code} mapped to {err:?}"
            );
        }
    }

    #[test]
    fn unmapped_code_falls_back_to_unknown() {
        let err = map("Something.New", ErrorContext::default());
        assert!(
            matches!(&err, ProviderError::Unknown { raw_code: Some(c), .. } if c == "Something.New"),
            "got {err:?}"
        );
    }

    #[test]
    fn missing_code_falls_back_to_unknown() {
        let err = provider().map_error(
            RawApiError {
                code: None,
                message: "opaque".to_string(),
            },
            ErrorContext::default(),
        );
        assert_eq!(err.to_string(), "opaque");
        assert!(matches!(err, ProviderError::Unknown { raw_code: None, .. }));
    }
}
