//! 阿里云 ACS3-HMAC-SHA256 签名

use sha2::{Digest, Sha256};

use crate::providers::common::hmac_sha256;

use super::{ALIYUN_DNS_VERSION, AliyunProvider, EMPTY_BODY_SHA256};

const SIGNED_HEADERS: &str =
    "host;x-acs-action;x-acs-content-sha256;x-acs-date;x-acs-signature-nonce;x-acs-version";

impl AliyunProvider {
    /// 生成 ACS3-HMAC-SHA256 签名
    /// 参考: <https://www.alibabacloud.com/help/zh/sdk/product-overview/v3-request-structure-and-signature>
    pub(crate) fn sign(
        &self,
        action: &str,
        query_string: &str,
        timestamp: &str,
        nonce: &str,
    ) -> String {
        let host = &self.host;

        // 1. 规范化请求头 (body 为空)
        let canonical_headers = format!(
            "host:{host}\nx-acs-action:{action}\nx-acs-content-sha256:{EMPTY_BODY_SHA256}\nx-acs-date:{timestamp}\nx-acs-signature-nonce:{nonce}\nx-acs-version:{ALIYUN_DNS_VERSION}\n"
        );

        // 2. 规范化请求 (RPC 风格: 参数在 query string 中)
        let canonical_request = format!(
            "POST\n/\n{query_string}\n{canonical_headers}\n{SIGNED_HEADERS}\n{EMPTY_BODY_SHA256}"
        );

        log::trace!("CanonicalRequest:\n{canonical_request}");

        // 3. 待签名字符串
        let hashed_canonical_request = hex::encode(Sha256::digest(canonical_request.as_bytes()));
        let string_to_sign = format!("ACS3-HMAC-SHA256\n{hashed_canonical_request}");

        // 4. 签名
        let signature = hex::encode(hmac_sha256(
            self.access_key_secret.as_bytes(),
            string_to_sign.as_bytes(),
        ));

        format!(
            "ACS3-HMAC-SHA256 Credential={},SignedHeaders={SIGNED_HEADERS},Signature={signature}",
            self.access_key_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::super::AliyunProvider;

    fn make_provider(key_id: &str, key_secret: &str) -> AliyunProvider {
        match AliyunProvider::new(key_id.to_string(), key_secret.to_string()) {
            Ok(provider) => provider,
            Err(e) => panic!("provider construction failed: {e}"),
        }
    }

    fn extract_signature(auth: &str) -> &str {
        auth.split("Signature=").nth(1).unwrap_or_default()
    }

    #[test]
    fn sign_output_format() {
        let provider = make_provider("test-key-id", "test-key-secret");
        let result = provider.sign(
            "DescribeSubDomainRecords",
            "",
            "2024-01-01T00:00:00Z",
            "nonce-1",
        );

        assert!(result.starts_with("ACS3-HMAC-SHA256 "), "got: {result}");
        assert!(result.contains("Credential=test-key-id,"), "got: {result}");
        assert!(result.contains("SignedHeaders="), "got: {result}");
        assert!(result.contains("Signature="), "got: {result}");
    }

    #[test]
    fn sign_deterministic() {
        let provider = make_provider("key-id", "key-secret");
        let qs = "PageNumber=1&PageSize=20&SubDomain=www.example.com";
        let a = provider.sign("DescribeSubDomainRecords", qs, "2024-01-01T00:00:00Z", "n");
        let b = provider.sign("DescribeSubDomainRecords", qs, "2024-01-01T00:00:00Z", "n");
        assert_eq!(a, b);
    }

    #[test]
    fn sign_depends_on_action_and_query() {
        let provider = make_provider("key-id", "key-secret");
        let base = provider.sign("AddDomainRecord", "RR=www", "2024-01-01T00:00:00Z", "n");
        let other_action =
            provider.sign("DescribeSubDomainRecords", "RR=www", "2024-01-01T00:00:00Z", "n");
        let other_query = provider.sign("AddDomainRecord", "RR=api", "2024-01-01T00:00:00Z", "n");

        assert_ne!(extract_signature(&base), extract_signature(&other_action));
        assert_ne!(extract_signature(&base), extract_signature(&other_query));
    }

    #[test]
    fn sign_depends_on_region_host() {
        let hangzhou = make_provider("key-id", "key-secret");
        let shenzhen_res = AliyunProvider::builder("key-id".to_string(), "key-secret".to_string())
            .region("cn-shenzhen")
            .build();
        assert!(shenzhen_res.is_ok());
        let Ok(shenzhen) = shenzhen_res else {
            return;
        };

        let a = hangzhou.sign("AddDomainRecord", "", "2024-01-01T00:00:00Z", "n");
        let b = shenzhen.sign("AddDomainRecord", "", "2024-01-01T00:00:00Z", "n");
        assert_ne!(extract_signature(&a), extract_signature(&b));
    }

    #[test]
    fn sign_snapshot() {
        let provider = make_provider("LTAI5tTestKeyId", "TestSecretKey123456");
        let result = provider.sign(
            "DescribeDomainRecords",
            "DomainName=example.com",
            "2024-01-15T08:00:00Z",
            "test-nonce-12345",
        );

        let signature = extract_signature(&result);
        assert_eq!(signature.len(), 64, "SHA256 HMAC should be 64 hex chars");
        assert!(signature.chars().all(|c| c.is_ascii_hexdigit()));

        let expected = "ACS3-HMAC-SHA256 \
             Credential=LTAI5tTestKeyId,\
             SignedHeaders=host;x-acs-action;x-acs-content-sha256;\
             x-acs-date;x-acs-signature-nonce;x-acs-version,\
             Signature=9c4173ede0946854e402679d086862a853ada5d1b83c34216ede75a499d50afd";
        assert_eq!(result, expected, "snapshot regression: full output changed");
    }
}
