//! UCA-ARCHIVE: best-effort archival of submissions to object storage.
//!
//! A single write-only path: `PUT` of the `{email, use_case}` record to a
//! credential-based bucket, keyed by submission timestamp. Requests are
//! signed with AWS Signature V4 (see [`sigv4`]); an `endpoint` override in
//! the storage configuration switches to path-style addressing for
//! S3-compatible stores. No read path is exposed.

pub mod sigv4;

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use uca_core::{ArchiveStore, StorageConfig, UcaError};

pub struct S3ArchiveStore {
    http: reqwest::Client,
    config: StorageConfig,
}

impl S3ArchiveStore {
    pub fn new(config: StorageConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Request URL and the host value that gets signed.
    fn object_url(&self, key: &str) -> (String, String) {
        match &self.config.endpoint {
            // Path-style for S3-compatible stores
            Some(endpoint) => {
                let endpoint = endpoint.trim_end_matches('/');
                let host = endpoint
                    .trim_start_matches("http://")
                    .trim_start_matches("https://")
                    .to_string();
                (format!("{}/{}/{}", endpoint, self.config.bucket, key), host)
            }
            None => {
                let host = format!(
                    "{}.s3.{}.amazonaws.com",
                    self.config.bucket, self.config.region
                );
                (format!("https://{}/{}", host, key), host)
            }
        }
    }

    fn canonical_uri(&self, key: &str) -> String {
        match self.config.endpoint {
            Some(_) => sigv4::uri_encode_path(&format!("/{}/{}", self.config.bucket, key)),
            None => sigv4::uri_encode_path(&format!("/{}", key)),
        }
    }
}

#[async_trait]
impl ArchiveStore for S3ArchiveStore {
    async fn put(&self, key: &str, body: Vec<u8>, content_type: &str) -> Result<(), UcaError> {
        let now = Utc::now();
        let (url, host) = self.object_url(key);
        let payload_hash = sigv4::sha256_hex(&body);
        let amz_date = now.format("%Y%m%dT%H%M%SZ").to_string();

        let mut headers = BTreeMap::new();
        headers.insert("content-type".to_string(), content_type.to_string());
        headers.insert("host".to_string(), host);
        headers.insert("x-amz-content-sha256".to_string(), payload_hash.clone());
        headers.insert("x-amz-date".to_string(), amz_date.clone());

        let params = sigv4::SigningParams {
            access_key: &self.config.access_key,
            secret_key: &self.config.secret_key,
            region: &self.config.region,
            service: "s3",
            datetime: now,
        };
        let authorization = sigv4::authorization_header(
            &params,
            "PUT",
            &self.canonical_uri(key),
            &headers,
            &payload_hash,
        );

        tracing::debug!(%key, bucket = %self.config.bucket, "writing archive object");
        let response = self
            .http
            .put(&url)
            .header("authorization", authorization)
            .header("content-type", content_type)
            .header("x-amz-content-sha256", payload_hash)
            .header("x-amz-date", amz_date)
            .body(body)
            .send()
            .await
            .map_err(|e| UcaError::ArchivalFailure(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UcaError::ArchivalFailure(format!(
                "storage returned {}",
                status
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(endpoint: Option<&str>) -> StorageConfig {
        StorageConfig {
            access_key: "AKIDEXAMPLE".to_string(),
            secret_key: "secret".to_string(),
            region: "us-east-1".to_string(),
            bucket: "uca-archive".to_string(),
            endpoint: endpoint.map(str::to_string),
        }
    }

    #[test]
    fn test_virtual_host_addressing_by_default() {
        let store = S3ArchiveStore::new(config(None));
        let (url, host) = store.object_url("analysis-17.json");
        assert_eq!(host, "uca-archive.s3.us-east-1.amazonaws.com");
        assert_eq!(
            url,
            "https://uca-archive.s3.us-east-1.amazonaws.com/analysis-17.json"
        );
        assert_eq!(store.canonical_uri("analysis-17.json"), "/analysis-17.json");
    }

    #[test]
    fn test_path_style_addressing_with_endpoint_override() {
        let store = S3ArchiveStore::new(config(Some("http://127.0.0.1:9000")));
        let (url, host) = store.object_url("analysis-17.json");
        assert_eq!(host, "127.0.0.1:9000");
        assert_eq!(url, "http://127.0.0.1:9000/uca-archive/analysis-17.json");
        assert_eq!(
            store.canonical_uri("analysis-17.json"),
            "/uca-archive/analysis-17.json"
        );
    }
}
