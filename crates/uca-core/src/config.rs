//! Configuration: loaded once at process start, immutable thereafter,
//! injected into the client and writer constructors.
use crate::error::UcaError;

/// Environment variable carrying the analysis endpoint base URL
pub const ENV_ANALYSIS_ENDPOINT: &str = "UCA_ANALYSIS_ENDPOINT";
pub const ENV_STORAGE_ACCESS_KEY: &str = "UCA_STORAGE_ACCESS_KEY";
pub const ENV_STORAGE_SECRET_KEY: &str = "UCA_STORAGE_SECRET_KEY";
pub const ENV_STORAGE_REGION: &str = "UCA_STORAGE_REGION";
pub const ENV_STORAGE_BUCKET: &str = "UCA_STORAGE_BUCKET";
/// Optional override for S3-compatible stores (path-style addressing)
pub const ENV_STORAGE_ENDPOINT: &str = "UCA_STORAGE_ENDPOINT";

#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Base URL of the external classification service
    pub analysis_endpoint: String,
    /// Absent when the storage variables are incomplete; archival is then
    /// disabled rather than failing the primary path
    pub storage: Option<StorageConfig>,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub access_key: String,
    pub secret_key: String,
    pub region: String,
    pub bucket: String,
    pub endpoint: Option<String>,
}

impl AnalyzerConfig {
    /// Read the configuration surface from the environment.
    ///
    /// A missing analysis endpoint is a hard error; incomplete storage
    /// credentials only disable the archival writer, with a warning.
    pub fn from_env() -> Result<Self, UcaError> {
        let analysis_endpoint = std::env::var(ENV_ANALYSIS_ENDPOINT).map_err(|_| {
            UcaError::ConfigError(format!("{} is not set", ENV_ANALYSIS_ENDPOINT))
        })?;

        let storage = StorageConfig::from_env();
        if storage.is_none() {
            tracing::warn!("storage configuration incomplete, archival disabled");
        }

        Ok(Self {
            analysis_endpoint,
            storage,
        })
    }
}

impl StorageConfig {
    /// All four required variables or nothing.
    pub fn from_env() -> Option<Self> {
        let access_key = std::env::var(ENV_STORAGE_ACCESS_KEY).ok()?;
        let secret_key = std::env::var(ENV_STORAGE_SECRET_KEY).ok()?;
        let region = std::env::var(ENV_STORAGE_REGION).ok()?;
        let bucket = std::env::var(ENV_STORAGE_BUCKET).ok()?;
        Some(Self {
            access_key,
            secret_key,
            region,
            bucket,
            endpoint: std::env::var(ENV_STORAGE_ENDPOINT).ok(),
        })
    }
}
