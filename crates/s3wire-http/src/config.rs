//! Codec configuration.
//!
//! Provides [`CodecConfig`], loaded from environment variables or built in code.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Default user-metadata header prefix.
pub const DEFAULT_METADATA_PREFIX: &str = "x-amz-meta-";

/// Default endpoint requests are addressed to.
pub const DEFAULT_ENDPOINT: &str = "https://s3.amazonaws.com";

/// Settings shared by request encoding and response decoding.
///
/// # Examples
///
/// ```
/// use s3wire_http::config::CodecConfig;
///
/// let config = CodecConfig::builder().strict_headers(true).build();
/// assert!(config.strict_headers);
/// assert_eq!(config.metadata_prefix, "x-amz-meta-");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct CodecConfig {
    /// Scheme and authority prepended to every encoded path.
    #[builder(default = String::from(DEFAULT_ENDPOINT), setter(into))]
    pub endpoint: String,

    /// Fail on header values that cannot be encoded or parsed instead of
    /// dropping them with a warning.
    #[builder(default = false)]
    pub strict_headers: bool,

    /// Header prefix carrying user metadata, matched case-insensitively.
    #[builder(default = String::from(DEFAULT_METADATA_PREFIX), setter(into))]
    pub metadata_prefix: String,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            endpoint: String::from(DEFAULT_ENDPOINT),
            strict_headers: false,
            metadata_prefix: String::from(DEFAULT_METADATA_PREFIX),
        }
    }
}

impl CodecConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads the following environment variables (falling back to defaults):
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `S3WIRE_ENDPOINT` | `https://s3.amazonaws.com` |
    /// | `S3WIRE_STRICT_HEADERS` | `false` |
    /// | `S3WIRE_METADATA_PREFIX` | `x-amz-meta-` |
    ///
    /// # Examples
    ///
    /// ```
    /// use s3wire_http::config::CodecConfig;
    ///
    /// let config = CodecConfig::from_env();
    /// assert!(!config.metadata_prefix.is_empty());
    /// ```
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("S3WIRE_ENDPOINT") {
            config.endpoint = v.trim_end_matches('/').to_owned();
        }
        if let Ok(v) = std::env::var("S3WIRE_STRICT_HEADERS") {
            config.strict_headers = parse_bool(&v);
        }
        if let Ok(v) = std::env::var("S3WIRE_METADATA_PREFIX") {
            if !v.is_empty() {
                config.metadata_prefix = v.to_ascii_lowercase();
            }
        }

        config
    }
}

/// Parse a string as a boolean, accepting `"1"` and `"true"` (case-insensitive).
fn parse_bool(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}
