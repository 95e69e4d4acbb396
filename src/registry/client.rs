//! npm registry client

use reqwest::Url;
use serde_json::Value;
use tracing::warn;

use crate::registry::error::FetchError;
use crate::registry::source::MetadataSource;
use crate::registry::types::PackageRecord;

/// Default base URL for the npm registry
pub const DEFAULT_BASE_URL: &str = "https://registry.npmjs.org";

/// `MetadataSource` implementation for the npm registry API.
///
/// Issues a single GET per (name, tag) pair against
/// `<base-url>/<encoded-name>/<tag>` and never retries.
pub struct NpmClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl NpmClient {
    /// Creates a new NpmClient with a custom base URL and optional
    /// bearer token
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("pkgspy")
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.to_string(),
            token,
        }
    }

    /// Encode package name as a single URL path segment
    /// (handles scoped packages)
    fn encode_package_name(package_name: &str) -> String {
        if package_name.starts_with('@') {
            // Scoped package: @scope/name -> @scope%2Fname
            package_name.replace('/', "%2F")
        } else {
            package_name.to_string()
        }
    }
}

impl Default for NpmClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, None)
    }
}

#[async_trait::async_trait]
impl MetadataSource for NpmClient {
    async fn lookup(&self, name: &str, tag: &str) -> Result<PackageRecord, FetchError> {
        let raw_url = format!(
            "{}/{}/{}",
            self.base_url,
            Self::encode_package_name(name),
            tag
        );
        let url = Url::parse(&raw_url).map_err(|_| FetchError::InvalidRequest(raw_url))?;

        let mut request = self.client.get(url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        // Connection failures and non-2xx statuses both surface as
        // transport errors; there is no retry at this layer.
        let response = request.send().await?.error_for_status()?;
        let body = response.text().await?;

        let manifest: Value = serde_json::from_str(&body).map_err(|e| {
            warn!("Failed to parse registry response for {}: {}", name, e);
            FetchError::Parse(e.to_string())
        })?;
        if !manifest.is_object() {
            return Err(FetchError::Parse(format!(
                "expected a JSON object for {name}"
            )));
        }

        let version = manifest
            .get("version")
            .and_then(Value::as_str)
            .ok_or_else(|| FetchError::MissingVersion(name.to_string()))?;

        // npm also allows a plain-string author; only the structured form
        // carries a name we can show, anything else renders as empty.
        let author = manifest
            .get("author")
            .and_then(|a| a.get("name"))
            .and_then(Value::as_str)
            .unwrap_or_default();

        Ok(PackageRecord {
            name: name.to_string(),
            version: version.to_string(),
            author: author.to_string(),
        })
    }
}
