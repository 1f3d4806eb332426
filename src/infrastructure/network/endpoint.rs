// Endpoint normalization
use crate::domain::model::ServiceVariant;
use url::Url;

/// Local endpoint used when the simple variant is left unconfigured.
pub const DEFAULT_SIMPLE_ENDPOINT: &str = "http://127.0.0.1:1188/translate";

/// Turn a user-supplied endpoint into a request target.
///
/// Returns `None` when nothing usable can be derived; callers must treat
/// that as an unconfigured client.
pub fn resolve_endpoint(raw: &str, variant: ServiceVariant) -> Option<Url> {
    let trimmed = raw.trim();
    let candidate = if trimmed.is_empty() {
        match variant {
            ServiceVariant::Simple => DEFAULT_SIMPLE_ENDPOINT,
            ServiceVariant::Generic => return None,
        }
    } else {
        trimmed
    };

    let mut url = Url::parse(candidate).ok()?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return None;
    }

    // Users often paste only the host for generic servers
    if variant == ServiceVariant::Generic && url.path() == "/" {
        url.set_path("translate");
    }

    Some(url)
}
