use crate::domain::language::LanguageCode;
use crate::domain::messages::{msg, MessageKey};
use crate::domain::model::{ServiceVariant, TranslationRequest, TranslationResult};
use crate::domain::traits::Translator;
use crate::infrastructure::config::NetworkConfig;
use crate::infrastructure::network::endpoint::resolve_endpoint;
use crate::infrastructure::network::http::create_client;
use crate::infrastructure::network::retry::{RetryPolicy, RetryReason};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use url::Url;

// Request bodies for the two service variants
#[derive(Serialize, Debug)]
struct SimpleRequest<'a> {
    text: &'a str,
    source_lang: &'a str,
    target_lang: &'a str,
}

#[derive(Serialize, Debug)]
struct GenericRequest<'a> {
    text: [&'a str; 1],
    target_lang: &'a str,
}

#[derive(Serialize, Debug)]
#[serde(untagged)]
enum RequestBody<'a> {
    Simple(SimpleRequest<'a>),
    Generic(GenericRequest<'a>),
}

// Superset of both response shapes; `message` is only honoured for generic.
#[derive(Deserialize, Debug)]
struct ServiceResponse {
    code: Option<i64>,
    data: Option<String>,
    source_lang: Option<String>,
    target_lang: Option<String>,
    message: Option<String>,
}

/// Result of a single HTTP attempt.
#[derive(Debug)]
enum Attempt {
    Success(TranslationResult),
    Retryable(RetryReason),
    Permanent(String),
}

/// Resolved target plus the HTTP client built for it.
struct Target {
    url: Url,
    http: Client,
}

/// Transport bound to one raw endpoint string.
///
/// Replaced, never mutated, when the endpoint changes; calls already in
/// flight keep using the handle they cloned.
struct Transport {
    endpoint: String,
    target: Option<Target>,
}

pub struct TranslationClient {
    variant: ServiceVariant,
    network: NetworkConfig,
    http_proxy: Option<String>,
    policy: RetryPolicy,
    transport: RwLock<Option<Arc<Transport>>>,
}

impl TranslationClient {
    pub fn new(variant: ServiceVariant, network: NetworkConfig, http_proxy: Option<String>) -> Self {
        let policy = RetryPolicy::from(&network);
        Self {
            variant,
            network,
            http_proxy,
            policy,
            transport: RwLock::new(None),
        }
    }

    pub fn variant(&self) -> ServiceVariant {
        self.variant
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Point the client at `endpoint`, rebuilding the transport only when
    /// the string differs from the current one.
    ///
    /// Returns the resolved URL, or `None` if the endpoint is unusable.
    pub async fn reconfigure(&self, endpoint: &str) -> Option<Url> {
        let transport = self.transport_for(endpoint).await;
        transport.target.as_ref().map(|t| t.url.clone())
    }

    async fn transport_for(&self, endpoint: &str) -> Arc<Transport> {
        {
            let current = self.transport.read().await;
            if let Some(transport) = current.as_ref() {
                if transport.endpoint == endpoint {
                    return Arc::clone(transport);
                }
            }
        }

        let fresh = Arc::new(self.build_transport(endpoint));
        let mut current = self.transport.write().await;
        *current = Some(Arc::clone(&fresh));
        fresh
    }

    fn build_transport(&self, endpoint: &str) -> Transport {
        let target = match resolve_endpoint(endpoint, self.variant) {
            Some(url) => match create_client(&self.network, self.http_proxy.as_deref()) {
                Ok(http) => {
                    info!(endpoint = %url, variant = %self.variant, "Translation transport ready");
                    Some(Target { url, http })
                }
                Err(e) => {
                    warn!("Failed to build HTTP client: {}", e);
                    None
                }
            },
            None => {
                warn!(endpoint, variant = %self.variant, "Endpoint could not be resolved");
                None
            }
        };

        Transport {
            endpoint: endpoint.to_string(),
            target,
        }
    }

    /// Translate `text` into `target_language`. Never fails; errors are
    /// returned inline in the result.
    pub async fn translate_text(
        &self,
        target_language: LanguageCode,
        text: &str,
        endpoint: &str,
    ) -> TranslationResult {
        let transport = self.transport_for(endpoint).await;
        let Some(target) = transport.target.as_ref() else {
            return TranslationResult::failure(msg(MessageKey::InvalidEndpoint), target_language);
        };

        let body = self.request_body(text, target_language);
        let mut retry_count = 0u32;

        loop {
            match self.send_once(target, &body, target_language).await {
                Attempt::Success(result) => return result,
                Attempt::Permanent(message) => {
                    return TranslationResult::failure(message, target_language);
                }
                Attempt::Retryable(reason) => {
                    if !self.policy.can_retry(retry_count) {
                        warn!(retries = retry_count, ?reason, "Giving up on translation request");
                        return TranslationResult::failure(exhausted_message(&reason), target_language);
                    }

                    let delay = self.policy.delay_for(&reason, retry_count);
                    debug!(
                        retry = retry_count + 1,
                        delay_ms = delay.as_millis() as u64,
                        ?reason,
                        "Retrying translation request"
                    );
                    tokio::time::sleep(delay).await;
                    retry_count += 1;
                }
            }
        }
    }

    fn request_body<'a>(&self, text: &'a str, target_language: LanguageCode) -> RequestBody<'a> {
        let target_lang = target_language.as_str();
        match self.variant {
            ServiceVariant::Simple => RequestBody::Simple(SimpleRequest {
                text,
                source_lang: "auto",
                target_lang,
            }),
            ServiceVariant::Generic => RequestBody::Generic(GenericRequest {
                text: [text],
                target_lang,
            }),
        }
    }

    async fn send_once(
        &self,
        target: &Target,
        body: &RequestBody<'_>,
        target_language: LanguageCode,
    ) -> Attempt {
        let response = match target.http.post(target.url.clone()).json(body).send().await {
            Ok(response) => response,
            Err(e) => return Attempt::Retryable(RetryReason::Transport(e.to_string())),
        };

        let status = response.status();
        if status.is_success() {
            let bytes = match response.bytes().await {
                Ok(bytes) => bytes,
                Err(e) => return Attempt::Retryable(RetryReason::Transport(e.to_string())),
            };

            return match serde_json::from_slice::<ServiceResponse>(&bytes) {
                Ok(parsed) => self.interpret(parsed, target_language),
                Err(e) => {
                    warn!("Unreadable translation response: {}", e);
                    Attempt::Permanent(msg(MessageKey::TranslationFailed).to_string())
                }
            };
        }

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::NOT_FOUND
                if self.variant == ServiceVariant::Simple =>
            {
                Attempt::Permanent(msg(MessageKey::InvalidEndpoint).to_string())
            }
            StatusCode::TOO_MANY_REQUESTS => Attempt::Retryable(RetryReason::RateLimited),
            other => {
                warn!(status = %other, "Translation service returned an error status");
                Attempt::Permanent(msg(MessageKey::TranslationFailed).to_string())
            }
        }
    }

    fn interpret(&self, response: ServiceResponse, target_language: LanguageCode) -> Attempt {
        debug!(code = ?response.code, "Translation response received");

        if let Some(data) = non_blank(response.data) {
            let target_lang_code =
                non_blank(response.target_lang).unwrap_or_else(|| target_language.as_str().to_string());
            let detected = non_blank(response.source_lang)
                .unwrap_or_else(|| LanguageCode::Unknown.as_str().to_string());
            return Attempt::Success(TranslationResult::success(target_lang_code, detected, data));
        }

        if self.variant == ServiceVariant::Generic {
            if let Some(message) = non_blank(response.message) {
                return Attempt::Permanent(message);
            }
        }

        Attempt::Permanent(msg(MessageKey::TranslationFailed).to_string())
    }
}

#[async_trait]
impl Translator for TranslationClient {
    async fn translate(&self, request: &TranslationRequest) -> TranslationResult {
        self.translate_text(request.target_language, &request.text, &request.endpoint)
            .await
    }
}

fn exhausted_message(reason: &RetryReason) -> String {
    match reason {
        RetryReason::RateLimited => msg(MessageKey::TooManyRequests).to_string(),
        RetryReason::Transport(detail) => format!("Error: {}", detail),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
