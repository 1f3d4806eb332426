pub mod client;
pub mod endpoint;
pub mod http;
pub mod retry;

// Re-export for convenience
pub use client::TranslationClient;
pub use endpoint::resolve_endpoint;
pub use retry::RetryPolicy;
