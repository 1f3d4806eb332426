// User-facing strings shown inline in translation results.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    InvalidEndpoint,
    TooManyRequests,
    TranslationFailed,
    HistoryEmpty,
    HistoryCleared,
}

pub fn msg(key: MessageKey) -> &'static str {
    match key {
        MessageKey::InvalidEndpoint => "invalid endpoint",
        MessageKey::TooManyRequests => "too many requests",
        MessageKey::TranslationFailed => "error during translation",
        MessageKey::HistoryEmpty => "No translation history",
        MessageKey::HistoryCleared => "History cleared",
    }
}
