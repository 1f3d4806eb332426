use crate::domain::messages::{msg, MessageKey};
use crate::domain::model::{HistoryEntry, TranslationResult};
use crate::presentation::theme::Theme;
use std::fmt::Write;

/// Format a translate result for the terminal
pub fn format_result(result: &TranslationResult, theme: &Theme) -> String {
    let mut output = String::new();

    for unit in result.translations() {
        if result.is_failure() {
            writeln!(output, "{}", (theme.error)(&unit.text)).ok();
        } else {
            writeln!(output, "{}", (theme.translation)(&unit.text)).ok();
            let tag = format!("{} -> {}", unit.detected_source_language, result.target_lang_code());
            writeln!(output, "  {}", (theme.tag)(&tag)).ok();
        }
    }

    output
}

/// Format history entries (already ordered most recent first)
pub fn format_history(entries: &[HistoryEntry], theme: &Theme) -> String {
    let mut output = String::new();

    if entries.is_empty() {
        writeln!(output, "{}", msg(MessageKey::HistoryEmpty)).ok();
        return output;
    }

    let cutoff = "⸺".repeat(40);
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            writeln!(output, "  {}", (theme.line)(&cutoff)).ok();
        }
        let tag = format!("{} -> {}", entry.original_lang_code, entry.target_lang_code);
        writeln!(
            output,
            "{}. {}  {}",
            (theme.idx)(&(i + 1).to_string()),
            (theme.translation)(&entry.translated_text),
            (theme.tag)(&tag)
        )
        .ok();
        writeln!(
            output,
            "   {}  {}",
            (theme.original)(&entry.original_text),
            (theme.line)(&entry.timestamp.format("%Y-%m-%d %H:%M").to_string())
        )
        .ok();
    }

    output
}
