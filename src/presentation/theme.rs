use colored::Colorize;

pub struct Theme {
    pub translation: fn(&str) -> String,
    pub original: fn(&str) -> String,
    pub tag: fn(&str) -> String,
    pub idx: fn(&str) -> String,
    pub line: fn(&str) -> String,
    pub error: fn(&str) -> String,
}

impl Theme {
    pub fn from_name(name: &str) -> Self {
        match name {
            "temp" | "" => Self::temp(),
            "wudao" => Self::wudao(),
            "canvas" => Self::canvas(),
            _ => {
                eprintln!("{}", format!("✘ Unknown theme: {}", name).red());
                Self::temp() // Fallback to default
            }
        }
    }

    fn temp() -> Self {
        Self {
            translation: |s| s.bright_magenta().bold().to_string(),
            original: |s| s.bright_white().dimmed().italic().to_string(),
            tag: |s| s.cyan().italic().to_string(),
            idx: |s| s.bright_white().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
            error: |s| s.red().bold().to_string(),
        }
    }

    fn wudao() -> Self {
        Self {
            translation: |s| s.red().bold().to_string(),
            original: |s| s.bright_yellow().dimmed().italic().to_string(),
            tag: |s| s.green().italic().to_string(),
            idx: |s| s.bright_white().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
            error: |s| s.red().italic().to_string(),
        }
    }

    fn canvas() -> Self {
        Self {
            translation: |s| s.blue().bold().to_string(),
            original: |s| s.bright_black().italic().to_string(),
            tag: |s| s.green().italic().to_string(),
            idx: |s| s.cyan().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
            error: |s| s.red().bold().to_string(),
        }
    }
}
