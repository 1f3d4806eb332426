use crate::domain::model::ServiceVariant;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tlx")]
#[command(about = "Translate text through a DeepLX-compatible service.")]
#[command(version)]
pub struct Cli {
    /// Target language code (e.g. DE, EN-GB, pt-br); defaults to settings
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Use this endpoint for one call instead of the saved one
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,

    /// Override the service variant from config.toml
    #[arg(long)]
    pub service: Option<ServiceVariant>,

    /// Don't record this translation in history
    #[arg(long)]
    pub no_history: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Choose color theme
    #[arg(short = 'T', long)]
    pub theme: Option<String>,

    /// Show translation history (most recent first)
    #[arg(long)]
    pub history: bool,

    /// Delete translation history
    #[arg(long)]
    pub clear_history: bool,

    /// Change a setting: history=<none|1|5|10|20>, target=<LANG>, endpoint=<URL>
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// List supported target languages
    #[arg(long)]
    pub languages: bool,

    /// Generate config sample
    #[arg(long)]
    pub generate_config: bool,

    /// Show status
    #[arg(long)]
    pub status: bool,

    /// Text to translate
    #[arg(num_args = 1..)]
    pub text: Vec<String>,
}
