// Main entry point
use clap::Parser;
use colored::Colorize;
use tlx::application::settings::apply_assignments;
use tlx::application::translate::{build_request, resolve_target, translate_and_record};
use tlx::domain::language::LanguageCode;
use tlx::domain::messages::{msg, MessageKey};
use tlx::domain::model::HistoryDepth;
use tlx::infrastructure;
use tlx::infrastructure::config::{load_config, Logging};
use tlx::interfaces::cli::Cli;
use tlx::presentation::render::{format_history, format_result};
use tlx::presentation::theme::Theme;
use tlx::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = load_config()?;
    if let Some(service) = cli.service {
        config.service = service;
    }

    // Initialize logging
    if config.logging.enable {
        init_logging(&config.logging)?;
    }

    if cli.generate_config {
        infrastructure::config::generate_config_sample()?;
        return Ok(());
    }
    if cli.languages {
        print_languages();
        return Ok(());
    }

    let state = AppState::new(config)?;
    let theme_name = cli.theme.as_deref().unwrap_or(state.config.theme.as_str());
    let theme = Theme::from_name(theme_name);

    if cli.clear_history {
        state.history.clear();
        println!("{}", msg(MessageKey::HistoryCleared));
        return Ok(());
    }
    if !cli.set.is_empty() {
        let change = {
            let mut settings = state.settings.write().await;
            apply_assignments(&mut settings, &cli.set)?
        };
        for key in &change.changed {
            println!("{} {}", "Updated".green(), key.cli_name());
        }
        if cli.text.is_empty() && !cli.history && !cli.status {
            return Ok(());
        }
    }
    if cli.history {
        print!("{}", format_history(&state.history.load(), &theme));
        return Ok(());
    }
    if cli.status {
        print_status(&state).await;
        return Ok(());
    }

    if cli.text.is_empty() {
        eprintln!("{}", "Please provide text to translate".red());
        std::process::exit(1);
    }

    let text = cli.text.join(" ");
    let settings = state.settings.read().await.snapshot();
    let target = resolve_target(cli.to.as_deref(), &settings)?;
    let request = build_request(&text, target, cli.endpoint.as_deref(), &settings);
    let depth = if cli.no_history {
        HistoryDepth::Disabled
    } else {
        settings.history_depth
    };

    // The request keeps running server-side; we just stop waiting for it
    let result = tokio::select! {
        result = translate_and_record(state.client.as_ref(), &state.history, depth, &request) => result,
        _ = tokio::signal::ctrl_c() => {
            eprintln!("\nInterrupted");
            return Ok(());
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", format_result(&result, &theme));
    }

    if result.is_failure() {
        std::process::exit(1);
    }

    Ok(())
}

/// Initialize logging with path and level configuration
fn init_logging(logging: &Logging) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let level = match logging.level.as_str() {
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARN" => "warn",
        "ERROR" => "error",
        _ => "warn",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if let Some(path) = &logging.path {
        if !path.is_empty() {
            // Log to file
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(file)
                .init();
            return Ok(());
        }
    }

    // Log to stderr (default)
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn print_languages() {
    for (idx, code) in LanguageCode::all().iter().enumerate() {
        println!("{:>2}  {}", idx, code);
    }
}

async fn print_status(state: &AppState) {
    println!("{}", "tlx Status".green().bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    println!(
        "Config: {}",
        infrastructure::config::get_config_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "Not found".to_string())
    );
    println!("Service: {}", state.client.variant());

    let settings = state.settings.read().await.snapshot();
    match state.client.reconfigure(&settings.endpoint).await {
        Some(url) => println!("Endpoint: {}", url),
        None => println!("Endpoint: {}", msg(MessageKey::InvalidEndpoint).red()),
    }
    println!("Default target: {}", settings.default_target_language);
    println!("Max retries: {}", state.client.policy().max_retries);

    let depth = match settings.history_depth {
        HistoryDepth::Disabled => HistoryDepth::NONE.to_string(),
        HistoryDepth::Unbounded => "unbounded".to_string(),
        HistoryDepth::Limit(n) => n.to_string(),
    };
    println!(
        "History: {} ({} entries, {})",
        depth,
        state.history.load().len(),
        state.history.path().display()
    );
}
