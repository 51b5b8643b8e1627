use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::ValueEnum;
use eyre::{Result, bail};
use log::{debug, info};

mod cli;

use captx::config::{Config, EngineConfig};
use captx::{TranscriptEngine, TranscriptError};
use cli::{Cli, OutputFormat};

fn setup_logging() -> Result<()> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("captx.log");

    let target = Box::new(std::fs::OpenOptions::new().create(true).append(true).open(&log_file)?);

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized: {}", log_file.display());
    Ok(())
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("captx")
        .join("logs")
}

fn build_after_help(engine: &EngineConfig) -> String {
    let strategies = engine
        .strategies
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(" -> ");

    let fallback_line = match &engine.fallback {
        Some(f) => format!("  \x1b[32m✅\x1b[0m fallback   {}", f.endpoint),
        None => "  \x1b[31m❌\x1b[0m fallback   (not configured; add [fallback] to config.toml)".to_string(),
    };

    format!(
        "\nSTRATEGIES:\n  {strategies}\n{fallback_line}\n\nConfig: {}\nLogs are written to: {}",
        captx::config::config_path().display(),
        log_dir().join("captx.log").display()
    )
}

/// Process exit code for an engine error, grouped like the HTTP status it maps to
fn exit_code(err: &TranscriptError) -> i32 {
    match err.recommended_status_code() {
        404 => 2,
        429 => 3,
        403 => 4,
        502 | 503 => 5,
        _ => 1,
    }
}

fn fail(err: &TranscriptError) -> ! {
    eprintln!("Error ({}): {err}", err.kind);
    std::process::exit(exit_code(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;

    // Load config file (non-fatal if missing/invalid)
    let config = Config::load().unwrap_or_default();
    let engine_config = config.engine_config();

    let after_help = build_after_help(&engine_config);
    let cmd = <Cli as clap::CommandFactory>::command().after_help(after_help);
    let matches = cmd.get_matches();
    let cli = <Cli as clap::FromArgMatches>::from_arg_matches(&matches)?;

    // CLI flags take priority over config defaults
    let lang = cli.lang.clone().or_else(|| config.default_lang.clone());
    let format = match cli.format {
        Some(f) => f,
        None => match config.default_format.as_deref() {
            Some(name) => OutputFormat::from_str(name, true)
                .map_err(|e| eyre::eyre!("invalid default_format in config: {e}"))?,
            None => OutputFormat::Text,
        },
    };

    if cli.verbose {
        let config_path = captx::config::config_path();
        if config_path.exists() {
            eprintln!("Config: {}", config_path.display());
        }
        debug!("Effective language: {lang:?}, format: {format:?}");
    }

    let engine = TranscriptEngine::new(engine_config);

    // Collect URLs: from arg or stdin
    let urls = if let Some(ref url) = cli.url {
        vec![url.clone()]
    } else {
        let stdin = io::stdin();
        stdin.lock().lines().collect::<Result<Vec<_>, _>>()?
    };

    if urls.is_empty() {
        bail!("no URL or video ID provided\n\nUsage: captx <URL>\n       echo <URL> | captx");
    }

    for url_input in &urls {
        let url_input = url_input.trim().to_string();
        if url_input.is_empty() {
            continue;
        }

        let video_id = captx::extract_video_id(&url_input)
            .ok_or_else(|| eyre::eyre!("could not extract video ID from: {url_input}\n\nSupported formats:\n  https://www.youtube.com/watch?v=ID\n  https://youtu.be/ID\n  https://www.youtube.com/embed/ID\n  https://www.youtube.com/shorts/ID\n  https://www.youtube.com/live/ID\n  <11-character video ID>"))?;

        let rendered = if cli.list_languages {
            let outcome = tokio::select! {
                outcome = engine.list_languages(&video_id) => outcome,
                _ = tokio::signal::ctrl_c() => bail!("interrupted"),
            };
            match outcome {
                Ok(languages) => captx::output::render_languages(&languages),
                Err(e) => fail(&e),
            }
        } else {
            let outcome = tokio::select! {
                outcome = engine.fetch_transcript(&video_id, lang.as_deref()) => outcome,
                _ = tokio::signal::ctrl_c() => bail!("interrupted"),
            };
            let result = match outcome {
                Ok(result) => result,
                Err(e) => fail(&e),
            };

            if cli.verbose {
                eprintln!(
                    "Video: {video_id}\nSource: {}\nLanguage: {}\nSegments: {}",
                    result.source,
                    result.language.as_deref().unwrap_or("unknown"),
                    result.segments.len(),
                );
            }

            match format {
                OutputFormat::Text => captx::output::render_text(&result),
                OutputFormat::Timestamped => captx::output::render_timestamped(&result),
                OutputFormat::Json => captx::output::render_json(&video_id, &result),
                OutputFormat::Srt => captx::output::render_srt(&result),
            }
        };

        if let Some(ref path) = cli.output {
            std::fs::write(path, &rendered)?;
            if cli.verbose {
                eprintln!("Output written to: {}", path.display());
            }
        } else {
            println!("{rendered}");
        }
    }

    Ok(())
}
