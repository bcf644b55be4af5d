use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Arc,
    time::{Duration, Instant},
};

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use scenarist_core::{
    EnvConfig, GeneratedScript, Layered, Provider, ScriptGenerator, ScriptSection,
    format_script_readable,
};
use tokio::fs;
use tracing_subscriber::EnvFilter;

use crate::channels::{default_channels_path, find_channel, load_channels};

mod channels;

/// CLI wrapper for Provider enum (needed for clap ValueEnum)
#[derive(Clone, Default, ValueEnum)]
enum CliProvider {
    #[default]
    Openai,
    Grok,
    Gemini,
}

impl From<CliProvider> for Provider {
    fn from(cli: CliProvider) -> Self {
        match cli {
            CliProvider::Openai => Provider::Openai,
            CliProvider::Grok => Provider::Grok,
            CliProvider::Gemini => Provider::Gemini,
        }
    }
}

#[derive(Parser)]
#[command(name = "scenarist")]
#[command(about = "Generate structured short-video scripts for your channels with AI")]
struct Cli {
    /// Channel catalog (JSON). Defaults to <config dir>/scenarist/channels.json
    #[arg(long, global = true)]
    channels: Option<PathBuf>,

    /// Show debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List channels from the catalog
    Channels,

    /// Generate a script for a channel from an idea
    Generate {
        /// Channel id from the catalog
        #[arg(short, long)]
        channel: String,

        /// Free-text video idea
        idea: String,

        /// AI provider for script generation
        #[arg(short, long, default_value = "openai")]
        provider: CliProvider,

        /// Model override (otherwise the provider's model setting or baseline)
        #[arg(short, long)]
        model: Option<String>,

        /// Print the script as JSON instead of markdown
        #[arg(long)]
        json: bool,

        /// Also save the script JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::default_spinner()
        .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
        .template("{spinner:.cyan} {msg}")
    {
        pb.set_style(spinner_style);
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    // {:.1} rounds 59.95 and above up to "60.0"
    if secs < 59.95 {
        format!("{:.1}s", secs)
    } else {
        let total = d.as_secs().max(60);
        format!("{}m {}s", total / 60, total % 60)
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn save_script(script: &GeneratedScript, path: &Path) -> Result<()> {
    let pretty_json = serde_json::to_string_pretty(script)?;
    fs::write(path, &pretty_json).await?;
    Ok(())
}

async fn list_channels(catalog: PathBuf) -> Result<()> {
    let channels = load_channels(&catalog).await?;

    if channels.is_empty() {
        println!("{}", style("No channels in catalog").dim());
        return Ok(());
    }

    for channel in &channels {
        println!(
            "{}  {}  {} · {} · {}s",
            style(&channel.id).cyan().bold(),
            channel.name,
            style(channel.profile.platform.display_name()).yellow(),
            channel.profile.language.display_name(),
            channel.profile.target_duration_sec
        );
    }

    Ok(())
}

async fn generate(
    catalog: PathBuf,
    channel_id: String,
    idea: String,
    provider: Provider,
    model: Option<String>,
    json: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let channels = load_channels(&catalog).await?;
    let channel = find_channel(&channels, &channel_id)?;

    let mut overrides = HashMap::new();
    if let Some(model) = model {
        overrides.insert(provider.config().model_var.to_string(), model);
    }
    let generator = ScriptGenerator::new(
        provider,
        Arc::new(Layered {
            top: overrides,
            base: EnvConfig,
        }),
    );

    // Validate API key early
    let settings = generator.settings()?;

    let started = Instant::now();
    let spinner = create_spinner(&format!(
        "Writing script for {} with {} ({})...",
        style(&channel.id).cyan(),
        provider.name(),
        settings.model
    ));
    let script = match generator.generate(&channel.profile, &idea).await {
        Ok(script) => script,
        Err(e) => {
            spinner.finish_and_clear();
            return Err(e.into());
        }
    };
    spinner.finish_with_message(format!(
        "{} Script generated ({}) {}",
        style("✓").green().bold(),
        provider.name(),
        style(format_duration(started.elapsed())).dim()
    ));

    if script.sections == ScriptSection::degraded(&script.raw_text) {
        eprintln!(
            "{} {}",
            style("!").yellow().bold(),
            style("Model reply was not structured; full text kept under Main Action").dim()
        );
    }

    if let Some(path) = &output {
        save_script(&script, path).await?;
        eprintln!(
            "{} {}",
            style("Saved:").dim(),
            style(path.display()).cyan()
        );
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&script)?);
    } else {
        println!("{}", style("─".repeat(60)).dim());
        println!("{}", format_script_readable(&script));
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let catalog = cli.channels.unwrap_or_else(default_channels_path);

    let result = match cli.command {
        Command::Channels => list_channels(catalog).await,
        Command::Generate {
            channel,
            idea,
            provider,
            model,
            json,
            output,
        } => generate(catalog, channel, idea, provider.into(), model, json, output).await,
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_duration_truncates_minutes() {
        assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
        assert_eq!(format_duration(Duration::from_secs(100)), "1m 40s");
        assert_eq!(format_duration(Duration::from_secs(125)), "2m 5s");
    }

    #[test]
    fn format_duration_below_a_minute_keeps_tenths() {
        assert_eq!(format_duration(Duration::from_millis(2_340)), "2.3s");
        assert_eq!(format_duration(Duration::from_millis(59_940)), "59.9s");
        assert_eq!(format_duration(Duration::from_millis(59_970)), "1m 0s");
    }
}
