use std::io::{self, Write};

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, Text};
use weather_lookup_core::{Config, Phase, QueryExecutor, WeatherView, provider_from_config};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-lookup", version, about = "Current weather for a city")]
pub struct Cli {
    /// WeatherAPI.com key; overrides the config file and WEATHERAPI_KEY.
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com key in the config file.
    Configure,

    /// Look up the current weather for a city once.
    Show {
        /// City name, e.g. "London".
        city: String,
    },

    /// Prompt for cities repeatedly. `:clear` resets the card, `:quit` exits.
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city } => {
                let (config, executor) = setup(self.api_key)?;
                let mut view = WeatherView::new(config.on_error);
                view.set_query(city);

                let mut out = io::stdout();
                lookup(&mut view, &executor, &mut out).await?;
                finish_show(&view, &mut out)
            }
            Command::Interactive => {
                let (config, executor) = setup(self.api_key)?;
                interactive(WeatherView::new(config.on_error), &executor).await
            }
        }
    }
}

fn setup(api_key: Option<String>) -> anyhow::Result<(Config, QueryExecutor)> {
    let mut config = Config::read()?;
    if let Some(key) = api_key {
        config.set_api_key(key);
    }
    log::debug!("Using endpoint {} (on_error = {:?})", config.base_url, config.on_error);

    let provider = provider_from_config(&config)?;
    Ok((config, QueryExecutor::new(provider)))
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let key = Password::new("WeatherAPI.com key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    if key.trim().is_empty() {
        anyhow::bail!("API key must not be empty");
    }

    config.set_api_key(key.trim().to_string());
    config.save()?;

    println!("Saved to {}", Config::config_file_path()?.display());
    Ok(())
}

/// Submit the view's query, showing the loading line while the request is in flight.
async fn lookup(
    view: &mut WeatherView,
    executor: &QueryExecutor,
    out: &mut impl Write,
) -> anyhow::Result<Phase> {
    let query = view.begin_submit();
    write!(out, "{}", render::card(view))?;
    out.flush()?;

    let outcome = executor.execute(&query).await;
    view.settle(outcome);

    Ok(view.phase())
}

/// `show` prints the card on success; a failure is reported once, as the command's error.
fn finish_show(view: &WeatherView, out: &mut impl Write) -> anyhow::Result<()> {
    if view.phase() == Phase::Failed {
        anyhow::bail!("{}", view.error().message);
    }
    write!(out, "{}", render::card(view))?;
    out.flush()?;
    Ok(())
}

async fn interactive(mut view: WeatherView, executor: &QueryExecutor) -> anyhow::Result<()> {
    loop {
        let line = match Text::new("Ciudad:").with_initial_value(view.query()).prompt() {
            Ok(line) => line,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read city"),
        };

        match line.trim() {
            ":quit" | ":q" => break,
            ":clear" => view.clear(),
            _ => {
                view.set_query(line);
                lookup(&mut view, executor, &mut io::stdout()).await?;
            }
        }

        print!("{}", render::card(&view));
    }

    Ok(())
}
