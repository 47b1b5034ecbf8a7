use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use rethink_core::model::Catalog;
use rethink_core::quiz::ViewerConfig;
use services::{CatalogService, ViewerSession};
use storage::repository::Storage;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp};

// Lets timers that are due at the same instant run before the next step.
const SETTLE: Duration = Duration::from_millis(50);

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidVariant { raw: String },
    InvalidDelay { flag: &'static str, raw: String },
    InvalidAnswer { raw: String },
    EmptyCatalogPath,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidVariant { raw } => {
                write!(f, "invalid --variant value: {raw} (expected sequence or single)")
            }
            ArgsError::InvalidDelay { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
            ArgsError::InvalidAnswer { raw } => {
                write!(f, "invalid --answer value: {raw} (expected true or false)")
            }
            ArgsError::EmptyCatalogPath => write!(f, "--catalog requires a non-empty path"),
        }
    }
}

impl std::error::Error for ArgsError {}

#[derive(Debug)]
enum SimulateError {
    NoTextbook,
}

impl fmt::Display for SimulateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulateError::NoTextbook => write!(f, "catalog has no textbook to open"),
        }
    }
}

impl std::error::Error for SimulateError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_delay(raw: String, flag: &'static str) -> Result<Duration, ArgsError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
        .ok_or(ArgsError::InvalidDelay { flag, raw })
}

struct DesktopApp {
    catalog: Arc<Catalog>,
    viewer: ViewerConfig,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    fn viewer_config(&self) -> ViewerConfig {
        self.viewer.clone()
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  rethink ui       [--catalog <path>] [--variant sequence|single]");
    eprintln!("                   [--prompt-delay <secs>] [--feedback-delay <secs>]");
    eprintln!("  rethink simulate [same flags as ui] [--answer true|false]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  bundled demo catalog, --variant sequence");
    eprintln!("  --prompt-delay 10, --feedback-delay 2, --answer false");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  RETHINK_CATALOG, RETHINK_VARIANT, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Simulate,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "simulate" => Some(Self::Simulate),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Variant {
    Sequence,
    Single,
}

impl Variant {
    fn parse(raw: &str) -> Result<Self, ArgsError> {
        match raw.trim() {
            "sequence" => Ok(Self::Sequence),
            "single" => Ok(Self::Single),
            _ => Err(ArgsError::InvalidVariant {
                raw: raw.to_owned(),
            }),
        }
    }

    fn viewer_config(self) -> ViewerConfig {
        match self {
            Self::Sequence => ViewerConfig::sequence(),
            Self::Single => ViewerConfig::single(),
        }
    }
}

struct AppConfig {
    catalog: Option<PathBuf>,
    variant: Variant,
    prompt_delay: Option<Duration>,
    feedback_delay: Option<Duration>,
    answer: bool,
}

impl AppConfig {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        command: Command,
    ) -> Result<Self, ArgsError> {
        let mut catalog = std::env::var("RETHINK_CATALOG")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let mut variant = match std::env::var("RETHINK_VARIANT") {
            Ok(value) => Variant::parse(&value)?,
            Err(_) => Variant::Sequence,
        };
        let mut prompt_delay = None;
        let mut feedback_delay = None;
        let mut answer = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--catalog" => {
                    let value = require_value(args, "--catalog")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::EmptyCatalogPath);
                    }
                    catalog = Some(PathBuf::from(value));
                }
                "--variant" => {
                    let value = require_value(args, "--variant")?;
                    variant = Variant::parse(&value)?;
                }
                "--prompt-delay" => {
                    let value = require_value(args, "--prompt-delay")?;
                    prompt_delay = Some(parse_delay(value, "--prompt-delay")?);
                }
                "--feedback-delay" => {
                    let value = require_value(args, "--feedback-delay")?;
                    feedback_delay = Some(parse_delay(value, "--feedback-delay")?);
                }
                "--answer" if command == Command::Simulate => {
                    let value = require_value(args, "--answer")?;
                    answer = value
                        .trim()
                        .parse()
                        .map_err(|_| ArgsError::InvalidAnswer { raw: value.clone() })?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            catalog,
            variant,
            prompt_delay,
            feedback_delay,
            answer,
        })
    }

    fn viewer_config(&self) -> ViewerConfig {
        let viewer = self.variant.viewer_config();
        let mut quiz = viewer.quiz.clone();
        if let Some(delay) = self.prompt_delay {
            quiz = quiz.with_prompt_delay(delay);
        }
        if let Some(delay) = self.feedback_delay {
            quiz = quiz.with_feedback_delay(delay);
        }
        viewer.with_quiz(quiz)
    }

    fn storage(&self) -> Result<Storage, Box<dyn std::error::Error>> {
        match &self.catalog {
            Some(path) => Ok(Storage::json(path)?),
            None => Ok(Storage::in_memory()),
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rethink=info,services=info,ui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // No subcommand launches the UI.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let config = AppConfig::parse(&mut iter, cmd).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_tracing();

    let storage = config.storage()?;
    let catalog = CatalogService::new(Arc::clone(&storage.catalog))
        .load()
        .await?;
    let viewer = config.viewer_config();

    match cmd {
        Command::Ui => {
            tracing::info!(
                variant = ?config.variant,
                subjects = catalog.subjects.len(),
                "launching desktop ui"
            );
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                catalog: Arc::new(catalog),
                viewer,
            });

            // Some dev setups default the window to always-on-top; keep it a normal window.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("ReThink")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(app)
                .launch(App);
            Ok(())
        }
        Command::Simulate => simulate(&catalog, viewer, config.answer).await,
    }
}

/// Walk one textbook through prompt, question, answer and feedback expiry.
async fn simulate(
    catalog: &Catalog,
    viewer: ViewerConfig,
    answer: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let material = catalog.first_textbook().cloned().ok_or(SimulateError::NoTextbook)?;
    let prompt_delay = viewer.quiz.prompt_delay;
    let feedback_delay = viewer.quiz.feedback_delay;

    let session = ViewerSession::new(viewer);
    session.set_show_graph(true);
    tracing::info!(material = %material.id(), title = material.title(), "opening textbook");
    session.select_material(Some(material));
    tracing::info!(snapshot = ?session.snapshot(), "waiting for prompt");

    tokio::time::sleep(prompt_delay + SETTLE).await;
    tracing::info!(snapshot = ?session.snapshot(), "prompt delay elapsed");

    let Some(index) = session.activate_trigger() else {
        tracing::info!("trigger was not offered");
        return Ok(());
    };
    tracing::info!(
        index,
        question = %session.question_text().unwrap_or_default(),
        elaboration = session.elaboration().unwrap_or_default(),
        "question shown"
    );

    let correct = session.submit_answer(answer);
    let bandit = session.bandit();
    tracing::info!(
        answer,
        ?correct,
        values = ?bandit.values(),
        counts = ?bandit.counts(),
        "answer submitted"
    );

    tokio::time::sleep(feedback_delay + SETTLE).await;
    tracing::info!(snapshot = ?session.snapshot(), "feedback expired");

    session.close();
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // Binary glue prints once.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
