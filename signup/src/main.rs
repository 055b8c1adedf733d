//! Terminal entry point: prompts for both signup steps on stdin and prints the
//! registration record to stdout.

use std::ffi::OsString;
use std::io::{self, IsTerminal};

use clap::Parser;
use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use signup::SignupSettings;
use signup::domain::ReferenceData;
use signup::flow::SignupFlow;
use signup::inbound::terminal::{SecretEcho, Terminal};
use signup::outbound::{JsonDisplay, Router};

/// `signup` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "signup",
    about = "Create an account through a two-step terminal form",
    version
)]
struct CliArgs {
    /// Answer the registration prompt yes without asking.
    #[arg(long = "assume-yes", short = 'y')]
    assume_yes: bool,
    /// Emit JSON log lines on stderr.
    #[arg(long = "log-json")]
    log_json: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = CliArgs::parse();
    let settings = SignupSettings::load_from_iter([OsString::from("signup")])
        .map_err(|err| eyre!("failed to load signup settings: {err}"))?
        .with_flags(args.assume_yes, args.log_json);
    init_tracing(&settings);

    let secrets = if io::stdin().is_terminal() {
        SecretEcho::Hidden
    } else {
        SecretEcho::Visible
    };
    let mut terminal =
        Terminal::new(io::stdin().lock(), io::stdout()).with_secret_echo(secrets);
    let mut router = Router::new(JsonDisplay::new(io::stdout()));
    let mut flow = SignupFlow::new(ReferenceData::default());
    terminal
        .run(&mut flow, &mut router, settings.assume_yes)
        .wrap_err("signup session ended before the registration was submitted")
}

fn init_tracing(settings: &SignupSettings) {
    let directive = settings.log_filter();
    let (filter, rejected) = EnvFilter::try_new(directive).map_or_else(
        |err| (EnvFilter::new("info"), Some(err)),
        |filter| (filter, None),
    );
    let builder = fmt().with_env_filter(filter).with_writer(io::stderr);
    let result = if settings.log_json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
    if let Some(err) = rejected {
        warn!(%directive, error = %err, "invalid log filter; using info");
    }
}
