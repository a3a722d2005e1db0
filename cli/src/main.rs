mod env;
mod error;
mod http;
mod store;


use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use session::api::ApiConfig;
use session::env::SystemClock;
use session::monitor::{self, MONITOR_INTERVAL, MonitorExit, MonitorHandle};
use session::progress::token_progress;
use session::{LoginRequest, RegisterRequest, SessionManager, TokenStorage, User, UserListing};
use tracing_subscriber::EnvFilter;

use crate::env::{LogNavigator, StderrNotifier};
use crate::error::CliError;
use crate::http::ReqwestAuthApi;
use crate::store::FileStore;

#[derive(Parser, Debug)]
#[command(name = "authctl", about = "Sign in to the auth API and inspect the stored session")]
struct Cli {
    #[arg(long, env = "API_BASE_URL", default_value = session::api::DEFAULT_API_BASE_URL)]
    api_url: String,

    /// JSON file holding the bearer token.
    #[arg(long, env = "AUTHCTL_STORE", default_value = ".authctl.json")]
    store: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and store the issued token.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "AUTHCTL_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account and store the issued token.
    Register(RegisterArgs),
    /// Drop the stored token.
    Logout,
    /// Show the signed-in user and remaining session time.
    Whoami,
    /// List users (admin only).
    Users,
    /// Provision a new admin account (admin only).
    RegisterAdmin(RegisterArgs),
    /// Watch the stored session until it expires or Ctrl-C.
    Watch {
        #[arg(long, default_value_t = MONITOR_INTERVAL.as_secs())]
        interval_secs: u64,
    },
}

#[derive(Args, Debug)]
struct RegisterArgs {
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    #[arg(long)]
    email: String,
    #[arg(long, env = "AUTHCTL_PASSWORD", hide_env_values = true)]
    password: String,
    /// Defaults to `--password`.
    #[arg(long)]
    confirm_password: Option<String>,
}

impl From<RegisterArgs> for RegisterRequest {
    fn from(args: RegisterArgs) -> Self {
        let confirm_password = args.confirm_password.unwrap_or_else(|| args.password.clone());
        Self {
            first_name: args.first_name,
            last_name: args.last_name,
            email: args.email,
            password: args.password,
            confirm_password,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let manager = build_manager(&cli)?;
    manager.initialize();

    match cli.command {
        Command::Login { email, password } => {
            let user = manager.login(LoginRequest { email, password }).await?;
            println!("signed in as {}", describe(&user));
        }
        Command::Register(args) => {
            let user = manager.register(args.into()).await?;
            println!("registered {}", describe(&user));
        }
        Command::Logout => manager.logout(),
        Command::Whoami => run_whoami(&manager)?,
        Command::Users => {
            require_user(&manager)?;
            print_listing(&manager.list_users().await?);
        }
        Command::RegisterAdmin(args) => {
            require_user(&manager)?;
            manager.register_admin(&args.into()).await?;
        }
        Command::Watch { interval_secs } => {
            run_watch(&manager, Duration::from_secs(interval_secs.max(1))).await?;
        }
    }
    Ok(())
}

fn build_manager(cli: &Cli) -> Result<SessionManager, CliError> {
    let client = reqwest::Client::builder().build()?;
    let config = ApiConfig::new(Some(&cli.api_url));
    tracing::debug!(base_url = %config.base_url, store = %cli.store.display(), "authctl configured");
    Ok(SessionManager::new(
        TokenStorage::new(FileStore::new(&cli.store)),
        ReqwestAuthApi::new(client, config),
        StderrNotifier,
        LogNavigator,
        SystemClock,
    ))
}

fn require_user(manager: &SessionManager) -> Result<User, CliError> {
    manager.user().ok_or(CliError::NotSignedIn)
}

fn run_whoami(manager: &SessionManager) -> Result<(), CliError> {
    let user = require_user(manager)?;
    println!("id:    {}", user.id);
    println!("name:  {}", user.full_name());
    println!("email: {}", user.email);
    println!("role:  {}", user.role);
    if let Some(progress) = manager.tokens().get().and_then(|t| token_progress(&t, manager.now())) {
        println!(
            "session: {} ({:.0}% left, ~{} min)",
            progress.status.label(),
            progress.percent,
            progress.minutes_left
        );
    }
    Ok(())
}

async fn run_watch(manager: &SessionManager, interval: Duration) -> Result<(), CliError> {
    let user = require_user(manager)?;
    println!("watching session for {}", describe(&user));

    let handle = MonitorHandle::new();
    let exit = tokio::select! {
        exit = monitor::run(manager, handle.clone(), interval, tokio::time::sleep) => exit,
        _ = tokio::signal::ctrl_c() => {
            handle.cancel();
            MonitorExit::Cancelled
        }
    };
    println!("{}", watch_outcome(exit));
    Ok(())
}

fn watch_outcome(exit: MonitorExit) -> &'static str {
    match exit {
        MonitorExit::Cancelled => "stopped",
        MonitorExit::SignedOut => "signed out",
        MonitorExit::Expired => "session expired",
    }
}

fn describe(user: &User) -> String {
    format!("{} <{}> ({})", user.full_name(), user.email, user.role)
}

fn print_listing(listing: &UserListing) {
    println!("Total Users: {}", listing.total());
    println!("{:<6} {:<28} {:<32} ROLE", "ID", "NAME", "EMAIL");
    for user in &listing.users {
        println!("{:<6} {:<28} {:<32} {}", user.id, user.full_name(), user.email, user.role);
    }
}
