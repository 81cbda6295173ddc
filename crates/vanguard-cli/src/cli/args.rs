use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "vanguard",
    version,
    about = "Read-only dashboard for Vanguard eval runs"
)]
pub struct Cli {
    /// YAML config file (defaults, then this file, then VANGUARD_* env vars)
    #[arg(long, global = true, env = "VANGUARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Base URL of the eval API (overrides config and VANGUARD_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Serve the web dashboard
    Serve(ServeArgs),
    /// List evaluation runs
    Runs(RunsArgs),
    /// Show one evaluation run with its results
    Show(ShowArgs),
    Version,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ServeArgs {
    /// Address to listen on (overrides config and VANGUARD_LISTEN)
    #[arg(long)]
    pub listen: Option<SocketAddr>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct RunsArgs {
    #[arg(long, default_value = "text")]
    pub format: String, // text|json
}

#[derive(clap::Args, Debug, Clone)]
pub struct ShowArgs {
    /// Run identifier
    pub id: String,

    #[arg(long, default_value = "text")]
    pub format: String, // text|json

    /// Exit 1 unless the run passed overall
    #[arg(long)]
    pub gate: bool,
}
