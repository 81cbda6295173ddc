use super::args::*;
use super::logging::init_logging;
use vanguard_core::client::HttpRunsApi;
use vanguard_core::config::DashboardConfig;

pub mod runs;
pub mod serve;

pub mod exit_codes {
    pub const OK: i32 = 0;
    pub const GATE_FAILED: i32 = 1;
    pub const CONFIG_ERROR: i32 = 2;
}

pub async fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    if let Command::Version = cli.cmd {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(exit_codes::OK);
    }

    let cfg = match load_config(&cli) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("config error: {}", e);
            return Ok(exit_codes::CONFIG_ERROR);
        }
    };

    init_logging(&cfg.log_level);
    if !cfg.unknown_fields.is_empty() {
        tracing::warn!(
            event = "config_unknown_fields",
            fields = ?cfg.unknown_fields,
            "ignored unknown config fields"
        );
    }

    match cli.cmd {
        Command::Serve(args) => serve::cmd_serve(args, cfg).await,
        Command::Runs(args) => runs::cmd_runs(args, &cfg).await,
        Command::Show(args) => runs::cmd_show(args, &cfg).await,
        Command::Version => Ok(exit_codes::OK),
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<DashboardConfig> {
    let mut cfg = DashboardConfig::load(cli.config.as_deref())?;
    if let Some(url) = &cli.api_url {
        cfg.api.api_url = url.clone();
    }
    Ok(cfg)
}

pub(crate) fn build_client(cfg: &DashboardConfig) -> anyhow::Result<HttpRunsApi> {
    HttpRunsApi::new(&cfg.api)
}

pub(crate) fn check_format(format: &str) -> anyhow::Result<()> {
    match format {
        "text" | "json" => Ok(()),
        other => anyhow::bail!("unknown --format {:?} (expected text or json)", other),
    }
}
