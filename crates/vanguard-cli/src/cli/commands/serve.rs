use super::build_client;
use super::exit_codes;
use crate::cli::args::ServeArgs;
use std::sync::Arc;
use vanguard_core::config::DashboardConfig;
use vanguard_web::server::Server;

pub async fn cmd_serve(args: ServeArgs, mut cfg: DashboardConfig) -> anyhow::Result<i32> {
    if let Some(listen) = args.listen {
        cfg.listen = listen;
    }

    let api = match build_client(&cfg) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("config error: {}", e);
            return Ok(exit_codes::CONFIG_ERROR);
        }
    };

    tracing::info!(event = "serve_config", config = ?cfg);
    Server::run(cfg.listen, Arc::new(api)).await?;
    Ok(exit_codes::OK)
}
