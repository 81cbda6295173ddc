use super::{build_client, check_format, exit_codes};
use crate::cli::args::{RunsArgs, ShowArgs};
use vanguard_core::client::RunsApi;
use vanguard_core::config::DashboardConfig;
use vanguard_core::report::console;

pub async fn cmd_runs(args: RunsArgs, cfg: &DashboardConfig) -> anyhow::Result<i32> {
    check_format(&args.format)?;
    let api = build_client(cfg)?;

    let runs = match api.fetch_runs().await {
        Ok(runs) => runs,
        Err(e) => {
            eprintln!("error: {}", e);
            return Ok(exit_codes::CONFIG_ERROR);
        }
    };

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&runs)?);
    } else {
        print!("{}", console::render_runs(&runs));
    }
    Ok(exit_codes::OK)
}

pub async fn cmd_show(args: ShowArgs, cfg: &DashboardConfig) -> anyhow::Result<i32> {
    check_format(&args.format)?;
    let api = build_client(cfg)?;

    let run = match api.fetch_run(&args.id).await {
        Ok(run) => run,
        Err(e) if e.is_not_found() => {
            eprintln!("run not found: {}", args.id);
            return Ok(exit_codes::CONFIG_ERROR);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            return Ok(exit_codes::CONFIG_ERROR);
        }
    };

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&run)?);
    } else {
        print!("{}", console::render_run(&run));
    }

    if args.gate && !run.overall_pass {
        eprintln!("gate failed: run {} did not pass overall", run.id);
        return Ok(exit_codes::GATE_FAILED);
    }
    Ok(exit_codes::OK)
}
