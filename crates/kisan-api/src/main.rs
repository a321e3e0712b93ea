//! Kisan CLI and advisory proxy entry point.
//!
//! Binary name: `kisan`
//!
//! Parses CLI arguments, loads `kisan.toml`, wires the advisory service,
//! then either starts one of the two servers or runs a one-shot command.

mod cli;
mod http;
mod state;

use axum::Router;
use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands};
use kisan_infra::config::load_proxy_config;
use kisan_observe::tracing_setup::{init_tracing, shutdown_tracing, TracingOptions};
use kisan_types::config::ProxyConfig;
use kisan_types::prediction::FarmParameters;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity; RUST_LOG overrides
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn,kisan=info",
        1 => "info,kisan=debug",
        _ => "trace",
    };
    init_tracing(&TracingOptions::new(filter).with_otel(cli.otel))
        .map_err(|e| anyhow::anyhow!(e))?;

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "kisan", &mut std::io::stdout());
        return Ok(());
    }

    let config = load_proxy_config(&cli.config).await;

    let result = run(cli, config).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli, config: ProxyConfig) -> anyhow::Result<()> {
    match cli.command {
        Commands::Serve {
            port,
            host,
            web_dir,
        } => {
            let state = AppState::production(&config)?.with_web_dir(web_dir);
            let addr = bind_addr(&config, host, port, "127.0.0.1", 3000);
            serve(&addr, "Kisan advisory proxy", http::router::build_router(state)).await?;
        }

        Commands::Dev {
            port,
            host,
            mode,
            env_dir,
            web_dir,
        } => {
            let state = AppState::development(&config, &env_dir, &mode)?.with_web_dir(web_dir);
            let addr = bind_addr(&config, host, port, "0.0.0.0", 8080);
            serve(&addr, "Kisan dev server", http::dev::build_dev_router(state)).await?;
        }

        Commands::Ask {
            prompt,
            provider,
            model,
        } => {
            let state = AppState::production(&config)?;
            cli::ask::ask(
                &state,
                prompt,
                provider.into(),
                model,
                cli.json,
                &mut std::io::stdout(),
            )
            .await?;
        }

        Commands::Predict {
            nitrogen,
            phosphorus,
            potassium,
            state: farm_state,
            rainfall,
            area,
            provider,
            model,
        } => {
            let state = AppState::production(&config)?;
            let params = FarmParameters {
                nitrogen,
                phosphorus,
                potassium,
                state: farm_state,
                rainfall_mm: rainfall,
                area_hectares: area,
            };
            cli::predict::predict(
                &state,
                params,
                provider.into(),
                model,
                cli.json,
                &mut std::io::stdout(),
            )
            .await?;
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}

/// Resolve the listen address: CLI flag, then config file, then mode default.
fn bind_addr(
    config: &ProxyConfig,
    host: Option<String>,
    port: Option<u16>,
    default_host: &str,
    default_port: u16,
) -> String {
    let host = host
        .or_else(|| config.server.host.clone())
        .unwrap_or_else(|| default_host.to_string());
    let port = port.or(config.server.port).unwrap_or(default_port);
    format!("{host}:{port}")
}

async fn serve(addr: &str, label: &str, router: Router) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;

    println!(
        "  {} {label} listening on {}",
        console::style("⚡").bold(),
        console::style(format!("http://{addr}")).cyan()
    );
    println!("  {}", console::style("Press Ctrl+C to stop").dim());

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    println!("\n  Server stopped.");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn bind_addr_precedence() {
        let mut config = ProxyConfig::default();
        assert_eq!(bind_addr(&config, None, None, "127.0.0.1", 3000), "127.0.0.1:3000");

        config.server.host = Some("0.0.0.0".to_string());
        config.server.port = Some(9000);
        assert_eq!(bind_addr(&config, None, None, "127.0.0.1", 3000), "0.0.0.0:9000");
        assert_eq!(
            bind_addr(&config, Some("::1".to_string()), Some(81), "127.0.0.1", 3000),
            "::1:81"
        );
    }

    #[test]
    fn config_path_defaults_to_working_directory() {
        let cli = Cli::try_parse_from(["kisan", "serve"]).unwrap();
        if std::env::var_os("KISAN_CONFIG").is_none() {
            assert_eq!(cli.config, PathBuf::from("kisan.toml"));
        }
    }
}
