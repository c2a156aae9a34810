use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use futures_util::future::try_join_all;
use log::{error, info, warn};
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use fleet_ca::api::api::api_service;
use fleet_ca::api::structs::api_service_data::ApiServiceData;
use fleet_ca::ca::structs::ca_handler::CaHandler;
use fleet_ca::common::common::tcp_check_host_and_port_used;
use fleet_ca::config::structs::configuration::Configuration;
use fleet_ca::logging::setup_logging;
use fleet_ca::signer::structs::rcgen_signer::RcgenSigner;
use fleet_ca::stats::enums::stats_event::StatsEvent;
use fleet_ca::storage::structs::ssl_layout::SslLayout;
use fleet_ca::structs::Cli;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(error) = setup_logging(&config) {
        eprintln!("{error}");
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    if args.generate_ca {
        let layout = SslLayout::new(config.ssl_path());
        match RcgenSigner::generate_files(&layout, &config.ca_config.ca_name, config.ca_config.ca_ttl_days) {
            Ok(true) => {}
            Ok(false) => info!("[CERTGEN] A CA already exists in {}, nothing to do", layout.ca_directory().display()),
            Err(error) => {
                error!("[CERTGEN] {error}");
                exit(1);
            }
        }
        return Ok(());
    }

    if args.list {
        match CaHandler::read_only(&config).list_pending() {
            Ok(hostnames) => hostnames.iter().for_each(|hostname| println!("{hostname}")),
            Err(error) => {
                error!("[CA] {error}");
                exit(1);
            }
        }
        return Ok(());
    }

    if args.sign.is_some() || args.sign_all {
        let handler = match CaHandler::from_existing(&config) {
            Ok(handler) => handler,
            Err(error) => {
                error!("[CA] Unable to load the certificate authority, run with '--generate-ca' first: {error}");
                exit(1);
            }
        };

        if let Some(hostname) = &args.sign {
            match handler.sign(hostname) {
                Ok(_) => println!("Signed {hostname}"),
                Err(error) => {
                    error!("[CA] Unable to sign {hostname}: {error}");
                    exit(1);
                }
            }
            return Ok(());
        }

        let results = match handler.sign_all() {
            Ok(results) => results,
            Err(error) => {
                error!("[CA] {error}");
                exit(1);
            }
        };
        let mut failed = false;
        for (hostname, result) in results {
            match result {
                Ok(_) => println!("Signed {hostname}"),
                Err(_) => failed = true,
            }
        }
        if failed { exit(1); }
        return Ok(());
    }

    let handler = match CaHandler::from_config(&config) {
        Ok(handler) => Arc::new(handler),
        Err(error) => {
            error!("[BOOT] Unable to start the certificate authority: {error}");
            exit(1);
        }
    };

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let tokio_shutdown = Shutdown::new().map_err(|error| std::io::Error::other(format!("{error:?}")))?;

            let mut api_futures = Vec::new();
            for api_server_object in config.api_server.iter().filter(|server| server.enabled) {
                if let Err(error) = tcp_check_host_and_port_used(&api_server_object.bind_address) {
                    error!("[API] {error}");
                    exit(1);
                }
                let address: SocketAddr = match api_server_object.bind_address.parse() {
                    Ok(address) => address,
                    Err(_) => {
                        error!("[API] Invalid bind address {}", api_server_object.bind_address);
                        exit(1);
                    }
                };

                let data = Arc::new(ApiServiceData {
                    ca_handler: Arc::clone(&handler),
                    api_server_config: Arc::new(api_server_object.clone()),
                    api_key: config.ca_config.api_key.clone(),
                });
                api_futures.push(api_service(address, data).await?);
            }

            if api_futures.is_empty() {
                warn!("[BOOT] No API server enabled, requests can only be signed from the command line");
            }

            let (handles, futures): (Vec<_>, Vec<_>) = api_futures.into_iter().unzip();
            tokio::spawn(async move {
                if let Err(error) = try_join_all(futures).await {
                    error!("[API] Server stopped with an error: {error}");
                }
            });

            let stats_handler = tokio_shutdown.clone();
            let handler_spawn_stats = Arc::clone(&handler);
            let console_interval = config.log_console_interval.max(1);
            info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");

            tokio::spawn(async move {
                let mut interval = tokio::time::interval(Duration::from_secs(console_interval));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            handler_spawn_stats.set_stats(StatsEvent::TimestampConsole, chrono::Utc::now().timestamp() + console_interval as i64);
                            let stats = handler_spawn_stats.get_stats();
                            info!(
                                "[STATS] Requests: {} - Signed: {} - Cached: {} - Pending: {} (dup {}) - Manual: {} | \
                                Malformed: {} - Key mismatches: {} - Signing failures: {} - Storage failures: {} - Not CA: {}",
                                stats.requests, stats.signed, stats.cached, stats.pending, stats.duplicate_pending, stats.manual_signed,
                                stats.malformed, stats.key_mismatches, stats.signing_failures, stats.storage_failures, stats.not_ca
                            );
                        }
                        _ = stats_handler.handle() => {
                            info!("[BOOT] Shutting down thread for console updates...");
                            return;
                        }
                    }
                }
            });

            tokio::signal::ctrl_c().await?;
            info!("Shutdown request received, shutting down...");

            for handle in &handles {
                handle.stop(true).await;
            }
            tokio_shutdown.handle().await;

            info!("Server shutting down completed");
            Ok(())
        })
}
