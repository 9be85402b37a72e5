use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use log::{debug, error, info};
use parking_lot::deadlock;
use tokio::runtime::{Builder, Handle};
use tokio_shutdown::Shutdown;
use busmesh::bus::structs::bus_addr::BusAddr;
use busmesh::client::structs::client_service::ClientService;
use busmesh::common::structs::system_clock::SystemClock;
use busmesh::config::structs::configuration::Configuration;
use busmesh::logging::setup_logging;
use busmesh::net::structs::endpoint::Endpoint;
use busmesh::structs::Cli;
use busmesh::transport::structs::net_transport_factory::NetTransportFactory;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_path(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(e) = setup_logging(&config) {
        eprintln!("[ERROR] {}", e);
        exit(101);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    std::thread::spawn(|| {
        info!("[BOOT] Starting thread for deadlocks...");
        loop {
            std::thread::sleep(Duration::from_secs(30));
            let deadlocks = deadlock::check_deadlock();
            if deadlocks.is_empty() {
                continue;
            }
            info!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
            for (i, threads) in deadlocks.iter().enumerate() {
                info!("[DEADLOCK] #{i}");
                for t in threads {
                    info!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                    info!("[DEADLOCK] {:#?}", t.backtrace());
                }
            }
        }
    });

    Builder::new_multi_thread()
        .thread_name("net")
        .enable_all()
        .build()?
        .block_on(async {
            let tokio_shutdown = match Shutdown::new() {
                Ok(shutdown) => shutdown,
                Err(e) => {
                    error!("[BOOT] Could not install signal handlers: {}", e);
                    exit(101);
                }
            };

            let factory = NetTransportFactory::new(Handle::current());
            let mut service = match ClientService::new(config.client.clone(), factory, Arc::new(SystemClock)) {
                Ok(service) => service,
                Err(e) => {
                    error!("[BOOT] {}", e);
                    exit(101);
                }
            };

            service.register_event_handler(Box::new(|event, view| {
                debug!(
                    "[CLIENT] {:?} for {}, {} peer(s) connected",
                    event.event_type,
                    BusAddr::format(event.bus_id),
                    view.connected_peers().len()
                );
            }));

            for peer in config.enabled_peers() {
                let target = match BusAddr::parse(&peer.bus_id) {
                    Ok(target) => target,
                    Err(e) => {
                        error!("[BOOT] Skipping peer: {}", e);
                        continue;
                    }
                };
                let endpoint = match Endpoint::parse(&peer.url) {
                    Ok(endpoint) => endpoint,
                    Err(e) => {
                        error!("[BOOT] Skipping peer {}: {}", peer.bus_id, e);
                        continue;
                    }
                };
                info!("[BOOT] Requesting connection to {} at {}", peer.bus_id, endpoint);
                service.start_client(target, endpoint, peer.head_length);
            }

            let stats = service.stats();
            let console_interval = config.log_console_interval.unwrap_or(60);
            info!("[BOOT] Starting console updates with {console_interval} seconds delay...");
            let mut console = tokio::time::interval(Duration::from_secs(console_interval));
            let mut tick = tokio::time::interval(Duration::from_millis(config.client.tick_interval_ms));
            tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = tick.tick() => {
                        service.update();
                    }
                    _ = console.tick() => {
                        let snapshot = stats.get_stats();
                        info!(
                            "[STATS] Active: {} - Connects: {} - Disconnects: {} - Reconnects: {} - Failures: {} | \
                            Dispatched: {} - Unroutable: {} - Sent: {} - Send Failures: {} - Reports: {}",
                            snapshot.connections_active, snapshot.connects, snapshot.disconnects,
                            snapshot.reconnect_attempts, snapshot.connect_failures,
                            snapshot.messages_dispatched, snapshot.messages_unroutable,
                            snapshot.messages_sent, snapshot.send_failures, snapshot.reports_sent
                        );
                        service.log_server_info();
                    }
                    _ = tokio_shutdown.handle() => {
                        info!("Shutdown request received, shutting down...");
                        break;
                    }
                }
            }

            service.shutdown();
            info!("Server shutting down completed");
            Ok(())
        })
}
