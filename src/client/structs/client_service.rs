use std::sync::Arc;
use crate::bus::types::BusId;
use crate::client::structs::connection_registry::ConnectionRegistry;
use crate::client::structs::dispatcher::Dispatcher;
use crate::common::traits::clock::Clock;
use crate::config::structs::client_config::ClientConfig;
use crate::net::traits::transport_factory::TransportFactory;
use crate::protocol::enums::logic_status::LogicStatus;
use crate::ring::structs::consistent_hash_ring::ConsistentHashRing;
use crate::stats::structs::client_stats_atomics::ClientStatsAtomics;

pub struct ClientService<F: TransportFactory> {
    pub config: ClientConfig,
    pub self_bus_id: BusId,
    pub factory: F,
    pub clock: Arc<dyn Clock>,
    pub registry: ConnectionRegistry<F::Transport>,
    pub ring: ConsistentHashRing,
    pub dispatcher: Dispatcher,
    pub stats: Arc<ClientStatsAtomics>,
    pub online_count: u32,
    pub logic_status: LogicStatus,
}
