use std::sync::Arc;
use log::{debug, error, info, warn};
use crate::bus::structs::bus_addr::BusAddr;
use crate::bus::types::BusId;
use crate::client::enums::connection_state::ConnectionState;
use crate::client::structs::client_service::ClientService;
use crate::client::structs::cluster_view::ClusterView;
use crate::client::structs::connection_entry::ConnectionEntry;
use crate::client::structs::connection_registry::ConnectionRegistry;
use crate::client::structs::dispatcher::Dispatcher;
use crate::client::structs::peer_link::PeerLink;
use crate::client::types::{EventHandler, MessageHandler};
use crate::common::enums::mesh_error::MeshError;
use crate::common::traits::clock::Clock;
use crate::config::structs::client_config::ClientConfig;
use crate::net::enums::head_length::HeadLength;
use crate::net::enums::net_event_type::NetEventType;
use crate::net::impls::frame_decoder::MAX_BODY_LEN;
use crate::net::structs::endpoint::Endpoint;
use crate::net::structs::message_envelope::MessageEnvelope;
use crate::net::structs::msg_head::MsgHead;
use crate::net::structs::net_event::NetEvent;
use crate::net::traits::transport::Transport;
use crate::net::traits::transport_factory::TransportFactory;
use crate::net::types::MsgId;
use crate::protocol::enums::logic_status::LogicStatus;
use crate::protocol::structs::server_report::ServerReport;
use crate::protocol::SERVER_REPORT_MSG_ID;
use crate::ring::structs::consistent_hash_ring::ConsistentHashRing;
use crate::ring::structs::machine_node::MachineNode;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::client_stats_atomics::ClientStatsAtomics;

impl<F: TransportFactory> ClientService<F> {
    /// Fails when `self_bus_id` in `config` is not a valid bus address.
    pub fn new(config: ClientConfig, factory: F, clock: Arc<dyn Clock>) -> Result<ClientService<F>, MeshError> {
        let self_bus_id = BusAddr::parse(&config.self_bus_id)?;
        Ok(ClientService {
            config,
            self_bus_id,
            factory,
            clock,
            registry: ConnectionRegistry::new(),
            ring: ConsistentHashRing::new(),
            dispatcher: Dispatcher::new(),
            stats: Arc::new(ClientStatsAtomics::new()),
            online_count: 0,
            logic_status: LogicStatus::Normal,
        })
    }

    /// Requests a connection to `target`; it is started on the next tick.
    ///
    /// Asking again for a target that is already pending or active is a
    /// no-op and still returns `true`. Only a protocol the factory cannot
    /// build a transport for returns `false`.
    pub fn start_client(&mut self, target: BusId, endpoint: Endpoint, head_length: HeadLength) -> bool {
        if !self.factory.supports(endpoint.protocol) {
            error!("[CLIENT] Protocol {} is not supported, cannot connect to {} at {}", endpoint.protocol, BusAddr::format(target), endpoint);
            return false;
        }
        if self.registry.request_connection(target, endpoint, head_length) {
            debug!("[CLIENT] Queued connection to {}", BusAddr::format(target));
        }
        true
    }

    /// Drops the connection to `target` for good, shutting its transport
    /// down. Returns `false` when nothing was requested for it.
    pub fn stop_client(&mut self, target: BusId) -> bool {
        let was_pending = self.registry.pending.iter().any(|request| request.target == target);
        match self.registry.remove(target) {
            Some(entry) => {
                if entry.is_connected() {
                    self.stats.update_stats(StatsEvent::ConnectionsActive, -1);
                }
                self.ring.erase(target);
                info!("[CLIENT] Stopped connection to {}", BusAddr::format(target));
                true
            }
            None => was_pending,
        }
    }

    pub fn register_handler(&mut self, msg_id: MsgId, handler: MessageHandler) -> Result<(), MeshError> {
        self.dispatcher.register_handler(msg_id, handler).inspect_err(|_| {
            warn!("[CLIENT] Handler for message id {} is already registered", msg_id);
        })
    }

    pub fn register_forward_handler(&mut self, handler: MessageHandler) {
        self.dispatcher.register_forward_handler(handler);
    }

    pub fn register_event_handler(&mut self, handler: EventHandler) {
        self.dispatcher.register_event_handler(handler);
    }

    pub fn lookup(&self, target: BusId) -> Result<&ConnectionEntry<F::Transport>, MeshError> {
        self.registry
            .get(target)
            .ok_or_else(|| MeshError::PeerNotFound(BusAddr::format(target)))
    }

    pub fn route_by_key(&self, key: &str) -> Result<&MachineNode, MeshError> {
        self.ring.lookup_by_str(key)
    }

    pub fn route_by_hash(&self, key_hash: u32) -> Result<&MachineNode, MeshError> {
        self.ring.lookup(key_hash)
    }

    pub fn cluster_view(&self) -> ClusterView<'_> {
        ClusterView::new(&self.ring, &self.registry.links)
    }

    pub fn state_of(&self, target: BusId) -> Option<ConnectionState> {
        self.registry.get(target).map(|entry| entry.state)
    }

    pub fn connection_count(&self) -> usize {
        self.registry.len()
    }

    pub fn connected_count(&self) -> usize {
        self.registry.links.len()
    }

    pub fn stats(&self) -> Arc<ClientStatsAtomics> {
        self.stats.clone()
    }

    pub fn set_online_count(&mut self, online_count: u32) {
        self.online_count = online_count;
    }

    pub fn set_logic_status(&mut self, logic_status: LogicStatus) {
        self.logic_status = logic_status;
    }

    /// Frames `payload` with the target's header layout and sends it on the
    /// live session.
    pub fn send_to(&mut self, target: BusId, msg_id: MsgId, actor_id: u64, payload: &[u8]) -> Result<(), MeshError> {
        let result = self.send_frame(target, msg_id, actor_id, payload);
        match &result {
            Ok(()) => { self.stats.update_stats(StatsEvent::MessagesSent, 1); }
            Err(_) => { self.stats.update_stats(StatsEvent::SendFailures, 1); }
        }
        result
    }

    /// Sends to the peer owning `key` on the ring and returns its bus id.
    pub fn send_by_key(&mut self, key: &str, msg_id: MsgId, actor_id: u64, payload: &[u8]) -> Result<BusId, MeshError> {
        let target = self.ring.lookup_by_str(key)?.machine_id;
        self.send_to(target, msg_id, actor_id, payload)?;
        Ok(target)
    }

    /// One tick: promote requests, then advance every entry.
    pub fn update(&mut self) {
        let now = self.clock.now_ms();

        for target in self.registry.promote_pending(now) {
            self.connect(target, now);
        }

        let targets: Vec<BusId> = self.registry.entries.keys().copied().collect();
        for target in targets {
            let Some(state) = self.state_of(target) else {
                continue;
            };
            match state {
                ConnectionState::Disconnected => self.enter_reconnecting(target, now),
                ConnectionState::Connecting | ConnectionState::Connected => self.process_connection(target, now),
                ConnectionState::Reconnecting => self.process_reconnect(target, now),
            }
        }
    }

    pub fn shutdown(&mut self) {
        info!("[CLIENT] Shutting down {} connection(s)", self.registry.len());
        self.registry.shutdown_all();
        self.ring.clear();
        self.stats.set_stats(StatsEvent::ConnectionsActive, 0);
    }

    pub fn log_server_info(&self) {
        info!(
            "[CLIENT] Server {} : {} connection(s), {} connected, {} peer(s) on ring",
            BusAddr::format(self.self_bus_id),
            self.registry.len(),
            self.registry.links.len(),
            self.ring.machine_count()
        );
        for (target, entry) in self.registry.entries.iter() {
            info!(
                "[CLIENT] TargetBusID: {} State: {} Url: {}",
                BusAddr::format(*target),
                entry.state,
                entry.endpoint
            );
        }
    }

    fn connect(&mut self, target: BusId, now: u64) {
        let Some(entry) = self.registry.entries.get_mut(&target) else {
            return;
        };
        entry.last_active_ms = now;
        if entry.connect(&self.factory) {
            entry.state = ConnectionState::Connecting;
            info!("[CLIENT] Connecting to {} at {}", BusAddr::format(target), entry.endpoint);
        } else {
            entry.state = ConnectionState::Reconnecting;
            self.stats.update_stats(StatsEvent::ConnectFailures, 1);
            warn!(
                "[CLIENT] Could not start connection to {} at {}, retrying in {}s",
                BusAddr::format(target),
                entry.endpoint,
                self.config.reconnect_interval
            );
        }
    }

    fn process_reconnect(&mut self, target: BusId, now: u64) {
        let Some(entry) = self.registry.entries.get(&target) else {
            return;
        };
        if now < entry.last_active_ms.saturating_add(self.config.reconnect_interval_ms()) {
            return;
        }
        warn!("[CLIENT] Reconnecting to {} at {}", BusAddr::format(target), entry.endpoint);
        self.stats.update_stats(StatsEvent::ReconnectAttempts, 1);
        self.connect(target, now);
    }

    fn enter_reconnecting(&mut self, target: BusId, now: u64) {
        let Some(entry) = self.registry.entries.get_mut(&target) else {
            return;
        };
        entry.shutdown_transport();
        entry.state = ConnectionState::Reconnecting;
        entry.last_active_ms = now;
    }

    fn process_connection(&mut self, target: BusId, now: u64) {
        let max_messages = self.config.max_messages_per_tick;
        let mut events = Vec::new();
        let mut messages = Vec::new();
        {
            let Some(entry) = self.registry.entries.get_mut(&target) else {
                return;
            };
            let Some(transport) = entry.transport.as_mut() else {
                warn!("[CLIENT] Connection to {} has no transport", BusAddr::format(target));
                self.enter_reconnecting(target, now);
                return;
            };
            transport.update();
            while let Some(event) = transport.poll_event() {
                events.push(event);
            }
            while messages.len() < max_messages {
                match transport.poll_message() {
                    Some(message) => messages.push(message),
                    None => break,
                }
            }
        }

        for event in events {
            self.handle_event(target, event, now);
        }
        for message in messages {
            self.dispatch(message);
        }

        match self.state_of(target) {
            Some(ConnectionState::Connected) => self.keepalive(target, now),
            Some(ConnectionState::Disconnected) => self.enter_reconnecting(target, now),
            _ => {}
        }
    }

    /// Ring and peer index are updated before any event handler runs. A
    /// repeated connect for the live session changes nothing.
    fn handle_event(&mut self, target: BusId, event: NetEvent, now: u64) {
        let weight = self.config.ring_weight;
        let Some(entry) = self.registry.entries.get_mut(&target) else {
            return;
        };
        if event.bus_id != target {
            debug!("[CLIENT] Event for {} arrived on connection to {}", BusAddr::format(event.bus_id), BusAddr::format(target));
        }

        match event.event_type {
            NetEventType::Connected => {
                if entry.is_connected() && entry.session_id == Some(event.session_id) {
                    debug!("[CLIENT] Repeated connect event from {} session: {}, ignored", BusAddr::format(target), event.session_id);
                    return;
                }
                let ip = if event.ip.is_empty() { entry.endpoint.ip.clone() } else { event.ip.clone() };
                let port = entry.endpoint.port;
                if !entry.is_connected() {
                    self.stats.update_stats(StatsEvent::ConnectionsActive, 1);
                }
                entry.state = ConnectionState::Connected;
                entry.session_id = Some(event.session_id);
                entry.last_active_ms = now;
                self.ring.insert(MachineNode::with_weight(target, &ip, port, weight));
                self.registry.links.insert(target, PeerLink::new(target, event.session_id, &ip, port));
                self.stats.update_stats(StatsEvent::Connects, 1);
                info!(
                    "[CLIENT] Connected to {} ip: {} session: {}",
                    BusAddr::format(target),
                    ip,
                    event.session_id
                );
            }
            NetEventType::Disconnected => {
                match entry.state {
                    ConnectionState::Connected => {
                        self.stats.update_stats(StatsEvent::ConnectionsActive, -1);
                        self.stats.update_stats(StatsEvent::Disconnects, 1);
                        error!(
                            "[CLIENT] Disconnected from {} ip: {} session: {}",
                            BusAddr::format(target),
                            event.ip,
                            event.session_id
                        );
                    }
                    _ => {
                        self.stats.update_stats(StatsEvent::ConnectFailures, 1);
                        warn!(
                            "[CLIENT] Connection to {} at {} failed, retrying in {}s",
                            BusAddr::format(target),
                            entry.endpoint,
                            self.config.reconnect_interval
                        );
                    }
                }
                entry.state = ConnectionState::Disconnected;
                entry.session_id = None;
                self.ring.erase(target);
                self.registry.links.remove(&target);
            }
        }

        let view = ClusterView::new(&self.ring, &self.registry.links);
        self.dispatcher.fire_event(&event, &view);

        if event.event_type == NetEventType::Connected {
            self.send_report(target);
        }
    }

    fn dispatch(&mut self, message: MessageEnvelope) {
        match self.dispatcher.dispatch(&message) {
            Ok(()) => {
                self.stats.update_stats(StatsEvent::MessagesDispatched, 1);
            }
            Err(e) => {
                self.stats.update_stats(StatsEvent::MessagesUnroutable, 1);
                error!("[CLIENT] {} (session {}, {} bytes), dropped", e, message.session_id, message.payload.len());
            }
        }
    }

    fn keepalive(&mut self, target: BusId, now: u64) {
        let interval = self.config.keepalive_interval_ms();
        let Some(entry) = self.registry.entries.get_mut(&target) else {
            return;
        };
        if now < entry.last_active_ms.saturating_add(interval) {
            return;
        }
        entry.last_active_ms = now;
        self.send_report(target);
    }

    fn send_report(&mut self, target: BusId) -> bool {
        let report = ServerReport::new(
            self.self_bus_id,
            self.online_count,
            &self.config.public_url,
            self.config.max_connection,
            self.logic_status,
        );
        let body = match report.to_bytes(self.config.report_encoding) {
            Ok(body) => body,
            Err(e) => {
                error!("[CLIENT] Could not encode server report: {}", e);
                return false;
            }
        };
        match self.send_frame(target, SERVER_REPORT_MSG_ID, 0, &body) {
            Ok(()) => {
                self.stats.update_stats(StatsEvent::ReportsSent, 1);
                debug!("[CLIENT] Sent server report to {}", BusAddr::format(target));
                true
            }
            Err(e) => {
                warn!("[CLIENT] Server report to {} not sent: {}", BusAddr::format(target), e);
                false
            }
        }
    }

    /// Bodies the receiving `FrameDecoder` would refuse are rejected here.
    fn send_frame(&mut self, target: BusId, msg_id: MsgId, actor_id: u64, body: &[u8]) -> Result<(), MeshError> {
        if body.len() > MAX_BODY_LEN {
            warn!("[CLIENT] Message {} to {} refused, body of {} bytes", msg_id, BusAddr::format(target), body.len());
            return Err(MeshError::Frame(format!(
                "body of {} bytes exceeds limit of {}",
                body.len(),
                MAX_BODY_LEN
            )));
        }
        let entry = self
            .registry
            .entries
            .get_mut(&target)
            .ok_or_else(|| MeshError::PeerNotFound(BusAddr::format(target)))?;
        let session_id = match (entry.state, entry.session_id) {
            (ConnectionState::Connected, Some(session_id)) => session_id,
            _ => return Err(MeshError::NotConnected(BusAddr::format(target))),
        };
        let head_length = entry.head_length;
        let transport = entry
            .transport
            .as_mut()
            .ok_or_else(|| MeshError::NotConnected(BusAddr::format(target)))?;
        let frame = MsgHead::encode_frame(head_length, msg_id, actor_id, body);
        if transport.send(&frame, session_id) {
            Ok(())
        } else {
            Err(MeshError::SendFailed(BusAddr::format(target)))
        }
    }
}
