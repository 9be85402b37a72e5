#![allow(dead_code)]
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use parking_lot::Mutex;
use busmesh::bus::types::BusId;
use busmesh::client::structs::client_service::ClientService;
use busmesh::common::structs::manual_clock::ManualClock;
use busmesh::config::structs::client_config::ClientConfig;
use busmesh::net::enums::head_length::HeadLength;
use busmesh::net::enums::protocol::Protocol;
use busmesh::net::structs::message_envelope::MessageEnvelope;
use busmesh::net::structs::msg_head::MsgHead;
use busmesh::net::structs::net_event::NetEvent;
use busmesh::net::traits::transport::Transport;
use busmesh::net::traits::transport_factory::TransportFactory;
use busmesh::net::types::{MsgId, SessionId};
use busmesh::protocol::enums::report_encoding::ReportEncoding;
use busmesh::protocol::structs::server_report::ServerReport;

pub const SELF_BUS: &str = "1.1.2.1";
pub const SELF_URL: &str = "tcp://10.0.0.1:9100";

/// What the test scripted for one peer, and what the service did to it.
#[derive(Default)]
pub struct FakePeer {
    pub fail_starts: bool,
    pub send_fails: bool,
    pub starts: usize,
    pub shutdowns: usize,
    pub updates: usize,
    pub events: VecDeque<NetEvent>,
    pub messages: VecDeque<MessageEnvelope>,
    pub sent: Vec<(Vec<u8>, SessionId)>,
}

/// Shared by every fake transport built from the same factory, keyed by the
/// target bus id the transport was started for.
#[derive(Clone, Default)]
pub struct FakeHub {
    pub peers: Arc<Mutex<HashMap<BusId, FakePeer>>>,
}

impl FakeHub {
    pub fn with_peer<R>(&self, bus_id: BusId, f: impl FnOnce(&mut FakePeer) -> R) -> R {
        let mut peers = self.peers.lock();
        f(peers.entry(bus_id).or_default())
    }

    pub fn connect(&self, bus_id: BusId, session_id: SessionId, ip: &str) {
        self.with_peer(bus_id, |peer| peer.events.push_back(NetEvent::connected(bus_id, session_id, ip)));
    }

    pub fn disconnect(&self, bus_id: BusId, session_id: SessionId, ip: &str) {
        self.with_peer(bus_id, |peer| peer.events.push_back(NetEvent::disconnected(bus_id, session_id, ip)));
    }

    pub fn push_message(&self, bus_id: BusId, msg_id: MsgId, payload: &[u8], session_id: SessionId) {
        self.with_peer(bus_id, |peer| {
            peer.messages.push_back(MessageEnvelope::new(msg_id, payload.to_vec(), session_id))
        });
    }

    pub fn fail_starts(&self, bus_id: BusId, fail: bool) {
        self.with_peer(bus_id, |peer| peer.fail_starts = fail);
    }

    pub fn starts(&self, bus_id: BusId) -> usize {
        self.with_peer(bus_id, |peer| peer.starts)
    }

    pub fn shutdowns(&self, bus_id: BusId) -> usize {
        self.with_peer(bus_id, |peer| peer.shutdowns)
    }

    pub fn sent(&self, bus_id: BusId) -> Vec<(Vec<u8>, SessionId)> {
        self.with_peer(bus_id, |peer| peer.sent.clone())
    }

    pub fn queued_messages(&self, bus_id: BusId) -> usize {
        self.with_peer(bus_id, |peer| peer.messages.len())
    }

    /// Server reports sent to the peer, decoded.
    pub fn reports(&self, bus_id: BusId) -> Vec<ServerReport> {
        self.sent(bus_id)
            .iter()
            .filter_map(|(frame, _)| {
                let head = MsgHead::decode(HeadLength::ss, frame).ok()?;
                if head.msg_id != busmesh::protocol::SERVER_REPORT_MSG_ID {
                    return None;
                }
                ServerReport::from_bytes(ReportEncoding::msgpack, &frame[HeadLength::ss.size()..]).ok()
            })
            .collect()
    }
}

pub struct FakeTransport {
    pub hub: FakeHub,
    pub target: Option<BusId>,
    pub closed: bool,
}

impl Transport for FakeTransport {
    fn start_client(&mut self, _head_length: HeadLength, target_bus_id: BusId, _ip: &str, _port: u16, _ipv6: bool) -> bool {
        self.target = Some(target_bus_id);
        self.hub.with_peer(target_bus_id, |peer| {
            peer.starts += 1;
            !peer.fail_starts
        })
    }

    fn update(&mut self) {
        if let Some(target) = self.target {
            self.hub.with_peer(target, |peer| peer.updates += 1);
        }
    }

    fn shutdown(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        if let Some(target) = self.target {
            self.hub.with_peer(target, |peer| peer.shutdowns += 1);
        }
    }

    fn send(&mut self, data: &[u8], session_id: SessionId) -> bool {
        match (self.closed, self.target) {
            (false, Some(target)) => self.hub.with_peer(target, |peer| {
                if peer.send_fails {
                    return false;
                }
                peer.sent.push((data.to_vec(), session_id));
                true
            }),
            _ => false,
        }
    }

    fn poll_event(&mut self) -> Option<NetEvent> {
        match (self.closed, self.target) {
            (false, Some(target)) => self.hub.with_peer(target, |peer| peer.events.pop_front()),
            _ => None,
        }
    }

    fn poll_message(&mut self) -> Option<MessageEnvelope> {
        match (self.closed, self.target) {
            (false, Some(target)) => self.hub.with_peer(target, |peer| peer.messages.pop_front()),
            _ => None,
        }
    }
}

pub struct FakeFactory {
    pub hub: FakeHub,
}

impl TransportFactory for FakeFactory {
    type Transport = FakeTransport;

    fn supports(&self, protocol: Protocol) -> bool {
        protocol != Protocol::udp
    }

    fn create(&self, protocol: Protocol) -> Option<FakeTransport> {
        if !self.supports(protocol) {
            return None;
        }
        Some(FakeTransport { hub: self.hub.clone(), target: None, closed: false })
    }
}

pub fn create_test_client_config() -> ClientConfig {
    ClientConfig::new(SELF_BUS, SELF_URL)
}

pub struct TestService {
    pub service: ClientService<FakeFactory>,
    pub hub: FakeHub,
    pub clock: Arc<ManualClock>,
}

pub fn create_test_service_with(config: ClientConfig) -> TestService {
    let hub = FakeHub::default();
    let clock = Arc::new(ManualClock::new(0));
    let service = ClientService::new(config, FakeFactory { hub: hub.clone() }, clock.clone())
        .expect("test client config is valid");
    TestService { service, hub, clock }
}

pub fn create_test_service() -> TestService {
    create_test_service_with(create_test_client_config())
}
