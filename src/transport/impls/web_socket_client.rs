use std::sync::Arc;
use futures_util::{SinkExt, StreamExt};
use log::{debug, info, warn};
use tokio::runtime::Handle;
use tokio_tungstenite::{connect_async, tungstenite::Message};
use crate::bus::structs::bus_addr::BusAddr;
use crate::bus::types::BusId;
use crate::net::enums::head_length::HeadLength;
use crate::net::structs::frame_decoder::FrameDecoder;
use crate::net::structs::message_envelope::MessageEnvelope;
use crate::net::structs::net_event::NetEvent;
use crate::net::traits::transport::Transport;
use crate::net::types::SessionId;
use crate::transport::structs::session_queues::SessionQueues;
use crate::transport::structs::web_socket_client::WebSocketClient;

impl WebSocketClient {
    pub fn new(runtime: Handle) -> WebSocketClient {
        WebSocketClient {
            runtime,
            queues: Arc::new(SessionQueues::new()),
            session_id: 0,
            task: None,
        }
    }

    pub fn is_started(&self) -> bool {
        self.task.is_some()
    }

    pub fn url(ip: &str, port: u16, ipv6: bool) -> String {
        if ipv6 {
            format!("ws://[{}]:{}/ws", ip, port)
        } else {
            format!("ws://{}:{}/ws", ip, port)
        }
    }
}

async fn run_session(queues: Arc<SessionQueues>, head_length: HeadLength, target_bus_id: BusId, url: String, ip: String, session_id: SessionId) {
    let ws_stream = match connect_async(url.as_str()).await {
        Ok((ws_stream, _)) => ws_stream,
        Err(e) => {
            warn!("[TRANSPORT WS] Connect to {} ({}) failed: {}", BusAddr::format(target_bus_id), url, e);
            queues.events.push(NetEvent::disconnected(target_bus_id, session_id, &ip));
            return;
        }
    };
    let (mut write, mut read) = ws_stream.split();

    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<Vec<u8>>();
    *queues.sender.write() = Some(tx);
    queues.events.push(NetEvent::connected(target_bus_id, session_id, &ip));
    info!("[TRANSPORT WS] Session {} up with {}", session_id, url);

    let write_handle = tokio::spawn(async move {
        while let Some(data) = rx.recv().await {
            if write.send(Message::Binary(data.into())).await.is_err() {
                break;
            }
        }
    });

    let mut decoder = FrameDecoder::new(head_length);
    while let Some(msg) = read.next().await {
        match msg {
            Ok(Message::Binary(data)) => {
                decoder.push(&data);
                if queues.push_frames(&mut decoder, session_id, "TRANSPORT WS").is_err() {
                    break;
                }
            }
            Ok(Message::Close(_)) => {
                debug!("[TRANSPORT WS] {} closed session {}", url, session_id);
                break;
            }
            Ok(Message::Text(_)) => {
                warn!("[TRANSPORT WS] Ignoring text message on session {}", session_id);
            }
            Err(e) => {
                warn!("[TRANSPORT WS] WebSocket error on {}: {}", url, e);
                break;
            }
            _ => {}
        }
    }

    write_handle.abort();
    *queues.sender.write() = None;
    queues.events.push(NetEvent::disconnected(target_bus_id, session_id, &ip));
}

impl Transport for WebSocketClient {
    fn start_client(&mut self, head_length: HeadLength, target_bus_id: BusId, ip: &str, port: u16, ipv6: bool) -> bool {
        if self.is_started() {
            warn!("[TRANSPORT WS] Session {} already started", self.session_id);
            return false;
        }
        self.session_id = SessionQueues::next_session_id();
        self.task = Some(self.runtime.spawn(run_session(
            self.queues.clone(),
            head_length,
            target_bus_id,
            WebSocketClient::url(ip, port, ipv6),
            ip.to_string(),
            self.session_id,
        )));
        true
    }

    fn update(&mut self) {}

    fn shutdown(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!("[TRANSPORT WS] Session {} shut down", self.session_id);
        }
        self.queues.close();
    }

    fn send(&mut self, data: &[u8], session_id: SessionId) -> bool {
        session_id == self.session_id && self.queues.send(data)
    }

    fn poll_event(&mut self) -> Option<NetEvent> {
        self.queues.events.pop()
    }

    fn poll_message(&mut self) -> Option<MessageEnvelope> {
        self.queues.messages.pop()
    }
}

impl Drop for WebSocketClient {
    fn drop(&mut self) {
        self.shutdown();
    }
}
