use std::sync::Arc;
use log::{debug, info, warn};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::runtime::Handle;
use crate::bus::structs::bus_addr::BusAddr;
use crate::bus::types::BusId;
use crate::net::enums::head_length::HeadLength;
use crate::net::structs::frame_decoder::FrameDecoder;
use crate::net::structs::message_envelope::MessageEnvelope;
use crate::net::structs::net_event::NetEvent;
use crate::net::traits::transport::Transport;
use crate::net::types::SessionId;
use crate::transport::structs::session_queues::SessionQueues;
use crate::transport::structs::tcp_client::TcpClient;

const READ_BUFFER_SIZE: usize = 64 * 1024;

impl TcpClient {
    pub fn new(runtime: Handle) -> TcpClient {
        TcpClient {
            runtime,
            queues: Arc::new(SessionQueues::new()),
            session_id: 0,
            task: None,
        }
    }

    pub fn is_started(&self) -> bool {
        self.task.is_some()
    }
}

async fn run_session(queues: Arc<SessionQueues>, head_length: HeadLength, target_bus_id: BusId, address: String, ip: String, session_id: SessionId) {
    let stream = match TcpStream::connect(&address).await {
        Ok(stream) => stream,
        Err(e) => {
            warn!("[TRANSPORT TCP] Connect to {} ({}) failed: {}", BusAddr::format(target_bus_id), address, e);
            queues.events.push(NetEvent::disconnected(target_bus_id, session_id, &ip));
            return;
        }
    };
    if let Err(e) = stream.set_nodelay(true) {
        debug!("[TRANSPORT TCP] Could not set TCP_NODELAY on {}: {}", address, e);
    }
    let (mut reader, mut writer) = stream.into_split();

    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<Vec<u8>>();
    *queues.sender.write() = Some(tx);
    queues.events.push(NetEvent::connected(target_bus_id, session_id, &ip));
    info!("[TRANSPORT TCP] Session {} up with {}", session_id, address);

    let write_handle = tokio::spawn(async move {
        while let Some(data) = rx.recv().await {
            if writer.write_all(&data).await.is_err() {
                break;
            }
        }
    });

    let mut decoder = FrameDecoder::new(head_length);
    let mut buffer = vec![0u8; READ_BUFFER_SIZE];
    loop {
        match reader.read(&mut buffer).await {
            Ok(0) => {
                debug!("[TRANSPORT TCP] {} closed session {}", address, session_id);
                break;
            }
            Ok(read) => {
                decoder.push(&buffer[..read]);
                if queues.push_frames(&mut decoder, session_id, "TRANSPORT TCP").is_err() {
                    break;
                }
            }
            Err(e) => {
                warn!("[TRANSPORT TCP] Read from {} failed: {}", address, e);
                break;
            }
        }
    }

    write_handle.abort();
    *queues.sender.write() = None;
    queues.events.push(NetEvent::disconnected(target_bus_id, session_id, &ip));
}

impl Transport for TcpClient {
    fn start_client(&mut self, head_length: HeadLength, target_bus_id: BusId, ip: &str, port: u16, ipv6: bool) -> bool {
        if self.is_started() {
            warn!("[TRANSPORT TCP] Session {} already started", self.session_id);
            return false;
        }
        let address = if ipv6 { format!("[{}]:{}", ip, port) } else { format!("{}:{}", ip, port) };
        self.session_id = SessionQueues::next_session_id();
        self.task = Some(self.runtime.spawn(run_session(
            self.queues.clone(),
            head_length,
            target_bus_id,
            address,
            ip.to_string(),
            self.session_id,
        )));
        true
    }

    /// I/O runs on the runtime; nothing to pump here.
    fn update(&mut self) {}

    fn shutdown(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!("[TRANSPORT TCP] Session {} shut down", self.session_id);
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

impl Drop for TcpClient {
    fn drop(&mut self) {
        self.shutdown();
    }
}
