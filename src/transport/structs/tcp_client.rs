use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use crate::net::types::SessionId;
use crate::transport::structs::session_queues::SessionQueues;

pub struct TcpClient {
    pub runtime: Handle,
    pub queues: Arc<SessionQueues>,
    pub session_id: SessionId,
    pub task: Option<JoinHandle<()>>,
}
