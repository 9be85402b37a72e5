use crate::transport::structs::tcp_client::TcpClient;
use crate::transport::structs::web_socket_client::WebSocketClient;

/// One variant per supported protocol.
pub enum NetTransport {
    Tcp(TcpClient),
    Ws(WebSocketClient),
}
