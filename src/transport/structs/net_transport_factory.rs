use tokio::runtime::Handle;

#[derive(Debug, Clone)]
pub struct NetTransportFactory {
    pub runtime: Handle,
}
