use serde::{Deserialize, Serialize};

/// Well-known values of the app type byte of a bus address.
///
/// Unknown bytes are kept as `Other` so that decoding never fails.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppType {
    Master,
    World,
    Game,
    Login,
    Proxy,
    Other(u8),
}
