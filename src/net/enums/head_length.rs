use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Wire header layout used on a connection.
///
/// `cs` is the short client header, `ss` the server-to-server header that
/// also carries an actor id.
#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum HeadLength {
    cs,
    #[default]
    ss,
}
