use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogicStatus {
    #[default]
    Normal,
    Busy,
    Maintenance,
}
