use std::fmt;
use crate::bus::enums::app_type::AppType;

impl AppType {
    pub fn from_u8(value: u8) -> AppType {
        match value {
            1 => AppType::Master,
            2 => AppType::World,
            3 => AppType::Game,
            4 => AppType::Login,
            5 => AppType::Proxy,
            other => AppType::Other(other),
        }
    }

    pub fn as_u8(&self) -> u8 {
        match self {
            AppType::Master => 1,
            AppType::World => 2,
            AppType::Game => 3,
            AppType::Login => 4,
            AppType::Proxy => 5,
            AppType::Other(value) => *value,
        }
    }
}

impl fmt::Display for AppType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppType::Master => write!(f, "master"),
            AppType::World => write!(f, "world"),
            AppType::Game => write!(f, "game"),
            AppType::Login => write!(f, "login"),
            AppType::Proxy => write!(f, "proxy"),
            AppType::Other(value) => write!(f, "app-{}", value),
        }
    }
}
