use crate::net::enums::head_length::HeadLength;

pub const CS_HEAD_LENGTH: usize = 6;
pub const SS_HEAD_LENGTH: usize = 14;

impl HeadLength {
    pub fn size(&self) -> usize {
        match self {
            HeadLength::cs => CS_HEAD_LENGTH,
            HeadLength::ss => SS_HEAD_LENGTH,
        }
    }
}
