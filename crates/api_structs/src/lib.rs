mod notification;
mod options;
mod progress;
mod reminder;
mod status;

pub mod dtos {
    pub use crate::progress::dtos::*;
    pub use crate::reminder::dtos::*;
}

pub use crate::notification::api::*;
pub use crate::options::api::*;
pub use crate::progress::api::*;
pub use crate::reminder::api::*;
pub use crate::status::api::*;
