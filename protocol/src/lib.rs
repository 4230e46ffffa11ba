use thiserror::Error;

mod tests;

pub mod event;
pub mod fields;
pub mod request;

pub use event::{FeedEvent, parse_event};
pub use fields::{Actor, Details, HpStatus, Side, Stat};
pub use request::{RequestMon, RequestSide, TeamRequest};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid line format: {0}")]
    InvalidFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Empty line")]
    EmptyLine,
}
