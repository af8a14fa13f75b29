mod status_message;

pub use status_message::{MessageKind, StatusMessage};
