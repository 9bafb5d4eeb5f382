pub mod partition_messages;

pub use partition_messages::*;
