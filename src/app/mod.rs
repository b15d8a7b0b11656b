// Application layer: terminal commands and the interactive session.

pub mod command;
pub mod session;

pub use command::Command;
pub use session::Session;
