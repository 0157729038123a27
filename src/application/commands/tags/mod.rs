// src/application/commands/tags/mod.rs
mod create;
mod rename;
mod service;

pub use create::CreateTagCommand;
pub use rename::RenameTagCommand;
pub use service::TagCommandService;
