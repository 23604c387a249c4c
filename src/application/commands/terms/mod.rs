// src/application/commands/terms/mod.rs
mod create;
mod delete;
mod service;
mod update;

pub use create::CreateTermCommand;
pub use delete::DeleteTermCommand;
pub use service::TermCommandService;
pub use update::UpdateTermCommand;
