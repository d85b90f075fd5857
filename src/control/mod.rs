pub mod commands;

pub use commands::Command;
pub use commands::CommandError;
pub use commands::CommandSource;
