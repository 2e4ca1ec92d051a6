pub mod check;
mod command_result;
pub mod init;
pub mod list;

pub use command_result::*;
