mod command;
pub mod user;

pub use command::*;
