pub mod collaborator;
mod input;
pub mod password;
pub mod repository;
mod result;
mod root;

pub use collaborator::*;
pub use input::*;
pub use result::*;
pub use root::*;
