pub mod cli;
pub mod commands;
pub mod page;

pub use cli::{Commands, Wiquery};
