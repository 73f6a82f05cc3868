pub mod init;
pub mod merge;
pub mod render;

pub use init::init_command;
pub use merge::merge_command;
pub use render::render_command;
