//! jQuery UI widgets and effects built on the statement builder

pub mod effects;
pub mod position;
pub mod progressbar;
pub mod resources;

pub use effects::{AjaxEffectBehavior, Effect, EffectSpeed};
pub use position::{Collision, Position, PositionOffset, PositionOptions};
pub use progressbar::ProgressBar;
