mod consts;
mod encoding;
mod model_helpers;
mod models;
mod scramble;
mod update;

pub use consts::*;
pub use encoding::BoardKey;
pub use models::{Board, MoveDirection, MoveUpdate, Orientation, UserAction, Vec2, Vehicle};
pub use scramble::scramble;
pub use update::{collides_backward, collides_forward, step, try_slide};
