//! Console front end: move input, board rendering and the session loop.

mod input;
mod render;
mod session;

pub use input::{Console, MoveInputError, parse_move};
pub use session::{Scoreboard, Session, SessionError, wants_another};
