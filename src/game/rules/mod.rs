//! Game rules for Tricky.
//!
//! Pure functions over move sets and boards, kept apart from the
//! turn state machine so they can be swapped or tested alone.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WINNING_TRIPLES, WinnerPredicate, has_winning_line, winning_triple};
