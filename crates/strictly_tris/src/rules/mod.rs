//! Pure rule checks over a [`Board`](crate::Board).

mod draw;
mod win;

pub use draw::is_tie;
pub use win::{WINNING_LINES, completes_line, winning_line};
