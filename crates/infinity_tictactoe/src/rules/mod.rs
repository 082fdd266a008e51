//! Game rules for infinity tic-tac-toe.
//!
//! Pure functions over board state. There is no draw rule: with at most
//! six pieces on nine squares the board never fills.

pub mod win;

pub use win::{WinningLine, winning_line_for};
