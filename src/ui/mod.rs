//! Terminal UI: the board view, themes, and the event loop that animates
//! falling discs and paces the computer's replies.

mod app;
pub mod game_view;
pub mod theme;

pub use app::{App, DropAnimation};
pub use theme::Theme;
