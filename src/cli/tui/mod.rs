pub mod theme;

pub use theme::{cheatsheet_theme, print_error, print_hint};
