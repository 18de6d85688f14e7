//! Presentation layer: terminal handling, theming and widgets.

pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use theme::RatatuiTheme;
