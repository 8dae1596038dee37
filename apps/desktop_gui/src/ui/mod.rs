//! UI layer for desktop GUI: app shell, search widget, result cards, theme.

pub mod app;
pub mod page_shell;
pub mod profile_card;
pub mod search_widget;
pub mod theme;

pub use app::DesktopGuiApp;
