//! UI layer: the fact card shell, background palette, and transitions.

pub mod app;
pub mod theme;
pub mod transitions;

pub use app::FactWidgetApp;
