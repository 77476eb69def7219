//! Core domain types for TJD-Toolkit.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

mod platform;
mod route;
mod theme;
pub mod ui;

pub use platform::Platform;
pub use route::{Route, UnknownRouteError, route_path_for_tool};
pub use theme::ThemeMode;

/// Round to two decimal places, the precision every speed figure is shown with.
///
/// Exact halves round to even, so `0.125` becomes `0.12`.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
