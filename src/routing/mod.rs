//! Navigation seam and the route guard for protected views.

pub mod guard;
pub mod navigator;

pub use guard::{GuardOutcome, RouteGuard};
pub use navigator::{Navigator, NoopNavigator, Route};
