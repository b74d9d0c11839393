use tracing::debug;

/// Navigation targets the client core can send the host to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
        }
    }
}

/// Redirect seam. The host's router (or test double) decides what a
/// navigation actually does; this layer only announces the target.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Navigator that only logs. Useful for headless tools that drive the
/// session without any view layer.
#[derive(Default)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn navigate(&self, route: Route) {
        debug!(path = route.path(), "Navigation requested");
    }
}
