//! View stack and routing.
//!
//! The launcher is always at the bottom of the stack. Navigating to a tool
//! replaces everything above it, so the stack is at most two views deep.

use thiserror::Error;
use tjd_types::Route;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("Unknown route: {route}")]
    UnknownRoute { route: String },
    #[error("No view to return to")]
    EmptyStack,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stack: vec![Route::Home],
        }
    }

    #[must_use]
    pub fn current(&self) -> Route {
        self.stack.last().copied().unwrap_or(Route::Home)
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    #[must_use]
    pub fn views(&self) -> &[Route] {
        &self.stack
    }

    /// Navigate by path. An unknown path redirects to the launcher and is reported.
    pub fn go(&mut self, path: &str) -> Result<Route, NavigationError> {
        match path.parse::<Route>() {
            Ok(route) => {
                self.show(route);
                Ok(route)
            }
            Err(err) => {
                tracing::error!("{err}");
                self.show(Route::Home);
                Err(NavigationError::UnknownRoute { route: err.0 })
            }
        }
    }

    pub fn show(&mut self, route: Route) {
        self.stack.clear();
        self.stack.push(Route::Home);
        if route != Route::Home {
            self.stack.push(route);
        }
        tracing::debug!(route = route.path(), "Navigated");
    }

    /// Drop the top view and return to the one below it.
    pub fn pop_view(&mut self) -> Result<Route, NavigationError> {
        if self.stack.len() <= 1 {
            return Err(NavigationError::EmptyStack);
        }
        self.stack.pop();
        let top = self.current();
        self.show(top);
        Ok(top)
    }
}
