use shared::ViewId;
use tracing::{debug, info};

/// Result of a `navigate_to` call. Navigation never fails; a gated request
/// leaves the current view untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    Moved { from: ViewId, to: ViewId },
    Unchanged,
    /// The view belongs to the authenticated area and nobody is logged in.
    RequiresLogin { requested: ViewId },
    /// The view belongs to the public area and a session is active.
    RequiresLogout { requested: ViewId },
    /// A booking submission is in flight on the current screen.
    BookingPending { requested: ViewId },
}

impl NavigationOutcome {
    pub fn moved(self) -> bool {
        matches!(self, NavigationOutcome::Moved { .. })
    }
}

/// Owns the current view and the authentication flag.
///
/// Gating is applied when navigating, so `current_view` always names a view
/// the session may render: public views while logged out, the rest while
/// logged in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRouter {
    current: ViewId,
    authenticated: bool,
}

impl Default for ViewRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewRouter {
    pub fn new() -> Self {
        Self::starting_at(ViewId::Pricing)
    }

    /// Unauthenticated router opened on `view`; gated views fall back to pricing.
    pub fn starting_at(view: ViewId) -> Self {
        let current = if view.is_public() {
            view
        } else {
            ViewId::Pricing
        };
        Self {
            current,
            authenticated: false,
        }
    }

    pub fn current_view(&self) -> ViewId {
        self.current
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn can_enter(&self, view: ViewId) -> bool {
        view.is_public() != self.authenticated
    }

    pub fn navigate_to(&mut self, view: ViewId) -> NavigationOutcome {
        if view == self.current {
            return NavigationOutcome::Unchanged;
        }
        if !self.can_enter(view) {
            let outcome = if self.authenticated {
                NavigationOutcome::RequiresLogout { requested: view }
            } else {
                NavigationOutcome::RequiresLogin { requested: view }
            };
            debug!(requested = %view, current = %self.current, "navigation gated");
            return outcome;
        }

        let from = std::mem::replace(&mut self.current, view);
        info!(from = %from, to = %view, "view changed");
        NavigationOutcome::Moved { from, to: view }
    }

    /// Opens the session and lands on the dashboard, whatever was showing.
    pub fn login(&mut self) -> ViewId {
        self.authenticated = true;
        self.current = ViewId::Dashboard;
        info!("session opened");
        self.current
    }

    /// Closes the session and returns to pricing.
    pub fn logout(&mut self) -> ViewId {
        self.authenticated = false;
        self.current = ViewId::Pricing;
        info!("session closed");
        self.current
    }
}

#[cfg(test)]
#[path = "tests/router_tests.rs"]
mod tests;
