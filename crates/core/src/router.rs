//! Router driver: resolves, guards and records navigations

use crate::config::NavigationConfig;
use crate::error::{NavigationError, Result};
use crate::guard::{GuardContext, NavigationDecision, NavigationGuard};
use crate::table::{Location, RouteTable};
use tracing::{debug, info};

/// A completed navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub location: Location,
    /// Path originally requested when the guard redirected
    pub redirected_from: Option<String>,
}

impl Navigation {
    pub fn was_redirected(&self) -> bool {
        self.redirected_from.is_some()
    }
}

/// Route table plus guard, with a history stack of visited locations
#[derive(Debug, Clone)]
pub struct Router {
    table: RouteTable,
    guard: NavigationGuard,
    max_redirects: usize,
    history: Vec<Location>,
}

impl Router {
    pub fn new(table: RouteTable, config: &NavigationConfig) -> Self {
        Self {
            table,
            guard: config.guard(),
            max_redirects: config.max_redirects,
            history: Vec::new(),
        }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn guard(&self) -> &NavigationGuard {
        &self.guard
    }

    pub fn current(&self) -> Option<&Location> {
        self.history.last()
    }

    /// Navigate to `url`, adding a history entry
    pub fn push(&mut self, url: &str, ctx: &mut GuardContext<'_>) -> Result<Navigation> {
        let navigation = self.run(url, ctx)?;
        self.history.push(navigation.location.clone());
        Ok(navigation)
    }

    /// Navigate to `url`, replacing the current history entry
    pub fn replace(&mut self, url: &str, ctx: &mut GuardContext<'_>) -> Result<Navigation> {
        let navigation = self.run(url, ctx)?;
        self.history.pop();
        self.history.push(navigation.location.clone());
        Ok(navigation)
    }

    /// Return to the previous location. History moves are not guarded.
    pub fn back(&mut self) -> Result<&Location> {
        if self.history.len() < 2 {
            return Err(NavigationError::HistoryEmpty);
        }
        self.history.pop();
        self.history.last().ok_or(NavigationError::HistoryEmpty)
    }

    /// Navigate to a named route
    pub fn push_named(
        &mut self,
        name: &str,
        params: &[(&str, &str)],
        ctx: &mut GuardContext<'_>,
    ) -> Result<Navigation> {
        let target = self.table.resolve_named(name, params)?;
        self.push(&target.full_path, ctx)
    }

    fn run(&self, url: &str, ctx: &mut GuardContext<'_>) -> Result<Navigation> {
        let mut target = self.table.resolve(url);
        let mut redirected_from = None;
        let mut hops = 0;

        loop {
            match self.guard.check(&target, ctx) {
                NavigationDecision::Proceed => {
                    debug!(path = %target.path, hops, "Navigation confirmed");
                    return Ok(Navigation {
                        location: target,
                        redirected_from,
                    });
                }
                NavigationDecision::Redirect(next) => {
                    hops += 1;
                    if hops > self.max_redirects {
                        return Err(NavigationError::RedirectLoop {
                            path: url.to_string(),
                            hops,
                        });
                    }
                    info!(from = %target.path, to = %next, "Navigation redirected");
                    redirected_from.get_or_insert_with(|| target.full_path.clone());
                    target = self.table.resolve(&next);
                }
            }
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(RouteTable::quiz_routes(), &NavigationConfig::default())
    }
}
