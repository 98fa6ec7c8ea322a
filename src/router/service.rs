use super::{RouteTable, RouterOptions};
use crate::errors::{RouterError, RouterResult};
use crate::route::{Route, RouteId, RouteMatch, RouteRequest};
use parking_lot::RwLock;
use std::sync::Arc;
use std::sync::OnceLock;

#[derive(Debug)]
struct RouterState<C> {
    table: RouteTable<C>,
    readonly: OnceLock<Arc<RouteTable<C>>>,
}

impl<C> RouterState<C> {
    fn new(options: RouterOptions) -> Self {
        Self {
            table: RouteTable::new(Some(options)),
            readonly: OnceLock::new(),
        }
    }
}

/// A route table shared between threads.
///
/// Routes are registered while the router is mutable; [`Router::seal`]
/// compiles every route and freezes the table into a read-only snapshot that
/// any number of threads can dispatch against.
#[derive(Debug)]
pub struct Router<C> {
    inner: RwLock<RouterState<C>>,
}

impl<C> Router<C> {
    pub fn new(options: Option<RouterOptions>) -> Self {
        let state = RouterState::new(options.unwrap_or_default());
        Self {
            inner: RwLock::new(state),
        }
    }

    pub fn add(&self, route: Route<C>) -> RouterResult<RouteId> {
        let mut guard = self.inner.write();

        if guard.readonly.get().is_some() {
            return Err(RouterError::AddWhileSealed {
                path: route.uri().to_string(),
            });
        }

        guard.table.add(route)
    }

    /// Exclusive access to the table for helper-based registration.
    pub fn configure<R>(
        &self,
        configure: impl FnOnce(&mut RouteTable<C>) -> RouterResult<R>,
    ) -> RouterResult<R> {
        let mut guard = self.inner.write();

        if guard.readonly.get().is_some() {
            return Err(RouterError::ConfigureWhileSealed);
        }

        configure(&mut guard.table)
    }

    /// Freezes the table. Sealing twice is a no-op.
    pub fn seal(&self) -> RouterResult<()> {
        let mut guard = self.inner.write();

        if guard.readonly.get().is_some() {
            return Ok(());
        }

        for route in guard.table.routes() {
            route.compile()?;
        }

        let table = std::mem::take(&mut guard.table);
        tracing::debug!(routes = table.len(), "router sealed");
        let _ = guard.readonly.set(Arc::new(table));
        Ok(())
    }

    pub fn is_sealed(&self) -> bool {
        self.inner.read().readonly.get().is_some()
    }

    pub fn get_readonly(&self) -> RouterResult<Arc<RouteTable<C>>> {
        let guard = self.inner.read();

        match guard.readonly.get() {
            Some(table) => Ok(table.clone()),
            None => Err(RouterError::ReadOnlyUnavailable),
        }
    }

    /// Dispatches `request` and hands the match to `on_match`.
    ///
    /// Before sealing this holds the read lock for the duration of the call.
    pub fn dispatch_with<R>(
        &self,
        request: &RouteRequest<'_>,
        on_match: impl FnOnce(RouteMatch<'_, C>) -> R,
    ) -> Option<R> {
        let guard = self.inner.read();

        match guard.readonly.get() {
            Some(table) => {
                let table = Arc::clone(table);
                drop(guard);
                table.dispatch(request).map(on_match)
            }
            None => guard.table.dispatch(request).map(on_match),
        }
    }
}
