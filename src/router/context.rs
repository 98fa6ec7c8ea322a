use super::RouteTable;
use crate::route::{RouteMatch, RouteRequest};

/// Per-request holder of the "current" route.
///
/// Owned by the caller, so concurrent requests never share it.
#[derive(Debug)]
pub struct DispatchContext<'r, C> {
    current: Option<RouteMatch<'r, C>>,
}

impl<'r, C> Default for DispatchContext<'r, C> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<'r, C> DispatchContext<'r, C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets the current route, then records the first match, if any.
    pub fn dispatch(
        &mut self,
        table: &'r RouteTable<C>,
        request: &RouteRequest<'_>,
    ) -> Option<&RouteMatch<'r, C>> {
        self.current = table.dispatch(request);
        self.current.as_ref()
    }

    pub fn set_router(&mut self, matched: impl Into<RouteMatch<'r, C>>) -> &mut Self {
        self.current = Some(matched.into());
        self
    }

    pub fn forget_router(&mut self) -> &mut Self {
        self.current = None;
        self
    }

    pub fn router(&self) -> Option<&RouteMatch<'r, C>> {
        self.current.as_ref()
    }

    pub fn take_router(&mut self) -> Option<RouteMatch<'r, C>> {
        self.current.take()
    }
}
