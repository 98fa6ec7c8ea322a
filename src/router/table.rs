use super::{RouteGroup, RouterOptions};
use crate::enums::HttpMethod;
use crate::errors::{RouterError, RouterResult};
use crate::path::{join_prefix, normalize_prefix, normalize_uri};
use crate::route::{Route, RouteId, RouteMatch, RouteRequest};

/// Defaults a group hands to the routes it creates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct GroupScope {
    pub prefix: String,
    pub case_sensitive: Option<bool>,
    pub scheme: Vec<String>,
    pub host: Vec<String>,
    pub port: Vec<String>,
}

impl GroupScope {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: normalize_prefix(prefix),
            ..Default::default()
        }
    }
}

/// Parses method tokens; `None` means any method.
pub(crate) fn parse_methods<I, S>(methods: I, uri: &str) -> RouterResult<Option<Vec<HttpMethod>>>
where
    I: IntoIterator<Item = S>,
    S: ToString,
{
    let mut parsed = Vec::new();
    for token in methods {
        let method = token.to_string().parse::<HttpMethod>()?;
        if !parsed.contains(&method) {
            parsed.push(method);
        }
    }

    if parsed.is_empty() {
        return Err(RouterError::EmptyMethods {
            path: uri.to_string(),
        });
    }
    if parsed.contains(&HttpMethod::Any) {
        return Ok(None);
    }
    Ok(Some(parsed))
}

/// Routes in the order they are tried; the first match wins.
#[derive(Debug, Clone)]
pub struct RouteTable<C> {
    routes: Vec<Route<C>>,
    options: RouterOptions,
}

impl<C> Default for RouteTable<C> {
    fn default() -> Self {
        Self {
            routes: Vec::new(),
            options: RouterOptions::default(),
        }
    }
}

impl<C> RouteTable<C> {
    pub fn new(options: Option<RouterOptions>) -> Self {
        Self {
            routes: Vec::new(),
            options: options.unwrap_or_default(),
        }
    }

    pub fn options(&self) -> &RouterOptions {
        &self.options
    }

    pub fn routes(&self) -> &[Route<C>] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn contains(&self, id: RouteId) -> bool {
        self.routes.iter().any(|route| route.id() == id)
    }

    pub fn route(&self, id: RouteId) -> Option<&Route<C>> {
        self.routes.iter().find(|route| route.id() == id)
    }

    pub fn route_mut(&mut self, id: RouteId) -> Option<&mut Route<C>> {
        self.routes.iter_mut().find(|route| route.id() == id)
    }

    /// Appends `route` unless a route with the same identity is already present.
    ///
    /// The pattern is compiled here so configuration errors surface at
    /// registration rather than at the first dispatch.
    pub fn add(&mut self, route: Route<C>) -> RouterResult<RouteId> {
        let id = route.id();
        if self.contains(id) {
            tracing::debug!(route = %id, uri = route.uri(), "route already registered");
            return Ok(id);
        }

        route.compile()?;
        tracing::debug!(route = %id, uri = route.uri(), "route registered");
        self.routes.push(route);
        Ok(id)
    }

    pub fn http<I, S>(&mut self, methods: I, uri: &str, callback: C) -> RouterResult<&mut Route<C>>
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        let methods = parse_methods(methods, uri)?;
        self.insert_prepared(methods, uri, callback, None)
    }

    pub fn get(&mut self, uri: &str, callback: C) -> RouterResult<&mut Route<C>> {
        self.http([HttpMethod::Get], uri, callback)
    }

    pub fn head(&mut self, uri: &str, callback: C) -> RouterResult<&mut Route<C>> {
        self.http([HttpMethod::Head], uri, callback)
    }

    pub fn post(&mut self, uri: &str, callback: C) -> RouterResult<&mut Route<C>> {
        self.http([HttpMethod::Post], uri, callback)
    }

    pub fn put(&mut self, uri: &str, callback: C) -> RouterResult<&mut Route<C>> {
        self.http([HttpMethod::Put], uri, callback)
    }

    pub fn patch(&mut self, uri: &str, callback: C) -> RouterResult<&mut Route<C>> {
        self.http([HttpMethod::Patch], uri, callback)
    }

    pub fn delete(&mut self, uri: &str, callback: C) -> RouterResult<&mut Route<C>> {
        self.http([HttpMethod::Delete], uri, callback)
    }

    pub fn options_route(&mut self, uri: &str, callback: C) -> RouterResult<&mut Route<C>> {
        self.http([HttpMethod::Options], uri, callback)
    }

    pub fn any(&mut self, uri: &str, callback: C) -> RouterResult<&mut Route<C>> {
        self.http([HttpMethod::Any], uri, callback)
    }

    pub(crate) fn insert_prepared(
        &mut self,
        methods: Option<Vec<HttpMethod>>,
        uri: &str,
        callback: C,
        scope: Option<&GroupScope>,
    ) -> RouterResult<&mut Route<C>> {
        let (uri, case_sensitive) = match scope {
            Some(scope) => (
                join_prefix(&scope.prefix, uri),
                scope.case_sensitive.unwrap_or(self.options.case_sensitive),
            ),
            None => (normalize_uri(uri).into_owned(), self.options.case_sensitive),
        };

        let mut route = Route::new(&uri, callback)?;
        route.case_sensitive(case_sensitive);
        if let Some(methods) = methods {
            route.with_method(methods);
        }
        if let Some(scope) = scope {
            route
                .with_scheme(&scope.scheme)
                .with_host(&scope.host)
                .with_port(&scope.port);
        }
        route.compile()?;

        tracing::debug!(route = %route.id(), uri = route.uri(), "route registered");
        let idx = self.routes.len();
        self.routes.push(route);
        Ok(&mut self.routes[idx])
    }

    /// Runs `configure` with a group whose routes share `prefix` and the
    /// defaults set on the group. The defaults end with the closure.
    pub fn group<F>(&mut self, prefix: &str, configure: F) -> RouterResult<&mut Self>
    where
        F: FnOnce(&mut RouteGroup<'_, C>) -> RouterResult<()>,
    {
        let mut group = RouteGroup::new(self, GroupScope::new(prefix));
        configure(&mut group)?;
        Ok(self)
    }

    /// First route, in insertion order, that matches `request`.
    pub fn dispatch(&self, request: &RouteRequest<'_>) -> Option<RouteMatch<'_, C>> {
        let found = self
            .routes
            .iter()
            .find_map(|route| route.matched(request));

        match &found {
            Some(matched) => {
                tracing::debug!(path = request.path, route = %matched.id(), "route dispatched")
            }
            None => tracing::debug!(path = request.path, "no route matched"),
        }
        found
    }
}
