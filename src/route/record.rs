use hashbrown::HashSet;
use std::fmt;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};

use super::{ConstraintSet, Parameters, RouteMatch, RouteOptions, RouteRequest};
use crate::errors::RouterResult;
use crate::filter::{AlphaCase, FilterError, FilterRule, FilterSet, RegexFilter};
use crate::path::normalize_uri;
use crate::pattern::{CompiledPattern, VariableMarker, compile_markers, scan_markers};

static NEXT_ROUTE_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a route record, minted once per constructed route.
///
/// Clones of a route share its identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteId(u64);

impl RouteId {
    fn next() -> Self {
        Self(NEXT_ROUTE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single route: URI pattern, request constraints, variable filters and an
/// opaque callback payload.
///
/// The compiled pattern is built on first use and dropped by every call that
/// changes its inputs (URI, case sensitivity, match-anything variables).
#[derive(Debug, Clone)]
pub struct Route<C> {
    id: RouteId,
    uri: String,
    markers: Vec<VariableMarker>,
    callback: C,
    case_sensitive: bool,
    constraints: ConstraintSet,
    anything: HashSet<String>,
    filters: FilterSet,
    compiled: OnceLock<CompiledPattern>,
}

impl<C> Route<C> {
    pub fn new(uri: &str, callback: C) -> RouterResult<Self> {
        let uri = normalize_uri(uri).into_owned();
        let markers = scan_markers(&uri)?;
        Ok(Self {
            id: RouteId::next(),
            uri,
            markers,
            callback,
            case_sensitive: false,
            constraints: ConstraintSet::default(),
            anything: HashSet::new(),
            filters: FilterSet::new(),
            compiled: OnceLock::new(),
        })
    }

    pub fn with_options(uri: &str, callback: C, options: RouteOptions) -> RouterResult<Self> {
        let mut route = Self::new(uri, callback)?;
        if let Some(case_sensitive) = options.case_sensitive {
            route.case_sensitive(case_sensitive);
        }
        route
            .with_method(options.method)
            .with_scheme(options.scheme)
            .with_host(options.host)
            .with_port(options.port);
        Ok(route)
    }

    pub fn id(&self) -> RouteId {
        self.id
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Replaces the pattern; on error the route keeps its previous pattern.
    pub fn with_uri(&mut self, uri: &str) -> RouterResult<&mut Self> {
        let uri = normalize_uri(uri).into_owned();
        self.markers = scan_markers(&uri)?;
        self.uri = uri;
        self.invalidate();
        Ok(self)
    }

    pub fn callback(&self) -> &C {
        &self.callback
    }

    pub fn set_callback(&mut self, callback: C) -> &mut Self {
        self.callback = callback;
        self
    }

    pub fn into_callback(self) -> C {
        self.callback
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn case_sensitive(&mut self, enable: bool) -> &mut Self {
        if self.case_sensitive != enable {
            self.case_sensitive = enable;
            self.invalidate();
        }
        self
    }

    pub fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    pub fn method(&self) -> Option<&[String]> {
        self.constraints.method()
    }

    pub fn scheme(&self) -> Option<&[String]> {
        self.constraints.scheme()
    }

    pub fn host(&self) -> Option<&[String]> {
        self.constraints.host()
    }

    pub fn port(&self) -> Option<&[String]> {
        self.constraints.port()
    }

    pub fn with_method<I, S>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.constraints.set_method(values);
        self
    }

    pub fn with_scheme<I, S>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.constraints.set_scheme(values);
        self
    }

    pub fn with_host<I, S>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.constraints.set_host(values);
        self
    }

    pub fn with_port<I, S>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.constraints.set_port(values);
        self
    }

    /// Lets `key` capture any characters, path separators included.
    pub fn is_anything(&mut self, key: &str) -> RouterResult<&mut Self> {
        if key.is_empty() {
            return Err(FilterError::EmptyKey.into());
        }
        if self.anything.insert(key.to_string()) {
            self.invalidate();
        }
        Ok(self)
    }

    pub fn anything(&self) -> &HashSet<String> {
        &self.anything
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn with_filter(&mut self, key: &str, rule: FilterRule) -> RouterResult<&mut Self> {
        self.filters.add(key, rule)?;
        Ok(self)
    }

    pub fn is_graph(&mut self, key: &str) -> RouterResult<&mut Self> {
        self.with_filter(key, FilterRule::Graph)
    }

    pub fn is_alpha(&mut self, key: &str, case: AlphaCase) -> RouterResult<&mut Self> {
        self.with_filter(key, FilterRule::Alpha(case))
    }

    pub fn is_digit(&mut self, key: &str) -> RouterResult<&mut Self> {
        self.with_filter(key, FilterRule::Digit)
    }

    pub fn is_alnum(&mut self, key: &str, allow_underscore: bool) -> RouterResult<&mut Self> {
        self.with_filter(key, FilterRule::Alnum { allow_underscore })
    }

    pub fn is_ip(
        &mut self,
        key: &str,
        allow_ipv6: bool,
        allow_special: bool,
    ) -> RouterResult<&mut Self> {
        self.with_filter(
            key,
            FilterRule::Ip {
                allow_ipv6,
                allow_special,
            },
        )
    }

    pub fn is_email(&mut self, key: &str) -> RouterResult<&mut Self> {
        self.with_filter(key, FilterRule::Email)
    }

    pub fn is_zh(&mut self, key: &str) -> RouterResult<&mut Self> {
        self.with_filter(key, FilterRule::Zh)
    }

    pub fn is_zh_nick(&mut self, key: &str) -> RouterResult<&mut Self> {
        self.with_filter(key, FilterRule::ZhNick)
    }

    pub fn is_regex(&mut self, key: &str, regex: &str) -> RouterResult<&mut Self> {
        if key.is_empty() {
            return Err(FilterError::EmptyKey.into());
        }
        let filter = RegexFilter::new(key, regex)?;
        self.with_filter(key, FilterRule::Regex(filter))
    }

    /// The compiled pattern, built on demand and cached until the next
    /// configuration change.
    pub fn compile(&self) -> RouterResult<&CompiledPattern> {
        if let Some(compiled) = self.compiled.get() {
            return Ok(compiled);
        }
        let compiled =
            compile_markers(&self.uri, &self.markers, self.case_sensitive, &self.anything)?;
        Ok(self.compiled.get_or_init(|| compiled))
    }

    fn invalidate(&mut self) {
        self.compiled.take();
    }

    /// Matches constraints, pattern and filters; all three must pass.
    #[tracing::instrument(level = "trace", skip_all, fields(route = %self.uri, path = %request.path))]
    pub fn try_match(&self, request: &RouteRequest<'_>) -> Option<Parameters> {
        if !self.constraints.admits(request) {
            return None;
        }

        let compiled = match self.compile() {
            Ok(compiled) => compiled,
            Err(err) => {
                tracing::warn!(route = %self.uri, error = %err, "route pattern unavailable");
                return None;
            }
        };

        let path = normalize_uri(request.path);
        let captures = compiled.captures(&path)?;

        let mut parameters = Parameters::with_capacity(captures.len());
        for (var, value) in captures {
            match value {
                Some(value) => {
                    if !self.filters.accepts(&var.name, value, self.case_sensitive) {
                        tracing::trace!(variable = %var.name, value, "filter rejected value");
                        return None;
                    }
                    parameters.push(var.name.clone(), Some(value.to_string()));
                }
                None if var.optional => parameters.push(var.name.clone(), None),
                None => return None,
            }
        }

        Some(parameters)
    }

    pub fn matched<'r>(&'r self, request: &RouteRequest<'_>) -> Option<RouteMatch<'r, C>> {
        self.try_match(request)
            .map(|parameters| RouteMatch::new(self, parameters))
    }
}
