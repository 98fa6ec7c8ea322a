use super::RouteTable;
use super::table::GroupScope;
use crate::enums::HttpMethod;
use crate::errors::RouterResult;
use crate::route::{Route, RouteId};

fn collect<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: ToString,
{
    values.into_iter().map(|value| value.to_string()).collect()
}

/// Route builder handed to [`RouteTable::group`] closures.
///
/// Routes created through the verb helpers get the group prefix and any
/// defaults set so far. Groups do not stack: a nested [`RouteGroup::group`]
/// sees only its own prefix, and once it returns this group's prefix and
/// defaults are gone as well.
#[derive(Debug)]
pub struct RouteGroup<'t, C> {
    table: &'t mut RouteTable<C>,
    scope: Option<GroupScope>,
}

impl<'t, C> RouteGroup<'t, C> {
    pub(crate) fn new(table: &'t mut RouteTable<C>, scope: GroupScope) -> Self {
        Self {
            table,
            scope: Some(scope),
        }
    }

    pub fn prefix(&self) -> Option<&str> {
        self.scope.as_ref().map(|scope| scope.prefix.as_str())
    }

    pub fn table(&self) -> &RouteTable<C> {
        self.table
    }

    pub fn case_sensitive(&mut self, enable: bool) -> &mut Self {
        if let Some(scope) = self.scope.as_mut() {
            scope.case_sensitive = Some(enable);
        }
        self
    }

    pub fn scheme<I, S>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        if let Some(scope) = self.scope.as_mut() {
            scope.scheme = collect(values);
        }
        self
    }

    pub fn host<I, S>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        if let Some(scope) = self.scope.as_mut() {
            scope.host = collect(values);
        }
        self
    }

    pub fn port<I, S>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        if let Some(scope) = self.scope.as_mut() {
            scope.port = collect(values);
        }
        self
    }

    /// Adds a prebuilt route as-is; group defaults only shape helper-created routes.
    pub fn add(&mut self, route: Route<C>) -> RouterResult<RouteId> {
        self.table.add(route)
    }

    pub fn http<I, S>(&mut self, methods: I, uri: &str, callback: C) -> RouterResult<&mut Route<C>>
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        let methods = super::table::parse_methods(methods, uri)?;
        self.table
            .insert_prepared(methods, uri, callback, self.scope.as_ref())
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

    pub fn group<F>(&mut self, prefix: &str, configure: F) -> RouterResult<&mut Self>
    where
        F: FnOnce(&mut RouteGroup<'_, C>) -> RouterResult<()>,
    {
        let outcome = self.table.group(prefix, configure).map(|_| ());
        self.scope = None;
        outcome?;
        Ok(self)
    }
}
