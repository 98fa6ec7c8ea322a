use super::{Parameters, Route, RouteId};

/// A route together with the parameters it extracted from a request.
#[derive(Debug)]
pub struct RouteMatch<'r, C> {
    route: &'r Route<C>,
    parameters: Parameters,
}

impl<'r, C> Clone for RouteMatch<'r, C> {
    fn clone(&self) -> Self {
        Self {
            route: self.route,
            parameters: self.parameters.clone(),
        }
    }
}

impl<'r, C> RouteMatch<'r, C> {
    pub fn new(route: &'r Route<C>, parameters: Parameters) -> Self {
        Self { route, parameters }
    }

    pub fn route(&self) -> &'r Route<C> {
        self.route
    }

    pub fn id(&self) -> RouteId {
        self.route.id()
    }

    pub fn callback(&self) -> &'r C {
        self.route.callback()
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn parameters_mut(&mut self) -> &mut Parameters {
        &mut self.parameters
    }

    pub fn into_parameters(self) -> Parameters {
        self.parameters
    }

    pub fn matches(&self) -> impl Iterator<Item = (&str, &str)> {
        self.parameters.matches()
    }
}

impl<'r, C> From<&'r Route<C>> for RouteMatch<'r, C> {
    fn from(route: &'r Route<C>) -> Self {
        Self::new(route, Parameters::new())
    }
}
