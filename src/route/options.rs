use serde::{Deserialize, Serialize};

/// Construction bundle for a single route. Empty lists mean "match anything".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RouteOptions {
    pub case_sensitive: Option<bool>,
    pub method: Vec<String>,
    pub scheme: Vec<String>,
    pub host: Vec<String>,
    pub port: Vec<String>,
}

impl RouteOptions {
    pub fn builder() -> RouteOptionsBuilder {
        RouteOptionsBuilder::default()
    }
}

fn collect<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: ToString,
{
    values.into_iter().map(|value| value.to_string()).collect()
}

#[derive(Debug, Default, Clone)]
pub struct RouteOptionsBuilder {
    options: RouteOptions,
}

impl RouteOptionsBuilder {
    pub fn case_sensitive(mut self, value: bool) -> Self {
        self.options.case_sensitive = Some(value);
        self
    }

    pub fn method<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.options.method = collect(values);
        self
    }

    pub fn scheme<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.options.scheme = collect(values);
        self
    }

    pub fn host<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.options.host = collect(values);
        self
    }

    pub fn port<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.options.port = collect(values);
        self
    }

    pub fn build(self) -> RouteOptions {
        self.options
    }
}
