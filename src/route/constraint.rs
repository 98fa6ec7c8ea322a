use super::RouteRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Fold {
    Upper,
    Lower,
}

impl Fold {
    fn apply(self, value: &str) -> String {
        match self {
            Fold::Upper => value.to_ascii_uppercase(),
            Fold::Lower => value.to_ascii_lowercase(),
        }
    }
}

/// Builds a normalized allow-list; `None` means "match anything".
pub(crate) fn allow_list<I, S>(values: I, fold: Fold) -> Option<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: ToString,
{
    let list: Vec<String> = values
        .into_iter()
        .map(|value| value.to_string())
        .filter_map(|value| {
            let trimmed = value.trim();
            (!trimmed.is_empty()).then(|| fold.apply(trimmed))
        })
        .collect();
    (!list.is_empty()).then_some(list)
}

fn admits(list: Option<&[String]>, value: Option<&str>, fold: Fold) -> bool {
    let Some(list) = list else {
        return true;
    };
    let Some(value) = value else {
        return false;
    };
    let value = fold.apply(value.trim());
    list.iter().any(|entry| *entry == value)
}

/// Method, scheme, host and port allow-lists of a route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    method: Option<Vec<String>>,
    scheme: Option<Vec<String>>,
    host: Option<Vec<String>>,
    port: Option<Vec<String>>,
}

impl ConstraintSet {
    pub fn method(&self) -> Option<&[String]> {
        self.method.as_deref()
    }

    pub fn scheme(&self) -> Option<&[String]> {
        self.scheme.as_deref()
    }

    pub fn host(&self) -> Option<&[String]> {
        self.host.as_deref()
    }

    pub fn port(&self) -> Option<&[String]> {
        self.port.as_deref()
    }

    pub fn set_method<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.method = allow_list(values, Fold::Upper);
    }

    pub fn set_scheme<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.scheme = allow_list(values, Fold::Lower);
    }

    pub fn set_host<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.host = allow_list(values, Fold::Lower);
    }

    pub fn set_port<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.port = allow_list(values, Fold::Lower);
    }

    pub fn is_unconstrained(&self) -> bool {
        self.method.is_none() && self.scheme.is_none() && self.host.is_none() && self.port.is_none()
    }

    /// An unset axis admits anything; a set axis requires the request to
    /// carry a value contained in the list.
    pub fn admits(&self, request: &RouteRequest<'_>) -> bool {
        admits(self.method(), request.method, Fold::Upper)
            && admits(self.scheme(), request.scheme, Fold::Lower)
            && admits(self.host(), request.host, Fold::Lower)
            && admits(self.port(), request.port, Fold::Lower)
    }
}
