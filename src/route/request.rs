/// Plain request facts a route is matched against.
///
/// Any of method, host, scheme and port may be left unset; a route that
/// constrains that axis then refuses the request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteRequest<'a> {
    pub path: &'a str,
    pub method: Option<&'a str>,
    pub host: Option<&'a str>,
    pub scheme: Option<&'a str>,
    pub port: Option<&'a str>,
}

impl<'a> RouteRequest<'a> {
    pub fn new(path: &'a str) -> Self {
        Self {
            path,
            ..Default::default()
        }
    }

    pub fn from_parts(
        path: &'a str,
        method: Option<&'a str>,
        host: Option<&'a str>,
        scheme: Option<&'a str>,
        port: Option<&'a str>,
    ) -> Self {
        Self {
            path,
            method,
            host,
            scheme,
            port,
        }
    }

    pub fn method(mut self, method: &'a str) -> Self {
        self.method = Some(method);
        self
    }

    pub fn host(mut self, host: &'a str) -> Self {
        self.host = Some(host);
        self
    }

    pub fn scheme(mut self, scheme: &'a str) -> Self {
        self.scheme = Some(scheme);
        self
    }

    pub fn port(mut self, port: &'a str) -> Self {
        self.port = Some(port);
        self
    }
}
