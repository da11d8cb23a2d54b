use std::collections::BTreeMap;
use std::fmt;

use super::PacError;

/// The URL schemes a proxy selection answers for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ProxyScheme {
    Http,
    Https,
}

impl ProxyScheme {
    pub const ALL: [ProxyScheme; 2] = [ProxyScheme::Http, ProxyScheme::Https];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProxyScheme::Http => "http",
            ProxyScheme::Https => "https",
        }
    }
}

impl fmt::Display for ProxyScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single routing directive for one scheme. Its string form is the PAC
/// directive that appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProxyEndpoint {
    Direct,
    Proxy { host_port: String },
}

impl fmt::Display for ProxyEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProxyEndpoint::Direct => write!(f, "DIRECT"),
            ProxyEndpoint::Proxy { host_port } => write!(f, "PROXY {}", host_port),
        }
    }
}

/// Scheme to endpoint mapping produced by one engine call.
///
/// Backed by an ordered map so the serialized form is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProxySelection {
    endpoints: BTreeMap<ProxyScheme, ProxyEndpoint>,
}

impl ProxySelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// A selection answering the same endpoint for every scheme, the shape
    /// a single `FindProxyForURL` call produces.
    pub fn uniform(endpoint: ProxyEndpoint) -> Self {
        let mut selection = Self::new();
        for scheme in ProxyScheme::ALL.iter() {
            selection.insert(*scheme, endpoint.clone());
        }
        selection
    }

    pub fn insert(&mut self, scheme: ProxyScheme, endpoint: ProxyEndpoint) {
        self.endpoints.insert(scheme, endpoint);
    }

    pub fn get(&self, scheme: ProxyScheme) -> Option<&ProxyEndpoint> {
        self.endpoints.get(&scheme)
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ProxyScheme, &ProxyEndpoint)> {
        self.endpoints.iter()
    }
}

/// One invocation worth of input, read once and never mutated.
#[derive(Debug, Clone)]
pub struct ResolveRequest {
    pub pac_source: String,
    pub target_url: String,
}

/// Outcome of a proxy decision, independent of the process exit status.
///
/// An error always comes with an empty selection; an empty selection with
/// no error is a valid "no proxy needed" answer.
#[derive(Debug, Clone)]
pub struct ResolveReport {
    pub selection: ProxySelection,
    pub error: Option<PacError>,
}

impl ResolveReport {
    pub fn success(selection: ProxySelection) -> Self {
        Self {
            selection,
            error: None,
        }
    }

    pub fn failure(error: PacError) -> Self {
        Self {
            selection: ProxySelection::new(),
            error: Some(error),
        }
    }
}
