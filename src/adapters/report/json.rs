use crate::domain::ResolveReport;
use serde::Serialize;
use std::collections::BTreeMap;

/// Fallback printed when JSON encoding itself fails.
const MARSHAL_ERROR: &str = "marshal error";

#[derive(Serialize)]
struct JsonReport {
    #[serde(rename = "Proxy")]
    proxy: BTreeMap<String, String>,
    #[serde(rename = "Error")]
    error: String,
}

/// Render a report as the single-line JSON document printed on stdout.
///
/// `Proxy` and `Error` are filled independently: an empty selection stays
/// an empty object whether or not an error is present, and vice versa.
pub fn render_report(report: &ResolveReport) -> String {
    let proxy = report
        .selection
        .iter()
        .map(|(scheme, endpoint)| (scheme.to_string(), endpoint.to_string()))
        .collect();

    let error = report
        .error
        .as_ref()
        .map(|e| e.to_string())
        .unwrap_or_default();

    serde_json::to_string(&JsonReport { proxy, error })
        .unwrap_or_else(|_| MARSHAL_ERROR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PacError, ProxyEndpoint, ProxySelection};

    #[test]
    fn test_render_full_selection() {
        let report = ResolveReport::success(ProxySelection::uniform(ProxyEndpoint::Proxy {
            host_port: "1.2.3.4:8080".to_string(),
        }));

        assert_eq!(
            render_report(&report),
            r#"{"Proxy":{"http":"PROXY 1.2.3.4:8080","https":"PROXY 1.2.3.4:8080"},"Error":""}"#
        );
    }

    #[test]
    fn test_render_direct_selection() {
        let report = ResolveReport::success(ProxySelection::uniform(ProxyEndpoint::Direct));

        assert_eq!(
            render_report(&report),
            r#"{"Proxy":{"http":"DIRECT","https":"DIRECT"},"Error":""}"#
        );
    }

    #[test]
    fn test_render_failure_keeps_proxy_empty() {
        let report = ResolveReport::failure(PacError::EvaluationFailed("boom".to_string()));

        assert_eq!(
            render_report(&report),
            r#"{"Proxy":{},"Error":"PAC evaluation failed: boom"}"#
        );
    }

    #[test]
    fn test_render_empty_selection_without_error() {
        let report = ResolveReport::success(ProxySelection::new());

        assert_eq!(render_report(&report), r#"{"Proxy":{},"Error":""}"#);
    }

    #[test]
    fn test_render_is_pure() {
        let report = ResolveReport::success(ProxySelection::uniform(ProxyEndpoint::Direct));

        assert_eq!(render_report(&report), render_report(&report));
    }
}
