use crate::domain::{PacError, ProxyEndpoint, Result};
use js_sandbox::{JsValue, Script};
use url::Url;

/// Evaluate a PAC script for a target URL and return the endpoints it
/// names, in order.
///
/// The script runs with plain ECMAScript only. PAC helpers the script does
/// not define itself (`isInNet`, `dnsResolve`, ...) fail the evaluation.
pub fn evaluate_pac(pac_script: &str, target: &Url) -> Result<Vec<ProxyEndpoint>> {
    let mut script = Script::from_string(pac_script)
        .map_err(|e| PacError::EvaluationFailed(format!("PAC script error: {}", e)))?;

    let host = target.host_str().ok_or(PacError::MissingHost)?;

    let eval_result: JsValue = script
        .call("FindProxyForURL", (target.to_string(), host.to_string()))
        .map_err(|e| PacError::EvaluationFailed(format!("PAC execution error: {}", e)))?;

    Ok(parse_directives(&eval_result.to_string()))
}

/// Parse a `FindProxyForURL` return value such as
/// `"PROXY 10.0.0.1:8080; DIRECT"` into endpoints.
///
/// Unsupported directive types (SOCKS and friends) degrade to DIRECT, and
/// an empty directive list means DIRECT.
pub fn parse_directives(raw: &str) -> Vec<ProxyEndpoint> {
    let endpoints: Vec<ProxyEndpoint> = raw
        .replace('"', "")
        .split(';')
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(|v| {
            let parts: Vec<&str> = v.split_whitespace().collect();
            match parts.first() {
                Some(&"DIRECT") => ProxyEndpoint::Direct,
                Some(&"PROXY") => match parts.get(1) {
                    Some(proxy) => ProxyEndpoint::Proxy {
                        host_port: (*proxy).to_string(),
                    },
                    None => ProxyEndpoint::Direct,
                },
                _ => {
                    log::debug!("ignoring unsupported PAC directive: {}", v);
                    ProxyEndpoint::Direct
                }
            }
        })
        .collect();

    if endpoints.is_empty() {
        vec![ProxyEndpoint::Direct]
    } else {
        endpoints
    }
}
