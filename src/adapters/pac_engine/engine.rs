use super::evaluator::evaluate_pac;
use super::loader::load_pac_source;
use crate::domain::{PacError, ProxyEndpoint, ProxySelection, Result};
use crate::ports::PacEnginePort;
use async_trait::async_trait;
use log::debug;
use url::Url;

/// PAC engine backed by an embedded JavaScript sandbox.
#[derive(Default)]
pub struct JsPacEngine;

impl JsPacEngine {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PacEnginePort for JsPacEngine {
    async fn find_proxy(&self, pac_source: &str, target_url: &str) -> Result<ProxySelection> {
        if pac_source.is_empty() {
            debug!("no PAC source configured, answering DIRECT");
            return Ok(ProxySelection::uniform(ProxyEndpoint::Direct));
        }

        let target: Url = target_url
            .parse()
            .map_err(|e| PacError::InvalidUrl(format!("{}: {}", target_url, e)))?;

        let pac_script = load_pac_source(pac_source).await?;
        let endpoints = evaluate_pac(&pac_script, &target)?;

        // PAC scripts decide from the URL and host alone; the first
        // directive answers for both schemes.
        let first = endpoints
            .into_iter()
            .next()
            .ok_or_else(|| PacError::EvaluationFailed("no directives returned".to_string()))?;

        Ok(ProxySelection::uniform(first))
    }
}
