use std::sync::Arc;

use super::{PacError, ProxyScheme, ProxySelection, ResolveReport, ResolveRequest, Result};
use crate::ports::PacEnginePort;

/// Orchestrates one proxy decision: delegate to the engine, vet its
/// answer, fold everything into a report.
#[derive(Clone)]
pub struct ResolveService {
    engine: Arc<dyn PacEnginePort>,
}

impl ResolveService {
    pub fn new(engine: Arc<dyn PacEnginePort>) -> Self {
        Self { engine }
    }

    /// Run one evaluation. Engine failures land in the report, never in
    /// the process exit status.
    pub async fn resolve(&self, request: &ResolveRequest) -> ResolveReport {
        let outcome = self
            .engine
            .find_proxy(&request.pac_source, &request.target_url)
            .await
            .and_then(Self::vet_selection);

        match outcome {
            Ok(selection) => ResolveReport::success(selection),
            Err(e) => ResolveReport::failure(e),
        }
    }

    // A non-empty selection must cover every scheme; an engine that
    // answers for only one of them produced an unusable decision.
    fn vet_selection(selection: ProxySelection) -> Result<ProxySelection> {
        if selection.is_empty() {
            return Ok(selection);
        }

        for scheme in ProxyScheme::ALL.iter() {
            if selection.get(*scheme).is_none() {
                return Err(PacError::MalformedSelection(format!(
                    "missing {} endpoint",
                    scheme
                )));
            }
        }

        Ok(selection)
    }
}
