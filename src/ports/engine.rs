use crate::domain::{ProxySelection, Result};
use async_trait::async_trait;

/// Port for the PAC evaluation engine.
///
/// Engine contract for degenerate inputs:
/// - An empty `pac_source` means "no PAC configured" and answers DIRECT
///   for every scheme instead of failing.
/// - An empty or unparsable `target_url` is an evaluation error; a PAC
///   script needs a URL and host to decide anything.
#[async_trait]
pub trait PacEnginePort: Send + Sync {
    /// Evaluate the PAC script and answer one endpoint per scheme.
    async fn find_proxy(&self, pac_source: &str, target_url: &str) -> Result<ProxySelection>;
}
