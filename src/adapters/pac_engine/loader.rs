use crate::domain::{PacError, Result};
use log::debug;
use tracing::info;

/// Fetch the PAC script body from a local path or an http(s) URL.
pub async fn load_pac_source(source: &str) -> Result<String> {
    if source.starts_with("http://") || source.starts_with("https://") {
        download_pac(source).await
    } else {
        read_pac_file(source)
    }
}

async fn download_pac(pac_url: &str) -> Result<String> {
    debug!("attempting to download PAC file at {}", pac_url);

    let pac_file = reqwest::ClientBuilder::new()
        .no_proxy()
        .build()
        .map_err(|e| PacError::PacUnavailable(format!("HTTP client error: {}", e)))?
        .get(pac_url)
        .send()
        .await
        .map_err(|e| PacError::PacUnavailable(format!("PAC download error: {}", e)))?
        .text()
        .await
        .map_err(|e| PacError::PacUnavailable(format!("PAC read error: {}", e)))?;

    info!("loaded PAC file from {} ({} bytes)", pac_url, pac_file.len());
    Ok(pac_file)
}

fn read_pac_file(path: &str) -> Result<String> {
    let pac_file = std::fs::read_to_string(path)
        .map_err(|e| PacError::PacUnavailable(format!("{}: {}", path, e)))?;

    debug!("loaded PAC file from {} ({} bytes)", path, pac_file.len());
    Ok(pac_file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_local_pac_file() {
        let path = std::env::temp_dir().join(format!("pacfind_loader_{}.pac", std::process::id()));
        std::fs::write(&path, "function FindProxyForURL(url, host) { return \"DIRECT\"; }")
            .expect("Failed to write PAC file");

        let body = load_pac_source(path.to_str().unwrap())
            .await
            .expect("Should load local PAC file");
        assert!(body.contains("FindProxyForURL"));

        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn test_load_missing_pac_file() {
        let err = load_pac_source("/nonexistent/pacfind.pac")
            .await
            .expect_err("Missing file should not load");

        match err {
            PacError::PacUnavailable(msg) => assert!(msg.contains("/nonexistent/pacfind.pac")),
            other => panic!("expected PacUnavailable, got {:?}", other),
        }
    }
}
