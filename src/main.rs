use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{CommandFactory, Parser};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use pacfind::adapters::{render_report, JsPacEngine};
use pacfind::config::ToolConfig;
use pacfind::domain::{ResolveRequest, ResolveService};

#[derive(Parser, Debug)]
#[clap(version = env!("PACFIND_VERSION"))]
pub struct Opts {
    /// Path or http(s) URL of the PAC file to evaluate
    #[clap(long, short = 'p', default_value = "")]
    pac_file: String,

    /// Target URL to resolve a proxy for
    #[clap(long, short = 'u', default_value = "")]
    url: String,

    /// Config file holding a default PAC source
    #[clap(long, short = 'c')]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout carries exactly one JSON line.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opts = Opts::parse();

    let request = match build_request(opts) {
        Some(request) => request,
        None => {
            let mut cmd = Opts::command();
            eprintln!("{}", cmd.render_help());
            return ExitCode::from(1);
        }
    };

    let service = ResolveService::new(Arc::new(JsPacEngine::new()));
    let report = service.resolve(&request).await;

    // Engine failures are part of the payload, not the exit status.
    println!("{}", render_report(&report));
    ExitCode::SUCCESS
}

fn build_request(opts: Opts) -> Option<ResolveRequest> {
    let mut pac_source = opts.pac_file;

    if pac_source.is_empty() {
        if let Some(path) = opts.config.as_ref() {
            match ToolConfig::load(path) {
                Ok(config) => pac_source = config.pac_file,
                Err(e) => debug!("ignoring unreadable config {}: {}", path.display(), e),
            }
        }
    }

    if pac_source.is_empty() && opts.url.is_empty() {
        return None;
    }

    Some(ResolveRequest {
        pac_source,
        target_url: opts.url,
    })
}
