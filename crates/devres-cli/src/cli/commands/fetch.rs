//! `devres fetch <path>` – serve one resource into stdout or a file.

use anyhow::{Context, Result};
use devres_core::base_url;
use devres_core::config::{DevresConfig, FallbackMode};
use devres_core::resource::{FileResource, ServeRequest, WriteResponse};
use devres_core::transport::CurlTransport;
use devres_core::{FetchOutcome, RemoteResource, ResourceLocation};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct FetchArgs {
    pub path: String,
    pub content_type: String,
    pub fallback: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub base_url: Option<String>,
    pub no_fallback: bool,
}

impl FetchArgs {
    /// Fallback only applies when a bundled file is given and nothing disables it.
    pub(crate) fn fallback_mode(&self, cfg: &DevresConfig) -> FallbackMode {
        if self.no_fallback || self.fallback.is_none() {
            FallbackMode::NotFound
        } else {
            cfg.fallback_mode()
        }
    }
}

pub(crate) fn build_resource(cfg: &DevresConfig, args: &FetchArgs) -> RemoteResource {
    let base_url = args
        .base_url
        .clone()
        .unwrap_or_else(|| base_url::resolve_layered(cfg));
    let location = ResourceLocation::new(args.path.clone(), args.content_type.clone());
    let resource = match (&args.fallback, args.fallback_mode(cfg)) {
        (Some(file), FallbackMode::Delegate) => RemoteResource::new(
            &base_url,
            location,
            Arc::new(FileResource::new(file, args.content_type.clone())),
        ),
        _ => RemoteResource::without_fallback(&base_url, location),
    };
    resource.with_transport(Arc::new(CurlTransport::from_config(cfg)))
}

fn open_output(output: Option<&PathBuf>) -> Result<Box<dyn Write + Send>> {
    Ok(match output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("create {}", path.display()))?,
        )),
        None => Box::new(io::stdout()),
    })
}

pub async fn run_fetch(cfg: &DevresConfig, args: FetchArgs) -> Result<()> {
    let resource = build_resource(cfg, &args);
    let target = resource.target().to_string();
    let location = resource.location().clone();
    let writer = open_output(args.output.as_ref())?;
    let request = ServeRequest::get(args.path.clone());

    let (outcome, content_type) = tokio::task::spawn_blocking(move || {
        let mut response = WriteResponse::new(writer);
        let outcome = resource.fetch_into_response(&request, &mut response)?;
        Ok::<_, anyhow::Error>((outcome, response.content_type().map(str::to_string)))
    })
    .await
    .context("fetch task join")??;

    match outcome {
        FetchOutcome::Fetched { bytes } => {
            eprintln!("fetched {} bytes from {} ({})", bytes, target, location)
        }
        FetchOutcome::FellBack => eprintln!(
            "{} unreachable, served bundled {}",
            target,
            args.fallback
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()
        ),
        FetchOutcome::Empty => eprintln!("{} returned an empty resource", target),
        FetchOutcome::NotFound => anyhow::bail!("resource not found: {}", target),
    }
    if let Some(ct) = content_type {
        eprintln!("content-type: {}", ct);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(fallback: Option<&str>, no_fallback: bool) -> FetchArgs {
        FetchArgs {
            path: "/js/app.js".into(),
            content_type: "application/javascript".into(),
            fallback: fallback.map(PathBuf::from),
            output: None,
            base_url: Some("http://127.0.0.1:4000".into()),
            no_fallback,
        }
    }

    #[test]
    fn explicit_base_url_wins() {
        let res = build_resource(&DevresConfig::default(), &args(None, false));
        assert_eq!(res.target(), "http://127.0.0.1:4000/js/app.js");
    }

    #[test]
    fn fallback_requires_a_file() {
        let cfg = DevresConfig::default();
        assert_eq!(args(None, false).fallback_mode(&cfg), FallbackMode::NotFound);
        assert_eq!(
            args(Some("bundle/app.js"), false).fallback_mode(&cfg),
            FallbackMode::Delegate
        );
        assert!(build_resource(&cfg, &args(Some("bundle/app.js"), false)).has_fallback());
    }

    #[test]
    fn no_fallback_flag_and_config_disable_fallback() {
        let cfg = DevresConfig::default();
        assert!(!build_resource(&cfg, &args(Some("bundle/app.js"), true)).has_fallback());

        let cfg = DevresConfig {
            fallback_mode: Some(FallbackMode::NotFound),
            ..DevresConfig::default()
        };
        assert!(!build_resource(&cfg, &args(Some("bundle/app.js"), false)).has_fallback());
    }

    #[tokio::test]
    async fn fetch_writes_fallback_file_to_output() {
        let dir = tempfile::tempdir().unwrap();
        let bundled = dir.path().join("app.js");
        std::fs::write(&bundled, b"bundled()").unwrap();
        let out = dir.path().join("out.js");

        // Nothing listens on a released ephemeral port.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let args = FetchArgs {
            path: "/app.js".into(),
            content_type: "application/javascript".into(),
            fallback: Some(bundled),
            output: Some(out.clone()),
            base_url: Some(format!("http://127.0.0.1:{}", port)),
            no_fallback: false,
        };
        run_fetch(&DevresConfig::default(), args).await.unwrap();
        assert_eq!(std::fs::read(&out).unwrap(), b"bundled()");
    }
}
