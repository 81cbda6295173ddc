use crate::config::ApiConfig;
use crate::errors::FetchError;
use crate::model::{RunDetail, RunList, RunSummary};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CACHE_CONTROL};
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

pub const API_KEY_HEADER: &str = "x-api-key";
pub const PROJECT_ID_HEADER: &str = "x-project-id";

/// Read access to evaluation runs.
#[async_trait]
pub trait RunsApi: Send + Sync {
    async fn fetch_runs(&self) -> Result<Vec<RunSummary>, FetchError>;
    async fn fetch_run(&self, run_id: &str) -> Result<RunDetail, FetchError>;
    fn describe(&self) -> String;
}

/// Talks to the eval backend over HTTP. Each call is exactly one GET:
/// no retries, no timeout, nothing cached.
pub struct HttpRunsApi {
    base: Url,
    client: reqwest::Client,
}

impl HttpRunsApi {
    pub fn new(cfg: &ApiConfig) -> anyhow::Result<Self> {
        let base = Url::parse(&cfg.api_url)
            .map_err(|e| anyhow::anyhow!("invalid api url {:?}: {}", cfg.api_url, e))?;
        if base.cannot_be_a_base() {
            anyhow::bail!("invalid api url {:?}: not a base url", cfg.api_url);
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
        if let Some(key) = &cfg.api_key {
            let mut v = HeaderValue::from_str(key)
                .map_err(|_| anyhow::anyhow!("api key contains invalid header characters"))?;
            v.set_sensitive(true);
            headers.insert(API_KEY_HEADER, v);
        }
        if let Some(project) = &cfg.project_id {
            let v = HeaderValue::from_str(project)
                .map_err(|_| anyhow::anyhow!("project id contains invalid header characters"))?;
            headers.insert(PROJECT_ID_HEADER, v);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self { base, client })
    }

    fn runs_url(&self, tail: Option<&str>) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segs) = url.path_segments_mut() {
            segs.pop_if_empty().extend(["v1", "evals", "runs"]);
            if let Some(id) = tail {
                segs.push(id);
            }
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        let url_str = url.to_string();
        tracing::debug!(event = "api_get", url = %url_str);

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url_str.clone(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url_str,
            });
        }

        let body = resp.bytes().await.map_err(|source| FetchError::Transport {
            url: url_str.clone(),
            source,
        })?;

        serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
            url: url_str,
            source,
        })
    }
}

#[async_trait]
impl RunsApi for HttpRunsApi {
    async fn fetch_runs(&self) -> Result<Vec<RunSummary>, FetchError> {
        let list: RunList = self.get_json(self.runs_url(None)).await?;
        for run in list.runs.iter().filter(|r| !r.is_consistent()) {
            warn_inconsistent(run);
        }
        tracing::debug!(event = "runs_fetched", count = list.runs.len());
        Ok(list.runs)
    }

    async fn fetch_run(&self, run_id: &str) -> Result<RunDetail, FetchError> {
        let run: RunDetail = self.get_json(self.runs_url(Some(run_id))).await?;
        let summary = run.summary();
        if !summary.is_consistent() {
            warn_inconsistent(&summary);
        }
        Ok(run)
    }

    fn describe(&self) -> String {
        self.base.to_string()
    }
}

fn warn_inconsistent(run: &RunSummary) {
    tracing::warn!(
        event = "run_invariant_violated",
        run_id = %run.id,
        passed_cases = run.passed_cases,
        total_cases = run.total_cases,
        "passed_cases exceeds total_cases"
    );
}

/// Serves a fixed set of runs from memory.
#[derive(Debug, Clone, Default)]
pub struct StaticRunsApi {
    summaries: Vec<RunSummary>,
    details: HashMap<String, RunDetail>,
    fail_with: Option<u16>,
}

impl StaticRunsApi {
    pub fn new(details: Vec<RunDetail>) -> Self {
        let summaries = details.iter().map(RunDetail::summary).collect();
        let details = details.into_iter().map(|d| (d.id.clone(), d)).collect();
        Self {
            summaries,
            details,
            fail_with: None,
        }
    }

    /// Every call fails with the given HTTP status.
    pub fn failing(status: u16) -> Self {
        Self {
            fail_with: Some(status),
            ..Self::default()
        }
    }

    fn check(&self, path: &str) -> Result<(), FetchError> {
        match self.fail_with {
            Some(status) => Err(FetchError::Status {
                status,
                url: format!("static://{}", path),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl RunsApi for StaticRunsApi {
    async fn fetch_runs(&self) -> Result<Vec<RunSummary>, FetchError> {
        self.check("v1/evals/runs")?;
        Ok(self.summaries.clone())
    }

    async fn fetch_run(&self, run_id: &str) -> Result<RunDetail, FetchError> {
        let path = format!("v1/evals/runs/{}", run_id);
        self.check(&path)?;
        self.details
            .get(run_id)
            .cloned()
            .ok_or_else(|| FetchError::Status {
                status: 404,
                url: format!("static://{}", path),
            })
    }

    fn describe(&self) -> String {
        "static".to_string()
    }
}
