//! HTTP implementation of [`AnalysisService`]

use coderev_core::prelude::*;
use coderev_core::AnalyzeRequest;
use url::Url;

use crate::endpoint::ServiceEndpoint;
use crate::service::AnalysisService;

/// Talks to the analysis service over HTTP(S) with a JSON body.
///
/// One request per [`analyze`](AnalysisService::analyze) call. No retries:
/// the user re-submits after a failure.
#[derive(Debug, Clone)]
pub struct HttpAnalysisClient {
    client: reqwest::Client,
    url: Url,
}

impl HttpAnalysisClient {
    /// Build a client for `endpoint`.
    ///
    /// Fails only when the endpoint URL is invalid or the TLS backend cannot
    /// be initialized.
    pub fn new(endpoint: &ServiceEndpoint) -> Result<Self> {
        let url = endpoint.url()?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = endpoint.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::transport(format!("failed to build HTTP client: {}", e)))?;

        info!("Analysis endpoint: {}", url);
        Ok(Self { client, url })
    }

    /// Resolved analysis URL
    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl AnalysisService for HttpAnalysisClient {
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<serde_json::Value> {
        debug!(
            "POST {} (filename={}, {} bytes)",
            self.url,
            request.filename,
            request.content.len()
        );

        let response = self
            .client
            .post(self.url.clone())
            .json(request)
            .send()
            .await
            .map_err(describe_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::http_status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(describe_transport_error)?;
        let value: serde_json::Value = serde_json::from_slice(&body)
            .context(format!("Analysis service at {} sent a non-JSON body", self.url))?;
        trace!("Analysis response: {} bytes", body.len());
        Ok(value)
    }
}

fn describe_transport_error(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::transport(format!("request timed out: {}", e))
    } else if e.is_connect() {
        Error::transport(format!("could not connect: {}", e))
    } else {
        Error::transport(e.to_string())
    }
}
