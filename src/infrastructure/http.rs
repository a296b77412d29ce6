// SPDX-License-Identifier: MPL-2.0
//! `reqwest` adapter implementing the [`HeadProbe`] port, plus the image
//! fetcher used for gallery thumbnails.
//!
//! [`HeadProbe`]: crate::application::port::HeadProbe

use crate::application::port::{HeadProbe, HeadResponse};
use crate::domain::error::VideoError;
use base64::{engine::general_purpose, Engine as _};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use std::time::Duration;

/// Upper bound for a single `HEAD` round trip.
const HEAD_TIMEOUT: Duration = Duration::from_secs(10);

/// Upper bound for downloading one thumbnail.
const IMAGE_TIMEOUT: Duration = Duration::from_secs(20);

/// Loads the raw bytes of an image from `source`.
///
/// `source` may be an `http(s)` URL, a base64 `data:` URI or a local path.
///
/// # Errors
///
/// - [`VideoError::NetworkError`] if the download fails or the server does
///   not answer with a success status
/// - [`VideoError::DecodeError`] for a malformed `data:` URI
/// - [`VideoError::LoadFailed`] if the local file cannot be read
pub async fn fetch_image(source: String) -> Result<Vec<u8>, VideoError> {
    if source.starts_with("http://") || source.starts_with("https://") {
        return download(&source).await;
    }

    if let Some(rest) = source.strip_prefix("data:") {
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| VideoError::DecodeError("data URI without payload".to_string()))?;
        if !header.ends_with(";base64") {
            return Err(VideoError::DecodeError(
                "only base64 data URIs are supported".to_string(),
            ));
        }
        return general_purpose::STANDARD
            .decode(payload)
            .map_err(|e| VideoError::DecodeError(e.to_string()));
    }

    let path = source.clone();
    tokio::task::spawn_blocking(move || std::fs::read(path))
        .await
        .map_err(|e| VideoError::LoadFailed(e.to_string()))?
        .map_err(|e| VideoError::LoadFailed(format!("{source}: {e}")))
}

async fn download(url: &str) -> Result<Vec<u8>, VideoError> {
    let client = reqwest::Client::builder()
        .user_agent(concat!("VideoShowcase/", env!("CARGO_PKG_VERSION")))
        .timeout(IMAGE_TIMEOUT)
        .build()
        .map_err(|e| VideoError::NetworkError(e.to_string()))?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| VideoError::NetworkError(e.to_string()))?;
    if !response.status().is_success() {
        return Err(VideoError::NetworkError(format!(
            "{url}: HTTP {}",
            response.status().as_u16()
        )));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| VideoError::NetworkError(e.to_string()))?;
    Ok(bytes.to_vec())
}

/// Credential-less `HEAD` client.
#[derive(Debug, Clone)]
pub struct ReqwestHeadProbe {
    client: reqwest::Client,
}

impl ReqwestHeadProbe {
    /// Builds a client with a bounded redirect policy and timeout.
    ///
    /// # Errors
    ///
    /// Returns [`VideoError::NetworkError`] if the TLS backend cannot be
    /// initialized.
    pub fn new() -> Result<Self, VideoError> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("VideoShowcase/", env!("CARGO_PKG_VERSION")))
            .timeout(HEAD_TIMEOUT)
            .build()
            .map_err(|e| VideoError::NetworkError(e.to_string()))?;
        Ok(Self { client })
    }

    /// Wraps an existing client.
    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl HeadProbe for ReqwestHeadProbe {
    fn head<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<HeadResponse, VideoError>> {
        async move {
            let response = self
                .client
                .head(url)
                .send()
                .await
                .map_err(|e| VideoError::NetworkError(e.to_string()))?;

            let content_type = response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string);

            Ok(HeadResponse {
                status: response.status().as_u16(),
                content_type,
            })
        }
        .boxed()
    }
}
