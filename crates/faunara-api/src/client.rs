//! Service operations and their HTTP implementation

use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use serde_json::json;
use url::Url;

use faunara_core::prelude::*;
use faunara_core::{
    AttributeMap, ClassificationResponse, ContributionReceipt, ContributionRecord, ImageFile,
};

use crate::response::interpret_response;

/// Endpoints consumed by the client, relative to the service root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    ClassifyImage,
    ClassifyAttributes,
    Improve,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::ClassifyImage => "api/classify-image",
            Endpoint::ClassifyAttributes => "api/classify-attributes",
            Endpoint::Improve => "api/improve-faunara",
        }
    }

    /// Message used when a JSON failure body has no `error`
    pub fn failure_fallback(self) -> &'static str {
        match self {
            Endpoint::ClassifyImage => "Classification failed",
            Endpoint::ClassifyAttributes => "Attribute classification failed",
            Endpoint::Improve => "Failed to save animal",
        }
    }
}

/// The three operations of the FAUNARA service.
///
/// The TEA action layer is generic over this trait so flows can be exercised
/// without a network.
#[trait_variant::make(FaunaraApi: Send)]
pub trait LocalFaunaraApi {
    /// `POST /api/classify-image` (multipart, field `image`)
    async fn classify_image(&self, image: Option<&ImageFile>) -> Result<ClassificationResponse>;

    /// `POST /api/classify-attributes` (JSON `{"attributes": {...}}`)
    async fn classify_attributes(
        &self,
        attributes: &AttributeMap,
    ) -> Result<ClassificationResponse>;

    /// `POST /api/improve-faunara` (multipart)
    async fn improve(&self, record: &ContributionRecord) -> Result<ContributionReceipt>;
}

/// `reqwest`-backed [`FaunaraApi`] rooted at the service base URL
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpClient {
    /// Create a client for the service at `base_url`.
    ///
    /// A path on the base URL is kept: `http://host/faunara` resolves
    /// endpoints under `http://host/faunara/api/...`.
    pub fn new(base_url: &str) -> Result<Self> {
        let mut url = Url::parse(base_url).map_err(|e| Error::InvalidServerUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        if url.cannot_be_a_base() {
            return Err(Error::InvalidServerUrl {
                url: base_url.to_string(),
                reason: "not a hierarchical URL".to_string(),
            });
        }

        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("faunara/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL of an endpoint
    pub fn endpoint_url(&self, endpoint: Endpoint) -> Result<Url> {
        self.base_url
            .join(endpoint.path())
            .map_err(|e| Error::InvalidServerUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }

    async fn post<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        build: impl FnOnce(reqwest::RequestBuilder) -> reqwest::RequestBuilder,
    ) -> Result<T> {
        let url = self.endpoint_url(endpoint)?;
        debug!("POST {}", url);

        let response = build(self.http.post(url.clone()))
            .send()
            .await
            .map_err(|e| Error::network(e.to_string()))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = response
            .text()
            .await
            .map_err(|e| Error::network(e.to_string()))?;

        debug!("{} answered {} ({} bytes)", url, status, body.len());
        interpret_response(
            status,
            content_type.as_deref(),
            &body,
            endpoint.failure_fallback(),
        )
    }
}

fn image_part(image: &ImageFile) -> Result<Part> {
    Part::bytes(image.bytes.clone())
        .file_name(image.file_name.clone())
        .mime_str(image.mime_type())
        .map_err(|e| Error::unknown(format!("Invalid image type: {}", e)))
}

impl FaunaraApi for HttpClient {
    async fn classify_image(&self, image: Option<&ImageFile>) -> Result<ClassificationResponse> {
        let mut form = Form::new();
        if let Some(image) = image {
            form = form.part("image", image_part(image)?);
        }
        self.post(Endpoint::ClassifyImage, |req| req.multipart(form))
            .await
    }

    async fn classify_attributes(
        &self,
        attributes: &AttributeMap,
    ) -> Result<ClassificationResponse> {
        let body = json!({ "attributes": attributes });
        self.post(Endpoint::ClassifyAttributes, |req| req.json(&body))
            .await
    }

    async fn improve(&self, record: &ContributionRecord) -> Result<ContributionReceipt> {
        let mut form = Form::new()
            .text("name", record.name.clone())
            .text("habitat", record.habitat.clone())
            .text("facts", record.facts.clone())
            .text("attributes", record.attributes.to_json_string());
        if let Some(image) = record.image.as_ref().filter(|i| !i.is_empty()) {
            form = form.part("image", image_part(image)?);
        }
        self.post(Endpoint::Improve, |req| req.multipart(form)).await
    }
}
