//! Detection service HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use base64::Engine as _;
use reqwest::Client;
use tracing::{debug, warn};

use crate::error::{DetectorError, DetectorResult};
use crate::types::{
    DetectFacesResponse, DetectRequest, HealthResponse, ModerationLabel, ModerationResponse,
};
use crate::FaceDetector;
use faceframe_models::NormalizedFace;

/// Configuration for the detector client.
#[derive(Debug, Clone)]
pub struct DetectorConfig {
    /// Base URL of the detection service
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8002".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl DetectorConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("DETECTOR_SERVICE_URL")
                .unwrap_or_else(|_| "http://localhost:8002".to_string()),
            timeout: Duration::from_secs(
                std::env::var("DETECTOR_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
        }
    }
}

/// HTTP client for the face-detection service.
pub struct HttpFaceDetector {
    http: Client,
    config: DetectorConfig,
}

impl HttpFaceDetector {
    /// Create a new detector client.
    pub fn new(config: DetectorConfig) -> DetectorResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(DetectorError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> DetectorResult<Self> {
        Self::new(DetectorConfig::from_env())
    }

    /// Check if the detection service is healthy.
    pub async fn health_check(&self) -> DetectorResult<bool> {
        let url = format!("{}/health", self.config.base_url);

        match self.http.get(&url).send().await {
            Ok(response) if response.status().is_success() => {
                let health: HealthResponse = response.json().await?;
                Ok(health.status == "healthy" || health.status == "ok")
            }
            Ok(response) => {
                warn!("Detector health check failed: {}", response.status());
                Ok(false)
            }
            Err(e) => {
                warn!("Detector health check error: {}", e);
                Ok(false)
            }
        }
    }

    async fn post_image<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        image: &[u8],
        min_confidence: Option<f32>,
    ) -> DetectorResult<T> {
        let url = format!("{}/{}", self.config.base_url, endpoint);
        let request = DetectRequest {
            image: base64::engine::general_purpose::STANDARD.encode(image),
            min_confidence,
        };

        debug!(url = %url, bytes = image.len(), "Sending image to detection service");

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(DetectorError::Network)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DetectorError::RequestFailed(format!(
                "detection service returned {}: {}",
                status, body
            )));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl FaceDetector for HttpFaceDetector {
    async fn detect_faces(&self, image: &[u8]) -> DetectorResult<Vec<NormalizedFace>> {
        let response: DetectFacesResponse = self.post_image("detect-faces", image, None).await?;

        debug!(faces = response.faces.len(), "Face detection complete");
        Ok(response.faces.into_iter().map(|f| f.bounding_box).collect())
    }

    async fn detect_moderation(
        &self,
        image: &[u8],
        min_confidence: f32,
    ) -> DetectorResult<Vec<ModerationLabel>> {
        let response: ModerationResponse = self
            .post_image("detect-moderation", image, Some(min_confidence))
            .await?;

        Ok(response.labels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> HttpFaceDetector {
        HttpFaceDetector::new(DetectorConfig {
            base_url: server.uri(),
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    #[test]
    fn test_config_defaults() {
        let config = DetectorConfig::default();
        assert_eq!(config.base_url, "http://localhost:8002");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[tokio::test]
    async fn test_detect_faces_parses_boxes() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/detect-faces"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "faces": [
                    {
                        "bounding_box": {"left": 0.1, "top": 0.2, "width": 0.3, "height": 0.4},
                        "confidence": 99.1
                    }
                ]
            })))
            .mount(&server)
            .await;

        let faces = client_for(&server).detect_faces(b"fake image").await.unwrap();
        assert_eq!(faces.len(), 1);
        assert!((faces[0].left - 0.1).abs() < f64::EPSILON);
        assert!((faces[0].height - 0.4).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_detect_faces_empty_is_ok() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/detect-faces"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"faces": []})),
            )
            .mount(&server)
            .await;

        let faces = client_for(&server).detect_faces(b"fake image").await.unwrap();
        assert!(faces.is_empty());
    }

    #[tokio::test]
    async fn test_server_error_is_request_failed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/detect-faces"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .detect_faces(b"fake image")
            .await
            .unwrap_err();
        assert!(matches!(err, DetectorError::RequestFailed(_)));
    }

    #[tokio::test]
    async fn test_detect_moderation_parses_labels() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/detect-moderation"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "labels": [
                    {"name": "Explicit Nudity", "parent_name": null, "confidence": 87.5}
                ]
            })))
            .mount(&server)
            .await;

        let labels = client_for(&server)
            .detect_moderation(b"fake image", 50.0)
            .await
            .unwrap();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].name, "Explicit Nudity");
    }
}
