use super::MediaService;
use crate::error::ApiError;
use crate::models::{UploadKind, UploadResult};
use crate::{mime, Result};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncRead, AsyncReadExt};
use uuid::Uuid;

type AssetKey = (UploadKind, String);

/// In-memory stand-in for Cloudinary.
///
/// Mirrors the remote behavior that matters to callers: empty names get a
/// random public ID, and deleting an unknown asset fails with `not found`.
#[derive(Clone)]
pub struct MockMediaClient {
    assets: Arc<Mutex<HashMap<AssetKey, Vec<u8>>>>,
    cloud_name: String,
    upload_count: Arc<Mutex<usize>>,
    delete_count: Arc<Mutex<usize>>,
    should_fail: Arc<Mutex<bool>>,
}

impl MockMediaClient {
    pub fn new() -> Self {
        Self {
            assets: Arc::new(Mutex::new(HashMap::new())),
            cloud_name: "mock-cloud".to_string(),
            upload_count: Arc::new(Mutex::new(0)),
            delete_count: Arc::new(Mutex::new(0)),
            should_fail: Arc::new(Mutex::new(false)),
        }
    }

    pub fn with_cloud_name(mut self, cloud_name: String) -> Self {
        self.cloud_name = cloud_name;
        self
    }

    pub fn with_asset(self, kind: UploadKind, public_id: String, content: Vec<u8>) -> Self {
        self.assets
            .lock()
            .unwrap()
            .insert((kind, public_id), content);
        self
    }

    pub fn with_failure(self, should_fail: bool) -> Self {
        *self.should_fail.lock().unwrap() = should_fail;
        self
    }

    pub fn get_upload_count(&self) -> usize {
        *self.upload_count.lock().unwrap()
    }

    pub fn get_delete_count(&self) -> usize {
        *self.delete_count.lock().unwrap()
    }

    pub fn get_asset(&self, kind: UploadKind, public_id: &str) -> Option<Vec<u8>> {
        self.assets
            .lock()
            .unwrap()
            .get(&(kind, public_id.to_string()))
            .cloned()
    }

    fn check_failure(&self) -> Result<()> {
        if *self.should_fail.lock().unwrap() {
            return Err(ApiError::new("Mock failure").into());
        }
        Ok(())
    }

    fn delivery_url(&self, scheme: &str, kind: UploadKind, version: u64, file: &str) -> String {
        format!(
            "{}://res.cloudinary.com/{}/{}/upload/v{}/{}",
            scheme, self.cloud_name, kind, version, file
        )
    }
}

impl Default for MockMediaClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MediaService for MockMediaClient {
    async fn upload(
        &self,
        reader: &mut (dyn AsyncRead + Unpin + Send),
        name: &str,
        kind: UploadKind,
    ) -> Result<UploadResult> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data).await?;

        self.check_failure()?;
        *self.upload_count.lock().unwrap() += 1;

        let public_id = if name.is_empty() {
            Uuid::new_v4().simple().to_string()
        } else {
            name.to_string()
        };

        let created_at = Utc::now();
        let version = created_at.timestamp() as u64;
        let format = mime::format_for_content_type(mime::detect_content_type(&data));
        let file = format!("{}.{}", public_id, format);
        let bytes = data.len() as u64;

        self.assets
            .lock()
            .unwrap()
            .insert((kind, public_id.clone()), data);

        Ok(UploadResult {
            url: self.delivery_url("http", kind, version, &file),
            secure_url: self.delivery_url("https", kind, version, &file),
            public_id,
            version,
            signature: String::new(),
            width: 0,
            height: 0,
            format: format.to_string(),
            resource_type: kind.to_string(),
            created_at,
            bytes,
        })
    }

    async fn delete(&self, name: &str, kind: UploadKind) -> Result<()> {
        self.check_failure()?;
        *self.delete_count.lock().unwrap() += 1;

        match self.assets.lock().unwrap().remove(&(kind, name.to_string())) {
            Some(_) => Ok(()),
            None => Err(ApiError::new("not found").into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    #[tokio::test]
    async fn test_mock_upload_and_delete() {
        let client = MockMediaClient::new();

        let result = client
            .upload_image(&mut &PNG[..], "testimage")
            .await
            .unwrap();
        assert_eq!(result.public_id, "testimage");
        assert_eq!(result.format, "png");
        assert_eq!(result.bytes, PNG.len() as u64);
        assert_eq!(client.get_upload_count(), 1);
        assert_eq!(
            client.get_asset(UploadKind::Image, "testimage").as_deref(),
            Some(PNG)
        );

        client.delete_image("testimage").await.unwrap();
        assert_eq!(client.get_delete_count(), 1);
        assert!(client.get_asset(UploadKind::Image, "testimage").is_none());
    }

    #[tokio::test]
    async fn test_mock_assigns_random_public_id() {
        let client = MockMediaClient::new();

        let first = client.upload_image(&mut &PNG[..], "").await.unwrap();
        let second = client.upload_image(&mut &PNG[..], "").await.unwrap();

        assert!(!first.public_id.is_empty());
        assert_ne!(first.public_id, second.public_id);
    }

    #[tokio::test]
    async fn test_mock_kinds_are_separate() {
        let client =
            MockMediaClient::new().with_asset(UploadKind::Video, "clip".to_string(), vec![1]);

        let err = client.delete_image("clip").await.unwrap_err();
        assert_eq!(err.api_message(), Some("not found"));

        client.delete_video("clip").await.unwrap();
    }

    #[tokio::test]
    async fn test_mock_urls_use_cloud_name() {
        let client = MockMediaClient::new().with_cloud_name("demo".to_string());

        let result = client.upload_video(&mut &b"data"[..], "clip").await.unwrap();
        assert!(result
            .secure_url
            .starts_with("https://res.cloudinary.com/demo/video/upload/v"));
        assert!(result.url.ends_with("/clip.bin"));
        assert_eq!(result.resource_type, "video");
    }

    #[tokio::test]
    async fn test_mock_failure() {
        let client = MockMediaClient::new().with_failure(true);

        let err = client.upload_image(&mut &PNG[..], "x").await.unwrap_err();
        assert_eq!(err.to_string(), "Mock failure");
        assert_eq!(client.get_upload_count(), 0);
    }
}
