//! Cloudinary upload and destroy operations
//!
//! [`MediaService`] is the seam between callers and the remote API. The
//! HTTP-backed [`Client`] signs and sends real requests; [`MockMediaClient`]
//! keeps assets in memory for tests.

pub mod client;
pub mod mock;
mod response;

pub use client::Client;
pub use mock::MockMediaClient;

use crate::models::{UploadKind, UploadResult};
use crate::Result;
use async_trait::async_trait;
use tokio::io::AsyncRead;

#[async_trait]
pub trait MediaService: Send + Sync {
    /// Uploads the full contents of `reader`. An empty `name` lets the service
    /// assign a random public ID.
    async fn upload(
        &self,
        reader: &mut (dyn AsyncRead + Unpin + Send),
        name: &str,
        kind: UploadKind,
    ) -> Result<UploadResult>;

    /// Deletes the asset with public ID `name`.
    async fn delete(&self, name: &str, kind: UploadKind) -> Result<()>;

    async fn upload_image(
        &self,
        reader: &mut (dyn AsyncRead + Unpin + Send),
        name: &str,
    ) -> Result<UploadResult> {
        self.upload(reader, name, UploadKind::Image).await
    }

    async fn upload_video(
        &self,
        reader: &mut (dyn AsyncRead + Unpin + Send),
        name: &str,
    ) -> Result<UploadResult> {
        self.upload(reader, name, UploadKind::Video).await
    }

    async fn delete_image(&self, name: &str) -> Result<()> {
        self.delete(name, UploadKind::Image).await
    }

    async fn delete_video(&self, name: &str) -> Result<()> {
        self.delete(name, UploadKind::Video).await
    }
}
