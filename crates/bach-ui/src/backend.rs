//! Network seam of the skills board.

use std::future::Future;

use bach_client::{BachClient, ClientError};
use bach_core::entities::NewTask;
use bach_core::responses::ItemFileResponse;
use bach_core::{HierarchyDocument, Kind};

/// Requests the skills board issues. Implemented for [`BachClient`]; tests
/// substitute an in-memory backend.
pub trait BoardBackend {
    fn fetch_hierarchy(&self) -> impl Future<Output = Result<HierarchyDocument, ClientError>> + Send;

    fn put_hierarchy(
        &self,
        document: &HierarchyDocument,
    ) -> impl Future<Output = Result<(), ClientError>> + Send;

    /// Look up a node's source file; a missing file is `success: false`, not an error.
    fn fetch_item_file(
        &self,
        kind: Kind,
        id: &str,
        description: &str,
    ) -> impl Future<Output = Result<ItemFileResponse, ClientError>> + Send;

    fn put_item_file(
        &self,
        path: &str,
        content: &str,
    ) -> impl Future<Output = Result<(), ClientError>> + Send;

    fn create_task(&self, task: &NewTask) -> impl Future<Output = Result<(), ClientError>> + Send;
}

impl BoardBackend for BachClient {
    async fn fetch_hierarchy(&self) -> Result<HierarchyDocument, ClientError> {
        self.hierarchy().await
    }

    async fn put_hierarchy(&self, document: &HierarchyDocument) -> Result<(), ClientError> {
        BachClient::put_hierarchy(self, document).await.map(drop)
    }

    async fn fetch_item_file(
        &self,
        kind: Kind,
        id: &str,
        description: &str,
    ) -> Result<ItemFileResponse, ClientError> {
        self.item_file(kind, id, description).await
    }

    async fn put_item_file(&self, path: &str, content: &str) -> Result<(), ClientError> {
        BachClient::put_item_file(self, path, content).await.map(drop)
    }

    async fn create_task(&self, task: &NewTask) -> Result<(), ClientError> {
        BachClient::create_task(self, task).await.map(drop)
    }
}
