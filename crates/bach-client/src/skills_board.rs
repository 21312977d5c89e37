//! Skills-board endpoints: the hierarchy document and item source files.
//!
//! The hierarchy is read and replaced as a whole; the last writer wins.

use bach_core::responses::{ActionResult, ItemFileResponse};
use bach_core::{HierarchyDocument, Kind};
use reqwest::Method;
use serde::Serialize;

use crate::{BachClient, ClientError, with_query};

const HIERARCHY_PATH: &str = "/api/skills-board/hierarchy";
const ITEM_FILE_PATH: &str = "/api/skills-board/item-file";

#[derive(Serialize)]
struct ItemFileWrite<'a> {
    path: &'a str,
    content: &'a str,
}

impl BachClient {
    /// Fetch the whole hierarchy document.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, a non-success status, or
    /// a body that is not a hierarchy document.
    pub async fn hierarchy(&self) -> Result<HierarchyDocument, ClientError> {
        self.get_raw(HIERARCHY_PATH).await
    }

    /// Replace the whole hierarchy document.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the write is not accepted.
    pub async fn put_hierarchy(&self, document: &HierarchyDocument) -> Result<ActionResult, ClientError> {
        tracing::debug!(
            agents = document.nodes(Kind::Agent).len(),
            assignments = document.assignments.len(),
            "saving hierarchy"
        );
        self.send_json(Method::PUT, HIERARCHY_PATH, Some(document))
            .await
    }

    /// Look up the source file backing a node.
    ///
    /// A missing file is reported in the body as `success: false`, so the
    /// response is returned as data rather than as an error.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a non-success status.
    pub async fn item_file(
        &self,
        kind: Kind,
        id: &str,
        description: &str,
    ) -> Result<ItemFileResponse, ClientError> {
        let path = with_query(
            ITEM_FILE_PATH,
            &[
                ("type", Some(kind.as_str())),
                ("id", Some(id)),
                ("description", Some(description)),
            ],
        );
        self.get_raw(&path).await
    }

    /// Overwrite a source file; `path` is the opaque `absolute_path` from [`Self::item_file`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Application`] when the server refuses the write.
    pub async fn put_item_file(&self, path: &str, content: &str) -> Result<ActionResult, ClientError> {
        self.send_json(
            Method::PUT,
            ITEM_FILE_PATH,
            Some(&ItemFileWrite { path, content }),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn item_file_write_body_shape() {
        let body = serde_json::to_value(ItemFileWrite {
            path: "/opt/bach/skills/scan.md",
            content: "# Scan",
        })
        .unwrap();
        assert_eq!(body, json!({"path": "/opt/bach/skills/scan.md", "content": "# Scan"}));
    }

    #[test]
    fn parse_found_item_file() {
        let file: ItemFileResponse = serde_json::from_str(
            r##"{"success": true, "content": "# Scan", "path": "skills/scan.md",
                "absolute_path": "/opt/bach/skills/scan.md", "filename": "scan.md"}"##,
        )
        .unwrap();
        assert!(file.success);
        assert_eq!(file.path.as_deref(), Some("skills/scan.md"));
        assert_eq!(file.absolute_path.as_deref(), Some("/opt/bach/skills/scan.md"));
    }

    #[test]
    fn item_file_query_is_encoded() {
        let path = with_query(
            ITEM_FILE_PATH,
            &[
                ("type", Some(Kind::Skill.as_str())),
                ("id", Some("s1")),
                ("description", Some("scan & parse")),
            ],
        );
        assert_eq!(
            path,
            "/api/skills-board/item-file?type=skill&id=s1&description=scan%20%26%20parse"
        );
    }
}
