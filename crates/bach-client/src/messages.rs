//! Message endpoints.

use bach_core::entities::NewMessage;
use bach_core::responses::{ActionResult, Created, MessageList};
use reqwest::Method;

use crate::{BachClient, ClientError};

impl BachClient {
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a non-success status.
    pub async fn list_messages(&self) -> Result<MessageList, ClientError> {
        self.get_json("/api/messages").await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the server rejects the message.
    pub async fn send_message(&self, message: &NewMessage) -> Result<Created, ClientError> {
        self.send_json(Method::POST, "/api/messages", Some(message))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the message does not exist.
    pub async fn mark_message_read(&self, id: i64) -> Result<ActionResult, ClientError> {
        self.send_json::<(), _>(Method::PUT, &format!("/api/messages/{id}/read"), None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use bach_core::entities::NewMessage;
    use bach_core::responses::MessageList;

    #[test]
    fn parse_message_list_fixture() {
        let list: MessageList = serde_json::from_str(
            r#"{"success": true, "messages": [{"id": 5, "sender": "ati", "subject": "Hi", "status": "unread"}], "count": 1}"#,
        )
        .unwrap();
        assert_eq!(list.messages[0].sender.as_deref(), Some("ati"));
    }

    #[test]
    fn new_message_serializes_without_subject() {
        let message = NewMessage {
            recipient: "user".into(),
            body: "done".into(),
            ..NewMessage::default()
        };
        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            serde_json::json!({"recipient": "user", "body": "done", "priority": 0})
        );
    }
}
