use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::info;
use validator::Validate;

use super::{non_blank, time_based_id, ServiceError};
use crate::storage::{Collection, StoreError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageStatus {
    #[default]
    New,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub status: MessageStatus,
}

#[derive(Clone, Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct ContactForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "A valid email address is required")
    )]
    pub email: String,
    pub phone: Option<String>,
    #[validate(length(min = 1, message = "Subject is required"))]
    pub subject: String,
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

impl ContactForm {
    fn normalized(self) -> Self {
        ContactForm {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            phone: non_blank(self.phone),
            subject: self.subject.trim().to_owned(),
            message: self.message.trim().to_owned(),
        }
    }
}

/// Append-only inbox. Only the admin dashboard reads it back.
pub struct ContactService {
    messages: Collection<ContactMessage>,
    write_lock: Mutex<()>,
}

impl ContactService {
    pub fn new(messages: Collection<ContactMessage>) -> Self {
        ContactService {
            messages,
            write_lock: Mutex::new(()),
        }
    }

    pub async fn submit(&self, form: ContactForm) -> Result<ContactMessage, ServiceError> {
        let form = form.normalized();
        form.validate()?;

        let _guard = self.write_lock.lock().await;
        let mut messages = self.messages.load().await?;
        let now = Utc::now();
        let message = ContactMessage {
            id: time_based_id("MSG", now, messages.iter().map(|message| message.id.as_str())),
            name: form.name,
            email: form.email,
            phone: form.phone,
            subject: form.subject,
            message: form.message,
            timestamp: now,
            status: MessageStatus::New,
        };

        messages.push(message.clone());
        self.messages.save(&messages).await?;
        info!(message_id = %message.id, "Contact message received");
        Ok(message)
    }

    pub async fn list(&self) -> Result<Vec<ContactMessage>, StoreError> {
        self.messages.load().await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let _guard = self.write_lock.lock().await;
        let mut messages = self.messages.load().await?;
        let before = messages.len();
        messages.retain(|message| message.id != id);
        if messages.len() == before {
            return Err(ServiceError::NotFound(format!(
                "No message with {} id was found.",
                id
            )));
        }

        self.messages.save(&messages).await?;
        info!(message_id = %id, "Contact message deleted");
        Ok(())
    }
}
