use super::MailMessage;
use crate::error::{AccountError, Result};
use async_trait::async_trait;
use serde_json::json;

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &MailMessage) -> Result<()>;
}

pub struct SendGridProvider {
    api_key: String,
    from_email: String,
    from_name: String,
    client: reqwest::Client,
}

impl SendGridProvider {
    pub fn new(api_key: String, from_email: String, from_name: String) -> Self {
        Self {
            api_key,
            from_email,
            from_name,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Mailer for SendGridProvider {
    async fn send(&self, message: &MailMessage) -> Result<()> {
        let payload = json!({
            "personalizations": [{
                "to": [{"email": message.to}],
                "subject": message.subject
            }],
            "from": {
                "email": self.from_email,
                "name": self.from_name
            },
            "content": [
                {
                    "type": "text/plain",
                    "value": message.text
                },
                {
                    "type": "text/html",
                    "value": message.html
                }
            ]
        });

        let response = self
            .client
            .post("https://api.sendgrid.com/v3/mail/send")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| AccountError::Mail(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(AccountError::Mail(format!(
                "SendGrid API error: {}",
                error_text
            )))
        }
    }
}

/// Development mailer that prints the message instead of delivering it.
pub struct ConsoleProvider;

#[async_trait]
impl Mailer for ConsoleProvider {
    async fn send(&self, message: &MailMessage) -> Result<()> {
        println!("\n{:=<60}", "");
        println!("EMAIL SENT (Console Provider - Development Mode)");
        println!("{:=<60}", "");
        println!("To: {}", message.to);
        println!("Subject: {}", message.subject);
        println!("{:-<60}", "");
        println!("{}", message.text);
        println!("{:=<60}\n", "");
        Ok(())
    }
}
