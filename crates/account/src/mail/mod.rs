pub mod providers;

pub use providers::{ConsoleProvider, Mailer, SendGridProvider};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    pub provider: MailProviderConfig,
    pub from_email: String,
    pub from_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MailProviderConfig {
    SendGrid { api_key: String },
    Console,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            provider: MailProviderConfig::Console,
            from_email: "noreply@daengdaeng.local".to_string(),
            from_name: "DaengDaeng".to_string(),
        }
    }
}

/// Transient mail value, built per request and handed to the mailer.
#[derive(Debug, Clone)]
pub struct MailMessage {
    pub to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

/// Render the temporary-password mail sent by the find-password flow.
pub fn render_temp_password(from_name: &str, to: &str, temp_password: &str) -> MailMessage {
    let subject = format!("New password from {}", from_name);

    let text = format!(
        r#"Hello,

A password reset was requested for your {} account.

Temporary password: {}

Sign in with it and change your password right away.

If you didn't request this, please contact support.
"#,
        from_name, temp_password
    );

    let html = format!(
        r#"<p>Hello,</p>
<p>A password reset was requested for your {} account.</p>
<p><strong>Temporary password:</strong> <code>{}</code></p>
<p>Sign in with it and change your password right away.</p>
<p>If you didn't request this, please contact support.</p>
"#,
        from_name, temp_password
    );

    MailMessage {
        to: to.to_string(),
        subject,
        text,
        html,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_temp_password_mail() {
        let mail = render_temp_password("DaengDaeng", "user@example.com", "abc123xyz789");

        assert_eq!(mail.to, "user@example.com");
        assert_eq!(mail.subject, "New password from DaengDaeng");
        assert!(mail.text.contains("Temporary password: abc123xyz789"));
        assert!(mail.html.contains("abc123xyz789"));
    }

    #[test]
    fn test_default_config_uses_console_provider() {
        let config = MailConfig::default();
        assert!(matches!(config.provider, MailProviderConfig::Console));
    }
}
