//! Result notification
//!
//! Emails a classification result as plain text. Delivery goes through a
//! trait so the HTTP layer can be exercised without a live SMTP server.

use chrono::{DateTime, Utc};
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use regex::Regex;
use std::sync::OnceLock;
use tracing::info;

use crate::config::NotifyConfig;
use crate::dataset::Label;
use crate::error::{ClassifierError, Result};

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

/// Validate an email address
pub fn validate_email(email: &str) -> Result<()> {
    let re = EMAIL_REGEX
        .get_or_init(|| Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").expect("email regex is valid"));

    if re.is_match(email) {
        Ok(())
    } else {
        Err(ClassifierError::InvalidEmail(email.to_string()))
    }
}

/// A rendered result email, ready for delivery
#[derive(Debug, Clone, PartialEq)]
pub struct ResultEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Render the plain-text result message
pub fn build_result_email(
    recipient: &str,
    label: Label,
    confidence: f64,
    time: DateTime<Utc>,
) -> ResultEmail {
    let body = format!(
        "Spam Classification Result\n\
         \n\
         Result: {}\n\
         Confidence: {:.2}%\n\
         Time: {}\n\
         \n\
         Thank you for using the spam classifier.\n",
        label,
        confidence * 100.0,
        time.format("%Y-%m-%d %H:%M:%S"),
    );

    ResultEmail {
        to: recipient.to_string(),
        subject: "Spam Classification Result".to_string(),
        body,
    }
}

/// Delivery backend for result emails
pub trait ResultSender: Send + Sync {
    fn deliver(&self, email: &ResultEmail) -> Result<()>;
}

/// SMTP delivery via STARTTLS
pub struct SmtpSender {
    transport: SmtpTransport,
    from_address: String,
}

impl SmtpSender {
    pub fn new(config: &NotifyConfig) -> Result<Self> {
        validate_email(&config.from_address)?;

        let transport = SmtpTransport::starttls_relay(&config.smtp_host)
            .map_err(|e| ClassifierError::Mail(e.to_string()))?
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            from_address: config.from_address.clone(),
        })
    }
}

impl ResultSender for SmtpSender {
    fn deliver(&self, email: &ResultEmail) -> Result<()> {
        validate_email(&email.to)?;

        let message = Message::builder()
            .from(
                self.from_address
                    .parse()
                    .map_err(|_| ClassifierError::InvalidEmail(self.from_address.clone()))?,
            )
            .to(email
                .to
                .parse()
                .map_err(|_| ClassifierError::InvalidEmail(email.to.clone()))?)
            .subject(&email.subject)
            .header(ContentType::TEXT_PLAIN)
            .body(email.body.clone())
            .map_err(|e| ClassifierError::Mail(e.to_string()))?;

        self.transport
            .send(&message)
            .map_err(|e| ClassifierError::Mail(e.to_string()))?;

        info!(to = %email.to, "result email delivered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_valid_email() {
        assert!(validate_email("test@example.com").is_ok());
        assert!(validate_email("user.name-1@mail.example.co.uk").is_ok());
    }

    #[test]
    fn test_invalid_email() {
        assert!(validate_email("").is_err());
        assert!(validate_email("test").is_err());
        assert!(validate_email("test@").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("test@domain").is_err());
        assert!(validate_email("a b@example.com").is_err());
    }

    #[test]
    fn test_result_email_body() {
        let time = Utc.with_ymd_and_hms(2026, 3, 1, 12, 30, 0).unwrap();
        let email = build_result_email("user@example.com", Label::Spam, 0.9731, time);

        assert_eq!(email.to, "user@example.com");
        assert!(email.body.contains("Result: spam"));
        assert!(email.body.contains("Confidence: 97.31%"));
        assert!(email.body.contains("2026-03-01 12:30:00"));
    }
}
