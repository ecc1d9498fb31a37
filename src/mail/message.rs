//! Mail Message Types
//!
//! The contact form payload and the outbound email built from it.

// == Contact Message ==
/// Payload of a contact form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    /// Sender display name
    pub name: String,
    /// Sender email address
    pub email: String,
    /// Message body
    pub message: String,
}

impl ContactMessage {
    /// Validates the message fields.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("Name is required".to_string());
        }
        if self.email.trim().is_empty() {
            return Some("Email is required".to_string());
        }
        if self.message.trim().is_empty() {
            return Some("Message is required".to_string());
        }
        None
    }
}

// == Outbound Email ==
/// A fully addressed email handed to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl OutboundEmail {
    /// Builds the notification email for a contact message.
    pub fn from_contact(message: &ContactMessage, recipient: &str) -> Self {
        Self {
            from: message.email.clone(),
            to: recipient.to_string(),
            subject: format!("New message from {}", message.name),
            body: format!(
                "Name: {}\nEmail: {}\nMessage: {}",
                message.name, message.email, message.message
            ),
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn valid_message() -> ContactMessage {
        ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn test_validate_valid_message() {
        assert!(valid_message().validate().is_none());
    }

    #[test]
    fn test_validate_missing_fields() {
        let mut msg = valid_message();
        msg.name = String::new();
        assert_eq!(msg.validate().as_deref(), Some("Name is required"));

        let mut msg = valid_message();
        msg.email = "   ".to_string();
        assert_eq!(msg.validate().as_deref(), Some("Email is required"));

        let mut msg = valid_message();
        msg.message = String::new();
        assert_eq!(msg.validate().as_deref(), Some("Message is required"));
    }

    #[test]
    fn test_outbound_email_from_contact() {
        let email = OutboundEmail::from_contact(&valid_message(), "owner@example.com");

        assert_eq!(email.from, "ada@example.com");
        assert_eq!(email.to, "owner@example.com");
        assert_eq!(email.subject, "New message from Ada");
        assert!(email.body.contains("Name: Ada"));
        assert!(email.body.contains("Email: ada@example.com"));
        assert!(email.body.contains("Message: Hello there"));
    }
}
