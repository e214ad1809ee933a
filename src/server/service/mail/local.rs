use crate::server::config::Config;

use super::MailService;

/// Mail service that records each message in the application log.
///
/// Addresses are copied from the configuration when the service is built.
#[derive(Debug, Clone)]
pub struct LocalMailService {
    mail_to: String,
    mail_from: String,
}

impl LocalMailService {
    pub fn new(config: &Config) -> Self {
        Self {
            mail_to: config.mail_to_address.clone(),
            mail_from: config.mail_from_address.clone(),
        }
    }

    #[cfg(test)]
    pub fn mail_to(&self) -> &str {
        &self.mail_to
    }

    #[cfg(test)]
    pub fn mail_from(&self) -> &str {
        &self.mail_from
    }
}

impl MailService for LocalMailService {
    fn send(&self, subject: &str, message: &str) {
        tracing::info!(
            mail_from = %self.mail_from,
            mail_to = %self.mail_to,
            subject,
            message,
            "Sent mail from {} to {} via LocalMailService",
            self.mail_from,
            self.mail_to
        );
    }
}
