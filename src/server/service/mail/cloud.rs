use super::MailService;

const MAIL_TO: &str = "admin@qq.com";
const MAIL_FROM: &str = "noreply@alibaba.com";

/// Mail service simulating delivery through a hosted provider.
///
/// No request leaves the process; each send is written as a debug event.
#[derive(Debug, Clone, Default)]
pub struct CloudMailService;

impl CloudMailService {
    pub fn new() -> Self {
        Self
    }

    #[cfg(test)]
    pub fn mail_to(&self) -> &'static str {
        MAIL_TO
    }

    #[cfg(test)]
    pub fn mail_from(&self) -> &'static str {
        MAIL_FROM
    }
}

impl MailService for CloudMailService {
    fn send(&self, subject: &str, message: &str) {
        tracing::debug!(
            mail_from = MAIL_FROM,
            mail_to = MAIL_TO,
            subject,
            message,
            "Sent mail from {} to {} via CloudMailService",
            MAIL_FROM,
            MAIL_TO
        );
    }
}
