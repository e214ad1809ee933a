//! Outbound notification capability.
//!
//! `MailService` is the only contract the rest of the server depends on. The
//! implementation is picked once at startup from `Config::mail_service` and shared
//! through `AppState` as `Arc<dyn MailService>`.

pub mod cloud;
pub mod local;

use std::sync::Arc;

pub use cloud::CloudMailService;
pub use local::LocalMailService;

use crate::server::config::{Config, MailServiceKind};

/// Sends a notification with a subject and message body.
///
/// Sending never fails from the caller's point of view; implementations deal with
/// their own delivery problems.
pub trait MailService: Send + Sync {
    fn send(&self, subject: &str, message: &str);
}

/// Builds the mail service selected by configuration.
pub fn from_config(config: &Config) -> Arc<dyn MailService> {
    match config.mail_service {
        MailServiceKind::Local => Arc::new(LocalMailService::new(config)),
        MailServiceKind::Cloud => Arc::new(CloudMailService::new()),
    }
}
