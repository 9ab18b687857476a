//! Local notification contract.

use std::time::Duration;

use crate::ServiceResult;

/// A one-shot local notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body:  String,
    /// Delivered this long after scheduling.
    pub delay: Duration,
}

/// Schedules notifications for later delivery.  Presentation is the
/// platform's business.
pub trait NotificationService: Send + Sync {
    fn schedule(&self, notification: Notification) -> ServiceResult<()>;
}

impl<N: NotificationService + ?Sized> NotificationService for std::sync::Arc<N> {
    fn schedule(&self, notification: Notification) -> ServiceResult<()> {
        (**self).schedule(notification)
    }
}
