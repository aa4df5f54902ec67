//! Read notification / diagnostic system.
//!
//! Non-fatal issues encountered while decoding a JWW buffer (unknown
//! record tags, records skipped after a truncated read, default
//! substitutions) are collected as [`Notification`] items rather than
//! being silently dropped or logged from inside the decoder.
//!
//! After a read the caller can inspect
//! [`JwwDocument::notifications`](crate::document::JwwDocument) to see
//! what was encountered.

use std::fmt;

/// Category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    /// An entity tag outside the supported set; its block was skipped.
    UnknownTag,
    /// A record failed to decode; a default was substituted or the
    /// stream was resynchronized past it.
    Recovered,
    /// Non-fatal warning (e.g. encoding fallback).
    Warning,
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTag => write!(f, "UnknownTag"),
            Self::Recovered => write!(f, "Recovered"),
            Self::Warning => write!(f, "Warning"),
        }
    }
}

/// A single notification produced during a read.
#[derive(Debug, Clone)]
pub struct Notification {
    /// The category.
    pub notification_type: NotificationType,
    /// Byte offset in the source buffer, where one applies.
    pub offset: Option<usize>,
    /// A human-readable description of the issue.
    pub message: String,
}

impl Notification {
    /// Create a new notification without a buffer offset.
    pub fn new(notification_type: NotificationType, message: impl Into<String>) -> Self {
        Self {
            notification_type,
            offset: None,
            message: message.into(),
        }
    }

    /// Create a new notification anchored to a buffer offset.
    pub fn at(
        notification_type: NotificationType,
        offset: usize,
        message: impl Into<String>,
    ) -> Self {
        Self {
            notification_type,
            offset: Some(offset),
            message: message.into(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.offset {
            Some(offset) => write!(f, "[{} @ {:#x}] {}", self.notification_type, offset, self.message),
            None => write!(f, "[{}] {}", self.notification_type, self.message),
        }
    }
}

/// Collects notifications during a read operation.
#[derive(Debug, Clone, Default)]
pub struct NotificationCollection {
    items: Vec<Notification>,
}

impl NotificationCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Record a notification.
    pub fn notify(&mut self, notification_type: NotificationType, message: impl Into<String>) {
        self.items.push(Notification::new(notification_type, message));
    }

    /// Record a notification anchored to a buffer offset.
    pub fn notify_at(
        &mut self,
        notification_type: NotificationType,
        offset: usize,
        message: impl Into<String>,
    ) {
        self.items
            .push(Notification::at(notification_type, offset, message));
    }

    /// Check if there are any notifications.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of notifications.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterate over all notifications.
    pub fn iter(&self) -> std::slice::Iter<'_, Notification> {
        self.items.iter()
    }

    /// Get all notifications of a specific type.
    pub fn of_type(&self, nt: NotificationType) -> Vec<&Notification> {
        self.items
            .iter()
            .filter(|n| n.notification_type == nt)
            .collect()
    }

    /// Check whether any notification of the given type exists.
    pub fn has_type(&self, nt: NotificationType) -> bool {
        self.items.iter().any(|n| n.notification_type == nt)
    }

    /// Consume the collection into a `Vec`.
    pub fn into_vec(self) -> Vec<Notification> {
        self.items
    }
}

impl IntoIterator for NotificationCollection {
    type Item = Notification;
    type IntoIter = std::vec::IntoIter<Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a NotificationCollection {
    type Item = &'a Notification;
    type IntoIter = std::slice::Iter<'a, Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_creation() {
        let n = Notification::new(NotificationType::Warning, "encoding fallback");
        assert_eq!(n.notification_type, NotificationType::Warning);
        assert_eq!(n.offset, None);
        assert_eq!(n.message, "encoding fallback");
    }

    #[test]
    fn test_collection_basics() {
        let mut c = NotificationCollection::new();
        assert!(c.is_empty());

        c.notify(NotificationType::Warning, "w1");
        c.notify_at(NotificationType::UnknownTag, 0x140, "tag 0xff");
        c.notify(NotificationType::Warning, "w2");

        assert_eq!(c.len(), 3);
        assert_eq!(c.of_type(NotificationType::Warning).len(), 2);
        assert!(c.has_type(NotificationType::UnknownTag));
        assert!(!c.has_type(NotificationType::Recovered));
    }

    #[test]
    fn test_display() {
        let n = Notification::at(NotificationType::UnknownTag, 0x140, "tag 0xff skipped");
        assert_eq!(format!("{}", n), "[UnknownTag @ 0x140] tag 0xff skipped");

        let n = Notification::new(NotificationType::Recovered, "layer 3 defaulted");
        assert_eq!(format!("{}", n), "[Recovered] layer 3 defaulted");
    }
}
