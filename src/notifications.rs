//! In-memory notification store.
//!
//! The store is an ordinary value owned by the application shell and handed
//! to whatever needs it. Notifications are de-duplicated on their kind and
//! reference, so re-submitting the same event does not notify twice.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{LeaveRequestPayload, LeaveStatus};

/// What a notification is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// A leave request was submitted for approval.
    LeaveRequestSubmitted,
    /// A leave request was approved.
    LeaveRequestApproved,
    /// A leave request was rejected.
    LeaveRequestRejected,
}

impl NotificationKind {
    /// The notification announcing a request that reached `status`.
    pub fn for_status(status: LeaveStatus) -> Self {
        match status {
            LeaveStatus::Pending => NotificationKind::LeaveRequestSubmitted,
            LeaveStatus::Approved => NotificationKind::LeaveRequestApproved,
            LeaveStatus::Rejected => NotificationKind::LeaveRequestRejected,
        }
    }
}

/// A single notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique identifier.
    pub id: Uuid,
    /// What the notification is about.
    pub kind: NotificationKind,
    /// The entity the notification refers to (e.g., a leave request id).
    pub reference: String,
    /// Text shown to the user.
    pub message: String,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
    /// Whether the user has seen it.
    pub read: bool,
}

impl Notification {
    /// Creates an unread notification stamped with the current time.
    pub fn new(
        kind: NotificationKind,
        reference: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            reference: reference.into(),
            message: message.into(),
            created_at: Utc::now(),
            read: false,
        }
    }

    /// The notification for a leave request in its current status.
    ///
    /// The reference is the request key, so repeating the same request
    /// produces the same reference.
    pub fn for_request(request: &LeaveRequestPayload) -> Self {
        let message = match request.status {
            LeaveStatus::Pending => format!(
                "{} requested {} day(s) of {} leave from {}",
                request.employee_id,
                request.number_of_days.normalize(),
                request.leave_type,
                request.start_date
            ),
            decided => format!(
                "{} leave for {} from {} was {}",
                request.leave_type, request.employee_id, request.start_date, decided
            ),
        };

        Self::new(
            NotificationKind::for_status(request.status),
            request.request_key(),
            message,
        )
    }
}

/// De-duplicating notification store.
///
/// # Example
///
/// ```
/// use leave_engine::notifications::{Notification, NotificationKind, NotificationStore};
///
/// let mut store = NotificationStore::new();
/// let first = Notification::new(NotificationKind::LeaveRequestSubmitted, "req-1", "Submitted");
/// let again = Notification::new(NotificationKind::LeaveRequestSubmitted, "req-1", "Submitted");
///
/// assert!(store.push(first));
/// assert!(!store.push(again));
/// assert_eq!(store.unread_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct NotificationStore {
    notifications: Vec<Notification>,
}

impl NotificationStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a notification unless one with the same kind and reference exists.
    ///
    /// Returns whether the notification was added.
    pub fn push(&mut self, notification: Notification) -> bool {
        let duplicate = self
            .notifications
            .iter()
            .any(|n| n.kind == notification.kind && n.reference == notification.reference);
        if duplicate {
            return false;
        }

        self.notifications.push(notification);
        true
    }

    /// All notifications, newest first.
    pub fn list(&self) -> Vec<Notification> {
        self.notifications.iter().rev().cloned().collect()
    }

    /// Number of notifications not yet marked read.
    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    /// Marks the notification with `id` as read.
    ///
    /// Returns false if no such notification exists.
    pub fn mark_read(&mut self, id: Uuid) -> bool {
        match self.notifications.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.read = true;
                true
            }
            None => false,
        }
    }

    /// Removes every notification.
    pub fn clear(&mut self) {
        self.notifications.clear();
    }

    /// Number of stored notifications.
    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submitted(reference: &str) -> Notification {
        Notification::new(
            NotificationKind::LeaveRequestSubmitted,
            reference,
            format!("Leave request {} submitted", reference),
        )
    }

    #[test]
    fn test_push_deduplicates_on_kind_and_reference() {
        let mut store = NotificationStore::new();
        assert!(store.push(submitted("req-1")));
        assert!(!store.push(submitted("req-1")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_same_reference_different_kind_is_kept() {
        let mut store = NotificationStore::new();
        assert!(store.push(submitted("req-1")));
        assert!(store.push(Notification::new(
            NotificationKind::LeaveRequestApproved,
            "req-1",
            "Approved"
        )));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_list_is_newest_first() {
        let mut store = NotificationStore::new();
        store.push(submitted("req-1"));
        store.push(submitted("req-2"));

        let references: Vec<String> = store.list().into_iter().map(|n| n.reference).collect();
        assert_eq!(references, vec!["req-2", "req-1"]);
    }

    #[test]
    fn test_mark_read() {
        let mut store = NotificationStore::new();
        let notification = submitted("req-1");
        let id = notification.id;
        store.push(notification);
        store.push(submitted("req-2"));

        assert_eq!(store.unread_count(), 2);
        assert!(store.mark_read(id));
        assert_eq!(store.unread_count(), 1);
        assert!(!store.mark_read(Uuid::new_v4()));
    }

    #[test]
    fn test_clear() {
        let mut store = NotificationStore::new();
        store.push(submitted("req-1"));
        store.clear();
        assert!(store.is_empty());
        assert!(store.push(submitted("req-1")));
    }

    fn annual_request(start: &str, units: i64) -> LeaveRequestPayload {
        use crate::calculation::compute_leave;
        use crate::models::{DayType, HolidaySet, LeaveComputationInput};

        let start = chrono::NaiveDate::parse_from_str(start, "%Y-%m-%d").unwrap();
        let input = LeaveComputationInput::new(start, units, DayType::FullDay);
        let result = compute_leave(&input, &HolidaySet::new());
        LeaveRequestPayload::from_computation("emp_001", "annual", &input, &result, None).unwrap()
    }

    #[test]
    fn test_for_request_uses_request_key_as_reference() {
        let request = annual_request("2024-05-03", 3);
        let notification = Notification::for_request(&request);

        assert_eq!(notification.kind, NotificationKind::LeaveRequestSubmitted);
        assert_eq!(notification.reference, request.request_key());
        assert_eq!(
            notification.message,
            "emp_001 requested 3 day(s) of annual leave from 2024-05-03"
        );
    }

    #[test]
    fn test_repeated_request_notifies_once() {
        let mut store = NotificationStore::new();

        assert!(store.push(Notification::for_request(&annual_request("2024-05-03", 3))));
        assert!(!store.push(Notification::for_request(&annual_request("2024-05-03", 3))));
        assert!(store.push(Notification::for_request(&annual_request("2024-05-03", 4))));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_decisions_produce_their_own_notifications() {
        let mut store = NotificationStore::new();
        let mut approved = annual_request("2024-05-03", 3);
        store.push(Notification::for_request(&approved));

        approved.approve().unwrap();
        let notification = Notification::for_request(&approved);
        assert_eq!(notification.kind, NotificationKind::LeaveRequestApproved);
        assert_eq!(
            notification.message,
            "annual leave for emp_001 from 2024-05-03 was approved"
        );
        assert!(store.push(notification));

        let mut rejected = annual_request("2024-06-03", 1);
        rejected.reject().unwrap();
        assert_eq!(
            Notification::for_request(&rejected).kind,
            NotificationKind::LeaveRequestRejected
        );
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_notification_serialization() {
        let json = serde_json::to_string(&submitted("req-1")).unwrap();
        assert!(json.contains("\"kind\":\"leave_request_submitted\""));
        assert!(json.contains("\"read\":false"));
    }
}
