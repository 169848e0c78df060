use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Severity of a transient banner message.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Warning,
    Error,
}

impl NotificationLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationLevel::Success => "success",
            NotificationLevel::Warning => "warning",
            NotificationLevel::Error => "error",
        }
    }
}

/// A banner message together with how long it stays on screen.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub text: String,
    pub ttl_ms: i64,
}

impl Notification {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            text: text.into(),
            ttl_ms: 2_000,
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Warning,
            text: text.into(),
            ttl_ms: 3_000,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            text: text.into(),
            ttl_ms: 4_000,
        }
    }
}

/// Identifies one published notification.
pub type NotificationToken = u64;

/// The currently displayed notification.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActiveNotification {
    pub token: NotificationToken,
    pub notification: Notification,
    pub deadline: DateTime<Utc>,
}

impl ActiveNotification {
    /// Milliseconds until the deadline, clamped at zero.
    pub fn remaining_ms(&self, now: DateTime<Utc>) -> i64 {
        (self.deadline - now).num_milliseconds().max(0)
    }
}

/// Single current-notification slot.
///
/// Publishing replaces whatever is displayed and hands out a fresh token from
/// a monotonically increasing sequence. An auto-clear presenting a stale
/// token is a no-op, so a timer armed for a superseded message can never
/// dismiss a newer one.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationSlot {
    seq: u64,
    current: Option<ActiveNotification>,
}

impl NotificationSlot {
    /// Replaces the current notification and returns its token.
    pub fn publish(&mut self, notification: Notification, now: DateTime<Utc>) -> NotificationToken {
        self.seq += 1;
        let deadline = now + Duration::milliseconds(notification.ttl_ms);
        self.current = Some(ActiveNotification {
            token: self.seq,
            notification,
            deadline,
        });
        self.seq
    }

    /// Clears the slot if `token` still identifies the displayed message.
    pub fn expire(&mut self, token: NotificationToken) {
        if self
            .current
            .as_ref()
            .is_some_and(|active| active.token == token)
        {
            self.current = None;
        }
    }

    /// Clears the slot when the displayed message has outlived its deadline.
    pub fn expire_due(&mut self, now: DateTime<Utc>) {
        if self
            .current
            .as_ref()
            .is_some_and(|active| active.deadline <= now)
        {
            self.current = None;
        }
    }

    pub fn current(&self) -> Option<&ActiveNotification> {
        self.current.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn publish_replaces_and_bumps_token() {
        let mut slot = NotificationSlot::default();
        let first = slot.publish(Notification::success("saved"), at(0));
        let second = slot.publish(Notification::error("failed"), at(1));
        assert!(second > first);
        assert_eq!(
            slot.current().unwrap().notification.text,
            "failed".to_string()
        );
    }

    #[test]
    fn stale_token_cannot_clear_newer_message() {
        let mut slot = NotificationSlot::default();
        let first = slot.publish(Notification::warning("check input"), at(0));
        slot.publish(Notification::success("saved"), at(1));

        // The timer armed for the first message fires late.
        slot.expire(first);
        assert_eq!(
            slot.current().unwrap().notification.text,
            "saved".to_string()
        );
    }

    #[test]
    fn matching_token_clears() {
        let mut slot = NotificationSlot::default();
        let token = slot.publish(Notification::success("saved"), at(0));
        slot.expire(token);
        assert!(slot.is_empty());
    }

    #[test]
    fn deadline_expiry_only_fires_past_deadline() {
        let mut slot = NotificationSlot::default();
        slot.publish(Notification::success("saved"), at(0));

        slot.expire_due(at(1));
        assert!(!slot.is_empty());

        slot.expire_due(at(3));
        assert!(slot.is_empty());
    }

    #[test]
    fn remaining_ms_clamps_at_zero() {
        let mut slot = NotificationSlot::default();
        slot.publish(Notification::error("failed"), at(0));
        let active = slot.current().unwrap();
        assert_eq!(active.remaining_ms(at(0)), 4_000);
        assert_eq!(active.remaining_ms(at(10)), 0);
    }
}
