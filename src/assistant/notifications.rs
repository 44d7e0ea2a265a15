//! WhatsApp-style notification feed (simulated; nothing is sent)

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Reminder,
    Claim,
    Offer,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub id: u32,
    pub kind: NotificationKind,
    /// Translation key for the message body
    pub message_key: &'static str,
    pub posted_at: DateTime<Utc>,
    pub read: bool,
}

impl Notification {
    /// Coarse relative age: "just now", "5 minutes ago", "2 hours ago", "1 day ago"
    pub fn age_label(&self, now: DateTime<Utc>) -> String {
        let age = now.signed_duration_since(self.posted_at);
        let (count, unit) = if age.num_days() >= 1 {
            (age.num_days(), "day")
        } else if age.num_hours() >= 1 {
            (age.num_hours(), "hour")
        } else if age.num_minutes() >= 1 {
            (age.num_minutes(), "minute")
        } else {
            return "just now".to_string();
        };
        let plural = if count == 1 { "" } else { "s" };
        format!("{count} {unit}{plural} ago")
    }
}

#[derive(Debug, Clone)]
pub struct NotificationFeed {
    notifications: Vec<Notification>,
    subscribed: bool,
}

impl NotificationFeed {
    /// Sample feed relative to `now`: a premium reminder, a claim update, an offer
    pub fn sample(now: DateTime<Utc>) -> Self {
        Self {
            notifications: vec![
                Notification {
                    id: 1,
                    kind: NotificationKind::Reminder,
                    message_key: "premiumDueReminder",
                    posted_at: now - Duration::hours(2),
                    read: false,
                },
                Notification {
                    id: 2,
                    kind: NotificationKind::Claim,
                    message_key: "claimStatusUpdate",
                    posted_at: now - Duration::days(1),
                    read: true,
                },
                Notification {
                    id: 3,
                    kind: NotificationKind::Offer,
                    message_key: "specialOfferNotification",
                    posted_at: now - Duration::days(3),
                    read: true,
                },
            ],
            subscribed: false,
        }
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    /// Returns false for an unknown id
    pub fn mark_read(&mut self, id: u32) -> bool {
        match self.notifications.iter_mut().find(|n| n.id == id) {
            Some(n) => {
                n.read = true;
                true
            }
            None => false,
        }
    }

    pub fn mark_all_read(&mut self) {
        for n in &mut self.notifications {
            n.read = true;
        }
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    pub fn subscribe(&mut self) {
        if !self.subscribed {
            log::info!("WhatsApp notifications enabled");
        }
        self.subscribed = true;
    }
}
