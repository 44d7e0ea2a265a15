//! Insurance assistant: canned chat replies, voice capture, and notifications

mod deferred;
mod notifications;
mod routing;
mod session;

pub use deferred::DeferredTask;
pub use notifications::{Notification, NotificationFeed, NotificationKind};
pub use routing::{route_reply, DEFAULT_REPLY_KEY, QUICK_REPLY_KEYS};
pub use session::{AssistantConfig, ChatMessage, ChatSession, Sender};
