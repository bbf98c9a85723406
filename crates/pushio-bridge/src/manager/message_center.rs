//! Message Center operations
//!
//! The Message Center is the in-app inbox of fetched campaign messages,
//! distinct from the system notification tray.

use super::PushIoManager;
use crate::dispatch::Completion;
use serde_json::Value;

impl PushIoManager {
    /// Fetches messages for the given message center.
    ///
    /// The success payload carries the message center name and the list of
    /// [`MessageCenterMessage`](crate::types::MessageCenterMessage) entries.
    pub fn fetch_messages_for_message_center(
        &self,
        message_center: &str,
        completion: impl Into<Completion>,
    ) {
        self.forward(
            "fetchMessagesForMessageCenter",
            vec![Value::from(message_center)],
            completion,
        );
    }

    pub fn is_message_center_enabled(&self, completion: impl Into<Completion>) {
        self.forward("isMessageCenterEnabled", Vec::new(), completion);
    }

    pub fn set_message_center_enabled(&self, enabled: bool, completion: impl Into<Completion>) {
        self.forward(
            "setMessageCenterEnabled",
            vec![Value::from(enabled)],
            completion,
        );
    }

    /// Fetches rich content for the given message ID.
    pub fn fetch_rich_content_for_message(
        &self,
        message_id: &str,
        completion: impl Into<Completion>,
    ) {
        self.forward(
            "fetchRichContentForMessage",
            vec![Value::from(message_id)],
            completion,
        );
    }

    pub fn set_message_center_badging_enabled(
        &self,
        enabled: bool,
        completion: impl Into<Completion>,
    ) {
        self.forward(
            "setMessageCenterBadgingEnabled",
            vec![Value::from(enabled)],
            completion,
        );
    }

    /// Sets the app icon badge count for Message Center messages.
    ///
    /// `force_set_badge` forces a server sync for the new value.
    pub fn set_badge_count(
        &self,
        badge_count: i64,
        force_set_badge: bool,
        completion: impl Into<Completion>,
    ) {
        self.forward(
            "setBadgeCount",
            vec![Value::from(badge_count), Value::from(force_set_badge)],
            completion,
        );
    }

    pub fn get_badge_count(&self, completion: impl Into<Completion>) {
        self.forward("getBadgeCount", Vec::new(), completion);
    }

    /// Resets the badge count, equivalent to setting it to zero.
    pub fn reset_badge_count(&self, force_set_badge: bool, completion: impl Into<Completion>) {
        self.forward(
            "resetBadgeCount",
            vec![Value::from(force_set_badge)],
            completion,
        );
    }

    /// Removes all Message Center messages from the SDK's cache. Local
    /// copies held by the app are unaffected.
    pub fn reset_message_center(&self, completion: impl Into<Completion>) {
        self.forward("resetMessageCenter", Vec::new(), completion);
    }

    /// Informs the SDK that the Message Center view became visible. Paired
    /// with [`on_message_center_view_finish`](Self::on_message_center_view_finish)
    /// to track message displays.
    pub fn on_message_center_view_visible(&self, completion: impl Into<Completion>) {
        self.forward("onMessageCenterViewVisible", Vec::new(), completion);
    }

    /// Informs the SDK that the Message Center view is no longer visible.
    pub fn on_message_center_view_finish(&self, completion: impl Into<Completion>) {
        self.forward("onMessageCenterViewFinish", Vec::new(), completion);
    }

    /// Reports an open of the given Message Center message. Call when the
    /// message-detail view is shown.
    pub fn track_message_center_open_engagement(
        &self,
        message_id: &str,
        completion: impl Into<Completion>,
    ) {
        self.forward(
            "trackMessageCenterOpenEngagement",
            vec![Value::from(message_id)],
            completion,
        );
    }

    /// Reports a display of the given Message Center message. Call when the
    /// message-list view is shown.
    pub fn track_message_center_display_engagement(
        &self,
        message_id: &str,
        completion: impl Into<Completion>,
    ) {
        self.forward(
            "trackMessageCenterDisplayEngagement",
            vec![Value::from(message_id)],
            completion,
        );
    }

    /// Returns the list of message centers that have been fetched so far.
    pub fn on_message_center_updated(&self, completion: impl Into<Completion>) {
        self.forward("onMessageCenterUpdated", Vec::new(), completion);
    }
}
