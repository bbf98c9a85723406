//! Notification display and interactive category operations

use super::PushIoManager;
use crate::dispatch::Completion;
use crate::types::{InteractiveNotificationCategory, RemoteMessage};
use serde_json::Value;

impl PushIoManager {
    /// Collapses multiple notifications into a single stacked entry.
    pub fn set_notifications_stacked(&self, stacked: bool, completion: impl Into<Completion>) {
        self.forward(
            "setNotificationsStacked",
            vec![Value::from(stacked)],
            completion,
        );
    }

    pub fn get_notification_stacked(&self, completion: impl Into<Completion>) {
        self.forward("getNotificationStacked", Vec::new(), completion);
    }

    /// Sets the small icon shown in notifications, by resource ID.
    pub fn set_default_small_icon(&self, icon: i64, completion: impl Into<Completion>) {
        self.forward("setDefaultSmallIcon", vec![Value::from(icon)], completion);
    }

    /// Sets the large icon shown in notifications, by resource ID.
    pub fn set_default_large_icon(&self, icon: i64, completion: impl Into<Completion>) {
        self.forward("setDefaultLargeIcon", vec![Value::from(icon)], completion);
    }

    /// Sets the notification small icon color from a hex string.
    pub fn set_notification_small_icon_color(
        &self,
        color: &str,
        completion: impl Into<Completion>,
    ) {
        self.forward(
            "setNotificationSmallIconColor",
            vec![Value::from(color)],
            completion,
        );
    }

    /// Sets the notification small icon by drawable/mipmap resource name,
    /// without the file extension.
    pub fn set_notification_small_icon(
        &self,
        resource_name: &str,
        completion: impl Into<Completion>,
    ) {
        self.forward(
            "setNotificationSmallIcon",
            vec![Value::from(resource_name)],
            completion,
        );
    }

    /// Sets the notification large icon by drawable/mipmap resource name.
    pub fn set_notification_large_icon(
        &self,
        resource_name: &str,
        completion: impl Into<Completion>,
    ) {
        self.forward(
            "setNotificationLargeIcon",
            vec![Value::from(resource_name)],
            completion,
        );
    }

    /// Adds an app-defined interactive notification category.
    pub fn add_interactive_notification_category(
        &self,
        category: &InteractiveNotificationCategory,
        completion: impl Into<Completion>,
    ) {
        self.forward(
            "addInteractiveNotificationCategory",
            vec![Self::wire(category)],
            completion,
        );
    }

    /// Gets a single interactive notification category by ID.
    pub fn get_interactive_notification_category(
        &self,
        category_id: &str,
        completion: impl Into<Completion>,
    ) {
        self.forward(
            "getInteractiveNotificationCategory",
            vec![Value::from(category_id)],
            completion,
        );
    }

    /// Removes the app-defined interactive notification category by ID.
    pub fn delete_interactive_notification_category(
        &self,
        category_id: &str,
        completion: impl Into<Completion>,
    ) {
        self.forward(
            "deleteInteractiveNotificationCategory",
            vec![Value::from(category_id)],
            completion,
        );
    }

    /// Removes all app-defined interactive notification categories.
    pub fn clear_interactive_notification_categories(&self, completion: impl Into<Completion>) {
        self.forward("clearInteractiveNotificationCategories", Vec::new(), completion);
    }

    /// Whether the given push payload originates from the engagement
    /// service. The success payload is a boolean.
    pub fn is_responsys_push(&self, message: &RemoteMessage, completion: impl Into<Completion>) {
        self.forward("isResponsysPush", vec![Self::wire(message)], completion);
    }

    /// Hands the given push payload to the SDK for processing.
    pub fn handle_message(&self, message: &RemoteMessage, completion: impl Into<Completion>) {
        self.forward("handleMessage", vec![Self::wire(message)], completion);
    }
}
