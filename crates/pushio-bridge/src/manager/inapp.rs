//! In-app message operations

use super::PushIoManager;
use crate::dispatch::Completion;
use crate::types::InAppCloseButton;
use serde_json::Value;

impl PushIoManager {
    /// Removes all in-app messages from the SDK's cache.
    pub fn clear_in_app_messages(&self, completion: impl Into<Completion>) {
        self.forward("clearInAppMessages", Vec::new(), completion);
    }

    pub fn set_in_app_fetch_enabled(&self, enabled: bool, completion: impl Into<Completion>) {
        self.forward(
            "setInAppFetchEnabled",
            vec![Value::from(enabled)],
            completion,
        );
    }

    /// Holds rich push messages until
    /// [`show_rich_push_message`](Self::show_rich_push_message) is called.
    /// Useful while intermediate screens (login, onboarding) are up.
    pub fn set_delay_rich_push_display(&self, enabled: bool, completion: impl Into<Completion>) {
        self.forward(
            "setDelayRichPushDisplay",
            vec![Value::from(enabled)],
            completion,
        );
    }

    /// Displays rich push messages held back by
    /// [`set_delay_rich_push_display`](Self::set_delay_rich_push_display).
    pub fn show_rich_push_message(&self, completion: impl Into<Completion>) {
        self.forward("showRichPushMessage", Vec::new(), completion);
    }

    /// Whether rich push display is currently delayed.
    pub fn is_rich_push_delay_set(&self, completion: impl Into<Completion>) {
        self.forward("isRichPushDelaySet", Vec::new(), completion);
    }

    /// Intercepts deep links sent by the service instead of the SDK's
    /// default URL handling.
    pub fn set_intercept_open_url(&self, enabled: bool, completion: impl Into<Completion>) {
        self.forward("setInterceptOpenURL", vec![Value::from(enabled)], completion);
    }

    /// Sets the in-app banner message height, in density-independent units
    /// between 100 and 200 inclusive.
    pub fn set_in_app_message_banner_height(
        &self,
        height: f64,
        completion: impl Into<Completion>,
    ) {
        self.forward(
            "setInAppMessageBannerHeight",
            vec![Value::from(height)],
            completion,
        );
    }

    pub fn get_in_app_message_banner_height(&self, completion: impl Into<Completion>) {
        self.forward("getInAppMessageBannerHeight", Vec::new(), completion);
    }

    /// Hides the status bar while an in-app banner or interstitial message
    /// is displayed.
    pub fn set_status_bar_hidden_for_iam_banner_interstitial(
        &self,
        hide_status_bar: bool,
        completion: impl Into<Completion>,
    ) {
        self.forward(
            "setStatusBarHiddenForIAMBannerInterstitial",
            vec![Value::from(hide_status_bar)],
            completion,
        );
    }

    pub fn is_status_bar_hidden_for_iam_banner_interstitial(
        &self,
        completion: impl Into<Completion>,
    ) {
        self.forward(
            "isStatusBarHiddenForIAMBannerInterstitial",
            Vec::new(),
            completion,
        );
    }

    /// Customizes the in-app message close button.
    pub fn set_in_app_custom_close_button(
        &self,
        close_button: &InAppCloseButton,
        completion: impl Into<Completion>,
    ) {
        self.forward(
            "setInAppCustomCloseButton",
            vec![Self::wire(close_button)],
            completion,
        );
    }
}
