//! Deep link and web URL operations

use super::PushIoManager;
use crate::dispatch::Completion;
use serde_json::Value;

impl PushIoManager {
    /// Gets the deeplink/weblink URL if the app was opened via an
    /// engagement deeplink. Call every time the app comes to the
    /// foreground.
    pub fn on_deep_link_received(&self, completion: impl Into<Completion>) {
        self.forward("onDeepLinkReceived", Vec::new(), completion);
    }

    /// Lets the SDK execute web URLs attached to push payloads.
    pub fn set_execute_rsys_web_url(&self, flag: bool, completion: impl Into<Completion>) {
        self.forward("setExecuteRsysWebUrl", vec![Value::from(flag)], completion);
    }

    pub fn get_execute_rsys_web_url(&self, completion: impl Into<Completion>) {
        self.forward("getExecuteRsysWebUrl", Vec::new(), completion);
    }
}
