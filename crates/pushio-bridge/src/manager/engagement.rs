//! Engagement and conversion tracking
//!
//! The metric encodings differ between platforms; the adjustment is applied
//! by the registry transforms for the two tracking operations, nowhere else.

use super::PushIoManager;
use crate::dispatch::Completion;
use crate::metrics::EngagementMetric;
use crate::types::ConversionEvent;
use serde_json::Value;

impl PushIoManager {
    /// Records a pre-defined or custom event with optional extra properties.
    pub fn track_event(
        &self,
        event_name: &str,
        properties: Value,
        completion: impl Into<Completion>,
    ) {
        self.forward(
            "trackEvent",
            vec![Value::from(event_name), properties],
            completion,
        );
    }

    /// Sends push engagement information to the service.
    ///
    /// `properties` is custom data sent along with the request; pass `Null`
    /// when there is none.
    pub fn track_engagement(
        &self,
        metric: EngagementMetric,
        properties: Value,
        completion: impl Into<Completion>,
    ) {
        self.forward(
            "trackEngagement",
            vec![Value::from(metric.base_code()), properties],
            completion,
        );
    }

    /// Tracks a conversion for purchase-type engagements.
    pub fn track_conversion_event(
        &self,
        event: &ConversionEvent,
        completion: impl Into<Completion>,
    ) {
        self.forward("trackConversionEvent", vec![Self::wire(event)], completion);
    }

    /// Timestamp of the engagement that opened the app, if any.
    pub fn get_engagement_timestamp(&self, completion: impl Into<Completion>) {
        self.forward("getEngagementTimestamp", Vec::new(), completion);
    }

    /// Remaining age of the current engagement context, in seconds.
    pub fn get_engagement_max_age(&self, completion: impl Into<Completion>) {
        self.forward("getEngagementMaxAge", Vec::new(), completion);
    }

    /// Drops the engagement data of the current session. Further
    /// engagements are not reported until the app is opened via a push
    /// notification again.
    pub fn reset_engagement_context(&self, completion: impl Into<Completion>) {
        self.forward("resetEngagementContext", Vec::new(), completion);
    }

    pub fn get_conversion_url(&self, completion: impl Into<Completion>) {
        self.forward("getConversionUrl", Vec::new(), completion);
    }

    pub fn get_ri_app_id(&self, completion: impl Into<Completion>) {
        self.forward("getRIAppId", Vec::new(), completion);
    }
}
