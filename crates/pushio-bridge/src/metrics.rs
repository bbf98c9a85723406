//! Platform-dependent integer codes
//!
//! The native SDKs disagree on the integer encodings for engagement metrics
//! and log levels. The mapping tables here reproduce the native values; the
//! offsets are defined by the SDKs and are not interpreted by the bridge.

use crate::platform::Platform;
use serde::{Serialize, Serializer};

/// A recorded user interaction attributed to a push/notification campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngagementMetric {
    /// App launch via push notification. Recorded by the SDK itself; apps
    /// should avoid reporting this directly.
    Launch,
    /// Push receipt with the app in foreground. Recorded by the SDK itself.
    ActiveSession,
    /// In-app purchase
    InAppPurchase,
    /// Premium content access
    PremiumContent,
    /// Social action, for example share or like
    Social,
    /// Any other user action that fits no other metric
    Other,
    /// Commerce (physical goods) purchase
    Purchase,
}

impl EngagementMetric {
    /// Base wire code (the Android encoding); the iOS encoding is derived
    /// from it by [`metric_code`].
    pub fn base_code(self) -> i64 {
        match self {
            EngagementMetric::Launch => 1,
            EngagementMetric::ActiveSession => 2,
            EngagementMetric::InAppPurchase => 3,
            EngagementMetric::PremiumContent => 4,
            EngagementMetric::Social => 5,
            EngagementMetric::Other => 6,
            EngagementMetric::Purchase => 7,
        }
    }

    /// Wire code for the given platform
    pub fn code(self, platform: Platform) -> i64 {
        metric_code(self.base_code(), platform)
    }
}

// Engagement metrics travel as their base code; per-platform adjustment
// happens in the forward path, as for raw metric values.
impl Serialize for EngagementMetric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.base_code())
    }
}

/// Per-platform metric encoding. Codes below 6 shift down by one on iOS;
/// codes of 6 and above are identical on both platforms.
pub fn metric_code(code: i64, platform: Platform) -> i64 {
    match platform {
        Platform::Android => code,
        Platform::Ios => {
            if code < 6 {
                code - 1
            } else {
                code
            }
        }
    }
}

/// Log verbosity of the native SDK.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    /// No logs will be printed
    None,
    Error,
    Info,
    Warn,
    Debug,
    Verbose,
}

impl LogLevel {
    /// Wire code for the given platform
    pub fn code(self, platform: Platform) -> i64 {
        match (self, platform) {
            (LogLevel::None, _) => 0,
            (LogLevel::Error, Platform::Android) => 6,
            (LogLevel::Error, Platform::Ios) => 1,
            (LogLevel::Info, Platform::Android) => 4,
            (LogLevel::Info, Platform::Ios) => 2,
            (LogLevel::Warn, Platform::Android) => 5,
            (LogLevel::Warn, Platform::Ios) => 3,
            (LogLevel::Debug, Platform::Android) => 3,
            (LogLevel::Debug, Platform::Ios) => 4,
            (LogLevel::Verbose, Platform::Android) => 2,
            (LogLevel::Verbose, Platform::Ios) => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_codes_per_platform() {
        assert_eq!(EngagementMetric::Launch.code(Platform::Android), 1);
        assert_eq!(EngagementMetric::Launch.code(Platform::Ios), 0);
        assert_eq!(EngagementMetric::Social.code(Platform::Android), 5);
        assert_eq!(EngagementMetric::Social.code(Platform::Ios), 4);
        // At the boundary and above, both platforms agree
        assert_eq!(EngagementMetric::Other.code(Platform::Android), 6);
        assert_eq!(EngagementMetric::Other.code(Platform::Ios), 6);
        assert_eq!(EngagementMetric::Purchase.code(Platform::Android), 7);
        assert_eq!(EngagementMetric::Purchase.code(Platform::Ios), 7);
    }

    #[test]
    fn test_raw_metric_remap_boundaries() {
        assert_eq!(metric_code(3, Platform::Ios), 2);
        assert_eq!(metric_code(3, Platform::Android), 3);
        assert_eq!(metric_code(5, Platform::Ios), 4);
        assert_eq!(metric_code(6, Platform::Ios), 6);
        assert_eq!(metric_code(7, Platform::Ios), 7);
        assert_eq!(metric_code(7, Platform::Android), 7);
    }

    #[test]
    fn test_log_level_codes() {
        assert_eq!(LogLevel::None.code(Platform::Android), 0);
        assert_eq!(LogLevel::None.code(Platform::Ios), 0);
        assert_eq!(LogLevel::Error.code(Platform::Android), 6);
        assert_eq!(LogLevel::Error.code(Platform::Ios), 1);
        assert_eq!(LogLevel::Verbose.code(Platform::Android), 2);
        assert_eq!(LogLevel::Verbose.code(Platform::Ios), 5);
    }

    #[test]
    fn test_metric_serializes_as_base_code() {
        let value = serde_json::to_value(EngagementMetric::Purchase).unwrap_or_default();
        assert_eq!(value, serde_json::Value::from(7));
    }
}
