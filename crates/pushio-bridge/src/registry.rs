//! Capability descriptors for the bridge operations
//!
//! Platform gating and per-platform value transforms live in one table
//! instead of being scattered through the facade methods. The generic
//! forward path in [`manager`](crate::manager) consults this registry for
//! every call.

use crate::metrics::metric_code;
use crate::platform::Platform;
use serde_json::Value;

/// Platforms allowed to forward an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Support {
    Both,
    AndroidOnly,
    IosOnly,
}

impl Support {
    /// Whether the operation may be forwarded on `platform`
    pub fn includes(self, platform: Platform) -> bool {
        match self {
            Support::Both => true,
            Support::AndroidOnly => platform == Platform::Android,
            Support::IosOnly => platform == Platform::Ios,
        }
    }
}

/// Per-platform rewrite of the outgoing argument list
pub type ArgTransform = fn(&mut [Value], Platform);

/// One operation of the native call surface
pub struct Descriptor {
    /// Wire name, matching the native action string exactly
    pub name: &'static str,
    pub support: Support,
    pub transform: Option<ArgTransform>,
}

/// Remap a leading integer metric argument to the platform encoding
fn remap_metric_arg(args: &mut [Value], platform: Platform) {
    if let Some(slot) = args.first_mut() {
        if let Some(code) = slot.as_i64() {
            *slot = Value::from(metric_code(code, platform));
        }
    }
}

/// Remap the `conversionType` field of a leading event object
fn remap_conversion_event(args: &mut [Value], platform: Platform) {
    if let Some(Value::Object(event)) = args.first_mut() {
        if let Some(code) = event.get("conversionType").and_then(Value::as_i64) {
            event.insert(
                "conversionType".to_string(),
                Value::from(metric_code(code, platform)),
            );
        }
    }
}

macro_rules! op {
    ($name:literal) => {
        Descriptor {
            name: $name,
            support: Support::Both,
            transform: None,
        }
    };
    ($name:literal, $support:expr) => {
        Descriptor {
            name: $name,
            support: $support,
            transform: None,
        }
    };
    ($name:literal, $support:expr, $transform:expr) => {
        Descriptor {
            name: $name,
            support: $support,
            transform: Some($transform),
        }
    };
}

/// Every operation of the bridge surface. Wire names are load-bearing;
/// application code and the native layers both depend on them, do not
/// rename.
pub const OPERATIONS: &[Descriptor] = &[
    op!("getAPIKey"),
    op!("getAccountToken"),
    op!("setExternalDeviceTrackingID"),
    op!("getExternalDeviceTrackingID"),
    op!("setAdvertisingID"),
    op!("getAdvertisingID"),
    op!("registerUserId"),
    op!("getRegisteredUserId"),
    op!("unregisterUserId"),
    op!("declarePreference"),
    op!("getPreferences"),
    op!("getPreference"),
    op!("setStringPreference"),
    op!("setNumberPreference"),
    op!("setBooleanPreference"),
    op!("removePreference"),
    op!("clearAllPreferences"),
    op!("setNotificationsStacked", Support::AndroidOnly),
    op!("getNotificationStacked", Support::AndroidOnly),
    op!("trackEvent"),
    op!("fetchMessagesForMessageCenter"),
    op!("trackEngagement", Support::Both, remap_metric_arg),
    op!("setLogLevel"),
    op!("setDelayRegistration", Support::IosOnly),
    op!("isDelayRegistration", Support::IosOnly),
    op!("setLoggingEnabled"),
    op!("overwriteApiKey", Support::AndroidOnly),
    op!("overwriteAccountToken", Support::AndroidOnly),
    op!("configure"),
    op!("registerApp"),
    op!("registerAppForPush", Support::AndroidOnly),
    op!("registerForAllRemoteNotificationTypes"),
    op!("registerForAllRemoteNotificationTypesWithCategories"),
    op!("registerForNotificationAuthorizations"),
    op!("unregisterApp"),
    op!("getDeviceID"),
    op!("getLibVersion"),
    op!("setDefaultSmallIcon", Support::AndroidOnly),
    op!("setDefaultLargeIcon", Support::AndroidOnly),
    op!("isMessageCenterEnabled"),
    op!("setMessageCenterEnabled"),
    op!("fetchRichContentForMessage"),
    op!("setInAppFetchEnabled"),
    op!("setDeviceToken", Support::AndroidOnly),
    op!("setMessageCenterBadgingEnabled", Support::AndroidOnly),
    op!("setBadgeCount"),
    op!("getBadgeCount"),
    op!("resetBadgeCount"),
    op!("resetMessageCenter"),
    op!("onMessageCenterViewVisible"),
    op!("onMessageCenterViewFinish"),
    op!("trackMessageCenterOpenEngagement"),
    op!("trackMessageCenterDisplayEngagement"),
    op!("clearInAppMessages"),
    op!("clearInteractiveNotificationCategories"),
    op!("deleteInteractiveNotificationCategory"),
    op!("getInteractiveNotificationCategory", Support::AndroidOnly),
    op!("addInteractiveNotificationCategory", Support::AndroidOnly),
    op!("isResponsysPush"),
    op!("handleMessage", Support::AndroidOnly),
    op!("onGeoRegionEntered"),
    op!("onGeoRegionExited"),
    op!("onBeaconRegionEntered"),
    op!("onBeaconRegionExited"),
    op!("setExecuteRsysWebUrl"),
    op!("getExecuteRsysWebUrl"),
    op!("getConversionUrl", Support::AndroidOnly),
    op!("getRIAppId", Support::AndroidOnly),
    op!("getEngagementTimestamp"),
    op!("getEngagementMaxAge"),
    op!("resetEngagementContext"),
    op!("onDeepLinkReceived", Support::AndroidOnly),
    op!("setDelayRichPushDisplay"),
    op!("showRichPushMessage"),
    op!("isRichPushDelaySet"),
    op!("setInterceptOpenURL"),
    op!("trackConversionEvent", Support::Both, remap_conversion_event),
    op!("setNotificationSmallIconColor", Support::AndroidOnly),
    op!("setNotificationSmallIcon", Support::AndroidOnly),
    op!("setNotificationLargeIcon", Support::AndroidOnly),
    op!("setInAppMessageBannerHeight"),
    op!("getInAppMessageBannerHeight"),
    op!("setStatusBarHiddenForIAMBannerInterstitial"),
    op!("isStatusBarHiddenForIAMBannerInterstitial"),
    op!("onMessageCenterUpdated"),
    op!("isSDKConfigured"),
    op!("setInAppCustomCloseButton"),
];

/// Look up the descriptor for a wire operation name
pub fn descriptor(name: &str) -> Option<&'static Descriptor> {
    OPERATIONS.iter().find(|descriptor| descriptor.name == name)
}
