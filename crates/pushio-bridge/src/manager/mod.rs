//! The bridge facade
//!
//! [`PushIoManager`] translates every typed call into a dispatch of the
//! operation's wire name plus an ordered JSON argument list. One generic
//! forward path applies the capability registry (platform gating, value
//! transforms) before handing off to the host's [`NativeDispatch`].
//!
//! Construct one instance at application start and share it by reference;
//! the facade holds no session state of its own.

use crate::dispatch::{Completion, NativeDispatch};
use crate::metrics::LogLevel;
use crate::platform::Platform;
use crate::registry;
use crate::types::InteractiveNotificationCategory;
use pushio_logger as logger;
use serde_json::Value;
use std::sync::Arc;

mod engagement;
mod inapp;
mod links;
mod message_center;
mod notifications;
mod preferences;
mod regions;

/// Facade over the native push/engagement SDK.
///
/// Every method forwards to the native layer and returns immediately;
/// results arrive through the optional completion handler. Pass `()` when
/// the outcome does not matter.
pub struct PushIoManager {
    platform: Platform,
    runtime: Arc<dyn NativeDispatch>,
}

impl PushIoManager {
    /// Identifier of the native plugin class receiving every dispatch
    pub const PLUGIN_ID: &'static str = "PushIOManagerPlugin";

    /// Create the facade for `platform`, forwarding through `runtime`
    pub fn new(platform: Platform, runtime: Arc<dyn NativeDispatch>) -> Self {
        PushIoManager { platform, runtime }
    }

    /// The platform this facade was constructed for
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Generic forward path: look up the operation descriptor, apply
    /// platform gating and argument transforms, then dispatch.
    ///
    /// On an unsupported platform the call is a no-op apart from a console
    /// notice; the completion handler is never invoked.
    fn forward(
        &self,
        operation: &'static str,
        mut args: Vec<Value>,
        completion: impl Into<Completion>,
    ) {
        let completion = completion.into();

        let Some(descriptor) = registry::descriptor(operation) else {
            // Every facade method names a registered operation.
            tracing::error!(operation, "operation missing from capability registry");
            return;
        };

        if !descriptor.support.includes(self.platform) {
            logger::warn(&format!(
                "{} is not supported on {}",
                operation, self.platform
            ));
            return;
        }

        if let Some(transform) = descriptor.transform {
            transform(&mut args, self.platform);
        }

        tracing::debug!(operation, argc = args.len(), "forwarding to native layer");
        self.runtime.dispatch(operation, args, completion);
    }

    /// Serialize a pass-through entity onto the wire.
    ///
    /// The shapes in [`types`](crate::types) only contain JSON-compatible
    /// fields, so serialization cannot fail in practice; `Null` is the
    /// forwarded fallback, mirroring an absent argument.
    fn wire<T: serde::Serialize>(entity: T) -> Value {
        serde_json::to_value(entity).unwrap_or(Value::Null)
    }

    // ----- SDK configuration and registration -------------------------------

    /// Gets the API key used by the device to register with the service.
    pub fn get_api_key(&self, completion: impl Into<Completion>) {
        self.forward("getAPIKey", Vec::new(), completion);
    }

    /// Gets the account token used by the device to register with the service.
    pub fn get_account_token(&self, completion: impl Into<Completion>) {
        self.forward("getAccountToken", Vec::new(), completion);
    }

    pub fn overwrite_api_key(&self, api_key: &str, completion: impl Into<Completion>) {
        self.forward("overwriteApiKey", vec![Value::from(api_key)], completion);
    }

    pub fn overwrite_account_token(&self, account_token: &str, completion: impl Into<Completion>) {
        self.forward(
            "overwriteAccountToken",
            vec![Value::from(account_token)],
            completion,
        );
    }

    /// Configures the SDK from the named config file bundled with the app.
    pub fn configure(&self, file_name: &str, completion: impl Into<Completion>) {
        self.forward("configure", vec![Value::from(file_name)], completion);
    }

    /// Registers this app installation with the engagement service.
    ///
    /// `use_location` sends location data along with the registration
    /// request and may prompt the user for permission.
    pub fn register_app(&self, use_location: bool, completion: impl Into<Completion>) {
        self.forward("registerApp", vec![Value::from(use_location)], completion);
    }

    pub fn register_app_for_push(
        &self,
        enable_push_notifications: bool,
        use_location: bool,
        completion: impl Into<Completion>,
    ) {
        self.forward(
            "registerAppForPush",
            vec![
                Value::from(enable_push_notifications),
                Value::from(use_location),
            ],
            completion,
        );
    }

    /// Unregisters this app installation; the app stops receiving pushes.
    pub fn unregister_app(&self, completion: impl Into<Completion>) {
        self.forward("unregisterApp", Vec::new(), completion);
    }

    /// Gets the device ID assigned by the engagement service.
    pub fn get_device_id(&self, completion: impl Into<Completion>) {
        self.forward("getDeviceID", Vec::new(), completion);
    }

    /// Gets the native SDK version string.
    pub fn get_lib_version(&self, completion: impl Into<Completion>) {
        self.forward("getLibVersion", Vec::new(), completion);
    }

    /// Sets the native SDK log level.
    ///
    /// The platform-specific integer encoding is resolved here; see
    /// [`LogLevel::code`].
    pub fn set_log_level(&self, log_level: LogLevel, completion: impl Into<Completion>) {
        self.forward(
            "setLogLevel",
            vec![Value::from(log_level.code(self.platform))],
            completion,
        );
    }

    pub fn set_logging_enabled(&self, enabled: bool, completion: impl Into<Completion>) {
        self.forward("setLoggingEnabled", vec![Value::from(enabled)], completion);
    }

    /// Delays registration until the host app decides to complete it.
    pub fn set_delay_registration(&self, delay: bool, completion: impl Into<Completion>) {
        self.forward("setDelayRegistration", vec![Value::from(delay)], completion);
    }

    /// Whether delayed registration is currently enabled.
    pub fn is_delay_registration(&self, completion: impl Into<Completion>) {
        self.forward("isDelayRegistration", Vec::new(), completion);
    }

    /// Whether the native SDK has been configured.
    pub fn is_sdk_configured(&self, completion: impl Into<Completion>) {
        self.forward("isSDKConfigured", Vec::new(), completion);
    }

    /// Asks the user for permission for all push notification types
    /// (sound, badge, alert).
    pub fn register_for_all_remote_notification_types(&self, completion: impl Into<Completion>) {
        self.forward("registerForAllRemoteNotificationTypes", Vec::new(), completion);
    }

    /// Asks for push permission and registers the given interactive
    /// notification categories.
    pub fn register_for_all_remote_notification_types_with_categories(
        &self,
        categories: &[InteractiveNotificationCategory],
        completion: impl Into<Completion>,
    ) {
        self.forward(
            "registerForAllRemoteNotificationTypesWithCategories",
            vec![Self::wire(categories)],
            completion,
        );
    }

    /// Asks for the given notification authorization options and registers
    /// the interactive notification categories.
    pub fn register_for_notification_authorizations(
        &self,
        auth_options: i64,
        categories: &[InteractiveNotificationCategory],
        completion: impl Into<Completion>,
    ) {
        self.forward(
            "registerForNotificationAuthorizations",
            vec![Value::from(auth_options), Self::wire(categories)],
            completion,
        );
    }

    /// Hands the push token obtained by the host app to the SDK.
    pub fn set_device_token(&self, device_token: &str, completion: impl Into<Completion>) {
        self.forward("setDeviceToken", vec![Value::from(device_token)], completion);
    }

    // ----- Identity ---------------------------------------------------------

    /// Sets the external device tracking ID. Useful if the app keeps its
    /// own identifier for this device.
    pub fn set_external_device_tracking_id(&self, edti: &str, completion: impl Into<Completion>) {
        self.forward(
            "setExternalDeviceTrackingID",
            vec![Value::from(edti)],
            completion,
        );
    }

    pub fn get_external_device_tracking_id(&self, completion: impl Into<Completion>) {
        self.forward("getExternalDeviceTrackingID", Vec::new(), completion);
    }

    pub fn set_advertising_id(&self, adid: &str, completion: impl Into<Completion>) {
        self.forward("setAdvertisingID", vec![Value::from(adid)], completion);
    }

    pub fn get_advertising_id(&self, completion: impl Into<Completion>) {
        self.forward("getAdvertisingID", Vec::new(), completion);
    }

    /// Associates this app installation with the given user ID, generally
    /// when the user logs in.
    pub fn register_user_id(&self, user_id: &str, completion: impl Into<Completion>) {
        self.forward("registerUserId", vec![Value::from(user_id)], completion);
    }

    pub fn get_registered_user_id(&self, completion: impl Into<Completion>) {
        self.forward("getRegisteredUserId", Vec::new(), completion);
    }

    /// Removes the user ID association, generally when the user logs out.
    pub fn unregister_user_id(&self, completion: impl Into<Completion>) {
        self.forward("unregisterUserId", Vec::new(), completion);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::DispatchResult;
    use crate::errors::DispatchFailure;
    use crate::metrics::EngagementMetric;
    use crate::types::{ConversionEvent, GeoRegion, Preference, PreferenceType, RemoteMessage};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Dispatch double recording every forwarded call, optionally replying
    /// with a canned outcome.
    #[derive(Default)]
    struct RecordingDispatch {
        calls: Mutex<Vec<(String, Vec<Value>)>>,
        reply: Option<DispatchResult>,
    }

    impl RecordingDispatch {
        fn replying(reply: DispatchResult) -> Self {
            RecordingDispatch {
                calls: Mutex::new(Vec::new()),
                reply: Some(reply),
            }
        }

        fn calls(&self) -> Vec<(String, Vec<Value>)> {
            self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
        }
    }

    impl NativeDispatch for RecordingDispatch {
        fn dispatch(&self, operation: &str, args: Vec<Value>, completion: Completion) {
            if let Ok(mut calls) = self.calls.lock() {
                calls.push((operation.to_string(), args));
            }
            if let Some(reply) = self.reply.clone() {
                completion.complete(reply);
            }
        }
    }

    fn manager_with_recorder(platform: Platform) -> (PushIoManager, Arc<RecordingDispatch>) {
        let recorder = Arc::new(RecordingDispatch::default());
        let runtime: Arc<dyn NativeDispatch> = recorder.clone();
        (PushIoManager::new(platform, runtime), recorder)
    }

    #[test]
    fn test_construction_fixes_platform_and_plugin_identifier() {
        let (manager, _recorder) = manager_with_recorder(Platform::Ios);
        assert_eq!(manager.platform(), Platform::Ios);
        // Hosts route dispatches to the native class by this identifier
        assert_eq!(PushIoManager::PLUGIN_ID, "PushIOManagerPlugin");
    }

    #[test]
    fn test_arguments_forwarded_in_declared_order() {
        let (manager, recorder) = manager_with_recorder(Platform::Android);

        manager.register_user_id("user-1", ());
        manager.declare_preference("likes_sports", "Likes sports", PreferenceType::Boolean, ());
        manager.set_badge_count(3, true, ());
        manager.register_app_for_push(true, false, ());

        assert_eq!(
            recorder.calls(),
            vec![
                ("registerUserId".to_string(), vec![json!("user-1")]),
                (
                    "declarePreference".to_string(),
                    vec![json!("likes_sports"), json!("Likes sports"), json!("BOOLEAN")]
                ),
                ("setBadgeCount".to_string(), vec![json!(3), json!(true)]),
                (
                    "registerAppForPush".to_string(),
                    vec![json!(true), json!(false)]
                ),
            ]
        );
    }

    #[test]
    fn test_zero_argument_operations_send_empty_list() {
        let (manager, recorder) = manager_with_recorder(Platform::Ios);

        manager.get_api_key(());
        manager.unregister_app(());

        assert_eq!(
            recorder.calls(),
            vec![
                ("getAPIKey".to_string(), Vec::new()),
                ("unregisterApp".to_string(), Vec::new()),
            ]
        );
    }

    #[test]
    fn test_platform_gating_skips_dispatch_and_completion() {
        let (manager, recorder) = manager_with_recorder(Platform::Ios);
        let completions = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&completions);
        manager.overwrite_api_key(
            "key",
            Completion::new(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );
        let counter = Arc::clone(&completions);
        manager.handle_message(
            &RemoteMessage::default(),
            Completion::new(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );

        assert!(recorder.calls().is_empty());
        assert_eq!(completions.load(Ordering::SeqCst), 0);

        // The same operations go through on their own platform
        let (manager, recorder) = manager_with_recorder(Platform::Android);
        manager.overwrite_api_key("key", ());
        assert_eq!(recorder.calls().len(), 1);
    }

    #[test]
    fn test_ios_only_operations_gated_on_android() {
        let (manager, recorder) = manager_with_recorder(Platform::Android);

        manager.set_delay_registration(true, ());
        manager.is_delay_registration(());

        assert!(recorder.calls().is_empty());
    }

    #[test]
    fn test_engagement_metric_remapped_on_ios_only() {
        let (manager, recorder) = manager_with_recorder(Platform::Ios);
        manager.track_engagement(EngagementMetric::InAppPurchase, Value::Null, ());
        manager.track_engagement(EngagementMetric::Purchase, Value::Null, ());
        assert_eq!(
            recorder.calls(),
            vec![
                ("trackEngagement".to_string(), vec![json!(2), Value::Null]),
                ("trackEngagement".to_string(), vec![json!(7), Value::Null]),
            ]
        );

        let (manager, recorder) = manager_with_recorder(Platform::Android);
        manager.track_engagement(EngagementMetric::InAppPurchase, Value::Null, ());
        assert_eq!(
            recorder.calls(),
            vec![("trackEngagement".to_string(), vec![json!(3), Value::Null])]
        );
    }

    #[test]
    fn test_conversion_event_remapped_on_ios_only() {
        let event = ConversionEvent {
            order_id: Some("o-42".to_string()),
            conversion_type: EngagementMetric::InAppPurchase.base_code(),
            ..ConversionEvent::default()
        };

        let (manager, recorder) = manager_with_recorder(Platform::Ios);
        manager.track_conversion_event(&event, ());
        assert_eq!(
            recorder.calls(),
            vec![(
                "trackConversionEvent".to_string(),
                vec![json!({"orderId": "o-42", "conversionType": 2})]
            )]
        );

        let (manager, recorder) = manager_with_recorder(Platform::Android);
        manager.track_conversion_event(&event, ());
        assert_eq!(
            recorder.calls(),
            vec![(
                "trackConversionEvent".to_string(),
                vec![json!({"orderId": "o-42", "conversionType": 3})]
            )]
        );
    }

    #[test]
    fn test_native_success_reaches_completion_verbatim() {
        let runtime: Arc<dyn NativeDispatch> =
            Arc::new(RecordingDispatch::replying(Ok(json!({"deviceId": "d-1"}))));
        let manager = PushIoManager::new(Platform::Android, runtime);

        let seen = Arc::new(Mutex::new(None));
        let seen_clone = Arc::clone(&seen);
        manager.get_device_id(Completion::new(move |result| {
            if let Ok(mut slot) = seen_clone.lock() {
                *slot = Some(result);
            }
        }));

        let seen = seen.lock().map(|slot| slot.clone()).unwrap_or_default();
        assert_eq!(seen, Some(Ok(json!({"deviceId": "d-1"}))));
    }

    #[test]
    fn test_native_failure_reaches_completion_verbatim() {
        let failure = DispatchFailure::Native(json!({"errorReason": "offline"}));
        let runtime: Arc<dyn NativeDispatch> =
            Arc::new(RecordingDispatch::replying(Err(failure.clone())));
        let manager = PushIoManager::new(Platform::Ios, runtime);

        let seen = Arc::new(Mutex::new(None));
        let seen_clone = Arc::clone(&seen);
        manager.fetch_messages_for_message_center(
            "Primary",
            Completion::new(move |result| {
                if let Ok(mut slot) = seen_clone.lock() {
                    *slot = Some(result);
                }
            }),
        );

        let seen = seen.lock().map(|slot| slot.clone()).unwrap_or_default();
        assert_eq!(seen, Some(Err(failure)));
    }

    #[test]
    fn test_entities_serialize_into_single_argument() {
        let (manager, recorder) = manager_with_recorder(Platform::Android);

        let region = GeoRegion {
            geofence_id: "gf-1".to_string(),
            geofence_name: "Store".to_string(),
            dwell_time: Some(30),
            ..GeoRegion::default()
        };
        manager.on_geo_region_entered(&region, ());

        assert_eq!(
            recorder.calls(),
            vec![(
                "onGeoRegionEntered".to_string(),
                vec![json!({"geofenceId": "gf-1", "geofenceName": "Store", "dwellTime": 30})]
            )]
        );
    }

    #[test]
    fn test_log_level_resolved_per_platform() {
        let (manager, recorder) = manager_with_recorder(Platform::Android);
        manager.set_log_level(LogLevel::Error, ());
        assert_eq!(
            recorder.calls(),
            vec![("setLogLevel".to_string(), vec![json!(6)])]
        );

        let (manager, recorder) = manager_with_recorder(Platform::Ios);
        manager.set_log_level(LogLevel::Error, ());
        assert_eq!(
            recorder.calls(),
            vec![("setLogLevel".to_string(), vec![json!(1)])]
        );
    }

    #[test]
    fn test_preference_roundtrip_shapes() {
        // Payload shape the native layer sends back for getPreferences
        let payload = json!([
            {"key": "k1", "label": "L1", "type": "STRING", "value": "v"},
            {"key": "k2", "label": "L2", "type": "NUMBER", "value": 4.5}
        ]);
        let preferences: Result<Vec<Preference>, _> = serde_json::from_value(payload);
        assert!(preferences.is_ok());
        let preferences = preferences.unwrap_or_default();
        assert_eq!(preferences.len(), 2);
        assert_eq!(preferences[0].kind, PreferenceType::String);
    }

    #[test]
    fn test_every_facade_operation_hits_its_wire_name() {
        let (manager, recorder) = manager_with_recorder(Platform::Android);

        // One call per android-reachable operation; ios-only ops are
        // exercised separately below.
        manager.get_api_key(());
        manager.get_account_token(());
        manager.overwrite_api_key("k", ());
        manager.overwrite_account_token("t", ());
        manager.configure("pushio_config.json", ());
        manager.register_app(false, ());
        manager.register_app_for_push(true, true, ());
        manager.register_for_all_remote_notification_types(());
        manager.register_for_all_remote_notification_types_with_categories(&[], ());
        manager.register_for_notification_authorizations(7, &[], ());
        manager.unregister_app(());
        manager.get_device_id(());
        manager.get_lib_version(());
        manager.set_log_level(LogLevel::Debug, ());
        manager.set_logging_enabled(true, ());
        manager.is_sdk_configured(());
        manager.set_device_token("tok", ());
        manager.set_external_device_tracking_id("edti", ());
        manager.get_external_device_tracking_id(());
        manager.set_advertising_id("ad", ());
        manager.get_advertising_id(());
        manager.register_user_id("u", ());
        manager.get_registered_user_id(());
        manager.unregister_user_id(());

        let names: Vec<String> = recorder
            .calls()
            .into_iter()
            .map(|(operation, _)| operation)
            .collect();
        assert_eq!(
            names,
            vec![
                "getAPIKey",
                "getAccountToken",
                "overwriteApiKey",
                "overwriteAccountToken",
                "configure",
                "registerApp",
                "registerAppForPush",
                "registerForAllRemoteNotificationTypes",
                "registerForAllRemoteNotificationTypesWithCategories",
                "registerForNotificationAuthorizations",
                "unregisterApp",
                "getDeviceID",
                "getLibVersion",
                "setLogLevel",
                "setLoggingEnabled",
                "isSDKConfigured",
                "setDeviceToken",
                "setExternalDeviceTrackingID",
                "getExternalDeviceTrackingID",
                "setAdvertisingID",
                "getAdvertisingID",
                "registerUserId",
                "getRegisteredUserId",
                "unregisterUserId",
            ]
        );

        let (manager, recorder) = manager_with_recorder(Platform::Ios);
        manager.set_delay_registration(true, ());
        manager.is_delay_registration(());
        let names: Vec<String> = recorder
            .calls()
            .into_iter()
            .map(|(operation, _)| operation)
            .collect();
        assert_eq!(names, vec!["setDelayRegistration", "isDelayRegistration"]);
    }
}
