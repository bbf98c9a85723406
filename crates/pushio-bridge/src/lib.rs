//! Bridge facade over the native push/engagement SDKs
//!
//! This crate exposes the native SDK call surface (registration, messaging,
//! preferences, geofencing, analytics) to hybrid application code through a
//! single typed service object, [`PushIoManager`]. Every operation is
//! forwarded to an opaque host-provided dispatch primitive; no business
//! logic lives here.
//!
//! The facade is constructed once at application start with the target
//! [`Platform`] and a [`NativeDispatch`] handle, and shared by reference for
//! the lifetime of the host application.

pub mod dispatch;
pub mod errors;
pub mod manager;
pub mod metrics;
pub mod platform;
pub mod registry;
pub mod types;

pub use dispatch::{Completion, DispatchResult, NativeDispatch, StubDispatch};
pub use errors::DispatchFailure;
pub use manager::PushIoManager;
pub use metrics::{EngagementMetric, LogLevel};
pub use platform::Platform;
pub use types::{
    BeaconRegion, ConversionEvent, GeoRegion, InAppCloseButton,
    InteractiveNotificationButton, InteractiveNotificationCategory, MessageCenterMessage,
    Preference, PreferenceType, RemoteMessage,
};
