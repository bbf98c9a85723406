//! Pass-through data shapes
//!
//! These entities are owned and interpreted by the native SDKs; the bridge
//! only serializes them onto the wire. Field names follow the keys the
//! native layers expect, which predate this crate.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Declared data type of a preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PreferenceType {
    String,
    Number,
    Boolean,
}

impl PreferenceType {
    pub fn as_str(self) -> &'static str {
        match self {
            PreferenceType::String => "STRING",
            PreferenceType::Number => "NUMBER",
            PreferenceType::Boolean => "BOOLEAN",
        }
    }
}

/// A declared key/value preference synced with the engagement service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preference {
    pub key: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: PreferenceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

/// One message of an in-app Message Center inbox.
///
/// Timestamps are ISO-8601 strings as produced by the native layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageCenterMessage {
    #[serde(rename = "messageID")]
    pub message_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(rename = "iconURL", skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_center_name: Option<String>,
    #[serde(rename = "deeplinkURL", skip_serializing_if = "Option::is_none")]
    pub deeplink_url: Option<String>,
    #[serde(rename = "richMessageHTML", skip_serializing_if = "Option::is_none")]
    pub rich_message_html: Option<String>,
    #[serde(rename = "richMessageURL", skip_serializing_if = "Option::is_none")]
    pub rich_message_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sent_timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_timestamp: Option<String>,
}

/// Action button of an interactive notification category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractiveNotificationButton {
    pub id: String,
    pub action: String,
    pub label: String,
}

/// App-defined interactive notification category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractiveNotificationCategory {
    #[serde(rename = "orcl_category")]
    pub category: String,
    #[serde(rename = "orcl_btns")]
    pub buttons: Vec<InteractiveNotificationButton>,
}

/// Incoming push payload handed to the SDK for inspection or processing.
///
/// Envelope keys mirror the platform messaging service; a payload-only
/// `data` map is also accepted by the native side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoteMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<i64>,
    #[serde(rename = "google.message_id", skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(rename = "messageType", skip_serializing_if = "Option::is_none")]
    pub message_type: Option<String>,
    #[serde(rename = "collapseKey", skip_serializing_if = "Option::is_none")]
    pub collapse_key: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub data: HashMap<String, String>,
}

/// A geofence the device entered or exited
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoRegion {
    pub geofence_id: String,
    pub geofence_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_bearing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_speed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dwell_time: Option<i64>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub extra: HashMap<String, String>,
}

/// A beacon region the device entered or exited
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeaconRegion {
    pub beacon_id: String,
    pub beacon_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beacon_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beacon_proximity: Option<String>,
    #[serde(rename = "iBeaconUUID", skip_serializing_if = "Option::is_none")]
    pub ibeacon_uuid: Option<String>,
    #[serde(rename = "iBeaconMajor", skip_serializing_if = "Option::is_none")]
    pub ibeacon_major: Option<i64>,
    #[serde(rename = "iBeaconMinor", skip_serializing_if = "Option::is_none")]
    pub ibeacon_minor: Option<i64>,
    #[serde(rename = "eddyStoneId1", skip_serializing_if = "Option::is_none")]
    pub eddystone_id1: Option<String>,
    #[serde(rename = "eddyStoneId2", skip_serializing_if = "Option::is_none")]
    pub eddystone_id2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dwell_time: Option<i64>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub extra: HashMap<String, String>,
}

/// A conversion attributed to a purchase-type engagement.
///
/// `conversion_type` carries the raw metric code (see
/// [`EngagementMetric::base_code`](crate::metrics::EngagementMetric::base_code));
/// the forward path adjusts it per platform.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_total: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_quantity: Option<i64>,
    pub conversion_type: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_properties: Option<Value>,
}

/// Customization of the in-app message close button
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InAppCloseButton {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_preference_wire_keys() {
        let preference = Preference {
            key: "news".to_string(),
            label: "News opt-in".to_string(),
            kind: PreferenceType::Boolean,
            value: Some(Value::Bool(true)),
        };
        let value = serde_json::to_value(&preference).unwrap_or_default();
        assert_eq!(
            value,
            json!({"key": "news", "label": "News opt-in", "type": "BOOLEAN", "value": true})
        );
    }

    #[test]
    fn test_category_uses_native_keys() {
        let category = InteractiveNotificationCategory {
            category: "order_updates".to_string(),
            buttons: vec![InteractiveNotificationButton {
                id: "btn1".to_string(),
                action: "OPEN_APP".to_string(),
                label: "Open".to_string(),
            }],
        };
        let value = serde_json::to_value(&category).unwrap_or_default();
        assert_eq!(
            value,
            json!({
                "orcl_category": "order_updates",
                "orcl_btns": [{"id": "btn1", "action": "OPEN_APP", "label": "Open"}]
            })
        );
    }

    #[test]
    fn test_message_center_message_parses_native_payload() {
        let payload = json!({
            "messageID": "m-1",
            "subject": "Sale",
            "iconURL": "https://example.com/i.png",
            "messageCenterName": "Primary",
            "sentTimestamp": "2024-03-01T10:00:00+0000"
        });
        let message: Result<MessageCenterMessage, _> = serde_json::from_value(payload);
        assert!(message.is_ok(), "native payload should deserialize");
        let message = message.unwrap_or_default();
        assert_eq!(message.message_id, "m-1");
        assert_eq!(message.icon_url.as_deref(), Some("https://example.com/i.png"));
        assert_eq!(message.message_center_name.as_deref(), Some("Primary"));
        assert_eq!(message.deeplink_url, None);
    }

    #[test]
    fn test_beacon_region_wire_keys() {
        let region = BeaconRegion {
            beacon_id: "b-1".to_string(),
            beacon_name: "Entrance".to_string(),
            ibeacon_uuid: Some("uuid".to_string()),
            ibeacon_major: Some(7),
            eddystone_id1: Some("ns".to_string()),
            ..BeaconRegion::default()
        };
        let value = serde_json::to_value(&region).unwrap_or_default();
        assert_eq!(
            value,
            json!({
                "beaconId": "b-1",
                "beaconName": "Entrance",
                "iBeaconUUID": "uuid",
                "iBeaconMajor": 7,
                "eddyStoneId1": "ns"
            })
        );
    }

    #[test]
    fn test_remote_message_envelope_keys() {
        let message = RemoteMessage {
            ttl: Some(60),
            message_id: Some("mid".to_string()),
            data: HashMap::from([("alert".to_string(), "hi".to_string())]),
            ..RemoteMessage::default()
        };
        let value = serde_json::to_value(&message).unwrap_or_default();
        assert_eq!(
            value,
            json!({"ttl": 60, "google.message_id": "mid", "data": {"alert": "hi"}})
        );
    }
}
