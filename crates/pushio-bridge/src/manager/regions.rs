//! Geofence and beacon region crossings
//!
//! Region detection happens in the host app; these calls only report the
//! crossing to the SDK. The success payload carries the region ID and type.

use super::PushIoManager;
use crate::dispatch::Completion;
use crate::types::{BeaconRegion, GeoRegion};

impl PushIoManager {
    /// Informs the SDK that the user entered a geofence.
    pub fn on_geo_region_entered(&self, region: &GeoRegion, completion: impl Into<Completion>) {
        self.forward("onGeoRegionEntered", vec![Self::wire(region)], completion);
    }

    /// Informs the SDK that the user exited a geofence.
    pub fn on_geo_region_exited(&self, region: &GeoRegion, completion: impl Into<Completion>) {
        self.forward("onGeoRegionExited", vec![Self::wire(region)], completion);
    }

    /// Informs the SDK that the user entered a beacon region.
    pub fn on_beacon_region_entered(
        &self,
        region: &BeaconRegion,
        completion: impl Into<Completion>,
    ) {
        self.forward("onBeaconRegionEntered", vec![Self::wire(region)], completion);
    }

    /// Informs the SDK that the user exited a beacon region.
    pub fn on_beacon_region_exited(
        &self,
        region: &BeaconRegion,
        completion: impl Into<Completion>,
    ) {
        self.forward("onBeaconRegionExited", vec![Self::wire(region)], completion);
    }
}
