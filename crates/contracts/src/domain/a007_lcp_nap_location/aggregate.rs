use crate::shared::text::join_non_empty;
use serde::{Deserialize, Serialize};

/// Fiber distribution point used for technician routing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LcpNapLocation {
    pub id: i64,
    pub lcp: String,
    pub nap: String,
    #[serde(default)]
    pub location_name: Option<String>,
    #[serde(default)]
    pub barangay: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub port_total: Option<u32>,
    #[serde(default)]
    pub port_used: Option<u32>,
}

impl LcpNapLocation {
    /// `LCP-NAP` code shown in tables and pickers.
    pub fn code(&self) -> String {
        join_non_empty([self.lcp.as_str(), self.nap.as_str()], "-")
    }

    pub fn area(&self) -> String {
        join_non_empty(
            [
                self.barangay.as_deref().unwrap_or(""),
                self.city.as_deref().unwrap_or(""),
                self.region.as_deref().unwrap_or(""),
            ],
            ", ",
        )
    }

    pub fn ports_available(&self) -> Option<u32> {
        match (self.port_total, self.port_used) {
            (Some(total), Some(used)) => Some(total.saturating_sub(used)),
            (Some(total), None) => Some(total),
            _ => None,
        }
    }

    /// Link to the coordinates on a map, when both are known.
    pub fn map_url(&self) -> Option<String> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some(format!(
                "https://www.google.com/maps/search/?api=1&query={},{}",
                lat, lng
            )),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_fields() {
        let loc: LcpNapLocation = serde_json::from_str(
            r#"{"id":1,"lcp":"LCP-004","nap":"NAP-12","city":"Tanauan","region":"CALABARZON",
                "port_total":8,"port_used":10,"latitude":14.08,"longitude":121.15}"#,
        )
        .unwrap();
        assert_eq!(loc.code(), "LCP-004-NAP-12");
        assert_eq!(loc.area(), "Tanauan, CALABARZON");
        assert_eq!(loc.ports_available(), Some(0));
        assert!(loc.map_url().unwrap().ends_with("14.08,121.15"));
    }
}
