use serde::{Deserialize, Serialize};

/// One police incident after the five source tables have been joined.
///
/// Field names serialize to the spreadsheet column names so that an exported
/// merged table reads like the source files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    #[serde(rename = "Incident ID")]
    pub incident_id: String,
    #[serde(rename = "Police District")]
    pub police_district: String,
    #[serde(rename = "Analysis Neighborhood")]
    pub analysis_neighborhood: String,
    /// Latitude in decimal degrees; `None` when the source cell was empty.
    #[serde(rename = "Latitude")]
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees; `None` when the source cell was empty.
    #[serde(rename = "Longitude")]
    pub longitude: Option<f64>,
    #[serde(rename = "Incident Category")]
    pub category: String,
    #[serde(rename = "Incident Subcategory")]
    pub subcategory: String,
    #[serde(rename = "Incident Description")]
    pub description: String,
    #[serde(rename = "Incident Date")]
    pub date: String,
    #[serde(rename = "Incident Year")]
    pub year: i32,
    #[serde(rename = "Incident Day of Week")]
    pub day_of_week: String,
    #[serde(rename = "Incident Time")]
    pub time: String,
    /// Hour of day (0..=23) derived from `time` at load time.
    #[serde(rename = "Incident Hour")]
    pub hour: u32,
    #[serde(rename = "Resolution")]
    pub resolution: String,
}

impl Incident {
    /// Both coordinates, if the incident can be placed on a map.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }
}

/// Fixtures shared with the tests of downstream crates, which enable the
/// `test-support` feature as a dev-dependency.
#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    use super::Incident;

    /// Build an incident with the three filter fields set and sensible
    /// defaults everywhere else.
    pub fn incident(id: &str, year: i32, resolution: &str, district: &str) -> Incident {
        Incident {
            incident_id: id.to_string(),
            police_district: district.to_string(),
            analysis_neighborhood: "Mission".to_string(),
            latitude: Some(37.76),
            longitude: Some(-122.42),
            category: "Larceny Theft".to_string(),
            subcategory: "Larceny - From Vehicle".to_string(),
            description: "Theft, From Locked Vehicle, >$950".to_string(),
            date: "2020-03-02".to_string(),
            year,
            day_of_week: "Monday".to_string(),
            time: "14:23".to_string(),
            hour: 14,
            resolution: resolution.to_string(),
        }
    }
}
