//! Year / resolution / district selection.

use crate::incident::Incident;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hash::Hash;

/// The three sidebar selections. An incident passes when all three match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Filter {
    pub year: i32,
    pub resolution: String,
    pub district: String,
}

impl Filter {
    pub fn new(year: i32, resolution: impl Into<String>, district: impl Into<String>) -> Self {
        Self {
            year,
            resolution: resolution.into(),
            district: district.into(),
        }
    }

    /// Logical AND of the three equality predicates.
    pub fn matches(&self, incident: &Incident) -> bool {
        incident.year == self.year
            && incident.resolution == self.resolution
            && incident.police_district == self.district
    }
}

/// Distinct values of each filter field, in first-encounter order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterOptions {
    pub years: Vec<i32>,
    pub resolutions: Vec<String>,
    pub districts: Vec<String>,
}

fn push_distinct<T: Clone + Eq + Hash>(seen: &mut HashSet<T>, values: &mut Vec<T>, value: &T) {
    if seen.insert(value.clone()) {
        values.push(value.clone());
    }
}

impl FilterOptions {
    pub fn from_incidents<'a>(incidents: impl IntoIterator<Item = &'a Incident>) -> Self {
        let mut options = FilterOptions::default();
        let mut years = HashSet::new();
        let mut resolutions = HashSet::new();
        let mut districts = HashSet::new();

        for incident in incidents {
            push_distinct(&mut years, &mut options.years, &incident.year);
            push_distinct(&mut resolutions, &mut options.resolutions, &incident.resolution);
            push_distinct(&mut districts, &mut options.districts, &incident.police_district);
        }
        options
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// The first value of each field, or `None` for an empty table.
    pub fn default_filter(&self) -> Option<Filter> {
        Some(Filter {
            year: *self.years.first()?,
            resolution: self.resolutions.first()?.clone(),
            district: self.districts.first()?.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::incident::test_support::incident;

    #[test]
    fn test_filter_requires_all_three() {
        let filter = Filter::new(2020, "Arrest", "Mission");
        assert!(filter.matches(&incident("1", 2020, "Arrest", "Mission")));
        assert!(!filter.matches(&incident("2", 2019, "Arrest", "Mission")));
        assert!(!filter.matches(&incident("3", 2020, "Open or Active", "Mission")));
        assert!(!filter.matches(&incident("4", 2020, "Arrest", "Central")));
    }

    #[test]
    fn test_options_keep_first_encounter_order() {
        let incidents = vec![
            incident("1", 2021, "Open or Active", "Tenderloin"),
            incident("2", 2019, "Arrest", "Mission"),
            incident("3", 2021, "Arrest", "Tenderloin"),
            incident("4", 2020, "Unfounded", "Central"),
        ];
        let options = FilterOptions::from_incidents(&incidents);
        assert_eq!(options.years, vec![2021, 2019, 2020]);
        assert_eq!(
            options.resolutions,
            vec!["Open or Active", "Arrest", "Unfounded"]
        );
        assert_eq!(options.districts, vec!["Tenderloin", "Mission", "Central"]);

        let default = options.default_filter().unwrap();
        assert_eq!(default, Filter::new(2021, "Open or Active", "Tenderloin"));
    }

    #[test]
    fn test_empty_options_have_no_default() {
        let options = FilterOptions::from_incidents(std::iter::empty());
        assert!(options.is_empty());
        assert_eq!(options.default_filter(), None);
    }
}
