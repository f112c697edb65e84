use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub region_id: Option<i64>,
}

/// Cities of `region_id`, sorted by name. `None` returns every city.
pub fn cities_in_region(cities: &[City], region_id: Option<i64>) -> Vec<City> {
    let mut result: Vec<City> = cities
        .iter()
        .filter(|c| region_id.is_none() || c.region_id == region_id)
        .cloned()
        .collect();
    result.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city(id: i64, name: &str, region_id: Option<i64>) -> City {
        City {
            id,
            name: name.to_string(),
            region_id,
        }
    }

    #[test]
    fn test_cities_in_region() {
        let cities = vec![
            city(1, "Tanauan", Some(4)),
            city(2, "Batangas City", Some(4)),
            city(3, "Quezon City", Some(13)),
            city(4, "Unassigned", None),
        ];
        let names: Vec<String> = cities_in_region(&cities, Some(4))
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Batangas City", "Tanauan"]);
        assert_eq!(cities_in_region(&cities, None).len(), 4);
    }
}
