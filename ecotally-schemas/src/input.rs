use serde::{Deserialize, Serialize};
use std::fmt;

/// Annual travel distances, in miles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TransportInput {
    #[serde(default)]
    pub car_miles: f64,
    #[serde(default)]
    pub flight_miles: f64,
    #[serde(default)]
    pub public_transit_miles: f64,
}

/// Annual electricity consumption, in kWh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ElectricityInput {
    #[serde(default)]
    pub usage_kwh: f64,
}

/// Diet archetype. Closed set: unknown values are rejected at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DietType {
    Omnivore,
    Vegetarian,
    Vegan,
}

impl DietType {
    pub const ALL: [DietType; 3] = [DietType::Omnivore, DietType::Vegetarian, DietType::Vegan];

    pub fn as_str(&self) -> &'static str {
        match self {
            DietType::Omnivore => "omnivore",
            DietType::Vegetarian => "vegetarian",
            DietType::Vegan => "vegan",
        }
    }
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Country selecting the grid-intensity and national-average rows.
/// Closed set; `Global` is the population-level fallback row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Country {
    #[serde(rename = "USA")]
    Usa,
    #[serde(rename = "UK")]
    Uk,
    Germany,
    India,
    China,
    #[default]
    Global,
}

impl Country {
    pub const ALL: [Country; 6] = [
        Country::Usa,
        Country::Uk,
        Country::Germany,
        Country::India,
        Country::China,
        Country::Global,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Country::Usa => "USA",
            Country::Uk => "UK",
            Country::Germany => "Germany",
            Country::India => "India",
            Country::China => "China",
            Country::Global => "Global",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transport mode axis of the coefficient table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    Car,
    Flight,
    PublicTransit,
}

/// One complete calculation request. Immutable once constructed;
/// one request corresponds to exactly one calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    #[serde(default)]
    pub transport: TransportInput,
    pub diet: DietType,
    #[serde(default)]
    pub electricity: ElectricityInput,
    #[serde(default)]
    pub country: Country,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn request_parses_with_partial_transport() {
        let request: CalculationRequest = serde_json::from_str(
            r#"{ "transport": { "car_miles": 120.5 }, "diet": "vegan", "electricity": {} }"#,
        )
        .unwrap();
        assert_eq!(request.transport.car_miles, 120.5);
        assert_eq!(request.transport.flight_miles, 0.0);
        assert_eq!(request.diet, DietType::Vegan);
        assert_eq!(request.country, Country::Global);
    }

    #[test]
    fn unknown_diet_is_rejected() {
        let result = serde_json::from_str::<CalculationRequest>(
            r#"{ "transport": {}, "diet": "pescatarian", "electricity": {} }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn country_wire_names() {
        assert_eq!(serde_json::to_string(&Country::Usa).unwrap(), r#""USA""#);
        assert_eq!(serde_json::to_string(&Country::Uk).unwrap(), r#""UK""#);
        assert_eq!(
            serde_json::from_str::<Country>(r#""Germany""#).unwrap(),
            Country::Germany
        );
    }
}
