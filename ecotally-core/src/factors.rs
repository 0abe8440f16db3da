use crate::error::EcotallyError;
use ecotally_schemas::input::{Country, DietType, TransportMode};
use serde::{Deserialize, Serialize};
use std::path::Path;

// Built-in emission factors. Sources: EPA per-mile vehicle figures for car,
// per-passenger-mile averages for flight and public transit, IEA grid
// intensities per country, and published per-capita annual totals for the
// national averages.
static BUILTIN_FACTORS: &[u8] = include_bytes!("./factors.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeFactor {
    pub co2_per_mile: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportFactors {
    pub car: ModeFactor,
    pub flight: ModeFactor,
    pub public_transit: ModeFactor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietFactor {
    pub co2_per_year: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietFactors {
    pub omnivore: DietFactor,
    pub vegetarian: DietFactor,
    pub vegan: DietFactor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridFactor {
    pub co2_per_kwh: f64,
}

/// One grid-intensity row per country. Rows are named struct fields rather
/// than a map so a lookup can never miss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridFactors {
    pub usa: GridFactor,
    pub uk: GridFactor,
    pub germany: GridFactor,
    pub india: GridFactor,
    pub china: GridFactor,
    pub global: GridFactor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NationalAverages {
    pub usa: f64,
    pub uk: f64,
    pub germany: f64,
    pub india: f64,
    pub china: f64,
    pub global: f64,
}

/// The complete coefficient table. Immutable after construction, so it can
/// be shared freely across concurrent calculations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorTable {
    pub transport: TransportFactors,
    pub diet: DietFactors,
    pub electricity: GridFactors,
    pub national_averages: NationalAverages,
}

impl FactorTable {
    /// Returns the table shipped with the crate.
    pub fn builtin() -> Self {
        serde_json::from_slice(BUILTIN_FACTORS).expect("src/factors.json to be deserializable")
    }

    /// Loads an operator-supplied table from a JSON or YAML file,
    /// picked by extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, EcotallyError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let content = std::fs::read_to_string(path)
            .map_err(|e| EcotallyError::FileIO(display.clone(), e))?;

        let table: Self = match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .map_err(|e| EcotallyError::YamlParsing(display, e))?,
            _ => serde_json::from_str(&content)?,
        };
        table.validate()?;
        Ok(table)
    }

    /// Every coefficient must be a finite, non-negative number.
    pub fn validate(&self) -> Result<(), EcotallyError> {
        let values = [
            ("transport.car", self.transport.car.co2_per_mile),
            ("transport.flight", self.transport.flight.co2_per_mile),
            (
                "transport.public_transit",
                self.transport.public_transit.co2_per_mile,
            ),
            ("diet.omnivore", self.diet.omnivore.co2_per_year),
            ("diet.vegetarian", self.diet.vegetarian.co2_per_year),
            ("diet.vegan", self.diet.vegan.co2_per_year),
        ];
        let grids = Country::ALL.map(|c| (c, self.grid_intensity(c)));
        let averages = Country::ALL.map(|c| (c, self.national_average(c)));

        for (name, value) in values {
            if !value.is_finite() || value < 0.0 {
                return Err(EcotallyError::ConfigError(format!(
                    "coefficient '{name}' must be a finite non-negative number, got {value}"
                )));
            }
        }
        for (country, value) in grids.iter().chain(averages.iter()) {
            if !value.is_finite() || *value < 0.0 {
                return Err(EcotallyError::ConfigError(format!(
                    "coefficient for country '{country}' must be a finite non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// kg CO2e per mile travelled.
    pub fn transport_factor(&self, mode: TransportMode) -> f64 {
        match mode {
            TransportMode::Car => self.transport.car.co2_per_mile,
            TransportMode::Flight => self.transport.flight.co2_per_mile,
            TransportMode::PublicTransit => self.transport.public_transit.co2_per_mile,
        }
    }

    /// Flat annual footprint for the diet archetype, kg CO2e per year.
    pub fn diet_factor(&self, diet: DietType) -> f64 {
        match diet {
            DietType::Omnivore => self.diet.omnivore.co2_per_year,
            DietType::Vegetarian => self.diet.vegetarian.co2_per_year,
            DietType::Vegan => self.diet.vegan.co2_per_year,
        }
    }

    /// kg CO2e per kWh for the country's electricity grid.
    pub fn grid_intensity(&self, country: Country) -> f64 {
        match country {
            Country::Usa => self.electricity.usa.co2_per_kwh,
            Country::Uk => self.electricity.uk.co2_per_kwh,
            Country::Germany => self.electricity.germany.co2_per_kwh,
            Country::India => self.electricity.india.co2_per_kwh,
            Country::China => self.electricity.china.co2_per_kwh,
            Country::Global => self.electricity.global.co2_per_kwh,
        }
    }

    /// Precomputed per-capita reference total, kg CO2e per year.
    pub fn national_average(&self, country: Country) -> f64 {
        match country {
            Country::Usa => self.national_averages.usa,
            Country::Uk => self.national_averages.uk,
            Country::Germany => self.national_averages.germany,
            Country::India => self.national_averages.india,
            Country::China => self.national_averages.china,
            Country::Global => self.national_averages.global,
        }
    }
}
