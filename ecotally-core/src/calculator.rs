use crate::factors::FactorTable;
use ecotally_schemas::input::{CalculationRequest, TransportMode};
use ecotally_schemas::result::{BreakdownDetail, EmissionsBreakdown, TransportDetail};

/// Display precision for per-category figures, in decimal places.
const PRECISION: f64 = 100.0;

fn round2(value: f64) -> f64 {
    (value * PRECISION).round() / PRECISION
}

/// Maps a validated request to its emissions breakdown. Pure: no I/O, no
/// clock, no shared state, so identical inputs always produce identical
/// outputs and concurrent calls need no synchronization.
///
/// Each transport mode's sub-total is rounded to display precision first and
/// the category total is the sum of the rounded sub-totals, so the detail
/// always adds up to the category figure exactly. The grand total is the
/// plain sum of the three category totals with no re-rounding.
pub fn calculate(request: &CalculationRequest, table: &FactorTable) -> EmissionsBreakdown {
    let car = round2(request.transport.car_miles * table.transport_factor(TransportMode::Car));
    let flight =
        round2(request.transport.flight_miles * table.transport_factor(TransportMode::Flight));
    let public_transit = round2(
        request.transport.public_transit_miles
            * table.transport_factor(TransportMode::PublicTransit),
    );
    let transport = car + flight + public_transit;

    let diet = table.diet_factor(request.diet);

    let electricity = round2(request.electricity.usage_kwh * table.grid_intensity(request.country));

    let total = transport + diet + electricity;

    EmissionsBreakdown {
        transport,
        diet,
        electricity,
        total,
        breakdown: BreakdownDetail {
            transport: TransportDetail {
                car,
                flight,
                public_transit,
            },
            diet,
            electricity,
        },
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use ecotally_schemas::input::{Country, DietType, ElectricityInput, TransportInput};

    fn request(
        car_miles: f64,
        flight_miles: f64,
        public_transit_miles: f64,
        diet: DietType,
        usage_kwh: f64,
        country: Country,
    ) -> CalculationRequest {
        CalculationRequest {
            transport: TransportInput {
                car_miles,
                flight_miles,
                public_transit_miles,
            },
            diet,
            electricity: ElectricityInput { usage_kwh },
            country,
        }
    }

    #[test]
    fn transport_is_linear_in_the_factors() {
        let table = FactorTable::builtin();
        let request = request(5000.0, 2000.0, 500.0, DietType::Vegetarian, 0.0, Country::Uk);
        let breakdown = calculate(&request, &table);

        assert_eq!(breakdown.breakdown.transport.car, 2020.0);
        assert_eq!(breakdown.breakdown.transport.flight, 492.0);
        assert_eq!(breakdown.breakdown.transport.public_transit, 44.5);
        assert_eq!(breakdown.transport, breakdown.breakdown.transport.sum());
    }

    #[test]
    fn total_is_the_sum_of_its_parts() {
        let table = FactorTable::builtin();
        let request = request(
            1234.5,
            678.9,
            42.0,
            DietType::Omnivore,
            3456.7,
            Country::India,
        );
        let breakdown = calculate(&request, &table);

        assert_eq!(
            breakdown.total,
            breakdown.transport + breakdown.diet + breakdown.electricity
        );
        assert_eq!(breakdown.transport, breakdown.breakdown.transport.sum());
    }

    #[test]
    fn car_only_scenario_for_usa_omnivore() {
        let table = FactorTable::builtin();
        let request = request(1000.0, 0.0, 0.0, DietType::Omnivore, 0.0, Country::Usa);
        let breakdown = calculate(&request, &table);

        assert_eq!(breakdown.breakdown.transport.car, 404.0);
        assert_eq!(breakdown.breakdown.transport.flight, 0.0);
        assert_eq!(breakdown.diet, 2500.0);
        assert_eq!(breakdown.electricity, 0.0);
        assert_eq!(breakdown.total, breakdown.transport + 2500.0);
    }

    #[test]
    fn all_zero_input_yields_a_zero_footprint_for_the_diet() {
        // Diet is a flat annual figure, so the only truly zero breakdown
        // needs a zero diet coefficient as well.
        let mut table = FactorTable::builtin();
        table.diet.vegan.co2_per_year = 0.0;
        let request = request(0.0, 0.0, 0.0, DietType::Vegan, 0.0, Country::Global);
        let breakdown = calculate(&request, &table);

        assert_eq!(breakdown.transport, 0.0);
        assert_eq!(breakdown.diet, 0.0);
        assert_eq!(breakdown.electricity, 0.0);
        assert_eq!(breakdown.total, 0.0);
    }

    #[test]
    fn electricity_uses_the_requested_country_grid() {
        let table = FactorTable::builtin();
        let in_india = calculate(
            &request(0.0, 0.0, 0.0, DietType::Vegan, 1000.0, Country::India),
            &table,
        );
        let in_uk = calculate(
            &request(0.0, 0.0, 0.0, DietType::Vegan, 1000.0, Country::Uk),
            &table,
        );
        assert_eq!(in_india.electricity, 710.0);
        assert_eq!(in_uk.electricity, 210.0);
    }

    #[test]
    fn identical_input_yields_identical_output() {
        let table = FactorTable::builtin();
        let request = request(812.3, 99.9, 10.0, DietType::Vegetarian, 250.0, Country::China);
        assert_eq!(calculate(&request, &table), calculate(&request, &table));
    }
}
