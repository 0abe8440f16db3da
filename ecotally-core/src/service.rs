use crate::{calculator, error::EcotallyError, factors::FactorTable, recommend};
use ecotally_schemas::input::{CalculationRequest, Country, DietType};
use ecotally_schemas::result::CalculationResult;

/// Rejects negative or non-finite numeric fields before any computation
/// runs. The first offending field is reported by its request path.
pub fn validate(request: &CalculationRequest) -> Result<(), EcotallyError> {
    let fields = [
        ("transport.car_miles", request.transport.car_miles),
        ("transport.flight_miles", request.transport.flight_miles),
        (
            "transport.public_transit_miles",
            request.transport.public_transit_miles,
        ),
        ("electricity.usage_kwh", request.electricity.usage_kwh),
    ];
    for (field, value) in fields {
        if !value.is_finite() {
            return Err(EcotallyError::NonFiniteInput { field });
        }
        if value < 0.0 {
            return Err(EcotallyError::NegativeInput { field, value });
        }
    }
    Ok(())
}

/// Case-insensitive lookup into the closed diet set.
pub fn parse_diet(value: &str) -> Result<DietType, EcotallyError> {
    let lower = value.trim().to_ascii_lowercase();
    DietType::ALL
        .into_iter()
        .find(|diet| diet.as_str() == lower)
        .ok_or_else(|| EcotallyError::UnknownDiet(value.to_string()))
}

/// Case-insensitive lookup into the closed country set. Unknown countries
/// are an error, never silently mapped to the global row.
pub fn parse_country(value: &str) -> Result<Country, EcotallyError> {
    let lower = value.trim().to_ascii_lowercase();
    Country::ALL
        .into_iter()
        .find(|country| country.as_str().to_ascii_lowercase() == lower)
        .ok_or_else(|| EcotallyError::UnknownCountry(value.to_string()))
}

/// The request/response boundary: validate, calculate, recommend, and attach
/// the national-average reference. Stateless; every call is independent.
pub fn calculate_response(
    request: &CalculationRequest,
    table: &FactorTable,
) -> Result<CalculationResult, EcotallyError> {
    validate(request)?;

    let results = calculator::calculate(request, table);
    if !results.total.is_finite() {
        // Unreachable with validated input and a validated table.
        return Err(EcotallyError::Internal(format!(
            "non-finite total {} from validated input",
            results.total
        )));
    }

    let recommendations = recommend::recommend(&results);
    let national_average = table.national_average(request.country);

    Ok(CalculationResult {
        results,
        recommendations,
        national_average,
    })
}
