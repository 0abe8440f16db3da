use anyhow::{Context, Result};
use ecotally_schemas::input::CalculationRequest;
use std::io::Read;
use std::path::Path;

/// Loads a calculation request from a JSON or YAML file, picked by
/// extension; a path of '-' reads JSON from stdin.
pub fn load(path: &Path) -> Result<CalculationRequest> {
    if path.as_os_str() == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read request from stdin")?;
        return serde_json::from_str(&content).context("Failed to parse request from stdin");
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read request file {}", path.display()))?;

    match path.extension().and_then(|s| s.to_str()) {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML request from {}", path.display())),
        _ => serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON request from {}", path.display())),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use ecotally_schemas::input::{Country, DietType};

    fn scratch_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("ecotally-request-{}-{}", std::process::id(), name))
    }

    #[test]
    fn loads_a_json_request_file() {
        let path = scratch_path("load.json");
        std::fs::write(
            &path,
            r#"{ "transport": { "car_miles": 100 }, "diet": "omnivore", "electricity": { "usage_kwh": 50 }, "country": "UK" }"#,
        )
        .unwrap();

        let request = load(&path).unwrap();
        assert_eq!(request.transport.car_miles, 100.0);
        assert_eq!(request.diet, DietType::Omnivore);
        assert_eq!(request.country, Country::Uk);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn loads_a_yaml_request_file() {
        let path = scratch_path("load.yaml");
        std::fs::write(
            &path,
            "transport:\n  flight_miles: 2500\ndiet: vegan\nelectricity:\n  usage_kwh: 0\n",
        )
        .unwrap();

        let request = load(&path).unwrap();
        assert_eq!(request.transport.flight_miles, 2500.0);
        assert_eq!(request.diet, DietType::Vegan);
        assert_eq!(request.country, Country::Global);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load(Path::new("/nonexistent/request.json")).is_err());
    }
}
