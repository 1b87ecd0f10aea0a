//! Wire schema of WeatherAPI.com `current.json` and its mapping onto [`WeatherResult`].
//!
//! Every field is optional: the mapper renames fields and never validates them.

use serde::Deserialize;

use crate::{QueryError, WeatherResult};

#[derive(Debug, Default, Deserialize)]
pub struct WaCondition {
    pub code: Option<i64>,
    pub icon: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WaLocation {
    pub name: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WaCurrent {
    pub temp_c: Option<f64>,
    #[serde(default)]
    pub condition: WaCondition,
}

#[derive(Debug, Default, Deserialize)]
pub struct WaError {
    pub message: Option<String>,
}

/// Either shape the endpoint can answer with.
#[derive(Debug, Default, Deserialize)]
pub struct WaPayload {
    #[serde(default)]
    pub location: WaLocation,
    #[serde(default)]
    pub current: WaCurrent,
    pub error: Option<WaError>,
}

/// Pure field rename from the payload to the display record.
pub fn map(payload: WaPayload) -> WeatherResult {
    let WaPayload { location, current, .. } = payload;

    WeatherResult {
        city: location.name.unwrap_or_default(),
        country: location.country.unwrap_or_default(),
        temperature_celsius: current.temp_c,
        condition_code: current.condition.code,
        icon_url: current.condition.icon.unwrap_or_default(),
        condition_text: current.condition.text.unwrap_or_default(),
    }
}

/// Parse a response body: an `error` object wins over any weather data.
pub fn interpret(body: &str) -> Result<WeatherResult, QueryError> {
    let payload: WaPayload =
        serde_json::from_str(body).map_err(|e| QueryError::Unknown(e.to_string()))?;

    if let Some(err) = payload.error {
        return Err(QueryError::RemoteError(err.message.unwrap_or_default()));
    }

    Ok(map(payload))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONDON: &str = r#"{
        "location": { "name": "London", "country": "UK" },
        "current": {
            "temp_c": 15,
            "condition": { "code": 1000, "icon": "//x/icon.png", "text": "Sunny" }
        }
    }"#;

    #[test]
    fn maps_all_six_fields_verbatim() {
        let r = interpret(LONDON).expect("well-formed payload");

        assert_eq!(r.city, "London");
        assert_eq!(r.country, "UK");
        assert_eq!(r.temperature_celsius, Some(15.0));
        assert_eq!(r.condition_code, Some(1000));
        assert_eq!(r.icon_url, "//x/icon.png");
        assert_eq!(r.condition_text, "Sunny");
    }

    #[test]
    fn error_object_is_remote_error() {
        let body = r#"{"error":{"code":1006,"message":"No matching location found."}}"#;
        let err = interpret(body).unwrap_err();
        assert_eq!(err, QueryError::RemoteError("No matching location found.".into()));
    }

    #[test]
    fn error_object_wins_over_data() {
        let body = r#"{"location":{"name":"London"},"error":{"message":"API key disabled."}}"#;
        assert!(matches!(interpret(body), Err(QueryError::RemoteError(m)) if m == "API key disabled."));
    }

    #[test]
    fn missing_fields_become_empty() {
        let r = interpret(r#"{"location":{"name":"Oslo"}}"#).expect("partial payload");

        assert_eq!(r.city, "Oslo");
        assert_eq!(r.country, "");
        assert_eq!(r.temperature_celsius, None);
        assert_eq!(r.condition_code, None);
        assert_eq!(r.icon_url, "");
        assert_eq!(r.condition_text, "");
    }

    #[test]
    fn non_json_body_is_unknown() {
        let err = interpret("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, QueryError::Unknown(_)));
    }

    #[test]
    fn map_of_default_payload_is_empty_result() {
        assert_eq!(map(WaPayload::default()), WeatherResult::default());
    }
}
