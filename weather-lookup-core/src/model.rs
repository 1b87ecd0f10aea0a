use serde::{Deserialize, Serialize};
use std::fmt;

/// The text currently typed into the city field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryInput {
    text: String,
}

impl QueryInput {
    /// Replace the current text unconditionally.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}

/// Flat display record built from a successful `current.json` response.
///
/// Fields absent from the payload stay empty (or `None`) instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherResult {
    pub city: String,
    pub country: String,
    pub temperature_celsius: Option<f64>,
    pub condition_code: Option<i64>,
    pub icon_url: String,
    pub condition_text: String,
}

impl WeatherResult {
    /// A result with no city is treated as "nothing to show".
    pub fn is_empty(&self) -> bool {
        self.city.is_empty()
    }

    pub fn location_label(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }

    pub fn temperature_label(&self) -> String {
        match self.temperature_celsius {
            Some(t) => format!("{t} °C"),
            None => "°C".to_string(),
        }
    }

    /// The API hands out protocol-relative icon URLs (`//cdn.weatherapi.com/...`).
    pub fn icon_href(&self) -> String {
        if self.icon_url.starts_with("//") {
            format!("https:{}", self.icon_url)
        } else {
            self.icon_url.clone()
        }
    }
}

impl fmt::Display for WeatherResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.location_label())?;
        writeln!(f, "{}", self.temperature_label())?;
        write!(f, "{}", self.condition_text)?;
        if !self.icon_url.is_empty() {
            write!(f, "\n{}", self.icon_href())?;
        }
        Ok(())
    }
}
