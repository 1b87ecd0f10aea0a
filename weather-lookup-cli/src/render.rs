use chrono::Local;
use weather_lookup_core::{Phase, WeatherView};

/// Text shown for the current view state, the terminal version of the card.
pub fn card(view: &WeatherView) -> String {
    let mut out = String::new();

    if view.phase() == Phase::Loading {
        out.push_str("Cargando...\n");
    }

    if view.error().present {
        out.push_str(&format!("Error: {}\n", view.error().message));
    }

    if let Some(result) = view.result().filter(|r| !r.is_empty()) {
        out.push_str(&format!("{result}\n"));
        if let Some(at) = view.fetched_at() {
            out.push_str(&format!("(as of {})\n", at.with_timezone(&Local).format("%H:%M")));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use weather_lookup_core::{QueryError, StaleResultPolicy, WeatherResult};

    #[test]
    fn idle_view_renders_nothing() {
        assert_eq!(card(&WeatherView::default()), "");
    }

    #[test]
    fn success_renders_location_temperature_and_text() {
        let mut view = WeatherView::default();
        view.begin_submit();
        view.settle(Ok(WeatherResult {
            city: "London".into(),
            country: "UK".into(),
            temperature_celsius: Some(15.0),
            condition_code: Some(1000),
            icon_url: "//x/icon.png".into(),
            condition_text: "Sunny".into(),
        }));

        let text = card(&view);
        assert!(text.starts_with("London, UK\n15 °C\nSunny\nhttps://x/icon.png\n"));
        assert!(text.contains("(as of "));
    }

    #[test]
    fn failure_renders_error_message() {
        let mut view = WeatherView::new(StaleResultPolicy::Retain);
        view.begin_submit();
        view.settle(Err(QueryError::EmptyInput));

        assert_eq!(card(&view), "Error: El campo ciudad es obligatorio\n");
    }

    #[test]
    fn loading_renders_indicator() {
        let mut view = WeatherView::default();
        view.begin_submit();
        assert_eq!(card(&view), "Cargando...\n");
    }
}
