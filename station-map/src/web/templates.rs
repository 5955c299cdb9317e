//! Askama templates for the map page.

use askama::Template;

/// The map page.
///
/// Loads the mapping script with `initMap` as its callback; the page's
/// script then pulls `/api/map` and `/api/stations`. Without an API key the
/// page explains why there is no map instead of loading the script.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub api_key: Option<String>,
}

impl IndexTemplate {
    /// Script URL for the mapping service, when a key is available.
    pub fn script_url(&self) -> Option<String> {
        self.api_key.as_ref().map(|key| {
            format!("https://maps.googleapis.com/maps/api/js?key={key}&callback=initMap&v=weekly")
        })
    }
}
