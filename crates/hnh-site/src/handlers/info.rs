//! Info Endpoint
//!
//! A single static JSON endpoint listing external resources.

use axum::Json;
use serde::Serialize;

/// One external resource link.
#[derive(Clone, Debug, Serialize)]
pub struct Resource {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub url: String,
}

/// The static resource list served by /api/info.
pub fn resources() -> Vec<Resource> {
    vec![Resource {
        id: 1,
        name: "Cellar Log".to_string(),
        description: "Track your beer cellar over time".to_string(),
        url: "https://cellar.hopsandhearth.com".to_string(),
    }]
}

/// Handler for /api/info.
pub async fn info() -> Json<Vec<Resource>> {
    Json(resources())
}

#[cfg(test)]
mod tests {
    use super::resources;

    #[test]
    fn resources_serialize_with_expected_fields() {
        let value = serde_json::to_value(resources()).expect("serialize resources");
        assert_eq!(value[0]["id"], 1);
        assert_eq!(value[0]["name"], "Cellar Log");
        assert!(value[0]["url"].as_str().is_some_and(|u| u.starts_with("https://")));
    }
}
