//! Home Page Handler

use axum::response::IntoResponse;

use crate::{templates::HomeTemplate, SITE_AUTHOR, SITE_URL};

/// Handler for / - hero, vertical cards, and Person structured data.
pub async fn home() -> impl IntoResponse {
    let jsonld = serde_json::json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "name": SITE_AUTHOR,
        "url": SITE_URL,
        "description": "Developer who loves craft beer and cooking",
        "knowsAbout": ["Web Development", "Craft Beer", "Cooking", "Recipes"],
    });

    HomeTemplate::new(
        "Hops & Hearth - Beer Reviews & Recipes",
        jsonld.to_string(),
    )
}
