//! Recipe Handlers

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{
    content::Recipe,
    handlers::not_found,
    templates::{ItemSummary, ListingTemplate, RecipePageTemplate},
    AppState, SITE_AUTHOR, SITE_URL,
};

/// Handler for /recipe - lists every recipe in source order.
pub async fn index(State(state): State<AppState>) -> Response {
    let store = state.content();
    let items = store
        .recipes()
        .iter()
        .map(|recipe| ItemSummary {
            name: recipe.name.clone(),
            href: format!("/recipe/{}", recipe.id),
        })
        .collect();

    ListingTemplate::new(
        "Recipes - Hops & Hearth",
        "Recipes",
        "Favorite dishes from my kitchen, with ingredients and step-by-step instructions.",
        "/recipe",
        items,
    )
    .into_response()
}

/// Handler for /recipe/{id} - a single recipe, or the 404 page.
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let store = state.content();
    match store.recipe(&id) {
        Some(recipe) => {
            RecipePageTemplate::new(recipe, recipe_jsonld(recipe).to_string()).into_response()
        }
        None => not_found(),
    }
}

/// schema.org Recipe structured data with HowToStep instructions.
fn recipe_jsonld(recipe: &Recipe) -> serde_json::Value {
    let instructions: Vec<serde_json::Value> = recipe
        .steps
        .iter()
        .enumerate()
        .map(|(index, step)| {
            serde_json::json!({
                "@type": "HowToStep",
                "position": index + 1,
                "text": step,
            })
        })
        .collect();

    serde_json::json!({
        "@context": "https://schema.org",
        "@type": "Recipe",
        "name": recipe.name,
        "author": { "@type": "Person", "name": SITE_AUTHOR },
        "datePublished": recipe.time_cooked.to_rfc3339(),
        "description": recipe.description,
        "image": format!("{SITE_URL}{}", recipe.picture),
        "recipeInstructions": instructions,
        "recipeIngredient": recipe.ingredients,
        "url": format!("{SITE_URL}/recipe/{}", recipe.id),
    })
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::recipe_jsonld;
    use crate::content::Recipe;

    fn fixture() -> Recipe {
        Recipe {
            id: "smoked-chili".to_string(),
            name: "Smoked Chili".to_string(),
            picture: "/public/images/recipe/smoked-chili.jpg".to_string(),
            description: "Slow chili with smoked brisket.".to_string(),
            ingredients: vec!["brisket".to_string(), "beans".to_string()],
            steps: vec!["smoke the brisket".to_string(), "simmer".to_string()],
            time_cooked: chrono::Utc.with_ymd_and_hms(2025, 2, 8, 17, 0, 0).unwrap(),
        }
    }

    #[test]
    fn jsonld_has_positioned_steps() {
        let value = recipe_jsonld(&fixture());
        assert_eq!(value["@type"], "Recipe");
        assert_eq!(value["recipeInstructions"][0]["position"], 1);
        assert_eq!(value["recipeInstructions"][1]["position"], 2);
        assert_eq!(value["recipeInstructions"][1]["text"], "simmer");
    }

    #[test]
    fn jsonld_urls_are_absolute() {
        let value = recipe_jsonld(&fixture());
        assert_eq!(value["url"], "https://hopsandhearth.com/recipe/smoked-chili");
        assert_eq!(
            value["image"],
            "https://hopsandhearth.com/public/images/recipe/smoked-chili.jpg"
        );
    }
}
