//! Askama Templates
//!
//! Template structs for rendering HTML pages. Pages own their data; handlers
//! copy what they need out of the content store before rendering.

use askama::Template;
use askama_web::WebTemplate;

use crate::{
    content::{Beer, Recipe},
    stars::{render_stars, StarFill},
    BUILD_VERSION, SITE_URL,
};

/// A link in the breadcrumb trail. The current page carries no href.
pub struct Crumb {
    pub label: String,
    pub href: Option<String>,
}

impl Crumb {
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
        }
    }

    pub fn current(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
        }
    }
}

/// One card in the shared listing grid.
pub struct ItemSummary {
    pub name: String,
    pub href: String,
}

/// Presentation form of one star glyph.
///
/// `pct` is the fill percentage (0 = empty, 100 = full, otherwise a
/// quantized partial fill drawn with a two-stop gradient). `index` keys the
/// per-glyph gradient id.
pub struct StarGlyph {
    pub index: usize,
    pub pct: u8,
}

/// Map a rating to the five glyphs the stars partial draws.
pub fn star_glyphs(rating: f64) -> Vec<StarGlyph> {
    render_stars(rating)
        .iter()
        .enumerate()
        .map(|(index, fill)| StarGlyph {
            index,
            pct: match fill {
                StarFill::Full => 100,
                StarFill::Empty => 0,
                StarFill::Partial(pct) => *pct,
            },
        })
        .collect()
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub title: String,
    pub jsonld: String,
    /// Build version for cache busting static assets.
    pub v: &'static str,
}

impl HomeTemplate {
    pub fn new(title: impl Into<String>, jsonld: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            jsonld: jsonld.into(),
            v: BUILD_VERSION,
        }
    }
}

/// Shared listing page template, used by both content verticals.
#[derive(Template, WebTemplate)]
#[template(path = "listing.html")]
pub struct ListingTemplate {
    pub title: String,
    pub heading: String,
    pub meta_description: String,
    pub canonical: String,
    pub crumbs: Vec<Crumb>,
    pub items: Vec<ItemSummary>,
    /// Build version for cache busting static assets.
    pub v: &'static str,
}

impl ListingTemplate {
    pub fn new(
        title: impl Into<String>,
        heading: impl Into<String>,
        meta_description: impl Into<String>,
        canonical_path: &str,
        items: Vec<ItemSummary>,
    ) -> Self {
        let heading = heading.into();
        Self {
            title: title.into(),
            meta_description: meta_description.into(),
            canonical: format!("{SITE_URL}{canonical_path}"),
            crumbs: vec![Crumb::link("Home", "/"), Crumb::current(heading.clone())],
            heading,
            items,
            v: BUILD_VERSION,
        }
    }
}

/// Beer detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "beer/show.html")]
pub struct BeerPageTemplate {
    pub title: String,
    pub name: String,
    pub description: String,
    pub stars: Vec<StarGlyph>,
    pub brewery: String,
    pub location: String,
    pub abv: String,
    pub style: Option<String>,
    pub reviewed: Option<String>,
    pub can_image: String,
    pub poured_image: String,
    pub meta_description: String,
    pub canonical: String,
    pub crumbs: Vec<Crumb>,
    /// Build version for cache busting static assets.
    pub v: &'static str,
}

impl BeerPageTemplate {
    pub fn new(beer: &Beer) -> Self {
        let location = match &beer.location.state {
            Some(state) => format!(
                "{}, {}, {}",
                beer.location.city, state, beer.location.country
            ),
            None => format!("{}, {}", beer.location.city, beer.location.country),
        };

        Self {
            title: format!("{} - Beer - Hops & Hearth", beer.name),
            name: beer.name.clone(),
            meta_description: truncate(&beer.description, 150),
            description: beer.description.clone(),
            stars: star_glyphs(beer.rating),
            brewery: beer.brewery.clone(),
            location,
            abv: beer.abv.to_string(),
            style: beer.style.clone(),
            reviewed: beer
                .time_reviewed
                .map(|t| t.format("%B %-d, %Y").to_string()),
            can_image: beer.can_image.clone(),
            poured_image: beer.poured_image.clone(),
            canonical: format!("{SITE_URL}/beer/{}", beer.id),
            crumbs: vec![
                Crumb::link("Home", "/"),
                Crumb::link("Beer", "/beer"),
                Crumb::current(beer.name.clone()),
            ],
            v: BUILD_VERSION,
        }
    }
}

/// Recipe detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "recipe/show.html")]
pub struct RecipePageTemplate {
    pub title: String,
    pub name: String,
    pub description: String,
    pub picture: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub cooked: String,
    pub jsonld: String,
    pub meta_description: String,
    pub canonical: String,
    pub crumbs: Vec<Crumb>,
    /// Build version for cache busting static assets.
    pub v: &'static str,
}

impl RecipePageTemplate {
    pub fn new(recipe: &Recipe, jsonld: impl Into<String>) -> Self {
        Self {
            title: format!("{} - Recipe - Hops & Hearth", recipe.name),
            name: recipe.name.clone(),
            meta_description: format!(
                "Recipe for {}. {}",
                recipe.name,
                truncate(&recipe.description, 150)
            ),
            description: recipe.description.clone(),
            picture: recipe.picture.clone(),
            ingredients: recipe.ingredients.clone(),
            steps: recipe.steps.clone(),
            cooked: recipe.time_cooked.format("%B %-d, %Y").to_string(),
            jsonld: jsonld.into(),
            canonical: format!("{SITE_URL}/recipe/{}", recipe.id),
            crumbs: vec![
                Crumb::link("Home", "/"),
                Crumb::link("Recipes", "/recipe"),
                Crumb::current(recipe.name.clone()),
            ],
            v: BUILD_VERSION,
        }
    }
}

/// 404 page template.
#[derive(Template, WebTemplate)]
#[template(path = "404.html")]
pub struct NotFoundTemplate {
    pub title: String,
    /// Build version for cache busting static assets.
    pub v: &'static str,
}

impl NotFoundTemplate {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            v: BUILD_VERSION,
        }
    }
}

/// Truncate for meta descriptions, on a char boundary.
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{cut}...")
    }
}

#[cfg(test)]
mod tests {
    use super::{star_glyphs, truncate};

    #[test]
    fn glyphs_carry_quantized_fill() {
        let glyphs = star_glyphs(3.6);
        let fills: Vec<u8> = glyphs.iter().map(|g| g.pct).collect();
        assert_eq!(fills, [100, 100, 100, 75, 0]);
    }

    #[test]
    fn truncate_leaves_short_text_alone() {
        assert_eq!(truncate("short", 150), "short");
    }

    #[test]
    fn truncate_cuts_long_text_with_ellipsis() {
        let long = "x".repeat(200);
        let cut = truncate(&long, 150);
        assert_eq!(cut.chars().count(), 153);
        assert!(cut.ends_with("..."));
    }
}
