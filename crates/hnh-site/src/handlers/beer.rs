//! Beer Review Handlers

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{
    handlers::not_found,
    templates::{BeerPageTemplate, ItemSummary, ListingTemplate},
    AppState,
};

/// Handler for /beer - lists every review in source order.
pub async fn index(State(state): State<AppState>) -> Response {
    let store = state.content();
    let items = store
        .beers()
        .iter()
        .map(|beer| ItemSummary {
            name: beer.name.clone(),
            href: format!("/beer/{}", beer.id),
        })
        .collect();

    ListingTemplate::new(
        "Beer - Hops & Hearth",
        "Beer",
        "Personal craft beer reviews with tasting notes, ratings, and photos.",
        "/beer",
        items,
    )
    .into_response()
}

/// Handler for /beer/{id} - a single review, or the 404 page.
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let store = state.content();
    match store.beer(&id) {
        Some(beer) => BeerPageTemplate::new(beer).into_response(),
        None => not_found(),
    }
}
