//! Sitemap Generation
//!
//! Builds sitemap.xml from the content store: the homepage, both listing
//! pages, and every detail page, in source order.

use std::fmt::Write as _;

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use chrono::{NaiveDate, Utc};

use crate::{content::ContentStore, AppState, SITE_URL};

/// Handler for /sitemap.xml.
pub async fn sitemap(State(state): State<AppState>) -> Response {
    let xml = sitemap_xml(&state.content(), Utc::now().date_naive());
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        xml,
    )
        .into_response()
}

/// Render the sitemap document. `today` becomes every entry's lastmod.
pub fn sitemap_xml(store: &ContentStore, today: NaiveDate) -> String {
    let lastmod = today.format("%Y-%m-%d").to_string();

    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");

    push_url(&mut xml, &format!("{SITE_URL}/"), &lastmod, "weekly", "1.0");
    push_url(&mut xml, &format!("{SITE_URL}/beer"), &lastmod, "weekly", "0.8");
    push_url(&mut xml, &format!("{SITE_URL}/recipe"), &lastmod, "weekly", "0.8");

    for id in store.beer_ids() {
        push_url(
            &mut xml,
            &format!("{SITE_URL}/beer/{id}"),
            &lastmod,
            "monthly",
            "0.6",
        );
    }
    for id in store.recipe_ids() {
        push_url(
            &mut xml,
            &format!("{SITE_URL}/recipe/{id}"),
            &lastmod,
            "monthly",
            "0.6",
        );
    }

    xml.push_str("</urlset>");
    xml
}

fn push_url(xml: &mut String, loc: &str, lastmod: &str, changefreq: &str, priority: &str) {
    let _ = write!(
        xml,
        "  <url>\n    <loc>{loc}</loc>\n    <lastmod>{lastmod}</lastmod>\n    \
         <changefreq>{changefreq}</changefreq>\n    <priority>{priority}</priority>\n  </url>\n"
    );
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::sitemap_xml;
    use crate::content::ContentStore;

    #[test]
    fn empty_store_still_lists_top_pages() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).expect("date");
        let xml = sitemap_xml(&ContentStore::default(), date);

        assert!(xml.starts_with("<?xml version=\"1.0\""));
        assert!(xml.contains("<loc>https://hopsandhearth.com/</loc>"));
        assert!(xml.contains("<loc>https://hopsandhearth.com/beer</loc>"));
        assert!(xml.contains("<loc>https://hopsandhearth.com/recipe</loc>"));
        assert!(xml.contains("<lastmod>2025-06-01</lastmod>"));
        assert!(xml.contains("<priority>1.0</priority>"));
        assert!(xml.ends_with("</urlset>"));
    }
}
