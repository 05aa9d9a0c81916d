//! Search listing endpoint
//!
//! `GET /?s={term}&p={page}` — queries the archive and answers with the
//! `^`-delimited line-per-release format the legacy client expects.

use actix_web::http::header;
use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info};

use crate::config::Settings;
use crate::core::{query, records};
use crate::upstream::ZxArt;

/// Search query parameters. Both arrive as raw text so that malformed
/// values can be coerced instead of rejected by the extractor.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub s: Option<String>,
    #[serde(default)]
    pub p: Option<String>,
}

/// Page numbers are lenient: non-numeric or negative input means page 0.
fn coerce_page(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.parse::<i64>().ok())
        .and_then(|page| u32::try_from(page).ok())
        .unwrap_or(0)
}

#[get("/")]
pub async fn search(
    params: web::Query<SearchQuery>,
    gateway: web::Data<ZxArt>,
    settings: web::Data<Settings>,
) -> impl Responder {
    let term = params.s.as_deref().unwrap_or_default();
    if term.is_empty() {
        return HttpResponse::BadRequest().body("Error: Missing search term");
    }

    let page = coerce_page(params.p.as_deref());
    let filter = query::search_filter(term, page);

    info!(
        "Fetching from ZX-Art: search='{}' (page: {}, offset: {})",
        term,
        page,
        u64::from(page) * u64::from(query::PAGE_SIZE)
    );

    let releases = match gateway.search_releases(&filter).await {
        Ok(releases) => releases,
        Err(e) => {
            error!("API error: {}", e);
            return HttpResponse::InternalServerError().body("Error fetching data");
        }
    };

    let listing = records::render_listing(&releases, settings.mode);

    // the legacy client chokes on any Content-Type value, hence the
    // deliberately empty header
    HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, ""))
        .body(listing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_missing_term_is_rejected_without_upstream_call() {
        // gateway points at a closed port; the handler must answer before
        // ever touching it
        let gateway = ZxArt::new("http://127.0.0.1:1").unwrap();
        let settings = Settings {
            mode: crate::config::OutputMode::Friendly,
        };

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(gateway))
                .app_data(web::Data::new(settings))
                .service(search),
        )
        .await;

        for uri in ["/", "/?s=", "/?s=&p=3"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 400);

            let body = test::read_body(resp).await;
            assert_eq!(body, "Error: Missing search term");
        }
    }

    #[actix_web::test]
    async fn test_page_coercion() {
        assert_eq!(coerce_page(None), 0);
        assert_eq!(coerce_page(Some("2")), 2);
        assert_eq!(coerce_page(Some("-4")), 0);
        assert_eq!(coerce_page(Some("abc")), 0);
    }
}
