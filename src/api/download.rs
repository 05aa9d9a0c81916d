//! File download endpoint
//!
//! `GET /get/{id}` and `GET /get/{id}/{option}` — resolves a release, picks
//! the requested playable file (1-based option, default 1) and passes the
//! raw bytes through with an attachment name per the configured mode.

use actix_web::http::header;
use actix_web::{get, web, HttpResponse, Responder};
use tracing::{error, info};

use crate::config::Settings;
use crate::core::records::{outbound_file_name, select_file};
use crate::upstream::ZxArt;

#[get("/get/{id}")]
pub async fn download(
    path: web::Path<String>,
    gateway: web::Data<ZxArt>,
    settings: web::Data<Settings>,
) -> impl Responder {
    resolve_download(&path.into_inner(), 1, &gateway, &settings).await
}

#[get("/get/{id}/{option}")]
pub async fn download_option(
    path: web::Path<(String, String)>,
    gateway: web::Data<ZxArt>,
    settings: web::Data<Settings>,
) -> impl Responder {
    let (id, option) = path.into_inner();
    // lenient like the id: garbage coerces to 0, which can never match a
    // 1-based option and falls out as "option not found" below
    let option = option.parse::<i64>().unwrap_or(0);
    resolve_download(&id, option, &gateway, &settings).await
}

async fn resolve_download(
    raw_id: &str,
    option: i64,
    gateway: &ZxArt,
    settings: &Settings,
) -> HttpResponse {
    let release_id = raw_id.parse::<u64>().unwrap_or(0);
    if release_id == 0 {
        return HttpResponse::BadRequest().body("Error: Missing ID");
    }

    info!("Fetching release by ID={}", release_id);

    let release = match gateway.lookup_release(release_id).await {
        Ok(Some(release)) => release,
        Ok(None) => return HttpResponse::NotFound().body("Error: Release not found"),
        Err(e) => {
            error!("Download error: {}", e);
            return HttpResponse::InternalServerError().body("Error fetching file");
        }
    };

    let file = match select_file(&release, option) {
        Some(file) => file,
        None => return HttpResponse::NotFound().body("Error: File option not found"),
    };

    let file_id = file.id.unwrap_or_default();
    let file_name = file.file_name.as_deref().unwrap_or_default();
    let attachment_name = outbound_file_name(&release, file, settings.mode);

    info!(
        "Downloading file: id={} fileId={} name='{}'",
        release_id, file_id, file_name
    );

    let payload = match gateway.fetch_file(release_id, file_id, file_name).await {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("Download error: {}", e);
            return HttpResponse::InternalServerError().body("Error fetching file");
        }
    };

    HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, "application/octet-stream"))
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{attachment_name}\""),
        ))
        .body(payload)
}
