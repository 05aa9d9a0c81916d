//! HTTP routes of the legacy bridge

pub mod download;
pub mod search;

use actix_web::web;

/// Register the two legacy endpoints
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Search listing
        .service(search::search)
        // Binary downloads (with and without the file option)
        .service(download::download)
        .service(download::download_option);
}
