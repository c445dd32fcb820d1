//! Static delivery of the accordion page.
//!
//! `/pkg` holds the compiled frontend, `/assets` the stylesheet. Missing
//! files under either are 404. Every other GET answers with `index.html`.

use actix_files::{Files, NamedFile};
use actix_web::dev::{fn_service, ServiceRequest, ServiceResponse};
use actix_web::{error, http::Method, web, HttpRequest, HttpResponse};
use std::path::PathBuf;

use crate::config::Config;

async fn index(req: HttpRequest, config: web::Data<Config>) -> actix_web::Result<NamedFile> {
    if req.method() != Method::GET {
        return Err(error::ErrorMethodNotAllowed("Only GET is supported"));
    }

    let path: PathBuf = [config.static_files_path.as_str(), "index.html"]
        .iter()
        .collect();
    Ok(NamedFile::open(path)?)
}

fn static_dir(mount_path: &str, dir: String) -> Files {
    Files::new(mount_path, dir).default_handler(fn_service(|req: ServiceRequest| async {
        let (req, _) = req.into_parts();
        Ok(ServiceResponse::new(req, HttpResponse::NotFound().finish()))
    }))
}

pub fn configure(cfg: &mut web::ServiceConfig, static_path: &str) {
    cfg.service(static_dir("/pkg", format!("{}/pkg", static_path)))
        .service(static_dir("/assets", format!("{}/assets", static_path)))
        .default_service(web::route().to(index));
}
