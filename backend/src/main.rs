use actix_web::{middleware::Logger, web, App, HttpServer};
use std::io;
use std::path::Path;

mod config;
mod handlers;

use config::Config;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config =
        Config::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    log::info!("Starting server at {}:{}", config.host, config.port);
    log::info!("Serving static files from: {}", config.static_files_path);

    if !Path::new(&config.static_files_path)
        .join("index.html")
        .is_file()
    {
        log::warn!(
            "No index.html in {}, build the frontend before serving",
            config.static_files_path
        );
    }

    let config_data = web::Data::new(config.clone());
    let static_files_path = config.static_files_path.clone();

    HttpServer::new(move || {
        App::new()
            .app_data(config_data.clone())
            .wrap(Logger::default())
            .configure(|cfg| handlers::configure(cfg, &static_files_path))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
