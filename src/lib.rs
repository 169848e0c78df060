use actix_cors::Cors;
use actix_files::Files;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware, web};
use tera::Tera;

use crate::generator::EmployeeGenerator;
use crate::models::config::ServerConfig;
use crate::repository::sheet::SheetRepository;
use crate::routes::employee::{close_employee, generate_employee, open_employee, save_employee};
use crate::routes::main::{expire_notification, show_index};

pub mod domain;
pub mod dto;
pub mod forms;
pub mod generator;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let repo = SheetRepository::new(&server_config)
        .map_err(|e| std::io::Error::other(format!("Failed to build sheet repository: {e}")))?;

    let generator = EmployeeGenerator::from_config(&server_config);

    // Key for the cookie session carrying dialog state and notifications.
    let secret_key = Key::from(server_config.secret.as_bytes());

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .cookie_domain(Some(format!(".{}", server_config.domain)))
                    .build(),
            )
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(show_index)
            .service(open_employee)
            .service(save_employee)
            .service(close_employee)
            .service(generate_employee)
            .service(expire_notification)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(generator.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
