#[macro_use]
extern crate diesel;

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{get, middleware, web, App, HttpResponse, HttpServer, Responder};
use diesel::{prelude::*, r2d2};

mod actions;
mod error;
mod handlers;
mod models;
mod schema;

pub type DbPool = r2d2::Pool<r2d2::ConnectionManager<PgConnection>>;

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "healthy" }))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // initialize DB pool outside of `HttpServer::new` so that it is shared across all workers
    let pool = initialize_db_pool();

    let bind_addr =
        std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_owned());
    log::info!("starting HTTP server at http://{}", bind_addr);

    HttpServer::new(move || {
        App::new()
            // add DB pool handle to app data; enables use of `web::Data<DbPool>` extractor
            .app_data(web::Data::new(pool.clone()))
            .wrap(middleware::Logger::default())
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                let detail = err.to_string();
                let response = match err {
                    JsonPayloadError::ContentType => {
                        HttpResponse::UnsupportedMediaType().body("Unsupported Media Type")
                    }
                    JsonPayloadError::Deserialize(ref err) => HttpResponse::BadRequest()
                        .json(serde_json::json!({ "message": err.to_string() })),

                    _ => HttpResponse::BadRequest()
                        .json(serde_json::json!({ "message": detail })),
                };
                InternalError::from_response(err, response).into()
            }))
            .service(health)
            .service(
                // literal routes are registered before their `{id}` siblings
                web::scope("/api/v1")
                    .service(handlers::rooms::list_rooms)
                    .service(handlers::rooms::list_available_rooms)
                    .service(handlers::rooms::get_room)
                    .service(handlers::rooms::create_room)
                    .service(handlers::rooms::update_room)
                    .service(handlers::rooms::delete_room)
                    .service(handlers::equipments::list_equipments)
                    .service(handlers::equipments::get_equipment)
                    .service(handlers::equipments::create_equipment)
                    .service(handlers::equipments::update_equipment)
                    .service(handlers::equipments::delete_equipment)
                    .service(handlers::room_equipments::list_room_equipments)
                    .service(handlers::room_equipments::add_equipment_to_room)
                    .service(handlers::room_equipments::set_room_equipment_quantity)
                    .service(handlers::room_equipments::adjust_room_equipment_quantity)
                    .service(handlers::room_equipments::remove_equipment_from_room)
                    .service(handlers::bookings::list_bookings)
                    .service(handlers::bookings::get_booking)
                    .service(handlers::bookings::create_booking)
                    .service(handlers::bookings::approve_booking)
                    .service(handlers::bookings::reject_booking)
                    .service(handlers::bookings::cancel_booking)
                    .service(handlers::bookings::delete_booking)
                    .service(handlers::damage_reports::list_damage_reports)
                    .service(handlers::damage_reports::get_damage_report)
                    .service(handlers::damage_reports::create_damage_report)
                    .service(handlers::damage_reports::update_damage_report)
                    .service(handlers::damage_reports::mark_in_progress)
                    .service(handlers::damage_reports::resolve_damage_report)
                    .service(handlers::damage_reports::delete_damage_report)
                    .service(handlers::profiles::list_profiles)
                    .service(handlers::profiles::get_profile_summary)
                    .service(handlers::profiles::get_my_profile)
                    .service(handlers::profiles::check_profile_exists)
                    .service(handlers::profiles::get_profile)
                    .service(handlers::profiles::create_profile)
                    .service(handlers::profiles::update_my_profile)
                    .service(handlers::profiles::update_profile)
                    .service(handlers::profiles::change_profile_role)
                    .service(handlers::profiles::delete_profile),
            )
    })
    .bind(bind_addr)?
    .run()
    .await
}

fn initialize_db_pool() -> DbPool {
    let conn_spec = std::env::var("DATABASE_URL").expect("DATABASE_URL should be set");
    let manager = r2d2::ConnectionManager::<PgConnection>::new(conn_spec);
    r2d2::Pool::builder()
        .build(manager)
        .expect("DATABASE_URL should be a valid Postgres connection string")
}
