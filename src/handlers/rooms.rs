use actix_web::{delete, get, post, put, web, HttpResponse};
use regex::Regex;
use uuid::Uuid;

use crate::error::ApiError;
use crate::{actions, models, DbPool};

fn validate_room_name(name: &str) -> Result<(), ApiError> {
    let re = Regex::new(r"^[a-zA-Z0-9 \-]+$").unwrap();
    if !re.is_match(name) {
        return Err(ApiError::Validation(
            "name should be an alphanumeric string. Spaces and hyphens are the only special characters allowed".to_owned(),
        ));
    }
    Ok(())
}

#[get("/rooms")]
async fn list_rooms(
    pool: web::Data<DbPool>,
    query: web::Query<models::RoomListQuery>,
) -> Result<HttpResponse, ApiError> {
    let rooms = web::block(move || {
        let mut conn = pool.get()?;
        actions::list_rooms(&mut conn, &query)
    })
    .await??;
    Ok(HttpResponse::Ok().json(rooms))
}

#[get("/rooms/available")]
async fn list_available_rooms(pool: web::Data<DbPool>) -> Result<HttpResponse, ApiError> {
    let rooms = web::block(move || {
        let mut conn = pool.get()?;
        actions::list_available_rooms(&mut conn)
    })
    .await??;
    Ok(HttpResponse::Ok().json(rooms))
}

#[get("/rooms/{room_id}")]
async fn get_room(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let room_id = path.into_inner();
    let room = web::block(move || {
        let mut conn = pool.get()?;
        actions::get_room_with_equipments(&mut conn, room_id)
    })
    .await??;
    Ok(HttpResponse::Ok().json(room))
}

#[post("/rooms")]
async fn create_room(
    pool: web::Data<DbPool>,
    form: web::Json<models::RoomCreate>,
) -> Result<HttpResponse, ApiError> {
    validate_room_name(&form.name)?;
    let room = web::block(move || {
        let mut conn = pool.get()?;
        actions::create_room(&mut conn, &form)
    })
    .await??;
    Ok(HttpResponse::Created().json(room))
}

#[put("/rooms/{room_id}")]
async fn update_room(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
    form: web::Json<models::RoomUpdate>,
) -> Result<HttpResponse, ApiError> {
    if let Some(name) = &form.name {
        validate_room_name(name)?;
    }
    let room_id = path.into_inner();
    let room = web::block(move || {
        let mut conn = pool.get()?;
        actions::update_room(&mut conn, room_id, &form)
    })
    .await??;
    Ok(HttpResponse::Ok().json(room))
}

#[delete("/rooms/{room_id}")]
async fn delete_room(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let room_id = path.into_inner();
    web::block(move || {
        let mut conn = pool.get()?;
        actions::delete_room(&mut conn, room_id)
    })
    .await??;
    Ok(HttpResponse::NoContent().finish())
}
