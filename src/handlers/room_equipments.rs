use actix_web::{delete, get, patch, post, put, web, HttpResponse};
use uuid::Uuid;

use crate::actions::{self, AdjustOutcome};
use crate::error::ApiError;
use crate::{models, DbPool};

#[get("/room-equipments/room/{room_id}")]
async fn list_room_equipments(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let room_id = path.into_inner();
    let links = web::block(move || {
        let mut conn = pool.get()?;
        actions::list_room_equipments(&mut conn, room_id)
    })
    .await??;
    Ok(HttpResponse::Ok().json(links))
}

#[post("/room-equipments")]
async fn add_equipment_to_room(
    pool: web::Data<DbPool>,
    form: web::Json<models::RoomEquipmentCreate>,
) -> Result<HttpResponse, ApiError> {
    let link = web::block(move || {
        let mut conn = pool.get()?;
        actions::add_equipment_to_room(&mut conn, &form)
    })
    .await??;
    Ok(HttpResponse::Created().json(link))
}

#[put("/room-equipments/{id}")]
async fn set_room_equipment_quantity(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
    form: web::Json<models::RoomEquipmentSetQuantity>,
) -> Result<HttpResponse, ApiError> {
    let link_id = path.into_inner();
    let link = web::block(move || {
        let mut conn = pool.get()?;
        actions::set_room_equipment_quantity(&mut conn, link_id, form.quantity)
    })
    .await??;
    Ok(HttpResponse::Ok().json(link))
}

#[patch("/room-equipments/{id}/adjust")]
async fn adjust_room_equipment_quantity(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
    query: web::Query<models::AdjustQuery>,
) -> Result<HttpResponse, ApiError> {
    let link_id = path.into_inner();
    let outcome = web::block(move || {
        let mut conn = pool.get()?;
        actions::adjust_room_equipment_quantity(&mut conn, link_id, query.amount)
    })
    .await??;
    let response = match outcome {
        AdjustOutcome::Updated(link) => HttpResponse::Ok().json(link),
        AdjustOutcome::Removed => HttpResponse::Ok().json(serde_json::json!({
            "message": "equipment removed from room (quantity reached 0)"
        })),
    };
    Ok(response)
}

#[delete("/room-equipments/{id}")]
async fn remove_equipment_from_room(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let link_id = path.into_inner();
    web::block(move || {
        let mut conn = pool.get()?;
        actions::remove_equipment_from_room(&mut conn, link_id)
    })
    .await??;
    Ok(HttpResponse::NoContent().finish())
}
