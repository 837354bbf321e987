use actix_web::{delete, get, patch, post, web, HttpResponse};
use uuid::Uuid;

use crate::error::ApiError;
use crate::{actions, models, DbPool};

#[get("/bookings")]
async fn list_bookings(
    pool: web::Data<DbPool>,
    query: web::Query<models::BookingListQuery>,
) -> Result<HttpResponse, ApiError> {
    let bookings = web::block(move || {
        let mut conn = pool.get()?;
        actions::list_bookings(&mut conn, &query)
    })
    .await??;
    Ok(HttpResponse::Ok().json(bookings))
}

#[get("/bookings/{booking_id}")]
async fn get_booking(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let booking_id = path.into_inner();
    let booking = web::block(move || {
        let mut conn = pool.get()?;
        actions::get_booking(&mut conn, booking_id)
    })
    .await??;
    Ok(HttpResponse::Ok().json(booking))
}

#[post("/bookings")]
async fn create_booking(
    pool: web::Data<DbPool>,
    acting: web::Query<models::ActingUser>,
    form: web::Json<models::BookingCreate>,
) -> Result<HttpResponse, ApiError> {
    let booking = web::block(move || {
        let mut conn = pool.get()?;
        actions::create_booking(&mut conn, acting.user_id, &form)
    })
    .await??;
    Ok(HttpResponse::Created().json(booking))
}

#[patch("/bookings/{booking_id}/approve")]
async fn approve_booking(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let booking_id = path.into_inner();
    let booking = web::block(move || {
        let mut conn = pool.get()?;
        actions::approve_booking(&mut conn, booking_id)
    })
    .await??;
    Ok(HttpResponse::Ok().json(booking))
}

#[patch("/bookings/{booking_id}/reject")]
async fn reject_booking(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let booking_id = path.into_inner();
    let booking = web::block(move || {
        let mut conn = pool.get()?;
        actions::reject_booking(&mut conn, booking_id)
    })
    .await??;
    Ok(HttpResponse::Ok().json(booking))
}

#[patch("/bookings/{booking_id}/cancel")]
async fn cancel_booking(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let booking_id = path.into_inner();
    let booking = web::block(move || {
        let mut conn = pool.get()?;
        actions::cancel_booking(&mut conn, booking_id)
    })
    .await??;
    Ok(HttpResponse::Ok().json(booking))
}

#[delete("/bookings/{booking_id}")]
async fn delete_booking(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let booking_id = path.into_inner();
    web::block(move || {
        let mut conn = pool.get()?;
        actions::delete_booking(&mut conn, booking_id)
    })
    .await??;
    Ok(HttpResponse::NoContent().finish())
}
