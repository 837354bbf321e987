use actix_web::{delete, get, patch, post, put, web, HttpResponse};
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::DamageStatus;
use crate::{actions, models, DbPool};

#[get("/damage-reports")]
async fn list_damage_reports(
    pool: web::Data<DbPool>,
    query: web::Query<models::DamageReportListQuery>,
) -> Result<HttpResponse, ApiError> {
    let reports = web::block(move || {
        let mut conn = pool.get()?;
        actions::list_damage_reports(&mut conn, &query)
    })
    .await??;
    Ok(HttpResponse::Ok().json(reports))
}

#[get("/damage-reports/{report_id}")]
async fn get_damage_report(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let report_id = path.into_inner();
    let report = web::block(move || {
        let mut conn = pool.get()?;
        actions::get_damage_report(&mut conn, report_id)
    })
    .await??;
    Ok(HttpResponse::Ok().json(report))
}

#[post("/damage-reports")]
async fn create_damage_report(
    pool: web::Data<DbPool>,
    reporter: web::Query<models::Reporter>,
    form: web::Json<models::DamageReportCreate>,
) -> Result<HttpResponse, ApiError> {
    let report = web::block(move || {
        let mut conn = pool.get()?;
        actions::create_damage_report(&mut conn, reporter.reporter_id, &form)
    })
    .await??;
    Ok(HttpResponse::Created().json(report))
}

#[put("/damage-reports/{report_id}")]
async fn update_damage_report(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
    form: web::Json<models::DamageReportUpdate>,
) -> Result<HttpResponse, ApiError> {
    let report_id = path.into_inner();
    let report = web::block(move || {
        let mut conn = pool.get()?;
        actions::update_damage_report(&mut conn, report_id, &form)
    })
    .await??;
    Ok(HttpResponse::Ok().json(report))
}

#[patch("/damage-reports/{report_id}/in-progress")]
async fn mark_in_progress(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let report_id = path.into_inner();
    let report = web::block(move || {
        let mut conn = pool.get()?;
        actions::set_damage_report_status(&mut conn, report_id, DamageStatus::InProgress)
    })
    .await??;
    Ok(HttpResponse::Ok().json(report))
}

#[patch("/damage-reports/{report_id}/resolve")]
async fn resolve_damage_report(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let report_id = path.into_inner();
    let report = web::block(move || {
        let mut conn = pool.get()?;
        actions::set_damage_report_status(&mut conn, report_id, DamageStatus::Resolved)
    })
    .await??;
    Ok(HttpResponse::Ok().json(report))
}

#[delete("/damage-reports/{report_id}")]
async fn delete_damage_report(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let report_id = path.into_inner();
    web::block(move || {
        let mut conn = pool.get()?;
        actions::delete_damage_report(&mut conn, report_id)
    })
    .await??;
    Ok(HttpResponse::NoContent().finish())
}
