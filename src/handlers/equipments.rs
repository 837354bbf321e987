use actix_web::{delete, get, post, put, web, HttpResponse};
use regex::Regex;
use uuid::Uuid;

use crate::error::ApiError;
use crate::{actions, models, DbPool};

fn validate_equipment_name(name: &str) -> Result<(), ApiError> {
    let re = Regex::new(r"^[a-zA-Z0-9 \-]+$").unwrap();
    if !re.is_match(name) {
        return Err(ApiError::Validation(
            "name should be an alphanumeric string. Spaces and hyphens are the only special characters allowed".to_owned(),
        ));
    }
    Ok(())
}

#[get("/equipments")]
async fn list_equipments(
    pool: web::Data<DbPool>,
    query: web::Query<models::PageQuery>,
) -> Result<HttpResponse, ApiError> {
    let equipments = web::block(move || {
        let mut conn = pool.get()?;
        actions::list_equipments(&mut conn, &query)
    })
    .await??;
    Ok(HttpResponse::Ok().json(equipments))
}

#[get("/equipments/{equipment_id}")]
async fn get_equipment(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let equipment_id = path.into_inner();
    let equipment = web::block(move || {
        let mut conn = pool.get()?;
        actions::get_equipment(&mut conn, equipment_id)
    })
    .await??;
    Ok(HttpResponse::Ok().json(equipment))
}

#[post("/equipments")]
async fn create_equipment(
    pool: web::Data<DbPool>,
    form: web::Json<models::EquipmentCreate>,
) -> Result<HttpResponse, ApiError> {
    validate_equipment_name(&form.name)?;
    let equipment = web::block(move || {
        let mut conn = pool.get()?;
        actions::create_equipment(&mut conn, &form)
    })
    .await??;
    Ok(HttpResponse::Created().json(equipment))
}

#[put("/equipments/{equipment_id}")]
async fn update_equipment(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
    form: web::Json<models::EquipmentUpdate>,
) -> Result<HttpResponse, ApiError> {
    if let Some(name) = &form.name {
        validate_equipment_name(name)?;
    }
    let equipment_id = path.into_inner();
    let equipment = web::block(move || {
        let mut conn = pool.get()?;
        actions::update_equipment(&mut conn, equipment_id, &form)
    })
    .await??;
    Ok(HttpResponse::Ok().json(equipment))
}

#[delete("/equipments/{equipment_id}")]
async fn delete_equipment(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let equipment_id = path.into_inner();
    web::block(move || {
        let mut conn = pool.get()?;
        actions::delete_equipment(&mut conn, equipment_id)
    })
    .await??;
    Ok(HttpResponse::NoContent().finish())
}
