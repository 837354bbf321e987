use actix_web::{delete, get, patch, post, put, web, HttpResponse};
use uuid::Uuid;

use crate::error::ApiError;
use crate::{actions, models, DbPool};

// The acting user's identity (`user_id`) is the id minted by the external
// auth provider; authorization is a role check against the matching profile.

#[get("/profiles")]
async fn list_profiles(
    pool: web::Data<DbPool>,
    acting: web::Query<models::ActingUser>,
    query: web::Query<models::ProfileListQuery>,
) -> Result<HttpResponse, ApiError> {
    let profiles = web::block(move || {
        let mut conn = pool.get()?;
        actions::list_profiles(&mut conn, acting.user_id, &query)
    })
    .await??;
    Ok(HttpResponse::Ok().json(profiles))
}

#[get("/profiles/summary")]
async fn get_profile_summary(
    pool: web::Data<DbPool>,
    acting: web::Query<models::ActingUser>,
) -> Result<HttpResponse, ApiError> {
    let summary = web::block(move || {
        let mut conn = pool.get()?;
        actions::get_profile_summary(&mut conn, acting.user_id)
    })
    .await??;
    Ok(HttpResponse::Ok().json(summary))
}

#[get("/profiles/me")]
async fn get_my_profile(
    pool: web::Data<DbPool>,
    acting: web::Query<models::ActingUser>,
) -> Result<HttpResponse, ApiError> {
    let profile = web::block(move || {
        let mut conn = pool.get()?;
        actions::get_profile_by_auth_user_id(&mut conn, acting.user_id)
    })
    .await??;
    Ok(HttpResponse::Ok().json(profile))
}

#[get("/profiles/check/{auth_user_id}")]
async fn check_profile_exists(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let auth_user_id = path.into_inner();
    let profile = web::block(move || {
        let mut conn = pool.get()?;
        actions::get_profile_by_auth_user_id(&mut conn, auth_user_id)
    })
    .await??;
    Ok(HttpResponse::Ok().json(profile))
}

#[get("/profiles/{profile_id}")]
async fn get_profile(
    pool: web::Data<DbPool>,
    acting: web::Query<models::ActingUser>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let profile_id = path.into_inner();
    let profile = web::block(move || {
        let mut conn = pool.get()?;
        actions::get_profile(&mut conn, acting.user_id, profile_id)
    })
    .await??;
    Ok(HttpResponse::Ok().json(profile))
}

#[post("/profiles")]
async fn create_profile(
    pool: web::Data<DbPool>,
    form: web::Json<models::ProfileCreate>,
) -> Result<HttpResponse, ApiError> {
    if form.first_name.trim().is_empty() || form.last_name.trim().is_empty() {
        return Err(ApiError::Validation(
            "first_name and last_name must not be empty".to_owned(),
        ));
    }
    let profile = web::block(move || {
        let mut conn = pool.get()?;
        actions::create_profile(&mut conn, &form)
    })
    .await??;
    Ok(HttpResponse::Created().json(profile))
}

#[put("/profiles/me")]
async fn update_my_profile(
    pool: web::Data<DbPool>,
    acting: web::Query<models::ActingUser>,
    form: web::Json<models::ProfileUpdate>,
) -> Result<HttpResponse, ApiError> {
    let profile = web::block(move || {
        let mut conn = pool.get()?;
        actions::update_my_profile(&mut conn, acting.user_id, &form)
    })
    .await??;
    Ok(HttpResponse::Ok().json(profile))
}

#[put("/profiles/{profile_id}")]
async fn update_profile(
    pool: web::Data<DbPool>,
    acting: web::Query<models::ActingUser>,
    path: web::Path<Uuid>,
    form: web::Json<models::ProfileUpdate>,
) -> Result<HttpResponse, ApiError> {
    let profile_id = path.into_inner();
    let profile = web::block(move || {
        let mut conn = pool.get()?;
        actions::update_profile(&mut conn, acting.user_id, profile_id, &form)
    })
    .await??;
    Ok(HttpResponse::Ok().json(profile))
}

#[patch("/profiles/{profile_id}/role")]
async fn change_profile_role(
    pool: web::Data<DbPool>,
    acting: web::Query<models::ActingUser>,
    role: web::Query<models::RoleQuery>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let profile_id = path.into_inner();
    let profile = web::block(move || {
        let mut conn = pool.get()?;
        actions::change_profile_role(&mut conn, acting.user_id, profile_id, role.role)
    })
    .await??;
    Ok(HttpResponse::Ok().json(profile))
}

#[delete("/profiles/{profile_id}")]
async fn delete_profile(
    pool: web::Data<DbPool>,
    acting: web::Query<models::ActingUser>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let profile_id = path.into_inner();
    web::block(move || {
        let mut conn = pool.get()?;
        actions::delete_profile(&mut conn, acting.user_id, profile_id)
    })
    .await??;
    Ok(HttpResponse::NoContent().finish())
}
