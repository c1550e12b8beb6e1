use actix_web::{web, HttpResponse};
use serde_json::Value;

use crate::{
    database::Store,
    models::{InsertResponse, User},
    services::user_service::{self, PremiumStatusResponse, RoleResponse},
    utils::{to_client_json, to_client_json_list, AppError},
};

fn user_or_null(user: Option<User>) -> Result<Value, AppError> {
    match user {
        Some(user) => to_client_json(&user),
        None => Ok(Value::Null),
    }
}

#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "User registered", body = InsertResponse),
        (status = 400, description = "User already exists")
    )
)]
pub async fn create_user(
    store: web::Data<dyn Store>,
    user: web::Json<User>,
) -> Result<HttpResponse, AppError> {
    log::info!("📝 POST /users - email: {}", user.email);

    match user_service::create_user(store.get_ref(), user.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => {
            log::warn!("❌ Registration failed: {}", e);
            Err(e)
        }
    }
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User ObjectId")),
    responses(
        (status = 200, description = "User document, or null when absent"),
        (status = 400, description = "Malformed id")
    )
)]
pub async fn get_user(
    store: web::Data<dyn Store>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    log::info!("👤 GET /users/{}", id);

    let user = user_service::get_user_by_id(store.get_ref(), &id).await?;
    Ok(HttpResponse::Ok().json(user_or_null(user)?))
}

#[utoipa::path(
    get,
    path = "/users/email/{email}",
    tag = "Users",
    params(("email" = String, Path, description = "User email")),
    responses((status = 200, description = "User document, or null when absent"))
)]
pub async fn get_user_by_email(
    store: web::Data<dyn Store>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let email = path.into_inner();
    log::info!("👤 GET /users/email/{}", email);

    let user = user_service::get_user_by_email(store.get_ref(), &email).await?;
    Ok(HttpResponse::Ok().json(user_or_null(user)?))
}

#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses((status = 200, description = "All users"))
)]
pub async fn list_users(store: web::Data<dyn Store>) -> Result<HttpResponse, AppError> {
    log::info!("👥 GET /users");

    let users = user_service::list_users(store.get_ref()).await?;
    log::info!("✅ Users retrieved: {}", users.len());
    Ok(HttpResponse::Ok().json(to_client_json_list(&users)?))
}

#[utoipa::path(
    get,
    path = "/users/{email}/premium",
    tag = "Users",
    params(("email" = String, Path, description = "User email")),
    responses((status = 200, description = "Premium flag, false for unknown users", body = PremiumStatusResponse))
)]
pub async fn get_premium_status(
    store: web::Data<dyn Store>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let email = path.into_inner();
    log::info!("⭐ GET /users/{}/premium", email);

    let is_premium = user_service::is_premium(store.get_ref(), &email).await?;
    Ok(HttpResponse::Ok().json(PremiumStatusResponse { is_premium }))
}

#[utoipa::path(
    get,
    path = "/users/{email}/role",
    tag = "Users",
    params(("email" = String, Path, description = "User email")),
    responses((status = 200, description = "Role, \"user\" for unknown users", body = RoleResponse))
)]
pub async fn get_role(
    store: web::Data<dyn Store>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let email = path.into_inner();
    log::info!("🎭 GET /users/{}/role", email);

    let role = user_service::get_role(store.get_ref(), &email).await?;
    Ok(HttpResponse::Ok().json(RoleResponse { role }))
}
