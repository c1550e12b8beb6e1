// ==================== USERS ====================
// Cadastro, consulta e flags de acesso dos usuários

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::{
    database::Store,
    models::{InsertResponse, User, DEFAULT_ROLE},
    utils::AppError,
};

#[derive(Debug, Serialize, Deserialize, PartialEq, utoipa::ToSchema)]
pub struct PremiumStatusResponse {
    #[serde(rename = "isPremium")]
    pub is_premium: bool,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, utoipa::ToSchema)]
pub struct RoleResponse {
    pub role: String,
}

pub fn parse_object_id(raw: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(raw).map_err(|_| AppError::InvalidRequest(format!("'{}' is not a valid id", raw)))
}

/// Registers a new user with server-assigned defaults.
///
/// The existence check runs first so the common duplicate case never reaches
/// the write; concurrent signups that slip past it are caught by the unique
/// email index and surface as the same conflict.
pub async fn create_user(store: &dyn Store, user: User) -> Result<InsertResponse, AppError> {
    let user = user.with_signup_defaults();

    if store.find_user_by_email(&user.email).await?.is_some() {
        return Err(AppError::Conflict("user already exists".to_string()));
    }

    let id = store.insert_user(&user).await?;
    log::info!("✅ User created: {} ({})", user.email, id);
    Ok(InsertResponse::from(id))
}

pub async fn get_user_by_id(store: &dyn Store, id: &str) -> Result<Option<User>, AppError> {
    let id = parse_object_id(id)?;
    store.find_user_by_id(&id).await
}

pub async fn get_user_by_email(store: &dyn Store, email: &str) -> Result<Option<User>, AppError> {
    store.find_user_by_email(email).await
}

pub async fn list_users(store: &dyn Store) -> Result<Vec<User>, AppError> {
    store.list_users().await
}

/// Unknown users are not premium
pub async fn is_premium(store: &dyn Store, email: &str) -> Result<bool, AppError> {
    Ok(store
        .find_user_by_email(email)
        .await?
        .map_or(false, |user| user.is_premium))
}

/// Unknown users get the default role
pub async fn get_role(store: &dyn Store, email: &str) -> Result<String, AppError> {
    Ok(store
        .find_user_by_email(email)
        .await?
        .map(|user| user.role)
        .unwrap_or_else(|| DEFAULT_ROLE.to_string()))
}
