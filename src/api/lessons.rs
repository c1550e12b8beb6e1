use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    database::Store,
    models::{InsertResponse, Lesson},
    services::lesson_service,
    utils::{to_client_json, to_client_json_list, AppError},
};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LessonListQuery {
    /// Email of the requesting user
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

#[utoipa::path(
    post,
    path = "/lessons",
    tag = "Lessons",
    responses((status = 200, description = "Lesson stored", body = InsertResponse))
)]
pub async fn create_lesson(
    store: web::Data<dyn Store>,
    lesson: web::Json<Lesson>,
) -> Result<HttpResponse, AppError> {
    log::info!(
        "📚 POST /lessons - author: {}",
        lesson.author_email().unwrap_or("N/A")
    );

    let response = lesson_service::create_lesson(store.get_ref(), lesson.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[utoipa::path(
    get,
    path = "/lessons",
    tag = "Lessons",
    params(LessonListQuery),
    responses(
        (status = 200, description = "All lessons, premium ones locked for non-premium requesters"),
        (status = 500, description = "Database failure")
    )
)]
pub async fn list_lessons(
    store: web::Data<dyn Store>,
    query: web::Query<LessonListQuery>,
) -> Result<HttpResponse, AppError> {
    let requester = query.user_id.as_deref().filter(|email| !email.is_empty());
    log::info!("📚 GET /lessons - requester: {}", requester.unwrap_or("anonymous"));

    match lesson_service::list_lessons(store.get_ref(), requester).await {
        Ok(lessons) => {
            log::info!("✅ Lessons retrieved: {}", lessons.len());
            Ok(HttpResponse::Ok().json(to_client_json_list(&lessons)?))
        }
        Err(e) => {
            log::error!("❌ Failed to list lessons: {}", e);
            Err(e)
        }
    }
}

#[utoipa::path(
    get,
    path = "/lessons/{id}",
    tag = "Lessons",
    params(("id" = String, Path, description = "Lesson ObjectId")),
    responses(
        (status = 200, description = "Lesson document, or null when absent"),
        (status = 400, description = "Malformed id")
    )
)]
pub async fn get_lesson(
    store: web::Data<dyn Store>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    log::info!("📖 GET /lessons/{}", id);

    let body = match lesson_service::get_lesson(store.get_ref(), &id).await? {
        Some(lesson) => to_client_json(&lesson)?,
        None => Value::Null,
    };
    Ok(HttpResponse::Ok().json(body))
}

#[utoipa::path(
    get,
    path = "/lessons/author/{email}",
    tag = "Lessons",
    params(("email" = String, Path, description = "Author email")),
    responses((status = 200, description = "Lessons written by the author"))
)]
pub async fn lessons_by_author(
    store: web::Data<dyn Store>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let email = path.into_inner();
    log::info!("✍️  GET /lessons/author/{}", email);

    let lessons = lesson_service::lessons_by_author(store.get_ref(), &email).await?;
    Ok(HttpResponse::Ok().json(to_client_json_list(&lessons)?))
}

#[utoipa::path(
    get,
    path = "/lessons/related/{id}",
    tag = "Lessons",
    params(("id" = String, Path, description = "Lesson ObjectId")),
    responses((status = 200, description = "Up to 6 lessons sharing category or emotional tone"))
)]
pub async fn related_lessons(
    store: web::Data<dyn Store>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    log::info!("🔗 GET /lessons/related/{}", id);

    let lessons = lesson_service::related_lessons(store.get_ref(), &id).await?;
    log::info!("✅ Related lessons: {}", lessons.len());
    Ok(HttpResponse::Ok().json(to_client_json_list(&lessons)?))
}
