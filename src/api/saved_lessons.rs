use actix_web::{web, HttpResponse};

use crate::{
    database::Store,
    models::UpdateResponse,
    services::saved_lesson_service::{self, SaveLessonRequest},
    utils::{to_client_json_list, AppError},
};

#[utoipa::path(
    post,
    path = "/lessons/save",
    tag = "Saved Lessons",
    request_body = SaveLessonRequest,
    responses(
        (status = 200, description = "Lesson added to the saved set", body = UpdateResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn save_lesson(
    store: web::Data<dyn Store>,
    request: web::Json<SaveLessonRequest>,
) -> Result<HttpResponse, AppError> {
    log::info!(
        "🔖 POST /lessons/save - lesson: {}, user: {}",
        request.lesson_id,
        request.user_email
    );

    match saved_lesson_service::save_lesson(store.get_ref(), &request).await {
        Ok(result) => Ok(HttpResponse::Ok().json(result)),
        Err(e) => {
            log::warn!("⚠️ Failed to save lesson: {}", e);
            Err(e)
        }
    }
}

#[utoipa::path(
    get,
    path = "/lessons/save/{email}",
    tag = "Saved Lessons",
    params(("email" = String, Path, description = "User email")),
    responses((status = 200, description = "Saved lesson documents"))
)]
pub async fn get_saved_lessons(
    store: web::Data<dyn Store>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let email = path.into_inner();
    log::info!("🔖 GET /lessons/save/{}", email);

    let lessons = saved_lesson_service::saved_lessons(store.get_ref(), &email).await?;
    Ok(HttpResponse::Ok().json(to_client_json_list(&lessons)?))
}
