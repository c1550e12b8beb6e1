use actix_web::{web, HttpResponse};

use crate::{
    database::Store,
    models::{Comment, InsertResponse},
    services::comment_service,
    utils::{to_client_json_list, AppError},
};

#[utoipa::path(
    post,
    path = "/comments",
    tag = "Comments",
    responses((status = 200, description = "Comment stored", body = InsertResponse))
)]
pub async fn add_comment(
    store: web::Data<dyn Store>,
    comment: web::Json<Comment>,
) -> Result<HttpResponse, AppError> {
    log::info!(
        "💬 POST /comments - lesson: {}",
        comment.lesson_id.as_deref().unwrap_or("N/A")
    );

    let response = comment_service::add_comment(store.get_ref(), comment.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[utoipa::path(
    get,
    path = "/comments/{lessonId}",
    tag = "Comments",
    params(("lessonId" = String, Path, description = "Lesson id")),
    responses((status = 200, description = "Comments, newest first"))
)]
pub async fn list_comments(
    store: web::Data<dyn Store>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let lesson_id = path.into_inner();
    log::info!("💬 GET /comments/{}", lesson_id);

    let comments = comment_service::list_comments(store.get_ref(), &lesson_id).await?;
    Ok(HttpResponse::Ok().json(to_client_json_list(&comments)?))
}
