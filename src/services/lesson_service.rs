// ==================== LESSONS ====================
// Catálogo de lições com bloqueio de conteúdo Premium

use crate::{
    database::{Store, RELATED_LESSONS_LIMIT},
    models::{redact, InsertResponse, Lesson, LOCKED},
    services::user_service::{self, parse_object_id},
    utils::AppError,
};

/// Stores the lesson exactly as the author submitted it
pub async fn create_lesson(store: &dyn Store, mut lesson: Lesson) -> Result<InsertResponse, AppError> {
    lesson.id = None;
    lesson.fields.remove(LOCKED);
    let id = store.insert_lesson(&lesson).await?;
    log::info!("✅ Lesson created: {}", id);
    Ok(InsertResponse::from(id))
}

/// Lists every lesson, locking premium content unless the requester is a
/// premium member. Anonymous requesters are treated as non-premium.
pub async fn list_lessons(
    store: &dyn Store,
    requester_email: Option<&str>,
) -> Result<Vec<Lesson>, AppError> {
    let requester_is_premium = match requester_email {
        Some(email) => user_service::is_premium(store, email).await?,
        None => false,
    };

    let lessons = store.list_lessons().await?;
    Ok(lessons
        .into_iter()
        .map(|lesson| redact(lesson, requester_is_premium))
        .collect())
}

pub async fn get_lesson(store: &dyn Store, id: &str) -> Result<Option<Lesson>, AppError> {
    let id = parse_object_id(id)?;
    store.find_lesson_by_id(&id).await
}

pub async fn lessons_by_author(store: &dyn Store, email: &str) -> Result<Vec<Lesson>, AppError> {
    store.find_lessons_by_author(email).await
}

/// Up to six lessons sharing the category or emotional tone, never the
/// lesson itself. Unknown lessons have no relatives.
pub async fn related_lessons(store: &dyn Store, id: &str) -> Result<Vec<Lesson>, AppError> {
    let id = parse_object_id(id)?;
    match store.find_lesson_by_id(&id).await? {
        Some(lesson) => store.find_related_lessons(&lesson, RELATED_LESSONS_LIMIT).await,
        None => Ok(Vec::new()),
    }
}
