// ==================== SAVED LESSONS ====================
// Favoritos do usuário: conjunto de ids de lições em users.savedLessons

use mongodb::bson::oid::ObjectId;
use serde::Deserialize;

use crate::{
    database::Store,
    models::{Lesson, UpdateResponse},
    utils::AppError,
};

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct SaveLessonRequest {
    #[serde(rename = "lessonId")]
    pub lesson_id: String,
    #[serde(rename = "userEmail")]
    pub user_email: String,
}

/// Adds the lesson to the user's saved set; saving twice is a no-op.
pub async fn save_lesson(
    store: &dyn Store,
    request: &SaveLessonRequest,
) -> Result<UpdateResponse, AppError> {
    if store.find_user_by_email(&request.user_email).await?.is_none() {
        return Err(AppError::NotFound("user not found".to_string()));
    }

    let result = store
        .add_saved_lesson(&request.user_email, &request.lesson_id)
        .await?;
    log::info!(
        "🔖 Lesson {} saved for {} (modified: {})",
        request.lesson_id,
        request.user_email,
        result.modified_count
    );
    Ok(result)
}

/// Saved lesson documents, fetched in one batch. Ids that cannot be
/// ObjectIds never match a lesson and are skipped.
pub async fn saved_lessons(store: &dyn Store, email: &str) -> Result<Vec<Lesson>, AppError> {
    let saved = match store.find_user_by_email(email).await? {
        Some(user) => user.saved_lessons,
        None => return Ok(Vec::new()),
    };

    let ids: Vec<ObjectId> = saved
        .iter()
        .filter_map(|id| ObjectId::parse_str(id).ok())
        .collect();
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    store.find_lessons_by_ids(&ids).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::memory::MemoryStore;
    use crate::models::User;

    fn seed_user(store: &MemoryStore, email: &str) {
        let user: User = serde_json::from_value(serde_json::json!({ "email": email })).unwrap();
        store.seed_user(user);
    }

    fn request(lesson_id: &str, email: &str) -> SaveLessonRequest {
        SaveLessonRequest {
            lesson_id: lesson_id.to_string(),
            user_email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn test_saving_twice_keeps_single_entry() {
        let store = MemoryStore::new();
        seed_user(&store, "ada@example.com");
        let lesson_id = ObjectId::new().to_hex();

        let first = save_lesson(&store, &request(&lesson_id, "ada@example.com")).await.unwrap();
        let second = save_lesson(&store, &request(&lesson_id, "ada@example.com")).await.unwrap();

        assert_eq!(first.modified_count, 1);
        assert_eq!(second.matched_count, 1);
        assert_eq!(second.modified_count, 0);
        assert_eq!(store.users()[0].saved_lessons, vec![lesson_id]);
    }

    #[tokio::test]
    async fn test_saving_for_unknown_user_is_not_found() {
        let store = MemoryStore::new();
        let result = save_lesson(&store, &request("abc", "ghost@example.com")).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_saved_lessons_are_fetched() {
        let store = MemoryStore::new();
        seed_user(&store, "ada@example.com");
        let lesson_id = store.seed_lesson(Lesson {
            id: None,
            fields: mongodb::bson::doc! { "title": "Breathing" },
        });
        store.seed_lesson(Lesson {
            id: None,
            fields: mongodb::bson::doc! { "title": "Not saved" },
        });

        save_lesson(&store, &request(&lesson_id.to_hex(), "ada@example.com")).await.unwrap();
        save_lesson(&store, &request("garbage", "ada@example.com")).await.unwrap();

        let lessons = saved_lessons(&store, "ada@example.com").await.unwrap();
        assert_eq!(lessons.len(), 1);
        assert_eq!(lessons[0].fields.get_str("title").unwrap(), "Breathing");
    }

    #[tokio::test]
    async fn test_no_saved_lessons_is_empty() {
        let store = MemoryStore::new();
        seed_user(&store, "ada@example.com");
        assert!(saved_lessons(&store, "ada@example.com").await.unwrap().is_empty());
        assert!(saved_lessons(&store, "ghost@example.com").await.unwrap().is_empty());
    }
}
