use crate::{
    database::Store,
    models::{Comment, InsertResponse},
    utils::AppError,
};

pub async fn add_comment(store: &dyn Store, comment: Comment) -> Result<InsertResponse, AppError> {
    let comment = comment.stamped();
    let id = store.insert_comment(&comment).await?;
    log::info!(
        "💬 Comment {} added to lesson {}",
        id,
        comment.lesson_id.as_deref().unwrap_or("N/A")
    );
    Ok(InsertResponse::from(id))
}

/// Newest first
pub async fn list_comments(store: &dyn Store, lesson_id: &str) -> Result<Vec<Comment>, AppError> {
    store.list_comments(lesson_id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::memory::MemoryStore;
    use mongodb::bson::{Bson, DateTime};

    fn comment(lesson_id: &str, text: &str) -> Comment {
        serde_json::from_value(serde_json::json!({ "lessonId": lesson_id, "text": text })).unwrap()
    }

    #[tokio::test]
    async fn test_comments_listed_newest_first_per_lesson() {
        let store = MemoryStore::new();
        for (offset, text) in [(0, "first"), (2_000, "third"), (1_000, "second")] {
            let mut c = comment("lesson-1", text);
            c.created_at = Some(Bson::DateTime(DateTime::from_millis(1_700_000_000_000 + offset)));
            store.insert_comment(&c).await.unwrap();
        }
        add_comment(&store, comment("lesson-2", "elsewhere")).await.unwrap();

        let comments = list_comments(&store, "lesson-1").await.unwrap();
        let texts: Vec<&str> = comments.iter().map(|c| c.body.get_str("text").unwrap()).collect();
        assert_eq!(texts, vec!["third", "second", "first"]);
    }

    #[tokio::test]
    async fn test_created_at_is_stamped_by_server() {
        let store = MemoryStore::new();
        add_comment(&store, comment("lesson-1", "hi")).await.unwrap();
        let comments = list_comments(&store, "lesson-1").await.unwrap();
        assert!(comments[0].created_at().is_some());
    }
}
