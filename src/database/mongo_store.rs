use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use mongodb::results::InsertOneResult;

use super::store::{Store, COMMENTS, LESSONS, LESSON_REPORTS, USERS};
use super::MongoDB;
use crate::models::{Comment, Lesson, LessonReport, UpdateResponse, User, CATEGORY, EMOTIONAL_TONE};
use crate::utils::{is_duplicate_key, AppError};

fn inserted_id(result: InsertOneResult) -> Result<ObjectId, AppError> {
    result
        .inserted_id
        .as_object_id()
        .ok_or_else(|| AppError::DatabaseError("Inserted document has no ObjectId".to_string()))
}

/// Maps a failed user insert, turning a unique-index violation on `email`
/// into the same conflict the pre-insert check reports.
fn user_insert_error(e: mongodb::error::Error) -> AppError {
    if is_duplicate_key(&e) {
        AppError::Conflict("user already exists".to_string())
    } else {
        AppError::from(e)
    }
}

/// `$or` filter over the fields a related lesson may share, `None` when the
/// lesson has neither a category nor a tone.
fn related_filter(lesson: &Lesson) -> Option<Document> {
    let mut shared: Vec<Bson> = Vec::new();
    for key in [CATEGORY, EMOTIONAL_TONE] {
        if let Some(value) = lesson.field(key) {
            let mut clause = Document::new();
            clause.insert(key, value.clone());
            shared.push(Bson::Document(clause));
        }
    }
    if shared.is_empty() {
        return None;
    }

    let mut filter = doc! { "$or": shared };
    if let Some(id) = lesson.id {
        filter.insert("_id", doc! { "$ne": id });
    }
    Some(filter)
}

#[async_trait]
impl Store for MongoDB {
    async fn insert_user(&self, user: &User) -> Result<ObjectId, AppError> {
        let result = self
            .collection::<User>(USERS)
            .insert_one(user)
            .await
            .map_err(user_insert_error)?;
        inserted_id(result)
    }

    async fn find_user_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError> {
        Ok(self
            .collection::<User>(USERS)
            .find_one(doc! { "_id": *id })
            .await?)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .collection::<User>(USERS)
            .find_one(doc! { "email": email })
            .await?)
    }

    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        let cursor = self.collection::<User>(USERS).find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn mark_premium(&self, id: &ObjectId) -> Result<bool, AppError> {
        let result = self
            .collection::<Document>(USERS)
            .update_one(
                doc! { "_id": *id, "isPremium": { "$ne": true } },
                doc! { "$set": { "isPremium": true } },
            )
            .await?;
        Ok(result.modified_count == 1)
    }

    async fn add_saved_lesson(
        &self,
        email: &str,
        lesson_id: &str,
    ) -> Result<UpdateResponse, AppError> {
        let result = self
            .collection::<Document>(USERS)
            .update_one(
                doc! { "email": email },
                doc! { "$addToSet": { "savedLessons": lesson_id } },
            )
            .await?;
        Ok(UpdateResponse::from(result))
    }

    async fn insert_lesson(&self, lesson: &Lesson) -> Result<ObjectId, AppError> {
        let result = self.collection::<Lesson>(LESSONS).insert_one(lesson).await?;
        inserted_id(result)
    }

    async fn list_lessons(&self) -> Result<Vec<Lesson>, AppError> {
        let cursor = self.collection::<Lesson>(LESSONS).find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_lesson_by_id(&self, id: &ObjectId) -> Result<Option<Lesson>, AppError> {
        Ok(self
            .collection::<Lesson>(LESSONS)
            .find_one(doc! { "_id": *id })
            .await?)
    }

    async fn find_lessons_by_author(&self, email: &str) -> Result<Vec<Lesson>, AppError> {
        let cursor = self
            .collection::<Lesson>(LESSONS)
            .find(doc! { "authorEmail": email })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_lessons_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<Lesson>, AppError> {
        let cursor = self
            .collection::<Lesson>(LESSONS)
            .find(doc! { "_id": { "$in": ids.to_vec() } })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_related_lessons(
        &self,
        lesson: &Lesson,
        limit: i64,
    ) -> Result<Vec<Lesson>, AppError> {
        let Some(filter) = related_filter(lesson) else {
            return Ok(Vec::new());
        };
        let cursor = self
            .collection::<Lesson>(LESSONS)
            .find(filter)
            .limit(limit)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn insert_comment(&self, comment: &Comment) -> Result<ObjectId, AppError> {
        let result = self.collection::<Comment>(COMMENTS).insert_one(comment).await?;
        inserted_id(result)
    }

    async fn list_comments(&self, lesson_id: &str) -> Result<Vec<Comment>, AppError> {
        let cursor = self
            .collection::<Comment>(COMMENTS)
            .find(doc! { "lessonId": lesson_id })
            .sort(doc! { "createdAt": -1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn insert_report(&self, report: &LessonReport) -> Result<ObjectId, AppError> {
        let result = self
            .collection::<LessonReport>(LESSON_REPORTS)
            .insert_one(report)
            .await?;
        inserted_id(result)
    }
}
