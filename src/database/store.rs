use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::models::{Comment, Lesson, LessonReport, UpdateResponse, User};
use crate::utils::AppError;

pub const USERS: &str = "users";
pub const LESSONS: &str = "lessons";
pub const COMMENTS: &str = "comments";
pub const LESSON_REPORTS: &str = "lessonReports";

/// Most related lessons returned for a single lesson
pub const RELATED_LESSONS_LIMIT: i64 = 6;

/// Document store operations used by the services.
///
/// Every method is a single query or write against one collection.
#[async_trait]
pub trait Store: Send + Sync {
    /// Inserts a user. A second user with the same email is rejected with
    /// `AppError::Conflict`.
    async fn insert_user(&self, user: &User) -> Result<ObjectId, AppError>;
    async fn find_user_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    async fn list_users(&self) -> Result<Vec<User>, AppError>;
    /// Sets `isPremium` on a user that does not have it yet. Returns whether
    /// the record changed.
    async fn mark_premium(&self, id: &ObjectId) -> Result<bool, AppError>;
    /// Set-union of `lesson_id` into the user's `savedLessons`.
    async fn add_saved_lesson(
        &self,
        email: &str,
        lesson_id: &str,
    ) -> Result<UpdateResponse, AppError>;

    async fn insert_lesson(&self, lesson: &Lesson) -> Result<ObjectId, AppError>;
    async fn list_lessons(&self) -> Result<Vec<Lesson>, AppError>;
    async fn find_lesson_by_id(&self, id: &ObjectId) -> Result<Option<Lesson>, AppError>;
    async fn find_lessons_by_author(&self, email: &str) -> Result<Vec<Lesson>, AppError>;
    async fn find_lessons_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<Lesson>, AppError>;
    /// Lessons sharing a category or emotional tone with `lesson`, excluding
    /// it, in storage order.
    async fn find_related_lessons(
        &self,
        lesson: &Lesson,
        limit: i64,
    ) -> Result<Vec<Lesson>, AppError>;

    async fn insert_comment(&self, comment: &Comment) -> Result<ObjectId, AppError>;
    /// Comments of a lesson, newest first.
    async fn list_comments(&self, lesson_id: &str) -> Result<Vec<Comment>, AppError>;

    async fn insert_report(&self, report: &LessonReport) -> Result<ObjectId, AppError>;
}
