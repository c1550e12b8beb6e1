//! In-memory `Store` used by the unit tests in place of MongoDB.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::sync::Mutex;

use super::store::Store;
use crate::models::{Comment, Lesson, LessonReport, UpdateResponse, User};
use crate::utils::AppError;

#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<Vec<User>>,
    lessons: Mutex<Vec<Lesson>>,
    comments: Mutex<Vec<Comment>>,
    reports: Mutex<Vec<LessonReport>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }

    pub fn reports(&self) -> Vec<LessonReport> {
        self.reports.lock().unwrap().clone()
    }

    /// Stores a user as-is, bypassing signup defaults.
    pub fn seed_user(&self, mut user: User) -> ObjectId {
        let id = user.id.unwrap_or_else(ObjectId::new);
        user.id = Some(id);
        self.users.lock().unwrap().push(user);
        id
    }

    pub fn seed_lesson(&self, mut lesson: Lesson) -> ObjectId {
        let id = lesson.id.unwrap_or_else(ObjectId::new);
        lesson.id = Some(id);
        self.lessons.lock().unwrap().push(lesson);
        id
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert_user(&self, user: &User) -> Result<ObjectId, AppError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(AppError::Conflict("user already exists".to_string()));
        }
        let id = ObjectId::new();
        let mut user = user.clone();
        user.id = Some(id);
        users.push(user);
        Ok(id)
    }

    async fn find_user_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id.as_ref() == Some(id)).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        Ok(self.users())
    }

    async fn mark_premium(&self, id: &ObjectId) -> Result<bool, AppError> {
        let mut users = self.users.lock().unwrap();
        match users
            .iter_mut()
            .find(|u| u.id.as_ref() == Some(id) && !u.is_premium)
        {
            Some(user) => {
                user.is_premium = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn add_saved_lesson(
        &self,
        email: &str,
        lesson_id: &str,
    ) -> Result<UpdateResponse, AppError> {
        let mut users = self.users.lock().unwrap();
        let mut outcome = UpdateResponse {
            acknowledged: true,
            matched_count: 0,
            modified_count: 0,
        };
        if let Some(user) = users.iter_mut().find(|u| u.email == email) {
            outcome.matched_count = 1;
            if !user.saved_lessons.iter().any(|saved| saved == lesson_id) {
                user.saved_lessons.push(lesson_id.to_string());
                outcome.modified_count = 1;
            }
        }
        Ok(outcome)
    }

    async fn insert_lesson(&self, lesson: &Lesson) -> Result<ObjectId, AppError> {
        Ok(self.seed_lesson(Lesson {
            id: None,
            ..lesson.clone()
        }))
    }

    async fn list_lessons(&self) -> Result<Vec<Lesson>, AppError> {
        Ok(self.lessons.lock().unwrap().clone())
    }

    async fn find_lesson_by_id(&self, id: &ObjectId) -> Result<Option<Lesson>, AppError> {
        let lessons = self.lessons.lock().unwrap();
        Ok(lessons.iter().find(|l| l.id.as_ref() == Some(id)).cloned())
    }

    async fn find_lessons_by_author(&self, email: &str) -> Result<Vec<Lesson>, AppError> {
        let lessons = self.lessons.lock().unwrap();
        Ok(lessons
            .iter()
            .filter(|l| l.author_email() == Some(email))
            .cloned()
            .collect())
    }

    async fn find_lessons_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<Lesson>, AppError> {
        let lessons = self.lessons.lock().unwrap();
        Ok(lessons
            .iter()
            .filter(|l| l.id.map_or(false, |id| ids.contains(&id)))
            .cloned()
            .collect())
    }

    async fn find_related_lessons(
        &self,
        lesson: &Lesson,
        limit: i64,
    ) -> Result<Vec<Lesson>, AppError> {
        let lessons = self.lessons.lock().unwrap();
        Ok(lessons
            .iter()
            .filter(|l| l.id != lesson.id && lesson.is_related_to(l))
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn insert_comment(&self, comment: &Comment) -> Result<ObjectId, AppError> {
        let id = ObjectId::new();
        let mut comment = comment.clone();
        comment.id = Some(id);
        self.comments.lock().unwrap().push(comment);
        Ok(id)
    }

    async fn list_comments(&self, lesson_id: &str) -> Result<Vec<Comment>, AppError> {
        let comments = self.comments.lock().unwrap();
        let mut matching: Vec<Comment> = comments
            .iter()
            .filter(|c| c.lesson_id.as_deref() == Some(lesson_id))
            .cloned()
            .collect();
        matching.sort_by_key(|c| std::cmp::Reverse(c.created_at()));
        Ok(matching)
    }

    async fn insert_report(&self, report: &LessonReport) -> Result<ObjectId, AppError> {
        let id = ObjectId::new();
        let mut report = report.clone();
        report.id = Some(id);
        self.reports.lock().unwrap().push(report);
        Ok(id)
    }
}
