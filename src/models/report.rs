use mongodb::bson::{oid::ObjectId, Bson, DateTime, Document};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Documento da collection "lessonReports"
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct LessonReport {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
    #[schema(value_type = Option<String>)]
    pub id: Option<ObjectId>,
    #[serde(rename = "lessonId", skip_serializing_if = "Option::is_none", default)]
    pub lesson_id: Option<String>,
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none", default)]
    #[schema(value_type = Option<String>)]
    pub created_at: Option<Bson>,
    /// Reason, reporter and whatever else the client sent
    #[serde(flatten)]
    #[schema(value_type = std::collections::HashMap<String, serde_json::Value>)]
    pub payload: Document,
}

impl LessonReport {
    pub fn stamped(mut self) -> Self {
        self.id = None;
        self.created_at = Some(Bson::DateTime(DateTime::now()));
        self
    }
}
