use mongodb::bson::{oid::ObjectId, Bson, Document};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const PREMIUM_ACCESS: &str = "Premium";

pub const DESCRIPTION: &str = "description";
pub const IMAGE: &str = "image";
pub const CATEGORY: &str = "category";
pub const EMOTIONAL_TONE: &str = "emotionalTone";
pub const ACCESS_LEVEL: &str = "accessLevel";
pub const AUTHOR_EMAIL: &str = "authorEmail";
/// Only set on list responses, never persisted
pub const LOCKED: &str = "locked";

/// Documento da collection "lessons"
///
/// Only the id is typed. Title, description, image, category, tone, access
/// level, author and whatever else the author submitted live in `fields`
/// exactly as sent, whatever their BSON type.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, ToSchema)]
pub struct Lesson {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
    #[schema(value_type = Option<String>)]
    pub id: Option<ObjectId>,
    #[serde(flatten)]
    #[schema(value_type = std::collections::HashMap<String, serde_json::Value>)]
    pub fields: Document,
}

impl Lesson {
    /// Field value, treating an explicit `null` as absent.
    pub fn field(&self, key: &str) -> Option<&Bson> {
        self.fields.get(key).filter(|value| !matches!(value, Bson::Null))
    }

    pub fn author_email(&self) -> Option<&str> {
        self.fields.get_str(AUTHOR_EMAIL).ok()
    }

    pub fn locked(&self) -> Option<bool> {
        self.fields.get_bool(LOCKED).ok()
    }

    pub fn is_premium_only(&self) -> bool {
        self.fields.get_str(ACCESS_LEVEL).ok() == Some(PREMIUM_ACCESS)
    }

    /// True when `other` shares this lesson's category or emotional tone.
    pub fn is_related_to(&self, other: &Lesson) -> bool {
        let same = |key: &str| self.field(key).is_some() && self.field(key) == other.field(key);
        same(CATEGORY) || same(EMOTIONAL_TONE)
    }
}

/// Hides premium content from requesters without a premium membership.
///
/// A locked lesson keeps its non-sensitive fields (title, category, author...)
/// but has its description and image blanked. Every other lesson passes
/// through untouched and is marked unlocked.
pub fn redact(mut lesson: Lesson, requester_is_premium: bool) -> Lesson {
    if lesson.is_premium_only() && !requester_is_premium {
        lesson.fields.insert(DESCRIPTION, "");
        lesson.fields.insert(IMAGE, "");
        lesson.fields.insert(LOCKED, true);
    } else {
        lesson.fields.insert(LOCKED, false);
    }
    lesson
}
