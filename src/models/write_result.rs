use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Resposta de inserção (mesmo formato do driver: acknowledged + insertedId)
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertResponse {
    pub acknowledged: bool,
    pub inserted_id: String,
}

impl From<ObjectId> for InsertResponse {
    fn from(id: ObjectId) -> Self {
        InsertResponse {
            acknowledged: true,
            inserted_id: id.to_hex(),
        }
    }
}

/// Outcome of a single-document update
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResponse {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
}

impl From<mongodb::results::UpdateResult> for UpdateResponse {
    fn from(result: mongodb::results::UpdateResult) -> Self {
        UpdateResponse {
            acknowledged: true,
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        }
    }
}
