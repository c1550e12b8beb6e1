use serde::{Deserialize, Serialize};

use crate::{database::Store, models::LessonReport, utils::AppError};

#[derive(Debug, Serialize, Deserialize, PartialEq, utoipa::ToSchema)]
pub struct ReportResponse {
    pub success: bool,
}

/// Reports are append-only; there is no review workflow behind them.
pub async fn add_report(store: &dyn Store, report: LessonReport) -> Result<ReportResponse, AppError> {
    let report = report.stamped();
    let id = store.insert_report(&report).await?;
    log::info!(
        "🚩 Report {} filed for lesson {}",
        id,
        report.lesson_id.as_deref().unwrap_or("N/A")
    );
    Ok(ReportResponse { success: true })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::memory::MemoryStore;

    #[tokio::test]
    async fn test_report_is_stamped_and_stored() {
        let store = MemoryStore::new();
        let report: LessonReport = serde_json::from_value(serde_json::json!({
            "lessonId": "lesson-1",
            "reason": "spam"
        }))
        .unwrap();

        let response = add_report(&store, report).await.unwrap();

        assert!(response.success);
        let reports = store.reports();
        assert_eq!(reports.len(), 1);
        assert!(matches!(reports[0].created_at, Some(mongodb::bson::Bson::DateTime(_))));
        assert_eq!(reports[0].payload.get_str("reason").unwrap(), "spam");
    }
}
