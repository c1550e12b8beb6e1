use actix_web::{web, HttpResponse};

use crate::{
    database::Store,
    models::LessonReport,
    services::report_service::{self, ReportResponse},
    utils::AppError,
};

#[utoipa::path(
    post,
    path = "/lessons/report",
    tag = "Reports",
    responses((status = 200, description = "Report stored", body = ReportResponse))
)]
pub async fn report_lesson(
    store: web::Data<dyn Store>,
    report: web::Json<LessonReport>,
) -> Result<HttpResponse, AppError> {
    log::info!(
        "🚩 POST /lessons/report - lesson: {}",
        report.lesson_id.as_deref().unwrap_or("N/A")
    );

    let response = report_service::add_report(store.get_ref(), report.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}
