pub mod health;
pub mod users;
pub mod lessons;
pub mod saved_lessons;
pub mod comments;
pub mod reports;
pub mod payments;
pub mod swagger;

use actix_web::web;

/// Registers every route. Fixed segments come before `{id}` catch-alls so
/// `/users/email/...` and `/lessons/save/...` are not taken as ids.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health::root))
        .route("/health", web::get().to(health::health_check))
        // Users
        .route("/users", web::post().to(users::create_user))
        .route("/users", web::get().to(users::list_users))
        .route("/users/email/{email}", web::get().to(users::get_user_by_email))
        .route("/users/{email}/premium", web::get().to(users::get_premium_status))
        .route("/users/{email}/role", web::get().to(users::get_role))
        .route("/users/{id}", web::get().to(users::get_user))
        // Lessons
        .route("/lessons", web::post().to(lessons::create_lesson))
        .route("/lessons", web::get().to(lessons::list_lessons))
        .route("/lessons/save", web::post().to(saved_lessons::save_lesson))
        .route("/lessons/save/{email}", web::get().to(saved_lessons::get_saved_lessons))
        .route("/lessons/report", web::post().to(reports::report_lesson))
        .route("/lessons/author/{email}", web::get().to(lessons::lessons_by_author))
        .route("/lessons/related/{id}", web::get().to(lessons::related_lessons))
        .route("/lessons/{id}", web::get().to(lessons::get_lesson))
        // Comments
        .route("/comments", web::post().to(comments::add_comment))
        .route("/comments/{lessonId}", web::get().to(comments::list_comments))
        // Payments
        .route("/create-checkout-session", web::post().to(payments::create_checkout_session))
        .route("/payment-success", web::patch().to(payments::payment_success));
}
