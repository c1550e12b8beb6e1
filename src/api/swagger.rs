use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sapiens API",
        version = "1.0.0",
        description = "REST API for the Sapiens lesson platform.\n\n**Features:**\n- User registration and premium/role lookups\n- Lesson catalog with premium content locking\n- Comments, saved lessons and lesson reports\n- Stripe hosted checkout for the premium membership",
        contact(
            name = "Sapiens Team",
            email = "support@sapiens.io"
        )
    ),
    paths(
        // Health
        crate::api::health::health_check,

        // Users
        crate::api::users::create_user,
        crate::api::users::get_user,
        crate::api::users::get_user_by_email,
        crate::api::users::list_users,
        crate::api::users::get_premium_status,
        crate::api::users::get_role,

        // Lessons
        crate::api::lessons::create_lesson,
        crate::api::lessons::list_lessons,
        crate::api::lessons::get_lesson,
        crate::api::lessons::lessons_by_author,
        crate::api::lessons::related_lessons,

        // Saved lessons, comments and reports
        crate::api::saved_lessons::save_lesson,
        crate::api::saved_lessons::get_saved_lessons,
        crate::api::comments::add_comment,
        crate::api::comments::list_comments,
        crate::api::reports::report_lesson,

        // Payments
        crate::api::payments::create_checkout_session,
        crate::api::payments::payment_success,
    ),
    components(
        schemas(
            crate::api::health::HealthResponse,
            crate::models::User,
            crate::models::Lesson,
            crate::models::Comment,
            crate::models::LessonReport,
            crate::models::InsertResponse,
            crate::models::UpdateResponse,
            crate::services::user_service::PremiumStatusResponse,
            crate::services::user_service::RoleResponse,
            crate::services::saved_lesson_service::SaveLessonRequest,
            crate::services::report_service::ReportResponse,
            crate::services::payment_service::CreateCheckoutRequest,
            crate::services::payment_service::CheckoutResponse,
            crate::services::payment_service::PaymentSuccessRequest,
            crate::services::payment_service::PaymentSuccessResponse,
        )
    ),
    tags(
        (name = "Health", description = "Liveness and health endpoints."),
        (name = "Users", description = "Registration and user lookups, including premium status and role."),
        (name = "Lessons", description = "Lesson catalog. Premium lessons are locked for non-premium requesters."),
        (name = "Saved Lessons", description = "Per-user bookmark set of lessons."),
        (name = "Comments", description = "Lesson comments."),
        (name = "Reports", description = "Lesson reports."),
        (name = "Payments", description = "Stripe hosted checkout for the premium membership."),
    )
)]
pub struct ApiDoc;
