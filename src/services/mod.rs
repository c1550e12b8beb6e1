pub mod user_service;
pub mod lesson_service;
pub mod comment_service;
pub mod report_service;
pub mod saved_lesson_service;
pub mod payment_service;
