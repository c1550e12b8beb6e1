pub mod user;
pub mod lesson;
pub mod comment;
pub mod report;
pub mod write_result;

pub use user::*;
pub use lesson::*;
pub use comment::*;
pub use report::*;
pub use write_result::*;
