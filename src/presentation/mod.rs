// Presentation layer - Console report and HTTP surface
pub mod app_state;
pub mod console;
pub mod handlers;
pub mod router;
