// Application state for HTTP handlers
use crate::application::glucose_service::GlucoseService;

#[derive(Clone)]
pub struct AppState {
    pub glucose_service: GlucoseService,
}
