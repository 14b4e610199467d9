use chrono::{DateTime, Utc};
use ta_inference::TextService;

pub struct AppState {
    pub service: TextService,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(service: TextService) -> Self {
        Self {
            service,
            started_at: Utc::now(),
        }
    }
}
