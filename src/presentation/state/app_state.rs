use std::sync::Arc;

use crate::application::ports::StagingStore;
use crate::application::services::AnalysisService;
use crate::presentation::config::UploadSettings;

#[derive(Clone)]
pub struct AppState {
    pub analysis_service: Arc<AnalysisService>,
    pub staging_store: Arc<dyn StagingStore>,
    pub upload_settings: UploadSettings,
}
