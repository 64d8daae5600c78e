use std::sync::Arc;

use labelguard_core::application::LabelGuardService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: LabelGuardService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: LabelGuardService) -> Self {
        Self { args, service }
    }
}
