//! Application state.

use std::sync::Arc;

use storelens_analysis::outreach::Signer;
use storelens_http::PageSource;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub pages: Arc<dyn PageSource>,
    pub signer: Arc<Signer>,
}

impl AppState {
    pub fn new(pages: Arc<dyn PageSource>, signer: Signer) -> Self {
        Self {
            pages,
            signer: Arc::new(signer),
        }
    }
}
