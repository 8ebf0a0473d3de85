use std::sync::Arc;
use webhook_signatures::Verifier;

/// Application state shared across all requests
#[derive(Clone)]
pub struct Zustand {
    pub verifier: Arc<dyn Verifier>,
}
