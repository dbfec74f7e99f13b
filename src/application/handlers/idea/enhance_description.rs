//! EnhanceDescriptionHandler - expands a short idea description.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::ports::CivicIntelligence;

pub struct EnhanceDescriptionHandler {
    intelligence: Arc<dyn CivicIntelligence>,
}

impl EnhanceDescriptionHandler {
    pub fn new(intelligence: Arc<dyn CivicIntelligence>) -> Self {
        Self { intelligence }
    }

    /// Returns the expanded text, or `text` unchanged when the
    /// collaborator fails or answers with nothing.
    pub async fn handle(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return text.to_string();
        }
        match self.intelligence.enhance_text(text).await {
            Ok(enhanced) if !enhanced.trim().is_empty() => {
                debug!(chars = enhanced.len(), "description enhanced");
                enhanced.trim().to_string()
            }
            Ok(_) => {
                warn!("empty enhancement, keeping original text");
                text.to_string()
            }
            Err(e) => {
                warn!(error = %e, "enhancement failed, keeping original text");
                text.to_string()
            }
        }
    }
}
