use faq_desk::faq::{FaqDesk, FaqLoadError, FaqLoader, ReplyTemplates};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{error, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) desk: Arc<FaqDesk>,
}

pub(crate) fn load_desk(path: &Path, replies: ReplyTemplates) -> Result<FaqDesk, FaqLoadError> {
    let set = FaqLoader::from_path(path)?;
    if set.is_empty() {
        warn!(path = %path.display(), "faq source holds no usable entries");
    }
    Ok(FaqDesk::with_replies(set, replies))
}

/// Keep serving with an empty desk when the data file is unusable, so callers
/// get the not-loaded reply instead of a dead endpoint.
pub(crate) fn load_desk_or_unloaded(path: &Path, replies: ReplyTemplates) -> FaqDesk {
    match load_desk(path, replies.clone()) {
        Ok(desk) => desk,
        Err(err) => {
            error!(path = %path.display(), error = %err, "failed to load faq data");
            FaqDesk::unloaded(replies)
        }
    }
}
