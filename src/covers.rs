//! Hand-off point for cover images of an accepted release.

use discmatch_common::{CoverImages, Result, SelectionResult};

/// Fetches or stores the cover images of an accepted release.
///
/// The matcher calls this once per run, after the selection is final. A
/// failing download is logged and does not undo the selection.
pub trait CoverDownloader: Send + Sync {
    /// Human-readable name used in logs.
    fn name(&self) -> &str;

    fn download(&self, covers: &CoverImages, selection: &SelectionResult) -> Result<()>;
}

/// Run `downloader` for the selection's covers, if it has any.
///
/// Returns whether the downloader was invoked and succeeded.
pub(crate) fn deliver(downloader: &dyn CoverDownloader, selection: &SelectionResult) -> bool {
    let Some(covers) = selection.cover_images.as_ref().filter(|c| !c.is_empty()) else {
        tracing::debug!("Selected release has no cover images");
        return false;
    };

    match downloader.download(covers, selection) {
        Ok(()) => {
            tracing::info!(
                "Cover downloader '{}' received {} image(s)",
                downloader.name(),
                covers.len()
            );
            true
        }
        Err(e) => {
            tracing::warn!("Cover downloader '{}' failed: {}", downloader.name(), e);
            false
        }
    }
}
