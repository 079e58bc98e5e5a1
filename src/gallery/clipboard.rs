//! Clipboard writes and the acknowledgment timer around them

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use tracing::{info, warn};

use crate::config::COPY_ACK_MS;
use crate::error::{GalleryError, GalleryResult};
use crate::state::CopyFeedback;

/// Write plain text to the system clipboard.
pub async fn write_text(text: &str) -> GalleryResult<()> {
    let eval = document::eval(
        r#"
        const text = await dioxus.recv();
        if (!navigator.clipboard) return "clipboard unavailable";
        try { await navigator.clipboard.writeText(text); return null; }
        catch (e) { return String(e); }
        "#,
    );
    eval.send(text).map_err(|e| GalleryError::Clipboard(e.to_string()))?;
    match eval.join::<Option<String>>().await {
        Ok(None) => Ok(()),
        Ok(Some(reason)) => Err(GalleryError::Clipboard(reason)),
        Err(e) => Err(GalleryError::Clipboard(e.to_string())),
    }
}

/// Copy `text`, raise the flag, and clear it after the acknowledgment delay
/// unless a newer copy took over.
pub fn copy_with_feedback(text: String, mut feedback: Signal<CopyFeedback>) {
    spawn(async move {
        match write_text(&text).await {
            Ok(()) => {
                info!(bytes = text.len(), "copied code");
                let token = feedback.write().begin();
                TimeoutFuture::new(COPY_ACK_MS).await;
                feedback.write().expire(token);
            }
            Err(e) => {
                warn!(error = %e, "clipboard write failed");
                feedback.write().fail(&e);
            }
        }
    });
}
