// ============================================================================
// Dispatch Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Handler {handler} failed while handling {event_type}")]
    HandlerFailed {
        event_type: &'static str,
        handler: &'static str,
        #[source]
        source: anyhow::Error,
    },
}
