use ui_logging::ui_debug;

/// Seam for flushing accumulated interaction logs.
pub trait LogDrain: Send + Sync {
    fn flush(&self);
}

/// Drain that only notes the flush in the application log.
#[derive(Debug, Default)]
pub struct NullLogDrain;

impl LogDrain for NullLogDrain {
    fn flush(&self) {
        ui_debug!("interaction log flush requested");
    }
}
