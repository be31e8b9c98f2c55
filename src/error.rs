use thiserror::Error;

/// Reasons a scroll sample could not be taken for the current event.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeasureError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("viewport {0} could not be read")]
    Viewport(&'static str),
    #[error("element `{0}` is not mounted")]
    Unmounted(&'static str),
}
