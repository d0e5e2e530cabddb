use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ControllerError {
    #[error("render thread is no longer accepting input")]
    Disconnected,
}
