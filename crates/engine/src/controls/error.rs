#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ControlsError {
    #[error("no sound registered under '{0}'")]
    MissingSound(String),
}
