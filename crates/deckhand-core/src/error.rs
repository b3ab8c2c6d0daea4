use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeckhandError {
    #[error("not found: {0}")]
    NotFound(String),
}
