use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("event catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("event {id} has an unreadable date: {date:?}")]
    InvalidDate { id: u32, date: String },
    #[error("event id {0} appears more than once")]
    DuplicateId(u32),
}
