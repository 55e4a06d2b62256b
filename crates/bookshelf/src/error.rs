use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog name cannot be empty")]
    InvalidName,

    #[error("catalog contains no records")]
    EmptyCatalog,
}

pub type CatalogResult<T> = Result<T, CatalogError>;
