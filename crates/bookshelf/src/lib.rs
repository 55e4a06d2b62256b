mod catalog;
mod dataset;
mod error;
mod literature;
mod record;

pub use catalog::Catalog;
pub use dataset::classic_novels;
pub use error::{CatalogError, CatalogResult};
pub use literature::{shelf_titles, ComicBook, Literature, Magazine};
pub use record::Record;
