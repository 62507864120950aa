pub mod csv_source;

pub use csv_source::CsvSource;

use async_trait::async_trait;

use crate::{Dataset, LoadError};

/// A place athlete records can be loaded from
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Read the whole source into memory
    async fn load(&self) -> Result<Dataset, LoadError>;

    /// Get the source name/path
    fn source_name(&self) -> &str;
}
