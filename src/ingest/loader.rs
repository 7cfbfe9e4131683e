//! Roster loading from CSV.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use crate::config::IngestConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::Dataset;

use super::raw::RawEmployeeRow;

/// Reads an HR roster and builds a validated [`Dataset`].
///
/// # Example
///
/// ```
/// use attrition_engine::config::IngestConfig;
/// use attrition_engine::ingest::DatasetLoader;
///
/// let csv = "Employee_Name,EmpID,Department,Sex,EmploymentStatus,Termd,Salary\n\
///            \"Doe, Jane\",1,Sales,F ,Active,0,50000\n";
/// let dataset = DatasetLoader::new(IngestConfig::default()).read(csv.as_bytes())?;
/// assert_eq!(dataset.records()[0].gender, "F");
/// # Ok::<(), attrition_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct DatasetLoader {
    config: IngestConfig,
}

impl DatasetLoader {
    /// Creates a loader with the given ingestion settings.
    pub fn new(config: IngestConfig) -> Self {
        Self { config }
    }

    /// Loads a roster CSV file.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> EngineResult<Dataset> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|_| EngineError::DatasetNotFound {
            path: path.display().to_string(),
        })?;

        let dataset = self.read(file)?;
        info!(
            path = %path.display(),
            records = dataset.len(),
            "Loaded roster"
        );
        Ok(dataset)
    }

    /// Reads a roster CSV from any reader.
    pub fn read<R: Read>(&self, reader: R) -> EngineResult<Dataset> {
        let mut reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in reader.deserialize::<RawEmployeeRow>() {
            let row = result.map_err(|e| EngineError::DatasetParseError {
                line: e.position().map(|p| p.line()).unwrap_or(0),
                message: e.to_string(),
            })?;
            records.push(row.into_record(&self.config)?);
        }

        debug!(records = records.len(), "Parsed roster rows");
        Dataset::new(records)
    }
}
