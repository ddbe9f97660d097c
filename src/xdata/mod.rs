//! Extended Data (XDATA) support
//!
//! Extended data is application-specific data attached to an entity.
//! Every value is owned, so cloning an entity yields fully independent
//! records.

use indexmap::IndexMap;

use crate::types::{Handle, Vector3};

/// Extended data value types
#[derive(Debug, Clone, PartialEq)]
pub enum XDataValue {
    /// String value (group code 1000)
    String(String),
    /// Control string (group code 1002) - "{" or "}"
    ControlString(String),
    /// Layer name (group code 1003)
    LayerName(String),
    /// Binary data (group code 1004)
    BinaryData(Vec<u8>),
    /// Database handle (group code 1005)
    Handle(Handle),
    /// 3D point (group codes 1010, 1020, 1030)
    Point3D(Vector3),
    /// Real value (group code 1040)
    Real(f64),
    /// Distance (group code 1041)
    Distance(f64),
    /// Scale factor (group code 1042)
    ScaleFactor(f64),
    /// 16-bit integer (group code 1070)
    Integer16(i16),
    /// 32-bit integer (group code 1071)
    Integer32(i32),
}

/// Extended data record for a single application
#[derive(Debug, Clone, PartialEq)]
pub struct ExtendedDataRecord {
    /// Application name (from group code 1001)
    pub application_name: String,
    /// Extended data values
    pub values: Vec<XDataValue>,
}

impl ExtendedDataRecord {
    /// Create a new extended data record
    pub fn new(application_name: impl Into<String>) -> Self {
        Self {
            application_name: application_name.into(),
            values: Vec::new(),
        }
    }

    /// Builder: append a value
    pub fn with_value(mut self, value: XDataValue) -> Self {
        self.values.push(value);
        self
    }

    /// Add a value to the extended data
    pub fn add_value(&mut self, value: XDataValue) {
        self.values.push(value);
    }

    /// Get the number of values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the record is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Extended data collection for an entity, one record per application
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtendedData {
    records: IndexMap<String, ExtendedDataRecord>,
}

impl ExtendedData {
    /// Create a new extended data collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record, replacing any record of the same application
    pub fn add_record(&mut self, record: ExtendedDataRecord) -> Option<ExtendedDataRecord> {
        self.records
            .insert(record.application_name.clone(), record)
    }

    /// Iterate over all records in insertion order
    pub fn records(&self) -> impl Iterator<Item = &ExtendedDataRecord> {
        self.records.values()
    }

    /// Get a record by application name
    pub fn get_record(&self, application_name: &str) -> Option<&ExtendedDataRecord> {
        self.records.get(application_name)
    }

    /// Get a mutable record by application name
    pub fn get_record_mut(&mut self, application_name: &str) -> Option<&mut ExtendedDataRecord> {
        self.records.get_mut(application_name)
    }

    /// Remove a record by application name
    pub fn remove_record(&mut self, application_name: &str) -> Option<ExtendedDataRecord> {
        self.records.shift_remove(application_name)
    }

    /// Get the number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the collection is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Clear all records
    pub fn clear(&mut self) {
        self.records.clear();
    }
}
