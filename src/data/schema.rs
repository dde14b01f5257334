// Trip schema definition and validation
// Author: Gabriel Demetrios Lafis

use super::{DataError, DataType, Field, Schema};

pub const START_TIME: &str = "Start Time";
pub const END_TIME: &str = "End Time";
pub const TRIP_DURATION: &str = "Trip Duration";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const USER_TYPE: &str = "User Type";
pub const GENDER: &str = "Gender";
pub const BIRTH_YEAR: &str = "Birth Year";

/// Derived at load time from the start timestamp
pub const MONTH: &str = "month";
pub const DAY_OF_WEEK: &str = "day_of_week";
pub const HOUR: &str = "hour";

/// Columns every city file must provide
pub const REQUIRED_COLUMNS: [&str; 6] = [
    START_TIME,
    END_TIME,
    TRIP_DURATION,
    START_STATION,
    END_STATION,
    USER_TYPE,
];

/// Unnamed leading row number written by the export tooling
pub const ROW_INDEX: &str = "";

/// Type a source column is parsed into; unknown columns stay text
pub fn source_type_of(column: &str) -> DataType {
    match column {
        ROW_INDEX => DataType::Integer,
        START_TIME | END_TIME => DataType::DateTime,
        TRIP_DURATION | BIRTH_YEAR => DataType::Float,
        _ => DataType::String,
    }
}

/// Schema validator for ensuring data conforms to a schema
pub struct SchemaValidator;

impl SchemaValidator {
    /// Check that every required trip column is present
    pub fn validate_trip_columns(schema: &Schema) -> Result<(), DataError> {
        match REQUIRED_COLUMNS.iter().find(|name| !schema.has_field(name)) {
            Some(missing) => Err(DataError::MissingColumn(missing.to_string())),
            None => Ok(()),
        }
    }
}

/// Schema builder for creating schemas
pub struct SchemaBuilder {
    fields: Vec<Field>,
}

impl SchemaBuilder {
    /// Create a new schema builder
    pub fn new() -> Self {
        SchemaBuilder { fields: Vec::new() }
    }

    /// Add a field to the schema
    pub fn add_field(mut self, name: &str, data_type: DataType, nullable: bool) -> Self {
        self.fields.push(Field::new(name.to_string(), data_type, nullable));
        self
    }

    /// Add a string field
    pub fn add_string(self, name: &str, nullable: bool) -> Self {
        self.add_field(name, DataType::String, nullable)
    }

    /// Build the schema
    pub fn build(self) -> Schema {
        Schema::new(self.fields)
    }
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}
