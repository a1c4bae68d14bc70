use crate::cli::output::display_value;
use crate::cli::Result;
use nblists::Value;
use serde::Serialize;
use std::path::Path;

/*-------------------------------------------------------------------------------------------------
  Save NetBox List Values to CSV File
-------------------------------------------------------------------------------------------------*/

#[derive(Debug, Serialize)]
struct ValueRecord {
    value: String,
}

pub fn save(values: &[Value], path: &Path) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    // Write header, present even when there are no values
    writer.write_record(["Value"])?;

    // Write value records
    for value in values {
        writer.serialize(ValueRecord {
            value: display_value(value),
        })?;
    }

    writer.flush()?;

    Ok(())
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
