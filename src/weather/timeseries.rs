use anyhow::anyhow;

/// Extract the value of `column` from the last data row of a delimited
/// table with a header row.
///
/// # Arguments
/// * csv_text - the full delimited-text document, header row first.
/// * column - the exact header label of the target column.
///
/// # Returns
/// The last row's value for the column, or `None` if the table has no
/// data rows. A row that cannot be parsed or a header without the column
/// is an error.
pub fn latest_column_value(csv_text: &str, column: &str) -> anyhow::Result<Option<String>> {
    let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
    let headers = reader.headers()?.clone();

    let mut last_record = None;
    for record in reader.records() {
        last_record = Some(record?);
    }

    match last_record {
        Some(record) => {
            let column_index = headers
                .iter()
                .position(|header| header == column)
                .ok_or_else(|| anyhow!("Column '{}' not found in header", column))?;
            let value = record
                .get(column_index)
                .ok_or_else(|| anyhow!("Last row has no value for column '{}'", column))?;
            Ok(Some(value.to_string()))
        }
        None => Ok(None),
    }
}
