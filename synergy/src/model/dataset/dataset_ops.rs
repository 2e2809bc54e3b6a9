use super::{Dataset, DatasetColumns, DatasetLoadSummary};
use crate::model::SynergyError;
use csv::{ByteRecord, ReaderBuilder};
use flate2::read::GzDecoder;
use kdam::tqdm;
use std::{collections::HashMap, fs::File, io::BufReader, io::Read, path::Path};
use synergy_core::model::BusinessRecord;

/// reads a business CSV file (optionally gzipped) and drops every row that
/// lacks a usable category or numeric coordinates.
///
/// # Arguments
///
/// * `filepath` - path to a `.csv` or `.csv.gz` file with a header row
/// * `columns` - names of the columns to read
///
/// # Returns
///
/// * the cleaned dataset along with counts of read and dropped rows
pub fn read_csv(
    filepath: &Path,
    columns: &DatasetColumns,
) -> Result<(Dataset, DatasetLoadSummary), SynergyError> {
    let filepath_str = filepath.to_string_lossy().to_string();
    let f = File::open(filepath).map_err(|e| {
        SynergyError::DatasetUnavailable(format!("failure opening {filepath_str}: {e}"))
    })?;
    let r: Box<dyn Read> = if filepath_str.ends_with(".gz") {
        Box::new(BufReader::new(GzDecoder::new(f)))
    } else {
        Box::new(BufReader::new(f))
    };
    let result = read_csv_from_reader(r, columns, &filepath_str, true)?;
    let (dataset, summary) = &result;
    log::info!(
        "loaded {} businesses from {} ({} rows read, {} dropped)",
        dataset.len(),
        filepath_str,
        summary.rows_read,
        summary.rows_dropped
    );
    Ok(result)
}

/// reads business rows from any CSV source. see [`read_csv`].
///
/// # Arguments
///
/// * `reader` - CSV content with a header row
/// * `columns` - names of the columns to read
/// * `source_name` - name of the source used in error messages
/// * `progress` - show a progress bar on stderr while reading
pub fn read_csv_from_reader<R: Read>(
    reader: R,
    columns: &DatasetColumns,
    source_name: &str,
    progress: bool,
) -> Result<(Dataset, DatasetLoadSummary), SynergyError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers = build_header_lookup(
        csv_reader
            .byte_headers()
            .map_err(|e| csv_error(source_name, e))?,
    );
    let category_idx = required_column(&headers, &columns.category, source_name)?;
    let latitude_idx = required_column(&headers, &columns.latitude, source_name)?;
    let longitude_idx = required_column(&headers, &columns.longitude, source_name)?;
    let address_idx = columns
        .address
        .as_ref()
        .and_then(|col| headers.get(col.as_str()).copied());
    if address_idx.is_none() {
        log::debug!("{source_name} has no address column, addresses will be unavailable");
    }

    let indices = ColumnIndices {
        category: category_idx,
        latitude: latitude_idx,
        longitude: longitude_idx,
        address: address_idx,
    };

    let (records, summary) = if progress {
        let rows = tqdm!(
            csv_reader.into_byte_records(),
            desc = format!("read {source_name}")
        );
        let result = collect_records(rows, &indices, source_name)?;
        eprintln!();
        result
    } else {
        collect_records(csv_reader.into_byte_records(), &indices, source_name)?
    };
    Ok((Dataset::from(records), summary))
}

/// positions of the business attributes within each CSV row.
struct ColumnIndices {
    category: usize,
    latitude: usize,
    longitude: usize,
    address: Option<usize>,
}

fn collect_records(
    rows: impl Iterator<Item = csv::Result<ByteRecord>>,
    indices: &ColumnIndices,
    source_name: &str,
) -> Result<(Vec<BusinessRecord>, DatasetLoadSummary), SynergyError> {
    let mut records = vec![];
    let mut summary = DatasetLoadSummary::default();
    for row in rows {
        let row = row.map_err(|e| csv_error(source_name, e))?;
        summary.rows_read += 1;
        let category = get_field(&row, indices.category);
        let latitude = get_field(&row, indices.latitude).and_then(|v| parse_coordinate(&v));
        let longitude = get_field(&row, indices.longitude).and_then(|v| parse_coordinate(&v));
        let address = indices
            .address
            .and_then(|idx| get_field(&row, idx))
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty());
        match (category, latitude, longitude) {
            (Some(category), Some(latitude), Some(longitude)) if !category.trim().is_empty() => {
                records.push(BusinessRecord::new(&category, latitude, longitude, address));
            }
            _ => {
                log::debug!("dropping row {} of {source_name}", summary.rows_read);
                summary.rows_dropped += 1;
            }
        }
    }
    summary.rows_loaded = records.len();
    Ok((records, summary))
}

fn csv_error(source_name: &str, source: csv::Error) -> SynergyError {
    SynergyError::CsvError {
        filepath: source_name.to_string(),
        source,
    }
}

fn build_header_lookup(headers: &ByteRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, col)| (decode_field(col).trim().to_string(), idx))
        .collect::<HashMap<_, _>>()
}

fn required_column(
    headers: &HashMap<String, usize>,
    column: &str,
    source_name: &str,
) -> Result<usize, SynergyError> {
    headers.get(column).copied().ok_or_else(|| {
        SynergyError::DatasetUnavailable(format!(
            "column '{column}' missing from {source_name}"
        ))
    })
}

fn get_field(row: &ByteRecord, idx: usize) -> Option<String> {
    row.get(idx).map(decode_field)
}

/// decodes a CSV cell as UTF-8, falling back to Latin-1 which maps each byte
/// to the code point of the same value.
fn decode_field(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().map(|b| *b as char).collect(),
    }
}

/// parses a coordinate, treating blanks, non-numbers and non-finite values as missing.
fn parse_coordinate(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}
