use crate::error::{Error, LineError};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One directed route between two stations, as it appears in the CSV.
/// Never mutated after load; the mirrored copies are created by
/// [crate::route_table::RouteTable::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRecord {
    pub origin: String,
    pub destination: String,
    pub total_time_in_train: f64,
    pub total_walking_time: f64,
    pub total_cycling_time: f64,
    pub calories_burnt_walking: f64,
    pub calories_burnt_cycling: f64,
}

impl RouteRecord {
    /// Same metrics, travel direction flipped.
    pub fn reversed(&self) -> RouteRecord {
        let mut rec = self.clone();
        std::mem::swap(&mut rec.origin, &mut rec.destination);
        rec
    }
}

pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<RouteRecord>, Error> {
    let path = path.as_ref();
    let file_name = path
        .file_name()
        .map(|f| f.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    let file = File::open(path).map_err(|e| Error::NamedFileIO {
        file_name: file_name.clone(),
        source: Box::new(e),
    })?;
    read_records(file, &file_name)
}

pub fn read_records<T>(mut reader: T, file_name: &str) -> Result<Vec<RouteRecord>, Error>
where
    T: Read,
{
    let mut bom = [0; 3];
    reader.read_exact(&mut bom).map_err(|e| Error::NamedFileIO {
        file_name: file_name.to_owned(),
        source: Box::new(e),
    })?;

    let chained = if bom != [0xefu8, 0xbbu8, 0xbfu8] {
        bom.chain(reader)
    } else {
        [].chain(reader)
    };

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Fields)
        .from_reader(chained);

    // We store the headers to be able to return them in case of errors
    let headers = reader
        .headers()
        .map_err(|e| Error::CSVError {
            file_name: file_name.to_owned(),
            source: e,
            line_in_error: None,
        })?
        .clone();

    let mut rec = csv::StringRecord::new();
    let mut records = Vec::new();

    while reader.read_record(&mut rec).map_err(|e| Error::CSVError {
        file_name: file_name.to_owned(),
        source: e,
        line_in_error: None,
    })? {
        let record = rec
            .deserialize(Some(&headers))
            .map_err(|e| Error::CSVError {
                file_name: file_name.to_owned(),
                source: e,
                line_in_error: Some(LineError {
                    headers: headers.into_iter().map(String::from).collect(),
                    values: rec.into_iter().map(String::from).collect(),
                }),
            })?;
        records.push(record);
    }
    Ok(records)
}
