//! `stratus-datasets` provides categorical sample data ready to be used in
//! tests and examples.
//!
//! ## The Big Picture
//!
//! `stratus-datasets` is a crate in the `stratus` ecosystem, a toolkit for
//! rule-based classification of categorical weather data.
//!
//! ## Current State
//!
//! Currently the following datasets are provided:
//!
//! * `["weather"]` : clusterized weather measurements with a `Clima` class
//!   column, in the vocabulary produced by the upstream discretization
//!   stage (`*_cat` category codes from four clusters per measurement)
//!
//! along with methods to easily load them. Loaded datasets are returned as
//! a [`stratus::RowTable`] with named features.
//!
//! ## Using a dataset
//!
//! To use one of the provided datasets in your project add the crate to
//! your Cargo.toml with the corresponding feature enabled:
//! ```ignore
//! stratus-datasets = { version = "0.1.0", features = ["weather"] }
//! ```
//! and then use it in your example or tests as
//! ```ignore
//! let table = stratus_datasets::weather();
//! ```

#[cfg(feature = "weather")]
use csv::ReaderBuilder;
#[cfg(feature = "weather")]
use flate2::read::GzDecoder;
#[cfg(feature = "weather")]
use stratus::{AttrValue, RowTable};

#[cfg(feature = "weather")]
fn table_from_buf(buf: &[u8], class_name: &str) -> RowTable {
    // unzip file
    let file = GzDecoder::new(buf);
    // create a CSV reader with headers and `,` as delimiter
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(b',')
        .from_reader(file);

    let headers: Vec<String> = reader
        .headers()
        .unwrap()
        .iter()
        .map(|h| h.to_string())
        .collect();
    let class_idx = headers
        .iter()
        .position(|h| h == class_name)
        .expect("class column present");
    let feature_names: Vec<String> = headers
        .iter()
        .filter(|h| h.as_str() != class_name)
        .cloned()
        .collect();

    let mut records = Vec::new();
    let mut labels = Vec::new();
    for record in reader.records() {
        let record = record.unwrap();
        let row: Vec<AttrValue> = record
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != class_idx)
            .map(|(_, field)| match field.parse::<i64>() {
                Ok(code) => AttrValue::Int(code),
                Err(_) => AttrValue::from(field),
            })
            .collect();
        records.push(row);
        labels.push(record[class_idx].to_string());
    }

    RowTable::new(feature_names, class_name.to_string(), records, labels).unwrap()
}

#[cfg(feature = "weather")]
/// Read in the clusterized weather dataset from dataset path.
pub fn weather() -> RowTable {
    let data = include_bytes!("../data/weather.csv.gz");
    table_from_buf(&data[..], "Clima")
}
