use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use arrow::array::{Array, ArrayRef, AsArray};
use arrow::compute::cast;
use arrow::datatypes::DataType;
use arrow::error::ArrowError;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::errors::ParquetError;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{LoadReport, OrderRecord, OrderStatus, OrderStore};

// ---------------------------------------------------------------------------
// Fatal load errors
// ---------------------------------------------------------------------------

/// A dataset that cannot be turned into an [`OrderStore`] at all.
///
/// Per-row problems never show up here; they are coerced and counted in
/// the [`LoadReport`] instead.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("JSON dataset must be an array of objects")]
    JsonLayout,
    #[error("parquet: {0}")]
    Parquet(#[from] ParquetError),
    #[error("arrow: {0}")]
    Arrow(#[from] ArrowError),
    #[error("dataset is missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load an order dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row + one order per line (the usual export)
/// * `.json`    – `[{ "order_id": ..., "city_id": ..., ... }, ...]`
/// * `.parquet` – any column types; every column is read back as text
pub fn load_file(path: &Path) -> Result<OrderStore, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let store = match ext.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        "parquet" | "pq" => load_parquet(path)?,
        other => return Err(LoadError::UnsupportedExtension(other.to_string())),
    };

    let report = store.report();
    log::info!(
        "Loaded {} of {} orders from {}",
        report.kept_rows,
        report.total_rows,
        path.display()
    );
    if report.missing_coordinates > 0 {
        log::warn!(
            "Dropped {} orders with incomplete coordinates",
            report.missing_coordinates
        );
    }
    if report.null_timestamps + report.defaulted_hours + report.absent_fees > 0 {
        log::warn!(
            "Coerced cells: {} unparseable order_date, {} hour_time defaulted to 0, {} total_fee absent",
            report.null_timestamps,
            report.defaulted_hours,
            report.absent_fees
        );
    }

    Ok(store)
}

// ---------------------------------------------------------------------------
// Column layout
// ---------------------------------------------------------------------------

/// Required source columns, in a fixed slot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    OrderId,
    CityId,
    ServiceId,
    CancelType,
    OrderDistance,
    Status,
    OrderDate,
    HourTime,
    TotalFee,
    PickupLat,
    PickupLng,
    DropoffLat,
    DropoffLng,
    FinalMainReason,
}

const COLUMN_COUNT: usize = 14;

impl Column {
    const ALL: [Column; COLUMN_COUNT] = [
        Column::OrderId,
        Column::CityId,
        Column::ServiceId,
        Column::CancelType,
        Column::OrderDistance,
        Column::Status,
        Column::OrderDate,
        Column::HourTime,
        Column::TotalFee,
        Column::PickupLat,
        Column::PickupLng,
        Column::DropoffLat,
        Column::DropoffLng,
        Column::FinalMainReason,
    ];

    /// Normalized (lower-case) header name.
    fn name(self) -> &'static str {
        match self {
            Column::OrderId => "order_id",
            Column::CityId => "city_id",
            Column::ServiceId => "service_id",
            Column::CancelType => "cancel_type",
            Column::OrderDistance => "order_distance",
            Column::Status => "status",
            Column::OrderDate => "order_date",
            Column::HourTime => "hour_time",
            Column::TotalFee => "total_fee",
            Column::PickupLat => "pickup_lat",
            Column::PickupLng => "pickup_lng",
            Column::DropoffLat => "dropoff_lat",
            Column::DropoffLng => "dropoff_lng",
            Column::FinalMainReason => "final_main_reason",
        }
    }
}

/// Exports spell the same column `Cancel_type` or `cancel_type`, and the
/// first header may carry a BOM.
fn normalize_header(header: &str) -> String {
    header
        .trim_start_matches('\u{feff}')
        .trim()
        .to_ascii_lowercase()
}

/// Position of every required column within a source header row.
struct ColumnMap {
    positions: [usize; COLUMN_COUNT],
}

impl ColumnMap {
    fn resolve<I, S>(headers: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let normalized: Vec<String> = headers
            .into_iter()
            .map(|h| normalize_header(h.as_ref()))
            .collect();

        let mut positions = [0usize; COLUMN_COUNT];
        let mut missing = Vec::new();
        for col in Column::ALL {
            match normalized.iter().position(|h| h == col.name()) {
                Some(idx) => positions[col as usize] = idx,
                None => missing.push(col.name().to_string()),
            }
        }

        if !missing.is_empty() {
            return Err(LoadError::MissingColumns(missing));
        }
        Ok(ColumnMap { positions })
    }

    fn position(&self, col: Column) -> usize {
        self.positions[col as usize]
    }
}

// ---------------------------------------------------------------------------
// Row normalization
// ---------------------------------------------------------------------------

/// Raw text cells of one source row, before coercion.
struct RawOrder<'a> {
    cells: [Option<Cow<'a, str>>; COLUMN_COUNT],
}

impl<'a> RawOrder<'a> {
    fn from_fn(mut cell: impl FnMut(Column) -> Option<Cow<'a, str>>) -> Self {
        RawOrder {
            cells: std::array::from_fn(|slot| cell(Column::ALL[slot])),
        }
    }

    /// Trimmed cell text; blank cells read as absent.
    fn get(&self, col: Column) -> Option<&str> {
        self.cells[col as usize]
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    fn text(&self, col: Column) -> String {
        self.get(col).unwrap_or_default().to_string()
    }
}

/// Accumulates normalized records and the coercion counts.
#[derive(Default)]
struct StoreBuilder {
    records: Vec<OrderRecord>,
    report: LoadReport,
}

impl StoreBuilder {
    fn push(&mut self, raw: &RawOrder<'_>) {
        self.report.total_rows += 1;

        let (Some(pickup_lat), Some(pickup_lng), Some(dropoff_lat), Some(dropoff_lng)) = (
            parse_coordinate(raw.get(Column::PickupLat)),
            parse_coordinate(raw.get(Column::PickupLng)),
            parse_coordinate(raw.get(Column::DropoffLat)),
            parse_coordinate(raw.get(Column::DropoffLng)),
        ) else {
            self.report.missing_coordinates += 1;
            return;
        };

        let order_date = parse_timestamp(raw.get(Column::OrderDate));
        if order_date.is_none() {
            self.report.null_timestamps += 1;
        }

        let hour_time = parse_hour(raw.get(Column::HourTime)).unwrap_or_else(|| {
            self.report.defaulted_hours += 1;
            0
        });

        let total_fee = parse_fee(raw.get(Column::TotalFee));
        if total_fee.is_none() {
            self.report.absent_fees += 1;
        }

        self.records.push(OrderRecord {
            order_id: raw.text(Column::OrderId),
            city_id: raw.text(Column::CityId),
            service_id: raw.text(Column::ServiceId),
            cancel_type: raw.text(Column::CancelType),
            order_distance: raw.text(Column::OrderDistance),
            status: OrderStatus::parse(raw.get(Column::Status).unwrap_or_default()),
            order_date,
            hour_time,
            total_fee,
            pickup_lat,
            pickup_lng,
            dropoff_lat,
            dropoff_lng,
            final_main_reason: raw.text(Column::FinalMainReason),
        });
    }

    fn finish(mut self) -> OrderStore {
        self.report.kept_rows = self.records.len();
        OrderStore::from_records(self.records, self.report)
    }
}

/// Coordinates must be finite numbers; `NA`, `NaN` or text count as missing.
fn parse_coordinate(s: Option<&str>) -> Option<f64> {
    s?.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Strips thousands separators before parsing, so `"1,234"` is `1234.0`.
fn parse_fee(s: Option<&str>) -> Option<f64> {
    let s = s?;
    let cleaned: Cow<'_, str> = if s.contains(',') {
        Cow::Owned(s.replace(',', ""))
    } else {
        Cow::Borrowed(s)
    };
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Integer or decimal text, truncated toward zero (`"9.0"` is hour 9).
fn parse_hour(s: Option<&str>) -> Option<i32> {
    let s = s?;
    if let Ok(h) = s.parse::<i32>() {
        return Some(h);
    }
    s.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v.trunc() as i32)
}

const DATETIME_FORMATS: [&str; 5] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];

fn parse_timestamp(s: Option<&str>) -> Option<NaiveDateTime> {
    let s = s?;
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn load_csv(path: &Path) -> Result<OrderStore, LoadError> {
    load_csv_from_reader(BufReader::new(open(path)?))
}

/// Parse CSV order data from any byte source.
///
/// Cells are decoded lossily and short rows read their missing cells as
/// blank, so only an unreadable stream or a bad header aborts the load.
pub fn load_csv_from_reader<R: Read>(source: R) -> Result<OrderStore, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(source);

    let columns = ColumnMap::resolve(
        reader
            .byte_headers()?
            .iter()
            .map(String::from_utf8_lossy),
    )?;

    let mut builder = StoreBuilder::default();
    let mut record = csv::ByteRecord::new();
    while reader.read_byte_record(&mut record)? {
        let raw = RawOrder::from_fn(|col| {
            record
                .get(columns.position(col))
                .map(String::from_utf8_lossy)
        });
        builder.push(&raw);
    }

    Ok(builder.finish())
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "order_id": "A1", "city_id": 1, "status": "COMPLETED", "total_fee": "1,000", ... },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<OrderStore, LoadError> {
    let mut text = String::new();
    open(path)?
        .read_to_string(&mut text)
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let root: JsonValue = serde_json::from_str(text.trim_start_matches('\u{feff}'))?;
    let rows = root.as_array().ok_or(LoadError::JsonLayout)?;

    let mut objects = Vec::with_capacity(rows.len());
    let mut keys = BTreeSet::new();
    for row in rows {
        let obj = row.as_object().ok_or(LoadError::JsonLayout)?;
        let cells: BTreeMap<String, &JsonValue> = obj
            .iter()
            .map(|(k, v)| (normalize_header(k), v))
            .collect();
        keys.extend(cells.keys().cloned());
        objects.push(cells);
    }
    if !objects.is_empty() {
        ColumnMap::resolve(&keys)?;
    }

    let mut builder = StoreBuilder::default();
    for cells in &objects {
        let raw = RawOrder::from_fn(|col| cells.get(col.name()).copied().and_then(json_cell));
        builder.push(&raw);
    }

    Ok(builder.finish())
}

fn json_cell(value: &JsonValue) -> Option<Cow<'_, str>> {
    match value {
        JsonValue::Null => None,
        JsonValue::String(s) => Some(Cow::Borrowed(s.as_str())),
        other => Some(Cow::Owned(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file containing order data.
///
/// Column types are not fixed: numeric columns written by Pandas and
/// string columns written by a raw export both work, because every required
/// column is cast to `Utf8` and then normalized like a CSV cell.
fn load_parquet(path: &Path) -> Result<OrderStore, LoadError> {
    let reader_builder = ParquetRecordBatchReaderBuilder::try_new(open(path)?)?;
    // a file without rows yields no batches, so check the header up front
    let columns = ColumnMap::resolve(
        reader_builder
            .schema()
            .fields()
            .iter()
            .map(|f| f.name().as_str()),
    )?;
    let reader = reader_builder.build()?;

    let mut builder = StoreBuilder::default();
    for batch_result in reader {
        let batch = batch_result?;

        let text_columns: Vec<ArrayRef> = Column::ALL
            .iter()
            .map(|col| cast(batch.column(columns.position(*col)).as_ref(), &DataType::Utf8))
            .collect::<Result<_, _>>()?;

        for row in 0..batch.num_rows() {
            let raw = RawOrder::from_fn(|col| {
                let array = text_columns[col as usize].as_string::<i32>();
                if array.is_null(row) {
                    None
                } else {
                    Some(Cow::Borrowed(array.value(row)))
                }
            });
            builder.push(&raw);
        }
    }

    Ok(builder.finish())
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Arc;

    use arrow::array::{Float64Array, Int64Array, StringArray};
    use arrow::datatypes::{Field, Schema};
    use arrow::record_batch::RecordBatch;
    use chrono::{Datelike, Timelike};
    use parquet::arrow::ArrowWriter;
    use tempfile::tempdir;

    use super::*;
    use crate::data::model::Dimension;

    const HEADER: &str = "order_id,city_id,service_id,Cancel_type,order_distance,status,order_date,hour_time,total_fee,pickup_lat,pickup_lng,dropoff_lat,dropoff_lng,Final_Main_Reason";

    fn csv_with_rows(rows: &[&str]) -> String {
        let mut text = String::from(HEADER);
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text.push('\n');
        text
    }

    #[test]
    fn fee_with_thousands_separator_is_normalized() {
        let data = csv_with_rows(&[
            r#"A,1,SGN-TRUCK,None,10-20km,COMPLETED,2024-03-01 09:15:00,9,"1,234",10.7,106.6,10.8,106.7,"#,
        ]);
        let store = load_csv_from_reader(data.as_bytes()).unwrap();
        assert_eq!(store.records()[0].total_fee, Some(1234.0));
    }

    #[test]
    fn leading_bom_and_mixed_case_headers_are_accepted() {
        let data = format!(
            "\u{feff}{}",
            csv_with_rows(&[
                "A,1,SGN-TRUCK,Driver,10-20km,CANCELLED,2024-03-01,9,500,10.7,106.6,10.8,106.7,No driver",
            ])
        );
        let store = load_csv_from_reader(data.as_bytes()).unwrap();
        let rec = &store.records()[0];
        assert_eq!(rec.order_id, "A");
        assert_eq!(rec.cancel_type, "Driver");
        assert_eq!(rec.final_main_reason, "No driver");
        assert!(rec.status.is_cancelled());
    }

    #[test]
    fn row_missing_a_coordinate_is_dropped() {
        let data = csv_with_rows(&[
            "A,1,S,None,D,COMPLETED,2024-03-01,9,100,10.7,106.6,10.8,106.7,",
            "B,1,S,None,D,COMPLETED,2024-03-01,9,100,10.7,106.6,,106.7,",
            "C,1,S,None,D,COMPLETED,2024-03-01,9,100,NaN,106.6,10.8,106.7,",
        ]);
        let store = load_csv_from_reader(data.as_bytes()).unwrap();
        let ids: Vec<&str> = store.records().iter().map(|r| r.order_id.as_str()).collect();
        assert_eq!(ids, vec!["A"]);
        assert_eq!(store.report().missing_coordinates, 2);
        assert_eq!(store.report().total_rows, 3);
        assert_eq!(store.report().kept_rows, 1);
    }

    #[test]
    fn malformed_cells_degrade_without_dropping_the_row() {
        let data = csv_with_rows(&[
            "A,1,S,None,D,COMPLETED,not-a-date,evening,abc,10.7,106.6,10.8,106.7,",
            "B,1,S,None,D,COMPLETED,2024-03-01T22:05:00,22.0,,10.7,106.6,10.8,106.7,",
        ]);
        let store = load_csv_from_reader(data.as_bytes()).unwrap();
        assert_eq!(store.len(), 2);

        let a = &store.records()[0];
        assert_eq!(a.order_date, None);
        assert_eq!(a.hour_time, 0);
        assert_eq!(a.total_fee, None);

        let b = &store.records()[1];
        let date = b.order_date.unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2024, 3, 1));
        assert_eq!(date.hour(), 22);
        assert_eq!(b.hour_time, 22);

        let report = store.report();
        assert_eq!(report.null_timestamps, 1);
        assert_eq!(report.defaulted_hours, 1);
        assert_eq!(report.absent_fees, 2);
    }

    #[test]
    fn invalid_utf8_degrades_only_the_cell() {
        let mut data = csv_with_rows(&[
            "A,1,S,None,D,CANCELLED,2024-03-01,9,100,10.7,106.6,10.8,106.7,",
        ])
        .into_bytes();
        // splice two invalid bytes into the trailing reason cell
        let newline = data.len() - 1;
        data.splice(newline..newline, b"bad\xff\xfe".iter().copied());

        let store = load_csv_from_reader(data.as_slice()).unwrap();
        assert_eq!(store.len(), 1);
        let reason = &store.records()[0].final_main_reason;
        assert!(reason.starts_with("bad"));
        assert!(reason.contains('\u{fffd}'));
        assert_eq!(store.records()[0].order_id, "A");
    }

    #[test]
    fn short_rows_read_missing_cells_as_blank() {
        let data = csv_with_rows(&["A,1,S,None,D,COMPLETED,2024-03-01,9,100,10.7,106.6,10.8,106.7"]);
        let store = load_csv_from_reader(data.as_bytes()).unwrap();
        assert_eq!(store.records()[0].final_main_reason, "");
    }

    #[test]
    fn missing_required_columns_are_fatal_and_listed() {
        let data = "order_id,city_id,status\nA,1,COMPLETED\n";
        let err = load_csv_from_reader(data.as_bytes()).unwrap_err();
        match err {
            LoadError::MissingColumns(cols) => {
                assert!(cols.contains(&"pickup_lat".to_string()));
                assert!(cols.contains(&"final_main_reason".to_string()));
                assert!(!cols.contains(&"city_id".to_string()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let err = load_file(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = load_file(Path::new("orders.xlsx")).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedExtension(ext) if ext == "xlsx"));
    }

    #[test]
    fn csv_file_on_disk_loads_in_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("orders.csv");
        let mut file = File::create(&path).unwrap();
        file.write_all(
            csv_with_rows(&[
                "A,1,S,None,D,COMPLETED,2024-03-01,9,100,10.7,106.6,10.8,106.7,",
                "B,2,S,None,D,CANCELLED,2024-03-01,14,200,10.7,106.6,10.8,106.7,Late",
            ])
            .as_bytes(),
        )
        .unwrap();

        let store = load_file(&path).unwrap();
        let ids: Vec<&str> = store.records().iter().map(|r| r.order_id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B"]);
        assert_eq!(store.distinct_values(Dimension::City).len(), 2);
    }

    #[test]
    fn json_records_accept_numbers_and_strings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("orders.json");
        std::fs::write(
            &path,
            r#"[
                {"order_id": "A", "city_id": 1, "service_id": "S", "Cancel_type": null,
                 "order_distance": "D", "status": "COMPLETED", "order_date": "2024-03-01",
                 "hour_time": 9, "total_fee": "1,000", "pickup_lat": 10.7, "pickup_lng": 106.6,
                 "dropoff_lat": 10.8, "dropoff_lng": 106.7, "Final_Main_Reason": null},
                {"order_id": "B", "city_id": 1, "service_id": "S", "Cancel_type": null,
                 "order_distance": "D", "status": "COMPLETED", "order_date": "2024-03-01",
                 "hour_time": 9, "total_fee": 10, "pickup_lat": null, "pickup_lng": 106.6,
                 "dropoff_lat": 10.8, "dropoff_lng": 106.7, "Final_Main_Reason": null}
            ]"#,
        )
        .unwrap();

        let store = load_file(&path).unwrap();
        assert_eq!(store.len(), 1);
        let rec = &store.records()[0];
        assert_eq!(rec.city_id, "1");
        assert_eq!(rec.cancel_type, "");
        assert_eq!(rec.total_fee, Some(1000.0));
        assert_eq!(rec.hour_time, 9);
    }

    #[test]
    fn json_that_is_not_an_array_is_fatal() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("orders.json");
        std::fs::write(&path, r#"{"order_id": "A"}"#).unwrap();
        assert!(matches!(load_file(&path), Err(LoadError::JsonLayout)));
    }

    #[test]
    fn parquet_without_rows_still_requires_columns() {
        let schema = Arc::new(Schema::new(vec![Field::new(
            "order_id",
            DataType::Utf8,
            true,
        )]));
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.parquet");
        let writer = ArrowWriter::try_new(File::create(&path).unwrap(), schema, None).unwrap();
        writer.close().unwrap();

        match load_file(&path) {
            Err(LoadError::MissingColumns(cols)) => {
                assert_eq!(cols.len(), COLUMN_COUNT - 1);
                assert!(!cols.contains(&"order_id".to_string()));
            }
            other => panic!("expected missing columns, got {:?}", other.map(|s| s.len())),
        }
    }

    #[test]
    fn parquet_numeric_columns_are_read_as_text() {
        let text = |name: &str| Field::new(name, DataType::Utf8, true);
        let float = |name: &str| Field::new(name, DataType::Float64, true);
        let schema = Arc::new(Schema::new(vec![
            text("order_id"),
            Field::new("city_id", DataType::Int64, true),
            text("service_id"),
            text("Cancel_type"),
            text("order_distance"),
            text("status"),
            text("order_date"),
            Field::new("hour_time", DataType::Int64, true),
            float("total_fee"),
            float("pickup_lat"),
            float("pickup_lng"),
            float("dropoff_lat"),
            float("dropoff_lng"),
            text("Final_Main_Reason"),
        ]));
        let strings = |v: Vec<Option<&str>>| Arc::new(StringArray::from(v)) as ArrayRef;
        let floats = |v: Vec<Option<f64>>| Arc::new(Float64Array::from(v)) as ArrayRef;
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                strings(vec![Some("A"), Some("B")]),
                Arc::new(Int64Array::from(vec![Some(1), Some(2)])) as ArrayRef,
                strings(vec![Some("S"), Some("S")]),
                strings(vec![None, Some("Customer")]),
                strings(vec![Some("D"), Some("D")]),
                strings(vec![Some("COMPLETED"), Some("CANCELLED")]),
                strings(vec![Some("2024-03-01 09:00:00"), None]),
                Arc::new(Int64Array::from(vec![Some(9), None])) as ArrayRef,
                floats(vec![Some(1000.0), Some(500.0)]),
                floats(vec![Some(10.7), Some(10.7)]),
                floats(vec![Some(106.6), Some(106.6)]),
                floats(vec![Some(10.8), Some(10.8)]),
                floats(vec![Some(106.7), Some(106.7)]),
                strings(vec![None, Some("Changed mind")]),
            ],
        )
        .unwrap();

        let dir = tempdir().unwrap();
        let path = dir.path().join("orders.parquet");
        let mut writer = ArrowWriter::try_new(File::create(&path).unwrap(), schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let store = load_file(&path).unwrap();
        assert_eq!(store.len(), 2);
        let b = &store.records()[1];
        assert_eq!(b.city_id, "2");
        assert_eq!(b.hour_time, 0);
        assert_eq!(b.order_date, None);
        assert_eq!(b.total_fee, Some(500.0));
        assert_eq!(b.final_main_reason, "Changed mind");
    }
}
