use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use num_format::{Locale, ToFormattedString};
use parquet::arrow::ArrowWriter;

const HEADER: [&str; 14] = [
    "order_id",
    "city_id",
    "service_id",
    "Cancel_type",
    "order_distance",
    "status",
    "order_date",
    "hour_time",
    "total_fee",
    "pickup_lat",
    "pickup_lng",
    "dropoff_lat",
    "dropoff_lng",
    "Final_Main_Reason",
];

const ORDER_COUNT: usize = 5000;

/// (city_id, centre lat, centre lng, service prefix)
const CITIES: [(&str, f64, f64, &str); 3] = [
    ("1", 10.7769, 106.7009, "SGN"),
    ("2", 21.0278, 105.8342, "HAN"),
    ("3", 16.0544, 108.2022, "DAD"),
];

/// (bucket label, typical trip length in degrees)
const DISTANCES: [(&str, f64); 4] = [
    ("0-10km", 0.05),
    ("10-20km", 0.12),
    ("20-50km", 0.3),
    (">50km", 0.6),
];

const CANCEL_TYPES: [&str; 3] = ["Customer", "Driver", "System"];

const REASONS: [&str; 5] = [
    "No driver found",
    "Customer changed plan",
    "Price too high",
    "Wrong address",
    "Driver late",
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// One generated row, already rendered as the messy text an export holds.
fn generate_order(i: usize, rng: &mut SimpleRng) -> [String; 14] {
    let (city, lat0, lng0, prefix) = *rng.pick(&CITIES);
    let (distance, spread) = *rng.pick(&DISTANCES);
    let service = format!("{prefix}-{}", rng.pick(&["TRUCK-500", "TRUCK-1000", "VAN"]));

    let roll = rng.next_f64();
    let status = if roll < 0.70 {
        "COMPLETED"
    } else if roll < 0.95 {
        "CANCELLED"
    } else {
        *rng.pick(&["RETURNED", "IN PROCESS"])
    };
    let (cancel_type, reason) = if status == "CANCELLED" {
        (*rng.pick(&CANCEL_TYPES), *rng.pick(&REASONS))
    } else {
        ("None", "")
    };

    // busier around the morning and evening peaks
    let peak = if rng.chance(0.5) { 9.0 } else { 17.0 };
    let hour = rng.gauss(peak, 2.5).round().clamp(0.0, 23.0) as u32;
    let hour_text = if rng.chance(0.02) {
        "N/A".to_string()
    } else {
        hour.to_string()
    };
    let day = 1 + rng.next_u64() % 28;
    let minute = rng.next_u64() % 60;
    let date = if rng.chance(0.02) {
        "unknown".to_string()
    } else {
        format!("2024-03-{day:02} {hour:02}:{minute:02}:00")
    };

    let fee = ((30_000.0 + spread * 2_000_000.0 + rng.gauss(0.0, 20_000.0)).max(15_000.0) / 1000.0)
        .round() as u64
        * 1000;
    let fee_text = if rng.chance(0.01) {
        String::new()
    } else {
        fee.to_formatted_string(&Locale::en)
    };

    let pickup_lat = rng.gauss(lat0, 0.05);
    let pickup_lng = rng.gauss(lng0, 0.05);
    let dropoff_lat = rng.gauss(pickup_lat, spread);
    let dropoff_lng = rng.gauss(pickup_lng, spread);
    let dropoff_lat_text = if rng.chance(0.01) {
        String::new()
    } else {
        format!("{dropoff_lat:.6}")
    };

    [
        format!("ORD{i:06}"),
        city.to_string(),
        service,
        cancel_type.to_string(),
        distance.to_string(),
        status.to_string(),
        date,
        hour_text,
        fee_text,
        format!("{pickup_lat:.6}"),
        format!("{pickup_lng:.6}"),
        dropoff_lat_text,
        format!("{dropoff_lng:.6}"),
        reason.to_string(),
    ]
}

fn write_csv(path: &str, rows: &[[String; 14]]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).with_context(|| format!("creating {path}"))?;
    writer.write_record(HEADER)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Parquet copy with every column as nullable text; blank cells become nulls.
fn write_parquet(path: &str, rows: &[[String; 14]]) -> Result<()> {
    let schema = Arc::new(Schema::new(
        HEADER
            .iter()
            .map(|name| Field::new(*name, DataType::Utf8, true))
            .collect::<Vec<_>>(),
    ));
    let columns: Vec<ArrayRef> = (0..HEADER.len())
        .map(|c| {
            let cells: Vec<Option<&str>> = rows
                .iter()
                .map(|row| Some(row[c].as_str()).filter(|s| !s.is_empty()))
                .collect();
            Arc::new(StringArray::from(cells)) as ArrayRef
        })
        .collect();
    let batch = RecordBatch::try_new(schema.clone(), columns).context("building record batch")?;

    let file = std::fs::File::create(path).with_context(|| format!("creating {path}"))?;
    let mut writer = ArrowWriter::try_new(file, schema, None)?;
    writer.write(&batch)?;
    writer.close()?;
    Ok(())
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let rows: Vec<[String; 14]> = (0..ORDER_COUNT)
        .map(|i| generate_order(i, &mut rng))
        .collect();

    write_csv("sample_orders.csv", &rows)?;
    write_parquet("sample_orders.parquet", &rows)?;

    println!("Wrote {ORDER_COUNT} orders to sample_orders.csv and sample_orders.parquet");
    Ok(())
}
