// CSV export of a derived clinic view

use crate::records::ClinicRecord;
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

/// Column names, in `ClinicRow` field order
pub const HEADERS: [&str; 11] = [
    "Rank",
    "Clinic",
    "Zone",
    "Region",
    "Revenue",
    "Quantity",
    "Pincodes",
    "Cabins",
    "Appointments",
    "Show_Pct",
    "Launch_Date",
];

#[derive(Debug, Serialize)]
struct ClinicRow<'a> {
    rank: usize,
    name: &'a str,
    zone: &'a str,
    region: &'a str,
    revenue: f64,
    quantity: u32,
    pincodes: u32,
    cabins: u32,
    appointments: u32,
    show_pct: f64,
    launch_date: String,
}

/// Write rows in view order, ranked from 1
///
/// The header row is always written, so an empty view still yields a valid CSV.
pub fn write_clinic_csv<W: Write>(writer: W, view: &[&ClinicRecord]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer
        .write_record(HEADERS)
        .context("Failed to write CSV header")?;

    for (i, clinic) in view.iter().enumerate() {
        csv_writer
            .serialize(ClinicRow {
                rank: i + 1,
                name: &clinic.name,
                zone: &clinic.zone,
                region: &clinic.region,
                revenue: clinic.revenue,
                quantity: clinic.quantity,
                pincodes: clinic.pincodes,
                cabins: clinic.cabins,
                appointments: clinic.appointments,
                show_pct: clinic.show_pct,
                launch_date: clinic.launch_date.format("%Y-%m-%d").to_string(),
            })
            .with_context(|| format!("Failed to write CSV row for {}", clinic.name))?;
    }

    csv_writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}
