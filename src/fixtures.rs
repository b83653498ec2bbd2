// Embedded reporting tables
// Pre-aggregated figures exported from the clinic and e-commerce reports.
// Revenue columns share one reporting unit across all tables.

use crate::records::{
    ClinicRecord, EcomCityRecord, EcomYearRecord, MonthlyRecord, StateRecord, ZoneRecord,
};
use chrono::NaiveDate;

fn month(
    label: &str,
    quantity: u32,
    revenue: f64,
    visits: u32,
    appointments: u32,
    show_pct: f64,
) -> MonthlyRecord {
    MonthlyRecord {
        month: label.to_string(),
        quantity,
        revenue,
        visits,
        appointments,
        show_pct,
    }
}

fn zone(
    name: &str,
    quantity: u32,
    revenue: f64,
    appointments: u32,
    show_pct: f64,
    clinics: u32,
    color: &str,
) -> ZoneRecord {
    ZoneRecord {
        name: name.to_string(),
        quantity,
        revenue,
        appointments,
        show_pct,
        clinics,
        color: color.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn clinic(
    name: &str,
    zone: &str,
    region: &str,
    revenue: f64,
    quantity: u32,
    pincodes: u32,
    cabins: u32,
    appointments: u32,
    show_pct: f64,
    launch: (i32, u32, u32),
) -> ClinicRecord {
    ClinicRecord {
        name: name.to_string(),
        zone: zone.to_string(),
        region: region.to_string(),
        revenue,
        quantity,
        pincodes,
        cabins,
        appointments,
        show_pct,
        // Table literals below are all valid calendar dates
        launch_date: NaiveDate::from_ymd_opt(launch.0, launch.1, launch.2).unwrap_or_default(),
    }
}

fn year(label: &str, orders: u32, first_time_orders: u32, revenue: f64) -> EcomYearRecord {
    EcomYearRecord {
        year: label.to_string(),
        orders,
        first_time_orders,
        revenue,
    }
}

fn city(
    name: &str,
    state: &str,
    ecom_orders: u32,
    ecom_revenue: f64,
    clinic_revenue: Option<f64>,
) -> EcomCityRecord {
    EcomCityRecord {
        city: name.to_string(),
        state: state.to_string(),
        ecom_orders,
        ecom_revenue,
        clinic_revenue,
    }
}

fn state(name: &str, ecom_revenue: f64, clinic_revenue: f64, clinics: u32) -> StateRecord {
    StateRecord {
        state: name.to_string(),
        ecom_revenue,
        clinic_revenue,
        clinics,
    }
}

/// Network-wide monthly series, chronological
pub fn monthly() -> Vec<MonthlyRecord> {
    vec![
        month("Jan-24", 817, 560.0, 447, 772, 57.9),
        month("Feb-24", 890, 610.0, 492, 841, 58.5),
        month("Mar-24", 956, 655.0, 534, 903, 59.1),
        month("Apr-24", 1051, 720.0, 593, 993, 59.7),
        month("May-24", 1138, 780.0, 649, 1076, 60.3),
        month("Jun-24", 1211, 830.0, 698, 1145, 61.0),
        month("Jul-24", 1277, 875.0, 743, 1207, 61.6),
        month("Aug-24", 1343, 920.0, 789, 1269, 62.2),
        month("Sep-24", 1474, 1010.0, 874, 1393, 62.7),
        month("Oct-24", 1591, 1090.0, 953, 1504, 63.4),
        month("Nov-24", 1693, 1160.0, 1023, 1600, 63.9),
        month("Dec-24", 1865, 1278.0, 1138, 1763, 64.5),
        month("Jan-25", 1738, 1191.0, 1071, 1643, 65.2),
    ]
}

pub fn zones() -> Vec<ZoneRecord> {
    vec![
        zone("West 1", 5940, 4010.0, 8040, 64.9, 4, "#2563eb"),
        zone("West 2", 3240, 2215.0, 4560, 60.0, 3, "#0ea5e9"),
        zone("North", 3010, 1890.0, 4220, 59.7, 3, "#f97316"),
        zone("South 1", 3470, 2354.0, 5010, 63.2, 3, "#16a34a"),
        zone("South 2", 2190, 1480.0, 3060, 62.4, 2, "#84cc16"),
        zone("East", 1480, 1000.0, 2200, 59.1, 2, "#a855f7"),
    ]
}

/// One row per clinic: revenue, quantity, pincodes, cabins, appointments, show %, launch
#[rustfmt::skip]
pub fn clinics() -> Vec<ClinicRecord> {
    vec![
        clinic("Andheri", "West 1", "Mumbai", 1240.0, 1850, 22, 6, 2400, 68.2, (2022, 4, 10)),
        clinic("Baner", "West 1", "Pune", 1015.0, 1510, 14, 5, 2050, 64.0, (2022, 7, 1)),
        clinic("Thane", "West 1", "Mumbai", 980.0, 1460, 14, 5, 1980, 66.1, (2022, 9, 15)),
        clinic("Viman Nagar", "West 1", "Pune", 775.0, 1120, 11, 4, 1610, 59.8, (2023, 2, 20)),
        clinic("Satellite", "West 2", "Ahmedabad", 890.0, 1300, 16, 5, 1850, 61.4, (2022, 11, 5)),
        clinic("Alkapuri", "West 2", "Vadodara", 735.0, 1080, 12, 4, 1500, 60.2, (2023, 3, 12)),
        clinic("Adajan", "West 2", "Surat", 590.0, 860, 9, 3, 1210, 57.5, (2023, 8, 1)),
        clinic("Dwarka", "North", "Delhi", 720.0, 1300, 15, 5, 1720, 63.3, (2022, 10, 18)),
        clinic("Sector 29", "North", "Gurugram", 655.0, 950, 10, 4, 1400, 58.9, (2023, 5, 6)),
        clinic("Lajpat Nagar", "North", "Delhi", 515.0, 760, 8, 3, 1100, 55.0, (2023, 11, 20)),
        clinic("Indiranagar", "South 1", "Bengaluru", 1010.0, 1490, 18, 6, 2100, 67.4, (2022, 5, 22)),
        clinic("Koramangala", "South 1", "Bengaluru", 812.0, 1190, 13, 4, 1760, 62.5, (2022, 12, 3)),
        clinic("Whitefield", "South 1", "Bengaluru", 532.0, 790, 9, 3, 1150, 56.8, (2023, 9, 9)),
        clinic("Anna Nagar", "South 2", "Chennai", 810.0, 1200, 14, 5, 1640, 63.9, (2023, 1, 14)),
        clinic("Jubilee Hills", "South 2", "Hyderabad", 670.0, 990, 11, 4, 1420, 60.7, (2023, 6, 25)),
        clinic("Salt Lake", "East", "Kolkata", 610.0, 900, 10, 4, 1300, 62.5, (2023, 4, 2)),
        clinic("Park Street", "East", "Kolkata", 390.0, 580, 7, 3, 900, 54.3, (2024, 1, 8)),
    ]
}

pub fn ecom_years() -> Vec<EcomYearRecord> {
    vec![
        year("FY22", 38200, 21400, 2480.0),
        year("FY23", 51600, 26900, 3320.0),
        year("FY24", 64250, 30150, 4115.0),
    ]
}

pub fn ecom_cities() -> Vec<EcomCityRecord> {
    vec![
        city("Mumbai", "Maharashtra", 12400, 920.0, Some(2220.0)),
        city("Pune", "Maharashtra", 7415, 540.0, Some(1790.0)),
        city("Bengaluru", "Karnataka", 10800, 860.0, Some(2354.0)),
        city("Delhi", "Delhi", 9650, 780.0, Some(1235.0)),
        city("Chennai", "Tamil Nadu", 5200, 410.0, Some(810.0)),
        city("Hyderabad", "Telangana", 6100, 455.0, Some(670.0)),
        city("Kolkata", "West Bengal", 4300, 330.0, Some(1000.0)),
        city("Ahmedabad", "Gujarat", 3900, 300.0, Some(890.0)),
        city("Jaipur", "Rajasthan", 2800, 210.0, None),
        city("Lucknow", "Uttar Pradesh", 2100, 150.0, None),
        city("Gurugram", "Haryana", 0, 0.0, Some(655.0)),
    ]
}

pub fn states() -> Vec<StateRecord> {
    vec![
        state("Maharashtra", 1460.0, 4010.0, 4),
        state("Karnataka", 860.0, 2354.0, 3),
        state("Gujarat", 520.0, 2215.0, 3),
        state("Delhi", 780.0, 1235.0, 2),
        state("West Bengal", 330.0, 1000.0, 2),
        state("Tamil Nadu", 410.0, 810.0, 1),
        state("Telangana", 455.0, 670.0, 1),
        state("Haryana", 0.0, 655.0, 1),
        state("Rajasthan", 210.0, 0.0, 0),
    ]
}
