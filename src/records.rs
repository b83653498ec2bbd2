// Record types - flat, pre-aggregated reporting rows
// All records are built once from embedded tables and never mutated.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// CLINIC-SIDE RECORDS
// ============================================================================

/// One month of network-wide clinic activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRecord {
    /// Display label, e.g. "Jan-24"
    pub month: String,

    /// Units sold
    pub quantity: u32,

    /// Revenue in the reporting unit
    pub revenue: f64,

    /// Attended visits
    pub visits: u32,

    /// Booked appointments
    pub appointments: u32,

    /// Show rate as a percentage (0-100)
    pub show_pct: f64,
}

/// Zone-level aggregate. Zone names are unique within a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneRecord {
    pub name: String,
    pub quantity: u32,
    pub revenue: f64,
    pub appointments: u32,
    pub show_pct: f64,
    pub clinics: u32,

    /// Hex color used by chart legends
    pub color: String,
}

/// A single clinic. `zone` is a lookup key into the zone table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicRecord {
    pub name: String,
    pub zone: String,
    pub region: String,
    pub revenue: f64,
    pub quantity: u32,
    pub pincodes: u32,
    pub cabins: u32,
    pub appointments: u32,
    pub show_pct: f64,
    pub launch_date: NaiveDate,
}

// ============================================================================
// ONLINE (E-COMMERCE) RECORDS
// ============================================================================

/// E-commerce totals for one financial year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcomYearRecord {
    /// e.g. "FY23"
    pub year: String,
    pub orders: u32,

    /// Orders placed by first-time customers (1CX)
    pub first_time_orders: u32,
    pub revenue: f64,
}

/// E-commerce vs clinic performance for one city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcomCityRecord {
    pub city: String,
    pub state: String,
    pub ecom_orders: u32,
    pub ecom_revenue: f64,

    /// None when the city has no clinic figure (no clinic presence yet)
    #[serde(default)]
    pub clinic_revenue: Option<f64>,
}

/// E-commerce vs clinic performance for one state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateRecord {
    pub state: String,
    pub ecom_revenue: f64,
    pub clinic_revenue: f64,
    pub clinics: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_clinic_revenue_defaults_to_none() {
        let json =
            r#"{"city":"Noida","state":"Uttar Pradesh","ecomOrders":120,"ecomRevenue":64.0}"#;
        let city: EcomCityRecord = serde_json::from_str(json).unwrap();
        assert_eq!(city.clinic_revenue, None);
    }
}
