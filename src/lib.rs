// Clinic Metrics - Core Library
// Metrics view model shared by the CLI, the terminal dashboard and the API server

pub mod error;
pub mod records;
pub mod fixtures;
pub mod dataset;
pub mod view;        // Derived-view engine: filter + stable sort
pub mod kpi;         // Totals, growth, shares, multipliers
pub mod format;      // Indian-convention display strings
pub mod comparison;  // Online vs offline
pub mod config;
pub mod logging;
pub mod export;

#[cfg(feature = "server")]
pub mod api;

// Re-export commonly used types
pub use error::MetricsError;
pub use records::{
    ClinicRecord, EcomCityRecord, EcomYearRecord, MonthlyRecord, StateRecord, ZoneRecord,
};
pub use dataset::Dataset;
pub use view::{
    derive_clinic_view, ClinicViewSummary, SortKey, Tab, ViewState, ZoneFilter,
};
pub use kpi::{
    compute_kpis, ecom_year_over_year, first_time_share, month_over_month_growth, multiplier,
    revenue_per_clinic, total_revenue, zone_share, zone_shares, KpiSummary, Ratio, ZoneShare,
};
pub use format::{
    format_compact, format_indian, format_multiplier, format_ratio_percent, format_share,
    PLACEHOLDER,
};
pub use comparison::{
    city_comparison, comparison_totals, state_comparison, CityComparison, ComparisonTotals,
    StateComparison,
};
pub use config::DashboardConfig;
pub use export::write_clinic_csv;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
