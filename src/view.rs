// 🔎 Derived-View Engine - filter + stable sort over clinic records
//
// Selection state is a plain value. The presentation layer owns the
// current `ViewState` and passes it in; nothing here keeps state between calls.

use crate::error::{MetricsError, Result};
use crate::kpi::{weighted_show_pct, Ratio};
use crate::records::ClinicRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

// ============================================================================
// SORT KEY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    #[serde(rename = "revenue")]
    Revenue,
    #[serde(rename = "quantity")]
    Quantity,
    #[serde(rename = "showPct")]
    ShowPct,
    #[serde(rename = "pincodes")]
    Pincodes,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Revenue,
        SortKey::Quantity,
        SortKey::ShowPct,
        SortKey::Pincodes,
    ];

    /// Wire form used by the API and CLI
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Revenue => "revenue",
            SortKey::Quantity => "quantity",
            SortKey::ShowPct => "showPct",
            SortKey::Pincodes => "pincodes",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Revenue => "Revenue",
            SortKey::Quantity => "Quantity",
            SortKey::ShowPct => "Show %",
            SortKey::Pincodes => "Pincodes",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            SortKey::Revenue => SortKey::Quantity,
            SortKey::Quantity => SortKey::ShowPct,
            SortKey::ShowPct => SortKey::Pincodes,
            SortKey::Pincodes => SortKey::Revenue,
        }
    }

    /// Numeric value this key orders by
    pub fn value_of(&self, clinic: &ClinicRecord) -> f64 {
        match self {
            SortKey::Revenue => clinic.revenue,
            SortKey::Quantity => clinic.quantity as f64,
            SortKey::ShowPct => clinic.show_pct,
            SortKey::Pincodes => clinic.pincodes as f64,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self> {
        SortKey::ALL
            .iter()
            .copied()
            .find(|k| k.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| MetricsError::InvalidSortKey(s.to_string()))
    }
}

// ============================================================================
// ZONE FILTER
// ============================================================================

/// Build validated filters through `Dataset::zone_filter`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ZoneFilter {
    #[default]
    All,
    Zone(String),
}

impl ZoneFilter {
    pub fn matches(&self, clinic: &ClinicRecord) -> bool {
        match self {
            ZoneFilter::All => true,
            ZoneFilter::Zone(zone) => &clinic.zone == zone,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ZoneFilter::All => "All",
            ZoneFilter::Zone(zone) => zone.as_str(),
        }
    }

    /// Cycle All -> first zone -> ... -> last zone -> All
    pub fn next(&self, zone_names: &[&str]) -> Self {
        let next_index = match self {
            ZoneFilter::All => 0,
            ZoneFilter::Zone(current) => {
                match zone_names.iter().position(|z| *z == current.as_str()) {
                    Some(i) => i + 1,
                    // Unknown zone restarts the cycle
                    None => return ZoneFilter::All,
                }
            }
        };

        zone_names
            .get(next_index)
            .map(|name| ZoneFilter::Zone(name.to_string()))
            .unwrap_or(ZoneFilter::All)
    }
}

// ============================================================================
// TABS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tab {
    #[default]
    Overview,
    Zones,
    Clinics,
    OnlineVsOffline,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Overview, Tab::Zones, Tab::Clinics, Tab::OnlineVsOffline];

    pub fn next(&self) -> Self {
        match self {
            Tab::Overview => Tab::Zones,
            Tab::Zones => Tab::Clinics,
            Tab::Clinics => Tab::OnlineVsOffline,
            Tab::OnlineVsOffline => Tab::Overview,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Tab::Overview => Tab::OnlineVsOffline,
            Tab::Zones => Tab::Overview,
            Tab::Clinics => Tab::Zones,
            Tab::OnlineVsOffline => Tab::Clinics,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Tab::Overview => "Overview",
            Tab::Zones => "Zones",
            Tab::Clinics => "Clinics",
            Tab::OnlineVsOffline => "Online vs Offline",
        }
    }
}

impl FromStr for Tab {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overview" => Ok(Tab::Overview),
            "zones" => Ok(Tab::Zones),
            "clinics" => Ok(Tab::Clinics),
            "onlinevsoffline" | "online-vs-offline" | "comparison" => Ok(Tab::OnlineVsOffline),
            _ => Err(MetricsError::InvalidTab(s.to_string())),
        }
    }
}

// ============================================================================
// VIEW STATE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub tab: Tab,
    pub sort_key: SortKey,
    pub zone_filter: ZoneFilter,
}

impl ViewState {
    pub fn new(tab: Tab, sort_key: SortKey) -> Self {
        ViewState {
            tab,
            sort_key,
            zone_filter: ZoneFilter::All,
        }
    }

    pub fn with_tab(&self, tab: Tab) -> Self {
        ViewState { tab, ..self.clone() }
    }

    pub fn with_sort_key(&self, sort_key: SortKey) -> Self {
        ViewState {
            sort_key,
            ..self.clone()
        }
    }

    pub fn with_zone_filter(&self, zone_filter: ZoneFilter) -> Self {
        ViewState {
            zone_filter,
            ..self.clone()
        }
    }
}

// ============================================================================
// DERIVATION
// ============================================================================

/// Filter by zone, then sort descending by `sort_key`
///
/// Equal keys keep their source order. The source slice is untouched.
pub fn derive_clinic_view<'a>(
    clinics: &'a [ClinicRecord],
    sort_key: SortKey,
    zone_filter: &ZoneFilter,
) -> Vec<&'a ClinicRecord> {
    let mut view: Vec<&ClinicRecord> = clinics
        .iter()
        .filter(|c| zone_filter.matches(c))
        .collect();

    // Vec::sort_by is stable
    view.sort_by(|a, b| sort_key.value_of(b).total_cmp(&sort_key.value_of(a)));

    debug!(
        sort = sort_key.as_str(),
        zone = zone_filter.label(),
        rows = view.len(),
        "derived clinic view"
    );

    view
}

/// Footer totals for a derived clinic view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicViewSummary {
    pub rows: usize,
    pub revenue: f64,
    pub quantity: u64,
    pub appointments: u64,
    pub show_pct: Ratio,
}

impl ClinicViewSummary {
    pub fn from_view(view: &[&ClinicRecord]) -> Self {
        ClinicViewSummary {
            rows: view.len(),
            revenue: view.iter().map(|c| c.revenue).sum(),
            quantity: view.iter().map(|c| c.quantity as u64).sum(),
            appointments: view.iter().map(|c| c.appointments as u64).sum(),
            show_pct: weighted_show_pct(view.iter().map(|c| (c.appointments, c.show_pct))),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
