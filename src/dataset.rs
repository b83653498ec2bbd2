// 📦 Dataset - owner of the reporting tables
//
// Constructed once, validated once, then only read. Zone names are the
// lookup key that ties clinics to zones.

use crate::error::{MetricsError, Result};
use crate::fixtures;
use crate::kpi::{compute_kpis, KpiSummary};
use crate::records::{
    ClinicRecord, EcomCityRecord, EcomYearRecord, MonthlyRecord, StateRecord, ZoneRecord,
};
use crate::view::{derive_clinic_view, ViewState, ZoneFilter};
use std::collections::HashSet;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Dataset {
    monthly: Vec<MonthlyRecord>,
    zones: Vec<ZoneRecord>,
    clinics: Vec<ClinicRecord>,
    ecom_years: Vec<EcomYearRecord>,
    ecom_cities: Vec<EcomCityRecord>,
    states: Vec<StateRecord>,
}

impl Dataset {
    /// Build a dataset, rejecting duplicate zones and dangling clinic zone references
    pub fn new(
        monthly: Vec<MonthlyRecord>,
        zones: Vec<ZoneRecord>,
        clinics: Vec<ClinicRecord>,
        ecom_years: Vec<EcomYearRecord>,
        ecom_cities: Vec<EcomCityRecord>,
        states: Vec<StateRecord>,
    ) -> Result<Self> {
        let mut names = HashSet::new();
        for zone in &zones {
            if !names.insert(zone.name.as_str()) {
                return Err(MetricsError::DuplicateZone(zone.name.clone()));
            }
        }

        if let Some(clinic) = clinics.iter().find(|c| !names.contains(c.zone.as_str())) {
            return Err(MetricsError::DanglingZoneReference {
                clinic: clinic.name.clone(),
                zone: clinic.zone.clone(),
            });
        }

        info!(
            months = monthly.len(),
            zones = zones.len(),
            clinics = clinics.len(),
            cities = ecom_cities.len(),
            states = states.len(),
            "dataset loaded"
        );

        Ok(Dataset {
            monthly,
            zones,
            clinics,
            ecom_years,
            ecom_cities,
            states,
        })
    }

    /// The embedded reporting tables
    pub fn builtin() -> Result<Self> {
        Dataset::new(
            fixtures::monthly(),
            fixtures::zones(),
            fixtures::clinics(),
            fixtures::ecom_years(),
            fixtures::ecom_cities(),
            fixtures::states(),
        )
    }

    pub fn monthly(&self) -> &[MonthlyRecord] {
        &self.monthly
    }

    pub fn zones(&self) -> &[ZoneRecord] {
        &self.zones
    }

    pub fn clinics(&self) -> &[ClinicRecord] {
        &self.clinics
    }

    pub fn ecom_years(&self) -> &[EcomYearRecord] {
        &self.ecom_years
    }

    pub fn ecom_cities(&self) -> &[EcomCityRecord] {
        &self.ecom_cities
    }

    pub fn states(&self) -> &[StateRecord] {
        &self.states
    }

    pub fn zone(&self, name: &str) -> Option<&ZoneRecord> {
        self.zones.iter().find(|z| z.name == name)
    }

    /// Zone names in table order
    pub fn zone_names(&self) -> Vec<&str> {
        self.zones.iter().map(|z| z.name.as_str()).collect()
    }

    /// Parse a zone selection: "All" (any case) or an existing zone name
    pub fn zone_filter(&self, selection: &str) -> Result<ZoneFilter> {
        let selection = selection.trim();
        if selection.eq_ignore_ascii_case("all") {
            return Ok(ZoneFilter::All);
        }

        match self.zone(selection) {
            Some(zone) => Ok(ZoneFilter::Zone(zone.name.clone())),
            None => {
                warn!(zone = selection, "rejected unknown zone selection");
                Err(MetricsError::UnknownZone(selection.to_string()))
            }
        }
    }

    pub fn clinic_view(&self, state: &ViewState) -> Vec<&ClinicRecord> {
        derive_clinic_view(&self.clinics, state.sort_key, &state.zone_filter)
    }

    pub fn kpis(&self) -> KpiSummary {
        compute_kpis(&self.monthly, &self.zones)
    }
}
