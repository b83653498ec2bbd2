// Online-to-offline comparison
// Pairs e-commerce revenue with clinic revenue per city and per state.

use crate::kpi::{multiplier, Ratio};
use crate::records::{EcomCityRecord, StateRecord};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityComparison {
    pub city: String,
    pub state: String,
    pub ecom_orders: u32,
    pub ecom_revenue: f64,
    pub clinic_revenue: Option<f64>,
    pub multiplier: Ratio,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateComparison {
    pub state: String,
    pub ecom_revenue: f64,
    pub clinic_revenue: f64,
    pub clinics: u32,
    pub multiplier: Ratio,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonTotals {
    pub ecom_revenue: f64,
    pub clinic_revenue: f64,
    pub multiplier: Ratio,
}

/// City rows, largest e-commerce revenue first
pub fn city_comparison(cities: &[EcomCityRecord]) -> Vec<CityComparison> {
    let mut rows: Vec<CityComparison> = cities
        .iter()
        .map(|c| CityComparison {
            city: c.city.clone(),
            state: c.state.clone(),
            ecom_orders: c.ecom_orders,
            ecom_revenue: c.ecom_revenue,
            clinic_revenue: c.clinic_revenue,
            multiplier: multiplier(c.clinic_revenue, c.ecom_revenue),
        })
        .collect();

    rows.sort_by(|a, b| b.ecom_revenue.total_cmp(&a.ecom_revenue));
    rows
}

/// State rows, largest clinic revenue first
pub fn state_comparison(states: &[StateRecord]) -> Vec<StateComparison> {
    let mut rows: Vec<StateComparison> = states
        .iter()
        .map(|s| StateComparison {
            state: s.state.clone(),
            ecom_revenue: s.ecom_revenue,
            clinic_revenue: s.clinic_revenue,
            clinics: s.clinics,
            multiplier: multiplier(Some(s.clinic_revenue), s.ecom_revenue),
        })
        .collect();

    rows.sort_by(|a, b| b.clinic_revenue.total_cmp(&a.clinic_revenue));
    rows
}

pub fn comparison_totals(states: &[StateRecord]) -> ComparisonTotals {
    let ecom_revenue: f64 = states.iter().map(|s| s.ecom_revenue).sum();
    let clinic_revenue: f64 = states.iter().map(|s| s.clinic_revenue).sum();

    ComparisonTotals {
        ecom_revenue,
        clinic_revenue,
        multiplier: multiplier(Some(clinic_revenue), ecom_revenue),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_haryana_has_no_multiplier() {
        let rows = state_comparison(&fixtures::states());
        let haryana = rows.iter().find(|r| r.state == "Haryana").unwrap();
        assert_eq!(haryana.multiplier, Ratio::NotApplicable);
        assert_eq!(haryana.clinic_revenue, 655.0);
    }

    #[test]
    fn test_state_rows_sorted_by_clinic_revenue() {
        let rows = state_comparison(&fixtures::states());
        assert_eq!(rows[0].state, "Maharashtra");
        assert!(rows
            .windows(2)
            .all(|w| w[0].clinic_revenue >= w[1].clinic_revenue));

        let maharashtra = rows[0].multiplier.value().unwrap();
        assert!((maharashtra - 4010.0 / 1460.0).abs() < 1e-9);
    }

    #[test]
    fn test_city_without_clinic_figure() {
        let rows = city_comparison(&fixtures::ecom_cities());
        let jaipur = rows.iter().find(|r| r.city == "Jaipur").unwrap();
        assert_eq!(jaipur.clinic_revenue, None);
        assert_eq!(jaipur.multiplier, Ratio::NotApplicable);

        let gurugram = rows.iter().find(|r| r.city == "Gurugram").unwrap();
        assert_eq!(gurugram.multiplier, Ratio::NotApplicable);
        assert_eq!(rows.last().unwrap().city, "Gurugram");
    }

    #[test]
    fn test_city_rows_sorted_by_ecom_revenue() {
        let rows = city_comparison(&fixtures::ecom_cities());
        assert_eq!(rows[0].city, "Mumbai");
        assert!(rows.windows(2).all(|w| w[0].ecom_revenue >= w[1].ecom_revenue));
    }

    #[test]
    fn test_totals() {
        let totals = comparison_totals(&fixtures::states());
        assert_eq!(totals.clinic_revenue, 12949.0);
        assert_eq!(totals.ecom_revenue, 5025.0);
        assert!(totals.multiplier.is_applicable());

        let empty = comparison_totals(&[]);
        assert_eq!(empty.multiplier, Ratio::NotApplicable);
    }
}
