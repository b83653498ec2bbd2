// KPI Engine - headline figures from monthly and zone aggregates
//
// Every ratio goes through `Ratio`, so a zero denominator yields
// `Ratio::NotApplicable` instead of NaN or infinity.

use crate::records::{EcomYearRecord, MonthlyRecord, ZoneRecord};
use serde::{Deserialize, Serialize};

// ============================================================================
// RATIO
// ============================================================================

/// A derived figure that may have no meaningful value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum Ratio {
    Value(f64),

    /// Denominator was zero or an input was absent
    NotApplicable,
}

impl Ratio {
    /// `numerator / denominator`, NotApplicable on a zero or non-finite denominator
    pub fn divide(numerator: f64, denominator: f64) -> Self {
        if denominator == 0.0 || !denominator.is_finite() || !numerator.is_finite() {
            return Ratio::NotApplicable;
        }
        Ratio::Value(numerator / denominator)
    }

    /// Same as `divide` scaled to a percentage
    pub fn percent(numerator: f64, denominator: f64) -> Self {
        Self::divide(numerator, denominator).map(|v| v * 100.0)
    }

    pub fn map(self, f: impl FnOnce(f64) -> f64) -> Self {
        match self {
            Ratio::Value(v) => Ratio::Value(f(v)),
            Ratio::NotApplicable => Ratio::NotApplicable,
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Ratio::Value(v) => Some(*v),
            Ratio::NotApplicable => None,
        }
    }

    pub fn is_applicable(&self) -> bool {
        matches!(self, Ratio::Value(_))
    }
}

// ============================================================================
// SCALAR KPIs
// ============================================================================

pub fn total_revenue(monthly: &[MonthlyRecord]) -> f64 {
    monthly.iter().map(|m| m.revenue).sum()
}

/// Growth of the latest month over the one before, in percent
pub fn month_over_month_growth(monthly: &[MonthlyRecord]) -> Ratio {
    match monthly {
        [.., previous, latest] => {
            Ratio::percent(latest.revenue - previous.revenue, previous.revenue)
        }
        _ => Ratio::NotApplicable,
    }
}

/// Show rate across records, weighted by appointment count
pub fn weighted_show_pct(rows: impl IntoIterator<Item = (u32, f64)>) -> Ratio {
    let (appointments, shows) = rows
        .into_iter()
        .fold((0.0, 0.0), |(appts, shows), (a, pct)| {
            (appts + a as f64, shows + a as f64 * pct)
        });
    Ratio::divide(shows, appointments)
}

/// Growth of the latest e-commerce year over the one before, in percent
pub fn ecom_year_over_year(years: &[EcomYearRecord]) -> Ratio {
    match years {
        [.., previous, latest] => {
            Ratio::percent(latest.revenue - previous.revenue, previous.revenue)
        }
        _ => Ratio::NotApplicable,
    }
}

/// Share of orders placed by first-time customers (1CX), in percent
pub fn first_time_share(year: &EcomYearRecord) -> Ratio {
    Ratio::percent(year.first_time_orders as f64, year.orders as f64)
}

/// Clinic revenue per unit of e-commerce revenue
pub fn multiplier(clinic_revenue: Option<f64>, ecom_revenue: f64) -> Ratio {
    match clinic_revenue {
        Some(clinic) if ecom_revenue > 0.0 => Ratio::divide(clinic, ecom_revenue),
        _ => Ratio::NotApplicable,
    }
}

// ============================================================================
// ZONE SHARES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneShare {
    pub zone: String,
    pub revenue: f64,
    pub share: Ratio,
    pub revenue_per_clinic: Ratio,
}

/// `zone.revenue` as a percentage of all zone revenue
pub fn zone_share(zone: &ZoneRecord, zones: &[ZoneRecord]) -> Ratio {
    let total: f64 = zones.iter().map(|z| z.revenue).sum();
    Ratio::percent(zone.revenue, total)
}

pub fn revenue_per_clinic(zone: &ZoneRecord) -> Ratio {
    Ratio::divide(zone.revenue, zone.clinics as f64)
}

/// One share per zone, in input order
pub fn zone_shares(zones: &[ZoneRecord]) -> Vec<ZoneShare> {
    let total: f64 = zones.iter().map(|z| z.revenue).sum();

    zones
        .iter()
        .map(|zone| ZoneShare {
            zone: zone.name.clone(),
            revenue: zone.revenue,
            share: Ratio::percent(zone.revenue, total),
            revenue_per_clinic: revenue_per_clinic(zone),
        })
        .collect()
}

// ============================================================================
// KPI SUMMARY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSummary {
    pub total_revenue: f64,
    pub total_quantity: u64,
    pub total_appointments: u64,
    pub total_visits: u64,
    pub show_pct: Ratio,
    pub mom_growth: Ratio,
    pub latest_month: Option<String>,
    pub zone_shares: Vec<ZoneShare>,
    pub top_zone: Option<String>,
}

impl KpiSummary {
    pub fn summary(&self) -> String {
        format!(
            "Revenue: {:.0}, Appointments: {}, MoM: {}, Top zone: {}",
            self.total_revenue,
            self.total_appointments,
            crate::format::format_ratio_percent(self.mom_growth),
            self.top_zone.as_deref().unwrap_or("-"),
        )
    }
}

pub fn compute_kpis(monthly: &[MonthlyRecord], zones: &[ZoneRecord]) -> KpiSummary {
    // First zone wins a revenue tie
    let top_zone = zones
        .iter()
        .fold(None::<&ZoneRecord>, |best, z| match best {
            Some(b) if b.revenue >= z.revenue => Some(b),
            _ => Some(z),
        })
        .map(|z| z.name.clone());

    KpiSummary {
        total_revenue: total_revenue(monthly),
        total_quantity: monthly.iter().map(|m| m.quantity as u64).sum(),
        total_appointments: monthly.iter().map(|m| m.appointments as u64).sum(),
        total_visits: monthly.iter().map(|m| m.visits as u64).sum(),
        show_pct: weighted_show_pct(monthly.iter().map(|m| (m.appointments, m.show_pct))),
        mom_growth: month_over_month_growth(monthly),
        latest_month: monthly.last().map(|m| m.month.clone()),
        zone_shares: zone_shares(zones),
        top_zone,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn month(label: &str, revenue: f64) -> MonthlyRecord {
        MonthlyRecord {
            month: label.to_string(),
            quantity: 10,
            revenue,
            visits: 6,
            appointments: 10,
            show_pct: 60.0,
        }
    }

    #[test]
    fn test_total_revenue_fixture() {
        assert_eq!(total_revenue(&fixtures::monthly()), 11679.0);
    }

    #[test]
    fn test_month_over_month_growth() {
        let growth = month_over_month_growth(&fixtures::monthly());
        let value = growth.value().unwrap();
        assert!((value - (-6.807_511_737)).abs() < 1e-6);
    }

    #[test]
    fn test_month_over_month_needs_two_records() {
        assert_eq!(month_over_month_growth(&[]), Ratio::NotApplicable);
        assert_eq!(
            month_over_month_growth(&[month("Jan", 100.0)]),
            Ratio::NotApplicable
        );
    }

    #[test]
    fn test_month_over_month_zero_previous() {
        let months = vec![month("Jan", 0.0), month("Feb", 250.0)];
        assert_eq!(month_over_month_growth(&months), Ratio::NotApplicable);
    }

    #[test]
    fn test_zone_share_west_1() {
        let zones = fixtures::zones();
        let total: f64 = zones.iter().map(|z| z.revenue).sum();
        assert_eq!(total, 12949.0);

        let west = zones.iter().find(|z| z.name == "West 1").unwrap();
        let share = zone_share(west, &zones).value().unwrap();
        assert!((share - 30.967_642_288).abs() < 1e-6);
    }

    #[test]
    fn test_zone_shares_sum_to_hundred() {
        let shares = zone_shares(&fixtures::zones());
        assert_eq!(shares.len(), 6);
        let sum: f64 = shares.iter().filter_map(|s| s.share.value()).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_zone_share_all_zero() {
        let mut zones = fixtures::zones();
        for z in zones.iter_mut() {
            z.revenue = 0.0;
        }
        assert!(zone_shares(&zones).iter().all(|s| !s.share.is_applicable()));
    }

    #[test]
    fn test_multiplier_guards() {
        assert_eq!(multiplier(Some(655.0), 0.0), Ratio::NotApplicable);
        assert_eq!(multiplier(None, 210.0), Ratio::NotApplicable);
        assert_eq!(multiplier(Some(860.0), 430.0), Ratio::Value(2.0));
    }

    #[test]
    fn test_compute_kpis() {
        let kpis = compute_kpis(&fixtures::monthly(), &fixtures::zones());
        assert_eq!(kpis.total_revenue, 11679.0);
        assert_eq!(kpis.latest_month.as_deref(), Some("Jan-25"));
        assert_eq!(kpis.top_zone.as_deref(), Some("West 1"));
        assert!(kpis.mom_growth.value().unwrap() < 0.0);

        let show = kpis.show_pct.value().unwrap();
        assert!(show > 57.0 && show < 66.0);
    }

    #[test]
    fn test_compute_kpis_empty() {
        let kpis = compute_kpis(&[], &[]);
        assert_eq!(kpis.total_revenue, 0.0);
        assert_eq!(kpis.show_pct, Ratio::NotApplicable);
        assert_eq!(kpis.top_zone, None);
    }

    #[test]
    fn test_ecom_metrics() {
        let years = fixtures::ecom_years();
        let yoy = ecom_year_over_year(&years).value().unwrap();
        assert!((yoy - (4115.0 - 3320.0) / 3320.0 * 100.0).abs() < 1e-9);

        let share = first_time_share(&years[0]).value().unwrap();
        assert!((share - 21400.0 / 38200.0 * 100.0).abs() < 1e-9);

        let empty = EcomYearRecord {
            year: "FY25".to_string(),
            orders: 0,
            first_time_orders: 0,
            revenue: 0.0,
        };
        assert_eq!(first_time_share(&empty), Ratio::NotApplicable);
    }
}
