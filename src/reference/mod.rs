// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Read-only reference tables shown next to the calculators.
//!
//! Nothing here feeds the projection model; these are illustrative figures
//! selected by the frontend's view mode.

pub mod benchmarks;
pub mod lifecycle;
pub mod regions;
pub mod sdg;

use crate::error::{error_json, CoreResult, ProjectionError};
use benchmarks::{BenchmarkMetric, BenchmarkTechnology, CarbonLineItem};
use lifecycle::{ImpactCategory, Technology};
use regions::RegionMetric;
use serde::Serialize;
use serde_json::json;
use wasm_bindgen::prelude::*;

fn to_json<T: Serialize>(value: CoreResult<T>) -> String {
    match value.and_then(|v| Ok(serde_json::to_string(&v)?)) {
        Ok(json) => json,
        Err(e) => error_json(&e),
    }
}

fn unknown(kind: &'static str, id: impl ToString) -> ProjectionError {
    ProjectionError::UnknownReference {
        kind,
        id: id.to_string(),
    }
}

fn line_total(items: &[CarbonLineItem]) -> f64 {
    items.iter().map(|i| i.kg_co2_per_m3).sum()
}

#[derive(Serialize)]
struct ComparativeRow {
    technology: Technology,
    values: [f64; 5],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ComparativeTable {
    category: ImpactCategory,
    phases: [&'static str; 5],
    rows: Vec<ComparativeRow>,
    impact_payback_years: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RegionMetricRow {
    id: &'static str,
    name: &'static str,
    value: f64,
    share_of_peak: f64,
}

/// JSON facade over the reference tables for the frontend.
#[wasm_bindgen]
pub struct ReferenceData;

#[wasm_bindgen]
impl ReferenceData {
    // --- Regions ---

    pub fn regions_json() -> String {
        to_json(Ok(&regions::REGIONS))
    }

    pub fn region_json(id: &str) -> String {
        to_json(regions::region(id).ok_or_else(|| unknown("region", id)))
    }

    pub fn global_totals_json() -> String {
        to_json(Ok(regions::global_totals()))
    }

    /// Per-region value of `"deployment"`, `"carbon"` or `"water"`, with each
    /// region's share of the largest one for map shading.
    pub fn region_metric_json(metric: &str) -> String {
        let table = metric.parse::<RegionMetric>().map(|metric| {
            let rows: Vec<RegionMetricRow> = regions::REGIONS
                .iter()
                .map(|r| RegionMetricRow {
                    id: r.id,
                    name: r.name,
                    value: metric.value(r),
                    share_of_peak: metric.share_of_peak(r),
                })
                .collect();
            json!({ "metric": metric, "unit": metric.unit(), "regions": rows })
        });
        to_json(table)
    }

    pub fn projected_growth_json() -> String {
        to_json(Ok(regions::PROJECTED_2030))
    }

    // --- Lifecycle ---

    pub fn lifecycle_phases_json() -> String {
        to_json(Ok(&lifecycle::LIFECYCLE_PHASES))
    }

    pub fn lifecycle_phase_json(id: &str) -> String {
        to_json(lifecycle::phase(id).ok_or_else(|| unknown("lifecycle phase", id)))
    }

    /// Total impact over all phases for `"carbon"`, `"energy"` or `"water"`.
    pub fn lifecycle_total(category: &str) -> Option<f64> {
        category
            .parse::<ImpactCategory>()
            .ok()
            .map(lifecycle::total_impact)
    }

    /// Comparative LCA matrix. Views without their own table ("materials")
    /// show carbon.
    pub fn comparative_lca_json(category: &str) -> String {
        let category = ImpactCategory::from_str_or_carbon(category);
        to_json(Ok(ComparativeTable {
            category,
            phases: lifecycle::COMPARATIVE_PHASES,
            rows: Technology::ALL
                .iter()
                .map(|t| ComparativeRow {
                    technology: *t,
                    values: lifecycle::comparative_profile(category, *t),
                })
                .collect(),
            impact_payback_years: category.impact_payback_years(),
        }))
    }

    // --- SDG ---

    pub fn sdg_goals_json() -> String {
        to_json(Ok(&sdg::SDG_GOALS))
    }

    pub fn sdg_goal_json(number: u8) -> String {
        to_json(sdg::goal(number).ok_or_else(|| unknown("SDG goal", number)))
    }

    pub fn sdg_high_contribution_json() -> String {
        let goals: Vec<_> = sdg::high_contribution_goals().collect();
        to_json(Ok(goals))
    }

    pub fn sdg_mean_score() -> f64 {
        sdg::mean_contribution_score()
    }

    // --- Benchmarks ---

    /// Benchmark values per technology for a metric; unknown metrics read as carbon.
    pub fn benchmarks_json(metric: &str) -> String {
        let metric = BenchmarkMetric::from_str_or_carbon(metric);
        let values: Vec<_> = BenchmarkTechnology::ALL
            .iter()
            .map(|t| (*t, benchmarks::benchmark(metric, *t)))
            .collect();
        to_json(Ok(json!({
            "metric": metric,
            "title": metric.title(),
            "unit": metric.unit(),
            "values": values,
            "best": benchmarks::best_performer(metric),
        })))
    }

    /// Lifecycle carbon timeline, MES against conventional, per stage and cumulative.
    pub fn carbon_timeline_json() -> String {
        to_json(Ok(json!({
            "stages": benchmarks::TIMELINE_STAGES,
            "mes": benchmarks::MES_TIMELINE,
            "conventional": benchmarks::CONVENTIONAL_TIMELINE,
            "mesCumulative": benchmarks::cumulative(&benchmarks::MES_TIMELINE),
            "conventionalCumulative": benchmarks::cumulative(&benchmarks::CONVENTIONAL_TIMELINE),
        })))
    }

    pub fn impact_breakdown_json() -> String {
        to_json(Ok(&benchmarks::IMPACT_BREAKDOWN))
    }

    /// Embodied and yearly avoided carbon per m³ of capacity.
    pub fn capacity_carbon_json() -> String {
        to_json(Ok(json!({
            "embodied": benchmarks::EMBODIED_CARBON,
            "embodiedTotal": line_total(&benchmarks::EMBODIED_CARBON),
            "avoidedPerYear": benchmarks::AVOIDED_CARBON_PER_YEAR,
            "avoidedTotalPerYear": line_total(&benchmarks::AVOIDED_CARBON_PER_YEAR),
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_json_found() {
        let v: serde_json::Value = serde_json::from_str(&ReferenceData::region_json("africa")).unwrap();
        assert_eq!(v["name"], "Africa");
        assert_eq!(v["deploymentMw"], 2.8);
    }

    #[test]
    fn test_missing_ids_render_error_objects() {
        for json in [
            ReferenceData::region_json("atlantis"),
            ReferenceData::lifecycle_phase_json("recycling"),
            ReferenceData::sdg_goal_json(2),
            ReferenceData::region_metric_json("population"),
        ] {
            let v: serde_json::Value = serde_json::from_str(&json).unwrap();
            assert!(v["error"].as_str().unwrap().starts_with("Unknown"), "{}", json);
        }
    }

    #[test]
    fn test_comparative_table_shape() {
        let v: serde_json::Value =
            serde_json::from_str(&ReferenceData::comparative_lca_json("energy")).unwrap();
        assert_eq!(v["rows"].as_array().unwrap().len(), 4);
        assert_eq!(v["rows"][0]["technology"], "MES");
        assert_eq!(v["impactPaybackYears"], 0.4);
    }

    #[test]
    fn test_materials_view_shows_carbon_table() {
        let v: serde_json::Value =
            serde_json::from_str(&ReferenceData::comparative_lca_json("materials")).unwrap();
        assert_eq!(v["category"], "carbon");
        assert_eq!(v["rows"][0]["values"][2], -12.3);
        assert_eq!(v["impactPaybackYears"], 1.8);
    }

    #[test]
    fn test_lifecycle_total_accessor() {
        assert!(ReferenceData::lifecycle_total("materials").is_none());
        let carbon = ReferenceData::lifecycle_total("carbon").unwrap();
        assert!((carbon - 18.0).abs() < 1e-9);
    }

    #[test]
    fn test_benchmarks_json() {
        let v: serde_json::Value =
            serde_json::from_str(&ReferenceData::benchmarks_json("water")).unwrap();
        assert_eq!(v["unit"], "% Recovery");
        assert_eq!(v["values"][0][0], "MES System");
        assert_eq!(v["values"][0][1], 85.0);
    }

    #[test]
    fn test_benchmarks_name_best_performer() {
        let v: serde_json::Value =
            serde_json::from_str(&ReferenceData::benchmarks_json("water")).unwrap();
        assert_eq!(v["best"], "Membrane Bioreactor");
        let v: serde_json::Value =
            serde_json::from_str(&ReferenceData::benchmarks_json("carbon")).unwrap();
        assert_eq!(v["best"], "MES System");
    }

    #[test]
    fn test_region_metric_shares() {
        let v: serde_json::Value =
            serde_json::from_str(&ReferenceData::region_metric_json("water")).unwrap();
        assert_eq!(v["unit"], "m³/day");
        let regions = v["regions"].as_array().unwrap();
        assert_eq!(regions.len(), 5);
        let apac = regions.iter().find(|r| r["id"] == "asia-pacific").unwrap();
        assert_eq!(apac["shareOfPeak"], 1.0);
        assert_eq!(apac["value"], 285_000.0);
    }

    #[test]
    fn test_projected_growth() {
        let v: serde_json::Value =
            serde_json::from_str(&ReferenceData::projected_growth_json()).unwrap();
        assert_eq!(v["year"], 2030);
        assert_eq!(v["capacityMw"], 285.0);
        assert_eq!(v["peopleServed"], 480_000);
    }

    #[test]
    fn test_high_contribution_goals_json() {
        let v: serde_json::Value =
            serde_json::from_str(&ReferenceData::sdg_high_contribution_json()).unwrap();
        let numbers: Vec<u64> = v
            .as_array()
            .unwrap()
            .iter()
            .map(|g| g["number"].as_u64().unwrap())
            .collect();
        assert_eq!(numbers, vec![6, 7, 11, 12, 13]);
    }

    #[test]
    fn test_carbon_timeline() {
        let v: serde_json::Value =
            serde_json::from_str(&ReferenceData::carbon_timeline_json()).unwrap();
        assert_eq!(v["stages"].as_array().unwrap().len(), 5);
        assert_eq!(v["stages"][0], "Construction");
        assert_eq!(v["mesCumulative"][4], -3.0);
        assert_eq!(v["conventionalCumulative"][4], 54.0);
    }

    #[test]
    fn test_impact_breakdown_and_capacity_carbon() {
        let v: serde_json::Value =
            serde_json::from_str(&ReferenceData::impact_breakdown_json()).unwrap();
        assert_eq!(v[0]["label"], "Energy Production");
        assert_eq!(v[0]["percent"], 35.0);

        let v: serde_json::Value =
            serde_json::from_str(&ReferenceData::capacity_carbon_json()).unwrap();
        assert_eq!(v["embodiedTotal"], 17.0);
        assert_eq!(v["avoidedTotalPerYear"], -15.0);
        assert_eq!(v["embodied"][1]["kgCo2PerM3"], 2.0);
    }
}
