// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// MES Impact Core
// Comparative treatment-technology benchmarks

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BenchmarkTechnology {
    #[serde(rename = "MES System")]
    Mes,
    #[serde(rename = "Activated Sludge")]
    ActivatedSludge,
    #[serde(rename = "Anaerobic Digestion")]
    AnaerobicDigestion,
    #[serde(rename = "Membrane Bioreactor")]
    MembraneBioreactor,
    #[serde(rename = "Constructed Wetlands")]
    ConstructedWetlands,
}

impl BenchmarkTechnology {
    pub const ALL: [BenchmarkTechnology; 5] = [
        BenchmarkTechnology::Mes,
        BenchmarkTechnology::ActivatedSludge,
        BenchmarkTechnology::AnaerobicDigestion,
        BenchmarkTechnology::MembraneBioreactor,
        BenchmarkTechnology::ConstructedWetlands,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BenchmarkMetric {
    /// kg CO₂eq per m³ treated
    Carbon,
    /// Net kWh per m³, positive means energy exported
    Energy,
    /// Percent of water recovered
    Water,
}

impl BenchmarkMetric {
    /// Unknown names fall back to carbon, as the comparison chart does.
    pub fn from_str_or_carbon(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "energy" => BenchmarkMetric::Energy,
            "water" => BenchmarkMetric::Water,
            _ => BenchmarkMetric::Carbon,
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            BenchmarkMetric::Carbon => "kg CO₂ eq/m³",
            BenchmarkMetric::Energy => "kWh/m³",
            BenchmarkMetric::Water => "% Recovery",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            BenchmarkMetric::Carbon => "Carbon Footprint Comparison",
            BenchmarkMetric::Energy => "Energy Balance Analysis",
            BenchmarkMetric::Water => "Water Recovery Efficiency",
        }
    }

    /// Whether a larger value is the better outcome.
    pub fn higher_is_better(&self) -> bool {
        !matches!(self, BenchmarkMetric::Carbon)
    }
}

pub fn benchmark(metric: BenchmarkMetric, technology: BenchmarkTechnology) -> f64 {
    use BenchmarkMetric::*;
    use BenchmarkTechnology::*;
    match (metric, technology) {
        (Carbon, Mes) => -0.8,
        (Carbon, ActivatedSludge) => 2.1,
        (Carbon, AnaerobicDigestion) => 0.3,
        (Carbon, MembraneBioreactor) => 1.8,
        (Carbon, ConstructedWetlands) => 0.1,
        (Energy, Mes) => 0.2,
        (Energy, ActivatedSludge) => -1.5,
        (Energy, AnaerobicDigestion) => 0.8,
        (Energy, MembraneBioreactor) => -2.1,
        (Energy, ConstructedWetlands) => -0.1,
        (Water, Mes) => 85.0,
        (Water, ActivatedSludge) => 60.0,
        (Water, AnaerobicDigestion) => 45.0,
        (Water, MembraneBioreactor) => 90.0,
        (Water, ConstructedWetlands) => 75.0,
    }
}

/// Technology with the best value for a metric.
pub fn best_performer(metric: BenchmarkMetric) -> BenchmarkTechnology {
    let score = |t: &BenchmarkTechnology| {
        let v = benchmark(metric, *t);
        if metric.higher_is_better() {
            v
        } else {
            -v
        }
    };
    BenchmarkTechnology::ALL
        .iter()
        .copied()
        .max_by(|a, b| score(a).total_cmp(&score(b)))
        .unwrap_or(BenchmarkTechnology::Mes)
}

// --- Lifecycle carbon timeline (kg CO₂/m³ capacity) ---

pub const TIMELINE_STAGES: [&str; 5] = [
    "Construction",
    "Operation (Year 1-5)",
    "Operation (Year 6-15)",
    "Maintenance",
    "End of Life",
];
pub const MES_TIMELINE: [f64; 5] = [12.0, -8.0, -12.0, 3.0, 2.0];
pub const CONVENTIONAL_TIMELINE: [f64; 5] = [8.0, 15.0, 18.0, 8.0, 5.0];

/// Running total of a timeline, stage by stage.
pub fn cumulative(timeline: &[f64]) -> Vec<f64> {
    timeline
        .iter()
        .scan(0.0, |acc, v| {
            *acc += v;
            Some(*acc)
        })
        .collect()
}

// --- Impact breakdown (share of MES carbon benefit, %) ---

#[derive(Clone, Copy, Debug, Serialize)]
pub struct ImpactShare {
    pub label: &'static str,
    pub percent: f64,
}

pub const IMPACT_BREAKDOWN: [ImpactShare; 5] = [
    ImpactShare { label: "Energy Production", percent: 35.0 },
    ImpactShare { label: "Chemical Reduction", percent: 25.0 },
    ImpactShare { label: "Sludge Reduction", percent: 20.0 },
    ImpactShare { label: "Water Recovery", percent: 15.0 },
    ImpactShare { label: "Construction Impact", percent: 5.0 },
];

// --- Per-capacity carbon figures ---

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarbonLineItem {
    pub label: &'static str,
    pub kg_co2_per_m3: f64,
}

/// Embodied carbon, kg CO₂ per m³ of capacity, incurred once.
pub const EMBODIED_CARBON: [CarbonLineItem; 3] = [
    CarbonLineItem { label: "Material impacts", kg_co2_per_m3: 12.0 },
    CarbonLineItem { label: "Transportation", kg_co2_per_m3: 2.0 },
    CarbonLineItem { label: "Installation", kg_co2_per_m3: 3.0 },
];

/// Operational carbon, kg CO₂ per m³ of capacity per year.
pub const AVOIDED_CARBON_PER_YEAR: [CarbonLineItem; 3] = [
    CarbonLineItem { label: "Avoided electricity", kg_co2_per_m3: -8.0 },
    CarbonLineItem { label: "Reduced chemicals", kg_co2_per_m3: -4.0 },
    CarbonLineItem { label: "Sludge reduction", kg_co2_per_m3: -3.0 },
];
