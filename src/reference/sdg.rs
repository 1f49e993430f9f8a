// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// MES Impact Core
// UN Sustainable Development Goal alignment

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Contribution {
    High,
    Medium,
    Low,
}

impl Contribution {
    /// Alignment score shown on the impact view (0-100).
    pub fn score(&self) -> u8 {
        match self {
            Contribution::High => 85,
            Contribution::Medium => 60,
            Contribution::Low => 35,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct QuantifiedMetric {
    pub metric: &'static str,
    pub value: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SdgGoal {
    pub number: u8,
    pub title: &'static str,
    pub short_title: &'static str,
    pub color: &'static str,
    pub contribution: Contribution,
    pub description: &'static str,
    pub mes_impacts: &'static [&'static str],
    pub quantifiable_metrics: &'static [QuantifiedMetric],
    pub target_alignment: &'static [&'static str],
}

const fn qm(metric: &'static str, value: &'static str, description: &'static str) -> QuantifiedMetric {
    QuantifiedMetric {
        metric,
        value,
        description,
    }
}

pub static SDG_GOALS: [SdgGoal; 8] = [
    SdgGoal {
        number: 6,
        title: "Clean Water and Sanitation",
        short_title: "Clean Water",
        color: "#26bde2",
        contribution: Contribution::High,
        description: "Ensure availability and sustainable management of water and sanitation for all",
        mes_impacts: &[
            "Advanced wastewater treatment with 85-95% contaminant removal",
            "Real-time water quality monitoring through biosensors",
            "Decentralized treatment systems for underserved communities",
            "Resource recovery from wastewater streams",
        ],
        quantifiable_metrics: &[
            qm("Water Treatment Capacity", "1000+ m³/day", "per MES facility"),
            qm("Contaminant Removal", "85-95%", "COD, BOD, nitrogen compounds"),
            qm("Energy Recovery", "0.5-2.5 kWh/m³", "energy positive treatment"),
        ],
        target_alignment: &["6.1", "6.2", "6.3", "6.4", "6.a"],
    },
    SdgGoal {
        number: 7,
        title: "Affordable and Clean Energy",
        short_title: "Clean Energy",
        color: "#fcc30b",
        contribution: Contribution::High,
        description: "Ensure access to affordable, reliable, sustainable and modern energy for all",
        mes_impacts: &[
            "Renewable electricity generation from organic waste",
            "Grid-independent power systems for remote areas",
            "Reduced dependency on fossil fuels",
            "Energy storage through hydrogen production",
        ],
        quantifiable_metrics: &[
            qm("Power Generation", "0.1-10 W/m²", "continuous renewable power"),
            qm("Hydrogen Production", "85-95%", "efficiency in MECs"),
            qm("Grid Independence", "24/7", "continuous operation"),
        ],
        target_alignment: &["7.1", "7.2", "7.3", "7.a", "7.b"],
    },
    SdgGoal {
        number: 9,
        title: "Industry, Innovation and Infrastructure",
        short_title: "Innovation",
        color: "#fd6925",
        contribution: Contribution::Medium,
        description: "Build resilient infrastructure, promote inclusive and sustainable industrialization",
        mes_impacts: &[
            "Cutting-edge bioelectrochemical technology development",
            "Sustainable industrial process integration",
            "Green technology transfer to developing nations",
            "Innovation in materials science and biotechnology",
        ],
        quantifiable_metrics: &[
            qm("R&D Investment", "$2.1B", "global annual investment"),
            qm("Patent Growth", "23%/year", "technology advancement rate"),
            qm("Technology Transfer", "45 countries", "with active MES research"),
        ],
        target_alignment: &["9.1", "9.4", "9.5", "9.a", "9.c"],
    },
    SdgGoal {
        number: 11,
        title: "Sustainable Cities and Communities",
        short_title: "Sustainable Cities",
        color: "#fd9d24",
        contribution: Contribution::High,
        description: "Make cities and human settlements inclusive, safe, resilient and sustainable",
        mes_impacts: &[
            "Urban wastewater management systems",
            "Distributed energy generation networks",
            "Reduced urban pollution and emissions",
            "Smart city integration with IoT sensors",
        ],
        quantifiable_metrics: &[
            qm("Urban Coverage", "125 cities", "with MES installations"),
            qm("Pollution Reduction", "40-60%", "in treated water bodies"),
            qm("Energy Self-sufficiency", "15-25%", "of municipal needs"),
        ],
        target_alignment: &["11.1", "11.6", "11.a", "11.b", "11.c"],
    },
    SdgGoal {
        number: 12,
        title: "Responsible Consumption and Production",
        short_title: "Responsible Consumption",
        color: "#cf8d2a",
        contribution: Contribution::High,
        description: "Ensure sustainable consumption and production patterns",
        mes_impacts: &[
            "Circular economy through waste-to-energy conversion",
            "Resource recovery from industrial waste streams",
            "Reduced chemical usage in treatment processes",
            "Sustainable materials in system construction",
        ],
        quantifiable_metrics: &[
            qm("Waste Conversion", "78-92%", "organic waste to energy"),
            qm("Chemical Reduction", "65-80%", "vs conventional treatment"),
            qm("Material Recovery", "45-70%", "nutrients and materials"),
        ],
        target_alignment: &["12.2", "12.4", "12.5", "12.6", "12.a"],
    },
    SdgGoal {
        number: 13,
        title: "Climate Action",
        short_title: "Climate Action",
        color: "#3f7e44",
        contribution: Contribution::High,
        description: "Take urgent action to combat climate change and its impacts",
        mes_impacts: &[
            "Direct CO₂ emission reduction through clean energy",
            "Methane capture and conversion to useful products",
            "Carbon sequestration in biofilm matrices",
            "Reduced transportation emissions through local treatment",
        ],
        quantifiable_metrics: &[
            qm("CO₂ Reduction", "0.8-2.3 kg/m³", "net carbon benefit"),
            qm("Methane Mitigation", "85-95%", "capture efficiency"),
            qm("Global Impact", "50k tons/year", "current CO₂ offset"),
        ],
        target_alignment: &["13.1", "13.2", "13.3", "13.a", "13.b"],
    },
    SdgGoal {
        number: 14,
        title: "Life Below Water",
        short_title: "Marine Life",
        color: "#0a97d9",
        contribution: Contribution::Medium,
        description: "Conserve and sustainably use the oceans, seas and marine resources",
        mes_impacts: &[
            "Prevention of marine pollution through improved treatment",
            "Marine sediment MFCs for underwater applications",
            "Reduced pharmaceutical and chemical discharge",
            "Protection of aquatic ecosystems",
        ],
        quantifiable_metrics: &[
            qm("Marine Protection", "95%", "pollutant removal efficiency"),
            qm("Coastal Applications", "28 installations", "marine-based MES systems"),
            qm("Ecosystem Recovery", "65-85%", "biodiversity improvement"),
        ],
        target_alignment: &["14.1", "14.2", "14.3", "14.4", "14.a"],
    },
    SdgGoal {
        number: 15,
        title: "Life on Land",
        short_title: "Terrestrial Life",
        color: "#56c02b",
        contribution: Contribution::Medium,
        description: "Protect, restore and promote sustainable use of terrestrial ecosystems",
        mes_impacts: &[
            "Reduced land contamination from wastewater discharge",
            "Soil health improvement through treated water irrigation",
            "Biodiversity protection in treatment facility areas",
            "Reduced landfill waste through resource recovery",
        ],
        quantifiable_metrics: &[
            qm("Soil Protection", "90%", "reduction in harmful discharge"),
            qm("Land Use Efficiency", "60%", "smaller footprint vs conventional"),
            qm("Biodiversity Index", "+25%", "improvement in facility areas"),
        ],
        target_alignment: &["15.1", "15.3", "15.4", "15.5", "15.9"],
    },
];

pub fn goal(number: u8) -> Option<&'static SdgGoal> {
    SDG_GOALS.iter().find(|g| g.number == number)
}

pub fn high_contribution_goals() -> impl Iterator<Item = &'static SdgGoal> {
    SDG_GOALS
        .iter()
        .filter(|g| g.contribution == Contribution::High)
}

/// Mean alignment score across all listed goals.
pub fn mean_contribution_score() -> f64 {
    let total: u32 = SDG_GOALS
        .iter()
        .map(|g| g.contribution.score() as u32)
        .sum();
    total as f64 / SDG_GOALS.len() as f64
}
