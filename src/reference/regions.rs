// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// MES Impact Core
// Regional deployment records

use crate::error::ProjectionError;
use serde::Serialize;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentStatus {
    Operational,
    Planned,
    Research,
}

#[derive(Clone, Debug, Serialize)]
pub struct Project {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub capacity: &'static str,
    pub year: u16,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub id: &'static str,
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub deployment_mw: f64,
    pub carbon_offset_tons: f64, // t CO₂/year
    pub water_treated_m3_day: f64,
    pub status: DeploymentStatus,
    pub projects: &'static [Project],
}

pub static REGIONS: [Region; 5] = [
    Region {
        id: "north-america",
        name: "North America",
        latitude: 45.0,
        longitude: -100.0,
        deployment_mw: 12.5,
        carbon_offset_tons: 8750.0,
        water_treated_m3_day: 125_000.0,
        status: DeploymentStatus::Operational,
        projects: &[
            Project { name: "Oregon State MFC Plant", kind: "Municipal Wastewater", capacity: "2.5 MW", year: 2019 },
            Project { name: "Penn State Research", kind: "Pilot Scale", capacity: "150 kW", year: 2020 },
            Project { name: "Foster Brewery MFC", kind: "Industrial", capacity: "800 kW", year: 2021 },
        ],
    },
    Region {
        id: "europe",
        name: "Europe",
        latitude: 50.0,
        longitude: 10.0,
        deployment_mw: 18.3,
        carbon_offset_tons: 12_810.0,
        water_treated_m3_day: 180_000.0,
        status: DeploymentStatus::Operational,
        projects: &[
            Project { name: "Netherlands Pilot", kind: "Research", capacity: "1.2 MW", year: 2018 },
            Project { name: "Germany Industrial", kind: "Brewery", capacity: "3.1 MW", year: 2020 },
            Project { name: "UK Municipal Plant", kind: "Wastewater", capacity: "4.5 MW", year: 2022 },
        ],
    },
    Region {
        id: "asia-pacific",
        name: "Asia-Pacific",
        latitude: 20.0,
        longitude: 110.0,
        deployment_mw: 32.1,
        carbon_offset_tons: 22_470.0,
        water_treated_m3_day: 285_000.0,
        status: DeploymentStatus::Operational,
        projects: &[
            Project { name: "Singapore Seawater MFC", kind: "Marine", capacity: "1.8 MW", year: 2021 },
            Project { name: "China Scale-up", kind: "Municipal", capacity: "8.5 MW", year: 2023 },
            Project { name: "Japan Research Hub", kind: "Multi-purpose", capacity: "2.2 MW", year: 2024 },
        ],
    },
    Region {
        id: "south-america",
        name: "South America",
        latitude: -15.0,
        longitude: -60.0,
        deployment_mw: 5.7,
        carbon_offset_tons: 3990.0,
        water_treated_m3_day: 42_000.0,
        status: DeploymentStatus::Planned,
        projects: &[
            Project { name: "Brazil Pilot", kind: "Sugarcane Waste", capacity: "1.1 MW", year: 2024 },
            Project { name: "Argentina Research", kind: "Mining Water", capacity: "750 kW", year: 2025 },
        ],
    },
    Region {
        id: "africa",
        name: "Africa",
        latitude: 0.0,
        longitude: 20.0,
        deployment_mw: 2.8,
        carbon_offset_tons: 1960.0,
        water_treated_m3_day: 18_000.0,
        status: DeploymentStatus::Research,
        projects: &[
            Project { name: "South Africa Demo", kind: "Off-grid", capacity: "500 kW", year: 2025 },
            Project { name: "Kenya Rural Project", kind: "Decentralized", capacity: "300 kW", year: 2026 },
        ],
    },
];

/// Look up a region by id (`"europe"`, `"asia-pacific"`, ...).
pub fn region(id: &str) -> Option<&'static Region> {
    REGIONS.iter().find(|r| r.id == id)
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalTotals {
    pub deployment_mw: f64,
    pub carbon_offset_tons: f64,
    pub water_treated_m3_day: f64,
    pub projects: usize,
}

pub fn global_totals() -> GlobalTotals {
    REGIONS.iter().fold(
        GlobalTotals {
            deployment_mw: 0.0,
            carbon_offset_tons: 0.0,
            water_treated_m3_day: 0.0,
            projects: 0,
        },
        |acc, r| GlobalTotals {
            deployment_mw: acc.deployment_mw + r.deployment_mw,
            carbon_offset_tons: acc.carbon_offset_tons + r.carbon_offset_tons,
            water_treated_m3_day: acc.water_treated_m3_day + r.water_treated_m3_day,
            projects: acc.projects + r.projects.len(),
        },
    )
}

/// Which regional figure a map view is keyed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionMetric {
    Deployment,
    Carbon,
    Water,
}

impl FromStr for RegionMetric {
    type Err = ProjectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "deployment" => Ok(RegionMetric::Deployment),
            "carbon" => Ok(RegionMetric::Carbon),
            "water" => Ok(RegionMetric::Water),
            _ => Err(ProjectionError::UnknownReference {
                kind: "region metric",
                id: s.to_string(),
            }),
        }
    }
}

impl RegionMetric {
    pub fn value(&self, region: &Region) -> f64 {
        match self {
            RegionMetric::Deployment => region.deployment_mw,
            RegionMetric::Carbon => region.carbon_offset_tons,
            RegionMetric::Water => region.water_treated_m3_day,
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            RegionMetric::Deployment => "MW",
            RegionMetric::Carbon => "tons CO₂/year",
            RegionMetric::Water => "m³/day",
        }
    }

    /// Region value as a fraction of the largest region (0-1].
    pub fn share_of_peak(&self, region: &Region) -> f64 {
        let peak = REGIONS
            .iter()
            .map(|r| self.value(r))
            .fold(0.0_f64, f64::max);
        if peak > 0.0 {
            self.value(region) / peak
        } else {
            0.0
        }
    }
}

/// 2030 outlook quoted alongside the map.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthProjection {
    pub year: u16,
    pub capacity_mw: f64,
    pub carbon_offset_tons: f64,
    pub water_treated_m3_day: f64,
    pub people_served: u32,
}

pub const PROJECTED_2030: GrowthProjection = GrowthProjection {
    year: 2030,
    capacity_mw: 285.0,
    carbon_offset_tons: 199_000.0,
    water_treated_m3_day: 1_200_000.0,
    people_served: 480_000,
};
