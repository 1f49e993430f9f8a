// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto

//! Projection Kernel Tests
//!
//! End-to-end checks through the kernel entry points the dashboard calls.

use crate::projection_kernel::{ProjectionConfig, ProjectionKernel, Severity};
use crate::science::inputs::OperatingInputs;
use crate::science::scenario::Scenario;
use serde_json::json;

fn topics(inputs: &OperatingInputs, scenario: Scenario) -> Vec<String> {
    ProjectionKernel::respond(inputs, scenario, &ProjectionConfig::default())
        .events
        .into_iter()
        .map(|e| e.topic)
        .collect()
}

#[test]
fn test_reference_plant_through_json() {
    let inputs = json!({
        "flowRate": 1000,
        "codConcentration": 2000,
        "powerDensity": 2.5,
        "codRemovalFraction": 85,
        "electricityRate": 0.12,
        "operatingCost": 0.15,
        "capitalCost": 800,
        "conventionalTreatmentCost": 0.45
    });

    let response_json = ProjectionKernel::compute_json(&inputs.to_string(), "realistic");
    let response: serde_json::Value = serde_json::from_str(&response_json).unwrap();
    let eco = &response["result"]["economic"];

    println!(" Result: {:#}", eco);

    assert_eq!(eco["daily"]["powerGeneration"], 60.0);
    let net = eco["daily"]["netBenefit"].as_f64().unwrap();
    assert!((net - 157.2).abs() < 1e-9, "Daily net benefit: {}", net);
    assert_eq!(response["result"]["scenario"], "realistic");
    assert!(response["result"]["sustainability"].is_object());
    assert!(response["compute_time_ms"].as_f64().unwrap() >= 0.0);
    assert_eq!(response["events"].as_array().unwrap().len(), 0);
}

#[test]
fn test_compute_json_errors() {
    let bad_scenario = ProjectionKernel::compute_json("{}", "pessimistic");
    let v: serde_json::Value = serde_json::from_str(&bad_scenario).unwrap();
    assert!(v["error"].as_str().unwrap().contains("pessimistic"));

    let bad_json = ProjectionKernel::compute_json("{flowRate:", "realistic");
    let v: serde_json::Value = serde_json::from_str(&bad_json).unwrap();
    assert!(v["error"].as_str().unwrap().starts_with("JSON error"));
}

#[test]
fn test_loss_making_plant_events() {
    let inputs = OperatingInputs {
        conventional_treatment_cost: 0.2,
        operating_cost: 0.5,
        ..OperatingInputs::default()
    };
    let response = ProjectionKernel::respond(&inputs, Scenario::Realistic, &ProjectionConfig::default());

    let payback = response
        .events
        .iter()
        .find(|e| e.topic == "ECONOMICS.PAYBACK")
        .expect("payback event");
    assert_eq!(payback.severity, Severity::Critical);
    assert!(response.events.iter().any(|e| e.topic == "ECONOMICS.NET_BENEFIT"));

    // Events are advisory only
    let plain = ProjectionKernel::compute(&inputs, Scenario::Realistic, &ProjectionConfig::default());
    assert_eq!(response.result, plain);
}

#[test]
fn test_removal_cap_reported_for_economics() {
    let inputs = OperatingInputs {
        cod_removal: 90.0,
        ..OperatingInputs::default()
    };
    let caps = topics(&inputs, Scenario::Optimistic)
        .into_iter()
        .filter(|t| t == "PERFORMANCE.REMOVAL_CAP")
        .count();
    assert_eq!(caps, 1);
}

#[test]
fn test_sustainability_removal_not_reported_as_capped() {
    let inputs = OperatingInputs {
        cod_removal: 90.0,
        ..OperatingInputs::default()
    };
    let config = ProjectionConfig {
        enable_economics: false,
        ..ProjectionConfig::default()
    };
    let response = ProjectionKernel::respond(&inputs, Scenario::Optimistic, &config);
    assert!(response.events.iter().all(|e| e.topic != "PERFORMANCE.REMOVAL_CAP"));

    let removal = response.result.sustainability.unwrap().performance.adjusted_cod_removal;
    assert!((removal - 108.0).abs() < 1e-9, "Adjusted removal: {}", removal);
}

#[test]
fn test_net_emitter_warned() {
    let inputs = OperatingInputs {
        power_density: 5.0,
        conventional_energy_intensity: 0.05,
        ..OperatingInputs::default()
    };
    let topics = topics(&inputs, Scenario::Optimistic);
    assert!(topics.contains(&"ENVIRONMENT.CARBON".to_string()));
    // 0.05 kWh/m³ is below the sustainability slider
    assert!(topics.contains(&"INPUT.RANGE".to_string()));
}

#[test]
fn test_range_events_per_calculator() {
    let inputs = OperatingInputs {
        flow_rate: 50.0,
        ..OperatingInputs::default()
    };
    let response = ProjectionKernel::respond(&inputs, Scenario::Realistic, &ProjectionConfig::default());
    let range: Vec<_> = response.events.iter().filter(|e| e.topic == "INPUT.RANGE").collect();
    // Economic slider starts at 10, sustainability slider at 100
    assert_eq!(range.len(), 1);
    assert!(range[0].message.starts_with("Flow Rate"));

    let quiet = ProjectionConfig {
        check_input_ranges: false,
        ..ProjectionConfig::default()
    };
    let response = ProjectionKernel::respond(&inputs, Scenario::Realistic, &quiet);
    assert!(response.events.iter().all(|e| e.topic != "INPUT.RANGE"));
}

#[test]
fn test_disabled_calculators_are_absent() {
    let config = ProjectionConfig {
        enable_sustainability: false,
        ..ProjectionConfig::default()
    };
    let result = ProjectionKernel::compute(&OperatingInputs::default(), Scenario::Realistic, &config);
    assert!(result.economic.is_some());
    assert!(result.sustainability.is_none());
}

#[test]
fn test_compare_scenarios_order() {
    let results =
        ProjectionKernel::compare_scenarios(&OperatingInputs::default(), &ProjectionConfig::default());
    let order: Vec<Scenario> = results.iter().map(|r| r.scenario).collect();
    assert_eq!(order, Scenario::ALL.to_vec());

    let net: Vec<f64> = results
        .iter()
        .map(|r| r.economic.as_ref().unwrap().annual.net_benefit)
        .collect();
    assert!(net[0] > net[1] && net[1] > net[2], "{:?}", net);

    let json = ProjectionKernel::compare_json("{}");
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v.as_array().unwrap().len(), 3);
    assert_eq!(v[2]["result"]["scenario"], "conservative");
}

#[test]
fn test_request_document_with_config() {
    let base = json!({ "inputs": { "flowRate": 500 }, "scenario": "optimistic" });
    let priced = json!({
        "inputs": { "flowRate": 500 },
        "scenario": "optimistic",
        "config": { "carbon_credit_price": 100.0 }
    });

    let a = ProjectionKernel::respond_to(&base.to_string()).unwrap();
    let b = ProjectionKernel::respond_to(&priced.to_string()).unwrap();
    let a = a.result.sustainability.unwrap();
    let b = b.result.sustainability.unwrap();
    assert_eq!(a.daily.volume, 500.0);
    assert!((b.annual.carbon_credit_value - 2.0 * a.annual.carbon_credit_value).abs() < 1e-6);

    assert!(ProjectionKernel::respond_to(r#"{"scenario": "pessimistic"}"#).is_err());
}

#[test]
fn test_repeat_computation_is_identical() {
    let inputs = OperatingInputs::default();
    let config = ProjectionConfig::default();
    let a = ProjectionKernel::compute(&inputs, Scenario::Conservative, &config);
    let b = ProjectionKernel::compute(&inputs, Scenario::Conservative, &config);
    assert_eq!(a, b);
}

#[test]
fn test_request_scenario_names_are_case_insensitive() {
    let response = ProjectionKernel::respond_to(r#"{"scenario": "Optimistic"}"#).unwrap();
    assert_eq!(response.result.scenario, Scenario::Optimistic);

    let via_compute: serde_json::Value =
        serde_json::from_str(&ProjectionKernel::compute_json("{}", "Optimistic")).unwrap();
    let via_request = serde_json::to_value(&response.result).unwrap();
    assert_eq!(via_compute["result"], via_request);
}
