//! System Compatibility Evaluator
//!
//! Checks a candidate configurator setup against the head unit's output and
//! the vehicle's stock wiring, and adds body-type advice.

use serde::{Deserialize, Serialize};

use crate::catalog::{ComponentCatalog, ComponentRecord};
use crate::error::Result;
use crate::formula::require_positive;

/// Current (A) that stock vehicle wiring is assumed to carry safely
pub const STOCK_WIRING_CAPACITY_A: f64 = 30.0;

/// Vehicle body style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyType {
    /// Four-door saloon
    Sedan,
    /// Hatchback
    Hatchback,
    /// Two-door coupe
    Coupe,
    /// Sport utility vehicle
    Suv,
    /// Estate
    Wagon,
    /// Soft or hard top convertible
    Convertible,
}

/// Subwoofer enclosure chosen in the configurator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnclosureType {
    /// Closed box
    #[default]
    Sealed,
    /// Vented box
    Ported,
    /// Bandpass box
    Bandpass,
}

/// A catalog component chosen for one position, with quantity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComponentSelection {
    /// Catalog id, `"none"` or empty when nothing is chosen
    pub component_id: Option<String>,
    /// Units fitted
    pub quantity: u32,
}

impl ComponentSelection {
    /// Selection of `quantity` units of `id`
    pub fn new(id: &str, quantity: u32) -> Self {
        Self {
            component_id: Some(id.to_string()),
            quantity,
        }
    }

    /// The chosen id, if something other than "none" was picked
    pub fn selected_id(&self) -> Option<&str> {
        self.component_id
            .as_deref()
            .filter(|id| !id.is_empty() && *id != "none")
    }

    /// Returns true if a component is chosen and at least one unit is fitted
    pub fn is_selected(&self) -> bool {
        self.selected_id().is_some() && self.quantity > 0
    }
}

/// Subwoofer selection with its enclosure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SubwooferSelection {
    /// Chosen subwoofer and count
    #[serde(flatten)]
    pub selection: ComponentSelection,
    /// Enclosure for the subwoofers
    pub box_type: EnclosureType,
}

/// Candidate system built in the configurator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemConfiguration {
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Vehicle body style
    pub body_type: BodyType,
    /// Catalog id of the head unit
    #[serde(default)]
    pub head_unit_id: Option<String>,
    /// Vehicle supply voltage (12 for cars, 24 for trucks)
    pub supply_voltage: f64,
    /// Front door speakers
    #[serde(default)]
    pub front_speakers: ComponentSelection,
    /// Rear door or shelf speakers
    #[serde(default)]
    pub rear_speakers: ComponentSelection,
    /// Subwoofers and their enclosure
    #[serde(default)]
    pub subwoofers: SubwooferSelection,
}

/// Outcome of a compatibility check
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityReport {
    /// Problems that need fixing
    pub issues: Vec<String>,
    /// Advice, including fixes for the issues
    pub recommendations: Vec<String>,
    /// Sum of RMS power over all selected speakers and subwoofers, in watts
    pub total_power_requirement: u32,
}

impl CompatibilityReport {
    /// Returns true if no issue was found
    pub fn is_compatible(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Evaluate a configuration against a catalog snapshot
pub fn evaluate_compatibility<C>(
    config: &SystemConfiguration,
    catalog: &C,
) -> Result<CompatibilityReport>
where
    C: ComponentCatalog + ?Sized,
{
    let supply_voltage = require_positive("supplyVoltage", config.supply_voltage)?;
    let mut report = CompatibilityReport::default();

    let speaker_rms = |r: &ComponentRecord| r.as_speaker().map(|s| s.power_rms);
    let subwoofer_rms = |r: &ComponentRecord| r.as_subwoofer().map(|s| s.power_rms);

    report.total_power_requirement = [
        selection_power(catalog, &config.front_speakers, speaker_rms),
        selection_power(catalog, &config.rear_speakers, speaker_rms),
        selection_power(catalog, &config.subwoofers.selection, subwoofer_rms),
    ]
    .into_iter()
    .fold(0u32, u32::saturating_add);
    let total = report.total_power_requirement;

    let head_unit = config
        .head_unit_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .and_then(|id| resolve(catalog, id, ComponentRecord::as_head_unit));
    if let Some(head_unit) = head_unit {
        if head_unit.power_output < total {
            report.issues.push(format!(
                "Head unit delivers only {}W while the system requires {}W",
                head_unit.power_output, total
            ));
            report
                .recommendations
                .push("Add external amplifiers to power the system".to_string());
        }
    }

    let current_draw = f64::from(total) / supply_voltage;
    if current_draw > STOCK_WIRING_CAPACITY_A {
        report.issues.push(format!(
            "The system draws about {current_draw:.1}A, which may be too much for stock wiring"
        ));
        report
            .recommendations
            .push("Upgrade the power wiring from the battery".to_string());
    }

    if config.body_type == BodyType::Coupe && config.rear_speakers.is_selected() {
        report.recommendations.push(
            "Rear speakers in a coupe may be less effective because of the limited space"
                .to_string(),
        );
    }

    if config.body_type == BodyType::Sedan
        && config.subwoofers.selection.is_selected()
        && config.subwoofers.selection.quantity > 1
    {
        report.recommendations.push(
            "In a sedan one quality subwoofer works better than several small ones".to_string(),
        );
    }

    Ok(report)
}

/// RMS power of one selection, zero when nothing usable is selected
fn selection_power<C, F>(catalog: &C, selection: &ComponentSelection, power_of: F) -> u32
where
    C: ComponentCatalog + ?Sized,
    F: Fn(&ComponentRecord) -> Option<u32>,
{
    let Some(id) = selection.selected_id() else {
        return 0;
    };
    resolve(catalog, id, power_of)
        .map(|rms| rms.saturating_mul(selection.quantity))
        .unwrap_or(0)
}

fn resolve<'a, C, T, F>(catalog: &'a C, id: &str, project: F) -> Option<T>
where
    C: ComponentCatalog + ?Sized,
    F: Fn(&'a ComponentRecord) -> Option<T>,
{
    let found = catalog.lookup(id).and_then(project);
    if found.is_none() {
        tracing::warn!("Component '{id}' is missing from the catalog or has the wrong category");
    }
    found
}
