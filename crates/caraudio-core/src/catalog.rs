//! Component Catalog
//!
//! Read-only view of the equipment catalog (head units, speakers, amplifiers
//! and subwoofers). The compatibility evaluator only sees the
//! [`ComponentCatalog`] capability, so any storage backend can supply
//! records. [`CatalogSnapshot`] is the in-memory implementation.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ConfigError;

fn default_active() -> bool {
    true
}

/// Head unit (receiver) record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadUnit {
    /// Catalog id, assigned on insert when empty
    #[serde(default)]
    pub id: String,
    /// Manufacturer
    pub brand: String,
    /// Model name
    pub model: String,
    /// Built-in amplifier output in watts
    pub power_output: u32,
    /// Feature list as marketed
    #[serde(default)]
    pub features: Vec<String>,
    /// Retail price
    #[serde(default)]
    pub price: Option<u32>,
    /// Listed on the site
    #[serde(default = "default_active")]
    pub active: bool,
}

/// Speaker construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeakerKind {
    /// Woofer with a coaxial tweeter
    Coaxial,
    /// Separate woofer and tweeter set
    Component,
    /// Midrange driver
    Midrange,
    /// Tweeter
    Tweeter,
}

/// Door/shelf speaker record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Speaker {
    /// Catalog id, assigned on insert when empty
    #[serde(default)]
    pub id: String,
    /// Manufacturer
    pub brand: String,
    /// Model name
    pub model: String,
    /// Construction
    #[serde(rename = "type")]
    pub kind: SpeakerKind,
    /// Size in mm (130, 165, ...)
    pub size: u32,
    /// Continuous power handling in watts
    pub power_rms: u32,
    /// Peak power handling in watts
    pub power_max: u32,
    /// Nominal impedance in ohms
    pub impedance: u32,
    /// Frequency range as quoted by the manufacturer
    #[serde(default)]
    pub frequency_response: Option<String>,
    /// Sensitivity in dB/W/m
    #[serde(default)]
    pub sensitivity: Option<u32>,
    /// Retail price
    #[serde(default)]
    pub price: Option<u32>,
    /// Listed on the site
    #[serde(default = "default_active")]
    pub active: bool,
}

/// Amplifier record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Amplifier {
    /// Catalog id, assigned on insert when empty
    #[serde(default)]
    pub id: String,
    /// Manufacturer
    pub brand: String,
    /// Model name
    pub model: String,
    /// Output channels
    pub channels: u32,
    /// Watts per channel into 4 ohms
    pub power_per_channel: u32,
    /// Bridged output in watts
    #[serde(default)]
    pub power_bridged: Option<u32>,
    /// Lowest stable load in ohms
    pub min_impedance: u32,
    /// Feature list as marketed
    #[serde(default)]
    pub features: Vec<String>,
    /// Retail price
    #[serde(default)]
    pub price: Option<u32>,
    /// Listed on the site
    #[serde(default = "default_active")]
    pub active: bool,
}

/// Subwoofer driver record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subwoofer {
    /// Catalog id, assigned on insert when empty
    #[serde(default)]
    pub id: String,
    /// Manufacturer
    pub brand: String,
    /// Model name
    pub model: String,
    /// Size in inches (8, 10, 12, 15, ...)
    pub size: u32,
    /// Continuous power handling in watts
    pub power_rms: u32,
    /// Peak power handling in watts
    pub power_max: u32,
    /// Nominal impedance in ohms
    pub impedance: u32,
    /// Frequency range as quoted by the manufacturer
    #[serde(default)]
    pub frequency_response: Option<String>,
    /// Sensitivity in dB/W/m
    #[serde(default)]
    pub sensitivity: Option<u32>,
    /// Mounting depth in mm
    #[serde(default)]
    pub mounting_depth: Option<u32>,
    /// Retail price
    #[serde(default)]
    pub price: Option<u32>,
    /// Listed on the site
    #[serde(default = "default_active")]
    pub active: bool,
}

/// Any catalog record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "camelCase")]
pub enum ComponentRecord {
    /// Head unit
    HeadUnit(HeadUnit),
    /// Speaker
    Speaker(Speaker),
    /// Amplifier
    Amplifier(Amplifier),
    /// Subwoofer
    Subwoofer(Subwoofer),
}

impl ComponentRecord {
    /// Record id
    pub fn id(&self) -> &str {
        match self {
            ComponentRecord::HeadUnit(r) => &r.id,
            ComponentRecord::Speaker(r) => &r.id,
            ComponentRecord::Amplifier(r) => &r.id,
            ComponentRecord::Subwoofer(r) => &r.id,
        }
    }

    fn id_mut(&mut self) -> &mut String {
        match self {
            ComponentRecord::HeadUnit(r) => &mut r.id,
            ComponentRecord::Speaker(r) => &mut r.id,
            ComponentRecord::Amplifier(r) => &mut r.id,
            ComponentRecord::Subwoofer(r) => &mut r.id,
        }
    }

    /// Whether the record is listed on the site
    pub fn is_active(&self) -> bool {
        match self {
            ComponentRecord::HeadUnit(r) => r.active,
            ComponentRecord::Speaker(r) => r.active,
            ComponentRecord::Amplifier(r) => r.active,
            ComponentRecord::Subwoofer(r) => r.active,
        }
    }

    /// The record as a head unit, if it is one
    pub fn as_head_unit(&self) -> Option<&HeadUnit> {
        match self {
            ComponentRecord::HeadUnit(r) => Some(r),
            _ => None,
        }
    }

    /// The record as a speaker, if it is one
    pub fn as_speaker(&self) -> Option<&Speaker> {
        match self {
            ComponentRecord::Speaker(r) => Some(r),
            _ => None,
        }
    }

    /// The record as an amplifier, if it is one
    pub fn as_amplifier(&self) -> Option<&Amplifier> {
        match self {
            ComponentRecord::Amplifier(r) => Some(r),
            _ => None,
        }
    }

    /// The record as a subwoofer, if it is one
    pub fn as_subwoofer(&self) -> Option<&Subwoofer> {
        match self {
            ComponentRecord::Subwoofer(r) => Some(r),
            _ => None,
        }
    }
}

/// Lookup capability consumed by the compatibility evaluator
pub trait ComponentCatalog {
    /// Find an active record by id
    fn lookup(&self, id: &str) -> Option<&ComponentRecord>;
}

/// Catalog file layout, one list per equipment category
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogFile {
    /// Head units
    pub head_units: Vec<HeadUnit>,
    /// Speakers
    pub speakers: Vec<Speaker>,
    /// Amplifiers
    pub amplifiers: Vec<Amplifier>,
    /// Subwoofers
    pub subwoofers: Vec<Subwoofer>,
}

/// In-memory catalog keyed by record id
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    records: HashMap<String, ComponentRecord>,
}

impl CatalogSnapshot {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from records
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = ComponentRecord>,
    {
        let mut catalog = Self::new();
        for record in records {
            catalog.insert(record);
        }
        catalog
    }

    /// Parse a catalog from JSON in [`CatalogFile`] layout
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Ok(Self::from(file))
    }

    /// Load a catalog from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Insert a record, assigning a fresh id when it has none
    ///
    /// Returns the id the record is stored under. A record with an existing
    /// id replaces the previous one.
    pub fn insert(&mut self, mut record: ComponentRecord) -> String {
        if record.id().is_empty() {
            *record.id_mut() = Uuid::new_v4().to_string();
        }
        let id = record.id().to_string();
        self.records.insert(id.clone(), record);
        id
    }

    /// Number of records, active or not
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the catalog holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Active head units ordered by brand and model
    pub fn head_units(&self) -> Vec<&HeadUnit> {
        let mut items: Vec<_> = self.active().filter_map(ComponentRecord::as_head_unit).collect();
        items.sort_by(|a, b| (&a.brand, &a.model).cmp(&(&b.brand, &b.model)));
        items
    }

    /// Active speakers ordered by brand and model
    pub fn speakers(&self) -> Vec<&Speaker> {
        let mut items: Vec<_> = self.active().filter_map(ComponentRecord::as_speaker).collect();
        items.sort_by(|a, b| (&a.brand, &a.model).cmp(&(&b.brand, &b.model)));
        items
    }

    /// Active amplifiers ordered by brand and model
    pub fn amplifiers(&self) -> Vec<&Amplifier> {
        let mut items: Vec<_> = self.active().filter_map(ComponentRecord::as_amplifier).collect();
        items.sort_by(|a, b| (&a.brand, &a.model).cmp(&(&b.brand, &b.model)));
        items
    }

    /// Active subwoofers ordered by brand and model
    pub fn subwoofers(&self) -> Vec<&Subwoofer> {
        let mut items: Vec<_> = self.active().filter_map(ComponentRecord::as_subwoofer).collect();
        items.sort_by(|a, b| (&a.brand, &a.model).cmp(&(&b.brand, &b.model)));
        items
    }

    fn active(&self) -> impl Iterator<Item = &ComponentRecord> {
        self.records.values().filter(|r| r.is_active())
    }
}

impl From<CatalogFile> for CatalogSnapshot {
    fn from(file: CatalogFile) -> Self {
        let records = file
            .head_units
            .into_iter()
            .map(ComponentRecord::HeadUnit)
            .chain(file.speakers.into_iter().map(ComponentRecord::Speaker))
            .chain(file.amplifiers.into_iter().map(ComponentRecord::Amplifier))
            .chain(file.subwoofers.into_iter().map(ComponentRecord::Subwoofer));
        Self::from_records(records)
    }
}

impl ComponentCatalog for CatalogSnapshot {
    fn lookup(&self, id: &str) -> Option<&ComponentRecord> {
        self.records.get(id).filter(|r| r.is_active())
    }
}
