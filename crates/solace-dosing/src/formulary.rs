//! Medication reference data.
//!
//! The formulary is versioned JSON supplied by configuration. It is loaded
//! once and then only ever replaced whole: [`FormularyHandle::replace`]
//! swaps the table atomically, so a reader sees either the old table or
//! the new one, never a mix.

use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::DosingError;

/// Current formulary version. Bump this when changing shape; each bump
/// needs a step in [`migrate`].
const CURRENT_VERSION: u32 = 1;

const BUILTIN_FORMULARY: &str = include_str!("../data/formulary.json");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Formulary {
    /// Schema version. Missing or 0 = pre-versioned formulary.
    #[serde(default)]
    pub formulary_version: u32,
    pub medications: Vec<Medication>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Medication {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    pub regimens: Vec<DosingRegimen>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One way of giving a medication. `dose` and `max_dose` are the
/// human-authored strings, parsed on every calculation.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DosingRegimen {
    pub route: String,
    pub frequency: String,
    pub dose: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_dose: Option<String>,
}

impl Formulary {
    /// The formulary bundled with this build.
    pub fn builtin() -> Result<Self, DosingError> {
        Self::from_json(BUILTIN_FORMULARY)
    }

    pub fn from_json(contents: &str) -> Result<Self, DosingError> {
        // Parse as raw JSON so we can run migrations before deserializing.
        let json: serde_json::Value = serde_json::from_str(contents)?;
        let on_disk_version = json
            .get("formulary_version")
            .and_then(|v| v.as_u64())
            .unwrap_or(0) as u32;

        let migrated = migrate(json, on_disk_version)?;
        let formulary: Formulary = serde_json::from_value(migrated)?;

        for (i, medication) in formulary.medications.iter().enumerate() {
            if formulary.medications[..i].iter().any(|m| m.id == medication.id) {
                return Err(DosingError::DuplicateMedication(medication.id.clone()));
            }
        }
        Ok(formulary)
    }

    pub fn load(path: &Path) -> Result<Self, DosingError> {
        let contents = std::fs::read_to_string(path).map_err(|source| DosingError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let formulary = Self::from_json(&contents)?;
        tracing::info!(
            path = %path.display(),
            medications = formulary.medications.len(),
            "formulary loaded"
        );
        Ok(formulary)
    }

    pub fn medication(&self, id: &str) -> Option<&Medication> {
        self.medications.iter().find(|m| m.id == id)
    }

    pub fn require(&self, id: &str) -> Result<&Medication, DosingError> {
        self.medication(id)
            .ok_or_else(|| DosingError::UnknownMedication(id.to_string()))
    }
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(
    mut json: serde_json::Value,
    from_version: u32,
) -> Result<serde_json::Value, DosingError> {
    if from_version > CURRENT_VERSION {
        return Err(DosingError::UnsupportedFormularyVersion {
            found: from_version,
            supported: CURRENT_VERSION,
        });
    }

    // v0 → v1: one flat regimen per medication becomes a `regimens` list.
    if from_version < 1 {
        if let Some(medications) = json
            .get_mut("medications")
            .and_then(|m| m.as_array_mut())
        {
            for medication in medications.iter_mut().filter_map(|m| m.as_object_mut()) {
                if medication.contains_key("regimens") {
                    continue;
                }
                let mut regimen = serde_json::Map::new();
                for key in ["route", "frequency", "dose", "max_dose"] {
                    if let Some(value) = medication.remove(key) {
                        regimen.insert(key.to_string(), value);
                    }
                }
                medication.insert(
                    "regimens".to_string(),
                    serde_json::Value::Array(vec![serde_json::Value::Object(regimen)]),
                );
            }
        }
        if let Some(obj) = json.as_object_mut() {
            obj.insert(
                "formulary_version".to_string(),
                serde_json::Value::Number(1.into()),
            );
        }
        tracing::info!("migrated formulary v0 → v1 (regimens list)");
    }

    Ok(json)
}

/// Shared, swappable formulary.
#[derive(Debug)]
pub struct FormularyHandle {
    current: RwLock<Arc<Formulary>>,
}

impl FormularyHandle {
    pub fn new(formulary: Formulary) -> Self {
        Self {
            current: RwLock::new(Arc::new(formulary)),
        }
    }

    /// Snapshot of the current table. Stays valid after a replace.
    pub fn current(&self) -> Arc<Formulary> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Swap in a new table, returning the previous one.
    pub fn replace(&self, formulary: Formulary) -> Arc<Formulary> {
        let next = Arc::new(formulary);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let previous = std::mem::replace(&mut *guard, next);
        tracing::info!(
            medications = guard.medications.len(),
            "formulary replaced"
        );
        previous
    }

    /// Load `path` and swap it in. On failure the current table is kept.
    pub fn reload(&self, path: &Path) -> Result<Arc<Formulary>, DosingError> {
        let formulary = Formulary::load(path)?;
        self.replace(formulary);
        Ok(self.current())
    }
}
