use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::LOW_STOCK_THRESHOLD;
use crate::store::{Resource, StoreError};

/// Pharmacy stock item. Quantity never goes negative — dispensing clamps
/// at zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Medication {
    pub id: Uuid,
    /// Stock reference code, unique per item.
    pub reference_medicament: String,
    pub nom_medicament: String,
    pub quantite: u32,
}

#[derive(Debug, Clone)]
pub struct NewMedication {
    pub reference_medicament: String,
    pub nom_medicament: String,
    pub quantite: u32,
}

#[derive(Debug, Clone, Default)]
pub struct MedicationUpdate {
    pub reference_medicament: Option<String>,
    pub nom_medicament: Option<String>,
    pub quantite: Option<u32>,
}

/// Derived stock classification — computed from `quantite`, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    OutOfStock,
    Low,
    InStock,
}

impl StockLevel {
    pub fn label(&self) -> &'static str {
        match self {
            StockLevel::OutOfStock => "Rupture de stock",
            StockLevel::Low => "Stock faible",
            StockLevel::InStock => "En stock",
        }
    }
}

impl Resource for Medication {
    type Draft = NewMedication;
    type Patch = MedicationUpdate;
    const KIND: &'static str = "medication";

    fn from_draft(draft: NewMedication) -> Result<Self, StoreError> {
        for (field, value) in [
            ("reference_medicament", &draft.reference_medicament),
            ("nom_medicament", &draft.nom_medicament),
        ] {
            if value.trim().is_empty() {
                return Err(StoreError::MissingField {
                    entity: Self::KIND,
                    field,
                });
            }
        }
        Ok(Self {
            id: Uuid::new_v4(),
            reference_medicament: draft.reference_medicament,
            nom_medicament: draft.nom_medicament,
            quantite: draft.quantite,
        })
    }

    fn apply_patch(&mut self, patch: MedicationUpdate) -> Result<(), StoreError> {
        if let Some(reference_medicament) = patch.reference_medicament {
            self.reference_medicament = reference_medicament;
        }
        if let Some(nom_medicament) = patch.nom_medicament {
            self.nom_medicament = nom_medicament;
        }
        if let Some(quantite) = patch.quantite {
            self.quantite = quantite;
        }
        Ok(())
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn search_haystack(&self) -> Vec<String> {
        vec![
            self.nom_medicament.clone(),
            self.reference_medicament.clone(),
        ]
    }
}

impl Medication {
    /// Reduce stock by `amount`, clamped at zero.
    pub fn decrement(&mut self, amount: u32) {
        self.quantite = self.quantite.saturating_sub(amount);
    }

    pub fn stock_level(&self) -> StockLevel {
        if self.quantite == 0 {
            StockLevel::OutOfStock
        } else if self.quantite < LOW_STOCK_THRESHOLD {
            StockLevel::Low
        } else {
            StockLevel::InStock
        }
    }
}
