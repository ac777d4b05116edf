use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::InvoiceStatus;
use crate::store::{Resource, StoreError};

/// Billing record tied to a patient. `pending -> paid` is the only
/// transition; paid is terminal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub id: Uuid,
    pub patient_id: Uuid,
    /// Amount in MAD, never negative.
    pub montant: f64,
    pub description: String,
    pub date: NaiveDate,
    pub status: InvoiceStatus,
}

#[derive(Debug, Clone)]
pub struct NewInvoice {
    pub patient_id: Uuid,
    pub montant: f64,
    pub description: String,
    pub date: NaiveDate,
}

/// No status field: status moves only through `mark_paid`.
#[derive(Debug, Clone, Default)]
pub struct InvoiceUpdate {
    pub montant: Option<f64>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
}

impl Resource for Invoice {
    type Draft = NewInvoice;
    type Patch = InvoiceUpdate;
    const KIND: &'static str = "invoice";

    fn from_draft(draft: NewInvoice) -> Result<Self, StoreError> {
        if draft.description.trim().is_empty() {
            return Err(StoreError::MissingField {
                entity: Self::KIND,
                field: "description",
            });
        }
        if !draft.montant.is_finite() || draft.montant < 0.0 {
            return Err(StoreError::Validation(format!(
                "invoice amount must be a non-negative number, got {}",
                draft.montant
            )));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            patient_id: draft.patient_id,
            montant: draft.montant,
            description: draft.description,
            date: draft.date,
            status: InvoiceStatus::Pending,
        })
    }

    fn apply_patch(&mut self, patch: InvoiceUpdate) -> Result<(), StoreError> {
        if let Some(montant) = patch.montant {
            if !montant.is_finite() || montant < 0.0 {
                return Err(StoreError::Validation(format!(
                    "invoice amount must be a non-negative number, got {montant}"
                )));
            }
            self.montant = montant;
        }
        if let Some(description) = patch.description {
            if description.trim().is_empty() {
                return Err(StoreError::MissingField {
                    entity: Self::KIND,
                    field: "description",
                });
            }
            self.description = description;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        Ok(())
    }

    fn id(&self) -> Uuid {
        self.id
    }

    /// Patient-name matching is a cross-store concern handled by the
    /// clinic's invoice search.
    fn search_haystack(&self) -> Vec<String> {
        vec![self.description.clone()]
    }
}

impl Invoice {
    /// `pending -> paid`; paid is terminal.
    pub fn mark_paid(&mut self) -> Result<(), StoreError> {
        match self.status {
            InvoiceStatus::Pending => {
                self.status = InvoiceStatus::Paid;
                Ok(())
            }
            InvoiceStatus::Paid => Err(StoreError::InvalidTransition {
                entity: Self::KIND,
                from: InvoiceStatus::Paid.as_str(),
                to: InvoiceStatus::Paid.as_str(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(montant: f64) -> NewInvoice {
        NewInvoice {
            patient_id: Uuid::new_v4(),
            montant,
            description: "Consultation cardiologie".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 4, 2).unwrap(),
        }
    }

    #[test]
    fn starts_pending_and_pay_is_terminal() {
        let mut inv = Invoice::from_draft(draft(450.0)).unwrap();
        assert_eq!(inv.status, InvoiceStatus::Pending);

        inv.mark_paid().unwrap();
        assert_eq!(inv.status, InvoiceStatus::Paid);

        let err = inv.mark_paid().unwrap_err();
        assert!(matches!(err, StoreError::InvalidTransition { .. }));
        assert_eq!(inv.status, InvoiceStatus::Paid, "State unchanged on rejection");
    }

    #[test]
    fn negative_amount_rejected() {
        assert!(Invoice::from_draft(draft(-1.0)).is_err());
        assert!(Invoice::from_draft(draft(f64::NAN)).is_err());
        assert!(Invoice::from_draft(draft(0.0)).is_ok(), "Zero is allowed");
    }

    #[test]
    fn patch_validates_amount() {
        let mut inv = Invoice::from_draft(draft(450.0)).unwrap();
        let err = inv
            .apply_patch(InvoiceUpdate {
                montant: Some(-20.0),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(inv.montant, 450.0);
    }
}
