use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::HistoryKind;
use super::patient::Patient;
use crate::store::{Resource, StoreError};

/// One dated event in a patient's medical history, authored by a doctor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicalHistory {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub doctor_id: Uuid,
    pub kind: HistoryKind,
    pub titre: String,
    pub detail_evenement: String,
    pub traitement: Option<String>,
    pub date: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct NewMedicalHistory {
    pub patient_id: Uuid,
    pub doctor_id: Uuid,
    pub kind: HistoryKind,
    pub titre: String,
    pub detail_evenement: String,
    pub traitement: Option<String>,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Default)]
pub struct MedicalHistoryUpdate {
    pub kind: Option<HistoryKind>,
    pub titre: Option<String>,
    pub detail_evenement: Option<String>,
    pub traitement: Option<String>,
    pub date: Option<NaiveDate>,
}

impl Resource for MedicalHistory {
    type Draft = NewMedicalHistory;
    type Patch = MedicalHistoryUpdate;
    const KIND: &'static str = "medical_history";

    fn from_draft(draft: NewMedicalHistory) -> Result<Self, StoreError> {
        for (field, value) in [
            ("titre", &draft.titre),
            ("detail_evenement", &draft.detail_evenement),
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
            patient_id: draft.patient_id,
            doctor_id: draft.doctor_id,
            kind: draft.kind,
            titre: draft.titre,
            detail_evenement: draft.detail_evenement,
            traitement: draft.traitement,
            date: draft.date,
        })
    }

    fn apply_patch(&mut self, patch: MedicalHistoryUpdate) -> Result<(), StoreError> {
        if let Some(titre) = patch.titre {
            if titre.trim().is_empty() {
                return Err(StoreError::MissingField {
                    entity: Self::KIND,
                    field: "titre",
                });
            }
            self.titre = titre;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(detail_evenement) = patch.detail_evenement {
            self.detail_evenement = detail_evenement;
        }
        if let Some(traitement) = patch.traitement {
            self.traitement = Some(traitement);
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        Ok(())
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn search_haystack(&self) -> Vec<String> {
        vec![
            self.titre.clone(),
            self.detail_evenement.clone(),
            self.kind.as_str().to_string(),
        ]
    }
}

/// A patient's record: demographics plus their full history, resolved at
/// read time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicalRecord {
    pub patient: Patient,
    pub historique: Vec<MedicalHistory>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(kind: HistoryKind) -> NewMedicalHistory {
        NewMedicalHistory {
            patient_id: Uuid::new_v4(),
            doctor_id: Uuid::new_v4(),
            kind,
            titre: "Consultation de suivi".to_string(),
            detail_evenement: "Tension stable, pas de nouveau symptôme.".to_string(),
            traitement: None,
            date: NaiveDate::from_ymd_opt(2026, 2, 18).unwrap(),
        }
    }

    #[test]
    fn titre_and_detail_are_required() {
        let mut d = draft(HistoryKind::Consultation);
        d.detail_evenement = " ".to_string();
        let err = MedicalHistory::from_draft(d).unwrap_err();
        assert!(matches!(
            err,
            StoreError::MissingField {
                field: "detail_evenement",
                ..
            }
        ));
    }

    #[test]
    fn treatment_is_optional() {
        let event = MedicalHistory::from_draft(draft(HistoryKind::Chirurgie)).unwrap();
        assert!(event.traitement.is_none());
        assert_eq!(event.kind, HistoryKind::Chirurgie);
    }

    #[test]
    fn kind_is_searchable() {
        let event = MedicalHistory::from_draft(draft(HistoryKind::Hospitalisation)).unwrap();
        assert!(event
            .search_haystack()
            .iter()
            .any(|f| f == "Hospitalisation"));
    }
}
