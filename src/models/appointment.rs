use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::AppointmentStatus;
use crate::store::{Resource, StoreError};

/// Links a patient and a doctor at a date and time.
///
/// Carries foreign ids only — the current patient/doctor records are
/// resolved at read time, never cached on the appointment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub doctor_id: Uuid,
    pub date: NaiveDate,
    pub heure: NaiveTime,
    pub motif: String,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub patient_id: Uuid,
    pub doctor_id: Uuid,
    pub date: NaiveDate,
    pub heure: NaiveTime,
    pub motif: String,
    pub notes: Option<String>,
}

/// No status field: status moves only through `transition`, never by
/// direct overwrite.
#[derive(Debug, Clone, Default)]
pub struct AppointmentUpdate {
    pub patient_id: Option<Uuid>,
    pub doctor_id: Option<Uuid>,
    pub date: Option<NaiveDate>,
    pub heure: Option<NaiveTime>,
    pub motif: Option<String>,
    pub notes: Option<String>,
}

impl Resource for Appointment {
    type Draft = NewAppointment;
    type Patch = AppointmentUpdate;
    const KIND: &'static str = "appointment";

    fn from_draft(draft: NewAppointment) -> Result<Self, StoreError> {
        if draft.motif.trim().is_empty() {
            return Err(StoreError::MissingField {
                entity: Self::KIND,
                field: "motif",
            });
        }
        Ok(Self {
            id: Uuid::new_v4(),
            patient_id: draft.patient_id,
            doctor_id: draft.doctor_id,
            date: draft.date,
            heure: draft.heure,
            motif: draft.motif,
            status: AppointmentStatus::Scheduled,
            notes: draft.notes,
        })
    }

    fn apply_patch(&mut self, patch: AppointmentUpdate) -> Result<(), StoreError> {
        if let Some(motif) = patch.motif {
            if motif.trim().is_empty() {
                return Err(StoreError::MissingField {
                    entity: Self::KIND,
                    field: "motif",
                });
            }
            self.motif = motif;
        }
        if let Some(patient_id) = patch.patient_id {
            self.patient_id = patient_id;
        }
        if let Some(doctor_id) = patch.doctor_id {
            self.doctor_id = doctor_id;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(heure) = patch.heure {
            self.heure = heure;
        }
        if let Some(notes) = patch.notes {
            self.notes = Some(notes);
        }
        Ok(())
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn search_haystack(&self) -> Vec<String> {
        vec![self.motif.clone()]
    }
}

impl Appointment {
    /// Move to a terminal status.
    ///
    /// Only `scheduled -> completed` and `scheduled -> cancelled` are
    /// defined; completed and cancelled are terminal.
    pub fn transition(&mut self, to: AppointmentStatus) -> Result<(), StoreError> {
        match (self.status, to) {
            (AppointmentStatus::Scheduled, AppointmentStatus::Completed)
            | (AppointmentStatus::Scheduled, AppointmentStatus::Cancelled) => {
                self.status = to;
                Ok(())
            }
            (from, to) => Err(StoreError::InvalidTransition {
                entity: Self::KIND,
                from: from.as_str(),
                to: to.as_str(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn draft(patient_id: Uuid, doctor_id: Uuid) -> NewAppointment {
        NewAppointment {
            patient_id,
            doctor_id,
            date: NaiveDate::from_ymd_opt(2026, 9, 3).unwrap(),
            heure: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
            motif: "Contrôle annuel".to_string(),
            notes: None,
        }
    }

    #[test]
    fn starts_scheduled() {
        let a = Appointment::from_draft(draft(Uuid::new_v4(), Uuid::new_v4())).unwrap();
        assert_eq!(a.status, AppointmentStatus::Scheduled);
    }

    #[test]
    fn scheduled_to_completed_and_cancelled_are_the_only_transitions() {
        let mut a = Appointment::from_draft(draft(Uuid::new_v4(), Uuid::new_v4())).unwrap();
        a.transition(AppointmentStatus::Completed).unwrap();
        assert_eq!(a.status, AppointmentStatus::Completed);

        let err = a.transition(AppointmentStatus::Cancelled).unwrap_err();
        match err {
            StoreError::InvalidTransition { from, to, .. } => {
                assert_eq!(from, "completed");
                assert_eq!(to, "cancelled");
            }
            other => panic!("Expected InvalidTransition, got: {other}"),
        }

        let mut b = Appointment::from_draft(draft(Uuid::new_v4(), Uuid::new_v4())).unwrap();
        b.transition(AppointmentStatus::Cancelled).unwrap();
        assert!(b.transition(AppointmentStatus::Completed).is_err());
        assert!(b.transition(AppointmentStatus::Scheduled).is_err());
    }

    #[test]
    fn rescheduling_to_scheduled_is_undefined() {
        let mut a = Appointment::from_draft(draft(Uuid::new_v4(), Uuid::new_v4())).unwrap();
        assert!(a.transition(AppointmentStatus::Scheduled).is_err());
    }

    #[test]
    fn patch_cannot_touch_status() {
        let mut a = Appointment::from_draft(draft(Uuid::new_v4(), Uuid::new_v4())).unwrap();
        a.apply_patch(AppointmentUpdate {
            notes: Some("venir à jeun".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(a.status, AppointmentStatus::Scheduled);
        assert_eq!(a.notes.as_deref(), Some("venir à jeun"));
    }
}
