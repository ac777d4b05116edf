//! Clinic state: the seven stores and every rule that spans more than one.
//!
//! Single-owner, synchronous state — one `Clinic` per process, mutated
//! one user interaction at a time. Anything that needs only one store
//! goes through the store directly; anything cross-store lives here:
//!
//! - referential integrity at creation (appointments, history, and
//!   invoices must reference existing patients/doctors);
//! - uniqueness of natural keys (email, CIN, reference codes);
//! - deletion policy: a patient or doctor cannot be deleted while
//!   dependent records still reference it — no cascades, no orphans;
//! - status transitions (the only way status ever changes);
//! - read-time joins and the per-patient self-service projections.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{
    Appointment, AppointmentStatus, AppointmentUpdate, Doctor, DoctorUpdate, Invoice,
    MedicalHistory, MedicalRecord, Medication, MedicationUpdate, NewAppointment, NewDoctor,
    NewInvoice, NewMedicalHistory, NewMedication, NewPatient, NewUser, Patient, PatientUpdate,
    User, UserUpdate,
};
use crate::store::{Resource, ResourceStore, StoreError};

// ═══════════════════════════════════════════════════════════
// Read-time join views
// ═══════════════════════════════════════════════════════════

/// Appointment with its patient and doctor resolved at read time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentView {
    pub appointment: Appointment,
    pub patient: Patient,
    pub doctor: Doctor,
}

/// Invoice with its patient resolved at read time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceView {
    pub invoice: Invoice,
    pub patient: Patient,
}

// ═══════════════════════════════════════════════════════════
// Clinic
// ═══════════════════════════════════════════════════════════

/// All in-memory collections of the administration system.
#[derive(Default)]
pub struct Clinic {
    pub users: ResourceStore<User>,
    pub patients: ResourceStore<Patient>,
    pub doctors: ResourceStore<Doctor>,
    pub appointments: ResourceStore<Appointment>,
    pub history: ResourceStore<MedicalHistory>,
    pub medications: ResourceStore<Medication>,
    pub invoices: ResourceStore<Invoice>,
}

impl Clinic {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Creation with cross-store checks ─────────────────

    /// Create a user; emails are unique across the directory.
    pub fn create_user(&mut self, draft: NewUser) -> Result<User, StoreError> {
        if self.users.iter().any(|u| u.email == draft.email) {
            return Err(StoreError::Duplicate {
                entity: User::KIND,
                field: "email",
                value: draft.email,
            });
        }
        self.users.create(draft)
    }

    /// Create a patient; CIN numbers are unique.
    pub fn create_patient(&mut self, draft: NewPatient) -> Result<Patient, StoreError> {
        if self.patients.iter().any(|p| p.numero_cin == draft.numero_cin) {
            return Err(StoreError::Duplicate {
                entity: Patient::KIND,
                field: "numero_cin",
                value: draft.numero_cin,
            });
        }
        let patient = self.patients.create(draft)?;
        tracing::debug!(id = %patient.id, "patient registered");
        Ok(patient)
    }

    /// Create a doctor; reference codes are unique.
    pub fn create_doctor(&mut self, draft: NewDoctor) -> Result<Doctor, StoreError> {
        if self
            .doctors
            .iter()
            .any(|d| d.reference_medecin == draft.reference_medecin)
        {
            return Err(StoreError::Duplicate {
                entity: Doctor::KIND,
                field: "reference_medecin",
                value: draft.reference_medecin,
            });
        }
        self.doctors.create(draft)
    }

    /// Create an appointment; both foreign ids must exist now.
    pub fn create_appointment(
        &mut self,
        draft: NewAppointment,
    ) -> Result<Appointment, StoreError> {
        self.patients.require(draft.patient_id)?;
        self.doctors.require(draft.doctor_id)?;
        let appointment = self.appointments.create(draft)?;
        tracing::debug!(id = %appointment.id, date = %appointment.date, "appointment scheduled");
        Ok(appointment)
    }

    /// Create a history event; patient and authoring doctor must exist.
    pub fn create_history(
        &mut self,
        draft: NewMedicalHistory,
    ) -> Result<MedicalHistory, StoreError> {
        self.patients.require(draft.patient_id)?;
        self.doctors.require(draft.doctor_id)?;
        self.history.create(draft)
    }

    /// Create a stock item; reference codes are unique.
    pub fn create_medication(&mut self, draft: NewMedication) -> Result<Medication, StoreError> {
        if self
            .medications
            .iter()
            .any(|m| m.reference_medicament == draft.reference_medicament)
        {
            return Err(StoreError::Duplicate {
                entity: Medication::KIND,
                field: "reference_medicament",
                value: draft.reference_medicament,
            });
        }
        self.medications.create(draft)
    }

    /// Create an invoice; the billed patient must exist.
    pub fn create_invoice(&mut self, draft: NewInvoice) -> Result<Invoice, StoreError> {
        self.patients.require(draft.patient_id)?;
        self.invoices.create(draft)
    }

    // ── Updates with cross-store checks ──────────────────

    /// Update a user; a changed email must stay unique.
    pub fn update_user(&mut self, id: Uuid, patch: UserUpdate) -> Result<User, StoreError> {
        if let Some(email) = &patch.email {
            if self.users.iter().any(|u| u.id != id && u.email == *email) {
                return Err(StoreError::Duplicate {
                    entity: User::KIND,
                    field: "email",
                    value: email.clone(),
                });
            }
        }
        self.users.update(id, patch)
    }

    /// Update a patient; a changed CIN must stay unique.
    pub fn update_patient(
        &mut self,
        id: Uuid,
        patch: PatientUpdate,
    ) -> Result<Patient, StoreError> {
        if let Some(cin) = &patch.numero_cin {
            if self.patients.iter().any(|p| p.id != id && p.numero_cin == *cin) {
                return Err(StoreError::Duplicate {
                    entity: Patient::KIND,
                    field: "numero_cin",
                    value: cin.clone(),
                });
            }
        }
        self.patients.update(id, patch)
    }

    /// Update a doctor; a changed reference code must stay unique.
    pub fn update_doctor(&mut self, id: Uuid, patch: DoctorUpdate) -> Result<Doctor, StoreError> {
        if let Some(reference) = &patch.reference_medecin {
            if self
                .doctors
                .iter()
                .any(|d| d.id != id && d.reference_medecin == *reference)
            {
                return Err(StoreError::Duplicate {
                    entity: Doctor::KIND,
                    field: "reference_medecin",
                    value: reference.clone(),
                });
            }
        }
        self.doctors.update(id, patch)
    }

    /// Update a stock item; a changed reference code must stay unique.
    pub fn update_medication(
        &mut self,
        id: Uuid,
        patch: MedicationUpdate,
    ) -> Result<Medication, StoreError> {
        if let Some(reference) = &patch.reference_medicament {
            if self
                .medications
                .iter()
                .any(|m| m.id != id && m.reference_medicament == *reference)
            {
                return Err(StoreError::Duplicate {
                    entity: Medication::KIND,
                    field: "reference_medicament",
                    value: reference.clone(),
                });
            }
        }
        self.medications.update(id, patch)
    }

    /// Update an appointment; reassigned foreign ids must exist.
    pub fn update_appointment(
        &mut self,
        id: Uuid,
        patch: AppointmentUpdate,
    ) -> Result<Appointment, StoreError> {
        if let Some(patient_id) = patch.patient_id {
            self.patients.require(patient_id)?;
        }
        if let Some(doctor_id) = patch.doctor_id {
            self.doctors.require(doctor_id)?;
        }
        self.appointments.update(id, patch)
    }

    // ── Status transitions ───────────────────────────────

    pub fn complete_appointment(&mut self, id: Uuid) -> Result<Appointment, StoreError> {
        self.appointments
            .try_modify(id, |a| a.transition(AppointmentStatus::Completed))
    }

    pub fn cancel_appointment(&mut self, id: Uuid) -> Result<Appointment, StoreError> {
        self.appointments
            .try_modify(id, |a| a.transition(AppointmentStatus::Cancelled))
    }

    pub fn pay_invoice(&mut self, id: Uuid) -> Result<Invoice, StoreError> {
        self.invoices.try_modify(id, |i| i.mark_paid())
    }

    /// Dispense stock: reduce quantity by `amount`, clamped at zero.
    pub fn decrement_stock(&mut self, id: Uuid, amount: u32) -> Result<Medication, StoreError> {
        let med = self.medications.try_modify(id, |m| {
            m.decrement(amount);
            Ok(())
        })?;
        tracing::debug!(id = %med.id, quantite = med.quantite, "stock decremented");
        Ok(med)
    }

    // ── Deletion (restrict policy) ───────────────────────

    /// Delete a patient unless appointments, history, or invoices still
    /// reference it.
    pub fn delete_patient(&mut self, id: Uuid) -> Result<Patient, StoreError> {
        let dependents = self
            .appointments
            .iter()
            .filter(|a| a.patient_id == id)
            .count()
            + self.history.iter().filter(|h| h.patient_id == id).count()
            + self.invoices.iter().filter(|i| i.patient_id == id).count();
        if dependents > 0 {
            return Err(StoreError::HasDependents {
                entity: Patient::KIND,
                id,
                dependents,
            });
        }
        self.patients.remove(id)
    }

    /// Delete a doctor unless appointments or history still reference it.
    pub fn delete_doctor(&mut self, id: Uuid) -> Result<Doctor, StoreError> {
        let dependents = self
            .appointments
            .iter()
            .filter(|a| a.doctor_id == id)
            .count()
            + self.history.iter().filter(|h| h.doctor_id == id).count();
        if dependents > 0 {
            return Err(StoreError::HasDependents {
                entity: Doctor::KIND,
                id,
                dependents,
            });
        }
        self.doctors.remove(id)
    }

    // ── Read-time joins ──────────────────────────────────

    /// Appointments with current patient/doctor records attached.
    pub fn appointment_views(&self) -> Vec<AppointmentView> {
        self.appointments
            .iter()
            .filter_map(|a| {
                let patient = self.patients.get(a.patient_id)?;
                let doctor = self.doctors.get(a.doctor_id)?;
                Some(AppointmentView {
                    appointment: a.clone(),
                    patient: patient.clone(),
                    doctor: doctor.clone(),
                })
            })
            .collect()
    }

    /// Invoices with current patient records attached, filtered by an
    /// optional case-insensitive query over patient name and description.
    pub fn invoice_views(&self, query: Option<&str>) -> Vec<InvoiceView> {
        let needle = query
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase);
        self.invoices
            .iter()
            .filter_map(|invoice| {
                let patient = self.patients.get(invoice.patient_id)?;
                Some(InvoiceView {
                    invoice: invoice.clone(),
                    patient: patient.clone(),
                })
            })
            .filter(|view| match &needle {
                None => true,
                Some(q) => {
                    view.invoice.description.to_lowercase().contains(q)
                        || view.patient.nom.to_lowercase().contains(q)
                        || view.patient.prenom.to_lowercase().contains(q)
                }
            })
            .collect()
    }

    // ── Self-service projections ─────────────────────────

    /// Appointments belonging to one patient (the "my appointments" view).
    pub fn my_appointments(&self, patient_id: Uuid) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|a| a.patient_id == patient_id)
            .collect()
    }

    /// Invoices billed to one patient (the "my invoices" view).
    pub fn my_invoices(&self, patient_id: Uuid) -> Vec<&Invoice> {
        self.invoices
            .iter()
            .filter(|i| i.patient_id == patient_id)
            .collect()
    }

    /// A patient's full record: demographics plus history events.
    pub fn medical_record(&self, patient_id: Uuid) -> Result<MedicalRecord, StoreError> {
        let patient = self.patients.require(patient_id)?.clone();
        let historique = self
            .history
            .iter()
            .filter(|h| h.patient_id == patient_id)
            .cloned()
            .collect();
        Ok(MedicalRecord {
            patient,
            historique,
        })
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
