//! Presentation-view wiring.
//!
//! Every CRUD screen is the same composition: a search box over
//! `ResourceStore::search`, a table of the filtered rows, and a form
//! whose submission is converted to a toast — success or error, never a
//! propagated fault. `Screen` is that composition once; the per-entity
//! functions below instantiate it with each screen's French toasts.

use uuid::Uuid;

use crate::auth::SessionService;
use crate::clinic::Clinic;
use crate::models::{
    Appointment, Invoice, Medication, NewAppointment, NewInvoice, NewMedication, NewPatient,
    Patient, PatientUpdate, User,
};
use crate::notify::{Notifier, Severity};
use crate::store::{Resource, ResourceStore, StoreError};

// ═══════════════════════════════════════════════════════════
// Generic screen
// ═══════════════════════════════════════════════════════════

/// The search-box half of a CRUD screen.
#[derive(Default)]
pub struct Screen {
    query: String,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// The table rows: the store filtered by the current query.
    pub fn rows<'a, T: Resource>(&self, store: &'a ResourceStore<T>) -> Vec<&'a T> {
        store.search(Some(&self.query))
    }
}

/// Convert an operation outcome into a toast.
///
/// Errors surface as a user-visible message and the view keeps running —
/// nothing here ever panics or propagates.
pub fn submit<T>(
    notifier: &mut dyn Notifier,
    ok_title: &str,
    ok_description: &str,
    result: Result<T, StoreError>,
) -> Option<T> {
    match result {
        Ok(value) => {
            notifier.notify(ok_title, ok_description, Severity::Success);
            Some(value)
        }
        Err(err) => {
            notifier.notify("Erreur", &err.to_string(), Severity::Error);
            None
        }
    }
}

// ═══════════════════════════════════════════════════════════
// Per-entity instantiations
// ═══════════════════════════════════════════════════════════

pub fn create_patient(
    clinic: &mut Clinic,
    notifier: &mut dyn Notifier,
    draft: NewPatient,
) -> Option<Patient> {
    submit(
        notifier,
        "Patient ajouté",
        "Le patient a été enregistré avec succès.",
        clinic.create_patient(draft),
    )
}

pub fn update_patient(
    clinic: &mut Clinic,
    notifier: &mut dyn Notifier,
    id: Uuid,
    patch: PatientUpdate,
) -> Option<Patient> {
    submit(
        notifier,
        "Patient modifié",
        "Les informations du patient ont été mises à jour.",
        clinic.update_patient(id, patch),
    )
}

pub fn delete_patient(
    clinic: &mut Clinic,
    notifier: &mut dyn Notifier,
    id: Uuid,
) -> Option<Patient> {
    submit(
        notifier,
        "Patient supprimé",
        "Le patient a été retiré de la liste.",
        clinic.delete_patient(id),
    )
}

pub fn create_appointment(
    clinic: &mut Clinic,
    notifier: &mut dyn Notifier,
    draft: NewAppointment,
) -> Option<Appointment> {
    submit(
        notifier,
        "Rendez-vous créé",
        "Le rendez-vous a été planifié.",
        clinic.create_appointment(draft),
    )
}

pub fn complete_appointment(
    clinic: &mut Clinic,
    notifier: &mut dyn Notifier,
    id: Uuid,
) -> Option<Appointment> {
    submit(
        notifier,
        "Rendez-vous terminé",
        "Le statut du rendez-vous a été mis à jour.",
        clinic.complete_appointment(id),
    )
}

pub fn cancel_appointment(
    clinic: &mut Clinic,
    notifier: &mut dyn Notifier,
    id: Uuid,
) -> Option<Appointment> {
    submit(
        notifier,
        "Rendez-vous annulé",
        "Le statut du rendez-vous a été mis à jour.",
        clinic.cancel_appointment(id),
    )
}

pub fn create_medication(
    clinic: &mut Clinic,
    notifier: &mut dyn Notifier,
    draft: NewMedication,
) -> Option<Medication> {
    submit(
        notifier,
        "Médicament ajouté",
        "Le médicament a été ajouté au stock.",
        clinic.create_medication(draft),
    )
}

/// Dispense one unit from stock.
pub fn dispense_medication(
    clinic: &mut Clinic,
    notifier: &mut dyn Notifier,
    id: Uuid,
) -> Option<Medication> {
    submit(
        notifier,
        "Médicament dispensé",
        "Une unité a été retirée du stock.",
        clinic.decrement_stock(id, 1),
    )
}

pub fn create_invoice(
    clinic: &mut Clinic,
    notifier: &mut dyn Notifier,
    draft: NewInvoice,
) -> Option<Invoice> {
    submit(
        notifier,
        "Facture créée",
        "La facture a été enregistrée.",
        clinic.create_invoice(draft),
    )
}

pub fn pay_invoice(clinic: &mut Clinic, notifier: &mut dyn Notifier, id: Uuid) -> Option<Invoice> {
    submit(
        notifier,
        "Facture payée",
        "Le paiement a été enregistré.",
        clinic.pay_invoice(id),
    )
}

// ── Login form ───────────────────────────────────────────

/// Login form submission. The failure toast is the same whatever went
/// wrong — it never discloses whether the email exists.
pub async fn submit_login(
    session: &mut SessionService,
    directory: &ResourceStore<User>,
    notifier: &mut dyn Notifier,
    email: &str,
    password: &str,
) -> Option<User> {
    match session.login(directory, email, password).await {
        Ok(user) => {
            notifier.notify(
                "Connexion réussie",
                &format!("Bienvenue, {}", user.prenom),
                Severity::Success,
            );
            Some(user)
        }
        Err(_) => {
            notifier.notify(
                "Échec de la connexion",
                "Email ou mot de passe incorrect.",
                Severity::Error,
            );
            None
        }
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
