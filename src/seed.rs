//! Demo dataset.
//!
//! Populates an empty [`Clinic`] with one account per role plus a small
//! set of patients, doctors, appointments, history entries, stock items
//! and invoices, so every screen has something to show on first launch.
//!
//! The patient-role account is inserted with the SAME id as its patient
//! record, which is what ties "Mon dossier médical" / "Mes rendez-vous" /
//! "Mes factures" to that patient's data.

use chrono::{NaiveDate, NaiveTime, Utc};

use crate::clinic::Clinic;
use crate::models::{
    BloodGroup, HistoryKind, NewAppointment, NewDoctor, NewInvoice, NewMedicalHistory,
    NewMedication, NewPatient, NewUser, Role, Sex, Specialty, User, Weekday,
};
use crate::store::StoreError;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid seed time")
}

/// Fill `clinic` with the demo dataset. Expects an empty clinic; seeding
/// twice fails on the uniqueness checks.
pub fn seed_demo(clinic: &mut Clinic) -> Result<(), StoreError> {
    // ── Staff accounts ───────────────────────────────────────
    clinic.create_user(NewUser {
        email: "reception@medicare.ma".to_string(),
        role: Role::Receptionist,
        nom: "Alaoui".to_string(),
        prenom: "Khadija".to_string(),
        telephone: Some("0522481215".to_string()),
    })?;
    clinic.create_user(NewUser {
        email: "dr.alami@medicare.ma".to_string(),
        role: Role::Doctor,
        nom: "Alami".to_string(),
        prenom: "Youssef".to_string(),
        telephone: Some("0661234567".to_string()),
    })?;
    clinic.create_user(NewUser {
        email: "direction@medicare.ma".to_string(),
        role: Role::Director,
        nom: "Bennis".to_string(),
        prenom: "Rachid".to_string(),
        telephone: None,
    })?;
    clinic.create_user(NewUser {
        email: "pharmacie@medicare.ma".to_string(),
        role: Role::Pharmacist,
        nom: "Tazi".to_string(),
        prenom: "Salma".to_string(),
        telephone: None,
    })?;
    clinic.create_user(NewUser {
        email: "caisse@medicare.ma".to_string(),
        role: Role::Cashier,
        nom: "El Fassi".to_string(),
        prenom: "Hamza".to_string(),
        telephone: None,
    })?;

    // ── Patients ─────────────────────────────────────────────
    let sami = clinic.create_patient(NewPatient {
        numero_cin: "AB123456".to_string(),
        nom: "Ben Ali".to_string(),
        prenom: "Sami".to_string(),
        date_naissance: date(1988, 4, 12),
        telephone: "0612345678".to_string(),
        ville: "Casablanca".to_string(),
        adresse: "12 Rue des Orangers".to_string(),
        email: "sami.benali@gmail.com".to_string(),
        sexe: Some(Sex::M),
        groupe_sanguin: Some(BloodGroup::OPlus),
    })?;
    let amina = clinic.create_patient(NewPatient {
        numero_cin: "CD789012".to_string(),
        nom: "Cherkaoui".to_string(),
        prenom: "Amina".to_string(),
        date_naissance: date(1995, 9, 3),
        telephone: "0623456789".to_string(),
        ville: "Rabat".to_string(),
        adresse: "5 Avenue Hassan II".to_string(),
        email: "amina.cherkaoui@gmail.com".to_string(),
        sexe: Some(Sex::F),
        groupe_sanguin: Some(BloodGroup::AMinus),
    })?;
    let omar = clinic.create_patient(NewPatient {
        numero_cin: "EF345678".to_string(),
        nom: "Idrissi".to_string(),
        prenom: "Omar".to_string(),
        date_naissance: date(1972, 1, 25),
        telephone: "0634567890".to_string(),
        ville: "Marrakech".to_string(),
        adresse: "30 Derb Lahbib".to_string(),
        email: "omar.idrissi@gmail.com".to_string(),
        sexe: Some(Sex::M),
        groupe_sanguin: None,
    })?;

    // Patient login account, keyed to Sami's patient record.
    clinic.users.insert(User {
        id: sami.id,
        email: "sami.benali@gmail.com".to_string(),
        role: Role::Patient,
        nom: sami.nom.clone(),
        prenom: sami.prenom.clone(),
        telephone: Some(sami.telephone.clone()),
        created_at: Utc::now(),
    });

    // ── Doctors ──────────────────────────────────────────────
    let alami = clinic.create_doctor(NewDoctor {
        reference_medecin: "DR-001".to_string(),
        num_cin: "GH901234".to_string(),
        nom: "Alami".to_string(),
        prenom: "Youssef".to_string(),
        telephone: "0661234567".to_string(),
        email: "dr.alami@medicare.ma".to_string(),
        specialite: Specialty::Cardiologue,
        jours_travail: vec![Weekday::Lundi, Weekday::Mercredi, Weekday::Vendredi],
    })?;
    let berrada = clinic.create_doctor(NewDoctor {
        reference_medecin: "DR-002".to_string(),
        num_cin: "IJ567890".to_string(),
        nom: "Berrada".to_string(),
        prenom: "Leila".to_string(),
        telephone: "0672345678".to_string(),
        email: "dr.berrada@medicare.ma".to_string(),
        specialite: Specialty::Pediatre,
        jours_travail: vec![Weekday::Mardi, Weekday::Jeudi],
    })?;
    let sekkat = clinic.create_doctor(NewDoctor {
        reference_medecin: "DR-003".to_string(),
        num_cin: "KL123789".to_string(),
        nom: "Sekkat".to_string(),
        prenom: "Karim".to_string(),
        telephone: "0683456789".to_string(),
        email: "dr.sekkat@medicare.ma".to_string(),
        specialite: Specialty::Generaliste,
        jours_travail: vec![
            Weekday::Lundi,
            Weekday::Mardi,
            Weekday::Mercredi,
            Weekday::Jeudi,
            Weekday::Vendredi,
        ],
    })?;

    // ── Appointments ─────────────────────────────────────────
    clinic.create_appointment(NewAppointment {
        patient_id: sami.id,
        doctor_id: alami.id,
        date: date(2026, 9, 7),
        heure: time(9, 30),
        motif: "Contrôle cardiaque annuel".to_string(),
        notes: None,
    })?;
    clinic.create_appointment(NewAppointment {
        patient_id: amina.id,
        doctor_id: berrada.id,
        date: date(2026, 9, 8),
        heure: time(11, 0),
        motif: "Vaccination".to_string(),
        notes: Some("Rappel hépatite B".to_string()),
    })?;
    let past = clinic.create_appointment(NewAppointment {
        patient_id: sami.id,
        doctor_id: sekkat.id,
        date: date(2026, 8, 20),
        heure: time(15, 15),
        motif: "Douleurs abdominales".to_string(),
        notes: None,
    })?;
    clinic.complete_appointment(past.id)?;
    let missed = clinic.create_appointment(NewAppointment {
        patient_id: omar.id,
        doctor_id: sekkat.id,
        date: date(2026, 8, 25),
        heure: time(10, 45),
        motif: "Renouvellement d'ordonnance".to_string(),
        notes: None,
    })?;
    clinic.cancel_appointment(missed.id)?;

    // ── Medical history ──────────────────────────────────────
    clinic.create_history(NewMedicalHistory {
        patient_id: sami.id,
        doctor_id: sekkat.id,
        kind: HistoryKind::Consultation,
        titre: "Gastrite aiguë".to_string(),
        detail_evenement: "Douleurs épigastriques depuis trois jours, pas de fièvre.".to_string(),
        traitement: Some("Oméprazole 20mg, 14 jours".to_string()),
        date: date(2026, 8, 20),
    })?;
    clinic.create_history(NewMedicalHistory {
        patient_id: sami.id,
        doctor_id: alami.id,
        kind: HistoryKind::Examen,
        titre: "Électrocardiogramme".to_string(),
        detail_evenement: "ECG de repos, tracé normal.".to_string(),
        traitement: None,
        date: date(2025, 9, 5),
    })?;
    clinic.create_history(NewMedicalHistory {
        patient_id: omar.id,
        doctor_id: sekkat.id,
        kind: HistoryKind::Chirurgie,
        titre: "Appendicectomie".to_string(),
        detail_evenement: "Intervention sans complication, sortie à J+2.".to_string(),
        traitement: Some("Antalgiques 7 jours".to_string()),
        date: date(2019, 3, 14),
    })?;

    // ── Pharmacy stock ───────────────────────────────────────
    clinic.create_medication(NewMedication {
        reference_medicament: "MED-001".to_string(),
        nom_medicament: "Paracétamol 500mg".to_string(),
        quantite: 250,
    })?;
    clinic.create_medication(NewMedication {
        reference_medicament: "MED-002".to_string(),
        nom_medicament: "Amoxicilline 1g".to_string(),
        quantite: 80,
    })?;
    clinic.create_medication(NewMedication {
        reference_medicament: "MED-003".to_string(),
        nom_medicament: "Ibuprofène 400mg".to_string(),
        quantite: 0,
    })?;

    // ── Invoices ─────────────────────────────────────────────
    let consult = clinic.create_invoice(NewInvoice {
        patient_id: sami.id,
        montant: 400.0,
        description: "Consultation gastro-entérologie".to_string(),
        date: date(2026, 8, 20),
    })?;
    clinic.pay_invoice(consult.id)?;
    clinic.create_invoice(NewInvoice {
        patient_id: sami.id,
        montant: 650.0,
        description: "Électrocardiogramme".to_string(),
        date: date(2026, 9, 7),
    })?;
    clinic.create_invoice(NewInvoice {
        patient_id: amina.id,
        montant: 150.0,
        description: "Vaccination".to_string(),
        date: date(2026, 9, 8),
    })?;

    Ok(())
}
