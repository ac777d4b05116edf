//! Role-filtered dashboard summary.
//!
//! Each role lands on the same dashboard view but sees its own four
//! stat cards, computed live from the stores — nothing is cached or
//! stored back.

use std::collections::HashSet;
use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::clinic::Clinic;
use crate::models::{AppointmentStatus, InvoiceStatus, Role, StockLevel, User};

/// A stat card value: a plain count or an amount in MAD.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatValue {
    Count(usize),
    Dirhams(f64),
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Count(n) => write!(f, "{n}"),
            StatValue::Dirhams(v) => write!(f, "{v:.2} MAD"),
        }
    }
}

/// One card on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStat {
    pub label: &'static str,
    pub value: StatValue,
}

fn stat(label: &'static str, value: StatValue) -> DashboardStat {
    DashboardStat { label, value }
}

/// The four stat cards for `user`'s role, as of `today`.
pub fn summary_for(clinic: &Clinic, user: &User, today: NaiveDate) -> Vec<DashboardStat> {
    match user.role {
        Role::Receptionist => {
            let today_count = clinic
                .appointments
                .iter()
                .filter(|a| a.date == today)
                .count();
            let scheduled = status_count(clinic, AppointmentStatus::Scheduled);
            let completed = status_count(clinic, AppointmentStatus::Completed);
            vec![
                stat("Patients enregistrés", StatValue::Count(clinic.patients.len())),
                stat("RDV aujourd'hui", StatValue::Count(today_count)),
                stat("RDV en attente", StatValue::Count(scheduled)),
                stat("RDV complétés", StatValue::Count(completed)),
            ]
        }
        Role::Patient => {
            let mine = clinic.my_appointments(user.id);
            let upcoming = mine
                .iter()
                .filter(|a| a.status == AppointmentStatus::Scheduled && a.date >= today)
                .count();
            let history = clinic
                .history
                .iter()
                .filter(|h| h.patient_id == user.id)
                .count();
            vec![
                stat("Mes rendez-vous", StatValue::Count(mine.len())),
                stat("Prochains RDV", StatValue::Count(upcoming)),
                stat("Historique médical", StatValue::Count(history)),
                stat("Mes factures", StatValue::Count(clinic.my_invoices(user.id).len())),
            ]
        }
        Role::Doctor => {
            let mine: Vec<_> = clinic
                .appointments
                .iter()
                .filter(|a| a.doctor_id == user.id)
                .collect();
            let patients: HashSet<_> = mine.iter().map(|a| a.patient_id).collect();
            let today_count = mine.iter().filter(|a| a.date == today).count();
            let scheduled = mine
                .iter()
                .filter(|a| a.status == AppointmentStatus::Scheduled)
                .count();
            let completed = mine
                .iter()
                .filter(|a| a.status == AppointmentStatus::Completed)
                .count();
            vec![
                stat("Mes patients", StatValue::Count(patients.len())),
                stat("RDV aujourd'hui", StatValue::Count(today_count)),
                stat("En attente", StatValue::Count(scheduled)),
                stat("Complétés", StatValue::Count(completed)),
            ]
        }
        Role::Director => {
            let this_month = clinic
                .appointments
                .iter()
                .filter(|a| a.date.year() == today.year() && a.date.month() == today.month())
                .count();
            vec![
                stat("Médecins", StatValue::Count(clinic.doctors.len())),
                stat("Patients totaux", StatValue::Count(clinic.patients.len())),
                stat("RDV ce mois", StatValue::Count(this_month)),
                stat("Revenus", StatValue::Dirhams(paid_total(clinic))),
            ]
        }
        Role::Pharmacist => {
            let low = clinic
                .medications
                .iter()
                .filter(|m| m.stock_level() == StockLevel::Low)
                .count();
            let out = clinic
                .medications
                .iter()
                .filter(|m| m.stock_level() == StockLevel::OutOfStock)
                .count();
            let units: u64 = clinic.medications.iter().map(|m| m.quantite as u64).sum();
            vec![
                stat("Médicaments", StatValue::Count(clinic.medications.len())),
                stat("Stock faible", StatValue::Count(low)),
                stat("Ruptures", StatValue::Count(out)),
                stat("Unités en stock", StatValue::Count(units as usize)),
            ]
        }
        Role::Cashier => {
            let pending = clinic
                .invoices
                .iter()
                .filter(|i| i.status == InvoiceStatus::Pending)
                .count();
            let paid = clinic
                .invoices
                .iter()
                .filter(|i| i.status == InvoiceStatus::Paid)
                .count();
            let today_revenue: f64 = clinic
                .invoices
                .iter()
                .filter(|i| i.status == InvoiceStatus::Paid && i.date == today)
                .map(|i| i.montant)
                .sum();
            vec![
                stat("Factures totales", StatValue::Count(clinic.invoices.len())),
                stat("En attente", StatValue::Count(pending)),
                stat("Payées", StatValue::Count(paid)),
                stat("Revenus jour", StatValue::Dirhams(today_revenue)),
            ]
        }
    }
}

fn status_count(clinic: &Clinic, status: AppointmentStatus) -> usize {
    clinic
        .appointments
        .iter()
        .filter(|a| a.status == status)
        .count()
}

fn paid_total(clinic: &Clinic) -> f64 {
    clinic
        .invoices
        .iter()
        .filter(|i| i.status == InvoiceStatus::Paid)
        .map(|i| i.montant)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        NewAppointment, NewInvoice, NewMedication, NewPatient, NewUser, Specialty, Weekday,
    };
    use crate::store::Resource;
    use chrono::NaiveTime;
    use uuid::Uuid;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, 10).unwrap()
    }

    fn user(role: Role) -> User {
        User::from_draft(NewUser {
            email: format!("{}@medicare.ma", role.as_str()),
            role,
            nom: "Test".to_string(),
            prenom: "Utilisateur".to_string(),
            telephone: None,
        })
        .unwrap()
    }

    fn sample_clinic() -> Clinic {
        let mut clinic = Clinic::new();
        let patient = clinic
            .create_patient(NewPatient {
                numero_cin: "AB12345".to_string(),
                nom: "Ben Ali".to_string(),
                prenom: "Sami".to_string(),
                date_naissance: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
                telephone: "0611111111".to_string(),
                ville: "Casablanca".to_string(),
                adresse: "1 Rue A".to_string(),
                email: "sami@gmail.com".to_string(),
                sexe: None,
                groupe_sanguin: None,
            })
            .unwrap();
        let doctor = clinic
            .create_doctor(crate::models::NewDoctor {
                reference_medecin: "MED-D-01".to_string(),
                num_cin: "CD00001".to_string(),
                nom: "Alami".to_string(),
                prenom: "Youssef".to_string(),
                telephone: "0522000000".to_string(),
                email: "dr@medicare.ma".to_string(),
                specialite: Specialty::Generaliste,
                jours_travail: vec![Weekday::Lundi],
            })
            .unwrap();
        let appt = clinic
            .create_appointment(NewAppointment {
                patient_id: patient.id,
                doctor_id: doctor.id,
                date: today(),
                heure: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
                motif: "Contrôle".to_string(),
                notes: None,
            })
            .unwrap();
        clinic.complete_appointment(appt.id).unwrap();
        clinic
            .create_appointment(NewAppointment {
                patient_id: patient.id,
                doctor_id: doctor.id,
                date: today(),
                heure: NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
                motif: "Suivi".to_string(),
                notes: None,
            })
            .unwrap();
        let paid = clinic
            .create_invoice(NewInvoice {
                patient_id: patient.id,
                montant: 450.0,
                description: "Consultation".to_string(),
                date: today(),
            })
            .unwrap();
        clinic.pay_invoice(paid.id).unwrap();
        clinic
            .create_invoice(NewInvoice {
                patient_id: patient.id,
                montant: 200.0,
                description: "Analyse".to_string(),
                date: today(),
            })
            .unwrap();
        clinic
            .create_medication(NewMedication {
                reference_medicament: "MED-100".to_string(),
                nom_medicament: "Paracétamol".to_string(),
                quantite: 250,
            })
            .unwrap();
        clinic
            .create_medication(NewMedication {
                reference_medicament: "MED-101".to_string(),
                nom_medicament: "Amoxicilline".to_string(),
                quantite: 40,
            })
            .unwrap();
        clinic
            .create_medication(NewMedication {
                reference_medicament: "MED-102".to_string(),
                nom_medicament: "Ibuprofène".to_string(),
                quantite: 0,
            })
            .unwrap();
        clinic
    }

    #[test]
    fn every_role_gets_four_cards() {
        let clinic = sample_clinic();
        for role in Role::ALL {
            assert_eq!(summary_for(&clinic, &user(role), today()).len(), 4);
        }
    }

    #[test]
    fn receptionist_counts_match_store_state() {
        let clinic = sample_clinic();
        let stats = summary_for(&clinic, &user(Role::Receptionist), today());
        assert_eq!(stats[0].value, StatValue::Count(1)); // patients
        assert_eq!(stats[1].value, StatValue::Count(2)); // today's appointments
        assert_eq!(stats[2].value, StatValue::Count(1)); // scheduled
        assert_eq!(stats[3].value, StatValue::Count(1)); // completed
    }

    #[test]
    fn pharmacist_sees_stock_classification_counts() {
        let clinic = sample_clinic();
        let stats = summary_for(&clinic, &user(Role::Pharmacist), today());
        assert_eq!(stats[0].value, StatValue::Count(3));
        assert_eq!(stats[1].label, "Stock faible");
        assert_eq!(stats[1].value, StatValue::Count(1));
        assert_eq!(stats[2].value, StatValue::Count(1)); // out of stock
        assert_eq!(stats[3].value, StatValue::Count(290)); // total units
    }

    #[test]
    fn cashier_revenue_counts_only_paid_today() {
        let clinic = sample_clinic();
        let stats = summary_for(&clinic, &user(Role::Cashier), today());
        assert_eq!(stats[1].value, StatValue::Count(1)); // pending
        assert_eq!(stats[2].value, StatValue::Count(1)); // paid
        assert_eq!(stats[3].value, StatValue::Dirhams(450.0));
    }

    #[test]
    fn director_revenue_sums_all_paid_invoices() {
        let clinic = sample_clinic();
        let stats = summary_for(&clinic, &user(Role::Director), today());
        assert_eq!(stats[3].value, StatValue::Dirhams(450.0));
        assert_eq!(stats[2].value, StatValue::Count(2)); // this month
    }

    #[test]
    fn patient_with_no_records_sees_zeros() {
        let clinic = sample_clinic();
        let stats = summary_for(&clinic, &user(Role::Patient), today());
        for s in &stats {
            assert_eq!(s.value, StatValue::Count(0));
        }
    }

    #[test]
    fn doctor_counts_scope_to_their_own_id() {
        let clinic = sample_clinic();
        // This user id matches no doctor record, so every count is zero.
        let stats = summary_for(&clinic, &user(Role::Doctor), today());
        for s in &stats {
            assert_eq!(s.value, StatValue::Count(0));
        }
        // Scoped to the actual doctor id, the same cards fill in.
        let doctor = clinic.doctors.list()[0].clone();
        let mut doctor_user = user(Role::Doctor);
        doctor_user.id = doctor.id;
        let stats = summary_for(&clinic, &doctor_user, today());
        assert_eq!(stats[0].value, StatValue::Count(1)); // distinct patients
        assert_eq!(stats[1].value, StatValue::Count(2)); // today
    }

    #[test]
    fn stat_value_display() {
        assert_eq!(StatValue::Count(12).to_string(), "12");
        assert_eq!(StatValue::Dirhams(450.0).to_string(), "450.00 MAD");
    }

    #[test]
    fn unknown_patient_id_yields_empty_projections() {
        let clinic = sample_clinic();
        assert!(clinic.my_appointments(Uuid::new_v4()).is_empty());
    }
}
