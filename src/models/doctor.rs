use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{Specialty, Weekday};
use crate::store::{Resource, StoreError};

/// Staff record: one specialty, a non-empty set of working weekdays.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub id: Uuid,
    /// Internal reference code, unique per doctor.
    pub reference_medecin: String,
    pub num_cin: String,
    pub nom: String,
    pub prenom: String,
    pub telephone: String,
    pub email: String,
    pub specialite: Specialty,
    pub jours_travail: Vec<Weekday>,
}

#[derive(Debug, Clone)]
pub struct NewDoctor {
    pub reference_medecin: String,
    pub num_cin: String,
    pub nom: String,
    pub prenom: String,
    pub telephone: String,
    pub email: String,
    pub specialite: Specialty,
    pub jours_travail: Vec<Weekday>,
}

#[derive(Debug, Clone, Default)]
pub struct DoctorUpdate {
    pub reference_medecin: Option<String>,
    pub num_cin: Option<String>,
    pub nom: Option<String>,
    pub prenom: Option<String>,
    pub telephone: Option<String>,
    pub email: Option<String>,
    pub specialite: Option<Specialty>,
    pub jours_travail: Option<Vec<Weekday>>,
}

/// Keep first occurrence of each day, drop repeats (set semantics,
/// insertion order preserved for display).
fn dedup_days(days: Vec<Weekday>) -> Vec<Weekday> {
    let mut out: Vec<Weekday> = Vec::with_capacity(days.len());
    for day in days {
        if !out.contains(&day) {
            out.push(day);
        }
    }
    out
}

impl Resource for Doctor {
    type Draft = NewDoctor;
    type Patch = DoctorUpdate;
    const KIND: &'static str = "doctor";

    fn from_draft(draft: NewDoctor) -> Result<Self, StoreError> {
        for (field, value) in [
            ("reference_medecin", &draft.reference_medecin),
            ("num_cin", &draft.num_cin),
            ("nom", &draft.nom),
            ("prenom", &draft.prenom),
            ("telephone", &draft.telephone),
            ("email", &draft.email),
        ] {
            if value.trim().is_empty() {
                return Err(StoreError::MissingField {
                    entity: Self::KIND,
                    field,
                });
            }
        }
        let jours_travail = dedup_days(draft.jours_travail);
        if jours_travail.is_empty() {
            return Err(StoreError::Validation(
                "a doctor needs at least one working day".to_string(),
            ));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            reference_medecin: draft.reference_medecin,
            num_cin: draft.num_cin,
            nom: draft.nom,
            prenom: draft.prenom,
            telephone: draft.telephone,
            email: draft.email,
            specialite: draft.specialite,
            jours_travail,
        })
    }

    fn apply_patch(&mut self, patch: DoctorUpdate) -> Result<(), StoreError> {
        if let Some(days) = patch.jours_travail {
            let days = dedup_days(days);
            if days.is_empty() {
                return Err(StoreError::Validation(
                    "a doctor needs at least one working day".to_string(),
                ));
            }
            self.jours_travail = days;
        }
        if let Some(reference_medecin) = patch.reference_medecin {
            self.reference_medecin = reference_medecin;
        }
        if let Some(num_cin) = patch.num_cin {
            self.num_cin = num_cin;
        }
        if let Some(nom) = patch.nom {
            self.nom = nom;
        }
        if let Some(prenom) = patch.prenom {
            self.prenom = prenom;
        }
        if let Some(telephone) = patch.telephone {
            self.telephone = telephone;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(specialite) = patch.specialite {
            self.specialite = specialite;
        }
        Ok(())
    }

    fn id(&self) -> Uuid {
        self.id
    }

    /// Name parts and specialty — the doctor screen's searchable fields.
    fn search_haystack(&self) -> Vec<String> {
        vec![
            self.nom.clone(),
            self.prenom.clone(),
            self.specialite.as_str().to_string(),
        ]
    }
}

impl Doctor {
    pub fn display_name(&self) -> String {
        format!("Dr. {} {}", self.prenom, self.nom)
    }

    pub fn works_on(&self, day: Weekday) -> bool {
        self.jours_travail.contains(&day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn draft(reference: &str, nom: &str, specialite: Specialty) -> NewDoctor {
        NewDoctor {
            reference_medecin: reference.to_string(),
            num_cin: "CD98765".to_string(),
            nom: nom.to_string(),
            prenom: "Youssef".to_string(),
            telephone: "0522334455".to_string(),
            email: "doctor@medicare.ma".to_string(),
            specialite,
            jours_travail: vec![Weekday::Lundi, Weekday::Mercredi],
        }
    }

    #[test]
    fn needs_at_least_one_working_day() {
        let mut d = draft("MED-D-01", "Alami", Specialty::Cardiologue);
        d.jours_travail.clear();
        let err = Doctor::from_draft(d).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }

    #[test]
    fn duplicate_days_collapse() {
        let mut d = draft("MED-D-01", "Alami", Specialty::Cardiologue);
        d.jours_travail = vec![Weekday::Lundi, Weekday::Lundi, Weekday::Jeudi];
        let doc = Doctor::from_draft(d).unwrap();
        assert_eq!(doc.jours_travail, vec![Weekday::Lundi, Weekday::Jeudi]);
        assert!(doc.works_on(Weekday::Jeudi));
        assert!(!doc.works_on(Weekday::Samedi));
    }

    #[test]
    fn patch_cannot_empty_working_days() {
        let mut doc = Doctor::from_draft(draft("MED-D-01", "Alami", Specialty::Cardiologue)).unwrap();
        let err = doc
            .apply_patch(DoctorUpdate {
                jours_travail: Some(vec![]),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }

    #[test]
    fn specialty_is_searchable() {
        let doc = Doctor::from_draft(draft("MED-D-01", "Alami", Specialty::Cardiologue)).unwrap();
        assert!(doc
            .search_haystack()
            .iter()
            .any(|f| f == "Cardiologue"));
    }
}
