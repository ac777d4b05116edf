use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{BloodGroup, Sex};
use crate::store::{Resource, StoreError};

/// Demographic and contact record. Referenced by id from appointments,
/// medical history, and invoices — never embedded in them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: Uuid,
    /// National ID number, unique per patient.
    pub numero_cin: String,
    pub nom: String,
    pub prenom: String,
    pub date_naissance: NaiveDate,
    pub telephone: String,
    pub ville: String,
    pub adresse: String,
    pub email: String,
    pub sexe: Option<Sex>,
    pub groupe_sanguin: Option<BloodGroup>,
}

#[derive(Debug, Clone)]
pub struct NewPatient {
    pub numero_cin: String,
    pub nom: String,
    pub prenom: String,
    pub date_naissance: NaiveDate,
    pub telephone: String,
    pub ville: String,
    pub adresse: String,
    pub email: String,
    pub sexe: Option<Sex>,
    pub groupe_sanguin: Option<BloodGroup>,
}

#[derive(Debug, Clone, Default)]
pub struct PatientUpdate {
    pub numero_cin: Option<String>,
    pub nom: Option<String>,
    pub prenom: Option<String>,
    pub date_naissance: Option<NaiveDate>,
    pub telephone: Option<String>,
    pub ville: Option<String>,
    pub adresse: Option<String>,
    pub email: Option<String>,
    pub sexe: Option<Sex>,
    pub groupe_sanguin: Option<BloodGroup>,
}

impl Resource for Patient {
    type Draft = NewPatient;
    type Patch = PatientUpdate;
    const KIND: &'static str = "patient";

    fn from_draft(draft: NewPatient) -> Result<Self, StoreError> {
        for (field, value) in [
            ("numero_cin", &draft.numero_cin),
            ("nom", &draft.nom),
            ("prenom", &draft.prenom),
            ("telephone", &draft.telephone),
            ("ville", &draft.ville),
            ("adresse", &draft.adresse),
            ("email", &draft.email),
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
            numero_cin: draft.numero_cin,
            nom: draft.nom,
            prenom: draft.prenom,
            date_naissance: draft.date_naissance,
            telephone: draft.telephone,
            ville: draft.ville,
            adresse: draft.adresse,
            email: draft.email,
            sexe: draft.sexe,
            groupe_sanguin: draft.groupe_sanguin,
        })
    }

    fn apply_patch(&mut self, patch: PatientUpdate) -> Result<(), StoreError> {
        if let Some(numero_cin) = patch.numero_cin {
            if numero_cin.trim().is_empty() {
                return Err(StoreError::MissingField {
                    entity: Self::KIND,
                    field: "numero_cin",
                });
            }
            self.numero_cin = numero_cin;
        }
        if let Some(nom) = patch.nom {
            self.nom = nom;
        }
        if let Some(prenom) = patch.prenom {
            self.prenom = prenom;
        }
        if let Some(date_naissance) = patch.date_naissance {
            self.date_naissance = date_naissance;
        }
        if let Some(telephone) = patch.telephone {
            self.telephone = telephone;
        }
        if let Some(ville) = patch.ville {
            self.ville = ville;
        }
        if let Some(adresse) = patch.adresse {
            self.adresse = adresse;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(sexe) = patch.sexe {
            self.sexe = Some(sexe);
        }
        if let Some(groupe_sanguin) = patch.groupe_sanguin {
            self.groupe_sanguin = Some(groupe_sanguin);
        }
        Ok(())
    }

    fn id(&self) -> Uuid {
        self.id
    }

    /// CIN + name parts — the patient screen's searchable fields.
    fn search_haystack(&self) -> Vec<String> {
        vec![
            self.numero_cin.clone(),
            self.nom.clone(),
            self.prenom.clone(),
        ]
    }
}

impl Patient {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.prenom, self.nom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn draft(cin: &str, nom: &str, prenom: &str) -> NewPatient {
        NewPatient {
            numero_cin: cin.to_string(),
            nom: nom.to_string(),
            prenom: prenom.to_string(),
            date_naissance: NaiveDate::from_ymd_opt(1990, 5, 12).unwrap(),
            telephone: "0612345678".to_string(),
            ville: "Casablanca".to_string(),
            adresse: "12 Rue des Orangers".to_string(),
            email: "patient@example.com".to_string(),
            sexe: Some(Sex::M),
            groupe_sanguin: Some(BloodGroup::OPlus),
        }
    }

    #[test]
    fn required_fields_enforced() {
        let mut d = draft("AB12345", "Ben Ali", "Sami");
        d.ville = String::new();
        let err = Patient::from_draft(d).unwrap_err();
        assert!(matches!(
            err,
            StoreError::MissingField { field: "ville", .. }
        ));
    }

    #[test]
    fn optional_fields_survive_construction() {
        let mut d = draft("AB12345", "Ben Ali", "Sami");
        d.sexe = None;
        d.groupe_sanguin = None;
        let p = Patient::from_draft(d).unwrap();
        assert!(p.sexe.is_none());
        assert!(p.groupe_sanguin.is_none());
    }

    #[test]
    fn partial_update_preserves_rest() {
        let mut p = Patient::from_draft(draft("AB12345", "Ben Ali", "Sami")).unwrap();
        p.apply_patch(PatientUpdate {
            ville: Some("Rabat".to_string()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(p.ville, "Rabat");
        assert_eq!(p.numero_cin, "AB12345");
        assert_eq!(p.display_name(), "Sami Ben Ali");
    }
}
