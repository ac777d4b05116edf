use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::Role;
use crate::store::{Resource, StoreError};

/// An identity record in the user directory.
///
/// `role` is immutable after creation — `UserUpdate` deliberately has no
/// role field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
    pub nom: String,
    pub prenom: String,
    pub telephone: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub role: Role,
    pub nom: String,
    pub prenom: String,
    pub telephone: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub email: Option<String>,
    pub nom: Option<String>,
    pub prenom: Option<String>,
    pub telephone: Option<String>,
}

impl Resource for User {
    type Draft = NewUser;
    type Patch = UserUpdate;
    const KIND: &'static str = "user";

    fn from_draft(draft: NewUser) -> Result<Self, StoreError> {
        for (field, value) in [
            ("email", &draft.email),
            ("nom", &draft.nom),
            ("prenom", &draft.prenom),
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
            email: draft.email,
            role: draft.role,
            nom: draft.nom,
            prenom: draft.prenom,
            telephone: draft.telephone,
            created_at: Utc::now(),
        })
    }

    fn apply_patch(&mut self, patch: UserUpdate) -> Result<(), StoreError> {
        if let Some(email) = patch.email {
            if email.trim().is_empty() {
                return Err(StoreError::MissingField {
                    entity: Self::KIND,
                    field: "email",
                });
            }
            self.email = email;
        }
        if let Some(nom) = patch.nom {
            self.nom = nom;
        }
        if let Some(prenom) = patch.prenom {
            self.prenom = prenom;
        }
        if let Some(telephone) = patch.telephone {
            self.telephone = Some(telephone);
        }
        Ok(())
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn search_haystack(&self) -> Vec<String> {
        vec![self.email.clone(), self.nom.clone(), self.prenom.clone()]
    }
}

impl User {
    /// Full display name as the screens render it.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.prenom, self.nom)
    }
}
