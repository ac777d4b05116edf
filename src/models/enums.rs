//! Closed enumerations of the administration domain.
//!
//! Every constrained field (role, specialty, weekday, blood group, status)
//! is a closed set: values are parsed through `FromStr` and anything outside
//! the set is rejected at input validation, never silently accepted.

use crate::store::StoreError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = StoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(StoreError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(Role {
    Receptionist => "receptionist",
    Patient => "patient",
    Doctor => "doctor",
    Director => "director",
    Pharmacist => "pharmacist",
    Cashier => "cashier",
});

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Receptionist,
        Role::Patient,
        Role::Doctor,
        Role::Director,
        Role::Pharmacist,
        Role::Cashier,
    ];

    /// French display label. Total over the enumeration — invalid input
    /// never reaches here, it is rejected by `FromStr`.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Receptionist => "Réceptionniste",
            Role::Patient => "Patient",
            Role::Doctor => "Médecin",
            Role::Director => "Directeur",
            Role::Pharmacist => "Pharmacien",
            Role::Cashier => "Caissier",
        }
    }
}

str_enum!(Specialty {
    Cardiologue => "Cardiologue",
    Ophtalmologue => "Ophtalmologue",
    Dentiste => "Dentiste",
    Dermatologue => "Dermatologue",
    Generaliste => "Généraliste",
    Pediatre => "Pédiatre",
    Gynecologue => "Gynécologue",
    Neurologue => "Neurologue",
    Orthopediste => "Orthopédiste",
    Orl => "ORL",
});

str_enum!(Weekday {
    Lundi => "Lundi",
    Mardi => "Mardi",
    Mercredi => "Mercredi",
    Jeudi => "Jeudi",
    Vendredi => "Vendredi",
    Samedi => "Samedi",
});

str_enum!(BloodGroup {
    APlus => "A+",
    AMinus => "A-",
    BPlus => "B+",
    BMinus => "B-",
    AbPlus => "AB+",
    AbMinus => "AB-",
    OPlus => "O+",
    OMinus => "O-",
});

str_enum!(Sex {
    M => "M",
    F => "F",
});

str_enum!(HistoryKind {
    Consultation => "Consultation",
    Examen => "Examen",
    Traitement => "Traitement",
    Chirurgie => "Chirurgie",
    Hospitalisation => "Hospitalisation",
});

str_enum!(AppointmentStatus {
    Scheduled => "scheduled",
    Completed => "completed",
    Cancelled => "cancelled",
});

impl AppointmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "Planifié",
            AppointmentStatus::Completed => "Terminé",
            AppointmentStatus::Cancelled => "Annulé",
        }
    }
}

str_enum!(InvoiceStatus {
    Pending => "pending",
    Paid => "paid",
});

impl InvoiceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "En attente",
            InvoiceStatus::Paid => "Payée",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn role_round_trip() {
        for (variant, s) in [
            (Role::Receptionist, "receptionist"),
            (Role::Patient, "patient"),
            (Role::Doctor, "doctor"),
            (Role::Director, "director"),
            (Role::Pharmacist, "pharmacist"),
            (Role::Cashier, "cashier"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(Role::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn role_label_is_total() {
        for role in Role::ALL {
            assert!(!role.label().is_empty());
        }
        assert_eq!(Role::Doctor.label(), "Médecin");
        assert_eq!(Role::Cashier.label(), "Caissier");
    }

    #[test]
    fn specialty_round_trip() {
        for (variant, s) in [
            (Specialty::Cardiologue, "Cardiologue"),
            (Specialty::Generaliste, "Généraliste"),
            (Specialty::Pediatre, "Pédiatre"),
            (Specialty::Orl, "ORL"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(Specialty::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn weekday_set_is_monday_to_saturday() {
        assert!(Weekday::from_str("Lundi").is_ok());
        assert!(Weekday::from_str("Samedi").is_ok());
        assert!(
            Weekday::from_str("Dimanche").is_err(),
            "Sunday is not a working day"
        );
    }

    #[test]
    fn blood_group_round_trip() {
        for (variant, s) in [
            (BloodGroup::APlus, "A+"),
            (BloodGroup::AbMinus, "AB-"),
            (BloodGroup::OPlus, "O+"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(BloodGroup::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn status_labels() {
        assert_eq!(AppointmentStatus::Completed.label(), "Terminé");
        assert_eq!(AppointmentStatus::Cancelled.label(), "Annulé");
        assert_eq!(InvoiceStatus::Pending.label(), "En attente");
        assert_eq!(InvoiceStatus::Paid.label(), "Payée");
    }

    #[test]
    fn invalid_enum_returns_error() {
        let err = Role::from_str("admin").unwrap_err();
        match err {
            StoreError::InvalidEnum { field, value } => {
                assert_eq!(field, "Role");
                assert_eq!(value, "admin");
            }
            other => panic!("Expected InvalidEnum, got: {other}"),
        }
        assert!(Specialty::from_str("Chirurgien").is_err());
        assert!(HistoryKind::from_str("").is_err());
        assert!(AppointmentStatus::from_str("done").is_err());
    }
}
