pub mod appointment;
pub mod doctor;
pub mod enums;
pub mod history;
pub mod invoice;
pub mod medication;
pub mod patient;
pub mod user;

pub use appointment::{Appointment, AppointmentUpdate, NewAppointment};
pub use doctor::{Doctor, DoctorUpdate, NewDoctor};
pub use enums::{
    AppointmentStatus, BloodGroup, HistoryKind, InvoiceStatus, Role, Sex, Specialty, Weekday,
};
pub use history::{MedicalHistory, MedicalHistoryUpdate, MedicalRecord, NewMedicalHistory};
pub use invoice::{Invoice, InvoiceUpdate, NewInvoice};
pub use medication::{Medication, MedicationUpdate, NewMedication, StockLevel};
pub use patient::{NewPatient, Patient, PatientUpdate};
pub use user::{NewUser, User, UserUpdate};
