//! Healthcare demo: patients, prescriptions and a per-patient lookup.

use recordbook_core::service::today;
use recordbook_core::{EntityId, HealthSystem};

const SELECTED_PATIENT_ID: EntityId = 1;

fn main() {
    recordbook_cli::bootstrap("healthcare");

    let mut system = HealthSystem::new();
    if let Err(err) = system.seed_data(today()) {
        println!("Seeding failed: {err}");
        return;
    }
    system.build_prescription_map();

    println!("All Patients:");
    for patient in system.patients() {
        println!(
            "ID: {}, Name: {}, Age: {}, Gender: {}",
            patient.id, patient.name, patient.age, patient.gender
        );
    }

    println!("Prescriptions for Patient ID: {SELECTED_PATIENT_ID}");
    for prescription in system.prescriptions_for(SELECTED_PATIENT_ID) {
        println!(
            "ID: {}, Medication: {}, Date Issued: {}",
            prescription.id,
            prescription.medication_name,
            prescription.date_issued.format("%Y-%m-%d")
        );
    }
}
