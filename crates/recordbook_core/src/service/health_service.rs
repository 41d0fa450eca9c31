//! Clinic records use-case service.
//!
//! # Responsibility
//! - Own patient and prescription repositories.
//! - Maintain a patient-id -> prescriptions grouping for lookups.
//!
//! # Invariants
//! - Every stored prescription references a stored patient.
//! - The grouping is a derived view rebuilt by `build_prescription_map`; it is
//!   not updated implicitly by later writes.

use crate::model::entity::EntityId;
use crate::model::health::{Patient, Prescription};
use crate::repo::entity_repo::{EntityRepository, InMemoryRepository, RepoError, RepoResult};
use chrono::{Duration, NaiveDate};
use log::{debug, info};
use std::collections::BTreeMap;

#[derive(Default)]
pub struct HealthSystem {
    patients: InMemoryRepository<Patient>,
    prescriptions: InMemoryRepository<Prescription>,
    prescription_map: BTreeMap<EntityId, Vec<Prescription>>,
}

impl HealthSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_patient(&mut self, patient: Patient) -> RepoResult<()> {
        self.patients.add(patient)
    }

    /// Stores a prescription for a known patient.
    ///
    /// # Errors
    /// - `NotFound(patient_id)` when the referenced patient is unknown.
    /// - `DuplicateKey` when the prescription id is already stored.
    pub fn add_prescription(&mut self, prescription: Prescription) -> RepoResult<()> {
        if !self.patients.contains(prescription.patient_id) {
            return Err(RepoError::NotFound(prescription.patient_id));
        }
        self.prescriptions.add(prescription)
    }

    /// Seeds three patients and five prescriptions issued relative to `today`.
    pub fn seed_data(&mut self, today: NaiveDate) -> RepoResult<()> {
        self.add_patient(Patient::new(1, "John Doe", 45, "Male"))?;
        self.add_patient(Patient::new(2, "Jane Smith", 32, "Female"))?;
        self.add_patient(Patient::new(3, "Alice Johnson", 28, "Female"))?;

        let issued = |days_ago: i64| today - Duration::days(days_ago);
        self.add_prescription(Prescription::new(1, 1, "Aspirin", issued(10)))?;
        self.add_prescription(Prescription::new(2, 1, "Ibuprofen", issued(5)))?;
        self.add_prescription(Prescription::new(3, 2, "Paracetamol", issued(15)))?;
        self.add_prescription(Prescription::new(4, 2, "Amoxicillin", issued(3)))?;
        self.add_prescription(Prescription::new(5, 3, "Vitamin C", issued(7)))?;

        info!(
            "event=health_seed module=health status=ok patients={} prescriptions={}",
            self.patients.len(),
            self.prescriptions.len()
        );
        Ok(())
    }

    /// Rebuilds the patient-id grouping from the prescription repository.
    pub fn build_prescription_map(&mut self) {
        let mut map: BTreeMap<EntityId, Vec<Prescription>> = BTreeMap::new();
        for prescription in self.prescriptions.iter() {
            map.entry(prescription.patient_id)
                .or_default()
                .push(prescription.clone());
        }
        debug!(
            "event=prescription_map_build module=health status=ok patients={}",
            map.len()
        );
        self.prescription_map = map;
    }

    /// Snapshot of prescriptions grouped for `patient_id`; empty if none.
    pub fn prescriptions_for(&self, patient_id: EntityId) -> Vec<Prescription> {
        self.prescription_map
            .get(&patient_id)
            .cloned()
            .unwrap_or_default()
    }

    pub fn get_patient(&self, id: EntityId) -> RepoResult<&Patient> {
        self.patients.get(id)
    }

    /// First patient whose name matches exactly.
    pub fn find_patient_by_name(&self, name: &str) -> Option<&Patient> {
        self.patients.find(|patient| patient.name == name)
    }

    pub fn patients(&self) -> Vec<Patient> {
        self.patients.list_all()
    }

    pub fn prescriptions(&self) -> Vec<Prescription> {
        self.prescriptions.list_all()
    }
}
