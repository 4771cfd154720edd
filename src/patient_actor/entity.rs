use crate::framework::RemoteResource;
use crate::model::Patient;

impl RemoteResource for Patient {
    const NAME: &'static str = "patient";
    const ROUTE: &'static str = "/patient";

    fn identifier(&self) -> Option<String> {
        self.record().key()
    }

    /// `"<public_key> <name> <surname>"`, the patient list line.
    fn label(&self) -> String {
        format!(
            "{} {} {}",
            self.public_key().unwrap_or_default(),
            self.name().unwrap_or_default(),
            self.surname().unwrap_or_default()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_patient_route_uses_public_key() {
        let patient: Patient = serde_json::from_value(json!({
            "public_key": "03b1",
            "name": "Ada",
            "surname": "Lovelace"
        }))
        .unwrap();
        assert_eq!(patient.route(), "/patient/03b1");
        assert_eq!(patient.label(), "03b1 Ada Lovelace");
    }

    #[test]
    fn test_patient_without_key_still_routes() {
        let patient = Patient::new("Ada", "Lovelace");
        assert_eq!(patient.identifier(), None);
        assert_eq!(patient.route(), "/patient/");
    }
}
