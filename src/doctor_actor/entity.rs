//! [`RemoteResource`] implementation for the Doctor record type.

use crate::framework::RemoteResource;
use crate::model::Doctor;

impl RemoteResource for Doctor {
    const NAME: &'static str = "doctor";
    const ROUTE: &'static str = "/doctor";

    fn identifier(&self) -> Option<String> {
        self.key()
    }

    /// `"<identifier> <name>"`.
    fn label(&self) -> String {
        format!(
            "{} {}",
            self.identifier().unwrap_or_default(),
            self.name().unwrap_or_default()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_doctor_route_and_label() {
        let doctor: Doctor = serde_json::from_value(json!({"id": 1, "name": "A"})).unwrap();
        assert_eq!(doctor.route(), "/doctor/1");
        assert_eq!(doctor.label(), "1 A");
    }
}
