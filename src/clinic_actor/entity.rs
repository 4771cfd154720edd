use crate::framework::RemoteResource;
use crate::model::Clinic;

impl RemoteResource for Clinic {
    const NAME: &'static str = "clinic";
    const ROUTE: &'static str = "/clinic";

    fn identifier(&self) -> Option<String> {
        self.record().key()
    }

    fn label(&self) -> String {
        format!(
            "{} {}",
            self.identifier().unwrap_or_default(),
            self.name().unwrap_or_default()
        )
    }
}
