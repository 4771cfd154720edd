use clinic_client::config::ClientConfig;
use clinic_client::lifecycle::{setup_tracing, ClinicSystem};
use clinic_client::model::{Clinic, Doctor, Patient};
use clinic_client::view::ListView;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = ClientConfig::from_env().map_err(|e| e.to_string())?;
    info!(api = %config.api_base, users = %config.users_base, "Starting clinic client");

    let system = ClinicSystem::new(&config).map_err(|e| e.to_string())?;

    let span = tracing::info_span!("doctor_list");
    match ListView::<Doctor>::on_init(&system.doctor_client).instrument(span).await {
        Ok(view) => print_view("Doctors", &view.to_string(), view.error()),
        Err(e) => error!(error = %e, "Doctor list unavailable"),
    }

    let span = tracing::info_span!("patient_list");
    match ListView::<Patient>::on_init(&system.patient_client).instrument(span).await {
        Ok(view) => print_view("Patients", &view.to_string(), view.error()),
        Err(e) => error!(error = %e, "Patient list unavailable"),
    }

    let span = tracing::info_span!("clinic_list");
    match ListView::<Clinic>::on_init(&system.clinic_client).instrument(span).await {
        Ok(view) => print_view("Clinics", &view.to_string(), view.error()),
        Err(e) => error!(error = %e, "Clinic list unavailable"),
    }

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}

fn print_view(title: &str, html: &str, error: Option<&str>) {
    println!("== {title}");
    if let Some(error) = error {
        println!("(stale: {error})");
    }
    println!("{html}");
}
