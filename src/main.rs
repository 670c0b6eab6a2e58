#[tokio::main]
async fn main() {
    if let Err(e) = patient_records_lib::run().await {
        eprintln!("patient-records: {e}");
        std::process::exit(1);
    }
}
