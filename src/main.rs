use tracing::{info, Level};
use tracing_subscriber;
use visita::agenda::AppointmentStore;
use visita::loader::Loader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🏠 Visita - Agenda de Visitas");
    info!("==============================");
    info!("");

    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:8000".to_string());

    let loader = Loader::new(&base_url)?;

    info!("Loading agency data from {}...", base_url);
    let config = loader.fetch_config().await?;
    let properties = loader.fetch_properties().await?;
    let appointments = loader.fetch_appointments().await;

    info!("{} — {}", config.agency_name, config.agency_slogan);
    info!(
        "\n✅ Loaded {} properties, {} appointments\n",
        properties.len(),
        appointments.len()
    );

    let store = AppointmentStore::new(appointments);

    for (i, property) in properties.iter().enumerate() {
        println!("{}. {} ({})", i + 1, property.title, property.price);
        println!("   {}", property.location.address);
        println!(
            "   {} m², {} hab, {} baños",
            property.specs.sqm, property.specs.bedrooms, property.specs.bathrooms
        );

        let busy: Vec<_> = store.busy_intervals(&property.title).collect();
        if busy.is_empty() {
            println!("   Agenda libre");
        } else {
            for interval in busy {
                println!(
                    "   Ocupado: {} – {}",
                    interval.start.format("%d-%m-%Y %H:%M"),
                    interval.end.format("%H:%M")
                );
            }
        }
        println!();
    }

    Ok(())
}
