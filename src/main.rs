//! farmtrack
//!
//! Command-line access to the farm backend: list and inspect farms, look up
//! crop types, geocode addresses, and delete records.

use tracing_subscriber::EnvFilter;

use farmtrack::api::{geocode_address, ApiClient};
use farmtrack::area::Unit;
use farmtrack::listing::{count_crop_productions, filter_farms, sort_farms, SortDirection, SortField};
use farmtrack::models::crop_type_name;

fn print_usage() {
    eprintln!("Usage: farmtrack <command> [args]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  list [search-term]   List farms, optionally filtered by name or address");
    eprintln!("  show <id>            Show one farm with its crop productions and totals");
    eprintln!("  crop-types           List the known crop types");
    eprintln!("  delete <id>          Delete a farm");
    eprintln!("  geocode <address>    Resolve an address to coordinates");
    eprintln!();
    eprintln!("The backend address is taken from FARMTRACK_API_URL (default http://localhost:3001).");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging to stderr so command output stays clean on stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("farmtrack=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    farmtrack::build_info::print_startup_banner();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let client = ApiClient::from_env();
    tracing::info!("using backend at {}", client.base_url());

    match args.first().map(String::as_str) {
        Some("list") => {
            let farms = client.get_farms()?;
            let mut visible = filter_farms(&farms, args.get(1).map(String::as_str).unwrap_or(""));
            sort_farms(&mut visible, SortField::FarmName, SortDirection::Asc);

            println!("{} farm(s)", visible.len());
            for farm in visible {
                let counts = count_crop_productions(&farm.crop_productions);
                println!(
                    "  {}  {}  ({})  irrigated: {}  non-irrigated: {}",
                    farm.id,
                    farm.farm_name,
                    farm.land_area_value(),
                    counts.irrigated,
                    counts.non_irrigated,
                );
            }
        }
        Some("show") => {
            let id = args.get(1).ok_or("show requires a farm id")?;
            let farm = client.get_farm_by_id(id)?;
            let crop_types = client.get_crop_types()?;

            println!("{} ({})", farm.farm_name, farm.land_area_value());
            if let Some(address) = &farm.address {
                println!("Address: {}", address);
            }
            println!("Crop productions:");
            for production in &farm.crop_productions {
                println!(
                    "  {}  {}  irrigated: {}  insured: {}",
                    crop_type_name(&crop_types, production.crop_type_id),
                    production.area_value(),
                    if production.is_irrigated { "yes" } else { "no" },
                    if production.is_insured { "yes" } else { "no" },
                );
            }
            println!(
                "Total crop area: {} hectares ({} acres)",
                farm.total_crop_area(Unit::Hectares),
                farm.total_crop_area(Unit::Acres),
            );
        }
        Some("crop-types") => {
            for crop_type in client.get_crop_types()? {
                println!("  {}  {}", crop_type.id, crop_type.name);
            }
        }
        Some("delete") => {
            let id = args.get(1).ok_or("delete requires a farm id")?;
            client.delete_farm(id)?;
            println!("Deleted farm {}", id);
        }
        Some("geocode") => {
            let address = args.get(1).ok_or("geocode requires an address")?;
            match geocode_address(address)? {
                Some(place) => println!(
                    "{}: {:.4}, {:.4}",
                    place.full_address, place.latitude, place.longitude
                ),
                None => println!("No match for {:?}", address),
            }
        }
        _ => {
            print_usage();
            std::process::exit(2);
        }
    }

    Ok(())
}
