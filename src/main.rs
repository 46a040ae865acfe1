// Shyam Heritage Palace booking engine - command line driver
//
// List the rooms of a catalog file:
//
// ```console
// $ shyam-booking --catalog rooms.json
// ```
//
// Or walk a booking through the wizard:
//
// ```console
// $ shyam-booking --catalog rooms.json --room deluxe --adults 4 --check-in 2026-12-20 \
//       --check-out 2026-12-23 --guest-name "Asha Verma" --guest-phone "+91 98765 43210"
// ```

use anyhow::Context;
use clap::Parser;
use shyam_heritage_booking::booking::{
    BookingConfirmation, MutationOutcome, ReservationConfigurator, SimulatedSubmissionSink,
};
use shyam_heritage_booking::catalog::{JsonFileCatalogProvider, RoomCatalog};
use shyam_heritage_booking::runtime::{EngineError, LoggingConfig};
use shyam_heritage_booking::types::{CliArgs, EngineConfig, OutputFormat, RoomId};
use std::process;
use std::time::Duration;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        match EngineConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    let logging_result = if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else {
        LoggingConfig::new().with_level(tracing::Level::WARN).init()
    };

    let _logging_guard = match logging_result {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run(args).await {
        error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

async fn run(args: CliArgs) -> anyhow::Result<()> {
    let config =
        EngineConfig::from_cli_args(args.clone()).context("failed to load configuration")?;
    config.validate().context("configuration validation failed")?;
    let format = config.get_output_format()?;

    info!("configuration loaded and validated");

    if args.dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - nothing will be booked.");
        print_configuration_summary(&config);
        return Ok(());
    }

    let catalog_path = config
        .catalog_path
        .as_deref()
        .context("no room catalog given; pass --catalog or set catalog_path")?;
    let catalog = RoomCatalog::load(&JsonFileCatalogProvider::new(catalog_path)).await;

    match args.room.as_deref() {
        None => print_catalog(&catalog, format),
        Some(room_id) => book_room(&catalog, &RoomId::new(room_id), &args, &config, format).await,
    }
}

async fn book_room(
    catalog: &RoomCatalog,
    room_id: &RoomId,
    args: &CliArgs,
    config: &EngineConfig,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let mut booking = catalog
        .start_booking(room_id)
        .ok_or_else(|| EngineError::room_not_found(room_id.as_str()))?;

    // Adults first so an explicit room count is checked against them
    if let Some(adults) = args.adults {
        report("adults", adults, booking.set_adults(adults));
    }
    if let Some(rooms) = args.rooms {
        report("rooms", rooms, booking.set_rooms(rooms));
    }
    if let Some(children) = args.children {
        report("children", children, booking.set_children(children));
    }
    booking.set_dates(args.check_in, args.check_out);
    booking.set_contact_info(
        args.guest_name.clone().unwrap_or_default(),
        args.guest_phone.clone().unwrap_or_default(),
    );

    let mut sink =
        SimulatedSubmissionSink::new(Duration::from_millis(config.submission_delay_ms))
            .with_failure_rate(config.submission_failure_rate);
    if let Some(seed) = config.seed {
        sink = sink.with_seed(seed);
    }

    print_booking_summary(&booking);
    eprintln!("Submitting booking...");

    let confirmation = booking.submit(&sink).await.map_err(EngineError::from)?;
    print_confirmation(&confirmation, format)?;
    booking.close();
    Ok(())
}

fn report(field: &str, requested: i64, outcome: MutationOutcome) {
    if let MutationOutcome::Rejected(rejection) = outcome {
        eprintln!("Ignoring {} = {}: {}", field, requested, rejection);
    }
}

fn print_configuration_summary(config: &EngineConfig) {
    eprintln!("Configuration:");
    eprintln!("  Catalog: {}", config.catalog_path.as_deref().unwrap_or("(none)"));
    eprintln!("  Submission Delay: {} ms", config.submission_delay_ms);
    eprintln!("  Submission Failure Rate: {:.1}%", config.submission_failure_rate * 100.0);
    eprintln!("  Output Format: {}", config.output_format);
    if let Some(seed) = config.seed {
        eprintln!("  Random Seed: {}", seed);
    }
    eprintln!();
}

fn print_catalog(catalog: &RoomCatalog, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(catalog.rooms())?);
        }
        OutputFormat::Text => {
            if catalog.is_empty() {
                println!("No rooms available at the moment.");
                return Ok(());
            }
            for room in catalog.rooms() {
                println!("{} [{}]", room.name, room.id);
                println!("  {} / night", room.price);
                if let Some(size) = &room.size {
                    println!("  {}", size);
                }
                let featured: Vec<String> = room
                    .featured_amenities()
                    .iter()
                    .map(|a| format!("{} ({})", a.label, a.category))
                    .collect();
                if !featured.is_empty() {
                    println!("  {}", featured.join(", "));
                }
            }
        }
    }
    Ok(())
}

fn print_booking_summary(booking: &ReservationConfigurator) {
    let config = booking.configuration();
    eprintln!("Booking {} ({} / night)", config.room.name, config.room.price);
    eprintln!(
        "  Adults: {}  Children: {}  Rooms: {} (max 3 adults per room)",
        config.adults, config.children, config.rooms_requested
    );
}

fn print_confirmation(
    confirmation: &BookingConfirmation,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(confirmation)?),
        OutputFormat::Text => {
            let request = &confirmation.request;
            println!("Booking Confirmed!");
            println!("  Reference: {}", confirmation.booking_id);
            println!("  Room: {} x {}", request.room_name, request.rooms);
            println!("  Stay: {} to {}", request.check_in, request.check_out);
            if let Some(nights) = request.nights() {
                println!("  Nights: {}", nights);
            }
            println!("  Guests: {} adults, {} children", request.adults, request.children);
            println!("Thank you for choosing Shyam Heritage. Confirmation details go to {}.", request.guest_phone);
        }
    }
    Ok(())
}
