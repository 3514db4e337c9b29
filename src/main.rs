use clap::{Parser, Subcommand, ValueEnum};
use miette::{IntoDiagnostic, Result};
use solid_patterns::application::fleet::{TransportKind, TransportSpec, build_transport};
use solid_patterns::application::payment_registry::{PaymentRegistry, RegistryConfig};
use solid_patterns::application::player_service::PlayerService;
use solid_patterns::domain::money::Percentage;
use solid_patterns::domain::transport::TransportInfo;
use solid_patterns::infrastructure::in_memory::InMemoryPlayerRepository;
use solid_patterns::interfaces::csv::checkout_writer::{CheckoutLine, CheckoutWriter};
use solid_patterns::interfaces::csv::payment_reader::PaymentReader;
use solid_patterns::interfaces::csv::player_reader::PlayerReader;
use solid_patterns::interfaces::csv::ride_writer::{RideLine, RideWriter};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Discount applied to cash payments, in percent
    #[arg(long, global = true, default_value = "10")]
    cash_discount: Percentage,

    /// Discount applied to credit card payments, in percent
    #[arg(long, global = true, default_value = "0")]
    credit_card_discount: Percentage,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute payable amounts for a CSV of `kind, value` rows
    Checkout { input: PathBuf },

    /// Build one transport and ride it
    Ride {
        /// Transport kind (bike or car)
        kind: TransportKind,

        #[arg(long)]
        name: String,

        #[arg(long, default_value = "standard")]
        model: String,

        /// Velocity in km/h
        #[arg(long, default_value_t = 0)]
        velocity: u32,

        /// Start with the engine already running
        #[arg(long)]
        engine_on: bool,

        /// Fuel tank level; omit for transports without a fuel gauge
        #[arg(long, value_enum)]
        fuel: Option<FuelLevel>,
    },

    /// Create players from a CSV with an `id` column and list them as JSON
    Players { input: PathBuf },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FuelLevel {
    Full,
    Empty,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = RegistryConfig {
        cash_discount: cli.cash_discount,
        credit_card_discount: cli.credit_card_discount,
    };

    match cli.command {
        Command::Checkout { input } => checkout(&config, input),
        Command::Ride {
            kind,
            name,
            model,
            velocity,
            engine_on,
            fuel,
        } => {
            let spec = TransportSpec {
                kind,
                info: TransportInfo::new(name, model, velocity),
                engine_on,
                fuel_empty: fuel.map(|level| level == FuelLevel::Empty),
            };
            ride(spec)
        }
        Command::Players { input } => players(input).await,
    }
}

fn checkout(config: &RegistryConfig, input: PathBuf) -> Result<()> {
    let registry = PaymentRegistry::from_config(config);

    let file = File::open(input).into_diagnostic()?;
    let reader = PaymentReader::new(file);
    let stdout = io::stdout();
    let mut writer = CheckoutWriter::new(stdout.lock());

    for row in reader.payments() {
        match row {
            Ok(row) => match registry.calc(&row.kind, row.value) {
                Ok(payable) => writer
                    .write_line(&CheckoutLine::new(row.kind, row.value, payable))
                    .into_diagnostic()?,
                Err(e) => eprintln!("Error calculating payment: {}", e),
            },
            Err(e) => eprintln!("Error reading payment: {}", e),
        }
    }

    writer.finish().into_diagnostic()
}

fn ride(spec: TransportSpec) -> Result<()> {
    let mut transport = build_transport(spec).into_diagnostic()?;
    let outcome = transport.ride();

    let stdout = io::stdout();
    let mut writer = RideWriter::new(stdout.lock());
    writer
        .write_line(&RideLine::new(transport.as_ref(), outcome))
        .into_diagnostic()?;
    writer.finish().into_diagnostic()
}

async fn players(input: PathBuf) -> Result<()> {
    let service = PlayerService::builder()
        .repository(Box::new(InMemoryPlayerRepository::new()))
        .build()
        .into_diagnostic()?;

    let file = File::open(input).into_diagnostic()?;
    for player in PlayerReader::new(file).players() {
        match player {
            Ok(player) => {
                if let Err(e) = service.create(player).await {
                    eprintln!("Error creating player: {}", e);
                }
            }
            Err(e) => eprintln!("Error reading player: {}", e),
        }
    }

    for player in service.find_all().await.into_diagnostic()? {
        println!("{}", serde_json::to_string(&player).into_diagnostic()?);
    }
    Ok(())
}
