use std::env;

use clap::Parser;
use config::Config;
use dotenvy::dotenv;

use supplier_edit::domain::types::SupplierId;
use supplier_edit::forms::supplier::SupplierField;
use supplier_edit::models::config::ClientConfig;
use supplier_edit::routes::parse_edit_route;
use supplier_edit::{RunOptions, run};

/// Edit a supplier record through the supplier API.
#[derive(Debug, Parser)]
#[command(name = "supplier-edit", version)]
struct Cli {
    /// Supplier identifier.
    #[arg(long, env = "SUPPLIER_ID", conflicts_with = "path")]
    id: Option<String>,
    /// Edit route, e.g. `/suppliers/42/edit`.
    #[arg(long)]
    path: Option<String>,
    /// Prompt for every field instead of submitting the overrides directly.
    #[arg(short, long)]
    interactive: bool,
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    contact_person: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    address: Option<String>,
    #[arg(long)]
    payment_terms: Option<String>,
}

impl Cli {
    fn supplier_id(&self) -> Result<Option<SupplierId>, String> {
        if let Some(id) = &self.id {
            return SupplierId::new(id.as_str())
                .map(Some)
                .map_err(|e| format!("Invalid supplier id: {e}"));
        }
        match &self.path {
            Some(path) => parse_edit_route(path).map_err(|e| format!("Invalid route {path}: {e}")),
            None => Ok(None),
        }
    }

    fn overrides(&self) -> Vec<(SupplierField, String)> {
        [
            (SupplierField::Name, &self.name),
            (SupplierField::ContactPerson, &self.contact_person),
            (SupplierField::Email, &self.email),
            (SupplierField::Phone, &self.phone),
            (SupplierField::Address, &self.address),
            (SupplierField::PaymentTerms, &self.payment_terms),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.clone().map(|value| (field, value)))
        .collect()
    }
}

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cli = Cli::parse();

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        // Add `./config/default.yaml`
        .add_source(config::File::with_name("config/default"))
        // Add environment-specific overrides
        .add_source(config::File::with_name(&format!("config/{}", app_env)).required(false))
        // Add settings from the environment (with a prefix of APP)
        .add_source(config::Environment::with_prefix("APP"))
        .build();

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {}", err);
            std::process::exit(1);
        }
    };

    let client_config = match settings.try_deserialize::<ClientConfig>() {
        Ok(client_config) => client_config,
        Err(err) => {
            log::error!("Error loading client config: {}", err);
            std::process::exit(1);
        }
    };

    let supplier_id = match cli.supplier_id() {
        Ok(supplier_id) => supplier_id,
        Err(err) => {
            log::error!("{err}");
            std::process::exit(2);
        }
    };

    let options = RunOptions {
        supplier_id,
        overrides: cli.overrides(),
        interactive: cli.interactive,
    };

    if let Err(err) = run(client_config, options) {
        log::error!("{err}");
        std::process::exit(1);
    }
}
