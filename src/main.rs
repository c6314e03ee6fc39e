use anyhow::Context;
use clap::Parser;
use estatehub::catalog::{BuiltinCatalog, CatalogSource, JsonFileCatalog};
use estatehub::display::render_property;
use estatehub::search::{filter, FormField, SearchForm, SearchOutcome, SearchReport};
use std::path::PathBuf;
use tracing::{info, warn};

/// EstateHub - search property listings by location, type, price, rooms and features.
#[derive(Parser, Debug)]
#[command(name = "estatehub", version, about)]
struct Cli {
    /// JSON file holding the listing catalog (built-in listings if omitted)
    #[arg(short = 'c', long)]
    catalog: Option<PathBuf>,

    /// City, state, or ZIP fragment (case-insensitive)
    #[arg(short = 'l', long)]
    location: Option<String>,

    /// Property type: any, house, apartment, condo, townhouse, villa
    #[arg(short = 't', long = "type")]
    property_type: Option<String>,

    /// Listing type: any, sale, rent
    #[arg(long = "listing")]
    listing_type: Option<String>,

    /// Minimum price
    #[arg(long)]
    price_min: Option<String>,

    /// Maximum price
    #[arg(long)]
    price_max: Option<String>,

    /// Minimum bedrooms, or "any"
    #[arg(short = 'b', long)]
    bedrooms: Option<String>,

    /// Minimum bathrooms, or "any"
    #[arg(long)]
    bathrooms: Option<String>,

    /// Required feature, may be given more than once
    #[arg(short = 'f', long = "feature")]
    features: Vec<String>,

    /// Write a JSON search report to this file
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug)
    #[arg(short = 'd', long)]
    debug: bool,
}

impl Cli {
    /// Fill a search form the way the fields would be typed in
    fn to_form(&self) -> SearchForm {
        let mut form = SearchForm::default();

        let fields = [
            (FormField::Location, &self.location),
            (FormField::PropertyType, &self.property_type),
            (FormField::ListingType, &self.listing_type),
            (FormField::PriceMin, &self.price_min),
            (FormField::PriceMax, &self.price_max),
            (FormField::Bedrooms, &self.bedrooms),
            (FormField::Bathrooms, &self.bathrooms),
        ];
        for (field, value) in fields {
            if let Some(value) = value {
                form.set_field(field, value.as_str());
            }
        }

        for feature in &self.features {
            form.toggle_feature(feature);
        }

        form
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    estatehub::logging::init(cli.debug);

    info!("🏠 EstateHub - Property Search");

    let source: Box<dyn CatalogSource> = match &cli.catalog {
        Some(path) => Box::new(JsonFileCatalog::new(path.clone())),
        None => Box::new(BuiltinCatalog::new()),
    };

    let catalog = source.load().await?;
    info!(
        source = source.source_name(),
        listings = catalog.len(),
        "Catalog ready"
    );

    let criteria = cli.to_form().criteria();
    let results = filter(&catalog, &criteria);

    match SearchOutcome::from_count(results.len()) {
        outcome @ SearchOutcome::Found(_) => info!("✅ {}", outcome),
        outcome @ SearchOutcome::NoMatches => warn!("{}", outcome),
    }

    for (i, property) in results.iter().enumerate() {
        println!("{}", render_property(i + 1, property));
    }

    if let Some(path) = &cli.output {
        let report = SearchReport::new(source.source_name(), criteria, results);
        let json = serde_json::to_string_pretty(&report)?;
        tokio::fs::write(path, json)
            .await
            .with_context(|| format!("Failed to write search report {}", path.display()))?;
        info!("💾 Saved search report to {}", path.display());
    }

    Ok(())
}
