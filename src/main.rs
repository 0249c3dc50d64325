use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use property_catalog::sources::ImageSource;
use property_catalog::{CatalogProvider, Property, PropertyFilter, PropertyStatus, PropertyType};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Browse the property catalog the website serves
#[derive(Debug, Parser)]
#[command(name = "property-catalog", version)]
struct Cli {
    /// Print JSON instead of a text listing
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List properties, optionally filtered
    List {
        /// Include only these statuses (repeatable)
        #[arg(long = "status")]
        statuses: Vec<PropertyStatus>,
        /// Include only these property types (repeatable)
        #[arg(long = "type")]
        types: Vec<PropertyType>,
        /// Case-insensitive substring of the location
        #[arg(long)]
        location: Option<String>,
    },
    /// Show one property
    Show { slug: String },
    /// List properties with a given status
    Status { status: PropertyStatus },
    /// Print every slug, one per line
    Slugs,
    /// Resolve an image asset reference to its CDN URL
    ImageUrl {
        reference: String,
        #[arg(long)]
        width: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let provider = CatalogProvider::from_env();

    match cli.command {
        Command::List {
            statuses,
            types,
            location,
        } => {
            let filter = PropertyFilter {
                status: Some(statuses),
                property_type: Some(types),
                location,
                ..Default::default()
            };
            let properties = provider.get_filtered_properties(&filter).await;
            info!("Found {} properties", properties.len());
            print_listing(&properties, cli.json)?;
        },
        Command::Show { slug } => match provider.get_property_by_slug(&slug).await {
            Some(property) if cli.json => print_json(&property)?,
            Some(property) => print_detail(&property),
            None => anyhow::bail!("No property with slug '{slug}'"),
        },
        Command::Status { status } => {
            let properties = provider.get_properties_by_status(status).await;
            info!("Found {} {} properties", properties.len(), status);
            print_listing(&properties, cli.json)?;
        },
        Command::Slugs => {
            for slug in provider.get_property_slugs().await {
                println!("{slug}");
            }
        },
        Command::ImageUrl { reference, width } => {
            let source = ImageSource::from(reference.as_str());
            let url = match width {
                Some(width) => provider.image_url_with_width(Some(&source), width),
                None => provider.image_url(Some(&source)),
            };
            if url.is_empty() {
                anyhow::bail!("Could not resolve image '{reference}' (is the content source configured?)");
            }
            println!("{url}");
        },
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}

fn print_listing(properties: &[Property], json: bool) -> Result<()> {
    if json {
        return print_json(&properties);
    }

    for (i, property) in properties.iter().enumerate() {
        println!("{}. {} ({})", i + 1, property.title, property.price);
        println!(
            "   {} · {} · {}",
            property.property_type.label(),
            property.status.label(),
            property.location
        );
        println!("   Slug: {}", property.slug);
        println!();
    }
    Ok(())
}

fn print_detail(property: &Property) {
    println!("{}", property.title);
    println!("{} · {}", property.property_type.label(), property.status.label());
    println!("Price: {}", property.price);
    println!("Location: {}", property.location);
    println!("Area: {}", property.area);
    println!(
        "Bedrooms: {}  Bathrooms: {}",
        property.bedrooms, property.bathrooms
    );
    if !property.features.is_empty() {
        println!("Features: {}", property.features.join(", "));
    }
    if let Some(cover) = property.cover_image() {
        println!("Cover: {cover}");
    }
    for image in property.gallery() {
        println!("Gallery: {image}");
    }
    println!();
    println!("{}", property.description);
    println!();
    println!("Updated: {}", property.updated_at.to_rfc3339());
}
