use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dwd_wfs::{
    RequestParameters, WfsClient, WfsConfig, WfsQuery,
    features::{feature_collection_from_value, summarize},
};
use tracing::info;

/// Query the DWD GeoServer Web Feature Service and print the JSON response.
#[derive(Parser, Debug)]
#[command(name = "dwd-wfs", version)]
struct Cli {
    /// Feature type to fetch, e.g. dwd:Warnungen_Gemeinden
    typename: String,

    /// CQL expression sent as CQL_FILTER
    #[arg(long)]
    cql_filter: Option<String>,

    /// WFS protocol version
    #[arg(long = "wfs-version")]
    wfs_version: Option<String>,

    /// WFS request type
    #[arg(long)]
    request: Option<String>,

    #[arg(long)]
    output_format: Option<String>,

    /// Timeout in seconds
    #[arg(long)]
    timeout: Option<String>,

    /// Endpoint including `?service=WFS`
    #[arg(long)]
    base_url: Option<String>,

    /// JSON file with client defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Extra parameter as KEY=VALUE; may be repeated
    #[arg(long = "param", value_parser = parse_key_val)]
    params: Vec<(String, String)>,

    /// Print the request URL and exit without sending it
    #[arg(long)]
    print_url: bool,

    /// Print a summary of the returned feature collection instead of the JSON
    #[arg(long)]
    features: bool,
}

fn parse_key_val(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))
}

fn main() -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str::<WfsConfig>(&raw)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => WfsConfig::default(),
    };
    if let Some(url) = &cli.base_url {
        config.base_url.clone_from(url);
    }
    let client = WfsClient::new(config);

    let params = build_params(&cli);

    if cli.print_url {
        let query = WfsQuery::from_params(&params)?;
        println!("{}", client.query_url(&query));
        return Ok(());
    }

    let value = client
        .try_query(&params)
        .with_context(|| format!("querying {}", cli.typename))?;

    if cli.features {
        let collection = feature_collection_from_value(value)?;
        let summary = summarize(&collection);
        info!(typename = %cli.typename, "Got {} features", summary.features);
        println!("features: {}", summary.features);
        if let Some(matched) = summary.number_matched {
            println!("matched: {matched}");
        }
        if let Some(timestamp) = &summary.timestamp {
            println!("timestamp: {timestamp}");
        }
        for (geometry, count) in &summary.geometries {
            println!("  {geometry}: {count}");
        }
    } else {
        println!("{}", serde_json::to_string_pretty(&value)?);
    }
    Ok(())
}

fn build_params(cli: &Cli) -> RequestParameters {
    let mut params: RequestParameters = cli.params.iter().cloned().collect();
    params.insert("typename", cli.typename.clone());

    let flags = [
        ("cql_filter", &cli.cql_filter),
        ("version", &cli.wfs_version),
        ("request", &cli.request),
        ("outputformat", &cli.output_format),
        ("timeout", &cli.timeout),
    ];
    for (key, value) in flags {
        if let Some(value) = value {
            params.insert(key, value.clone());
        }
    }
    params
}
