//! talmo: terminal client for the Korean alopecia-areata prediction API.
//!
//! Fetches the form schema from the backend, collects a value for every
//! field (from a JSON file, `--set` flags, or interactive prompts), submits
//! the payload, and renders the prediction result.

mod display;
mod prompt;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use talmo_client::ApiClient;
use talmo_core::Form;

#[derive(Parser)]
#[command(name = "talmo", version, about = "Terminal client for the Korean AA prediction API")]
struct Cli {
    /// Base URL of the prediction API.
    #[arg(
        long,
        env = "TALMO_API_URL",
        default_value = "http://127.0.0.1:9999",
        global = true
    )]
    api_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch and print the form field definitions.
    Schema,
    /// Fill the form and request a prediction.
    Predict {
        /// JSON file with an object of field values, like {"uv_value2": "34"}.
        #[arg(long)]
        input: Option<PathBuf>,
        /// Set one field value; repeatable: --set uv_value2=34
        #[arg(long = "set", value_name = "ID=VALUE")]
        set: Vec<String>,
        /// Fail on missing fields instead of prompting for them.
        #[arg(long)]
        no_input: bool,
    },
    /// Check that the API is reachable.
    Health,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    tracing::info!("talmo v{}", env!("CARGO_PKG_VERSION"));
    let cli = Cli::parse();

    let client = ApiClient::new(&cli.api_url);
    println!("API: {}", client.base_url());

    match cli.command {
        Command::Schema => run_schema(&client).await,
        Command::Predict {
            input,
            set,
            no_input,
        } => run_predict(&client, input.as_deref(), &set, no_input).await,
        Command::Health => run_health(&client).await,
    }
}

async fn run_schema(client: &ApiClient) -> anyhow::Result<()> {
    let fields = client
        .fetch_schema()
        .await
        .with_context(|| schema_hint(client.base_url()))?;
    print!("{}", display::schema_listing(&fields));
    Ok(())
}

/// One full submission cycle: load schema, fill the form, validate, POST,
/// render. Validation failures abort before any prediction request is made.
async fn run_predict(
    client: &ApiClient,
    input: Option<&Path>,
    set: &[String],
    no_input: bool,
) -> anyhow::Result<()> {
    let fields = client
        .fetch_schema()
        .await
        .with_context(|| schema_hint(client.base_url()))?;
    let mut form = Form::new(fields);

    if let Some(path) = input {
        apply_input_file(&mut form, path)?;
    }
    for pair in set {
        apply_set(&mut form, pair)?;
    }
    if !no_input && !form.missing().is_empty() {
        let stdin = std::io::stdin();
        let mut lock = stdin.lock();
        let mut stdout = std::io::stdout();
        prompt::fill_missing(&mut form, &mut lock, &mut stdout)?;
        println!();
    }

    let payload = form.payload()?;
    let result = client.predict(&payload).await?;
    print!("{}", display::result_card(&result));
    Ok(())
}

async fn run_health(client: &ApiClient) -> anyhow::Result<()> {
    let status = client
        .health()
        .await
        .with_context(|| format!("API is not responding ({})", client.base_url()))?;
    println!("status: {status}");
    Ok(())
}

fn schema_hint(base_url: &str) -> String {
    format!("failed to load the form schema; check the API address and that the backend is running ({base_url})")
}

fn apply_set(form: &mut Form, pair: &str) -> anyhow::Result<()> {
    let (id, value) = pair
        .split_once('=')
        .with_context(|| format!("--set expects ID=VALUE, got '{pair}'"))?;
    form.set_value(id.trim(), value)?;
    Ok(())
}

fn apply_input_file(form: &mut Form, path: &Path) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let values: BTreeMap<String, String> =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    for (id, value) in &values {
        form.set_value(id, value)?;
    }
    Ok(())
}
