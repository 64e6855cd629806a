use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

use leadscope::pipeline::{self, PipelineRequest, DEFAULT_LIVE_LIMIT};
use leadscope::sources::{DemoCatalog, FundedCompanyCatalog, LeadSource, PubMedSource};

const EXIT_SUCCESS: i32 = 0;
const EXIT_NETWORK: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// List leads sorted by propensity score (default if no subcommand)
    List,
    /// Open a lead's LinkedIn profile in the browser by its index number
    Open {
        /// Index number of the lead to open (1-based, as shown in list)
        index: usize,
    },
}

#[derive(Parser, Debug)]
#[command(name = "leadscope")]
#[command(about = "Sales lead prioritization CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Keyword filter matched against title, company, publications, and name;
    /// also seeds the live PubMed search
    #[arg(short, long, global = true, default_value = "")]
    query: String,

    /// Location filter matched against person location or company HQ
    #[arg(short, long, global = true, default_value = "")]
    location: String,

    /// Minimum propensity score (0-100)
    #[arg(short, long, global = true, default_value_t = 0,
          value_parser = clap::value_parser!(u32).range(0..=100))]
    min_score: u32,

    /// Include live PubMed authors in the candidate pool
    #[arg(long, global = true)]
    live: bool,

    /// Maximum number of leads fetched from live sources
    #[arg(long, global = true)]
    limit: Option<usize>,

    /// Output tab-separated values for scripting
    #[arg(long, global = true)]
    tsv: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/leadscope/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    // Install rustls crypto provider (required for rustls 0.23+)
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::List);
    let start_time = Instant::now();

    // Load config
    let config_path = cli.config.clone().map(PathBuf::from);
    let config = match leadscope::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate scoring config at startup
    let scoring = config.scoring.clone().unwrap_or_default();
    if let Err(errors) = leadscope::scoring::validate_scoring(&scoring) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let request = PipelineRequest {
        query: cli.query.clone(),
        location_filter: cli.location.clone(),
        min_score: cli.min_score,
        use_live_sources: cli.live,
        live_limit: cli.limit.or(config.live_limit).unwrap_or(DEFAULT_LIVE_LIMIT),
    };

    // Assemble candidate sources: live first, then the static catalogs in
    // their fixed order. Each source decides for itself whether it runs.
    let mut sources: Vec<Box<dyn LeadSource>> = Vec::new();
    match PubMedSource::new() {
        Ok(source) => sources.push(Box::new(source)),
        Err(e) => eprintln!("Warning: PubMed source unavailable: {}", e),
    }
    sources.push(Box::new(DemoCatalog));
    sources.push(Box::new(FundedCompanyCatalog));

    if cli.verbose {
        eprintln!(
            "Running pipeline (live sources {})",
            if cli.live { "enabled" } else { "disabled" }
        );
    }

    let leads = pipeline::run(&request, &sources, &scoring, cli.verbose).await;

    // Route based on subcommand
    match command {
        Commands::List => {
            if cli.tsv {
                let output = leadscope::output::format_tsv(&leads);
                if !output.is_empty() {
                    println!("{}", output);
                }
            } else {
                let use_colors = leadscope::output::should_use_colors();

                if cli.verbose && !leads.is_empty() {
                    // Verbose mode: detailed output with score breakdowns
                    for scored in &leads {
                        let result = leadscope::scoring::score_lead(&scored.lead, &scoring);
                        println!(
                            "{}",
                            leadscope::output::format_lead_detail(scored, &result, use_colors)
                        );
                        println!();
                    }
                } else {
                    // Normal mode: ranked table
                    let output = leadscope::output::format_scored_table(&leads, use_colors);
                    println!("{}", output);
                }
            }

            if cli.verbose {
                eprintln!();
                eprintln!("Total: {} leads in {:?}", leads.len(), start_time.elapsed());
            }
        }
        Commands::Open { index } => {
            // Validate index bounds (1-based)
            if index < 1 || index > leads.len() {
                eprintln!(
                    "Invalid index {}. Must be between 1 and {}.",
                    index,
                    leads.len()
                );
                std::process::exit(EXIT_CONFIG);
            }

            // Get lead at index (convert to 0-based)
            let scored = &leads[index - 1];
            let Some(url) = scored.lead.linkedin_url.as_deref() else {
                eprintln!("No LinkedIn URL on record for {}.", scored.lead.contact_ref());
                std::process::exit(EXIT_CONFIG);
            };

            // Open in browser
            if let Err(e) = leadscope::browser::open_url(url) {
                eprintln!("Failed to open browser: {}", e);
                std::process::exit(EXIT_NETWORK);
            }

            println!("Opening {} in browser: {}", scored.lead.contact_ref(), url);
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
