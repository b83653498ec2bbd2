// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::{bail, Context, Result};
use std::env;
use std::io;

use clinic_metrics::{
    format_indian, format_ratio_percent, format_share, logging, write_clinic_csv,
    DashboardConfig, Dataset, SortKey, ViewState,
};
use tracing::info;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let config = DashboardConfig::from_args(&args)?;

    // Positional arguments, minus `--config <path>`
    let mut positional = Vec::new();
    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        if arg == "--config" {
            iter.next();
        } else {
            positional.push(arg.as_str());
        }
    }

    match positional.as_slice() {
        ["summary"] => {
            logging::init_stderr(&config.log_filter);
            run_summary()
        }
        ["export", sort] => {
            logging::init_stderr(&config.log_filter);
            run_export(sort, "All")
        }
        ["export", sort, zone] => {
            logging::init_stderr(&config.log_filter);
            run_export(sort, zone)
        }
        [] => run_ui_mode(&config),
        other => bail!(
            "Unknown command: {}\n   Usage: clinic-metrics [summary | export <sort> [zone]] [--config <path>]",
            other.join(" ")
        ),
    }
}

fn run_summary() -> Result<()> {
    let dataset = Dataset::builtin()?;
    let kpis = dataset.kpis();
    info!("{}", kpis.summary());

    println!("📊 Clinic Metrics - Summary");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Total revenue:      {}", format_indian(kpis.total_revenue));
    println!("Total quantity:     {}", format_indian(kpis.total_quantity as f64));
    println!("Total appointments: {}", format_indian(kpis.total_appointments as f64));
    println!("Show rate:          {}", format_share(kpis.show_pct));
    println!(
        "MoM growth ({}):   {}",
        kpis.latest_month.as_deref().unwrap_or("-"),
        format_ratio_percent(kpis.mom_growth)
    );
    println!("\nZone share of revenue:");
    for share in &kpis.zone_shares {
        println!(
            "  {:<10} {:>8}  {:>7}",
            share.zone,
            format_indian(share.revenue),
            format_share(share.share)
        );
    }

    Ok(())
}

fn run_export(sort: &str, zone: &str) -> Result<()> {
    let dataset = Dataset::builtin()?;
    let sort_key: SortKey = sort.parse()?;
    let zone_filter = dataset.zone_filter(zone)?;

    let state = ViewState::default()
        .with_sort_key(sort_key)
        .with_zone_filter(zone_filter);
    let view = dataset.clinic_view(&state);
    info!(rows = view.len(), sort = sort_key.as_str(), zone, "exporting clinic view");

    write_clinic_csv(io::stdout().lock(), &view).context("Failed to export clinic view")
}

#[cfg(feature = "tui")]
fn run_ui_mode(config: &DashboardConfig) -> Result<()> {
    logging::init_file(&config.log_filter, &config.log_file)?;

    println!("🖥️  Loading Clinic Metrics dashboard...\n");
    let dataset = Dataset::builtin()?;

    let mut app = ui::App::new(dataset, config.initial_view());
    ui::run_ui(&mut app)?;

    println!("\n✅ Dashboard closed");
    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_config: &DashboardConfig) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or use the API: cargo run --bin clinic-metrics-server --features server");
    std::process::exit(1);
}
