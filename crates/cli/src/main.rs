// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod snapshot;

use clap::{Parser, ValueEnum};
use error::CliError;
use promo_engine::{CampaignStore, LifecycleService};
use promo_engine_domain::{Clock, DealerId, FixedClock, ModelId, SystemClock};
use promo_engine_views::{ProjectedView, Projection, ProjectionSnapshot};
use snapshot::load_snapshot;
use std::path::PathBuf;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Promo Engine - project a promotion snapshot for one audience
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON snapshot with `promotions`, `dealers` and `models`
    #[arg(short, long)]
    snapshot: PathBuf,

    /// The projection to print
    #[arg(long, value_enum, default_value_t = ViewArg::ApprovalQueue)]
    view: ViewArg,

    /// Only promotions that apply to this dealer (dealer catalog only)
    #[arg(long)]
    dealer: Option<u64>,

    /// Only promotions that apply to this vehicle model (customer discovery only)
    #[arg(long)]
    model: Option<u64>,

    /// Also list upcoming promotions (customer discovery only)
    #[arg(long)]
    include_upcoming: bool,

    /// Evaluate as of this RFC 3339 instant instead of the wall clock
    #[arg(long)]
    now: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Log filter, overriding `RUST_LOG` (e.g. `debug`, `promo_engine=trace`)
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ViewArg {
    ApprovalQueue,
    DealerCatalog,
    CustomerDiscovery,
}

impl Args {
    fn projection(&self) -> Projection {
        match self.view {
            ViewArg::ApprovalQueue => Projection::ApprovalQueue,
            ViewArg::DealerCatalog => Projection::DealerCatalog {
                dealer: self.dealer.map(DealerId::new),
            },
            ViewArg::CustomerDiscovery => Projection::CustomerDiscovery {
                include_upcoming: self.include_upcoming,
                model: self.model.map(ModelId::new),
            },
        }
    }

    fn clock(&self) -> Result<Box<dyn Clock>, CliError> {
        match &self.now {
            Some(text) => {
                let instant: OffsetDateTime = OffsetDateTime::parse(text, &Rfc3339)?;
                Ok(Box::new(FixedClock::at(instant)))
            }
            None => Ok(Box::new(SystemClock)),
        }
    }
}

fn init_tracing(log_level: Option<&str>) {
    let filter: EnvFilter = log_level.map_or_else(
        || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        EnvFilter::new,
    );

    // stdout carries only the projected JSON
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn project(args: &Args, store: CampaignStore) -> Result<ProjectedView, CliError> {
    let service: LifecycleService<Box<dyn Clock>> =
        LifecycleService::with_store(store, args.clock()?);
    let snapshot: ProjectionSnapshot = ProjectionSnapshot::from_service(&service);
    Ok(snapshot.project(args.projection()))
}

fn render(view: &ProjectedView, pretty: bool) -> Result<String, CliError> {
    let json: String = if pretty {
        serde_json::to_string_pretty(view)?
    } else {
        serde_json::to_string(view)?
    };
    Ok(json)
}

fn run(args: &Args) -> Result<String, CliError> {
    if args.dealer.is_some() && args.view != ViewArg::DealerCatalog {
        tracing::warn!("--dealer only applies to the dealer catalog; ignoring it");
    }
    if (args.model.is_some() || args.include_upcoming) && args.view != ViewArg::CustomerDiscovery
    {
        tracing::warn!(
            "--model and --include-upcoming only apply to customer discovery; ignoring them"
        );
    }

    let store: CampaignStore = load_snapshot(&args.snapshot)?.into_store()?;
    let view: ProjectedView = project(args, store)?;

    info!(
        audience = %view.audience,
        entries = view.entries.len(),
        generated_at = %view.generated_at,
        "projection complete"
    );
    render(&view, args.pretty)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    init_tracing(args.log_level.as_deref());

    let output: String = run(&args)?;
    println!("{output}");

    Ok(())
}
