use crate::infra::load_board;
use chrono::{Local, NaiveDate};
use clap::Args;
use recruit_kit::error::AppError;
use recruit_kit::sections::application::{validate_email, validate_phone};
use recruit_kit::sections::positions::{FilterCriteria, JobPosting, RecencyWindow};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct PositionsListArgs {
    /// Positions catalog (.json or .csv)
    #[arg(long)]
    pub(crate) catalog: PathBuf,
    /// Case-insensitive text matched against title, area and region
    #[arg(long, default_value = "")]
    pub(crate) search: String,
    /// Exact area match
    #[arg(long)]
    pub(crate) area: Option<String>,
    /// Employment type the posting must offer (e.g. Vollzeit)
    #[arg(long)]
    pub(crate) capacity: Option<String>,
    /// Exact region match
    #[arg(long)]
    pub(crate) region: Option<String>,
    /// all, last7days or last30days
    #[arg(long, value_parser = parse_recency, default_value = "all")]
    pub(crate) recency: RecencyWindow,
    /// Reference date for the recency window (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub(crate) struct PositionsOptionsArgs {
    /// Positions catalog (.json or .csv)
    #[arg(long)]
    pub(crate) catalog: PathBuf,
}

fn parse_recency(raw: &str) -> Result<RecencyWindow, String> {
    RecencyWindow::parse(raw)
        .ok_or_else(|| format!("unknown recency window '{raw}' (use all, last7days or last30days)"))
}

pub(crate) fn run_validate_phone(input: &str) -> Result<(), AppError> {
    let result = validate_phone(input);
    match (&result.formatted, &result.error) {
        (Some(formatted), _) => println!("valid mobile number: {formatted}"),
        (None, Some(error)) => println!("invalid: {error}"),
        (None, None) => println!("invalid"),
    }
    Ok(())
}

pub(crate) fn run_validate_email(input: &str) -> Result<(), AppError> {
    let result = validate_email(input);
    match (&result.formatted, &result.error) {
        (Some(formatted), _) => println!("valid email address: {formatted}"),
        (None, Some(error)) => println!("invalid: {error}"),
        (None, None) => println!("invalid"),
    }
    for warning in &result.warnings {
        println!("warning: {warning}");
    }
    Ok(())
}

pub(crate) fn run_positions_list(args: PositionsListArgs) -> Result<(), AppError> {
    let PositionsListArgs {
        catalog,
        search,
        area,
        capacity,
        region,
        recency,
        today,
    } = args;

    let board = load_board(Some(catalog.as_path()))?;
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let criteria = FilterCriteria {
        search_text: search,
        area,
        work_capacity: capacity,
        region,
        recency_window: recency,
    };

    let positions = board.filter(&criteria, today);
    println!(
        "{} of {} open positions (reference date {})",
        positions.len(),
        board.candidates().len(),
        today
    );
    for posting in &positions {
        println!("- {}", render_posting(posting));
    }

    Ok(())
}

pub(crate) fn run_positions_options(args: PositionsOptionsArgs) -> Result<(), AppError> {
    let board = load_board(Some(args.catalog.as_path()))?;
    let options = board.options();

    println!("Areas: {}", options.areas.join(", "));
    println!("Capacities: {}", options.capacities.join(", "));
    println!("Regions: {}", options.regions.join(", "));
    Ok(())
}

fn render_posting(posting: &JobPosting) -> String {
    let capacity = posting
        .work_capacity
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("/");
    let published = match posting.published_on() {
        Some(date) => date.format("%d.%m.%Y").to_string(),
        None => "ohne Datum".to_string(),
    };

    format!(
        "{} | {} | {} | {} | {} | {}",
        posting.id,
        posting.display_title(),
        posting.area,
        posting.region,
        capacity,
        published
    )
}
