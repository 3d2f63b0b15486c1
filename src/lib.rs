//! Compute the total cost of a sales record against a JSON price catalogue
//! and report it, along with any data-quality problems found on the way.

pub mod args;
pub mod engine;
pub mod errors;
pub mod loader;
pub mod report;

use crate::args::Args;
use crate::engine::{PriceCatalogue, SalesLedger};
use crate::errors::RunError;
use crate::loader::load_document;
use crate::report::{Report, ReportSink};
use serde_json::Value;
use std::time::Instant;

/// Run the whole pipeline: load both documents, cost every sale and hand the
/// rendered report to `sink`.
///
/// Fatal problems (missing or malformed documents, documents of the wrong
/// shape) are returned before anything is written to the sink.
pub fn run<S: ReportSink>(args: &Args, sink: &mut S) -> Result<Report, RunError> {
    let start = Instant::now();

    let catalogue = load_document(&args.price_catalogue)?;
    let sales = load_document(&args.sales_record)?;

    let sales = match sales {
        Value::Array(sales) => sales,
        _ => return Err(RunError::InvalidRecordShape),
    };
    let catalogue = PriceCatalogue::try_from(catalogue)?;

    let ledger = SalesLedger::compute(&catalogue, &sales);
    let report = ledger.generate_report(start.elapsed());

    sink.write_report(&report.render())?;

    Ok(report)
}
