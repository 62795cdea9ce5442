//! Run summary accumulation and reporting.

use crate::registrar::Outcome;
use log::info;

/// Aggregate result of one batch run.
///
/// Outcomes are recorded in account order, one per credential loaded from
/// the account file. The summary collapses everything that is not a
/// success into the failed count.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub outcomes: Vec<Outcome>,
}

impl RunSummary {
    pub fn record(&mut self, outcome: Outcome) {
        self.outcomes.push(outcome);
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn successful(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, Outcome::Success))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.successful()
    }
}

/// Emit the end-of-run summary block
pub fn log_summary(summary: &RunSummary) {
    info!("{}", "=".repeat(50));
    info!("REGISTRATION SUMMARY");
    info!("Total accounts processed: {}", summary.total());
    info!("Successful registrations: {}", summary.successful());
    info!("Failed registrations: {}", summary.failed());
    info!("{}", "=".repeat(50));
}
