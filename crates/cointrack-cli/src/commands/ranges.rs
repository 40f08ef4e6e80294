use cointrack_core::TimeRange;

use super::Report;

pub fn run() -> Report {
    Report::Ranges(TimeRange::ALL.to_vec())
}
