use std::fmt::Write as _;

use cointrack_core::{DerivedCoinRecord, ResultSet, TimeRange};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::Report;
use crate::error::CliError;

#[derive(Debug, Serialize)]
struct RangeRow {
    range: TimeRange,
    days: u32,
}

pub fn render(report: &Report, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => println!("{}", render_json(report, pretty)?),
        OutputFormat::Table => print!("{}", render_table(report)),
    }

    Ok(())
}

fn render_json(report: &Report, pretty: bool) -> Result<String, CliError> {
    let value = match report {
        Report::Coins { result, .. } => serde_json::to_value(result)?,
        Report::Ranges(ranges) => serde_json::to_value(range_rows(ranges))?,
    };

    let payload = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(payload)
}

fn render_table(report: &Report) -> String {
    let mut out = String::new();
    match report {
        Report::Coins { result, chart } => write_coins(&mut out, result, *chart),
        Report::Ranges(ranges) => {
            for row in range_rows(ranges) {
                let _ = writeln!(out, "{:<4} {:>3} days", row.range.as_str(), row.days);
            }
        }
    }
    out
}

fn range_rows(ranges: &[TimeRange]) -> Vec<RangeRow> {
    ranges
        .iter()
        .map(|range| RangeRow {
            range: *range,
            days: range.days(),
        })
        .collect()
}

fn write_coins(out: &mut String, result: &ResultSet, chart: bool) {
    let _ = writeln!(
        out,
        "ids         : {}\nrange       : {}",
        result.request.ids, result.request.range
    );

    for coin in &result.coins {
        let _ = writeln!(out);
        write_coin(out, coin, result.request.range, chart);
    }
}

fn write_coin(out: &mut String, coin: &DerivedCoinRecord, range: TimeRange, chart: bool) {
    let _ = writeln!(out, "{}", coin.title);
    let _ = writeln!(out, "  price      : {}", coin.price_display);
    let _ = writeln!(out, "  change {:<4}: {}", range.as_str(), coin.percentage_change_display);
    let _ = writeln!(out, "  market cap : {}", coin.market_cap_display);
    let _ = writeln!(out, "  volume     : {}", coin.volume_display);
    let _ = writeln!(out, "  logo       : {}", coin.logo_url);
    let _ = writeln!(out, "  history    : {} points", coin.chart.points.len());

    if chart && !coin.chart.is_empty() {
        let _ = writeln!(out, "  {}:", coin.chart.label);
        for point in &coin.chart.points {
            let _ = writeln!(out, "    {:<10} {:.2}", point.label, point.value);
        }
    }
}
