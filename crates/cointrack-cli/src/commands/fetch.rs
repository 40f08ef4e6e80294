use std::sync::Arc;

use cointrack_core::{
    DisplayOptions, FetchOrchestrator, FetchState, FixtureHttpClient, HttpClient, NumberLocale,
    ReqwestHttpClient, RequestOptions, TimeRange, TrackerConfig,
};
use tracing::debug;

use crate::cli::FetchArgs;
use crate::error::CliError;

use super::Report;

pub async fn run(args: &FetchArgs) -> Result<Report, CliError> {
    let range = args.range.parse::<TimeRange>()?;
    let config = config_from_args(args)?;

    let http_client: Arc<dyn HttpClient> = match &args.fixture {
        Some(path) => {
            debug!(path = %path.display(), "serving backend response from fixture");
            Arc::new(FixtureHttpClient::from_file(path)?)
        }
        None => Arc::new(ReqwestHttpClient::new()),
    };

    let orchestrator = FetchOrchestrator::from_config(&config, http_client);
    orchestrator.select_range(range).await;

    match orchestrator.submit(&args.ids).await? {
        FetchState::Success(result) => Ok(Report::Coins {
            result,
            chart: args.chart,
        }),
        FetchState::Failed(error) => Err(CliError::FetchFailed {
            code: error.code(),
            message: error.user_message().to_owned(),
        }),
        other => Err(CliError::Command(format!(
            "fetch finished in unexpected state '{}'",
            other.as_str()
        ))),
    }
}

fn config_from_args(args: &FetchArgs) -> Result<TrackerConfig, CliError> {
    let display = DisplayOptions {
        locale: args.locale.parse::<NumberLocale>()?,
        currency_symbol: args.currency_symbol.clone(),
    };

    Ok(TrackerConfig::default()
        .with_endpoint(args.endpoint.clone())
        .with_timeout_ms(args.timeout_ms)
        .with_request_options(RequestOptions { dedupe: args.dedupe })
        .with_display_options(display))
}
