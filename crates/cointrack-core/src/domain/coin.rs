use serde::{Deserialize, Deserializer, Serialize};

/// One historical observation: epoch milliseconds and price.
///
/// Travels on the wire as a two-element array `[ms, price]`; the price may
/// be `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, Option<f64>)", into = "(f64, Option<f64>)")]
pub struct PriceSample {
    pub timestamp_ms: i64,
    pub price: Option<f64>,
}

impl PriceSample {
    pub const fn new(timestamp_ms: i64, price: f64) -> Self {
        Self {
            timestamp_ms,
            price: Some(price),
        }
    }

    pub const fn without_price(timestamp_ms: i64) -> Self {
        Self {
            timestamp_ms,
            price: None,
        }
    }
}

impl From<(f64, Option<f64>)> for PriceSample {
    fn from((timestamp_ms, price): (f64, Option<f64>)) -> Self {
        Self {
            timestamp_ms: timestamp_ms as i64,
            price,
        }
    }
}

impl From<PriceSample> for (f64, Option<f64>) {
    fn from(value: PriceSample) -> Self {
        (value.timestamp_ms as f64, value.price)
    }
}

/// Raw coin record as returned by the price backend.
///
/// Every numeric field is optional because the provider may omit it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoinRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub symbol: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub total_volume: Option<f64>,
    /// Chronological, oldest first. Samples without a timestamp are dropped.
    #[serde(default, deserialize_with = "history_samples")]
    pub historical_data: Vec<PriceSample>,
}

impl CoinRecord {
    pub fn new(id: impl Into<String>, symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            symbol: symbol.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_current_price(mut self, price: f64) -> Self {
        self.current_price = Some(price);
        self
    }

    pub fn with_market_cap(mut self, market_cap: f64) -> Self {
        self.market_cap = Some(market_cap);
        self
    }

    pub fn with_total_volume(mut self, total_volume: f64) -> Self {
        self.total_volume = Some(total_volume);
        self
    }

    pub fn with_history(mut self, samples: Vec<PriceSample>) -> Self {
        self.historical_data = samples;
        self
    }

    /// Price at the start of the requested window.
    pub fn reference_price(&self) -> Option<f64> {
        self.historical_data.first().and_then(|sample| sample.price)
    }
}

/// Single chart point: formatted calendar date and price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

/// Chart-ready price history for one coin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub label: String,
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Display-ready record derived from a [`CoinRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedCoinRecord {
    pub record: CoinRecord,
    /// Rounded to 2 decimal places; `None` when not computable.
    pub percentage_change: Option<f64>,
    pub percentage_change_display: String,
    pub price_display: String,
    pub market_cap_display: String,
    pub volume_display: String,
    pub logo_url: String,
    pub title: String,
    pub chart: ChartSeries,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn history_samples<'de, D>(deserializer: D) -> Result<Vec<PriceSample>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<(Option<f64>, Option<f64>)>>::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(timestamp_ms, price)| {
            timestamp_ms
                .filter(|value| value.is_finite())
                .map(|timestamp_ms| PriceSample::from((timestamp_ms, price)))
        })
        .collect())
}
