//! Recorded statistics and the date-range query that turns them into graph rows

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::data_types::GraphData;
use crate::errors::{ChartError, ChartResult};

const DAY_SECONDS: u32 = 86_400;

/// Aggregation period of a statistic, serialized as its length in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum Period {
    Day,
    Week,
    Days28,
    Month,
    Lifetime,
}

impl Period {
    pub fn seconds(&self) -> u32 {
        match self {
            Period::Day => DAY_SECONDS,
            Period::Week => DAY_SECONDS * 7,
            Period::Days28 => DAY_SECONDS * 28,
            Period::Month => DAY_SECONDS * 30,
            Period::Lifetime => 0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::Day => "Day",
            Period::Week => "Week",
            Period::Days28 => "28 days",
            Period::Month => "Month",
            Period::Lifetime => "Lifetime",
        }
    }
}

impl From<Period> for u32 {
    fn from(period: Period) -> u32 {
        period.seconds()
    }
}

impl TryFrom<u32> for Period {
    type Error = String;

    fn try_from(seconds: u32) -> Result<Self, Self::Error> {
        [
            Period::Day,
            Period::Week,
            Period::Days28,
            Period::Month,
            Period::Lifetime,
        ]
        .into_iter()
        .find(|p| p.seconds() == seconds)
        .ok_or_else(|| format!("no period of {seconds} seconds"))
    }
}

/// A metric value recorded for one date. `None` means no data was available.
///
/// Statistics about a particular object carry its type and id; statistics
/// for a whole domain leave both unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistic {
    pub metric: String,
    pub date: NaiveDate,
    pub period: Period,
    pub value: Option<i64>,
    #[serde(default)]
    pub subject_type: Option<String>,
    #[serde(default)]
    pub subject_id: Option<u64>,
}

/// Which statistics to graph: one metric over an inclusive date range,
/// optionally narrowed to one period and to one object type or object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphQuery {
    pub metric: String,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    #[serde(default)]
    pub period: Option<Period>,
    #[serde(default)]
    pub object_type: Option<String>,
    #[serde(default)]
    pub object_id: Option<u64>,
}

impl GraphQuery {
    pub fn new(metric: &str, from_date: NaiveDate, to_date: NaiveDate) -> ChartResult<Self> {
        let query = Self {
            metric: metric.to_string(),
            from_date,
            to_date,
            period: None,
            object_type: None,
            object_id: None,
        };
        query.validate()?;
        Ok(query)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.from_date > self.to_date {
            return Err(ChartError::InvalidConfig {
                message: format!(
                    "from_date {} is after to_date {}",
                    self.from_date, self.to_date
                ),
                field: Some("from_date".to_string()),
            });
        }
        Ok(())
    }

    /// The seven days leading up to and including `today`
    pub fn last_week(metric: &str, today: NaiveDate) -> Self {
        Self {
            metric: metric.to_string(),
            from_date: today - Duration::days(7),
            to_date: today,
            period: None,
            object_type: None,
            object_id: None,
        }
    }

    pub fn with_period(mut self, period: Period) -> Self {
        self.period = Some(period);
        self
    }

    /// Only statistics about objects of `object_type`, and about the single
    /// object `object_id` when given
    pub fn with_object(mut self, object_type: &str, object_id: Option<u64>) -> Self {
        self.object_type = Some(object_type.to_string());
        self.object_id = object_id;
        self
    }

    pub fn matches(&self, stat: &Statistic) -> bool {
        stat.metric == self.metric
            && stat.date >= self.from_date
            && stat.date <= self.to_date
            && self.period.map_or(true, |p| p == stat.period)
            && self
                .object_type
                .as_ref()
                .map_or(true, |t| stat.subject_type.as_ref() == Some(t))
            && self.object_id.map_or(true, |id| stat.subject_id == Some(id))
    }

    /// Matching statistics ordered by date
    pub fn narrow<'a>(&self, stats: &'a [Statistic]) -> Vec<&'a Statistic> {
        let mut narrowed: Vec<_> = stats.iter().filter(|s| self.matches(s)).collect();
        narrowed.sort_by_key(|s| s.date);
        narrowed
    }

    /// Column chart rows `[date, value]` for the matching statistics
    pub fn graph_data(&self, stats: &[Statistic]) -> GraphData {
        let rows = self
            .narrow(stats)
            .into_iter()
            .map(|s| {
                Value::Array(vec![
                    Value::from(s.date.format("%Y-%m-%d").to_string()),
                    s.value.map_or(Value::Null, Value::from),
                ])
            })
            .collect();
        GraphData::new(Value::Array(rows))
    }
}
