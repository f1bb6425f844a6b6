//! Canonical outlet records

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{Deserialize, Deserializer, IgnoredAny};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::metric::{Metric, CANONICAL_FIELDS, METRIC_COUNT};
use crate::text::{is_consolidated, normalize};

/// One outlet's figures for one month, projected onto the canonical schema
///
/// Serializes as a map with exactly the 15 [`CANONICAL_FIELDS`] in order;
/// missing metrics become `null`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OutletRecord {
    pub outlet: String,
    pub manager: String,
    pub month: String,
    metrics: [Option<f64>; METRIC_COUNT],
}

impl OutletRecord {
    /// A record with every metric missing
    pub fn new<O, M, N>(outlet: O, manager: M, month: N) -> Self
    where
        O: Into<String>,
        M: Into<String>,
        N: Into<String>,
    {
        Self {
            outlet: outlet.into(),
            manager: manager.into(),
            month: month.into(),
            metrics: [None; METRIC_COUNT],
        }
    }

    /// Value of a metric, `None` when missing
    pub fn metric(&self, metric: Metric) -> Option<f64> {
        self.metrics[metric.index()]
    }

    /// Set or clear a metric
    pub fn set_metric(&mut self, metric: Metric, value: Option<f64>) {
        self.metrics[metric.index()] = value.filter(|v| v.is_finite());
    }

    /// Builder-style [`OutletRecord::set_metric`]
    pub fn with_metric(mut self, metric: Metric, value: f64) -> Self {
        self.set_metric(metric, Some(value));
        self
    }

    /// Metric values in canonical order
    pub fn metrics(&self) -> impl Iterator<Item = (Metric, Option<f64>)> + '_ {
        Metric::ALL.into_iter().map(|m| (m, self.metric(m)))
    }

    /// Whether this record is a fleet-wide summary rather than an outlet
    pub fn is_consolidated(&self) -> bool {
        is_consolidated(&self.outlet)
    }

    /// All 15 fields in canonical order
    pub fn fields(&self) -> Vec<FieldValue<'_>> {
        let mut fields = vec![
            FieldValue::Text(&self.outlet),
            FieldValue::Text(&self.manager),
            FieldValue::Text(&self.month),
        ];
        fields.extend(self.metrics.iter().map(|v| FieldValue::Number(*v)));
        fields
    }

    fn from_fields(mut fields: BTreeMap<String, LooseValue>) -> Self {
        let mut text = |name: &str| match fields.remove(name) {
            Some(LooseValue::Text(s)) => normalize(&s),
            Some(LooseValue::Number(n)) => n.to_string(),
            _ => String::new(),
        };
        let mut record = OutletRecord::new(text("Outlet"), text("Outlet Manager"), text("Month"));
        for metric in Metric::ALL {
            let value = match fields.get(metric.label()) {
                Some(LooseValue::Number(n)) => Some(*n),
                Some(LooseValue::Text(s)) => normalize(s).replace(',', "").parse().ok(),
                _ => None,
            };
            record.set_metric(metric, value);
        }
        record
    }
}

/// Drop consolidated records, returning the survivors and how many were dropped
pub fn retain_outlets(records: Vec<OutletRecord>) -> (Vec<OutletRecord>, usize) {
    let before = records.len();
    let kept: Vec<OutletRecord> = records.into_iter().filter(|r| !r.is_consolidated()).collect();
    let dropped = before - kept.len();
    (kept, dropped)
}

/// A field of an [`OutletRecord`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(Option<f64>),
}

impl fmt::Display for FieldValue<'_> {
    /// Missing numbers render as an empty string
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Number(Some(n)) => write!(f, "{n}"),
            FieldValue::Number(None) => Ok(()),
        }
    }
}

impl Serialize for OutletRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(CANONICAL_FIELDS.len()))?;
        map.serialize_entry(CANONICAL_FIELDS[0], &self.outlet)?;
        map.serialize_entry(CANONICAL_FIELDS[1], &self.manager)?;
        map.serialize_entry(CANONICAL_FIELDS[2], &self.month)?;
        for (metric, value) in self.metrics() {
            map.serialize_entry(metric.label(), &value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for OutletRecord {
    /// Accepts the serialized shape, tolerating numbers sent as strings and
    /// unknown extra keys
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = BTreeMap::<String, LooseValue>::deserialize(deserializer)?;
        Ok(OutletRecord::from_fields(fields))
    }
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum LooseValue {
    Number(f64),
    Text(String),
    #[allow(dead_code)]
    Other(IgnoredAny),
}
