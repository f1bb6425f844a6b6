//! Interest-cost analysis over extracted records
//!
//! Sums the five interest-like line items per outlet and across the
//! portfolio, and ranks outlets by interest as a share of revenue.

use std::collections::BTreeMap;

use serde::Serialize;

use outlet_sheets_extract::{Metric, OutletRecord};

/// Portfolio-wide totals of one interest metric
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricTotals {
    pub total_amount: f64,
    /// Records with a positive amount
    pub outlet_count: usize,
    /// Total divided by the number of records, not by `outlet_count`
    pub average_amount: f64,
}

/// Interest position of one outlet-month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutletInterest {
    pub outlet: String,
    pub manager: String,
    pub total_interest: f64,
    pub revenue: f64,
    /// Interest as a percentage of revenue; zero when there is no revenue
    pub interest_rate: f64,
    pub interest_breakdown: BTreeMap<&'static str, f64>,
}

/// Interest analysis of a set of records
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterestReport {
    pub total_interest_costs: f64,
    /// Only metrics with a positive portfolio total
    pub interest_breakdown: BTreeMap<&'static str, MetricTotals>,
    /// Lowest interest rate first
    pub outlet_analysis: Vec<OutletInterest>,
    pub average_interest_rate: f64,
}

impl InterestReport {
    /// Analyse `records`; missing amounts count as zero
    pub fn from_records(records: &[OutletRecord]) -> Self {
        let amount = |record: &OutletRecord, metric: Metric| record.metric(metric).unwrap_or(0.0);

        let mut interest_breakdown = BTreeMap::new();
        for metric in Metric::INTEREST {
            let total_amount: f64 = records.iter().map(|r| amount(r, metric)).sum();
            if total_amount > 0.0 {
                interest_breakdown.insert(
                    metric.label(),
                    MetricTotals {
                        total_amount,
                        outlet_count: records.iter().filter(|r| amount(r, metric) > 0.0).count(),
                        average_amount: total_amount / records.len() as f64,
                    },
                );
            }
        }
        let total_interest_costs = interest_breakdown.values().map(|t| t.total_amount).sum();

        let mut outlet_analysis: Vec<OutletInterest> = records
            .iter()
            .map(|record| {
                let interest_breakdown: BTreeMap<&'static str, f64> = Metric::INTEREST
                    .into_iter()
                    .map(|m| (m.label(), amount(record, m)))
                    .collect();
                let total_interest = interest_breakdown.values().sum();
                let revenue = amount(record, Metric::TotalRevenue);
                let interest_rate = if revenue > 0.0 {
                    total_interest / revenue * 100.0
                } else {
                    0.0
                };
                OutletInterest {
                    outlet: record.outlet.clone(),
                    manager: record.manager.clone(),
                    total_interest,
                    revenue,
                    interest_rate,
                    interest_breakdown,
                }
            })
            .collect();
        outlet_analysis.sort_by(|a, b| a.interest_rate.total_cmp(&b.interest_rate));

        let average_interest_rate = if outlet_analysis.is_empty() {
            0.0
        } else {
            outlet_analysis.iter().map(|o| o.interest_rate).sum::<f64>() / outlet_analysis.len() as f64
        };

        log::debug!(
            "interest analysis over {} record(s): total {}",
            records.len(),
            total_interest_costs
        );

        Self {
            total_interest_costs,
            interest_breakdown,
            outlet_analysis,
            average_interest_rate,
        }
    }
}
