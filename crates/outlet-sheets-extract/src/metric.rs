//! Financial line items and the canonical record schema

use std::fmt;

/// One of the twelve financial line items every record carries
///
/// Variants are declared in canonical output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Metric {
    DirectIncome,
    TotalRevenue,
    Cogs,
    OutletExpenses,
    Ebidta,
    FinanceCost,
    BankCharges,
    InterestOnBorrowings,
    InterestOnVehicleLoan,
    Mg,
    Pbt,
    Wastage,
}

/// Number of metrics in the vocabulary
pub const METRIC_COUNT: usize = 12;

/// Names of the three identity fields that precede the metrics
pub const IDENTITY_FIELDS: [&str; 3] = ["Outlet", "Outlet Manager", "Month"];

/// The 15 output fields, in order
pub const CANONICAL_FIELDS: [&str; 3 + METRIC_COUNT] = [
    "Outlet",
    "Outlet Manager",
    "Month",
    "Direct Income",
    "TOTAL REVENUE",
    "COGS",
    "Outlet Expenses",
    "EBIDTA",
    "Finance Cost",
    "01-Bank Charges",
    "02-Interest on Borrowings",
    "03-Interest on Vehicle Loan",
    "04-MG",
    "PBT",
    "WASTAGE",
];

impl Metric {
    /// All metrics in canonical order
    pub const ALL: [Metric; METRIC_COUNT] = [
        Metric::DirectIncome,
        Metric::TotalRevenue,
        Metric::Cogs,
        Metric::OutletExpenses,
        Metric::Ebidta,
        Metric::FinanceCost,
        Metric::BankCharges,
        Metric::InterestOnBorrowings,
        Metric::InterestOnVehicleLoan,
        Metric::Mg,
        Metric::Pbt,
        Metric::Wastage,
    ];

    /// Metrics whose presence marks a sheet as already tabular
    pub const CORE_INCOME: [Metric; 4] = [
        Metric::TotalRevenue,
        Metric::DirectIncome,
        Metric::Cogs,
        Metric::Ebidta,
    ];

    /// Metrics summed by the interest-cost report
    pub const INTEREST: [Metric; 5] = [
        Metric::BankCharges,
        Metric::InterestOnBorrowings,
        Metric::InterestOnVehicleLoan,
        Metric::Mg,
        Metric::FinanceCost,
    ];

    /// Row label as it appears in source sheets and output field name
    pub fn label(self) -> &'static str {
        CANONICAL_FIELDS[IDENTITY_FIELDS.len() + self.index()]
    }

    /// Position within [`Metric::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Match a normalized row label against the vocabulary (exact, case-sensitive)
    pub fn from_label(label: &str) -> Option<Metric> {
        Metric::ALL.into_iter().find(|m| m.label() == label)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
