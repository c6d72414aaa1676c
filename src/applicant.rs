//! Loan-applicant attributes collected by the form.
//!
//! `ApplicantInput` carries the eleven fields handed to the scoring
//! collaborator. Field declaration order is the documented order of the
//! scoring contract. Bounds live here so the form widgets and the CLI
//! argument parsers enforce the same ranges.

use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

pub const AGE_MIN: u32 = 18;
pub const AGE_MAX: u32 = 80;
pub const INCOME_MAX: u64 = 1_200_000;
pub const LOAN_AMOUNT_MAX: u64 = 10_000_000;
pub const LOAN_TENURE_MIN: u32 = 1;
pub const DELINQUENCY_RATIO_MAX: u32 = 100;
pub const CREDIT_UTILIZATION_MAX: u32 = 100;
pub const OPEN_ACCOUNTS_MAX: u32 = 4;

/// Where the applicant lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
pub enum ResidenceType {
    Owned,
    Rented,
    Mortgage,
}

impl ResidenceType {
    pub fn all() -> [Self; 3] {
        [Self::Owned, Self::Rented, Self::Mortgage]
    }
}

impl fmt::Display for ResidenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Owned => "Owned",
            Self::Rented => "Rented",
            Self::Mortgage => "Mortgage",
        };
        write!(f, "{name}")
    }
}

/// What the loan is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
pub enum LoanPurpose {
    Education,
    Home,
    Auto,
    Personal,
}

impl LoanPurpose {
    pub fn all() -> [Self; 4] {
        [Self::Education, Self::Home, Self::Auto, Self::Personal]
    }
}

impl fmt::Display for LoanPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Education => "Education",
            Self::Home => "Home",
            Self::Auto => "Auto",
            Self::Personal => "Personal",
        };
        write!(f, "{name}")
    }
}

/// Whether the loan is backed by collateral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
pub enum LoanType {
    Unsecured,
    Secured,
}

impl LoanType {
    pub fn all() -> [Self; 2] {
        [Self::Unsecured, Self::Secured]
    }
}

impl fmt::Display for LoanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unsecured => "Unsecured",
            Self::Secured => "Secured",
        };
        write!(f, "{name}")
    }
}

/// One applicant's attributes, built fresh from widget state per render
/// cycle and discarded after the scoring call returns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicantInput {
    pub age: u32,
    pub income: u64,
    pub loan_amount: u64,
    pub loan_tenure_months: u32,
    pub avg_dpd_per_delinquency: u32,
    pub delinquency_ratio: u32,
    pub credit_utilization_ratio: u32,
    pub num_open_accounts: u32,
    pub residence_type: ResidenceType,
    pub loan_purpose: LoanPurpose,
    pub loan_type: LoanType,
}

impl ApplicantInput {
    /// Requested loan amount divided by annual income, or `0.0` when income
    /// is non-positive.
    pub fn loan_to_income_ratio(&self) -> f64 {
        if self.income > 0 {
            self.loan_amount as f64 / self.income as f64
        } else {
            0.0
        }
    }
}

impl Default for ApplicantInput {
    /// Initial widget values: numeric fields at their minimum, select
    /// fields at their first option.
    fn default() -> Self {
        Self {
            age: AGE_MIN,
            income: 0,
            loan_amount: 0,
            loan_tenure_months: LOAN_TENURE_MIN,
            avg_dpd_per_delinquency: 0,
            delinquency_ratio: 0,
            credit_utilization_ratio: 0,
            num_open_accounts: 0,
            residence_type: ResidenceType::Owned,
            loan_purpose: LoanPurpose::Education,
            loan_type: LoanType::Unsecured,
        }
    }
}
