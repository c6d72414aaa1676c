//! Application state for the scoring form.
//!
//! Two states drive the result panel: editing with no result shown, and
//! a shown result after a successful scoring call. Any field edit clears
//! the result; re-triggering runs a fresh scoring call.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::applicant::{
    self, ApplicantInput, LoanPurpose, LoanType, ResidenceType,
};
use crate::scoring::{Scorer, ScoringResult};

use super::fields::{NumericField, SelectField};

/// Number of focusable widgets, in scoring-contract order.
pub const FIELD_COUNT: usize = 11;

/// One rendered cell of the form grid.
#[derive(Debug, Clone)]
pub struct FormCell {
    pub label: &'static str,
    pub value: String,
    pub focused: bool,
}

/// Main application state.
pub struct FormApp {
    age: NumericField,
    income: NumericField,
    loan_amount: NumericField,
    loan_tenure_months: NumericField,
    avg_dpd_per_delinquency: NumericField,
    delinquency_ratio: NumericField,
    credit_utilization_ratio: NumericField,
    num_open_accounts: NumericField,
    residence_type: SelectField<ResidenceType>,
    loan_purpose: SelectField<LoanPurpose>,
    loan_type: SelectField<LoanType>,
    /// Index of the focused widget (scoring-contract order).
    focus: usize,
    result: Option<ScoringResult>,
    scorer: Box<dyn Scorer>,
}

impl FormApp {
    pub fn new(scorer: Box<dyn Scorer>) -> Self {
        Self {
            age: NumericField::new(
                "Age",
                u64::from(applicant::AGE_MIN),
                u64::from(applicant::AGE_MAX),
            ),
            income: NumericField::new("Income", 0, applicant::INCOME_MAX),
            loan_amount: NumericField::new("Loan Amount", 0, applicant::LOAN_AMOUNT_MAX),
            loan_tenure_months: NumericField::new(
                "Loan Tenure (months)",
                u64::from(applicant::LOAN_TENURE_MIN),
                u64::from(u32::MAX),
            ),
            avg_dpd_per_delinquency: NumericField::new("Avg DPD", 0, u64::from(u32::MAX)),
            delinquency_ratio: NumericField::new(
                "Delinquency Ratio",
                0,
                u64::from(applicant::DELINQUENCY_RATIO_MAX),
            ),
            credit_utilization_ratio: NumericField::new(
                "Credit Utilization Ratio",
                0,
                u64::from(applicant::CREDIT_UTILIZATION_MAX),
            ),
            num_open_accounts: NumericField::new(
                "Open Loan Accounts",
                0,
                u64::from(applicant::OPEN_ACCOUNTS_MAX),
            ),
            residence_type: SelectField::new("Residence Type", ResidenceType::all()),
            loan_purpose: SelectField::new("Loan Purpose", LoanPurpose::all()),
            loan_type: SelectField::new("Loan Type", LoanType::all()),
            focus: 0,
            result: None,
            scorer,
        }
    }

    /// Handle keyboard input and return true if the form should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
            KeyCode::Tab => self.focus_next(),
            KeyCode::BackTab => self.focus_prev(),
            KeyCode::Enter => self.calculate_risk()?,
            KeyCode::Up | KeyCode::Char('+') => self.adjust_focused(true),
            KeyCode::Down | KeyCode::Char('-') => self.adjust_focused(false),
            KeyCode::Left => self.cycle_focused(false),
            KeyCode::Right | KeyCode::Char(' ') => self.cycle_focused(true),
            KeyCode::Backspace => self.erase_focused(),
            KeyCode::Char(c) if c.is_ascii_digit() => self.type_digit(c),
            _ => {}
        }
        Ok(false)
    }

    /// Current applicant values, in the documented scoring order.
    pub fn collect(&self) -> ApplicantInput {
        ApplicantInput {
            age: self.age.value() as u32,
            income: self.income.value(),
            loan_amount: self.loan_amount.value(),
            loan_tenure_months: self.loan_tenure_months.value() as u32,
            avg_dpd_per_delinquency: self.avg_dpd_per_delinquency.value() as u32,
            delinquency_ratio: self.delinquency_ratio.value() as u32,
            credit_utilization_ratio: self.credit_utilization_ratio.value() as u32,
            num_open_accounts: self.num_open_accounts.value() as u32,
            residence_type: self.residence_type.value(),
            loan_purpose: self.loan_purpose.value(),
            loan_type: self.loan_type.value(),
        }
    }

    /// Derived ratio over the committed widget values.
    pub fn loan_to_income_ratio(&self) -> f64 {
        self.collect().loan_to_income_ratio()
    }

    pub fn result(&self) -> Option<&ScoringResult> {
        self.result.as_ref()
    }

    /// The form grid as rendered: four rows of three cells. The ratio
    /// cell is display-only and never focused.
    pub fn grid(&self) -> [[FormCell; 3]; 4] {
        let ratio_cell = FormCell {
            label: "Loan to Income Ratio",
            value: format!("{:.2}", self.loan_to_income_ratio()),
            focused: false,
        };
        [
            [
                self.numeric_cell(&self.age, 0),
                self.numeric_cell(&self.income, 1),
                self.numeric_cell(&self.loan_amount, 2),
            ],
            [
                ratio_cell,
                self.numeric_cell(&self.loan_tenure_months, 3),
                self.numeric_cell(&self.avg_dpd_per_delinquency, 4),
            ],
            [
                self.numeric_cell(&self.delinquency_ratio, 5),
                self.numeric_cell(&self.credit_utilization_ratio, 6),
                self.numeric_cell(&self.num_open_accounts, 7),
            ],
            [
                FormCell {
                    label: self.residence_type.label(),
                    value: self.residence_type.display_value(),
                    focused: self.focus == 8,
                },
                FormCell {
                    label: self.loan_purpose.label(),
                    value: self.loan_purpose.display_value(),
                    focused: self.focus == 9,
                },
                FormCell {
                    label: self.loan_type.label(),
                    value: self.loan_type.display_value(),
                    focused: self.focus == 10,
                },
            ],
        ]
    }

    fn numeric_cell(&self, field: &NumericField, index: usize) -> FormCell {
        FormCell {
            label: field.label(),
            value: field.display_value(),
            focused: self.focus == index,
        }
    }

    fn focus_next(&mut self) {
        self.commit_focused();
        self.focus = (self.focus + 1) % FIELD_COUNT;
    }

    fn focus_prev(&mut self) {
        self.commit_focused();
        self.focus = (self.focus + FIELD_COUNT - 1) % FIELD_COUNT;
    }

    /// Step the focused numeric field, or cycle the focused select.
    fn adjust_focused(&mut self, up: bool) {
        if let Some(field) = self.focused_numeric() {
            if up {
                field.step_up();
            } else {
                field.step_down();
            }
            self.result = None;
        } else {
            self.cycle_focused(up);
        }
    }

    fn cycle_focused(&mut self, forward: bool) {
        let cycled = match self.focus {
            8 => {
                cycle(&mut self.residence_type, forward);
                true
            }
            9 => {
                cycle(&mut self.loan_purpose, forward);
                true
            }
            10 => {
                cycle(&mut self.loan_type, forward);
                true
            }
            _ => false,
        };
        if cycled {
            self.result = None;
        }
    }

    fn type_digit(&mut self, digit: char) {
        if let Some(field) = self.focused_numeric() {
            field.insert_digit(digit);
            self.result = None;
        }
    }

    fn erase_focused(&mut self) {
        if let Some(field) = self.focused_numeric() {
            field.backspace();
            self.result = None;
        }
    }

    fn commit_focused(&mut self) {
        if let Some(field) = self.focused_numeric() {
            field.commit();
        }
    }

    fn focused_numeric(&mut self) -> Option<&mut NumericField> {
        match self.focus {
            0 => Some(&mut self.age),
            1 => Some(&mut self.income),
            2 => Some(&mut self.loan_amount),
            3 => Some(&mut self.loan_tenure_months),
            4 => Some(&mut self.avg_dpd_per_delinquency),
            5 => Some(&mut self.delinquency_ratio),
            6 => Some(&mut self.credit_utilization_ratio),
            7 => Some(&mut self.num_open_accounts),
            _ => None,
        }
    }

    /// Run the scoring collaborator over the current field values.
    ///
    /// Blocks until the collaborator returns; a fault propagates out of
    /// the event loop uncaught.
    fn calculate_risk(&mut self) -> Result<()> {
        self.commit_focused();
        let input = self.collect();
        let result = self.scorer.predict(&input)?;
        self.result = Some(result);
        Ok(())
    }
}

fn cycle<T: Copy + std::fmt::Display>(field: &mut SelectField<T>, forward: bool) {
    if forward {
        field.select_next();
    } else {
        field.select_prev();
    }
}
