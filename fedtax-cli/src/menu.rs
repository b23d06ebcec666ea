//! The interactive menu loop.
//!
//! Every entry list is displayed 1-based, and removal prompts take the
//! displayed number. Invalid input of any kind is reported and the menu
//! comes back; the loop ends on Quit or end of input.

use std::io::{BufRead, Write};

use anyhow::Result;
use rust_decimal::Decimal;
use tracing::debug;

use fedtax_core::Taxpayer;
use fedtax_core::models::{CompensationKind, FilingStatus, Job, LineItem, PayPeriod};

use crate::display::format_usd;
use crate::input;

/// One selectable menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    SetFilingStatus,
    AddJob,
    RemoveJob,
    AddDeduction,
    RemoveDeduction,
    AddRefundableCredit,
    RemoveRefundableCredit,
    AddNonRefundableCredit,
    RemoveNonRefundableCredit,
    ShowEntries,
    Calculate,
    Quit,
}

impl MenuAction {
    /// Menu order; the displayed number is the position plus one.
    pub fn all() -> [Self; 12] {
        [
            Self::SetFilingStatus,
            Self::AddJob,
            Self::RemoveJob,
            Self::AddDeduction,
            Self::RemoveDeduction,
            Self::AddRefundableCredit,
            Self::RemoveRefundableCredit,
            Self::AddNonRefundableCredit,
            Self::RemoveNonRefundableCredit,
            Self::ShowEntries,
            Self::Calculate,
            Self::Quit,
        ]
    }

    /// Label shown next to the menu number.
    pub fn label(self) -> &'static str {
        match self {
            Self::SetFilingStatus => "Set filing status",
            Self::AddJob => "Add job",
            Self::RemoveJob => "Remove job",
            Self::AddDeduction => "Add deduction",
            Self::RemoveDeduction => "Remove deduction",
            Self::AddRefundableCredit => "Add refundable credit",
            Self::RemoveRefundableCredit => "Remove refundable credit",
            Self::AddNonRefundableCredit => "Add non-refundable credit",
            Self::RemoveNonRefundableCredit => "Remove non-refundable credit",
            Self::ShowEntries => "Show current entries",
            Self::Calculate => "Calculate taxes",
            Self::Quit => "Quit",
        }
    }

    /// Resolves a typed menu number.
    pub fn parse(choice: &str) -> Option<Self> {
        let number: usize = choice.trim().parse().ok()?;
        Self::all().get(number.checked_sub(1)?).copied()
    }
}

/// Runs the menu until Quit or end of input.
pub fn run_menu<R, W>(taxpayer: &mut Taxpayer, input: &mut R, output: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "Federal Tax Estimator (2025)")?;

    loop {
        print_menu(output)?;
        let choice = match input::prompt_line(input, output, "Choose an option: ") {
            Some(choice) => choice,
            None => break,
        };

        let action = match MenuAction::parse(&choice) {
            Some(action) => action,
            None => {
                writeln!(output, "Invalid choice: {choice}")?;
                continue;
            }
        };

        debug!(?action, "menu selection");
        if action == MenuAction::Quit {
            writeln!(output, "Goodbye.")?;
            break;
        }
        dispatch(taxpayer, action, input, output)?;
    }

    Ok(())
}

fn print_menu<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output)?;
    for (number, action) in MenuAction::all().into_iter().enumerate() {
        writeln!(output, "{:>2}. {}", number + 1, action.label())?;
    }
    Ok(())
}

fn dispatch<R, W>(
    taxpayer: &mut Taxpayer,
    action: MenuAction,
    input: &mut R,
    output: &mut W,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    match action {
        MenuAction::SetFilingStatus => set_filing_status(taxpayer, input, output),
        MenuAction::AddJob => add_job(taxpayer, input, output),
        MenuAction::RemoveJob => {
            remove_entry(input, output, "job", |index| taxpayer.remove_job(index))
        }
        MenuAction::AddDeduction => {
            add_line_item(input, output, "deduction", |description, amount| {
                taxpayer.add_deduction(description, amount);
            })
        }
        MenuAction::RemoveDeduction => remove_entry(input, output, "deduction", |index| {
            taxpayer.remove_deduction(index)
        }),
        MenuAction::AddRefundableCredit => {
            add_line_item(input, output, "refundable credit", |description, amount| {
                taxpayer.add_refundable_credit(description, amount);
            })
        }
        MenuAction::RemoveRefundableCredit => {
            remove_entry(input, output, "refundable credit", |index| {
                taxpayer.remove_refundable_credit(index)
            })
        }
        MenuAction::AddNonRefundableCredit => add_line_item(
            input,
            output,
            "non-refundable credit",
            |description, amount| {
                taxpayer.add_non_refundable_credit(description, amount);
            },
        ),
        MenuAction::RemoveNonRefundableCredit => {
            remove_entry(input, output, "non-refundable credit", |index| {
                taxpayer.remove_non_refundable_credit(index)
            })
        }
        MenuAction::ShowEntries => show_entries(taxpayer, output),
        MenuAction::Calculate => show_estimate(taxpayer, output),
        MenuAction::Quit => Ok(()),
    }
}

// ─── action flows ────────────────────────────────────────────────────────────

fn set_filing_status<R, W>(taxpayer: &mut Taxpayer, input: &mut R, output: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    for status in FilingStatus::all() {
        writeln!(output, "  {} = {}", status.code(), status.label())?;
    }

    let raw = match input::prompt_line(input, output, "Filing status code: ") {
        Some(code) => code,
        None => return Ok(()),
    };

    match FilingStatus::parse(&raw.to_uppercase()) {
        Some(status) => {
            taxpayer.set_filing_status(status);
            writeln!(output, "Filing status set to {}.", status.label())?;
        }
        None => writeln!(output, "Invalid filing status code: {raw}")?,
    }
    Ok(())
}

fn add_job<R, W>(taxpayer: &mut Taxpayer, input: &mut R, output: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let description = match input::prompt_line(input, output, "Job description: ") {
        Some(text) => text,
        None => return Ok(()),
    };

    let salaried = match input::prompt_line(input, output, "Salaried? [y/n]: ") {
        Some(answer) => answer.eq_ignore_ascii_case("y"),
        None => return Ok(()),
    };
    let kind = if salaried {
        CompensationKind::Salaried
    } else {
        CompensationKind::Hourly
    };
    let amount_label = if salaried {
        "Pay per period: "
    } else {
        "Hourly rate: "
    };

    let amount = match prompt_decimal(input, output, amount_label) {
        Some(amount) => amount,
        None => {
            writeln!(output, "Invalid amount.")?;
            return Ok(());
        }
    };

    writeln!(
        output,
        "Pay periods: A = annual, M = monthly, S = semi-monthly, B = biweekly, W = weekly"
    )?;
    let raw = match input::prompt_line(input, output, "Pay period code: ") {
        Some(code) => code,
        None => return Ok(()),
    };
    let period = match PayPeriod::parse(&raw.to_uppercase()) {
        Some(period) => period,
        None => {
            writeln!(output, "Invalid pay period code: {raw}")?;
            return Ok(());
        }
    };

    let hours = if salaried {
        Job::default_hours()
    } else {
        match input::prompt_line(input, output, "Hours per period [40]: ") {
            Some(text) if text.is_empty() => Job::default_hours(),
            Some(text) => match input::parse_decimal(&text) {
                Some(hours) => hours,
                None => {
                    writeln!(output, "Invalid hours.")?;
                    return Ok(());
                }
            },
            None => return Ok(()),
        }
    };

    taxpayer.add_job(description, kind, amount, period, hours);
    writeln!(output, "Added job.")?;
    Ok(())
}

fn add_line_item<R, W, F>(input: &mut R, output: &mut W, noun: &str, mut add: F) -> Result<()>
where
    R: BufRead,
    W: Write,
    F: FnMut(String, Decimal),
{
    let description = match input::prompt_line(input, output, "Description: ") {
        Some(text) => text,
        None => return Ok(()),
    };

    let amount = match prompt_decimal(input, output, "Amount: ") {
        Some(amount) => amount,
        None => {
            writeln!(output, "Invalid amount.")?;
            return Ok(());
        }
    };

    add(description, amount);
    writeln!(output, "Added {noun}.")?;
    Ok(())
}

fn remove_entry<R, W, F>(input: &mut R, output: &mut W, noun: &str, mut remove: F) -> Result<()>
where
    R: BufRead,
    W: Write,
    F: FnMut(usize) -> bool,
{
    let prompt = format!("Number of the {noun} to remove: ");
    let text = match input::prompt_line(input, output, &prompt) {
        Some(text) => text,
        None => return Ok(()),
    };

    let removed = parse_entry_number(&text).is_some_and(|index| remove(index));
    if removed {
        writeln!(output, "Removed {noun}.")?;
    } else {
        writeln!(output, "No {noun} at that position.")?;
    }
    Ok(())
}

fn show_entries<W: Write>(taxpayer: &Taxpayer, output: &mut W) -> Result<()> {
    let status = taxpayer
        .filing_status()
        .map_or("not set", |status| status.label());
    writeln!(output, "Filing status: {status}")?;
    writeln!(
        output,
        "Standard deduction: {}",
        format_usd(taxpayer.standard_deduction_amount())
    )?;

    writeln!(output, "Jobs:")?;
    if taxpayer.jobs().is_empty() {
        writeln!(output, "  (none)")?;
    }
    for (number, job) in taxpayer.jobs().iter().enumerate() {
        writeln!(output, "  {}. {}", number + 1, describe_job(job))?;
    }

    print_line_items(output, "Deductions", taxpayer.deductions())?;
    print_line_items(output, "Refundable credits", taxpayer.refundable_credits())?;
    print_line_items(
        output,
        "Non-refundable credits",
        taxpayer.non_refundable_credits(),
    )?;

    if taxpayer.standard_deduction_added() {
        writeln!(
            output,
            "Note: an entry looks like a standard deduction, which is already applied."
        )?;
    }
    Ok(())
}

fn show_estimate<W: Write>(taxpayer: &Taxpayer, output: &mut W) -> Result<()> {
    if taxpayer.filing_status().is_none() {
        writeln!(output, "No filing status set; the bracket tax will be zero.")?;
    }

    let summary = taxpayer.calculate();

    writeln!(output, "Gross income:       {:>15}", format_usd(summary.gross_income))?;
    writeln!(output, "Taxable income:     {:>15}", format_usd(summary.taxable_income))?;
    writeln!(output, "FICA tax:           {:>15}", format_usd(summary.fica_tax))?;
    writeln!(output, "Income tax:         {:>15}", format_usd(summary.income_tax))?;
    writeln!(output, "Refundable credits: {:>15}", format_usd(summary.refundable_credits))?;
    writeln!(output, "Total tax:          {:>15}", format_usd(summary.total_tax))?;
    Ok(())
}

// ─── helpers ─────────────────────────────────────────────────────────────────

fn prompt_decimal<R, W>(input: &mut R, output: &mut W, text: &str) -> Option<Decimal>
where
    R: BufRead,
    W: Write,
{
    input::parse_decimal(&input::prompt_line(input, output, text)?)
}

/// Entry lists are shown 1-based; convert back to a list index.
fn parse_entry_number(text: &str) -> Option<usize> {
    let number: usize = text.trim().parse().ok()?;
    number.checked_sub(1)
}

fn describe_job(job: &Job) -> String {
    match job.kind {
        CompensationKind::Salaried => format!(
            "{}: salaried, {} x {}/yr",
            job.description,
            format_usd(job.amount),
            job.periods_per_year
        ),
        CompensationKind::Hourly => format!(
            "{}: hourly, {} x {} h x {}/yr",
            job.description,
            format_usd(job.amount),
            job.hours_per_period,
            job.periods_per_year
        ),
    }
}

fn print_line_items<W: Write>(output: &mut W, heading: &str, items: &[LineItem]) -> Result<()> {
    writeln!(output, "{heading}:")?;
    if items.is_empty() {
        writeln!(output, "  (none)")?;
        return Ok(());
    }
    for (number, item) in items.iter().enumerate() {
        writeln!(
            output,
            "  {}. {}: {}",
            number + 1,
            item.description,
            format_usd(item.amount)
        )?;
    }
    Ok(())
}
