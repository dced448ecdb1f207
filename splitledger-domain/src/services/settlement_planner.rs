use crate::{
    model::{Expense, Member, Money, SettlementSummary, Transaction},
    services::{BalanceCalculator, BalanceError},
};
use rust_decimal::Decimal;
use splitledger_calc::{PersonBalance, SettlementError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettlementPlanError {
    #[error(transparent)]
    Balance(#[from] BalanceError),
    #[error(transparent)]
    Settlement(#[from] SettlementError),
}

/// Builds the full settlement picture for a group: balances, the greedy
/// transfer plan and the group-level summary statistics.
pub struct SettlementPlanner;

impl SettlementPlanner {
    /// Derives balances from the expense list and converts them into a
    /// transfer plan. Pure and stateless; identical inputs always yield
    /// the identical summary.
    pub fn plan(
        &self,
        members: &[Member],
        expenses: &[Expense],
    ) -> Result<SettlementSummary, SettlementPlanError> {
        let balances = BalanceCalculator.compute(members, expenses)?;

        let total_expenses = expenses
            .iter()
            .fold(Money::ZERO, |acc, expense| acc + expense.amount);
        // Group-level statistic only: assumes an even split across all
        // members even when per-expense participant sets differ.
        let fair_share_per_person = if members.is_empty() {
            Money::ZERO
        } else {
            let share = total_expenses.as_decimal() / Decimal::from(members.len() as u64);
            Money::from_decimal_rounded(share).ok_or(BalanceError::AmountOutOfRange)?
        };

        let payments = splitledger_calc::minimize_transactions(balances.iter().map(|row| {
            PersonBalance {
                id: row.member_id,
                balance: row.balance.amount(),
            }
        }))?;

        let name_of = |id| {
            members
                .iter()
                .find(|member| member.id == id)
                .map(|member| member.name.clone())
                .unwrap_or_default()
        };
        let transactions = payments
            .into_iter()
            .map(|payment| Transaction {
                from: payment.from,
                from_name: name_of(payment.from),
                to: payment.to,
                to_name: name_of(payment.to),
                amount: Money::from_i64(payment.amount),
            })
            .collect();

        Ok(SettlementSummary {
            total_expenses,
            member_count: members.len(),
            fair_share_per_person,
            balances,
            transactions,
        })
    }
}
