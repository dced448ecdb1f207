//! Per-member balance derivation with zero-sum rounding correction.
//!
//! Balances are recomputed from scratch on every call:
//! 1. Each expense's participant set is intersected with the current
//!    membership; a set left empty by stale references falls back to the
//!    whole group.
//! 2. Fair shares accumulate in `Decimal` and are rounded to minor units
//!    (half away from zero) only once per member.
//! 3. A final residual pass restores exact zero-sum by adjusting the
//!    first member in list order with a non-zero balance.

use crate::{
    model::{Expense, Member, MemberBalance, MemberId, Money},
    services::PayerResolver,
};
use fxhash::{FxHashMap, FxHashSet};
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BalanceError {
    /// A rounded balance fell outside the `i64` minor-unit range.
    #[error("balance does not fit in minor currency units")]
    AmountOutOfRange,
}

/// Balance derivation service.
pub struct BalanceCalculator;

impl BalanceCalculator {
    /// Derives each member's settlement position, in member-list order.
    ///
    /// An empty member list yields an empty result. An expense whose payer
    /// cannot be resolved still counts toward its participants' fair
    /// shares but contributes nothing to `total_paid`; the event is
    /// surfaced as a warning, not an error.
    ///
    /// The returned balances always sum to exactly zero.
    pub fn compute(
        &self,
        members: &[Member],
        expenses: &[Expense],
    ) -> Result<Vec<MemberBalance>, BalanceError> {
        if members.is_empty() {
            return Ok(Vec::new());
        }

        let resolver = PayerResolver::new(members);
        let index: FxHashMap<MemberId, usize> = members
            .iter()
            .enumerate()
            .map(|(idx, member)| (member.id, idx))
            .collect();

        let mut fair_shares = vec![Decimal::ZERO; members.len()];
        let mut total_paid = vec![Money::ZERO; members.len()];

        for expense in expenses {
            let participants = self.resolve_participants(expense, &index);

            let share = expense.amount.as_decimal() / Decimal::from(participants.len() as u64);
            for &participant_idx in &participants {
                fair_shares[participant_idx] += share;
            }

            match resolver.resolve(expense.payer_id, expense.payer_name.as_deref()) {
                Some(payer) => {
                    if let Some(&payer_idx) = index.get(&payer) {
                        total_paid[payer_idx] += expense.amount;
                    }
                }
                None => {
                    tracing::warn!(
                        expense_id = expense.id.0,
                        description = %expense.description,
                        amount = %expense.amount,
                        "payer could not be resolved; paid contribution skipped"
                    );
                }
            }
        }

        let mut balances = Vec::with_capacity(members.len());
        for (idx, member) in members.iter().enumerate() {
            let fair_share = Money::from_decimal_rounded(fair_shares[idx])
                .ok_or(BalanceError::AmountOutOfRange)?;
            balances.push(MemberBalance {
                member_id: member.id,
                member_name: member.name.clone(),
                total_paid: total_paid[idx],
                fair_share,
                balance: total_paid[idx] - fair_share,
            });
        }

        self.correct_residual(&mut balances);
        Ok(balances)
    }

    /// Intersects the recorded participant set with current members,
    /// preserving recorded order and dropping duplicates. Falls back to
    /// the full membership when nothing survives.
    fn resolve_participants(
        &self,
        expense: &Expense,
        index: &FxHashMap<MemberId, usize>,
    ) -> Vec<usize> {
        let mut seen = FxHashSet::default();
        let participants: Vec<usize> = expense
            .participant_ids
            .iter()
            .filter_map(|id| index.get(id).copied())
            .filter(|&idx| seen.insert(idx))
            .collect();

        if participants.is_empty() {
            tracing::warn!(
                expense_id = expense.id.0,
                recorded = expense.participant_ids.len(),
                "no recorded participant matches current members; splitting across the whole group"
            );
            return (0..index.len()).collect();
        }
        participants
    }

    /// Restores exact zero-sum after per-member rounding by adjusting the
    /// first member in list order with a non-zero balance. First-in-order
    /// is the fixed tie-break; changing it would change emitted plans.
    fn correct_residual(&self, balances: &mut [MemberBalance]) {
        let residual: i64 = balances.iter().map(|row| row.balance.amount()).sum();
        if residual == 0 {
            return;
        }

        let target = balances
            .iter()
            .position(|row| !row.balance.is_zero())
            .unwrap_or(0);
        tracing::debug!(
            residual,
            member_id = balances[target].member_id.0,
            "absorbing rounding residual"
        );
        balances[target].balance -= Money::from_i64(residual);
    }
}
