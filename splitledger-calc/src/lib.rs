#![warn(clippy::uninlined_format_args)]

//! Greedy settlement-transfer construction.
//!
//! Converts a zero-sum vector of signed balances into a small set of
//! debtor-to-creditor payments. The matching is the standard greedy
//! largest-debtor-to-largest-creditor sweep: deterministic, O(n log n),
//! and bounded by n - 1 payments. It is an approximation — true
//! minimum-cardinality settlement is NP-hard for general amounts — and
//! that trade-off is deliberate.

mod model;

use thiserror::Error;

pub use model::{Payment, PersonBalance};

#[derive(Debug, Error)]
pub enum SettlementError {
    #[error("Sum of balances must be zero (found {0})")]
    ImbalancedTotal(i64),
}

/// Builds the greedy transfer plan for a zero-sum balance vector.
///
/// Debtors and creditors are each sorted descending by magnitude (stable,
/// so equal magnitudes keep input order) and matched with a two-pointer
/// sweep transferring `min(debtor_remaining, creditor_remaining)` at each
/// step. Every emitted payment has a strictly positive amount and distinct
/// endpoints; after the sweep both sides are fully settled.
///
/// An input whose balances do not sum to exactly zero is an upstream
/// contract violation and is rejected rather than partially settled.
pub fn minimize_transactions<Id>(
    balances: impl IntoIterator<Item = PersonBalance<Id>>,
) -> Result<Vec<Payment<Id>>, SettlementError>
where
    Id: Copy + PartialEq,
{
    let balances: Vec<PersonBalance<Id>> = balances.into_iter().collect();
    let total: i64 = balances.iter().map(|person| person.balance).sum();
    if total != 0 {
        return Err(SettlementError::ImbalancedTotal(total));
    }

    let mut debtors = Vec::new();
    let mut creditors = Vec::new();
    for person in &balances {
        if person.balance < 0 {
            debtors.push((person.id, -person.balance));
        } else if person.balance > 0 {
            creditors.push((person.id, person.balance));
        }
    }

    if debtors.is_empty() || creditors.is_empty() {
        return Ok(Vec::new());
    }

    // Stable sort: ties keep input order for reproducible plans.
    debtors.sort_by_key(|&(_, remaining)| std::cmp::Reverse(remaining));
    creditors.sort_by_key(|&(_, remaining)| std::cmp::Reverse(remaining));

    let mut payments = Vec::with_capacity(debtors.len() + creditors.len() - 1);
    let mut debtor_idx = 0;
    let mut creditor_idx = 0;

    while debtor_idx < debtors.len() && creditor_idx < creditors.len() {
        let (debtor, debtor_remaining) = debtors[debtor_idx];
        let (creditor, creditor_remaining) = creditors[creditor_idx];

        // Both remainders are positive at this point, so the transfer is
        // always strictly positive; zero-amount payments cannot occur.
        let amount = debtor_remaining.min(creditor_remaining);
        debug_assert!(amount > 0);

        payments.push(Payment {
            from: debtor,
            to: creditor,
            amount,
        });

        debtors[debtor_idx].1 -= amount;
        creditors[creditor_idx].1 -= amount;

        if debtors[debtor_idx].1 == 0 {
            debtor_idx += 1;
        }
        if creditors[creditor_idx].1 == 0 {
            creditor_idx += 1;
        }
    }

    debug_assert!(debtors.iter().all(|&(_, remaining)| remaining == 0));
    debug_assert!(creditors.iter().all(|&(_, remaining)| remaining == 0));

    Ok(payments)
}
