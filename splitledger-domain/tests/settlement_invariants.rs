use chrono::Utc;
use proptest::prelude::*;
use splitledger_domain::{
    Expense, ExpenseId, Member, MemberId, Money, SettlementPlanner, SettlementSummary,
};
use std::collections::HashMap;

fn members(count: usize) -> Vec<Member> {
    let names = ["An", "Binh", "Chi", "Dung", "Em", "Phuc"];
    (0..count)
        .map(|idx| Member::new(MemberId(idx as u64 + 1), names[idx]))
        .collect()
}

fn expense(id: u64, amount: i64, payer_idx: usize, participant_mask: usize, count: usize) -> Expense {
    let participant_ids: Vec<MemberId> = (0..count)
        .filter(|idx| participant_mask & (1 << idx) != 0)
        .map(|idx| MemberId(idx as u64 + 1))
        .collect();

    Expense {
        id: ExpenseId(id),
        description: format!("expense {id}"),
        amount: Money::from_i64(amount),
        payer_id: Some(MemberId((payer_idx % count) as u64 + 1)),
        payer_name: None,
        participant_ids,
        created_at: Utc::now(),
    }
}

fn plan(
    member_count: usize,
    amounts: &[i64],
    payer_indexes: &[usize],
    participant_masks: &[usize],
) -> SettlementSummary {
    let members = members(member_count);
    let expenses: Vec<Expense> = amounts
        .iter()
        .enumerate()
        .map(|(idx, &amount)| {
            expense(
                idx as u64 + 1,
                amount,
                payer_indexes.get(idx).copied().unwrap_or(0),
                participant_masks.get(idx).copied().unwrap_or(0),
                member_count,
            )
        })
        .collect();

    SettlementPlanner
        .plan(&members, &expenses)
        .expect("plan failed")
}

proptest! {
    #[test]
    fn balances_sum_to_zero(
        member_count in 1usize..=6,
        amounts in prop::collection::vec(0i64..=1_000_000, 0..=20),
        payer_indexes in prop::collection::vec(0usize..=5, 0..=20),
        participant_masks in prop::collection::vec(0usize..=63, 0..=20),
    ) {
        let summary = plan(member_count, &amounts, &payer_indexes, &participant_masks);
        let total: i64 = summary.balances.iter().map(|row| row.balance.amount()).sum();
        prop_assert_eq!(total, 0);
    }

    #[test]
    fn transactions_settle_every_balance(
        member_count in 1usize..=6,
        amounts in prop::collection::vec(0i64..=1_000_000, 0..=20),
        payer_indexes in prop::collection::vec(0usize..=5, 0..=20),
        participant_masks in prop::collection::vec(0usize..=63, 0..=20),
    ) {
        let summary = plan(member_count, &amounts, &payer_indexes, &participant_masks);

        let mut remaining: HashMap<MemberId, i64> = summary
            .balances
            .iter()
            .map(|row| (row.member_id, row.balance.amount()))
            .collect();
        for transaction in &summary.transactions {
            *remaining.entry(transaction.from).or_insert(0) += transaction.amount.amount();
            *remaining.entry(transaction.to).or_insert(0) -= transaction.amount.amount();
        }

        for (member, balance) in remaining {
            prop_assert_eq!(balance, 0, "member {:?} not settled", member);
        }
    }

    #[test]
    fn transaction_count_is_bounded(
        member_count in 1usize..=6,
        amounts in prop::collection::vec(0i64..=1_000_000, 0..=20),
        payer_indexes in prop::collection::vec(0usize..=5, 0..=20),
        participant_masks in prop::collection::vec(0usize..=63, 0..=20),
    ) {
        let summary = plan(member_count, &amounts, &payer_indexes, &participant_masks);
        prop_assert!(summary.transactions.len() <= member_count.saturating_sub(1));
    }

    #[test]
    fn no_self_transactions_and_positive_amounts(
        member_count in 1usize..=6,
        amounts in prop::collection::vec(0i64..=1_000_000, 0..=20),
        payer_indexes in prop::collection::vec(0usize..=5, 0..=20),
        participant_masks in prop::collection::vec(0usize..=63, 0..=20),
    ) {
        let summary = plan(member_count, &amounts, &payer_indexes, &participant_masks);
        for transaction in &summary.transactions {
            prop_assert_ne!(transaction.from, transaction.to);
            prop_assert!(transaction.amount.amount() > 0);
        }
    }

    #[test]
    fn planning_is_deterministic(
        member_count in 1usize..=6,
        amounts in prop::collection::vec(0i64..=1_000_000, 0..=20),
        payer_indexes in prop::collection::vec(0usize..=5, 0..=20),
        participant_masks in prop::collection::vec(0usize..=63, 0..=20),
    ) {
        let first = plan(member_count, &amounts, &payer_indexes, &participant_masks);
        let second = plan(member_count, &amounts, &payer_indexes, &participant_masks);
        prop_assert_eq!(first, second);
    }
}
