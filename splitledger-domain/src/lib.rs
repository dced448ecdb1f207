#![warn(clippy::uninlined_format_args)]

pub mod model;
pub mod services;

pub use model::{
    Expense, ExpenseId, Member, MemberBalance, MemberId, Money, SettlementSummary, Transaction,
};
pub use services::{
    BalanceCalculator, BalanceError, PayerResolver, SettlementPlanError, SettlementPlanner,
};
