pub mod balance_calculator;
pub mod payer_resolver;
pub mod settlement_planner;

pub use balance_calculator::{BalanceCalculator, BalanceError};
pub use payer_resolver::PayerResolver;
pub use settlement_planner::{SettlementPlanError, SettlementPlanner};
