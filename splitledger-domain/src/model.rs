use std::{
    fmt,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MemberId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExpenseId(pub u64);

/// An amount in minor currency units (e.g. cents, or whole units for a
/// zero-decimal currency). All stored money is integral; fractional
/// intermediates live in `Decimal` and are rounded back via
/// [`Money::from_decimal_rounded`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Self = Self(0);

    pub fn from_i64(value: i64) -> Self {
        Self(value)
    }

    /// Rounds a decimal amount to minor units, half away from zero.
    /// Returns `None` when the result does not fit in `i64`.
    pub fn from_decimal_rounded(value: Decimal) -> Option<Self> {
        value
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
            .map(Self)
    }

    pub fn amount(self) -> i64 {
        self.0
    }

    pub fn as_decimal(self) -> Decimal {
        Decimal::from(self.0)
    }

    pub fn abs(self) -> i64 {
        self.0.abs()
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn signum(self) -> i64 {
        self.0.signum()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
}

impl Member {
    pub fn new(id: MemberId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A recorded shared expense, paid by one member and split evenly among
/// its participants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expense {
    pub id: ExpenseId,
    pub description: String,
    pub amount: Money,
    /// Paying member, when the record carries a stable id.
    pub payer_id: Option<MemberId>,
    /// Display name of the payer; only consulted for legacy/seed records
    /// without a valid `payer_id`.
    pub payer_name: Option<String>,
    /// Members sharing this cost. An empty or fully stale set falls back
    /// to the whole current membership at calculation time.
    pub participant_ids: Vec<MemberId>,
    pub created_at: DateTime<Utc>,
}

/// A member's derived settlement position. Recomputed from the expense
/// list on every request, never stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberBalance {
    pub member_id: MemberId,
    pub member_name: String,
    /// Sum of amounts this member fronted as payer.
    pub total_paid: Money,
    /// This member's share of the expenses they participated in.
    pub fair_share: Money,
    /// `total_paid - fair_share`: positive is owed money, negative owes.
    pub balance: Money,
}

/// A recommended settlement payment between two members.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    pub from: MemberId,
    pub from_name: String,
    pub to: MemberId,
    pub to_name: String,
    pub amount: Money,
}

/// The full settlement picture for a group: per-member balances plus the
/// transfer plan that brings them all to zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettlementSummary {
    pub total_expenses: Money,
    pub member_count: usize,
    /// Group-level convenience statistic: total expenses split evenly
    /// across all members, regardless of per-expense participant sets.
    pub fair_share_per_person: Money,
    pub balances: Vec<MemberBalance>,
    pub transactions: Vec<Transaction>,
}
