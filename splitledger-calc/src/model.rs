/// A member's signed balance in minor currency units.
///
/// Positive means the member is owed money, negative means they owe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonBalance<Id> {
    pub id: Id,
    pub balance: i64,
}

/// A recommended transfer from a debtor to a creditor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payment<Id> {
    pub from: Id,
    pub to: Id,
    pub amount: i64,
}
