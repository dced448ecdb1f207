use crate::model::{Member, MemberId};
use fxhash::{FxHashMap, FxHashSet};

/// Two-stage payer resolution: a recorded id that matches a current
/// member wins; otherwise the display name is tried, for legacy/seed
/// expense records that predate stable member ids.
pub struct PayerResolver<'a> {
    ids: FxHashSet<MemberId>,
    by_name: FxHashMap<&'a str, MemberId>,
}

impl<'a> PayerResolver<'a> {
    pub fn new(members: &'a [Member]) -> Self {
        let ids: FxHashSet<MemberId> = members.iter().map(|member| member.id).collect();
        let mut by_name = FxHashMap::default();
        for member in members {
            // First member in list order wins on duplicate names.
            by_name.entry(member.name.as_str()).or_insert(member.id);
        }
        Self { ids, by_name }
    }

    pub fn resolve(&self, payer_id: Option<MemberId>, payer_name: Option<&str>) -> Option<MemberId> {
        if let Some(id) = payer_id {
            if self.ids.contains(&id) {
                return Some(id);
            }
        }
        payer_name.and_then(|name| self.by_name.get(name).copied())
    }
}
