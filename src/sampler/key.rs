use std::fmt::Write;

use serde::Serialize;
use smallvec::SmallVec;

use crate::party::PartyTable;

/// Structural identity of a covering set: canonical party indices, ascending,
/// each at most once.
///
/// Two different party sets never share a key, whatever their seat totals.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CoalitionKey(SmallVec<[usize; 8]>);

impl CoalitionKey {
    /// Build from arbitrary indices; sorts and removes duplicates.
    pub fn new(members: impl IntoIterator<Item = usize>) -> Self {
        let mut members: SmallVec<[usize; 8]> = members.into_iter().collect();
        members.sort_unstable();
        members.dedup();
        Self(members)
    }

    /// The empty covering set.
    pub fn empty() -> Self { Self::default() }

    #[inline] pub fn members(&self) -> &[usize] { &self.0 }

    #[inline] pub fn len(&self) -> usize { self.0.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.0.is_empty() }

    #[inline]
    pub fn contains(&self, idx: usize) -> bool { self.0.binary_search(&idx).is_ok() }

    /// Member ids in canonical order.
    pub fn ids<'t>(&self, table: &'t PartyTable) -> Vec<&'t str> {
        self.0.iter().filter_map(|&i| table.get(i).map(|p| p.id())).collect()
    }

    /// Display label: member ids joined by `-`, then the seat sum, e.g. `A-C (57)`.
    pub fn label(&self, table: &PartyTable) -> String {
        let mut out = if self.is_empty() { "none".to_string() } else { self.ids(table).join("-") };
        let _ = write!(out, " ({})", table.seats_of(&self.0));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::party::PartyRow;

    fn table() -> PartyTable {
        PartyTable::new(vec![
            PartyRow::new("A", 0.0, 0.0, 30),
            PartyRow::new("B", 1.0, 0.0, 20),
            PartyRow::new("C", 2.0, 0.0, 20),
            PartyRow::new("D", 3.0, 0.0, 30),
        ]).unwrap()
    }

    #[test]
    fn canonical_and_deduplicated() {
        let key = CoalitionKey::new([3, 0, 3, 1]);
        assert_eq!(key.members(), &[0, 1, 3]);
        assert!(key.contains(3) && !key.contains(2));
        assert_eq!(key, CoalitionKey::new([1, 3, 0]));
    }

    #[test]
    fn equal_seats_do_not_collide() {
        let t = table();
        let ab = CoalitionKey::new([0, 1]);
        let cd = CoalitionKey::new([2, 3]);
        assert_eq!(t.seats_of(ab.members()), t.seats_of(cd.members()));
        assert_ne!(ab, cd);
        assert_ne!(ab.label(&t), cd.label(&t));
    }

    #[test]
    fn labels() {
        let t = table();
        assert_eq!(CoalitionKey::new([2, 0]).label(&t), "A-C (50)");
        assert_eq!(CoalitionKey::empty().label(&t), "none (0)");
    }

    #[test]
    fn ordering_is_lexicographic() {
        let mut keys = vec![CoalitionKey::new([1]), CoalitionKey::new([0, 2]), CoalitionKey::new([0])];
        keys.sort();
        assert_eq!(keys, vec![CoalitionKey::new([0]), CoalitionKey::new([0, 2]), CoalitionKey::new([1])]);
    }
}
