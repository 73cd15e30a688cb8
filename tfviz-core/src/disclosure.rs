//! Disclosure group — expansion state for a set of related panels.
//!
//! One controller covers both accordion flavours:
//! - `Exclusive`: at most one member expanded. With `allow_collapse_last`
//!   the open member can be closed again; without it the open member is sticky.
//! - `Independent`: any subset expanded; activation toggles one member.
//!
//! Membership is explicit. Members are passed at construction or added with
//! [`DisclosureGroup::register`]; a member's expansion is always derived from
//! the group, never stored on the member.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::DisclosureError;

/// Expansion policy of a group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisclosureMode {
    /// At most one member expanded at a time.
    #[default]
    Exclusive,
    /// Any subset of members expanded.
    Independent,
}

impl DisclosureMode {
    pub fn label(self) -> &'static str {
        match self {
            DisclosureMode::Exclusive => "exclusive",
            DisclosureMode::Independent => "independent",
        }
    }
}

/// Mode plus collapse rule. `allow_collapse_last` only matters in exclusive mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisclosurePolicy {
    pub mode: DisclosureMode,
    #[serde(default)]
    pub allow_collapse_last: bool,
}

impl DisclosurePolicy {
    /// Exclusive, open member is sticky.
    pub fn exclusive() -> Self {
        Self {
            mode: DisclosureMode::Exclusive,
            allow_collapse_last: false,
        }
    }

    /// Exclusive, open member collapses when activated again.
    pub fn exclusive_collapsible() -> Self {
        Self {
            mode: DisclosureMode::Exclusive,
            allow_collapse_last: true,
        }
    }

    pub fn independent() -> Self {
        Self {
            mode: DisclosureMode::Independent,
            allow_collapse_last: false,
        }
    }
}

/// Expansion state for a set of members identified by caller-supplied keys.
#[derive(Debug, Clone)]
pub struct DisclosureGroup<K> {
    policy: DisclosurePolicy,
    /// Registration order; keys are unique.
    members: Vec<K>,
    /// Always a subset of `members`; at most one entry in exclusive mode.
    expanded: HashSet<K>,
}

impl<K> DisclosureGroup<K>
where
    K: Clone + Eq + Hash + fmt::Display,
{
    /// Build a group from its members and initial expansion.
    ///
    /// Fails on duplicate members, on initial keys that are not members, and on
    /// more than one initial key in exclusive mode.
    pub fn new(
        policy: DisclosurePolicy,
        members: impl IntoIterator<Item = K>,
        initial: impl IntoIterator<Item = K>,
    ) -> Result<Self, DisclosureError> {
        let mut group = Self::empty(policy);
        for key in members {
            group.register(key)?;
        }

        for key in initial {
            if !group.is_member(&key) {
                return Err(DisclosureError::InitialNotMember(key.to_string()));
            }
            group.expanded.insert(key);
        }

        if policy.mode == DisclosureMode::Exclusive && group.expanded.len() > 1 {
            return Err(DisclosureError::TooManyInitial(group.expanded.len()));
        }

        Ok(group)
    }

    /// A group with no members. Valid; every query reports "not expanded".
    pub fn empty(policy: DisclosurePolicy) -> Self {
        Self {
            policy,
            members: Vec::new(),
            expanded: HashSet::new(),
        }
    }

    pub fn policy(&self) -> DisclosurePolicy {
        self.policy
    }

    pub fn mode(&self) -> DisclosureMode {
        self.policy.mode
    }

    /// Add a member, collapsed.
    pub fn register(&mut self, key: K) -> Result<(), DisclosureError> {
        if self.is_member(&key) {
            return Err(DisclosureError::DuplicateMember(key.to_string()));
        }
        self.members.push(key);
        Ok(())
    }

    /// Remove a member and drop it from the expanded set. Returns false if it
    /// was not registered.
    pub fn unregister(&mut self, key: &K) -> bool {
        let before = self.members.len();
        self.members.retain(|k| k != key);
        self.expanded.remove(key);
        self.members.len() != before
    }

    /// Signal that member `key` was interacted with.
    ///
    /// Returns whether the expanded set changed. Unknown keys are rejected and
    /// leave the state untouched.
    pub fn activate(&mut self, key: &K) -> Result<bool, DisclosureError> {
        if !self.is_member(key) {
            return Err(DisclosureError::UnknownMember(key.to_string()));
        }

        let changed = match self.policy.mode {
            DisclosureMode::Exclusive => {
                if self.expanded.contains(key) {
                    if self.policy.allow_collapse_last {
                        self.expanded.clear();
                        true
                    } else {
                        false
                    }
                } else {
                    self.expanded.clear();
                    self.expanded.insert(key.clone());
                    true
                }
            }
            DisclosureMode::Independent => {
                if !self.expanded.remove(key) {
                    self.expanded.insert(key.clone());
                }
                true
            }
        };

        tracing::debug!(
            member = %key,
            mode = self.policy.mode.label(),
            expanded = self.expanded.len(),
            changed,
            "disclosure activate"
        );
        Ok(changed)
    }

    pub fn is_expanded(&self, key: &K) -> bool {
        self.expanded.contains(key)
    }

    pub fn is_member(&self, key: &K) -> bool {
        self.members.contains(key)
    }

    /// Members in registration order.
    pub fn members(&self) -> &[K] {
        &self.members
    }

    /// Expanded members in registration order.
    pub fn expanded(&self) -> impl Iterator<Item = &K> + '_ {
        self.members.iter().filter(|k| self.expanded.contains(*k))
    }

    pub fn expanded_count(&self) -> usize {
        self.expanded.len()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Explicit `{is_expanded, toggle}` handle for one member, or `None` if the
    /// key is not registered.
    pub fn member(&mut self, key: &K) -> Option<DisclosureMember<'_, K>> {
        if !self.is_member(key) {
            return None;
        }
        Some(DisclosureMember {
            key: key.clone(),
            group: self,
        })
    }
}

/// A registered member's view of its group.
pub struct DisclosureMember<'a, K> {
    key: K,
    group: &'a mut DisclosureGroup<K>,
}

impl<K> DisclosureMember<'_, K>
where
    K: Clone + Eq + Hash + fmt::Display,
{
    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn is_expanded(&self) -> bool {
        self.group.is_expanded(&self.key)
    }

    /// Activate this member. Returns whether the group's state changed.
    pub fn toggle(&mut self) -> bool {
        // The handle only exists for registered keys, so activation cannot fail.
        self.group.activate(&self.key).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn expanded(group: &DisclosureGroup<String>) -> Vec<String> {
        group.expanded().cloned().collect()
    }

    #[test]
    fn exclusive_sticky_replaces_and_ignores_repeat() {
        let mut group = DisclosureGroup::new(
            DisclosurePolicy::exclusive(),
            keys(&["a", "b", "c"]),
            keys(&["a"]),
        )
        .unwrap();

        assert!(group.activate(&"b".to_string()).unwrap());
        assert!(!group.is_expanded(&"a".to_string()));
        assert!(group.is_expanded(&"b".to_string()));

        assert!(!group.activate(&"b".to_string()).unwrap());
        assert_eq!(expanded(&group), keys(&["b"]));
    }

    #[test]
    fn exclusive_collapsible_closes_open_member() {
        let mut group = DisclosureGroup::new(
            DisclosurePolicy::exclusive_collapsible(),
            keys(&["a", "b"]),
            Vec::new(),
        )
        .unwrap();

        group.activate(&"a".to_string()).unwrap();
        assert_eq!(expanded(&group), keys(&["a"]));
        group.activate(&"a".to_string()).unwrap();
        assert_eq!(group.expanded_count(), 0);
    }

    #[test]
    fn exclusive_switch_leaves_only_new_member() {
        let mut group = DisclosureGroup::new(
            DisclosurePolicy::exclusive_collapsible(),
            keys(&["a", "b", "c"]),
            keys(&["c"]),
        )
        .unwrap();

        group.activate(&"a".to_string()).unwrap();
        assert_eq!(expanded(&group), keys(&["a"]));
    }

    #[test]
    fn independent_toggles_one_member() {
        let mut group = DisclosureGroup::new(
            DisclosurePolicy::independent(),
            keys(&["x", "y"]),
            Vec::new(),
        )
        .unwrap();

        group.activate(&"x".to_string()).unwrap();
        assert_eq!(expanded(&group), keys(&["x"]));
        group.activate(&"y".to_string()).unwrap();
        assert_eq!(expanded(&group), keys(&["x", "y"]));
        group.activate(&"x".to_string()).unwrap();
        assert_eq!(expanded(&group), keys(&["y"]));
    }

    #[test]
    fn unknown_member_is_rejected_without_change() {
        let mut group = DisclosureGroup::new(
            DisclosurePolicy::independent(),
            keys(&["x"]),
            keys(&["x"]),
        )
        .unwrap();

        let err = group.activate(&"nope".to_string()).unwrap_err();
        assert_eq!(err, DisclosureError::UnknownMember("nope".into()));
        assert_eq!(expanded(&group), keys(&["x"]));
    }

    #[test]
    fn empty_group_reports_nothing_expanded() {
        let group: DisclosureGroup<String> = DisclosureGroup::empty(DisclosurePolicy::default());
        assert!(group.is_empty());
        assert!(!group.is_expanded(&"a".to_string()));
        assert_eq!(group.expanded().count(), 0);
    }

    #[test]
    fn construction_validates_members_and_initial() {
        let dup = DisclosureGroup::new(DisclosurePolicy::independent(), keys(&["a", "a"]), Vec::new());
        assert!(matches!(dup, Err(DisclosureError::DuplicateMember(_))));

        let stranger = DisclosureGroup::new(DisclosurePolicy::independent(), keys(&["a"]), keys(&["z"]));
        assert!(matches!(stranger, Err(DisclosureError::InitialNotMember(_))));

        let two = DisclosureGroup::new(DisclosurePolicy::exclusive(), keys(&["a", "b"]), keys(&["a", "b"]));
        assert_eq!(two.unwrap_err(), DisclosureError::TooManyInitial(2));

        let many = DisclosureGroup::new(DisclosurePolicy::independent(), keys(&["a", "b"]), keys(&["a", "b"]));
        assert_eq!(many.unwrap().expanded_count(), 2);
    }

    #[test]
    fn member_handle_reads_and_toggles() {
        let mut group = DisclosureGroup::new(
            DisclosurePolicy::exclusive_collapsible(),
            keys(&["a", "b"]),
            Vec::new(),
        )
        .unwrap();

        assert!(group.member(&"missing".to_string()).is_none());

        let mut member = group.member(&"b".to_string()).unwrap();
        assert!(!member.is_expanded());
        assert!(member.toggle());
        assert!(member.is_expanded());
        assert_eq!(member.key(), "b");

        assert_eq!(expanded(&group), keys(&["b"]));
    }

    #[test]
    fn unregister_drops_expansion() {
        let mut group = DisclosureGroup::new(
            DisclosurePolicy::independent(),
            keys(&["a", "b"]),
            keys(&["a", "b"]),
        )
        .unwrap();

        assert!(group.unregister(&"a".to_string()));
        assert!(!group.unregister(&"a".to_string()));
        assert_eq!(group.members(), keys(&["b"]).as_slice());
        assert_eq!(expanded(&group), keys(&["b"]));
        assert!(group.activate(&"a".to_string()).is_err());
    }

    #[test]
    fn expanded_follows_registration_order() {
        let mut group = DisclosureGroup::new(
            DisclosurePolicy::independent(),
            keys(&["c", "a", "b"]),
            Vec::new(),
        )
        .unwrap();
        group.activate(&"b".to_string()).unwrap();
        group.activate(&"c".to_string()).unwrap();
        assert_eq!(expanded(&group), keys(&["c", "b"]));
    }

    #[test]
    fn policy_from_toml() {
        let policy: DisclosurePolicy =
            toml::from_str("mode = \"independent\"").unwrap();
        assert_eq!(policy, DisclosurePolicy::independent());

        let policy: DisclosurePolicy =
            toml::from_str("mode = \"exclusive\"\nallow_collapse_last = true").unwrap();
        assert_eq!(policy, DisclosurePolicy::exclusive_collapsible());
    }
}
