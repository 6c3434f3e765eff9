//! Cache keys and invalidation tokens.
//!
//! A [`QueryKey`] identifies one query result slot: a typed resource kind
//! plus its filter parameters. Parameters live in a `BTreeMap`, so two keys
//! built from the same filters in any insertion order are equal and share a
//! canonical string form. Absent filters are omitted entirely rather than
//! encoded as empty values, which keeps `{status: None}` and `{}` identical.

use std::collections::BTreeMap;
use std::fmt;
use traceline_core::ResourceKind;

/// Canonical identifier for one query's result slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    resource: ResourceKind,
    params: BTreeMap<String, String>,
}

impl QueryKey {
    pub fn new(resource: ResourceKind) -> Self {
        Self {
            resource,
            params: BTreeMap::new(),
        }
    }

    pub fn resource(&self) -> ResourceKind {
        self.resource
    }

    pub fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }

    /// Add one filter parameter. Setting the same name twice keeps the last
    /// value.
    pub fn with_param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.params.insert(name.into(), value.to_string());
        self
    }

    /// Add a filter parameter only when present. `None` adds nothing, so a
    /// key built from optional filters canonicalizes the same as one that
    /// never mentioned them.
    pub fn with_opt_param<V: ToString>(self, name: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with_param(name, value),
            None => self,
        }
    }

    /// Canonical string form: the resource name, then `?k=v&...` with
    /// parameters sorted by name. Equal keys always produce equal strings.
    pub fn canonical(&self) -> String {
        if self.params.is_empty() {
            return self.resource.name().to_string();
        }
        let mut out = String::from(self.resource.name());
        out.push('?');
        for (i, (name, value)) in self.params.iter().enumerate() {
            if i > 0 {
                out.push('&');
            }
            out.push_str(name);
            out.push('=');
            out.push_str(value);
        }
        out
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical())
    }
}

/// What a mutation declares it invalidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidationKey {
    /// Exactly one cached key.
    Exact(QueryKey),
    /// Every cached key of this resource, regardless of parameters, plus
    /// every resource nested under it (see [`ResourceKind::covers`]).
    Resource(ResourceKind),
}

impl InvalidationKey {
    /// Whether a cached key falls under this invalidation.
    pub fn matches(&self, key: &QueryKey) -> bool {
        match self {
            InvalidationKey::Exact(exact) => exact == key,
            InvalidationKey::Resource(kind) => kind.covers(key.resource()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_are_order_independent() {
        let a = QueryKey::new(ResourceKind::Documents)
            .with_param("status", "Draft")
            .with_param("limit", 50);
        let b = QueryKey::new(ResourceKind::Documents)
            .with_param("limit", 50)
            .with_param("status", "Draft");
        assert_eq!(a, b);
        assert_eq!(a.canonical(), b.canonical());
    }

    #[test]
    fn canonical_form_is_sorted() {
        let key = QueryKey::new(ResourceKind::Documents)
            .with_param("status", "Draft")
            .with_param("limit", 50)
            .with_param("document_type", "SOP");
        assert_eq!(
            key.canonical(),
            "documents?document_type=SOP&limit=50&status=Draft"
        );
    }

    #[test]
    fn absent_filter_equals_unmentioned_filter() {
        let explicit = QueryKey::new(ResourceKind::Items).with_opt_param::<&str>("item_type", None);
        let bare = QueryKey::new(ResourceKind::Items);
        assert_eq!(explicit, bare);
        assert_eq!(explicit.canonical(), "items");
    }

    #[test]
    fn repeated_param_keeps_last_value() {
        let key = QueryKey::new(ResourceKind::Audits)
            .with_param("status", "Open")
            .with_param("status", "Closed");
        assert_eq!(key.canonical(), "audits?status=Closed");
    }

    #[test]
    fn exact_invalidation_matches_only_that_key() {
        let draft = QueryKey::new(ResourceKind::Documents).with_param("status", "Draft");
        let approved = QueryKey::new(ResourceKind::Documents).with_param("status", "Approved");
        let exact = InvalidationKey::Exact(draft.clone());
        assert!(exact.matches(&draft));
        assert!(!exact.matches(&approved));
    }

    #[test]
    fn resource_invalidation_matches_any_parameters() {
        let draft = QueryKey::new(ResourceKind::Documents).with_param("status", "Draft");
        let approved = QueryKey::new(ResourceKind::Documents).with_param("status", "Approved");
        let bare = QueryKey::new(ResourceKind::Documents);
        let invalidation = InvalidationKey::Resource(ResourceKind::Documents);
        assert!(invalidation.matches(&draft));
        assert!(invalidation.matches(&approved));
        assert!(invalidation.matches(&bare));
        assert!(!invalidation.matches(&QueryKey::new(ResourceKind::Items)));
    }

    #[test]
    fn resource_invalidation_covers_nested_kinds() {
        let lots = QueryKey::new(ResourceKind::InventoryLots);
        assert!(InvalidationKey::Resource(ResourceKind::Inventory).matches(&lots));
        assert!(!InvalidationKey::Resource(ResourceKind::InventoryLots)
            .matches(&QueryKey::new(ResourceKind::Inventory)));
    }
}

#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    fn kind_strategy() -> impl Strategy<Value = ResourceKind> {
        (0..ResourceKind::ALL.len()).prop_map(|i| ResourceKind::ALL[i])
    }

    fn params_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
        proptest::collection::vec(("[a-z_]{1,12}", "[A-Za-z0-9 -]{0,16}"), 0..6)
    }

    proptest! {
        /// Keys built from the same parameters in any order are equal and
        /// share one canonical form.
        #[test]
        fn prop_canonical_is_order_independent(
            kind in kind_strategy(),
            params in params_strategy(),
            seed in any::<u64>(),
        ) {
            let mut shuffled = params.clone();
            // Deterministic permutation from the seed; proptest drives seeds.
            let len = shuffled.len();
            if len > 1 {
                for i in (1..len).rev() {
                    let j = (seed as usize).wrapping_mul(i) % (i + 1);
                    shuffled.swap(i, j);
                }
            }

            let mut a = QueryKey::new(kind);
            for (name, value) in &params {
                a = a.with_param(name.clone(), value.clone());
            }
            let mut b = QueryKey::new(kind);
            for (name, value) in &shuffled {
                b = b.with_param(name.clone(), value.clone());
            }

            prop_assert_eq!(&a, &b);
            prop_assert_eq!(a.canonical(), b.canonical());
        }

        /// Canonical strings always start with the resource name, so the
        /// resource prefix rule has a stable anchor.
        #[test]
        fn prop_canonical_starts_with_resource_name(
            kind in kind_strategy(),
            params in params_strategy(),
        ) {
            let mut key = QueryKey::new(kind);
            for (name, value) in params {
                key = key.with_param(name, value);
            }
            prop_assert!(key.canonical().starts_with(kind.name()));
        }

        /// A resource invalidation for a key's own kind always matches it.
        #[test]
        fn prop_resource_invalidation_matches_own_kind(
            kind in kind_strategy(),
            params in params_strategy(),
        ) {
            let mut key = QueryKey::new(kind);
            for (name, value) in params {
                key = key.with_param(name, value);
            }
            prop_assert!(InvalidationKey::Resource(kind).matches(&key));
        }
    }
}
