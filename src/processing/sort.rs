//! Stable, key-driven ordering of projected response items.
//!
//! Each dataset declares a closed [`SortKey`] enum. Every key maps to exactly one comparator
//! through an exhaustive `match`, so adding a key without an ordering fails to compile. Key names
//! coming from clients that match no key resolve to the dataset's default key.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Comparator over projected items.
pub type Comparator<T> = fn(&T, &T) -> Ordering;

/// Sort direction. Anything other than `"asc"` is descending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    /// Resolve a client-supplied direction. Only the exact value `"asc"` selects ascending
    /// order; missing or any other value, `"ASC"` and `" asc"` included, is descending.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("asc") => Self::Asc,
            _ => Self::Desc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dataset's closed set of sort keys.
pub trait SortKey: Copy + Default + Eq + fmt::Debug + 'static {
    /// Item type the keys order.
    type Item;

    /// Every key, in declaration order.
    const ALL: &'static [Self];

    /// Client-facing key name.
    fn name(self) -> &'static str;

    /// Ascending comparator for this key, including its tie-break rule.
    fn comparator(self) -> Comparator<Self::Item>;

    /// Look up a key by its exact client-facing name, falling back to [`Default`].
    fn from_name(name: &str) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.name() == name)
            .unwrap_or_default()
    }
}

/// Order `items` in place by `key` and `direction`.
///
/// The sort is stable: items with equal keys keep their input order. Descending order reverses
/// the whole comparator, so primary and tie-break keys always share one direction.
pub fn sort_items<K: SortKey>(items: &mut [K::Item], key: K, direction: SortDirection) {
    let cmp = key.comparator();
    items.sort_by(|a, b| direction.apply(cmp(a, b)));
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::{Comparator, SortDirection, SortKey, sort_items};

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: u32,
        label: &'static str,
        major: i32,
        minor: i32,
    }

    fn item(id: u32, label: &'static str, major: i32, minor: i32) -> Item {
        Item {
            id,
            label,
            major,
            minor,
        }
    }

    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    enum Key {
        Label,
        #[default]
        Major,
    }

    impl SortKey for Key {
        type Item = Item;
        const ALL: &'static [Self] = &[Key::Label, Key::Major];

        fn name(self) -> &'static str {
            match self {
                Key::Label => "label",
                Key::Major => "major",
            }
        }

        fn comparator(self) -> Comparator<Item> {
            match self {
                Key::Label => |a, b| a.label.cmp(b.label),
                Key::Major => |a, b| a.major.cmp(&b.major).then_with(|| a.minor.cmp(&b.minor)),
            }
        }
    }

    fn ids(items: &[Item]) -> Vec<u32> {
        items.iter().map(|i| i.id).collect()
    }

    fn sample() -> Vec<Item> {
        vec![
            item(1, "b", 2020, 5),
            item(2, "a", 2021, 1),
            item(3, "b", 2020, 11),
            item(4, "Z", 2021, 1),
            item(5, "á", 2019, 7),
        ]
    }

    #[test]
    fn direction_parse_defaults_to_desc() {
        assert_eq!(SortDirection::parse(Some("asc")), SortDirection::Asc);
        assert_eq!(SortDirection::parse(Some("ASC")), SortDirection::Desc);
        assert_eq!(SortDirection::parse(Some(" asc")), SortDirection::Desc);
        assert_eq!(SortDirection::parse(Some("asc ")), SortDirection::Desc);
        assert_eq!(SortDirection::parse(Some("desc")), SortDirection::Desc);
        assert_eq!(SortDirection::parse(Some("sideways")), SortDirection::Desc);
        assert_eq!(SortDirection::parse(None), SortDirection::Desc);
    }

    #[test]
    fn unknown_key_name_falls_back_to_default() {
        assert_eq!(Key::from_name("label"), Key::Label);
        assert_eq!(Key::from_name("lable"), Key::Major);
        assert_eq!(Key::from_name(""), Key::Major);
    }

    #[test]
    fn key_names_match_exactly() {
        assert_eq!(Key::from_name(" label"), Key::Major);
        assert_eq!(Key::from_name("label "), Key::Major);
        assert_eq!(Key::from_name("Label"), Key::Major);
    }

    #[test]
    fn string_keys_use_raw_lexicographic_order() {
        let mut items = sample();
        sort_items(&mut items, Key::Label, SortDirection::Asc);
        // Uppercase sorts before lowercase; accented letters after ASCII.
        assert_eq!(ids(&items), vec![4, 2, 1, 3, 5]);
    }

    #[test]
    fn composite_key_breaks_ties_in_the_same_direction() {
        let mut items = sample();
        sort_items(&mut items, Key::Major, SortDirection::Asc);
        assert_eq!(ids(&items), vec![5, 1, 3, 2, 4]);

        let mut items = sample();
        sort_items(&mut items, Key::Major, SortDirection::Desc);
        assert_eq!(ids(&items), vec![2, 4, 3, 1, 5]);
    }

    #[test]
    fn equal_keys_keep_input_order_in_both_directions() {
        let mut asc = sample();
        sort_items(&mut asc, Key::Label, SortDirection::Asc);
        let pos = |v: &[Item], id| v.iter().position(|i| i.id == id).unwrap();
        assert!(pos(&asc, 1) < pos(&asc, 3));

        let mut desc = sample();
        sort_items(&mut desc, Key::Label, SortDirection::Desc);
        assert!(pos(&desc, 1) < pos(&desc, 3));
    }

    #[test]
    fn sorting_twice_is_idempotent() {
        for key in Key::ALL {
            for direction in [SortDirection::Asc, SortDirection::Desc] {
                let mut once = sample();
                sort_items(&mut once, *key, direction);
                let mut twice = once.clone();
                sort_items(&mut twice, *key, direction);
                assert_eq!(once, twice, "{key:?} {direction}");
            }
        }
    }

    #[test]
    fn comparator_is_ascending() {
        let a = item(1, "a", 1, 0);
        let b = item(2, "b", 2, 0);
        assert_eq!((Key::Label.comparator())(&a, &b), Ordering::Less);
        assert_eq!((Key::Major.comparator())(&b, &a), Ordering::Greater);
    }
}
