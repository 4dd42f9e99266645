//! Case-insensitive name lookup shared by the active and trash collections.

use crate::models::{Event, TrashedEvent};

/// The comparison key for an event name. Every lookup and duplicate check
/// goes through this so casing and surrounding whitespace never matter.
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

pub trait Named {
    fn name(&self) -> &str;
}

impl Named for Event {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for TrashedEvent {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Index of the record whose name matches exactly, ignoring case.
pub fn position_by_name<T: Named>(items: &[T], name: &str) -> Option<usize> {
    let key = name_key(name);
    items.iter().position(|item| name_key(item.name()) == key)
}

pub fn find_by_name<'a, T: Named>(items: &'a [T], name: &str) -> Option<&'a T> {
    position_by_name(items, name).map(|idx| &items[idx])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn events(names: &[&str]) -> Vec<Event> {
        names
            .iter()
            .map(|name| Event::new(name.to_string(), "2025-01-01".into(), Utc::now()))
            .collect()
    }

    #[test]
    fn test_lookup_ignores_case() {
        let items = events(&["Demo Day", "RustConf"]);
        assert_eq!(position_by_name(&items, "demo day"), Some(0));
        assert_eq!(position_by_name(&items, "RUSTCONF"), Some(1));
        let found = find_by_name(&items, " rustconf ").map(|e| e.name.as_str());
        assert_eq!(found, Some("RustConf"));
    }

    #[test]
    fn test_lookup_is_not_substring() {
        let items = events(&["Demo Day"]);
        assert!(find_by_name(&items, "demo").is_none());
        assert!(find_by_name(&items, "demo day 2").is_none());
    }
}
