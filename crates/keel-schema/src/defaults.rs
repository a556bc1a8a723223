//! Auxiliary output maps filled in alongside the schema model.

use std::collections::HashMap;

use crate::host::{HostValue, Protected};

/// Default values for one object type, keyed by property name.
pub type ObjectDefaults<V> = HashMap<String, Protected<V>>;

/// Defaults for every parsed object type, keyed by type name.
pub type ObjectDefaultsMap<V> = HashMap<String, ObjectDefaults<V>>;

/// Constructor bindings, keyed by type name. Only declarations that came in
/// as constructors get an entry.
pub type ConstructorMap<V> = HashMap<String, Protected<<V as HostValue>::Constructor>>;

/// Move staged entries into `target`, keeping any key `target` already has.
pub(crate) fn merge_staged<T>(target: &mut HashMap<String, T>, staged: HashMap<String, T>) {
    for (name, entry) in staged {
        target.entry(name).or_insert(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_existing_entries() {
        let mut target = HashMap::from([("Dog".to_string(), 1)]);
        let staged = HashMap::from([("Dog".to_string(), 2), ("Cat".to_string(), 3)]);

        merge_staged(&mut target, staged);

        assert_eq!(target["Dog"], 1);
        assert_eq!(target["Cat"], 3);
    }
}
