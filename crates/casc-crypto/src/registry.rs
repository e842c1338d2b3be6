//! Key registry: key name → 128-bit key, for one storage session
//!
//! Two layers:
//! - static keys (compiled catalog plus imported key files), fixed once built
//! - runtime keys added with [`KeyRegistry::register`], bounded by a capacity
//!   chosen at construction
//!
//! Lookups consult the runtime layer first, so a key registered at runtime
//! overrides a static key with the same name, and a later registration of the
//! same name overrides an earlier one. Every registration consumes a slot.
//!
//! No internal locking: `lookup` takes `&self`, `register` takes `&mut self`.

use std::collections::HashMap;

use casc_core::{CascError, CascResult, KeyName};

use crate::catalog;
use crate::keys::EncryptionKey;
use crate::KEY_SIZE;

pub struct KeyRegistry {
    static_keys: HashMap<KeyName, EncryptionKey>,
    extra_keys: Vec<EncryptionKey>,
    extra_index: HashMap<KeyName, usize>,
    extra_capacity: usize,
}

impl KeyRegistry {
    /// Build a registry from `static_keys`, reserving room for `extra_capacity`
    /// runtime keys. Allocation failure is reported as `OutOfMemory`.
    pub fn new<I>(static_keys: I, extra_capacity: usize) -> CascResult<Self>
    where
        I: IntoIterator<Item = EncryptionKey>,
    {
        let static_keys = static_keys.into_iter();

        let mut map = HashMap::new();
        map.try_reserve(static_keys.size_hint().0)
            .map_err(|_| CascError::OutOfMemory)?;
        for key in static_keys {
            map.insert(key.name(), key);
        }

        let mut extra_keys = Vec::new();
        extra_keys
            .try_reserve_exact(extra_capacity)
            .map_err(|_| CascError::OutOfMemory)?;
        let mut extra_index = HashMap::new();
        extra_index
            .try_reserve(extra_capacity)
            .map_err(|_| CascError::OutOfMemory)?;

        Ok(Self {
            static_keys: map,
            extra_keys,
            extra_index,
            extra_capacity,
        })
    }

    /// Build a registry seeded with the compiled key catalog.
    pub fn with_builtin_catalog(extra_capacity: usize) -> CascResult<Self> {
        Self::new(
            catalog::builtin_keys().map(|(name, bytes)| EncryptionKey::new(name, bytes)),
            extra_capacity,
        )
    }

    pub fn lookup(&self, name: KeyName) -> Option<&[u8; KEY_SIZE]> {
        if let Some(&slot) = self.extra_index.get(&name) {
            return Some(self.extra_keys[slot].as_bytes());
        }
        self.static_keys.get(&name).map(EncryptionKey::as_bytes)
    }

    pub fn contains(&self, name: KeyName) -> bool {
        self.lookup(name).is_some()
    }

    /// Add a key at runtime. Fails with `CapacityExceeded` once the runtime
    /// layer already holds `extra_capacity` keys.
    pub fn register(&mut self, name: KeyName, bytes: [u8; KEY_SIZE]) -> CascResult<()> {
        if self.extra_keys.len() >= self.extra_capacity {
            return Err(CascError::CapacityExceeded {
                capacity: self.extra_capacity,
            });
        }

        let slot = self.extra_keys.len();
        self.extra_keys.push(EncryptionKey::new(name, bytes));
        if self.extra_index.insert(name, slot).is_some() || self.static_keys.contains_key(&name) {
            tracing::debug!(key = %name, "runtime key overrides an existing key");
        }

        tracing::debug!(
            key = %name,
            used = self.extra_keys.len(),
            capacity = self.extra_capacity,
            "registered encryption key"
        );
        Ok(())
    }

    /// Number of distinct key names that resolve.
    pub fn len(&self) -> usize {
        self.static_keys.len()
            + self
                .extra_index
                .keys()
                .filter(|name| !self.static_keys.contains_key(name))
                .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn static_len(&self) -> usize {
        self.static_keys.len()
    }

    /// Number of runtime registrations so far (each consumes a slot).
    pub fn extra_len(&self) -> usize {
        self.extra_keys.len()
    }

    pub fn extra_capacity(&self) -> usize {
        self.extra_capacity
    }

    /// All resolvable key names, sorted.
    pub fn names(&self) -> Vec<KeyName> {
        let mut names: Vec<KeyName> = self
            .static_keys
            .keys()
            .chain(self.extra_index.keys())
            .copied()
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }
}

impl std::fmt::Debug for KeyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyRegistry")
            .field("static_keys", &self.static_keys.len())
            .field("extra_keys", &self.extra_keys.len())
            .field("extra_capacity", &self.extra_capacity)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::KNOWN_KEYS;

    fn key_bytes(seed: u8) -> [u8; KEY_SIZE] {
        [seed; KEY_SIZE]
    }

    #[test]
    fn test_builtin_catalog_lookup() {
        let registry = KeyRegistry::with_builtin_catalog(128).unwrap();

        assert_eq!(registry.static_len(), KNOWN_KEYS.len());
        for &(name, bytes) in KNOWN_KEYS {
            assert_eq!(registry.lookup(KeyName(name)), Some(&bytes));
        }
    }

    #[test]
    fn test_unknown_key_is_none() {
        let registry = KeyRegistry::with_builtin_catalog(128).unwrap();
        assert!(registry.lookup(KeyName(0x0123_4567_89AB_CDEF)).is_none());
        assert!(!registry.contains(KeyName(0)));
    }

    #[test]
    fn test_unsatisfiable_capacity_is_out_of_memory() {
        let err = KeyRegistry::new(Vec::new(), usize::MAX).unwrap_err();
        assert!(matches!(err, CascError::OutOfMemory));
    }

    #[test]
    fn test_capacity_enforced_at_128() {
        let mut registry = KeyRegistry::new(Vec::new(), 128).unwrap();

        for i in 0..128u64 {
            let key = key_bytes(i as u8);
            registry.register(KeyName(i + 1), key).unwrap();
            assert_eq!(registry.lookup(KeyName(i + 1)), Some(&key));
        }

        let err = registry
            .register(KeyName(1000), key_bytes(0xFF))
            .unwrap_err();
        assert!(matches!(err, CascError::CapacityExceeded { capacity: 128 }));
        assert!(registry.lookup(KeyName(1000)).is_none());

        // Everything registered before the failure is still visible
        for i in 0..128u64 {
            assert!(registry.contains(KeyName(i + 1)));
        }
        assert_eq!(registry.extra_len(), 128);
    }

    #[test]
    fn test_zero_capacity_rejects_all() {
        let mut registry = KeyRegistry::new(Vec::new(), 0).unwrap();
        let err = registry.register(KeyName(1), key_bytes(1)).unwrap_err();
        assert!(matches!(err, CascError::CapacityExceeded { capacity: 0 }));
    }

    #[test]
    fn test_duplicate_registration_newest_wins() {
        let mut registry = KeyRegistry::new(Vec::new(), 4).unwrap();

        registry.register(KeyName(7), key_bytes(1)).unwrap();
        registry.register(KeyName(7), key_bytes(2)).unwrap();

        assert_eq!(registry.lookup(KeyName(7)), Some(&key_bytes(2)));
        assert_eq!(registry.extra_len(), 2, "each registration consumes a slot");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_runtime_key_overrides_static_key() {
        let (name, original) = KNOWN_KEYS[0];
        let mut registry = KeyRegistry::with_builtin_catalog(1).unwrap();

        registry.register(KeyName(name), key_bytes(0xEE)).unwrap();

        assert_eq!(registry.lookup(KeyName(name)), Some(&key_bytes(0xEE)));
        assert_ne!(key_bytes(0xEE), original);
        assert_eq!(registry.len(), KNOWN_KEYS.len());
    }

    #[test]
    fn test_names_sorted_and_distinct() {
        let statics = vec![
            EncryptionKey::new(KeyName(30), key_bytes(3)),
            EncryptionKey::new(KeyName(10), key_bytes(1)),
        ];
        let mut registry = KeyRegistry::new(statics, 2).unwrap();
        registry.register(KeyName(20), key_bytes(2)).unwrap();
        registry.register(KeyName(10), key_bytes(9)).unwrap();

        assert_eq!(
            registry.names(),
            vec![KeyName(10), KeyName(20), KeyName(30)]
        );
        assert_eq!(registry.len(), 3);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_debug_does_not_print_keys() {
        let registry = KeyRegistry::with_builtin_catalog(8).unwrap();
        let rendered = format!("{registry:?}");
        assert!(rendered.contains("extra_capacity: 8"));
        assert!(!rendered.contains("0x"));
    }
}
