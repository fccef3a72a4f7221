/// NameHash — a text identifier mapped once to a stable integer.
///
/// The hash is FNV-1a over the UTF-8 bytes, computable in const context so
/// the fixed names in `known` are compile-time constants. A process-global
/// reverse table records the text of every interned name so hashes can be
/// turned back into strings when reporting.

use std::fmt;
use std::sync::{OnceLock, RwLock};
use rustc_hash::FxHashMap;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Stable 64-bit hash of an interned name.
///
/// Two `NameHash` values are equal exactly when their source strings are
/// equal (collisions aside, as with any interned-hash scheme).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NameHash(u64);

impl NameHash {
    /// Hash of the empty string — the "no scope" marker in attribute queries.
    pub const EMPTY: NameHash = NameHash::of("");

    /// Compute the hash of a name at compile time or runtime.
    ///
    /// Does NOT record the reverse mapping; use [`intern`] for names that
    /// arrive at runtime and may need to be printed later.
    pub const fn of(name: &str) -> Self {
        let bytes = name.as_bytes();
        let mut hash = FNV_OFFSET_BASIS;
        let mut i = 0;
        while i < bytes.len() {
            hash ^= bytes[i] as u64;
            hash = hash.wrapping_mul(FNV_PRIME);
            i += 1;
        }
        NameHash(hash)
    }

    /// Raw hash value.
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NameHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match lookup(*self) {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "<unknown:{:#018x}>", self.0),
        }
    }
}

// ===== GLOBAL REVERSE TABLE =====

static REVERSE_TABLE: OnceLock<RwLock<FxHashMap<NameHash, String>>> = OnceLock::new();

fn reverse_table() -> &'static RwLock<FxHashMap<NameHash, String>> {
    REVERSE_TABLE.get_or_init(|| RwLock::new(FxHashMap::default()))
}

/// Intern a name: compute its hash and record the reverse mapping.
///
/// Interning the same name twice is idempotent and always yields the same
/// hash.
pub fn intern(name: &str) -> NameHash {
    let hash = NameHash::of(name);
    if let Ok(mut table) = reverse_table().write() {
        table.entry(hash).or_insert_with(|| name.to_string());
    }
    hash
}

/// Look up the text of a previously interned name.
pub fn lookup(hash: NameHash) -> Option<String> {
    reverse_table()
        .read()
        .ok()
        .and_then(|table| table.get(&hash).cloned())
}

#[cfg(test)]
#[path = "name_hash_tests.rs"]
mod tests;
