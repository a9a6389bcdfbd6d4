use crate::types::Move;
use lazy_static::lazy_static;
use parking_lot::RwLock;
use std::collections::HashMap;

// Boards are immutable value objects, so derived values can be memoized
// globally by position key and shared across search workers.

const CACHE_CAP: usize = 1 << 16;

lazy_static! {
    static ref LEGAL_MOVES_CACHE: RwLock<HashMap<u64, Vec<Move>>> =
        RwLock::new(HashMap::with_capacity(CACHE_CAP));

    static ref EVAL_CACHE: RwLock<HashMap<u64, f64>> =
        RwLock::new(HashMap::with_capacity(CACHE_CAP));
}

pub fn cached_legal_moves(key: u64) -> Option<Vec<Move>> {
    let cache = LEGAL_MOVES_CACHE.read();
    cache.get(&key).cloned()
}

pub fn store_legal_moves(key: u64, moves: Vec<Move>) {
    let mut cache = LEGAL_MOVES_CACHE.write();
    if cache.len() >= CACHE_CAP {
        cache.clear();
    }
    cache.insert(key, moves);
}

pub fn cached_eval(key: u64) -> Option<f64> {
    let cache = EVAL_CACHE.read();
    cache.get(&key).copied()
}

pub fn store_eval(key: u64, score: f64) {
    let mut cache = EVAL_CACHE.write();
    if cache.len() >= CACHE_CAP {
        cache.clear();
    }
    cache.insert(key, score);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_by_key() {
        let key = 0xDEAD_BEEF_0000_0001;
        assert!(cached_legal_moves(key).is_none());
        store_legal_moves(key, vec![Move::new(0, 1)]);
        assert_eq!(cached_legal_moves(key).unwrap(), vec![Move::new(0, 1)]);

        store_eval(key, 1.25);
        assert_eq!(cached_eval(key), Some(1.25));
    }
}
