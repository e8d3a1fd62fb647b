#![no_main]

use libfuzzer_sys::fuzz_target;
use recentkit::RecencyStore;

// Fuzz arbitrary operation sequences on RecencyStore
//
// The first byte picks the capacity; each following pair of bytes is an
// (op, key) pair over insert, remove, evict_lru and get_and_promote.
fuzz_target!(|data: &[u8]| {
    let Some((&cap, rest)) = data.split_first() else {
        return;
    };
    let capacity = usize::from(cap % 16) + 1;
    let mut store: RecencyStore<u8, u32> = RecencyStore::new(capacity);

    for (step, pair) in rest.chunks_exact(2).enumerate() {
        let key = pair[1] % 32;
        match pair[0] % 4 {
            0 => {
                let was_present = store.contains(&key);
                let before = store.len();
                store.insert(key, step as u32);

                assert_eq!(store.mru_key(), Some(&key));
                if was_present || before == capacity {
                    assert_eq!(store.len(), before);
                } else {
                    assert_eq!(store.len(), before + 1);
                }
            }
            1 => {
                let was_present = store.contains(&key);
                let before = store.len();
                store.remove(&key);

                assert!(!store.contains(&key));
                assert_eq!(store.len(), before - usize::from(was_present));
            }
            2 => {
                let victim = store.lru_key().copied();
                store.evict_lru();
                if let Some(victim) = victim {
                    assert!(!store.contains(&victim));
                }
            }
            _ => {
                let before = store.len();
                let hit = store.get_and_promote(&key).is_some();
                assert_eq!(hit, store.contains(&key));
                if hit {
                    assert_eq!(store.mru_key(), Some(&key));
                }
                assert_eq!(store.len(), before);
            }
        }

        assert!(store.len() <= capacity);
        assert!(store.check_invariants().is_ok());
    }
});
