#![no_main]

use libfuzzer_sys::fuzz_target;
use recentkit::ds::IntrusiveList;

// Fuzz arbitrary operation sequences on IntrusiveList
//
// Tests random sequences of push_front, pop_back, move_to_front, remove and
// clear, checking link consistency after every step.
fuzz_target!(|data: &[u8]| {
    let mut list: IntrusiveList<u32> = IntrusiveList::new();
    let mut ids = Vec::new();

    for pair in data.chunks_exact(2) {
        let value = u32::from(pair[1]);
        match pair[0] % 5 {
            0 => {
                let id = list.push_front(value);
                ids.push(id);
                assert_eq!(list.front(), Some(&value));
                assert_eq!(list.front_id(), Some(id));
            }
            1 => {
                let len = list.len();
                let popped = list.pop_back();
                assert_eq!(popped.is_some(), len > 0);
            }
            2 => {
                if let Some(&id) = ids.get(pair[1] as usize % ids.len().max(1)) {
                    if list.move_to_front(id) {
                        assert_eq!(list.front_id(), Some(id));
                    }
                }
            }
            3 => {
                if !ids.is_empty() {
                    let id = ids.swap_remove(pair[1] as usize % ids.len());
                    if list.contains(id) {
                        assert!(list.remove(id).is_some());
                    }
                }
            }
            _ => {
                if pair[1] == 0 {
                    list.clear();
                    ids.clear();
                    assert!(list.is_empty());
                }
            }
        }

        list.debug_validate_invariants();
    }
});
