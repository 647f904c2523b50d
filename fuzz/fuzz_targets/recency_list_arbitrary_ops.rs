#![no_main]

use libfuzzer_sys::fuzz_target;
use lrukit::ds::RecencyList;

// Fuzz arbitrary operation sequences on RecencyList
//
// Random sequences of insert_front, move_to_front, unlink, attach_front,
// evict_least_recent, remove and clear, validating links after every step.
fuzz_target!(|data: &[u8]| {
    let mut list: RecencyList<u32> = RecencyList::new();
    let mut ids = Vec::new();

    for chunk in data.chunks_exact(2) {
        let op = chunk[0] % 7;
        let value = u32::from(chunk[1]);

        match op {
            0 => {
                let id = list.insert_front(value);
                ids.push(id);
                assert_eq!(list.front_id(), Some(id));
                assert_eq!(list.get(id), Some(&value));
            },
            1 if !ids.is_empty() => {
                let id = ids[value as usize % ids.len()];
                if list.move_to_front(id) {
                    assert_eq!(list.front_id(), Some(id));
                }
            },
            2 if !ids.is_empty() => {
                let id = ids[value as usize % ids.len()];
                let old_len = list.len();
                if list.unlink(id) {
                    assert_eq!(list.len(), old_len - 1);
                    assert!(!list.contains(id));
                }
            },
            3 if !ids.is_empty() => {
                let id = ids[value as usize % ids.len()];
                if list.attach_front(id) {
                    assert_eq!(list.front_id(), Some(id));
                }
            },
            4 => {
                let old_len = list.len();
                let expected = list.back_id();
                let evicted = list.evict_least_recent();
                assert_eq!(evicted.as_ref().map(|(id, _)| *id), expected);
                if let Some((id, _)) = evicted {
                    assert_eq!(list.len(), old_len - 1);
                    ids.retain(|x| *x != id);
                }
            },
            5 if !ids.is_empty() => {
                let id = ids.swap_remove(value as usize % ids.len());
                assert!(list.remove(id).is_some());
            },
            6 => {
                list.clear();
                ids.clear();
                assert!(list.is_empty());
            },
            _ => {},
        }

        list.check_invariants().unwrap();
    }
});
