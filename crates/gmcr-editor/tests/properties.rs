//! Property tests for list reordering and removal.

use std::collections::HashSet;

use gmcr_editor::{EditorEvent, ListKind, SelectableList, Selection};
use gmcr_model::{EntryId, Options, OrderedCollection};
use proptest::prelude::*;

fn options(len: usize) -> Options {
    let mut options = Options::new();
    for n in 0..len {
        options.push_new(format!("opt{n}"));
    }
    options
}

fn ids(options: &Options) -> Vec<EntryId> {
    (0..options.len())
        .filter_map(|index| options.id_at(index))
        .collect()
}

fn list() -> SelectableList {
    SelectableList::new(ListKind::Options(EntryId::new(1)))
}

// A list length together with a valid selected index.
prop_compose! {
    fn list_with_selection()
        (len in 1usize..12)
        (len in Just(len), index in 0..len)
        -> (usize, usize)
    {
        (len, index)
    }
}

proptest! {
    #[test]
    fn prop_move_up_then_down_restores_order((len, index) in list_with_selection()) {
        prop_assume!(index > 0);
        let mut entries = options(len);
        let before = ids(&entries);
        let mut list = list();
        let mut events: Vec<EditorEvent> = Vec::new();
        list.select(&entries, Some(index), &mut events);

        prop_assert!(list.move_up(&mut entries, &mut events).unwrap());
        prop_assert!(list.move_down(&mut entries, &mut events).unwrap());

        prop_assert_eq!(ids(&entries), before);
        prop_assert_eq!(list.selection(), Selection::Entry(index));
    }

    #[test]
    fn prop_selection_follows_moved_entry(
        (len, index) in list_with_selection(),
        down in any::<bool>()
    ) {
        let mut entries = options(len);
        let mut list = list();
        let mut events: Vec<EditorEvent> = Vec::new();
        list.select(&entries, Some(index), &mut events);
        let selected = entries.id_at(index);

        list.move_down(&mut entries, &mut events).unwrap();
        if !down {
            list.move_up(&mut entries, &mut events).unwrap();
        }

        let now = list.selection().index().and_then(|i| entries.id_at(i));
        prop_assert_eq!(now, selected);
    }

    #[test]
    fn prop_delete_shrinks_by_one_and_keeps_ids_unique(
        (len, index) in list_with_selection()
    ) {
        let mut entries = options(len);
        let mut list = list();
        let mut events: Vec<EditorEvent> = Vec::new();
        list.select(&entries, Some(index), &mut events);
        let removed = entries.id_at(index);

        prop_assert!(list.delete(&mut entries, &mut events).unwrap());

        let remaining = ids(&entries);
        prop_assert_eq!(remaining.len(), len - 1);
        let unique: HashSet<_> = remaining.iter().collect();
        prop_assert_eq!(unique.len(), remaining.len());
        prop_assert!(!remaining.iter().any(|id| Some(*id) == removed));
        match list.selection() {
            Selection::Entry(i) => {
                prop_assert!(i < remaining.len());
            }
            other => {
                prop_assert_eq!(other, Selection::Unselected);
            }
        }
    }

    #[test]
    fn prop_new_ids_never_reuse_removed_ones(len in 1usize..8, extra in 1usize..5) {
        let mut entries = options(len);
        let first = entries.id_at(0);
        let mut list = list();
        let mut events: Vec<EditorEvent> = Vec::new();
        list.select(&entries, Some(0), &mut events);
        list.delete(&mut entries, &mut events).unwrap();

        for n in 0..extra {
            let id = entries.push_new(format!("extra{n}"));
            prop_assert_ne!(Some(id), first);
        }
    }
}
