//! Infeasible condition view: recalculation ordering and derived counts.

mod common;

use common::{FakeConflict, sink};
use gmcr_editor::{
    EditorError, EditorEvent, InfeasibleView, ListKind, Selected, Selection,
};
use gmcr_model::{Entry, ModelError};

fn render(view: &InfeasibleView) -> String {
    view.rows()
        .iter()
        .map(|row| {
            format!(
                "{} {} described={} removed={}{}",
                row.index,
                row.state,
                row.states_described,
                row.states_removed,
                if row.selected { " (selected)" } else { "" },
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn loaded_view(conflict: &mut FakeConflict) -> InfeasibleView {
    let mut view = InfeasibleView::new();
    view.refresh(conflict).unwrap();
    view
}

#[test]
fn refresh_builds_rows_from_recalculated_model() {
    let mut conflict = FakeConflict::with_infeasibles(&["YN-", "--Y", "NNN"]);
    let view = loaded_view(&mut conflict);

    assert_eq!(conflict.recalculations, 1);
    insta::assert_snapshot!(render(&view), @r"
    0 YN- described=2 removed=1
    1 --Y described=4 removed=2
    2 NNN described=1 removed=3
    ");
}

#[test]
fn refresh_of_empty_list_skips_recalculation() {
    let mut conflict = FakeConflict::default();
    let view = loaded_view(&mut conflict);
    assert_eq!(conflict.recalculations, 0);
    assert!(view.rows().is_empty());
}

#[test]
fn move_recalculates_once_before_rows_are_rebuilt() {
    let mut conflict = FakeConflict::with_infeasibles(&["YN-", "--Y", "NNN"]);
    let mut view = loaded_view(&mut conflict);
    view.select(&conflict, Some(2), &mut sink());

    assert!(view.move_up(&mut conflict, &mut sink()).unwrap());

    assert_eq!(conflict.recalculations, 2);
    assert_eq!(conflict.infeasible_names(), vec!["YN-", "NNN", "--Y"]);
    insta::assert_snapshot!(render(&view), @r"
    0 YN- described=2 removed=1
    1 NNN described=1 removed=2 (selected)
    2 --Y described=4 removed=3
    ");
}

#[test]
fn structural_event_precedes_recalculation_and_selection_follows() {
    let mut conflict = FakeConflict::with_infeasibles(&["Y--", "N--"]);
    let mut view = loaded_view(&mut conflict);
    let (mut tx, rx) = crossbeam_channel::unbounded();
    conflict.observed = Some(rx.clone());

    view.select(&conflict, Some(0), &mut tx);
    view.move_down(&mut conflict, &mut tx).unwrap();

    let moved = conflict.infeasibles.get(1).unwrap().id();
    assert_eq!(
        conflict.events_before_recalc,
        vec![vec![
            EditorEvent::SelectionChanged {
                list: ListKind::Infeasibles,
                selected: Some(Selected {
                    index: 0,
                    id: moved,
                }),
            },
            EditorEvent::StructureChanged {
                list: ListKind::Infeasibles,
            },
        ]]
    );
    let after: Vec<EditorEvent> = rx.try_iter().collect();
    assert_eq!(
        after,
        vec![EditorEvent::SelectionChanged {
            list: ListKind::Infeasibles,
            selected: Some(Selected {
                index: 1,
                id: moved,
            }),
        }]
    );
}

#[test]
fn boundary_move_does_not_recalculate() {
    let mut conflict = FakeConflict::with_infeasibles(&["Y-", "N-"]);
    let mut view = loaded_view(&mut conflict);
    view.select(&conflict, Some(0), &mut sink());
    let mut events = sink();

    assert!(!view.move_up(&mut conflict, &mut events).unwrap());
    assert_eq!(conflict.recalculations, 1);
    assert!(events.is_empty());
}

#[test]
fn delete_recalculates_and_rehomes_selection() {
    let mut conflict = FakeConflict::with_infeasibles(&["Y-", "N-", "--"]);
    let mut view = loaded_view(&mut conflict);
    view.select(&conflict, Some(2), &mut sink());

    assert!(view.delete(&mut conflict, &mut sink()).unwrap());

    assert_eq!(conflict.recalculations, 2);
    assert_eq!(view.selection(), Selection::Entry(1));
    insta::assert_snapshot!(render(&view), @r"
    0 Y- described=2 removed=1
    1 N- described=2 removed=2 (selected)
    ");
}

#[test]
fn delete_without_selection_is_a_no_op() {
    let mut conflict = FakeConflict::with_infeasibles(&["Y-"]);
    let mut view = loaded_view(&mut conflict);

    assert!(!view.delete(&mut conflict, &mut sink()).unwrap());
    assert_eq!(conflict.recalculations, 1);
    assert_eq!(conflict.infeasible_names(), vec!["Y-"]);
}

#[test]
fn deleting_last_condition_still_recalculates() {
    let mut conflict = FakeConflict::with_infeasibles(&["Y-"]);
    let mut view = loaded_view(&mut conflict);
    view.select(&conflict, Some(0), &mut sink());

    view.delete(&mut conflict, &mut sink()).unwrap();

    assert_eq!(conflict.recalculations, 2);
    assert!(view.rows().is_empty());
    assert_eq!(view.selection(), Selection::Unselected);
}

#[test]
fn recalculation_failure_propagates_without_selection_event() {
    let mut conflict = FakeConflict::with_infeasibles(&["Y-", "N-"]);
    let mut view = loaded_view(&mut conflict);
    view.select(&conflict, Some(0), &mut sink());
    conflict.fail_with = Some("solver unavailable".to_string());
    let mut events = sink();

    let err = view.move_down(&mut conflict, &mut events).unwrap_err();

    assert!(matches!(
        err,
        EditorError::Model(ModelError::Recalculation(ref msg)) if msg == "solver unavailable"
    ));
    assert_eq!(conflict.infeasible_names(), vec!["N-", "Y-"]);
    assert_eq!(
        events,
        vec![EditorEvent::StructureChanged {
            list: ListKind::Infeasibles,
        }]
    );
}

#[test]
fn selecting_marks_row_without_recalculating() {
    let mut conflict = FakeConflict::with_infeasibles(&["Y-", "N-"]);
    let mut view = loaded_view(&mut conflict);

    view.select(&conflict, Some(1), &mut sink());

    assert_eq!(conflict.recalculations, 1);
    assert!(view.rows()[1].selected);
    assert!(!view.rows()[0].selected);
    assert_eq!(view.selected(&conflict).map(|s| s.index), Some(1));
}

#[test]
fn selecting_past_end_clears_selection() {
    let mut conflict = FakeConflict::with_infeasibles(&["Y-"]);
    let mut view = loaded_view(&mut conflict);

    assert_eq!(view.select(&conflict, Some(1), &mut sink()), Selection::Unselected);
    assert!(view.rows().iter().all(|row| !row.selected));
}
