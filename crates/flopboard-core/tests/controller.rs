//! End-to-end controller behavior, driven purely through events.
//!
//! Covers the fetch trigger rules, the pagination reset policy, failure
//! presentation, idempotence, and the overlapping-fetch interleavings.

use flopboard_core::{
    FETCH_ERROR_TEXT, IntervalBoard, IntervalEffect, IntervalEvent, Phase, Ranking, WinnersEffect,
    WinnersEvent, WinnersList,
};
use flopboard_testing::fixtures;
use flopboard_types::{IntervalBuckets, WinnersPage};

fn settle_ok(list: &mut WinnersList, effect: WinnersEffect, page: WinnersPage) {
    let WinnersEffect::Fetch { seq, .. } = effect;
    list.apply(WinnersEvent::FetchSettled {
        seq,
        outcome: Ok(page),
    });
}

// Partial or non-numeric year input fetches nothing and leaves
// data/pagination untouched.
#[test]
fn partial_year_input_never_fetches() {
    let mut list = WinnersList::new();
    let mount = list.apply(WinnersEvent::Mounted).unwrap();
    settle_ok(&mut list, mount, fixtures::winners_page(12));

    let before = list.view().pagination;
    for input in ["1", "19", "199", "19x9", "year"] {
        let effect = list.apply(WinnersEvent::YearEdited(input.to_string()));
        assert!(effect.is_none(), "input {input:?} must not fetch");
        assert_eq!(list.view().pagination, before);
        assert_eq!(list.view().rows.len(), fixtures::winners_page(12).content.len());
        assert_eq!(list.year_input(), input, "displayed value still updates");
    }
}

// Empty or complete 4-digit input fetches with exactly that value.
#[test]
fn complete_year_input_fetches_with_that_year() {
    let mut list = WinnersList::new();
    list.apply(WinnersEvent::Mounted);

    let WinnersEffect::Fetch { query, .. } = list
        .apply(WinnersEvent::YearEdited("1999".to_string()))
        .unwrap();
    assert_eq!(query.year, "1999");

    let WinnersEffect::Fetch { query, .. } = list
        .apply(WinnersEvent::YearEdited(String::new()))
        .unwrap();
    assert_eq!(query.year, "");
}

// Changing the winner filter always fetches once and resets pagination
// to page 1 / size 5.
#[test]
fn winner_change_resets_pagination() {
    let mut list = WinnersList::new();
    let mount = list.apply(WinnersEvent::Mounted).unwrap();
    settle_ok(&mut list, mount, fixtures::winners_page(50));
    list.apply(WinnersEvent::PageChanged {
        current: 4,
        page_size: 10,
    });

    let WinnersEffect::Fetch { query, .. } =
        list.apply(WinnersEvent::WinnerSelected(false)).unwrap();
    assert!(!query.winner);
    assert_eq!(query.page, 1);
    assert_eq!(query.page_size, 5);

    // Reselecting the same value still fetches.
    assert!(list.apply(WinnersEvent::WinnerSelected(false)).is_some());
}

// Port rejection surfaces the fixed message, ends loading, keeps data.
#[test]
fn failure_presents_fixed_message_and_keeps_data() {
    let mut list = WinnersList::new();
    let mount = list.apply(WinnersEvent::Mounted).unwrap();
    settle_ok(&mut list, mount, fixtures::winners_page(3));
    let rows_before = list.view().rows.len();

    let WinnersEffect::Fetch { seq, .. } = list.apply(WinnersEvent::Retry).unwrap();
    list.apply(WinnersEvent::FetchSettled {
        seq,
        outcome: Err("503 service unavailable".to_string()),
    });

    let view = list.view();
    assert_eq!(view.error, Some(FETCH_ERROR_TEXT));
    assert!(!view.loading);
    assert_eq!(view.rows.len(), rows_before);
    assert_eq!(list.phase(), Phase::Error);
}

// Success clears the error, ends loading, adopts content and total.
#[test]
fn success_after_failure_clears_error() {
    let mut list = WinnersList::new();
    let WinnersEffect::Fetch { seq, .. } = list.apply(WinnersEvent::Mounted).unwrap();
    list.apply(WinnersEvent::FetchSettled {
        seq,
        outcome: Err("refused".to_string()),
    });
    assert_eq!(list.view().error, Some(FETCH_ERROR_TEXT));

    let retry = list.apply(WinnersEvent::Retry).unwrap();
    settle_ok(&mut list, retry, fixtures::winners_page(9));

    let view = list.view();
    assert_eq!(view.error, None);
    assert!(!view.loading);
    assert_eq!(view.pagination.total, 9);
    assert_eq!(list.phase(), Phase::Success);
}

// Replaying the identical query, settled in sequence, is idempotent.
#[test]
fn repeated_identical_query_is_idempotent() {
    let mut list = WinnersList::new();
    let mount = list.apply(WinnersEvent::Mounted).unwrap();
    settle_ok(&mut list, mount, fixtures::winners_page(5));
    let first = (
        list.view().loading,
        list.view().error.map(str::to_string),
        list.view().rows.to_vec(),
        list.view().pagination,
    );

    let retry = list.apply(WinnersEvent::Retry).unwrap();
    settle_ok(&mut list, retry, fixtures::winners_page(5));
    let second = (
        list.view().loading,
        list.view().error.map(str::to_string),
        list.view().rows.to_vec(),
        list.view().pagination,
    );

    assert_eq!(first, second);
}

// A snapshot mount resolves both rankings.
#[test]
fn interval_mount_populates_both_rankings() {
    let mut board = IntervalBoard::new();
    let IntervalEffect::Fetch { seq } = board.apply(IntervalEvent::Mounted).unwrap();
    board.apply(IntervalEvent::FetchSettled {
        seq,
        outcome: Ok(fixtures::interval_buckets()),
    });

    let min: Vec<&str> = board
        .ranking(Ranking::Min)
        .iter()
        .map(|e| e.producer.as_str())
        .collect();
    let max: Vec<&str> = board
        .ranking(Ranking::Max)
        .iter()
        .map(|e| e.producer.as_str())
        .collect();
    assert!(min.contains(&"John Doe"));
    assert!(max.contains(&"Jane Smith"));
}

// A snapshot mount rejection shows the fixed message.
#[test]
fn interval_failure_presents_fixed_message() {
    let mut board = IntervalBoard::new();
    let IntervalEffect::Fetch { seq } = board.apply(IntervalEvent::Mounted).unwrap();
    board.apply(IntervalEvent::FetchSettled {
        seq,
        outcome: Err("dns failure".to_string()),
    });
    assert_eq!(board.error(), Some(FETCH_ERROR_TEXT));
}

// Typing "19" fires nothing; completing to "1999" fires once.
#[test]
fn year_typing_sequence_fetches_once() {
    let mut list = WinnersList::new();
    list.apply(WinnersEvent::Mounted);

    assert!(list.apply(WinnersEvent::YearEdited("19".to_string())).is_none());

    let mut effects = Vec::new();
    if let Some(e) = list.apply(WinnersEvent::YearEdited("1999".to_string())) {
        effects.push(e);
    }
    assert_eq!(effects.len(), 1);
    let WinnersEffect::Fetch { query, .. } = effects.remove(0);
    assert_eq!(query.year, "1999");
}

// Selecting winner "No" fetches with winner=false and the
// filter-reset cursor.
#[test]
fn winner_no_selection_uses_reset_cursor() {
    let mut list = WinnersList::new();
    list.apply(WinnersEvent::Mounted);

    let WinnersEffect::Fetch { query, .. } =
        list.apply(WinnersEvent::WinnerSelected(false)).unwrap();
    assert!(!query.winner);
    assert_eq!((query.page, query.page_size), (1, 5));
}

// The most recently initiated query wins regardless of resolution order.
#[test]
fn resolution_order_does_not_decide_final_state() {
    let mut list = WinnersList::new();
    let WinnersEffect::Fetch { seq: a, .. } = list.apply(WinnersEvent::Mounted).unwrap();
    let WinnersEffect::Fetch { seq: b, .. } = list
        .apply(WinnersEvent::YearEdited("1985".to_string()))
        .unwrap();
    let WinnersEffect::Fetch { seq: c, .. } = list
        .apply(WinnersEvent::PageChanged {
            current: 2,
            page_size: 5,
        })
        .unwrap();

    // Settle out of order: c (newest) first, then a, then b.
    list.apply(WinnersEvent::FetchSettled {
        seq: c,
        outcome: Ok(WinnersPage {
            content: fixtures::winners_page(1).content,
            total_elements: 111,
        }),
    });
    list.apply(WinnersEvent::FetchSettled {
        seq: a,
        outcome: Ok(WinnersPage {
            content: vec![],
            total_elements: 222,
        }),
    });
    list.apply(WinnersEvent::FetchSettled {
        seq: b,
        outcome: Err("slow failure".to_string()),
    });

    let view = list.view();
    assert_eq!(view.pagination.total, 111);
    assert_eq!(view.error, None);
    assert!(!view.rows.is_empty());
}

// A refresh racing the snapshot keeps the newest payload.
#[test]
fn interval_refresh_supersedes_mount() {
    let mut board = IntervalBoard::new();
    let IntervalEffect::Fetch { seq: mount } = board.apply(IntervalEvent::Mounted).unwrap();
    let IntervalEffect::Fetch { seq: refresh } =
        board.apply(IntervalEvent::Refresh(Ranking::Max)).unwrap();

    board.apply(IntervalEvent::FetchSettled {
        seq: refresh,
        outcome: Ok(fixtures::interval_buckets()),
    });
    board.apply(IntervalEvent::FetchSettled {
        seq: mount,
        outcome: Ok(IntervalBuckets {
            min: vec![],
            max: vec![],
        }),
    });

    assert!(!board.ranking(Ranking::Min).is_empty());
}
