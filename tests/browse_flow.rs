use chrono::{DateTime, TimeZone, Utc};
use commentary::app::handle_event_at;
use commentary::domain::{PageSize, SortDirection, SortKey};
use commentary::{initialize, Action, Config, Event, InputMode, LoadState, Record};

fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000 + secs, 0).single().expect("valid timestamp")
}

fn feed(count: i64) -> Vec<u8> {
    let names = ["delta", "Alpha", "charlie", "bravo"];
    let records: Vec<Record> = (1..=count)
        .map(|id| {
            let idx = usize::try_from(id).expect("positive") % names.len();
            Record {
                id,
                post_id: (id - 1) / 5 + 1,
                name: format!("{} {id}", names[idx]),
                email: format!("{}{id}@example.org", names[idx].to_lowercase()),
                body: format!("comment body number {id}\nsecond line"),
            }
        })
        .collect();
    serde_json::to_vec(&records).expect("serializable")
}

fn send(state: &mut commentary::AppState, event: Event) -> Vec<Action> {
    handle_event_at(state, &event, at(0)).expect("event handled").1
}

fn loaded(count: i64) -> commentary::AppState {
    let mut state = initialize(&Config::default());
    let actions = send(
        &mut state,
        Event::PermissionsResult {
            granted: vec![zellij_tile::prelude::PermissionType::WebAccess],
        },
    );
    assert!(matches!(actions.as_slice(), [Action::FetchRecords(_)]));
    send(&mut state, Event::RecordsFetched { status: 200, body: feed(count) });
    state
}

#[test]
fn keeps_only_the_first_three_hundred_records() {
    let state = loaded(500);
    assert_eq!(state.load, LoadState::Ready);
    assert_eq!(state.store.len(), 300);
    assert_eq!(state.store.all().last().map(|r| r.id), Some(300));
    assert_eq!(state.total_pages(), 30);
}

#[test]
fn search_sort_and_paging_compose() {
    let mut state = loaded(40);

    send(&mut state, Event::SearchMode);
    for c in "ALPHA".chars() {
        send(&mut state, Event::Char(c));
    }
    send(&mut state, Event::Submit);
    assert_eq!(state.input_mode, InputMode::Normal);
    assert_eq!(state.view.len(), 10);
    assert!(state.view.iter().all(|r| r.name.starts_with("Alpha")));

    send(&mut state, Event::SortBy(SortKey::Name));
    send(&mut state, Event::SortBy(SortKey::Name));
    let spec = state.sort.expect("sorted");
    assert_eq!(spec.direction, SortDirection::Descending);
    let names: Vec<&str> = state.view.iter().map(|r| r.name.as_str()).collect();
    let mut expected = names.clone();
    expected.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(names, expected);

    send(&mut state, Event::CyclePageSize(false));
    assert_eq!(state.page_size, PageSize::Five);
    send(&mut state, Event::LastPage);
    assert_eq!(state.page, 2);
    send(&mut state, Event::NextPage);
    assert_eq!(state.page, 2);

    send(&mut state, Event::Escape);
    assert_eq!(state.view.len(), 40);
    assert_eq!(state.page, 1);
}

#[test]
fn no_matches_means_zero_pages() {
    let mut state = loaded(12);
    send(&mut state, Event::SearchMode);
    for c in "zzz".chars() {
        send(&mut state, Event::Char(c));
    }
    assert_eq!(state.total_pages(), 0);
    assert_eq!(state.page, 1);
    assert!(state.selected_record().is_none());
    assert!(send(&mut state, Event::DeleteSelected).is_empty());

    let vm = state.compute_viewmodel(30, 120);
    assert!(vm.display_items.is_empty());
    assert_eq!(vm.pager.text, "No comments match \"zzz\"");
}

#[test]
fn edit_delete_and_toasts() {
    let mut state = loaded(12);
    send(&mut state, Event::KeyDown);
    let target = state.selected_record().expect("row selected").id;

    send(&mut state, Event::EditSelected);
    assert_eq!(state.editing, Some(target));
    for _ in 0..state.form.name.chars().count() {
        send(&mut state, Event::Backspace);
    }
    for c in "Renamed".chars() {
        send(&mut state, Event::Char(c));
    }
    let actions = send(&mut state, Event::Submit);
    assert_eq!(actions, vec![Action::ScheduleTick(3.0)]);
    assert_eq!(state.store.get(target).map(|r| r.name.as_str()), Some("Renamed"));

    send(&mut state, Event::DeleteSelected);
    assert!(state.store.get(target).is_none());
    assert_eq!(state.store.len(), 11);

    let messages: Vec<&str> = state.toasts.visible().iter().map(|t| t.message.as_str()).collect();
    assert_eq!(messages, vec!["Comment updated", "Comment deleted"]);

    let (render, actions) = handle_event_at(&mut state, &Event::Tick, at(5)).expect("tick handled");
    assert!(render);
    assert!(actions.is_empty());
    assert!(state.toasts.is_empty());
}

#[test]
fn failed_fetch_blocks_interaction() {
    let mut state = initialize(&Config::default());
    send(
        &mut state,
        Event::RecordsFetched {
            status: 400,
            body: b"connection refused".to_vec(),
        },
    );
    assert_eq!(
        state.load,
        LoadState::Failed("Request failed with status 400: connection refused".to_string())
    );

    assert!(send(&mut state, Event::NewRecord).is_empty());
    assert_eq!(state.input_mode, InputMode::Normal);

    let vm = state.compute_viewmodel(24, 100);
    let screen = vm.empty_state.expect("error screen");
    assert!(screen.is_error);
    assert_eq!(screen.subtitle, "Request failed with status 400: connection refused");
}
