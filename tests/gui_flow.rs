// tests/gui_flow.rs
//
// Drives App + actions without a window: the two-state view machine,
// note editing and saving, and background loading.
mod common;

use std::time::{Duration, Instant};

use assembly_search::config::options::{DataSource, NotesBackend};
use assembly_search::config::state::AppState;
use assembly_search::dataset::{self, LoadError};
use assembly_search::gui::actions;
use assembly_search::gui::app::{open_notes_or_memory, App, View};
use assembly_search::notes::NoteKey;
use assembly_search::render::Document;

fn app_in(name: &str) -> (App, std::path::PathBuf) {
    let dir = common::tmp_dir(name);
    let notes_path = dir.join("notes.json");
    let mut state = AppState::default();
    state.options.notes = NotesBackend::File(notes_path.clone());
    let ds = dataset::parse(common::SAMPLE).unwrap();
    (App::with_dataset(state, ds, open_notes_or_memory), notes_path)
}

fn search(app: &mut App, q: &str) {
    app.state.gui.query = q.to_string();
    actions::search(app);
}

#[test]
fn starts_idle_and_blank_query_stays_idle() {
    let (mut app, notes_path) = app_in("gui_blank");
    assert_eq!(app.view, View::Idle { message: None });
    assert_eq!(app.status, "3 record(s)");

    search(&mut app, "   ");
    assert_eq!(app.view, View::Idle { message: Some("검색할 이름을 입력해주세요.".into()) });
    assert!(!notes_path.exists(), "blank query must not touch the notes store");
}

#[test]
fn not_found_is_a_results_view() {
    let (mut app, _) = app_in("gui_not_found");
    search(&mut app, "없는사람");
    assert_eq!(app.view, View::Results(Document::NotFound { query: "없는사람".into() }));

    // back to idle only through another (blank) search
    search(&mut app, "");
    assert!(matches!(app.view, View::Idle { message: Some(_) }));
}

#[test]
fn edit_save_and_reload_note() {
    let (mut app, notes_path) = app_in("gui_save");
    search(&mut app, "박지은");

    let View::Results(doc) = &mut app.view else { panic!("expected results") };
    assert_eq!(doc.blocks().len(), 2);
    let editor = doc.blocks_mut()[1].note.as_mut().unwrap();
    assert_eq!(editor.key, NoteKey::new("박정민", "박지은"));
    assert_eq!(editor.text, "");
    editor.text = "정책 담당".into();

    actions::save_note(&mut app, 1);
    assert!(app.note_saved);
    assert!(notes_path.exists());
    assert_eq!(app.notes.load(&NoteKey::new("박정민", "박지은")), "정책 담당");
    assert_eq!(app.notes.load(&NoteKey::new("김영수", "박지은")), "");

    // A new session on the same store sees the note pre-filled
    let mut state = AppState::default();
    state.options.notes = NotesBackend::File(notes_path);
    let mut next = App::with_dataset(state, dataset::parse(common::SAMPLE).unwrap(), open_notes_or_memory);
    search(&mut next, "지은");
    let View::Results(doc) = &next.view else { panic!("expected results") };
    assert_eq!(doc.blocks()[1].note.as_ref().unwrap().text, "정책 담당");
    assert_eq!(doc.blocks()[0].note.as_ref().unwrap().text, "");
}

#[test]
fn subject_block_has_no_editor_to_save() {
    let (mut app, notes_path) = app_in("gui_subject");
    search(&mut app, "김영수");
    assert!(app.view != View::Idle { message: None });
    actions::save_note(&mut app, 0);
    assert!(!app.note_saved);
    assert!(!notes_path.exists());

    // Out of range is ignored too
    actions::save_note(&mut app, 9);
    assert!(!app.note_saved);
}

#[test]
fn load_failure_shows_inline_message() {
    let (mut app, _) = app_in("gui_load_fail");
    app.apply_load(Err(LoadError::Http { status: "HTTP/1.0 404 Not Found".into() }));
    let View::Idle { message: Some(msg) } = &app.view else { panic!("expected idle message") };
    assert!(msg.starts_with("데이터를 불러오는 중 오류가 발생했습니다:"));
    assert!(msg.ends_with("404 Not Found"));
}

#[test]
fn background_load_lands_on_poll() {
    let dir = common::tmp_dir("gui_bg_load");
    let data = common::write_sample(&dir);
    let mut state = AppState::default();
    state.options.data = DataSource::File(data);
    state.options.notes = NotesBackend::Memory;

    let mut app = App::new(state, None);
    let deadline = Instant::now() + Duration::from_secs(10);
    while app.is_loading() && Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(10));
        app.poll_load();
    }
    assert!(!app.is_loading());
    assert_eq!(app.dataset.len(), 3);
    assert_eq!(app.status, "3 record(s)");
}

#[test]
fn broken_notes_file_falls_back_to_memory() {
    let dir = common::tmp_dir("gui_broken_notes");
    let notes_path = dir.join("notes.json");
    std::fs::write(&notes_path, "not json").unwrap();

    let mut state = AppState::default();
    state.options.notes = NotesBackend::File(notes_path.clone());
    let mut app = App::with_dataset(state, dataset::parse(common::SAMPLE).unwrap(), open_notes_or_memory);
    assert!(app.status.starts_with("Notes not persisted"));

    let key = NoteKey::new("Kim", "Park");
    app.notes.save(&key, "kept for now");
    assert_eq!(app.notes.load(&key), "kept for now");
    assert_eq!(std::fs::read_to_string(&notes_path).unwrap(), "not json");
}
