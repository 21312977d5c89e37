//! # Skills-board integration tests
//!
//! Drive [`SkillsBoard`] through user actions against an in-memory backend
//! and check what reaches the server.

mod common;

use bach_core::responses::ItemFileResponse;
use bach_core::{AssignOutcome, HierarchyDocument, Kind, TaskPriority};
use bach_ui::board::{AGENT_TASK_PROJECT, DropOutcome};
use bach_ui::detail::InfoBody;
use bach_ui::notify::Level;
use bach_ui::prefs::EXPANDED_SECTIONS_KEY;
use bach_ui::{
    BoardError, DragState, DropZone, LoadSource, MemoryPreferences, PreferenceStore, SkillsBoard, SourceState, Tab,
};
use common::FakeBackend;
use pretty_assertions::assert_eq;
use serde_json::json;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn hierarchy() -> serde_json::Value {
    json!({
        "_meta": {"version": 3},
        "items": {
            "agents": [{"id": "a1", "name": "Ati"}, {"id": "steuer", "name": "Steuer"}],
            "experts": [{"id": "e1", "name": "Report Writer"}],
            "skills": [
                {"id": "s1", "name": "Scan", "description": "skills/scan.md"},
                {"id": "s2", "name": "Parse"}
            ],
            "services": [],
            "workflows": []
        },
        "assignments": {}
    })
}

async fn board_with(document: serde_json::Value) -> (SkillsBoard<FakeBackend, MemoryPreferences>, FakeBackend) {
    let backend = FakeBackend::with_document(document);
    let mut board = SkillsBoard::new(backend.clone(), MemoryPreferences::default());
    assert_eq!(board.load().await, LoadSource::Server);
    (board, backend)
}

fn last_level(board: &SkillsBoard<FakeBackend, MemoryPreferences>) -> Option<(Level, String)> {
    board
        .notification()
        .map(|notification| (notification.level, notification.message.clone()))
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unreachable_server_shows_the_empty_skeleton() {
    let backend = FakeBackend::default();
    let mut board = SkillsBoard::new(backend.clone(), MemoryPreferences::default());

    assert_eq!(board.load().await, LoadSource::Fallback);
    assert_eq!(board.document(), &HierarchyDocument::default());
    assert_eq!(last_level(&board).map(|(level, _)| level), Some(Level::Warning));

    let tree = board.tree();
    assert_eq!(tree.sections.len(), 5);
    assert!(tree.sections.iter().all(|section| section.rows.is_empty()));
}

#[tokio::test]
async fn skeleton_is_never_written_back() {
    let backend = FakeBackend::default();
    let mut board = SkillsBoard::new(backend.clone(), MemoryPreferences::default());
    assert_eq!(board.load().await, LoadSource::Fallback);

    assert!(matches!(
        board.assign("ati", Kind::Skill, "s1").await,
        Err(BoardError::NotLoaded)
    ));
    assert_eq!(backend.save_count(), 0);
    assert_eq!(last_level(&board).map(|(level, _)| level), Some(Level::Error));

    backend.state().document = Some(serde_json::from_value(hierarchy()).unwrap());
    assert_eq!(board.load().await, LoadSource::Server);
    board.assign("a1", Kind::Skill, "s1").await.unwrap();
    assert_eq!(backend.save_count(), 1);
    assert!(backend.last_saved().unwrap().extra.contains_key("_meta"));
}

#[tokio::test]
async fn workflows_with_foreign_step_types_still_load() {
    let mut document = hierarchy();
    document["items"]["workflows"] = json!([
        {"id": "w1", "name": "Imported", "steps": [{"id": "t1", "type": "tool"}]}
    ]);
    let (mut board, backend) = board_with(document).await;

    board.assign("a1", Kind::Workflow, "w1").await.unwrap();
    let saved = backend.last_saved().unwrap();
    let steps = saved.find(Kind::Workflow, "w1").unwrap().steps.clone().unwrap();
    assert_eq!(steps[0].step_type, "tool");
}

// ---------------------------------------------------------------------------
// Drag and drop
// ---------------------------------------------------------------------------

#[tokio::test]
async fn dropping_a_skill_on_an_unnamed_agent_assigns_and_saves() {
    let (mut board, backend) = board_with(json!({
        "items": {
            "agents": [{"id": "ati", "name": ""}],
            "skills": [{"id": "s1", "name": "Scan"}]
        },
        "assignments": {}
    }))
    .await;

    let tree = board.tree();
    let row = tree.section(Kind::Agent).and_then(|s| s.row("ati")).cloned().unwrap();
    assert_eq!(row.label, "ati");
    assert_eq!(row.badge, None);
    assert_eq!(row.assignment_count, 0);

    assert!(board.select(Kind::Agent, "ati"));
    let InfoBody::Agent { sections, .. } = board.info().unwrap().body else {
        panic!("agent detail expected");
    };
    let zone = sections
        .iter()
        .find(|section| section.kind == Kind::Skill)
        .map(|section| section.zone.clone())
        .unwrap();

    board.drag_start(Kind::Skill, "s1").unwrap();
    assert!(board.drag_over(&zone));
    let outcome = board.drop_on(&zone).await.unwrap();
    board.drag_end();

    assert_eq!(outcome, DropOutcome::Assigned(AssignOutcome::Assigned));
    let saved = backend.last_saved().unwrap();
    assert_eq!(saved.assignments["ati"].skills, vec!["s1".to_string()]);

    let tree = board.tree();
    let row = tree.section(Kind::Agent).and_then(|s| s.row("ati")).unwrap();
    assert_eq!(row.badge, Some(1));
}

#[tokio::test]
async fn mismatched_drop_changes_nothing() {
    let (mut board, backend) = board_with(hierarchy()).await;
    let before = board.document().clone();

    board.drag_start(Kind::Skill, "s1").unwrap();
    let experts = DropZone::assignment("a1", Kind::Expert);
    assert!(!board.drag_over(&experts));
    assert_eq!(board.drop_on(&experts).await.unwrap(), DropOutcome::Ignored);
    board.drag_end();

    assert_eq!(board.document(), &before);
    assert_eq!(backend.save_count(), 0);
}

#[tokio::test]
async fn agents_cannot_be_dragged() {
    let (mut board, _backend) = board_with(hierarchy()).await;
    assert!(matches!(
        board.drag_start(Kind::Agent, "a1"),
        Err(BoardError::Core(_))
    ));
}

#[tokio::test]
async fn dropping_on_the_flow_panel_appends_a_step() {
    let (mut board, backend) = board_with(hierarchy()).await;

    board.drag_start(Kind::Expert, "e1").unwrap();
    let outcome = board.drop_on(&DropZone::flow()).await.unwrap();
    board.drag_end();

    assert_eq!(outcome, DropOutcome::AddedToFlow);
    assert_eq!(board.flow().len(), 1);
    assert_eq!(backend.save_count(), 0);
}

#[tokio::test]
async fn leaving_a_zone_keeps_the_drag_alive() {
    let (mut board, _backend) = board_with(hierarchy()).await;

    board.drag_start(Kind::Skill, "s2").unwrap();
    let skills = DropZone::assignment("a1", Kind::Skill);
    assert!(board.drag_over(&skills));
    assert_eq!(board.drag().highlighted(), Some(&skills));

    board.drag_leave();
    assert_eq!(board.drag().highlighted(), None);
    assert_eq!(board.drag().token().map(|token| token.id.as_str()), Some("s2"));

    board.drag_end();
    assert_eq!(board.drag().state(), &DragState::Idle);
}

// ---------------------------------------------------------------------------
// Assignments
// ---------------------------------------------------------------------------

#[tokio::test]
async fn assigning_twice_warns_and_saves_once() {
    let (mut board, backend) = board_with(hierarchy()).await;

    assert_eq!(
        board.assign("a1", Kind::Skill, "s1").await.unwrap(),
        AssignOutcome::Assigned
    );
    assert_eq!(
        board.assign("a1", Kind::Skill, "s1").await.unwrap(),
        AssignOutcome::AlreadyAssigned
    );

    assert_eq!(board.document().assignment_count("a1"), 1);
    assert_eq!(backend.save_count(), 1);
    assert_eq!(
        last_level(&board),
        Some((Level::Warning, "Already assigned".to_string()))
    );
}

#[tokio::test]
async fn removing_an_absent_assignment_is_a_no_op() {
    let (mut board, backend) = board_with(hierarchy()).await;
    let before = board.document().clone();

    assert!(!board.remove_assignment("a1", Kind::Skill, "s2").await.unwrap());
    assert_eq!(board.document(), &before);
    assert_eq!(backend.save_count(), 0);
}

#[tokio::test]
async fn failed_save_keeps_the_change_for_the_next_save() {
    let (mut board, backend) = board_with(hierarchy()).await;
    backend.state().fail_saves = true;

    let error = board.assign("a1", Kind::Skill, "s1").await.unwrap_err();
    assert!(matches!(error, BoardError::Client(_)));
    assert_eq!(board.document().assignment_count("a1"), 1);
    assert_eq!(last_level(&board).map(|(level, _)| level), Some(Level::Error));

    backend.state().fail_saves = false;
    board.assign("a1", Kind::Skill, "s2").await.unwrap();
    let saved = backend.last_saved().unwrap();
    assert_eq!(saved.assignments["a1"].skills, vec!["s1".to_string(), "s2".to_string()]);
}

#[tokio::test]
async fn saves_keep_fields_the_board_does_not_interpret() {
    let (mut board, backend) = board_with(hierarchy()).await;
    board.assign("a1", Kind::Expert, "e1").await.unwrap();

    let saved = serde_json::to_value(backend.last_saved().unwrap()).unwrap();
    assert_eq!(saved["_meta"], json!({"version": 3}));
}

// ---------------------------------------------------------------------------
// Tree state
// ---------------------------------------------------------------------------

#[tokio::test]
async fn search_does_not_touch_stored_expansion() {
    let (mut board, _backend) = board_with(hierarchy()).await;
    board.toggle_section(Kind::Skill);
    let stored = board.prefs().get_raw(EXPANDED_SECTIONS_KEY).unwrap();

    board.set_search("scan");
    let labels: Vec<String> = board.tree().visible_labels().map(str::to_string).collect();
    assert_eq!(labels, vec!["Scan".to_string()]);

    board.set_search("");
    assert_eq!(board.prefs().get_raw(EXPANDED_SECTIONS_KEY).unwrap(), stored);
}

// ---------------------------------------------------------------------------
// Detail panel
// ---------------------------------------------------------------------------

#[tokio::test]
async fn source_is_fetched_once_per_selection() {
    let (mut board, backend) = board_with(hierarchy()).await;
    backend.state().item_files.insert(
        (Kind::Skill, "s1".to_string()),
        ItemFileResponse {
            success: true,
            content: Some("# Scan".into()),
            path: Some("skills/scan.md".into()),
            absolute_path: Some("/opt/bach/skills/scan.md".into()),
            ..ItemFileResponse::default()
        },
    );

    board.select(Kind::Skill, "s1");
    assert!(matches!(board.activate_tab(Tab::Source).await, SourceState::Found(_)));
    board.activate_tab(Tab::Info).await;
    board.activate_tab(Tab::Source).await;
    assert_eq!(backend.state().item_fetches, 1);

    board.select(Kind::Skill, "s2");
    assert_eq!(board.detail().tab(), Tab::Info);
    board.select(Kind::Skill, "s1");
    board.activate_tab(Tab::Source).await;
    assert_eq!(backend.state().item_fetches, 2);
}

#[tokio::test]
async fn missing_source_is_reported_and_saving_is_refused() {
    let (mut board, backend) = board_with(hierarchy()).await;

    board.select(Kind::Skill, "s2");
    assert_eq!(
        board.activate_tab(Tab::Source).await,
        &SourceState::NotFound(Some("no source file".into()))
    );
    assert!(matches!(
        board.save_source("new").await,
        Err(BoardError::Validation(_))
    ));
    assert!(backend.state().written_files.is_empty());
}

#[tokio::test]
async fn saving_source_writes_to_the_absolute_path() {
    let (mut board, backend) = board_with(hierarchy()).await;
    backend.state().item_files.insert(
        (Kind::Skill, "s1".to_string()),
        ItemFileResponse {
            success: true,
            content: Some("old".into()),
            path: Some("skills/scan.md".into()),
            absolute_path: Some("/opt/bach/skills/scan.md".into()),
            ..ItemFileResponse::default()
        },
    );

    board.select(Kind::Skill, "s1");
    board.activate_tab(Tab::Source).await;
    assert_eq!(board.source_path().as_deref(), Some("skills/scan.md"));
    board.save_source("new").await.unwrap();

    assert_eq!(
        backend.state().written_files,
        vec![("/opt/bach/skills/scan.md".to_string(), "new".to_string())]
    );
    assert_eq!(board.detail().source_file().unwrap().content, "new");
}

// ---------------------------------------------------------------------------
// Editing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn blank_name_is_rejected_before_any_save() {
    let (mut board, backend) = board_with(hierarchy()).await;

    board.open_editor(Kind::Skill, "s1").unwrap().name = "  ".into();
    assert!(matches!(board.submit_edit().await, Err(BoardError::Validation(_))));
    assert_eq!(backend.save_count(), 0);
    assert!(board.editor_mut().is_some());
}

#[tokio::test]
async fn cancelled_edit_leaves_the_document_alone() {
    let (mut board, backend) = board_with(hierarchy()).await;
    let before = board.document().clone();

    board.open_editor(Kind::Skill, "s2").unwrap().name = "Renamed".into();
    board.cancel_edit();

    assert!(board.editor_mut().is_none());
    assert!(matches!(board.submit_edit().await, Err(BoardError::Validation(_))));
    assert_eq!(board.document(), &before);
    assert_eq!(backend.save_count(), 0);
}

#[tokio::test]
async fn edit_updates_tree_and_detail() {
    let (mut board, backend) = board_with(hierarchy()).await;
    board.select(Kind::Expert, "e1");

    let form = board.open_editor(Kind::Expert, "e1").unwrap();
    form.name = "Reporter".into();
    form.toggle_skill("s2", true);
    board.submit_edit().await.unwrap();

    assert!(board.editor_mut().is_none());
    assert_eq!(board.info().unwrap().title, "Reporter");
    let saved = backend.last_saved().unwrap();
    assert_eq!(saved.expert_skill_ids("e1"), ["s2".to_string()]);
    let tree = board.tree();
    assert_eq!(
        tree.section(Kind::Expert).and_then(|s| s.row("e1")).unwrap().label,
        "Reporter"
    );
}

// ---------------------------------------------------------------------------
// Team flow
// ---------------------------------------------------------------------------

#[tokio::test]
async fn flow_is_exported_as_a_workflow() {
    let (mut board, backend) = board_with(hierarchy()).await;
    board.add_to_flow(Kind::Agent, "a1").unwrap();
    board.add_to_flow(Kind::Skill, "s1").unwrap();

    let id = board.save_flow("Scan pipeline").await.unwrap();

    assert!(id.starts_with("workflow_"));
    assert!(board.flow().is_empty());
    let saved = backend.last_saved().unwrap();
    let workflow = saved.find(Kind::Workflow, &id).unwrap();
    assert_eq!(workflow.name, "Scan pipeline");
    assert!(workflow.description.contains("Ati → Scan"));
    assert_eq!(workflow.steps.as_ref().map(Vec::len), Some(2));
}

#[tokio::test]
async fn flow_steps_can_be_removed_and_cleared() {
    let (mut board, backend) = board_with(hierarchy()).await;
    assert!(board.toggle_flow_panel());
    board.select(Kind::Agent, "a1");
    assert!(matches!(
        board.info().unwrap().body,
        InfoBody::Agent { flow_visible: true, .. }
    ));

    board.add_to_flow(Kind::Agent, "a1").unwrap();
    board.add_to_flow(Kind::Skill, "s1").unwrap();
    board.add_to_flow(Kind::Skill, "s2").unwrap();
    assert!(board.remove_from_flow(1));
    assert!(!board.remove_from_flow(5));
    assert_eq!(board.flow().chain(), "Ati → Parse");
    assert_eq!(board.execute_flow().unwrap(), "Flow with 2 steps would run");

    board.clear_flow();
    assert!(board.flow().is_empty());
    assert_eq!(
        last_level(&board),
        Some((Level::Success, "Flow cleared".to_string()))
    );
    assert_eq!(backend.save_count(), 0);
}

#[tokio::test]
async fn empty_flow_cannot_be_saved_or_executed() {
    let (mut board, backend) = board_with(hierarchy()).await;

    assert!(matches!(board.save_flow("x").await, Err(BoardError::Validation(_))));
    assert!(matches!(board.execute_flow(), Err(BoardError::Validation(_))));
    assert_eq!(backend.save_count(), 0);
}

#[tokio::test]
async fn failed_flow_save_keeps_the_buffer() {
    let (mut board, backend) = board_with(hierarchy()).await;
    board.add_to_flow(Kind::Skill, "s1").unwrap();
    backend.state().fail_saves = true;

    assert!(board.save_flow("Pipeline").await.is_err());
    assert_eq!(board.flow().len(), 1);
}

// ---------------------------------------------------------------------------
// Agent tasks
// ---------------------------------------------------------------------------

#[tokio::test]
async fn agent_task_is_delegated_with_a_short_title() {
    let (mut board, backend) = board_with(hierarchy()).await;
    let description = "x".repeat(60);

    let task = board
        .submit_agent_task("a1", &description, TaskPriority::P2)
        .await
        .unwrap();

    assert_eq!(task.title, format!("[Ati] {}...", "x".repeat(50)));
    assert_eq!(task.project.as_deref(), Some(AGENT_TASK_PROJECT));
    assert_eq!(task.delegated_to.as_deref(), Some("a1"));
    assert_eq!(backend.state().tasks, vec![task]);
}

#[tokio::test]
async fn blank_agent_task_is_not_sent() {
    let (mut board, backend) = board_with(hierarchy()).await;

    assert!(matches!(
        board.submit_agent_task("a1", "   ", TaskPriority::P3).await,
        Err(BoardError::Validation(_))
    ));
    assert!(backend.state().tasks.is_empty());
}
