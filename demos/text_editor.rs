//! Text Editor Example
//!
//! Demonstrates wiring a child component into a parent through
//! ComponentResult. Shows practical patterns including:
//! - A child update that queues an effect and notifies its caller
//! - Parent embedding via map_model / map_effect
//! - Consuming the notification with apply_notification
//! - Error recovery at the boundary with resolve_error
//! - Terminal resolution into (model, effects)

use confluence::{ComponentResult, NoNotification};

// ==================== Child Component ====================

#[derive(Debug, Clone, PartialEq)]
struct EditorModel {
    value: String,
    revert_value: String,
}

#[derive(Debug, Clone, PartialEq)]
enum EditorFx {
    RecordTimestamp,
}

#[derive(Debug, Clone, PartialEq)]
enum EditorNote {
    ValueAccepted(String),
}

#[derive(Debug, Clone, PartialEq)]
enum EditorMsg {
    Edit(String),
    Accept,
    Revert,
}

type EditorResult = ComponentResult<EditorModel, EditorFx, EditorNote, String>;

fn editor_init(value: &str) -> EditorModel {
    EditorModel {
        value: value.to_string(),
        revert_value: value.to_string(),
    }
}

fn editor_update(msg: EditorMsg, mut editor: EditorModel) -> EditorResult {
    match msg {
        EditorMsg::Edit(value) => {
            editor.value = value;
            ComponentResult::with_model(editor)
        }
        EditorMsg::Accept => {
            if editor.value.is_empty() {
                return ComponentResult::just_error("cannot accept an empty value".to_string());
            }
            let value = editor.value.clone();
            editor.revert_value = value.clone();
            ComponentResult::with_model(editor)
                .with_effect(EditorFx::RecordTimestamp)
                .with_notification(EditorNote::ValueAccepted(value))
        }
        EditorMsg::Revert => {
            editor.value = editor.revert_value.clone();
            ComponentResult::with_model(editor)
        }
    }
}

// ==================== Parent Component ====================

#[derive(Debug, Clone, PartialEq)]
struct PageModel {
    editor: EditorModel,
    status: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
enum PageFx {
    Editor(EditorFx),
}

type PageResult = ComponentResult<PageModel, PageFx, NoNotification, String>;

fn page_update(msg: EditorMsg, page: PageModel) -> PageResult {
    let status = page.status;
    editor_update(msg, page.editor)
        .map_effect(PageFx::Editor)
        .map_model(|editor| PageModel { editor, status })
        .apply_notification(|note, result| {
            let EditorNote::ValueAccepted(value) = note;
            result.map_model(|mut page| {
                page.status.push(format!("accepted: {value}"));
                page
            })
        })
}

// ==================== Examples ====================

/// Example 1: Edit then accept, resolved for the host runtime
fn example_accept_flow() {
    println!("\n=== Example 1: Accept Flow ===");

    let page = PageModel {
        editor: editor_init("hello"),
        status: Vec::new(),
    };

    let edited = page_update(EditorMsg::Edit("hello, world".to_string()), page);
    let page = edited
        .resolve_error(|err| {
            println!("  unexpected error: {err}");
            ComponentResult::with_model(PageModel {
                editor: editor_init(""),
                status: Vec::new(),
            })
        })
        .resolve()
        .0;

    let (page, effects) = page_update(EditorMsg::Accept, page)
        .resolve_error(|err| {
            println!("  unexpected error: {err}");
            ComponentResult::with_model(PageModel {
                editor: editor_init(""),
                status: Vec::new(),
            })
        })
        .resolve();

    println!("  status lines: {:?}", page.status);
    println!("  queued effects: {:?}", effects.into_vec());
}

/// Example 2: The error path defers recovery to the caller
fn example_error_recovery() {
    println!("\n=== Example 2: Error Recovery ===");

    let page = PageModel {
        editor: editor_init(""),
        status: Vec::new(),
    };

    let (page, effects) = page_update(EditorMsg::Accept, page)
        .resolve_error(|err| {
            println!("  recovering from: {err}");
            ComponentResult::with_model(PageModel {
                editor: editor_init("(default)"),
                status: vec![format!("error: {err}")],
            })
        })
        .resolve();

    println!("  recovered model: {:?}", page.editor.value);
    println!("  status lines: {:?}", page.status);
    println!("  effects after failure: {:?}", effects.into_vec());
}

/// Example 3: Escape for branch-by-branch inspection
fn example_escape() {
    println!("\n=== Example 3: Escape ===");

    let result = editor_update(EditorMsg::Accept, editor_init("draft"));
    println!("  outcome: {:?}", result.escape());

    let failed = editor_update(EditorMsg::Accept, editor_init(""));
    println!("  outcome: {:?}", failed.escape());
}

fn main() {
    println!("Text Editor Examples");
    println!("====================");

    example_accept_flow();
    example_error_recovery();
    example_escape();

    println!("\n=== All examples completed successfully! ===");
}
