use linksnip::app::{App, ViewUpdate};
use linksnip::services::preview::{FolderContent, ListView, RenderModel};
use linksnip::types::entry::{EntryFields, EntryType, ItemCandidate};
use linksnip::types::errors::{
    CommandError, ParseError, SettingsError, StoreError, ValidationError,
};
use linksnip::types::settings::{EmptyFolderPolicy, GeneratorSettings, QuotePolicy, RemovePolicy};

fn folder_fields(title: &str) -> EntryFields {
    EntryFields {
        title: title.to_string(),
        entry_type: "FOLDER".to_string(),
        ..EntryFields::default()
    }
}

#[test]
fn test_starts_as_direct_link_with_no_items() {
    let app = App::new();
    assert_eq!(app.entry_type(), EntryType::LinkDirect);
    assert!(app.items().is_empty());
    assert!(matches!(app.item_list(), ListView::Empty { .. }));
}

#[test]
fn test_submit_add_returns_view_updates() {
    let mut app = App::new();
    app.change_type(EntryType::Folder);

    let updates = app
        .submit_add(ItemCandidate::new("A", "https://a", "", ""))
        .unwrap();
    assert_eq!(
        updates,
        vec![
            ViewUpdate::ClearItemInputs,
            ViewUpdate::RenderItemList,
            ViewUpdate::RefreshPreview
        ]
    );
    assert_eq!(app.items().len(), 1);
}

#[test]
fn test_failed_add_changes_nothing() {
    let mut app = App::new();
    app.change_type(EntryType::Folder);

    let err = app
        .submit_add(ItemCandidate::new("A", "  ", "", ""))
        .unwrap_err();
    assert!(matches!(
        err,
        CommandError::Store(StoreError::Validation(ValidationError::MissingTarget))
    ));
    assert!(app.items().is_empty());
}

#[test]
fn test_submit_remove() {
    let mut app = App::new();
    app.change_type(EntryType::Folder);
    app.submit_add(ItemCandidate::new("A", "u1", "", "")).unwrap();
    app.submit_add(ItemCandidate::new("B", "u2", "", "")).unwrap();

    let updates = app.submit_remove(0).unwrap();
    assert_eq!(updates, vec![ViewUpdate::RenderItemList, ViewUpdate::RefreshPreview]);
    assert_eq!(app.items()[0].title, "B");

    assert!(matches!(
        app.submit_remove(5),
        Err(CommandError::Store(StoreError::IndexOutOfRange { index: 5, len: 1 }))
    ));
}

#[test]
fn test_change_type_discards_items() {
    let mut app = App::new();
    app.change_type(EntryType::Folder);
    app.submit_add(ItemCandidate::new("A", "u1", "", "")).unwrap();

    let updates = app.change_type(EntryType::LinkDirect);
    assert_eq!(updates[0], ViewUpdate::ShowFolderManagement(false));
    assert!(app.items().is_empty());

    // A direct link takes no sub-items
    let err = app
        .submit_add(ItemCandidate::new("A", "u1", "", ""))
        .unwrap_err();
    assert!(matches!(err, CommandError::NotAFolder(EntryType::LinkDirect)));
    assert!(app.items().is_empty());

    // Re-selecting FOLDER also starts from scratch
    app.change_type(EntryType::Folder);
    app.submit_add(ItemCandidate::new("A", "u1", "", "")).unwrap();
    let updates = app.change_type(EntryType::Folder);
    assert_eq!(updates[0], ViewUpdate::ShowFolderManagement(true));
    assert!(app.items().is_empty());
}

#[test]
fn test_add_before_folder_selected_is_rejected() {
    let mut app = App::new();
    assert!(matches!(
        app.submit_add(ItemCandidate::new("A", "u1", "", "")),
        Err(CommandError::NotAFolder(EntryType::LinkDirect))
    ));

    // Nothing was accepted, so nothing can vanish when the folder snippet is built
    let code = app.submit_generate(&folder_fields("F")).unwrap();
    assert_eq!(app.entry_type(), EntryType::Folder);
    assert!(code.contains("            title: \"\",\n"));

    app.submit_add(ItemCandidate::new("A", "u1", "", "")).unwrap();
    let code = app.submit_generate(&folder_fields("F")).unwrap();
    assert!(code.contains("            title: \"A\",\n"));
}

#[test]
fn test_generate_folder_uses_store_contents() {
    let mut app = App::new();
    app.change_type(EntryType::Folder);
    app.submit_add(ItemCandidate::new("A", "u1", "", "")).unwrap();

    let code = app.submit_generate(&folder_fields("  Tools  ")).unwrap();
    assert!(code.contains("    title: \"Tools\",\n"));
    assert!(code.contains("            title: \"A\",\n"));
    assert_eq!(app.items().len(), 1);
}

#[test]
fn test_generate_is_idempotent() {
    let mut app = App::new();
    app.change_type(EntryType::Folder);
    app.submit_add(ItemCandidate::new("A", "u1", "", "")).unwrap();

    let fields = folder_fields("Tools");
    let first = app.submit_generate(&fields).unwrap();
    let second = app.submit_generate(&fields).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_generate_with_different_type_clears_items() {
    let mut app = App::new();
    app.change_type(EntryType::Folder);
    app.submit_add(ItemCandidate::new("A", "u1", "", "")).unwrap();

    let fields = EntryFields {
        title: "Link".to_string(),
        target: "https://x".to_string(),
        ..EntryFields::default()
    };
    let code = app.submit_generate(&fields).unwrap();
    assert!(code.contains("type: \"LINK_DIRECT\""));
    assert_eq!(app.entry_type(), EntryType::LinkDirect);
    assert!(app.items().is_empty());
}

#[test]
fn test_generate_rejects_bad_type_literal() {
    let mut app = App::new();
    let fields = EntryFields {
        entry_type: "GROUP".to_string(),
        ..EntryFields::default()
    };
    assert!(matches!(
        app.submit_generate(&fields),
        Err(CommandError::Parse(ParseError::UnknownEntryType(_)))
    ));
}

#[test]
fn test_preview_uses_placeholder_title() {
    let mut app = App::new();
    app.change_type(EntryType::Folder);

    let render = app.preview(&folder_fields("")).unwrap();
    match render {
        RenderModel::Folder { title, content } => {
            assert_eq!(title, app.settings().preview.placeholder_title);
            assert!(matches!(content, FolderContent::Empty { .. }));
        }
        other => panic!("expected folder, got {:?}", other),
    }

    // Generation never substitutes the placeholder
    let code = app.submit_generate(&folder_fields("")).unwrap();
    assert!(code.contains("    title: \"\",\n"));
}

#[test]
fn test_preview_hidden() {
    let mut app = App::new();
    let fields = EntryFields {
        is_visible: "false".to_string(),
        ..EntryFields::default()
    };
    assert!(app.preview(&fields).unwrap().is_hidden());
}

#[test]
fn test_settings_change_applies_remove_policy() {
    let mut app = App::new();
    let updates = app
        .set_setting("store.out_of_range_remove", serde_json::json!("Ignore"))
        .unwrap();
    assert_eq!(updates, vec![ViewUpdate::RenderItemList, ViewUpdate::RefreshPreview]);
    assert!(app.submit_remove(3).is_ok());

    app.reset_settings();
    assert!(app.submit_remove(3).is_err());
}

#[test]
fn test_settings_change_applies_empty_folder_policy() {
    let mut app = App::new();
    app.set_setting("output.empty_folder", serde_json::json!("EmptyList"))
        .unwrap();
    let code = app.submit_generate(&folder_fields("F")).unwrap();
    assert!(code.contains("    items: [\n    ],\n"));
}

#[test]
fn test_settings_change_applies_preview_texts() {
    let mut app = App::new();
    app.set_setting("preview.empty_list_message", serde_json::json!("Nothing yet"))
        .unwrap();
    assert_eq!(
        app.item_list(),
        ListView::Empty {
            message: "Nothing yet".to_string()
        }
    );
}

#[test]
fn test_invalid_setting_leaves_session_unchanged() {
    let mut app = App::new();
    let err = app
        .set_setting("output.quoting", serde_json::json!("Sometimes"))
        .unwrap_err();
    assert!(matches!(err, CommandError::Settings(SettingsError::InvalidValue(_))));
    assert_eq!(app.settings(), &GeneratorSettings::default());
}

#[test]
fn test_with_settings_seeds_session() {
    let mut settings = GeneratorSettings::default();
    settings.output.quoting = QuotePolicy::Escape;
    settings.store.out_of_range_remove = RemovePolicy::Ignore;

    let mut app = App::with_settings(settings);
    assert!(app.submit_remove(0).is_ok());

    let fields = EntryFields {
        title: "say \"hi\"".to_string(),
        ..EntryFields::default()
    };
    let code = app.submit_generate(&fields).unwrap();
    assert!(code.contains("    title: \"say \\\"hi\\\"\",\n"));

    // Each session starts from its own settings
    assert_eq!(App::new().settings().output.quoting, QuotePolicy::Raw);
    assert_eq!(App::new().settings().output.empty_folder, EmptyFolderPolicy::Placeholder);
}
