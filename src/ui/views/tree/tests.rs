//! Tests for TreeView

use crossterm::event::{KeyCode, KeyEvent};

use super::render::node_line;
use super::{TreeAction, TreeView};
use crate::model::{Change, ItemKind, ListEntry, RepoTree};

fn entry(name: &str, kind: ItemKind) -> ListEntry {
    ListEntry {
        name: name.to_string(),
        kind,
    }
}

fn tree() -> RepoTree {
    let mut tree = RepoTree::new("/wc");
    let root = tree.root();
    tree.replace_children(
        root,
        vec![
            entry("src", ItemKind::Directory),
            entry("README", ItemKind::File),
        ],
    );
    tree
}

fn press(view: &mut TreeView, tree: &RepoTree, code: KeyCode) -> TreeAction {
    view.handle_key(KeyEvent::from(code), tree)
}

fn text(line: &ratatui::text::Line) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

#[test]
fn test_rows_follow_tree_order() {
    let tree = tree();
    let view = TreeView::new();
    let names: Vec<&str> = view
        .rows(&tree)
        .iter()
        .filter_map(|(id, _)| tree.get(*id).map(|i| i.name.as_str()))
        .collect();
    assert_eq!(names, vec!["/wc", "src", "README"]);
}

#[test]
fn test_enter_on_unlisted_directory_expands() {
    let tree = tree();
    let mut view = TreeView::new();
    press(&mut view, &tree, KeyCode::Down);

    assert_eq!(
        press(&mut view, &tree, KeyCode::Enter),
        TreeAction::Expand("/wc/src".into())
    );
}

#[test]
fn test_enter_on_listed_directory_folds_and_unfolds() {
    let tree = tree();
    let mut view = TreeView::new();

    assert_eq!(press(&mut view, &tree, KeyCode::Enter), TreeAction::None);
    assert_eq!(view.rows(&tree).len(), 1);

    assert_eq!(press(&mut view, &tree, KeyCode::Enter), TreeAction::None);
    assert_eq!(view.rows(&tree).len(), 3);
}

#[test]
fn test_enter_on_file_does_nothing() {
    let tree = tree();
    let mut view = TreeView::new();
    press(&mut view, &tree, KeyCode::Char('G'));
    assert_eq!(press(&mut view, &tree, KeyCode::Enter), TreeAction::None);
}

#[test]
fn test_log_and_diff_use_full_path() {
    let tree = tree();
    let mut view = TreeView::new();
    press(&mut view, &tree, KeyCode::Char('G'));

    assert_eq!(
        press(&mut view, &tree, KeyCode::Char('l')),
        TreeAction::ShowLog("/wc/README".into())
    );
    assert_eq!(
        press(&mut view, &tree, KeyCode::Char('d')),
        TreeAction::Diff("/wc/README".into())
    );
}

#[test]
fn test_node_line_shows_change_marker() {
    let tree = tree();
    let view = TreeView::new();
    let changes = vec![Change::new("M", "/wc/README")];
    let (readme, depth) = view.rows(&tree)[2];

    insta::assert_snapshot!(text(&node_line(&tree, readme, depth, false, &changes)), @"  · README [M]");
}
