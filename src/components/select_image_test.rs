use super::*;

#[test]
fn seed_tile_is_named_logo_and_done() {
    let tile = FileTile::seed("/uploads/academy-7.png".to_owned());
    assert_eq!(tile.name, "logo.png");
    assert_eq!(tile.preview_url, "/uploads/academy-7.png");
    assert_eq!(tile.status, TileStatus::Done);
}

#[test]
fn seed_tile_keeps_empty_url() {
    let tile = FileTile::seed(String::new());
    assert_eq!(tile.preview_url, "");
    assert_eq!(tile.status, TileStatus::Done);
}

#[test]
fn picked_tile_keeps_file_name_and_is_selected() {
    let tile = FileTile::picked("novo-logo.png".to_owned(), "blob:abc".to_owned());
    assert_eq!(tile.name, "novo-logo.png");
    assert_eq!(tile.preview_url, "blob:abc");
    assert_eq!(tile.status, TileStatus::Selected);
}

#[test]
fn tile_status_class_suffixes_are_distinct() {
    assert_eq!(TileStatus::Done.class_suffix(), "done");
    assert_eq!(TileStatus::Selected.class_suffix(), "selected");
}

#[test]
fn selection_clears_exactly_when_list_empties() {
    let mut list = vec![FileTile::seed("/uploads/academy-7.png".to_owned())];
    assert_eq!(selection_after(&list), Selection::Kept);
    list.pop();
    assert_eq!(selection_after(&list), Selection::Cleared);
}

#[test]
fn fresh_pick_keeps_selection_reported() {
    let list = vec![FileTile::picked("novo-logo.png".to_owned(), "blob:abc".to_owned())];
    assert_eq!(selection_after(&list), Selection::Kept);
}
