use std::fs;

use pretty_assertions::assert_eq;
use rll_engine::LevelStore;
use tempfile::TempDir;

fn store_path(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("levels.rll")
}

#[test]
fn load_parses_blocks_and_joins_wrapped_lines() {
    let dir = TempDir::new().unwrap();
    let path = store_path(&dir);
    fs::write(
        &path,
        "; Level 1\n20-\n\n; Level 2\n3#\n2#*\n\n; Boss Arena\n5=\n",
    )
    .unwrap();

    let store = LevelStore::load(&path);
    assert_eq!(store.len(), 3);
    assert_eq!(store.get(0).unwrap().encoded, "20-");
    // Hand-wrapped data lines are joined with the row separator.
    assert_eq!(store.get(1).unwrap().encoded, "3#|2#*");
    assert_eq!(store.get(2).unwrap().name, "Boss Arena");
}

#[test]
fn load_tolerates_stray_lines_and_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = store_path(&dir);
    fs::write(&path, "stray junk before any header\n; Level 1\n4#\nmore junk\n").unwrap();

    let store = LevelStore::load(&path);
    assert_eq!(store.len(), 1);
    // Stray lines never fail the load; they accumulate into the record
    // being built (including lines seen before the first header).
    assert_eq!(store.get(0).unwrap().encoded, "stray junk before any header|4#|more junk");

    let missing = LevelStore::load(dir.path().join("nope.rll"));
    assert!(missing.is_empty());
}

#[test]
fn add_names_from_highest_numeric_suffix() {
    let dir = TempDir::new().unwrap();
    let path = store_path(&dir);
    fs::write(&path, "; Level 1\n2#\n\n; Level 7\n3#\n\n; Custom\n4#\n").unwrap();

    let mut store = LevelStore::load(&path);
    let record = store.add("5#".to_string()).unwrap();
    assert_eq!(record.name, "Level 8");

    // The block was appended, not rewritten: the custom name survives.
    let reloaded = LevelStore::load(&path);
    assert_eq!(reloaded.len(), 4);
    assert_eq!(reloaded.get(2).unwrap().name, "Custom");
    assert_eq!(reloaded.get(3).unwrap().name, "Level 8");
}

#[test]
fn add_to_empty_store_creates_the_file() {
    let dir = TempDir::new().unwrap();
    let path = store_path(&dir);

    let mut store = LevelStore::load(&path);
    store.add("10-".to_string()).unwrap();

    let reloaded = LevelStore::load(&path);
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.get(0).unwrap().name, "Level 1");
    assert_eq!(reloaded.get(0).unwrap().encoded, "10-");
}

#[test]
fn update_rewrites_the_whole_file_in_order() {
    let dir = TempDir::new().unwrap();
    let path = store_path(&dir);
    fs::write(&path, "; Level 1\n2#\n\n; Level 2\n3#\n").unwrap();

    let mut store = LevelStore::load(&path);
    store.update(0, "2*".to_string()).unwrap();

    let reloaded = LevelStore::load(&path);
    assert_eq!(reloaded.get(0).unwrap().encoded, "2*");
    assert_eq!(reloaded.get(1).unwrap().encoded, "3#");
}

#[test]
fn delete_renumbers_remaining_records() {
    let dir = TempDir::new().unwrap();
    let path = store_path(&dir);
    fs::write(&path, "; Level 1\n1#\n\n; Level 2\n2#\n\n; Level 3\n3#\n").unwrap();

    let mut store = LevelStore::load(&path);
    store.delete(1).unwrap();

    let names: Vec<&str> = store.records().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Level 1", "Level 2"]);
    // The old "Level 3" now answers to "Level 2" and kept its data.
    assert_eq!(store.get(1).unwrap().encoded, "3#");

    let reloaded = LevelStore::load(&path);
    let names: Vec<String> = reloaded.records().iter().map(|r| r.name.clone()).collect();
    assert_eq!(names, ["Level 1", "Level 2"]);
}

#[test]
fn out_of_range_indices_are_errors() {
    let dir = TempDir::new().unwrap();
    let mut store = LevelStore::load(store_path(&dir));
    assert!(store.update(0, "2#".to_string()).is_err());
    assert!(store.delete(0).is_err());
    assert!(store.export_level(0, dir.path().join("out.rll")).is_err());
}

#[test]
fn export_import_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = store_path(&dir);
    fs::write(&path, "; Level 1\n3#|2#*::1 0 2 0\n").unwrap();

    let mut store = LevelStore::load(&path);
    let exported = dir.path().join("single.rll");
    store.export_level(0, &exported).unwrap();

    let record = store.import_level(&exported).unwrap();
    assert_eq!(record.name, "Level 2");
    assert_eq!(record.encoded, "3#|2#*::1 0 2 0");
}

#[test]
fn import_rejects_undecodable_levels() {
    let dir = TempDir::new().unwrap();
    let mut store = LevelStore::load(store_path(&dir));

    let bad = dir.path().join("bad.rll");
    fs::write(&bad, "3#\n3##\n").unwrap();
    assert!(store.import_level(&bad).is_err());
    assert!(store.is_empty());
}
