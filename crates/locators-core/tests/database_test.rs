use locators_core::{ErrorKind, Locator, LocatorsDatabase, Source};
use serde_json::{Value, json};
use std::fs;
use std::io::Cursor;

fn legacy() -> Value {
    json!([
        {
            "id": 0,
            "name": "RobotSpareBin.Username",
            "type": "browser",
            "strategy": "id",
            "value": "username",
            "source": "https://robotsparebinindustries.com/",
        },
        {
            "id": 1,
            "name": "RobotSpareBin.Password",
            "type": "browser",
            "strategy": "id",
            "value": "password",
            "source": "https://robotsparebinindustries.com/",
        },
        {
            "id": 2,
            "name": "RobotSpareBin.Login",
            "type": "browser",
            "strategy": "class",
            "value": "btn-primary",
            "source": "https://robotsparebinindustries.com/",
        },
    ])
}

fn current() -> Value {
    json!({
        "RobotSpareBin.Username": {
            "type": "browser",
            "strategy": "id",
            "value": "username",
            "source": "https://robotsparebinindustries.com/",
        },
        "RobotSpareBin.Password": {
            "type": "browser",
            "strategy": "id",
            "value": "password",
            "source": "https://robotsparebinindustries.com/",
        },
        "RobotSpareBin.Login": {
            "type": "browser",
            "strategy": "class",
            "value": "btn-primary",
            "source": "https://robotsparebinindustries.com/",
        },
    })
}

fn to_stream(data: &Value) -> Source {
    Source::reader(Cursor::new(data.to_string()))
}

fn loaded(data: &Value) -> LocatorsDatabase {
    let mut database = LocatorsDatabase::with_source(to_stream(data));
    database.load();
    database
}

#[test]
fn test_load_legacy() {
    let database = loaded(&legacy());

    assert!(database.error().is_none());
    assert_eq!(database.len(), 3);
}

#[test]
fn test_load_current() {
    let database = loaded(&current());

    assert!(database.error().is_none());
    assert_eq!(
        database.names().collect::<Vec<_>>(),
        vec![
            "RobotSpareBin.Username",
            "RobotSpareBin.Password",
            "RobotSpareBin.Login"
        ]
    );

    let Some(Locator::Browser(login)) = database.get("RobotSpareBin.Login") else {
        panic!("expected browser locator");
    };
    assert_eq!(login.strategy, "class");
    assert_eq!(login.value, "btn-primary");
}

#[test]
fn test_load_legacy_empty() {
    for empty in [json!({}), json!([])] {
        let database = loaded(&empty);

        assert!(database.error().is_none());
        assert!(database.is_empty());
    }
}

#[test]
fn test_legacy_missing_name() {
    let mut content = legacy();
    content[1].as_object_mut().unwrap().remove("name");

    let database = loaded(&content);

    assert!(database.error().is_none());
    assert_eq!(database.len(), 2);
    assert!(database.get("RobotSpareBin.Password").is_none());
}

#[test]
fn test_invalid_entries_are_skipped() {
    let mut content = current();
    content["RobotSpareBin.Password"]
        .as_object_mut()
        .unwrap()
        .remove("value");
    content["RobotSpareBin.Unknown"] = json!({"type": "telepathy", "value": "x"});
    content["RobotSpareBin.Untyped"] = json!({"strategy": "id", "value": "x"});
    content["RobotSpareBin.Scalar"] = json!("id:username");

    let database = loaded(&content);

    assert!(database.error().is_none());
    assert_eq!(
        database.names().collect::<Vec<_>>(),
        vec!["RobotSpareBin.Username", "RobotSpareBin.Login"]
    );
}

#[test]
fn test_legacy_duplicate_names() {
    let content = json!([
        {"id": 0, "name": "Button", "type": "browser", "strategy": "id", "value": "first"},
        {"id": 1, "name": "Button", "type": "browser", "strategy": "id", "value": "second"},
    ]);

    let database = loaded(&content);

    assert_eq!(database.len(), 1);
    let Some(Locator::Browser(button)) = database.get("Button") else {
        panic!("expected browser locator");
    };
    assert_eq!(button.value, "second");
}

#[test]
fn test_top_level_scalar() {
    let database = loaded(&json!(42));

    assert!(database.error().is_none());
    assert!(database.is_empty());
}

#[test]
fn test_load_malformed() {
    let mut database =
        LocatorsDatabase::with_source(Source::reader(Cursor::new("not-a-json{]}\\''")));
    database.load();

    let error = database.error().cloned().unwrap();
    assert_eq!(error.kind(), ErrorKind::Parse);
    assert!(error.detail().contains("line 1"));

    let (kind, detail) = error.into_parts();
    assert_eq!(kind, ErrorKind::Parse);
    assert!(!detail.is_empty());
    assert!(database.is_empty());
}

#[test]
fn test_load_missing() {
    let mut database = LocatorsDatabase::with_source(Source::path("not/a/valid/path"));
    database.load();

    assert!(database.error().is_none());
    assert!(database.is_empty());
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("locators.json");
    fs::write(&path, current().to_string()).unwrap();

    let mut database = LocatorsDatabase::with_source(path.as_path());
    database.load();
    assert!(database.error().is_none());
    assert_eq!(database.len(), 3);

    // Files are reopened on every load
    let single = Value::Array(vec![legacy()[0].clone()]);
    fs::write(&path, single.to_string()).unwrap();
    database.load();
    assert!(database.error().is_none());
    assert_eq!(database.len(), 1);
}

#[test]
fn test_load_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();

    let mut database = LocatorsDatabase::with_source(dir.path());
    database.load();

    assert_eq!(database.error().map(|e| e.kind()), Some(ErrorKind::Io));
    assert!(database.is_empty());
}

#[test]
fn test_load_non_utf8_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("locators.json");
    fs::write(&path, b"{\"a\xff\": 1}").unwrap();

    let mut database = LocatorsDatabase::with_source(path);
    database.load();

    assert_eq!(database.error().map(|e| e.kind()), Some(ErrorKind::Io));
    assert!(database.is_empty());
}

#[test]
fn test_load_malformed_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("locators.json");
    fs::write(&path, r#"{"Truncated": {"type": "browser""#).unwrap();

    let mut database = LocatorsDatabase::with_source(path);
    database.load();

    assert_eq!(database.error().map(|e| e.kind()), Some(ErrorKind::Parse));
    assert!(database.is_empty());
}

#[test]
fn test_reset_error() {
    let mut database = LocatorsDatabase::new();

    database.set_source(Source::reader(Cursor::new("some-error")));
    database.load();

    assert!(database.error().is_some());
    assert!(database.is_empty());

    database.set_source(to_stream(&legacy()));
    database.load();

    assert!(database.error().is_none());
    assert_eq!(database.len(), 3);

    database.set_source(Source::reader(Cursor::new("[")));
    database.load();

    assert!(database.error().is_some());
    assert!(database.is_empty());
}
