use pretty_assertions::assert_eq;
use rolodex_types::{ConnectionDescriptor, DatabaseEngine};
use rolodex_validation::{ConnectionStringValidator, ValidationError};

fn descriptor(text: &str, kind: DatabaseEngine) -> ConnectionDescriptor {
    ConnectionDescriptor::new(text, kind)
}

// ── Kind-specific formats ────────────────────────────────────────

#[test]
fn sql_server_strings_match_their_kind() {
    let v = ConnectionStringValidator::new();
    assert!(v.is_valid(&descriptor(
        "Server=db01;Database=crm;User Id=sa;Password=x;",
        DatabaseEngine::SqlServer,
    )));
    assert!(v.is_valid(&descriptor(
        "Data Source=db01;Initial Catalog=crm;Integrated Security=True;",
        DatabaseEngine::SqlServer,
    )));
}

#[test]
fn mysql_strings_match_their_kind() {
    let v = ConnectionStringValidator::new();
    assert!(v.is_valid(&descriptor(
        "Server=localhost;Database=crm;Uid=root;Pwd=secret;",
        DatabaseEngine::MySql,
    )));
    assert!(!v.is_valid(&descriptor(
        "Server=localhost;Database=crm;",
        DatabaseEngine::MySql,
    )));
}

#[test]
fn postgresql_strings_match_their_kind() {
    let v = ConnectionStringValidator::new();
    assert!(v.is_valid(&descriptor(
        "Host=localhost;Port=5432;Database=crm;Username=admin;Password=x;",
        DatabaseEngine::PostgreSql,
    )));
    assert!(v.is_valid(&descriptor(
        "Host=10.0.0.4;Database=crm;User ID=admin;",
        DatabaseEngine::PostgreSql,
    )));
}

#[test]
fn sqlite_strings_match_their_kind() {
    let v = ConnectionStringValidator::new();
    assert!(v.is_valid(&descriptor(
        "Data Source=contacts.db;Version=3;",
        DatabaseEngine::Sqlite,
    )));
    assert!(v.is_valid(&descriptor("Data Source=:memory:", DatabaseEngine::Sqlite)));
    assert!(!v.is_valid(&descriptor(
        "Data Source=contacts.txt;",
        DatabaseEngine::Sqlite,
    )));
}

#[test]
fn declared_kind_pins_the_pattern() {
    let v = ConnectionStringValidator::new();
    // A perfectly good SqlServer string is not a SQLite string.
    let wrong_kind = descriptor("Server=db01;Database=crm;", DatabaseEngine::Sqlite);
    let err = v.validate(&wrong_kind).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::EngineMismatch {
            kind: DatabaseEngine::Sqlite,
            ..
        }
    ));
}

// ── Companion-field requirements ─────────────────────────────────

#[test]
fn missing_engine_kind_is_invalid() {
    let v = ConnectionStringValidator::new();
    let d = ConnectionDescriptor {
        connection_string: Some("Server=db01;Database=crm;".into()),
        database_kind: None,
    };
    assert_eq!(v.validate(&d), Err(ValidationError::MissingEngineKind));
}

#[test]
fn missing_or_blank_string_is_invalid() {
    let v = ConnectionStringValidator::new();
    let none = ConnectionDescriptor {
        connection_string: None,
        database_kind: Some(DatabaseEngine::Sqlite),
    };
    assert_eq!(v.validate(&none), Err(ValidationError::MissingConnectionString));
    assert!(!v.is_valid(&descriptor("   ", DatabaseEngine::Sqlite)));
}

// ── Bare-string fallback ─────────────────────────────────────────

#[test]
fn bare_string_accepts_any_supported_format() {
    let v = ConnectionStringValidator::new();
    assert!(v.is_valid_text("Server=db01;Database=crm;User Id=sa;"));
    assert!(v.is_valid_text("Server=localhost;Uid=root;Pwd=secret;"));
    assert!(v.is_valid_text("Host=localhost;Username=admin;"));
    assert!(v.is_valid_text("Data Source=contacts.db;"));
}

#[test]
fn bare_string_rejects_unrecognized_text() {
    let v = ConnectionStringValidator::new();
    assert!(!v.is_valid_text("mongodb://localhost:27017"));
    assert!(!v.is_valid_text("just some text"));
    assert!(!v.is_valid_text(""));
    assert!(!v.is_valid_text("  \t "));
}

// ── Sequences ────────────────────────────────────────────────────

#[test]
fn empty_descriptor_sequence_is_vacuously_valid() {
    let v = ConnectionStringValidator::new();
    let none: Vec<ConnectionDescriptor> = Vec::new();
    assert!(v.is_valid_all(&none));
}

#[test]
fn descriptor_sequence_fails_fast() {
    let v = ConnectionStringValidator::new();
    let batch = vec![
        descriptor("Data Source=contacts.db;", DatabaseEngine::Sqlite),
        ConnectionDescriptor {
            connection_string: Some("Data Source=notes.db;".into()),
            database_kind: None,
        },
        descriptor("Data Source=archive.db;", DatabaseEngine::Sqlite),
    ];
    assert_eq!(
        v.validate_all(&batch),
        Err(ValidationError::MissingEngineKind)
    );
}
