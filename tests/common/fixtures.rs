//! Static result dumps used across harnesses.

/// A small library catalogue touching every column type, multi values,
/// empty cells and a pseudo-column.
pub const DUMP_BOOKS: &str = r#"{
    "schemas": ["books"],
    "columns": [
        {"label": "author", "translated": "Author"},
        {"label": "year", "translated": "Year", "type": "integer"},
        {"label": "tags", "translated": "Tags", "multi": true},
        {"label": "read", "translated": "Read", "type": "checkbox"},
        {"label": "%pageid%", "translated": "Page"}
    ],
    "rows": [
        {"author": "Frank Herbert", "year": 1965, "tags": ["sf", "classic"], "read": true, "%pageid%": "books:dune"},
        {"author": "Jane Austen", "year": 1815, "tags": ["classic"], "read": false, "%pageid%": "books:emma"},
        {"author": "", "year": null, "tags": [], "%pageid%": "books:anon"},
        {"author": "Frank Herbert", "year": 1969, "tags": ["sf"], "read": true, "%pageid%": "books:messiah"}
    ]
}"#;

/// A dump with schemas and columns but no rows.
pub const DUMP_EMPTY: &str = r#"{
    "schemas": ["books"],
    "columns": [{"label": "author", "translated": "Author"}],
    "rows": []
}"#;

/// A dump whose search reports no schema.
pub const DUMP_NO_SCHEMA: &str = r#"{
    "schemas": [],
    "columns": [{"label": "author"}],
    "rows": [{"author": "Ann"}]
}"#;

/// Values that need escaping in both attributes and text.
pub const HOSTILE_VALUES: &[&str] = &[
    r#"<script>alert(1)</script>"#,
    r#"Tom & Jerry"#,
    r#"say "hi""#,
    "it's",
];
