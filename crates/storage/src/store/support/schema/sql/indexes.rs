#![forbid(unsafe_code)]

pub(super) const SQL: &str = r#"

        CREATE INDEX IF NOT EXISTS idx_notes_parent ON notes(parent_id, kind);
        CREATE INDEX IF NOT EXISTS idx_notes_content ON notes(kind, content, id);
        CREATE INDEX IF NOT EXISTS idx_notes_topic ON notes(kind, topic_name, id);
"#;
