#![forbid(unsafe_code)]

pub(super) const SQL: &str = r#"

        CREATE TABLE IF NOT EXISTS topics (
          id INTEGER PRIMARY KEY,
          name TEXT NOT NULL UNIQUE,
          created_at_ms INTEGER NOT NULL
        );

        -- Thoughts and solutions. `parent_id` names a thought row; `connect_json`
        -- is a sorted JSON array of peer ids, kept symmetric by the store.
        CREATE TABLE IF NOT EXISTS notes (
          id INTEGER PRIMARY KEY,
          kind TEXT NOT NULL CHECK (kind IN ('thought', 'solution')),
          content TEXT NOT NULL,
          parent_id INTEGER,
          topic_name TEXT,
          connect_json TEXT NOT NULL DEFAULT '[]',
          created_at_ms INTEGER NOT NULL
        );
"#;
