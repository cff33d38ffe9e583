//! SQL schema migrations for anonboard.

/// Ordered schema migrations. A migration's version is its index + 1.
///
/// Threads and replies live in separate tables; a reply belongs to
/// exactly one thread and is removed only when its thread is deleted
/// (soft-deletes rewrite the text in place instead).
pub const MIGRATIONS: &[&str] = &[
    // v1: threads and replies
    r#"
    CREATE TABLE threads (
        id              INTEGER PRIMARY KEY AUTOINCREMENT,
        board           TEXT NOT NULL,
        text            TEXT NOT NULL,
        delete_password TEXT NOT NULL,
        created_on      TEXT NOT NULL,
        bumped_on       TEXT NOT NULL,
        reported        INTEGER NOT NULL DEFAULT 0,
        reply_count     INTEGER NOT NULL DEFAULT 0
    );
    CREATE INDEX idx_threads_board_bumped ON threads(board, bumped_on DESC);

    CREATE TABLE replies (
        id              INTEGER PRIMARY KEY AUTOINCREMENT,
        thread_id       INTEGER NOT NULL REFERENCES threads(id) ON DELETE CASCADE,
        text            TEXT NOT NULL,
        delete_password TEXT NOT NULL,
        created_on      TEXT NOT NULL,
        reported        INTEGER NOT NULL DEFAULT 0
    );
    CREATE INDEX idx_replies_thread ON replies(thread_id);
    "#,
];
