//! Table layout of the concert database and the history log.
//!
//! Both files are maintained by separate tooling. The DDL here mirrors what
//! that tooling creates and is applied only to in-memory stores.

/// Concert database: tours own concerts, concerts own setlist rows.
pub const CONCERT_SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS tours (
    id          INTEGER PRIMARY KEY,
    name        TEXT,
    page_link   TEXT,
    goods       TEXT,
    sort_order  INTEGER            -- NULL sorts after every set value
);

CREATE TABLE IF NOT EXISTS concerts (
    id          INTEGER PRIMARY KEY,
    tour_id     INTEGER NOT NULL REFERENCES tours(id),
    name        TEXT,
    date        TEXT,              -- YYYY-MM-DD or YYYY/MM/DD as entered
    venue       TEXT,
    performer   TEXT               -- 'Hanon' | 'Kotoha' | 'はのこと/ハコリリ'
);

CREATE TABLE IF NOT EXISTS setlists (
    concert_id  INTEGER NOT NULL REFERENCES concerts(id),
    order_no    INTEGER NOT NULL,
    song_title  TEXT,
    singer      TEXT,
    encore      INTEGER DEFAULT 0  -- 0 | 1
);

CREATE INDEX IF NOT EXISTS concerts_tour_idx    ON concerts(tour_id);
CREATE INDEX IF NOT EXISTS setlists_concert_idx ON setlists(concert_id, order_no);
";

/// History log: one row per timeline event.
pub const HISTORY_SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS history (
    year            INTEGER NOT NULL,
    month           INTEGER NOT NULL,
    day             INTEGER NOT NULL,
    classification  TEXT NOT NULL,
    genre           TEXT NOT NULL,
    content         TEXT NOT NULL,
    link            TEXT
);
";
