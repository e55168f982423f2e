//! Free-text credit decomposition.
//!
//! The credit column reads like `Lyrics:山田太郎 Music:鈴木一郎 Bass小林`:
//! role keywords in English, values in between, colons optional. Each
//! keyword is mapped to its Japanese display label.

use std::sync::OnceLock;

use hanokoto_core::song::Credit;
use regex::Regex;

/// Source keyword → display label. Keywords are lowercase.
const ROLE_LABELS: &[(&str, &str)] = &[
  ("lyrics", "作詞"),
  ("music", "作曲"),
  ("arrangement", "編曲"),
  ("guitar", "ギター"),
  ("acoustic guitar", "アコースティックギター"),
  ("acousticguitar", "アコースティックギター"),
  ("bass", "ベース"),
  ("keyboard", "キーボード"),
  ("piano", "ピアノ"),
  ("electric piano", "エレクトリックピアノ"),
  ("electricpiano", "エレクトリックピアノ"),
  ("programming", "プログラミング"),
  ("programing", "プログラミング"),
  ("drums", "ドラム"),
  ("drum technician", "ドラムテクニシャン"),
  ("drumtechnician", "ドラムテクニシャン"),
  ("chorus", "コーラス"),
  ("backing chorus", "コーラス"),
  ("choir", "コーラス"),
  ("strings", "ストリングス"),
  ("strings arrangement", "ストリングスアレンジ"),
  ("stringsarrangement", "ストリングスアレンジ"),
  ("strings programming", "ストリングスプログラミング"),
  ("strings programing", "ストリングスプログラミング"),
  ("stringsprogramming", "ストリングスプログラミング"),
  ("mix", "MIX"),
  ("mastering", "マスタリング"),
  ("illust", "イラスト"),
  ("movie", "映像"),
  ("animation", "アニメーション"),
];

/// Roles that have dedicated sheet columns, in display order.
pub const EXPLICIT_ROLES: [&str; 3] = ["作詞", "作曲", "編曲"];

fn label_for(keyword: &str) -> &'static str {
  let keyword = keyword.to_lowercase();
  ROLE_LABELS
    .iter()
    .find(|(k, _)| *k == keyword)
    .map_or("", |(_, label)| label)
}

/// Alternation of every keyword, longest first so `strings arrangement`
/// beats `strings`, followed by an optional colon.
///
/// Keywords must not sit inside a longer Latin word (`remix` is not `mix`).
/// The ASCII word boundary treats non-Latin neighbours as boundaries, so
/// `Bass小林` still splits. When a longer keyword fails its boundary the
/// engine falls back to a shorter one at the same position.
fn role_re() -> &'static Regex {
  static ROLE_RE: OnceLock<Regex> = OnceLock::new();
  ROLE_RE.get_or_init(|| {
    let mut keys: Vec<&str> = ROLE_LABELS.iter().map(|(k, _)| *k).collect();
    keys.sort_by_key(|k| std::cmp::Reverse(k.len()));
    let alternation = keys
      .iter()
      .map(|k| regex::escape(k))
      .collect::<Vec<_>>()
      .join("|");
    Regex::new(&format!(r"(?i)(?-u:\b)({alternation})(?-u:\b)\s*[:：]?"))
      .expect("valid role regex")
  })
}

/// Split a credit string into `(role, value)` pairs in order of appearance.
///
/// A value is the text between one keyword and the next. Commas become `、`.
/// Roles whose value is empty are dropped.
pub fn parse_credits(raw: &str) -> Vec<Credit> {
  let s = raw.trim();
  let matches: Vec<(usize, usize, &'static str)> = role_re()
    .captures_iter(s)
    .filter_map(|caps| {
      let whole = caps.get(0)?;
      let keyword = caps.get(1)?;
      Some((whole.start(), whole.end(), label_for(keyword.as_str())))
    })
    .collect();

  matches
    .iter()
    .enumerate()
    .filter_map(|(i, &(_, value_start, role))| {
      let value_end = matches.get(i + 1).map_or(s.len(), |next| next.0);
      let value = s[value_start..value_end]
        .trim()
        .replace(',', "、")
        .trim()
        .to_string();
      (!value.is_empty()).then(|| Credit::new(role, value))
    })
    .collect()
}

/// Combine the dedicated credit columns with the parsed free text.
///
/// `explicit` pairs a role from [`EXPLICIT_ROLES`] with its column value.
/// Non-empty explicit values come first; a parsed credit for the same role
/// is then dropped to avoid showing it twice.
pub fn merge_credits(explicit: &[(&str, &str)], parsed: Vec<Credit>) -> Vec<Credit> {
  let mut credits: Vec<Credit> = explicit
    .iter()
    .filter(|(_, value)| !value.trim().is_empty())
    .map(|(role, value)| Credit::new(*role, value.trim()))
    .collect();
  let taken: Vec<String> = credits.iter().map(|c| c.role.clone()).collect();
  credits.extend(parsed.into_iter().filter(|c| !taken.contains(&c.role)));
  credits
}
