//! The header-less `name,group` acknowledgements file.

use hanokoto_core::thanks::{ThanksGroup, ThanksSection};

use crate::{Result, read_plain_rows};

/// Group names by their label, keeping first-seen group order and file order
/// within a group. Rows with an empty name are skipped.
pub fn group_thanks(rows: &[Vec<String>]) -> Vec<ThanksSection> {
  let mut sections: Vec<ThanksSection> = Vec::new();
  for row in rows {
    let name = row.first().map_or("", |s| s.trim());
    if name.is_empty() {
      continue;
    }
    let group = ThanksGroup::from_label(row.get(1).map_or("", String::as_str));
    match sections.iter_mut().find(|s| s.group == group) {
      Some(section) => section.names.push(name.to_string()),
      None => sections.push(ThanksSection { group, names: vec![name.to_string()] }),
    }
  }
  sections
}

pub fn read_thanks(text: &str) -> Result<Vec<ThanksSection>> {
  Ok(group_thanks(&read_plain_rows(text)?))
}
