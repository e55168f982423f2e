//! The acknowledgements list: names grouped by a free-text label.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "label", rename_all = "snake_case")]
pub enum ThanksGroup {
  Named(String),
  /// Catch-all for rows with no group label or the literal `その他`.
  Other,
}

impl ThanksGroup {
  pub fn from_label(raw: &str) -> Self {
    match raw.trim() {
      "" | "その他" => Self::Other,
      label => Self::Named(label.to_string()),
    }
  }

  pub fn label(&self) -> &str {
    match self {
      Self::Named(label) => label,
      Self::Other => "その他",
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThanksSection {
  pub group: ThanksGroup,
  pub names: Vec<String>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn blank_and_literal_other_share_a_group() {
    assert_eq!(ThanksGroup::from_label(" "), ThanksGroup::Other);
    assert_eq!(ThanksGroup::from_label("その他"), ThanksGroup::Other);
    assert_eq!(ThanksGroup::from_label("Staff").label(), "Staff");
  }
}
