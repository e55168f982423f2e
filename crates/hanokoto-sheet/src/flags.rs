//! Classification flags from free-text tag and singer columns.

use hanokoto_core::ClassificationFlags;

/// Keywords per dimension, matched case-insensitively as substrings.
/// Entries must already be lowercase.
const UNIT_KEYWORDS: &[&str] = &["はのこと", "ハコリリ", "ハコニワリリィ", "hakoniwa", "hakoniwalily"];
const HANON_KEYWORDS: &[&str] = &["ハノン", "hanon"];
const KOTOHA_KEYWORDS: &[&str] = &["コトハ", "kotoha"];

fn mentions(haystack: &str, keywords: &[&str]) -> bool {
  keywords.iter().any(|k| haystack.contains(k))
}

/// Scan `text` for each dimension's keywords. Total over all inputs; an
/// empty string yields all-false flags.
pub fn derive_flags(text: &str) -> ClassificationFlags {
  let lower = text.to_lowercase();
  ClassificationFlags {
    unit:   mentions(&lower, UNIT_KEYWORDS),
    hanon:  mentions(&lower, HANON_KEYWORDS),
    kotoha: mentions(&lower, KOTOHA_KEYWORDS),
  }
}

#[cfg(test)]
mod tests {
  use hanokoto_core::PrimaryTag;

  use super::*;

  #[test]
  fn native_and_latin_keywords() {
    assert!(derive_flags("はのこと").unit);
    assert!(derive_flags("HakoniwaLily").unit);
    assert!(derive_flags("ハノン").hanon);
    assert!(derive_flags("Hanon").hanon);
    assert!(derive_flags("コトハ").kotoha);
    assert!(derive_flags("KOTOHA").kotoha);
  }

  #[test]
  fn several_dimensions_at_once() {
    let f = derive_flags("Hanon, Kotoha");
    assert_eq!(f, ClassificationFlags { unit: false, hanon: true, kotoha: true });
    assert_eq!(f.primary_tag(), PrimaryTag::Unit);
  }

  #[test]
  fn no_keywords() {
    assert!(derive_flags("").is_empty());
    assert!(derive_flags("guest singer").is_empty());
  }

  #[test]
  fn adding_a_keyword_never_clears_a_flag() {
    let bases = ["", "Hanon", "kotoha feat. guest", "はのこと"];
    let additions = ["hanon", "Kotoha", "ハコリリ", "noise"];
    for base in bases {
      let before = derive_flags(base);
      for add in additions {
        let after = derive_flags(&format!("{base} {add}"));
        assert!(!before.unit || after.unit);
        assert!(!before.hanon || after.hanon);
        assert!(!before.kotoha || after.kotoha);
      }
    }
    assert!(derive_flags("x hanon").hanon);
  }
}
