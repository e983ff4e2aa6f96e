//! Sort stage
//!
//! Stable: ties keep the order produced by the previous stage.

use std::cmp::Ordering;

use crate::record::SalesRecord;

use super::params::SortKey;

/// Orders records by a [`SortKey`]
pub struct RecordSorter;

impl RecordSorter {
    pub fn sort<'a>(mut records: Vec<&'a SalesRecord>, key: SortKey) -> Vec<&'a SalesRecord> {
        match key {
            SortKey::Date => records.sort_by(|a, b| Self::by_date_desc(a, b)),
            SortKey::Quantity => records.sort_by(|a, b| Self::by_quantity_desc(a, b)),
            SortKey::CustomerName => {
                records.sort_by_cached_key(|r| collation_key(&r.customer_name))
            }
            SortKey::Unordered => {}
        }
        records
    }

    /// Newest first; absent dates after every present date
    fn by_date_desc(a: &SalesRecord, b: &SalesRecord) -> Ordering {
        match (a.date, b.date) {
            (Some(x), Some(y)) => y.cmp(&x),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }

    fn by_quantity_desc(a: &SalesRecord, b: &SalesRecord) -> Ordering {
        b.quantity.unwrap_or(0).cmp(&a.quantity.unwrap_or(0))
    }
}

/// Case-insensitive comparison key for names.
///
/// Primary order is the lowercased text with accents folded to their base
/// letter; the lowercased original breaks ties between accented and plain
/// spellings so that "Zoë" sorts beside "Zoe" rather than after "Zz".
fn collation_key(name: &str) -> (String, String) {
    let lower = name.to_lowercase();
    let mut folded = String::with_capacity(lower.len());
    for c in lower.chars() {
        match expand_ligature(c) {
            Some(s) => folded.push_str(s),
            None => folded.push(fold_accent(c)),
        }
    }
    (folded, lower)
}

/// Letters that fold to more than one base letter
fn expand_ligature(c: char) -> Option<&'static str> {
    match c {
        'ß' => Some("ss"),
        'æ' => Some("ae"),
        'œ' => Some("oe"),
        'þ' => Some("th"),
        'ĳ' => Some("ij"),
        _ => None,
    }
}

/// Latin letters with diacritics, stroke or cedilla to their base letter.
/// Scripts outside Latin compare by code point.
fn fold_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => 'c',
        'ď' | 'đ' | 'ð' => 'd',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => 'g',
        'ĥ' | 'ħ' => 'h',
        'ì' | 'í' | 'î' | 'ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => 'i',
        'ĵ' => 'j',
        'ķ' => 'k',
        'ĺ' | 'ļ' | 'ľ' | 'ŀ' | 'ł' => 'l',
        'ñ' | 'ń' | 'ņ' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => 'o',
        'ŕ' | 'ŗ' | 'ř' => 'r',
        'ś' | 'ŝ' | 'ş' | 'š' | 'ș' => 's',
        'ţ' | 'ť' | 'ŧ' | 'ț' => 't',
        'ù' | 'ú' | 'û' | 'ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => 'u',
        'ŵ' => 'w',
        'ý' | 'ÿ' | 'ŷ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        other => other,
    }
}
