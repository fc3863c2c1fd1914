//! Abbreviation expansion for already-normalized region names.
//!
//! Expansion is exact-match only: the whole normalized string must equal a
//! table key. A name that merely *contains* an abbreviation is left alone —
//! the fuzzy scorer handles partial forms, not this table.

use std::borrow::Cow;
use std::collections::HashMap;

use crate::normalize::normalize;

/// The stock abbreviation table.
///
/// Keys are normalized short forms; values are the full names they stand for.
/// Values are re-normalized after substitution, so they may carry dashes and
/// mixed case. Besides the classic acronyms (`спб`, `хмао`, …) the table maps
/// a handful of verbose official designations and dataset-specific
/// parentheticals down to their plain etalon names.
const DEFAULT_ABBREVIATIONS: [(&str, &str); 38] = [
    ("хмао", "Ханты-Мансийский автономный округ"),
    ("хм а о", "Ханты-Мансийский автономный округ — Югра"),
    ("янао", "Ямало-Ненецкий автономный округ"),
    ("я н ао", "Ямало-Ненецкий автономный округ"),
    ("нао", "Ненецкий автономный округ"),
    ("н а о", "Ненецкий автономный округ"),
    ("чао", "Чукотский автономный округ"),
    ("мо", "Московская область"),
    ("спб", "Санкт-Петербург"),
    ("свердл", "Свердловская область"),
    ("рт", "Республика Татарстан"),
    ("рб", "Республика Башкортостан"),
    (" фо", "федеральный округ"),
    ("кбр", "Кабардино-Балкарская Республика"),
    ("кчр", "Карачаево-Черкесская Республика"),
    ("еао", "Еврейская автономная область"),
    ("рсо", "Республика Северная Осетия"),
    ("цао", "Центральный федеральный округ"),
    ("сзфо", "Северо-Западный федеральный округ"),
    ("юфо", "Южный федеральный округ"),
    ("скфо", "Северо-Кавказский федеральный округ"),
    ("пфо", "Приволжский федеральный округ"),
    ("уфо", "Уральский федеральный округ"),
    ("сфо", "Сибирский федеральный округ"),
    ("двфо", "Дальневосточный федеральный округ"),
    ("россии", "Российская Федерация"),
    (
        "город москва столица российской федерации город федерального значения",
        "Москва",
    ),
    (
        "город санкт петербург город федерального значения",
        "Санкт-Петербург",
    ),
    ("город федерального значения севастополь", "Севастополь"),
    (
        "иные территории, включая байконур",
        "Иные территории, включая Байконур",
    ),
    (
        "тюменская область (кроме ханты мансийского автономного округа югры и ямало ненецкого автономного округа)",
        "Тюменская область",
    ),
    (
        "ненецкий автономный округ (архангельская область)",
        "Ненецкий автономный округ",
    ),
    (
        "архангельская область (кроме ненецкого автономного округа)",
        "Архангельская область",
    ),
    (
        "ямало ненецкий автономный округ (тюменская область)",
        "Ямало-Ненецкий автономный округ",
    ),
    ("республика татарстан (татарстан)", "Республика Татарстан"),
    ("тюменская область (без ао)", "Тюменская область"),
    ("республика адыгея (адыгея)", "Республика Адыгея"),
    (
        "ханты мансийский автономный округ югра (тюменская область)",
        "Ханты-Мансийский автономный округ",
    ),
];

/// Builds an owned copy of the stock abbreviation table.
///
/// Useful as a starting point when a matcher instance needs a few extra
/// entries on top of the defaults.
pub fn default_abbreviations() -> HashMap<String, String> {
    DEFAULT_ABBREVIATIONS
        .iter()
        .map(|(short, full)| (short.to_string(), full.to_string()))
        .collect()
}

/// Expands `processed` if it exactly equals a table key.
///
/// On a hit the full form is re-run through [`normalize`] before being
/// returned; otherwise the input passes through unchanged and unallocated.
pub(crate) fn resolve<'a>(processed: &'a str, table: &HashMap<String, String>) -> Cow<'a, str> {
    match table.get(processed) {
        Some(full) => Cow::Owned(normalize(full)),
        None => Cow::Borrowed(processed),
    }
}
