//! Text helpers for content coming out of the portal's rich-text editor.
//!
//! Prompts and explanations arrive as HTML fragments; the terminal needs
//! plain text. Dates are shown the way the portal shows them (id-ID locale,
//! full month names).

use std::sync::LazyLock;

use chrono::{DateTime, Datelike, TimeZone, Timelike, Weekday};
use regex::Regex;

static BREAK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<br\s*/?>|</p\s*>|</div\s*>|</li\s*>|</h[1-6]\s*>").unwrap()
});
static LIST_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<li[^>]*>").unwrap());
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());
static NUMERIC_ENTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&#(x[0-9a-fA-F]+|[0-9]+);").unwrap());
static BLANK_LINES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]*\n(\s*\n)+").unwrap());

/// Converts an HTML fragment to plain text.
///
/// Block-level closers become line breaks, list items get a bullet, all
/// other tags are dropped and common entities decoded. Runs of blank lines
/// collapse to one.
pub fn clean_html(input: &str) -> String {
    let text = BREAK_RE.replace_all(input, "\n");
    let text = LIST_ITEM_RE.replace_all(&text, "• ");
    let text = TAG_RE.replace_all(&text, "");
    let text = decode_entities(&text);

    let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
    let joined = lines.join("\n");
    BLANK_LINES_RE
        .replace_all(&joined, "\n\n")
        .trim()
        .to_string()
}

/// Named entities the portal's rich-text editor emits. `&amp;` is handled
/// separately, after everything else.
const NAMED_ENTITIES: [(&str, &str); 22] = [
    ("&nbsp;", " "),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&apos;", "'"),
    ("&lsquo;", "\u{2018}"),
    ("&rsquo;", "\u{2019}"),
    ("&ldquo;", "\u{201C}"),
    ("&rdquo;", "\u{201D}"),
    ("&laquo;", "\u{00AB}"),
    ("&raquo;", "\u{00BB}"),
    ("&ndash;", "\u{2013}"),
    ("&mdash;", "\u{2014}"),
    ("&hellip;", "\u{2026}"),
    ("&bull;", "\u{2022}"),
    ("&middot;", "\u{00B7}"),
    ("&deg;", "\u{00B0}"),
    ("&times;", "\u{00D7}"),
    ("&divide;", "\u{00F7}"),
    ("&copy;", "\u{00A9}"),
    ("&shy;", ""),
];

/// Decodes the entities in [`NAMED_ENTITIES`], numeric references and
/// `&amp;`. Any other named entity is left as written.
fn decode_entities(input: &str) -> String {
    let named = NAMED_ENTITIES
        .iter()
        .fold(input.to_string(), |text, (entity, value)| text.replace(entity, value));

    let numeric = NUMERIC_ENTITY_RE.replace_all(&named, |caps: &regex::Captures| {
        let raw = &caps[1];
        let code = match raw.strip_prefix('x') {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => raw.parse::<u32>().ok(),
        };
        code.and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_else(|| caps[0].to_string())
    });

    // Last, so "&amp;lt;" decodes to "&lt;" rather than "<".
    numeric.replace("&amp;", "&")
}

const DAYS: [&str; 7] = ["Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu", "Minggu"];
const MONTHS: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

fn day_name(day: Weekday) -> &'static str {
    DAYS[day.num_days_from_monday() as usize]
}

/// Formats a timestamp as "Minggu, 18 Oktober 2026 14:05".
pub fn format_date_id<Tz: TimeZone>(value: &DateTime<Tz>) -> String {
    format!(
        "{}, {} {} {} {:02}:{:02}",
        day_name(value.weekday()),
        value.day(),
        MONTHS[value.month0() as usize],
        value.year(),
        value.hour(),
        value.minute()
    )
}

/// Formats a duration in seconds as "1 jam 2 menit 5 detik", dropping
/// leading zero units.
pub fn format_duration(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;

    let mut parts = Vec::new();
    if hours > 0 {
        parts.push(format!("{hours} jam"));
    }
    if hours > 0 || minutes > 0 {
        parts.push(format!("{minutes} menit"));
    }
    parts.push(format!("{seconds} detik"));
    parts.join(" ")
}
