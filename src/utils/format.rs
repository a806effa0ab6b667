use chrono::{Datelike, NaiveDate, Weekday};
use strum_macros::{Display, EnumString};

/// Display locale of the panel. `Ar` follows the `ar-EG` conventions of the
/// host formatter (Arabic-Indic digits), `En` plain Latin digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Locale {
    Ar,
    En,
}

impl Locale {
    fn group_separator(self) -> char {
        match self {
            Locale::Ar => '٬',
            Locale::En => ',',
        }
    }

    fn decimal_separator(self) -> char {
        match self {
            Locale::Ar => '٫',
            Locale::En => '.',
        }
    }

    /// Maps ASCII digits to the locale's digit set, leaving everything else alone.
    pub fn localize_digits(self, text: &str) -> String {
        match self {
            Locale::En => text.to_string(),
            Locale::Ar => text
                .chars()
                .map(|c| match c.to_digit(10) {
                    Some(d) => char::from_u32(0x0660 + d).unwrap_or(c),
                    None => c,
                })
                .collect(),
        }
    }

    fn month_name(self, month: u32) -> &'static str {
        const AR: [&str; 12] = [
            "يناير", "فبراير", "مارس", "أبريل", "مايو", "يونيو",
            "يوليو", "أغسطس", "سبتمبر", "أكتوبر", "نوفمبر", "ديسمبر",
        ];
        const EN: [&str; 12] = [
            "January", "February", "March", "April", "May", "June",
            "July", "August", "September", "October", "November", "December",
        ];
        let idx = (month.clamp(1, 12) - 1) as usize;
        match self {
            Locale::Ar => AR[idx],
            Locale::En => EN[idx],
        }
    }

    fn weekday_name(self, weekday: Weekday) -> &'static str {
        const AR: [&str; 7] = [
            "الاثنين", "الثلاثاء", "الأربعاء", "الخميس", "الجمعة", "السبت", "الأحد",
        ];
        const EN: [&str; 7] = [
            "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
        ];
        let idx = weekday.num_days_from_monday() as usize;
        match self {
            Locale::Ar => AR[idx],
            Locale::En => EN[idx],
        }
    }
}

fn group_integer(digits: &str, separator: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

fn format_fixed(amount: f64, min_fraction: usize, max_fraction: usize, locale: Locale) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }

    let rendered = format!("{:.*}", max_fraction, amount.abs());
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((i, f)) => (i, f),
        None => (rendered.as_str(), ""),
    };

    let mut frac = frac_part.to_string();
    while frac.len() > min_fraction && frac.ends_with('0') {
        frac.pop();
    }

    let negative = amount < 0.0 && (int_part.chars().any(|c| c != '0') || !frac.chars().all(|c| c == '0'));

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_integer(int_part, locale.group_separator()));
    if !frac.is_empty() {
        out.push(locale.decimal_separator());
        out.push_str(&frac);
    }
    locale.localize_digits(&out)
}

/// Grouped number with up to three fraction digits, trailing zeros trimmed.
pub fn format_number(amount: f64, locale: Locale) -> String {
    format_fixed(amount, 0, 3, locale)
}

/// Grouped amount with exactly two fraction digits followed by the currency suffix.
pub fn format_currency(amount: f64, locale: Locale, suffix: &str) -> String {
    format!("{} {}", format_fixed(amount, 2, 2, locale), suffix)
}

/// Long-form calendar date, e.g. `15 January 2024`.
pub fn format_date(date: NaiveDate, locale: Locale) -> String {
    let text = format!("{} {} {}", date.day(), locale.month_name(date.month()), date.year());
    locale.localize_digits(&text)
}

/// Calendar date prefixed with the weekday, e.g. `Monday, 15 January 2024`.
pub fn format_long_date(date: NaiveDate, locale: Locale) -> String {
    let comma = match locale {
        Locale::Ar => '،',
        Locale::En => ',',
    };
    format!("{}{} {}", locale.weekday_name(date.weekday()), comma, format_date(date, locale))
}

/// Month and year as shown in the month selector, e.g. `March 2024`.
pub fn format_month_year(year: i32, month: u32, locale: Locale) -> String {
    locale.localize_digits(&format!("{} {}", locale.month_name(month), year))
}

/// Converts a `HH:MM` clock time to the 12-hour form. `None` on malformed input.
pub fn format_time(time: &str, locale: Locale) -> Option<String> {
    let (hours, minutes) = time.trim().split_once(':')?;
    let hour: u32 = hours.parse().ok()?;
    if hour > 23 || minutes.len() != 2 || minutes.parse::<u32>().ok()? > 59 {
        return None;
    }

    let pm = hour >= 12;
    let marker = match (locale, pm) {
        (Locale::Ar, true) => "م",
        (Locale::Ar, false) => "ص",
        (Locale::En, true) => "PM",
        (Locale::En, false) => "AM",
    };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };

    Some(locale.localize_digits(&format!("{}:{} {}", hour12, minutes, marker)))
}

/// Upper-cases the first character of every whitespace separated word.
pub fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if at_word_start && !c.is_whitespace() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = c.is_whitespace();
    }
    out
}
