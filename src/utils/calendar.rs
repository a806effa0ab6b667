use chrono::{Datelike, NaiveDate};

/// Academic year label for `date`; a new year starts every September.
pub fn current_academic_year(date: NaiveDate) -> String {
    let year = date.year();
    if date.month() >= 9 {
        format!("{}-{}", year, year + 1)
    } else {
        format!("{}-{}", year - 1, year)
    }
}

/// Rough hijri year for a gregorian year. Not a calendar conversion, display hint only.
pub fn approximate_hijri_year(gregorian_year: i32) -> i32 {
    ((gregorian_year - 622) as f64 * (33.0 / 32.0)).floor() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn academic_year_turns_in_september() {
        let august = NaiveDate::from_ymd_opt(2024, 8, 31).unwrap();
        let september = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
        assert_eq!(current_academic_year(august), "2023-2024");
        assert_eq!(current_academic_year(september), "2024-2025");
    }

    #[test]
    fn hijri_year_is_approximated() {
        assert_eq!(approximate_hijri_year(2024), 1445);
        assert_eq!(approximate_hijri_year(622), 0);
    }
}
