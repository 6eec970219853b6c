use annum_calendar::{CivilDate, year_sequence};

#[test]
fn known_weekdays_across_decades() {
    // (date, expected weekday with 0 = Sunday)
    let cases = [
        ((1900, 1, 1), 1),  // Monday
        ((1970, 1, 1), 4),  // Thursday
        ((1999, 12, 31), 5), // Friday
        ((2000, 1, 1), 6),  // Saturday
        ((2012, 1, 1), 0),  // Sunday
        ((2016, 1, 1), 5),  // Friday
        ((2016, 12, 31), 6), // Saturday
        ((2024, 2, 29), 4), // Thursday
    ];
    for ((y, m, d), expected) in cases {
        let date = CivilDate::new(y, m, d).unwrap();
        assert_eq!(
            date.day_of_week(),
            expected,
            "wrong weekday for {date}"
        );
    }
}

#[test]
fn weekdays_cycle_over_full_year() {
    let dates = year_sequence(2016);
    for pair in dates.windows(2) {
        assert_eq!(
            pair[1].day_of_week(),
            (pair[0].day_of_week() + 1) % 7,
            "weekday did not advance from {} to {}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn ordinals_are_consecutive() {
    for year in [2015, 2016] {
        let dates = year_sequence(year);
        for (i, date) in dates.iter().enumerate() {
            assert_eq!(
                date.day_of_year0() as usize,
                i,
                "ordinal mismatch for {date}"
            );
        }
    }
}

#[test]
fn parse_matches_construction_for_every_day() {
    for date in year_sequence(2016) {
        let reparsed: CivilDate = date.to_string().parse().unwrap();
        assert_eq!(reparsed, date);
    }
}
