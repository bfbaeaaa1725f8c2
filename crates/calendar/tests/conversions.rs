use poseidon_calendar::{
    CivilDateTime, cal_to_day_of_year, cal_to_jd, day_of_year_to_cal, fday_to_hms, hms_to_fday,
    is_leap_year, jd_to_cal,
};

#[test]
fn calendar_jd_roundtrip_grid() {
    let fractions = [0.0, 0.4375];
    let days = [1.0, 15.0, 28.0];
    for year in (1850..2150).step_by(13) {
        for month in 1..=12u8 {
            for day in days {
                for frac in fractions {
                    let jd = cal_to_jd(year, month, day + frac, true);
                    let (y, m, d) = jd_to_cal(jd, true);
                    assert_eq!(
                        (y, m),
                        (year, month),
                        "date mismatch for {year}-{month}-{day} + {frac}"
                    );
                    assert!(
                        (d - (day + frac)).abs() < 1e-6,
                        "day mismatch for {year}-{month}-{day} + {frac}: got {d}"
                    );
                }
            }
        }
    }
}

#[test]
fn julian_calendar_roundtrip() {
    for year in (400..1500).step_by(97) {
        let jd = cal_to_jd(year, 3, 12.25, false);
        let (y, m, d) = jd_to_cal(jd, false);
        assert_eq!((y, m), (year, 3));
        assert!((d - 12.25).abs() < 1e-6, "day mismatch for year {year}: {d}");
    }
}

#[test]
fn hms_roundtrip_full_day() {
    for hour in 0..24u8 {
        for minute in (0..60u8).step_by(7) {
            let fday = hms_to_fday(hour, minute, 30.0);
            let (h, m, s) = fday_to_hms(fday);
            assert_eq!((h, m), (hour, minute), "clock mismatch at {hour}:{minute}");
            assert!((s - 30.0).abs() < 1e-4, "second mismatch at {hour}:{minute}: {s}");
        }
    }
}

#[test]
fn day_of_year_roundtrip_common_and_leap() {
    for year in [1900, 1999, 2000, 2004] {
        let last = if is_leap_year(year, true) { 366 } else { 365 };
        for doy in 1..=last {
            let (month, day) = day_of_year_to_cal(year, doy, true);
            assert_eq!(
                cal_to_day_of_year(year, month, day, true),
                doy,
                "roundtrip failed for {year} doy {doy}: got {month}-{day}"
            );
        }
    }
}

#[test]
fn civil_date_time_matches_raw_conversion() {
    let dt = CivilDateTime::new(2004, 10, 16, 14, 30, 0.0).unwrap();
    let jd = dt.to_jd();
    let (year, month, day) = jd_to_cal(jd, true);
    assert_eq!((year, month), (2004, 10));
    let (hour, minute, second) = fday_to_hms(day);
    assert_eq!((hour, minute), (14, 30));
    assert!(second < 1e-3, "second drift: {second}");
}

#[test]
fn jd_is_monotonic_across_month_boundaries() {
    let mut prev = cal_to_jd(2003, 12, 31.0, true);
    for month in 1..=12u8 {
        let jd = cal_to_jd(2004, month, 1.0, true);
        assert!(jd > prev, "JD not increasing at 2004-{month}");
        prev = jd;
    }
}
