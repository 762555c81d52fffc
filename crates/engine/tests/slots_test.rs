
use chrono::NaiveDate;
use chrono_tz::America::Denver;
use hearing_slots_core::{
    OfficeDirectory,
    models::{DataQualityWarning, ExistingAppointment, RegionalOffice},
};
use hearing_slots_engine::{
    RegionalOfficeBusinessHours, SlotGenerator, SlotLabelFormatter, TimeZoneConverter,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use test_utils::{eastern_strings, office, summer_day, winter_day};

fn eastern_of(code: &str, date: NaiveDate, hour: u32, minute: u32) -> String {
    let zone = TimeZoneConverter::parse_zone(&office(code).timezone).unwrap();
    let wall = chrono::NaiveTime::from_hms_opt(hour, minute, 0).unwrap();
    TimeZoneConverter::convert(wall, zone, hearing_slots_engine::EASTERN, date)
        .unwrap()
        .format("%H:%M")
        .to_string()
}

#[rstest]
#[case("RO06")]
#[case("RO76")]
#[case("RO39")]
#[case("RO43")]
#[case("RO45")]
#[case("RO58")]
fn test_first_and_last_slot_follow_venue_hours(
    #[case] code: &str,
    #[values(summer_day(), winter_day())] date: NaiveDate,
) {
    let grid = SlotGenerator::default()
        .generate(&office(code), date, &[])
        .unwrap();
    let slots = grid.slots();

    assert_eq!(slots.len(), 8);
    assert_eq!(slots[0].eastern_time_string, eastern_of(code, date, 8, 30));
    assert_eq!(slots[7].eastern_time_string, eastern_of(code, date, 15, 30));
}

#[rstest]
fn test_central_office_slots_are_fixed_eastern(
    #[values(
        summer_day(),
        winter_day(),
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
        NaiveDate::from_ymd_opt(2024, 11, 3).unwrap()
    )]
    date: NaiveDate,
) {
    let grid = SlotGenerator::default()
        .generate(&office("C"), date, &[])
        .unwrap();

    assert_eq!(
        eastern_strings(grid.slots()),
        vec!["09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00"]
    );
}

#[test]
fn test_denver_summer_grid() {
    let grid = SlotGenerator::default()
        .generate(&office("RO39"), summer_day(), &[])
        .unwrap();

    assert_eq!(
        eastern_strings(grid.slots()),
        vec!["10:30", "11:30", "12:30", "13:30", "14:30", "15:30", "16:30", "17:30"]
    );
    assert!(grid.slots().iter().all(|slot| slot.on_grid && !slot.is_occupied));
}

#[test]
fn test_phoenix_grid_shifts_with_eastern_dst() {
    let generator = SlotGenerator::default();
    let summer = generator.generate(&office("RO45"), summer_day(), &[]).unwrap();
    let winter = generator.generate(&office("RO45"), winter_day(), &[]).unwrap();

    assert_eq!(summer.slots()[0].eastern_time_string, "11:30");
    assert_eq!(winter.slots()[0].eastern_time_string, "10:30");
}

#[rstest]
#[case("RO06")]
#[case("C")]
#[case("RO39")]
#[case("RO43")]
#[case("RO58")]
fn test_slot_times_format_back_to_their_eastern_strings(#[case] code: &str) {
    let grid = SlotGenerator::default()
        .generate(&office(code), summer_day(), &[ExistingAppointment::new("10:15", "a")])
        .unwrap();

    for slot in grid.slots() {
        assert_eq!(
            TimeZoneConverter::eastern_time_string(&slot.time),
            slot.eastern_time_string
        );
    }
}

#[rstest]
#[case("RO06")]
#[case("C")]
#[case("RO76")]
#[case("RO39")]
#[case("RO43")]
fn test_one_appointment_occupies_exactly_one_entry(#[case] code: &str) {
    let appointments = vec![ExistingAppointment::new(
        "10:15",
        "249a1443-0de4-44fd-bd93-58c30f14c703",
    )];
    let grid = SlotGenerator::default()
        .generate(&office(code), summer_day(), &appointments)
        .unwrap();

    let occupied: Vec<_> = grid.occupied().collect();
    assert_eq!(occupied.len(), 1);
    assert_eq!(occupied[0].eastern_time_string, "10:15");
    assert_eq!(
        occupied[0].occupying_appointment_id.as_deref(),
        Some("249a1443-0de4-44fd-bd93-58c30f14c703")
    );
}

#[test]
fn test_on_grid_appointment_marks_existing_slot() {
    let appointments = vec![
        ExistingAppointment::new("11:30", "7")
            .with_label("hearing")
            .with_count(4)
            .with_party("American Legion"),
    ];
    let grid = SlotGenerator::default()
        .generate(&office("RO39"), summer_day(), &appointments)
        .unwrap();

    assert_eq!(grid.len(), 8);
    let slot = grid.get("11:30").unwrap();
    assert!(slot.is_occupied);
    assert!(slot.on_grid);
    assert_eq!(
        slot.occupant_metadata.as_ref().and_then(|m| m.party.as_deref()),
        Some("American Legion")
    );
}

#[test]
fn test_mountain_scenario_keeps_off_grid_appointment_in_order() {
    let appointments = vec![ExistingAppointment::new("12:15", "mountain-1")];
    let grid = SlotGenerator::default()
        .generate(&office("RO39"), summer_day(), &appointments)
        .unwrap();

    assert_eq!(
        eastern_strings(grid.slots()),
        vec!["10:30", "11:30", "12:15", "12:30", "13:30", "14:30", "15:30", "16:30", "17:30"]
    );
    let booked = grid.get("12:15").unwrap();
    assert!(booked.is_occupied);
    assert!(!booked.on_grid);
    assert_eq!(SlotLabelFormatter::format(&booked.time, Denver), "10:15 am");
}

#[test]
fn test_legacy_appointment_before_the_window_comes_first() {
    let appointments = vec![ExistingAppointment::new("08:45", "1").with_label("legacy")];
    let grid = SlotGenerator::default()
        .generate(&office("RO39"), summer_day(), &appointments)
        .unwrap();

    assert_eq!(grid.len(), 9);
    assert_eq!(grid.slots()[0].eastern_time_string, "08:45");
    assert!(grid.slots()[0].is_occupied);
}

#[test]
fn test_off_grid_appointment_across_eastern_midnight() {
    // Manila's morning is the previous Eastern evening
    let appointments = vec![ExistingAppointment::new("21:15", "manila-1")];
    let grid = SlotGenerator::default()
        .generate(&office("RO58"), summer_day(), &appointments)
        .unwrap();

    assert_eq!(
        &eastern_strings(grid.slots())[..3],
        &["20:30", "21:15", "21:30"]
    );
}

#[test_log::test]
fn test_unparseable_appointment_is_skipped_with_warning() {
    let appointments = vec![
        ExistingAppointment::new("ten fifteen", "bad"),
        ExistingAppointment::new("09:30", "good"),
    ];
    let grid = SlotGenerator::default()
        .generate(&office("RO06"), summer_day(), &appointments)
        .unwrap();

    assert_eq!(grid.len(), 8);
    assert_eq!(grid.occupied().count(), 1);
    assert_eq!(
        grid.warnings(),
        &[DataQualityWarning::UnparseableTime {
            external_id: "bad".to_string(),
            raw: "ten fifteen".to_string(),
        }]
    );
}

#[test]
fn test_single_digit_hour_matches_grid_slot() {
    let grid = SlotGenerator::default()
        .generate(&office("RO06"), summer_day(), &[ExistingAppointment::new("9:30", "x")])
        .unwrap();

    assert_eq!(grid.len(), 8);
    assert!(grid.get("09:30").unwrap().is_occupied);
}

#[test]
fn test_single_digit_minute_is_unparseable() {
    let grid = SlotGenerator::default()
        .generate(&office("RO06"), summer_day(), &[ExistingAppointment::new("9:3", "x")])
        .unwrap();

    assert_eq!(grid.occupied().count(), 0);
    assert_eq!(
        grid.warnings(),
        &[DataQualityWarning::UnparseableTime {
            external_id: "x".to_string(),
            raw: "9:3".to_string(),
        }]
    );
}

#[test]
fn test_double_booking_keeps_both_appointments() {
    let appointments = vec![
        ExistingAppointment::new("10:30", "first"),
        ExistingAppointment::new("10:30", "second"),
    ];
    let grid = SlotGenerator::default()
        .generate(&office("RO06"), summer_day(), &appointments)
        .unwrap();

    assert_eq!(grid.len(), 9);
    assert_eq!(grid.occupied().count(), 2);
    assert_eq!(
        grid.get("10:30").unwrap().occupying_appointment_id.as_deref(),
        Some("first")
    );
    let second = grid
        .occupied()
        .find(|slot| slot.occupying_appointment_id.as_deref() == Some("second"))
        .unwrap();
    assert_eq!(second.eastern_time_string, "10:30");
    assert!(!second.on_grid);
    assert!(grid.get("10:30").unwrap().on_grid);
    assert_eq!(
        grid.warnings(),
        &[DataQualityWarning::DuplicateBooking {
            external_id: "second".to_string(),
            eastern_time_string: "10:30".to_string(),
        }]
    );
}

#[test]
fn test_repeated_eastern_hour_is_booked_as_one_time() {
    // Manila's window spans the Eastern fall-back, so 01:30 Eastern shows twice
    let date = NaiveDate::from_ymd_opt(2024, 11, 3).unwrap();
    let appointments = vec![ExistingAppointment::new("01:30", "fall-back")];
    let grid = SlotGenerator::default()
        .generate(&office("RO58"), date, &appointments)
        .unwrap();

    assert_eq!(
        eastern_strings(grid.slots()),
        vec!["20:30", "21:30", "22:30", "23:30", "00:30", "01:30", "01:30", "02:30"]
    );
    assert!(grid.get("01:30").unwrap().is_occupied);
    assert!(grid.warnings().is_empty());

    let repeated: Vec<_> = grid
        .slots()
        .iter()
        .filter(|slot| slot.eastern_time_string == "01:30")
        .collect();
    assert_eq!(repeated.len(), 2);
    for slot in repeated {
        assert!(slot.is_occupied);
        assert!(slot.on_grid);
        assert_eq!(slot.occupying_appointment_id.as_deref(), Some("fall-back"));
    }
    assert!(
        grid.available()
            .all(|slot| slot.eastern_time_string != "01:30")
    );
}

#[test]
fn test_generation_is_idempotent() {
    let generator = SlotGenerator::default();
    let appointments = vec![
        ExistingAppointment::new("12:15", "a"),
        ExistingAppointment::new("13:30", "b"),
        ExistingAppointment::new("bogus", "c"),
    ];

    let first = generator.generate(&office("RO39"), summer_day(), &appointments).unwrap();
    let second = generator.generate(&office("RO39"), summer_day(), &appointments).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_unknown_venue_fails_generation() {
    let stranger = RegionalOffice::new("RO99", "Nowhere", "America/Denver");

    let error = SlotGenerator::default()
        .generate(&stranger, summer_day(), &[])
        .unwrap_err();

    assert!(error.is_configuration());
}

#[test]
fn test_override_venue_with_unknown_zone_fails_generation() {
    let broken = RegionalOffice::new("C", "Central", "Eastern Standard");

    let error = SlotGenerator::default()
        .generate(&broken, summer_day(), &[])
        .unwrap_err();

    assert!(error.is_configuration());
}

#[test]
fn test_custom_directory_generator() {
    let directory = OfficeDirectory::from_offices([RegionalOffice::new(
        "RO90",
        "Boise hearing site",
        "America/Boise",
    )]);
    let generator = SlotGenerator::new(RegionalOfficeBusinessHours::standard(directory));

    let grid = generator
        .generate(
            &RegionalOffice::new("RO90", "Boise hearing site", "America/Boise"),
            summer_day(),
            &[],
        )
        .unwrap();

    assert_eq!(grid.slots()[0].eastern_time_string, "10:30");
    assert!(generator.generate(&office("RO39"), summer_day(), &[]).is_err());
}
