use chrono::NaiveDate;
use hearing_slots_appointments::{
    InMemoryAppointments, SelectionKey, SlotRefresher, mock::MockAppointmentSource,
};
use hearing_slots_core::{
    OfficeDirectory,
    models::{ExistingAppointment, RegionalOffice},
};
use hearing_slots_engine::SlotGenerator;
use pretty_assertions::assert_eq;

fn summer_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
}

fn office(code: &str) -> RegionalOffice {
    OfficeDirectory::builtin().get(code).unwrap().clone()
}

fn denver_bookings() -> InMemoryAppointments {
    InMemoryAppointments::new()
        .with("RO39", summer_day(), ExistingAppointment::new("12:15", "mountain-1"))
        .with("RO39", summer_day(), ExistingAppointment::new("13:30", "mountain-2"))
}

#[tokio::test]
async fn test_select_shows_unbooked_grid_before_fetch() {
    let mut refresher = SlotRefresher::new(denver_bookings(), SlotGenerator::default());

    let key = refresher.select(office("RO39"), summer_day()).unwrap();

    assert_eq!(
        key,
        SelectionKey {
            office_code: "RO39".to_string(),
            date: summer_day(),
        }
    );
    let grid = refresher.grid().unwrap();
    assert_eq!(grid.len(), 8);
    assert_eq!(grid.occupied().count(), 0);
}

#[tokio::test]
async fn test_refresh_applies_fetched_appointments() {
    let mut refresher = SlotRefresher::new(denver_bookings(), SlotGenerator::default());
    refresher.select(office("RO39"), summer_day()).unwrap();

    let grid = refresher.refresh().await.unwrap().unwrap();

    assert_eq!(grid.len(), 9);
    assert!(grid.get("12:15").unwrap().is_occupied);
    assert!(grid.get("13:30").unwrap().is_occupied);
}

#[tokio::test]
async fn test_refresh_without_selection() {
    let mut refresher = SlotRefresher::new(InMemoryAppointments::new(), SlotGenerator::default());

    assert!(refresher.refresh().await.unwrap().is_none());
}

#[test_log::test(tokio::test)]
async fn test_stale_fetch_is_discarded() {
    let mut refresher = SlotRefresher::new(denver_bookings(), SlotGenerator::default());
    let denver = refresher.select(office("RO39"), summer_day()).unwrap();
    let late = refresher.fetch(&denver).await.unwrap();

    refresher.select(office("RO43"), summer_day()).unwrap();
    let applied = refresher.apply(&denver, &late).unwrap();

    assert!(!applied);
    assert_eq!(refresher.current().unwrap().office_code, "RO43");
    assert_eq!(refresher.grid().unwrap().occupied().count(), 0);
}

#[tokio::test]
async fn test_result_for_reselected_pair_still_applies() {
    let mut refresher = SlotRefresher::new(denver_bookings(), SlotGenerator::default());
    let denver = refresher.select(office("RO39"), summer_day()).unwrap();
    let late = refresher.fetch(&denver).await.unwrap();

    refresher.select(office("RO43"), summer_day()).unwrap();
    refresher.select(office("RO39"), summer_day()).unwrap();

    assert!(refresher.apply(&denver, &late).unwrap());
    assert_eq!(refresher.grid().unwrap().occupied().count(), 2);
}

#[tokio::test]
async fn test_unknown_venue_keeps_previous_selection() {
    let mut refresher = SlotRefresher::new(InMemoryAppointments::new(), SlotGenerator::default());
    refresher.select(office("RO06"), summer_day()).unwrap();

    let error = refresher
        .select(RegionalOffice::new("RO99", "Nowhere", "America/Denver"), summer_day())
        .unwrap_err();

    assert!(error.is_configuration());
    assert_eq!(refresher.current().unwrap().office_code, "RO06");
}

#[tokio::test]
async fn test_fetch_error_leaves_grid_untouched() {
    let mut source = MockAppointmentSource::new();
    source
        .expect_scheduled_appointments()
        .times(1)
        .returning(|_, _| Err(eyre::eyre!("backend unavailable")));
    let mut refresher = SlotRefresher::new(source, SlotGenerator::default());
    refresher.select(office("RO06"), summer_day()).unwrap();

    let error = refresher.refresh().await.unwrap_err();

    assert!(error.to_string().contains("Failed to fetch appointments for RO06"));
    assert_eq!(refresher.grid().unwrap().len(), 8);
}

#[tokio::test]
async fn test_fetch_asks_source_for_selected_pair() {
    let mut source = MockAppointmentSource::new();
    source
        .expect_scheduled_appointments()
        .withf(|office_code, date| office_code == "RO39" && *date == summer_day())
        .times(1)
        .returning(|_, _| Ok(vec![ExistingAppointment::new("bad time", "x")]));
    let mut refresher = SlotRefresher::new(source, SlotGenerator::default());
    refresher.select(office("RO39"), summer_day()).unwrap();

    let grid = refresher.refresh().await.unwrap().unwrap();

    assert_eq!(grid.len(), 8);
    assert_eq!(grid.warnings().len(), 1);
}
