use proptest::prelude::*;

use medgreet_display::mock::RecordingBackend;
use medgreet_display::{layout, Point, Size};
use medgreet_protocol::CommandError;

use super::*;
use crate::session::MAX_NAME_LEN;

const SCREEN: Size = Size::new(240, 320);

/// Inside the greeting screen's "SCHEDULE" button
const SCHEDULE_TAP: Point = Point::new(100, 250);
/// Inside the schedule screen's "BACK" button
const BACK_TAP: Point = Point::new(120, 280);

fn ms(v: u32) -> Instant {
    Instant::from_millis(v)
}

fn setup_at(start: Instant) -> (ScreenController<RecordingBackend>, Session) {
    let mut controller =
        ScreenController::new(RecordingBackend::new(SCREEN), GreeterConfig::default());
    let mut session = Session::new(start);
    controller.start(&mut session).unwrap();
    (controller, session)
}

fn setup() -> (ScreenController<RecordingBackend>, Session) {
    setup_at(ms(0))
}

#[test]
fn test_start_shows_scan() {
    let (controller, session) = setup();
    assert_eq!(session.mode(), ScreenMode::Scan);
    assert_eq!(controller.button_region(), None);
    assert!(controller.backend().has_text("SCAN"));
    assert!(controller.backend().has_text("HERE:"));
}

#[test]
fn test_enter_greeting() {
    let (mut controller, mut session) = setup();
    controller.enter_greeting(&mut session, "Ada", ms(1000)).unwrap();

    assert_eq!(session.mode(), ScreenMode::Greeting);
    assert_eq!(session.user_name(), "Ada");
    assert_eq!(session.mode_entered_at(), ms(1000));
    assert_eq!(session.last_interaction_at(), ms(1000));
    assert_eq!(
        controller.button_region(),
        Some(ButtonRegion {
            rect: layout::schedule_button(SCREEN),
            kind: ButtonKind::ViewSchedule,
        })
    );
    assert!(controller.backend().has_text("Ada"));
}

#[test]
fn test_enter_greeting_trims() {
    let (mut controller, mut session) = setup();
    controller.enter_greeting(&mut session, "  Ben \r", ms(10)).unwrap();
    assert_eq!(session.user_name(), "Ben");
}

#[test]
fn test_empty_name_changes_nothing() {
    let (mut controller, mut session) = setup();
    controller.enter_greeting(&mut session, "Ada", ms(10)).unwrap();
    let before = session.clone();
    let button = controller.button_region();

    for name in ["", "   ", "\t\r"] {
        assert_eq!(
            controller.enter_greeting(&mut session, name, ms(20)),
            Err(ControllerError::Command(CommandError::EmptyName))
        );
    }
    assert_eq!(session, before);
    assert_eq!(controller.button_region(), button);
}

#[test]
fn test_long_name_truncated() {
    let (mut controller, mut session) = setup();
    let long = "Abcdefghijklmnopqrstuvwxyz0123456789XYZ";
    controller.enter_greeting(&mut session, long, ms(0)).unwrap();
    assert_eq!(session.user_name().len(), MAX_NAME_LEN);
    assert!(long.starts_with(session.user_name()));
}

#[test]
fn test_enter_scan_from_every_mode() {
    let (mut controller, mut session) = setup();

    controller.enter_scan(&mut session).unwrap();
    assert_eq!(session.mode(), ScreenMode::Scan);

    controller.enter_greeting(&mut session, "Ada", ms(0)).unwrap();
    controller.enter_scan(&mut session).unwrap();
    assert_eq!(session.mode(), ScreenMode::Scan);
    assert_eq!(controller.button_region(), None);
    assert_eq!(session.user_name(), "");

    controller.enter_greeting(&mut session, "Ada", ms(0)).unwrap();
    controller.enter_schedule(&mut session, ms(0)).unwrap();
    controller.enter_scan(&mut session).unwrap();
    assert_eq!(session.mode(), ScreenMode::Scan);
    assert_eq!(controller.button_region(), None);
}

#[test]
fn test_schedule_requires_name() {
    let (mut controller, mut session) = setup();
    let before = session.clone();
    assert_eq!(
        controller.enter_schedule(&mut session, ms(5)),
        Err(ControllerError::InvalidTransition(ScreenMode::Scan))
    );
    assert_eq!(session, before);
}

#[test]
fn test_refresh_requires_greeting() {
    let (mut controller, mut session) = setup();
    assert_eq!(
        controller.refresh_greeting(&mut session, ms(5)),
        Err(ControllerError::InvalidTransition(ScreenMode::Scan))
    );
}

#[test]
fn test_enter_schedule_keeps_greeting_timer() {
    let (mut controller, mut session) = setup();
    controller.enter_greeting(&mut session, "Ada", ms(100)).unwrap();
    controller.enter_schedule(&mut session, ms(700)).unwrap();

    assert_eq!(session.mode(), ScreenMode::Schedule);
    assert_eq!(session.mode_entered_at(), ms(100));
    assert_eq!(session.last_interaction_at(), ms(700));
    assert_eq!(
        controller.button_region().map(|b| b.kind),
        Some(ButtonKind::Back)
    );
    assert!(controller.backend().has_text("Ada's Medication"));
}

#[test]
fn test_tap_round_trip_preserves_name() {
    let (mut controller, mut session) = setup();
    controller.enter_greeting(&mut session, "Ben", ms(0)).unwrap();

    let event = controller.on_tap(&mut session, SCHEDULE_TAP, ms(1000)).unwrap();
    assert_eq!(event, Some(Event::ButtonTapped));
    assert_eq!(session.mode(), ScreenMode::Schedule);
    assert_eq!(session.user_name(), "Ben");
    assert_eq!(session.last_interaction_at(), ms(1000));

    let event = controller.on_tap(&mut session, BACK_TAP, ms(2500)).unwrap();
    assert_eq!(event, Some(Event::ButtonTapped));
    assert_eq!(session.mode(), ScreenMode::Greeting);
    assert_eq!(session.user_name(), "Ben");
    assert_eq!(session.last_interaction_at(), ms(2500));
    assert_eq!(session.mode_entered_at(), ms(2500));
}

#[test]
fn test_tap_on_edges_is_inside() {
    let rect = layout::schedule_button(SCREEN);
    let corners = [
        Point::new(rect.x(), rect.y()),
        Point::new(rect.right(), rect.y()),
        Point::new(rect.x(), rect.bottom()),
        Point::new(rect.right(), rect.bottom()),
    ];

    for corner in corners {
        let (mut controller, mut session) = setup();
        controller.enter_greeting(&mut session, "Ada", ms(0)).unwrap();
        let event = controller.on_tap(&mut session, corner, ms(10)).unwrap();
        assert_eq!(event, Some(Event::ButtonTapped));
        assert_eq!(session.mode(), ScreenMode::Schedule);
    }
}

#[test]
fn test_tap_outside_button_ignored() {
    let (mut controller, mut session) = setup();
    controller.enter_greeting(&mut session, "Ada", ms(0)).unwrap();
    let rect = layout::schedule_button(SCREEN);

    for miss in [
        Point::new(rect.x() - 1, rect.y()),
        Point::new(rect.right() + 1, rect.bottom()),
        Point::new(rect.x(), rect.y() - 1),
        Point::new(120, 20),
    ] {
        assert_eq!(controller.on_tap(&mut session, miss, ms(50)).unwrap(), None);
    }
    assert_eq!(session.mode(), ScreenMode::Greeting);
    assert_eq!(session.last_interaction_at(), ms(0));
}

#[test]
fn test_tap_on_scan_is_noop() {
    let (mut controller, mut session) = setup();
    let before = session.clone();
    assert_eq!(controller.on_tap(&mut session, SCHEDULE_TAP, ms(5)).unwrap(), None);
    assert_eq!(session, before);
}

#[test]
fn test_stale_region_not_hit_after_switch() {
    let (mut controller, mut session) = setup();
    controller.enter_greeting(&mut session, "Ada", ms(0)).unwrap();
    controller.on_tap(&mut session, SCHEDULE_TAP, ms(10)).unwrap();

    // SCHEDULE_TAP lies outside the back button
    assert_eq!(controller.on_tap(&mut session, SCHEDULE_TAP, ms(20)).unwrap(), None);
    assert_eq!(session.mode(), ScreenMode::Schedule);
}

#[test]
fn test_tick_without_time_passing_is_stable() {
    let (mut controller, mut session) = setup();
    controller.enter_greeting(&mut session, "Ada", ms(300)).unwrap();

    for _ in 0..10 {
        assert!(controller.tick(&mut session, ms(300)).is_idle());
        assert_eq!(session.mode(), ScreenMode::Greeting);
    }
}

#[test]
fn test_greeting_refresh_after_period() {
    let (mut controller, mut session) = setup();
    controller.enter_greeting(&mut session, "Ada", ms(0)).unwrap();

    assert!(controller.tick(&mut session, ms(5000)).is_idle());

    controller.backend_mut().reset();
    let outcome = controller.tick(&mut session, ms(5001));
    assert_eq!(outcome.events.as_slice(), &[Event::GreetingExpired]);
    assert_eq!(session.mode(), ScreenMode::Greeting);
    assert_eq!(session.mode_entered_at(), ms(5001));
    assert_eq!(session.last_interaction_at(), ms(0));
    assert!(controller.backend().has_text("Hello,"));
}

#[test]
fn test_refresh_draw_failure_still_restarts_timer() {
    let (mut controller, mut session) = setup();
    controller.enter_greeting(&mut session, "Ada", ms(0)).unwrap();

    controller.backend_mut().set_failing(true);
    let outcome = controller.tick(&mut session, ms(5001));
    assert_eq!(outcome.events.as_slice(), &[Event::GreetingExpired]);
    assert_eq!(outcome.display_error, Some(DisplayError::Communication));
    assert_eq!(session.mode(), ScreenMode::Greeting);
    assert_eq!(session.mode_entered_at(), ms(5001));
}

#[test]
fn test_long_name_survives_schedule_round_trip() {
    let (mut controller, mut session) = setup();
    controller
        .enter_greeting(&mut session, "Maximiliana Alexandrovna Petrov Smith", ms(0))
        .unwrap();
    let greeted = session.name_buf().clone();
    assert_eq!(greeted.as_str(), "Maximiliana Alexandrovna Petrov");

    controller.on_tap(&mut session, SCHEDULE_TAP, ms(10)).unwrap();
    assert_eq!(session.mode(), ScreenMode::Schedule);
    controller.on_tap(&mut session, BACK_TAP, ms(20)).unwrap();

    assert_eq!(session.mode(), ScreenMode::Greeting);
    assert_eq!(session.user_name(), greeted.as_str());
}

#[test]
fn test_inactivity_not_masked_by_refresh() {
    let (mut controller, mut session) = setup();
    controller.enter_greeting(&mut session, "Ada", ms(0)).unwrap();

    controller.tick(&mut session, ms(5001));
    assert_eq!(session.mode_entered_at(), ms(5001));

    let outcome = controller.tick(&mut session, ms(10_001));
    assert_eq!(outcome.events.as_slice(), &[Event::InactivityExpired]);
    assert_eq!(session.mode(), ScreenMode::Scan);
    assert_eq!(controller.button_region(), None);
}

#[test]
fn test_refresh_then_timeout_in_one_tick() {
    let (mut controller, mut session) = setup();
    controller.enter_greeting(&mut session, "Ada", ms(0)).unwrap();

    let outcome = controller.tick(&mut session, ms(10_001));
    assert_eq!(
        outcome.events.as_slice(),
        &[Event::GreetingExpired, Event::InactivityExpired]
    );
    assert_eq!(session.mode(), ScreenMode::Scan);
}

#[test]
fn test_schedule_times_out_without_refresh() {
    let (mut controller, mut session) = setup();
    controller.enter_greeting(&mut session, "Ada", ms(0)).unwrap();
    controller.on_tap(&mut session, SCHEDULE_TAP, ms(1000)).unwrap();

    assert!(controller.tick(&mut session, ms(6500)).is_idle());
    assert!(controller.tick(&mut session, ms(11_000)).is_idle());
    assert_eq!(session.mode(), ScreenMode::Schedule);

    let outcome = controller.tick(&mut session, ms(11_001));
    assert_eq!(outcome.events.as_slice(), &[Event::InactivityExpired]);
    assert_eq!(session.mode(), ScreenMode::Scan);
}

#[test]
fn test_timers_across_clock_wrap() {
    let start = ms(u32::MAX - 1000);
    let (mut controller, mut session) = setup_at(start);
    controller.enter_greeting(&mut session, "Ada", start).unwrap();

    assert!(controller.tick(&mut session, start.add_millis(3000)).is_idle());
    assert_eq!(session.mode(), ScreenMode::Greeting);

    let outcome = controller.tick(&mut session, start.add_millis(5001));
    assert_eq!(outcome.events.as_slice(), &[Event::GreetingExpired]);

    assert!(controller.tick(&mut session, start.add_millis(10_000)).is_idle());
    let outcome = controller.tick(&mut session, start.add_millis(10_001));
    assert_eq!(outcome.events.as_slice(), &[Event::InactivityExpired]);
    assert_eq!(session.mode(), ScreenMode::Scan);
}

#[test]
fn test_display_failure_still_commits() {
    let (mut controller, mut session) = setup();
    controller.backend_mut().set_failing(true);

    let err = controller
        .enter_greeting(&mut session, "Ada", ms(0))
        .unwrap_err();
    assert!(err.is_committed());
    assert_eq!(session.mode(), ScreenMode::Greeting);
    assert_eq!(session.user_name(), "Ada");
    assert!(controller.button_region().is_some());

    let outcome = controller.tick(&mut session, ms(10_001));
    assert_eq!(outcome.display_error, Some(DisplayError::Communication));
    assert_eq!(session.mode(), ScreenMode::Scan);
}

#[test]
fn test_custom_schedule_is_drawn() {
    use medgreet_display::DoseSlot;

    static SLOTS: [DoseSlot; 1] = [DoseSlot::new("7:30 AM", 1, 1)];
    let mut controller = ScreenController::new(RecordingBackend::new(SCREEN), GreeterConfig::default())
        .with_schedule(MedicationSchedule::new(&SLOTS));
    let mut session = Session::new(ms(0));
    controller.enter_greeting(&mut session, "Ada", ms(0)).unwrap();
    controller.enter_schedule(&mut session, ms(0)).unwrap();

    assert!(controller.backend().has_text("7:30 AM"));
    assert!(!controller.backend().has_text("8:00 AM"));
}

proptest! {
    #[test]
    fn prop_greeting_holds_before_timers(
        name in "[A-Za-z][A-Za-z .'-]{0,40}",
        start in any::<u32>(),
        wait in 0u32..=5000,
    ) {
        let start = Instant::from_millis(start);
        let (mut controller, mut session) = setup_at(start);
        controller.enter_greeting(&mut session, &name, start).unwrap();

        let outcome = controller.tick(&mut session, start.add_millis(wait));
        prop_assert!(outcome.is_idle());
        prop_assert_eq!(session.mode(), ScreenMode::Greeting);
        let expected = truncate_name(name.trim());
        prop_assert_eq!(session.user_name(), expected.as_str());
    }

    #[test]
    fn prop_enter_scan_always_scan(greet in any::<bool>(), schedule in any::<bool>()) {
        let (mut controller, mut session) = setup();
        if greet {
            controller.enter_greeting(&mut session, "Ada", ms(0)).unwrap();
            if schedule {
                controller.enter_schedule(&mut session, ms(0)).unwrap();
            }
        }
        controller.enter_scan(&mut session).unwrap();
        prop_assert_eq!(session.mode(), ScreenMode::Scan);
        prop_assert_eq!(controller.button_region(), None);
    }
}
