//! CSV capture lifecycle driven end-to-end through [`AppService`].

use gassentry::app::service::AppService;
use gassentry::config::SystemConfig;

use crate::mock_hw::{CaptureLink, MockHardware, MockLcd, send_line};

fn fixture() -> (AppService, MockHardware, CaptureLink, MockLcd) {
    (
        AppService::new(&SystemConfig::default()),
        MockHardware::new(),
        CaptureLink::new(),
        MockLcd::new(),
    )
}

#[test]
fn csv_session_produces_clean_rows_only() {
    let (mut app, mut hw, mut link, mut lcd) = fixture();

    send_line(&mut app, "CSV ON");
    app.tick(0, &mut hw, &mut link, &mut lcd);
    link.clear();
    let splash_writes = lcd.writes.len();

    // The gas event starts after capture begins.
    hw.mq2_v = 3.5;
    hw.mq135_v = 0.25;
    for now in (10..500).step_by(10) {
        app.tick(now, &mut hw, &mut link, &mut lcd);
    }

    // Default 10 Hz: rows at 100, 200, 300, 400 — nothing else.
    let lines = link.lines();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "100,3.500,0.250");
    assert_eq!(lines[3], "400,3.500,0.250");

    // Alert machinery stays silent on the wire but keeps driving hardware.
    assert!(!link.text().contains("ALERT!"));
    assert!(hw.relay && hw.fan);
    assert!(!hw.buzzer, "buzzer is silenced during capture");
    assert_eq!(lcd.writes.len(), splash_writes, "no paging during capture");
}

#[test]
fn rate_change_applies_to_running_capture() {
    let (mut app, mut hw, mut link, mut lcd) = fixture();

    send_line(&mut app, "CSV ON");
    app.tick(0, &mut hw, &mut link, &mut lcd);
    send_line(&mut app, "CSV RATE 50");
    app.tick(10, &mut hw, &mut link, &mut lcd);

    link.clear();
    for now in (20..120).step_by(10) {
        app.tick(now, &mut hw, &mut link, &mut lcd);
    }
    // 20 ms spacing from the rate-change response onward.
    let rows = link
        .lines()
        .iter()
        .filter(|l| l.contains(','))
        .count();
    assert!(rows >= 4, "50 Hz must yield a row every other tick, got {rows}");
}

#[test]
fn csv_off_restores_normal_telemetry_and_alerts() {
    let (mut app, mut hw, mut link, mut lcd) = fixture();
    hw.mq2_v = 2.5;

    send_line(&mut app, "CSV ON");
    app.tick(0, &mut hw, &mut link, &mut lcd);
    app.tick(100, &mut hw, &mut link, &mut lcd);

    send_line(&mut app, "CSV OFF");
    app.tick(110, &mut hw, &mut link, &mut lcd);
    assert!(link.text().contains("> CSV logging DISABLED\r\n"));
    assert_eq!(lcd.last_write().unwrap(), "CSV Logging OFF");
    assert!(app.context().alert.enabled);
    assert!(app.context().pause.paused, "CSV OFF opens a pause window");

    // After the window closes, alert broadcasts resume.
    link.clear();
    app.tick(4110, &mut hw, &mut link, &mut lcd);
    app.tick(4120, &mut hw, &mut link, &mut lcd);
    assert!(link.text().contains("ALERT! MQ2: 2.50V\r\n"));
}

#[test]
fn csv_off_notice_holds_the_display_one_second() {
    let (mut app, mut hw, mut link, mut lcd) = fixture();

    send_line(&mut app, "CSV ON");
    app.tick(0, &mut hw, &mut link, &mut lcd);
    send_line(&mut app, "CSV OFF");
    app.tick(100, &mut hw, &mut link, &mut lcd);

    let clears_at_off = lcd.clears;
    let writes_at_off = lcd.writes.len();

    // Paging stays frozen while the notice shows.
    app.tick(600, &mut hw, &mut link, &mut lcd);
    assert_eq!(lcd.clears, clears_at_off);
    assert_eq!(lcd.writes.len(), writes_at_off);

    // One second after CSV OFF the notice clears and paging resumes.
    app.tick(1100, &mut hw, &mut link, &mut lcd);
    assert!(lcd.clears > clears_at_off);
    assert!(lcd.writes.len() > writes_at_off);
}

#[test]
fn timestamps_are_loop_clock_values() {
    let (mut app, mut hw, mut link, mut lcd) = fixture();

    send_line(&mut app, "CSV RATE 10");
    app.tick(0, &mut hw, &mut link, &mut lcd);
    send_line(&mut app, "CSV ON");
    app.tick(12345, &mut hw, &mut link, &mut lcd);

    link.clear();
    app.tick(12445, &mut hw, &mut link, &mut lcd);
    assert_eq!(link.lines()[0], "12445,0.000,0.000");
}
