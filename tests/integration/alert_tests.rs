//! Alert behaviour over full loop runs: actuators, broadcasts, paging.

use gassentry::app::service::AppService;
use gassentry::config::SystemConfig;

use crate::mock_hw::{ActuatorCall, CaptureLink, MockHardware, MockLcd, send_line};

fn fixture() -> (AppService, MockHardware, CaptureLink, MockLcd) {
    (
        AppService::new(&SystemConfig::default()),
        MockHardware::new(),
        CaptureLink::new(),
        MockLcd::new(),
    )
}

#[test]
fn gas_event_lifecycle() {
    let (mut app, mut hw, mut link, mut lcd) = fixture();

    // Quiet air: nothing asserted.
    app.tick(10, &mut hw, &mut link, &mut lcd);
    assert!(!hw.relay && !hw.fan && !hw.buzzer);

    // Concentration rises above threshold.
    hw.mq2_v = 2.2;
    app.tick(20, &mut hw, &mut link, &mut lcd);
    assert!(hw.relay && hw.fan);
    assert!(link.text().contains("ALERT! MQ2: 2.20V\r\n"));

    // Air clears: everything releases on the next evaluation.
    hw.mq2_v = 1.0;
    link.clear();
    app.tick(30, &mut hw, &mut link, &mut lcd);
    assert!(!hw.relay && !hw.fan && !hw.buzzer);
    assert!(!link.text().contains("ALERT!"));
}

#[test]
fn alert_off_silences_wire_and_buzzer_but_not_relay() {
    let (mut app, mut hw, mut link, mut lcd) = fixture();

    send_line(&mut app, "ALERT OFF");
    app.tick(0, &mut hw, &mut link, &mut lcd);

    hw.mq2_v = 3.5;
    link.clear();
    for now in (10..600).step_by(10) {
        app.tick(now, &mut hw, &mut link, &mut lcd);
    }

    assert!(!link.text().contains("ALERT!"));
    assert!(!hw.buzzer);
    // Relay and fan are a safety function, not an alert courtesy.
    assert!(hw.relay && hw.fan);
}

#[test]
fn buzzer_beeps_with_mq2_cadence_at_loop_granularity() {
    let (mut app, mut hw, mut link, mut lcd) = fixture();
    hw.mq2_v = 3.5;

    let mut transitions = Vec::new();
    let mut last = false;
    for now in (0..2000).step_by(10) {
        app.tick(now, &mut hw, &mut link, &mut lcd);
        if hw.buzzer != last {
            transitions.push((now, hw.buzzer));
            last = hw.buzzer;
        }
    }

    // 200 ms off / 300 ms on oscillation: first rise at 200, fall at 500,
    // rise again at 700...
    assert_eq!(transitions[0], (200, true));
    assert_eq!(transitions[1], (500, false));
    assert_eq!(transitions[2], (700, true));
    assert_eq!(transitions[3], (1000, false));
}

#[test]
fn display_alternates_voltage_and_threshold_pages() {
    let (mut app, mut hw, mut link, mut lcd) = fixture();
    hw.mq2_v = 1.1;
    hw.mq135_v = 0.6;

    for now in (0..2100).step_by(10) {
        app.tick(now, &mut hw, &mut link, &mut lcd);
    }

    let w = &lcd.writes;
    assert!(w.contains(&"MQ2: 1.10V".to_owned()));
    assert!(w.contains(&"MQ135: 0.60V".to_owned()));
    assert!(w.contains(&"MQ2 Th: 2.00V".to_owned()));
    assert!(w.contains(&"MQ135 Th: 2.00V".to_owned()));
    assert_eq!(lcd.clears, 2, "one clear per page flip at t=1000 and t=2000");
}

#[test]
fn actuator_history_is_driven_every_tick() {
    let (mut app, mut hw, mut link, mut lcd) = fixture();
    hw.mq135_v = 2.6;

    app.tick(10, &mut hw, &mut link, &mut lcd);
    app.tick(20, &mut hw, &mut link, &mut lcd);

    // Unconditional writes each evaluation, no edge detection.
    let relays = hw
        .calls
        .iter()
        .filter(|c| matches!(c, ActuatorCall::Relay(true)))
        .count();
    assert_eq!(relays, 2);
}
