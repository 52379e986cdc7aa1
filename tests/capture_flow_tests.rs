use glam::Vec2;
use manual_roi::{
    map_raw_input, run_session, CaptureEvent, CaptureObserver, CapturePreview, CaptureSession,
    CaptureState, IgnoreReason, Key, NoopObserver, RawInput, ScriptedEvents, Transition,
};

/// Zählt Übergänge nach Art.
#[derive(Default)]
struct CountingObserver {
    added: usize,
    removed: usize,
    ignored: Vec<IgnoreReason>,
    closed: usize,
    max_preview_points: usize,
}

impl CaptureObserver for CountingObserver {
    fn on_transition(&mut self, preview: &CapturePreview, transition: &Transition) {
        match transition {
            Transition::PointAdded => self.added += 1,
            Transition::PointRemoved => self.removed += 1,
            Transition::Closed(_) => self.closed += 1,
            Transition::Ignored(reason) => self.ignored.push(*reason),
        }
        self.max_preview_points = self.max_preview_points.max(preview.points.len());
    }
}

fn click(x: f32, y: f32) -> RawInput {
    RawInput::PrimaryClick(Vec2::new(x, y))
}

fn events_from_raw(inputs: &[RawInput]) -> ScriptedEvents {
    ScriptedEvents::new(inputs.iter().copied().filter_map(map_raw_input))
}

#[test]
fn test_raw_input_session_closes_region() {
    let inputs = [
        click(0.0, 0.0),
        click(0.0, 10.0),
        click(10.0, 10.0),
        RawInput::KeyPressed(Key::Other),
        click(10.0, 0.0),
        RawInput::KeyPressed(Key::Enter),
    ];
    let mut source = events_from_raw(&inputs);
    let mut observer = CountingObserver::default();
    let mut session = CaptureSession::new();

    let closed = run_session(&mut session, &mut source, &mut observer)
        .expect("Enter nach 4 Punkten sollte die Region schließen");

    assert_eq!(closed.len(), 5);
    assert_eq!(closed.points()[0], closed.points()[4]);
    assert_eq!(observer.added, 4);
    assert_eq!(observer.closed, 1);
    assert!(observer.ignored.is_empty());
    assert_eq!(observer.max_preview_points, 5);
}

#[test]
fn test_enter_with_too_few_points_keeps_collecting() {
    let inputs = [
        click(1.0, 1.0),
        click(5.0, 1.0),
        RawInput::KeyPressed(Key::Enter),
        click(5.0, 5.0),
        RawInput::KeyPressed(Key::Enter),
    ];
    let mut source = events_from_raw(&inputs);
    let mut observer = CountingObserver::default();
    let mut session = CaptureSession::new();

    let closed = run_session(&mut session, &mut source, &mut observer).expect("Region erwartet");

    assert_eq!(observer.ignored, vec![IgnoreReason::TooFewPoints]);
    assert_eq!(closed.vertices().len(), 3);
}

#[test]
fn test_undo_via_secondary_click_and_keys() {
    let inputs = [
        RawInput::KeyPressed(Key::Backspace),
        click(0.0, 0.0),
        click(99.0, 99.0),
        RawInput::SecondaryClick(Vec2::new(99.0, 99.0)),
        click(8.0, 0.0),
        click(50.0, 50.0),
        RawInput::KeyPressed(Key::Delete),
        click(8.0, 8.0),
        RawInput::KeyPressed(Key::Enter),
    ];
    let mut source = events_from_raw(&inputs);
    let mut observer = CountingObserver::default();
    let mut session = CaptureSession::new();

    let closed = run_session(&mut session, &mut source, &mut observer).expect("Region erwartet");

    assert_eq!(observer.ignored, vec![IgnoreReason::EmptyBuffer]);
    assert_eq!(observer.removed, 2);
    assert_eq!(
        closed.vertices(),
        &[Vec2::new(0.0, 0.0), Vec2::new(8.0, 0.0), Vec2::new(8.0, 8.0)]
    );
}

#[test]
fn test_done_session_ignores_further_events() {
    let mut session = CaptureSession::new();
    for event in [
        CaptureEvent::AddPoint(Vec2::new(0.0, 0.0)),
        CaptureEvent::AddPoint(Vec2::new(4.0, 0.0)),
        CaptureEvent::AddPoint(Vec2::new(4.0, 4.0)),
        CaptureEvent::Finish,
    ] {
        session.handle(event);
    }
    assert_eq!(session.state(), CaptureState::Done);

    // Eine fertige Sitzung liefert in der Schleife nur noch ignorierte Übergänge
    let mut source = ScriptedEvents::new([CaptureEvent::RemoveLastPoint, CaptureEvent::Finish]);
    let mut observer = CountingObserver::default();
    assert!(run_session(&mut session, &mut source, &mut observer).is_none());
    assert_eq!(
        observer.ignored,
        vec![IgnoreReason::SessionDone, IgnoreReason::SessionDone]
    );
    assert_eq!(session.points().len(), 4);
}

#[test]
fn test_json_event_script_runs_headless() {
    let script = r#"[
        {"add_point": [2.0, 2.0]},
        {"add_point": [2.0, 12.0]},
        "remove_last_point",
        {"add_point": [12.0, 12.0]},
        {"add_point": [12.0, 2.0]},
        "finish"
    ]"#;
    let events: Vec<CaptureEvent> = serde_json::from_str(script).unwrap();
    let mut source = ScriptedEvents::from(events);
    let mut session = CaptureSession::new();

    let closed = run_session(&mut session, &mut source, &mut NoopObserver).unwrap();
    assert_eq!(closed.vertices().len(), 3);
    assert_eq!(source.remaining(), 0);
}
