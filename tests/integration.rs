//! Integration tests for widget-engine.
//!
//! These tests exercise the public API from outside the crate, driving the
//! widget facades through the testing pilot and observing them through their
//! callbacks and the shapes they leave in a scene.

use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;

use widget_engine::event::{InputEvent, Key, PointerEvent};
use widget_engine::logic::{CheckState, Direction, RadioOption};
use widget_engine::shape::{Scene, ShapeKind};
use widget_engine::testing::{Pilot, Recorder};
use widget_engine::theme::{Color, Theme};
use widget_engine::widget::{Widget, WidgetState};
use widget_engine::widgets::*;
use widget_engine::WidgetError;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Shared line log for interleaving several callbacks in one transcript.
#[derive(Clone, Default)]
struct Transcript(Rc<RefCell<Vec<String>>>);

impl Transcript {
    fn push(&self, line: String) {
        self.0.borrow_mut().push(line);
    }

    fn render(&self) -> String {
        self.0.borrow().join("\n")
    }
}

// ---------------------------------------------------------------------------
// Radio exclusivity
// ---------------------------------------------------------------------------

#[test]
fn test_radio_exclusivity_over_click_sequences() {
    let starts: [&[(&str, bool)]; 4] = [
        &[("a", false), ("b", false), ("c", false)],
        &[("a", true), ("b", true), ("c", true)],
        &[("a", false), ("b", true), ("c", false)],
        &[("only", true)],
    ];
    let clicks = [2usize, 0, 0, 1, 2, 1, 0];

    for start in starts {
        let mut group =
            RadioGroup::new(&mut Scene::new(), &Theme::default(), start.iter().copied());
        assert!(group.options().iter().filter(|o| o.selected).count() <= 1);

        let mut pilot = Pilot::new(group);
        for &i in clicks.iter().filter(|&&i| i < start.len()) {
            pilot.click(i);
            let group = pilot.widget();
            let selected: Vec<usize> = group
                .options()
                .iter()
                .enumerate()
                .filter(|(_, o)| o.selected)
                .map(|(k, _)| k)
                .collect();
            assert_eq!(selected, vec![i]);
        }
        group = pilot.into_inner();
        assert!(group.selected().is_some());
    }
}

#[test]
fn test_radio_reports_index_only() {
    let checks = Recorder::new();
    let mut group = RadioGroup::new(
        &mut Scene::new(),
        &Theme::default(),
        vec![RadioOption::new("red", false), RadioOption::new("blue", false)],
    );
    group.on_check_changed(checks.sink());
    Pilot::new(group).click(1).click(1);
    assert_eq!(checks.take(), vec![1, 1]);
}

// ---------------------------------------------------------------------------
// Scrollbar clamps
// ---------------------------------------------------------------------------

#[test]
fn test_scrollbar_clamp_idempotence() {
    let moves = Recorder::new();
    let mut bar = ScrollBar::new(&mut Scene::new(), &Theme::default(), 300.0).unwrap();
    bar.on_scroll_moved(moves.sink());
    let mut pilot = Pilot::new(bar);

    let top = pilot.widget().thumb_offset();
    for _ in 0..5 {
        pilot.click(ScrollPart::StepUp);
        assert_eq!(pilot.widget().thumb_offset(), top);
    }
    assert!(moves.is_empty());

    for _ in 0..40 {
        pilot.click(ScrollPart::StepDown);
    }
    let bottom = pilot.widget().thumb_offset();
    let fired = moves.take().len();
    for _ in 0..5 {
        pilot.click(ScrollPart::StepDown);
        assert_eq!(pilot.widget().thumb_offset(), bottom);
    }
    assert!(moves.is_empty());
    assert_eq!(fired, 23);
    assert_eq!(bottom + pilot.widget().thumb_height(), 300.0);
}

#[test]
fn test_scrollbar_drag_transcript() {
    let log = Transcript::default();
    let mut bar = ScrollBar::new(&mut Scene::new(), &Theme::default(), 300.0).unwrap();
    let l = log.clone();
    bar.on_state_change(move |s| l.push(format!("state {s}")));
    let l = log.clone();
    bar.on_scroll_moved(move |d| l.push(format!("scroll {d}")));

    let mut pilot = Pilot::new(bar);
    pilot
        .enter(ScrollPart::Track)
        .at(10.0, 30.0)
        .press(ScrollPart::Thumb)
        .move_pointer(ScrollPart::Thumb, 10.0, 80.0)
        .move_pointer(ScrollPart::Thumb, 10.0, 5.0)
        .move_pointer(ScrollPart::Thumb, 10.0, 60.0)
        .leave(ScrollPart::Track)
        .move_pointer(ScrollPart::Track, 10.0, 200.0);

    insta::assert_snapshot!(log.render(), @r"
    state hover
    state pressed
    state updating
    state updating
    scroll up
    state idle
    ");
    assert_eq!(pilot.widget().thumb_offset(), 50.0);
}

// ---------------------------------------------------------------------------
// Progress
// ---------------------------------------------------------------------------

#[test]
fn test_progress_increment_saturation() {
    let incs = Recorder::new();
    let mut bar = ProgressBar::new(&mut Scene::new(), &Theme::default(), 200.0);
    bar.on_progress_incremented(incs.sink());

    bar.set_value(95.0);
    assert!(bar.increment(10.0));
    assert_eq!(bar.value(), 100.0);

    bar.set_value(50.0);
    assert!(!bar.increment(-5.0));
    assert_eq!(bar.value(), 50.0);

    assert_eq!(incs.take(), vec![Incremented { value: 100.0 }]);
}

// ---------------------------------------------------------------------------
// CheckBox
// ---------------------------------------------------------------------------

#[test]
fn test_toggle_involution() {
    let checks = Recorder::new();
    let mut checkbox = CheckBox::new(&mut Scene::new(), &Theme::default());
    checkbox.on_check_changed(checks.sink());
    let mut pilot = Pilot::new(checkbox);

    let start = pilot.widget().check_state();
    pilot.click(()).click(());
    assert_eq!(pilot.widget().check_state(), start);
    assert_eq!(checks.take(), vec![CheckState::Checked, CheckState::Unchecked]);

    pilot.widget_mut().set_checked(true);
    pilot.click(()).click(());
    assert_eq!(checks.take(), vec![CheckState::Unchecked, CheckState::Checked]);
}

// ---------------------------------------------------------------------------
// Button
// ---------------------------------------------------------------------------

#[test]
fn test_button_click_gating() {
    let clicks = Recorder::new();
    let mut button = Button::new(&mut Scene::new(), &Theme::default()).with_text("OK");
    button.on_click(clicks.sink());
    let mut pilot = Pilot::new(button);

    // Down outside: the button never sees it. Up inside.
    pilot.enter(()).release(());
    assert!(clicks.is_empty());

    pilot.press(()).release(());
    assert_eq!(clicks.len(), 1);
}

#[test]
fn test_button_state_transcript() {
    let log = Transcript::default();
    let mut button = Button::new(&mut Scene::new(), &Theme::default());
    let l = log.clone();
    button.on_state_change(move |s| l.push(format!("state {s}")));
    let l = log.clone();
    button.on_click(move |p| l.push(format!("click at {},{}", p.x, p.y)));

    let mut pilot = Pilot::new(button);
    pilot.at(30.0, 20.0).enter(()).press(()).leave(()).enter(()).release(());
    pilot.press(()).release(()).leave(());

    insta::assert_snapshot!(log.render(), @r"
    state hover
    state pressed
    state idle
    state hover
    state hover
    state pressed
    state executing
    click at 30,20
    state hover
    state idle
    ");
}

#[test]
fn test_resubscribing_replaces_handler() {
    let first = Recorder::new();
    let second = Recorder::new();
    let mut button = Button::new(&mut Scene::new(), &Theme::default());
    button.on_click(first.sink());
    button.on_click(second.sink());
    Pilot::new(button).click(());
    assert!(first.is_empty());
    assert_eq!(second.len(), 1);
}

// ---------------------------------------------------------------------------
// TextBox
// ---------------------------------------------------------------------------

#[test]
fn test_text_edit_round_trip() {
    let texts = Recorder::new();
    let states = Recorder::new();
    let mut text_box = TextBox::new(&mut Scene::new(), &Theme::default());
    text_box.on_text_changed(texts.sink());
    text_box.on_state_change(states.sink());
    let mut pilot = Pilot::new(text_box);

    pilot
        .key((), Key::from_name("H"))
        .key((), Key::from_name("i"))
        .key((), Key::from_name("Backspace"))
        .key((), Key::from_name("Backspace"));
    assert_eq!(pilot.widget().text(), "");
    assert_eq!(texts.len(), 4);

    pilot.key((), Key::Backspace);
    assert_eq!(texts.len(), 4);
    // Two state notifications per keystroke, accepted or not.
    assert_eq!(states.len(), 10);
    assert_eq!(pilot.widget().state(), WidgetState::Idle);
}

#[test]
fn test_text_box_from_crossterm_events() {
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    let key = |code, kind| {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    };
    let events = [
        key(KeyCode::Char('o'), KeyEventKind::Press),
        key(KeyCode::Char('o'), KeyEventKind::Release),
        key(KeyCode::Char('k'), KeyEventKind::Press),
        key(KeyCode::Enter, KeyEventKind::Press),
    ];

    let mut pilot = Pilot::new(TextBox::new(&mut Scene::new(), &Theme::default()));
    for event in events.iter().filter_map(InputEvent::from_crossterm) {
        pilot.send((), event);
    }
    assert_eq!(pilot.widget().text(), "ok");
}

// ---------------------------------------------------------------------------
// Slider
// ---------------------------------------------------------------------------

#[test]
fn test_slider_snapping() {
    let ticks = Recorder::new();
    let mut scene = Scene::new();
    let mut slider = Slider::new(&mut scene, &Theme::default(), 300.0, 3).unwrap();
    slider.on_tick_changed(ticks.sink());
    let mut pilot = Pilot::new(slider);

    pilot.click(SliderPart::Tick(2));
    assert_eq!(ticks.take(), vec![2]);
    let slider = pilot.widget();
    assert_eq!(slider.indicator_position(), slider.tick_positions()[2]);
    assert_eq!(slider.tick_positions(), &[0.0, 150.0, 300.0]);
}

#[test]
fn test_slider_rejects_single_tick() {
    let err = Slider::new(&mut Scene::new(), &Theme::default(), 300.0, 1).unwrap_err();
    assert_eq!(err, WidgetError::TooFewTicks { count: 1 });
}

// ---------------------------------------------------------------------------
// Theme and scene
// ---------------------------------------------------------------------------

#[test]
fn test_parsed_theme_reaches_widgets() {
    let theme = Theme::parse("Theme { hover: #ff00ff; scroll-step: 25; }").unwrap();
    let mut scene = Scene::new();

    let mut button = Button::new(&mut scene, &theme);
    button.handle_event((), &InputEvent::PointerEnter(PointerEvent::default()));
    let body = scene.shapes_of_kind(ShapeKind::Rect)[0];
    assert_eq!(scene.get(body).unwrap().fill, Some(Color::new(255, 0, 255)));

    let mut bar = ScrollBar::new(&mut scene, &theme, 300.0).unwrap();
    bar.step_down();
    assert_eq!(bar.thumb_offset(), 20.0 + 25.0);
}

#[test]
fn test_widgets_share_one_scene() {
    let mut scene = Scene::new();
    let mut button = Button::new(&mut scene, &Theme::default()).with_text("Go");
    let mut text_box = TextBox::new(&mut scene, &Theme::default());
    button.move_to(10.0, 10.0);
    text_box.move_to(10.0, 80.0);

    assert_eq!(button.widget_type(), "Button");
    assert_eq!(text_box.widget_type(), "TextBox");
    assert_eq!(text_box.position().y, 80.0);
    // button: rect + label; text box: frame + text + caret
    assert_eq!(scene.len(), 5);
    assert!(scene.find_text("Go").is_some());
    assert_eq!(Direction::Up.to_string(), "up");
}
