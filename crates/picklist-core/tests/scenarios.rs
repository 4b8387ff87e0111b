//! End-to-end prompt sessions driven through the headless backend.

use crossterm::event::KeyCode;
use picklist_core::testing::{ctrl, ScriptedBackend};
use picklist_core::{
    Choice, Message, Multi, Prompt, PromptError, PromptOptions, SelectionState, TerminalEvent,
};
use std::io;
use std::panic::{catch_unwind, AssertUnwindSafe};

fn abc() -> Vec<Choice<&'static str>> {
    vec![
        Choice::new("A", "a"),
        Choice::new("B", "b"),
        Choice::new("C", "c"),
    ]
}

fn options(n: usize) -> Vec<Choice<usize>> {
    (1..=n).map(|i| Choice::new(format!("Option {i}"), i)).collect()
}

#[test]
fn single_select_confirm() {
    let mut backend = ScriptedBackend::new(80, 24).keys([KeyCode::Down, KeyCode::Down, KeyCode::Enter]);
    let result = Prompt::single("Pick one.", abc())
        .unwrap()
        .run(&mut backend)
        .unwrap();

    assert!(!result.canceled);
    assert_eq!(result.selection, Some("c"));
    assert_eq!(backend.init_calls(), 1);
    assert_eq!(backend.close_calls(), 1);
}

#[test]
fn single_select_toggle_then_confirm() {
    let mut backend = ScriptedBackend::new(80, 24).keys([
        KeyCode::Down,
        KeyCode::Down,
        KeyCode::Char(' '),
        KeyCode::Enter,
    ]);
    let result = Prompt::single("Pick one.", abc())
        .unwrap()
        .run(&mut backend)
        .unwrap();

    assert!(!result.canceled);
    assert_eq!(result.selection, Some("c"));
}

#[test]
fn single_select_replaces_previous_pick() {
    let mut backend = ScriptedBackend::new(80, 24).keys([
        KeyCode::Char(' '),
        KeyCode::Down,
        KeyCode::Char(' '),
        KeyCode::Enter,
    ]);
    let result = Prompt::single("Pick one.", abc())
        .unwrap()
        .run(&mut backend)
        .unwrap();
    assert_eq!(result.selection, Some("b"));
}

#[test]
fn multi_select_cancel_discards_selection() {
    let mut backend = ScriptedBackend::new(80, 24).keys([KeyCode::Char(' '), KeyCode::Esc]);
    let result = Prompt::multi("Pick some.", abc())
        .unwrap()
        .run(&mut backend)
        .unwrap();

    assert!(result.canceled);
    assert!(result.selection.is_empty());
    assert_eq!(backend.close_calls(), 1);
}

#[test]
fn ctrl_c_cancels() {
    let mut backend = ScriptedBackend::new(80, 24).event(ctrl(KeyCode::Char('c')));
    let result = Prompt::single("Pick one.", abc())
        .unwrap()
        .run(&mut backend)
        .unwrap();
    assert!(result.canceled);
    assert_eq!(result.selection, None);
}

#[test]
fn multi_select_confirm_returns_pick_order() {
    let mut backend = ScriptedBackend::new(80, 24).keys([
        KeyCode::Down,
        KeyCode::Down,
        KeyCode::Char(' '),
        KeyCode::Up,
        KeyCode::Up,
        KeyCode::Char(' '),
        KeyCode::Enter,
    ]);
    let result = Prompt::multi("Pick some.", abc())
        .unwrap()
        .run(&mut backend)
        .unwrap();
    assert_eq!(result.selection, vec!["c", "a"]);
}

#[test]
fn dynamic_message_updates_on_first_toggle() {
    let message = Message::computed(|s: &Multi<usize>| {
        if s.is_empty() {
            "Choose some options.".to_string()
        } else {
            format!("You have chosen {} option(s).", s.len())
        }
    });
    let mut backend = ScriptedBackend::new(80, 24).keys([KeyCode::Char(' '), KeyCode::Enter]);
    let result = Prompt::multi(message, options(20))
        .unwrap()
        .run(&mut backend)
        .unwrap();

    let frames = backend.frames();
    // initial frame, then the frame right after space; enter ends the loop
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0][0], "? Choose some options. (Press <space> to select)");
    assert_eq!(
        frames[1][0],
        "? You have chosen 1 option(s). (Press <enter> to confirm)"
    );
    assert_eq!(result.selection, vec![1]);
}

#[test]
fn long_list_scrolls_with_centered_pointer() {
    // 11 rows: header + 9 choices + hint
    let mut backend = ScriptedBackend::new(80, 11).keys([
        KeyCode::Down,
        KeyCode::Down,
        KeyCode::Down,
        KeyCode::Down,
        KeyCode::Down,
        KeyCode::Esc,
    ]);
    Prompt::multi("q", options(20))
        .unwrap()
        .run(&mut backend)
        .unwrap();

    let frames = backend.frames();
    let fourth = &frames[4];
    assert_eq!(fourth.len(), 11);
    assert_eq!(fourth[1], "  ◯ Option 1");
    assert_eq!(fourth[5], "❯ ◯ Option 5");

    let fifth = &frames[5];
    assert_eq!(fifth[1], "  ◯ Option 2");
    assert_eq!(fifth[5], "❯ ◯ Option 6");
    assert_eq!(fifth[10], "(Move up and down to reveal more choices)");
}

#[test]
fn short_list_has_no_scroll_hint() {
    let mut backend = ScriptedBackend::new(80, 24).key(KeyCode::Esc);
    Prompt::multi("q", abc()).unwrap().run(&mut backend).unwrap();
    let frame = backend.last_frame().unwrap();
    assert_eq!(frame.len(), 4);
    assert!(!frame.iter().any(|row| row.contains("reveal more")));
}

#[test]
fn resize_refits_viewport() {
    let mut backend = ScriptedBackend::new(80, 24)
        .keys(std::iter::repeat(KeyCode::Down).take(15))
        .event(TerminalEvent::Resize(80, 6))
        .key(KeyCode::Char(' '))
        .key(KeyCode::Enter);
    let result = Prompt::multi("q", options(30))
        .unwrap()
        .run(&mut backend)
        .unwrap();

    // header + 4 choices + hint
    let frame = &backend.frames()[16];
    assert_eq!(frame.len(), 6);
    assert!(frame.iter().any(|row| row == "❯ ◯ Option 16"));
    // the pointed choice survived the resize
    assert_eq!(result.selection, vec![16]);
}

#[test]
fn header_and_hint_can_be_disabled() {
    let opts = PromptOptions {
        header: false,
        scroll_hint: false,
        ..PromptOptions::default()
    };
    let mut backend = ScriptedBackend::new(80, 5).key(KeyCode::Esc);
    Prompt::multi("q", options(20))
        .unwrap()
        .with_options(opts)
        .run(&mut backend)
        .unwrap();
    let frame = backend.last_frame().unwrap();
    assert_eq!(frame.len(), 5);
    assert_eq!(frame[0], "❯ ◯ Option 1");
}

#[test]
fn empty_choices_never_touch_terminal() {
    let err = Prompt::multi("q", Vec::<Choice<u8>>::new()).err();
    assert!(matches!(err, Some(PromptError::EmptyChoices)));
}

#[test]
fn init_failure_surfaces_without_close() {
    let mut backend = ScriptedBackend::new(80, 24).fail_init().key(KeyCode::Enter);
    let err = Prompt::single("q", abc()).unwrap().run(&mut backend).unwrap_err();
    assert!(matches!(err, PromptError::Io(_)));
    assert_eq!(backend.close_calls(), 0);
    assert!(backend.frames().is_empty());
}

#[test]
fn polling_error_releases_terminal_then_propagates() {
    let mut backend = ScriptedBackend::new(80, 24)
        .key(KeyCode::Down)
        .fail(io::ErrorKind::BrokenPipe);
    let err = Prompt::multi("q", abc()).unwrap().run(&mut backend).unwrap_err();
    match err {
        PromptError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(backend.close_calls(), 1);
}

#[test]
fn panic_in_loop_still_releases_terminal_once() {
    let mut backend = ScriptedBackend::new(80, 24).key(KeyCode::Down).panic();
    let outcome = catch_unwind(AssertUnwindSafe(|| {
        Prompt::multi("q", abc()).unwrap().run(&mut backend)
    }));
    assert!(outcome.is_err());
    assert_eq!(backend.close_calls(), 1);
}

#[test]
fn equal_values_mirror_each_other() {
    let choices = vec![Choice::new("first", 1), Choice::new("second", 1), Choice::new("third", 2)];
    let mut backend = ScriptedBackend::new(80, 24).keys([KeyCode::Char(' '), KeyCode::Esc]);
    Prompt::multi("q", choices).unwrap().run(&mut backend).unwrap();
    let frame = backend.last_frame().unwrap();
    assert_eq!(frame[1], "❯ ◉ first");
    assert_eq!(frame[2], "  ◉ second");
    assert_eq!(frame[3], "  ◯ third");
}
