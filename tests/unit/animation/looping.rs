use super::*;
use crate::animation::timeline::{FlashTiming, Property};
use crate::foundation::color::Color;
use crate::scene::model::{ElementRef, NodeId};

fn three_flashes() -> (Timeline, StepId) {
    let mut t = Timeline::new(Color::GREEN, FlashTiming::default());
    let mut last = None;
    for (i, start) in [0.0, 0.5, 1.0].into_iter().enumerate() {
        last = Some(
            t.flash(
                ElementRef::Node(NodeId(i as u32)),
                Color::GRAY,
                start,
                Property::Fill,
            )
            .unwrap(),
        );
    }
    (t, last.unwrap())
}

#[test]
fn include_rewrites_every_step_including_terminal() {
    let (mut t, terminal) = three_flashes();
    let n = LoopBinding::new(terminal, TerminalPolicy::Include)
        .apply(&mut t)
        .unwrap();
    assert_eq!(n, 6);
    for step in t.steps() {
        assert_eq!(step.begin.anchor(), Some(terminal));
    }
    assert_eq!(
        t.get(terminal).unwrap().begin.to_string(),
        "+2.00s; anim-5.end+2.00s"
    );
}

#[test]
fn exclude_leaves_terminal_absolute() {
    let (mut t, terminal) = three_flashes();
    let n = LoopBinding::new(terminal, TerminalPolicy::Exclude)
        .apply(&mut t)
        .unwrap();
    assert_eq!(n, 5);
    let anchor = format!("{terminal}.end");
    for step in t.steps() {
        let begin = step.begin.to_string();
        if step.id == terminal {
            assert_eq!(begin, "+2.00s");
        } else {
            assert!(begin.contains(&anchor), "{begin}");
        }
    }
}

#[test]
fn binding_is_idempotent() {
    let (mut t, terminal) = three_flashes();
    let binding = LoopBinding::new(terminal, TerminalPolicy::Include);
    binding.apply(&mut t).unwrap();
    let once: Vec<String> = t.steps().iter().map(|s| s.begin.to_string()).collect();
    binding.apply(&mut t).unwrap();
    let twice: Vec<String> = t.steps().iter().map(|s| s.begin.to_string()).collect();
    assert_eq!(once, twice);
    assert_eq!(once[0], "+0.00s; anim-5.end+0.00s");
}

#[test]
fn unknown_terminal_is_rejected() {
    let (mut t, _) = three_flashes();
    let err = LoopBinding::new(StepId(100), TerminalPolicy::Include)
        .apply(&mut t)
        .unwrap_err();
    assert!(matches!(err, HexlogoError::Animation(_)));
    assert!(t.steps().iter().all(|s| s.begin.anchor().is_none()));
}

#[test]
fn period_is_terminal_end() {
    let (t, terminal) = three_flashes();
    let period = LoopBinding::new(terminal, TerminalPolicy::Include)
        .period_secs(&t)
        .unwrap();
    assert!((period - 3.2).abs() < 1e-9);
}

#[test]
fn default_policy_includes_terminal() {
    assert_eq!(TerminalPolicy::default(), TerminalPolicy::Include);
    assert_eq!(
        serde_json::to_value(TerminalPolicy::Exclude).unwrap(),
        serde_json::json!("exclude")
    );
}
