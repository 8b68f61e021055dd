use super::*;
use crate::scene::model::{EdgeId, NodeId};

fn timeline() -> Timeline {
    Timeline::new(Color::GREEN, FlashTiming::default())
}

#[test]
fn flash_from_zero_yields_two_steps() {
    let mut t = timeline();
    let node = ElementRef::Node(NodeId(6));
    let last = t.flash(node, Color::GRAY, 0.0, Property::Fill).unwrap();

    assert_eq!(t.len(), 2);
    let [a, b] = t.steps() else {
        panic!("expected two steps");
    };

    assert_eq!((a.from, a.to), (Color::GRAY, Color::GREEN));
    assert_eq!(a.begin.to_string(), "+0.00s");
    assert_eq!(a.dur, 1.0);

    assert_eq!((b.from, b.to), (Color::GREEN, Color::GRAY));
    assert_eq!(b.begin.to_string(), "+1.00s");
    assert_eq!(b.dur, 1.2);

    assert_eq!(last, b.id);
    assert_eq!(a.property, Property::Fill);
}

#[test]
fn ramp_out_starts_when_ramp_in_ends() {
    let mut t = timeline();
    for (i, start) in [0.0, 0.5, 1.0, 1.5, 6.0].into_iter().enumerate() {
        t.flash(
            ElementRef::Edge(EdgeId(i as u32)),
            Color::GRAY,
            start,
            Property::Stroke,
        )
        .unwrap();
    }
    for pair in t.steps().chunks(2) {
        assert_eq!(pair[1].begin.offset(), pair[0].begin.offset() + pair[0].dur);
    }
}

#[test]
fn custom_timing_is_honoured() {
    let mut t = Timeline::new(
        Color::RED,
        FlashTiming {
            ramp_in_secs: 0.25,
            ramp_out_secs: 0.5,
        },
    );
    t.flash(ElementRef::Node(NodeId(0)), Color::BLUE, 2.0, Property::Fill)
        .unwrap();
    assert_eq!(t.steps()[1].begin, Begin::Offset(2.25));
    assert_eq!(t.duration_secs(), 2.75);
}

#[test]
fn ids_are_sequential_and_resolvable() {
    let mut t = timeline();
    let first = t
        .flash(ElementRef::Node(NodeId(0)), Color::GRAY, 0.0, Property::Fill)
        .unwrap();
    let second = t
        .flash(ElementRef::Node(NodeId(1)), Color::GRAY, 1.0, Property::Fill)
        .unwrap();
    assert_eq!(first.to_string(), "anim-1");
    assert_eq!(second.to_string(), "anim-3");
    assert_eq!(t.get(second).unwrap().target, ElementRef::Node(NodeId(1)));
    assert!(t.get(StepId(4)).is_none());
}

#[test]
fn negative_or_nan_start_is_rejected() {
    let mut t = timeline();
    let node = ElementRef::Node(NodeId(0));
    assert!(t.flash(node, Color::GRAY, -0.5, Property::Fill).is_err());
    assert!(t.flash(node, Color::GRAY, f64::NAN, Property::Fill).is_err());
    assert!(t.is_empty());
}

#[test]
fn chained_begin_lists_both_conditions() {
    let b = Begin::Chained {
        offset: 1.5,
        anchor: StepId(31),
    };
    assert_eq!(b.to_string(), "+1.50s; anim-31.end+1.50s");
    assert_eq!(b.offset(), 1.5);
    assert_eq!(b.anchor(), Some(StepId(31)));
    assert_eq!(Begin::Offset(0.0).anchor(), None);
}

#[test]
fn property_follows_target_kind() {
    assert_eq!(Property::for_target(ElementRef::Node(NodeId(0))), Property::Fill);
    assert_eq!(Property::for_target(ElementRef::Edge(EdgeId(0))), Property::Stroke);
    assert_eq!(Property::Stroke.attribute_name(), "stroke");
}

#[test]
fn dur_value_keeps_one_decimal_for_whole_seconds() {
    let mut t = timeline();
    t.flash(ElementRef::Node(NodeId(0)), Color::GRAY, 0.0, Property::Fill)
        .unwrap();
    assert_eq!(t.steps()[0].dur_value(), "1.0s");
    assert_eq!(t.steps()[1].dur_value(), "1.2s");
}
