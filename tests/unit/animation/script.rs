use super::*;
use crate::animation::looping::{LoopBinding, TerminalPolicy};
use crate::animation::timeline::Begin;
use crate::config::LogoConfig;
use crate::scene::builder::build_scene;

fn scripted() -> (Scene, ScriptedTimeline) {
    let cfg = LogoConfig::default();
    let scene = build_scene(&cfg).unwrap();
    let st = script_timeline(
        &scene,
        &canonical_script(),
        cfg.palette.highlight,
        cfg.flash,
    )
    .unwrap();
    (scene, st)
}

#[test]
fn canonical_script_has_sixteen_flashes() {
    let (_, st) = scripted();
    assert_eq!(canonical_script().len(), 16);
    assert_eq!(st.timeline.len(), 32);
}

#[test]
fn last_flash_starts_at_six_seconds() {
    let (_, st) = scripted();
    let steps = st.timeline.steps();
    let last_ramp_in = &steps[steps.len() - 2];
    assert_eq!(last_ramp_in.begin.to_string(), "+6.00s");
    assert_eq!(st.terminal, steps[steps.len() - 1].id);
    assert_eq!(
        st.timeline.get(st.terminal).unwrap().begin,
        Begin::Offset(7.0)
    );
    assert!((st.timeline.duration_secs() - 8.2).abs() < 1e-9);
}

#[test]
fn every_cue_resolves_to_an_existing_element() {
    let (scene, st) = scripted();
    for step in st.timeline.steps() {
        scene.element_id(step.target).unwrap();
        assert_eq!(step.property, Property::for_target(step.target));
    }
}

#[test]
fn flashes_return_to_resting_gray() {
    let (_, st) = scripted();
    for pair in st.timeline.steps().chunks(2) {
        assert_eq!(pair[0].from, Color::GRAY);
        assert_eq!(pair[0].to, Color::GREEN);
        assert_eq!(pair[1].to, Color::GRAY);
        assert_eq!(
            pair[1].begin.offset(),
            pair[0].begin.offset() + pair[0].dur
        );
    }
}

#[test]
fn bound_canonical_timeline_chains_on_terminal() {
    let (_, mut st) = scripted();
    LoopBinding::new(st.terminal, TerminalPolicy::Exclude)
        .apply(&mut st.timeline)
        .unwrap();
    let anchor = format!("{}.end", st.terminal);
    for step in st.timeline.steps() {
        if step.id != st.terminal {
            assert!(step.begin.to_string().contains(&anchor));
        }
    }
    assert_eq!(
        st.timeline.get(st.terminal).unwrap().begin.to_string(),
        "+7.00s"
    );
}

#[test]
fn cue_on_excluded_pair_fails() {
    let cfg = LogoConfig::default();
    let scene = build_scene(&cfg).unwrap();
    let cues = [Cue::edge(EdgeKey::Ring(0, 3), 0.0)];
    let err = script_timeline(&scene, &cues, Color::GREEN, cfg.flash).unwrap_err();
    assert!(matches!(err, HexlogoError::Layout(_)));
}

#[test]
fn empty_script_has_no_terminal() {
    let cfg = LogoConfig::default();
    let scene = build_scene(&cfg).unwrap();
    let err = script_timeline(&scene, &[], Color::GREEN, cfg.flash).unwrap_err();
    assert!(matches!(err, HexlogoError::Animation(_)));
}

#[test]
fn cues_deserialize_from_json() {
    let json = r#"[{ "target": { "edge": { "fan": "left" } }, "start": 0.5 },
                   { "target": { "node": { "ring": 2 } }, "start": 1.0 }]"#;
    let cues: Vec<Cue> = serde_json::from_str(json).unwrap();
    assert_eq!(cues[0], Cue::edge(EdgeKey::Fan(FanSide::Left), 0.5));
    assert_eq!(cues[1], Cue::node(NodeKey::Ring(2), 1.0));
}
