use super::*;
use crate::ast::Note;
use crate::controls::Action;
use crate::parser::parse;

#[test]
fn test_schedule_basic_timing() {
    let notes = parse("C D E F");
    let tones = tone_schedule(&notes, 60.0);

    assert_eq!(tones.len(), 5);
    // start card is silent
    assert_eq!(tones[0].frequency, None);
    assert_eq!(tones[0].start_ms, 0.0);
    assert_eq!(tones[1].start_ms, 1000.0);
    assert_eq!(tones[4].start_ms, 4000.0);
    assert_eq!(tones[4].duration_ms, 1000.0);
}

#[test]
fn test_schedule_durations() {
    let notes = parse("C/2 D*3 E/4");
    let tones = tone_schedule(&notes, 120.0);

    assert_eq!(tones[1].duration_ms, 250.0);
    assert_eq!(tones[2].duration_ms, 1500.0);
    assert_eq!(tones[3].duration_ms, 125.0);
    assert_eq!(tones[3].start_ms, 500.0 + 250.0 + 1500.0);
}

#[test]
fn test_schedule_skips_barlines() {
    let notes = parse("C | D");
    let tones = tone_schedule(&notes, 60.0);

    let indices: Vec<usize> = tones.iter().map(|t| t.note_index).collect();
    assert_eq!(indices, vec![0, 1, 3]);
    assert_eq!(tones[2].start_ms, 2000.0);
}

#[test]
fn test_schedule_pause_is_silent() {
    let notes = parse("pause*2 A");
    let tones = tone_schedule(&notes, 60.0);

    assert_eq!(tones[1].frequency, None);
    assert_eq!(tones[1].duration_ms, 2000.0);
    assert_eq!(tones[2].frequency, Some(440.0));
    assert_eq!(tones[2].start_ms, 3000.0);
}

#[test]
fn test_schedule_bad_tempo_falls_back() {
    let notes = parse("C");
    assert_eq!(tone_schedule(&notes, 0.0)[1].duration_ms, 1000.0);
    assert_eq!(tone_schedule(&notes, -30.0)[1].duration_ms, 1000.0);
    assert_eq!(tone_schedule(&notes, f64::NAN)[1].duration_ms, 1000.0);
}

#[test]
fn test_schedule_degenerate_durations() {
    let notes = vec![
        Note::new("C4", f64::INFINITY),
        Note::new("D4", -1.0),
        Note::new("E4", 1.0),
    ];
    let tones = tone_schedule(&notes, 60.0);
    assert_eq!(tones[0].duration_ms, 0.0);
    assert_eq!(tones[1].duration_ms, 0.0);
    assert_eq!(tones[2].start_ms, 0.0);
}

#[test]
fn test_unknown_pitch_is_silent() {
    let notes = parse("H");
    assert_eq!(tone_schedule(&notes, 60.0)[1].frequency, None);
}

#[test]
fn test_out_of_range_octave_is_silent() {
    let notes = parse("C2147483647 C178956971 D");
    let tones = tone_schedule(&notes, 60.0);
    assert_eq!(tones.len(), 4);
    assert_eq!(tones[1].frequency, None);
    assert_eq!(tones[2].frequency, None);
    assert!(tones[3].frequency.is_some());
    assert_eq!(tones[3].start_ms, 3000.0);
}

#[test]
fn test_stepper_skips_barlines() {
    let notes = parse("C | | D");
    let mut stepper = Stepper::for_notes(&notes);

    assert_eq!(stepper.active(), 0);
    assert!(stepper.next());
    assert_eq!(stepper.active(), 1);
    assert!(stepper.next());
    assert_eq!(stepper.active(), 4);
    assert!(stepper.is_finished());
    assert!(stepper.prev());
    assert_eq!(stepper.active(), 1);
}

#[test]
fn test_stepper_jump_onto_barline() {
    let notes = parse("C | D |");
    let mut stepper = Stepper::for_notes(&notes);

    assert!(stepper.jump(2));
    assert_eq!(stepper.active(), 3);
    // trailing barline: nothing after it, so step back
    assert!(!stepper.jump(4));
    assert_eq!(stepper.active(), 3);
}

#[test]
fn test_stepper_actions() {
    let notes = parse("C D E");
    let mut stepper = Stepper::for_notes(&notes);

    assert!(stepper.apply(Action::Next));
    assert!(stepper.apply(Action::Next));
    assert!(stepper.apply(Action::Prev));
    assert_eq!(stepper.active(), 1);
    assert!(!stepper.apply(Action::ZoomIn));
    assert!(stepper.apply(Action::Reset));
    assert_eq!(stepper.active(), 0);
}

#[test]
fn test_stepper_window_follows_cursor() {
    let notes = parse("C D E F G A");
    let mut stepper = Stepper::for_notes(&notes);
    stepper.jump(4);

    assert_eq!(stepper.window(4), vec![4, 5, 6]);
    assert_eq!(stepper.window(1), vec![4, 5]);
}
