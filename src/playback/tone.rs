//! Pitch name to frequency conversion for the tone preview

const A4_FREQUENCY: f64 = 440.0;
const A4_MIDI: i32 = 69;

/// Convert a pitch name like `C4`, `F#3` or `Bb-1` into a MIDI note number.
///
/// Accidentals may repeat (`C##4`). Returns `None` for sentinels and any
/// name that is not a note letter followed by accidentals and an octave.
///
/// # Examples
/// ```
/// use beatcards::playback::pitch_to_midi;
///
/// assert_eq!(pitch_to_midi("C4"), Some(60));
/// assert_eq!(pitch_to_midi("A4"), Some(69));
/// assert_eq!(pitch_to_midi("Bb3"), Some(58));
/// assert_eq!(pitch_to_midi("pause"), None);
/// ```
pub fn pitch_to_midi(pitch: &str) -> Option<i32> {
    let mut chars = pitch.chars().peekable();

    let base = match chars.next()?.to_ascii_uppercase() {
        'C' => 0,
        'D' => 2,
        'E' => 4,
        'F' => 5,
        'G' => 7,
        'A' => 9,
        'B' => 11,
        _ => return None,
    };

    let mut accidental: i32 = 0;
    while let Some(&c) = chars.peek() {
        accidental = match c {
            '#' => accidental.checked_add(1)?,
            'b' => accidental.checked_sub(1)?,
            _ => break,
        };
        chars.next();
    }

    // octaves come straight from notation; out-of-range ones are not pitches
    let octave: i32 = chars.collect::<String>().parse().ok()?;
    octave
        .checked_add(1)?
        .checked_mul(12)?
        .checked_add(base)?
        .checked_add(accidental)
}

/// Equal-tempered frequency of a pitch name, A4 = 440 Hz.
///
/// `None` when the pitch is not a note or lies too far out to be
/// represented as a finite, positive frequency.
pub fn pitch_frequency(pitch: &str) -> Option<f64> {
    let midi = pitch_to_midi(pitch)?;
    let semitones = f64::from(midi) - f64::from(A4_MIDI);
    let frequency = A4_FREQUENCY * 2f64.powf(semitones / 12.0);
    (frequency.is_finite() && frequency > 0.0).then_some(frequency)
}
