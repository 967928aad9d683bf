//! Best-effort desktop notifications and the synthesized alarm chime.
//!
//! Nothing in here may stall or fail the timer: every error is logged at the
//! call site and swallowed. Worst case is silent operation with no alert.

use crate::constants::APP_NAME;
use notify_rust::Notification;
use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, Sink};
use tracing::{debug, warn};

const SAMPLE_RATE: u32 = 44_100;

pub struct Notifier {
    // Keeps the audio device open for the app lifetime. None when no device
    // was available at startup; the alarm is simply disabled then.
    _stream: Option<OutputStream>,
    sink: Option<Sink>,
}

impl Notifier {
    pub fn new() -> Self {
        match OutputStream::try_default() {
            Ok((stream, handle)) => match Sink::try_new(&handle) {
                Ok(sink) => Self {
                    _stream: Some(stream),
                    sink: Some(sink),
                },
                Err(e) => {
                    warn!(error = %e, "audio sink unavailable, alarm disabled");
                    Self {
                        _stream: None,
                        sink: None,
                    }
                }
            },
            Err(e) => {
                warn!(error = %e, "no audio output device, alarm disabled");
                Self {
                    _stream: None,
                    sink: None,
                }
            }
        }
    }

    /// Raises a desktop notification and, when asked, replays the alarm from
    /// the start. Fire-and-forget: failures never reach the caller.
    pub fn notify(&self, title: &str, body: &str, play_sound: bool) {
        if let Err(e) = Notification::new()
            .summary(title)
            .body(body)
            .appname(APP_NAME)
            .icon("alarm-clock")
            .show()
        {
            debug!(error = %e, "desktop notification unavailable");
        }
        if play_sound {
            self.play_alarm();
        }
    }

    fn play_alarm(&self) {
        let Some(sink) = &self.sink else {
            return;
        };
        // clear() drops any still-playing chime so playback restarts from
        // the beginning, then play() unpauses the sink.
        sink.clear();
        sink.append(SamplesBuffer::new(1, SAMPLE_RATE, alarm_samples()));
        sink.play();
    }
}

/// Two-note chime (~0.9 s), each note a sine with an exponential decay.
fn alarm_samples() -> Vec<f32> {
    let notes: [(f32, f32); 2] = [(880.0, 0.45), (1174.66, 0.45)];
    let mut samples = Vec::new();
    for (freq, secs) in notes {
        let len = (secs * SAMPLE_RATE as f32) as usize;
        for i in 0..len {
            let t = i as f32 / SAMPLE_RATE as f32;
            let envelope = (-6.0 * t / secs).exp();
            samples.push((t * freq * std::f32::consts::TAU).sin() * envelope * 0.4);
        }
    }
    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alarm_is_nonempty_and_in_range() {
        let samples = alarm_samples();
        assert_eq!(samples.len(), (0.9 * SAMPLE_RATE as f32) as usize);
        assert!(samples.iter().all(|s| s.abs() <= 1.0));
    }

    #[test]
    fn alarm_decays_within_each_note() {
        let samples = alarm_samples();
        let note_len = samples.len() / 2;
        let peak_early: f32 = samples[..1000].iter().fold(0.0, |m, s| m.max(s.abs()));
        let peak_late: f32 = samples[note_len - 1000..note_len]
            .iter()
            .fold(0.0, |m, s| m.max(s.abs()));
        assert!(peak_late < peak_early / 10.0);
    }
}
