//! Prediction history and the negativity trend gate
//!
//! A fixed-capacity sliding window of recent predictions, process-lifetime
//! only: created empty at startup, reset on restart. The gate recomputes
//! its ratio over whatever the window currently holds, so sensitivity
//! shifts as the buffer fills after startup; that's intended.

use moodlens_core::{EmotionLabel, HistoryParams, Prediction};
use parking_lot::RwLock;
use std::collections::VecDeque;

/// Bounded ring of recent predictions. Append-and-evict happens under one
/// write lock, so concurrent inference calls never observe a torn window.
pub struct PredictionHistory {
    window: usize,
    entries: RwLock<VecDeque<Prediction>>,
}

impl PredictionHistory {
    pub fn new(params: HistoryParams) -> Self {
        Self {
            window: params.window,
            entries: RwLock::new(VecDeque::with_capacity(params.window)),
        }
    }

    /// Append a prediction, evicting the oldest entry on overflow.
    pub fn record(&self, prediction: Prediction) {
        let mut entries = self.entries.write();
        entries.push_back(prediction);
        while entries.len() > self.window {
            entries.pop_front();
        }
    }

    /// Current window contents, oldest first.
    pub fn snapshot(&self) -> Vec<Prediction> {
        self.entries.read().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.window
    }
}

impl Default for PredictionHistory {
    fn default() -> Self {
        Self::new(HistoryParams::default())
    }
}

/// Whether a label set counts as negative: any intersection with the fixed
/// 10-label negative subset.
pub fn is_negative_emotion(labels: &[EmotionLabel]) -> bool {
    labels.iter().any(|l| l.is_negative())
}

/// Whether the rolling history crosses the negativity ratio threshold.
/// Empty history never triggers; otherwise the ratio of negative entries
/// to window length is compared against the threshold.
pub fn should_trigger_assistant(history: &[Prediction], ratio_threshold: f64) -> bool {
    if history.is_empty() {
        return false;
    }
    let negative = history.iter().filter(|p| p.is_negative()).count();
    negative as f64 / history.len() as f64 >= ratio_threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pred(labels: &[EmotionLabel]) -> Prediction {
        Prediction::new(labels.to_vec())
    }

    #[test]
    fn window_evicts_oldest() {
        let history = PredictionHistory::new(HistoryParams { window: 3 });
        for label in [
            EmotionLabel::Sad,
            EmotionLabel::Angry,
            EmotionLabel::Happy,
            EmotionLabel::Calm,
        ] {
            history.record(pred(&[label]));
        }

        let snapshot = history.snapshot();
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot[0].labels, vec![EmotionLabel::Angry]);
        assert_eq!(snapshot[2].labels, vec![EmotionLabel::Calm]);
    }

    #[test]
    fn negativity_follows_fixed_subset() {
        assert!(is_negative_emotion(&[EmotionLabel::Sad]));
        assert!(is_negative_emotion(&[EmotionLabel::Happy, EmotionLabel::Afraid]));
        assert!(!is_negative_emotion(&[EmotionLabel::Happy, EmotionLabel::Calm]));
        assert!(!is_negative_emotion(&[]));
    }

    #[test]
    fn empty_history_never_triggers() {
        assert!(!should_trigger_assistant(&[], 0.0));
        assert!(!should_trigger_assistant(&[], 0.9));
    }

    #[test]
    fn zero_threshold_triggers_on_any_nonempty_history() {
        let history = vec![pred(&[EmotionLabel::Happy])];
        assert!(should_trigger_assistant(&history, 0.0));
    }

    #[test]
    fn four_of_five_negative_crosses_half_but_not_ninety_percent() {
        let history = vec![
            pred(&[EmotionLabel::Sad]),
            pred(&[EmotionLabel::Anxious]),
            pred(&[EmotionLabel::Happy]),
            pred(&[EmotionLabel::Frustrated]),
            pred(&[EmotionLabel::Afraid, EmotionLabel::Sad]),
        ];
        assert!(should_trigger_assistant(&history, 0.5));
        assert!(!should_trigger_assistant(&history, 0.9));
    }

    #[test]
    fn ratio_uses_current_window_length_not_capacity() {
        // One negative entry in a window that holds one entry: 1/1.
        let history = vec![pred(&[EmotionLabel::Bored])];
        assert!(should_trigger_assistant(&history, 1.0));
    }

    #[test]
    fn concurrent_recording_loses_no_updates() {
        use std::sync::Arc;

        let history = Arc::new(PredictionHistory::new(HistoryParams { window: 1000 }));
        let mut handles = Vec::new();
        for _ in 0..8 {
            let history = Arc::clone(&history);
            handles.push(std::thread::spawn(move || {
                for _ in 0..100 {
                    history.record(Prediction::new(vec![EmotionLabel::Sad]));
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(history.len(), 800);
    }
}
