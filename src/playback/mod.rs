//! Demo playback coordination.
//!
//! The home page shows a fixed list of audio demos and at most one of them
//! may play at any moment. [`Coordinator`] owns that invariant along with the
//! per-demo [`PlaybackState`] the cards render from. It is deliberately free
//! of browser types: every effect on a real audio element goes through the
//! [`MediaDeck`] capability trait, and every browser notification comes back
//! in as a [`MediaEvent`]. The wasm implementation lives in [`web`].

mod web;

pub use web::{attach_media_listeners, demo_audio_id, WebDeck};

/// One named demo clip. `audio_source` is `None` while a clip has not been
/// uploaded yet; such entries render a placeholder and never play.
#[derive(Clone, Debug, PartialEq)]
pub struct DemoEntry {
    pub title: String,
    pub description: String,
    pub audio_source: Option<String>,
}

impl DemoEntry {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        audio_source: Option<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            audio_source,
        }
    }

    pub fn has_source(&self) -> bool {
        self.audio_source
            .as_deref()
            .map(|src| !src.trim().is_empty())
            .unwrap_or(false)
    }
}

/// Render state for a single demo, updated from [`MediaEvent`]s.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlaybackState {
    /// Metadata has loaded far enough to know duration/seekability.
    pub ready: bool,
    pub playing: bool,
    /// Playback was requested (or stalled) and data is not available yet.
    pub buffering: bool,
    /// Seconds; 0 until known.
    pub duration: f64,
    /// Seconds, within `[0, duration]` once duration is known.
    pub position: f64,
}

/// Notifications from the underlying media resource, one per demo entry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MediaEvent {
    MetadataLoaded { duration: f64 },
    DurationChanged { duration: f64 },
    CanPlay,
    Waiting,
    TimeUpdate { position: f64 },
    /// The resource started producing audio (`play`), regardless of whether
    /// the coordinator asked it to.
    Started,
    Paused,
    Ended,
    /// Play request rejected or the resource errored. Absorbed silently; the
    /// card just falls back to its idle play button.
    Failed,
}

/// Capability interface over the arena of audio resources, indexed the same
/// way as the demo list. Any media API that can satisfy these operations is
/// substitutable, which is what the unit tests rely on.
pub trait MediaDeck {
    /// Asynchronous and fallible: success shows up later as
    /// [`MediaEvent::Started`], failure as [`MediaEvent::Failed`].
    fn request_play(&mut self, index: usize);
    fn pause(&mut self, index: usize);
    fn set_position(&mut self, index: usize, seconds: f64);
    /// Reported duration; NaN or non-positive when unknown.
    fn duration(&self, index: usize) -> f64;
    /// End of the last contiguous seekable range, if any.
    fn seekable_end(&self, index: usize) -> Option<f64>;
}

/// Single-active-playback coordinator for the demo list. Lives in a signal
/// owned by the home view and is dropped with it.
pub struct Coordinator {
    entries: Vec<DemoEntry>,
    states: Vec<PlaybackState>,
    active: Option<usize>,
}

impl Coordinator {
    pub fn new(entries: Vec<DemoEntry>) -> Self {
        let states = vec![PlaybackState::default(); entries.len()];
        Self {
            entries,
            states,
            active: None,
        }
    }

    pub fn entries(&self) -> &[DemoEntry] {
        &self.entries
    }

    /// Copied render state; out-of-range indices read as the default.
    pub fn state(&self, index: usize) -> PlaybackState {
        self.states.get(index).copied().unwrap_or_default()
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Play if paused, pause if playing. No-op for placeholder entries.
    pub fn toggle(&mut self, index: usize, deck: &mut dyn MediaDeck) {
        if !self.playable(index) {
            return;
        }
        if self.states[index].playing {
            self.pause(index, deck);
        } else {
            self.play(index, deck);
        }
    }

    /// Request playback. `playing` flips only once the resource reports
    /// [`MediaEvent::Started`]; until then the card shows a spinner if the
    /// resource is not ready yet.
    pub fn play(&mut self, index: usize, deck: &mut dyn MediaDeck) {
        if !self.playable(index) {
            return;
        }
        if !self.states[index].ready {
            self.states[index].buffering = true;
        }
        deck.request_play(index);
    }

    /// Pause without resetting the position, so a later play resumes.
    pub fn pause(&mut self, index: usize, deck: &mut dyn MediaDeck) {
        let Some(state) = self.states.get_mut(index) else {
            return;
        };
        state.buffering = false;
        if state.playing {
            state.playing = false;
            deck.pause(index);
        }
    }

    /// Seek to a fraction of the effective duration. Inert until the
    /// duration is known; the fraction is clamped to `[0, 1]`.
    pub fn seek(&mut self, index: usize, fraction: f64, deck: &mut dyn MediaDeck) {
        if !self.playable(index) {
            return;
        }
        let duration = self.effective_duration(index, deck);
        if duration <= 0.0 {
            return;
        }
        let fraction = if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let position = fraction * duration;
        deck.set_position(index, position);
        let state = &mut self.states[index];
        state.duration = duration;
        state.position = position;
    }

    /// Best-available estimate of the resource's total length: the reported
    /// duration when finite and positive, else the end of the seekable
    /// range, else 0 (seeking stays disabled).
    pub fn effective_duration(&self, index: usize, deck: &dyn MediaDeck) -> f64 {
        let known = self.state(index).duration;
        if known.is_finite() && known > 0.0 {
            return known;
        }
        let reported = deck.duration(index);
        if reported.is_finite() && reported > 0.0 {
            return reported;
        }
        deck.seekable_end(index)
            .filter(|end| end.is_finite() && *end > 0.0)
            .unwrap_or(0.0)
    }

    /// Apply a resource notification. The single-playback invariant is
    /// enforced here, inside the `Started` arm, so playback initiated
    /// outside the coordinator's own call path still displaces the previous
    /// active entry within the same handling pass.
    pub fn handle_event(&mut self, index: usize, event: MediaEvent, deck: &mut dyn MediaDeck) {
        if index >= self.states.len() {
            return;
        }
        match event {
            MediaEvent::MetadataLoaded { duration } => {
                let resolved = if duration.is_finite() && duration > 0.0 {
                    duration
                } else {
                    deck.seekable_end(index)
                        .filter(|end| end.is_finite() && *end > 0.0)
                        .unwrap_or(0.0)
                };
                let state = &mut self.states[index];
                state.ready = true;
                state.duration = resolved;
            }
            MediaEvent::DurationChanged { duration } => {
                if duration.is_finite() && duration > 0.0 {
                    self.states[index].duration = duration;
                }
            }
            MediaEvent::CanPlay => {
                let state = &mut self.states[index];
                state.ready = true;
                state.buffering = false;
            }
            MediaEvent::Waiting => {
                self.states[index].buffering = true;
            }
            MediaEvent::TimeUpdate { position } => {
                let state = &mut self.states[index];
                let duration = state.duration;
                state.position = if duration > 0.0 {
                    position.clamp(0.0, duration)
                } else {
                    position.max(0.0)
                };
            }
            MediaEvent::Started => {
                if !self.playable(index) {
                    return;
                }
                self.states[index].playing = true;
                self.active = Some(index);
                self.halt_others(index, deck);
            }
            MediaEvent::Paused => {
                let state = &mut self.states[index];
                state.playing = false;
                state.buffering = false;
            }
            MediaEvent::Ended => {
                let state = &mut self.states[index];
                state.playing = false;
                state.buffering = false;
                state.position = 0.0;
                if self.active == Some(index) {
                    self.active = None;
                }
            }
            MediaEvent::Failed => {
                let state = &mut self.states[index];
                state.playing = false;
                state.buffering = false;
                if self.active == Some(index) {
                    self.active = None;
                }
            }
        }
    }

    /// Pause and rewind every entry except `keep`. Only deck commands and
    /// local state writes happen here, so a sibling's own `pause`
    /// notification arriving later is a no-op rather than a feedback loop.
    fn halt_others(&mut self, keep: usize, deck: &mut dyn MediaDeck) {
        for (i, state) in self.states.iter_mut().enumerate() {
            if i == keep {
                continue;
            }
            if state.playing || state.position > 0.0 || state.buffering {
                deck.pause(i);
                deck.set_position(i, 0.0);
                state.playing = false;
                state.buffering = false;
                state.position = 0.0;
            }
        }
    }

    fn playable(&self, index: usize) -> bool {
        self.entries
            .get(index)
            .map(DemoEntry::has_source)
            .unwrap_or(false)
    }
}

/// Format seconds as `m:ss` for the card's time readout. Unknown, non-finite
/// or negative values render as "0:00".
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }
    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    enum Command {
        Play(usize),
        Pause(usize),
        SetPosition(usize, f64),
    }

    /// Records deck commands instead of touching any real media API.
    struct RecordingDeck {
        commands: Vec<Command>,
        durations: Vec<f64>,
        seekable: Vec<Option<f64>>,
    }

    impl RecordingDeck {
        fn new(len: usize) -> Self {
            Self {
                commands: Vec::new(),
                durations: vec![f64::NAN; len],
                seekable: vec![None; len],
            }
        }
    }

    impl MediaDeck for RecordingDeck {
        fn request_play(&mut self, index: usize) {
            self.commands.push(Command::Play(index));
        }

        fn pause(&mut self, index: usize) {
            self.commands.push(Command::Pause(index));
        }

        fn set_position(&mut self, index: usize, seconds: f64) {
            self.commands.push(Command::SetPosition(index, seconds));
        }

        fn duration(&self, index: usize) -> f64 {
            self.durations.get(index).copied().unwrap_or(f64::NAN)
        }

        fn seekable_end(&self, index: usize) -> Option<f64> {
            self.seekable.get(index).copied().flatten()
        }
    }

    fn demo(title: &str, source: Option<&str>) -> DemoEntry {
        DemoEntry::new(title, "test demo", source.map(str::to_string))
    }

    fn three_sourced() -> Coordinator {
        Coordinator::new(vec![
            demo("A", Some("https://cdn.example/a.mp3")),
            demo("B", Some("https://cdn.example/b.mp3")),
            demo("C", Some("https://cdn.example/c.mp3")),
        ])
    }

    fn start(coordinator: &mut Coordinator, index: usize, deck: &mut RecordingDeck) {
        coordinator.play(index, deck);
        coordinator.handle_event(index, MediaEvent::Started, deck);
    }

    #[test]
    fn at_most_one_entry_plays() {
        let mut coordinator = three_sourced();
        let mut deck = RecordingDeck::new(3);

        start(&mut coordinator, 0, &mut deck);
        assert!(coordinator.state(0).playing);
        assert_eq!(coordinator.active(), Some(0));

        coordinator.handle_event(0, MediaEvent::TimeUpdate { position: 4.2 }, &mut deck);
        start(&mut coordinator, 1, &mut deck);

        let playing: Vec<usize> = (0..3)
            .filter(|i| coordinator.state(*i).playing)
            .collect();
        assert_eq!(playing, vec![1]);
        assert_eq!(coordinator.active(), Some(1));
        assert!(!coordinator.state(0).playing);
        assert_eq!(coordinator.state(0).position, 0.0);
        assert!(deck.commands.contains(&Command::Pause(0)));
        assert!(deck.commands.contains(&Command::SetPosition(0, 0.0)));
    }

    #[test]
    fn externally_started_entry_displaces_the_active_one() {
        let mut coordinator = three_sourced();
        let mut deck = RecordingDeck::new(3);

        start(&mut coordinator, 0, &mut deck);
        coordinator.handle_event(0, MediaEvent::TimeUpdate { position: 7.0 }, &mut deck);

        // Entry 1 starts without any coordinator call path, e.g. browser
        // media controls acting on the element directly.
        coordinator.handle_event(1, MediaEvent::Started, &mut deck);

        assert!(!coordinator.state(0).playing);
        assert_eq!(coordinator.state(0).position, 0.0);
        assert!(coordinator.state(1).playing);
        assert_eq!(coordinator.active(), Some(1));
    }

    #[test]
    fn pause_is_idempotent_and_keeps_position() {
        let mut coordinator = three_sourced();
        let mut deck = RecordingDeck::new(3);

        start(&mut coordinator, 0, &mut deck);
        coordinator.handle_event(0, MediaEvent::TimeUpdate { position: 12.5 }, &mut deck);

        coordinator.pause(0, &mut deck);
        coordinator.handle_event(0, MediaEvent::Paused, &mut deck);
        assert!(!coordinator.state(0).playing);
        assert_eq!(coordinator.state(0).position, 12.5);

        coordinator.pause(0, &mut deck);
        assert_eq!(coordinator.state(0).position, 12.5);
        assert_eq!(
            deck.commands
                .iter()
                .filter(|c| **c == Command::Pause(0))
                .count(),
            1
        );
    }

    #[test]
    fn toggle_on_playing_entry_pauses_it() {
        let mut coordinator = three_sourced();
        let mut deck = RecordingDeck::new(3);

        start(&mut coordinator, 2, &mut deck);
        coordinator.toggle(2, &mut deck);
        assert!(!coordinator.state(2).playing);
        assert!(deck.commands.contains(&Command::Pause(2)));
    }

    #[test]
    fn end_to_end_toggle_sequence() {
        let mut coordinator = three_sourced();
        let mut deck = RecordingDeck::new(3);

        coordinator.toggle(0, &mut deck);
        coordinator.handle_event(0, MediaEvent::Started, &mut deck);
        assert!(coordinator.state(0).playing);
        assert_eq!(coordinator.active(), Some(0));

        coordinator.toggle(1, &mut deck);
        coordinator.handle_event(1, MediaEvent::Started, &mut deck);
        assert!(!coordinator.state(0).playing);
        assert_eq!(coordinator.state(0).position, 0.0);
        assert!(coordinator.state(1).playing);
        assert_eq!(coordinator.active(), Some(1));

        coordinator.handle_event(1, MediaEvent::Ended, &mut deck);
        assert!(!coordinator.state(1).playing);
        assert_eq!(coordinator.state(1).position, 0.0);
        assert_eq!(coordinator.active(), None);
    }

    #[test]
    fn placeholder_entry_never_plays() {
        let mut coordinator = Coordinator::new(vec![
            demo("A", Some("https://cdn.example/a.mp3")),
            demo("B", None),
            demo("C", Some("   ")),
        ]);
        let mut deck = RecordingDeck::new(3);

        coordinator.toggle(1, &mut deck);
        coordinator.toggle(2, &mut deck);
        assert!(deck.commands.is_empty());

        // Even a stray notification must not mark a placeholder as playing.
        coordinator.handle_event(1, MediaEvent::Started, &mut deck);
        assert!(!coordinator.state(1).playing);
        assert_eq!(coordinator.active(), None);
    }

    #[test]
    fn buffering_tracks_play_request_and_readiness() {
        let mut coordinator = three_sourced();
        let mut deck = RecordingDeck::new(3);

        coordinator.play(0, &mut deck);
        assert!(coordinator.state(0).buffering);

        coordinator.handle_event(
            0,
            MediaEvent::MetadataLoaded { duration: 90.0 },
            &mut deck,
        );
        coordinator.handle_event(0, MediaEvent::CanPlay, &mut deck);
        let state = coordinator.state(0);
        assert!(state.ready);
        assert!(!state.buffering);
        assert_eq!(state.duration, 90.0);

        // A ready entry does not flash the spinner on replay.
        coordinator.play(0, &mut deck);
        assert!(!coordinator.state(0).buffering);
    }

    #[test]
    fn failed_play_reverts_to_idle() {
        let mut coordinator = three_sourced();
        let mut deck = RecordingDeck::new(3);

        coordinator.play(0, &mut deck);
        assert!(coordinator.state(0).buffering);

        coordinator.handle_event(0, MediaEvent::Failed, &mut deck);
        let state = coordinator.state(0);
        assert!(!state.buffering);
        assert!(!state.playing);
        assert_eq!(coordinator.active(), None);
    }

    #[test]
    fn failure_while_playing_clears_the_active_slot() {
        let mut coordinator = three_sourced();
        let mut deck = RecordingDeck::new(3);

        start(&mut coordinator, 0, &mut deck);
        assert_eq!(coordinator.active(), Some(0));

        // Mid-playback decode or network error.
        coordinator.handle_event(0, MediaEvent::Failed, &mut deck);
        assert!(!coordinator.state(0).playing);
        assert_eq!(coordinator.active(), None);
    }

    #[test]
    fn seek_clamps_fraction_to_duration() {
        let mut coordinator = three_sourced();
        let mut deck = RecordingDeck::new(3);
        coordinator.handle_event(
            0,
            MediaEvent::MetadataLoaded { duration: 120.0 },
            &mut deck,
        );

        coordinator.seek(0, 1.5, &mut deck);
        assert_eq!(coordinator.state(0).position, 120.0);

        coordinator.seek(0, -0.5, &mut deck);
        assert_eq!(coordinator.state(0).position, 0.0);

        coordinator.seek(0, 0.25, &mut deck);
        assert_eq!(coordinator.state(0).position, 30.0);
        assert!(deck.commands.contains(&Command::SetPosition(0, 30.0)));
    }

    #[test]
    fn seek_is_inert_until_duration_is_known() {
        let mut coordinator = three_sourced();
        let mut deck = RecordingDeck::new(3);

        coordinator.seek(0, 0.5, &mut deck);
        assert!(deck.commands.is_empty());
        assert_eq!(coordinator.state(0).position, 0.0);
    }

    #[test]
    fn seekable_range_backs_up_a_missing_duration() {
        let mut coordinator = three_sourced();
        let mut deck = RecordingDeck::new(3);
        deck.seekable[0] = Some(44.0);

        coordinator.handle_event(
            0,
            MediaEvent::MetadataLoaded { duration: f64::NAN },
            &mut deck,
        );
        assert_eq!(coordinator.state(0).duration, 44.0);
        assert_eq!(coordinator.effective_duration(0, &deck), 44.0);

        coordinator.seek(0, 0.5, &mut deck);
        assert_eq!(coordinator.state(0).position, 22.0);
    }

    #[test]
    fn unknown_duration_without_seekable_range_stays_unseekable() {
        let mut coordinator = three_sourced();
        let mut deck = RecordingDeck::new(3);

        coordinator.handle_event(
            0,
            MediaEvent::MetadataLoaded { duration: f64::INFINITY },
            &mut deck,
        );
        assert_eq!(coordinator.state(0).duration, 0.0);
        assert_eq!(coordinator.effective_duration(0, &deck), 0.0);

        coordinator.seek(0, 0.8, &mut deck);
        assert!(!deck
            .commands
            .iter()
            .any(|c| matches!(c, Command::SetPosition(..))));
    }

    #[test]
    fn time_updates_clamp_to_known_duration() {
        let mut coordinator = three_sourced();
        let mut deck = RecordingDeck::new(3);
        coordinator.handle_event(
            0,
            MediaEvent::MetadataLoaded { duration: 60.0 },
            &mut deck,
        );

        coordinator.handle_event(0, MediaEvent::TimeUpdate { position: 75.0 }, &mut deck);
        assert_eq!(coordinator.state(0).position, 60.0);

        coordinator.handle_event(0, MediaEvent::TimeUpdate { position: -3.0 }, &mut deck);
        assert_eq!(coordinator.state(0).position, 0.0);
    }

    #[test]
    fn waiting_shows_the_spinner_until_canplay() {
        let mut coordinator = three_sourced();
        let mut deck = RecordingDeck::new(3);

        start(&mut coordinator, 0, &mut deck);
        coordinator.handle_event(0, MediaEvent::Waiting, &mut deck);
        assert!(coordinator.state(0).buffering);

        coordinator.handle_event(0, MediaEvent::CanPlay, &mut deck);
        assert!(!coordinator.state(0).buffering);
        assert!(coordinator.state(0).playing);
    }

    #[test]
    fn format_time_renders_minutes_and_padded_seconds() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(65.0), "1:05");
        assert_eq!(format_time(3605.0), "60:05");
        assert_eq!(format_time(-1.0), "0:00");
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
        assert_eq!(format_time(59.9), "0:59");
    }
}
