//! Page transition sequencer.
//!
//! States: `Idle` → `BlackoutIn` → `GlassIn` → `Hold` → `GlassOut` → `Done`.
//! A [`Timeline`] lists the phases a particular transition visits, the DOM
//! effects entering each phase and how long to stay there. [`Sequencer`]
//! walks the list; the caller applies effects and sleeps, so phases can be
//! stepped in tests without a clock.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    BlackoutIn,
    GlassIn,
    Hold,
    GlassOut,
    Done,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlassStyle {
    /// Starts transparent and hidden; fades in through CSS.
    Hidden,
    /// Dark tinted blur, visible immediately.
    Dark,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    MountBlackout,
    MountGlass(GlassStyle),
    FadeOutBlackout,
    FadeInGlass,
    FadeOutGlass,
    RemoveOverlays,
    MarkPageTransitioning,
    Navigate(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cue {
    pub phase: Phase,
    pub effects: Vec<Effect>,
    pub hold_ms: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Timeline {
    cues: Vec<Cue>,
}

impl Timeline {
    pub fn new(cues: Vec<Cue>) -> Self {
        Self { cues }
    }

    /// Warm return to the homepage: black, then glass blur, then content.
    pub fn return_crossfade() -> Self {
        Self::new(vec![
            Cue {
                phase: Phase::BlackoutIn,
                effects: vec![Effect::MountBlackout, Effect::MountGlass(GlassStyle::Hidden)],
                hold_ms: 200,
            },
            Cue {
                phase: Phase::GlassIn,
                effects: vec![Effect::FadeOutBlackout, Effect::FadeInGlass],
                hold_ms: 300,
            },
            Cue {
                phase: Phase::Hold,
                effects: Vec::new(),
                hold_ms: 200,
            },
            Cue {
                phase: Phase::GlassOut,
                effects: vec![Effect::FadeOutGlass],
                hold_ms: 300,
            },
            Cue {
                phase: Phase::Done,
                effects: vec![Effect::RemoveOverlays],
                hold_ms: 0,
            },
        ])
    }

    /// Leaving the homepage for a film page.
    pub fn leave_to_film(url: impl Into<String>) -> Self {
        Self::new(vec![
            Cue {
                phase: Phase::BlackoutIn,
                effects: vec![
                    Effect::MarkPageTransitioning,
                    Effect::MountGlass(GlassStyle::Hidden),
                ],
                hold_ms: 200,
            },
            Cue {
                phase: Phase::GlassIn,
                effects: vec![Effect::FadeInGlass],
                hold_ms: 600,
            },
            Cue {
                phase: Phase::Done,
                effects: vec![Effect::Navigate(url.into())],
                hold_ms: 0,
            },
        ])
    }

    /// Leaving a film page through the logo.
    pub fn leave_to_home(url: impl Into<String>) -> Self {
        Self::new(vec![
            Cue {
                phase: Phase::GlassIn,
                effects: vec![
                    Effect::MarkPageTransitioning,
                    Effect::MountGlass(GlassStyle::Dark),
                    Effect::FadeInGlass,
                ],
                hold_ms: 400,
            },
            Cue {
                phase: Phase::Done,
                effects: vec![Effect::Navigate(url.into())],
                hold_ms: 0,
            },
        ])
    }

    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    pub fn total_ms(&self) -> u32 {
        self.cues.iter().map(|c| c.hold_ms).sum()
    }
}

#[derive(Clone, Debug)]
pub struct Sequencer {
    timeline: Timeline,
    next: usize,
    phase: Phase,
}

impl Sequencer {
    pub fn new(timeline: Timeline) -> Self {
        Self {
            timeline,
            next: 0,
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Enter the next phase. Returns its cue, or `None` once finished.
    pub fn step(&mut self) -> Option<&Cue> {
        let cue = self.timeline.cues.get(self.next)?;
        self.next += 1;
        self.phase = cue.phase;
        Some(cue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phases(timeline: Timeline) -> Vec<Phase> {
        let mut seq = Sequencer::new(timeline);
        let mut out = Vec::new();
        while let Some(cue) = seq.step() {
            out.push(cue.phase);
        }
        out
    }

    #[test]
    fn crossfade_visits_every_phase_in_order() {
        assert_eq!(
            phases(Timeline::return_crossfade()),
            [
                Phase::BlackoutIn,
                Phase::GlassIn,
                Phase::Hold,
                Phase::GlassOut,
                Phase::Done
            ]
        );
        assert_eq!(Timeline::return_crossfade().total_ms(), 1000);
    }

    #[test]
    fn sequencer_starts_idle_and_ends_done() {
        let mut seq = Sequencer::new(Timeline::return_crossfade());
        assert_eq!(seq.phase(), Phase::Idle);
        while seq.step().is_some() {}
        assert!(seq.is_done());
        assert!(seq.step().is_none());
    }

    #[test]
    fn crossfade_cleans_up_last() {
        let timeline = Timeline::return_crossfade();
        let last = timeline.cues().last().unwrap();
        assert_eq!(last.effects, [Effect::RemoveOverlays]);
    }

    #[test]
    fn leave_to_film_navigates_after_glass() {
        let timeline = Timeline::leave_to_film("film.html?film=zand&from=internal");
        assert_eq!(timeline.total_ms(), 800);
        let mut seq = Sequencer::new(timeline);
        let first = seq.step().unwrap().clone();
        assert!(first.effects.contains(&Effect::MarkPageTransitioning));
        seq.step();
        let done = seq.step().unwrap();
        assert_eq!(
            done.effects,
            [Effect::Navigate("film.html?film=zand&from=internal".into())]
        );
    }

    #[test]
    fn leave_to_home_is_short() {
        assert_eq!(Timeline::leave_to_home("index.html").total_ms(), 400);
    }

    #[test]
    fn every_exit_marks_the_page_before_mounting_glass() {
        for timeline in [
            Timeline::leave_to_film("film.html?film=zand&from=internal"),
            Timeline::leave_to_home("index.html?from=internal"),
        ] {
            let first = &timeline.cues()[0];
            assert_eq!(first.effects[0], Effect::MarkPageTransitioning);
        }
    }
}
