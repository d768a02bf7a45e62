//! Splash loading schedule for cold loads.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplashStage {
    /// Body carries `loading`; splash covers the page.
    Showing,
    /// Content revealed underneath the splash.
    Revealed,
    /// Splash faded away.
    Dismissed,
    /// Chrome handlers (logo link) bound.
    Interactive,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplashCue {
    pub at_ms: u32,
    pub stage: SplashStage,
}

pub const SCHEDULE: [SplashCue; 4] = [
    SplashCue {
        at_ms: 0,
        stage: SplashStage::Showing,
    },
    SplashCue {
        at_ms: 500,
        stage: SplashStage::Revealed,
    },
    SplashCue {
        at_ms: 2_000,
        stage: SplashStage::Dismissed,
    },
    SplashCue {
        at_ms: 2_500,
        stage: SplashStage::Interactive,
    },
];

/// Delay from the previous cue, paired with the stage to enter.
pub fn delays() -> impl Iterator<Item = (u32, SplashStage)> {
    SCHEDULE.iter().scan(0u32, |prev, cue| {
        let wait = cue.at_ms - *prev;
        *prev = cue.at_ms;
        Some((wait, cue.stage))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_are_relative() {
        let got: Vec<_> = delays().collect();
        assert_eq!(
            got,
            [
                (0, SplashStage::Showing),
                (500, SplashStage::Revealed),
                (1_500, SplashStage::Dismissed),
                (500, SplashStage::Interactive),
            ]
        );
    }
}
