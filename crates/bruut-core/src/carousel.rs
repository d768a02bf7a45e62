//! Homepage carousel engine.
//!
//! The image track holds `n + 3` slides: a clone of the last film in front,
//! the real films, then clones of the first two. Advancing past the last real
//! slide lands on a clone, and [`Carousel::settle`] snaps back to the matching
//! real slide without animation once the slide transition has finished.
//!
//! The title track is `copies` repetitions of the title list laid out in a row
//! and scrolled by pixel offset. The offset is derived from how many titles
//! have been passed in the current cycle, so a resize only needs new widths.

use tracing::debug;

pub const TITLE_COPIES: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slide {
    pub film: usize,
    pub clone: bool,
}

/// `[clone(last), 0, 1, .., n-1, clone(0), clone(1)]`. Empty for `n == 0`.
pub fn build_slides(count: usize) -> Vec<Slide> {
    if count == 0 {
        return Vec::new();
    }
    let mut slides = Vec::with_capacity(count + 3);
    slides.push(Slide {
        film: count - 1,
        clone: true,
    });
    slides.extend((0..count).map(|film| Slide { film, clone: false }));
    // a single film has no second entry; the trailing clone repeats it
    for film in [0, 1 % count] {
        slides.push(Slide { film, clone: true });
    }
    slides
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TitleSlot {
    pub film: usize,
    pub copy: usize,
}

pub fn title_track(count: usize, copies: usize) -> Vec<TitleSlot> {
    (0..copies)
        .flat_map(|copy| (0..count).map(move |film| TitleSlot { film, copy }))
        .collect()
}

/// Horizontal gap between titles and edge padding, in px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spacing {
    pub gap: f64,
    pub padding: f64,
}

impl Spacing {
    pub fn for_viewport(width: f64) -> Self {
        let (gap, padding) = if width <= 576.0 {
            (30.0, 15.0)
        } else if width <= 768.0 {
            (40.0, 20.0)
        } else if width <= 992.0 {
            (60.0, 30.0)
        } else {
            (80.0, 50.0)
        };
        Self { gap, padding }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselPhase {
    Ready,
    Advancing,
}

/// Track positions to apply to the DOM.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub image_offset_percent: f64,
    pub title_offset_px: f64,
    pub animate: bool,
    pub active_film: usize,
}

impl Frame {
    pub fn image_transform(&self) -> String {
        format!("translateX({}%)", self.image_offset_percent)
    }

    pub fn title_transform(&self) -> String {
        format!("translateX(-{}px)", self.title_offset_px)
    }

    pub fn transition_css(&self, duration_ms: u32) -> String {
        if self.animate {
            format!("transform {}ms ease-in-out", duration_ms)
        } else {
            "none".to_owned()
        }
    }
}

/// Title track layout after a resize. The image track is left alone so an
/// in-flight slide animation is not cut short.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TitleLayout {
    pub offset_px: f64,
    pub padding_px: f64,
    pub active_film: usize,
}

impl TitleLayout {
    pub fn transform(&self) -> String {
        format!("translateX(-{}px)", self.offset_px)
    }

    pub fn padding_css(&self) -> String {
        format!("0 {}px", self.padding_px)
    }
}

#[derive(Clone, Debug)]
pub struct Carousel {
    count: usize,
    index: usize,
    title_step: usize,
    widths: Vec<f64>,
    spacing: Spacing,
    phase: CarouselPhase,
}

impl Carousel {
    /// `None` when there is nothing to show.
    pub fn new(count: usize, viewport_width: f64) -> Option<Self> {
        if count == 0 {
            return None;
        }
        Some(Self {
            count,
            index: 1,
            title_step: 0,
            widths: Vec::new(),
            spacing: Spacing::for_viewport(viewport_width),
            phase: CarouselPhase::Ready,
        })
    }

    pub fn slide_index(&self) -> usize {
        self.index
    }

    pub fn is_advancing(&self) -> bool {
        self.phase == CarouselPhase::Advancing
    }

    /// Film shown by the current slide, with clones mapped to their originals.
    pub fn active_film(&self) -> usize {
        if self.index == 0 {
            self.count - 1
        } else {
            (self.index - 1) % self.count
        }
    }

    /// Current title-track offset in px, never negative.
    pub fn title_offset(&self) -> f64 {
        let passed: f64 = (0..self.title_step).map(|i| self.width(i)).sum();
        (passed + self.title_step as f64 * self.spacing.gap).max(0.0)
    }

    /// Rewind to the first real slide.
    pub fn start(&mut self) -> Frame {
        self.index = 1;
        self.title_step = 0;
        self.phase = CarouselPhase::Ready;
        self.frame(false)
    }

    /// Store freshly measured title widths (first copy, in film order) and
    /// the spacing for the new viewport.
    pub fn relayout(&mut self, widths: Vec<f64>, viewport_width: f64) -> TitleLayout {
        self.widths = widths;
        self.spacing = Spacing::for_viewport(viewport_width);
        TitleLayout {
            offset_px: self.title_offset(),
            padding_px: self.spacing.padding,
            active_film: self.active_film(),
        }
    }

    /// One auto-advance tick. `None` while a previous advance is in flight.
    pub fn advance(&mut self) -> Option<Frame> {
        if self.is_advancing() {
            return None;
        }
        self.phase = CarouselPhase::Advancing;
        self.index += 1;
        self.title_step += 1;
        Some(self.frame(true))
    }

    /// Finish the in-flight advance. Returns a snap frame when the carousel
    /// sits on a clone slide or the title track has completed a full cycle.
    pub fn settle(&mut self) -> Option<Frame> {
        self.phase = CarouselPhase::Ready;
        let mut snapped = false;
        if self.index >= self.count + 1 {
            debug!(from = self.index, "carousel wrapped forward");
            self.index = 1;
            snapped = true;
        } else if self.index == 0 {
            self.index = self.count;
            snapped = true;
        }
        if self.title_step >= self.count {
            // every copy is identical, so one cycle back looks the same
            self.title_step %= self.count;
            snapped = true;
        }
        snapped.then(|| self.frame(false))
    }

    fn width(&self, step: usize) -> f64 {
        self.widths
            .get(step % self.count)
            .copied()
            .unwrap_or(0.0)
    }

    fn frame(&self, animate: bool) -> Frame {
        let total = (self.count + 3) as f64;
        Frame {
            image_offset_percent: -(self.index as f64 * (100.0 / total)),
            title_offset_px: self.title_offset(),
            animate,
            active_film: self.active_film(),
        }
    }
}
