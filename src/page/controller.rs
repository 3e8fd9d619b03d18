use std::time::Duration;

use crate::animation::{ColorCycle, Easing, LoopingKeyframes, Tween};
use crate::config::TimelineConfig;
use crate::field::RandomSource;
use crate::math::Color;
use crate::timeline::{
    staggered, CodeRain, DecorativeTextStream, RevealOnce, StagedTimeline, TimelineStage,
};

use super::content::PortfolioContent;

/// Page regions with a scroll-triggered entrance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    ExperienceHeading,
    Experience(usize),
    PortfolioHeading,
    Project(usize),
    Contact,
}

const DOT_DELAY: f32 = 0.5;
const DOT_FADE: f32 = 0.3;
const UNDERLINE_DELAY: f32 = 0.8;
const UNDERLINE_SWEEP: f32 = 1.0;
const PROJECT_STAGGER: f32 = 0.1;
const EXIT_SCALE: f32 = 0.1;
const CONTENT_START_SCALE: f32 = 0.8;
const HERO_ENTRANCE: f32 = 0.75;
/// Distance each hero column travels while entering
pub const HERO_SLIDE: f32 = 50.0;
const CARD_BOB_HEIGHT: f32 = 15.0;
const CARD_BOB_PERIOD: f32 = 3.0;
const CONTACT_START: f32 = 120.0;
const CONTACT_REST: f32 = 10.0;

/// Drives every timed effect on the page from host frame deltas
///
/// Owns the preloader timeline. Everything else runs from the first frame
/// regardless of stage, including the hero entrance, which usually finishes
/// behind the preloader.
pub struct PageController {
    timeline: StagedTimeline,
    exit: Duration,
    skipped: bool,
    preloader_text: DecorativeTextStream,
    preloader_dot: Tween,
    underline: Tween,
    content_opacity: Tween,
    content_scale: Tween,
    content_started: bool,
    hero_title: DecorativeTextStream,
    hero_opacity: Tween,
    hero_slide: Tween,
    card_bob: LoopingKeyframes,
    name_color: ColorCycle,
    code_rain: CodeRain,
    headings: [RevealOnce; 2],
    experiences: Vec<RevealOnce>,
    projects: Vec<RevealOnce>,
    contact: RevealOnce,
}

impl PageController {
    pub fn new(config: &TimelineConfig, content: &PortfolioContent, rng: &mut dyn RandomSource) -> Self {
        let reveal = config.reveal_ms as f32 / 1000.0;

        let mut timeline = StagedTimeline::new(config.preloader(), config.preloader_exit());
        timeline.start();

        Self {
            timeline,
            exit: config.preloader_exit(),
            skipped: false,
            preloader_text: DecorativeTextStream::new(
                config.preloader_text.as_slice(),
                Duration::from_millis(config.preloader_char_delay_ms),
            ),
            preloader_dot: Tween::new(0.0, 1.0, DOT_FADE, Easing::EaseOut).with_delay(DOT_DELAY),
            underline: Tween::new(0.0, 1.0, UNDERLINE_SWEEP, Easing::EaseInOut)
                .with_delay(UNDERLINE_DELAY),
            content_opacity: Tween::new(0.0, 1.0, reveal, Easing::EaseOut),
            content_scale: Tween::new(CONTENT_START_SCALE, 1.0, reveal, Easing::EaseOut),
            content_started: false,
            hero_title: DecorativeTextStream::new(
                config.hero_titles.as_slice(),
                Duration::from_millis(config.hero_char_delay_ms),
            )
            .looping(Duration::from_millis(config.hero_pause_ms)),
            hero_opacity: Tween::new(0.0, 1.0, HERO_ENTRANCE, Easing::EaseOut),
            hero_slide: Tween::new(HERO_SLIDE, 0.0, HERO_ENTRANCE, Easing::EaseOut),
            card_bob: LoopingKeyframes::new(
                vec![0.0, -CARD_BOB_HEIGHT, 0.0],
                CARD_BOB_PERIOD,
                Easing::EaseInOut,
            ),
            name_color: ColorCycle::new(config.name_colors.clone(), config.name_cycle_secs),
            code_rain: CodeRain::new(content.code_snippets.clone(), config.code_rain_drops, rng),
            headings: [RevealOnce::new(20.0, 0.0), RevealOnce::new(20.0, 0.0)],
            experiences: (0..content.experiences.len())
                .map(|_| RevealOnce::new(50.0, 0.0))
                .collect(),
            projects: staggered(content.projects.len(), PROJECT_STAGGER, 30.0),
            contact: RevealOnce::slide(CONTACT_START, CONTACT_REST, 0.0),
        }
    }

    /// Show the page immediately, without the preloader
    pub fn skip_preloader(&mut self) {
        self.timeline.dispose();
        self.skipped = true;
        self.content_started = true;
        self.content_opacity.finish();
        self.content_scale.finish();
        log::debug!("preloader skipped");
    }

    pub fn update(&mut self, delta: Duration) {
        let dt = delta.as_secs_f32();
        let mut content_dt = dt;

        if self.timeline.advance(delta).contains(&TimelineStage::Revealing) {
            // Only the part of this frame after the reveal counts
            self.content_started = true;
            content_dt = self.time_since_reveal();
        }

        self.preloader_text.advance(delta);
        self.preloader_dot.update(dt);
        self.underline.update(dt);

        if self.content_started {
            self.content_opacity.update(content_dt);
            self.content_scale.update(content_dt);
        }

        self.hero_title.advance(delta);
        self.hero_opacity.update(dt);
        self.hero_slide.update(dt);
        self.card_bob.update(dt);
        self.name_color.update(dt);
        self.code_rain.update(dt);

        for reveal in self
            .headings
            .iter_mut()
            .chain(self.experiences.iter_mut())
            .chain(self.projects.iter_mut())
            .chain(std::iter::once(&mut self.contact))
        {
            reveal.update(dt);
        }
    }

    fn time_since_reveal(&self) -> f32 {
        let in_stage = self.timeline.time_in_stage();
        match self.timeline.stage() {
            TimelineStage::Loading => 0.0,
            TimelineStage::Revealing => in_stage.as_secs_f32(),
            TimelineStage::Settled => (in_stage + self.exit).as_secs_f32(),
        }
    }

    /// Cancel pending timers; call when the page goes away
    pub fn dispose(&mut self) {
        self.timeline.dispose();
    }

    pub fn stage(&self) -> TimelineStage {
        self.timeline.stage()
    }

    pub fn timeline(&self) -> &StagedTimeline {
        &self.timeline
    }

    pub fn preloader_visible(&self) -> bool {
        !self.skipped && self.timeline.stage() != TimelineStage::Settled
    }

    fn exit_eased(&self) -> f32 {
        Easing::BackIn.apply(self.timeline.exit_progress())
    }

    /// Preloader opacity; fades out with a slight wind-up during the exit
    pub fn preloader_opacity(&self) -> f32 {
        (1.0 - self.exit_eased()).clamp(0.0, 1.0)
    }

    pub fn preloader_scale(&self) -> f32 {
        1.0 + (EXIT_SCALE - 1.0) * self.exit_eased()
    }

    pub fn preloader_text(&self) -> &str {
        self.preloader_text.visible()
    }

    pub fn preloader_dot_opacity(&self) -> f32 {
        self.preloader_dot.value()
    }

    /// Underline width as a fraction of the preloader text width
    pub fn underline_width(&self) -> f32 {
        self.underline.value()
    }

    pub fn content_opacity(&self) -> f32 {
        self.content_opacity.value()
    }

    pub fn content_scale(&self) -> f32 {
        self.content_scale.value()
    }

    pub fn hero_title(&self) -> &str {
        self.hero_title.visible()
    }

    /// Opacity of both hero columns while they enter
    pub fn hero_opacity(&self) -> f32 {
        self.hero_opacity.value()
    }

    /// Distance still to travel: the text comes from the left, the profile card from the right
    pub fn hero_slide(&self) -> f32 {
        self.hero_slide.value()
    }

    /// Vertical offset of the profile card contents, 0 at rest and negative when raised
    pub fn card_bob(&self) -> f32 {
        self.card_bob.value()
    }

    pub fn name_color(&self) -> Color {
        self.name_color.current()
    }

    pub fn code_rain(&self) -> &CodeRain {
        &self.code_rain
    }

    fn reveal_mut(&mut self, section: Section) -> Option<&mut RevealOnce> {
        match section {
            Section::ExperienceHeading => Some(&mut self.headings[0]),
            Section::PortfolioHeading => Some(&mut self.headings[1]),
            Section::Experience(i) => self.experiences.get_mut(i),
            Section::Project(i) => self.projects.get_mut(i),
            Section::Contact => Some(&mut self.contact),
        }
    }

    pub fn reveal(&self, section: Section) -> Option<&RevealOnce> {
        match section {
            Section::ExperienceHeading => Some(&self.headings[0]),
            Section::PortfolioHeading => Some(&self.headings[1]),
            Section::Experience(i) => self.experiences.get(i),
            Section::Project(i) => self.projects.get(i),
            Section::Contact => Some(&self.contact),
        }
    }

    /// Report whether `section` is on screen; returns true when this triggers its reveal
    pub fn observe(&mut self, section: Section, in_view: bool) -> bool {
        self.reveal_mut(section)
            .map(|reveal| reveal.observe(in_view))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::SequenceRandom;

    fn controller() -> PageController {
        let content = PortfolioContent::builtin().unwrap();
        PageController::new(&TimelineConfig::default(), &content, &mut SequenceRandom::constant(0.5))
    }

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_preloader_types_then_exits() {
        let mut page = controller();
        assert!(page.preloader_visible());
        assert_eq!(page.content_opacity(), 0.0);

        page.update(ms(300));
        assert_eq!(page.preloader_text(), "AI");
        assert_eq!(page.preloader_opacity(), 1.0);

        page.update(ms(2700));
        assert_eq!(page.stage(), TimelineStage::Revealing);
        assert_eq!(page.content_opacity(), 0.0);

        page.update(ms(1000));
        assert_eq!(page.stage(), TimelineStage::Settled);
        assert!(!page.preloader_visible());
        assert!(page.content_opacity() > 0.0);

        page.update(ms(1000));
        assert_eq!(page.content_opacity(), 1.0);
        assert_eq!(page.content_scale(), 1.0);
    }

    #[test]
    fn test_reveal_inside_long_frame_counts_from_transition() {
        let mut page = controller();
        page.update(ms(2900));
        page.update(ms(700));
        // 600 ms into a 1200 ms reveal
        assert!(page.content_opacity() > 0.5);
        assert!(page.content_opacity() < 1.0);
    }

    #[test]
    fn test_exit_shrinks_preloader() {
        let mut page = controller();
        page.update(ms(3000));
        page.update(ms(900));
        assert!(page.preloader_scale() < 0.5);
        assert!(page.preloader_opacity() < 0.5);
    }

    #[test]
    fn test_dot_and_underline_follow_delays() {
        let mut page = controller();
        page.update(ms(400));
        assert_eq!(page.preloader_dot_opacity(), 0.0);
        assert_eq!(page.underline_width(), 0.0);

        page.update(ms(2000));
        assert_eq!(page.preloader_dot_opacity(), 1.0);
        assert_eq!(page.underline_width(), 1.0);
    }

    #[test]
    fn test_skip_shows_content_at_once() {
        let mut page = controller();
        page.skip_preloader();
        assert!(!page.preloader_visible());
        assert_eq!(page.content_opacity(), 1.0);
        assert!(page.timeline().is_disposed());

        page.update(ms(5000));
        assert_eq!(page.stage(), TimelineStage::Loading);
    }

    #[test]
    fn test_hero_title_types_during_preloader() {
        let mut page = controller();
        page.update(ms(160));
        assert_eq!(page.hero_title(), "Ge");
    }

    #[test]
    fn test_sections_reveal_once() {
        let mut page = controller();
        assert!(page.observe(Section::Project(2), true));
        assert!(!page.observe(Section::Project(2), true));
        assert!(!page.observe(Section::Project(99), true));

        page.update(ms(2000));
        assert_eq!(page.reveal(Section::Project(2)).unwrap().opacity(), 1.0);
        assert_eq!(page.reveal(Section::Project(0)).unwrap().opacity(), 0.0);
    }

    #[test]
    fn test_hero_columns_slide_in() {
        let mut page = controller();
        assert_eq!(page.hero_opacity(), 0.0);
        assert_eq!(page.hero_slide(), HERO_SLIDE);

        page.update(ms(300));
        assert!(page.hero_opacity() > 0.0 && page.hero_opacity() < 1.0);
        assert!(page.hero_slide() > 0.0 && page.hero_slide() < HERO_SLIDE);

        page.update(ms(500));
        assert_eq!(page.hero_opacity(), 1.0);
        assert_eq!(page.hero_slide(), 0.0);
    }

    #[test]
    fn test_card_bobs_on_a_three_second_loop() {
        let mut page = controller();
        assert_eq!(page.card_bob(), 0.0);

        page.update(ms(1500));
        assert!((page.card_bob() + CARD_BOB_HEIGHT).abs() < 1e-3);

        page.update(ms(1500));
        assert!(page.card_bob().abs() < 1e-3);

        page.update(ms(1500));
        assert!((page.card_bob() + CARD_BOB_HEIGHT).abs() < 1e-3);
    }

    #[test]
    fn test_contact_card_slides_without_fading() {
        let mut page = controller();
        let contact = page.reveal(Section::Contact).unwrap();
        assert_eq!(contact.opacity(), 1.0);
        assert_eq!(contact.offset(), CONTACT_START);

        assert!(page.observe(Section::Contact, true));
        page.update(ms(1000));
        let contact = page.reveal(Section::Contact).unwrap();
        assert_eq!(contact.opacity(), 1.0);
        assert_eq!(contact.offset(), CONTACT_REST);
    }

    #[test]
    fn test_code_rain_uses_snippets() {
        let page = controller();
        assert_eq!(page.code_rain().len(), 80);
    }
}
