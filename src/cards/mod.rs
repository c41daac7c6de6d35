//! Card layout tables and scene assembly.
//!
//! Each layout variant is a fixed table of non-overlapping card
//! rectangles on its own canvas. The per-card modules fill the
//! interiors in local coordinates; `compute_scene` walks the table and
//! wraps every interior in a translated group.

pub mod activity;
pub mod clock;
pub mod identity;
pub mod languages;
pub mod metrics;

use chrono::{Datelike, NaiveDateTime};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{Config, LayoutVariant};
use crate::scene::{Primitive, Scene};
use crate::stats::{LanguageShare, ProfileStats};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardId {
    Identity,
    Metrics,
    Languages,
    Activity,
    Clock,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardSpec {
    pub id: CardId,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub corner_radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageChart {
    Bars,
    Donut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityWidget {
    Grid { cols: usize, rows: usize },
    Sparkline,
}

/// Per-run inputs beyond the profile data: the wall-clock timestamp for
/// the clock card and the seed driving decorative randomness. The
/// default seed derives from the calendar date, so output is stable
/// within a day and rolls over at midnight.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    pub now: NaiveDateTime,
    pub seed: u64,
}

impl RenderContext {
    pub fn for_timestamp(now: NaiveDateTime) -> Self {
        let seed =
            now.year() as u64 * 10_000 + u64::from(now.month()) * 100 + u64::from(now.day());
        Self { now, seed }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[derive(Debug, Clone)]
pub struct VariantLayout {
    pub width: f32,
    pub height: f32,
    pub corner_radius: f32,
    pub max_languages: usize,
    pub language_chart: LanguageChart,
    pub activity_widget: Option<ActivityWidget>,
    pub cards: Vec<CardSpec>,
}

fn card(id: CardId, x: f32, y: f32, width: f32, height: f32, corner_radius: f32) -> CardSpec {
    CardSpec { id, x, y, width, height, corner_radius }
}

impl VariantLayout {
    pub fn for_variant(variant: LayoutVariant) -> Self {
        match variant {
            LayoutVariant::Compact => Self::compact(),
            LayoutVariant::Wide => Self::wide(),
            LayoutVariant::Bento => Self::bento(),
            LayoutVariant::Tall => Self::tall(),
        }
    }

    /// Two header cards over a full-width language list. No activity or
    /// clock card; follower and repo counts move into the identity card.
    fn compact() -> Self {
        Self {
            width: 840.0,
            height: 400.0,
            corner_radius: 16.0,
            max_languages: 4,
            language_chart: LanguageChart::Bars,
            activity_widget: None,
            cards: vec![
                card(CardId::Identity, 24.0, 24.0, 380.0, 168.0, 10.0),
                card(CardId::Metrics, 428.0, 24.0, 388.0, 168.0, 10.0),
                card(CardId::Languages, 24.0, 216.0, 792.0, 160.0, 10.0),
            ],
        }
    }

    /// The classic two-row readme banner: identity and metrics up top,
    /// language bars and the activity grid below.
    fn wide() -> Self {
        Self {
            width: 800.0,
            height: 450.0,
            corner_radius: 15.0,
            max_languages: 5,
            language_chart: LanguageChart::Bars,
            activity_widget: Some(ActivityWidget::Grid { cols: 14, rows: 7 }),
            cards: vec![
                card(CardId::Identity, 20.0, 20.0, 250.0, 140.0, 10.0),
                card(CardId::Metrics, 290.0, 20.0, 490.0, 140.0, 10.0),
                card(CardId::Languages, 20.0, 180.0, 360.0, 250.0, 10.0),
                card(CardId::Activity, 400.0, 180.0, 380.0, 250.0, 10.0),
            ],
        }
    }

    /// Tall identity sidebar with avatar, then a metrics strip and a
    /// three-tile column grid: language donut, sparkline, clock.
    fn bento() -> Self {
        Self {
            width: 1000.0,
            height: 600.0,
            corner_radius: 16.0,
            max_languages: 6,
            language_chart: LanguageChart::Donut,
            activity_widget: Some(ActivityWidget::Sparkline),
            cards: vec![
                card(CardId::Identity, 24.0, 24.0, 368.0, 552.0, 12.0),
                card(CardId::Metrics, 416.0, 24.0, 560.0, 120.0, 12.0),
                card(CardId::Languages, 416.0, 168.0, 272.0, 408.0, 12.0),
                card(CardId::Activity, 712.0, 168.0, 264.0, 228.0, 12.0),
                card(CardId::Clock, 712.0, 420.0, 264.0, 156.0, 12.0),
            ],
        }
    }

    /// Full-width banner rows on top, then a donut column next to a
    /// larger activity grid with the clock beneath it.
    fn tall() -> Self {
        Self {
            width: 1000.0,
            height: 850.0,
            corner_radius: 16.0,
            max_languages: 5,
            language_chart: LanguageChart::Donut,
            activity_widget: Some(ActivityWidget::Grid { cols: 18, rows: 8 }),
            cards: vec![
                card(CardId::Identity, 24.0, 24.0, 952.0, 160.0, 12.0),
                card(CardId::Metrics, 24.0, 208.0, 952.0, 120.0, 12.0),
                card(CardId::Languages, 24.0, 352.0, 460.0, 474.0, 12.0),
                card(CardId::Activity, 508.0, 352.0, 468.0, 282.0, 12.0),
                card(CardId::Clock, 508.0, 658.0, 468.0, 168.0, 12.0),
            ],
        }
    }
}

/// How many language entries the summarizer should keep for the active
/// layout, honoring an explicit config override.
pub fn language_cap(config: &Config) -> usize {
    let layout = VariantLayout::for_variant(config.layout.variant);
    config.layout.max_languages.unwrap_or(layout.max_languages)
}

pub(crate) fn card_background(card: &CardSpec) -> Primitive {
    Primitive::Rect {
        x: 0.0,
        y: 0.0,
        width: card.width,
        height: card.height,
        rx: card.corner_radius,
        fill: None,
        class: Some("card".to_string()),
        opacity: None,
    }
}

pub(crate) fn divider(theme: &crate::theme::Theme, x1: f32, x2: f32, y: f32) -> Primitive {
    Primitive::Line {
        x1,
        y1: y,
        x2,
        y2: y,
        stroke: theme.card_border.clone(),
        stroke_width: 1.0,
    }
}

pub fn compute_scene(
    stats: &ProfileStats,
    shares: &[LanguageShare],
    config: &Config,
    ctx: &RenderContext,
) -> Scene {
    let layout = VariantLayout::for_variant(config.layout.variant);
    tracing::debug!(variant = ?config.layout.variant, seed = ctx.seed, "laying out scene");

    let mut scene = Scene::new(layout.width, layout.height, layout.corner_radius);
    let mut rng = StdRng::seed_from_u64(ctx.seed);

    for card in &layout.cards {
        match card.id {
            CardId::Identity => {
                identity::render(&mut scene, card, config.layout.variant, stats, &config.theme);
            }
            CardId::Metrics => {
                metrics::render(&mut scene, card, config.layout.variant, stats, &config.theme);
            }
            CardId::Languages => {
                languages::render(
                    &mut scene,
                    card,
                    config.layout.variant,
                    layout.language_chart,
                    shares,
                    &config.theme,
                );
            }
            CardId::Activity => {
                if let Some(widget) = layout.activity_widget {
                    activity::render(
                        &mut scene,
                        card,
                        config.layout.variant,
                        widget,
                        &config.layout,
                        &config.theme,
                        &mut rng,
                    );
                }
            }
            CardId::Clock => {
                clock::render(&mut scene, card, config.layout.variant, ctx, &config.theme);
            }
        }
    }
    scene
}
