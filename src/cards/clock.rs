//! Local time card: a progress ring showing how far the day has
//! advanced, with the date spelled out beside it.

use chrono::{NaiveDateTime, Timelike};

use super::{CardSpec, RenderContext, card_background};
use crate::charts;
use crate::config::LayoutVariant;
use crate::scene::{Primitive, Scene, TextNode};
use crate::theme::Theme;

pub fn render(
    scene: &mut Scene,
    card: &CardSpec,
    variant: LayoutVariant,
    ctx: &RenderContext,
    theme: &Theme,
) {
    let mut children = vec![card_background(card)];
    let label = ctx.now.format("%H:%M").to_string();
    match variant {
        LayoutVariant::Tall => {
            children.extend(charts::ring(
                80.0,
                84.0,
                48.0,
                9.0,
                day_percent(&ctx.now),
                &theme.accent_color,
                &theme.bar_track_color,
                &label,
            ));
            children.push(Primitive::Text(TextNode {
                x: 160.0,
                y: 62.0,
                content: "Local Time".to_string(),
                class: "text-dim".to_string(),
                ..Default::default()
            }));
            children.push(Primitive::Text(TextNode {
                x: 160.0,
                y: 92.0,
                content: ctx.now.format("%A, %b %-d").to_string(),
                font_size: 18.0,
                bold: true,
                ..Default::default()
            }));
            children.push(Primitive::Text(TextNode {
                x: 160.0,
                y: 120.0,
                content: ctx.now.format("Day %-j of %Y").to_string(),
                class: "text-dim".to_string(),
                ..Default::default()
            }));
        }
        _ => {
            children.extend(charts::ring(
                62.0,
                78.0,
                42.0,
                8.0,
                day_percent(&ctx.now),
                &theme.accent_color,
                &theme.bar_track_color,
                &label,
            ));
            children.push(Primitive::Text(TextNode {
                x: 124.0,
                y: 58.0,
                content: "Local Time".to_string(),
                class: "text-dim".to_string(),
                font_size: 11.0,
                ..Default::default()
            }));
            children.push(Primitive::Text(TextNode {
                x: 124.0,
                y: 86.0,
                content: ctx.now.format("%b %-d").to_string(),
                font_size: 18.0,
                bold: true,
                ..Default::default()
            }));
            children.push(Primitive::Text(TextNode {
                x: 124.0,
                y: 112.0,
                content: ctx.now.format("%A").to_string(),
                class: "text-dim".to_string(),
                ..Default::default()
            }));
        }
    }
    scene.nodes.push(Primitive::Group { tx: card.x, ty: card.y, children });
}

fn day_percent(now: &NaiveDateTime) -> f32 {
    (now.hour() * 60 + now.minute()) as f32 / 1440.0 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 14)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn day_progress_tracks_the_clock() {
        assert!((day_percent(&at(0, 0)) - 0.0).abs() < 1e-3);
        assert!((day_percent(&at(12, 0)) - 50.0).abs() < 1e-3);
        assert!((day_percent(&at(18, 0)) - 75.0).abs() < 1e-3);
        assert!(day_percent(&at(23, 59)) < 100.0);
    }
}
