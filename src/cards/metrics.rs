//! Key metric columns: label over a large bold count, one group per
//! column so the interiors stay translatable as a unit.

use super::{CardSpec, card_background, divider};
use crate::config::LayoutVariant;
use crate::scene::{Primitive, Scene, TextNode};
use crate::stats::{ProfileStats, format_count};
use crate::text::text_width;
use crate::theme::Theme;

pub fn render(
    scene: &mut Scene,
    card: &CardSpec,
    variant: LayoutVariant,
    stats: &ProfileStats,
    theme: &Theme,
) {
    let mut children = vec![card_background(card)];
    match variant {
        LayoutVariant::Compact => {
            children.push(column(30.0, 35.0, "Total Stars", stats.total_stars, 12.0, 28.0, 25.0));
            children.push(column(200.0, 35.0, "Total Forks", stats.total_forks, 12.0, 28.0, 25.0));
            children.push(divider(theme, 30.0, 358.0, 100.0));
            footer(&mut children, 30.0, 130.0);
        }
        LayoutVariant::Wide => {
            children.push(column(30.0, 35.0, "Total Stars", stats.total_stars, 12.0, 28.0, 25.0));
            children.push(column(150.0, 35.0, "Total Forks", stats.total_forks, 12.0, 28.0, 25.0));
            children.push(column(270.0, 35.0, "Followers", stats.followers, 12.0, 28.0, 25.0));
            children.push(divider(theme, 30.0, 460.0, 80.0));
            footer(&mut children, 30.0, 110.0);
        }
        LayoutVariant::Bento => {
            for (idx, (label, value)) in spread(stats).iter().enumerate() {
                children.push(column(30.0 + idx as f32 * 135.0, 40.0, label, *value, 11.0, 24.0, 32.0));
            }
        }
        LayoutVariant::Tall => {
            for (idx, (label, value)) in spread(stats).iter().enumerate() {
                children.push(column(40.0 + idx as f32 * 230.0, 44.0, label, *value, 12.0, 28.0, 30.0));
            }
        }
    }
    scene.nodes.push(Primitive::Group { tx: card.x, ty: card.y, children });
}

fn spread(stats: &ProfileStats) -> [(&'static str, u64); 4] {
    [
        ("Repositories", stats.public_repos),
        ("Total Stars", stats.total_stars),
        ("Total Forks", stats.total_forks),
        ("Followers", stats.followers),
    ]
}

fn column(
    tx: f32,
    ty: f32,
    label: &str,
    value: u64,
    label_size: f32,
    value_size: f32,
    value_dy: f32,
) -> Primitive {
    Primitive::Group {
        tx,
        ty,
        children: vec![
            Primitive::Text(TextNode {
                x: 0.0,
                y: 0.0,
                content: label.to_string(),
                class: "text-dim".to_string(),
                font_size: label_size,
                ..Default::default()
            }),
            Primitive::Text(TextNode {
                x: 0.0,
                y: value_dy,
                content: format_count(value),
                font_size: value_size,
                bold: true,
                ..Default::default()
            }),
        ],
    }
}

fn footer(children: &mut Vec<Primitive>, x: f32, y: f32) {
    let lead = "Data updated automatically via ";
    children.push(Primitive::Text(TextNode {
        x,
        y,
        content: lead.trim_end().to_string(),
        class: "text-dim".to_string(),
        ..Default::default()
    }));
    children.push(Primitive::Text(TextNode {
        x: x + text_width(lead, 12.0),
        y,
        content: "GitHub Actions".to_string(),
        bold: true,
        ..Default::default()
    }));
}
