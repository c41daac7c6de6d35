//! Profile identity card: name, handle, bio, optional avatar, and (in
//! the layouts without a separate metrics column for them) a couple of
//! headline counts.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use super::{CardSpec, card_background, divider};
use crate::config::LayoutVariant;
use crate::scene::{CircleClip, Primitive, Scene, TextAnchor, TextNode};
use crate::stats::{ProfileStats, format_count};
use crate::text::{truncate_to_width, wrap_to_width};
use crate::theme::Theme;

const AVATAR_CLIP_ID: &str = "avatar-clip";

pub fn render(
    scene: &mut Scene,
    card: &CardSpec,
    variant: LayoutVariant,
    stats: &ProfileStats,
    theme: &Theme,
) {
    let mut children = vec![card_background(card)];
    match variant {
        LayoutVariant::Compact => compact(&mut children, stats, theme),
        LayoutVariant::Wide => wide(&mut children, stats, theme),
        LayoutVariant::Bento => bento(scene, &mut children, stats, theme),
        LayoutVariant::Tall => tall(scene, &mut children, stats, theme),
    }
    scene.nodes.push(Primitive::Group { tx: card.x, ty: card.y, children });
}

fn wide(children: &mut Vec<Primitive>, stats: &ProfileStats, theme: &Theme) {
    children.push(Primitive::Text(TextNode {
        x: 20.0,
        y: 40.0,
        content: truncate_to_width(&stats.display_name, 22.0, 210.0),
        font_size: 22.0,
        bold: true,
        ..Default::default()
    }));
    let subtitle = if stats.bio.is_empty() {
        format!("@{}", stats.login)
    } else {
        truncate_to_width(&stats.bio, 14.0, 210.0)
    };
    children.push(Primitive::Text(TextNode {
        x: 20.0,
        y: 65.0,
        content: subtitle,
        class: "text-dim".to_string(),
        font_size: 14.0,
        ..Default::default()
    }));
    children.push(divider(theme, 20.0, 230.0, 85.0));
    stat_row(children, "Public Repos", stats.public_repos, 20.0, 230.0, 115.0);
}

fn compact(children: &mut Vec<Primitive>, stats: &ProfileStats, theme: &Theme) {
    children.push(Primitive::Text(TextNode {
        x: 20.0,
        y: 40.0,
        content: truncate_to_width(&stats.display_name, 22.0, 340.0),
        font_size: 22.0,
        bold: true,
        ..Default::default()
    }));
    children.push(Primitive::Text(TextNode {
        x: 20.0,
        y: 64.0,
        content: format!("@{}", stats.login),
        class: "text-dim".to_string(),
        font_size: 14.0,
        ..Default::default()
    }));
    children.push(divider(theme, 20.0, 360.0, 88.0));
    stat_row(children, "Public Repos", stats.public_repos, 20.0, 360.0, 118.0);
    stat_row(children, "Followers", stats.followers, 20.0, 360.0, 144.0);
}

fn bento(scene: &mut Scene, children: &mut Vec<Primitive>, stats: &ProfileStats, theme: &Theme) {
    if let Some(bytes) = &stats.avatar {
        avatar(scene, children, 136.0, 40.0, 96.0, bytes);
    }
    children.push(Primitive::Text(TextNode {
        x: 184.0,
        y: 168.0,
        content: truncate_to_width(&stats.display_name, 22.0, 320.0),
        font_size: 22.0,
        bold: true,
        anchor: TextAnchor::Middle,
        ..Default::default()
    }));
    children.push(Primitive::Text(TextNode {
        x: 184.0,
        y: 194.0,
        content: format!("@{}", stats.login),
        class: "text-dim".to_string(),
        font_size: 14.0,
        anchor: TextAnchor::Middle,
        ..Default::default()
    }));
    for (idx, line) in wrap_to_width(&stats.bio, 13.0, 300.0).iter().take(3).enumerate() {
        children.push(Primitive::Text(TextNode {
            x: 34.0,
            y: 240.0 + idx as f32 * 22.0,
            content: line.clone(),
            class: "text-dim".to_string(),
            font_size: 13.0,
            ..Default::default()
        }));
    }
    children.push(divider(theme, 30.0, 338.0, 330.0));
    let rows: [(&str, u64); 4] = [
        ("Repositories", stats.public_repos),
        ("Stars", stats.total_stars),
        ("Forks", stats.total_forks),
        ("Followers", stats.followers),
    ];
    for (idx, (label, value)) in rows.iter().enumerate() {
        stat_row(children, label, *value, 30.0, 338.0, 366.0 + idx as f32 * 30.0);
    }
    children.push(divider(theme, 30.0, 338.0, 492.0));
    for (idx, line) in ["Updated automatically", "via GitHub Actions"].iter().enumerate() {
        children.push(Primitive::Text(TextNode {
            x: 30.0,
            y: 520.0 + idx as f32 * 18.0,
            content: line.to_string(),
            class: "text-dim".to_string(),
            font_size: 11.0,
            ..Default::default()
        }));
    }
}

fn tall(scene: &mut Scene, children: &mut Vec<Primitive>, stats: &ProfileStats, _theme: &Theme) {
    if let Some(bytes) = &stats.avatar {
        avatar(scene, children, 32.0, 32.0, 96.0, bytes);
    }
    children.push(Primitive::Text(TextNode {
        x: 152.0,
        y: 72.0,
        content: truncate_to_width(&stats.display_name, 26.0, 560.0),
        font_size: 26.0,
        bold: true,
        ..Default::default()
    }));
    children.push(Primitive::Text(TextNode {
        x: 152.0,
        y: 98.0,
        content: format!("@{}", stats.login),
        class: "text-dim".to_string(),
        font_size: 14.0,
        ..Default::default()
    }));
    if !stats.bio.is_empty() {
        children.push(Primitive::Text(TextNode {
            x: 152.0,
            y: 124.0,
            content: truncate_to_width(&stats.bio, 13.0, 560.0),
            class: "text-dim".to_string(),
            font_size: 13.0,
            ..Default::default()
        }));
    }
    for (idx, (label, value)) in [
        ("Public Repos", stats.public_repos),
        ("Followers", stats.followers),
    ]
    .iter()
    .enumerate()
    {
        let top = 56.0 + idx as f32 * 56.0;
        children.push(Primitive::Text(TextNode {
            x: 920.0,
            y: top,
            content: label.to_string(),
            class: "text-dim".to_string(),
            anchor: TextAnchor::End,
            ..Default::default()
        }));
        children.push(Primitive::Text(TextNode {
            x: 920.0,
            y: top + 26.0,
            content: format_count(*value),
            font_size: 22.0,
            bold: true,
            anchor: TextAnchor::End,
            ..Default::default()
        }));
    }
}

fn stat_row(
    children: &mut Vec<Primitive>,
    label: &str,
    value: u64,
    label_x: f32,
    value_x: f32,
    y: f32,
) {
    children.push(Primitive::Text(TextNode {
        x: label_x,
        y,
        content: label.to_string(),
        class: "text-dim".to_string(),
        ..Default::default()
    }));
    children.push(Primitive::Text(TextNode {
        x: value_x,
        y,
        content: format_count(value),
        font_size: 16.0,
        bold: true,
        anchor: TextAnchor::End,
        ..Default::default()
    }));
}

fn avatar(
    scene: &mut Scene,
    children: &mut Vec<Primitive>,
    x: f32,
    y: f32,
    size: f32,
    bytes: &[u8],
) {
    let r = size / 2.0;
    scene.clips.push(CircleClip {
        id: AVATAR_CLIP_ID.to_string(),
        cx: x + r,
        cy: y + r,
        r,
    });
    children.push(Primitive::Image {
        x,
        y,
        width: size,
        height: size,
        href: avatar_data_uri(bytes),
        clip_path: Some(AVATAR_CLIP_ID.to_string()),
    });
}

fn avatar_data_uri(bytes: &[u8]) -> String {
    let mime = if bytes.starts_with(&[0xff, 0xd8, 0xff]) {
        "image/jpeg"
    } else {
        "image/png"
    };
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}
