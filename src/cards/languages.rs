//! Top languages card. Compact and wide layouts list horizontal bars;
//! bento and tall center a donut over a swatch legend. Share order is
//! preserved as given, with any "Others" remainder already last.

use super::{CardSpec, LanguageChart, card_background};
use crate::charts;
use crate::config::LayoutVariant;
use crate::scene::{Primitive, Scene, TextAnchor, TextNode};
use crate::stats::LanguageShare;
use crate::text::truncate_to_width;
use crate::theme::Theme;

pub fn render(
    scene: &mut Scene,
    card: &CardSpec,
    variant: LayoutVariant,
    chart: LanguageChart,
    shares: &[LanguageShare],
    theme: &Theme,
) {
    let mut children = vec![card_background(card)];
    let title_y = match variant {
        LayoutVariant::Compact | LayoutVariant::Bento => 36.0,
        LayoutVariant::Wide | LayoutVariant::Tall => 40.0,
    };
    children.push(Primitive::Text(TextNode {
        x: 20.0,
        y: title_y,
        content: "Top Languages".to_string(),
        font_size: 18.0,
        bold: true,
        ..Default::default()
    }));
    match chart {
        LanguageChart::Bars => bars(&mut children, variant, shares),
        LanguageChart::Donut => donut_panel(&mut children, variant, shares, theme),
    }
    scene.nodes.push(Primitive::Group { tx: card.x, ty: card.y, children });
}

fn bars(children: &mut Vec<Primitive>, variant: LayoutVariant, shares: &[LanguageShare]) {
    if shares.is_empty() {
        children.push(empty_note(20.0, 70.0, TextAnchor::Start));
        return;
    }
    match variant {
        LayoutVariant::Compact => {
            for (idx, share) in shares.iter().enumerate() {
                let y = 66.0 + idx as f32 * 24.0;
                children.push(Primitive::Text(TextNode {
                    x: 20.0,
                    y,
                    content: share.name.clone(),
                    ..Default::default()
                }));
                children.push(Primitive::Group {
                    tx: 140.0,
                    ty: y - 8.0,
                    children: charts::bar(540.0, share.percent, &share.color),
                });
                children.push(Primitive::Text(TextNode {
                    x: 756.0,
                    y,
                    content: format_percent(share.percent),
                    class: "text-dim".to_string(),
                    anchor: TextAnchor::End,
                    ..Default::default()
                }));
            }
        }
        _ => {
            let mut rows = Vec::with_capacity(shares.len());
            for (idx, share) in shares.iter().enumerate() {
                rows.push(Primitive::Group {
                    tx: 0.0,
                    ty: idx as f32 * 35.0,
                    children: vec![
                        Primitive::Text(TextNode {
                            x: 0.0,
                            y: 0.0,
                            content: share.name.clone(),
                            ..Default::default()
                        }),
                        Primitive::Text(TextNode {
                            x: 320.0,
                            y: 0.0,
                            content: format_percent(share.percent),
                            class: "text-dim".to_string(),
                            anchor: TextAnchor::End,
                            ..Default::default()
                        }),
                        Primitive::Group {
                            tx: 0.0,
                            ty: 10.0,
                            children: charts::bar(320.0, share.percent, &share.color),
                        },
                    ],
                });
            }
            children.push(Primitive::Group { tx: 20.0, ty: 70.0, children: rows });
        }
    }
}

fn donut_panel(
    children: &mut Vec<Primitive>,
    variant: LayoutVariant,
    shares: &[LanguageShare],
    theme: &Theme,
) {
    let (cx, cy, radius, legend_y, pitch, swatch_x, swatch_size, swatch_rx, name_x, percent_x) =
        match variant {
            LayoutVariant::Tall => (230.0, 205.0, 95.0, 336.0, 24.0, 40.0, 12.0, 3.0, 62.0, 420.0),
            _ => (136.0, 158.0, 80.0, 262.0, 20.0, 24.0, 10.0, 2.0, 42.0, 248.0),
        };
    if shares.is_empty() {
        children.push(empty_note(cx, cy, TextAnchor::Middle));
        return;
    }
    children.extend(charts::donut(cx, cy, radius, shares, &theme.card_background));
    let name_width = percent_x - name_x - 50.0;
    for (idx, share) in shares.iter().enumerate() {
        let y = legend_y + idx as f32 * pitch;
        children.push(Primitive::Rect {
            x: swatch_x,
            y: y - 9.0,
            width: swatch_size,
            height: swatch_size,
            rx: swatch_rx,
            fill: Some(share.color.clone()),
            class: None,
            opacity: None,
        });
        children.push(Primitive::Text(TextNode {
            x: name_x,
            y,
            content: truncate_to_width(&share.name, 12.0, name_width),
            ..Default::default()
        }));
        children.push(Primitive::Text(TextNode {
            x: percent_x,
            y,
            content: format_percent(share.percent),
            class: "text-dim".to_string(),
            anchor: TextAnchor::End,
            ..Default::default()
        }));
    }
}

fn empty_note(x: f32, y: f32, anchor: TextAnchor) -> Primitive {
    Primitive::Text(TextNode {
        x,
        y,
        content: "No language data".to_string(),
        class: "text-dim".to_string(),
        anchor,
        ..Default::default()
    })
}

fn format_percent(percent: f32) -> String {
    let text = format!("{percent:.1}");
    let text = text.strip_suffix(".0").unwrap_or(&text);
    format!("{text}%")
}
