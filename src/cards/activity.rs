//! Decorative activity card: a cell grid in the wide and tall layouts,
//! a gradient sparkline in the bento layout. Both draw from the shared
//! per-run generator, so the pattern is stable for a given seed.

use rand::rngs::StdRng;

use super::{ActivityWidget, CardSpec, card_background};
use crate::charts;
use crate::config::{LayoutConfig, LayoutVariant};
use crate::scene::{LinearGradient, Primitive, Scene, TextNode};
use crate::theme::Theme;

const SPARK_GRADIENT_ID: &str = "spark-fade";

pub fn render(
    scene: &mut Scene,
    card: &CardSpec,
    variant: LayoutVariant,
    widget: ActivityWidget,
    layout: &LayoutConfig,
    theme: &Theme,
    rng: &mut StdRng,
) {
    let mut children = vec![card_background(card)];
    match widget {
        ActivityWidget::Grid { cols, rows } => {
            let title = match variant {
                LayoutVariant::Tall => "Contribution Activity",
                _ => "Activity Visual",
            };
            children.push(Primitive::Text(TextNode {
                x: 20.0,
                y: 40.0,
                content: title.to_string(),
                font_size: 18.0,
                bold: true,
                ..Default::default()
            }));
            children.push(Primitive::Text(TextNode {
                x: 20.0,
                y: 60.0,
                content: "Recent Activity Pattern".to_string(),
                class: "text-dim".to_string(),
                ..Default::default()
            }));
            children.push(Primitive::Group {
                tx: 20.0,
                ty: 80.0,
                children: charts::activity_cells(cols, rows, 18.0, 24.0, &theme.accent_color, rng),
            });
        }
        ActivityWidget::Sparkline => {
            scene.gradients.push(LinearGradient {
                id: SPARK_GRADIENT_ID.to_string(),
                color: theme.accent_color.clone(),
                start_opacity: 0.35,
                end_opacity: 0.0,
            });
            children.push(Primitive::Text(TextNode {
                x: 20.0,
                y: 36.0,
                content: "Activity".to_string(),
                font_size: 16.0,
                bold: true,
                ..Default::default()
            }));
            children.push(Primitive::Group {
                tx: 20.0,
                ty: 60.0,
                children: charts::sparkline(
                    224.0,
                    120.0,
                    layout.sparkline_samples,
                    layout.sparkline_step,
                    layout.sparkline_margin,
                    &theme.accent_color,
                    SPARK_GRADIENT_ID,
                    rng,
                ),
            });
            children.push(Primitive::Text(TextNode {
                x: 20.0,
                y: 206.0,
                content: "Recent Activity Pattern".to_string(),
                class: "text-dim".to_string(),
                font_size: 11.0,
                ..Default::default()
            }));
        }
    }
    scene.nodes.push(Primitive::Group { tx: card.x, ty: card.y, children });
}
