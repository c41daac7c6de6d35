use crate::scene::{Primitive, Scene, StrokeStyle, TextAnchor, TextNode};
use crate::theme::Theme;
use anyhow::Result;
use std::path::Path;

#[cfg(feature = "png")]
use crate::config::RenderConfig;

/// Serializes a scene into a complete standalone SVG document. Styling
/// shared across cards goes through the class table in the style block;
/// anything chart-specific is emitted inline on the element.
pub fn render_svg(scene: &Scene, theme: &Theme) -> String {
    let mut svg = String::new();
    let width = scene.width;
    let height = scene.height;

    svg.push_str(&format!(
        "<svg width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\" fill=\"none\" xmlns=\"http://www.w3.org/2000/svg\">",
    ));
    svg.push_str(&style_block(theme));

    if !scene.gradients.is_empty() || !scene.clips.is_empty() {
        svg.push_str("<defs>");
        for gradient in &scene.gradients {
            svg.push_str(&format!(
                "<linearGradient id=\"{}\" x1=\"0\" y1=\"0\" x2=\"0\" y2=\"1\"><stop offset=\"0\" stop-color=\"{}\" stop-opacity=\"{}\"/><stop offset=\"1\" stop-color=\"{}\" stop-opacity=\"{}\"/></linearGradient>",
                gradient.id,
                gradient.color,
                gradient.start_opacity,
                gradient.color,
                gradient.end_opacity
            ));
        }
        for clip in &scene.clips {
            svg.push_str(&format!(
                "<clipPath id=\"{}\"><circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\"/></clipPath>",
                clip.id, clip.cx, clip.cy, clip.r
            ));
        }
        svg.push_str("</defs>");
    }

    svg.push_str(&format!(
        "<rect width=\"{width}\" height=\"{height}\" fill=\"{}\" rx=\"{}\"/>",
        theme.background, scene.corner_radius
    ));

    for node in &scene.nodes {
        write_primitive(&mut svg, node);
    }

    svg.push_str("</svg>");
    svg
}

fn style_block(theme: &Theme) -> String {
    format!(
        "<style>.text {{ font-family: {}; fill: {}; }} .text-dim {{ fill: {}; }} .text-accent {{ fill: {}; }} .card {{ fill: {}; stroke: {}; stroke-width: 1; }} .bar-bg {{ fill: {}; }}</style>",
        theme.font_family,
        theme.text_color,
        theme.dim_text_color,
        theme.accent_color,
        theme.card_background,
        theme.card_border,
        theme.bar_track_color
    )
}

fn write_primitive(svg: &mut String, node: &Primitive) {
    match node {
        Primitive::Rect { x, y, width, height, rx, fill, class, opacity } => {
            svg.push_str(&format!(
                "<rect x=\"{x:.2}\" y=\"{y:.2}\" width=\"{width:.2}\" height=\"{height:.2}\" rx=\"{rx}\""
            ));
            if let Some(class) = class {
                svg.push_str(&format!(" class=\"{class}\""));
            }
            if let Some(fill) = fill {
                svg.push_str(&format!(" fill=\"{fill}\""));
            }
            if let Some(opacity) = opacity {
                svg.push_str(&format!(" opacity=\"{opacity}\""));
            }
            svg.push_str("/>");
        }
        Primitive::Circle { cx, cy, r, fill, stroke, transform } => {
            svg.push_str(&format!("<circle cx=\"{cx:.2}\" cy=\"{cy:.2}\" r=\"{r:.2}\""));
            match fill {
                Some(fill) => svg.push_str(&format!(" fill=\"{fill}\"")),
                None => svg.push_str(" fill=\"none\""),
            }
            if let Some(stroke) = stroke {
                svg.push_str(&stroke_attrs(stroke));
            }
            if let Some(transform) = transform {
                svg.push_str(&format!(" transform=\"{transform}\""));
            }
            svg.push_str("/>");
        }
        Primitive::Line { x1, y1, x2, y2, stroke, stroke_width } => {
            svg.push_str(&format!(
                "<line x1=\"{x1:.2}\" y1=\"{y1:.2}\" x2=\"{x2:.2}\" y2=\"{y2:.2}\" stroke=\"{stroke}\" stroke-width=\"{stroke_width}\"/>"
            ));
        }
        Primitive::Path { d, fill, stroke, opacity } => {
            svg.push_str(&format!("<path d=\"{d}\""));
            match fill {
                Some(fill) => svg.push_str(&format!(" fill=\"{fill}\"")),
                None => svg.push_str(" fill=\"none\""),
            }
            if let Some(stroke) = stroke {
                svg.push_str(&stroke_attrs(stroke));
            }
            if let Some(opacity) = opacity {
                svg.push_str(&format!(" opacity=\"{opacity}\""));
            }
            svg.push_str("/>");
        }
        Primitive::Text(text) => {
            svg.push_str(&text_svg(text));
        }
        Primitive::Image { x, y, width, height, href, clip_path } => {
            svg.push_str(&format!(
                "<image x=\"{x:.2}\" y=\"{y:.2}\" width=\"{width:.2}\" height=\"{height:.2}\" href=\"{href}\" preserveAspectRatio=\"xMidYMid slice\""
            ));
            if let Some(clip) = clip_path {
                svg.push_str(&format!(" clip-path=\"url(#{clip})\""));
            }
            svg.push_str("/>");
        }
        Primitive::Group { tx, ty, children } => {
            svg.push_str(&format!("<g transform=\"translate({tx:.2}, {ty:.2})\">"));
            for child in children {
                write_primitive(svg, child);
            }
            svg.push_str("</g>");
        }
    }
}

fn stroke_attrs(stroke: &StrokeStyle) -> String {
    let mut attrs = format!(
        " stroke=\"{}\" stroke-width=\"{}\"",
        stroke.color, stroke.width
    );
    if let Some(dasharray) = stroke.dasharray {
        attrs.push_str(&format!(" stroke-dasharray=\"{dasharray:.2}\""));
    }
    if let Some(dashoffset) = stroke.dashoffset {
        attrs.push_str(&format!(" stroke-dashoffset=\"{dashoffset:.2}\""));
    }
    if stroke.round_cap {
        attrs.push_str(" stroke-linecap=\"round\"");
    }
    attrs
}

fn text_svg(node: &TextNode) -> String {
    let mut text = format!(
        "<text x=\"{:.2}\" y=\"{:.2}\" class=\"{}\" font-size=\"{}\"",
        node.x, node.y, node.class, node.font_size
    );
    if node.bold {
        text.push_str(" font-weight=\"bold\"");
    }
    match node.anchor {
        TextAnchor::Start => {}
        TextAnchor::Middle => text.push_str(" text-anchor=\"middle\""),
        TextAnchor::End => text.push_str(" text-anchor=\"end\""),
    }
    if let Some(fill) = &node.fill {
        text.push_str(&format!(" fill=\"{fill}\""));
    }
    text.push_str(&format!(">{}</text>", escape_xml(&node.content)));
    text
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}

#[cfg(feature = "png")]
pub fn write_output_png(svg: &str, output: &Path, render_cfg: &RenderConfig) -> Result<()> {
    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &opt)?;

    let scale = render_cfg.png_scale.max(0.1);
    let size = tree.size();
    let width = (size.width() * scale).round().max(1.0) as u32;
    let height = (size.height() * scale).round().max(1.0) as u32;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate pixmap"))?;

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap_mut,
    );
    pixmap.save_png(output)?;
    Ok(())
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{CircleClip, LinearGradient};

    fn empty_scene() -> Scene {
        Scene::new(800.0, 450.0, 15.0)
    }

    #[test]
    fn skeleton_carries_style_classes_and_background() {
        let theme = Theme::midnight();
        let svg = render_svg(&empty_scene(), &theme);
        assert!(svg.starts_with("<svg width=\"800\" height=\"450\""));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(".text-dim { fill: #8b949e; }"));
        assert!(svg.contains(".card { fill: #161b22; stroke: #30363d; stroke-width: 1; }"));
        assert!(svg.contains("<rect width=\"800\" height=\"450\" fill=\"#0d1117\" rx=\"15\"/>"));
        assert!(!svg.contains("<defs>"));
    }

    #[test]
    fn text_content_is_escaped() {
        let theme = Theme::midnight();
        let mut scene = empty_scene();
        scene.nodes.push(Primitive::Text(TextNode {
            content: "C++ <3 \"quotes\" & more".to_string(),
            ..Default::default()
        }));
        let svg = render_svg(&scene, &theme);
        assert!(svg.contains("C++ &lt;3 &quot;quotes&quot; &amp; more"));
    }

    #[test]
    fn groups_nest_with_translated_origins() {
        let theme = Theme::midnight();
        let mut scene = empty_scene();
        scene.nodes.push(Primitive::Group {
            tx: 20.0,
            ty: 180.0,
            children: vec![Primitive::Group {
                tx: 0.0,
                ty: 35.0,
                children: vec![Primitive::Text(TextNode::default())],
            }],
        });
        let svg = render_svg(&scene, &theme);
        assert!(svg.contains("<g transform=\"translate(20.00, 180.00)\">"));
        assert!(svg.contains("<g transform=\"translate(0.00, 35.00)\">"));
        assert_eq!(svg.matches("<g ").count(), svg.matches("</g>").count());
    }

    #[test]
    fn defs_hold_gradients_and_clips() {
        let theme = Theme::midnight();
        let mut scene = empty_scene();
        scene.gradients.push(LinearGradient {
            id: "spark-fade".to_string(),
            color: "#ffffff".to_string(),
            start_opacity: 0.35,
            end_opacity: 0.0,
        });
        scene.clips.push(CircleClip {
            id: "avatar-clip".to_string(),
            cx: 184.0,
            cy: 88.0,
            r: 48.0,
        });
        let svg = render_svg(&scene, &theme);
        assert!(svg.contains("<linearGradient id=\"spark-fade\""));
        assert!(svg.contains("stop-opacity=\"0.35\""));
        assert!(svg.contains("<clipPath id=\"avatar-clip\"><circle cx=\"184.00\""));
    }

    #[test]
    fn stroke_only_circles_disable_fill_and_carry_dashes() {
        let theme = Theme::midnight();
        let mut scene = empty_scene();
        scene.nodes.push(Primitive::Circle {
            cx: 62.0,
            cy: 78.0,
            r: 42.0,
            fill: None,
            stroke: Some(StrokeStyle {
                color: "#ffffff".to_string(),
                width: 8.0,
                dasharray: Some(263.89),
                dashoffset: Some(131.95),
                round_cap: true,
            }),
            transform: Some("rotate(-90 62.00 78.00)".to_string()),
        });
        let svg = render_svg(&scene, &theme);
        assert!(svg.contains("fill=\"none\" stroke=\"#ffffff\" stroke-width=\"8\""));
        assert!(svg.contains("stroke-dasharray=\"263.89\""));
        assert!(svg.contains("stroke-dashoffset=\"131.95\""));
        assert!(svg.contains("stroke-linecap=\"round\""));
        assert!(svg.contains("transform=\"rotate(-90 62.00 78.00)\""));
    }

    #[test]
    fn images_reference_their_clip() {
        let theme = Theme::midnight();
        let mut scene = empty_scene();
        scene.nodes.push(Primitive::Image {
            x: 136.0,
            y: 40.0,
            width: 96.0,
            height: 96.0,
            href: "data:image/png;base64,AAAA".to_string(),
            clip_path: Some("avatar-clip".to_string()),
        });
        let svg = render_svg(&scene, &theme);
        assert!(svg.contains("<image x=\"136.00\""));
        assert!(svg.contains("preserveAspectRatio=\"xMidYMid slice\""));
        assert!(svg.contains("clip-path=\"url(#avatar-clip)\""));
    }
}
