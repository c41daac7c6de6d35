//! In-memory drawing model produced by the card layout engine and
//! serialized once by `render::render_svg`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Debug, Clone)]
pub struct TextNode {
    pub x: f32,
    pub y: f32,
    pub content: String,
    pub class: String,
    pub font_size: f32,
    pub bold: bool,
    pub anchor: TextAnchor,
    pub fill: Option<String>,
}

impl Default for TextNode {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            content: String::new(),
            class: "text".to_string(),
            font_size: 12.0,
            bold: false,
            anchor: TextAnchor::Start,
            fill: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StrokeStyle {
    pub color: String,
    pub width: f32,
    pub dasharray: Option<f32>,
    pub dashoffset: Option<f32>,
    pub round_cap: bool,
}

impl StrokeStyle {
    pub fn plain(color: impl Into<String>, width: f32) -> Self {
        Self {
            color: color.into(),
            width,
            dasharray: None,
            dashoffset: None,
            round_cap: false,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Primitive {
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        rx: f32,
        fill: Option<String>,
        class: Option<String>,
        opacity: Option<f32>,
    },
    Circle {
        cx: f32,
        cy: f32,
        r: f32,
        fill: Option<String>,
        stroke: Option<StrokeStyle>,
        transform: Option<String>,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        stroke: String,
        stroke_width: f32,
    },
    Path {
        d: String,
        fill: Option<String>,
        stroke: Option<StrokeStyle>,
        opacity: Option<f32>,
    },
    Text(TextNode),
    Image {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        href: String,
        clip_path: Option<String>,
    },
    Group {
        tx: f32,
        ty: f32,
        children: Vec<Primitive>,
    },
}

/// Vertical fade applied to sparkline area fills.
#[derive(Debug, Clone)]
pub struct LinearGradient {
    pub id: String,
    pub color: String,
    pub start_opacity: f32,
    pub end_opacity: f32,
}

#[derive(Debug, Clone)]
pub struct CircleClip {
    pub id: String,
    pub cx: f32,
    pub cy: f32,
    pub r: f32,
}

#[derive(Debug, Clone)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    pub corner_radius: f32,
    pub gradients: Vec<LinearGradient>,
    pub clips: Vec<CircleClip>,
    pub nodes: Vec<Primitive>,
}

impl Scene {
    pub fn new(width: f32, height: f32, corner_radius: f32) -> Self {
        Self {
            width,
            height,
            corner_radius,
            gradients: Vec::new(),
            clips: Vec::new(),
            nodes: Vec::new(),
        }
    }
}
