use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub font_family: String,
    pub background: String,
    pub card_background: String,
    pub card_border: String,
    pub text_color: String,
    pub dim_text_color: String,
    pub accent_color: String,
    pub bar_track_color: String,
    pub others_color: String,
    pub palette: Vec<String>,
}

impl Theme {
    pub fn midnight() -> Self {
        Self {
            font_family:
                "-apple-system, BlinkMacSystemFont, \"Segoe UI\", Helvetica, Arial, sans-serif"
                    .to_string(),
            background: "#0d1117".to_string(),
            card_background: "#161b22".to_string(),
            card_border: "#30363d".to_string(),
            text_color: "#ffffff".to_string(),
            dim_text_color: "#8b949e".to_string(),
            accent_color: "#ffffff".to_string(),
            bar_track_color: "#21262d".to_string(),
            others_color: "#8b949e".to_string(),
            palette: vec![
                "#3572A5".to_string(),
                "#f1e05a".to_string(),
                "#00ADD8".to_string(),
                "#e34c26".to_string(),
                "#563d7c".to_string(),
                "#b07219".to_string(),
            ],
        }
    }

    pub fn paper() -> Self {
        Self {
            font_family:
                "-apple-system, BlinkMacSystemFont, \"Segoe UI\", Helvetica, Arial, sans-serif"
                    .to_string(),
            background: "#ffffff".to_string(),
            card_background: "#f6f8fa".to_string(),
            card_border: "#d0d7de".to_string(),
            text_color: "#1f2328".to_string(),
            dim_text_color: "#656d76".to_string(),
            accent_color: "#0969da".to_string(),
            bar_track_color: "#eaeef2".to_string(),
            others_color: "#8c959f".to_string(),
            palette: vec![
                "#0969da".to_string(),
                "#bf8700".to_string(),
                "#1a7f37".to_string(),
                "#cf222e".to_string(),
                "#8250df".to_string(),
                "#953800".to_string(),
            ],
        }
    }
}
