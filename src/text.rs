//! Approximate text measurement. Output text is styled by whatever font the
//! viewer resolves, so widths only need to be good enough for truncation and
//! wrapping decisions, not for exact glyph placement.

pub fn char_width_factor(ch: char) -> f32 {
    match ch {
        'i' | 'j' | 'l' | '!' | '.' | ',' | ':' | ';' | '\'' | '|' => 0.30,
        'f' | 't' | 'r' | 'I' | '(' | ')' | '[' | ']' | '-' | '/' | ' ' => 0.38,
        'm' | 'w' | 'M' | 'W' | '@' | '%' => 0.85,
        'A'..='Z' | '0'..='9' => 0.64,
        _ => 0.52,
    }
}

pub fn text_width(text: &str, font_size: f32) -> f32 {
    text.chars().map(char_width_factor).sum::<f32>() * font_size
}

pub fn truncate_to_width(text: &str, font_size: f32, max_width: f32) -> String {
    if text_width(text, font_size) <= max_width {
        return text.to_string();
    }
    let ellipsis = char_width_factor('…') * font_size;
    let mut kept = String::new();
    let mut used = 0.0;
    for ch in text.chars() {
        let width = char_width_factor(ch) * font_size;
        if used + width + ellipsis > max_width {
            break;
        }
        used += width;
        kept.push(ch);
    }
    while kept.ends_with(' ') {
        kept.pop();
    }
    kept.push('…');
    kept
}

pub fn wrap_to_width(text: &str, font_size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if text_width(&candidate, font_size) <= max_width || current.is_empty() {
            current = candidate;
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wider_strings_measure_wider() {
        assert!(text_width("mmmm", 12.0) > text_width("iiii", 12.0));
        assert!(text_width("abcdef", 12.0) > text_width("abc", 12.0));
    }

    #[test]
    fn truncate_keeps_short_text_unchanged() {
        assert_eq!(truncate_to_width("Rust", 12.0, 200.0), "Rust");
    }

    #[test]
    fn truncate_stays_inside_the_limit() {
        let out = truncate_to_width("a very long display name indeed", 14.0, 80.0);
        assert!(out.ends_with('…'));
        assert!(text_width(&out, 14.0) <= 80.0);
    }

    #[test]
    fn wrap_respects_width_and_keeps_words() {
        let lines = wrap_to_width("builds profile cards on a schedule", 12.0, 90.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(!line.is_empty());
        }
        let joined = lines.join(" ");
        assert_eq!(joined, "builds profile cards on a schedule");
    }

    #[test]
    fn wrap_places_oversized_words_alone() {
        let lines = wrap_to_width("supercalifragilistic no", 12.0, 30.0);
        assert_eq!(lines[0], "supercalifragilistic");
    }

    #[test]
    fn wrap_empty_is_empty() {
        assert!(wrap_to_width("", 12.0, 100.0).is_empty());
    }
}
