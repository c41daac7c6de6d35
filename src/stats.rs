use crate::theme::Theme;

const FALLBACK_COLOR: &str = "#cccccc";

/// Snapshot of one profile, produced by the fetch layer (or zeroed when the
/// API is unreachable) and consumed read-only by the layout engine.
#[derive(Debug, Clone)]
pub struct ProfileStats {
    pub login: String,
    pub display_name: String,
    pub bio: String,
    pub public_repos: u64,
    pub total_stars: u64,
    pub total_forks: u64,
    pub followers: u64,
    pub avatar: Option<Vec<u8>>,
}

impl ProfileStats {
    pub fn zeroed(login: &str) -> Self {
        Self {
            login: login.to_string(),
            display_name: login.to_string(),
            bio: String::new(),
            public_repos: 0,
            total_stars: 0,
            total_forks: 0,
            followers: 0,
            avatar: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LanguageShare {
    pub name: String,
    pub percent: f32,
    pub color: String,
}

/// Ranks raw per-repository language labels into at most `max_entries`
/// shares plus one synthetic "Others" remainder. Absent labels are
/// discarded before counting; an empty count yields an empty list. The
/// "Others" percent is the remainder against 100 and may go non-positive
/// when upstream counts disagree; renderers hide such entries instead of
/// failing.
pub fn summarize_languages(
    labels: &[Option<String>],
    max_entries: usize,
    theme: &Theme,
) -> Vec<LanguageShare> {
    let mut counts: Vec<(String, u64)> = Vec::new();
    let mut total: u64 = 0;
    for label in labels.iter().flatten() {
        if label.is_empty() {
            continue;
        }
        total += 1;
        match counts.iter_mut().find(|(name, _)| name == label) {
            Some((_, count)) => *count += 1,
            None => counts.push((label.clone(), 1)),
        }
    }
    if total == 0 {
        return Vec::new();
    }

    let distinct = counts.len();
    // Vec::sort_by is stable, so equal counts keep first-seen order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(max_entries);

    let mut shares: Vec<LanguageShare> = counts
        .into_iter()
        .enumerate()
        .map(|(idx, (name, count))| LanguageShare {
            name,
            percent: count as f32 / total as f32 * 100.0,
            color: palette_color(&theme.palette, idx),
        })
        .collect();

    if distinct > max_entries {
        let kept: f32 = shares.iter().map(|share| share.percent).sum();
        shares.push(LanguageShare {
            name: "Others".to_string(),
            percent: 100.0 - kept,
            color: theme.others_color.clone(),
        });
    }
    shares
}

fn palette_color(palette: &[String], idx: usize) -> String {
    if palette.is_empty() {
        return FALLBACK_COLOR.to_string();
    }
    palette[idx % palette.len()].clone()
}

/// Compact display form for metric values: 1200 -> "1.2k", 120 -> "120".
pub fn format_count(value: u64) -> String {
    if value >= 1_000_000 {
        trim_decimal(value as f64 / 1_000_000.0, "m")
    } else if value >= 1_000 {
        trim_decimal(value as f64 / 1_000.0, "k")
    } else {
        value.to_string()
    }
}

fn trim_decimal(scaled: f64, suffix: &str) -> String {
    let text = format!("{scaled:.1}");
    let text = text.strip_suffix(".0").unwrap_or(&text);
    format!("{text}{suffix}")
}
