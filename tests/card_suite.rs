use chrono::{NaiveDate, NaiveDateTime};

use statboard::charts::donut_slices;
use statboard::{
    Config, LanguageShare, LayoutVariant, ProfileStats, RenderContext, Theme, VariantLayout,
    compute_scene, language_cap, render_svg, summarize_languages,
};

fn assert_valid_svg(svg: &str, label: &str) {
    assert!(svg.contains("<svg"), "{label}: missing <svg tag");
    assert!(svg.contains("</svg>"), "{label}: missing </svg tag");
    assert_eq!(
        svg.matches("<g ").count(),
        svg.matches("</g>").count(),
        "{label}: unbalanced group tags"
    );
}

fn test_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 14)
        .expect("valid date")
        .and_hms_opt(9, 30, 0)
        .expect("valid time")
}

fn test_context() -> RenderContext {
    RenderContext::for_timestamp(test_time()).with_seed(7)
}

fn sample_stats() -> ProfileStats {
    let mut stats = ProfileStats::zeroed("mel");
    stats.display_name = "Mel".to_string();
    stats.bio = "Full Stack Developer".to_string();
    stats.public_repos = 35;
    stats.total_stars = 120;
    stats.total_forks = 40;
    stats
}

fn config_for(variant: LayoutVariant) -> Config {
    let mut config = Config::default();
    config.layout.variant = variant;
    config
}

fn language_labels() -> Vec<Option<String>> {
    ["Rust", "Rust", "Rust", "Go", "Go", "TypeScript", "Shell"]
        .iter()
        .map(|name| Some(name.to_string()))
        .collect()
}

/// Donut wedges are the only primitives serialized with an arc command,
/// so counting " A " path segments counts wedges.
fn count_arc_paths(svg: &str) -> usize {
    svg.split("<path")
        .skip(1)
        .filter(|chunk| {
            let end = chunk.find("/>").unwrap_or(chunk.len());
            chunk[..end].contains(" A ")
        })
        .count()
}

#[test]
fn every_variant_renders_with_its_declared_canvas() {
    let stats = sample_stats();
    let expectations = [
        (LayoutVariant::Compact, "840", "400"),
        (LayoutVariant::Wide, "800", "450"),
        (LayoutVariant::Bento, "1000", "600"),
        (LayoutVariant::Tall, "1000", "850"),
    ];
    for (variant, width, height) in expectations {
        let config = config_for(variant);
        let shares = summarize_languages(&language_labels(), language_cap(&config), &config.theme);
        let scene = compute_scene(&stats, &shares, &config, &test_context());
        let svg = render_svg(&scene, &config.theme);
        assert_valid_svg(&svg, &format!("{variant:?}"));
        assert!(
            svg.starts_with(&format!("<svg width=\"{width}\" height=\"{height}\"")),
            "{variant:?}: wrong canvas declaration"
        );
    }
}

#[test]
fn zero_language_profile_renders_counts_and_no_wedges() {
    let stats = sample_stats();
    for variant in [LayoutVariant::Wide, LayoutVariant::Bento] {
        let config = config_for(variant);
        let shares = summarize_languages(&[], language_cap(&config), &config.theme);
        assert!(shares.is_empty());
        let scene = compute_scene(&stats, &shares, &config, &test_context());
        let svg = render_svg(&scene, &config.theme);
        assert_valid_svg(&svg, "zero-languages");
        assert!(svg.contains(">35<"), "{variant:?}: repository count missing");
        assert!(svg.contains(">120<"), "{variant:?}: star count missing");
        assert!(svg.contains("No language data"), "{variant:?}: empty note missing");
        assert_eq!(count_arc_paths(&svg), 0, "{variant:?}: unexpected donut wedges");
    }
}

#[test]
fn overflow_languages_fold_into_others_and_tile_the_donut() {
    let theme = Theme::midnight();
    let mut labels: Vec<Option<String>> = Vec::new();
    labels.extend(std::iter::repeat_with(|| Some("Python".to_string())).take(6));
    labels.push(None);
    for name in ["Go", "Shell", "Go", "Shell"] {
        labels.push(Some(name.to_string()));
    }

    let shares = summarize_languages(&labels, 2, &theme);
    let names: Vec<&str> = shares.iter().map(|share| share.name.as_str()).collect();
    assert_eq!(names, ["Python", "Go", "Others"]);
    assert!((shares[0].percent - 60.0).abs() < 1e-3);
    assert!((shares[1].percent - 20.0).abs() < 1e-3);
    assert!((shares[2].percent - 20.0).abs() < 1e-3);
    assert_eq!(shares[0].color, theme.palette[0]);
    assert_eq!(shares[1].color, theme.palette[1]);
    assert_eq!(shares[2].color, theme.others_color);

    let slices = donut_slices(&shares);
    assert!((slices[0].end_angle - 216.0).abs() < 1e-3);
    assert!((slices[1].end_angle - 288.0).abs() < 1e-3);
    assert!((slices[2].end_angle - 360.0).abs() < 1e-3);
    for pair in slices.windows(2) {
        assert!((pair[0].end_angle - pair[1].start_angle).abs() < 1e-4);
    }

    let mut config = config_for(LayoutVariant::Bento);
    config.layout.max_languages = Some(2);
    let scene = compute_scene(&sample_stats(), &shares, &config, &test_context());
    let svg = render_svg(&scene, &config.theme);
    assert_valid_svg(&svg, "overflow-donut");
    assert_eq!(count_arc_paths(&svg), 3);
    assert!(svg.contains(">60%<"));
    assert!(svg.contains(">Others<"));
}

#[test]
fn avatar_bytes_control_image_embedding() {
    let config = config_for(LayoutVariant::Bento);
    let ctx = test_context();
    let mut stats = sample_stats();

    stats.avatar = None;
    let svg = render_svg(&compute_scene(&stats, &[], &config, &ctx), &config.theme);
    assert!(
        !svg.contains("<image"),
        "document must carry no image reference without avatar bytes"
    );

    stats.avatar = Some(vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a]);
    let svg = render_svg(&compute_scene(&stats, &[], &config, &ctx), &config.theme);
    assert!(svg.contains("<image"));
    assert!(svg.contains("data:image/png;base64,"));
    assert!(svg.contains("clip-path=\"url(#avatar-clip)\""));

    stats.avatar = Some(vec![0xff, 0xd8, 0xff, 0xe0]);
    let svg = render_svg(&compute_scene(&stats, &[], &config, &ctx), &config.theme);
    assert!(svg.contains("data:image/jpeg;base64,"));
}

#[test]
fn clock_cards_show_the_render_time() {
    let bento = config_for(LayoutVariant::Bento);
    let svg = render_svg(&compute_scene(&sample_stats(), &[], &bento, &test_context()), &bento.theme);
    assert!(svg.contains(">09:30<"), "ring label missing");
    assert!(svg.contains(">Mar 14<"));
    assert!(svg.contains(">Saturday<"));

    let tall = config_for(LayoutVariant::Tall);
    let svg = render_svg(&compute_scene(&sample_stats(), &[], &tall, &test_context()), &tall.theme);
    assert!(svg.contains(">Saturday, Mar 14<"));
    assert!(svg.contains(">Day 73 of 2026<"));
}

#[test]
fn same_context_renders_identical_documents() {
    let config = config_for(LayoutVariant::Wide);
    let stats = sample_stats();
    let shares = summarize_languages(&language_labels(), language_cap(&config), &config.theme);

    let first = render_svg(&compute_scene(&stats, &shares, &config, &test_context()), &config.theme);
    let second = render_svg(&compute_scene(&stats, &shares, &config, &test_context()), &config.theme);
    assert_eq!(first, second);

    let reseeded = test_context().with_seed(8);
    let third = render_svg(&compute_scene(&stats, &shares, &config, &reseeded), &config.theme);
    assert_ne!(first, third, "the activity grid must follow the seed");
}

#[test]
fn card_tables_do_not_overlap() {
    for variant in [
        LayoutVariant::Compact,
        LayoutVariant::Wide,
        LayoutVariant::Bento,
        LayoutVariant::Tall,
    ] {
        let layout = VariantLayout::for_variant(variant);
        for (idx, a) in layout.cards.iter().enumerate() {
            for b in layout.cards.iter().skip(idx + 1) {
                let disjoint = a.x + a.width <= b.x
                    || b.x + b.width <= a.x
                    || a.y + a.height <= b.y
                    || b.y + b.height <= a.y;
                assert!(disjoint, "{variant:?}: {:?} overlaps {:?}", a.id, b.id);
            }
        }
    }
}

#[test]
fn language_cap_prefers_the_explicit_override() {
    let mut config = config_for(LayoutVariant::Bento);
    assert_eq!(language_cap(&config), 6);
    config.layout.max_languages = Some(2);
    assert_eq!(language_cap(&config), 2);
    assert_eq!(language_cap(&config_for(LayoutVariant::Compact)), 4);
    assert_eq!(language_cap(&config_for(LayoutVariant::Wide)), 5);
}

#[test]
fn degenerate_others_remainder_still_renders() {
    let theme = Theme::midnight();
    let shares = vec![
        LanguageShare { name: "A".to_string(), percent: 70.0, color: theme.palette[0].clone() },
        LanguageShare { name: "B".to_string(), percent: 40.0, color: theme.palette[1].clone() },
        LanguageShare { name: "Others".to_string(), percent: -10.0, color: theme.others_color.clone() },
    ];
    for variant in [LayoutVariant::Wide, LayoutVariant::Tall] {
        let config = config_for(variant);
        let scene = compute_scene(&sample_stats(), &shares, &config, &test_context());
        let svg = render_svg(&scene, &config.theme);
        assert_valid_svg(&svg, "degenerate-others");
    }
}
