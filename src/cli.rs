use crate::cards::{RenderContext, compute_scene, language_cap};
use crate::config::{LayoutVariant, load_config};
use crate::fetch::{ProfileClient, load_avatar};
use crate::render::{render_svg, write_output_svg};
use crate::stats::{ProfileStats, summarize_languages};
use anyhow::Result;
use chrono::Local;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[cfg(feature = "png")]
use crate::render::write_output_png;

#[derive(Parser, Debug)]
#[command(name = "statboard", version, about = "Profile stats card generator")]
pub struct Args {
    /// GitHub login to render
    #[arg(short = 'u', long = "user")]
    pub user: String,

    /// Output file (svg/png). Defaults to stdout for SVG if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "svg")]
    pub output_format: OutputFormat,

    /// Config JSON file
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Layout variant, overriding the config file
    #[arg(short = 'v', long = "variant", value_enum)]
    pub variant: Option<LayoutVariant>,

    /// Local image file embedded into the identity card
    #[arg(long = "avatar")]
    pub avatar: Option<PathBuf>,

    /// Fixed seed for the decorative randomness (defaults to today's date)
    #[arg(long = "seed")]
    pub seed: Option<u64>,

    /// Skip the API entirely and render a zeroed snapshot
    #[arg(long = "offline")]
    pub offline: bool,

    /// API token for authenticated requests
    #[arg(long = "token", env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Svg,
    Png,
}

pub fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut config = load_config(args.config.as_deref())?;
    if let Some(variant) = args.variant {
        config.layout.variant = variant;
    }

    let (mut stats, labels) = if args.offline {
        (ProfileStats::zeroed(&args.user), Vec::new())
    } else {
        fetch_or_zeroed(&args.user, args.token.clone())
    };

    if let Some(path) = &args.avatar {
        match load_avatar(path) {
            Ok(bytes) => stats.avatar = Some(bytes),
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "could not read avatar, skipping it");
            }
        }
    }

    let shares = summarize_languages(&labels, language_cap(&config), &config.theme);
    let mut ctx = RenderContext::for_timestamp(Local::now().naive_local());
    if let Some(seed) = args.seed {
        ctx = ctx.with_seed(seed);
    }

    let scene = compute_scene(&stats, &shares, &config, &ctx);
    let svg = render_svg(&scene, &config.theme);

    match args.output_format {
        OutputFormat::Svg => {
            write_output_svg(&svg, args.output.as_deref())?;
        }
        OutputFormat::Png => {
            #[cfg(feature = "png")]
            {
                let output = args
                    .output
                    .as_deref()
                    .ok_or_else(|| anyhow::anyhow!("Output path required for png output"))?;
                write_output_png(&svg, output, &config.render)?;
            }
            #[cfg(not(feature = "png"))]
            return Err(anyhow::anyhow!("png support is not compiled in"));
        }
    }

    Ok(())
}

fn fetch_or_zeroed(login: &str, token: Option<String>) -> (ProfileStats, Vec<Option<String>>) {
    let attempt = ProfileClient::new(token).and_then(|client| client.fetch_profile(login));
    match attempt {
        Ok(profile) => profile,
        Err(err) => {
            tracing::warn!(%err, "profile fetch failed, falling back to zeroed stats");
            (ProfileStats::zeroed(login), Vec::new())
        }
    }
}
