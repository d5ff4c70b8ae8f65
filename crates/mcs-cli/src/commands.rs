//! Subcommand bodies: build the platform paths, call into the core, render.

use anyhow::{Result, anyhow};
use tracing::info_span;

use mcs_ingest::PlatformPaths;
use mcs_model::{SortOrder, ViewKind};
use mcs_view::{
    ChannelView, DashboardLoad, DiskStore, Selection, ViewResolver, clock_line, load_dashboard,
};

use crate::cli::{ChannelArgs, ChannelsArgs, Cli, LogsArgs};
use crate::render;

/// Platform roots: env-derived defaults, overridden by explicit flags.
fn platform_paths(cli: &Cli) -> PlatformPaths {
    let mut paths = PlatformPaths::from_env();
    if let Some(dir) = &cli.config_root {
        paths.config_root = dir.clone();
    }
    if let Some(dir) = &cli.music_root {
        paths.music_root = dir.clone();
    }
    if let Some(dir) = &cli.log_dir {
        paths.log_dir = dir.clone();
    }
    paths
}

pub fn run_status(cli: &Cli) -> Result<()> {
    let paths = platform_paths(cli);
    let load = load_dashboard(&paths);
    println!("{}", clock_line(chrono::Local::now()));
    match &load {
        DashboardLoad::NotConfigured { base } => {
            println!("No configuration snapshot found under {}.", base.display());
            println!("The platform has not exported a configuration yet.");
        }
        DashboardLoad::MissingFile { snapshot, path } => {
            print_snapshot_line(snapshot);
            println!("Configuration document missing: {}", path.display());
        }
        DashboardLoad::Malformed {
            snapshot,
            path,
            error,
            ..
        } => {
            print_snapshot_line(snapshot);
            println!("Document: {}", path.display());
            println!("error: {error}");
            println!("Use `mcs raw` to inspect the document text.");
        }
        DashboardLoad::Loaded {
            snapshot,
            path,
            outline,
            ..
        } => {
            print_snapshot_line(snapshot);
            println!("Document: {}", path.display());
            println!();
            print!("{outline}");
        }
    }
    Ok(())
}

fn print_snapshot_line(snapshot: &mcs_ingest::SnapshotStamp) {
    println!("Latest config folder: {} ({})", snapshot.name, snapshot.display());
}

pub fn run_raw(cli: &Cli) -> Result<()> {
    let paths = platform_paths(cli);
    match load_dashboard(&paths) {
        DashboardLoad::NotConfigured { base } => Err(anyhow!(
            "no configuration snapshot found under {}",
            base.display()
        )),
        DashboardLoad::MissingFile { path, .. } => Err(anyhow!(
            "configuration document missing: {}",
            path.display()
        )),
        DashboardLoad::Malformed { raw, .. } | DashboardLoad::Loaded { raw, .. } => {
            print!("{raw}");
            Ok(())
        }
    }
}

pub fn run_channels(cli: &Cli, args: &ChannelsArgs) -> Result<()> {
    let paths = platform_paths(cli);
    match load_dashboard(&paths) {
        DashboardLoad::Loaded { model, .. } => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&model.channels)?);
            } else {
                render::print_channels(&model);
            }
            Ok(())
        }
        DashboardLoad::NotConfigured { base } => Err(anyhow!(
            "no configuration snapshot found under {}",
            base.display()
        )),
        DashboardLoad::MissingFile { path, .. } => Err(anyhow!(
            "configuration document missing: {}",
            path.display()
        )),
        DashboardLoad::Malformed { error, .. } => Err(anyhow!("{error}")),
    }
}

pub fn run_schedules(cli: &Cli, args: &ChannelArgs) -> Result<()> {
    let span = info_span!("schedules", channel = args.channel);
    let _guard = span.enter();
    let mut resolver = ViewResolver::new(DiskStore::new(platform_paths(cli)));
    let Selection::View(ChannelView::Music(music)) =
        resolver.select(args.channel, ViewKind::MusicSchedules)
    else {
        return Err(anyhow!("music view did not resolve"));
    };
    if args.json {
        println!("{}", serde_json::to_string_pretty(&music)?);
    } else {
        render::print_music(args.channel, &music);
    }
    Ok(())
}

pub fn run_overrides(cli: &Cli, args: &ChannelArgs) -> Result<()> {
    let span = info_span!("overrides", channel = args.channel);
    let _guard = span.enter();
    let mut resolver = ViewResolver::new(DiskStore::new(platform_paths(cli)));
    let Selection::View(ChannelView::Overrides(view)) =
        resolver.select(args.channel, ViewKind::OverridingSchedules)
    else {
        return Err(anyhow!("override view did not resolve"));
    };
    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        render::print_override(args.channel, &view);
    }
    Ok(())
}

pub fn run_logs(cli: &Cli, args: &LogsArgs) -> Result<()> {
    let span = info_span!("logs", channel = args.channel);
    let _guard = span.enter();
    let mut resolver = ViewResolver::new(DiskStore::new(platform_paths(cli)));
    if args.ascending {
        resolver.set_log_order(SortOrder::Ascending);
    }
    let Selection::View(ChannelView::Logs(view)) = resolver.select(args.channel, ViewKind::Logs)
    else {
        return Err(anyhow!("logs view did not resolve"));
    };
    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        render::print_logs(args.channel, &view);
    }
    Ok(())
}
