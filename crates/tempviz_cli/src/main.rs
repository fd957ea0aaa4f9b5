//! Terminal front-end for the temperature sampling visualization.
//!
//! Examples:
//!   tempviz show
//!   tempviz show 0.3
//!   tempviz json 1.5
//!   tempviz sweep
//!   tempviz watch            (one temperature per stdin line)
//!   tempviz stage sft
//!   tempviz autonomy walk
//!   tempviz tabs rag prompting,rag,fine-tuning prompting,fine-tuning
//!   tempviz phrases 6
//!
//! By default it uses the five-logit demo table; override with
//! `--config path.json`.

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process;

use tempviz::lessons::{AutonomyStage, PhraseCycle, TabSet, TrainingStage};
use tempviz::prelude::*;
use tracing::error;

const CHART_WIDTH: usize = 40;
const MAX_PHRASES: usize = 1000;

fn usage() -> ! {
    eprintln!(
        "usage: tempviz [--config <path>] <command>\n\n\
         commands:\n  \
         show [temp]                 render the chart (default: slider default)\n  \
         json [temp]                 print the distribution as JSON\n  \
         sweep                       render every slider position\n  \
         watch                       re-render for each temperature read from stdin\n  \
         stage <pretrain|sft|rlhf>   list visible training layers\n  \
         autonomy <crawl|walk|run>   describe a rollout stage\n  \
         tabs <tab> <ids> [panels]   click a tab (comma-separated ids; panels default to ids)\n  \
         phrases [count]             print the rotating caption schedule"
    );
    process::exit(2);
}

fn fail(msg: &str) -> ! {
    eprintln!("{msg}");
    process::exit(1);
}

fn parse_args() -> (Option<PathBuf>, Vec<String>) {
    let mut args: Vec<String> = std::env::args().skip(1).collect();

    let mut config = None;
    if args.len() >= 2 && args[0] == "--config" {
        config = Some(PathBuf::from(&args[1]));
        args.drain(0..2);
    }

    if args.is_empty() {
        usage();
    }

    (config, args)
}

fn load_config(path: Option<PathBuf>) -> VizConfig {
    match path {
        Some(p) => VizConfig::load(&p).unwrap_or_else(|e| {
            error!("{e}");
            process::exit(1)
        }),
        None => VizConfig::default(),
    }
}

fn print_chart(frame: &Frame) {
    println!("{}", text_chart(frame, CHART_WIDTH));
}

/// Run the reactive loop: initial render, then one render per input line.
fn watch(cfg: VizConfig) -> io::Result<()> {
    let mut viz = cfg.into_viz(print_chart);
    if let Err(e) = viz.init() {
        fail(&format!("Error: {e}"));
    }

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if let Err(e) = viz.on_input(&line) {
            eprintln!("Error: {e}");
        }
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let (config_path, args) = parse_args();
    let cmd = args[0].as_str();
    let arg = args.get(1).map(String::as_str);

    match cmd {
        "show" | "json" => {
            let cfg = load_config(config_path);
            let as_json = cmd == "json";
            let mut viz = cfg.into_viz(move |frame: &Frame| {
                if as_json {
                    match serde_json::to_string_pretty(frame) {
                        Ok(s) => println!("{s}"),
                        Err(e) => fail(&format!("serialize: {e}")),
                    }
                } else {
                    print_chart(frame);
                }
            });
            let res = match arg {
                Some(raw) => viz.on_input(raw),
                None => viz.init(),
            };
            if let Err(e) = res {
                fail(&format!("Error: {e}"));
            }
        }
        "sweep" => {
            let cfg = load_config(config_path);
            let positions = cfg.slider.positions();
            let mut viz = cfg.into_viz(print_chart);
            for t in positions {
                if let Err(e) = viz.set_temperature(t) {
                    fail(&format!("Error: {e}"));
                }
            }
        }
        "watch" => {
            let cfg = load_config(config_path);
            if let Err(e) = watch(cfg) {
                fail(&format!("stdin: {e}"));
            }
        }
        "stage" => {
            let Some(raw) = arg else { usage() };
            let stage = TrainingStage::parse(raw)
                .unwrap_or_else(|| fail("stage must be pretrain|sft|rlhf"));
            for layer in stage.visible_layers() {
                println!("{:<9} {}", layer.label(), layer.display_name());
            }
        }
        "autonomy" => {
            let Some(raw) = arg else { usage() };
            let stage = AutonomyStage::parse(raw)
                .unwrap_or_else(|| fail("autonomy must be crawl|walk|run"));
            println!(
                "{}: {} [{}]",
                stage.label(),
                stage.description(),
                stage.risk().label()
            );
        }
        "tabs" => {
            if args.len() < 3 {
                usage();
            }
            let tab_ids = split_ids(&args[2]);
            let panel_ids = args.get(3).map_or_else(|| tab_ids.clone(), |p| split_ids(p));
            let mut tabs =
                TabSet::new(tab_ids, panel_ids).unwrap_or_else(|| fail("tabs must not be empty"));
            if !tabs.select(&args[1]) {
                fail(&format!("`{}` is not one of the tabs", args[1]));
            }
            for t in tabs.tabs() {
                let marker = if tabs.is_active(t) { "*" } else { " " };
                println!("{marker} {t}");
            }
            println!("panel: {}", tabs.active_panel().unwrap_or("-"));
        }
        "phrases" => {
            let mut cycle = PhraseCycle::default();
            let count = match arg {
                Some(raw) => raw
                    .parse::<usize>()
                    .unwrap_or_else(|_| fail("count must be a number")),
                None => tempviz::lessons::SELF_SUPERVISION_PHRASES.len(),
            };
            if count > MAX_PHRASES {
                fail(&format!("count must be at most {MAX_PHRASES}"));
            }
            for (at, phrase) in cycle.schedule(count) {
                println!("{:>6}ms  {phrase}", at.as_millis());
            }
        }
        _ => usage(),
    }
}

fn split_ids(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
