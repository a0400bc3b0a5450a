//! Block Breaker entry point
//!
//! Headless runner: plays one round with the autopilot, one tick per frame,
//! and reports the result.
//!
//! Usage: `block-breaker [settings.json] [--frame out.ppm] [--json]`

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use block_breaker::renderer::Framebuffer;
use block_breaker::sim::RoundResult;
use block_breaker::{Autopilot, GameView, Settings, SoundCue};
use serde::Serialize;

#[derive(Debug, Default)]
struct Args {
    settings: Option<PathBuf>,
    frame: Option<PathBuf>,
    json: bool,
}

fn parse_args() -> Args {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => args.json = true,
            "--frame" => match iter.next() {
                Some(path) => args.frame = Some(PathBuf::from(path)),
                None => log::warn!("--frame needs a path, ignoring"),
            },
            _ if args.settings.is_none() => args.settings = Some(PathBuf::from(arg)),
            _ => log::warn!("Ignoring extra argument {arg}"),
        }
    }
    args
}

/// Outcome printed at the end of a run
#[derive(Debug, Serialize)]
struct Summary {
    result: RoundResult,
    message: String,
    score: u64,
    frames: u64,
    blocks_left: usize,
    paddle_cues: u64,
    block_cues: u64,
}

fn main() {
    env_logger::init();
    log::info!("Block Breaker (headless) starting...");

    let args = parse_args();
    let settings = match &args.settings {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };

    let mut view = GameView::with_layout(settings.arena(), &settings.layout);
    let mut audio = settings.audio();
    let pilot = Autopilot::default();

    let mut frames = 0;
    while view.is_visible() && frames < settings.max_frames {
        let keys = pilot.keys(view.state());
        view.apply_input(&keys);
        view.update(&mut audio);
        frames += 1;
    }

    if view.is_visible() {
        log::warn!("Stopped after {} frames with the round still in play", frames);
    }

    if let Some(path) = &args.frame {
        let arena = view.state().arena;
        let mut fb = Framebuffer::new(arena.width as usize, arena.height as usize);
        view.draw(&mut fb);
        let written = File::create(path).and_then(|f| fb.write_ppm(&mut BufWriter::new(f)));
        match written {
            Ok(()) => log::info!("Wrote final frame to {}", path.display()),
            Err(e) => log::error!("Failed to write {}: {e}", path.display()),
        }
    }

    let state = view.state();
    let summary = Summary {
        result: state.result,
        message: view.result_message().to_string(),
        score: state.score.value(),
        frames,
        blocks_left: state.active_block_count(),
        paddle_cues: audio.play_count(SoundCue::PaddleHit),
        block_cues: audio.play_count(SoundCue::BlockHit),
    };

    if args.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Failed to encode summary: {e}"),
        }
    } else {
        let message = if summary.message.is_empty() {
            "still playing"
        } else {
            summary.message.as_str()
        };
        println!("{} - score {} after {} frames", message, summary.score, summary.frames);
    }
}

