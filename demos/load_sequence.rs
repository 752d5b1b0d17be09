//! Load a TUM RGB-D sequence and walk its associated frames
//!
//! Usage:
//!   cargo run --example load_sequence -- <dataset_dir | config.json> [max_frames]

use std::error::Error;
use std::path::PathBuf;
use tracing::info;
use tum_rgbd::{CameraStream, ReaderConfig, TumReader, TumStream};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let source = args
        .next()
        .map(PathBuf::from)
        .ok_or("Please provide a dataset directory or a JSON config")?;
    let max_frames: usize = match args.next() {
        Some(n) => n.parse()?,
        None => usize::MAX,
    };

    let config = if source.extension().is_some_and(|ext| ext == "json") {
        ReaderConfig::from_json_file(&source)?
    } else {
        ReaderConfig::new(source)
    };

    let reader = TumReader::open(config)?;
    info!(
        "{} frames, valid range {:.2}..{:.2} m",
        reader.len(),
        reader.min_range(),
        reader.max_range()
    );

    let mut stream = TumStream::new(reader);
    if let Some(rate) = stream.frame_rate() {
        info!("Estimated frame rate: {:.1} Hz", rate);
    }

    let mut path_length = 0.0;
    let mut previous: Option<glam::Vec3> = None;

    while let Some(frame) = stream.next_frame()? {
        if frame.index > max_frames {
            break;
        }

        let (width, height) = frame.dimensions();
        let valid = frame
            .depth
            .pixels()
            .filter(|p| p.0[0] > 0.0)
            .count();

        if let Some(prev) = previous {
            path_length += prev.distance(frame.translation);
        }
        previous = Some(frame.translation);

        info!(
            "frame {:>5} t={:.6} {}x{} valid depth {:>6} position {:?}",
            frame.index, frame.timestamp, width, height, valid, frame.translation
        );
    }

    info!("Trajectory length: {:.3} m", path_length);
    Ok(())
}
