use std::collections::VecDeque;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::RgbaImage;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::events::{BatchFailure, BatchOutcome, DecodedImage};
use crate::tone::{RgbaFrame, SamplerOptions, ToneAnalysis, classify_image};

// Decodes an image to RGBA8 and applies EXIF orientation if available, so a
// portrait shot from a phone is sampled upright. Missing metadata keeps the
// stored orientation.
pub fn decode_rgba8_apply_exif(path: &Path) -> Result<RgbaImage> {
    let img = image::ImageReader::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?
        .with_guessed_format()?
        .decode()
        .with_context(|| format!("failed to decode {}", path.display()))?;

    let img = img.to_rgba8();
    let orientation: u16 = read_orientation(path).unwrap_or(1);
    Ok(apply_orientation(img, orientation))
}

pub fn apply_orientation(img: RgbaImage, orientation: u16) -> RgbaImage {
    use image::imageops::{flip_horizontal, flip_vertical, rotate90, rotate180, rotate270};
    match orientation {
        2 => flip_horizontal(&img),
        3 => rotate180(&img),
        4 => flip_vertical(&img),
        // transpose: rotate90 + flip_horizontal
        5 => flip_horizontal(&rotate90(&img)),
        6 => rotate90(&img),
        // transverse: rotate270 + flip_horizontal
        7 => flip_horizontal(&rotate270(&img)),
        8 => rotate270(&img),
        _ => img,
    }
}

fn read_orientation(path: &Path) -> Option<u16> {
    let file = File::open(path).ok()?;
    let mut buf = BufReader::new(file);
    let exif = exif::Reader::new().read_from_container(&mut buf).ok()?;
    let field = exif.get_field(exif::Tag::Orientation, exif::In::PRIMARY)?;
    let o = field.value.get_uint(0)? as u16;
    debug!("exif orientation {} for {}", o, path.display());
    Some(o)
}

pub fn load_image(path: &Path) -> Result<DecodedImage> {
    let image = decode_rgba8_apply_exif(path)?;
    Ok(DecodedImage {
        path: path.to_path_buf(),
        frame: RgbaFrame::from(image),
    })
}

/// [`load_image`] on the blocking pool, keeping decode work off the runtime
/// threads.
pub async fn decode_off_thread(path: PathBuf) -> Result<DecodedImage> {
    tokio::task::spawn_blocking(move || load_image(&path))
        .await
        .context("decode task failed")?
}

/// Decodes `paths` on blocking threads, at most `max_in_flight` at a time,
/// and classifies each image once its buffer is complete. Every path gets
/// exactly one outcome, in input order.
pub async fn analyze_batch(
    paths: Vec<PathBuf>,
    max_in_flight: usize,
    sampler: SamplerOptions,
) -> Vec<BatchOutcome> {
    let max_in_flight = max_in_flight.max(1);
    let mut queue: VecDeque<(usize, PathBuf)> = paths.iter().cloned().enumerate().collect();
    let mut results: Vec<Option<Result<ToneAnalysis, BatchFailure>>> = vec![None; paths.len()];
    let mut tasks: JoinSet<(usize, PathBuf, Result<DecodedImage, String>)> = JoinSet::new();

    loop {
        while tasks.len() < max_in_flight {
            let Some((idx, path)) = queue.pop_front() else {
                break;
            };
            tasks.spawn(async move {
                let p = path.clone();
                let res = tokio::task::spawn_blocking(move || load_image(&p)).await;
                let decoded = match res {
                    Ok(Ok(decoded)) => Ok(decoded),
                    Ok(Err(err)) => Err(format!("{err:#}")),
                    Err(err) => Err(format!("decode task failed: {err}")),
                };
                (idx, path, decoded)
            });
        }

        let Some(joined) = tasks.join_next().await else {
            break;
        };
        let (idx, path, decoded) = match joined {
            Ok(done) => done,
            Err(err) => {
                // The slot stays empty and is reported by `collect_outcomes`.
                warn!("batch task failed: {err}");
                continue;
            }
        };

        let result = match decoded {
            Ok(DecodedImage { frame, .. }) => {
                classify_image(&frame, &sampler).map_err(|_| BatchFailure::NoSkinDetected)
            }
            Err(reason) => {
                warn!(path = %path.display(), %reason, "skipping undecodable image");
                Err(BatchFailure::Decode(reason))
            }
        };
        debug!(path = %path.display(), ok = result.is_ok(), "batch item finished");
        results[idx] = Some(result);
    }

    collect_outcomes(paths, results)
}

// One outcome per input path; a slot whose task never reported back counts
// as a decode failure.
fn collect_outcomes(
    paths: Vec<PathBuf>,
    results: Vec<Option<Result<ToneAnalysis, BatchFailure>>>,
) -> Vec<BatchOutcome> {
    paths
        .into_iter()
        .zip(results)
        .map(|(path, result)| BatchOutcome {
            path,
            result: result.unwrap_or_else(|| {
                Err(BatchFailure::Decode("decode task did not complete".into()))
            }),
        })
        .collect()
}
