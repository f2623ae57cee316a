// THEORY:
// The `task` module is the async twin of `ops`. A pixel pass over a large
// image is CPU-bound work that has no business running on a cooperative
// scheduler thread, so each wrapper resolves its arguments on the calling
// task, moves the owned values into `tokio::task::spawn_blocking`, and awaits
// the same `Result` the synchronous operation returns. There is no retry or
// timeout layer here: a queued pass that is cancelled before it starts never
// runs, and a running pass goes to completion.

use image::RgbaImage;
use tokio::task;

use crate::color::ColorSpec;
use crate::error::Result;
use crate::input::ImageInput;
use crate::ops;

/// [`ops::replace_color`], run on the blocking thread pool.
pub async fn replace_color(
    img: impl Into<ImageInput>,
    from: impl Into<ColorSpec>,
    to: impl Into<ColorSpec>,
    delta_rank: u8,
) -> Result<RgbaImage> {
    let (img, from, to) = (img.into(), from.into(), to.into());
    await_blocking(task::spawn_blocking(move || {
        ops::replace_color(img, from, to, delta_rank)
    }))
    .await
}

/// [`ops::make_transparent`], run on the blocking thread pool.
pub async fn make_transparent(
    img: impl Into<ImageInput>,
    color: impl Into<ColorSpec>,
    delta_rank: u8,
) -> Result<RgbaImage> {
    let (img, color) = (img.into(), color.into());
    await_blocking(task::spawn_blocking(move || {
        ops::make_transparent(img, color, delta_rank)
    }))
    .await
}

/// Awaits a blocking-pool handle, resuming a worker panic on the awaiting
/// task so the async surface fails exactly like the sync one would.
async fn await_blocking<T>(handle: task::JoinHandle<T>) -> T {
    match handle.await {
        Ok(value) => value,
        Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
        Err(err) => panic!("blocking pixel pass was cancelled: {err}"),
    }
}
