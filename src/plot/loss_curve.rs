use image::{Rgb, RgbImage};

use crate::train::loss_history::LossHistory;

const WIDTH: u32 = 640;
const HEIGHT: u32 = 400;
const MARGIN: u32 = 40;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const AXIS: Rgb<u8> = Rgb([120, 120, 120]);
const CURVE: Rgb<u8> = Rgb([30, 80, 200]);

/// Rasterizes loss-vs-epoch as a PNG polyline: epochs left to right, loss
/// bottom (0) to top (max finite loss). Report-only; nothing feeds back into
/// training.
///
/// Non-finite entries (a diverged run) are left out of the polyline, so the
/// curve simply breaks where training blew up.
pub fn render_loss_curve(history: &LossHistory, path: &str) -> std::io::Result<()> {
    let mut img = RgbImage::from_pixel(WIDTH, HEIGHT, BACKGROUND);

    draw_axes(&mut img);
    draw_history(&mut img, history);

    img.save(path)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
}

fn draw_axes(img: &mut RgbImage) {
    let bottom = HEIGHT - MARGIN;
    draw_line(img, MARGIN, MARGIN, MARGIN, bottom, AXIS);
    draw_line(img, MARGIN, bottom, WIDTH - MARGIN, bottom, AXIS);
}

fn draw_history(img: &mut RgbImage, history: &LossHistory) {
    let losses = history.losses();
    if losses.len() < 2 {
        return;
    }

    let max_loss = losses
        .iter()
        .copied()
        .filter(|l| l.is_finite())
        .fold(0.0_f64, f64::max);
    // A flat all-zero (or all-NaN) history still needs a usable scale.
    let max_loss = if max_loss > 0.0 { max_loss } else { 1.0 };

    let plot_width = (WIDTH - 2 * MARGIN) as f64;
    let plot_height = (HEIGHT - 2 * MARGIN) as f64;
    let x_step = plot_width / (losses.len() - 1) as f64;

    let project = |epoch: usize, loss: f64| -> (u32, u32) {
        let x = MARGIN as f64 + epoch as f64 * x_step;
        let y = (HEIGHT - MARGIN) as f64 - (loss / max_loss).min(1.0) * plot_height;
        (x.round() as u32, y.round() as u32)
    };

    for epoch in 1..losses.len() {
        let (prev, curr) = (losses[epoch - 1], losses[epoch]);
        if !prev.is_finite() || !curr.is_finite() {
            continue;
        }
        let (x0, y0) = project(epoch - 1, prev);
        let (x1, y1) = project(epoch, curr);
        draw_line(img, x0, y0, x1, y1, CURVE);
    }
}

/// Bresenham line between two in-bounds points.
fn draw_line(img: &mut RgbImage, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgb<u8>) {
    let (mut x0, mut y0) = (x0 as i64, y0 as i64);
    let (x1, y1) = (x1 as i64, y1 as i64);

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if x0 >= 0 && y0 >= 0 && (x0 as u32) < img.width() && (y0 as u32) < img.height() {
            img.put_pixel(x0 as u32, y0 as u32, color);
        }
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_from(losses: &[f64]) -> LossHistory {
        let mut history = LossHistory::new();
        for &l in losses {
            history.push(l);
        }
        history
    }

    #[test]
    fn renders_a_decodable_png_of_the_expected_size() {
        let history = history_from(&[1.0, 0.6, 0.4, 0.3, 0.25]);
        let path = std::env::temp_dir().join("xor_lab_loss_curve_test.png");
        let path = path.to_str().unwrap().to_string();

        render_loss_curve(&history, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!((img.width(), img.height()), (WIDTH, HEIGHT));

        // The curve color must show up somewhere inside the plot area.
        assert!(img.pixels().any(|p| *p == CURVE));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn tolerates_non_finite_losses() {
        let history = history_from(&[1.0, f64::NAN, f64::INFINITY, 0.5, 0.4]);
        let path = std::env::temp_dir().join("xor_lab_loss_curve_nan_test.png");
        let path = path.to_str().unwrap().to_string();

        render_loss_curve(&history, &path).unwrap();
        assert!(std::path::Path::new(&path).exists());
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn single_point_history_still_renders_axes() {
        let history = history_from(&[0.7]);
        let path = std::env::temp_dir().join("xor_lab_loss_curve_single_test.png");
        let path = path.to_str().unwrap().to_string();

        render_loss_curve(&history, &path).unwrap();
        let img = image::open(&path).unwrap().to_rgb8();
        assert!(img.pixels().any(|p| *p == AXIS));
        std::fs::remove_file(&path).ok();
    }
}
