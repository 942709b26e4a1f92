//! pipeline/stages.rs
//!
//! The individual filter stages. Every stage is a pure function: it reads
//! the input samples and returns a freshly allocated output buffer, clamped
//! to the 8-bit range. Stage selection and ordering live in `mod.rs`.

use crate::constants::denoise;

/// Saturate a float sample into the displayable 8-bit range.
#[inline]
fn clamp_u8(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Mirror an out-of-range index back into `0..n` (reflect-101 borders,
/// i.e. the edge sample is not repeated).
#[inline]
fn reflect101(mut i: isize, n: isize) -> usize {
    if n == 1 {
        return 0;
    }
    loop {
        if i < 0 {
            i = -i;
        } else if i >= n {
            i = 2 * n - 2 - i;
        } else {
            return i as usize;
        }
    }
}

/// Linear min-max rescale so the observed extremes map to 0 and 255.
///
/// A constant image (min == max) is returned unchanged; there is nothing to
/// stretch and dividing by the zero range is not an option.
pub fn normalize_min_max(src: &[u8]) -> Vec<u8> {
    let (mut lo, mut hi) = (u8::MAX, u8::MIN);
    for &p in src {
        lo = lo.min(p);
        hi = hi.max(p);
    }
    if lo == hi {
        return src.to_vec();
    }
    let scale = 255.0 / f32::from(hi - lo);
    src.iter()
        .map(|&p| clamp_u8(f32::from(p - lo) * scale))
        .collect()
}

/// Multiply every sample by `gain`, saturating. No additive offset.
pub fn apply_gain(src: &[u8], gain: f32) -> Vec<u8> {
    src.iter().map(|&p| clamp_u8(f32::from(p) * gain)).collect()
}

/// Linear contrast/brightness: `clamp(alpha * x + beta)`.
pub fn apply_contrast(src: &[u8], alpha: f32, beta: i32) -> Vec<u8> {
    let beta = beta as f32;
    src.iter()
        .map(|&p| clamp_u8(f32::from(p) * alpha + beta))
        .collect()
}

/// Build a normalized 1-D Gaussian kernel of side `ksize`.
///
/// `sigma <= 0` derives sigma from the kernel size with the conventional
/// rule `0.3 * ((ksize - 1) * 0.5 - 1) + 0.8`, matching what the reference
/// smoothing implementation does for an unspecified sigma.
fn gaussian_kernel(ksize: usize, sigma: f32) -> Vec<f32> {
    debug_assert!(ksize % 2 == 1, "kernel side must be odd");
    let sigma = if sigma > 0.0 {
        sigma
    } else {
        0.3 * ((ksize as f32 - 1.0) * 0.5 - 1.0) + 0.8
    };
    let center = (ksize / 2) as isize;
    let denom = 2.0 * sigma * sigma;
    let mut kernel: Vec<f32> = (0..ksize as isize)
        .map(|i| {
            let d = (i - center) as f32;
            (-d * d / denom).exp()
        })
        .collect();
    let sum: f32 = kernel.iter().sum();
    for k in &mut kernel {
        *k /= sum;
    }
    kernel
}

/// Separable Gaussian convolution with reflect-101 borders.
fn convolve_separable(width: usize, height: usize, src: &[u8], kernel: &[f32]) -> Vec<u8> {
    let radius = (kernel.len() / 2) as isize;
    let (w, h) = (width as isize, height as isize);

    // Horizontal pass into an f32 scratch, vertical pass back to u8.
    let mut scratch = vec![0.0f32; src.len()];
    for y in 0..height {
        let row = &src[y * width..(y + 1) * width];
        for x in 0..w {
            let mut acc = 0.0f32;
            for (k, &kv) in kernel.iter().enumerate() {
                let sx = reflect101(x + k as isize - radius, w);
                acc += f32::from(row[sx]) * kv;
            }
            scratch[y * width + x as usize] = acc;
        }
    }

    let mut out = vec![0u8; src.len()];
    for y in 0..h {
        for x in 0..width {
            let mut acc = 0.0f32;
            for (k, &kv) in kernel.iter().enumerate() {
                let sy = reflect101(y + k as isize - radius, h);
                acc += scratch[sy * width + x] * kv;
            }
            out[y as usize * width + x] = clamp_u8(acc);
        }
    }
    out
}

/// Gaussian smoothing with an explicit odd kernel side; sigma derived from
/// the side (see `gaussian_kernel`).
pub fn gaussian_blur(width: usize, height: usize, src: &[u8], ksize: usize) -> Vec<u8> {
    convolve_separable(width, height, src, &gaussian_kernel(ksize, 0.0))
}

/// Unsharp-mask sharpening: blur with a fixed sigma, then
/// `out = src * (1 + amount) - blurred * amount`, clamped.
pub fn sharpen(width: usize, height: usize, src: &[u8], amount: f32, sigma: f32) -> Vec<u8> {
    // Kernel side from sigma, the 8-bit rule: round(sigma * 3 * 2 + 1) | 1.
    let ksize = ((sigma * 6.0 + 1.0).round() as usize) | 1;
    let blurred = convolve_separable(width, height, src, &gaussian_kernel(ksize, sigma));

    src.iter()
        .zip(&blurred)
        .map(|(&orig, &blur)| {
            clamp_u8(f32::from(orig) * (1.0 + amount) - f32::from(blur) * amount)
        })
        .collect()
}

/// Non-local-means denoising tuned for speckle noise.
///
/// Classic NLM over a `SEARCH_WINDOW` neighborhood with `TEMPLATE_WINDOW`
/// patches and strength `h` (all fixed constants). Per search offset the
/// squared-difference image is integrated once, so patch distances are O(1)
/// lookups; overall cost is offsets x pixels, not offsets x pixels x patch.
pub fn denoise_nlm(width: usize, height: usize, src: &[u8]) -> Vec<u8> {
    let h2 = denoise::FILTER_STRENGTH * denoise::FILTER_STRENGTH;
    let t_radius = (denoise::TEMPLATE_WINDOW / 2) as isize;
    let s_radius = (denoise::SEARCH_WINDOW / 2) as isize;
    let (w, h) = (width as isize, height as isize);

    let mut accum = vec![0.0f64; src.len()];
    let mut weight_sum = vec![0.0f64; src.len()];

    // Integral image of squared differences, rebuilt per offset.
    let mut integral = vec![0.0f64; (width + 1) * (height + 1)];

    for dy in -s_radius..=s_radius {
        for dx in -s_radius..=s_radius {
            // Shifted lookup with clamped (replicated) borders.
            let shifted = |x: isize, y: isize| -> f32 {
                let sx = (x + dx).clamp(0, w - 1) as usize;
                let sy = (y + dy).clamp(0, h - 1) as usize;
                f32::from(src[sy * width + sx])
            };

            for y in 0..h {
                for x in 0..w {
                    let d = f32::from(src[y as usize * width + x as usize]) - shifted(x, y);
                    let d2 = f64::from(d * d);
                    let idx = (y as usize + 1) * (width + 1) + x as usize + 1;
                    integral[idx] = d2
                        + integral[idx - 1]
                        + integral[idx - (width + 1)]
                        - integral[idx - (width + 1) - 1];
                }
            }

            for y in 0..h {
                for x in 0..w {
                    // Patch rectangle clamped to the image; near borders the
                    // mean uses the actual overlap area.
                    let x0 = (x - t_radius).max(0) as usize;
                    let y0 = (y - t_radius).max(0) as usize;
                    let x1 = (x + t_radius).min(w - 1) as usize + 1;
                    let y1 = (y + t_radius).min(h - 1) as usize + 1;
                    let area = ((x1 - x0) * (y1 - y0)) as f64;

                    let sum = integral[y1 * (width + 1) + x1]
                        - integral[y1 * (width + 1) + x0]
                        - integral[y0 * (width + 1) + x1]
                        + integral[y0 * (width + 1) + x0];
                    let dist2 = sum / area;

                    let weight = (-dist2 / f64::from(h2)).exp();
                    let i = y as usize * width + x as usize;
                    accum[i] += weight * f64::from(shifted(x, y));
                    weight_sum[i] += weight;
                }
            }
        }
    }

    accum
        .iter()
        .zip(&weight_sum)
        .map(|(&a, &ws)| clamp_u8((a / ws) as f32))
        .collect()
}
