use glow::HasContext as _;

use std::path::Path;

/// Reads back the default framebuffer and writes it out as a PNG. GL rows
/// come bottom-up, so the image is flipped before encoding.
pub fn capture(
    gl: &glow::Context,
    width: u32,
    height: u32,
    path: &Path,
) -> image::ImageResult<()> {
    let mut pixels = vec![0u8; (width as usize) * (height as usize) * 4];
    unsafe {
        gl.read_pixels(
            0,
            0,
            width as i32,
            height as i32,
            glow::RGBA,
            glow::UNSIGNED_BYTE,
            glow::PixelPackData::Slice(pixels.as_mut_slice()),
        );
    }
    flip_rows(&mut pixels, width as usize * 4, height as usize);
    let image = image::RgbaImage::from_raw(width, height, pixels)
        .expect("pixel buffer does not match the requested dimensions");
    image.save(path)
}

fn flip_rows(pixels: &mut [u8], stride: usize, rows: usize) {
    for y in 0..rows / 2 {
        let top = y * stride;
        let bottom = (rows - 1 - y) * stride;
        for x in 0..stride {
            pixels.swap(top + x, bottom + x);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::flip_rows;

    #[test]
    fn flip_reverses_row_order() {
        let mut pixels = vec![0, 0, 1, 1, 2, 2];
        flip_rows(&mut pixels, 2, 3);
        assert_eq!(pixels, vec![2, 2, 1, 1, 0, 0]);
    }

    #[test]
    fn flip_keeps_middle_row_of_odd_counts() {
        let mut pixels = vec![10, 20, 30];
        flip_rows(&mut pixels, 1, 3);
        assert_eq!(pixels, vec![30, 20, 10]);
    }
}
