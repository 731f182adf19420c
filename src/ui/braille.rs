/// Braille canvas for sub-cell terminal rendering
/// Each terminal cell holds a 2×4 grid of Braille dots, so the canvas has
/// 2× horizontal and 4× vertical resolution.

pub struct BrailleCanvas {
    width: usize,  // Width in terminal cells
    height: usize, // Height in terminal cells
    dots: Vec<Vec<u8>>, // One dot pattern per cell
}

impl BrailleCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            dots: vec![vec![0; width]; height],
        }
    }

    /// Set a dot at pixel coordinates; out-of-range dots are dropped
    pub fn set_pixel(&mut self, pixel_x: usize, pixel_y: usize) {
        let cell_x = pixel_x / 2;
        let cell_y = pixel_y / 4;

        if cell_x >= self.width || cell_y >= self.height {
            return;
        }

        // Braille dot numbering:
        // 1 4
        // 2 5
        // 3 6
        // 7 8
        let dot_index = match (pixel_x % 2, pixel_y % 4) {
            (0, 0) => 0,
            (0, 1) => 1,
            (0, 2) => 2,
            (0, 3) => 6,
            (1, 0) => 3,
            (1, 1) => 4,
            (1, 2) => 5,
            (1, 3) => 7,
            _ => unreachable!(),
        };

        self.dots[cell_y][cell_x] |= 1 << dot_index;
    }

    /// Fill a rectangle of pixels, clipped to the canvas
    pub fn fill_rect(&mut self, x: usize, y: usize, width: usize, height: usize) {
        let right = (x + width).min(self.pixel_width());
        let bottom = (y + height).min(self.pixel_height());

        for py in y..bottom {
            for px in x..right {
                self.set_pixel(px, py);
            }
        }
    }

    /// Braille Unicode: U+2800 + dot pattern
    pub fn to_char(&self, cell_x: usize, cell_y: usize) -> char {
        if cell_x >= self.width || cell_y >= self.height {
            return ' ';
        }

        let pattern = self.dots[cell_y][cell_x];
        if pattern == 0 {
            return ' ';
        }
        char::from_u32(0x2800 + pattern as u32).unwrap_or(' ')
    }

    /// One row of cells as text
    pub fn row(&self, cell_y: usize) -> String {
        (0..self.width).map(|x| self.to_char(x, cell_y)).collect()
    }

    /// Height in terminal cells
    pub fn rows(&self) -> usize {
        self.height
    }

    /// Width in pixels (2 per cell)
    pub fn pixel_width(&self) -> usize {
        self.width * 2
    }

    /// Height in pixels (4 per cell)
    pub fn pixel_height(&self) -> usize {
        self.height * 4
    }
}
