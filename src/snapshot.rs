use crate::dates::date_key;
use crate::models::{Entries, Mood, Theme};
use chrono::{Datelike, NaiveDate};
use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

pub const WIDTH: u32 = 800;
pub const HEIGHT: u32 = 800;
pub const HEIGHT_WITH_LEGEND: u32 = 1000;

const GRID_X: i32 = 100;
const GRID_Y: i32 = 200;
const CELL: i32 = 80;
const GAP: i32 = 10;
const STEP: i32 = CELL + GAP;
const CELL_RADIUS: i32 = 16;
const LEGEND_MARKER: i32 = 24;

const MONTHS_PT: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

const WEEKDAY_LETTERS: [&str; 7] = ["D", "S", "T", "Q", "Q", "S", "S"];

pub const ATTRIBUTION: &str = "Gerado por Stats Of Mind";

pub type Rgb = [u8; 3];

pub struct Palette {
    pub background: Rgb,
    pub title: Rgb,
    pub subtitle: Rgb,
    pub weekday: Rgb,
    pub empty_cell: Rgb,
    pub day_on_empty: Rgb,
    pub day_on_mood: Rgb,
    pub footer: Rgb,
}

const LIGHT: Palette = Palette {
    background: [0xf8, 0xfa, 0xfc],
    title: [0x1e, 0x29, 0x3b],
    subtitle: [0x64, 0x74, 0x8b],
    weekday: [0x94, 0xa3, 0xb8],
    empty_cell: [0xe2, 0xe8, 0xf0],
    day_on_empty: [0x94, 0xa3, 0xb8],
    day_on_mood: [0xff, 0xff, 0xff],
    footer: [0x10, 0xb9, 0x81],
};

const DARK: Palette = Palette {
    background: [0x0f, 0x17, 0x2a],
    title: [0xf8, 0xfa, 0xfc],
    subtitle: [0x94, 0xa3, 0xb8],
    weekday: [0x64, 0x74, 0x8b],
    empty_cell: [0x1e, 0x29, 0x3b],
    day_on_empty: [0x64, 0x74, 0x8b],
    day_on_mood: [0xff, 0xff, 0xff],
    footer: [0x34, 0xd3, 0x99],
};

pub fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Light => &LIGHT,
        Theme::Dark => &DARK,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// A filled rounded rectangle, in canvas pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct RectSpec {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub radius: i32,
    pub color: Rgb,
}

/// A text run; `y` is the baseline, as on a canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub x: i32,
    pub y: i32,
    pub size: i32,
    pub color: Rgb,
    pub align: Align,
    pub text: String,
}

/// Declarative description of the snapshot; the raster pass consumes it
/// without recomputing any geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub background: Rgb,
    pub rects: Vec<RectSpec>,
    pub texts: Vec<TextRun>,
}

/// Lays out the shareable month snapshot: title, `@user` subtitle, weekday
/// header, one color-coded cell per day, optional mood legend, attribution
/// footer. Returns `None` for an invalid year/month.
pub fn month_layout(
    entries: &Entries,
    year: i32,
    month: u32,
    user_name: &str,
    theme: Theme,
    legend: bool,
) -> Option<Layout> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let days = days_in_month(year, month)?;
    let offset = first.weekday().num_days_from_sunday() as i32;
    let palette = palette(theme);

    let width = WIDTH;
    let height = if legend { HEIGHT_WITH_LEGEND } else { HEIGHT };
    let center_x = width as i32 / 2;

    let mut rects = Vec::new();
    let mut texts = Vec::new();

    texts.push(TextRun {
        x: center_x,
        y: 80,
        size: 40,
        color: palette.title,
        align: Align::Center,
        text: format!("Humor de {} de {year}", MONTHS_PT[(month - 1) as usize]),
    });
    texts.push(TextRun {
        x: center_x,
        y: 120,
        size: 24,
        color: palette.subtitle,
        align: Align::Center,
        text: format!("@{user_name}"),
    });

    for (index, letter) in WEEKDAY_LETTERS.iter().enumerate() {
        texts.push(TextRun {
            x: GRID_X + index as i32 * STEP + CELL / 2,
            y: GRID_Y - 20,
            size: 20,
            color: palette.weekday,
            align: Align::Center,
            text: (*letter).to_string(),
        });
    }

    for day in 1..=days {
        let slot = offset + day as i32 - 1;
        let x = GRID_X + (slot % 7) * STEP;
        let y = GRID_Y + (slot / 7) * STEP;
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        let entry = entries.get(&date_key(date));
        let (cell_color, day_color) = match entry {
            Some(record) => (hex_color(record.mood.config().hex), palette.day_on_mood),
            None => (palette.empty_cell, palette.day_on_empty),
        };
        rects.push(RectSpec {
            x,
            y,
            width: CELL,
            height: CELL,
            radius: CELL_RADIUS,
            color: cell_color,
        });
        texts.push(TextRun {
            x: x + CELL / 2,
            y: y + CELL / 2 + 8,
            size: 24,
            color: day_color,
            align: Align::Center,
            text: day.to_string(),
        });
    }

    if legend {
        let grid_rows = (offset + days as i32 + 6) / 7;
        let mut x = GRID_X;
        let mut y = GRID_Y + grid_rows * STEP + 60;
        for mood in Mood::ALL {
            let label = mood.config().label;
            let item_width = LEGEND_MARKER + 12 + text_width(label, 20) + 28;
            if x + item_width > width as i32 - GRID_X {
                x = GRID_X;
                y += 48;
            }
            rects.push(RectSpec {
                x,
                y,
                width: LEGEND_MARKER,
                height: LEGEND_MARKER,
                radius: 8,
                color: hex_color(mood.config().hex),
            });
            texts.push(TextRun {
                x: x + LEGEND_MARKER + 12,
                y: y + LEGEND_MARKER - 4,
                size: 20,
                color: palette.subtitle,
                align: Align::Left,
                text: label.to_string(),
            });
            x += item_width;
        }
    }

    texts.push(TextRun {
        x: center_x,
        y: height as i32 - 40,
        size: 20,
        color: palette.footer,
        align: Align::Center,
        text: ATTRIBUTION.to_string(),
    });

    Some(Layout {
        width,
        height,
        background: palette.background,
        rects,
        texts,
    })
}

/// Rasterizes a layout into PNG bytes. Pure pixel computation; delivery is
/// the caller's concern.
pub fn render(layout: &Layout) -> Result<Vec<u8>, image::ImageError> {
    let mut img = RgbaImage::from_pixel(layout.width, layout.height, rgba(layout.background));
    for rect in &layout.rects {
        fill_rounded_rect(&mut img, rect);
    }
    for run in &layout.texts {
        draw_text(&mut img, run);
    }

    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }?;
    Some((next - first).num_days() as u32)
}

fn hex_color(hex: &str) -> Rgb {
    let value = u32::from_str_radix(hex.trim_start_matches('#'), 16).unwrap_or(0);
    [(value >> 16) as u8, (value >> 8) as u8, value as u8]
}

fn rgba(color: Rgb) -> Rgba<u8> {
    Rgba([color[0], color[1], color[2], 0xff])
}

fn scale_for(size: i32) -> i32 {
    (size / 8).max(1)
}

/// Rendered width of a run, in pixels; glyphs are a fixed 8px advance before
/// scaling.
pub fn text_width(text: &str, size: i32) -> i32 {
    text.chars().count() as i32 * 8 * scale_for(size)
}

fn glyph(ch: char) -> Option<[u8; 8]> {
    let code = ch as usize;
    match code {
        0x20..=0x7e => Some(font8x8::legacy::BASIC_LEGACY[code]),
        0xa0..=0xff => Some(font8x8::legacy::LATIN_LEGACY[code - 0xa0]),
        _ => None,
    }
}

fn draw_text(img: &mut RgbaImage, run: &TextRun) {
    let scale = scale_for(run.size);
    let mut pen_x = match run.align {
        Align::Left => run.x,
        Align::Center => run.x - text_width(&run.text, run.size) / 2,
    };
    let top = run.y - 8 * scale;
    let color = rgba(run.color);

    for ch in run.text.chars() {
        if let Some(bitmap) = glyph(ch) {
            for (row, bits) in bitmap.iter().enumerate() {
                for col in 0..8i32 {
                    if bits & (1u8 << col) != 0 {
                        fill_block(
                            img,
                            pen_x + col * scale,
                            top + row as i32 * scale,
                            scale,
                            color,
                        );
                    }
                }
            }
        }
        pen_x += 8 * scale;
    }
}

fn fill_block(img: &mut RgbaImage, x: i32, y: i32, scale: i32, color: Rgba<u8>) {
    for dy in 0..scale {
        for dx in 0..scale {
            put_pixel_checked(img, x + dx, y + dy, color);
        }
    }
}

fn fill_rounded_rect(img: &mut RgbaImage, rect: &RectSpec) {
    let radius = rect.radius.min(rect.width.min(rect.height) / 2);
    let color = rgba(rect.color);
    for dy in 0..rect.height {
        for dx in 0..rect.width {
            if inside_rounded(dx, dy, rect.width, rect.height, radius) {
                put_pixel_checked(img, rect.x + dx, rect.y + dy, color);
            }
        }
    }
}

fn inside_rounded(dx: i32, dy: i32, width: i32, height: i32, radius: i32) -> bool {
    if radius <= 0 {
        return true;
    }
    let cx = if dx < radius {
        radius
    } else if dx >= width - radius {
        width - radius - 1
    } else {
        return true;
    };
    let cy = if dy < radius {
        radius
    } else if dy >= height - radius {
        height - radius - 1
    } else {
        return true;
    };
    let (ox, oy) = (dx - cx, dy - cy);
    ox * ox + oy * oy <= radius * radius
}

fn put_pixel_checked(img: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, color);
    }
}
