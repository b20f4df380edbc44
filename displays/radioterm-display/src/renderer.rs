//! Drawing of the normal terminal view and the wallpaper view

use embedded_graphics::image::{Image, ImageDrawable};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};

use radioterm_core::config::{LINE_CHARS, SCROLLBACK_LINES};
use radioterm_core::scrollback::Scrollback;

use crate::theme;

/// Draw the normal terminal view.
///
/// Scrollback rows run top to bottom, oldest first, at a fixed pitch; the
/// input line sits in a contrasting strip reserved at the bottom of the
/// panel. The whole frame is redrawn every call.
pub fn draw_terminal<D>(
    target: &mut D,
    scrollback: &Scrollback<SCROLLBACK_LINES, LINE_CHARS>,
    input: &str,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let size = target.bounding_box().size;
    target.clear(theme::BACKGROUND)?;

    let text_style = MonoTextStyle::new(theme::FONT, theme::TEXT);
    for (row, line) in scrollback.snapshot().enumerate() {
        let top = (row as u32 * theme::ROW_HEIGHT) as i32;
        Text::with_baseline(line, Point::new(0, top), text_style, Baseline::Top).draw(target)?;
    }

    let strip_top = size.height.saturating_sub(theme::INPUT_STRIP_HEIGHT) as i32;
    Rectangle::new(
        Point::new(0, strip_top),
        Size::new(size.width, theme::INPUT_STRIP_HEIGHT),
    )
    .into_styled(PrimitiveStyle::with_fill(theme::INPUT_BACKGROUND))
    .draw(target)?;

    let input_style = MonoTextStyle::new(theme::FONT, theme::INPUT_TEXT);
    Text::with_baseline(
        input,
        Point::new(theme::INPUT_TEXT_INSET, strip_top + 2),
        input_style,
        Baseline::Top,
    )
    .draw(target)?;

    Ok(())
}

/// Draw the wallpaper view: the image asset centered on a plain backdrop.
///
/// Decoding of the asset happens in the caller; anything that draws as
/// RGB565 can be shown.
pub fn draw_wallpaper<D, I>(target: &mut D, image: &I) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
    I: ImageDrawable<Color = Rgb565>,
{
    let panel = target.bounding_box().size;
    target.clear(theme::WALLPAPER_BACKGROUND)?;

    let img = image.size();
    let origin = Point::new(
        (panel.width.saturating_sub(img.width) / 2) as i32,
        (panel.height.saturating_sub(img.height) / 2) as i32,
    );
    Image::new(image, origin).draw(target)
}

#[cfg(test)]
mod tests {
    use embedded_graphics::image::ImageRaw;
    use embedded_graphics::mock_display::MockDisplay;

    use radioterm_core::terminal::Terminal;

    use super::*;

    fn display() -> MockDisplay<Rgb565> {
        let mut display = MockDisplay::new();
        // The layout targets a real panel; the 64x64 mock only sees a
        // window into it.
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);
        display
    }

    #[test]
    fn test_terminal_view_draws_background_and_input_strip() {
        let mut display = display();
        let terminal = Terminal::new();

        draw_terminal(&mut display, terminal.scrollback(), terminal.input()).unwrap();

        // Top-left is scrollback background, bottom band is the strip.
        assert_eq!(display.get_pixel(Point::new(0, 0)), Some(theme::BACKGROUND));
        assert_eq!(
            display.get_pixel(Point::new(60, 62)),
            Some(theme::INPUT_BACKGROUND)
        );
    }

    #[test]
    fn test_terminal_view_draws_scrollback_text() {
        let mut display = display();
        let mut terminal = Terminal::new();
        terminal.receive("####");

        draw_terminal(&mut display, terminal.scrollback(), terminal.input()).unwrap();

        // The newest line lands on the last row; with a blank history the
        // earlier rows stay background-colored.
        assert_eq!(display.get_pixel(Point::new(1, 1)), Some(theme::BACKGROUND));
    }

    #[test]
    fn test_wallpaper_is_centered_on_backdrop() {
        let mut display = display();

        // 2x2 red RGB565 image, big-endian raw data.
        let data = [0xF8, 0x00, 0xF8, 0x00, 0xF8, 0x00, 0xF8, 0x00];
        let image = ImageRaw::<Rgb565>::new(&data, 2);

        draw_wallpaper(&mut display, &image).unwrap();

        assert_eq!(
            display.get_pixel(Point::new(0, 0)),
            Some(theme::WALLPAPER_BACKGROUND)
        );
        assert_eq!(
            display.get_pixel(Point::new(31, 31)),
            Some(Rgb565::RED)
        );
    }
}
