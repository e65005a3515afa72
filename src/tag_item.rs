use crate::tag_color::{color_from_name, hover_color};
use egui::{pos2, vec2, Align2, Color32, CursorIcon, FontId, Rect, Response, Sense, TextStyle, Ui, Vec2, Widget};
use egui_material_icons::icons;

/// Near-white chip text, readable on every palette entry.
pub const TAG_TEXT_COLOR: Color32 = Color32::from_rgb(0xf7, 0xf8, 0xfa);

const PADDING: Vec2 = vec2(8.0, 4.0);
const LINE_HEIGHT: f32 = 16.0;
const NAME_ICON_GAP: f32 = 3.0;
const ICON_EXTENT: f32 = 16.0; // Click target, matches the line height.
const ICON_GLYPH_SIZE: f32 = 12.0;

/// A colored pill showing a tag name with a click-to-remove icon.
///
/// The background is derived from the name (see [`crate::tag_color`]) and
/// swaps to its hover variant while the pointer is over the chip. Clicking
/// the close icon invokes the `on_remove` callback once per click with the
/// unmodified name. The close glyph comes from `egui_material_icons`, so
/// call its `initialize` once at startup to register the icon font.
pub struct TagItem<'a> {
    name: &'a str,
    text_color: Color32,
    on_remove: Option<Box<dyn FnMut(&str) + 'a>>,
}

/// What [`TagItem::show`] reports back.
pub struct TagItemResponse {
    /// The whole pill.
    pub response: Response,
    /// The close-icon region.
    pub remove_response: Response,
    /// True when the close icon was clicked this frame.
    pub removed: bool,
}

impl<'a> TagItem<'a> {
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            text_color: TAG_TEXT_COLOR,
            on_remove: None,
        }
    }

    /// Override the text color. `TAG_TEXT_COLOR` otherwise.
    pub fn text_color(mut self, color: Color32) -> Self {
        self.text_color = color;
        self
    }

    /// Called with the tag name when the close icon is clicked.
    pub fn on_remove(mut self, callback: impl FnMut(&str) + 'a) -> Self {
        self.on_remove = Some(Box::new(callback));
        self
    }

    pub fn show(mut self, ui: &mut Ui) -> TagItemResponse {
        let base_color = color_from_name(self.name);
        let hover = hover_color(base_color, ui.visuals().dark_mode);

        let font_id = TextStyle::Small.resolve(ui.style());
        let name_galley = ui.painter().layout_no_wrap(self.name.to_owned(), font_id, self.text_color);

        let desired_size = vec2(
            PADDING.x + name_galley.size().x + NAME_ICON_GAP + ICON_EXTENT + PADDING.x,
            LINE_HEIGHT + 2.0 * PADDING.y,
        );
        let (rect, response) = ui.allocate_exact_size(desired_size, Sense::hover());

        let icon_rect = Rect::from_center_size(
            pos2(rect.right() - PADDING.x - ICON_EXTENT / 2.0, rect.center().y),
            Vec2::splat(ICON_EXTENT),
        );
        let remove_response = ui.interact(icon_rect, response.id.with("remove"), Sense::click());

        let hovered = ui.rect_contains_pointer(rect);
        if hovered {
            ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
        }

        let fill = if hovered { hover } else { base_color };
        let corner_radius = ui.visuals().widgets.inactive.corner_radius;

        let painter = ui.painter();
        painter.rect_filled(rect, corner_radius, fill);

        let name_pos = pos2(rect.left() + PADDING.x, rect.center().y - name_galley.size().y / 2.0);
        painter.galley(name_pos, name_galley, self.text_color);

        painter.text(
            icon_rect.center(),
            Align2::CENTER_CENTER,
            icons::ICON_CLOSE,
            FontId::proportional(ICON_GLYPH_SIZE),
            self.text_color,
        );

        let removed = remove_response.clicked();
        if removed {
            if let Some(on_remove) = &mut self.on_remove {
                on_remove(self.name);
            }
        }

        TagItemResponse {
            response,
            remove_response,
            removed,
        }
    }
}

impl Widget for TagItem<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        self.show(ui).response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{CentralPanel, Context, Event, FullOutput, Modifiers, PointerButton, Pos2, RawInput, Shape, Visuals};

    fn run_chip_frame(
        ctx: &Context,
        name: &str,
        events: Vec<Event>,
        removed: &mut Vec<String>,
    ) -> (FullOutput, Rect, Rect) {
        let mut chip_rect = Rect::NOTHING;
        let mut icon_rect = Rect::NOTHING;

        let input = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(400.0, 300.0))),
            events,
            ..Default::default()
        };

        let output = ctx.run(input, |ctx| {
            CentralPanel::default().show(ctx, |ui| {
                let out = TagItem::new(name)
                    .on_remove(|tag| removed.push(tag.to_owned()))
                    .show(ui);
                chip_rect = out.response.rect;
                icon_rect = out.remove_response.rect;
            });
        });

        (output, chip_rect, icon_rect)
    }

    fn contains_fill(output: &FullOutput, fill: Color32) -> bool {
        output.shapes.iter().any(|clipped| match &clipped.shape {
            Shape::Rect(rect_shape) => rect_shape.fill == fill,
            _ => false,
        })
    }

    fn press(pos: Pos2, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::default(),
        }
    }

    #[test]
    fn test_chip_geometry() {
        let ctx = Context::default();
        let mut removed = Vec::new();

        let (_, chip_rect, icon_rect) = run_chip_frame(&ctx, "critical", Vec::new(), &mut removed);

        // 16 px line height plus 4 px vertical padding on each side.
        assert!((chip_rect.height() - 24.0).abs() < 0.1);
        assert!((icon_rect.width() - 16.0).abs() < 0.1);
        assert!((icon_rect.height() - 16.0).abs() < 0.1);
        // Icon sits 8 px in from the right edge, vertically centered.
        assert!((chip_rect.right() - icon_rect.right() - 8.0).abs() < 0.1);
        assert!((chip_rect.center().y - icon_rect.center().y).abs() < 0.1);
        // Name text takes up the space left of the icon.
        assert!(chip_rect.width() > 35.0);
        assert!(removed.is_empty());
    }

    #[test]
    fn test_empty_name_still_renders() {
        let ctx = Context::default();
        let mut removed = Vec::new();

        let (_, chip_rect, _) = run_chip_frame(&ctx, "", Vec::new(), &mut removed);

        assert!((chip_rect.height() - 24.0).abs() < 0.1);
        // Paddings, gap, and icon only.
        assert!((chip_rect.width() - 35.0).abs() < 0.5);
    }

    #[test]
    fn test_remove_click_fires_callback_once() {
        let ctx = Context::default();
        let mut removed = Vec::new();

        // Lay the chip out once so the following pointer events can hit it.
        let (_, _, icon_rect) = run_chip_frame(&ctx, "critical", Vec::new(), &mut removed);
        let target = icon_rect.center();

        run_chip_frame(&ctx, "critical", vec![Event::PointerMoved(target)], &mut removed);
        assert!(removed.is_empty());

        run_chip_frame(&ctx, "critical", vec![press(target, true)], &mut removed);
        assert!(removed.is_empty());

        run_chip_frame(&ctx, "critical", vec![press(target, false)], &mut removed);
        assert_eq!(removed, vec!["critical".to_owned()]);

        // A quiet frame must not fire it again.
        run_chip_frame(&ctx, "critical", Vec::new(), &mut removed);
        assert_eq!(removed.len(), 1);
    }

    #[test]
    fn test_hover_swaps_fill_and_cursor() {
        let ctx = Context::default();
        ctx.set_visuals(Visuals::light());
        let mut removed = Vec::new();

        let base = color_from_name("critical");
        let hover = hover_color(base, false);

        let (output, chip_rect, _) = run_chip_frame(&ctx, "critical", Vec::new(), &mut removed);
        assert!(contains_fill(&output, base));
        assert!(!contains_fill(&output, hover));

        // Point at the name area, away from the icon.
        let target = pos2(chip_rect.left() + 9.0, chip_rect.center().y);
        let (output, _, _) = run_chip_frame(&ctx, "critical", vec![Event::PointerMoved(target)], &mut removed);
        assert!(contains_fill(&output, hover));
        assert!(!contains_fill(&output, base));
        assert_eq!(output.platform_output.cursor_icon, CursorIcon::PointingHand);
    }
}
