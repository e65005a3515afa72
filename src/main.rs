use dark_light::Mode;
use egui::{
    containers, Align, Button, CentralPanel, Color32, Context, Frame, Id, Key, Label, Layout, Margin, Popup,
    PopupCloseBehavior, RichText, ScrollArea, Separator, TextEdit, ThemePreference, Ui, Vec2, ViewportBuilder, Visuals,
    WidgetText,
};
use egui_extras::{Size, StripBuilder};
use egui_material_icons::icons;
use egui_notify::Toasts;
use egui_tags::TagItem;
use log::{error, info};
use rand::seq::SliceRandom;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

const TAGS_STORAGE_KEY: &str = "tags";
const THEME_STORAGE_KEY: &str = "theme";

const DEFAULT_TAGS: [&str; 5] = ["production", "staging", "backend", "ui", "urgent"];

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(Vec2::new(520.0, 380.0))
            .with_min_inner_size(Vec2::new(360.0, 240.0)),
        ..Default::default()
    };
    eframe::run_native("Tag Chips", options, Box::new(|cc| Ok(Box::new(TagsDemo::new(cc)))))
}

#[derive(EnumIter, Debug, PartialEq, Eq, Clone, Copy)]
pub enum SortOrder {
    Ascending,
    Descending,
}

struct TagsDemo {
    tags: Vec<String>,
    new_tag: String,

    sort_order: SortOrder,
    theme_preference: ThemePreference,
    clear_modal_is_open: bool,
    toasts: Toasts,
}

impl TagsDemo {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        egui_material_icons::initialize(&cc.egui_ctx);

        let mut tags: Vec<String> = DEFAULT_TAGS.iter().map(|tag| tag.to_string()).collect();
        let mut theme_preference = ThemePreference::System;

        if let Some(storage) = cc.storage {
            if let Some(stored) = eframe::get_value(storage, TAGS_STORAGE_KEY) {
                tags = stored;
            }
            if let Some(stored) = eframe::get_value(storage, THEME_STORAGE_KEY) {
                theme_preference = stored;
            }
        }

        apply_theme(&cc.egui_ctx, theme_preference);
        info!("Starting with {} tags.", tags.len());

        Self {
            tags,
            new_tag: String::new(),
            sort_order: SortOrder::Ascending,
            theme_preference,
            clear_modal_is_open: false,
            toasts: Toasts::default(),
        }
    }
}

impl eframe::App for TagsDemo {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.toasts.show(ctx);
        clear_all_modal(ctx, self);

        let input_row_height = 40.0;
        let status_bar_height = 32.0;
        let separator_space = 2.0;

        CentralPanel::default().show(ctx, |ui| {
            StripBuilder::new(ui)
                .size(Size::exact(input_row_height))
                .size(Size::exact(separator_space))
                .size(Size::remainder())
                .size(Size::exact(separator_space))
                .size(Size::exact(status_bar_height))
                .vertical(|mut strip| {
                    strip.cell(|ui| input_row_ui(ui, self));
                    strip.cell(|ui| {
                        ui.add(Separator::default().spacing(separator_space));
                    });
                    strip.cell(|ui| tags_ui(ui, self));
                    strip.cell(|ui| {
                        ui.add(Separator::default().spacing(separator_space));
                    });
                    strip.cell(|ui| status_bar_ui(ui, self));
                });
        });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, TAGS_STORAGE_KEY, &self.tags);
        eframe::set_value(storage, THEME_STORAGE_KEY, &self.theme_preference);
    }
}

fn input_row_ui(ui: &mut Ui, demo: &mut TagsDemo) {
    Frame::new().inner_margin(Margin::symmetric(16, 8)).show(ui, |ui| {
        ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
            let name_edit = TextEdit::singleline(&mut demo.new_tag)
                .hint_text(format!("{} New tag ...", icons::ICON_TAG))
                .desired_width(180.0)
                .char_limit(40);
            let response = ui.add(name_edit);

            let enter_was_pressed = response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

            let add_button = Button::new(icons::ICON_ADD);
            let add_was_clicked = ui.add(add_button).on_hover_text("Add tag").clicked();

            if enter_was_pressed || add_was_clicked {
                match add_tag(&mut demo.tags, &demo.new_tag) {
                    Ok(()) => {
                        demo.new_tag.clear();
                        response.request_focus();
                    }
                    Err(e) => {
                        error!("{}", e);
                        demo.toasts.error(e);
                    }
                }
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                theme_menu_ui(ui, demo);
            });
        });
    });
}

fn theme_menu_ui(ui: &mut Ui, demo: &mut TagsDemo) {
    let response = ui.button(icons::ICON_SETTINGS).on_hover_text("Theme");

    Popup::menu(&response)
        .gap(4.0)
        .close_behavior(PopupCloseBehavior::CloseOnClickOutside)
        .show(|ui| {
            let before = demo.theme_preference;
            ThemePreference::radio_buttons(&mut demo.theme_preference, ui);
            let after = demo.theme_preference;

            let theme_was_changed = before != after;
            if theme_was_changed {
                apply_theme(ui.ctx(), after);
            }
        });
}

fn tags_ui(ui: &mut Ui, demo: &mut TagsDemo) {
    if demo.tags.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.add(unselectable_label("No tags yet. Type a name above to add one."));
        });
        return;
    }

    let mut to_be_removed = None;

    Frame::new().inner_margin(Margin::symmetric(16, 8)).show(ui, |ui| {
        ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for name in &demo.tags {
                    TagItem::new(name)
                        .on_remove(|tag| to_be_removed = Some(tag.to_owned()))
                        .show(ui);
                }
            });
        });
    });

    if let Some(name) = to_be_removed {
        remove_tag(&mut demo.tags, &name);
        info!("Removed tag: {}", name);
    }
}

fn status_bar_ui(ui: &mut Ui, demo: &mut TagsDemo) {
    Frame::new().inner_margin(Margin::symmetric(16, 0)).show(ui, |ui| {
        ui.columns_const(|[left, right]| {
            left.with_layout(Layout::left_to_right(Align::Center), |ui| {
                ui.add(unselectable_label(format!("{} tags", demo.tags.len())));
            });

            right.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let tags_are_present = !demo.tags.is_empty();

                let clear_button = Button::new(icons::ICON_CLEAR_ALL);
                let response = ui
                    .add_enabled(tags_are_present, clear_button)
                    .on_hover_text("Remove all")
                    .on_disabled_hover_text("No tags");
                if response.clicked() {
                    demo.clear_modal_is_open = true;
                }

                let copy_button = Button::new(icons::ICON_CONTENT_COPY);
                let response = ui
                    .add_enabled(tags_are_present, copy_button)
                    .on_hover_text("Copy as JSON")
                    .on_disabled_hover_text("No tags");
                if response.clicked() {
                    copy_tags_as_json(ui.ctx(), demo);
                }

                let sort_was_changed = sort_order_ui(ui, &mut demo.sort_order);
                if sort_was_changed {
                    sort_tags(&mut demo.tags, demo.sort_order);
                }

                let shuffle_button = Button::new(icons::ICON_SHUFFLE);
                let response = ui
                    .add_enabled(demo.tags.len() > 1, shuffle_button)
                    .on_hover_text("Shuffle")
                    .on_disabled_hover_text("Not enough tags");
                if response.clicked() {
                    shuffle_tags(&mut demo.tags);
                }
            });
        });
    });
}

fn sort_order_ui(ui: &mut Ui, sort_order: &mut SortOrder) -> bool {
    let response = ui.button(icons::ICON_FILTER_LIST).on_hover_text("Sort order");

    let mut changed = false;

    Popup::menu(&response)
        .gap(4.0)
        .close_behavior(PopupCloseBehavior::CloseOnClickOutside)
        .show(|ui| {
            for so in SortOrder::iter() {
                changed |= ui.radio_value(sort_order, so, format!("{:?}", so)).changed();
            }
        });

    changed
}

fn copy_tags_as_json(ctx: &Context, demo: &mut TagsDemo) {
    match serde_json::to_string(&demo.tags) {
        Ok(json) => {
            ctx.copy_text(json);
            demo.toasts.success("Copied tags as JSON.");
        }
        Err(e) => {
            error!("Unable to serialize tags: {}", e);
            demo.toasts.error("Unable to copy tags.");
        }
    }
}

fn clear_all_modal(ctx: &Context, demo: &mut TagsDemo) {
    if !demo.clear_modal_is_open {
        return;
    }

    let mut cancel_clicked = false;
    let mut confirm_clicked = false;

    let modal = containers::Modal::new(Id::new("clear_tags_modal"))
        .backdrop_color(Color32::TRANSPARENT)
        .show(ctx, |ui| {
            ui.set_width(220.0);
            Frame::new().outer_margin(Margin::same(4)).show(ui, |ui| {
                ui.add(unselectable_label(RichText::new("Remove all tags?").heading()));

                ui.separator();

                containers::Sides::new().show(
                    ui,
                    |ui| {
                        let response = ui.button(format!("\t{}\t", icons::ICON_CLOSE));
                        if response.clicked() {
                            cancel_clicked = true;
                        }
                    },
                    |ui| {
                        let response = ui.button(format!("\t{}\t", icons::ICON_CHECK));
                        if response.clicked() {
                            confirm_clicked = true;
                        }
                    },
                );
            });
        });

    if confirm_clicked {
        let count = demo.tags.len();
        demo.tags.clear();
        info!("Removed all {} tags.", count);
        demo.toasts.success("All tags removed.");
    }

    if confirm_clicked || cancel_clicked || modal.should_close() {
        demo.clear_modal_is_open = false;
    }
}

pub fn apply_theme(ctx: &Context, preference: ThemePreference) {
    match preference {
        ThemePreference::Dark => ctx.set_visuals(Visuals::dark()),
        ThemePreference::Light => ctx.set_visuals(Visuals::light()),
        ThemePreference::System => {
            let visuals = match dark_light::detect() {
                Ok(Mode::Light) => Visuals::light(),
                _ => Visuals::dark(), // Covers both Mode::Dark, Mode::Unspecified, and errors
            };
            ctx.set_visuals(visuals);
        }
    }
}

fn unselectable_label(text: impl Into<WidgetText>) -> Label {
    Label::new(text).selectable(false)
}

fn add_tag(tags: &mut Vec<String>, name: &str) -> Result<(), String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Tag name cannot be empty.".to_string());
    }

    if tags.iter().any(|tag| tag == trimmed) {
        return Err(format!("'{}' is already in the list. Duplicates are not allowed.", trimmed));
    }

    info!("Adding tag: {}", trimmed);
    tags.push(trimmed.to_string());

    Ok(())
}

fn remove_tag(tags: &mut Vec<String>, name: &str) {
    tags.retain(|tag| tag != name);
}

fn sort_tags(tags: &mut [String], sort_order: SortOrder) {
    tags.sort_by(|a, b| match sort_order {
        SortOrder::Ascending => a.cmp(b),
        SortOrder::Descending => a.cmp(b).reverse(),
    });
}

fn shuffle_tags(tags: &mut [String]) {
    let mut rng = rand::rng();
    tags.shuffle(&mut rng);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_add_tag_appends_trimmed_name() {
        let mut list = tags(&["backend"]);
        add_tag(&mut list, "  urgent  ").unwrap();
        assert_eq!(list, tags(&["backend", "urgent"]));
    }

    #[test]
    fn test_add_tag_rejects_duplicates() {
        let mut list = tags(&["backend"]);
        assert!(add_tag(&mut list, "backend").is_err());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_add_tag_rejects_empty_names() {
        let mut list = Vec::new();
        assert!(add_tag(&mut list, "").is_err());
        assert!(add_tag(&mut list, "   ").is_err());
        assert!(list.is_empty());
    }

    #[test]
    fn test_remove_tag_removes_only_the_named_tag() {
        let mut list = tags(&["backend", "ui", "urgent"]);
        remove_tag(&mut list, "ui");
        assert_eq!(list, tags(&["backend", "urgent"]));
    }

    #[test]
    fn test_sort_tags_both_orders() {
        let mut list = tags(&["ui", "backend", "urgent"]);
        sort_tags(&mut list, SortOrder::Ascending);
        assert_eq!(list, tags(&["backend", "ui", "urgent"]));
        sort_tags(&mut list, SortOrder::Descending);
        assert_eq!(list, tags(&["urgent", "ui", "backend"]));
    }
}
