//! Colored, removable tag chips for egui.
//!
//! [`TagItem`] renders a tag name as a pill whose background is derived
//! deterministically from the name and swaps to a theme-aware hover variant,
//! with a close icon that reports removal back to the caller. [`tag_color`]
//! exposes the color derivation on its own.

pub mod tag_color;
mod tag_item;

pub use tag_item::{TAG_TEXT_COLOR, TagItem, TagItemResponse};
