// SPDX-License-Identifier: MPL-2.0

use super::*;
use crate::application::port::{MediaError, Overlay, Role, Watermark};
use crate::diagnostics::{BufferCapacity, DiagnosticEventKind, DiagnosticsCollector};
use crate::domain::editing::{AdjustmentKind, BorderStyle, FrameStyle, StylisticFilter};
use crate::domain::geometry::{Point, Rect, Size};
use crate::domain::locator::Locator;
use crate::domain::session::{Photo, SessionId};
use crate::infrastructure::memory::MemoryFetcher;
use crate::infrastructure::skia::SkiaSurface;
use crate::media::data_url::{decode_data_url, encode_png};
use crate::media::filter::{FilterOp, FilterSlot};
use crate::media::image::decode_bitmap;
use image_rs::{imageops, Rgba, RgbaImage};
use std::collections::BTreeSet;

#[derive(Debug, Default)]
struct RecordingHost {
    saves: Vec<(SessionId, usize, String)>,
    deletes: Vec<usize>,
    closed: bool,
}

impl EditorHost for RecordingHost {
    fn on_save(&mut self, session: &SessionId, photo_index: usize, encoded_png: &str) {
        self.saves
            .push((session.clone(), photo_index, encoded_png.to_string()));
    }

    fn on_delete_image(&mut self, _session: &SessionId, photo_index: usize) {
        self.deletes.push(photo_index);
    }

    fn on_close(&mut self) {
        self.closed = true;
    }
}

type TestEditor = Editor<SkiaSurface, MemoryFetcher, RecordingHost>;

fn gradient(width: u32, height: u32, seed: u8) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x * 3) as u8, (y * 4) as u8, seed, 255])
    })
}

fn locator(index: usize) -> String {
    format!("photos/{index}.png")
}

/// Editor over `photos` on an 800x600 white surface.
fn editor_over(photos: Vec<Photo>, fetcher: MemoryFetcher) -> TestEditor {
    Editor::new(
        Session::new("s1", "Customer", photos),
        SkiaSurface::new(Size::new(800.0, 600.0), Color::WHITE),
        fetcher,
        RecordingHost::default(),
        EditorSettings::default(),
    )
}

/// Editor over `count` 80x60 photos.
fn editor_with(count: usize) -> (TestEditor, Vec<RgbaImage>) {
    let fetcher = MemoryFetcher::new();
    let mut images = Vec::new();
    let mut photos = Vec::new();
    for index in 0..count {
        let image = gradient(80, 60, index as u8 * 40);
        fetcher.insert(locator(index).as_str(), encode_png(&image).expect("encode"));
        photos.push(Photo::new(format!("p{index}"), locator(index).as_str()));
        images.push(image);
    }
    (editor_over(photos, fetcher), images)
}

async fn loaded_editor() -> (TestEditor, RgbaImage) {
    let (mut editor, mut images) = editor_with(1);
    assert_eq!(editor.select_photo(0).await, Some(LoadDisposition::Applied));
    (editor, images.remove(0))
}

fn saved_image(editor: &TestEditor, save: usize) -> RgbaImage {
    let (_, _, url) = &editor.host().saves[save];
    decode_bitmap(&decode_data_url(url).expect("data url")).expect("png")
}

fn export_main(editor: &TestEditor) -> RgbaImage {
    let surface = editor.surface();
    let bounds = surface.main_bounds().expect("main image");
    let scale = surface.export_scale().expect("scale");
    surface.rasterize(bounds, scale).expect("rasterize")
}

// =============================================================================
// Loading and session
// =============================================================================

#[tokio::test]
async fn new_editor_has_nothing_to_edit() {
    let (mut editor, _) = editor_with(2);

    assert!(!editor.has_image());
    assert_eq!(editor.selected_index(), None);
    assert!(!editor.set_frame(FrameStyle::Classic));
    assert!(!editor.set_adjustment(AdjustmentKind::Brightness, 10));
    assert!(!editor.enable_cropping());
    assert_eq!(editor.save(), Ok(false));
    assert_eq!(editor.surface().overlay_count(), 0);
}

#[tokio::test]
async fn selecting_a_photo_places_it_with_fit_ratio() {
    let (editor, _) = loaded_editor().await;

    assert!(editor.has_image());
    assert_eq!(editor.selected_index(), Some(0));
    assert_eq!(
        editor.surface().main_bounds(),
        Some(Rect::new(80.0, 60.0, 640.0, 480.0))
    );
    assert_eq!(editor.state(), &EditState::default());
}

#[tokio::test]
async fn out_of_range_selection_is_ignored() {
    let (mut editor, _) = loaded_editor().await;
    assert_eq!(editor.select_photo(7).await, None);
    assert_eq!(editor.selected_index(), Some(0));
}

#[tokio::test]
async fn late_load_result_is_discarded() {
    let (mut editor, _) = editor_with(2);

    let first = editor.begin_select(0).expect("ticket a");
    let second = editor.begin_select(1).expect("ticket b");
    assert!(editor.is_loading());

    let second_done = load_ticket(editor.fetcher(), second).await;
    assert_eq!(editor.finish_load(second_done), LoadDisposition::Applied);

    let first_done = load_ticket(editor.fetcher(), first).await;
    assert!(first_done.is_ok());
    assert_eq!(editor.finish_load(first_done), LoadDisposition::Discarded);

    assert_eq!(editor.selected_index(), Some(1));
    assert!(!editor.is_loading());
}

#[tokio::test]
async fn failed_load_keeps_previous_surface() {
    let (mut editor, _) = editor_with(2);
    assert_eq!(editor.select_photo(0).await, Some(LoadDisposition::Applied));
    editor.set_frame(FrameStyle::Modern);
    editor.fetcher().remove(&Locator::parse(&locator(1)));

    assert_eq!(editor.select_photo(1).await, Some(LoadDisposition::Failed));

    assert_eq!(editor.selected_index(), Some(0));
    assert!(editor.surface().has(Role::Frame));
    assert_eq!(editor.state().frame, FrameStyle::Modern);
    assert_eq!(editor.last_error(), Some(&Error::Media(MediaError::NotFound)));
    let notice = editor.notifications().latest().expect("notice");
    assert_eq!(notice.message_key(), "notice-load-failed");
    assert_eq!(notice.arg("photo"), Some("p1"));
}

#[tokio::test]
async fn successful_load_clears_load_failure() {
    let (mut editor, _) = editor_with(2);
    editor.fetcher().remove(&Locator::parse(&locator(1)));
    editor.select_photo(1).await;
    assert!(editor.notifications().contains_key("notice-load-failed"));

    editor.select_photo(0).await;
    assert!(!editor.notifications().contains_key("notice-load-failed"));
    assert!(editor.last_error().is_none());
}

#[tokio::test]
async fn selecting_another_photo_resets_edit_state() {
    let (mut editor, _) = editor_with(2);
    editor.select_photo(0).await;
    editor.set_adjustment(AdjustmentKind::Contrast, 30);
    editor.set_border(BorderStyle::Solid);

    editor.select_photo(1).await;

    assert_eq!(editor.state(), &EditState::default());
    assert_eq!(editor.surface().overlay_count(), 0);
    assert!(editor.surface().filter_stack().is_some_and(|s| s.is_empty()));
}

#[tokio::test]
async fn deleting_displayed_photo_clears_surface() {
    let (mut editor, _) = editor_with(3);
    editor.select_photo(1).await;

    assert!(editor.delete_photo(1));

    assert!(!editor.has_image());
    assert_eq!(editor.selected_index(), None);
    assert_eq!(editor.session().len(), 2);
    assert_eq!(editor.host().deletes, vec![1]);
}

#[tokio::test]
async fn deleting_an_earlier_photo_shifts_the_selection() {
    let (mut editor, _) = editor_with(3);
    editor.select_photo(2).await;

    assert!(editor.delete_photo(0));

    assert!(editor.has_image());
    assert_eq!(editor.selected_index(), Some(1));
    assert!(!editor.delete_photo(5));
}

#[tokio::test]
async fn deleting_a_photo_cancels_its_pending_load() {
    let (mut editor, _) = editor_with(2);
    let ticket = editor.begin_select(1).expect("ticket");
    assert!(editor.delete_photo(1));
    assert!(!editor.is_loading());

    let outcome = load_ticket(editor.fetcher(), ticket).await;
    assert_eq!(editor.finish_load(outcome), LoadDisposition::Discarded);
    assert!(!editor.has_image());
}

#[tokio::test]
async fn edited_flags_follow_photos_across_deletion() {
    let (mut editor, _) = editor_with(4);
    for index in [1, 3] {
        editor.select_photo(index).await;
        assert_eq!(editor.save(), Ok(true));
    }
    assert_eq!(editor.session().edited_indices(), BTreeSet::from([1, 3]));

    editor.delete_photo(1);

    assert_eq!(editor.session().edited_indices(), BTreeSet::from([2]));
    let ids: Vec<_> = editor.session().photos.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["p0", "p2", "p3"]);
}

#[tokio::test]
async fn repeated_photo_ids_save_to_the_selected_index() {
    let fetcher = MemoryFetcher::new();
    for index in 0..2 {
        fetcher.insert(
            locator(index).as_str(),
            encode_png(&gradient(80, 60, index as u8)).expect("encode"),
        );
    }
    let photos = (0..2)
        .map(|index| Photo::new("same", locator(index).as_str()))
        .collect();
    let mut editor = editor_over(photos, fetcher);

    assert_eq!(editor.select_photo(1).await, Some(LoadDisposition::Applied));
    assert_eq!(editor.selected_index(), Some(1));
    assert_eq!(editor.save(), Ok(true));

    assert_eq!(editor.host().saves[0].1, 1);
    assert_eq!(editor.session().edited_indices(), BTreeSet::from([1]));

    assert!(editor.delete_photo(0));
    assert_eq!(editor.selected_index(), Some(0));
    assert!(editor.has_image());
}

#[tokio::test]
async fn close_hands_back_the_host() {
    let (mut editor, _) = editor_with(1);
    editor.begin_select(0);

    let host = editor.close();

    assert!(host.closed);
    assert!(host.saves.is_empty());
}

// =============================================================================
// Edit-state engine
// =============================================================================

#[tokio::test]
async fn setting_the_same_frame_twice_is_idempotent() {
    let (mut editor, _) = loaded_editor().await;
    let bounds = editor.surface().main_bounds().expect("bounds");

    editor.set_frame(FrameStyle::Classic);
    let once = editor.surface().overlay(Role::Frame).cloned();
    editor.set_frame(FrameStyle::Classic);

    assert_eq!(editor.surface().overlay_count(), 1);
    assert_eq!(editor.surface().overlay(Role::Frame).cloned(), once);
    assert_eq!(
        once,
        frame_overlay(FrameStyle::Classic, bounds).map(Overlay::Frame)
    );
}

#[tokio::test]
async fn switching_frames_leaves_no_remnants() {
    let (mut editor, _) = loaded_editor().await;
    let bounds = editor.surface().main_bounds().expect("bounds");

    editor.set_frame(FrameStyle::Classic);
    editor.set_frame(FrameStyle::Modern);

    assert_eq!(editor.surface().overlay_count(), 1);
    assert_eq!(
        editor.surface().overlay(Role::Frame),
        frame_overlay(FrameStyle::Modern, bounds)
            .map(Overlay::Frame)
            .as_ref()
    );

    editor.set_frame(FrameStyle::None);
    assert_eq!(editor.surface().overlay_count(), 0);
    assert!(editor.state().is_edited());
}

#[tokio::test]
async fn adjustment_and_stylistic_layers_stay_independent() {
    let (mut editor, _) = loaded_editor().await;

    editor.set_adjustment(AdjustmentKind::Brightness, 40);
    editor.set_stylistic_filter(StylisticFilter::Sepia);
    let first = export_main(&editor);
    editor.set_adjustment(AdjustmentKind::Brightness, 40);

    let stack = editor.surface().filter_stack().expect("stack").clone();
    assert_eq!(
        stack.count_slot(FilterSlot::Adjustment(AdjustmentKind::Brightness)),
        1
    );
    assert_eq!(
        stack.adjustment(AdjustmentKind::Brightness),
        Some(&FilterOp::Brightness(0.4))
    );
    assert_eq!(stack.stylistic(), Some(StylisticFilter::Sepia));
    assert_eq!(
        stack.count_slot(FilterSlot::Stylistic(StylisticFilter::Sepia)),
        recipes::stylistic_ops(StylisticFilter::Sepia).len()
    );
    assert_eq!(export_main(&editor), first);
}

#[tokio::test]
async fn adjustments_are_clamped() {
    let (mut editor, _) = loaded_editor().await;
    editor.set_adjustment(AdjustmentKind::Saturation, 250);
    assert_eq!(editor.state().saturation.value(), 100);
}

#[tokio::test]
async fn border_is_reissued_on_width_and_color_change() {
    let (mut editor, _) = loaded_editor().await;
    let bounds = editor.surface().main_bounds().expect("bounds");

    editor.set_border(BorderStyle::Solid);
    editor.set_border_width(20.0);
    editor.set_border_color(Color::rgba(200, 0, 0, 255));

    let Some(Overlay::Border(border)) = editor.surface().overlay(Role::Border) else {
        panic!("expected a border overlay");
    };
    assert_eq!(border.width, 20.0);
    assert_eq!(border.rect, bounds.expand(10.0, 10.0));
    assert_eq!(border.color, Color::rgba(200, 0, 0, 255));
    assert_eq!(editor.surface().overlay_count(), 1);
}

#[tokio::test]
async fn border_width_without_style_draws_nothing() {
    let (mut editor, _) = loaded_editor().await;
    editor.set_border_width(30.0);
    assert!(!editor.surface().has(Role::Border));
    assert!(!editor.state().is_edited());
}

#[tokio::test]
async fn blank_watermark_text_is_ignored() {
    let (mut editor, _) = loaded_editor().await;
    assert!(!editor.add_default_text_watermark("   "));
    assert!(!editor.surface().has(Role::Watermark));
}

#[tokio::test]
async fn text_watermark_replaces_previous_one() {
    let (mut editor, _) = loaded_editor().await;
    editor.add_default_text_watermark("Studio");
    editor.add_default_text_watermark("Proof");

    let Some(Overlay::Watermark(Watermark::Text(text))) = editor.surface().overlay(Role::Watermark)
    else {
        panic!("expected a text watermark");
    };
    assert_eq!(text.text, "Proof");
    assert_eq!(text.center, Point::new(400.0, 300.0));
    assert_eq!(editor.surface().overlay_count(), 1);

    assert!(editor.remove_watermark());
    assert!(!editor.remove_watermark());
    assert_eq!(editor.state().watermark, None);
}

#[tokio::test]
async fn image_watermark_sits_in_bottom_right_corner() {
    let (mut editor, _) = loaded_editor().await;
    editor.fetcher().insert(
        "logos/mark.png",
        encode_png(&gradient(200, 100, 9)).expect("encode"),
    );

    let added = editor
        .add_image_watermark(&Locator::parse("logos/mark.png"), Opacity::new(0.8))
        .await;

    assert_eq!(added, Ok(true));
    let Some(Overlay::Watermark(Watermark::Image(image))) = editor.surface().overlay(Role::Watermark)
    else {
        panic!("expected an image watermark");
    };
    assert_eq!(image.rect, Rect::new(740.0, 560.0, 40.0, 20.0));
    assert!(image.origin_clean);
}

#[tokio::test]
async fn saved_watermark_gutter_matches_preview_background() {
    let (mut editor, _) = loaded_editor().await;
    editor.fetcher().insert(
        "logos/mark.png",
        encode_png(&gradient(200, 100, 9)).expect("encode"),
    );
    let added = editor
        .add_image_watermark(&Locator::parse("logos/mark.png"), Opacity::OPAQUE)
        .await;
    assert_eq!(added, Ok(true));

    assert_eq!(editor.save(), Ok(true));

    // Content runs from the image corner (80, 60) to the watermark corner (780, 580).
    let saved = saved_image(&editor, 0);
    assert_eq!(saved.dimensions(), (88, 65));
    let preview = editor.surface().render_preview().expect("preview");
    assert_eq!(saved.get_pixel(87, 0).0, [255, 255, 255, 255]);
    assert_eq!(preview.get_pixel(778, 62), saved.get_pixel(87, 0));
}

#[tokio::test]
async fn saved_text_watermark_reaches_the_pixels() {
    let (mut editor, source) = loaded_editor().await;
    assert!(editor.add_text_watermark("PROOF", FontSize::new(120.0), Color::BLACK, Opacity::OPAQUE));

    assert_eq!(editor.save(), Ok(true));

    assert_ne!(saved_image(&editor, 0), source);
}

#[tokio::test]
async fn missing_watermark_image_keeps_previous_watermark() {
    let (mut editor, _) = loaded_editor().await;
    editor.add_default_text_watermark("Studio");

    let added = editor
        .add_image_watermark(&Locator::parse("logos/none.png"), Opacity::OPAQUE)
        .await;

    assert!(added.is_err());
    assert!(matches!(
        editor.surface().overlay(Role::Watermark),
        Some(Overlay::Watermark(Watermark::Text(_)))
    ));
    assert!(editor.notifications().contains_key("notice-watermark-failed"));
}

#[tokio::test]
async fn rotation_reissues_decorations() {
    let (mut editor, _) = loaded_editor().await;
    editor.set_border(BorderStyle::Solid);

    assert!(editor.rotate_right());

    // The quarter turn would be 640 units tall, so it shrinks to the surface height.
    let bounds = editor.surface().main_bounds().expect("bounds");
    assert_eq!(bounds, Rect::new(175.0, 0.0, 450.0, 600.0));
    let Some(Overlay::Border(border)) = editor.surface().overlay(Role::Border) else {
        panic!("expected a border overlay");
    };
    assert_eq!(border.rect, bounds.expand(5.0, 5.0));
    assert_eq!(export_main(&editor).dimensions(), (60, 80));
}

#[tokio::test]
async fn rotation_is_allowed_while_cropping() {
    let (mut editor, _) = loaded_editor().await;
    assert!(editor.enable_cropping());
    let region = editor.state().crop_region;

    assert!(editor.rotate_right());

    assert!(editor.state().is_cropping());
    assert_eq!(editor.state().crop_region, region);
    assert!(editor.surface().has(Role::CropRect));

    // The guide spans 320x240 surface units over an image drawn at scale 7.5.
    assert_eq!(editor.apply_crop(), Ok(true));
    assert!(!editor.state().is_cropping());
    assert!(editor.state().is_edited());
    assert_eq!(export_main(&editor).dimensions(), (43, 32));
}

#[tokio::test]
async fn reset_restores_the_original_load() {
    let (mut editor, source) = loaded_editor().await;
    editor.set_adjustment(AdjustmentKind::Brightness, 40);
    editor.set_adjustment(AdjustmentKind::Contrast, -25);
    editor.set_stylistic_filter(StylisticFilter::Cyberpunk);
    editor.set_frame(FrameStyle::Polaroid);
    editor.set_border(BorderStyle::Dashed);
    editor.add_default_text_watermark("Proof");
    editor.rotate_left();
    editor.enable_cropping();

    assert!(editor.reset_all());

    assert_eq!(editor.state(), &EditState::default());
    assert!(!editor.state().is_edited());
    assert_eq!(editor.surface().overlay_count(), 0);
    assert_eq!(editor.active_tool(), None);
    assert_eq!(export_main(&editor), source);
}

// =============================================================================
// Crop and commit
// =============================================================================

#[tokio::test]
async fn crop_guide_starts_over_central_half() {
    let (mut editor, _) = loaded_editor().await;

    assert!(editor.enable_cropping());
    assert!(!editor.enable_cropping());

    assert_eq!(
        editor.state().crop_region,
        Some(Rect::new(240.0, 180.0, 320.0, 240.0))
    );
    assert_eq!(editor.active_tool(), Some(EditorTool::Crop));
    assert!(editor.surface().has(Role::CropRect));
}

#[tokio::test]
async fn crop_guide_never_reaches_exported_pixels() {
    let (mut editor, source) = loaded_editor().await;
    editor.enable_cropping();

    assert_eq!(
        editor.surface().content_bounds(),
        editor.surface().main_bounds()
    );
    assert_eq!(export_main(&editor), source);
}

#[tokio::test]
async fn applying_default_crop_keeps_central_pixels() {
    let (mut editor, source) = loaded_editor().await;
    editor.enable_cropping();

    assert_eq!(editor.apply_crop(), Ok(true));

    let expected = imageops::crop_imm(&source, 20, 15, 40, 30).to_image();
    assert_eq!(export_main(&editor), expected);
    assert!(editor.state().is_edited());
    assert!(!editor.state().is_cropping());
    assert!(!editor.surface().has(Role::CropRect));
    assert_eq!(editor.active_tool(), None);
}

#[tokio::test]
async fn crop_region_is_clipped_to_surface() {
    let (mut editor, _) = loaded_editor().await;
    assert!(!editor.set_crop_region(Rect::new(0.0, 0.0, 10.0, 10.0)));

    editor.enable_cropping();
    assert!(editor.set_crop_region(Rect::new(700.0, 500.0, 300.0, 300.0)));
    assert_eq!(
        editor.state().crop_region,
        Some(Rect::new(700.0, 500.0, 100.0, 100.0))
    );
    assert!(!editor.set_crop_region(Rect::new(900.0, 900.0, 10.0, 10.0)));
}

#[tokio::test]
async fn cancel_crop_leaves_image_untouched() {
    let (mut editor, source) = loaded_editor().await;
    editor.enable_cropping();

    assert!(editor.cancel_crop());
    assert!(!editor.cancel_crop());

    assert!(!editor.surface().has(Role::CropRect));
    assert!(!editor.state().is_edited());
    assert_eq!(export_main(&editor), source);
}

#[tokio::test]
async fn save_of_unedited_photo_matches_source() {
    let (mut editor, source) = loaded_editor().await;

    assert_eq!(editor.save(), Ok(true));

    let (session, index, url) = &editor.host().saves[0];
    assert_eq!(session.as_str(), "s1");
    assert_eq!(*index, 0);
    assert!(url.starts_with("data:image/png;base64,"));
    assert_eq!(saved_image(&editor, 0), source);
    assert!(editor.session().photos[0].edited);
    assert!(editor.notifications().contains_key("notice-saved"));
}

#[tokio::test]
async fn save_finalizes_pending_crop() {
    let (mut editor, source) = loaded_editor().await;
    editor.enable_cropping();
    editor.set_crop_region(Rect::new(80.0, 60.0, 320.0, 240.0));

    assert_eq!(editor.save(), Ok(true));

    let expected = imageops::crop_imm(&source, 0, 0, 40, 30).to_image();
    assert_eq!(saved_image(&editor, 0), expected);
    assert!(!editor.state().is_cropping());
}

#[tokio::test]
async fn save_includes_decorations() {
    let (mut editor, _) = loaded_editor().await;
    editor.set_border(BorderStyle::Solid);
    editor.set_border_width(16.0);

    editor.save().expect("save");

    // A 16-unit border adds 2 px per side at one eighth scale.
    let saved = saved_image(&editor, 0);
    assert_eq!(saved.dimensions(), (84, 64));
}

#[tokio::test]
async fn tainted_save_fails_and_keeps_state() {
    let remote = "https://other.test/a.png";
    let fetcher = MemoryFetcher::new();
    fetcher.insert_unreadable(remote, encode_png(&gradient(80, 60, 1)).expect("encode"));
    let mut editor = editor_over(vec![Photo::new("r0", remote)], fetcher);
    assert_eq!(editor.select_photo(0).await, Some(LoadDisposition::Applied));
    assert!(editor.notifications().contains_key("notice-reencode-denied"));
    editor.set_adjustment(AdjustmentKind::Brightness, 20);
    let before = editor.state().clone();

    let result = editor.save();

    assert!(matches!(result, Err(Error::Save(_))));
    assert_eq!(editor.state(), &before);
    assert!(editor.host().saves.is_empty());
    assert!(!editor.session().photos[0].edited);
    assert!(editor.notifications().contains_key("notice-save-failed"));
}

#[tokio::test]
async fn failure_notices_are_dismissible() {
    let (mut editor, _) = editor_with(1);
    editor.fetcher().remove(&Locator::parse(&locator(0)));
    editor.select_photo(0).await;

    let id = editor.notifications().latest().expect("notice").id();
    assert!(editor.notifications_mut().dismiss(id));
    assert!(!editor.notifications().has_notifications());
}

// =============================================================================
// Tools and diagnostics
// =============================================================================

#[tokio::test]
async fn crop_tool_drives_crop_mode() {
    let (mut editor, _) = loaded_editor().await;

    assert!(editor.select_tool(Some(EditorTool::Crop)));
    assert!(editor.state().is_cropping());

    assert!(editor.select_tool(Some(EditorTool::Frame)));
    assert!(!editor.state().is_cropping());
    assert_eq!(editor.active_tool(), Some(EditorTool::Frame));

    assert!(editor.select_tool(None));
    assert_eq!(editor.active_tool(), None);
}

#[tokio::test]
async fn tools_need_an_image() {
    let (mut editor, _) = editor_with(1);
    assert!(!editor.select_tool(Some(EditorTool::Adjustment)));
    assert!(editor.select_tool(None));
}

#[tokio::test]
async fn operations_and_failures_reach_diagnostics() {
    let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
    let (editor, _) = editor_with(2);
    let mut editor = editor.with_diagnostics(collector.handle());
    editor.select_photo(0).await;
    editor.set_frame(FrameStyle::Vintage);
    editor.fetcher().remove(&Locator::parse(&locator(1)));
    editor.select_photo(1).await;

    collector.process_pending();

    let actions: Vec<_> = collector
        .iter()
        .filter_map(|event| match &event.kind {
            DiagnosticEventKind::UserAction { action, .. } => Some(action.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(
        actions,
        vec![
            UserAction::SelectPhoto { index: 0 },
            UserAction::SetFrame {
                style: FrameStyle::Vintage
            },
            UserAction::SelectPhoto { index: 1 },
        ]
    );
    assert_eq!(collector.error_count(), 1);
}
