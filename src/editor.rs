// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Bounding-box annotation editor.
//!
//! This module contains the editor state machine: it translates pointer
//! gestures over the image display surface into box geometry, tracks the
//! image currently being labeled, and commits finished boxes back to the
//! project store. It holds no egui types so the whole gesture protocol is
//! unit testable.
//!
//! Coordinates are surface-local display pixels (offsets from the image
//! surface's top-left corner). The editor does not correct for the image's
//! native resolution; callers that need native-pixel boxes must rescale.

use crate::models::annotation::{BoundingBox, Point, Rect};
use crate::store::ProjectStore;
use crate::util::geometry::{qualifies, rect_from_corners};

/// Fallback label when the user cancels the prompt or submits nothing.
pub const DEFAULT_LABEL: &str = "unlabeled";

/// Drag progress for the current image-viewing session.
#[derive(Debug, Clone, Copy, PartialEq)]
enum DragState {
    /// No gesture in progress.
    Idle,
    /// Pointer is down; the candidate rectangle spans anchor to cursor.
    Dragging { anchor: Point, cursor: Point },
    /// Drag finished with a qualifying rectangle; a label is owed before
    /// the box is committed. Pointer input is ignored until resolved.
    AwaitingLabel { rect: Rect },
}

/// A rectangle the renderer should draw; committed boxes carry their
/// label, the live candidate carries none.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawBox {
    pub rect: Rect,
    pub label: Option<String>,
}

/// Editor state machine for drawing labeled boxes over one image at a time.
pub struct AnnotationEditor {
    current_index: usize,
    drag: DragState,
    /// Counter for generating unique box ids within the session.
    box_counter: u64,
}

impl Default for AnnotationEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl AnnotationEditor {
    pub fn new() -> Self {
        Self {
            current_index: 0,
            drag: DragState::Idle,
            box_counter: 0,
        }
    }

    /// Index of the image currently being labeled.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The live candidate rectangle, if a drag is in progress or a label
    /// is pending.
    pub fn drag_rect(&self) -> Option<Rect> {
        match &self.drag {
            DragState::Idle => None,
            DragState::Dragging { anchor, cursor } => Some(rect_from_corners(*anchor, *cursor)),
            DragState::AwaitingLabel { rect } => Some(*rect),
        }
    }

    /// Whether a finished drag is waiting on its label.
    pub fn awaiting_label(&self) -> bool {
        matches!(self.drag, DragState::AwaitingLabel { .. })
    }

    /// Begin a drag at a surface-local point.
    ///
    /// No-op with an empty project or while a label prompt is pending.
    pub fn pointer_down(&mut self, store: &ProjectStore, point: Point) {
        if store.image_count() == 0 || self.awaiting_label() {
            return;
        }
        self.drag = DragState::Dragging {
            anchor: point,
            cursor: point,
        };
    }

    /// Update the drag cursor. No-op unless a drag is in progress.
    pub fn pointer_move(&mut self, point: Point) {
        if let DragState::Dragging { cursor, .. } = &mut self.drag {
            *cursor = point;
        }
    }

    /// Finish the drag. Sub-threshold rectangles are discarded outright;
    /// qualifying ones move to the awaiting-label state.
    ///
    /// The pointer leaving the surface mid-drag must be routed here too,
    /// so a drag can never stick.
    pub fn pointer_up(&mut self) {
        let DragState::Dragging { anchor, cursor } = self.drag else {
            return;
        };
        let rect = rect_from_corners(anchor, cursor);
        if qualifies(&rect) {
            self.drag = DragState::AwaitingLabel { rect };
        } else {
            log::info!(
                "Discarded sub-threshold drag ({:.1}x{:.1})",
                rect.width,
                rect.height
            );
            self.drag = DragState::Idle;
        }
    }

    /// Finish the drag and resolve the label synchronously.
    ///
    /// The resolver is only invoked for a qualifying rectangle, after the
    /// drag sequence has completed.
    pub fn pointer_up_with(
        &mut self,
        store: &mut ProjectStore,
        resolver: impl FnOnce(Rect) -> Option<String>,
    ) {
        self.pointer_up();
        if let DragState::AwaitingLabel { rect } = self.drag {
            let label = resolver(rect);
            self.resolve_label(store, label);
        }
    }

    /// Supply the label for a finished drag and commit the box.
    ///
    /// `None` or blank input falls back to [`DEFAULT_LABEL`]. Appends the
    /// new box to the current image's list and commits the full updated
    /// project in a single store write. No-op unless a label is pending.
    pub fn resolve_label(&mut self, store: &mut ProjectStore, label: Option<String>) {
        let DragState::AwaitingLabel { rect } = self.drag else {
            return;
        };
        self.drag = DragState::Idle;

        let label = match label {
            Some(text) if !text.trim().is_empty() => text,
            _ => DEFAULT_LABEL.to_string(),
        };

        self.box_counter += 1;
        let id = format!("box_{}", self.box_counter);
        let new_box = BoundingBox::new(id, rect, label);

        let mut updated = store.project().clone();
        let Some(record) = updated.images.get_mut(self.current_index) else {
            return;
        };
        record.boxes.push(new_box);
        log::info!(
            "Added box to image {}, total: {}",
            self.current_index,
            record.boxes.len()
        );
        store.commit(updated);
    }

    /// Jump directly to an image, cancelling any gesture in progress.
    ///
    /// Out-of-range indices are ignored (the drag is still cancelled).
    pub fn select_image(&mut self, store: &ProjectStore, index: usize) {
        self.drag = DragState::Idle;
        if index < store.image_count() {
            self.current_index = index;
        }
    }

    /// Advance to the next image, wrapping past the end.
    pub fn next_image(&mut self, store: &ProjectStore) {
        self.drag = DragState::Idle;
        if store.image_count() > 0 {
            self.current_index = (self.current_index + 1) % store.image_count();
        }
    }

    /// Step to the previous image, wrapping before the start.
    pub fn prev_image(&mut self, store: &ProjectStore) {
        self.drag = DragState::Idle;
        let count = store.image_count();
        if count > 0 {
            self.current_index = (self.current_index + count - 1) % count;
        }
    }

    /// The ordered list of rectangles to render: the current image's
    /// committed boxes followed by the live candidate, if any.
    ///
    /// Pure over the current state; repeated calls with no intervening
    /// events return identical output.
    pub fn boxes_to_draw(&self, store: &ProjectStore) -> Vec<DrawBox> {
        let mut draw: Vec<DrawBox> = store
            .image(self.current_index)
            .map(|record| {
                record
                    .boxes
                    .iter()
                    .map(|b| DrawBox {
                        rect: b.rect(),
                        label: Some(b.label.clone()),
                    })
                    .collect()
            })
            .unwrap_or_default();

        if let Some(rect) = self.drag_rect() {
            draw.push(DrawBox { rect, label: None });
        }
        draw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::project::{ImageRecord, Project};

    fn store_with_images(count: usize) -> ProjectStore {
        let images = (0..count)
            .map(|i| {
                ImageRecord::new(
                    format!("img_{}", i),
                    format!("image_{}.jpg", i),
                    format!("image_{}.jpg", i).into(),
                )
            })
            .collect();
        ProjectStore::new(Project::new("test".into(), images))
    }

    fn drag(
        editor: &mut AnnotationEditor,
        store: &mut ProjectStore,
        from: (f64, f64),
        to: (f64, f64),
        label: Option<&str>,
    ) {
        editor.pointer_down(store, Point::new(from.0, from.1));
        editor.pointer_move(Point::new(to.0, to.1));
        editor.pointer_up_with(store, |_| label.map(str::to_string));
    }

    #[test]
    fn test_qualifying_drag_adds_box() {
        let mut store = store_with_images(2);
        let mut editor = AnnotationEditor::new();

        drag(&mut editor, &mut store, (10.0, 10.0), (100.0, 80.0), Some("cat"));

        let boxes = &store.project().images[0].boxes;
        assert_eq!(boxes.len(), 1);
        assert_eq!(boxes[0].x, 10.0);
        assert_eq!(boxes[0].y, 10.0);
        assert_eq!(boxes[0].width, 90.0);
        assert_eq!(boxes[0].height, 70.0);
        assert_eq!(boxes[0].label, "cat");
        assert!(store.project().images[1].boxes.is_empty());
    }

    #[test]
    fn test_reverse_drag_normalizes_rectangle() {
        let mut store = store_with_images(1);
        let mut editor = AnnotationEditor::new();

        drag(&mut editor, &mut store, (100.0, 80.0), (10.0, 10.0), Some("dog"));

        let boxes = &store.project().images[0].boxes;
        assert_eq!(boxes[0].x, 10.0);
        assert_eq!(boxes[0].y, 10.0);
        assert_eq!(boxes[0].width, 90.0);
        assert_eq!(boxes[0].height, 70.0);
    }

    #[test]
    fn test_sub_threshold_drag_is_discarded() {
        let mut store = store_with_images(2);
        let mut editor = AnnotationEditor::new();
        let mut prompted = false;

        editor.pointer_down(&store, Point::new(10.0, 10.0));
        editor.pointer_move(Point::new(12.0, 12.0));
        editor.pointer_up_with(&mut store, |_| {
            prompted = true;
            Some("never".to_string())
        });

        assert!(!prompted, "label prompt must not run for a discarded drag");
        assert!(store.project().images[0].boxes.is_empty());
        assert!(!editor.awaiting_label());
    }

    #[test]
    fn test_thin_drag_on_one_axis_is_discarded() {
        let mut store = store_with_images(1);
        let mut editor = AnnotationEditor::new();

        // Wide but only 5px tall
        drag(&mut editor, &mut store, (10.0, 10.0), (200.0, 15.0), Some("x"));

        assert!(store.project().images[0].boxes.is_empty());
    }

    #[test]
    fn test_cancelled_prompt_defaults_to_unlabeled() {
        let mut store = store_with_images(1);
        let mut editor = AnnotationEditor::new();

        drag(&mut editor, &mut store, (0.0, 0.0), (50.0, 50.0), None);

        assert_eq!(store.project().images[0].boxes[0].label, "unlabeled");
    }

    #[test]
    fn test_blank_label_defaults_to_unlabeled() {
        let mut store = store_with_images(1);
        let mut editor = AnnotationEditor::new();

        drag(&mut editor, &mut store, (0.0, 0.0), (50.0, 50.0), Some("   "));

        assert_eq!(store.project().images[0].boxes[0].label, "unlabeled");
    }

    #[test]
    fn test_box_ids_are_unique() {
        let mut store = store_with_images(1);
        let mut editor = AnnotationEditor::new();

        drag(&mut editor, &mut store, (0.0, 0.0), (50.0, 50.0), Some("a"));
        drag(&mut editor, &mut store, (60.0, 60.0), (120.0, 120.0), Some("b"));

        let boxes = &store.project().images[0].boxes;
        assert_eq!(boxes.len(), 2);
        assert_ne!(boxes[0].id, boxes[1].id);
    }

    #[test]
    fn test_deferred_label_resolution() {
        let mut store = store_with_images(1);
        let mut editor = AnnotationEditor::new();

        editor.pointer_down(&store, Point::new(10.0, 10.0));
        editor.pointer_move(Point::new(100.0, 80.0));
        editor.pointer_up();
        assert!(editor.awaiting_label());
        assert!(store.project().images[0].boxes.is_empty());

        // Pointer input is blocked until the label resolves
        editor.pointer_down(&store, Point::new(200.0, 200.0));
        editor.pointer_move(Point::new(300.0, 300.0));
        assert_eq!(
            editor.drag_rect().unwrap(),
            rect_from_corners(Point::new(10.0, 10.0), Point::new(100.0, 80.0))
        );

        editor.resolve_label(&mut store, Some("truck".to_string()));
        assert!(!editor.awaiting_label());
        let boxes = &store.project().images[0].boxes;
        assert_eq!(boxes.len(), 1);
        assert_eq!(boxes[0].label, "truck");
    }

    #[test]
    fn test_resolve_without_pending_drag_is_noop() {
        let mut store = store_with_images(1);
        let mut editor = AnnotationEditor::new();

        editor.resolve_label(&mut store, Some("ghost".to_string()));
        assert!(store.project().images[0].boxes.is_empty());
    }

    #[test]
    fn test_drag_on_empty_project_is_noop() {
        let mut store = store_with_images(0);
        let mut editor = AnnotationEditor::new();

        drag(&mut editor, &mut store, (0.0, 0.0), (50.0, 50.0), Some("x"));

        assert!(editor.drag_rect().is_none());
        assert!(editor.boxes_to_draw(&store).is_empty());
    }

    #[test]
    fn test_navigation_wraps_circularly() {
        let store = store_with_images(3);
        let mut editor = AnnotationEditor::new();

        editor.prev_image(&store);
        assert_eq!(editor.current_index(), 2);
        editor.next_image(&store);
        assert_eq!(editor.current_index(), 0);
        editor.next_image(&store);
        editor.next_image(&store);
        editor.next_image(&store);
        assert_eq!(editor.current_index(), 0);
    }

    #[test]
    fn test_navigation_single_image_stays_put() {
        let store = store_with_images(1);
        let mut editor = AnnotationEditor::new();

        editor.next_image(&store);
        assert_eq!(editor.current_index(), 0);
        editor.next_image(&store);
        assert_eq!(editor.current_index(), 0);
        editor.prev_image(&store);
        assert_eq!(editor.current_index(), 0);
    }

    #[test]
    fn test_navigation_empty_project_is_noop() {
        let store = store_with_images(0);
        let mut editor = AnnotationEditor::new();

        editor.next_image(&store);
        editor.prev_image(&store);
        assert_eq!(editor.current_index(), 0);
    }

    #[test]
    fn test_image_switch_cancels_drag() {
        let mut store = store_with_images(2);
        let mut editor = AnnotationEditor::new();

        editor.pointer_down(&store, Point::new(10.0, 10.0));
        editor.pointer_move(Point::new(100.0, 100.0));
        editor.next_image(&store);

        assert!(editor.drag_rect().is_none());
        // A stray release after the switch must not create a box
        editor.pointer_up_with(&mut store, |_| Some("stray".to_string()));
        assert!(store.project().images[0].boxes.is_empty());
        assert!(store.project().images[1].boxes.is_empty());
    }

    #[test]
    fn test_select_image_shows_that_images_boxes() {
        let mut store = store_with_images(2);
        let mut editor = AnnotationEditor::new();

        drag(&mut editor, &mut store, (10.0, 10.0), (100.0, 80.0), Some("cat"));
        editor.select_image(&store, 1);
        assert!(editor.boxes_to_draw(&store).is_empty());

        editor.select_image(&store, 0);
        let draw = editor.boxes_to_draw(&store);
        assert_eq!(draw.len(), 1);
        assert_eq!(draw[0].label.as_deref(), Some("cat"));
    }

    #[test]
    fn test_select_image_out_of_range_keeps_index() {
        let store = store_with_images(2);
        let mut editor = AnnotationEditor::new();

        editor.select_image(&store, 1);
        editor.select_image(&store, 7);
        assert_eq!(editor.current_index(), 1);
    }

    #[test]
    fn test_boxes_to_draw_includes_live_candidate() {
        let mut store = store_with_images(1);
        let mut editor = AnnotationEditor::new();
        drag(&mut editor, &mut store, (0.0, 0.0), (50.0, 50.0), Some("cat"));

        editor.pointer_down(&store, Point::new(60.0, 60.0));
        editor.pointer_move(Point::new(90.0, 100.0));

        let draw = editor.boxes_to_draw(&store);
        assert_eq!(draw.len(), 2);
        assert_eq!(draw[0].label.as_deref(), Some("cat"));
        assert_eq!(draw[1].label, None);
        assert_eq!(draw[1].rect.width, 30.0);
        assert_eq!(draw[1].rect.height, 40.0);
    }

    #[test]
    fn test_boxes_to_draw_is_idempotent() {
        let mut store = store_with_images(1);
        let mut editor = AnnotationEditor::new();
        drag(&mut editor, &mut store, (0.0, 0.0), (50.0, 50.0), Some("cat"));
        editor.pointer_down(&store, Point::new(60.0, 60.0));

        let first = editor.boxes_to_draw(&store);
        let second = editor.boxes_to_draw(&store);
        assert_eq!(first, second);
    }

    #[test]
    fn test_scenario_two_images_qualifying_drag() {
        // Project with 2 images, drag (10,10) -> (100,80), label "cat"
        let mut store = store_with_images(2);
        let mut editor = AnnotationEditor::new();

        drag(&mut editor, &mut store, (10.0, 10.0), (100.0, 80.0), Some("cat"));

        let img0 = &store.project().images[0];
        assert_eq!(img0.boxes.len(), 1);
        let b = &img0.boxes[0];
        assert_eq!(
            (b.x, b.y, b.width, b.height, b.label.as_str()),
            (10.0, 10.0, 90.0, 70.0, "cat")
        );
        assert!(store.project().images[1].boxes.is_empty());
    }

    #[test]
    fn test_scenario_two_by_two_drag_discarded() {
        let mut store = store_with_images(2);
        let mut editor = AnnotationEditor::new();

        drag(&mut editor, &mut store, (10.0, 10.0), (12.0, 12.0), Some("cat"));

        assert!(store.project().images[0].boxes.is_empty());
    }
}
