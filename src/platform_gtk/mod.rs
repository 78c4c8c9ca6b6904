//! GTK4 embedding: a `DrawingArea` wired to a [`BarChartEngine`].
//!
//! The draw callback renders through Cairo, a `GestureDrag` feeds
//! `drag_move`/`drag_end`, and a frame-clock tick callback drives the bar
//! animation until it finishes.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use gtk::glib;
use gtk::prelude::*;
use gtk4 as gtk;
use tracing::warn;

use crate::api::BarChartEngine;
use crate::core::{ChartDataset, Viewport};
use crate::error::ChartResult;
use crate::render::{CairoContextRenderer, Renderer};

/// Shared handle to the engine driven by a [`BarChartArea`].
///
/// Selection listeners run while the engine is mutably borrowed and must not
/// borrow it again.
pub type SharedEngine<R> = Rc<RefCell<BarChartEngine<R>>>;

pub struct BarChartArea<R: Renderer + CairoContextRenderer + 'static> {
    area: gtk::DrawingArea,
    engine: SharedEngine<R>,
    ticking: Rc<Cell<bool>>,
}

impl<R: Renderer + CairoContextRenderer + 'static> BarChartArea<R> {
    #[must_use]
    pub fn new(engine: BarChartEngine<R>) -> Self {
        let viewport = engine.viewport();
        let engine = Rc::new(RefCell::new(engine));
        let area = gtk::DrawingArea::new();
        area.set_content_width(viewport.width.round() as i32);
        area.set_content_height(viewport.height.round() as i32);

        let ticking = Rc::new(Cell::new(false));
        install_draw_func(&area, &engine);
        install_drag_gesture(&area, &engine);
        install_animation_tick(&area, &engine, &ticking);

        Self {
            area,
            engine,
            ticking,
        }
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.area
    }

    #[must_use]
    pub fn engine(&self) -> SharedEngine<R> {
        Rc::clone(&self.engine)
    }

    /// Replaces the dataset and restarts the frame clock when a new
    /// animation was seeded.
    pub fn set_dataset(&self, dataset: impl Into<Arc<ChartDataset>>) -> ChartResult<()> {
        let animating = {
            let mut engine = self.engine.borrow_mut();
            engine.set_dataset(dataset)?;
            engine.is_animating()
        };
        if animating {
            install_animation_tick(&self.area, &self.engine, &self.ticking);
        }
        self.area.queue_draw();
        Ok(())
    }
}

fn install_draw_func<R: Renderer + CairoContextRenderer + 'static>(
    area: &gtk::DrawingArea,
    engine: &SharedEngine<R>,
) {
    let engine = Rc::clone(engine);
    area.set_draw_func(move |_, context, width, height| {
        let mut engine = engine.borrow_mut();
        let viewport = Viewport::new(f64::from(width), f64::from(height));
        if viewport != engine.viewport() {
            if let Err(err) = engine.set_viewport(viewport) {
                warn!(error = %err, width, height, "skipping draw for unusable allocation");
                return;
            }
        }
        if let Err(err) = engine.render_on_cairo_context(context) {
            warn!(error = %err, "bar chart draw failed");
        }
    });
}

fn install_drag_gesture<R: Renderer + CairoContextRenderer + 'static>(
    area: &gtk::DrawingArea,
    engine: &SharedEngine<R>,
) {
    let drag = gtk::GestureDrag::new();

    let update_engine = Rc::clone(engine);
    let update_area = area.downgrade();
    drag.connect_drag_update(move |gesture, offset_x, offset_y| {
        let Some((start_x, start_y)) = gesture.start_point() else {
            return;
        };
        let result = update_engine
            .borrow_mut()
            .drag_move(start_x + offset_x, start_y + offset_y);
        if let Err(err) = result {
            warn!(error = %err, "ignoring drag update");
        }
        if let Some(area) = update_area.upgrade() {
            area.queue_draw();
        }
    });

    let end_engine = Rc::clone(engine);
    let end_area = area.downgrade();
    drag.connect_drag_end(move |_, _, _| {
        end_engine.borrow_mut().drag_end();
        if let Some(area) = end_area.upgrade() {
            area.queue_draw();
        }
    });

    area.add_controller(drag);
}

/// At most one tick callback runs at a time; `ticking` is cleared when it stops.
fn install_animation_tick<R: Renderer + CairoContextRenderer + 'static>(
    area: &gtk::DrawingArea,
    engine: &SharedEngine<R>,
    ticking: &Rc<Cell<bool>>,
) {
    if ticking.replace(true) {
        return;
    }
    let engine = Rc::clone(engine);
    let ticking = Rc::clone(ticking);
    let last_frame_time_us = Cell::new(None::<i64>);
    area.add_tick_callback(move |widget, clock| {
        let now_us = clock.frame_time();
        let delta = last_frame_time_us
            .replace(Some(now_us))
            .map_or(Duration::ZERO, |previous| {
                Duration::from_micros(u64::try_from(now_us - previous).unwrap_or(0))
            });
        let keep_running = engine.borrow_mut().advance_animation(delta);
        widget.queue_draw();
        if keep_running {
            glib::ControlFlow::Continue
        } else {
            ticking.set(false);
            glib::ControlFlow::Break
        }
    });
}
