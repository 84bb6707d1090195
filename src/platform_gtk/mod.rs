//! GTK4 binding of the view's frame loop to a widget's frame clock.

use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::{FlowMapView, FrameControl};
use crate::error::FlowMapResult;
use crate::render::Renderer;

/// Drives `view` from `widget`'s tick callback until the widget unmaps.
///
/// The tick callback is removed and the view torn down on unmap, so no frame
/// callback outlives the widget.
pub fn bind_frame_loop<R, W>(view: Rc<RefCell<FlowMapView<R>>>, widget: &W) -> FlowMapResult<()>
where
    R: Renderer + 'static,
    W: IsA<gtk::Widget>,
{
    view.borrow_mut().mount()?;

    let tick_id = widget.add_tick_callback({
        let view = Rc::clone(&view);
        move |widget, _frame_clock| {
            let Ok(mut view) = view.try_borrow_mut() else {
                return gtk::glib::ControlFlow::Continue;
            };
            match view.on_frame() {
                Ok(FrameControl::Continue) => {
                    widget.queue_draw();
                    gtk::glib::ControlFlow::Continue
                }
                Ok(FrameControl::Break) => gtk::glib::ControlFlow::Break,
                Err(err) => {
                    warn!(error = %err, "flow map frame failed");
                    gtk::glib::ControlFlow::Continue
                }
            }
        }
    });

    let tick_id = RefCell::new(Some(tick_id));
    widget.connect_unmap(move |_| {
        if let Some(id) = tick_id.borrow_mut().take() {
            id.remove();
        }
        if let Ok(mut view) = view.try_borrow_mut() {
            view.unmount();
        }
    });

    Ok(())
}
