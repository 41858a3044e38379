//! DOM host for `GridController`.
//!
//! Builds the scrollable structure inside a host element, attaches a
//! throttled scroll listener and a window resize listener, and refills the
//! rendered window through a JS `renderCell({x, y})` callback.
//!
//! Structure:
//! - scroll container: `overflow: auto`, fills the host
//! - grid space: `position: relative`, sized to the full content
//! - grid window: `position: absolute; display: grid`, placed at the padding

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use js_sys::{Function, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlDivElement, HtmlElement, Node, Window};

use super::{ElementSize, GridController, GridFrame, ScrollThrottle};
use crate::error::GridError;
use crate::layout::CellIndices;
use crate::types::{CellSize, ContainerSize, HostOptions, ScrollPosition};

type EventClosure = Closure<dyn FnMut(web_sys::Event)>;

fn now_ms() -> f64 {
    if let Some(window) = web_sys::window() {
        if let Some(perf) = window.performance() {
            return perf.now();
        }
    }
    js_sys::Date::now()
}

/// Read a numeric property; `scrollTop`/`scrollLeft` are fractional on
/// high-DPI displays, which the integer getters truncate.
fn read_f64(element: &HtmlDivElement, key: &str) -> f64 {
    Reflect::get(element.as_ref(), &JsValue::from_str(key))
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0)
}

fn scroll_position(element: &HtmlDivElement) -> ScrollPosition {
    ScrollPosition::new(read_f64(element, "scrollTop"), read_f64(element, "scrollLeft"))
}

fn element_size(element: &HtmlElement) -> Option<ContainerSize> {
    if !element.is_connected() {
        return None;
    }
    Some(ContainerSize::new(
        f64::from(element.offset_width()),
        f64::from(element.offset_height()),
    ))
}

fn create_div(document: &Document) -> Result<HtmlDivElement, GridError> {
    document
        .create_element("div")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlDivElement>().ok())
        .ok_or_else(|| GridError::Host("failed to create div".into()))
}

fn set_styles(element: &HtmlElement, styles: &[(&str, &str)]) {
    let style = element.style();
    for (name, value) in styles {
        let _ = style.set_property(name, value);
    }
}

/// State shared between the exported handle and the event listeners.
struct HostState {
    controller: GridController,
    throttle: ScrollThrottle,
    size: ElementSize,
    cell: CellSize,
    render_cell: Function,
    document: Document,
    scroll_container: HtmlDivElement,
    grid_window: HtmlDivElement,
    rendered: Option<Arc<CellIndices>>,
}

impl HostState {
    fn measure(&mut self) -> bool {
        self.size.measure(element_size(&self.scroll_container))
    }

    fn draw(&mut self) {
        let frame = self
            .controller
            .frame(self.throttle.current(), self.size.current());
        let placement = frame.placement(self.cell);
        let top = format!("{}px", placement.top);
        let left = format!("{}px", placement.left);
        let columns = placement.grid_template_columns();
        let rows = placement.grid_template_rows();
        set_styles(
            &self.grid_window,
            &[
                ("top", top.as_str()),
                ("left", left.as_str()),
                ("grid-template-columns", columns.as_str()),
                ("grid-template-rows", rows.as_str()),
            ],
        );

        // Same cached window: the cells on screen are already right.
        if self
            .rendered
            .as_ref()
            .is_some_and(|rendered| Arc::ptr_eq(rendered, &frame.indices))
        {
            return;
        }
        self.fill_window(&frame);
        self.rendered = Some(Arc::clone(&frame.indices));
    }

    fn fill_window(&self, frame: &GridFrame) {
        self.grid_window.set_inner_html("");
        for coord in frame.indices.iter() {
            let result = serde_wasm_bindgen::to_value(&coord)
                .map_err(JsValue::from)
                .and_then(|arg| self.render_cell.call1(&JsValue::NULL, &arg));
            let node = match result {
                Ok(value) => self.to_node(value),
                Err(err) => {
                    log::warn!("renderCell failed for ({}, {}): {:?}", coord.x, coord.y, err);
                    None
                }
            };
            // An empty cell still occupies its grid track.
            let node = node.or_else(|| create_div(&self.document).ok().map(Node::from));
            if let Some(node) = node {
                let _ = self.grid_window.append_child(&node);
            }
        }
    }

    /// Accept a DOM node, or wrap a string in a div.
    fn to_node(&self, value: JsValue) -> Option<Node> {
        if let Some(text) = value.as_string() {
            let div = create_div(&self.document).ok()?;
            div.set_text_content(Some(&text));
            return Some(Node::from(div));
        }
        value.dyn_into::<Node>().ok()
    }
}

/// A virtualized grid mounted inside a host element.
#[wasm_bindgen]
pub struct VirtualGrid {
    state: Rc<RefCell<HostState>>,
    window: Window,
    scroll_container: HtmlDivElement,
    scroll_closure: Option<EventClosure>,
    resize_closure: Option<EventClosure>,
}

#[wasm_bindgen]
impl VirtualGrid {
    /// Mount a grid inside `host`.
    ///
    /// `options` is `{ rowCount, columnCount, cellWidth?, cellHeight?,
    /// overScan?, throttleMs? }`; `render_cell` receives `{x, y}` and returns
    /// a DOM node or a string.
    #[wasm_bindgen(constructor)]
    pub fn new(
        host: HtmlElement,
        options: JsValue,
        render_cell: Function,
    ) -> Result<VirtualGrid, JsValue> {
        console_error_panic_hook::set_once();

        let options: HostOptions = serde_wasm_bindgen::from_value(options)?;
        let controller = GridController::new(options.grid.clone())?;
        let content = controller.content_size();

        let window = web_sys::window().ok_or_else(|| GridError::Host("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| GridError::Host("no document".into()))?;

        let scroll_container = create_div(&document)?;
        let grid_space = create_div(&document)?;
        let grid_window = create_div(&document)?;

        set_styles(
            &scroll_container,
            &[("overflow", "auto"), ("width", "100%"), ("height", "100%")],
        );
        let content_width = format!("{}px", content.width);
        let content_height = format!("{}px", content.height);
        set_styles(
            &grid_space,
            &[
                ("position", "relative"),
                ("width", content_width.as_str()),
                ("height", content_height.as_str()),
            ],
        );
        set_styles(&grid_window, &[("position", "absolute"), ("display", "grid")]);

        grid_space.append_child(&grid_window)?;
        scroll_container.append_child(&grid_space)?;
        host.append_child(&scroll_container)?;

        let state = Rc::new(RefCell::new(HostState {
            controller,
            throttle: ScrollThrottle::new(options.throttle_ms),
            size: ElementSize::new(),
            cell: options.grid.cell_size(),
            render_cell,
            document,
            scroll_container: scroll_container.clone(),
            grid_window,
            rendered: None,
        }));

        let mut grid = VirtualGrid {
            state,
            window,
            scroll_container,
            scroll_closure: None,
            resize_closure: None,
        };
        grid.attach_listeners()?;

        // Measure once eagerly; the window resize listener covers the rest.
        if let Ok(mut s) = grid.state.try_borrow_mut() {
            s.measure();
            s.draw();
        }
        Ok(grid)
    }

    /// Re-read size and scroll position and redraw, bypassing the throttle.
    pub fn refresh(&self) {
        let Ok(mut s) = self.state.try_borrow_mut() else {
            return;
        };
        s.measure();
        let position = scroll_position(&self.scroll_container);
        s.throttle.sync(position);
        s.draw();
    }

    /// Scroll the container and redraw immediately.
    #[wasm_bindgen(js_name = scrollTo)]
    pub fn scroll_to(&self, top: f64, left: f64) {
        let target = self.scroll_container.as_ref();
        let _ = Reflect::set(target, &JsValue::from_str("scrollTop"), &JsValue::from_f64(top));
        let _ = Reflect::set(target, &JsValue::from_str("scrollLeft"), &JsValue::from_f64(left));
        self.refresh();
    }

    /// Number of cells currently in the DOM window.
    #[wasm_bindgen(js_name = renderedCellCount)]
    pub fn rendered_cell_count(&self) -> usize {
        self.state
            .try_borrow()
            .ok()
            .and_then(|s| s.rendered.as_ref().map(|indices| indices.len()))
            .unwrap_or(0)
    }

    /// The current frame as a plain JS object.
    pub fn frame(&self) -> Result<JsValue, JsValue> {
        let mut s = self
            .state
            .try_borrow_mut()
            .map_err(|_| GridError::Host("grid is busy rendering".into()))?;
        let scroll = s.throttle.current();
        let size = s.size.current();
        let frame = s.controller.frame(scroll, size);
        Ok(serde_wasm_bindgen::to_value(&frame)?)
    }

    /// Remove listeners and the grid's DOM. The handle is inert afterwards.
    pub fn destroy(&mut self) {
        self.detach();
    }
}

impl VirtualGrid {
    fn attach_listeners(&mut self) -> Result<(), JsValue> {
        let scroll_closure = {
            let state = Rc::clone(&self.state);
            Closure::wrap(Box::new(move |_event: web_sys::Event| {
                let Ok(mut s) = state.try_borrow_mut() else {
                    return;
                };
                let position = scroll_position(&s.scroll_container);
                if s.throttle.offer(now_ms(), position).is_some() {
                    s.draw();
                }
            }) as Box<dyn FnMut(web_sys::Event)>)
        };
        self.scroll_container
            .add_event_listener_with_callback("scroll", scroll_closure.as_ref().unchecked_ref())?;
        self.scroll_closure = Some(scroll_closure);

        let resize_closure = {
            let state = Rc::clone(&self.state);
            Closure::wrap(Box::new(move |_event: web_sys::Event| {
                let Ok(mut s) = state.try_borrow_mut() else {
                    return;
                };
                if s.measure() {
                    s.draw();
                }
            }) as Box<dyn FnMut(web_sys::Event)>)
        };
        self.window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
        self.resize_closure = Some(resize_closure);
        Ok(())
    }

    fn detach(&mut self) {
        if let Some(closure) = self.scroll_closure.take() {
            let _ = self
                .scroll_container
                .remove_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        }
        if let Some(closure) = self.resize_closure.take() {
            let _ = self
                .window
                .remove_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        }
        self.scroll_container.remove();
        if let Ok(mut s) = self.state.try_borrow_mut() {
            s.rendered = None;
        }
    }
}

impl Drop for VirtualGrid {
    fn drop(&mut self) {
        self.detach();
    }
}
