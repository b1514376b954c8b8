use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

/// CSS class the orb canvas carries so it never swallows pointer input.
const CANVAS_CLASS: &str = "pointer-events-none";

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

fn document() -> anyhow::Result<web::Document> {
    window_document().ok_or_else(|| anyhow!("no document"))
}

pub fn canvas_by_id(element_id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = document()?
        .get_element_by_id(element_id)
        .ok_or_else(|| anyhow!("missing #{element_id}"))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| anyhow!("#{element_id} is not a canvas"))
}

/// Create an orb canvas as the last child of `#container_id`.
pub fn append_canvas(container_id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let document = document()?;
    let container = document
        .get_element_by_id(container_id)
        .ok_or_else(|| anyhow!("missing #{container_id}"))?;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow!("create canvas: {:?}", e))?
        .dyn_into()
        .map_err(|_| anyhow!("created element is not a canvas"))?;
    _ = canvas.class_list().add_1(CANVAS_CLASS);
    container
        .append_child(&canvas)
        .map_err(|e| anyhow!("append canvas: {:?}", e))?;
    Ok(canvas)
}
