//! Effects that reach outside the component: the document fetch and the
//! clue list scroll position.

use anyhow::{anyhow, bail};
use cluegrid_core::{
    ClueIndex, LoadError, PuzzleState, Rect, SCROLL_AREA_ID, clue_element_id, load_puzzle,
    scroll_offset,
};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, Response};

fn js_error(value: JsValue) -> anyhow::Error {
    anyhow!("{:?}", value)
}

async fn fetch_text(url: &str) -> anyhow::Result<String> {
    let response: Response = JsFuture::from(gloo::utils::window().fetch_with_str(url))
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;
    if !response.ok() {
        bail!("HTTP {} for {}", response.status(), url);
    }

    let body = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    body.as_string()
        .ok_or_else(|| anyhow!("response body of {url} is not text"))
}

pub(crate) async fn fetch_puzzle(url: &str) -> Result<PuzzleState, LoadError> {
    let text = fetch_text(url)
        .await
        .map_err(|err| LoadError::Fetch(err.to_string()))?;
    load_puzzle(&text)
}

fn element_by_id(id: &str) -> anyhow::Result<Element> {
    gloo::utils::document()
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("no element with id={id}"))
}

fn vertical_rect(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(rect.y(), rect.height())
}

/// Scrolls the clue list just enough to show clue `index`.
pub(crate) fn scroll_to_clue(index: ClueIndex) -> anyhow::Result<()> {
    let clue = element_by_id(&clue_element_id(index))?;
    let area = element_by_id(SCROLL_AREA_ID)?;

    let offset = scroll_offset(
        area.scroll_top().into(),
        vertical_rect(&clue),
        vertical_rect(&area),
    );
    area.set_scroll_top(offset.round() as i32);
    Ok(())
}
