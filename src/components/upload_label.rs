use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Event, HtmlInputElement};

const NO_FILE: &str = "No file selected";

// Mirrors the chosen photo's filename into the upload label. A cancelled
// file dialog clears the selection, which reads back as the placeholder.
pub fn init(document: &Document) {
    let Some(input) = document
        .get_element_by_id("photo")
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    else {
        return;
    };
    let Some(label) = document.get_element_by_id("uploadFilename") else {
        return;
    };

    let on_change = {
        let input = input.clone();
        Closure::wrap(Box::new(move |_e: Event| {
            let name = input
                .files()
                .and_then(|files| files.get(0))
                .map(|file| file.name());
            label.set_text_content(Some(name.as_deref().unwrap_or(NO_FILE)));
        }) as Box<dyn FnMut(_)>)
    };
    let _ = input.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref());
    on_change.forget();
}
