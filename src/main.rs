use web_sys::Document;

mod components;
mod model;
mod state;
mod util;

// One initialization pass over the page. Each unit guards on its own
// markup and injected data, so pages that don't carry a given block skip
// it silently.
fn init_page(document: &Document) {
    components::nav_dropdown::init(document);
    components::mobile_menu::init(document);
    components::donut_chart::init(document);
    components::map_panel::init(document);
    components::item_modal::init(document);
    components::upload_label::init(document);
}

fn main() {
    console_error_panic_hook::set_once();
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        init_page(&document);
    }
}
