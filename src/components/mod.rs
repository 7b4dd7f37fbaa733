use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

pub mod donut_chart;
pub mod item_modal;
pub mod map_panel;
pub mod mobile_menu;
pub mod nav_dropdown;
pub mod upload_label;

// Shared by the dropdown and the mobile menu: the `open` class and the
// trigger's aria-expanded are always written together from one boolean.
pub(crate) fn sync_expanded(menu: &Element, trigger: &Element, open: bool) {
    let classes = menu.class_list();
    let _ = if open {
        classes.add_1("open")
    } else {
        classes.remove_1("open")
    };
    let _ = trigger.set_attribute("aria-expanded", if open { "true" } else { "false" });
}

pub(crate) fn focus(el: &Element) {
    if let Some(el) = el.dyn_ref::<HtmlElement>() {
        let _ = el.focus();
    }
}
