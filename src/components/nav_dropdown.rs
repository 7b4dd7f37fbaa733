use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, HtmlElement, KeyboardEvent, MouseEvent, Node};

use super::{focus, sync_expanded};
use crate::state::MenuState;

// Accessible navigation dropdown: click + keyboard on the trigger,
// Escape from trigger or items, click-outside to close. Listeners live
// for the page; there is no teardown path.
pub fn init(document: &Document) {
    let Some(dropdown) = document.query_selector(".nav-dropdown").ok().flatten() else {
        return;
    };
    let Some(btn) = dropdown.query_selector(".nav-dropbtn").ok().flatten() else {
        return;
    };
    let Some(menu) = dropdown.query_selector(".nav-dropdown-menu").ok().flatten() else {
        return;
    };
    let Ok(items) = dropdown.query_selector_all(".nav-dd-item") else {
        return;
    };

    let state = Rc::new(RefCell::new(MenuState::default()));

    {
        let state = state.clone();
        let menu = menu.clone();
        let btn_el = btn.clone();
        let on_click = Closure::wrap(Box::new(move |e: MouseEvent| {
            e.prevent_default();
            let open = state.borrow_mut().toggle();
            sync_expanded(&menu, &btn_el, open);
        }) as Box<dyn FnMut(_)>);
        let _ = btn.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    }

    {
        let state = state.clone();
        let menu = menu.clone();
        let btn_el = btn.clone();
        let first_item = items.item(0).and_then(|n| n.dyn_into::<HtmlElement>().ok());
        let on_keydown = Closure::wrap(Box::new(move |e: KeyboardEvent| {
            match e.key().as_str() {
                "Enter" | " " => {
                    e.prevent_default();
                    let open = state.borrow_mut().toggle();
                    sync_expanded(&menu, &btn_el, open);
                }
                "ArrowDown" => {
                    e.prevent_default();
                    let open = state.borrow_mut().force_open();
                    sync_expanded(&menu, &btn_el, open);
                    if let Some(item) = &first_item {
                        let _ = item.focus();
                    }
                }
                "Escape" => {
                    let open = state.borrow_mut().force_close();
                    sync_expanded(&menu, &btn_el, open);
                    focus(&btn_el);
                }
                _ => {}
            }
        }) as Box<dyn FnMut(_)>);
        let _ = btn.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
        on_keydown.forget();
    }

    {
        // Escape from inside the menu returns focus to the trigger.
        let state = state.clone();
        let menu = menu.clone();
        let btn_el = btn.clone();
        let on_item_keydown = Closure::wrap(Box::new(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                let open = state.borrow_mut().force_close();
                sync_expanded(&menu, &btn_el, open);
                focus(&btn_el);
            }
        }) as Box<dyn FnMut(_)>);
        for i in 0..items.length() {
            if let Some(item) = items.item(i) {
                let _ = item.add_event_listener_with_callback(
                    "keydown",
                    on_item_keydown.as_ref().unchecked_ref(),
                );
            }
        }
        on_item_keydown.forget();
    }

    {
        // Any click outside the dropdown subtree closes it.
        let on_doc_click = Closure::wrap(Box::new(move |e: MouseEvent| {
            let inside = e
                .target()
                .and_then(|t| t.dyn_into::<Node>().ok())
                .map(|n| dropdown.contains(Some(&n)))
                .unwrap_or(false);
            if !inside {
                let open = state.borrow_mut().force_close();
                sync_expanded(&menu, &btn, open);
            }
        }) as Box<dyn FnMut(_)>);
        let _ =
            document.add_event_listener_with_callback("click", on_doc_click.as_ref().unchecked_ref());
        on_doc_click.forget();
    }
}
