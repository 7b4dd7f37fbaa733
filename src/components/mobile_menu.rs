use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, MouseEvent, Node};

use super::sync_expanded;
use crate::state::MenuState;

// Mobile navigation toggle with click-outside close. The toggle and the
// panel are separate subtrees, so "outside" means outside both.
pub fn init(document: &Document) {
    let Some(toggle) = document.query_selector(".nav-toggle").ok().flatten() else {
        return;
    };
    let Some(menu) = document.query_selector(".nav-mobile").ok().flatten() else {
        return;
    };

    let state = Rc::new(RefCell::new(MenuState::default()));

    {
        let state = state.clone();
        let menu = menu.clone();
        let toggle_el = toggle.clone();
        let on_click = Closure::wrap(Box::new(move |_e: MouseEvent| {
            let open = state.borrow_mut().toggle();
            sync_expanded(&menu, &toggle_el, open);
        }) as Box<dyn FnMut(_)>);
        let _ = toggle.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    }

    {
        let on_doc_click = Closure::wrap(Box::new(move |e: MouseEvent| {
            let inside = e
                .target()
                .and_then(|t| t.dyn_into::<Node>().ok())
                .map(|n| menu.contains(Some(&n)) || toggle.contains(Some(&n)))
                .unwrap_or(false);
            if !inside {
                let open = state.borrow_mut().force_close();
                sync_expanded(&menu, &toggle, open);
            }
        }) as Box<dyn FnMut(_)>);
        let _ =
            document.add_event_listener_with_callback("click", on_doc_click.as_ref().unchecked_ref());
        on_doc_click.forget();
    }
}
