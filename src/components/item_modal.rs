use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, KeyboardEvent, MouseEvent, Node};
use yew::prelude::*;

use crate::model::ItemDetails;

pub fn init(document: &Document) {
    let Some(root) = document.get_element_by_id("item-modal-root") else {
        return;
    };
    yew::Renderer::<ItemModal>::with_root(root).render();
}

// A backdrop click is a click on the modal root itself, never on a
// descendant. Yew dispatches handlers from a single listener on the mount
// host, so the event's currentTarget is the host element, not the rendered
// root; the root has to be compared explicitly.
fn is_backdrop_click<T: PartialEq>(target: Option<T>, modal_root: Option<T>) -> bool {
    target.is_some() && target == modal_root
}

#[function_component(ItemModal)]
pub fn item_modal() -> Html {
    let details = use_state(ItemDetails::default);
    let open = use_state(|| false);
    let modal_ref = use_node_ref();
    // Mirror of `open` readable from the page-lifetime document listeners.
    let open_flag = use_mut_ref(|| false);

    {
        // Delegated document listeners: clicks on browse-card detail
        // triggers (server-rendered, outside this island) and Escape while
        // the modal is open. Attached once, never removed.
        let details = details.clone();
        let open = open.clone();
        let open_flag = open_flag.clone();
        use_effect_with((), move |_| {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                let on_click = {
                    let details = details.clone();
                    let open = open.clone();
                    Closure::wrap(Box::new(move |e: MouseEvent| {
                        let trigger = e
                            .target()
                            .and_then(|t| t.dyn_into::<Element>().ok())
                            .and_then(|el| el.closest(".js-item-details").ok().flatten());
                        if let Some(trigger) = trigger {
                            details.set(ItemDetails::from_element(&trigger));
                            open.set(true);
                        }
                    }) as Box<dyn FnMut(_)>)
                };
                let _ = document
                    .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
                on_click.forget();

                let on_keydown = {
                    let open = open.clone();
                    let open_flag = open_flag.clone();
                    Closure::wrap(Box::new(move |e: KeyboardEvent| {
                        if e.key() == "Escape" && *open_flag.borrow() {
                            open.set(false);
                        }
                    }) as Box<dyn FnMut(_)>)
                };
                let _ = document
                    .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
                on_keydown.forget();
            }
            || ()
        });
    }

    {
        // Keep the listener-visible flag and the body scroll lock in sync.
        let open_flag = open_flag.clone();
        let is_open = *open;
        use_effect_with(is_open, move |_| {
            *open_flag.borrow_mut() = is_open;
            if let Some(body) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.body())
            {
                let classes = body.class_list();
                let _ = if is_open {
                    classes.add_1("modal-open")
                } else {
                    classes.remove_1("modal-open")
                };
            }
            || ()
        });
    }

    let on_close = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(false))
    };
    let on_backdrop_click = {
        let open = open.clone();
        let modal_ref = modal_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
            if is_backdrop_click(target, modal_ref.get()) {
                open.set(false);
            }
        })
    };

    let has_image = details.image_src().is_some();

    html! {
        <div
            ref={modal_ref}
            class={classes!("item-modal", (*open).then_some("open"))}
            role="dialog"
            aria-hidden={if *open { "false" } else { "true" }}
            aria-labelledby="itemModalTitle"
            onclick={on_backdrop_click}
        >
            <div class="item-modal-card">
                <button type="button" class="modal-close" aria-label="Close" onclick={on_close}>
                    {"\u{00d7}"}
                </button>
                <div class="item-modal-media">
                    {
                        if let Some(src) = details.image_src() {
                            html! {
                                <img
                                    class="item-modal-img"
                                    src={src.to_string()}
                                    alt={details.image_alt()}
                                />
                            }
                        } else {
                            html! {}
                        }
                    }
                    <div
                        class="item-modal-placeholder"
                        style={if has_image { "display:none;" } else { "display:flex;" }}
                    >
                        {"No photo"}
                    </div>
                </div>
                <h2 id="itemModalTitle">{ details.title_text().to_string() }</h2>
                <p class="item-modal-desc">{ details.description_text().to_string() }</p>
                <dl class="item-modal-meta">
                    <dt>{"Category"}</dt>
                    <dd>{ details.category_text().to_string() }</dd>
                    <dt>{"Location"}</dt>
                    <dd>{ details.location_text().to_string() }</dd>
                    <dt>{"Date"}</dt>
                    <dd>{ details.date_text().to_string() }</dd>
                </dl>
                <span class="item-status" data-status={details.status_raw().to_string()}>
                    { details.status_raw().to_string() }
                </span>
                <a class="btn-claim" href={details.claim_href().to_string()}>
                    {"Claim this item"}
                </a>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_click_matches_the_modal_root_only() {
        assert!(is_backdrop_click(Some("modal-root"), Some("modal-root")));
        // Clicks inside the dialog card keep the modal open.
        assert!(!is_backdrop_click(Some("modal-card"), Some("modal-root")));
        assert!(!is_backdrop_click(None, Some("modal-root")));
        assert!(!is_backdrop_click(Some("modal-root"), None));
        // An unmounted root can never count as hit.
        assert!(!is_backdrop_click(None::<&str>, None));
    }
}
