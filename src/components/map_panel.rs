use web_sys::{Document, HtmlElement};
use yew::prelude::*;

use crate::model::{self, CAMPUS_PINS, MapItem, MapItemsIndex, MapPin};
use crate::state::place_float_panel;
use crate::util::browse_search_url;

pub fn init(document: &Document) {
    let Some(root) = document.get_element_by_id("map-root") else {
        return;
    };
    let Some(items) = model::injected::<MapItemsIndex>("__MAP_ITEMS__") else {
        return;
    };
    yew::Renderer::<MapPanel>::with_root_and_props(root, MapPanelProps { items }).render();
}

#[derive(Properties, PartialEq, Clone)]
pub struct MapPanelProps {
    pub items: MapItemsIndex,
}

// `seq` bumps on every click so re-clicking the same pin still re-runs the
// placement effect.
#[derive(Clone, PartialEq)]
struct Selection {
    pin: MapPin,
    seq: u32,
}

#[function_component(MapPanel)]
pub fn map_panel(props: &MapPanelProps) -> Html {
    let selection = use_state(|| None::<Selection>);
    let visible = use_state(|| false);
    let click_seq = use_mut_ref(|| 0u32);
    let wrap_ref = use_node_ref();
    let float_ref = use_node_ref();

    {
        // Reposition after the selected pin's items are in the DOM, so the
        // panel is measured at its rendered size.
        let wrap_ref = wrap_ref.clone();
        let float_ref = float_ref.clone();
        use_effect_with((*selection).clone(), move |selection| {
            if let Some(selection) = selection {
                reposition(&wrap_ref, &float_ref, selection.pin.id);
            }
            || ()
        });
    }

    let on_close = {
        // Hides the panel; the last-rendered content stays put.
        let visible = visible.clone();
        Callback::from(move |_| visible.set(false))
    };

    let selected_pin = selection.as_ref().map(|s| s.pin);
    let entries: &[MapItem] = selected_pin
        .and_then(|pin| props.items.get(pin.id))
        .map(Vec::as_slice)
        .unwrap_or(&[]);

    html! {
        <div class="map-wrap" ref={wrap_ref}>
            <img class="map-img" src="/static/img/campus-map.png" alt="Campus map" />
            { for CAMPUS_PINS.iter().map(|pin| {
                let onclick = {
                    let selection = selection.clone();
                    let visible = visible.clone();
                    let click_seq = click_seq.clone();
                    let pin = *pin;
                    Callback::from(move |_| {
                        let seq = {
                            let mut seq = click_seq.borrow_mut();
                            *seq = seq.wrapping_add(1);
                            *seq
                        };
                        selection.set(Some(Selection { pin, seq }));
                        visible.set(true);
                    })
                };
                html! {
                    <button
                        type="button"
                        class="map-pin"
                        data-loc-id={pin.id}
                        style={format!("left:{}%; top:{}%;", pin.x, pin.y)}
                        {onclick}
                    >
                        <span class="map-pin-label">{ pin.name }</span>
                    </button>
                }
            })}
            <div
                class="map-float"
                ref={float_ref}
                style={if *visible { "display:block;" } else { "display:none;" }}
            >
                <button type="button" class="map-float-close" onclick={on_close}>
                    {"\u{00d7}"}
                </button>
                <h3 class="map-float-title">{ selected_pin.map(|pin| pin.name).unwrap_or("") }</h3>
                <p class="map-float-sub muted">{"Items reported in this location:"}</p>
                {
                    if selected_pin.is_some() && entries.is_empty() {
                        html! { <p class="map-empty muted">{"No items reported here yet."}</p> }
                    } else {
                        html! {}
                    }
                }
                <ul class="map-items">
                    { for entries.iter().map(item_entry) }
                </ul>
            </div>
        </div>
    }
}

fn item_entry(item: &MapItem) -> Html {
    html! {
        <li class="map-item">
            <div><strong>{ item.title.clone() }</strong></div>
            <div class="muted tiny">{ format!("{} \u{2022} {}", item.category, item.date_found) }</div>
            <div class="muted tiny">{ item.location_found.clone() }</div>
            <a class="tiny" href={browse_search_url(&item.title)}>{"View in Browse"}</a>
        </li>
    }
}

fn reposition(wrap_ref: &NodeRef, float_ref: &NodeRef, pin_id: &str) {
    let Some(wrap) = wrap_ref.cast::<HtmlElement>() else {
        return;
    };
    let Some(float) = float_ref.cast::<HtmlElement>() else {
        return;
    };
    let Some(pin) = wrap
        .query_selector(&format!(".map-pin[data-loc-id=\"{}\"]", pin_id))
        .ok()
        .flatten()
    else {
        return;
    };

    let map_rect = wrap.get_bounding_client_rect();
    let pin_rect = pin.get_bounding_client_rect();
    let placement = place_float_panel(
        pin_rect.left() - map_rect.left(),
        pin_rect.top() - map_rect.top(),
        map_rect.width(),
        map_rect.height(),
        float.offset_width() as f64,
        float.offset_height() as f64,
    );

    let style = float.style();
    let _ = style.set_property("left", &format!("{}px", placement.left));
    let _ = style.set_property("top", &format!("{}px", placement.top));
}
