//! Ripple Button Component
//!
//! A button that spawns an expanding ripple where it was clicked. Ripples
//! live in local state for the duration of their animation, then clean
//! themselves up.

use std::time::Duration;

use dioxus::prelude::*;

#[derive(Clone, PartialEq)]
struct Ripple {
    id: u64,
    x: f64,
    y: f64,
}

#[derive(Props, Clone, PartialEq)]
pub struct RippleButtonProps {
    #[props(default = String::new())]
    pub class: String,
    #[props(default = false)]
    pub disabled: bool,
    pub onclick: EventHandler<MouseEvent>,
    pub children: Element,
}

#[component]
pub fn RippleButton(props: RippleButtonProps) -> Element {
    let mut ripples = use_signal(Vec::<Ripple>::new);
    let mut seq = use_signal(|| 0u64);
    let handler = props.onclick;

    let on_click = move |e: MouseEvent| {
        let p = e.element_coordinates();
        let id = seq() + 1;
        seq.set(id);
        ripples.write().push(Ripple { id, x: p.x, y: p.y });

        spawn(async move {
            tokio::time::sleep(Duration::from_millis(600)).await;
            ripples.write().retain(|r| r.id != id);
        });

        handler.call(e);
    };

    rsx! {
        button {
            class: "ripple-button {props.class}",
            disabled: props.disabled,
            onclick: on_click,

            {props.children}

            for r in ripples.read().iter() {
                span {
                    key: "{r.id}",
                    class: "ripple",
                    style: "left: {r.x}px; top: {r.y}px;",
                }
            }
        }
    }
}
