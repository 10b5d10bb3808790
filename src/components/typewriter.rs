//! Typewriter Component
//!
//! Reveals its text one character at a time with a blinking cursor.
//! Replaying bumps a generation counter; the running task checks it before
//! every character, so a stale run stops instead of racing the new one.

use std::time::Duration;

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct TypewriterProps {
    pub text: String,
    /// Per-character delay
    #[props(default = 50)]
    pub speed_ms: u64,
    /// Delay before the first character (lets lines type in sequence)
    #[props(default = 0)]
    pub start_delay_ms: u64,
    /// Show a replay control once typing completes
    #[props(default = false)]
    pub replayable: bool,
}

#[component]
pub fn Typewriter(props: TypewriterProps) -> Element {
    let mut shown = use_signal(String::new);
    let mut done = use_signal(|| false);
    let mut generation = use_signal(|| 0u64);

    let text = props.text.clone();
    let speed = Duration::from_millis(props.speed_ms);
    let start_delay = Duration::from_millis(props.start_delay_ms);

    use_effect(move || {
        let run = generation();
        let text = text.clone();
        shown.set(String::new());
        done.set(false);

        spawn(async move {
            tokio::time::sleep(start_delay).await;
            for ch in text.chars() {
                if *generation.peek() != run {
                    return; // replaced by a replay
                }
                tokio::time::sleep(speed).await;
                shown.write().push(ch);
            }
            if *generation.peek() == run {
                done.set(true);
            }
        });
    });

    rsx! {
        div { class: "typewriter",
            p {
                class: if done() { "typing-text typing-complete" } else { "typing-text" },
                "{shown}"
            }
            if props.replayable && done() {
                button {
                    class: "replay-btn",
                    "aria-label": "Replay",
                    onclick: move |_| generation += 1,
                    "↻"
                }
            }
        }
    }
}
