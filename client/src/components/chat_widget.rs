//! Floating chat widget backed by the completion client.
//!
//! DESIGN
//! ======
//! Single-flight: `sending` disables submission while a request is
//! outstanding, so the rolling history has one sequenced writer and is only
//! mutated once the reply lands. Completion failures append an apology
//! entry and never reach the prompt window. Without a credential the widget
//! does not render at all.

#[cfg(test)]
#[path = "chat_widget_test.rs"]
mod chat_widget_test;

use leptos::prelude::*;
use pulldown_cmark::{Event, Options, Parser, html};

#[cfg(any(test, feature = "hydrate"))]
use assistant::ChatMessage;
use assistant::CompletionConfig;

use crate::state::chat::{ChatWidgetState, EntryRole};
use crate::util::typing::{RevealPhase, TypingReveal};

/// Generic failure notice shown in place of a reply.
pub const CHAT_APOLOGY: &str = "Sorry, I could not process that request. Please try again.";

/// Ordered turn list for one request: the rolling history plus the new user
/// turn. The history itself is only mutated after the reply arrives.
#[cfg(any(test, feature = "hydrate"))]
fn outbound_turns(history: &[ChatMessage], prompt: &str) -> Vec<ChatMessage> {
    let mut turns = history.to_vec();
    turns.push(ChatMessage::user(prompt));
    turns
}

/// Drop inline/block raw HTML from model output before rendering markdown.
fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Floating assistant chat: toggle button plus a message panel with a
/// prompt input. `context_block` is the rendered dashboard snapshot
/// injected into every request.
#[component]
pub fn ChatWidget(context_block: Signal<String>) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatWidgetState>>();
    let config = use_context::<Option<CompletionConfig>>().flatten();
    let configured = config.is_some();

    let input = RwSignal::new(String::new());
    let reveal = RwSignal::new(TypingReveal::idle());
    let reveal_generation = RwSignal::new(0u64);
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message in view as entries and the reveal grow.
    Effect::new(move || {
        let state = chat.get();
        let _ = state.entries.len();
        let _ = reveal.get().visible().len();
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = Callback::new(move |()| {
        let text = input.get();
        let prompt = text.trim().to_owned();
        if prompt.is_empty() || chat.get().sending {
            return;
        }
        input.set(String::new());
        chat.update(|c| {
            c.push_entry(EntryRole::User, prompt.clone());
            c.sending = true;
        });

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            let context_block = context_block.get_untracked();
            let turns = outbound_turns(&chat.get_untracked().history, &prompt);
            leptos::task::spawn_local(async move {
                let outcome = crate::net::completion::request_completion(
                    config.as_ref(),
                    assistant::prompt::DASHBOARD_ASSISTANT_PROMPT,
                    &context_block,
                    &turns,
                )
                .await;
                match outcome {
                    Ok(reply) => {
                        chat.update(|c| c.complete_exchange(&prompt, &reply));
                        crate::util::typing::start_reveal(reveal, reveal_generation, reply);
                    }
                    Err(_) => chat.update(|c| c.fail_exchange(CHAT_APOLOGY)),
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&prompt, context_block);
        }
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send.run(());
        }
    };

    let can_send = move || !input.get().trim().is_empty() && !chat.get().sending;

    view! {
        <Show when=move || configured>
            <div class="chat-widget" class:chat-widget--open=move || chat.get().open>
                <button
                    class="chat-widget__toggle"
                    on:click=move |_| chat.update(|c| c.open = !c.open)
                >
                    {move || if chat.get().open { "Close assistant" } else { "Ask the assistant" }}
                </button>

                <Show when=move || chat.get().open>
                    <div class="chat-widget__panel">
                        <div class="chat-widget__messages" node_ref=messages_ref>
                            {move || {
                                let state = chat.get();
                                if state.entries.is_empty() {
                                    return view! {
                                        <div class="chat-widget__empty">
                                            "Ask about transformers, inspections, or system health."
                                        </div>
                                    }
                                        .into_any();
                                }

                                let active_reveal = reveal.get();
                                let revealing_id = if active_reveal.phase() == RevealPhase::Revealing {
                                    state.latest_assistant_id().map(str::to_owned)
                                } else {
                                    None
                                };

                                state
                                    .entries
                                    .iter()
                                    .map(|entry| {
                                        let is_assistant = entry.role == EntryRole::Assistant;
                                        let is_error = entry.role == EntryRole::Error;
                                        let body = if is_assistant
                                            && revealing_id.as_deref() == Some(entry.id.as_str())
                                        {
                                            view! { <span>{active_reveal.visible()}</span> }.into_any()
                                        } else if is_assistant {
                                            let rendered = render_markdown_html(&entry.content);
                                            view! {
                                                <div class="chat-widget__markdown" inner_html=rendered></div>
                                            }
                                                .into_any()
                                        } else {
                                            view! { <span>{entry.content.clone()}</span> }.into_any()
                                        };

                                        view! {
                                            <div
                                                class="chat-widget__message"
                                                class:chat-widget__message--assistant=is_assistant
                                                class:chat-widget__message--error=is_error
                                            >
                                                {body}
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                                    .into_any()
                            }}

                            {move || {
                                chat.get()
                                    .sending
                                    .then(|| view! { <div class="chat-widget__loading">"Thinking..."</div> })
                            }}
                        </div>

                        <div class="chat-widget__input-row">
                            <input
                                class="chat-widget__input"
                                type="text"
                                placeholder="Ask the assistant..."
                                disabled=move || chat.get().sending
                                prop:value=move || input.get()
                                on:input=move |ev| input.set(event_target_value(&ev))
                                on:keydown=on_keydown
                            />
                            <button
                                class="btn btn--primary chat-widget__send"
                                disabled=move || !can_send()
                                on:click=move |_| do_send.run(())
                            >
                                "Send"
                            </button>
                        </div>
                    </div>
                </Show>
            </div>
        </Show>
    }
}
