//! Chat Page
//!
//! The chat room. All state is component-local: messages live in a signal
//! for the lifetime of the page and are gone once you navigate away.

use chrono::{DateTime, Utc};
use leptos::*;

/// Who wrote a message
#[derive(Clone, Copy, PartialEq)]
pub enum Author {
    You,
    Parley,
}

/// A single chat message
#[derive(Clone, PartialEq)]
pub struct Message {
    pub author: Author,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}

impl Message {
    fn now(author: Author, body: impl Into<String>) -> Self {
        Self {
            author,
            body: body.into(),
            sent_at: Utc::now(),
        }
    }
}

/// Normalize composer input. Empty and whitespace-only drafts are discarded.
fn compose(draft: &str) -> Option<String> {
    let trimmed = draft.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Pick a canned reply to a message
fn canned_reply(body: &str) -> String {
    if body.ends_with('?') {
        "Good question. Nobody else is here yet, though.".to_string()
    } else if body.len() > 120 {
        "That was a lot. Noted.".to_string()
    } else {
        format!("You said: {}", body)
    }
}

/// Chat page component
#[component]
pub fn Chat() -> impl IntoView {
    let (messages, set_messages) = create_signal(vec![Message::now(
        Author::Parley,
        "Welcome to Parley. Say something.",
    )]);
    let (draft, set_draft) = create_signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some(body) = compose(&draft.get()) else {
            return;
        };
        set_draft.set(String::new());

        let reply = canned_reply(&body);
        set_messages.update(|log| log.push(Message::now(Author::You, body)));

        // Simulated other side, so the room never feels entirely dead
        gloo_timers::callback::Timeout::new(600, move || {
            set_messages.update(|log| log.push(Message::now(Author::Parley, reply)));
        })
        .forget();
    };

    view! {
        <div class="max-w-2xl mx-auto flex flex-col h-[70vh]">
            <h1 class="text-3xl font-bold mb-4">"Chat"</h1>

            // Message log
            <div class="flex-1 overflow-y-auto space-y-3 bg-gray-800 rounded-xl p-4">
                {move || {
                    messages
                        .get()
                        .into_iter()
                        .map(|msg| view! { <MessageBubble msg=msg /> })
                        .collect_view()
                }}
            </div>

            // Composer
            <form on:submit=on_submit class="mt-4 flex space-x-2">
                <input
                    type="text"
                    placeholder="Type a message"
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                    class="flex-1 bg-gray-700 rounded-lg px-4 py-3 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
                <button
                    type="submit"
                    class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg
                           font-semibold transition-colors"
                >
                    "Send"
                </button>
            </form>
        </div>
    }
}

/// A single message in the log
#[component]
fn MessageBubble(msg: Message) -> impl IntoView {
    let mine = msg.author == Author::You;
    let stamp = msg.sent_at.format("%H:%M").to_string();

    view! {
        <div class=if mine { "flex justify-end" } else { "flex justify-start" }>
            <div class=if mine {
                "max-w-[80%] bg-primary-600 rounded-lg px-4 py-2"
            } else {
                "max-w-[80%] bg-gray-700 rounded-lg px-4 py-2"
            }>
                <p class="text-white">{msg.body}</p>
                <p class="text-xs text-gray-300 mt-1">{stamp}</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_trims_whitespace() {
        assert_eq!(compose("  hello  "), Some("hello".to_string()));
    }

    #[test]
    fn test_compose_rejects_empty_drafts() {
        assert_eq!(compose(""), None);
        assert_eq!(compose("   "), None);
        assert_eq!(compose("\n\t"), None);
    }

    #[test]
    fn test_canned_reply_to_question() {
        assert!(canned_reply("anyone here?").contains("question"));
    }

    #[test]
    fn test_canned_reply_echoes_statement() {
        assert_eq!(canned_reply("hello"), "You said: hello");
    }
}
