//! Chatbot store: current conversation step and message log.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::sync::steps;

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Bot,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub id: u64,
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatbotState {
    pub current_step: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip)]
    next_id: u64,
}

impl Default for ChatbotState {
    fn default() -> Self {
        Self {
            current_step: steps::WELCOME.to_string(),
            messages: Vec::new(),
            next_id: 1,
        }
    }
}

impl ChatbotState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_current_step(&mut self, step: impl Into<String>) {
        self.current_step = step.into();
    }

    pub fn push_bot(&mut self, text: impl Into<String>) -> &ChatMessage {
        self.push(Sender::Bot, text.into())
    }

    pub fn push_user(&mut self, text: impl Into<String>) -> &ChatMessage {
        self.push(Sender::User, text.into())
    }

    fn push(&mut self, sender: Sender, text: String) -> &ChatMessage {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            sender,
            text,
            timestamp: Utc::now(),
        });
        &self.messages[self.messages.len() - 1]
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Bot lines sent when the conversation enters `step`.
pub fn bot_script(step: &str) -> &'static [&'static str] {
    match step {
        steps::WELCOME => &[
            "Hey there! Welcome to HeyBo.",
            "Want one of our signature bowls, or build your own?",
        ],
        steps::LOCATION_SELECTION => &["Which store will you pick up from?"],
        steps::SIGNATURE_BOWLS | steps::BOWL_MENU => &[
            "Here are our signature bowls.",
            "Tap one to see what's inside.",
        ],
        steps::CREATE_YOUR_OWN => &["Let's build your bowl.", "Start with a base."],
        steps::CUSTOMIZE_SIGNATURE => &["Swap anything you like."],
        steps::CART_REVIEW => &["Here's your cart."],
        steps::UPSELL => &["Add a side or a drink?"],
        steps::CHECKOUT => &["Almost there. Confirm your pickup details."],
        steps::ORDER_CONFIRMATION => &["Order placed!", "We'll let you know when it's ready."],
        steps::FAVORITES => &["Your favorite bowls."],
        steps::ORDER_HISTORY => &["Your past orders. Reorder in one tap."],
        _ => &[],
    }
}
