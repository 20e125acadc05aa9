// ABOUTME: Assistant module — Gemini client and the conversation background task.
// ABOUTME: Fixed welcome and fallback texts shared by the task and the TUI.

pub mod client;
pub mod convo;

pub use client::{AssistantClient, ChatRole, ChatTurn, GeminiClient};
pub use convo::{ConvoParams, run_convo_loop};

/// Fixed welcome message seeding every transcript.
pub const WELCOME_MESSAGE: &str = "Hindi: नमस्ते। मैं आपकी भक्ति यात्रा में सहायता के लिए यहाँ हूँ। आज आप कैसा महसूस कर रहे हैं?\nEnglish: Namaste. I am here to help you in your devotional journey. How are you feeling today?";

/// Substituted when the Gemini call fails outright.
pub const FALLBACK_UNREACHABLE: &str = "Hindi: क्षमा करें, अभी मैं संपर्क नहीं कर पा रहा हूँ। कृपया थोड़ा नाम जप करें।\nEnglish: I'm sorry, I cannot connect right now. Please continue your Naam Jaap.";

/// Substituted when the call succeeds but returns no usable text.
pub const FALLBACK_UNCLEAR: &str =
    "Hindi: क्षमा करें, मैं समझ नहीं पाया।\nEnglish: Sorry, I couldn't understand.";
