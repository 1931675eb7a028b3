use crate::{
    clients::openai::OpenAiClient,
    error::Result,
    models::mood::{MoodRequest, MoodResponse},
};

pub const CATEGORIES: [&str; 10] = [
    "sad",
    "anxious",
    "stressed",
    "overwhelmed",
    "angry",
    "frustrated",
    "lonely",
    "burned out",
    "tired",
    "worried",
];

/// Emitted alone on the first line when no category fits.
pub const UNCLEAR: &str = "unclear";

pub const FALLBACK_TEXT: &str = "Thanks for sharing. Could you say a bit more?";

pub fn system_prompt() -> String {
    format!(
        "You classify emotions from free text and write one short, supportive message.\n\
         Valid categories (comma-separated): {}.\n\
         If you cannot confidently map the input, return \"{UNCLEAR}\" as the ONLY category on the first line, \
         and on the second line ask ONE specific clarifying question \
         (e.g., \"Could you share what's been weighing on you most: sleep, studies, or relationships?\").\n\
         Reply with exactly two lines and nothing else.",
        CATEGORIES.join(", ")
    )
}

pub fn user_prompt(req: &MoodRequest) -> String {
    let picked = if req.moods.is_empty() {
        "(none)".to_string()
    } else {
        req.moods.join(", ")
    };
    format!(
        "User feelings picked: {picked}.\n\
         User text: \"\"\"{}\"\"\".\n\
         \n\
         Output format:\n\
         1) First line: categories only (comma-separated, lower-case). Use EXACTLY \"{UNCLEAR}\" if you aren't sure.\n\
         2) Second line: a brief, kind response (1-2 sentences). If first line is \"{UNCLEAR}\", include ONE clarifying question.",
        req.story
    )
}

/// Splits a two-line reply into categories and message. Never fails: drift
/// from the requested shape degrades to fewer categories or the fallback text.
pub fn parse_reply(raw: &str) -> MoodResponse {
    let (first, rest) = raw.split_once('\n').unwrap_or((raw, ""));
    let inferred_moods = first
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();
    let ai_text = match rest.trim() {
        "" => FALLBACK_TEXT.to_string(),
        text => text.to_string(),
    };
    MoodResponse { inferred_moods, ai_text }
}

pub async fn classify(client: &OpenAiClient, req: &MoodRequest) -> Result<MoodResponse> {
    let raw = client.complete(&system_prompt(), &user_prompt(req)).await?;
    Ok(parse_reply(&raw))
}
