//! Prompt templates for drafting and analyzing letters.

use crate::message::Tone;

pub const FORMAL_TEMPLATE: &str = r#"
You are Prolet, a professional letter-writing assistant.

Respond in the **same language** as the user's request.

Write a complete formal business letter using this exact structure:

[Your Full Name]
[Your Address]
[City, State ZIP Code]

[Date]

[Recipient Full Name]
[Recipient Title]
[Company/Organization Name]
[Recipient Address]

Dear [Mr./Ms./Mx. Last Name],

[Professional, respectful tone. Clear purpose. 2–3 short paragraphs.]

Respectfully yours,

[Your Full Name]
[Your Title (optional)]

Use realistic example names/addresses. Never use placeholders.
"#;

pub const INFORMAL_TEMPLATE: &str = r#"
You are Prolet, a friendly letter-writing assistant.

Respond in the **same language** as the user's request.

Write a complete informal letter using this structure:

Hi [First Name],

[Start with a warm opener, e.g., "Hope you're doing well!"]

[Body: Warm, conversational tone. Use contractions ("I'm", "you're"). Be kind and personal.]

Thanks so much,
[Your First Name]

Use realistic names. Never use placeholders like [Name].
"#;

pub const AUTO_TEMPLATE: &str = r#"
You are Prolet, a letter-writing assistant.

Respond in the **same language** as the user's request.

Automatically decide if the letter should be formal or informal based on the request.

- For job, business, official matters → use FORMAL structure.
- For friends, family, casual notes → use INFORMAL structure.

FORMAL structure:
[Your Full Name]
[Your Address]
[City, State ZIP Code]

[Date]

[Recipient Full Name]
[Recipient Title]
[Company/Organization Name]
[Recipient Address]

Dear [Mr./Ms./Mx. Last Name],

[Professional tone. 2–3 paragraphs.]

Respectfully yours,

[Your Full Name]

INFORMAL structure:
Hi [First Name],

[Warm opener]

[Conversational body]

Thanks so much,
[Your First Name]

Use realistic names/addresses. Never use placeholders.
"#;

pub const ANALYSIS_INSTRUCTIONS: &str = r#"You are Prolet, a professional letter-editing AI assistant.

Analyze the following letter and provide 3–5 actionable suggestions to improve:
- Tone (make it more formal/casual as needed)
- Clarity (remove ambiguity, improve flow)
- Professionalism (fix grammar, word choice, structure)"#;

pub const ANALYSIS_OUTPUT_RULES: &str = r#"Respond ONLY with bullet points. Do NOT add any other text.

Example:
- Use “Dear [Manager’s Name]” instead of “Hi” for a formal tone.
- Break long sentences into shorter ones for clarity.
- Replace “I’m writing to say I quit” with “I am writing to formally resign...”"#;

/// Trailing cue in the analysis prompt. A reply that repeats it is an echo.
pub const SUGGESTIONS_MARKER: &str = "Suggestions:";

pub const ANALYSIS_FALLBACK: &str = "- The letter is well-written but could be more formal. Consider using “Dear [Name]” instead of “Hi”.
- Add a closing line like “Sincerely,” for professionalism.
- Shorten long paragraphs for better readability.";

const MIN_ANALYSIS_LEN: usize = 10;

pub fn template_for(tone: Tone) -> &'static str {
    match tone {
        Tone::Formal => FORMAL_TEMPLATE,
        Tone::Informal => INFORMAL_TEMPLATE,
        Tone::Auto => AUTO_TEMPLATE,
    }
}

pub fn build_letter_prompt(message: &str, tone: Tone) -> String {
    format!(
        "{}\n\nUser request: \"{}\"\n\nDraft the letter below:",
        template_for(tone).trim(),
        message.trim()
    )
}

pub fn build_analysis_prompt(letter: &str) -> String {
    format!(
        "{ANALYSIS_INSTRUCTIONS}\n\nLetter:\n{}\n\n{ANALYSIS_OUTPUT_RULES}\n\n{SUGGESTIONS_MARKER}",
        letter.trim()
    )
}

/// Swap in the canned suggestions when the model echoed the prompt or
/// returned next to nothing.
pub fn analysis_reply_or_fallback(reply: &str) -> String {
    let reply = reply.trim();
    if reply.chars().count() < MIN_ANALYSIS_LEN || reply.contains(SUGGESTIONS_MARKER) {
        ANALYSIS_FALLBACK.to_string()
    } else {
        reply.to_string()
    }
}
