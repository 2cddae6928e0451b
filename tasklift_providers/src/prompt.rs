/// Instruction sent ahead of every sentence.
pub const EXTRACTION_INSTRUCTION: &str = r#"You are a task extraction assistant.
Given a natural language sentence, extract the key details and return ONLY a valid JSON object with the following fields:
{
  "title": string,
  "time": string | null,
  "venue": string | null,
  "category": "work" | "school" | "chores" | "project"
}
Rules:
- "title" = short 2-6 word summary of the activity.
- "time" = capture any mentioned time (e.g. "9pm", "14:30", "tomorrow 8am"), or null if missing.
- "venue" = extract location (e.g. "AB1-324", "office", "home"), or null if missing.
- "category" = classify task based on context, checking in this order:
  - work: meetings, office, job-related
  - school: classes, exams, assignments
  - project: software projects, hackathons, coding tasks
  - chores: errands, groceries, cleaning, personal tasks, and anything else
Return only JSON. Do not include explanations, markdown or extra text."#;

/// Full prompt for one sentence. The sentence is JSON-quoted so that quotes
/// and newlines in user input cannot break out of it.
#[must_use]
pub fn build_prompt(text: &str) -> String {
    let quoted = serde_json::to_string(text).unwrap_or_else(|_| format!("\"{text}\""));
    format!("{EXTRACTION_INSTRUCTION}\n\nText to parse: {quoted}")
}
