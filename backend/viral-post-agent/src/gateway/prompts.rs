//! Prompt text sent to the model

pub const STRATEGIST_SYSTEM_INSTRUCTION: &str = "You are the ViralPostAgent AI Strategist. You help users refine their social media game with behavioral science and algorithm insights.";

pub const THUMBNAIL_ASPECT_RATIO: &str = "16:9";

pub const NO_ANALYSIS_FALLBACK: &str = "No analysis provided.";

pub const CHAT_FALLBACK: &str = "I'm not sure how to respond to that.";

pub fn campaign_prompt(topic: &str, description: &str) -> String {
    format!(
        r#"You are an elite Viral Content Strategist.
Topic: "{topic}"
Context: "{description}"
Generate 4 distinct viral posts for TikTok, Instagram, YouTube Shorts, and X.
Return strictly as a JSON array of objects. Use only lowercase platform identifiers: "tiktok", "instagram", "youtube", "x"."#
    )
}

pub fn thumbnail_prompt(prompt: &str) -> String {
    format!("A viral social media thumbnail or post image: {prompt}")
}

pub fn teardown_prompt(content: &str) -> String {
    format!(
        "Analyze this content for psychological triggers, algorithm retention markers, and potential virality blindspots. Provide a deep, strategic teardown: \n\n{content}"
    )
}

pub fn refine_prompt(content: &str, feedback: &str) -> String {
    format!(
        "Refine this social media post based on the following request: \"{feedback}\". Keep it viral and algorithm-optimized. \n\nOriginal Content: {content}"
    )
}
