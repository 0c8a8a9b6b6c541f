//! The two call-site flows composed the way the client application runs
//! them: envelope decode → extraction pipeline → caller fallback policy.

use uncork::envelope::{AgentRequest, response_text};
use uncork::{FallbackPolicy, FortuneData, SummaryData, structured};

fn canned_fortune() -> FortuneData {
    serde_json::from_value(serde_json::json!({
        "result": {
            "fortune": "The stars align in your favor today. Trust your instincts.",
            "tone": "positive",
            "length": 58,
            "timestamp": "1970-01-01T00:00:00Z"
        },
        "confidence": 0.8,
        "metadata": {
            "processing_time": "1s",
            "fortune_type": "general"
        }
    }))
    .unwrap()
}

#[test]
fn fortune_flow_happy_path() {
    let request = AgentRequest::new("fortune-agent", "Generate a fortune message");
    assert_eq!(request.message, "Generate a fortune message");

    let body = serde_json::json!({
        "response": "Your fortune:\n```json\n{\"result\":{\"fortune\":\"Be bold.\",\"tone\":\"positive\",\"length\":8,\"timestamp\":\"2024-01-01T00:00:00Z\"},\"confidence\":0.9,\"metadata\":{\"processing_time\":\"0.5s\",\"fortune_type\":\"general\"}}\n```",
        "session_id": request.session_id
    })
    .to_string();

    let raw = response_text(&body).unwrap();
    let policy = FallbackPolicy::new(canned_fortune(), 60);
    let shown = policy.resolve_fortune(structured::<FortuneData>(&raw));
    assert_eq!(shown.result.fortune, "Be bold.");
}

#[test]
fn fortune_flow_falls_back_on_prose_reply() {
    let body = serde_json::json!({
        "response": "Sorry, I cannot help with that."
    })
    .to_string();

    let raw = response_text(&body).unwrap();
    let policy = FallbackPolicy::new(canned_fortune(), 60);
    let shown = policy.resolve_fortune(structured::<FortuneData>(&raw));
    assert_eq!(shown.result.fortune, canned_fortune().result.fortune);
}

#[test]
fn summary_flow_happy_path() {
    let body = serde_json::json!({
        "response": "{\"result\":{\"summary\":\"Be bold\",\"original_length\":8,\"summary_length\":7,\"share_format\":\"plain\"},\"confidence\":0.7,\"metadata\":{\"processing_time\":\"0.2s\",\"compression_ratio\":0.875}}"
    })
    .to_string();

    let raw = response_text(&body).unwrap();
    let policy = FallbackPolicy::new(canned_fortune(), 60);
    let shown = policy.resolve_summary(structured::<SummaryData>(&raw), "Be bold.");
    assert_eq!(shown, "Be bold");
}

#[test]
fn summary_flow_falls_back_to_truncated_fortune() {
    let fortune = "The stars align in your favor today. Trust your instincts and embrace it.";
    let body = serde_json::json!({ "response": "no structure at all" }).to_string();

    let raw = response_text(&body).unwrap();
    let policy = FallbackPolicy::new(canned_fortune(), 60);
    let shown = policy.resolve_summary(structured::<SummaryData>(&raw), fortune);
    assert_eq!(shown, format!("{}...", &fortune[..60]));
}

#[test]
fn truncated_model_output_reaches_the_policy_as_a_typed_error() {
    // The agent ran out of tokens mid-record; the caller still gets a
    // fortune to show.
    let body = serde_json::json!({
        "response": "```json\n{\"result\":{\"fortune\":\"Be bo"
    })
    .to_string();

    let raw = response_text(&body).unwrap();
    let outcome = structured::<FortuneData>(&raw);
    assert!(outcome.is_err());
    let policy = FallbackPolicy::new(canned_fortune(), 60);
    let shown = policy.resolve_fortune(outcome);
    assert_eq!(shown.metadata.fortune_type, "general");
}
