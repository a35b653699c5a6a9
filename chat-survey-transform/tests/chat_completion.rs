//! Tests for the chat completion transformer against a mock endpoint

use chat_survey::{
    EngineConfig, Question, QuestionKind, ResponseTransformer, StaticSource, SurveyEngine,
    TransformError,
};
use chat_survey_transform::{ChatCompletionTransformer, TransformMode, TransformerConfig};
use httpmock::{Method::POST, MockServer};
use serde_json::json;

fn completion(content: &str) -> serde_json::Value {
    json!({
        "choices": [
            { "message": { "role": "assistant", "content": content } }
        ]
    })
}

#[test]
fn test_transition_reply() -> anyhow::Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/chat/completions")
            .header("authorization", "Bearer secret")
            .body_contains("\"model\":\"llama3\"")
            .body_contains("I called about my bill");
        then.status(200).json_body(completion("  Thanks for letting us know!  "));
    });

    let transformer = ChatCompletionTransformer::new(
        TransformerConfig::new(server.url("/v1/chat/completions"))
            .with_api_key("secret")
            .with_model("llama3"),
    )?;

    let reply = transformer.transform("What did you call about?", "I called about my bill")?;
    assert_eq!(reply, "Thanks for letting us know!");
    mock.assert();
    Ok(())
}

#[test]
fn test_gamify_strips_echoed_prompt() -> anyhow::Result<()> {
    let server = MockServer::start();
    let echoed = "Q: Rate us\nA: 5\nGamify this: Five stars! You unlocked the loyal fan badge.";
    let mock = server.mock(|when, then| {
        when.method(POST).body_contains("Gamify this:");
        then.status(200).json_body(completion(echoed));
    });

    let transformer = ChatCompletionTransformer::new(
        TransformerConfig::new(server.url("/chat")).with_mode(TransformMode::Gamify),
    )?;

    assert_eq!(
        transformer.transform("Rate us", "5")?,
        "Five stars! You unlocked the loyal fan badge."
    );
    mock.assert();
    Ok(())
}

#[test]
fn test_error_status() -> anyhow::Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST);
        then.status(503).body("model is loading");
    });

    let transformer = ChatCompletionTransformer::new(TransformerConfig::new(server.url("/chat")))?;
    let err = transformer.transform("Q", "A").unwrap_err();
    assert!(err.to_string().contains("503"));
    Ok(())
}

#[test]
fn test_empty_choices_and_blank_content() -> anyhow::Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/none");
        then.status(200).json_body(json!({ "choices": [] }));
    });
    server.mock(|when, then| {
        when.method(POST).path("/blank");
        then.status(200).json_body(completion("   "));
    });

    let none = ChatCompletionTransformer::new(TransformerConfig::new(server.url("/none")))?;
    assert!(matches!(none.transform("Q", "A"), Err(TransformError::Backend(_))));

    let blank = ChatCompletionTransformer::new(TransformerConfig::new(server.url("/blank")))?;
    assert!(matches!(blank.transform("Q", "A"), Err(TransformError::Empty)));
    Ok(())
}

#[test]
fn test_engine_uses_model_reply() -> anyhow::Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST);
        then.status(200).json_body(completion("Got it."));
    });

    let engine = SurveyEngine::new(
        EngineConfig::new(["English"]),
        StaticSource::new().with_questions(
            "English",
            vec![
                Question::new(0, "Your ID?", QuestionKind::FillBlank),
                Question::new(1, "Rate us.", QuestionKind::rating()),
            ],
        ),
    )
    .with_transformer(ChatCompletionTransformer::new(TransformerConfig::new(
        server.url("/chat"),
    ))?);

    let mut session = engine.start(&"English".into())?;
    engine.ask(&mut session);
    engine.submit_answer(&mut session, "A-113")?;
    assert_eq!(engine.ask(&mut session), Some("Got it. Rate us."));
    Ok(())
}

#[test]
fn test_unreachable_endpoint_falls_back() -> anyhow::Result<()> {
    let engine = SurveyEngine::new(
        EngineConfig::new(["English"]),
        StaticSource::new().with_questions(
            "English",
            vec![
                Question::new(0, "Your ID?", QuestionKind::FillBlank),
                Question::new(1, "Rate us.", QuestionKind::rating()),
            ],
        ),
    )
    .with_transformer(ChatCompletionTransformer::new(TransformerConfig::new(
        "http://127.0.0.1:9/v1/chat/completions",
    ))?);

    let mut session = engine.start(&"English".into())?;
    engine.submit_answer(&mut session, "A-113")?;
    assert_eq!(engine.ask(&mut session), Some("Alright, next: Rate us."));
    Ok(())
}

#[test]
fn test_gamify_receives_question_not_greeting() -> anyhow::Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).body_contains("Q: Your ID?\\nA: A-113\\nGamify this:");
        then.status(200).json_body(completion("Agent A-113 has entered the arena!"));
    });

    let engine = SurveyEngine::new(
        EngineConfig::new(["English"]),
        StaticSource::new().with_questions(
            "English",
            vec![
                Question::new(0, "Your ID?", QuestionKind::FillBlank),
                Question::new(1, "Rate us.", QuestionKind::rating()),
            ],
        ),
    )
    .with_transformer(ChatCompletionTransformer::new(
        TransformerConfig::new(server.url("/chat")).with_mode(TransformMode::Gamify),
    )?);

    let mut session = engine.start(&"English".into())?;
    engine.ask(&mut session);
    engine.submit_answer(&mut session, "A-113")?;
    assert_eq!(
        engine.ask(&mut session),
        Some("Agent A-113 has entered the arena! Rate us.")
    );
    mock.assert();
    Ok(())
}
