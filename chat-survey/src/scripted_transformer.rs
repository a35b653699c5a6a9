//! Test transformer for exercising the engine without a language model.
//!
//! `ScriptedTransformer` plays back a fixed sequence of replies and failures
//! and remembers every call it received. Clones share the script, so a test
//! can keep one handle and give another to the engine.
//!
//! # Example
//!
//! ```rust
//! use chat_survey::{ResponseTransformer, ScriptedTransformer};
//!
//! let transformer = ScriptedTransformer::new().reply("Nice!").fail("model offline");
//!
//! assert_eq!(transformer.transform("Q", "A").unwrap(), "Nice!");
//! assert!(transformer.transform("Q", "B").is_err());
//! assert_eq!(transformer.calls().len(), 2);
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use crate::{ResponseTransformer, TransformError};

#[derive(Debug, Default)]
struct Script {
    steps: VecDeque<Result<String, String>>,
    calls: Vec<(String, String)>,
}

/// A transformer that returns pre-configured replies in order.
///
/// Once the script runs out every call fails.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTransformer {
    script: Arc<Mutex<Script>>,
}

impl ScriptedTransformer {
    /// Create a transformer with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply.
    pub fn reply(self, text: impl Into<String>) -> Self {
        self.push(Ok(text.into()));
        self
    }

    /// Queue a failure.
    pub fn fail(self, message: impl Into<String>) -> Self {
        self.push(Err(message.into()));
        self
    }

    /// Every `(context, last_answer)` pair received so far.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.lock().calls.clone()
    }

    fn push(&self, step: Result<String, String>) {
        self.lock().steps.push_back(step);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Script> {
        self.script.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ResponseTransformer for ScriptedTransformer {
    fn transform(&self, context: &str, last_answer: &str) -> Result<String, TransformError> {
        let mut script = self.lock();
        script
            .calls
            .push((context.to_string(), last_answer.to_string()));

        match script.steps.pop_front() {
            Some(Ok(reply)) => Ok(reply),
            Some(Err(message)) => Err(TransformError::backend(anyhow::anyhow!(message))),
            None => Err(TransformError::backend(anyhow::anyhow!(
                "scripted transformer has no replies left"
            ))),
        }
    }
}
