use biometrics::{Collector, Counter, Moments};

pub(crate) static CLIENT_REQUESTS: Counter = Counter::new("geminius.client.requests");
pub(crate) static CLIENT_REQUEST_ERRORS: Counter = Counter::new("geminius.client.request_errors");
pub(crate) static CLIENT_REQUEST_DURATION: Moments =
    Moments::new("geminius.client.request_duration_seconds");

pub(crate) static ASSISTANT_CODE_CALLS: Counter = Counter::new("geminius.assistant.code_calls");
pub(crate) static ASSISTANT_REVIEW_CALLS: Counter =
    Counter::new("geminius.assistant.review_calls");
pub(crate) static ASSISTANT_ERRORS: Counter = Counter::new("geminius.assistant.errors");

pub(crate) static CHAT_TURNS: Counter = Counter::new("geminius.chat.turns");
pub(crate) static CHAT_TURN_DURATION: Moments =
    Moments::new("geminius.chat.turn_duration_seconds");
pub(crate) static CHAT_MODEL_SWITCHES: Counter = Counter::new("geminius.chat.model_switches");

/// Hand every counter and moments series defined here to `collector`.
pub fn register_biometrics(collector: Collector) {
    collector.register_counter(&CLIENT_REQUESTS);
    collector.register_counter(&CLIENT_REQUEST_ERRORS);
    collector.register_moments(&CLIENT_REQUEST_DURATION);

    collector.register_counter(&ASSISTANT_CODE_CALLS);
    collector.register_counter(&ASSISTANT_REVIEW_CALLS);
    collector.register_counter(&ASSISTANT_ERRORS);

    collector.register_counter(&CHAT_TURNS);
    collector.register_moments(&CHAT_TURN_DURATION);
    collector.register_counter(&CHAT_MODEL_SWITCHES);
}
