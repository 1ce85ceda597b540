//! Message processing
//!
//! Runs a message through the TEA update function, follows up any returned
//! message, and hands actions to the action layer.

use std::sync::Arc;

use tokio::sync::mpsc;

use faunara_api::FaunaraApi;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<A>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    api: &Arc<A>,
) where
    A: FaunaraApi + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), api.clone());
        }

        // Continue with follow-up message
        msg = result.message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormId;
    use crate::input_key::InputKey;
    use crate::results::RegionId;
    use faunara_api::test_utils::{MockResponse, MockServer};
    use faunara_api::HttpClient;
    use faunara_core::AttributeField;

    #[tokio::test]
    async fn test_attribute_guess_round_trip_through_http() {
        let server = MockServer::start(vec![MockResponse::json(
            200,
            r#"{"animal": {"name": "Octopus", "habitat": "Ocean"}, "match_score": 0.66}"#,
        )])
        .await;
        let api = Arc::new(tokio_test::assert_ok!(HttpClient::new(&server.base_url())));
        let (tx, mut rx) = mpsc::channel(8);
        let mut state = AppState::new();
        state.forms.guess.set(AttributeField::Legs, "8");

        process_message(&mut state, Message::Submit(FormId::GuessAttributes), &tx, &api);
        assert_eq!(
            state.results.get(RegionId::AttributesResult).unwrap().title,
            "Guessing…"
        );

        let completion = rx.recv().await.unwrap();
        process_message(&mut state, completion, &tx, &api);

        let panel = state.results.get(RegionId::AttributesResult).unwrap();
        assert_eq!(panel.title, "Closest match");
        assert_eq!(panel.value_of("Name"), Some("Octopus"));
        assert_eq!(panel.value_of("Match score"), Some("66%"));
        assert_eq!(server.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_key_follow_up_is_processed() {
        let server = MockServer::start(vec![]).await;
        let api = Arc::new(HttpClient::new(&server.base_url()).unwrap());
        let (tx, _rx) = mpsc::channel(8);
        let mut state = AppState::new();

        process_message(&mut state, Message::Key(InputKey::Char('a')), &tx, &api);
        process_message(&mut state, Message::Key(InputKey::Tab), &tx, &api);

        assert_eq!(state.forms.image.path, "a");
        assert_eq!(state.focus, crate::form::FieldId::ImageSubmit);
    }
}
