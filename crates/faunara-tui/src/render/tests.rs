//! Full-screen rendering tests

use super::*;
use crate::test_utils::TestTerminal;
use faunara_app::form::FormId;
use faunara_app::handler::update;
use faunara_app::message::Message;
use faunara_app::modal::{DismissTrigger, ModalKind};
use faunara_core::{
    AnimalSummary, ClassificationResponse, ContributionReceipt, ContributionRecord, Error, FlowError,
};

fn fox() -> ClassificationResponse {
    ClassificationResponse {
        animal: Some(AnimalSummary {
            name: Some("Red Fox".to_string()),
            ..Default::default()
        }),
        match_score: Some(0.8),
        ..Default::default()
    }
}

#[test]
fn test_initial_screen_shows_three_forms() {
    let state = AppState::new();
    let mut term = TestTerminal::with_size(80, 40);
    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("FAUNARA"));
    assert!(term.buffer_contains("Classify Image"));
    assert!(term.buffer_contains("Guess by Attributes"));
    assert!(term.buffer_contains("Improve Faunara"));
    assert!(term.buffer_contains("Click to select attributes ▼"));
    assert!(term.buffer_contains("Enter submit"));
}

#[test]
fn test_result_regions_hidden_until_rendered() {
    let mut state = AppState::new();
    let mut term = TestTerminal::with_size(80, 40);
    term.draw_with(|frame| view(frame, &state));
    assert!(!term.buffer_contains("Error"));

    update(
        &mut state,
        Message::ImageClassified {
            preview: None,
            outcome: Err(FlowError::from(Error::network("connection refused"))),
        },
    );
    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("Error"));
    assert!(term.buffer_contains("connection refused"));
}

#[test]
fn test_classification_modal_over_forms() {
    let mut state = AppState::new();
    update(
        &mut state,
        Message::ImageClassified {
            preview: None,
            outcome: Ok(fox()),
        },
    );

    let mut term = TestTerminal::with_size(80, 40);
    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("Animal Classification Result"));
    assert!(term.buffer_contains("[ Close ]"));
    assert!(term.buffer_contains("Esc close all"));
}

#[test]
fn test_topmost_modal_drawn_last() {
    let mut state = AppState::new();
    update(
        &mut state,
        Message::ImageClassified {
            preview: None,
            outcome: Ok(fox()),
        },
    );
    update(
        &mut state,
        Message::ContributionSaved {
            record: Box::new(ContributionRecord {
                name: "Okapi".to_string(),
                ..Default::default()
            }),
            preview: None,
            outcome: Ok(ContributionReceipt {
                id: Some(3),
                message: None,
            }),
        },
    );

    let mut term = TestTerminal::with_size(80, 40);
    term.draw_with(|frame| view(frame, &state));
    assert!(term.buffer_contains("Animal Added to FAUNARA"));

    update(
        &mut state,
        Message::DismissModal {
            modal: ModalKind::Success,
            trigger: DismissTrigger::CloseButton,
        },
    );
    term.draw_with(|frame| view(frame, &state));
    assert!(!term.buffer_contains("Animal Added to FAUNARA"));
    assert!(term.buffer_contains("Animal Classification Result"));
}

#[test]
fn test_escape_clears_modals_from_screen() {
    let mut state = AppState::new();
    update(
        &mut state,
        Message::ImageClassified {
            preview: None,
            outcome: Ok(fox()),
        },
    );
    update(&mut state, Message::DismissAll);

    let mut term = TestTerminal::with_size(80, 40);
    term.draw_with(|frame| view(frame, &state));

    assert!(!term.buffer_contains("Animal Classification Result"));
    assert!(term.buffer_contains("Classification Complete"));
}

#[test]
fn test_small_terminal_does_not_panic() {
    let mut state = AppState::new();
    update(&mut state, Message::Submit(FormId::GuessAttributes));
    update(
        &mut state,
        Message::ImageClassified {
            preview: None,
            outcome: Ok(fox()),
        },
    );

    let mut term = TestTerminal::with_size(20, 6);
    term.draw_with(|frame| view(frame, &state));
}
