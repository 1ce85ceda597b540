//! Request dispatchers for the three forms
//!
//! Each submission moves its form to `Pending` and renders a working panel
//! before the request task is spawned. The completion message moves it to
//! `Succeeded` or `Failed` and routes the outcome to the result region and,
//! for the image and contribution flows, to a modal. Responses are applied in
//! arrival order; the last one wins its region.

use std::path::PathBuf;
use std::result::Result;

use faunara_core::prelude::*;
use faunara_core::{
    collect_attributes, ClassificationResponse, ContributionReceipt, ContributionRecord,
    FlowError,
};

use super::{UpdateAction, UpdateResult};
use crate::form::FormId;
use crate::modal::{classification_body, success_body, ModalKind};
use crate::preview::ImagePreview;
use crate::results::{self, RegionId};
use crate::state::{AppState, DispatchPhase};

/// Turn a path field into an optional path; blank means "no file"
fn image_path(raw: &str) -> Option<PathBuf> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
}

pub fn submit(state: &mut AppState, form: FormId) -> UpdateResult {
    match form {
        FormId::ClassifyImage => submit_image(state),
        FormId::GuessAttributes => submit_attributes(state),
        FormId::Improve => submit_improve(state),
    }
}

// ─────────────────────────────────────────────────────────────────
// Image Flow
// ─────────────────────────────────────────────────────────────────

fn submit_image(state: &mut AppState) -> UpdateResult {
    let image_path = image_path(&state.forms.image.path);
    debug!("Submitting image classification ({:?})", image_path);

    state.dispatch.set(FormId::ClassifyImage, DispatchPhase::Pending);
    state
        .results
        .render(RegionId::ImageResult, results::classifying());

    UpdateResult::action(UpdateAction::ClassifyImage { image_path })
}

pub fn image_classified(
    state: &mut AppState,
    preview: Option<ImagePreview>,
    outcome: Result<ClassificationResponse, FlowError>,
) -> UpdateResult {
    match outcome {
        Ok(response) => {
            let animal = response.animal_or_default();
            info!(
                "Image classified as {} ({:?})",
                animal.display_name(),
                response.match_score
            );
            state
                .dispatch
                .set(FormId::ClassifyImage, DispatchPhase::Succeeded);

            let body = classification_body(
                &animal,
                response.match_score,
                preview,
                state.settings.ui.save_hint_below_score,
            );
            state.open_modal(ModalKind::Classification, body);
            state.results.render(
                RegionId::ImageResult,
                results::classification_complete(&response),
            );
        }
        Err(err) => {
            warn!("Image classification failed: {}", err.message);
            state.dispatch.set(FormId::ClassifyImage, DispatchPhase::Failed);

            let panel = if err.is_no_match() {
                results::no_match()
            } else {
                results::failure(&err)
            };
            state.results.render(RegionId::ImageResult, panel);
        }
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────
// Attribute Flow
// ─────────────────────────────────────────────────────────────────

fn submit_attributes(state: &mut AppState) -> UpdateResult {
    let attributes = collect_attributes(&state.forms.guess);

    if attributes.is_empty() {
        debug!("Attribute guess rejected: no attributes");
        state
            .dispatch
            .set(FormId::GuessAttributes, DispatchPhase::Failed);
        let err = FlowError::from(Error::MissingAttributes);
        state
            .results
            .render(RegionId::AttributesResult, results::failure(&err));
        return UpdateResult::none();
    }

    debug!("Submitting attribute guess: {}", attributes.to_json_string());
    state
        .dispatch
        .set(FormId::GuessAttributes, DispatchPhase::Pending);
    state
        .results
        .render(RegionId::AttributesResult, results::guessing());

    UpdateResult::action(UpdateAction::ClassifyAttributes { attributes })
}

pub fn attributes_classified(
    state: &mut AppState,
    outcome: Result<ClassificationResponse, FlowError>,
) -> UpdateResult {
    let panel = match outcome {
        Ok(response) => {
            info!(
                "Closest match by attributes: {}",
                response.animal_or_default().display_name()
            );
            state
                .dispatch
                .set(FormId::GuessAttributes, DispatchPhase::Succeeded);
            results::closest_match(&response)
        }
        Err(err) => {
            warn!("Attribute classification failed: {}", err.message);
            state
                .dispatch
                .set(FormId::GuessAttributes, DispatchPhase::Failed);
            results::failure(&err)
        }
    };
    state.results.render(RegionId::AttributesResult, panel);
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────
// Contribution Flow
// ─────────────────────────────────────────────────────────────────

fn submit_improve(state: &mut AppState) -> UpdateResult {
    let form = &state.forms.improve;
    let record = ContributionRecord {
        name: form.name.clone(),
        habitat: form.habitat.clone(),
        facts: form.facts.clone(),
        attributes: collect_attributes(&form.attributes),
        image: None,
    };
    let image_path = image_path(&form.image_path);
    debug!(
        "Submitting new animal {:?} (image: {:?})",
        record.name, image_path
    );

    state.dispatch.set(FormId::Improve, DispatchPhase::Pending);
    state
        .results
        .render(RegionId::ImproveResult, results::saving());

    UpdateResult::action(UpdateAction::Improve {
        record: Box::new(record),
        image_path,
    })
}

pub fn contribution_saved(
    state: &mut AppState,
    record: ContributionRecord,
    preview: Option<ImagePreview>,
    outcome: Result<ContributionReceipt, FlowError>,
) -> UpdateResult {
    match outcome {
        Ok(receipt) => {
            info!("Saved {:?} as id {:?}", record.name, receipt.id);
            state.dispatch.set(FormId::Improve, DispatchPhase::Succeeded);

            state.open_modal(ModalKind::Success, success_body(&record, receipt.id, preview));
            state.results.render(
                RegionId::ImproveResult,
                results::animal_saved(&record, receipt.id),
            );

            state.forms.improve.reset();
            state.toggle.reset();
            state.normalize_focus();
        }
        Err(err) => {
            warn!("Saving {:?} failed: {}", record.name, err.message);
            state.dispatch.set(FormId::Improve, DispatchPhase::Failed);
            state
                .results
                .render(RegionId::ImproveResult, results::failure(&err));
        }
    }
    UpdateResult::none()
}
