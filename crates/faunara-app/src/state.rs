//! Application state (Model in TEA pattern)

use crate::config::Settings;
use crate::form::{focus_order, FieldId, FormId, Forms};
use crate::modal::{DismissTrigger, ModalBody, ModalController, ModalKind};
use crate::results::ResultRegions;
use crate::toggle::AttributesToggle;

/// Overall application phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Lifecycle of one form's most recent submission
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DispatchPhase {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// Per-form dispatch state
#[derive(Debug, Clone, Default)]
pub struct Dispatchers {
    pub image: DispatchPhase,
    pub attributes: DispatchPhase,
    pub improve: DispatchPhase,
}

impl Dispatchers {
    pub fn phase(&self, form: FormId) -> DispatchPhase {
        match form {
            FormId::ClassifyImage => self.image,
            FormId::GuessAttributes => self.attributes,
            FormId::Improve => self.improve,
        }
    }

    pub fn set(&mut self, form: FormId, phase: DispatchPhase) {
        match form {
            FormId::ClassifyImage => self.image = phase,
            FormId::GuessAttributes => self.attributes = phase,
            FormId::Improve => self.improve = phase,
        }
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    /// Settings from the config file
    pub settings: Settings,

    pub forms: Forms,
    pub focus: FieldId,
    pub toggle: AttributesToggle,

    /// Result regions under each form
    pub results: ResultRegions,

    pub dispatch: Dispatchers,

    pub success_modal: ModalController,
    pub classification_modal: ModalController,

    /// Open modals, most recently opened last
    modal_stack: Vec<ModalKind>,

    /// Animation frame for pending panels, advanced on every tick
    pub spinner_frame: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            phase: AppPhase::Running,
            settings,
            forms: Forms::default(),
            focus: FieldId::ImagePath,
            toggle: AttributesToggle::default(),
            results: ResultRegions::default(),
            dispatch: Dispatchers::default(),
            success_modal: ModalController::new(ModalKind::Success),
            classification_modal: ModalController::new(ModalKind::Classification),
            modal_stack: Vec::new(),
            spinner_frame: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    // ─────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────

    pub fn modal(&self, kind: ModalKind) -> &ModalController {
        match kind {
            ModalKind::Success => &self.success_modal,
            ModalKind::Classification => &self.classification_modal,
        }
    }

    fn modal_mut(&mut self, kind: ModalKind) -> &mut ModalController {
        match kind {
            ModalKind::Success => &mut self.success_modal,
            ModalKind::Classification => &mut self.classification_modal,
        }
    }

    /// Open a modal on top of any other open modal
    pub fn open_modal(&mut self, kind: ModalKind, body: ModalBody) {
        self.modal_mut(kind).open(body);
        self.modal_stack.retain(|k| *k != kind);
        self.modal_stack.push(kind);
    }

    /// Close one modal. Returns whether it was open.
    pub fn close_modal(&mut self, kind: ModalKind, trigger: DismissTrigger) -> bool {
        let changed = self.modal_mut(kind).close(trigger);
        self.modal_stack.retain(|k| *k != kind);
        changed
    }

    /// Close every open modal, each evaluated on its own
    pub fn dismiss_all(&mut self) -> usize {
        [ModalKind::Success, ModalKind::Classification]
            .into_iter()
            .filter(|kind| self.close_modal(*kind, DismissTrigger::Escape))
            .count()
    }

    /// The modal that receives input, if any is open
    pub fn top_modal(&self) -> Option<ModalKind> {
        self.modal_stack.last().copied()
    }

    /// Open modals, bottom first
    pub fn open_modals(&self) -> &[ModalKind] {
        &self.modal_stack
    }

    // ─────────────────────────────────────────────────────────
    // Focus
    // ─────────────────────────────────────────────────────────

    pub fn focus_next(&mut self) {
        self.move_focus(1);
    }

    pub fn focus_previous(&mut self) {
        self.move_focus(-1);
    }

    fn move_focus(&mut self, step: isize) {
        let order = focus_order(self.toggle.is_visible());
        let len = order.len() as isize;
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0) as isize;
        let next = (current + step).rem_euclid(len);
        self.focus = order[next as usize];
    }

    /// Move focus off fields that are no longer visible
    pub fn normalize_focus(&mut self) {
        if !focus_order(self.toggle.is_visible()).contains(&self.focus) {
            self.focus = FieldId::ImproveToggle;
        }
    }
}
