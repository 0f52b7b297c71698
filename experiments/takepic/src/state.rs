/// Input as seen by the render loop; only the mask key is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    MaskKeyDown,
    MaskKeyUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Capture,
}

/// Whether the guide mask is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaskState {
    #[default]
    Idle,
    MaskShown,
}

impl MaskState {
    /// Apply one input event. Releasing the key while the mask is shown is
    /// the capture trigger; a release without a matching press is ignored.
    pub fn handle(&mut self, event: InputEvent) -> Option<Action> {
        match (*self, event) {
            (_, InputEvent::Quit) => Some(Action::Quit),
            (_, InputEvent::MaskKeyDown) => {
                *self = MaskState::MaskShown;
                None
            }
            (MaskState::MaskShown, InputEvent::MaskKeyUp) => {
                *self = MaskState::Idle;
                Some(Action::Capture)
            }
            (MaskState::Idle, InputEvent::MaskKeyUp) => None,
        }
    }

    pub fn mask_shown(&self) -> bool {
        *self == MaskState::MaskShown
    }
}
