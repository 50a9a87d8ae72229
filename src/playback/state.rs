//! Per-role playback bookkeeping

use crate::chord::VoiceRole;

use super::engine::NoteHandle;

#[derive(Default)]
struct VoiceSlot {
    handles: Vec<Box<dyn NoteHandle>>,
    sounding: bool,
}

/// Which voice roles are sounding, and the handles needed to stop them.
///
/// Each role holds at most one set of handles: [`PlaybackState::start`]
/// replaces whatever was recorded before, so callers stop the old set first.
#[derive(Default)]
pub struct PlaybackState {
    slots: [VoiceSlot; 5],
}

impl PlaybackState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop every recorded handle for `role`, forget them and mark the role silent.
    ///
    /// Returns how many handles were stopped. Stopping a silent role is a no-op
    /// that returns 0.
    pub fn stop(&mut self, role: VoiceRole) -> usize {
        let slot = &mut self.slots[role.index()];
        let stopped = slot.handles.len();
        for handle in slot.handles.drain(..) {
            handle.stop();
        }
        slot.sounding = false;
        stopped
    }

    pub fn stop_all(&mut self) -> usize {
        VoiceRole::ALL.into_iter().map(|role| self.stop(role)).sum()
    }

    /// Record freshly scheduled handles for `role` and mark it sounding.
    pub fn start(&mut self, role: VoiceRole, handles: Vec<Box<dyn NoteHandle>>) {
        let slot = &mut self.slots[role.index()];
        slot.handles = handles;
        slot.sounding = true;
    }

    /// Flip the role back to silent once its notes have run out.
    ///
    /// Handles are kept: the notes already ended on their own, and a later
    /// stop on them is harmless.
    pub fn mark_silent(&mut self, role: VoiceRole) {
        self.slots[role.index()].sounding = false;
    }

    pub fn is_sounding(&self, role: VoiceRole) -> bool {
        self.slots[role.index()].sounding
    }

    pub fn handle_count(&self, role: VoiceRole) -> usize {
        self.slots[role.index()].handles.len()
    }

    pub fn sounding_roles(&self) -> Vec<VoiceRole> {
        VoiceRole::ALL
            .into_iter()
            .filter(|role| self.is_sounding(*role))
            .collect()
    }
}
