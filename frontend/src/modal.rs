//! Which overlay is showing, and the menu flag that rides along with it.

use log::{debug, warn};

use crate::scroll_lock::{ScrollLock, ScrollSurface};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveModal {
    #[default]
    None,
    Contact,
    Subscribe,
    Success,
}

impl ActiveModal {
    pub fn is_visible(self) -> bool {
        match self {
            ActiveModal::None => false,
            ActiveModal::Contact | ActiveModal::Subscribe | ActiveModal::Success => true,
        }
    }
}

/// The two forms on the page. Also selects the success overlay's copy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormKind {
    #[default]
    Contact,
    Subscribe,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    pub active_modal: ActiveModal,
    /// Only read while `active_modal` is `Success`. Left as is on close.
    pub success_kind: FormKind,
    pub menu_open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalMsg {
    OpenContact,
    OpenSubscribe,
    Submit(FormKind),
    Close,
    ToggleMenu,
}

impl ModalState {
    pub fn apply(self, msg: ModalMsg) -> Self {
        match msg {
            ModalMsg::OpenContact => Self {
                active_modal: ActiveModal::Contact,
                menu_open: false,
                ..self
            },
            ModalMsg::OpenSubscribe => Self {
                active_modal: ActiveModal::Subscribe,
                menu_open: false,
                ..self
            },
            // Accepted from any state: the inline forms submit with no overlay open.
            ModalMsg::Submit(kind) => Self {
                active_modal: ActiveModal::Success,
                success_kind: kind,
                ..self
            },
            ModalMsg::Close => Self {
                active_modal: ActiveModal::None,
                ..self
            },
            ModalMsg::ToggleMenu => Self {
                menu_open: !self.menu_open,
                ..self
            },
        }
    }
}

/// Owns the modal state and the page scroll lock, and keeps them in step.
pub struct ModalFlowController<S: ScrollSurface> {
    state: ModalState,
    scroll_lock: ScrollLock<S>,
}

impl<S: ScrollSurface> ModalFlowController<S> {
    pub fn new(surface: S) -> Self {
        Self {
            state: ModalState::default(),
            scroll_lock: ScrollLock::new(surface),
        }
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_lock.is_engaged()
    }

    /// Applies `msg` and returns whether anything observable changed.
    pub fn dispatch(&mut self, msg: ModalMsg) -> bool {
        let next = self.state.apply(msg);
        debug!("{:?}: {:?} -> {:?}", msg, self.state, next);
        let changed = next != self.state;
        self.state = next;
        self.sync_scroll_lock();
        changed
    }

    pub fn open_contact(&mut self) -> bool {
        self.dispatch(ModalMsg::OpenContact)
    }

    pub fn open_subscribe(&mut self) -> bool {
        self.dispatch(ModalMsg::OpenSubscribe)
    }

    pub fn submit(&mut self, kind: FormKind) -> bool {
        self.dispatch(ModalMsg::Submit(kind))
    }

    pub fn close(&mut self) -> bool {
        self.dispatch(ModalMsg::Close)
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.dispatch(ModalMsg::ToggleMenu)
    }

    /// Releases the scroll lock ahead of the controller going away.
    pub fn teardown(&mut self) {
        if let Err(e) = self.scroll_lock.release() {
            warn!("Failed to restore scrolling: {}", e);
        }
    }

    fn sync_scroll_lock(&mut self) {
        let result = if self.state.active_modal.is_visible() {
            self.scroll_lock.engage()
        } else {
            self.scroll_lock.release()
        };
        // A page that keeps scrolling behind an overlay is still usable.
        if let Err(e) = result {
            warn!("Scroll lock out of sync with {:?}: {}", self.state.active_modal, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll_lock::testing::{RecordingSurface, SurfaceCall};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    fn state(active_modal: ActiveModal, menu_open: bool) -> ModalState {
        ModalState {
            active_modal,
            menu_open,
            ..ModalState::default()
        }
    }

    fn controller() -> (ModalFlowController<RecordingSurface>, RecordingSurface) {
        let surface = RecordingSurface::default();
        (ModalFlowController::new(surface.clone()), surface)
    }

    #[test]
    fn test_initial_state_is_closed() {
        let (controller, surface) = controller();
        assert_eq!(controller.state(), state(ActiveModal::None, false));
        assert!(!controller.scroll_locked());
        assert!(surface.calls().is_empty());
    }

    #[test]
    fn test_menu_then_subscribe_collapses_menu() {
        let (mut controller, _) = controller();

        controller.toggle_menu();
        assert_eq!(controller.state(), state(ActiveModal::None, true));

        controller.open_subscribe();
        assert_eq!(controller.state(), state(ActiveModal::Subscribe, false));
    }

    #[test]
    fn test_contact_submit_then_close() {
        let (mut controller, surface) = controller();
        controller.open_contact();

        controller.submit(FormKind::Contact);
        assert_eq!(controller.state().active_modal, ActiveModal::Success);
        assert_eq!(controller.state().success_kind, FormKind::Contact);
        assert!(!controller.state().menu_open);

        controller.close();
        assert_eq!(controller.state().active_modal, ActiveModal::None);
        assert!(!controller.state().menu_open);
        assert_eq!(surface.calls(), vec![SurfaceCall::Suspend, SurfaceCall::Restore]);
    }

    #[test]
    fn test_subscribe_submit_shows_discount_code() {
        let (mut controller, _) = controller();
        controller.open_subscribe();
        controller.submit(FormKind::Subscribe);

        let current = controller.state();
        assert_eq!(current.active_modal, ActiveModal::Success);
        assert_eq!(current.success_kind, FormKind::Subscribe);
        assert_eq!(
            crate::content::success_copy(current.success_kind).discount_code,
            Some("ROYAL10")
        );
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let (mut controller, surface) = controller();
        assert!(!controller.close());
        assert!(!controller.close());
        assert_eq!(controller.state(), state(ActiveModal::None, false));
        assert!(surface.calls().is_empty());
    }

    #[test]
    fn test_success_kind_survives_close() {
        let (mut controller, _) = controller();
        controller.submit(FormKind::Subscribe);
        controller.close();
        assert_eq!(controller.state().success_kind, FormKind::Subscribe);
    }

    #[test]
    fn test_switching_overlays_keeps_single_lock() {
        let (mut controller, surface) = controller();
        controller.open_contact();
        controller.open_subscribe();
        controller.submit(FormKind::Subscribe);
        assert!(controller.scroll_locked());
        assert_eq!(surface.calls(), vec![SurfaceCall::Suspend]);
    }

    #[test]
    fn test_teardown_releases_lock() {
        let (mut controller, surface) = controller();
        controller.open_contact();
        controller.teardown();
        assert!(!controller.scroll_locked());
        drop(controller);
        assert_eq!(surface.calls(), vec![SurfaceCall::Suspend, SurfaceCall::Restore]);
    }

    #[test]
    fn test_drop_without_teardown_releases_lock() {
        let (mut controller, surface) = controller();
        controller.open_subscribe();
        drop(controller);
        assert_eq!(surface.calls(), vec![SurfaceCall::Suspend, SurfaceCall::Restore]);
    }

    #[test]
    fn test_failed_lock_does_not_block_transition() {
        let surface = RecordingSurface {
            fail_suspend: true,
            ..Default::default()
        };
        let mut controller = ModalFlowController::new(surface);
        assert!(controller.open_contact());
        assert_eq!(controller.state().active_modal, ActiveModal::Contact);
        assert!(!controller.scroll_locked());
    }

    #[rstest]
    #[case(ActiveModal::None, true)]
    #[case(ActiveModal::Contact, false)]
    #[case(ActiveModal::Subscribe, true)]
    #[case(ActiveModal::Success, false)]
    fn test_open_contact_closes_menu(#[case] from: ActiveModal, #[case] menu_open: bool) {
        let next = state(from, menu_open).apply(ModalMsg::OpenContact);
        assert_eq!(next.active_modal, ActiveModal::Contact);
        assert!(!next.menu_open);
    }

    #[rstest]
    #[case(ActiveModal::None)]
    #[case(ActiveModal::Contact)]
    #[case(ActiveModal::Subscribe)]
    #[case(ActiveModal::Success)]
    fn test_submit_from_any_state(#[case] from: ActiveModal) {
        for kind in [FormKind::Contact, FormKind::Subscribe] {
            let next = state(from, false).apply(ModalMsg::Submit(kind));
            assert_eq!(next.active_modal, ActiveModal::Success);
            assert_eq!(next.success_kind, kind);
        }
    }

    #[test]
    fn test_toggle_menu_leaves_overlay_alone() {
        let next = state(ActiveModal::Subscribe, false).apply(ModalMsg::ToggleMenu);
        assert_eq!(next, state(ActiveModal::Subscribe, true));
    }

    fn any_msg() -> impl Strategy<Value = ModalMsg> {
        prop_oneof![
            Just(ModalMsg::OpenContact),
            Just(ModalMsg::OpenSubscribe),
            Just(ModalMsg::Submit(FormKind::Contact)),
            Just(ModalMsg::Submit(FormKind::Subscribe)),
            Just(ModalMsg::Close),
            Just(ModalMsg::ToggleMenu),
        ]
    }

    proptest! {
        #[test]
        fn test_lock_tracks_overlay_visibility(msgs in prop::collection::vec(any_msg(), 0..40)) {
            let (mut controller, surface) = controller();
            for msg in msgs {
                controller.dispatch(msg);
                prop_assert_eq!(controller.scroll_locked(), controller.state().active_modal.is_visible());
            }

            // Acquire and release strictly alternate, starting with an acquire.
            let calls = surface.calls();
            for (i, call) in calls.iter().enumerate() {
                let expected = if i % 2 == 0 { SurfaceCall::Suspend } else { SurfaceCall::Restore };
                prop_assert_eq!(*call, expected);
            }
        }

        #[test]
        fn test_close_always_lands_on_none(msgs in prop::collection::vec(any_msg(), 0..40)) {
            let (mut controller, _) = controller();
            for msg in msgs {
                controller.dispatch(msg);
            }
            let menu_open = controller.state().menu_open;
            controller.close();
            prop_assert_eq!(controller.state().active_modal, ActiveModal::None);
            prop_assert!(!controller.scroll_locked());
            prop_assert!(!controller.close());
            prop_assert_eq!(controller.state().menu_open, menu_open);
        }
    }
}
