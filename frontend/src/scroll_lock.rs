//! Page-level scroll suspension while an overlay is open.
//!
//! The lock is a single owned handle. It is engaged and released explicitly by
//! whoever owns it, and released on drop if the owner goes away first.

use log::warn;
use thiserror::Error;
use web_sys::CssStyleDeclaration;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScrollLockError {
    #[error("no window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("failed to update body style: {0}")]
    Style(String),
}

/// Something whose background scrolling can be switched off and back on.
pub trait ScrollSurface {
    fn suspend_scrolling(&self) -> Result<(), ScrollLockError>;
    fn restore_scrolling(&self) -> Result<(), ScrollLockError>;
}

/// The document body of the current window.
#[derive(Debug, Default, Clone, Copy)]
pub struct BodyScroll;

impl BodyScroll {
    fn body_style() -> Result<CssStyleDeclaration, ScrollLockError> {
        let window = web_sys::window().ok_or(ScrollLockError::NoWindow)?;
        let document = window.document().ok_or(ScrollLockError::NoDocument)?;
        let body = document.body().ok_or(ScrollLockError::NoBody)?;
        Ok(body.style())
    }
}

impl ScrollSurface for BodyScroll {
    fn suspend_scrolling(&self) -> Result<(), ScrollLockError> {
        Self::body_style()?
            .set_property("overflow", "hidden")
            .map_err(|e| ScrollLockError::Style(format!("{:?}", e)))
    }

    fn restore_scrolling(&self) -> Result<(), ScrollLockError> {
        // Removing the inline value hands control back to the stylesheet.
        Self::body_style()?
            .remove_property("overflow")
            .map(|_| ())
            .map_err(|e| ScrollLockError::Style(format!("{:?}", e)))
    }
}

pub struct ScrollLock<S: ScrollSurface> {
    surface: S,
    engaged: bool,
}

impl<S: ScrollSurface> ScrollLock<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            engaged: false,
        }
    }

    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    /// Suspends scrolling. Engaging an engaged lock does nothing.
    pub fn engage(&mut self) -> Result<(), ScrollLockError> {
        if self.engaged {
            return Ok(());
        }
        self.surface.suspend_scrolling()?;
        self.engaged = true;
        Ok(())
    }

    /// Restores scrolling. Releasing a released lock does nothing.
    ///
    /// The lock counts as released even if the surface rejects the write, so a
    /// later drop does not retry against a surface that already failed.
    pub fn release(&mut self) -> Result<(), ScrollLockError> {
        if !self.engaged {
            return Ok(());
        }
        self.engaged = false;
        self.surface.restore_scrolling()
    }
}

impl<S: ScrollSurface> Drop for ScrollLock<S> {
    fn drop(&mut self) {
        if let Err(e) = self.release() {
            warn!("Failed to restore scrolling on teardown: {}", e);
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum SurfaceCall {
        Suspend,
        Restore,
    }

    /// Records every call so tests can assert on the exact acquire/release order.
    #[derive(Clone, Default)]
    pub struct RecordingSurface {
        pub calls: Rc<RefCell<Vec<SurfaceCall>>>,
        pub fail_suspend: bool,
    }

    impl RecordingSurface {
        pub fn calls(&self) -> Vec<SurfaceCall> {
            self.calls.borrow().clone()
        }
    }

    impl ScrollSurface for RecordingSurface {
        fn suspend_scrolling(&self) -> Result<(), ScrollLockError> {
            if self.fail_suspend {
                return Err(ScrollLockError::NoBody);
            }
            self.calls.borrow_mut().push(SurfaceCall::Suspend);
            Ok(())
        }

        fn restore_scrolling(&self) -> Result<(), ScrollLockError> {
            self.calls.borrow_mut().push(SurfaceCall::Restore);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{RecordingSurface, SurfaceCall};
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_engage_and_release_hit_surface_once() {
        let surface = RecordingSurface::default();
        let mut lock = ScrollLock::new(surface.clone());

        lock.engage().unwrap();
        lock.engage().unwrap();
        assert!(lock.is_engaged());
        lock.release().unwrap();
        lock.release().unwrap();
        assert!(!lock.is_engaged());

        assert_eq!(surface.calls(), vec![SurfaceCall::Suspend, SurfaceCall::Restore]);
    }

    #[test]
    fn test_drop_releases_engaged_lock() {
        let surface = RecordingSurface::default();
        {
            let mut lock = ScrollLock::new(surface.clone());
            lock.engage().unwrap();
        }
        assert_eq!(surface.calls(), vec![SurfaceCall::Suspend, SurfaceCall::Restore]);
    }

    #[test]
    fn test_drop_without_engage_touches_nothing() {
        let surface = RecordingSurface::default();
        drop(ScrollLock::new(surface.clone()));
        assert!(surface.calls().is_empty());
    }

    #[test]
    fn test_failed_engage_leaves_lock_released() {
        let surface = RecordingSurface {
            fail_suspend: true,
            ..Default::default()
        };
        let mut lock = ScrollLock::new(surface.clone());

        assert_eq!(lock.engage(), Err(ScrollLockError::NoBody));
        assert!(!lock.is_engaged());
        drop(lock);
        assert!(surface.calls().is_empty());
    }
}
