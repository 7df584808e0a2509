//! Callback payload capture.

use std::cell::RefCell;
use std::rc::Rc;

/// Collects every value passed to the handlers it hands out.
///
/// Clones share the same log, so a recorder can be kept by the test while
/// its [`sink`](Recorder::sink) is moved into a widget subscription.
///
/// ```
/// use widget_engine::logic::ToggleLogic;
/// use widget_engine::logic::CheckState;
/// use widget_engine::testing::Recorder;
///
/// let checks = Recorder::new();
/// let mut toggle = ToggleLogic::new();
/// toggle.on_check_changed(checks.sink());
/// toggle.click();
/// assert_eq!(checks.take(), vec![CheckState::Checked]);
/// ```
#[derive(Debug)]
pub struct Recorder<T> {
    log: Rc<RefCell<Vec<T>>>,
}

impl<T: 'static> Recorder<T> {
    pub fn new() -> Self {
        Self {
            log: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// A handler that appends its argument to this recorder.
    pub fn sink(&self) -> impl FnMut(T) + 'static {
        let log = Rc::clone(&self.log);
        move |value| log.borrow_mut().push(value)
    }

    /// Drain everything recorded so far.
    pub fn take(&self) -> Vec<T> {
        std::mem::take(&mut *self.log.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.log.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.borrow().is_empty()
    }
}

impl<T: Clone + 'static> Recorder<T> {
    /// Copy of everything recorded so far, leaving the log intact.
    pub fn events(&self) -> Vec<T> {
        self.log.borrow().clone()
    }
}

impl<T> Clone for Recorder<T> {
    fn clone(&self) -> Self {
        Self {
            log: Rc::clone(&self.log),
        }
    }
}

impl<T: 'static> Default for Recorder<T> {
    fn default() -> Self {
        Self::new()
    }
}
