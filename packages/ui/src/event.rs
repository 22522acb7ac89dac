//! Normalized page events.
//!
//! The browser adapter (or a test) translates raw listener callbacks into
//! [`UiEvent`] values and feeds them to [`crate::Page::dispatch`]. Events
//! are facts about what happened on the page; controllers decide what to do
//! with them.

/// Which lightbox a modal event concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Video,
    Image,
}

/// A delayed action scheduled through [`crate::Dom::schedule`].
///
/// Fired tasks come back as [`UiEvent::TimerFired`]; the controller that
/// scheduled a task is the one that reacts to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTask {
    /// Arms the menu's outside-click dismissal shortly after it opens, so
    /// the opening click itself never closes the menu.
    ArmMenuOutsideClick,
    /// Opens the composed webmail URL and resets the contact form.
    OpenCompose,
    /// Hides the contact form's confirmation message again.
    HideConfirmation,
}

/// Keyboard input, reduced to what the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other,
}

/// A normalized browser event, parameterized over the element handle type
/// of the active [`crate::Dom`] implementation.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent<E> {
    /// The viewport scrolled.
    Scroll,
    /// The viewport was resized.
    Resize,
    /// A key went down anywhere in the document.
    KeyDown(Key),
    /// A click anywhere in the document (used for outside-click dismissal;
    /// the adapter suppresses it for the menu trigger, which stops
    /// propagation).
    DocumentClick { target: E },
    /// The hamburger trigger was clicked.
    MenuTriggerClick,
    /// A link inside the navigation panel was clicked.
    NavLinkClick,
    /// A same-page fragment link was clicked; `fragment` is the raw `href`
    /// value, `"#"` included.
    AnchorClick { fragment: String },
    /// A modal launcher was clicked.
    ModalTriggerClick(ModalKind),
    /// A modal close button was clicked.
    ModalCloseClick(ModalKind),
    /// A click landed somewhere on a modal overlay; `target` distinguishes
    /// the backdrop from content inside it.
    ModalOverlayClick { kind: ModalKind, target: E },
    /// The contact form was submitted (default submission already
    /// prevented by the adapter).
    FormSubmit,
    /// An observed element's viewport intersection changed.
    Intersection { target: E, is_intersecting: bool },
    /// A scheduled one-shot task fired.
    TimerFired(TimerTask),
}
