// SPDX-License-Identifier: MPL-2.0
//! Lightbox navigation state machine.
//!
//! The navigator owns the open/closed state and the current position in an
//! ordered gallery. Everything visible goes through an injected
//! [`DisplaySurface`]; viewport size and scroll locking go through a
//! [`HostPage`].
//!
//! ```text
//! Closed --open(i)--> Open --close()--> Closed
//!                     Open --next()/previous()--> Open
//! Disabled (empty gallery): every operation is a no-op
//! ```

use std::fmt;

use crate::application::port::{DisplaySurface, HostPage};
use crate::config::GalleryConfig;
use crate::diagnostics::{DiagnosticsHandle, UserAction, WarningType};
use crate::domain::gallery::{GalleryItem, TierPolicy};
use crate::domain::ui::SwipeThreshold;

use super::input::{classify_swipe, click_direction, Direction, Key, Message, SwipeTracker};
use super::resolve::resolve_with_policy;

/// Errors raised by navigation requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationError {
    /// The gallery has no items to show.
    MissingResource,
    /// A request pointed outside the gallery.
    InvalidIndex { index: usize, len: usize },
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::MissingResource => write!(f, "gallery has no items"),
            NavigationError::InvalidIndex { index, len } => {
                write!(f, "index {index} is out of range for {len} gallery items")
            }
        }
    }
}

impl std::error::Error for NavigationError {}

/// What a request did to the navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Opened {
        index: usize,
    },
    Closed {
        index: usize,
    },
    Moved {
        from: usize,
        to: usize,
        direction: Direction,
    },
    /// Nothing changed.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Disabled,
    Closed,
    Open,
}

/// Snapshot of navigation state for rendering counters and controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationInfo {
    pub is_enabled: bool,
    pub is_open: bool,
    /// Position in the gallery (0-indexed). Kept across close.
    pub current_index: usize,
    pub item_count: usize,
}

/// Lightbox controller for one gallery.
pub struct GalleryNavigator<S, H> {
    items: Vec<GalleryItem>,
    surface: S,
    host: H,
    phase: Phase,
    current_index: usize,
    policy: TierPolicy,
    swipe: SwipeTracker,
    diagnostics: Option<DiagnosticsHandle>,
}

impl<S: DisplaySurface, H: HostPage> GalleryNavigator<S, H> {
    /// Creates a closed navigator at index 0.
    ///
    /// An empty gallery produces a disabled navigator instead of failing.
    pub fn new(items: Vec<GalleryItem>, surface: S, host: H) -> Self {
        let phase = if items.is_empty() {
            tracing::warn!("gallery has no items, lightbox disabled");
            Phase::Disabled
        } else {
            tracing::debug!(item_count = items.len(), "lightbox ready");
            Phase::Closed
        };

        Self {
            items,
            surface,
            host,
            phase,
            current_index: 0,
            policy: TierPolicy::default(),
            swipe: SwipeTracker::default(),
            diagnostics: None,
        }
    }

    /// Like [`new`](Self::new) but refuses an empty gallery.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::MissingResource`] if `items` is empty.
    pub fn try_new(items: Vec<GalleryItem>, surface: S, host: H) -> Result<Self, NavigationError> {
        if items.is_empty() {
            return Err(NavigationError::MissingResource);
        }
        Ok(Self::new(items, surface, host))
    }

    /// Builds a navigator with tier widths and swipe threshold from config.
    pub fn from_config(
        items: Vec<GalleryItem>,
        surface: S,
        host: H,
        config: &GalleryConfig,
    ) -> Self {
        let threshold = SwipeThreshold::new(
            config
                .swipe_threshold
                .unwrap_or(crate::config::DEFAULT_SWIPE_THRESHOLD),
        );
        Self::new(items, surface, host)
            .with_policy(TierPolicy::from_config(config))
            .with_swipe_threshold(threshold)
    }

    #[must_use]
    pub fn with_policy(mut self, policy: TierPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn with_swipe_threshold(mut self, threshold: SwipeThreshold) -> Self {
        self.swipe = SwipeTracker::new(threshold);
        self
    }

    /// Attaches a diagnostics sink. A disabled navigator reports itself
    /// immediately.
    #[must_use]
    pub fn with_diagnostics(mut self, handle: DiagnosticsHandle) -> Self {
        if self.phase == Phase::Disabled {
            handle.log_warning(
                WarningType::MissingResource,
                "gallery has no items, lightbox disabled",
            );
        }
        self.diagnostics = Some(handle);
        self
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.phase != Phase::Disabled
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase == Phase::Open
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    #[must_use]
    pub fn navigation_info(&self) -> NavigationInfo {
        NavigationInfo {
            is_enabled: self.is_enabled(),
            is_open: self.is_open(),
            current_index: self.current_index,
            item_count: self.items.len(),
        }
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Opens the lightbox on `index`. Reopening while open is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::InvalidIndex`] if `index` is out of range;
    /// state is left untouched.
    pub fn open(&mut self, index: usize) -> Result<Transition, NavigationError> {
        if self.phase == Phase::Disabled {
            return Ok(Transition::Ignored);
        }
        let len = self.items.len();
        if index >= len {
            tracing::warn!(index, len, "ignoring out-of-range lightbox index");
            if let Some(diagnostics) = &self.diagnostics {
                diagnostics.log_warning(
                    WarningType::InvalidIndex,
                    format!("index {index} of {len}"),
                );
            }
            return Err(NavigationError::InvalidIndex { index, len });
        }

        self.current_index = index;
        self.phase = Phase::Open;
        self.display_current();
        self.surface.show();
        self.host.set_scroll_locked(true);

        tracing::debug!(index, "lightbox opened");
        self.log_action(UserAction::OpenLightbox { index });
        Ok(Transition::Opened { index })
    }

    /// Closes the lightbox. Idempotent; the index is kept.
    pub fn close(&mut self) -> Transition {
        if self.phase != Phase::Open {
            return Transition::Ignored;
        }
        self.phase = Phase::Closed;
        self.surface.hide();
        self.host.set_scroll_locked(false);

        tracing::debug!(index = self.current_index, "lightbox closed");
        self.log_action(UserAction::CloseLightbox);
        Transition::Closed {
            index: self.current_index,
        }
    }

    /// Advances to the next item, wrapping from last to first.
    pub fn next(&mut self) -> Transition {
        self.step(Direction::Next)
    }

    /// Goes back one item, wrapping from first to last.
    pub fn previous(&mut self) -> Transition {
        self.step(Direction::Previous)
    }

    /// Image click: left half goes back, right half forward.
    pub fn handle_click(&mut self, click_x: f32, image_width: f32) -> Transition {
        self.step(click_direction(click_x, image_width))
    }

    /// Keyboard shortcuts, only while open.
    pub fn handle_key(&mut self, key: Key) -> Transition {
        if self.phase != Phase::Open {
            return Transition::Ignored;
        }
        match key {
            Key::Escape => self.close(),
            Key::ArrowLeft => self.previous(),
            Key::ArrowRight => self.next(),
            Key::Other => Transition::Ignored,
        }
    }

    /// Completed swipe. Leftward motion beyond the threshold goes forward.
    pub fn handle_swipe(&mut self, start_x: f32, end_x: f32) -> Transition {
        match classify_swipe(start_x, end_x, self.swipe.threshold()) {
            Some(direction) => self.step(direction),
            None => Transition::Ignored,
        }
    }

    pub fn touch_start(&mut self, x: f32) {
        if self.phase == Phase::Open {
            self.swipe.begin(x);
        }
    }

    /// Ends a touch interaction. Ignored without a matching start.
    pub fn touch_end(&mut self, x: f32) -> Transition {
        match self.swipe.finish(x) {
            Some(sample) => self.handle_swipe(sample.start_x, sample.end_x),
            None => Transition::Ignored,
        }
    }

    /// Single entry point for every input modality.
    ///
    /// # Errors
    ///
    /// Propagates [`NavigationError::InvalidIndex`] from thumbnail clicks.
    pub fn update(&mut self, message: Message) -> Result<Transition, NavigationError> {
        let transition = match message {
            Message::ThumbnailClicked(index) => return self.open(index),
            Message::CloseClicked | Message::BackdropClicked => self.close(),
            Message::PreviousClicked => self.previous(),
            Message::NextClicked => self.next(),
            Message::ImageClicked { x, width } => self.handle_click(x, width),
            Message::KeyPressed(key) => self.handle_key(key),
            Message::TouchStarted(x) => {
                self.touch_start(x);
                Transition::Ignored
            }
            Message::TouchEnded(x) => self.touch_end(x),
        };
        Ok(transition)
    }

    fn step(&mut self, direction: Direction) -> Transition {
        if self.phase != Phase::Open {
            return Transition::Ignored;
        }
        let len = self.items.len();
        let from = self.current_index;
        let to = match direction {
            Direction::Next => (from + 1) % len,
            Direction::Previous => (from + len - 1) % len,
        };
        self.current_index = to;
        self.display_current();

        tracing::debug!(from, to, ?direction, "lightbox moved");
        self.log_action(match direction {
            Direction::Next => UserAction::NavigateNext,
            Direction::Previous => UserAction::NavigatePrevious,
        });
        Transition::Moved { from, to, direction }
    }

    fn display_current(&mut self) {
        let Some(item) = self.items.get(self.current_index) else {
            return;
        };
        let viewport_width = self.host.viewport_width();
        let source = resolve_with_policy(item, viewport_width, &self.policy);
        if source.is_fallback() && !item.responsive_candidates().is_empty() {
            tracing::debug!(
                index = self.current_index,
                viewport_width,
                "preferred tier missing, using fallback image"
            );
        }
        self.surface.set_image(source.url(), item.alt_text());
        self.surface.set_caption(item.caption());
    }

    fn log_action(&self, action: UserAction) {
        if let Some(diagnostics) = &self.diagnostics {
            diagnostics.log_action(action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{DiagnosticEventKind, DiagnosticsCollector};
    use crate::domain::gallery::ResponsiveCandidate;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Show,
        Hide,
        Image(String, String),
        Caption(Option<String>),
    }

    #[derive(Default)]
    struct RecordingSurface {
        calls: Vec<Call>,
    }

    impl DisplaySurface for RecordingSurface {
        fn show(&mut self) {
            self.calls.push(Call::Show);
        }

        fn hide(&mut self) {
            self.calls.push(Call::Hide);
        }

        fn set_image(&mut self, url: &str, alt_text: &str) {
            self.calls
                .push(Call::Image(url.to_string(), alt_text.to_string()));
        }

        fn set_caption(&mut self, caption: Option<&str>) {
            self.calls.push(Call::Caption(caption.map(str::to_string)));
        }
    }

    struct FakeHost {
        width: u32,
        scroll_locked: bool,
    }

    impl FakeHost {
        fn with_width(width: u32) -> Self {
            Self {
                width,
                scroll_locked: false,
            }
        }
    }

    impl HostPage for FakeHost {
        fn viewport_width(&self) -> u32 {
            self.width
        }

        fn set_scroll_locked(&mut self, locked: bool) {
            self.scroll_locked = locked;
        }
    }

    fn items(n: usize) -> Vec<GalleryItem> {
        (0..n)
            .map(|i| {
                GalleryItem::new(format!("img-{i}.jpg"), format!("photo {i}")).with_candidates(
                    vec![
                        ResponsiveCandidate::new(format!("img-{i}-1200.webp"), 1200),
                        ResponsiveCandidate::new(format!("img-{i}-2048.webp"), 2048),
                    ],
                )
            })
            .collect()
    }

    fn navigator(n: usize) -> GalleryNavigator<RecordingSurface, FakeHost> {
        GalleryNavigator::new(items(n), RecordingSurface::default(), FakeHost::with_width(1024))
    }

    fn last_image(nav: &GalleryNavigator<RecordingSurface, FakeHost>) -> Option<String> {
        nav.surface().calls.iter().rev().find_map(|call| match call {
            Call::Image(url, _) => Some(url.clone()),
            _ => None,
        })
    }

    #[test]
    fn starts_closed_at_zero() {
        let nav = navigator(3);
        let info = nav.navigation_info();
        assert!(info.is_enabled);
        assert!(!info.is_open);
        assert_eq!(info.current_index, 0);
        assert_eq!(info.item_count, 3);
    }

    #[test]
    fn open_displays_medium_tier_and_locks_scroll() {
        let mut nav = navigator(3);
        assert_eq!(nav.open(1), Ok(Transition::Opened { index: 1 }));
        assert!(nav.is_open());
        assert_eq!(nav.current_index(), 1);
        assert_eq!(last_image(&nav).as_deref(), Some("img-1-1200.webp"));
        assert!(nav.surface().calls.contains(&Call::Show));
        assert!(nav.host().scroll_locked);
    }

    #[test]
    fn next_wraps_from_last_to_first() {
        let mut nav = navigator(3);
        nav.open(2).expect("open");
        assert_eq!(
            nav.next(),
            Transition::Moved {
                from: 2,
                to: 0,
                direction: Direction::Next
            }
        );
        assert_eq!(last_image(&nav).as_deref(), Some("img-0-1200.webp"));
    }

    #[test]
    fn previous_wraps_from_first_to_last() {
        let mut nav = navigator(3);
        nav.open(0).expect("open");
        nav.previous();
        assert_eq!(nav.current_index(), 2);
    }

    #[test]
    fn single_item_next_stays_put() {
        let mut nav = navigator(1);
        nav.open(0).expect("open");
        nav.next();
        assert_eq!(nav.current_index(), 0);
        nav.previous();
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn navigation_while_closed_is_a_no_op() {
        let mut nav = navigator(3);
        assert_eq!(nav.next(), Transition::Ignored);
        assert_eq!(nav.previous(), Transition::Ignored);
        assert_eq!(nav.handle_key(Key::ArrowRight), Transition::Ignored);
        assert_eq!(nav.current_index(), 0);
        assert!(nav.surface().calls.is_empty());
    }

    #[test]
    fn close_keeps_index_and_unlocks_scroll() {
        let mut nav = navigator(3);
        nav.open(2).expect("open");
        assert_eq!(nav.close(), Transition::Closed { index: 2 });
        assert!(!nav.is_open());
        assert_eq!(nav.current_index(), 2);
        assert!(!nav.host().scroll_locked);
        assert_eq!(nav.close(), Transition::Ignored);
    }

    #[test]
    fn out_of_range_open_leaves_state_untouched() {
        let mut nav = navigator(3);
        nav.open(1).expect("open");
        assert_eq!(
            nav.open(3),
            Err(NavigationError::InvalidIndex { index: 3, len: 3 })
        );
        assert!(nav.is_open());
        assert_eq!(nav.current_index(), 1);
    }

    #[test]
    fn reopen_at_other_index_is_accepted() {
        let mut nav = navigator(4);
        nav.open(1).expect("open");
        assert_eq!(nav.open(3), Ok(Transition::Opened { index: 3 }));
        assert_eq!(nav.current_index(), 3);
    }

    #[test]
    fn keyboard_shortcuts() {
        let mut nav = navigator(3);
        nav.open(1).expect("open");
        nav.handle_key(Key::ArrowRight);
        assert_eq!(nav.current_index(), 2);
        nav.handle_key(Key::ArrowLeft);
        assert_eq!(nav.current_index(), 1);
        assert_eq!(nav.handle_key(Key::Other), Transition::Ignored);
        nav.handle_key(Key::Escape);
        assert!(!nav.is_open());
    }

    #[test]
    fn click_halves_navigate() {
        let mut nav = navigator(3);
        nav.open(1).expect("open");
        nav.handle_click(10.0, 100.0);
        assert_eq!(nav.current_index(), 0);
        nav.handle_click(90.0, 100.0);
        assert_eq!(nav.current_index(), 1);
    }

    #[test]
    fn swipes_follow_threshold() {
        let mut nav = navigator(3);
        nav.open(1).expect("open");
        nav.handle_swipe(100.0, 40.0);
        assert_eq!(nav.current_index(), 2);
        nav.handle_swipe(40.0, 100.0);
        assert_eq!(nav.current_index(), 1);
        assert_eq!(nav.handle_swipe(100.0, 70.0), Transition::Ignored);
        assert_eq!(nav.current_index(), 1);
    }

    #[test]
    fn touch_end_without_start_is_ignored() {
        let mut nav = navigator(3);
        nav.open(0).expect("open");
        assert_eq!(nav.touch_end(0.0), Transition::Ignored);
        nav.touch_start(300.0);
        assert!(matches!(nav.touch_end(100.0), Transition::Moved { to: 1, .. }));
        assert_eq!(nav.touch_end(0.0), Transition::Ignored);
    }

    #[test]
    fn update_routes_controls() {
        let mut nav = navigator(3);
        assert_eq!(
            nav.update(Message::ThumbnailClicked(2)),
            Ok(Transition::Opened { index: 2 })
        );
        nav.update(Message::NextClicked).expect("next");
        assert_eq!(nav.current_index(), 0);
        nav.update(Message::PreviousClicked).expect("previous");
        assert_eq!(nav.current_index(), 2);
        assert_eq!(
            nav.update(Message::BackdropClicked),
            Ok(Transition::Closed { index: 2 })
        );
        assert_eq!(
            nav.update(Message::ThumbnailClicked(9)),
            Err(NavigationError::InvalidIndex { index: 9, len: 3 })
        );
    }

    #[test]
    fn empty_gallery_is_inert() {
        let mut nav = navigator(0);
        assert!(!nav.is_enabled());
        assert_eq!(nav.open(0), Ok(Transition::Ignored));
        assert_eq!(nav.next(), Transition::Ignored);
        assert_eq!(nav.close(), Transition::Ignored);
        assert_eq!(nav.handle_key(Key::Escape), Transition::Ignored);
        assert!(nav.surface().calls.is_empty());
        assert!(!nav.host().scroll_locked);
    }

    #[test]
    fn try_new_rejects_empty_gallery() {
        let result = GalleryNavigator::try_new(
            Vec::new(),
            RecordingSurface::default(),
            FakeHost::with_width(800),
        );
        assert!(matches!(result, Err(NavigationError::MissingResource)));
    }

    #[test]
    fn blank_caption_is_hidden() {
        let gallery = vec![
            GalleryItem::new("a.jpg", "a").with_caption("   "),
            GalleryItem::new("b.jpg", "b").with_caption("Keynote"),
        ];
        let mut nav =
            GalleryNavigator::new(gallery, RecordingSurface::default(), FakeHost::with_width(800));
        nav.open(0).expect("open");
        assert!(nav.surface().calls.contains(&Call::Caption(None)));
        nav.next();
        assert_eq!(
            nav.surface().calls.last(),
            Some(&Call::Caption(Some("Keynote".to_string())))
        );
    }

    #[test]
    fn viewport_is_read_at_each_display() {
        let mut nav = GalleryNavigator::new(
            items(2),
            RecordingSurface::default(),
            FakeHost::with_width(2560),
        );
        nav.open(0).expect("open");
        assert_eq!(last_image(&nav).as_deref(), Some("img-0-2048.webp"));
    }

    #[test]
    fn diagnostics_receive_actions_and_warnings() {
        let mut collector = DiagnosticsCollector::default();
        let mut nav = navigator(2).with_diagnostics(collector.handle());
        nav.open(0).expect("open");
        nav.next();
        let _ = nav.open(5);
        nav.close();
        collector.process_pending();

        assert_eq!(collector.len(), 4);
        let warnings = collector
            .iter()
            .filter(|event| matches!(event.kind, DiagnosticEventKind::Warning { .. }))
            .count();
        assert_eq!(warnings, 1);
    }

    #[test]
    fn disabled_navigator_reports_missing_resource() {
        let mut collector = DiagnosticsCollector::default();
        let _nav = navigator(0).with_diagnostics(collector.handle());
        collector.process_pending();
        assert_eq!(collector.len(), 1);
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            NavigationError::InvalidIndex { index: 4, len: 2 }.to_string(),
            "index 4 is out of range for 2 gallery items"
        );
        assert_eq!(
            NavigationError::MissingResource.to_string(),
            "gallery has no items"
        );
    }
}
